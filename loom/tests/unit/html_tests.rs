use loom::html::{Link, PageBuilder, Script, a, div, img, p, span};

#[test]
fn test_render_nested_elements() {
    let html = div()
        .class("app")
        .child(p().text("hello"))
        .child(span().text("world"))
        .render();
    assert_eq!(
        html,
        "<div class=\"app\"><p>hello</p><span>world</span></div>"
    );
}

#[test]
fn test_class_appends() {
    let html = div().class("button").class("round-button").render();
    assert_eq!(html, "<div class=\"button round-button\"></div>");
}

#[test]
fn test_attr_replaces_existing_value() {
    let html = a().attr("href", "/old").attr("href", "/blog").render();
    assert_eq!(html, "<a href=\"/blog\"></a>");
}

#[test]
fn test_text_is_escaped_unless_raw() {
    assert_eq!(p().text("a < b").render(), "<p>a &lt; b</p>");
    assert_eq!(p().text("<em>a</em>").raw().render(), "<p><em>a</em></p>");
}

#[test]
fn test_void_elements_have_no_closing_tag() {
    let html = img().attr("src", "/images/logo.png").render();
    assert_eq!(html, "<img src=\"/images/logo.png\">");
}

#[test]
fn test_page_builder_emits_links_scripts_and_title() {
    let page = PageBuilder::new()
        .title("Experience")
        .description("Work history")
        .links(vec![Link::new("stylesheet", "/assets/css/style.css")])
        .scripts(vec![Script::new("/assets/js/theme.js")])
        .content(div().class("app").child(p().text("content")))
        .build();

    assert!(page.contains("<title>"));
    assert!(page.contains("Experience"));
    assert!(page.contains("href=\"/assets/css/style.css\""));
    assert!(page.contains("src=\"/assets/js/theme.js\""));
    assert!(page.contains("name=\"description\""));
}
