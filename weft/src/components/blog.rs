use crate::data::posts::Post;
use crate::date::{format_date, parse_date};
use crate::styles::SiteStyles;
use anyhow::Result;
use loom::prelude::*;

pub fn blog_index(styles: &SiteStyles, posts: &[Post]) -> Result<Element> {
    let mut list = ul().class(&styles.blog.entry_list);
    for post in posts {
        list = list.child(entry(styles, post)?);
    }
    Ok(section().class(&styles.blog.entry_list_container).child(
        div()
            .child(h2().class(&styles.blog.list_heading).text("Blog"))
            .child(list),
    ))
}

fn entry(styles: &SiteStyles, post: &Post) -> Result<Element> {
    let date = parse_date(post.date)?;
    Ok(li().class(&styles.blog.entry).child(
        a().attr("href", &format!("/blog/{}/", post.slug))
            .child(h3().class(&styles.blog.entry_title).text(post.title))
            .child(
                time()
                    .class(&styles.blog.entry_date)
                    .attr("datetime", post.date)
                    .text(&format_date(&date)),
            )
            .child(
                p().class(&styles.blog.entry_description)
                    .text(post.description),
            ),
    ))
}

pub fn blog_post(styles: &SiteStyles, post: &Post) -> Result<Element> {
    let date = parse_date(post.date)?;
    Ok(div().class(&styles.blog.post_container).child(
        article()
            .class(&styles.blog.post)
            .child(h1().class(&styles.blog.post_heading).text(post.title))
            .child(
                div().class(&styles.blog.post_details).child(
                    time()
                        .attr("datetime", post.date)
                        .text(&format_date(&date)),
                ),
            )
            .child(div().class(&styles.blog.divider))
            .child(div().class(&styles.blog.post_content).raw().text(post.body)),
    ))
}
