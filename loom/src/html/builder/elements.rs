use crate::html::Element;

// Helper functions for common elements
pub fn element(tag: &str) -> Element {
    Element::new(tag)
}

pub fn a() -> Element {
    Element::new("a")
}

pub fn article() -> Element {
    Element::new("article")
}

pub fn button() -> Element {
    Element::new("button")
}

pub fn div() -> Element {
    Element::new("div")
}

pub fn footer() -> Element {
    Element::new("footer")
}

pub fn h1() -> Element {
    Element::new("h1")
}

pub fn h2() -> Element {
    Element::new("h2")
}

pub fn h3() -> Element {
    Element::new("h3")
}

pub fn header() -> Element {
    Element::new("header")
}

pub fn i() -> Element {
    Element::new("i")
}

pub fn img() -> Element {
    Element::new("img")
}

pub fn li() -> Element {
    Element::new("li")
}

pub fn nav() -> Element {
    Element::new("nav")
}

pub fn p() -> Element {
    Element::new("p")
}

pub fn section() -> Element {
    Element::new("section")
}

pub fn span() -> Element {
    Element::new("span")
}

pub fn time() -> Element {
    Element::new("time")
}

pub fn ul() -> Element {
    Element::new("ul")
}
