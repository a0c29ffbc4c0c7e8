const VOID_TAGS: [&str; 6] = ["br", "hr", "img", "input", "link", "meta"];

#[derive(Clone, Debug)]
pub struct Element {
    tag: String,
    attributes: Vec<(String, String)>,
    children: Vec<Element>,
    text_content: Option<String>,
    raw: bool,
}

impl Element {
    pub(crate) fn new(tag: &str) -> Self {
        Self {
            tag: tag.to_string(),
            attributes: Vec::new(),
            children: Vec::new(),
            text_content: None,
            raw: false,
        }
    }

    pub fn attr(mut self, key: &str, value: &str) -> Self {
        if let Some(existing) = self.attributes.iter_mut().find(|(k, _)| k == key) {
            existing.1 = value.to_string();
        } else {
            self.attributes.push((key.to_string(), value.to_string()));
        }
        self
    }

    pub fn class(self, class: &str) -> Self {
        let mut classes = self
            .attributes
            .iter()
            .find(|(k, _)| k == "class")
            .map(|(_, v)| v.clone())
            .unwrap_or_default();
        if !classes.is_empty() {
            classes.push(' ');
        }
        classes.push_str(class);
        self.attr("class", &classes)
    }

    pub fn text(mut self, text: &str) -> Self {
        self.text_content = Some(text.to_string());
        self
    }

    pub fn child(mut self, child: Element) -> Self {
        self.children.push(child);
        self
    }

    pub fn child_opt(mut self, child: Option<Element>) -> Self {
        if let Some(child) = child {
            self.children.push(child);
        }
        self
    }

    pub fn children(mut self, children: impl IntoIterator<Item = Element>) -> Self {
        self.children.extend(children);
        self
    }

    pub fn on_click(self, js_code: &str) -> Self {
        self.attr("onclick", js_code)
    }

    /// Insert text content as-is, without escaping.
    pub fn raw(mut self) -> Self {
        self.raw = true;
        self
    }

    pub fn render(&self) -> String {
        let mut html = format!("<{}", self.tag);

        for (key, value) in &self.attributes {
            html.push_str(&format!(" {}=\"{}\"", key, value));
        }

        html.push('>');

        if VOID_TAGS.contains(&self.tag.as_str()) {
            return html;
        }

        if let Some(text) = &self.text_content {
            if self.raw {
                html.push_str(text);
            } else {
                html.push_str(&html_escape(text));
            }
        }

        for child in &self.children {
            html.push_str(&child.render());
        }

        html.push_str(&format!("</{}>", self.tag));
        html
    }
}

fn html_escape(s: &str) -> String {
    s.replace("&", "&amp;")
        .replace("<", "&lt;")
        .replace(">", "&gt;")
        .replace("\"", "&quot;")
        .replace("'", "&#39;")
}
