use crate::styling::responsive::StyleProps;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CssRule {
    selector: String,
    properties: Vec<(String, String)>,
    children: Vec<CssRule>,
}

impl CssRule {
    pub fn new(selector: &str) -> Self {
        Self {
            selector: selector.to_string(),
            properties: Vec::new(),
            children: Vec::new(),
        }
    }

    pub fn property(mut self, name: &str, value: &str) -> Self {
        self.properties.push((name.to_string(), value.to_string()));
        self
    }

    pub fn props(mut self, props: &StyleProps) -> Self {
        for (name, value) in props.iter() {
            self.properties.push((name.to_string(), value.to_string()));
        }
        self
    }

    pub fn child(mut self, rule: CssRule) -> Self {
        self.children.push(rule);
        self
    }

    pub fn selector(&self) -> &str {
        &self.selector
    }

    pub fn render(&self) -> String {
        self.render_internal(0)
    }

    pub(crate) fn render_internal(&self, indent: usize) -> String {
        let indent_str = "    ".repeat(indent);
        let inner_indent = "    ".repeat(indent + 1);

        let mut css = String::new();

        css.push_str(&format!("{}{} {{\n", indent_str, self.selector));

        for (name, value) in &self.properties {
            css.push_str(&format!("{}{}: {};\n", inner_indent, name, value));
        }

        for child in &self.children {
            css.push_str(&child.render_internal(indent + 1));
        }

        css.push_str(&format!("{}}}\n", indent_str));
        css
    }
}

/// A group of rules gated behind one media-query predicate. An empty block is
/// legal and renders as a no-op.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MediaRule {
    query: String,
    rules: Vec<CssRule>,
}

impl MediaRule {
    pub fn new(query: &str) -> Self {
        Self {
            query: query.to_string(),
            rules: Vec::new(),
        }
    }

    pub fn rule(mut self, rule: CssRule) -> Self {
        self.rules.push(rule);
        self
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub fn render(&self) -> String {
        let mut css = format!("@media {} {{\n", self.query);
        for rule in &self.rules {
            css.push_str(&rule.render_internal(1));
        }
        css.push_str("}\n");
        css
    }
}

/// Lowercases camelCase identifiers into the kebab-case form used for CSS
/// property names, custom properties, and generated class names.
pub fn kebab_case(input: &str) -> String {
    let mut out = String::with_capacity(input.len() + 4);
    for ch in input.chars() {
        if ch.is_ascii_uppercase() {
            if !out.is_empty() {
                out.push('-');
            }
            out.push(ch.to_ascii_lowercase());
        } else {
            out.push(ch);
        }
    }
    out
}
