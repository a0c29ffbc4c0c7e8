use crate::styling::css::{CssRule, MediaRule};
use crate::styling::responsive::{MergedStyle, StyleProps};
use crate::styling::sprinkles::Schema;
use crate::styling::theme::ThemeVariant;

/// One entry in a named style composition. Parts concatenate in author order;
/// conflict resolution is left entirely to the cascade at paint time.
#[derive(Clone, Debug)]
pub enum Part {
    /// Atomic class references from a schema.
    Classes(Vec<String>),
    /// A one-off rule attached to the composition's own class.
    Props(StyleProps),
    /// A resolved responsive rule attached to the composition's own class.
    Merged(MergedStyle),
    /// A rule nested under the composition's own class, for descendant and
    /// state selectors written with `&`.
    Nested(CssRule),
}

#[derive(Clone, Debug)]
enum Item {
    Rule(CssRule),
    Media(MediaRule),
}

/// The explicit composition root. Every font face, keyframe set, global rule,
/// schema table, theme variant, and component style registers here, and
/// [`Stylesheet::render`] emits them in registration order.
#[derive(Debug, Default)]
pub struct Stylesheet {
    items: Vec<Item>,
}

impl Stylesheet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rule(&mut self, rule: CssRule) {
        self.items.push(Item::Rule(rule));
    }

    pub fn media(&mut self, media: MediaRule) {
        self.items.push(Item::Media(media));
    }

    pub fn global(&mut self, selector: &str, props: StyleProps) {
        self.rule(CssRule::new(selector).props(&props));
    }

    pub fn global_merged(&mut self, selector: &str, merged: &MergedStyle) {
        let (base, media) = merged.rules(selector);
        if let Some(rule) = base {
            self.rule(rule);
        }
        for block in media {
            self.media(block);
        }
    }

    pub fn font_face(&mut self, family: &str, src: &str, weight: &str) {
        self.rule(
            CssRule::new("@font-face")
                .property("font-family", family)
                .property("src", src)
                .property("font-style", "normal")
                .property("font-weight", weight)
                .property("font-display", "fallback"),
        );
    }

    /// Registers a keyframe animation and returns its animation name.
    pub fn keyframes(&mut self, name: &str, frames: &[(&str, StyleProps)]) -> String {
        let mut rule = CssRule::new(&format!("@keyframes {name}"));
        for (stop, props) in frames {
            rule = rule.child(CssRule::new(stop).props(props));
        }
        self.rule(rule);
        name.to_string()
    }

    pub fn include_schema(&mut self, schema: &Schema) {
        let (base, media) = schema.rules();
        for rule in base {
            self.rule(rule);
        }
        for block in media {
            self.media(block);
        }
    }

    pub fn theme(&mut self, variant: &ThemeVariant) {
        self.rule(variant.rule());
    }

    /// Composes a named style set and returns its class attribute value:
    /// atomic class references in author order, with the composition's own
    /// class included once if any local part exists.
    pub fn style(&mut self, name: &str, parts: Vec<Part>) -> String {
        let mut classes: Vec<String> = Vec::new();
        let mut local = false;
        let selector = format!(".{name}");
        for part in parts {
            match part {
                Part::Classes(list) => classes.extend(list),
                Part::Props(props) => {
                    if !local {
                        classes.push(name.to_string());
                        local = true;
                    }
                    self.rule(CssRule::new(&selector).props(&props));
                }
                Part::Merged(merged) => {
                    if !local {
                        classes.push(name.to_string());
                        local = true;
                    }
                    let (base, media) = merged.rules(&selector);
                    if let Some(rule) = base {
                        self.rule(rule);
                    }
                    for block in media {
                        self.media(block);
                    }
                }
                Part::Nested(rule) => {
                    if !local {
                        classes.push(name.to_string());
                        local = true;
                    }
                    self.rule(CssRule::new(&selector).child(rule));
                }
            }
        }
        classes.join(" ")
    }

    pub fn render(&self) -> String {
        self.items
            .iter()
            .map(|item| match item {
                Item::Rule(rule) => rule.render(),
                Item::Media(media) => media.render(),
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}
