use crate::styling::css::{CssRule, MediaRule, kebab_case};
use crate::styling::error::DefinitionError;
use crate::styling::responsive::Breakpoint;
use crate::styling::scale::Scale;
use crate::styling::theme::ThemeContract;
use strum::IntoEnumIterator;

/// A configured value for one property: either a single value applying at the
/// default tier, or an explicit per-breakpoint span. A span without a desktop
/// entry leaves desktop inheriting the tablet value through the cascade.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ResponsiveValue {
    Scalar(String),
    Span {
        mobile: String,
        tablet: Option<String>,
        desktop: Option<String>,
    },
}

pub fn one(value: &str) -> ResponsiveValue {
    ResponsiveValue::Scalar(value.to_string())
}

pub fn span2(mobile: &str, tablet: &str) -> ResponsiveValue {
    ResponsiveValue::Span {
        mobile: mobile.to_string(),
        tablet: Some(tablet.to_string()),
        desktop: None,
    }
}

pub fn span3(mobile: &str, tablet: &str, desktop: &str) -> ResponsiveValue {
    ResponsiveValue::Span {
        mobile: mobile.to_string(),
        tablet: Some(tablet.to_string()),
        desktop: Some(desktop.to_string()),
    }
}

#[derive(Clone, Debug)]
struct PropertyDef {
    name: String,
    css_property: String,
    values: Vec<(String, String)>,
    responsive: bool,
}

impl PropertyDef {
    fn new(name: &str, values: Vec<(String, String)>, responsive: bool) -> Self {
        Self {
            name: name.to_string(),
            css_property: kebab_case(name),
            values,
            responsive,
        }
    }

    fn value(&self, key: &str) -> Option<&str> {
        self.values
            .iter()
            .find(|(existing, _)| existing == key)
            .map(|(_, value)| value.as_str())
    }

    /// Class naming is total and stable over the schema: one class per
    /// (property, value, tier) with the mobile tier unsuffixed.
    fn class_name(&self, key: &str, tier: Breakpoint) -> String {
        format!(
            "{}-{}{}",
            self.css_property,
            kebab_case(key),
            tier.class_suffix()
        )
    }
}

#[derive(Clone, Debug, Default)]
pub struct SchemaBuilder {
    properties: Vec<PropertyDef>,
    shorthands: Vec<(String, Vec<String>)>,
}

impl SchemaBuilder {
    /// Registers a responsive property whose value keys are the CSS values
    /// themselves, e.g. `display: ["none", "block", "flex"]`.
    pub fn responsive_values(mut self, name: &str, values: &[&str]) -> Self {
        let values = values
            .iter()
            .map(|value| ((*value).to_string(), (*value).to_string()))
            .collect();
        self.properties.push(PropertyDef::new(name, values, true));
        self
    }

    /// Registers a responsive property drawing its legal values from a scale.
    pub fn responsive_scale(mut self, name: &str, scale: &Scale) -> Self {
        let values = scale
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect();
        self.properties.push(PropertyDef::new(name, values, true));
        self
    }

    /// Registers a responsive color property whose value keys are the theme
    /// contract's roles, resolved to symbolic `var()` references.
    pub fn responsive_vars(mut self, name: &str, contract: &ThemeContract) -> Self {
        let values = contract
            .vars()
            .map(|(role, var)| (role.to_string(), var))
            .collect();
        self.properties.push(PropertyDef::new(name, values, true));
        self
    }

    /// Registers a property with no tier variation.
    pub fn fixed_values(mut self, name: &str, values: &[&str]) -> Self {
        let values = values
            .iter()
            .map(|value| ((*value).to_string(), (*value).to_string()))
            .collect();
        self.properties.push(PropertyDef::new(name, values, false));
        self
    }

    pub fn shorthand(mut self, name: &str, targets: &[&str]) -> Self {
        let targets = targets.iter().map(|target| (*target).to_string()).collect();
        self.shorthands.push((name.to_string(), targets));
        self
    }

    pub fn build(self) -> Result<Schema, DefinitionError> {
        let mut seen: Vec<&str> = Vec::new();
        for property in &self.properties {
            if property.values.is_empty() {
                return Err(DefinitionError::EmptyValueSet {
                    property: property.name.clone(),
                });
            }
            for (index, (key, _)) in property.values.iter().enumerate() {
                if property.values[..index].iter().any(|(prior, _)| prior == key) {
                    return Err(DefinitionError::DuplicateValue {
                        property: property.name.clone(),
                        value: key.clone(),
                    });
                }
            }
            if seen.contains(&property.name.as_str()) {
                return Err(DefinitionError::DuplicateSchemaEntry {
                    name: property.name.clone(),
                });
            }
            seen.push(&property.name);
        }
        for (name, targets) in &self.shorthands {
            if seen.contains(&name.as_str()) {
                return Err(DefinitionError::DuplicateSchemaEntry { name: name.clone() });
            }
            for target in targets {
                if !self.properties.iter().any(|p| &p.name == target) {
                    return Err(DefinitionError::UnknownShorthandTarget {
                        shorthand: name.clone(),
                        property: target.clone(),
                    });
                }
            }
        }
        Ok(Schema {
            properties: self.properties,
            shorthands: self.shorthands,
        })
    }
}

/// The atomic-class schema: a validated set of properties, legal values, and
/// shorthands from which one reusable class exists per (property, value, tier)
/// combination.
#[derive(Clone, Debug)]
pub struct Schema {
    properties: Vec<PropertyDef>,
    shorthands: Vec<(String, Vec<String>)>,
}

impl Schema {
    pub fn builder() -> SchemaBuilder {
        SchemaBuilder::default()
    }

    fn property(&self, name: &str) -> Option<&PropertyDef> {
        self.properties.iter().find(|p| p.name == name)
    }

    fn shorthand_targets(&self, name: &str) -> Option<&[String]> {
        self.shorthands
            .iter()
            .find(|(existing, _)| existing == name)
            .map(|(_, targets)| targets.as_slice())
    }

    /// Resolves a configuration to the minimal ordered set of atomic class
    /// names implementing it. Deterministic: identical config yields an
    /// identical sequence.
    pub fn apply(
        &self,
        config: &[(&str, ResponsiveValue)],
    ) -> Result<Vec<String>, DefinitionError> {
        let mut classes = Vec::new();
        for (key, value) in config {
            let targets: Vec<&str> = match self.shorthand_targets(key) {
                Some(targets) => targets.iter().map(String::as_str).collect(),
                None => vec![key],
            };
            for target in targets {
                let property =
                    self.property(target)
                        .ok_or_else(|| DefinitionError::UnknownProperty {
                            property: target.to_string(),
                        })?;
                match value {
                    ResponsiveValue::Scalar(v) => {
                        classes.push(self.select(property, v, Breakpoint::Mobile)?);
                    }
                    ResponsiveValue::Span {
                        mobile,
                        tablet,
                        desktop,
                    } => {
                        if !property.responsive {
                            return Err(DefinitionError::NotResponsive {
                                property: property.name.clone(),
                            });
                        }
                        classes.push(self.select(property, mobile, Breakpoint::Mobile)?);
                        if let Some(v) = tablet {
                            classes.push(self.select(property, v, Breakpoint::Tablet)?);
                        }
                        if let Some(v) = desktop {
                            classes.push(self.select(property, v, Breakpoint::Desktop)?);
                        }
                    }
                }
            }
        }
        Ok(classes)
    }

    fn select(
        &self,
        property: &PropertyDef,
        key: &str,
        tier: Breakpoint,
    ) -> Result<String, DefinitionError> {
        if property.value(key).is_none() {
            return Err(DefinitionError::UnknownValue {
                property: property.name.clone(),
                value: key.to_string(),
            });
        }
        Ok(property.class_name(key, tier))
    }

    /// Emits the full atomic class table: every base-tier class first, then
    /// one media block per wider tier in narrow-to-wide order so the cascade
    /// resolves overlaps the same way the responsive resolver does.
    pub fn rules(&self) -> (Vec<CssRule>, Vec<MediaRule>) {
        let mut base = Vec::new();
        for property in &self.properties {
            for (key, css_value) in &property.values {
                base.push(
                    CssRule::new(&format!(".{}", property.class_name(key, Breakpoint::Mobile)))
                        .property(&property.css_property, css_value),
                );
            }
        }

        let mut media = Vec::new();
        for tier in Breakpoint::iter() {
            let Some(query) = tier.media_query() else {
                continue;
            };
            let mut block = MediaRule::new(query);
            for property in self.properties.iter().filter(|p| p.responsive) {
                for (key, css_value) in &property.values {
                    block = block.rule(
                        CssRule::new(&format!(".{}", property.class_name(key, tier)))
                            .property(&property.css_property, css_value),
                    );
                }
            }
            media.push(block);
        }
        (base, media)
    }
}
