use crate::styling::css::{CssRule, kebab_case};
use crate::styling::error::DefinitionError;

/// An ordered assignment of color roles to concrete color values.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Palette {
    roles: Vec<(String, String)>,
}

impl Palette {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn role(mut self, name: &str, color: &str) -> Self {
        self.roles.push((name.to_string(), color.to_string()));
        self
    }

    pub fn len(&self) -> usize {
        self.roles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.roles.is_empty()
    }

    fn get(&self, role: &str) -> Option<&str> {
        self.roles
            .iter()
            .find(|(name, _)| name == role)
            .map(|(_, color)| color.as_str())
    }
}

/// The canonical role set established by the reference theme. Color values are
/// never read through the contract; styles reference roles symbolically via
/// [`ThemeContract::var`], so switching variants at paint time is a single
/// class swap on an ancestor node.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ThemeContract {
    roles: Vec<String>,
}

impl ThemeContract {
    /// Defines the reference theme, establishing the canonical role set and
    /// realizing the reference variant itself.
    pub fn define(name: &str, palette: Palette) -> Result<(Self, ThemeVariant), DefinitionError> {
        check_duplicates(name, &palette)?;
        let contract = Self {
            roles: palette.roles.iter().map(|(role, _)| role.clone()).collect(),
        };
        let variant = contract.realize(name, &palette);
        Ok((contract, variant))
    }

    /// Realizes a variant against the reference role set. The supplied palette
    /// must cover exactly the reference roles; a missing or extra role is a
    /// definition-time error naming the offending role.
    pub fn variant(&self, name: &str, palette: Palette) -> Result<ThemeVariant, DefinitionError> {
        check_duplicates(name, &palette)?;
        for role in &self.roles {
            if palette.get(role).is_none() {
                return Err(DefinitionError::MissingRole {
                    variant: name.to_string(),
                    role: role.clone(),
                });
            }
        }
        for (role, _) in &palette.roles {
            if !self.roles.contains(role) {
                return Err(DefinitionError::UnknownRole {
                    variant: name.to_string(),
                    role: role.clone(),
                });
            }
        }
        Ok(self.realize(name, &palette))
    }

    /// The symbolic reference for a role, e.g. `var(--loom-text-strong)`.
    pub fn var(&self, role: &str) -> Result<String, DefinitionError> {
        if !self.roles.iter().any(|existing| existing == role) {
            return Err(DefinitionError::UnknownContractRole {
                role: role.to_string(),
            });
        }
        Ok(format!("var({})", custom_property(role)))
    }

    pub fn roles(&self) -> impl Iterator<Item = &str> {
        self.roles.iter().map(String::as_str)
    }

    /// Every role paired with its symbolic reference, in role order.
    pub fn vars(&self) -> impl Iterator<Item = (&str, String)> {
        self.roles
            .iter()
            .map(|role| (role.as_str(), format!("var({})", custom_property(role))))
    }

    fn realize(&self, name: &str, palette: &Palette) -> ThemeVariant {
        let decls = self
            .roles
            .iter()
            .filter_map(|role| {
                palette
                    .get(role)
                    .map(|color| (custom_property(role), color.to_string()))
            })
            .collect();
        ThemeVariant {
            name: name.to_string(),
            class_name: format!("theme-{name}"),
            decls,
        }
    }
}

/// One realized color-role assignment. Applying [`ThemeVariant::class_name`]
/// to an ancestor node resolves every symbolic role reference beneath it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ThemeVariant {
    name: String,
    class_name: String,
    decls: Vec<(String, String)>,
}

impl ThemeVariant {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn class_name(&self) -> &str {
        &self.class_name
    }

    pub fn rule(&self) -> CssRule {
        let mut rule = CssRule::new(&format!(".{}", self.class_name));
        for (property, color) in &self.decls {
            rule = rule.property(property, color);
        }
        rule
    }
}

fn custom_property(role: &str) -> String {
    format!("--loom-{}", kebab_case(role))
}

fn check_duplicates(theme: &str, palette: &Palette) -> Result<(), DefinitionError> {
    for (index, (role, _)) in palette.roles.iter().enumerate() {
        if palette.roles[..index].iter().any(|(seen, _)| seen == role) {
            return Err(DefinitionError::DuplicateRole {
                theme: theme.to_string(),
                role: role.clone(),
            });
        }
    }
    Ok(())
}
