use thiserror::Error;

/// Every failure in the styling core happens while definitions are being
/// constructed. Once a scale, theme, or schema builds successfully, resolving
/// styles through it cannot fail.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DefinitionError {
    #[error("scale `{scale}` has no key `{key}`")]
    UnknownScaleKey { scale: String, key: String },
    #[error("scale `{scale}` defines key `{key}` more than once")]
    DuplicateScaleKey { scale: String, key: String },
    #[error("theme `{theme}` defines role `{role}` more than once")]
    DuplicateRole { theme: String, role: String },
    #[error("theme variant `{variant}` is missing role `{role}` defined by the reference theme")]
    MissingRole { variant: String, role: String },
    #[error("theme variant `{variant}` defines role `{role}` absent from the reference theme")]
    UnknownRole { variant: String, role: String },
    #[error("theme contract has no role `{role}`")]
    UnknownContractRole { role: String },
    #[error("property `{property}` declares an empty value set")]
    EmptyValueSet { property: String },
    #[error("property `{property}` declares value `{value}` more than once")]
    DuplicateValue { property: String, value: String },
    #[error("schema already defines `{name}`")]
    DuplicateSchemaEntry { name: String },
    #[error("shorthand `{shorthand}` references undefined property `{property}`")]
    UnknownShorthandTarget { shorthand: String, property: String },
    #[error("schema has no property or shorthand named `{property}`")]
    UnknownProperty { property: String },
    #[error("property `{property}` has no value `{value}`")]
    UnknownValue { property: String, value: String },
    #[error("property `{property}` is not responsive but was given a breakpoint span")]
    NotResponsive { property: String },
}
