pub use crate::html::{
    Element, Link, PageBuilder, Script, a, article, button, div, element, footer, h1, h2, h3,
    header, i, img, li, nav, p, section, span, time, ul,
};
pub use crate::styling::css::{CssRule, MediaRule};
pub use crate::styling::error::DefinitionError;
pub use crate::styling::responsive::{
    Breakpoint, BreakpointRules, MergedStyle, StyleProps, dark_mode_style, responsive_style,
};
pub use crate::styling::scale::Scale;
pub use crate::styling::sprinkles::{ResponsiveValue, Schema, one, span2, span3};
pub use crate::styling::stylesheet::{Part, Stylesheet};
pub use crate::styling::theme::{Palette, ThemeContract, ThemeVariant};
