use crate::styling::css::{CssRule, MediaRule};
use std::fmt::{Display, Formatter};
use strum_macros::EnumIter;

pub const TABLET_QUERY: &str = "screen and (min-width: 768px)";
pub const DESKTOP_QUERY: &str = "screen and (min-width: 1024px)";
pub const DARK_SCHEME_QUERY: &str = "(prefers-color-scheme: dark)";

/// Responsive tiers ordered narrowest to widest. Mobile carries no media
/// predicate and sits lowest in the override chain.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, EnumIter)]
pub enum Breakpoint {
    Mobile,
    Tablet,
    Desktop,
}

impl Display for Breakpoint {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Breakpoint::Mobile => write!(f, "mobile"),
            Breakpoint::Tablet => write!(f, "tablet"),
            Breakpoint::Desktop => write!(f, "desktop"),
        }
    }
}

impl Breakpoint {
    pub fn media_query(self) -> Option<&'static str> {
        match self {
            Breakpoint::Mobile => None,
            Breakpoint::Tablet => Some(TABLET_QUERY),
            Breakpoint::Desktop => Some(DESKTOP_QUERY),
        }
    }

    pub fn class_suffix(self) -> &'static str {
        match self {
            Breakpoint::Mobile => "",
            Breakpoint::Tablet => "-tablet",
            Breakpoint::Desktop => "-desktop",
        }
    }
}

/// An ordered list of CSS declarations.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StyleProps {
    props: Vec<(String, String)>,
}

impl StyleProps {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn prop(mut self, name: &str, value: &str) -> Self {
        self.props.push((name.to_string(), value.to_string()));
        self
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.props
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_str()))
    }

    pub fn is_empty(&self) -> bool {
        self.props.is_empty()
    }
}

/// Per-tier style rules handed to [`responsive_style`]. Any tier may be
/// absent; a present-but-empty tier is legal and yields a no-op media block.
#[derive(Clone, Debug, Default)]
pub struct BreakpointRules {
    mobile: Option<StyleProps>,
    tablet: Option<StyleProps>,
    desktop: Option<StyleProps>,
}

impl BreakpointRules {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mobile(mut self, props: StyleProps) -> Self {
        self.mobile = Some(props);
        self
    }

    pub fn tablet(mut self, props: StyleProps) -> Self {
        self.tablet = Some(props);
        self
    }

    pub fn desktop(mut self, props: StyleProps) -> Self {
        self.desktop = Some(props);
        self
    }
}

/// The resolved form: an unconditional base rule plus media-gated rules kept
/// in narrow-to-wide order. Overlapping properties are left to the cascade;
/// nothing is pre-merged across tiers.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MergedStyle {
    base: StyleProps,
    media: Vec<(String, StyleProps)>,
}

impl MergedStyle {
    pub fn base(&self) -> &StyleProps {
        &self.base
    }

    pub fn media(&self) -> &[(String, StyleProps)] {
        &self.media
    }

    /// Lowers the merged style onto a concrete selector.
    pub fn rules(&self, selector: &str) -> (Option<CssRule>, Vec<MediaRule>) {
        let base = (!self.base.is_empty()).then(|| CssRule::new(selector).props(&self.base));
        let media = self
            .media
            .iter()
            .map(|(query, props)| MediaRule::new(query).rule(CssRule::new(selector).props(props)))
            .collect();
        (base, media)
    }
}

/// Applies the provided style rules to their breakpoints. Rules for larger
/// screen sizes may override rules for smaller screen sizes; rules that are
/// not overridden still apply.
pub fn responsive_style(rules: BreakpointRules) -> MergedStyle {
    let mut media = Vec::new();
    for (tier_props, tier) in [
        (rules.tablet, Breakpoint::Tablet),
        (rules.desktop, Breakpoint::Desktop),
    ] {
        if let (Some(props), Some(query)) = (tier_props, tier.media_query()) {
            media.push((query.to_string(), props));
        }
    }
    MergedStyle {
        base: rules.mobile.unwrap_or_default(),
        media,
    }
}

/// Gates a rule on the OS-level dark preference. This axis is independent of
/// the explicit theme-variant class.
pub fn dark_mode_style(props: StyleProps) -> MergedStyle {
    MergedStyle {
        base: StyleProps::new(),
        media: vec![(DARK_SCHEME_QUERY.to_string(), props)],
    }
}
