pub mod css;
pub mod error;
pub mod responsive;
pub mod scale;
pub mod sprinkles;
pub mod stylesheet;
pub mod theme;
