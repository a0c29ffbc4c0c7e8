pub mod html;
pub mod js;
pub mod prelude;
pub mod styling;
