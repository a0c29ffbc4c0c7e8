pub mod element;
pub mod elements;
pub mod page;

pub use {element::*, elements::*, page::*};
