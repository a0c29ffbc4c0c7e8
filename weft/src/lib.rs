pub mod components;
pub mod config;
pub mod data;
pub mod date;
pub mod site;
pub mod styles;
