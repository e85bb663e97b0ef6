pub mod data;
pub mod generator;
pub mod templates;

pub use data::*;
pub use generator::*;
