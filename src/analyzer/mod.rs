pub mod transpose;

pub use transpose::*;
