pub mod dataset;
pub mod chart;
pub mod style;

pub use dataset::*;
pub use chart::*;
pub use style::*;
