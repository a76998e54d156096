//! Validation drivers and results

mod api;
mod driver;
mod result;

pub use api::*;
pub use driver::*;
pub use result::*;
