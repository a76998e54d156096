//! Rule catalog: what gets checked, how severe a failure is, and how to fix it

mod catalog;
mod fields;
mod rule;

pub use catalog::*;
pub use fields::*;
pub use rule::*;
