//! Manifest snapshots, parsing and pre-checks

mod parser;
mod schema;
mod validate;

pub use parser::*;
pub use schema::*;
pub use validate::*;
