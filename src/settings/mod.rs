//! User settings (output format, score weights, disabled rules)

mod config;
mod store;

pub use config::*;
pub use store::*;
