//! CLI command handlers

mod config;
mod field;
mod improvements;
mod input;
mod langs;
mod missing;
mod rules;
mod scan;
mod validate;

pub use config::*;
pub use field::*;
pub use improvements::*;
pub use input::*;
pub use langs::*;
pub use missing::*;
pub use rules::*;
pub use scan::*;
pub use validate::*;
