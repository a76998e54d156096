//! Side-effect-free predicates used by the rule catalog

mod locales;
mod shape;
mod url;
mod values;

pub use locales::*;
pub use shape::*;
pub use url::*;
pub use values::*;
