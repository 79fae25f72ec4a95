//! CLI command implementations

mod generate;
mod info;
mod validate;

pub use generate::generate;
pub use info::info;
pub use validate::validate;
