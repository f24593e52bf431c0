pub mod builder;
pub mod formatter;

pub use builder::*;
pub use formatter::*;
