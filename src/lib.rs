pub mod config;
pub mod dim;
pub mod table;

pub use dim::{DimError, Dims, Family, TaggedNumber, Unit};
pub use table::{build_table, BaseSystem, ConversionTable, OutputFormat};
