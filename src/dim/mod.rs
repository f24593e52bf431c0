// Dimensional analysis over length, mass and time
// Units carry a scale relative to SI base units; tagged numbers carry a unit

pub mod error;
pub mod registry;
pub mod tagged;
pub mod types;
pub mod unit;


pub use error::DimError;
pub use registry::{family_table, lookup, registry_entry, registry_scale, symbols, UnitDef};
pub use tagged::TaggedNumber;
pub use types::{Dims, Family};
pub use unit::{Unit, MIN_PRIORITY, SYNTHESIZED};
