use crate::dim::types::Dims;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum DimError {
    #[error("Dimension mismatch: cannot combine [{left}] with [{right}]")]
    DimensionMismatch { left: Dims, right: Dims },
    #[error("Unknown unit: '{symbol}' is not registered in family '{family}'")]
    UnknownUnit { family: String, symbol: String },
    #[error("Config error: {0}")]
    Config(String),
    #[error("Format error: {0}")]
    Format(String),
}

impl DimError {
    pub fn unknown(family: impl Into<String>, symbol: impl Into<String>) -> Self {
        DimError::UnknownUnit {
            family: family.into(),
            symbol: symbol.into(),
        }
    }
}
