use crate::dim::error::DimError;
use crate::dim::registry;
use crate::dim::types::Dims;
use std::fmt;
use std::ops::{Div, Mul};

/// Name given to units synthesized by multiplication, division or powers
pub const SYNTHESIZED: &str = "none";

/// Priority of synthesized and dimensionless units; never wins a tie-break
/// against a registry unit
pub const MIN_PRIORITY: i32 = i32::MIN;

/// A physical unit: a scale relative to SI base units over a
/// (length, mass, time) dimension vector
#[derive(Debug, Clone, PartialEq)]
pub struct Unit {
    /// Symbol, informational only
    pub name: String,
    /// Value of one of this unit in SI base units
    pub scale: f64,
    /// Addition tie-break, higher wins
    pub priority: i32,
    pub dims: Dims,
}

impl Unit {
    pub fn new(
        name: impl Into<String>,
        scale: f64,
        priority: i32,
        length: f64,
        mass: f64,
        time: f64,
    ) -> Self {
        Self {
            name: name.into(),
            scale,
            priority,
            dims: Dims::new(length, mass, time),
        }
    }

    /// The unit of a pure number
    pub fn dimensionless() -> Self {
        Self::synthesized(1.0, Dims::ZERO)
    }

    fn synthesized(scale: f64, dims: Dims) -> Self {
        Self {
            name: SYNTHESIZED.to_string(),
            scale,
            priority: MIN_PRIORITY,
            dims,
        }
    }

    /// Build the registry-backed unit for `symbol`, searching every family
    pub fn from_symbol(symbol: &str) -> Result<Self, DimError> {
        let (family, def) =
            registry::lookup(symbol).ok_or_else(|| DimError::unknown("any", symbol))?;
        Ok(Self {
            name: symbol.to_string(),
            scale: def.scale,
            priority: def.priority,
            dims: family.dims(),
        })
    }

    pub fn is_compatible(&self, other: &Unit) -> bool {
        self.dims == other.dims
    }

    pub fn is_dimensionless(&self) -> bool {
        self.dims.is_zero()
    }

    pub fn is_synthesized(&self) -> bool {
        self.name == SYNTHESIZED
    }

    /// Factor turning a magnitude in `self` into a magnitude in `other`
    pub fn conversion_factor(&self, other: &Unit) -> Result<f64, DimError> {
        if !self.is_compatible(other) {
            return Err(DimError::DimensionMismatch {
                left: self.dims,
                right: other.dims,
            });
        }
        Ok(self.scale / other.scale)
    }

    pub fn powf(&self, p: f64) -> Unit {
        Self::synthesized(self.scale.powf(p), self.dims * p)
    }

    pub fn powi(&self, p: i32) -> Unit {
        self.powf(p as f64)
    }
}

impl Default for Unit {
    fn default() -> Self {
        Self::dimensionless()
    }
}

impl<'a> Mul<&'a Unit> for &'a Unit {
    type Output = Unit;

    fn mul(self, rhs: &'a Unit) -> Unit {
        Unit::synthesized(self.scale * rhs.scale, self.dims + rhs.dims)
    }
}

impl Mul for Unit {
    type Output = Unit;

    fn mul(self, rhs: Unit) -> Unit {
        &self * &rhs
    }
}

impl<'a> Div<&'a Unit> for &'a Unit {
    type Output = Unit;

    fn div(self, rhs: &'a Unit) -> Unit {
        Unit::synthesized(self.scale / rhs.scale, self.dims - rhs.dims)
    }
}

impl Div for Unit {
    type Output = Unit;

    fn div(self, rhs: Unit) -> Unit {
        &self / &rhs
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_synthesized() {
            if self.scale == 1.0 {
                write!(f, "{}", self.dims)
            } else {
                write!(f, "{}*{}", self.scale, self.dims)
            }
        } else {
            f.write_str(&self.name)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit(symbol: &str) -> Unit {
        Unit::from_symbol(symbol).unwrap()
    }

    #[test]
    fn test_from_symbol() {
        let ft = unit("ft");
        assert_eq!(ft.name, "ft");
        assert_eq!(ft.scale, 0.3048);
        assert_eq!(ft.dims, Dims::LENGTH);

        let lbf = unit("lbf");
        assert_eq!(lbf.dims, Dims::FORCE);
    }

    #[test]
    fn test_from_symbol_unknown() {
        assert_eq!(
            Unit::from_symbol("parsec").unwrap_err(),
            DimError::unknown("any", "parsec")
        );
    }

    #[test]
    fn test_multiply() {
        let product = &unit("kg") * &unit("km");
        assert_eq!(product.scale, 1000.0);
        assert_eq!(product.dims, Dims::new(1.0, 1.0, 0.0));
        assert_eq!(product.name, SYNTHESIZED);
        assert_eq!(product.priority, MIN_PRIORITY);
    }

    #[test]
    fn test_divide() {
        let speed = unit("km") / unit("h");
        assert!((speed.scale - 1000.0 / 3600.0).abs() < 1e-15);
        assert_eq!(speed.dims, Dims::new(1.0, 0.0, -1.0));
        assert!(speed.is_synthesized());
    }

    #[test]
    fn test_self_division_is_dimensionless() {
        let ratio = &unit("lbf") / &unit("lbf");
        assert!(ratio.is_dimensionless());
        assert_eq!(ratio.scale, 1.0);
    }

    #[test]
    fn test_force_synthesis_matches_newton() {
        let derived = &(&unit("kg") * &unit("m")) / &unit("s").powi(2);
        assert!(derived.is_compatible(&unit("N")));
        assert_eq!(derived.scale, 1.0);
    }

    #[test]
    fn test_power() {
        let area = unit("ft").powf(2.0);
        assert!((area.scale - 0.3048 * 0.3048).abs() < 1e-15);
        assert_eq!(area.dims, Dims::new(2.0, 0.0, 0.0));

        let root = area.powf(0.5);
        assert!(root.is_compatible(&unit("m")));
    }

    #[test]
    fn test_compatibility_ignores_scale_and_priority() {
        assert!(unit("mi").is_compatible(&unit("nm")));
        assert!(!unit("m").is_compatible(&unit("s")));
        assert!(Unit::dimensionless().is_compatible(&(&unit("h") / &unit("s"))));
    }

    #[test]
    fn test_conversion_factor() {
        assert_eq!(unit("km").conversion_factor(&unit("m")).unwrap(), 1000.0);
        assert!(matches!(
            unit("km").conversion_factor(&unit("kg")),
            Err(DimError::DimensionMismatch { .. })
        ));
    }

    #[test]
    fn test_display() {
        assert_eq!(unit("kN").to_string(), "kN");
        assert_eq!((&unit("m") / &unit("s")).to_string(), "m s^-1");
        assert_eq!(Unit::dimensionless().to_string(), "1");
    }
}
