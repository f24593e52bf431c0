use crate::dim::error::DimError;
use crate::dim::unit::Unit;
use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Sub};
use tracing::{debug, trace};

/// A magnitude paired with the unit it is expressed in
#[derive(Debug, Clone, PartialEq)]
pub struct TaggedNumber {
    /// Magnitude in units of `unit`, not in SI base units
    pub value: f64,
    pub unit: Unit,
}

impl TaggedNumber {
    pub fn new(value: f64, unit: Unit) -> Self {
        Self { value, unit }
    }

    /// Wrap `value` in the registry unit named `symbol`
    pub fn with_symbol(value: f64, symbol: &str) -> Result<Self, DimError> {
        Ok(Self::new(value, Unit::from_symbol(symbol)?))
    }

    /// Treat a plain number as a dimensionless quantity
    pub fn promote(value: f64) -> Self {
        Self::new(value, Unit::dimensionless())
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn unit(&self) -> &Unit {
        &self.unit
    }

    /// The quantity expressed in SI base units
    pub fn to_base(&self) -> f64 {
        self.value * self.unit.scale
    }

    pub fn try_add(&self, rhs: &TaggedNumber) -> Result<TaggedNumber, DimError> {
        if self.unit == rhs.unit {
            return Ok(TaggedNumber::new(self.value + rhs.value, self.unit.clone()));
        }

        if !self.unit.is_compatible(&rhs.unit) {
            return Err(DimError::DimensionMismatch {
                left: self.unit.dims,
                right: rhs.unit.dims,
            });
        }

        // Equal priority keeps the left operand's unit.
        let (dominant, other) = if rhs.unit.priority > self.unit.priority {
            (rhs, self)
        } else {
            (self, rhs)
        };
        trace!(
            dominant = %dominant.unit,
            other = %other.unit,
            "Choosing result unit for addition"
        );

        let converted = other.value * other.unit.scale / dominant.unit.scale;
        Ok(TaggedNumber::new(
            dominant.value + converted,
            dominant.unit.clone(),
        ))
    }

    pub fn try_sub(&self, rhs: &TaggedNumber) -> Result<TaggedNumber, DimError> {
        self.try_add(&-rhs)
    }

    /// Re-express this quantity in another compatible unit
    pub fn convert_to(&self, target: &Unit) -> Result<TaggedNumber, DimError> {
        let factor = self.unit.conversion_factor(target)?;
        debug!(from = %self.unit, to = %target, factor, "Converting quantity");
        Ok(TaggedNumber::new(self.value * factor, target.clone()))
    }

    pub fn powf(&self, p: f64) -> TaggedNumber {
        TaggedNumber::new(self.value.powf(p), self.unit.powf(p))
    }

    pub fn powi(&self, p: i32) -> TaggedNumber {
        self.powf(p as f64)
    }

    pub fn sqrt(&self) -> TaggedNumber {
        self.powf(0.5)
    }

    pub fn cbrt(&self) -> TaggedNumber {
        self.powf(1.0 / 3.0)
    }
}

impl From<f64> for TaggedNumber {
    fn from(value: f64) -> Self {
        Self::promote(value)
    }
}

impl fmt::Display for TaggedNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.unit.is_dimensionless() && self.unit.scale == 1.0 {
            write!(f, "{}", self.value)
        } else {
            write!(f, "{} {}", self.value, self.unit)
        }
    }
}

impl Neg for &TaggedNumber {
    type Output = TaggedNumber;

    fn neg(self) -> TaggedNumber {
        TaggedNumber::new(-self.value, self.unit.clone())
    }
}

impl Neg for TaggedNumber {
    type Output = TaggedNumber;

    fn neg(self) -> TaggedNumber {
        TaggedNumber::new(-self.value, self.unit)
    }
}

impl Add for TaggedNumber {
    type Output = Result<TaggedNumber, DimError>;

    fn add(self, rhs: TaggedNumber) -> Self::Output {
        self.try_add(&rhs)
    }
}

impl Add<f64> for TaggedNumber {
    type Output = Result<TaggedNumber, DimError>;

    fn add(self, rhs: f64) -> Self::Output {
        self.try_add(&TaggedNumber::promote(rhs))
    }
}

impl Sub for TaggedNumber {
    type Output = Result<TaggedNumber, DimError>;

    fn sub(self, rhs: TaggedNumber) -> Self::Output {
        self.try_sub(&rhs)
    }
}

impl Sub<f64> for TaggedNumber {
    type Output = Result<TaggedNumber, DimError>;

    fn sub(self, rhs: f64) -> Self::Output {
        self.try_sub(&TaggedNumber::promote(rhs))
    }
}

impl<'a> Mul<&'a TaggedNumber> for &'a TaggedNumber {
    type Output = TaggedNumber;

    fn mul(self, rhs: &'a TaggedNumber) -> TaggedNumber {
        TaggedNumber::new(self.value * rhs.value, &self.unit * &rhs.unit)
    }
}

impl Mul for TaggedNumber {
    type Output = TaggedNumber;

    fn mul(self, rhs: TaggedNumber) -> TaggedNumber {
        &self * &rhs
    }
}

impl Mul<f64> for TaggedNumber {
    type Output = TaggedNumber;

    fn mul(self, rhs: f64) -> TaggedNumber {
        self * TaggedNumber::promote(rhs)
    }
}

impl Mul<TaggedNumber> for f64 {
    type Output = TaggedNumber;

    fn mul(self, rhs: TaggedNumber) -> TaggedNumber {
        TaggedNumber::promote(self) * rhs
    }
}

impl<'a> Div<&'a TaggedNumber> for &'a TaggedNumber {
    type Output = TaggedNumber;

    fn div(self, rhs: &'a TaggedNumber) -> TaggedNumber {
        TaggedNumber::new(self.value / rhs.value, &self.unit / &rhs.unit)
    }
}

impl Div for TaggedNumber {
    type Output = TaggedNumber;

    fn div(self, rhs: TaggedNumber) -> TaggedNumber {
        &self / &rhs
    }
}

impl Div<f64> for TaggedNumber {
    type Output = TaggedNumber;

    fn div(self, rhs: f64) -> TaggedNumber {
        self / TaggedNumber::promote(rhs)
    }
}

impl Div<TaggedNumber> for f64 {
    type Output = TaggedNumber;

    fn div(self, rhs: TaggedNumber) -> TaggedNumber {
        TaggedNumber::promote(self) / rhs
    }
}
