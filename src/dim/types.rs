use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};
use std::str::FromStr;

/// Exponents over the three base dimensions, in (length, mass, time) order
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Dims(pub [f64; 3]);

impl Dims {
    pub const ZERO: Dims = Dims([0.0, 0.0, 0.0]);
    pub const LENGTH: Dims = Dims([1.0, 0.0, 0.0]);
    pub const MASS: Dims = Dims([0.0, 1.0, 0.0]);
    pub const TIME: Dims = Dims([0.0, 0.0, 1.0]);
    pub const FORCE: Dims = Dims([1.0, 1.0, -2.0]);

    pub fn new(length: f64, mass: f64, time: f64) -> Self {
        Dims([length, mass, time])
    }

    pub fn length(&self) -> f64 {
        self.0[0]
    }

    pub fn mass(&self) -> f64 {
        self.0[1]
    }

    pub fn time(&self) -> f64 {
        self.0[2]
    }

    pub fn is_zero(&self) -> bool {
        self.0.iter().all(|e| *e == 0.0)
    }
}

impl Add for Dims {
    type Output = Dims;

    fn add(self, rhs: Dims) -> Dims {
        Dims([self.0[0] + rhs.0[0], self.0[1] + rhs.0[1], self.0[2] + rhs.0[2]])
    }
}

impl Sub for Dims {
    type Output = Dims;

    fn sub(self, rhs: Dims) -> Dims {
        Dims([self.0[0] - rhs.0[0], self.0[1] - rhs.0[1], self.0[2] - rhs.0[2]])
    }
}

impl Mul<f64> for Dims {
    type Output = Dims;

    fn mul(self, p: f64) -> Dims {
        Dims([self.0[0] * p, self.0[1] * p, self.0[2] * p])
    }
}

impl Neg for Dims {
    type Output = Dims;

    fn neg(self) -> Dims {
        self * -1.0
    }
}

impl fmt::Display for Dims {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_zero() {
            return write!(f, "1");
        }

        let parts: Vec<String> = ["m", "kg", "s"]
            .iter()
            .zip(self.0.iter())
            .filter(|(_, e)| **e != 0.0)
            .map(|(sym, e)| {
                if *e == 1.0 {
                    sym.to_string()
                } else {
                    format!("{}^{}", sym, e)
                }
            })
            .collect();

        write!(f, "{}", parts.join(" "))
    }
}

/// Registry family a named unit belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Family {
    Length,
    Mass,
    Time,
    Force,
}

impl Family {
    pub const ALL: [Family; 4] = [Family::Length, Family::Mass, Family::Time, Family::Force];

    pub fn as_str(&self) -> &'static str {
        match self {
            Family::Length => "length",
            Family::Mass => "mass",
            Family::Time => "time",
            Family::Force => "force",
        }
    }

    /// Dimension vector shared by every unit of this family
    pub fn dims(&self) -> Dims {
        match self {
            Family::Length => Dims::LENGTH,
            Family::Mass => Dims::MASS,
            Family::Time => Dims::TIME,
            Family::Force => Dims::FORCE,
        }
    }
}

impl fmt::Display for Family {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Family {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "length" => Ok(Family::Length),
            "mass" => Ok(Family::Mass),
            "time" => Ok(Family::Time),
            "force" => Ok(Family::Force),
            other => Err(format!("Unknown unit family: {}", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dims_arithmetic() {
        assert_eq!(Dims::LENGTH + Dims::MASS, Dims::new(1.0, 1.0, 0.0));
        assert_eq!(Dims::FORCE - Dims::FORCE, Dims::ZERO);
        assert_eq!(Dims::TIME * -2.0, Dims::new(0.0, 0.0, -2.0));
        assert_eq!(-Dims::LENGTH, Dims::new(-1.0, 0.0, 0.0));
    }

    #[test]
    fn test_dims_display() {
        assert_eq!(Dims::ZERO.to_string(), "1");
        assert_eq!(Dims::LENGTH.to_string(), "m");
        assert_eq!(Dims::FORCE.to_string(), "m kg s^-2");
        assert_eq!(Dims::new(0.5, 0.0, 0.0).to_string(), "m^0.5");
    }

    #[test]
    fn test_family_parse() {
        assert_eq!("Length".parse::<Family>(), Ok(Family::Length));
        assert_eq!(" force ".parse::<Family>(), Ok(Family::Force));
        assert!("temperature".parse::<Family>().is_err());
    }
}
