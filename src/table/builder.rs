use crate::dim::error::DimError;
use crate::dim::registry::{family_table, registry_scale};
use crate::dim::types::Family;
use serde::{Deserialize, Serialize, Serializer};
use std::collections::BTreeMap;
use tracing::debug;

/// The reference unit chosen for each base dimension
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct BaseSystem {
    #[serde(default = "default_length")]
    pub length: String,
    #[serde(default = "default_time")]
    pub time: String,
    #[serde(default = "default_mass")]
    pub mass: String,
}

fn default_length() -> String {
    "m".to_string()
}

fn default_time() -> String {
    "s".to_string()
}

fn default_mass() -> String {
    "kg".to_string()
}

impl Default for BaseSystem {
    fn default() -> Self {
        Self {
            length: default_length(),
            time: default_time(),
            mass: default_mass(),
        }
    }
}

impl BaseSystem {
    pub fn new(length: &str, time: &str, mass: &str) -> Self {
        Self {
            length: length.to_string(),
            time: time.to_string(),
            mass: mass.to_string(),
        }
    }

    /// Base symbol for one of the three base families
    pub fn symbol(&self, family: Family) -> Option<&str> {
        match family {
            Family::Length => Some(&self.length),
            Family::Time => Some(&self.time),
            Family::Mass => Some(&self.mass),
            Family::Force => None,
        }
    }

    /// Check every base symbol is registered in its own family
    pub fn validate(&self) -> Result<(), DimError> {
        registry_scale(Family::Length, &self.length)?;
        registry_scale(Family::Time, &self.time)?;
        registry_scale(Family::Mass, &self.mass)?;
        Ok(())
    }

    /// SI scale of one base-mass times base-length per base-time squared
    pub fn force_scale(&self) -> Result<f64, DimError> {
        let length = registry_scale(Family::Length, &self.length)?;
        let time = registry_scale(Family::Time, &self.time)?;
        let mass = registry_scale(Family::Mass, &self.mass)?;
        Ok(mass * length / (time * time))
    }

    pub fn build_table(&self) -> Result<ConversionTable, DimError> {
        let mut entries = BTreeMap::new();

        for family in [Family::Length, Family::Time, Family::Mass] {
            let base_symbol = self.symbol(family).unwrap_or_default();
            let base_scale = registry_scale(family, base_symbol)?;
            for (symbol, def) in family_table(family) {
                entries.insert(symbol.to_string(), def.scale / base_scale);
            }
        }

        let force_base = self.force_scale()?;
        for (symbol, def) in family_table(Family::Force) {
            entries.insert(symbol.to_string(), def.scale / force_base);
        }

        debug!(
            length = %self.length,
            time = %self.time,
            mass = %self.mass,
            entries = entries.len(),
            "Built conversion table"
        );

        Ok(ConversionTable {
            base: self.clone(),
            entries,
        })
    }
}

/// Factor from each unit symbol to the chosen base system
#[derive(Debug, Clone, PartialEq)]
pub struct ConversionTable {
    base: BaseSystem,
    entries: BTreeMap<String, f64>,
}

impl ConversionTable {
    pub fn base(&self) -> &BaseSystem {
        &self.base
    }

    pub fn get(&self, symbol: &str) -> Option<f64> {
        self.entries.get(symbol).copied()
    }

    pub fn contains(&self, symbol: &str) -> bool {
        self.entries.contains_key(symbol)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), *v))
    }

    pub fn into_map(self) -> BTreeMap<String, f64> {
        self.entries
    }
}

impl Serialize for ConversionTable {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.entries.serialize(serializer)
    }
}

/// Conversion table for base units `length`, `time` and `mass`
pub fn build_table(length: &str, time: &str, mass: &str) -> Result<ConversionTable, DimError> {
    BaseSystem::new(length, time, mass).build_table()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dim::registry::symbols;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() <= 1e-12 * a.abs().max(b.abs()).max(1.0)
    }

    #[test]
    fn test_si_table() {
        let table = build_table("m", "s", "kg").unwrap();
        assert_eq!(table.get("m"), Some(1.0));
        assert_eq!(table.get("km"), Some(1000.0));
        assert_eq!(table.get("ft"), Some(0.3048));
        assert_eq!(table.get("h"), Some(3600.0));
        assert_eq!(table.get("N"), Some(1.0));
        assert_eq!(table.get("kN"), Some(1000.0));
    }

    #[test]
    fn test_foot_based_table_inverts_meter() {
        let table = build_table("ft", "s", "kg").unwrap();
        assert_eq!(table.get("ft"), Some(1.0));
        assert!(close(table.get("m").unwrap(), 3.280839895013123));
        assert!(close(table.get("m").unwrap(), 1.0 / (12.0 * 2.54 / 100.0)));
    }

    #[test]
    fn test_imperial_force() {
        let table = build_table("ft", "s", "lbm").unwrap();
        // lbf in lbm*ft/s^2 is standard gravity in ft/s^2
        assert!(close(table.get("lbf").unwrap(), 32.17404855643044));
        assert!(close(table.get("pdl").unwrap(), 1.0));
        assert_eq!(table.get("lbm"), Some(1.0));
    }

    #[test]
    fn test_hours_and_pounds() {
        let table = build_table("ft", "h", "lbm").unwrap();
        assert_eq!(table.get("h"), Some(1.0));
        assert!(close(table.get("s").unwrap(), 1.0 / 3600.0));
        let force_base = 0.45359237 * 0.3048 / (3600.0 * 3600.0);
        assert!(close(table.get("N").unwrap(), 1.0 / force_base));
    }

    #[test]
    fn test_every_registered_symbol_present() {
        let table = build_table("m", "s", "kg").unwrap();
        let expected: usize = Family::ALL.iter().map(|f| symbols(*f).len()).sum();
        assert_eq!(table.len(), expected);
        for family in Family::ALL {
            for symbol in symbols(family) {
                assert!(table.contains(symbol), "missing '{}'", symbol);
            }
        }
    }

    #[test]
    fn test_unknown_base_symbol() {
        assert_eq!(
            build_table("furlong", "s", "kg").unwrap_err(),
            DimError::unknown("length", "furlong")
        );
        // Registered, but not as a time unit
        assert_eq!(
            build_table("m", "kg", "kg").unwrap_err(),
            DimError::unknown("time", "kg")
        );
        assert!(BaseSystem::new("m", "s", "N").validate().is_err());
    }

    #[test]
    fn test_build_is_deterministic() {
        let first = build_table("mi", "min", "oz").unwrap();
        let second = build_table("mi", "min", "oz").unwrap();
        assert_eq!(first, second);
        for ((a, x), (b, y)) in first.iter().zip(second.iter()) {
            assert_eq!(a, b);
            assert_eq!(x.to_bits(), y.to_bits());
        }
    }

    #[test]
    fn test_default_base_system() {
        let base = BaseSystem::default();
        assert_eq!(base, BaseSystem::new("m", "s", "kg"));
        assert_eq!(base.force_scale().unwrap(), 1.0);
        assert_eq!(base.build_table().unwrap().base(), &base);
    }

    #[test]
    fn test_serializes_as_flat_map() {
        let table = build_table("m", "s", "kg").unwrap();
        let json = serde_json::to_value(&table).unwrap();
        assert_eq!(json["km"], serde_json::json!(1000.0));
        assert_eq!(json["N"], serde_json::json!(1.0));
        assert!(json.get("base").is_none());
    }
}
