use crate::dim::error::DimError;
use crate::dim::types::Family;
use lazy_static::lazy_static;
use std::collections::HashMap;

/// One registry entry: the unit's value in SI base units plus its
/// addition priority
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UnitDef {
    pub scale: f64,
    pub priority: i32,
}

const SI: i32 = 10;
const SI_MULTIPLE: i32 = 5;
const CUSTOMARY: i32 = 3;
const EXOTIC: i32 = 1;

const INCH: f64 = 0.0254;
const FOOT: f64 = 0.3048;
const POUND_MASS: f64 = 0.45359237;
const STANDARD_GRAVITY: f64 = 9.80665;
const POUND_FORCE: f64 = POUND_MASS * STANDARD_GRAVITY;

fn table(entries: &[(&'static str, f64, i32)]) -> HashMap<&'static str, UnitDef> {
    entries
        .iter()
        .map(|&(symbol, scale, priority)| (symbol, UnitDef { scale, priority }))
        .collect()
}

lazy_static! {
    static ref LENGTH: HashMap<&'static str, UnitDef> = table(&[
        ("m", 1.0, SI),
        ("km", 1e3, SI_MULTIPLE),
        ("cm", 1e-2, SI_MULTIPLE),
        ("mm", 1e-3, SI_MULTIPLE),
        ("um", 1e-6, SI_MULTIPLE),
        ("nm", 1e-9, SI_MULTIPLE),
        ("in", INCH, CUSTOMARY),
        ("ft", FOOT, CUSTOMARY),
        ("yd", 3.0 * FOOT, CUSTOMARY),
        ("mi", 5280.0 * FOOT, CUSTOMARY),
        ("nmi", 1852.0, EXOTIC),
        ("au", 1.495978707e11, EXOTIC),
    ]);

    static ref MASS: HashMap<&'static str, UnitDef> = table(&[
        ("kg", 1.0, SI),
        ("g", 1e-3, SI_MULTIPLE),
        ("mg", 1e-6, SI_MULTIPLE),
        ("t", 1e3, SI_MULTIPLE),
        ("lbm", POUND_MASS, CUSTOMARY),
        ("oz", POUND_MASS / 16.0, CUSTOMARY),
        ("slug", POUND_FORCE / FOOT, CUSTOMARY),
        ("ton", 2000.0 * POUND_MASS, EXOTIC),
    ]);

    static ref TIME: HashMap<&'static str, UnitDef> = table(&[
        ("s", 1.0, SI),
        ("ms", 1e-3, SI_MULTIPLE),
        ("us", 1e-6, SI_MULTIPLE),
        ("ns", 1e-9, SI_MULTIPLE),
        ("min", 60.0, CUSTOMARY),
        ("h", 3600.0, CUSTOMARY),
        ("day", 86400.0, CUSTOMARY),
        ("week", 604800.0, EXOTIC),
        ("yr", 365.25 * 86400.0, EXOTIC),
    ]);

    // Force has no base-family registry of its own in a chosen base system;
    // these scales are always in newtons.
    static ref FORCE: HashMap<&'static str, UnitDef> = table(&[
        ("N", 1.0, SI),
        ("kN", 1e3, SI_MULTIPLE),
        ("dyn", 1e-5, EXOTIC),
        ("kgf", STANDARD_GRAVITY, CUSTOMARY),
        ("lbf", POUND_FORCE, CUSTOMARY),
        ("kip", 1e3 * POUND_FORCE, EXOTIC),
        ("pdl", POUND_MASS * FOOT, EXOTIC),
    ]);
}

/// Read-only view of one family's registry
pub fn family_table(family: Family) -> &'static HashMap<&'static str, UnitDef> {
    match family {
        Family::Length => &*LENGTH,
        Family::Mass => &*MASS,
        Family::Time => &*TIME,
        Family::Force => &*FORCE,
    }
}

pub fn registry_entry(family: Family, symbol: &str) -> Result<&'static UnitDef, DimError> {
    family_table(family)
        .get(symbol)
        .ok_or_else(|| DimError::unknown(family.as_str(), symbol))
}

/// Value of one `symbol` in SI base units
pub fn registry_scale(family: Family, symbol: &str) -> Result<f64, DimError> {
    registry_entry(family, symbol).map(|def| def.scale)
}

/// Search every family for `symbol`
pub fn lookup(symbol: &str) -> Option<(Family, &'static UnitDef)> {
    Family::ALL
        .iter()
        .find_map(|family| family_table(*family).get(symbol).map(|def| (*family, def)))
}

/// Symbols registered in `family`, sorted
pub fn symbols(family: Family) -> Vec<&'static str> {
    let mut symbols: Vec<&'static str> = family_table(family).keys().copied().collect();
    symbols.sort_unstable();
    symbols
}
