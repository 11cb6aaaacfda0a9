use serde::{Deserialize, Serialize};
use std::fmt;

/// Sanitized amount: units and, when a separator was given, subunits.
/// Both hold only ASCII digits without leading zeros (a lone "0" for zero).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AmountPair {
    pub units: String,
    pub subunits: Option<String>,
}

/// Which side of the separator an amount belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AmountSide {
    Units,
    Subunits,
}

impl AmountSide {
    pub fn max_digits(self) -> usize {
        match self {
            AmountSide::Units => 9,
            AmountSide::Subunits => 2,
        }
    }

    /// Largest value allowed on this side, e.g. "999999999" for units.
    pub fn max_value(self) -> String {
        "9".repeat(self.max_digits())
    }
}

impl fmt::Display for AmountSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AmountSide::Units => write!(f, "units"),
            AmountSide::Subunits => write!(f, "subunits"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrencyUnit {
    pub singular: String,
    pub plural: String,
}

impl CurrencyUnit {
    pub fn new(singular: impl Into<String>, plural: impl Into<String>) -> Self {
        Self {
            singular: singular.into(),
            plural: plural.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Currency {
    pub unit: CurrencyUnit,
    pub subunit: CurrencyUnit,
}

impl Currency {
    pub fn new(unit: CurrencyUnit, subunit: CurrencyUnit) -> Self {
        Self { unit, subunit }
    }

    pub fn dollar() -> Self {
        Self::new(
            CurrencyUnit::new("dollar", "dollars"),
            CurrencyUnit::new("cent", "cents"),
        )
    }
}

impl Default for Currency {
    fn default() -> Self {
        Self::dollar()
    }
}
