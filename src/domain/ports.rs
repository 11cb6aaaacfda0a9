use crate::domain::model::{Currency, CurrencyUnit};

/// Supplies the nouns appended to the unit and subunit phrases.
pub trait CurrencyProvider: Send + Sync {
    fn unit(&self) -> &CurrencyUnit;
    fn subunit(&self) -> &CurrencyUnit;
}

impl CurrencyProvider for Currency {
    fn unit(&self) -> &CurrencyUnit {
        &self.unit
    }

    fn subunit(&self) -> &CurrencyUnit {
        &self.subunit
    }
}
