use crate::core::{composer, sanitizer};
use crate::domain::model::Currency;
use crate::domain::ports::CurrencyProvider;
use crate::utils::error::Result;

/// Converts raw amounts into words for one bound currency.
#[derive(Debug, Clone, Default)]
pub struct NumberToWordsConverter<C: CurrencyProvider = Currency> {
    currency: C,
}

impl NumberToWordsConverter<Currency> {
    pub fn dollars() -> Self {
        Self::new(Currency::dollar())
    }
}

impl<C: CurrencyProvider> NumberToWordsConverter<C> {
    pub fn new(currency: C) -> Self {
        Self { currency }
    }

    pub fn currency(&self) -> &C {
        &self.currency
    }

    /// `"1,5"` -> `"one dollar and fifty cents"` for the dollar currency.
    pub fn convert<'a>(&self, input: impl Into<Option<&'a str>>) -> Result<String> {
        let amount = sanitizer::process(input.into())?;
        let words = composer::compose(&amount, self.currency.unit(), self.currency.subunit())?;
        tracing::debug!(words = %words, "Converted amount");
        Ok(words)
    }
}

/// Converts `input` into a dollars-and-cents phrase.
pub fn convert<'a>(input: impl Into<Option<&'a str>>) -> Result<String> {
    NumberToWordsConverter::dollars().convert(input)
}
