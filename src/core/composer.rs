use crate::core::amount::amount_to_words;
use crate::core::sanitizer::check_length;
use crate::domain::model::{AmountPair, AmountSide, CurrencyUnit};
use crate::utils::error::Result;

const SINGULAR_WORDS: &str = "one";

/// Renders "<units> <noun>[ and <subunits> <noun>]".
///
/// The singular noun is used only when the rendered words are literally "one".
pub fn compose(amount: &AmountPair, unit: &CurrencyUnit, subunit: &CurrencyUnit) -> Result<String> {
    check_length(AmountSide::Units, &amount.units)?;
    let units = with_noun(amount_to_words(&amount.units)?, unit);

    match &amount.subunits {
        Some(subunits) => {
            check_length(AmountSide::Subunits, subunits)?;
            let subunits = with_noun(amount_to_words(subunits)?, subunit);
            Ok(format!("{} and {}", units, subunits))
        }
        None => Ok(units),
    }
}

fn with_noun(words: String, currency: &CurrencyUnit) -> String {
    let noun = if words == SINGULAR_WORDS {
        &currency.singular
    } else {
        &currency.plural
    };
    format!("{} {}", words, noun)
}
