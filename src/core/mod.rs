pub mod amount;
pub mod composer;
pub mod converter;
pub mod digits;
pub mod groups;
pub mod sanitizer;

pub use crate::domain::model::{AmountPair, Currency, CurrencyUnit};
pub use crate::domain::ports::CurrencyProvider;
pub use crate::utils::error::Result;
