use crate::domain::model::AmountSide;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConversionError {
    #[error("The given number string '{input}' is invalid: {reason}")]
    InvalidInput { input: String, reason: String },

    #[error(
        "The given number of {side} ('{value}') has {digits} digits and exceeds the allowed maximum number of {side} ('{max}')."
    )]
    AmountTooLarge {
        side: AmountSide,
        value: String,
        digits: usize,
        max: String,
    },

    #[error("Cannot convert the given char '{digit}' into a word of {kind}. Only digits (from '0' to '9') can be converted.")]
    NotADigit { digit: char, kind: &'static str },

    #[error("The given number '{number}' is not one of the irregular numbers between '10' and '19'.")]
    NotATeen { number: String },

    #[error("The number group '{group}' has too many digits. The maximum number of digits in a group is {max}.")]
    GroupTooLarge { group: String, max: usize },

    #[error("Configuration error in '{field}': {message}")]
    Config { field: String, message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// The user typed something that cannot be converted.
    Input,
    /// A contract between the conversion components was broken.
    Internal,
    Configuration,
    System,
}

impl ConversionError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            ConversionError::InvalidInput { .. } | ConversionError::AmountTooLarge { .. } => {
                ErrorCategory::Input
            }
            ConversionError::NotADigit { .. }
            | ConversionError::NotATeen { .. }
            | ConversionError::GroupTooLarge { .. } => ErrorCategory::Internal,
            ConversionError::Config { .. } => ErrorCategory::Configuration,
            ConversionError::Io(_) => ErrorCategory::System,
        }
    }

    /// Message shown to the person at the prompt. Keeps the full error text.
    pub fn user_friendly_message(&self) -> String {
        match self.category() {
            ErrorCategory::Input => format!(
                "Sorry, you entered an invalid input. See error message for details:\n'{}'\nPlease try again.",
                self
            ),
            _ => format!("An unexpected error occurred:\n'{}'", self),
        }
    }

    pub(crate) fn invalid_input(input: &str, reason: impl Into<String>) -> Self {
        ConversionError::InvalidInput {
            input: input.to_string(),
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, ConversionError>;
