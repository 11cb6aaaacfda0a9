use crate::utils::error::{ConversionError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(ConversionError::Config {
            field: field_name.to_string(),
            message: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_non_empty_list(field_name: &str, values: &[String]) -> Result<()> {
    if values.is_empty() {
        return Err(ConversionError::Config {
            field: field_name.to_string(),
            message: "At least one value is required".to_string(),
        });
    }
    for (index, value) in values.iter().enumerate() {
        validate_non_empty_string(&format!("{}[{}]", field_name, index), value)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_non_empty_string() {
        assert!(validate_non_empty_string("currency.unit.singular", "dollar").is_ok());
        assert!(validate_non_empty_string("currency.unit.singular", "").is_err());
        assert!(validate_non_empty_string("currency.unit.singular", "  \t").is_err());
    }

    #[test]
    fn test_validate_non_empty_list_names_offending_entry() {
        let keywords = vec!["exit".to_string(), " ".to_string()];
        match validate_non_empty_list("shell.exit_keywords", &keywords) {
            Err(ConversionError::Config { field, .. }) => {
                assert_eq!(field, "shell.exit_keywords[1]")
            }
            other => panic!("unexpected result: {:?}", other),
        }
        assert!(validate_non_empty_list("shell.exit_keywords", &[]).is_err());
    }
}
