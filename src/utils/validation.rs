use crate::utils::error::{ProductError, Result};

pub fn validate_arg_count<T>(values: &[T], expected: usize) -> Result<()> {
    if values.len() != expected {
        return Err(ProductError::Usage {
            expected,
            found: values.len(),
        });
    }
    Ok(())
}

/// `position` is 1-based, matching how the argument appears on the command line.
pub fn validate_non_empty_string(position: usize, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(ProductError::Parse {
            position,
            value: value.to_string(),
            reason: "is empty".to_string(),
        });
    }
    Ok(())
}
