use crate::domain::model::Operand;
use crate::utils::error::{ProductError, Result};
use crate::utils::validation::validate_non_empty_string;

fn is_integer_literal(text: &str) -> bool {
    let digits = text.strip_prefix(['+', '-']).unwrap_or(text);
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}

/// Parses one command-line token. `position` is 1-based and only used for errors.
pub fn parse_operand(position: usize, raw: &str) -> Result<Operand> {
    validate_non_empty_string(position, raw)?;
    let text = raw.trim();

    let parse_error = |reason: &str| ProductError::Parse {
        position,
        value: raw.to_string(),
        reason: reason.to_string(),
    };

    if is_integer_literal(text) {
        return text
            .parse::<i64>()
            .map(Operand::Int)
            .map_err(|_| parse_error("is outside the 64-bit integer range"));
    }

    match text.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(Operand::Float(value)),
        Ok(_) => Err(parse_error("is not a finite number")),
        Err(_) => Err(parse_error("is not a valid number")),
    }
}
