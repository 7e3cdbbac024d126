use crate::core::parse::parse_operand;
use crate::domain::model::Calculation;
use crate::domain::ports::OperandSource;
use crate::utils::error::Result;
use crate::utils::validation::validate_arg_count;

pub const OPERAND_COUNT: usize = 2;

/// Runs one multiplication over whatever supplies the operand tokens.
///
/// The engine never writes to stdout; printing the product is the caller's job.
pub struct ProductEngine<S: OperandSource> {
    source: S,
}

impl<S: OperandSource> ProductEngine<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    pub fn run(&self) -> Result<Calculation> {
        product(self.source.operands())
    }
}

/// Multiplies exactly two numeric tokens.
pub fn product(numbers: &[String]) -> Result<Calculation> {
    tracing::debug!("Received {} operand(s): {:?}", numbers.len(), numbers);
    validate_arg_count(numbers, OPERAND_COUNT)?;

    let lhs = parse_operand(1, &numbers[0])?;
    let rhs = parse_operand(2, &numbers[1])?;
    tracing::debug!("Parsed operands: {} x {}", lhs, rhs);

    let calculation = Calculation::new(lhs, rhs);
    match serde_json::to_string(&calculation) {
        Ok(record) => tracing::debug!(calculation = %record, "Computed product"),
        Err(e) => tracing::warn!("Could not serialize calculation record: {}", e),
    }

    Ok(calculation)
}
