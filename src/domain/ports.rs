/// Anything that can hand the engine the raw operand tokens.
pub trait OperandSource {
    fn operands(&self) -> &[String];
}

impl OperandSource for Vec<String> {
    fn operands(&self) -> &[String] {
        self
    }
}
