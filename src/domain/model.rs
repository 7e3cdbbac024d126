use serde::{Deserialize, Serialize};
use std::fmt;

/// A parsed command-line number.
///
/// Integer literals stay exact; everything else is carried as `f64`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "lowercase")]
pub enum Operand {
    Int(i64),
    Float(f64),
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "lowercase")]
pub enum Product {
    Int(i128),
    Float(f64),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Calculation {
    pub lhs: Operand,
    pub rhs: Operand,
    pub product: Product,
}

impl Operand {
    pub fn as_f64(self) -> f64 {
        match self {
            Operand::Int(v) => v as f64,
            Operand::Float(v) => v,
        }
    }

    pub fn multiply(self, rhs: Operand) -> Product {
        match (self, rhs) {
            // i64 * i64 always fits in i128
            (Operand::Int(a), Operand::Int(b)) => Product::Int(a as i128 * b as i128),
            (a, b) => Product::Float(a.as_f64() * b.as_f64()),
        }
    }
}

impl Calculation {
    pub fn new(lhs: Operand, rhs: Operand) -> Self {
        Self {
            lhs,
            rhs,
            product: lhs.multiply(rhs),
        }
    }
}

impl fmt::Display for Operand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operand::Int(v) => write!(f, "{}", v),
            Operand::Float(v) => f.write_str(&format_float(*v)),
        }
    }
}

impl fmt::Display for Product {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Product::Int(v) => write!(f, "{}", v),
            Product::Float(v) => f.write_str(&format_float(*v)),
        }
    }
}

/// Shortest round-trip form, always with a fractional part or an exponent.
///
/// `{:?}` switches to exponent notation below 1e-4 and from 1e16 up; the
/// exponent is rewritten with an explicit sign and at least two digits.
pub fn format_float(value: f64) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "inf" } else { "-inf" }.to_string();
    }

    let repr = format!("{:?}", value);
    match repr.split_once('e') {
        Some((mantissa, exponent)) => {
            let (sign, digits) = match exponent.strip_prefix('-') {
                Some(digits) => ('-', digits),
                None => ('+', exponent),
            };
            format!("{}e{}{:0>2}", mantissa, sign, digits)
        }
        None => repr,
    }
}
