use crate::core::OperandSource;
use clap::Parser;
use serde::{Deserialize, Serialize};
use std::ffi::OsString;

/// Every token after the program name is an operand; the tool has no options.
#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "lab-product")]
#[command(about = "Multiply two numbers and print the product")]
#[command(disable_help_flag = true, disable_version_flag = true)]
pub struct CliConfig {
    #[arg(
        value_name = "NUMBER",
        num_args = 0..,
        trailing_var_arg = true,
        allow_hyphen_values = true
    )]
    pub numbers: Vec<String>,
}

impl CliConfig {
    /// Parses a full argv (program name first).
    ///
    /// An escape is inserted after the program name so a leading `--` or a
    /// flag-shaped token reaches `numbers` unchanged.
    pub fn from_argv<I, T>(argv: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString>,
    {
        let mut argv = argv.into_iter().map(Into::into);
        let program = argv.next().unwrap_or_else(|| OsString::from("lab-product"));
        let escaped = [program, OsString::from("--")].into_iter().chain(argv);
        Self::try_parse_from(escaped)
    }
}

impl OperandSource for CliConfig {
    fn operands(&self) -> &[String] {
        &self.numbers
    }
}
