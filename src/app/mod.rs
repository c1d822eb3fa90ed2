//! Turns a parsed command line into a printable result.

use crate::config::{CliConfig, Command, TomlConfig};
use crate::core::{checked_add, normalize_with, palindromo_with};
use crate::utils::error::Result;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Outcome {
    Sum {
        a: i64,
        b: i64,
        sum: i64,
    },
    Palindrome {
        input: String,
        normalized: String,
        palindrome: bool,
    },
}

impl Outcome {
    pub fn render(&self, json: bool) -> Result<String> {
        if json {
            return Ok(serde_json::to_string(self)?);
        }
        Ok(match self {
            Outcome::Sum { sum, .. } => sum.to_string(),
            Outcome::Palindrome { palindrome, .. } => palindrome.to_string(),
        })
    }
}

pub fn run(cli: &CliConfig, file: &TomlConfig) -> Result<Outcome> {
    match &cli.command {
        Command::Add { a, b } => {
            tracing::debug!("adding {} and {}", a, b);
            let sum = checked_add(*a, *b)?;
            Ok(Outcome::Sum {
                a: *a,
                b: *b,
                sum,
            })
        }
        Command::Palindrome { text, .. } => {
            let policy = cli.command.policy(file);
            let input = text.join(" ");
            tracing::debug!("checking {:?} with {:?}", input, policy);
            Ok(Outcome::Palindrome {
                normalized: normalize_with(&input, &policy),
                palindrome: palindromo_with(&input, &policy),
                input,
            })
        }
    }
}
