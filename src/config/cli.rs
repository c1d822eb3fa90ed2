use crate::config::toml_config::TomlConfig;
use crate::core::NormalizationPolicy;
use crate::utils::error::Result;
use crate::utils::logger::LogFormat;
use crate::utils::validation::{validate_path, Validate};
use clap::{Parser, Subcommand};

#[derive(Debug, Clone, Parser)]
#[command(name = "small-checks")]
#[command(about = "Integer addition and palindrome checks")]
pub struct CliConfig {
    /// Path to a TOML configuration file
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    #[arg(short, long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    /// Log output format; overrides `logging.format` from the config file
    #[arg(long, value_enum, global = true)]
    pub log_format: Option<LogFormat>,

    /// Print the result as a JSON object
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Print the sum of two integers
    #[command(allow_negative_numbers = true)]
    Add { a: i64, b: i64 },

    /// Check whether TEXT reads the same forwards and backwards
    Palindrome {
        /// Ignore every character that is not a letter or digit
        #[arg(long)]
        ignore_punctuation: bool,

        /// Treat accented letters as their base letter
        #[arg(long)]
        fold_accents: bool,

        /// Words are joined with a single space
        #[arg(required = true)]
        text: Vec<String>,
    },
}

impl CliConfig {
    /// Loads and validates the config file, or returns defaults when none was given.
    pub fn load_file_config(&self) -> Result<TomlConfig> {
        let Some(path) = &self.config else {
            return Ok(TomlConfig::default());
        };
        let config = TomlConfig::from_file(path)?;
        config.validate()?;
        Ok(config)
    }

    /// Effective log format: command line first, then the config file.
    pub fn log_format(&self, file: &TomlConfig) -> LogFormat {
        self.log_format.unwrap_or(file.logging.format)
    }
}

impl Command {
    /// Policy from the config file with command-line flags switched on over it.
    pub fn policy(&self, file: &TomlConfig) -> NormalizationPolicy {
        let mut policy = file.palindrome;
        if let Command::Palindrome {
            ignore_punctuation,
            fold_accents,
            ..
        } = self
        {
            policy.ignore_punctuation |= *ignore_punctuation;
            policy.fold_accents |= *fold_accents;
        }
        policy
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        if let Some(path) = &self.config {
            validate_path("config", path)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_add_with_negative_numbers() {
        let cli = CliConfig::try_parse_from(["small-checks", "add", "-1", "-5"]).unwrap();
        assert!(matches!(cli.command, Command::Add { a: -1, b: -5 }));
        assert!(!cli.json);
    }

    #[test]
    fn test_parse_palindrome_with_flags() {
        let cli = CliConfig::try_parse_from([
            "small-checks",
            "--json",
            "palindrome",
            "--fold-accents",
            "luz",
            "azul",
        ])
        .unwrap();

        assert!(cli.json);
        match &cli.command {
            Command::Palindrome {
                ignore_punctuation,
                fold_accents,
                text,
            } => {
                assert!(!ignore_punctuation);
                assert!(fold_accents);
                assert_eq!(text, &["luz", "azul"]);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_palindrome_requires_text() {
        assert!(CliConfig::try_parse_from(["small-checks", "palindrome"]).is_err());
    }

    #[test]
    fn test_flags_switch_on_over_file_policy() {
        let file = TomlConfig {
            palindrome: NormalizationPolicy::new(false, true),
            ..Default::default()
        };
        let cli = CliConfig::try_parse_from([
            "small-checks",
            "palindrome",
            "--ignore-punctuation",
            "x",
        ])
        .unwrap();

        assert_eq!(cli.command.policy(&file), NormalizationPolicy::new(true, true));
    }

    #[test]
    fn test_log_format_override() {
        let file = TomlConfig::default();
        let cli = CliConfig::try_parse_from(["small-checks", "--log-format", "json", "add", "1", "2"])
            .unwrap();
        assert_eq!(cli.log_format(&file), LogFormat::Json);
    }

    #[test]
    fn test_blank_config_path_is_rejected() {
        let cli = CliConfig::try_parse_from(["small-checks", "-c", " ", "add", "1", "2"]).unwrap();
        assert!(cli.validate().is_err());
    }
}
