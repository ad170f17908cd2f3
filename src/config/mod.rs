pub mod cli;

use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_non_empty_list, validate_non_empty_string, Validate};
use clap::Parser;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "skywards-greeter")]
#[command(about = "Greets the Skywards roster and reports a sum")]
pub struct CliConfig {
    /// Names to greet, in order.
    #[arg(
        long,
        value_delimiter = ',',
        default_values_t = ["Ajlal".to_string(), "Manas".to_string(), "Anas".to_string(), "Wamiq".to_string()]
    )]
    pub names: Vec<String>,

    #[arg(long, default_value = "10")]
    pub lhs: i32,

    #[arg(long, default_value = "20")]
    pub rhs: i32,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl ConfigProvider for CliConfig {
    fn names(&self) -> &[String] {
        &self.names
    }

    fn addends(&self) -> (i32, i32) {
        (self.lhs, self.rhs)
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_non_empty_list("names", &self.names)?;
        // `--names=` parses as a single empty string; refuse it here rather
        // than greet nobody
        for name in &self.names {
            validate_non_empty_string("names", name)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_fixed_roster() {
        let config = CliConfig::parse_from(["skywards-greeter"]);
        assert_eq!(config.names, ["Ajlal", "Manas", "Anas", "Wamiq"]);
        assert_eq!(config.addends(), (10, 20));
        assert!(!config.verbose);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_roster_is_rejected() {
        let config = CliConfig {
            names: vec![],
            lhs: 10,
            rhs: 20,
            verbose: false,
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_empty_names_flag_is_rejected() {
        // `--names=` yields a roster of one empty string, not an empty list
        let config = CliConfig::parse_from(["skywards-greeter", "--names="]);
        assert_eq!(config.names, [""]);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_whitespace_name_is_rejected() {
        let config = CliConfig::parse_from(["skywards-greeter", "--names", "Ajlal,  "]);
        assert!(config.validate().is_err());
    }
}
