use std::path::Path;

use h264::{ScalingListHandling, SessionConfig, TrailingUnitPolicy};
use serde::{Deserialize, Serialize};

use crate::{
    cli::{Args, OutputFormat},
    error::Result,
};

/// Settings read from the optional TOML file. Command line flags win.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Default output format
    pub format: OutputFormat,

    /// List every unit in pretty output
    pub all_units: bool,

    /// Options handed to the parse session
    pub session: SessionConfig,
}

impl AppConfig {
    /// Load configuration from a file, or the defaults when no path is given
    pub fn load(config_path: Option<&Path>) -> Result<Self> {
        match config_path {
            Some(path) => {
                let content = std::fs::read_to_string(path)?;
                Ok(toml::from_str(&content)?)
            }
            None => Ok(Self::default()),
        }
    }

    /// Applies the command line overrides
    pub fn merge_args(mut self, args: &Args) -> Self {
        if let Some(format) = args.format {
            self.format = format;
        }
        if args.all_units {
            self.all_units = true;
        }
        if args.discard_trailing {
            self.session.trailing_unit = TrailingUnitPolicy::Discard;
        }
        if args.raw_sps {
            self.session.emulation_prevention = false;
        }
        if args.skip_scaling_lists {
            self.session.scaling_lists = ScalingListHandling::Skip;
        }
        if args.max_units.is_some() {
            self.session.max_units = args.max_units;
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use clap::Parser;

    use super::*;

    #[test]
    fn test_load_partial_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
format = "json"

[session]
trailing_unit = "discard"
max_units = 10
"#
        )
        .unwrap();

        let config = AppConfig::load(Some(file.path())).unwrap();
        assert_eq!(config.format, OutputFormat::Json);
        assert_eq!(config.session.trailing_unit, TrailingUnitPolicy::Discard);
        assert_eq!(config.session.max_units, Some(10));
        assert!(config.session.emulation_prevention);
    }

    #[test]
    fn test_load_invalid_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "format = 3").unwrap();

        assert!(AppConfig::load(Some(file.path())).is_err());
    }

    #[test]
    fn test_args_override_file() {
        let config = AppConfig {
            format: OutputFormat::Json,
            ..AppConfig::default()
        };

        let args = Args::parse_from(["spsprobe", "-f", "pretty", "--raw-sps", "--skip-scaling-lists"]);
        let config = config.merge_args(&args);

        assert_eq!(config.format, OutputFormat::Pretty);
        assert!(!config.session.emulation_prevention);
        assert_eq!(config.session.scaling_lists, ScalingListHandling::Skip);
        assert_eq!(config.session.trailing_unit, TrailingUnitPolicy::ImplicitTerminator);
    }
}
