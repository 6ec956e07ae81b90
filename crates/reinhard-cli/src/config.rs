//! Resolution of transfer settings from file, environment and flags.

use std::path::Path;

use reinhard_core::{Quantization, TransferConfig};

use crate::error::CliError;

/// Environment variable selecting the quantization mode (`truncate` or `round`).
pub const QUANTIZATION_ENV: &str = "REINHARD_QUANTIZATION";

/// Build the engine configuration.
///
/// Later sources win: defaults, then the JSON file, then the environment,
/// then `--round`.
pub fn resolve(
    config_path: Option<&Path>,
    env_quantization: Option<&str>,
    round: bool,
) -> Result<TransferConfig, CliError> {
    let mut config = match config_path {
        Some(path) => {
            let json = std::fs::read_to_string(path)?;
            TransferConfig::from_json(&json)?
        }
        None => TransferConfig::default(),
    };

    if let Some(value) = env_quantization {
        config.quantization = value.parse().map_err(|e| CliError::Env {
            var: QUANTIZATION_ENV,
            reason: format!("{e}"),
        })?;
    }

    if round {
        config.quantization = Quantization::Round;
    }

    tracing::debug!("transfer config: {config:?}");
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_truncate() {
        let config = resolve(None, None, false).unwrap();
        assert_eq!(config, TransferConfig::default());
        assert_eq!(config.quantization, Quantization::Truncate);
    }

    #[test]
    fn test_env_overrides_default() {
        let config = resolve(None, Some("round"), false).unwrap();
        assert_eq!(config.quantization, Quantization::Round);
    }

    #[test]
    fn test_flag_overrides_env() {
        let config = resolve(None, Some("truncate"), true).unwrap();
        assert_eq!(config.quantization, Quantization::Round);
    }

    #[test]
    fn test_bad_env_value() {
        let err = resolve(None, Some("ceil"), false).unwrap_err();
        assert!(matches!(err, CliError::Env { var: QUANTIZATION_ENV, .. }));
    }

    #[test]
    fn test_config_file() {
        let path = std::env::temp_dir().join(format!("reinhard-{}-config.json", std::process::id()));
        std::fs::write(&path, r#"{"quantization": "round", "degenerate_threshold": 1e-6}"#).unwrap();
        let config = resolve(Some(&path), None, false);
        std::fs::remove_file(&path).ok();
        let config = config.unwrap();
        assert_eq!(config.quantization, Quantization::Round);
        assert_eq!(config.degenerate_threshold, 1e-6);
    }

    #[test]
    fn test_missing_config_file_is_io_error() {
        let err = resolve(Some(Path::new("/nonexistent/reinhard.json")), None, false).unwrap_err();
        assert!(matches!(err, CliError::Io(_)));
    }
}
