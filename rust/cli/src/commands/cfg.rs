//! Configuration command handler.
//!
//! Displays the resolved settings together with where each value came from
//! (default, configuration file or environment).
//!
//! # Example Output
//!
//! ```json
//! {
//!   "seed": {
//!     "value": null,
//!     "source": "default"
//!   },
//!   "deal_order": {
//!     "value": "block",
//!     "source": "default"
//!   },
//!   ...
//! }
//! ```

use crate::config;
use crate::error::CliError;
use crate::ui;
use std::io::Write;

/// Handle the cfg command.
///
/// # Errors
///
/// Returns `CliError::Config` if configuration loading fails.
/// Returns `CliError::Io` if writing to output stream fails.
pub fn handle_cfg_command(out: &mut dyn Write, err: &mut dyn Write) -> Result<(), CliError> {
    let resolved = match config::load_with_sources() {
        Ok(r) => r,
        Err(e) => {
            ui::write_error(err, &format!("Invalid configuration: {}", e))?;
            return Err(CliError::Config(e.to_string()));
        }
    };

    let config::ConfigResolved { config, sources } = resolved;
    let display = serde_json::json!({
        "seed": {
            "value": config.seed,
            "source": sources.seed,
        },
        "deal_order": {
            "value": config.deal_order,
            "source": sources.deal_order,
        },
        "rounds": {
            "value": config.rounds,
            "source": sources.rounds,
        }
    });
    let json_str = serde_json::to_string_pretty(&display).map_err(std::io::Error::other)?;
    writeln!(out, "{}", json_str)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn clear_env() {
        for v in [
            "CARDSAGA_CONFIG",
            "CARDSAGA_SEED",
            "CARDSAGA_DEAL_ORDER",
            "CARDSAGA_ROUNDS",
        ] {
            // SAFETY: tests touching the environment are serialized.
            unsafe { std::env::remove_var(v) };
        }
    }

    #[test]
    #[serial]
    fn cfg_displays_defaults_as_json() {
        clear_env();
        let mut out = Vec::new();
        let mut err = Vec::new();
        handle_cfg_command(&mut out, &mut err).unwrap();

        let v: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(v["deal_order"]["value"], "block");
        assert_eq!(v["rounds"]["value"], 1);
        assert_eq!(v["seed"]["source"], "default");
        assert!(err.is_empty(), "should not write to stderr on success");
    }

    #[test]
    #[serial]
    fn cfg_reports_env_source() {
        clear_env();
        // SAFETY: serialized.
        unsafe { std::env::set_var("CARDSAGA_SEED", "31") };
        let mut out = Vec::new();
        let mut err = Vec::new();
        let result = handle_cfg_command(&mut out, &mut err);
        clear_env();

        result.unwrap();
        let v: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(v["seed"]["value"], 31);
        assert_eq!(v["seed"]["source"], "env");
    }

    #[test]
    #[serial]
    fn cfg_handles_config_error() {
        clear_env();
        // SAFETY: serialized.
        unsafe { std::env::set_var("CARDSAGA_ROUNDS", "0") };
        let mut out = Vec::new();
        let mut err = Vec::new();
        let result = handle_cfg_command(&mut out, &mut err);
        clear_env();

        assert!(matches!(result, Err(CliError::Config(_))));
        assert!(String::from_utf8(err).unwrap().contains("Invalid configuration"));
        assert!(out.is_empty());
    }
}
