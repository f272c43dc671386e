//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.pizzad/config.toml` unless `--config` points elsewhere.
//! If missing on first run, a commented-out default is generated so users can
//! discover all options.

use chrono::format::{Item, StrftimeItems};
use log::{debug, info, warn};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use crate::core::catalog;
use crate::core::pizza::Pizza;

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct PizzadConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub catalog: Vec<CatalogEntry>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    pub shop_name: Option<String>,
    pub currency_symbol: Option<String>,
    pub receipt_date_format: Option<String>,
    pub reset_order_after_receipt: Option<bool>,
}

/// A pre-made pizza as written in the config file.
/// `size` stays a string here so a typo skips one entry instead of failing the whole file.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CatalogEntry {
    pub name: String,
    pub size: String,
    #[serde(default)]
    pub toppings: Vec<String>,
    pub price: Decimal,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_SHOP_NAME: &str = "Pizza Ordering App";
pub const DEFAULT_CURRENCY_SYMBOL: &str = "$";
pub const DEFAULT_RECEIPT_DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub shop_name: String,
    pub currency_symbol: String,
    pub receipt_date_format: String,
    pub reset_order_after_receipt: bool,
    pub catalog: Vec<Pizza>,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        resolve_with_env(&PizzadConfig::default(), &CliOverrides::default(), |_| None)
    }
}

/// Values given on the command line. `false` = flag not given.
#[derive(Debug, Default, Clone)]
pub struct CliOverrides {
    pub reset_order_after_receipt: bool,
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "config I/O error: {e}"),
            ConfigError::Parse(e) => write!(f, "config parse error: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Loading
// ============================================================================

/// Returns the path to `~/.pizzad/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".pizzad").join("config.toml"))
}

/// Load config from `path`, or from `~/.pizzad/config.toml` when `path` is None.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `PizzadConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config(path: Option<&Path>) -> Result<PizzadConfig, ConfigError> {
    let path = match path.map(Path::to_path_buf).or_else(config_path) {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(PizzadConfig::default());
        }
    };

    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(&path);
        return Ok(PizzadConfig::default());
    }

    let contents = fs::read_to_string(&path).map_err(ConfigError::Io)?;
    let config = parse_config(&contents)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

pub fn parse_config(contents: &str) -> Result<PizzadConfig, ConfigError> {
    toml::from_str(contents).map_err(ConfigError::Parse)
}

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &Path) {
    let default_content = r#"# pizzad Configuration
# All settings are optional; defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [general]
# shop_name = "Pizza Ordering App"           # Or set PIZZAD_SHOP_NAME
# currency_symbol = "$"                      # Or set PIZZAD_CURRENCY
# receipt_date_format = "%Y-%m-%d %H:%M:%S"  # chrono strftime syntax
# reset_order_after_receipt = false          # Or PIZZAD_RESET_ORDER / --reset-order

# Pre-made pizzas. Listing any entry replaces the built-in catalog.
# [[catalog]]
# name = "Margherita"
# size = "Medium"                            # "Small", "Medium" or "Large"
# toppings = ["Cheese", "Tomato"]
# price = "9.99"
"#;

    if let Some(parent) = path.parent() {
        if let Err(e) = fs::create_dir_all(parent) {
            warn!("Failed to create config directory: {}", e);
            return;
        }
    }
    if let Err(e) = fs::write(path, default_content) {
        warn!("Failed to write default config: {}", e);
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
pub fn resolve(config: &PizzadConfig, cli: &CliOverrides) -> ResolvedConfig {
    resolve_with_env(config, cli, |key| std::env::var(key).ok())
}

/// Same as [`resolve`], reading environment variables through `env`.
pub fn resolve_with_env<F>(config: &PizzadConfig, cli: &CliOverrides, env: F) -> ResolvedConfig
where
    F: Fn(&str) -> Option<String>,
{
    // Shop name: env → config → default
    let shop_name = env("PIZZAD_SHOP_NAME")
        .or_else(|| config.general.shop_name.clone())
        .unwrap_or_else(|| DEFAULT_SHOP_NAME.to_string());

    // Currency: env → config → default
    let currency_symbol = env("PIZZAD_CURRENCY")
        .or_else(|| config.general.currency_symbol.clone())
        .unwrap_or_else(|| DEFAULT_CURRENCY_SYMBOL.to_string());

    let receipt_date_format = match config.general.receipt_date_format.as_deref() {
        Some(format) if is_valid_date_format(format) => format.to_string(),
        Some(format) => {
            warn!("Invalid receipt_date_format {:?}, using default", format);
            DEFAULT_RECEIPT_DATE_FORMAT.to_string()
        }
        None => DEFAULT_RECEIPT_DATE_FORMAT.to_string(),
    };

    // Reset policy: CLI flag → env → config → default (off)
    let reset_order_after_receipt = cli.reset_order_after_receipt
        || env("PIZZAD_RESET_ORDER")
            .and_then(|v| parse_bool(&v))
            .or(config.general.reset_order_after_receipt)
            .unwrap_or(false);

    ResolvedConfig {
        shop_name,
        currency_symbol,
        receipt_date_format,
        reset_order_after_receipt,
        catalog: catalog::catalog_from_entries(&config.catalog),
    }
}

/// Whether `format` is strftime syntax chrono can render.
pub fn is_valid_date_format(format: &str) -> bool {
    StrftimeItems::new(format).all(|item| !matches!(item, Item::Error))
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        other => {
            warn!("Ignoring unrecognized boolean value: {:?}", other);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn no_env(_: &str) -> Option<String> {
        None
    }

    #[test]
    fn test_default_config_parses() {
        let config = PizzadConfig::default();
        assert!(config.catalog.is_empty());
        assert!(config.general.shop_name.is_none());
    }

    #[test]
    fn test_resolve_uses_defaults_when_empty() {
        let resolved = resolve_with_env(&PizzadConfig::default(), &CliOverrides::default(), no_env);
        assert_eq!(resolved.shop_name, DEFAULT_SHOP_NAME);
        assert_eq!(resolved.currency_symbol, "$");
        assert_eq!(resolved.receipt_date_format, DEFAULT_RECEIPT_DATE_FORMAT);
        assert!(!resolved.reset_order_after_receipt);
        assert_eq!(resolved.catalog, catalog::default_catalog());
    }

    #[test]
    fn test_resolve_config_values_override_defaults() {
        let config = PizzadConfig {
            general: GeneralConfig {
                shop_name: Some("Luigi's".to_string()),
                currency_symbol: Some("€".to_string()),
                receipt_date_format: Some("%d/%m/%Y".to_string()),
                reset_order_after_receipt: Some(true),
            },
            ..Default::default()
        };
        let resolved = resolve_with_env(&config, &CliOverrides::default(), no_env);
        assert_eq!(resolved.shop_name, "Luigi's");
        assert_eq!(resolved.currency_symbol, "€");
        assert_eq!(resolved.receipt_date_format, "%d/%m/%Y");
        assert!(resolved.reset_order_after_receipt);
    }

    #[test]
    fn test_invalid_date_format_falls_back_to_default() {
        let config = PizzadConfig {
            general: GeneralConfig {
                receipt_date_format: Some("%Q bad %".to_string()),
                ..Default::default()
            },
            ..Default::default()
        };
        let resolved = resolve_with_env(&config, &CliOverrides::default(), no_env);
        assert_eq!(resolved.receipt_date_format, DEFAULT_RECEIPT_DATE_FORMAT);
        assert!(is_valid_date_format("%d/%m/%Y %H:%M"));
        assert!(!is_valid_date_format("%Q"));
    }

    #[test]
    fn test_env_wins_over_config() {
        let config = PizzadConfig {
            general: GeneralConfig {
                shop_name: Some("From file".to_string()),
                reset_order_after_receipt: Some(true),
                ..Default::default()
            },
            ..Default::default()
        };
        let env: HashMap<&str, &str> =
            HashMap::from([("PIZZAD_SHOP_NAME", "From env"), ("PIZZAD_RESET_ORDER", "off")]);
        let resolved = resolve_with_env(&config, &CliOverrides::default(), |k| {
            env.get(k).map(|v| v.to_string())
        });
        assert_eq!(resolved.shop_name, "From env");
        assert!(!resolved.reset_order_after_receipt);
    }

    #[test]
    fn test_cli_reset_flag_wins() {
        let config = PizzadConfig {
            general: GeneralConfig {
                reset_order_after_receipt: Some(false),
                ..Default::default()
            },
            ..Default::default()
        };
        let cli = CliOverrides {
            reset_order_after_receipt: true,
        };
        let resolved = resolve_with_env(&config, &cli, |_| Some("false".to_string()));
        assert!(resolved.reset_order_after_receipt);
    }

    #[test]
    fn test_unrecognized_env_bool_falls_through() {
        let config = PizzadConfig {
            general: GeneralConfig {
                reset_order_after_receipt: Some(true),
                ..Default::default()
            },
            ..Default::default()
        };
        let resolved =
            resolve_with_env(&config, &CliOverrides::default(), |_| Some("maybe".to_string()));
        assert!(resolved.reset_order_after_receipt);
    }

    #[test]
    fn test_toml_with_catalog() {
        let toml_str = r#"
[general]
shop_name = "Slice"
reset_order_after_receipt = true

[[catalog]]
name = "Hawaiian"
size = "Large"
toppings = ["Cheese", "Ham", "Pineapple"]
price = "13.49"

[[catalog]]
name = "Plain"
size = "Small"
price = "7.00"
"#;
        let config = parse_config(toml_str).unwrap();
        assert_eq!(config.general.shop_name.as_deref(), Some("Slice"));
        assert_eq!(config.catalog.len(), 2);
        assert_eq!(config.catalog[0].price, Decimal::new(1349, 2));
        assert!(config.catalog[1].toppings.is_empty());

        let resolved = resolve_with_env(&config, &CliOverrides::default(), no_env);
        assert_eq!(resolved.catalog.len(), 2);
        assert_eq!(resolved.catalog[0].toppings().joined(), "Cheese, Ham, Pineapple");
    }

    #[test]
    fn test_sparse_toml_parses() {
        let config = parse_config("[general]\ncurrency_symbol = \"£\"\n").unwrap();
        assert_eq!(config.general.currency_symbol.as_deref(), Some("£"));
        assert!(config.general.shop_name.is_none());
        assert!(config.catalog.is_empty());
    }

    #[test]
    fn test_malformed_toml_is_parse_error() {
        let err = parse_config("[general\nshop_name = ").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
        assert!(err.to_string().starts_with("config parse error"));
    }
}
