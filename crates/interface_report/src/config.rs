//! Report configuration

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Rendering configuration: page geometry, asset location, and the currency
/// words appended to spelled-out totals.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportConfig {
    /// Page width in character columns
    pub page_width: usize,
    /// Page height in lines, bands included
    pub page_lines: usize,
    /// Directory holding the decorative image assets
    pub assets_dir: PathBuf,
    /// Suffix for spelled-out totals, e.g. "Riyals Only"
    pub currency_words: String,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            // Roughly A4 portrait at a 9pt table font.
            page_width: 92,
            page_lines: 56,
            assets_dir: PathBuf::from("."),
            currency_words: "Riyals Only".to_string(),
        }
    }
}

impl ReportConfig {
    /// Loads configuration from the environment (`REPORT_*` variables),
    /// falling back to the defaults for anything unset.
    pub fn from_env() -> Result<Self, ::config::ConfigError> {
        ::config::Config::builder()
            .add_source(::config::Config::try_from(&ReportConfig::default())?)
            .add_source(::config::Environment::with_prefix("REPORT"))
            .build()?
            .try_deserialize()
    }

    /// Width in characters of the ledger and aging tables (bordered tables
    /// sit inside a small side margin).
    pub fn table_width(&self) -> usize {
        self.page_width.saturating_sub(4)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_sane() {
        let cfg = ReportConfig::default();
        assert!(cfg.page_width > 60);
        assert!(cfg.page_lines > 20);
        assert_eq!(cfg.currency_words, "Riyals Only");
        assert!(cfg.table_width() < cfg.page_width);
    }

    #[test]
    fn from_env_falls_back_to_defaults() {
        let cfg = ReportConfig::from_env().unwrap();
        assert_eq!(cfg.page_width, ReportConfig::default().page_width);
    }
}
