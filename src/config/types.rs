use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::screen::IdStrategy;

/// Root configuration container.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub navigator: NavigatorConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Navigator behaviour.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NavigatorConfig {
    /// How screen ids are minted (default: sequential).
    #[serde(default)]
    pub id_strategy: IdStrategy,
    /// Report a sheet dismissal as a re-appearance of the presenter.
    /// Toolkits usually skip the presenter's appear callback in that case.
    #[serde(default)]
    pub treat_sheet_dismiss_as_appear_in_presenter: bool,
    /// Number of applied commands kept in the navigation log (default: 64).
    #[serde(default = "default_history_limit")]
    pub history_limit: usize,
}

/// Logging output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Filter used when `RUST_LOG` is unset (default: "info").
    #[serde(default = "default_log_filter")]
    pub filter: String,
    /// Log file. `NAVTREE_LOG` overrides it. No file means no logging.
    #[serde(default)]
    pub file: Option<PathBuf>,
}

fn default_history_limit() -> usize {
    64
}

fn default_log_filter() -> String {
    "info".to_string()
}

impl Default for NavigatorConfig {
    fn default() -> Self {
        Self {
            id_strategy: IdStrategy::default(),
            treat_sheet_dismiss_as_appear_in_presenter: false,
            history_limit: default_history_limit(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: default_log_filter(),
            file: None,
        }
    }
}
