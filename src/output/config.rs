//! Output configuration types

use super::theme::Theme;

/// Configuration for output formatting.
#[derive(Debug, Clone)]
pub struct OutputConfig {
    pub use_color: bool,
    pub theme: Theme,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            use_color: true,
            theme: Theme::Classic,
        }
    }
}
