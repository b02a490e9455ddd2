//! Tree rendering
//!
//! - `theme` - branch glyph themes
//! - `config` - output configuration
//! - `formatter` - `TreeFormatter`, the stdout `TreeOutput` sink

mod config;
mod formatter;
mod theme;

pub use config::OutputConfig;
pub use formatter::TreeFormatter;
pub use theme::Theme;
