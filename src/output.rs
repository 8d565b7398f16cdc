//! # Output Configuration
//!
//! Controls whether progress lines use colour and emoji markers.
//!
//! ## Respecting User Preferences
//!
//! - `--color=never|always|auto` - CLI flag for color control
//! - `NO_COLOR` - Disables colors when set (per https://no-color.org/)
//! - `CLICOLOR=0` - Disables colors
//! - `CLICOLOR_FORCE=1` - Forces colors even in non-TTY
//! - `TERM=dumb` - Disables colors for dumb terminals
//!
//! Build pipelines usually run without a TTY, so `auto` falls back to plain
//! text markers such as `[CLONE]` there.

use std::env;

use console::style;

use crate::sync::SyncEvent;

/// Output configuration for controlling colors and emojis.
#[derive(Debug, Clone)]
pub struct OutputConfig {
    /// Whether colors and emojis should be used in output.
    pub use_color: bool,
}

impl OutputConfig {
    /// Create an output configuration from environment and CLI flag.
    ///
    /// `color_flag` is the value of `--color`: "always", "never", or "auto".
    pub fn from_env_and_flag(color_flag: &str) -> Self {
        let use_color = match color_flag.to_lowercase().as_str() {
            "always" => true,
            "never" => false,
            _ => Self::detect_color_support(),
        };

        Self { use_color }
    }

    /// Detect whether color output is supported based on environment.
    fn detect_color_support() -> bool {
        // The presence of the variable (even if empty) disables colors
        if env::var_os("NO_COLOR").is_some() {
            return false;
        }

        if env::var("CLICOLOR").is_ok_and(|v| v == "0") {
            return false;
        }

        if env::var("CLICOLOR_FORCE").is_ok_and(|v| v != "0" && !v.is_empty()) {
            return true;
        }

        if env::var("TERM").is_ok_and(|v| v == "dumb") {
            return false;
        }

        console::Term::stdout().features().colors_supported()
    }

    /// Create a configuration with colors always enabled.
    pub fn with_color() -> Self {
        Self { use_color: true }
    }

    /// Create a configuration with colors always disabled.
    pub fn without_color() -> Self {
        Self { use_color: false }
    }

    /// Renders a progress line for a sync event, prefixed with its marker.
    pub fn format_event(&self, event: &SyncEvent<'_>) -> String {
        let (emoji_str, plain) = match event {
            SyncEvent::Cloned { .. } => ("📥", "[CLONE]"),
            SyncEvent::AlreadyAtVersion { .. } => ("✅", "[OK]"),
            SyncEvent::BranchCheckedOut { .. } => ("🔀", "[BRANCH]"),
            SyncEvent::Pulled { .. } => ("⬇️ ", "[PULL]"),
            SyncEvent::VersionCheckedOut { .. } => ("📌", "[TAG]"),
        };
        let marker = emoji(self, emoji_str, plain);
        let text = event.to_string();
        if self.use_color {
            format!("{} {}", marker, style(text).dim())
        } else {
            format!("{} {}", marker, text)
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self::from_env_and_flag("auto")
    }
}

/// Returns the emoji when colors are enabled, the plain text otherwise.
pub fn emoji<'a>(config: &OutputConfig, emoji_str: &'a str, plain: &'a str) -> &'a str {
    if config.use_color {
        emoji_str
    } else {
        plain
    }
}
