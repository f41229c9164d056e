//! Typed desktop configuration.
//!
//! `DesktopConfig` is read from TOML once at boot. Every key is optional and falls back to the
//! values the window manager uses when no configuration is supplied.

use serde::{Deserialize, Serialize};

use crate::{error::RuntimeError, model::WindowSize};

pub const DEFAULT_CASCADE_ORIGIN: i32 = 100;
pub const DEFAULT_CASCADE_STEP: i32 = 20;
pub const DEFAULT_MIN_WINDOW_WIDTH: i32 = 200;
pub const DEFAULT_MIN_WINDOW_HEIGHT: i32 = 150;

/// What happens to focus when the active window is closed or minimized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FocusHandoff {
    /// Leave every remaining window inactive.
    #[default]
    None,
    /// Activate the topmost remaining visible window.
    TopmostVisible,
}

/// Whether focusing a window changes its place in the stacking order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StackPolicy {
    /// Registry order is append order; focus only toggles the active flag.
    #[default]
    KeepOrder,
    /// Focus moves the window to the end of the registry (top of the stack).
    RaiseOnFocus,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DesktopConfig {
    pub cascade_origin: i32,
    pub cascade_step: i32,
    pub min_window_width: i32,
    pub min_window_height: i32,
    pub focus_handoff: FocusHandoff,
    pub stack_policy: StackPolicy,
}

impl Default for DesktopConfig {
    fn default() -> Self {
        Self {
            cascade_origin: DEFAULT_CASCADE_ORIGIN,
            cascade_step: DEFAULT_CASCADE_STEP,
            min_window_width: DEFAULT_MIN_WINDOW_WIDTH,
            min_window_height: DEFAULT_MIN_WINDOW_HEIGHT,
            focus_handoff: FocusHandoff::default(),
            stack_policy: StackPolicy::default(),
        }
    }
}

impl DesktopConfig {
    /// Parses a TOML document.
    ///
    /// # Errors
    ///
    /// Returns [`RuntimeError::Config`] for malformed TOML, unknown keys, or a non-positive minimum
    /// window size.
    pub fn from_toml_str(raw: &str) -> Result<Self, RuntimeError> {
        let config: Self =
            toml::from_str(raw).map_err(|err| RuntimeError::Config(err.to_string()))?;
        if config.min_window_width <= 0 || config.min_window_height <= 0 {
            return Err(RuntimeError::Config(format!(
                "minimum window size must be positive, got {}x{}",
                config.min_window_width, config.min_window_height
            )));
        }
        Ok(config)
    }

    pub fn min_window_size(&self) -> WindowSize {
        WindowSize {
            width: self.min_window_width,
            height: self.min_window_height,
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn empty_document_yields_defaults() {
        let config = DesktopConfig::from_toml_str("").expect("empty config");
        assert_eq!(config, DesktopConfig::default());
        assert_eq!(config.cascade_origin, 100);
        assert_eq!(config.cascade_step, 20);
    }

    #[test]
    fn parses_policies_in_kebab_case() {
        let config = DesktopConfig::from_toml_str(
            "focus_handoff = \"topmost-visible\"\nstack_policy = \"raise-on-focus\"\ncascade_step = 32\n",
        )
        .expect("config");
        assert_eq!(config.focus_handoff, FocusHandoff::TopmostVisible);
        assert_eq!(config.stack_policy, StackPolicy::RaiseOnFocus);
        assert_eq!(config.cascade_step, 32);
        assert_eq!(config.cascade_origin, DEFAULT_CASCADE_ORIGIN);
    }

    #[test]
    fn rejects_unknown_keys() {
        let err = DesktopConfig::from_toml_str("wallpaper = \"teal\"\n").unwrap_err();
        assert!(matches!(err, RuntimeError::Config(_)));
    }

    #[test]
    fn rejects_non_positive_minimum_size() {
        let err = DesktopConfig::from_toml_str("min_window_width = 0\n").unwrap_err();
        assert!(err.to_string().contains("minimum window size"));
    }
}
