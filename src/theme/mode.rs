use gpui::WindowAppearance;
use serde::{Deserialize, Serialize};

/// Which theme variant should be active.
///
/// `System` defers to the host's reported color scheme at resolution time,
/// so a mode of `System` is never stored pre-resolved.
#[derive(Debug, Default, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Light,
    Dark,
    #[default]
    System,
}

impl ThemeMode {
    /// Resolves this mode against the host-reported color scheme.
    pub fn resolve(self, system_is_dark: bool) -> bool {
        match self {
            ThemeMode::Light => false,
            ThemeMode::Dark => true,
            ThemeMode::System => system_is_dark,
        }
    }
}

impl gpui::Global for ThemeMode {}

/// The host-reported color scheme, mirrored into a global so `System` mode
/// can resolve against it without holding a window.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SystemAppearance {
    pub is_dark: bool,
}

impl From<WindowAppearance> for SystemAppearance {
    fn from(appearance: WindowAppearance) -> Self {
        Self {
            is_dark: matches!(
                appearance,
                WindowAppearance::Dark | WindowAppearance::VibrantDark
            ),
        }
    }
}

impl gpui::Global for SystemAppearance {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_resolution() {
        assert!(!ThemeMode::Light.resolve(false));
        assert!(!ThemeMode::Light.resolve(true));
        assert!(ThemeMode::Dark.resolve(false));
        assert!(ThemeMode::Dark.resolve(true));
        assert!(!ThemeMode::System.resolve(false));
        assert!(ThemeMode::System.resolve(true));
    }

    #[test]
    fn test_default_mode_is_system() {
        assert_eq!(ThemeMode::default(), ThemeMode::System);
    }

    #[test]
    fn test_system_appearance_defaults_to_light() {
        assert!(!SystemAppearance::default().is_dark);
    }
}
