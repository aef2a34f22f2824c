use std::sync::LazyLock;

use gpui::App;

use crate::theme::{SystemAppearance, Theme, ThemeMode, ThemeSnapshot};

/// Extension trait for reading and mutating the app-wide theme state.
///
/// Every accessor tolerates missing globals: without a provider the built-in
/// theme, `System` mode, and a light host signal are assumed, so consuming
/// the theme can never fail.
pub trait ThemeExt {
    /// Replaces the installed theme.
    fn set_theme<T: AsRef<Theme>>(&mut self, theme: T);

    /// Gets the installed theme, or the built-in default when none is set.
    fn get_theme(&self) -> &Theme;

    /// The current mode selection.
    fn theme_mode(&self) -> ThemeMode;

    /// Replaces the mode selection. The snapshot is re-derived on next read.
    fn set_theme_mode(&mut self, mode: ThemeMode);

    /// The mirrored host color scheme.
    fn system_appearance(&self) -> SystemAppearance;

    /// Whether the dark variant is active under the current mode.
    fn theme_is_dark(&self) -> bool;

    /// Derives the snapshot consumed by components for this render pass.
    fn theme(&self) -> ThemeSnapshot<'_>;
}

impl ThemeExt for App {
    fn set_theme<T: AsRef<Theme>>(&mut self, theme: T) {
        self.set_global::<Theme>(theme.as_ref().clone())
    }

    fn get_theme(&self) -> &Theme {
        static FALLBACK: LazyLock<Theme> = LazyLock::new(|| Theme::DEFAULT.as_ref().clone());

        self.try_global::<Theme>().unwrap_or_else(|| &FALLBACK)
    }

    fn theme_mode(&self) -> ThemeMode {
        self.try_global::<ThemeMode>().copied().unwrap_or_default()
    }

    fn set_theme_mode(&mut self, mode: ThemeMode) {
        self.set_global(mode);
    }

    fn system_appearance(&self) -> SystemAppearance {
        self.try_global::<SystemAppearance>()
            .copied()
            .unwrap_or_default()
    }

    fn theme_is_dark(&self) -> bool {
        self.theme_mode()
            .resolve(self.system_appearance().is_dark)
    }

    fn theme(&self) -> ThemeSnapshot<'_> {
        let mode = self.theme_mode();
        let system = self.system_appearance();

        self.get_theme().snapshot(mode, system.is_dark)
    }
}

#[cfg(all(test, feature = "test-support"))]
mod tests {
    use super::*;
    use gpui::TestAppContext;

    #[gpui::test]
    fn test_set_and_get_theme(cx: &mut TestAppContext) {
        cx.update(|cx| {
            cx.set_theme(Theme::DEFAULT);
            let theme = cx.get_theme();
            assert!(!theme.name.is_empty(), "Theme should have a name");
        });
    }

    #[gpui::test]
    fn test_missing_theme_falls_back_to_builtin(cx: &mut TestAppContext) {
        cx.update(|cx| {
            let theme = cx.get_theme();
            assert_eq!(theme.name, Theme::DEFAULT.name);
        });
    }

    #[gpui::test]
    fn test_missing_mode_resolves_light(cx: &mut TestAppContext) {
        cx.update(|cx| {
            assert_eq!(cx.theme_mode(), ThemeMode::System);
            assert!(!cx.theme_is_dark());
            assert!(!cx.theme().is_dark);
        });
    }

    #[gpui::test]
    fn test_mode_switch_rederives_snapshot(cx: &mut TestAppContext) {
        cx.update(|cx| {
            cx.set_theme(Theme::DEFAULT);

            cx.set_theme_mode(ThemeMode::Light);
            let light_background = cx.theme().colors.background;

            cx.set_theme_mode(ThemeMode::Dark);
            let dark_background = cx.theme().colors.background;

            assert!(cx.theme_is_dark());
            assert_ne!(
                light_background, dark_background,
                "switching modes should swap every semantic color"
            );
        });
    }

    #[gpui::test]
    fn test_system_mode_follows_host_signal(cx: &mut TestAppContext) {
        cx.update(|cx| {
            cx.set_theme(Theme::DEFAULT);
            cx.set_theme_mode(ThemeMode::System);

            cx.set_global(SystemAppearance { is_dark: false });
            assert!(!cx.theme_is_dark());

            cx.set_global(SystemAppearance { is_dark: true });
            assert!(cx.theme_is_dark());

            // An explicit mode ignores the host signal.
            cx.set_theme_mode(ThemeMode::Light);
            assert!(!cx.theme_is_dark());
        });
    }

    #[gpui::test]
    fn test_set_mode_is_idempotent(cx: &mut TestAppContext) {
        cx.update(|cx| {
            cx.set_theme(Theme::DEFAULT);

            cx.set_theme_mode(ThemeMode::Dark);
            let first = cx.theme().colors.clone();
            let first_is_dark = cx.theme().is_dark;

            cx.set_theme_mode(ThemeMode::Dark);
            let second = cx.theme().colors.clone();

            assert_eq!(first_is_dark, cx.theme().is_dark);
            assert_eq!(first, second, "repeated set_theme_mode should be a no-op");
        });
    }
}
