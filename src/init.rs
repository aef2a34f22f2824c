use gpui::{App, Window};

use crate::theme::{SystemAppearance, Theme, ThemeExt, ThemeMode};

/// Installs the built-in theme and default mode state, without clobbering
/// anything the app has already set up.
pub fn init(cx: &mut App) {
    if !cx.has_global::<Theme>() {
        cx.set_theme(Theme::DEFAULT);
    }

    if !cx.has_global::<ThemeMode>() {
        cx.set_theme_mode(ThemeMode::default());
    }

    if !cx.has_global::<SystemAppearance>() {
        cx.set_global(SystemAppearance::from(cx.window_appearance()));
    }
}

pub fn init_for_window(window: &mut Window, cx: &mut App) {
    window.set_rem_size(cx.get_theme().layout.text.base_size);
}
