use gpui::{
    AnyView, Context, IntoElement, ParentElement, Render, Styled, Subscription, Window, div,
};

use crate::theme::{SystemAppearance, Theme, ThemeExt, ThemeMode};

/// Root view that owns theme propagation for a window.
///
/// Seeds the theme and mode globals, applies the active background, text
/// color, and font to everything below it, and keeps `System` mode in sync
/// with the host color scheme for as long as it is mounted. The appearance
/// subscription is dropped with the provider.
pub struct ThemeProvider {
    view: AnyView,
    _appearance_observer: Subscription,
}

impl ThemeProvider {
    /// Creates a provider in `System` mode.
    pub fn new(view: impl Into<AnyView>, window: &mut Window, cx: &mut Context<Self>) -> Self {
        Self::with_mode(view, ThemeMode::System, window, cx)
    }

    /// Creates a provider with an explicit initial mode.
    pub fn with_mode(
        view: impl Into<AnyView>,
        initial_mode: ThemeMode,
        window: &mut Window,
        cx: &mut Context<Self>,
    ) -> Self {
        if !cx.has_global::<Theme>() {
            cx.set_theme(Theme::DEFAULT);
        }

        cx.set_theme_mode(initial_mode);
        cx.set_global(SystemAppearance::from(window.appearance()));

        let _appearance_observer = window.observe_window_appearance(|window, cx| {
            cx.set_global(SystemAppearance::from(window.appearance()));
            window.refresh();
        });

        Self {
            view: view.into(),
            _appearance_observer,
        }
    }
}

impl Render for ThemeProvider {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let theme = cx.theme();
        let background = theme.colors.background;
        let text_color = theme.colors.text.primary;
        let family = theme.typography.family[0].clone();
        let body = theme.typography.styles.body;

        div()
            .size_full()
            .bg(background)
            .text_color(text_color)
            .font_family(family)
            .text_size(body.size)
            .line_height(body.line_height())
            .child(self.view.clone())
    }
}

#[cfg(all(test, feature = "test-support"))]
mod tests {
    use super::*;
    use gpui::{AppContext, TestAppContext, VisualTestContext};

    struct EmptyView;

    impl Render for EmptyView {
        fn render(&mut self, _window: &mut Window, _cx: &mut Context<Self>) -> impl IntoElement {
            div()
        }
    }

    #[gpui::test]
    fn test_provider_seeds_globals(cx: &mut TestAppContext) {
        let window = cx.update(|cx| {
            cx.open_window(Default::default(), |window, cx| {
                let view = cx.new(|_cx| EmptyView);
                cx.new(|cx| ThemeProvider::new(view, window, cx))
            })
            .unwrap()
        });

        let _cx = VisualTestContext::from_window(window.into(), cx);

        cx.update(|cx| {
            assert!(cx.has_global::<Theme>());
            assert_eq!(cx.theme_mode(), ThemeMode::System);
        });
    }

    #[gpui::test]
    fn test_provider_honors_initial_mode(cx: &mut TestAppContext) {
        let window = cx.update(|cx| {
            cx.open_window(Default::default(), |window, cx| {
                let view = cx.new(|_cx| EmptyView);
                cx.new(|cx| ThemeProvider::with_mode(view, ThemeMode::Dark, window, cx))
            })
            .unwrap()
        });

        let _cx = VisualTestContext::from_window(window.into(), cx);

        cx.update(|cx| {
            assert_eq!(cx.theme_mode(), ThemeMode::Dark);
            assert!(cx.theme_is_dark());
        });
    }
}
