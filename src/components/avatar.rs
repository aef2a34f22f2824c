use std::time::Duration;

use gpui::{
    Animation, AnimationExt as _, AnyElement, BoxShadow, ElementId, IntoElement, ObjectFit,
    ParentElement, Pixels, RenderOnce, Rgba, SharedUri, Styled, StyledImage as _, div, img, point,
    prelude::FluentBuilder, pulsating_between, px,
};
use crate::{
    theme::ThemeExt,
    utils::{ElementIdExt, RgbaExt},
};

/// A circular profile image.
///
/// The image passes through `loading` into either `loaded` or `errored`;
/// while loading a pulsating indicator overlays the surface, and on error
/// the placeholder silhouette renders for the rest of the mount with no
/// retry. Without an `image_url` the silhouette renders directly.
#[derive(IntoElement)]
pub struct Avatar {
    id: ElementId,
    image_url: Option<SharedUri>,
    size: Pixels,
    show_shadow: bool,
}

impl Avatar {
    pub fn new(id: impl Into<ElementId>) -> Self {
        Self {
            id: id.into(),
            image_url: None,
            size: px(80.),
            show_shadow: true,
        }
    }

    pub fn image_url(mut self, image_url: impl Into<SharedUri>) -> Self {
        self.image_url = Some(image_url.into());
        self
    }

    pub fn size(mut self, size: Pixels) -> Self {
        self.size = size;
        self
    }

    pub fn show_shadow(mut self, show_shadow: bool) -> Self {
        self.show_shadow = show_shadow;
        self
    }
}

impl RenderOnce for Avatar {
    fn render(self, _window: &mut gpui::Window, cx: &mut gpui::App) -> impl IntoElement {
        let theme = cx.theme();
        let palette = theme.palette;

        let background = if theme.is_dark {
            palette.black.s4
        } else {
            palette.black.s5
        };
        let silhouette_color = if theme.is_dark {
            palette.white.s2
        } else {
            palette.white.s1
        };
        let indicator_color = if theme.is_dark {
            palette.white.s2
        } else {
            palette.black.s2
        };
        let shadow = BoxShadow {
            color: palette.black.s1.alpha(0.3).into(),
            offset: point(px(0.), px(2.)),
            blur_radius: px(3.),
            spread_radius: px(0.),
        };

        let size = self.size;
        let loading_id = self.id.with_suffix("loading");

        div()
            .w(size)
            .min_w(size)
            .h(size)
            .min_h(size)
            .rounded_full()
            .overflow_hidden()
            .bg(background)
            .flex()
            .items_center()
            .justify_center()
            .when(self.show_shadow, |this| this.shadow(vec![shadow]))
            .map(|this| match self.image_url {
                Some(image_url) => this.child(
                    img(image_url)
                        .size_full()
                        .rounded_full()
                        .object_fit(ObjectFit::Cover)
                        .with_loading(move || {
                            loading_indicator(loading_id.clone(), size, indicator_color)
                        })
                        .with_fallback(move || silhouette(size, silhouette_color)),
                ),
                None => this.child(silhouette(size, silhouette_color)),
            })
    }
}

/// The generic head-and-shoulders placeholder.
fn silhouette(size: Pixels, color: Rgba) -> AnyElement {
    let head_size = size * 0.3;
    let body_size = size * 0.5;

    div()
        .size_full()
        .relative()
        .child(
            div()
                .absolute()
                .top(size * 0.15)
                .left((size - head_size) * 0.5)
                .w(head_size)
                .h(head_size)
                .rounded_full()
                .bg(color),
        )
        .child(
            div()
                .absolute()
                .top(size * 0.45)
                .left((size - body_size) * 0.5)
                .w(body_size)
                .h(body_size)
                .rounded_full()
                .bg(color),
        )
        .into_any_element()
}

fn loading_indicator(id: ElementId, size: Pixels, color: Rgba) -> AnyElement {
    div()
        .size_full()
        .flex()
        .items_center()
        .justify_center()
        .child(
            div()
                .w(size * 0.2)
                .h(size * 0.2)
                .rounded_full()
                .border_2()
                .border_color(color)
                .with_animation(
                    id,
                    Animation::new(Duration::from_secs(1))
                        .repeat()
                        .with_easing(pulsating_between(0.2, 0.9)),
                    |this, delta| this.opacity(delta),
                ),
        )
        .into_any_element()
}

#[cfg(all(test, feature = "test-support"))]
mod tests {
    use super::*;
    use crate::theme::Theme;
    use gpui::{AppContext, TestAppContext, VisualTestContext};

    #[gpui::test]
    fn test_avatar_defaults(cx: &mut TestAppContext) {
        cx.update(|_cx| {
            let avatar = Avatar::new("avatar");
            assert!(avatar.image_url.is_none());
            assert_eq!(avatar.size, px(80.));
            assert!(avatar.show_shadow, "Avatar should show a shadow by default");
        });
    }

    #[gpui::test]
    fn test_builder_chain(cx: &mut TestAppContext) {
        cx.update(|_cx| {
            let avatar = Avatar::new("avatar")
                .image_url("https://example.com/profile.png")
                .size(px(48.))
                .show_shadow(false);

            assert!(avatar.image_url.is_some());
            assert_eq!(avatar.size, px(48.));
            assert!(!avatar.show_shadow);
        });
    }

    #[gpui::test]
    fn test_avatar_renders_placeholder_without_image(cx: &mut TestAppContext) {
        let window = cx.update(|cx| {
            cx.set_theme(Theme::DEFAULT);

            cx.open_window(Default::default(), |_window, cx| {
                cx.new(|_cx| AvatarTestView)
            })
            .unwrap()
        });

        let _cx = VisualTestContext::from_window(window.into(), cx);
    }

    struct AvatarTestView;

    impl gpui::Render for AvatarTestView {
        fn render(
            &mut self,
            _window: &mut gpui::Window,
            _cx: &mut gpui::Context<Self>,
        ) -> impl IntoElement {
            div().size_full().child(Avatar::new("avatar"))
        }
    }
}
