use std::time::Duration;

use gpui::{
    ElementId, IntoElement, ParentElement, Pixels, RenderOnce, Rgba, Styled, div, px, relative,
};
use gpui_transitions::{Transition, TransitionExt};

use crate::{
    theme::ThemeExt,
    utils::{CornerRadiiExt, ElementIdExt},
};

/// Clamps a progress value into the displayable range.
fn clamp_progress(value: f32) -> f32 {
    value.clamp(0., 100.)
}

/// A horizontal progress bar.
///
/// Values outside `0..=100` are clamped, never rejected. When `animated`,
/// the displayed fraction interpolates linearly from its previous value to
/// the new one over `duration`; setting a new value mid-flight retargets
/// the transition, so the latest value always wins.
#[derive(IntoElement)]
pub struct ProgressBar {
    id: ElementId,
    value: f32,
    tint: Option<Rgba>,
    height: Pixels,
    animated: bool,
    duration: Duration,
}

impl ProgressBar {
    pub fn new(id: impl Into<ElementId>) -> Self {
        Self {
            id: id.into(),
            value: 0.,
            tint: None,
            height: px(4.),
            animated: true,
            duration: Duration::from_millis(300),
        }
    }

    /// Progress value between 0 and 100.
    pub fn value(mut self, value: f32) -> Self {
        self.value = value;
        self
    }

    /// Fill color. Defaults to white in dark mode and the primary accent in
    /// light mode.
    pub fn tint(mut self, tint: impl Into<Rgba>) -> Self {
        self.tint = Some(tint.into());
        self
    }

    pub fn height(mut self, height: Pixels) -> Self {
        self.height = height;
        self
    }

    pub fn animated(mut self, animated: bool) -> Self {
        self.animated = animated;
        self
    }

    pub fn duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }
}

impl RenderOnce for ProgressBar {
    fn render(self, window: &mut gpui::Window, cx: &mut gpui::App) -> impl IntoElement {
        let fraction = clamp_progress(self.value) / 100.;

        let theme = cx.theme();
        let tint = self.tint.unwrap_or(if theme.is_dark {
            theme.palette.white.s1
        } else {
            theme.colors.accent.primary
        });
        let track_color = theme.palette.black.s1;
        let corner_radius = theme.layout.corner_radii.xs;

        let fill = div().absolute().top_0().bottom_0().left_0().bg(tint);

        let fill = if self.animated {
            let fill_transition = Transition::new(
                self.id.with_suffix("state:transition:fill"),
                window,
                cx,
                self.duration,
                |_window, _cx| fraction,
            );

            if fill_transition.set(cx, fraction) {
                cx.notify(fill_transition.entity_id());
            }

            fill.with_transitions(fill_transition, |_cx, this, fraction: f32| {
                this.w(relative(fraction))
            })
            .into_any_element()
        } else {
            fill.w(relative(fraction)).into_any_element()
        };

        div()
            .w_full()
            .h(self.height)
            .relative()
            .overflow_hidden()
            .rounded_all(corner_radius)
            .child(div().absolute().inset_0().bg(track_color))
            .child(fill)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamping() {
        assert_eq!(clamp_progress(0.), 0.);
        assert_eq!(clamp_progress(50.), 50.);
        assert_eq!(clamp_progress(100.), 100.);
        assert_eq!(clamp_progress(150.), 100.);
        assert_eq!(clamp_progress(-5.), 0.);
    }

    #[test]
    fn test_defaults() {
        let bar = ProgressBar::new("progress");

        assert_eq!(bar.value, 0.);
        assert!(bar.tint.is_none());
        assert_eq!(bar.height, px(4.));
        assert!(bar.animated);
        assert_eq!(bar.duration, Duration::from_millis(300));
    }

    #[test]
    fn test_builder_chain() {
        let bar = ProgressBar::new("progress")
            .value(150.)
            .height(px(8.))
            .animated(false)
            .duration(Duration::from_millis(500));

        assert_eq!(bar.value, 150., "raw value is kept; clamping happens on render");
        assert_eq!(clamp_progress(bar.value), 100.);
        assert_eq!(bar.height, px(8.));
        assert!(!bar.animated);
        assert_eq!(bar.duration, Duration::from_millis(500));
    }

    #[cfg(feature = "test-support")]
    mod rendering {
        use super::*;
        use crate::theme::{Theme, ThemeExt};
        use gpui::{AppContext, ParentElement, TestAppContext, VisualTestContext};

        #[gpui::test]
        fn test_progress_bar_renders_in_window(cx: &mut TestAppContext) {
            let window = cx.update(|cx| {
                cx.set_theme(Theme::DEFAULT);

                cx.open_window(Default::default(), |_window, cx| {
                    cx.new(|_cx| ProgressTestView)
                })
                .unwrap()
            });

            let _cx = VisualTestContext::from_window(window.into(), cx);
        }

        struct ProgressTestView;

        impl gpui::Render for ProgressTestView {
            fn render(
                &mut self,
                _window: &mut gpui::Window,
                _cx: &mut gpui::Context<Self>,
            ) -> impl IntoElement {
                div()
                    .size_full()
                    .child(ProgressBar::new("animated").value(60.))
                    .child(ProgressBar::new("overflow").value(150.).animated(false))
            }
        }
    }
}
