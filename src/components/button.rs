use std::time::Duration;

use gpui::{
    Animation, AnimationExt as _, App, ClickEvent, CursorStyle, ElementId, InteractiveElement,
    IntoElement, ParentElement, Pixels, RenderOnce, Rgba, SharedString,
    StatefulInteractiveElement, Styled, Window, div, prelude::FluentBuilder,
    pulsating_between, px,
};

use crate::{
    theme::{TextVariant, ThemeExt, ThemeSnapshot},
    utils::{
        CornerRadiiExt, ElementIdExt, PositionalChildren, PositionalParentElement, RgbaExt,
        TRANSPARENT,
    },
    components::Text,
};

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Secondary,
    Normal,
    Outline,
    Solid,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum ButtonSize {
    #[default]
    Medium,
    Large,
}

impl ButtonSize {
    fn text_variant(self) -> TextVariant {
        match self {
            ButtonSize::Medium => TextVariant::Label,
            ButtonSize::Large => TextVariant::H4,
        }
    }
}

/// The fully resolved visual attributes of a button for one render pass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ButtonStyle {
    pub background: Rgba,
    pub text: Rgba,
    pub border: Rgba,
    pub border_width: Pixels,
}

impl ButtonVariant {
    /// Resolves the variant's color table.
    ///
    /// The pressed-state swaps reproduce the design's literal mapping,
    /// including the green-on-primary case, rather than a derived rule.
    pub fn resolve(
        self,
        pressed: bool,
        disabled: bool,
        color: Option<Rgba>,
        theme: &ThemeSnapshot,
    ) -> ButtonStyle {
        let palette = theme.palette;

        if disabled {
            return ButtonStyle {
                background: palette.black.s2,
                text: palette.white.s4,
                border: TRANSPARENT,
                border_width: px(0.),
            };
        }

        let button_color = color.unwrap_or(palette.orange.s1);

        match self {
            ButtonVariant::Primary => ButtonStyle {
                background: if pressed {
                    palette.white.s1
                } else {
                    button_color
                },
                text: if button_color == palette.green.s1 {
                    if pressed {
                        palette.green.s1
                    } else {
                        palette.black.s1
                    }
                } else if pressed {
                    button_color
                } else {
                    palette.white.s1
                },
                border: TRANSPARENT,
                border_width: px(0.),
            },

            ButtonVariant::Secondary => ButtonStyle {
                background: if pressed { button_color } else { TRANSPARENT },
                text: if pressed {
                    palette.white.s1
                } else {
                    button_color
                },
                border: button_color,
                border_width: px(2.),
            },

            ButtonVariant::Normal => ButtonStyle {
                background: if pressed {
                    palette.black.s4.alpha(0.8)
                } else {
                    palette.black.s4
                },
                text: palette.white.s1,
                border: TRANSPARENT,
                border_width: px(0.),
            },

            ButtonVariant::Outline => ButtonStyle {
                background: TRANSPARENT,
                text: button_color,
                border: button_color,
                border_width: px(1.),
            },

            ButtonVariant::Solid => ButtonStyle {
                background: if pressed {
                    palette.white.s1
                } else {
                    palette.blue.s1
                },
                text: if pressed {
                    palette.blue.s1
                } else {
                    palette.white.s1
                },
                border: TRANSPARENT,
                border_width: px(0.),
            },
        }
    }
}

/// A pressable labelled button.
///
/// Press state is purely visual and suppressed while `disabled` or
/// `loading`; `loading` replaces the label with a pulsating indicator.
#[derive(IntoElement)]
pub struct Button {
    id: ElementId,
    label: SharedString,
    variant: ButtonVariant,
    size: ButtonSize,
    color: Option<Rgba>,
    loading: bool,
    disabled: bool,
    full_width: bool,
    rounded: bool,
    on_press: Option<Box<dyn Fn(&ClickEvent, &mut Window, &mut App) + 'static>>,
    children: PositionalChildren,
}

impl Button {
    pub fn new(id: impl Into<ElementId>, label: impl Into<SharedString>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            variant: ButtonVariant::default(),
            size: ButtonSize::default(),
            color: None,
            loading: false,
            disabled: false,
            full_width: false,
            rounded: false,
            on_press: None,
            children: PositionalChildren::default(),
        }
    }

    pub fn variant(mut self, variant: ButtonVariant) -> Self {
        self.variant = variant;
        self
    }

    pub fn size(mut self, size: ButtonSize) -> Self {
        self.size = size;
        self
    }

    /// Custom accent color for the primary and secondary variants.
    pub fn color(mut self, color: impl Into<Rgba>) -> Self {
        self.color = Some(color.into());
        self
    }

    pub fn loading(mut self, loading: bool) -> Self {
        self.loading = loading;
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn full_width(mut self, full_width: bool) -> Self {
        self.full_width = full_width;
        self
    }

    pub fn rounded(mut self, rounded: bool) -> Self {
        self.rounded = rounded;
        self
    }

    pub fn on_press(
        mut self,
        on_press: impl Fn(&ClickEvent, &mut Window, &mut App) + 'static,
    ) -> Self {
        self.on_press = Some(Box::new(on_press));
        self
    }
}

impl PositionalParentElement for Button {
    fn children_mut(&mut self) -> &mut PositionalChildren {
        &mut self.children
    }
}

impl RenderOnce for Button {
    fn render(self, window: &mut gpui::Window, cx: &mut gpui::App) -> impl IntoElement {
        let interactive = !self.disabled && !self.loading;

        let is_pressed_state =
            window.use_keyed_state(self.id.with_suffix("state:pressed"), cx, |_window, _cx| {
                false
            });
        let is_pressed = *is_pressed_state.read(cx) && interactive;

        let theme = cx.theme();
        let style = self
            .variant
            .resolve(is_pressed, self.disabled, self.color, &theme);

        let (vertical_padding, horizontal_padding) = match self.size {
            ButtonSize::Large => (px(8.), px(22.)),
            ButtonSize::Medium => (theme.layout.spacing.md, theme.layout.spacing.lg),
        };
        let corner_radius = if self.rounded {
            theme.layout.corner_radii.pill
        } else {
            px(6.)
        };
        let text_variant = self.size.text_variant();

        let opacity = if self.disabled {
            0.4
        } else if is_pressed {
            0.7
        } else {
            1.
        };

        div()
            .id(self.id.clone())
            .cursor(if self.disabled {
                CursorStyle::OperationNotAllowed
            } else {
                CursorStyle::PointingHand
            })
            .when(self.full_width, |this| this.w_full())
            .flex()
            .flex_col()
            .items_center()
            .justify_center()
            .pt(vertical_padding)
            .pb(vertical_padding)
            .pl(horizontal_padding)
            .pr(horizontal_padding)
            .rounded_all(corner_radius)
            .bg(style.background)
            .opacity(opacity)
            .map(|this| {
                if style.border_width == px(2.) {
                    this.border_2().border_color(style.border)
                } else if style.border_width == px(1.) {
                    this.border_1().border_color(style.border)
                } else {
                    this
                }
            })
            .children(self.children.top)
            .map(|this| {
                if self.loading {
                    this.child(loading_indicator(
                        self.id.with_suffix("loading"),
                        style.text,
                    ))
                } else {
                    this.child(
                        div()
                            .flex()
                            .flex_row()
                            .items_center()
                            .justify_center()
                            .children(
                                self.children
                                    .left
                                    .into_iter()
                                    .map(|icon| div().mr(px(8.)).child(icon)),
                            )
                            .child(
                                Text::new(self.label)
                                    .variant(text_variant)
                                    .color(style.text)
                                    .uppercase(true),
                            )
                            .children(
                                self.children
                                    .right
                                    .into_iter()
                                    .map(|icon| div().ml(px(8.)).child(icon)),
                            ),
                    )
                }
            })
            .children(self.children.bottom)
            .when(interactive, |this| {
                let pressed_on_mouse_down = is_pressed_state.clone();
                let pressed_on_click = is_pressed_state.clone();
                let pressed_on_mouse_up_out = is_pressed_state;
                let on_press = self.on_press;

                this.on_mouse_down(gpui::MouseButton::Left, move |_event, _window, cx| {
                    pressed_on_mouse_down.update(cx, |this, _cx| *this = true);
                    cx.notify(pressed_on_mouse_down.entity_id());
                })
                .on_click(move |event, window, cx| {
                    pressed_on_click.update(cx, |this, _cx| *this = false);
                    cx.notify(pressed_on_click.entity_id());

                    if let Some(on_press) = &on_press {
                        (on_press)(event, window, cx);
                    }
                })
                .on_mouse_up_out(gpui::MouseButton::Left, move |_event, _window, cx| {
                    // Clean up when the pointer clicks down, leaves the
                    // bounds, then releases.
                    pressed_on_mouse_up_out.update(cx, |this, _cx| *this = false);
                    cx.notify(pressed_on_mouse_up_out.entity_id());
                })
            })
    }
}

fn loading_indicator(id: ElementId, color: Rgba) -> impl IntoElement {
    div()
        .w(px(14.))
        .h(px(14.))
        .rounded_full()
        .border_2()
        .border_color(color)
        .with_animation(
            id,
            Animation::new(Duration::from_secs(1))
                .repeat()
                .with_easing(pulsating_between(0.2, 0.9)),
            |this, delta| this.opacity(delta),
        )
}

#[cfg(all(test, feature = "test-support"))]
mod tests {
    use super::*;
    use crate::theme::{Theme, ThemeMode};

    fn light_snapshot(theme: &Theme) -> ThemeSnapshot<'_> {
        theme.snapshot(ThemeMode::Light, false)
    }

    #[gpui::test]
    fn test_primary_variant_colors(cx: &mut gpui::TestAppContext) {
        cx.update(|_cx| {
            let theme = Theme::DEFAULT;
            let snapshot = light_snapshot(&theme);
            let palette = &theme.palette;

            let idle = ButtonVariant::Primary.resolve(false, false, None, &snapshot);
            assert_eq!(idle.background, palette.orange.s1);
            assert_eq!(idle.text, palette.white.s1);
            assert_eq!(idle.border_width, px(0.));

            let pressed = ButtonVariant::Primary.resolve(true, false, None, &snapshot);
            assert_eq!(pressed.background, palette.white.s1);
            assert_eq!(pressed.text, palette.orange.s1);
        });
    }

    #[gpui::test]
    fn test_primary_variant_green_special_case(cx: &mut gpui::TestAppContext) {
        cx.update(|_cx| {
            let theme = Theme::DEFAULT;
            let snapshot = light_snapshot(&theme);
            let palette = &theme.palette;
            let green = palette.green.s1;

            let idle = ButtonVariant::Primary.resolve(false, false, Some(green), &snapshot);
            assert_eq!(idle.background, green);
            assert_eq!(idle.text, palette.black.s1, "green buttons get black text");

            let pressed = ButtonVariant::Primary.resolve(true, false, Some(green), &snapshot);
            assert_eq!(pressed.background, palette.white.s1);
            assert_eq!(pressed.text, green);
        });
    }

    #[gpui::test]
    fn test_secondary_variant_colors(cx: &mut gpui::TestAppContext) {
        cx.update(|_cx| {
            let theme = Theme::DEFAULT;
            let snapshot = light_snapshot(&theme);
            let palette = &theme.palette;

            let idle = ButtonVariant::Secondary.resolve(false, false, None, &snapshot);
            assert_eq!(idle.background, crate::utils::TRANSPARENT);
            assert_eq!(idle.text, palette.orange.s1);
            assert_eq!(idle.border, palette.orange.s1);
            assert_eq!(idle.border_width, px(2.));

            let pressed = ButtonVariant::Secondary.resolve(true, false, None, &snapshot);
            assert_eq!(pressed.background, palette.orange.s1);
            assert_eq!(pressed.text, palette.white.s1);
        });
    }

    #[gpui::test]
    fn test_outline_and_solid_variants(cx: &mut gpui::TestAppContext) {
        cx.update(|_cx| {
            let theme = Theme::DEFAULT;
            let snapshot = light_snapshot(&theme);
            let palette = &theme.palette;

            let outline = ButtonVariant::Outline.resolve(false, false, None, &snapshot);
            assert_eq!(outline.background, crate::utils::TRANSPARENT);
            assert_eq!(outline.border_width, px(1.));

            let solid = ButtonVariant::Solid.resolve(false, false, None, &snapshot);
            assert_eq!(solid.background, palette.blue.s1);
            assert_eq!(solid.text, palette.white.s1);

            let solid_pressed = ButtonVariant::Solid.resolve(true, false, None, &snapshot);
            assert_eq!(solid_pressed.background, palette.white.s1);
            assert_eq!(solid_pressed.text, palette.blue.s1);
        });
    }

    #[gpui::test]
    fn test_disabled_overrides_everything(cx: &mut gpui::TestAppContext) {
        cx.update(|_cx| {
            let theme = Theme::DEFAULT;
            let snapshot = light_snapshot(&theme);
            let palette = &theme.palette;

            for variant in [
                ButtonVariant::Primary,
                ButtonVariant::Secondary,
                ButtonVariant::Normal,
                ButtonVariant::Outline,
                ButtonVariant::Solid,
            ] {
                let style = variant.resolve(true, true, Some(palette.green.s1), &snapshot);
                assert_eq!(style.background, palette.black.s2);
                assert_eq!(style.text, palette.white.s4);
                assert_eq!(style.border_width, px(0.));
            }
        });
    }

    #[gpui::test]
    fn test_size_maps_to_text_variant(cx: &mut gpui::TestAppContext) {
        cx.update(|_cx| {
            assert_eq!(ButtonSize::Medium.text_variant(), TextVariant::Label);
            assert_eq!(ButtonSize::Large.text_variant(), TextVariant::H4);
        });
    }

    #[gpui::test]
    fn test_builder_chain(cx: &mut gpui::TestAppContext) {
        cx.update(|_cx| {
            let button = Button::new("button", "Start")
                .variant(ButtonVariant::Solid)
                .size(ButtonSize::Large)
                .loading(true)
                .full_width(true)
                .rounded(true)
                .disabled(true)
                .on_press(|_event, _window, _cx| {});

            assert_eq!(button.variant, ButtonVariant::Solid);
            assert_eq!(button.size, ButtonSize::Large);
            assert!(button.loading);
            assert!(button.full_width);
            assert!(button.rounded);
            assert!(button.disabled);
            assert!(button.on_press.is_some());
        });
    }

    #[gpui::test]
    fn test_button_renders_in_window(cx: &mut gpui::TestAppContext) {
        use gpui::{AppContext, VisualTestContext};

        let window = cx.update(|cx| {
            cx.set_theme(Theme::DEFAULT);

            cx.open_window(Default::default(), |_window, cx| {
                cx.new(|_cx| ButtonTestView)
            })
            .unwrap()
        });

        let _cx = VisualTestContext::from_window(window.into(), cx);
    }

    struct ButtonTestView;

    impl gpui::Render for ButtonTestView {
        fn render(
            &mut self,
            _window: &mut gpui::Window,
            _cx: &mut gpui::Context<Self>,
        ) -> impl IntoElement {
            div()
                .size_full()
                .child(Button::new("primary", "Start"))
                .child(
                    Button::new("loading", "Saving")
                        .variant(ButtonVariant::Solid)
                        .loading(true),
                )
        }
    }
}
