use gpui::{
    AnyElement, App, BoxShadow, ClickEvent, CursorStyle, ElementId, InteractiveElement,
    IntoElement, ObjectFit, ParentElement, Pixels, RenderOnce, Rgba, SharedString, SharedUri,
    StatefulInteractiveElement, Styled, StyledImage as _, Window, div, img, point,
    prelude::FluentBuilder, px,
};
use smallvec::SmallVec;

use crate::{
    CircuitIconKind,
    components::{Icon, Level, LevelIndicator, ProgressBar, Text},
    theme::{TextVariant, ThemeExt, ThemePalette},
    utils::{CornerRadiiExt, ElementIdExt, RgbaExt, TRANSPARENT},
};

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum CircuitCardVariant {
    Horizontal,
    #[default]
    Vertical,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum CircuitCardSize {
    Small,
    #[default]
    Medium,
    Large,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct CardDimensions {
    pub image_width: Pixels,
    pub image_height: Pixels,
    pub min_width: Pixels,
    pub height: Pixels,
    pub content_height: Option<Pixels>,
}

pub(crate) fn dimensions(size: CircuitCardSize, variant: CircuitCardVariant) -> CardDimensions {
    let (image_height, image_width) = match size {
        CircuitCardSize::Small => (px(140.), px(122.)),
        CircuitCardSize::Medium => (px(160.), px(298.)),
        CircuitCardSize::Large => (px(250.), px(298.)),
    };

    match variant {
        CircuitCardVariant::Horizontal => CardDimensions {
            image_width,
            image_height,
            min_width: px(300.),
            height: px(180.),
            content_height: None,
        },
        CircuitCardVariant::Vertical => CardDimensions {
            image_width,
            image_height,
            min_width: px(300.),
            height: image_height * 2.,
            content_height: Some(image_height),
        },
    }
}

/// The pressed-state color table shared by the card's content.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct CardContentStyle {
    pub background: Rgba,
    pub text: Rgba,
    pub title: Rgba,
    pub tint: Rgba,
}

pub(crate) fn content_style(
    pressed: bool,
    is_dark: bool,
    palette: &ThemePalette,
) -> CardContentStyle {
    CardContentStyle {
        tint: palette.blue.s2,
        text: if pressed {
            palette.white.s1
        } else if is_dark {
            palette.white.s2
        } else {
            palette.black.s2
        },
        title: if pressed {
            palette.white.s1
        } else {
            palette.blue.s2
        },
        background: if pressed {
            palette.blue.s2
        } else if is_dark {
            palette.black.s2
        } else {
            palette.white.s1
        },
    }
}

/// A content card for a single circuit: cover image, title, description or
/// lesson progress, difficulty, and favorite/completion badges.
///
/// Providing explicit children replaces the default content structure while
/// keeping the card chrome. Press state swaps the whole card to its
/// highlighted color table.
#[derive(IntoElement)]
pub struct CircuitCard {
    id: ElementId,
    variant: CircuitCardVariant,
    size: CircuitCardSize,
    show_shadow: bool,
    show_border: bool,
    corner_radius: Pixels,
    background: Option<Rgba>,
    border_color: Option<Rgba>,
    pressable: bool,
    on_press: Option<Box<dyn Fn(&ClickEvent, &mut Window, &mut App) + 'static>>,
    padding: Pixels,
    cover_image_url: Option<SharedUri>,
    title: Option<SharedString>,
    description: Option<SharedString>,
    is_preview: bool,
    is_completed: bool,
    is_favorite: bool,
    on_favorite_press: Option<Box<dyn Fn(&ClickEvent, &mut Window, &mut App) + 'static>>,
    is_started: bool,
    completed_modules: u32,
    total_modules: u32,
    trophies: Option<SharedString>,
    progress: f32,
    level: Level,
    children: SmallVec<[AnyElement; 2]>,
}

impl CircuitCard {
    pub fn new(id: impl Into<ElementId>) -> Self {
        Self {
            id: id.into(),
            variant: CircuitCardVariant::default(),
            size: CircuitCardSize::default(),
            show_shadow: true,
            show_border: true,
            corner_radius: px(6.),
            background: None,
            border_color: None,
            pressable: false,
            on_press: None,
            padding: px(16.),
            cover_image_url: None,
            title: None,
            description: None,
            is_preview: false,
            is_completed: false,
            is_favorite: false,
            on_favorite_press: None,
            is_started: false,
            completed_modules: 0,
            total_modules: 0,
            trophies: None,
            progress: 0.,
            level: Level::default(),
            children: SmallVec::new(),
        }
    }

    pub fn variant(mut self, variant: CircuitCardVariant) -> Self {
        self.variant = variant;
        self
    }

    pub fn size(mut self, size: CircuitCardSize) -> Self {
        self.size = size;
        self
    }

    pub fn show_shadow(mut self, show_shadow: bool) -> Self {
        self.show_shadow = show_shadow;
        self
    }

    pub fn show_border(mut self, show_border: bool) -> Self {
        self.show_border = show_border;
        self
    }

    pub fn corner_radius(mut self, corner_radius: Pixels) -> Self {
        self.corner_radius = corner_radius;
        self
    }

    pub fn background(mut self, background: impl Into<Rgba>) -> Self {
        self.background = Some(background.into());
        self
    }

    pub fn border_color(mut self, border_color: impl Into<Rgba>) -> Self {
        self.border_color = Some(border_color.into());
        self
    }

    /// Makes the whole card react to presses.
    pub fn pressable(mut self, pressable: bool) -> Self {
        self.pressable = pressable;
        self
    }

    /// Called on press; only fires while `pressable`.
    pub fn on_press(
        mut self,
        on_press: impl Fn(&ClickEvent, &mut Window, &mut App) + 'static,
    ) -> Self {
        self.on_press = Some(Box::new(on_press));
        self
    }

    pub fn padding(mut self, padding: Pixels) -> Self {
        self.padding = padding;
        self
    }

    pub fn cover_image_url(mut self, cover_image_url: impl Into<SharedUri>) -> Self {
        self.cover_image_url = Some(cover_image_url.into());
        self
    }

    pub fn title(mut self, title: impl Into<SharedString>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn description(mut self, description: impl Into<SharedString>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn is_preview(mut self, is_preview: bool) -> Self {
        self.is_preview = is_preview;
        self
    }

    pub fn is_completed(mut self, is_completed: bool) -> Self {
        self.is_completed = is_completed;
        self
    }

    pub fn is_favorite(mut self, is_favorite: bool) -> Self {
        self.is_favorite = is_favorite;
        self
    }

    pub fn on_favorite_press(
        mut self,
        on_favorite_press: impl Fn(&ClickEvent, &mut Window, &mut App) + 'static,
    ) -> Self {
        self.on_favorite_press = Some(Box::new(on_favorite_press));
        self
    }

    /// Switches the content to lessons, trophies, and progress.
    pub fn is_started(mut self, is_started: bool) -> Self {
        self.is_started = is_started;
        self
    }

    pub fn modules(mut self, completed: u32, total: u32) -> Self {
        self.completed_modules = completed;
        self.total_modules = total;
        self
    }

    pub fn trophies(mut self, trophies: impl Into<SharedString>) -> Self {
        self.trophies = Some(trophies.into());
        self
    }

    pub fn progress(mut self, progress: f32) -> Self {
        self.progress = progress;
        self
    }

    pub fn level(mut self, level: Level) -> Self {
        self.level = level;
        self
    }
}

impl ParentElement for CircuitCard {
    fn extend(&mut self, elements: impl IntoIterator<Item = AnyElement>) {
        self.children.extend(elements);
    }
}

impl RenderOnce for CircuitCard {
    fn render(self, window: &mut gpui::Window, cx: &mut gpui::App) -> impl IntoElement {
        let is_pressed_state =
            window.use_keyed_state(self.id.with_suffix("state:pressed"), cx, |_window, _cx| {
                false
            });
        let is_pressed = *is_pressed_state.read(cx) && self.pressable;

        let theme = cx.theme();
        let palette = theme.palette;
        let is_dark = theme.is_dark;

        let background = self.background.unwrap_or(if is_dark {
            palette.black.s2
        } else {
            palette.white.s1
        });
        let border_color = self.border_color.unwrap_or(if is_dark {
            palette.black.s4
        } else {
            palette.white.s4
        });
        let shadow = BoxShadow {
            color: palette
                .black
                .s1
                .alpha(if is_dark { 0.4 } else { 0.1 })
                .into(),
            offset: point(px(0.), px(2.)),
            blur_radius: px(6.),
            spread_radius: px(0.),
        };
        let style = content_style(is_pressed, is_dark, palette);

        let dims = dimensions(self.size, self.variant);

        let body = CardBody {
            id: self.id.clone(),
            pressed: is_pressed,
            padding: self.padding,
            title: self.title,
            description: self.description,
            is_preview: self.is_preview,
            is_completed: self.is_completed,
            is_favorite: self.is_favorite,
            on_favorite_press: self.on_favorite_press,
            is_started: self.is_started,
            completed_modules: self.completed_modules,
            total_modules: self.total_modules,
            trophies: self.trophies,
            progress: self.progress,
            level: self.level,
            style,
        };

        div()
            .id(self.id.clone())
            .min_w(dims.min_width)
            .w_full()
            .overflow_hidden()
            .rounded_all(self.corner_radius)
            .bg(if is_pressed {
                palette.blue.s2
            } else {
                background
            })
            .when(self.show_border, |this| {
                this.border_1().border_color(border_color)
            })
            .when(self.show_shadow, |this| this.shadow(vec![shadow]))
            .when(self.pressable, |this| {
                this.cursor(CursorStyle::PointingHand)
            })
            .h(dims.height)
            .map(|this| {
                // Explicit children replace the default content structure.
                if !self.children.is_empty() {
                    return this.child(div().p(self.padding).children(self.children));
                }

                match self.variant {
                    CircuitCardVariant::Horizontal => this.child(
                        div()
                            .flex()
                            .flex_row()
                            .size_full()
                            .when_some(self.cover_image_url, |this, cover_image_url| {
                                this.child(
                                    div()
                                        .w(dims.image_width)
                                        .h_full()
                                        .overflow_hidden()
                                        .child(cover_image(cover_image_url)),
                                )
                            })
                            .child(div().flex_1().child(body)),
                    ),

                    CircuitCardVariant::Vertical => this.child(
                        div()
                            .flex()
                            .flex_col()
                            .size_full()
                            .when_some(self.cover_image_url, |this, cover_image_url| {
                                this.child(
                                    div()
                                        .w_full()
                                        .h(dims.image_height)
                                        .overflow_hidden()
                                        .child(cover_image(cover_image_url)),
                                )
                            })
                            .child(
                                div()
                                    .when_some(dims.content_height, |this, height| {
                                        this.h(height)
                                    })
                                    .child(body),
                            ),
                    ),
                }
            })
            .when(self.pressable, |this| {
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
                    pressed_on_mouse_up_out.update(cx, |this, _cx| *this = false);
                    cx.notify(pressed_on_mouse_up_out.entity_id());
                })
            })
    }
}

fn cover_image(url: SharedUri) -> impl IntoElement {
    img(url).size_full().object_fit(ObjectFit::Cover)
}

/// The default content structure of a card.
#[derive(IntoElement)]
struct CardBody {
    id: ElementId,
    pressed: bool,
    padding: Pixels,
    title: Option<SharedString>,
    description: Option<SharedString>,
    is_preview: bool,
    is_completed: bool,
    is_favorite: bool,
    on_favorite_press: Option<Box<dyn Fn(&ClickEvent, &mut Window, &mut App) + 'static>>,
    is_started: bool,
    completed_modules: u32,
    total_modules: u32,
    trophies: Option<SharedString>,
    progress: f32,
    level: Level,
    style: CardContentStyle,
}

impl RenderOnce for CardBody {
    fn render(self, _window: &mut gpui::Window, cx: &mut gpui::App) -> impl IntoElement {
        let theme = cx.theme();
        let palette = theme.palette;
        let style = self.style;
        let pressed = self.pressed;

        let accent = if pressed {
            palette.white.s2
        } else {
            palette.blue.s2
        };
        let heart_color = if self.is_favorite && !pressed {
            palette.blue.s2
        } else {
            palette.white.s2
        };
        let check_background = if pressed {
            TRANSPARENT
        } else {
            palette.green.s2
        };
        let check_color = if pressed {
            palette.green.s2
        } else {
            palette.white.s1
        };
        let muted = palette.white.s2;
        let preview_background = palette.black.s4;
        let chip_radius = theme.layout.corner_radii.sm;

        div()
            .size_full()
            .p(self.padding)
            .bg(style.background)
            .flex()
            .flex_col()
            .justify_between()
            .when_some(self.title, |this, title| {
                this.child(
                    div()
                        .flex()
                        .flex_row()
                        .justify_between()
                        .items_start()
                        .mb(px(8.))
                        .child(
                            div()
                                .flex()
                                .flex_row()
                                .items_center()
                                .flex_1()
                                .child(
                                    Text::new(title)
                                        .variant(TextVariant::H5)
                                        .color(style.title)
                                        .max_lines(2),
                                )
                                .when(self.is_preview, |this| {
                                    this.child(
                                        div()
                                            .ml(px(8.))
                                            .pl(px(6.))
                                            .pr(px(6.))
                                            .pt(px(2.))
                                            .pb(px(2.))
                                            .rounded_all(chip_radius)
                                            .bg(preview_background)
                                            .child(
                                                Text::new("PREVIEW")
                                                    .variant(TextVariant::Small)
                                                    .color(palette.white.s1),
                                            ),
                                    )
                                }),
                        )
                        .child(
                            div()
                                .flex()
                                .flex_row()
                                .items_center()
                                .when(self.is_completed, |this| {
                                    this.child(
                                        div()
                                            .mr(px(8.))
                                            .w(px(24.))
                                            .h(px(24.))
                                            .rounded_full()
                                            .bg(check_background)
                                            .flex()
                                            .items_center()
                                            .justify_center()
                                            .child(
                                                Icon::new(CircuitIconKind::Check)
                                                    .size(px(18.))
                                                    .color(check_color),
                                            ),
                                    )
                                })
                                .when_some(
                                    self.on_favorite_press,
                                    |this, on_favorite_press| {
                                        this.child(
                                            div()
                                                .id(self.id.with_suffix("favorite"))
                                                .w(px(28.))
                                                .h(px(28.))
                                                .flex()
                                                .items_center()
                                                .justify_center()
                                                .cursor(CursorStyle::PointingHand)
                                                .on_click(move |event, window, cx| {
                                                    cx.stop_propagation();
                                                    (on_favorite_press)(event, window, cx);
                                                })
                                                .child(
                                                    Icon::new(CircuitIconKind::Heart)
                                                        .size(px(20.))
                                                        .color(heart_color),
                                                ),
                                        )
                                    },
                                ),
                        ),
                )
            })
            .map(|this| {
                if self.is_started {
                    this.child(
                        div()
                            .flex_1()
                            .mt(px(8.))
                            .mb(px(8.))
                            .flex()
                            .flex_row()
                            .justify_start()
                            .items_start()
                            .gap(px(24.))
                            .child(
                                div()
                                    .flex()
                                    .flex_col()
                                    .gap(px(4.))
                                    .child(
                                        Text::new("Lessons")
                                            .variant(TextVariant::Small)
                                            .uppercase(true)
                                            .color(muted),
                                    )
                                    .child(
                                        Text::new(format!(
                                            "{}/{}",
                                            self.completed_modules, self.total_modules
                                        ))
                                        .variant(TextVariant::Label)
                                        .color(accent),
                                    ),
                            )
                            .when_some(self.trophies, |this, trophies| {
                                this.child(
                                    div()
                                        .flex()
                                        .flex_col()
                                        .gap(px(4.))
                                        .child(
                                            Text::new("Trophies")
                                                .variant(TextVariant::Small)
                                                .uppercase(true)
                                                .color(muted),
                                        )
                                        .child(
                                            Text::new(trophies)
                                                .variant(TextVariant::Label)
                                                .color(accent),
                                        ),
                                )
                            }),
                    )
                } else {
                    this.child(
                        div()
                            .flex_1()
                            .mt(px(8.))
                            .mb(px(8.))
                            .when_some(self.description, |this, description| {
                                this.child(
                                    Text::new(description)
                                        .variant(TextVariant::Small)
                                        .color(style.text)
                                        .max_lines(4),
                                )
                            }),
                    )
                }
            })
            .map(|this| {
                if self.is_started {
                    this.child(
                        div()
                            .mt(px(8.))
                            .flex()
                            .flex_col()
                            .gap(px(8.))
                            .child(
                                Text::new("Progress:")
                                    .variant(TextVariant::Small)
                                    .uppercase(true)
                                    .color(muted),
                            )
                            .child(
                                ProgressBar::new(self.id.with_suffix("progress"))
                                    .value(self.progress)
                                    .tint(accent),
                            ),
                    )
                } else {
                    this.child(
                        div().mt(px(8.)).child(
                            LevelIndicator::new(self.level)
                                .tint(accent)
                                .text_color(muted)
                                .background(if pressed {
                                    palette.black.s1
                                } else {
                                    palette.black.s4
                                }),
                        ),
                    )
                }
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::Theme;

    #[test]
    fn test_dimensions_table() {
        let small = dimensions(CircuitCardSize::Small, CircuitCardVariant::Vertical);
        assert_eq!(small.image_height, px(140.));
        assert_eq!(small.image_width, px(122.));
        assert_eq!(small.height, px(280.));
        assert_eq!(small.content_height, Some(px(140.)));

        let medium = dimensions(CircuitCardSize::Medium, CircuitCardVariant::Vertical);
        assert_eq!(medium.image_height, px(160.));
        assert_eq!(medium.height, px(320.));

        let large = dimensions(CircuitCardSize::Large, CircuitCardVariant::Horizontal);
        assert_eq!(large.image_height, px(250.));
        assert_eq!(large.height, px(180.));
        assert_eq!(large.content_height, None);

        for size in [
            CircuitCardSize::Small,
            CircuitCardSize::Medium,
            CircuitCardSize::Large,
        ] {
            assert_eq!(
                dimensions(size, CircuitCardVariant::Horizontal).min_width,
                px(300.)
            );
        }
    }

    #[test]
    fn test_content_style_pressed_swap() {
        let palette = &Theme::DEFAULT.palette;

        let idle_light = content_style(false, false, palette);
        assert_eq!(idle_light.background, palette.white.s1);
        assert_eq!(idle_light.text, palette.black.s2);
        assert_eq!(idle_light.title, palette.blue.s2);

        let idle_dark = content_style(false, true, palette);
        assert_eq!(idle_dark.background, palette.black.s2);
        assert_eq!(idle_dark.text, palette.white.s2);

        // Press swaps to the highlighted table regardless of mode.
        for is_dark in [false, true] {
            let pressed = content_style(true, is_dark, palette);
            assert_eq!(pressed.background, palette.blue.s2);
            assert_eq!(pressed.text, palette.white.s1);
            assert_eq!(pressed.title, palette.white.s1);
        }
    }

    #[test]
    fn test_builder_defaults() {
        let card = CircuitCard::new("card");

        assert_eq!(card.variant, CircuitCardVariant::Vertical);
        assert_eq!(card.size, CircuitCardSize::Medium);
        assert!(card.show_shadow);
        assert!(card.show_border);
        assert_eq!(card.corner_radius, px(6.));
        assert_eq!(card.padding, px(16.));
        assert!(!card.pressable);
        assert!(!card.is_started);
        assert_eq!(card.level, Level::Beginner);
    }

    #[cfg(feature = "test-support")]
    mod rendering {
        use super::*;
        use crate::theme::ThemeExt;
        use gpui::{AppContext, TestAppContext, VisualTestContext, div};

        #[gpui::test]
        fn test_card_renders_in_window(cx: &mut TestAppContext) {
            let window = cx.update(|cx| {
                cx.set_theme(Theme::DEFAULT);

                cx.open_window(Default::default(), |_window, cx| {
                    cx.new(|_cx| CardTestView)
                })
                .unwrap()
            });

            let _cx = VisualTestContext::from_window(window.into(), cx);
        }

        struct CardTestView;

        impl gpui::Render for CardTestView {
            fn render(
                &mut self,
                _window: &mut gpui::Window,
                _cx: &mut gpui::Context<Self>,
            ) -> impl IntoElement {
                div()
                    .size_full()
                    .child(
                        CircuitCard::new("started")
                            .title("Digital logic")
                            .is_started(true)
                            .modules(3, 8)
                            .trophies("2")
                            .progress(37.5)
                            .pressable(true),
                    )
                    .child(
                        CircuitCard::new("fresh")
                            .variant(CircuitCardVariant::Horizontal)
                            .title("Analog basics")
                            .description("Resistors, capacitors, and friends.")
                            .level(Level::Advanced)
                            .is_completed(true)
                            .is_favorite(true)
                            .on_favorite_press(|_event, _window, _cx| {}),
                    )
            }
        }
    }
}
