use enum_assoc::Assoc;
use gpui::{
    Div, IntoElement, ParentElement, RenderOnce, Rgba, SharedString, Styled, div,
    prelude::FluentBuilder, px,
};

use crate::{
    components::Text,
    theme::{TextVariant, ThemeExt},
};

const ICON_WIDTH: f32 = 60.;
const ICON_HEIGHT: f32 = 20.;
const BAR_GAP: f32 = 10.;
const CIRCLE_GAP: f32 = 5.;

/// Difficulty tiers, ordered from easiest to hardest.
#[derive(Assoc, Debug, Default, Clone, Copy, PartialEq, Eq)]
#[func(pub fn label(&self) -> &'static str)]
#[func(pub fn tier(&self) -> u8)]
pub enum Level {
    #[default]
    #[assoc(label = "beginner")]
    #[assoc(tier = 1)]
    Beginner,
    #[assoc(label = "intermediate")]
    #[assoc(tier = 2)]
    Intermediate,
    #[assoc(label = "advanced")]
    #[assoc(tier = 3)]
    Advanced,
}

impl Level {
    /// Whether the second-tier marks light up for this level.
    pub fn activates_tier2(self) -> bool {
        self.tier() >= 2
    }

    /// Whether the third-tier marks light up for this level.
    pub fn activates_tier3(self) -> bool {
        self.tier() >= 3
    }
}

/// Per-level display label overrides.
#[derive(Debug, Default, Clone)]
pub struct LevelLabels {
    pub beginner: Option<SharedString>,
    pub intermediate: Option<SharedString>,
    pub advanced: Option<SharedString>,
}

impl LevelLabels {
    pub fn for_level(&self, level: Level) -> Option<&SharedString> {
        match level {
            Level::Beginner => self.beginner.as_ref(),
            Level::Intermediate => self.intermediate.as_ref(),
            Level::Advanced => self.advanced.as_ref(),
        }
    }
}

/// The bare difficulty glyph: three circles over two bars, where higher
/// tiers light up more marks.
#[derive(IntoElement)]
pub struct LevelIcon {
    level: Level,
    tint: Option<Rgba>,
    background: Option<Rgba>,
}

impl LevelIcon {
    pub fn new(level: Level) -> Self {
        Self {
            level,
            tint: None,
            background: None,
        }
    }

    /// Color for active marks. Defaults to the palette's second blue.
    pub fn tint(mut self, tint: impl Into<Rgba>) -> Self {
        self.tint = Some(tint.into());
        self
    }

    /// Color for inactive marks.
    pub fn background(mut self, background: impl Into<Rgba>) -> Self {
        self.background = Some(background.into());
        self
    }
}

impl RenderOnce for LevelIcon {
    fn render(self, _window: &mut gpui::Window, cx: &mut gpui::App) -> impl IntoElement {
        let theme = cx.theme();

        let tint = self.tint.unwrap_or(theme.palette.blue.s2);
        let background = self.background.unwrap_or(if theme.is_dark {
            theme.palette.white.s4
        } else {
            theme.palette.black.s4
        });

        let tier2 = self.level.activates_tier2();
        let tier3 = self.level.activates_tier3();
        let mark = |active: bool| if active { tint } else { background };

        div()
            .relative()
            .w(px(ICON_WIDTH))
            .h(px(ICON_HEIGHT))
            .child(
                div()
                    .absolute()
                    .inset_0()
                    .flex()
                    .items_center()
                    .justify_center()
                    .gap(px(BAR_GAP))
                    .child(bar(mark(tier2)))
                    .child(bar(mark(tier3))),
            )
            .child(
                div()
                    .absolute()
                    .inset_0()
                    .flex()
                    .items_center()
                    .justify_center()
                    .gap(px(CIRCLE_GAP))
                    .child(circle(tint))
                    .child(circle(mark(tier2)))
                    .child(circle(mark(tier3))),
            )
    }
}

fn bar(color: Rgba) -> Div {
    div().w(px(10.)).h(px(2.5)).bg(color)
}

fn circle(color: Rgba) -> Div {
    div().w(px(12.)).h(px(12.)).rounded_full().bg(color)
}

/// The difficulty glyph with an uppercased label beside it.
///
/// Label precedence: the per-level override map, then the free-form
/// `label`, then the level's own name.
#[derive(IntoElement)]
pub struct LevelIndicator {
    level: Level,
    tint: Option<Rgba>,
    text_color: Option<Rgba>,
    background: Option<Rgba>,
    label: Option<SharedString>,
    level_labels: LevelLabels,
}

impl LevelIndicator {
    pub fn new(level: Level) -> Self {
        Self {
            level,
            tint: None,
            text_color: None,
            background: None,
            label: None,
            level_labels: LevelLabels::default(),
        }
    }

    /// Color for active marks. Defaults to the palette's second blue.
    pub fn tint(mut self, tint: impl Into<Rgba>) -> Self {
        self.tint = Some(tint.into());
        self
    }

    pub fn text_color(mut self, text_color: impl Into<Rgba>) -> Self {
        self.text_color = Some(text_color.into());
        self
    }

    /// Color for inactive marks.
    pub fn background(mut self, background: impl Into<Rgba>) -> Self {
        self.background = Some(background.into());
        self
    }

    /// Free-form label displayed instead of the level's name.
    pub fn label(mut self, label: impl Into<SharedString>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Per-level label overrides; wins over `label`.
    pub fn level_labels(mut self, level_labels: LevelLabels) -> Self {
        self.level_labels = level_labels;
        self
    }

    fn display_label(&self) -> SharedString {
        if let Some(label) = self.level_labels.for_level(self.level) {
            return label.clone();
        }

        if let Some(label) = &self.label {
            return label.clone();
        }

        self.level.label().into()
    }
}

impl RenderOnce for LevelIndicator {
    fn render(self, _window: &mut gpui::Window, cx: &mut gpui::App) -> impl IntoElement {
        let theme = cx.theme();

        let text_color = self.text_color.unwrap_or(if theme.is_dark {
            theme.palette.white.s1
        } else {
            theme.palette.black.s1
        });
        let background = self.background.unwrap_or(if theme.is_dark {
            theme.palette.white.s4
        } else {
            theme.palette.black.s1
        });

        let display_label = self.display_label();

        div()
            .flex()
            .flex_row()
            .items_center()
            .child(
                LevelIcon::new(self.level)
                    .background(background)
                    .when_some(self.tint, |this, tint| this.tint(tint)),
            )
            .child(
                div().ml(px(8.)).child(
                    Text::new(display_label)
                        .variant(TextVariant::Small)
                        .uppercase(true)
                        .color(text_color),
                ),
            )
    }
}
