use gpui::{
    FontWeight, IntoElement, ParentElement, RenderOnce, Rgba, SharedString, Styled, div,
    prelude::FluentBuilder,
};

use crate::theme::{TextVariant, ThemeColors, ThemeExt};

/// Themed text with a named typography style.
///
/// The color resolves through the standard precedence chain: an explicit
/// `color` wins over the theme's primary text color.
#[derive(IntoElement)]
pub struct Text {
    content: SharedString,
    variant: TextVariant,
    bold: bool,
    color: Option<Rgba>,
    center: bool,
    right: bool,
    uppercase: bool,
    max_lines: Option<usize>,
}

impl Text {
    pub fn new(content: impl Into<SharedString>) -> Self {
        Self {
            content: content.into(),
            variant: TextVariant::default(),
            bold: false,
            color: None,
            center: false,
            right: false,
            uppercase: false,
            max_lines: None,
        }
    }

    pub fn variant(mut self, variant: TextVariant) -> Self {
        self.variant = variant;
        self
    }

    /// Forces a bold weight regardless of the variant's own weight.
    pub fn bold(mut self, bold: bool) -> Self {
        self.bold = bold;
        self
    }

    pub fn color(mut self, color: impl Into<Rgba>) -> Self {
        self.color = Some(color.into());
        self
    }

    pub fn center(mut self, center: bool) -> Self {
        self.center = center;
        self
    }

    pub fn right(mut self, right: bool) -> Self {
        self.right = right;
        self
    }

    pub fn uppercase(mut self, uppercase: bool) -> Self {
        self.uppercase = uppercase;
        self
    }

    /// Truncates the text with an ellipsis after the given number of lines.
    pub fn max_lines(mut self, max_lines: usize) -> Self {
        self.max_lines = Some(max_lines);
        self
    }

    fn resolved_color(&self, colors: &ThemeColors) -> Rgba {
        self.color.unwrap_or(colors.text.primary)
    }
}

impl RenderOnce for Text {
    fn render(self, _window: &mut gpui::Window, cx: &mut gpui::App) -> impl IntoElement {
        let theme = cx.theme();
        let style = *self.variant.resolve(theme.typography);
        let color = self.resolved_color(theme.colors);
        let family = theme.typography.family[0].clone();

        let weight = if self.bold {
            FontWeight::BOLD
        } else {
            style.weight
        };

        let content = if self.uppercase {
            SharedString::from(self.content.to_uppercase())
        } else {
            self.content
        };

        div()
            .font_family(family)
            .text_size(style.size)
            .font_weight(weight)
            .line_height(style.line_height())
            .text_color(color)
            .when(self.center, |this| this.text_center())
            .when(self.right, |this| this.text_right())
            .when_some(self.max_lines, |this, max_lines| this.line_clamp(max_lines))
            .child(content)
    }
}
