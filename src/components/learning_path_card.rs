use gpui::{
    ClickEvent, CursorStyle, ElementId, InteractiveElement, IntoElement, ObjectFit,
    ParentElement, Pixels, RenderOnce, Rgba, SharedString, SharedUri,
    StatefulInteractiveElement, Styled, StyledImage as _, Window, div, img,
    prelude::FluentBuilder, px,
};
use crate::{
    components::Text,
    theme::{TextVariant, ThemeExt},
    utils::{CornerRadiiExt, ElementIdExt},
};

/// Data backing a learning path card.
#[derive(Debug, Clone)]
pub struct LearningPathDetails {
    pub id: SharedString,
    pub title: SharedString,
    pub cover_image_url: Option<SharedUri>,
    pub circuit_ids: Vec<SharedString>,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum LearningPathCardSize {
    Small,
    #[default]
    Medium,
    Large,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct PathCardDimensions {
    pub height: Pixels,
    pub padding: Pixels,
    pub title_variant: TextVariant,
}

/// A banner card for a learning path, with the cover image washed out
/// behind the title.
#[derive(IntoElement)]
pub struct LearningPathCard {
    id: ElementId,
    learning_path: LearningPathDetails,
    size: LearningPathCardSize,
    background: Option<Rgba>,
    on_press: Option<Box<dyn Fn(&ClickEvent, &mut Window, &mut gpui::App) + 'static>>,
}

impl LearningPathCard {
    pub fn new(id: impl Into<ElementId>, learning_path: LearningPathDetails) -> Self {
        Self {
            id: id.into(),
            learning_path,
            size: LearningPathCardSize::default(),
            background: None,
            on_press: None,
        }
    }

    pub fn size(mut self, size: LearningPathCardSize) -> Self {
        self.size = size;
        self
    }

    /// Defaults to the palette's second pink.
    pub fn background(mut self, background: impl Into<Rgba>) -> Self {
        self.background = Some(background.into());
        self
    }

    pub fn on_press(
        mut self,
        on_press: impl Fn(&ClickEvent, &mut Window, &mut gpui::App) + 'static,
    ) -> Self {
        self.on_press = Some(Box::new(on_press));
        self
    }

    fn dimensions(&self, spacing: &crate::theme::ThemeSpacing) -> PathCardDimensions {
        match self.size {
            LearningPathCardSize::Small => PathCardDimensions {
                height: px(140.),
                padding: spacing.md,
                title_variant: TextVariant::Quote,
            },
            LearningPathCardSize::Medium => PathCardDimensions {
                height: px(160.),
                padding: spacing.custom(5.),
                title_variant: TextVariant::Quote,
            },
            LearningPathCardSize::Large => PathCardDimensions {
                height: px(250.),
                padding: spacing.xxl,
                title_variant: TextVariant::H4,
            },
        }
    }
}

impl RenderOnce for LearningPathCard {
    fn render(self, window: &mut gpui::Window, cx: &mut gpui::App) -> impl IntoElement {
        let is_pressed_state =
            window.use_keyed_state(self.id.with_suffix("state:pressed"), cx, |_window, _cx| {
                false
            });
        let is_pressed = *is_pressed_state.read(cx) && self.on_press.is_some();

        let theme = cx.theme();
        let background = self.background.unwrap_or(theme.palette.pink.s2);
        let shadow = theme
            .layout
            .shadows
            .md
            .to_box_shadow(theme.palette.black.s1);
        let dims = self.dimensions(&theme.layout.spacing);
        let pressable = self.on_press.is_some();

        div()
            .id(self.id.clone())
            .min_w(px(300.))
            .max_w(px(358.))
            .h(dims.height)
            .relative()
            .overflow_hidden()
            .rounded_all(px(6.))
            .bg(background)
            .shadow(vec![shadow])
            .when(is_pressed, |this| this.opacity(0.7))
            .when_some(
                self.learning_path.cover_image_url.clone(),
                |this, cover_image_url| {
                    this.child(
                        div()
                            .absolute()
                            .inset_0()
                            .opacity(0.2)
                            .child(img(cover_image_url).size_full().object_fit(ObjectFit::Cover)),
                    )
                },
            )
            .child(
                div()
                    .size_full()
                    .p(dims.padding)
                    .flex()
                    .flex_col()
                    .justify_between()
                    .child(
                        div().mb(px(12.)).child(
                            Text::new(self.learning_path.title.clone())
                                .variant(dims.title_variant),
                        ),
                    ),
            )
            .when(pressable, |this| {
                let pressed_on_mouse_down = is_pressed_state.clone();
                let pressed_on_click = is_pressed_state.clone();
                let pressed_on_mouse_up_out = is_pressed_state;
                let on_press = self.on_press;

                this.cursor(CursorStyle::PointingHand)
                    .on_mouse_down(gpui::MouseButton::Left, move |_event, _window, cx| {
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
