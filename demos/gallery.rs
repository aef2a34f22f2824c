use gpui::{
    AnyElement, App, AppContext, Application, Bounds, Context, IntoElement, ParentElement, Render,
    RenderOnce, SharedString, Styled, Window, WindowBounds, WindowOptions, div, prelude::*, px,
    size,
};
use smallvec::SmallVec;

use gpui_circuit_ui::{
    CircuitAssets, CircuitIconKind, PositionalParentElement as _, assets,
    components::{
        Avatar, Button, ButtonSize, ButtonVariant, CircuitCard, CircuitCardVariant, Icon,
        LearningPathCard, LearningPathDetails, Level, LevelIndicator, ProgressBar, Text,
    },
    theme::{TextVariant, ThemeExt, ThemeMode, ThemeProvider},
};

#[derive(IntoElement)]
struct Section {
    title: SharedString,
    children: SmallVec<[AnyElement; 2]>,
}

impl Section {
    fn new(title: impl Into<SharedString>) -> Self {
        Self {
            title: title.into(),
            children: SmallVec::new(),
        }
    }
}

impl ParentElement for Section {
    fn extend(&mut self, elements: impl IntoIterator<Item = AnyElement>) {
        self.children.extend(elements);
    }
}

impl RenderOnce for Section {
    fn render(self, _window: &mut Window, cx: &mut App) -> impl IntoElement {
        let theme = cx.theme();
        let card = theme.colors.surface.card;
        let border = theme.colors.surface.border;

        div()
            .w_full()
            .p(px(16.))
            .bg(card)
            .border_1()
            .border_color(border)
            .flex()
            .flex_col()
            .gap(px(12.))
            .child(Text::new(self.title).variant(TextVariant::H4))
            .children(self.children)
    }
}

struct Gallery;

impl Render for Gallery {
    fn render(&mut self, window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        gpui_circuit_ui::init_for_window(window, cx);

        let mode = cx.theme_mode();

        div()
            .id("gallery")
            .size_full()
            .overflow_y_scroll()
            .flex()
            .flex_col()
            .gap(px(20.))
            .p(px(32.))
            .child(Text::new("Circuit UI").variant(TextVariant::H3))
            .child(
                Section::new("Theme")
                    .child(
                        div()
                            .flex()
                            .flex_row()
                            .gap(px(8.))
                            .child(mode_button("mode-light", "Light", ThemeMode::Light, mode))
                            .child(mode_button("mode-dark", "Dark", ThemeMode::Dark, mode))
                            .child(mode_button("mode-system", "System", ThemeMode::System, mode)),
                    ),
            )
            .child(
                Section::new("Buttons")
                    .child(
                        div()
                            .flex()
                            .flex_row()
                            .flex_wrap()
                            .gap(px(8.))
                            .child(Button::new("primary", "Primary"))
                            .child(
                                Button::new("secondary", "Secondary")
                                    .variant(ButtonVariant::Secondary),
                            )
                            .child(Button::new("normal", "Normal").variant(ButtonVariant::Normal))
                            .child(
                                Button::new("outline", "Outline").variant(ButtonVariant::Outline),
                            )
                            .child(Button::new("solid", "Solid").variant(ButtonVariant::Solid))
                            .child(Button::new("disabled", "Disabled").disabled(true))
                            .child(Button::new("loading", "Loading").loading(true))
                            .child(Button::new("rounded", "Rounded").rounded(true))
                            .child(
                                Button::new("favorite", "Favorite")
                                    .variant(ButtonVariant::Outline)
                                    .child_left(
                                        Icon::new(CircuitIconKind::Heart).size(px(14.)),
                                    ),
                            ),
                    )
                    .child(
                        Button::new("large", "Large")
                            .size(ButtonSize::Large)
                            .full_width(true),
                    ),
            )
            .child(
                Section::new("Avatar").child(
                    div()
                        .flex()
                        .flex_row()
                        .items_center()
                        .gap(px(16.))
                        .child(Avatar::new("placeholder"))
                        .child(Avatar::new("small").size(px(48.)))
                        .child(
                            Avatar::new("remote")
                                .image_url("https://i.pravatar.cc/160")
                                .size(px(64.)),
                        ),
                ),
            )
            .child(
                Section::new("Progress")
                    .child(ProgressBar::new("quarter").value(25.))
                    .child(ProgressBar::new("half").value(50.).height(px(8.)))
                    .child(ProgressBar::new("overflow").value(150.).animated(false)),
            )
            .child(
                Section::new("Levels")
                    .child(LevelIndicator::new(Level::Beginner))
                    .child(LevelIndicator::new(Level::Intermediate).label("normal"))
                    .child(LevelIndicator::new(Level::Advanced)),
            )
            .child(
                Section::new("Cards")
                    .child(
                        CircuitCard::new("card-started")
                            .title("Digital logic")
                            .is_started(true)
                            .modules(3, 8)
                            .trophies("2")
                            .progress(37.5)
                            .pressable(true)
                            .on_press(|_event, _window, _cx| {}),
                    )
                    .child(
                        CircuitCard::new("card-fresh")
                            .variant(CircuitCardVariant::Horizontal)
                            .title("Analog basics")
                            .description("Resistors, capacitors, and the rest of the family.")
                            .level(Level::Advanced)
                            .is_completed(true)
                            .is_favorite(true)
                            .on_favorite_press(|_event, _window, _cx| {}),
                    )
                    .child(LearningPathCard::new(
                        "path-card",
                        LearningPathDetails {
                            id: "path-1".into(),
                            title: "Electronics 101".into(),
                            cover_image_url: None,
                            circuit_ids: vec!["circuit-1".into()],
                        },
                    )),
            )
    }
}

fn mode_button(
    id: &'static str,
    label: &'static str,
    mode: ThemeMode,
    current: ThemeMode,
) -> Button {
    Button::new(id, label)
        .variant(if mode == current {
            ButtonVariant::Primary
        } else {
            ButtonVariant::Outline
        })
        .on_press(move |_event, window, cx| {
            cx.set_theme_mode(mode);
            window.refresh();
        })
}

fn main() {
    Application::new()
        .with_assets(assets![CircuitAssets])
        .run(|cx: &mut App| {
            gpui_circuit_ui::init(cx);

            let bounds = Bounds::centered(None, size(px(720.), px(900.)), cx);

            cx.open_window(
                WindowOptions {
                    window_bounds: Some(WindowBounds::Windowed(bounds)),
                    ..Default::default()
                },
                |window, cx| {
                    let gallery = cx.new(|_cx| Gallery);
                    cx.new(|cx| ThemeProvider::new(gallery, window, cx))
                },
            )
            .unwrap();

            cx.activate(true);
        });
}
