//! Main window form: image picker, text field and apply button

use cosmic::Element;
use cosmic::cosmic_theme::Spacing;
use cosmic::iced::{Alignment, Length};
use cosmic::iced_widget::column;
use cosmic::widget::{self, button, container, text, text_input};

use crate::fl;

/// Build the watermark form
///
/// `selected_name` is shown under the browse button once an image is picked.
pub fn build_form<'a, Msg: Clone + 'static>(
    selected_name: Option<String>,
    text_value: &'a str,
    text_id: widget::Id,
    on_browse: Msg,
    on_text_input: impl Fn(String) -> Msg + 'a,
    on_apply: Msg,
    spacing: Spacing,
) -> Element<'a, Msg> {
    let space_s = spacing.space_s;
    let space_xs = spacing.space_xs;

    let selected = selected_name
        .map(|name| fl!("selected-file", name = name))
        .unwrap_or_default();

    let content = column![
        text::body(fl!("select-image")),
        button::standard(fl!("browse")).on_press(on_browse),
        text::caption(selected),
        text::body(fl!("enter-text")),
        text_input(fl!("text-placeholder"), text_value)
            .id(text_id)
            .on_input(on_text_input)
            .width(Length::Fixed(220.0)),
        button::suggested(fl!("add-watermark")).on_press(on_apply),
    ]
    .spacing(space_xs)
    .align_x(Alignment::Center)
    .width(Length::Fill);

    container(content)
        .padding(space_s)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}
