//! Modal dialog for errors and success messages

use cosmic::Element;
use cosmic::widget::{button, dialog};

use crate::domain::Notice;
use crate::fl;

/// Build the dialog for `notice`; `on_dismiss` is sent by the OK button
pub fn build_notice_dialog<'a, Msg: Clone + 'static>(
    notice: &'a Notice,
    on_dismiss: Msg,
) -> Element<'a, Msg> {
    dialog()
        .title(notice.title())
        .body(notice.message.as_str())
        .primary_action(button::suggested(fl!("ok")).on_press(on_dismiss))
        .into()
}
