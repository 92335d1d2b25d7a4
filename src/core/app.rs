use std::sync::LazyLock;

use cosmic::widget::{self, text_input};
use cosmic::{ApplicationExt, Task, app};

use crate::config::IMAGE_EXTENSIONS;
use crate::core::form::FormState;
use crate::domain::Notice;
use crate::fl;

static TEXT_INPUT_ID: LazyLock<widget::Id> = LazyLock::new(|| widget::Id::new("watermark-text"));

pub(crate) fn run() -> cosmic::iced::Result {
    let settings = cosmic::app::Settings::default()
        .size(cosmic::iced::Size::new(320.0, 300.0));
    cosmic::app::run::<App>(settings, ())
}

pub struct App {
    pub core: app::Core,
    pub form: FormState,
    /// Dialog currently blocking the main window
    pub notice: Option<Notice>,
}

#[derive(Debug, Clone)]
pub enum Msg {
    /// Open the native file picker
    Browse,
    /// Watermark text edited
    TextChanged(String),
    /// Run the pipeline on the current inputs
    Apply,
    /// OK pressed on the dialog
    DismissNotice,
}

impl cosmic::Application for App {
    type Executor = cosmic::executor::Default;

    type Flags = ();

    type Message = Msg;

    const APP_ID: &'static str = "io.github.hojjatabdollahi.watermarker";

    fn core(&self) -> &app::Core {
        &self.core
    }

    fn core_mut(&mut self) -> &mut app::Core {
        &mut self.core
    }

    fn init(
        core: app::Core,
        _flags: Self::Flags,
    ) -> (Self, cosmic::iced::Task<cosmic::Action<Self::Message>>) {
        let mut app = Self {
            core,
            form: FormState::default(),
            notice: None,
        };
        let task = app.update_title();
        (app, task)
    }

    fn view(&self) -> cosmic::Element<'_, Self::Message> {
        let spacing = self.core.system_theme().cosmic().spacing;
        crate::widget::build_form(
            self.form.selection.file_name(),
            &self.form.text,
            TEXT_INPUT_ID.clone(),
            Msg::Browse,
            Msg::TextChanged,
            Msg::Apply,
            spacing,
        )
    }

    fn dialog(&self) -> Option<cosmic::Element<'_, Self::Message>> {
        self.notice
            .as_ref()
            .map(|notice| crate::widget::build_notice_dialog(notice, Msg::DismissNotice))
    }

    fn update(
        &mut self,
        message: Self::Message,
    ) -> cosmic::iced::Task<cosmic::Action<Self::Message>> {
        // The dialog is modal: ignore form input until it is dismissed
        if self.notice.is_some() && !matches!(message, Msg::DismissNotice) {
            return Task::none();
        }

        match message {
            Msg::Browse => {
                let mut dialog = rfd::FileDialog::new()
                    .set_title(fl!("browse-title"))
                    .add_filter(fl!("image-files"), IMAGE_EXTENSIONS);
                if let Some(dir) = dirs::picture_dir() {
                    dialog = dialog.set_directory(dir);
                }

                if self.form.select(dialog.pick_file()) {
                    return text_input::focus(TEXT_INPUT_ID.clone());
                }
                Task::none()
            }
            Msg::TextChanged(text) => {
                self.form.set_text(text);
                Task::none()
            }
            Msg::Apply => {
                self.notice = Some(self.form.apply());
                Task::none()
            }
            Msg::DismissNotice => {
                self.notice = None;
                Task::none()
            }
        }
    }
}

impl App {
    fn update_title(&mut self) -> Task<cosmic::Action<Msg>> {
        let title = fl!("app-title");
        self.set_header_title(title.clone());
        match self.core.main_window_id() {
            Some(id) => self.set_window_title(title, id),
            None => Task::none(),
        }
    }
}
