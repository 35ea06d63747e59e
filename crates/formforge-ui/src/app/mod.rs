use iced::{keyboard, Subscription, Task};

use formforge_core::config::UiConfig;
use formforge_core::{FormStore, Responses};

use crate::theme::Palette;

pub mod messages;
pub mod types;
pub mod update;
pub mod view;

pub use messages::*;
pub use types::*;

pub struct App {
    pub store: FormStore,
    pub ui: UiConfig,
    pub drag: Option<DragState>,
    /// Price text as typed, kept while it does not parse
    pub price_draft: Option<String>,
    /// Answers entered while previewing; `None` while editing
    pub preview: Option<Responses>,
    pub status_message: String,
}

impl App {
    pub fn new(flags: Flags) -> (Self, Task<Message>) {
        let mut state = flags.config.new_form();
        if let Some(title) = flags.title {
            state.title = title;
        }

        let app = Self {
            store: FormStore::with_state(state),
            ui: flags.config.ui,
            drag: None,
            price_draft: None,
            preview: None,
            status_message: "Ready | Drag a field type onto the canvas".to_string(),
        };

        (app, Task::none())
    }

    pub fn title(&self) -> String {
        format!("{} - Formforge", self.store.state().title)
    }

    pub fn theme(&self) -> iced::Theme {
        if self.ui.dark {
            iced::Theme::Dark
        } else {
            iced::Theme::Light
        }
    }

    pub fn palette(&self) -> Palette {
        *Palette::for_mode(self.ui.dark)
    }

    pub fn subscription(&self) -> Subscription<Message> {
        keyboard::on_key_press(|key, modifiers| Some(Message::KeyPressed(key, modifiers)))
    }
}

pub fn run(flags: Flags) -> iced::Result {
    let size = iced::Size::new(flags.config.ui.window_width, flags.config.ui.window_height);

    iced::application(App::title, App::update, App::view)
        .subscription(App::subscription)
        .window_size(size)
        .theme(App::theme)
        .antialiasing(true)
        .run_with(move || App::new(flags))
}
