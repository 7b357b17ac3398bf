//! Application shell: owns the session and drives the Elm loop.

use iced::widget::text_editor;
use iced::{keyboard, Subscription, Task, Theme};

use studio_core::{Config, Session};

pub mod messages;
pub mod update;
pub mod view;

pub use messages::Message;

/// Launch parameters handed over by the binary.
#[derive(Debug, Clone, Default)]
pub struct Flags {
    pub config: Config,
}

pub struct App {
    /// Open files plus UI state; the single source of truth
    pub session: Session,

    /// Widget-side mirror of the active file's content
    pub editor_content: text_editor::Content,

    /// Current side-panel search query
    pub search_query: String,

    pub config: Config,
}

impl App {
    pub fn new(flags: Flags) -> (Self, Task<Message>) {
        let session = Session::from_seed();
        let editor_content = text_editor::Content::with_text(
            session.active().map(|f| f.content.as_str()).unwrap_or(""),
        );

        tracing::info!(files = session.len(), "Session bootstrapped from seed");

        (
            Self {
                session,
                editor_content,
                search_query: String::new(),
                config: flags.config,
            },
            Task::none(),
        )
    }

    pub fn title(&self) -> String {
        match self.session.active() {
            Some(file) => format!("{} — Typst Studio", file.name),
            None => "Typst Studio".to_string(),
        }
    }

    fn subscription(&self) -> Subscription<Message> {
        // Plain fn pointer (no captures) — all routing happens in update()
        keyboard::on_key_press(|key, modifiers| Some(Message::KeyPressed(key, modifiers)))
    }
}

pub fn run(flags: Flags) -> iced::Result {
    iced::application(App::title, App::update, App::view)
        .subscription(App::subscription)
        .window_size(iced::Size::new(1280.0, 800.0))
        .theme(|_| Theme::Dark)
        .antialiasing(true)
        .run_with(move || App::new(flags))
}
