//! Message handling.

use std::time::Duration;

use iced::keyboard;
use iced::widget::text_editor;
use iced::Task;

use crate::app::{App, Message};

impl App {
    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::EditorAction(action) => {
                let is_edit = action.is_edit();
                self.editor_content.perform(action);

                // The widget is 0-based, the session contract is 1-based.
                let (line, col) = self.editor_content.cursor_position();
                self.session.move_cursor(line as u32 + 1, col as u32 + 1);

                if is_edit {
                    if let Some(id) = self.session.active_id().cloned() {
                        let content = self.editor_content.text();
                        if let Err(e) = self.session.edit(&id, content) {
                            tracing::error!("Edit lost, file vanished from session: {e}");
                        }
                    }
                }
                Task::none()
            }

            Message::FileSelected(id) => {
                self.session.set_active(&id);
                if let Some(file) = self.session.active() {
                    self.editor_content = text_editor::Content::with_text(&file.content);
                }
                self.session.move_cursor(1, 1);
                Task::none()
            }

            Message::ActivitySelected(view) => {
                self.session.set_activity_view(view);
                Task::none()
            }

            Message::SearchQueryChanged(query) => {
                self.search_query = query;
                Task::none()
            }

            Message::Save => {
                if self.session.is_saving() {
                    return Task::none();
                }
                let Some(id) = self.session.active_id().cloned() else {
                    return Task::none();
                };

                self.session.set_saving(true);
                tracing::info!(file = %id, "Saving");

                // Persistence is external; completion is modeled as a short
                // async task so the saving indicator is observable.
                Task::perform(tokio::time::sleep(Duration::from_millis(400)), move |_| {
                    Message::Saved(id.clone())
                })
            }

            Message::Saved(id) => {
                self.session.set_saving(false);
                if let Err(e) = self.session.mark_saved(&id) {
                    tracing::warn!("Saved file no longer open: {e}");
                }
                Task::none()
            }

            Message::KeyPressed(key, modifiers) => {
                if modifiers.command()
                    && matches!(key.as_ref(), keyboard::Key::Character("s"))
                {
                    return self.update(Message::Save);
                }
                Task::none()
            }
        }
    }
}
