//! Events the application reacts to.

use iced::keyboard;
use iced::widget::text_editor;

use studio_core::{ActivityView, FileId};

#[derive(Debug, Clone)]
pub enum Message {
    /// Cursor movement or edit inside the editor widget
    EditorAction(text_editor::Action),

    /// A file was picked in the explorer or search panel
    FileSelected(FileId),

    /// Activity bar selection; switches the exclusive side panel
    ActivitySelected(ActivityView),

    SearchQueryChanged(String),

    /// Save requested (toolbar or Ctrl+S)
    Save,

    /// The in-flight save for this file completed
    Saved(FileId),

    KeyPressed(keyboard::Key, keyboard::Modifiers),
}
