//! Session state: the set of open files plus UI state.
//!
//! ## Learning: Composition over Inheritance
//!
//! Rust doesn't have inheritance. `Session` composes the open-file list
//! with cursor, saving, and side-panel state, and exposes the operations
//! the UI needs; nothing else can put the session into an invalid shape.

use serde::{Deserialize, Serialize};

use crate::document::{File, FileId};
use crate::seed;
use crate::{CoreError, CoreResult};

/// Side-panel mode selector. Exactly one is active at a time — the
/// exclusivity invariant holds because this is a single enum field on
/// [`Session`], not a set of booleans.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ActivityView {
    #[default]
    Explorer,
    Search,
    Settings,
}

/// 1-based cursor position.
///
/// Values are not validated here: a zero or negative position supplied by a
/// caller propagates unchanged into whatever displays it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CursorPosition {
    pub line: u32,
    pub col: u32,
}

impl Default for CursorPosition {
    fn default() -> Self {
        Self { line: 1, col: 1 }
    }
}

/// The set of currently open files plus UI state (active view, cursor
/// position, saving flag).
#[derive(Debug, Clone)]
pub struct Session {
    /// Open files, in tab order
    files: Vec<File>,

    /// Currently active file
    active: Option<FileId>,

    /// Which side panel is visible
    activity_view: ActivityView,

    /// Cursor position in the active file
    cursor: CursorPosition,

    /// True while a save is in flight
    is_saving: bool,
}

impl Session {
    /// Creates an empty session.
    pub fn new() -> Self {
        Self {
            files: Vec::new(),
            active: None,
            activity_view: ActivityView::default(),
            cursor: CursorPosition::default(),
            is_saving: false,
        }
    }

    /// Creates a session bootstrapped from the seed files, with the first
    /// one active.
    pub fn from_seed() -> Self {
        let files = seed::initial_files();
        let active = files.first().map(|f| f.id.clone());
        Self {
            files,
            active,
            activity_view: ActivityView::default(),
            cursor: CursorPosition::default(),
            is_saving: false,
        }
    }

    // ==================== File lifecycle ====================

    /// Opens a file and makes it active.
    ///
    /// Rejects ids already present in the session; ids must stay unique
    /// across the open set.
    pub fn open(&mut self, file: File) -> CoreResult<()> {
        if self.files.iter().any(|f| f.id == file.id) {
            return Err(CoreError::DuplicateFileId(file.id));
        }
        self.active = Some(file.id.clone());
        self.files.push(file);
        Ok(())
    }

    /// Closes a file. If it was active, the last remaining file becomes
    /// active. Unsaved edits are discarded with the file.
    pub fn close(&mut self, id: &FileId) -> CoreResult<()> {
        if !self.files.iter().any(|f| &f.id == id) {
            return Err(CoreError::FileNotFound(id.clone()));
        }

        self.files.retain(|f| &f.id != id);

        if self.active.as_ref() == Some(id) {
            self.active = self.files.last().map(|f| f.id.clone());
        }

        Ok(())
    }

    /// Renames a file; identity and content are untouched.
    pub fn rename(&mut self, id: &FileId, name: impl Into<String>) -> CoreResult<()> {
        let file = self.get_mut(id).ok_or_else(|| CoreError::FileNotFound(id.clone()))?;
        file.name = name.into();
        Ok(())
    }

    /// Replaces a file's content and marks it unsaved.
    pub fn edit(&mut self, id: &FileId, content: impl Into<String>) -> CoreResult<()> {
        let file = self.get_mut(id).ok_or_else(|| CoreError::FileNotFound(id.clone()))?;
        file.content = content.into();
        file.is_unsaved = true;
        Ok(())
    }

    /// Clears the unsaved flag after the external persistence collaborator
    /// confirms a snapshot.
    pub fn mark_saved(&mut self, id: &FileId) -> CoreResult<()> {
        let file = self.get_mut(id).ok_or_else(|| CoreError::FileNotFound(id.clone()))?;
        file.is_unsaved = false;
        Ok(())
    }

    // ==================== Lookup ====================

    /// Returns a file by id.
    pub fn get(&self, id: &FileId) -> Option<&File> {
        self.files.iter().find(|f| &f.id == id)
    }

    /// Returns a mutable file by id.
    pub fn get_mut(&mut self, id: &FileId) -> Option<&mut File> {
        self.files.iter_mut().find(|f| &f.id == id)
    }

    /// Returns the active file.
    pub fn active(&self) -> Option<&File> {
        self.active.as_ref().and_then(|id| self.get(id))
    }

    /// Returns the active file id.
    pub fn active_id(&self) -> Option<&FileId> {
        self.active.as_ref()
    }

    /// Returns a mutable reference to the active file.
    pub fn active_mut(&mut self) -> Option<&mut File> {
        let id = self.active.clone()?;
        self.get_mut(&id)
    }

    /// Makes a file active. Ignored for unknown ids.
    pub fn set_active(&mut self, id: &FileId) {
        if self.files.iter().any(|f| &f.id == id) {
            self.active = Some(id.clone());
        }
    }

    /// Returns the open files in tab order.
    pub fn files(&self) -> &[File] {
        &self.files
    }

    /// Returns the number of open files.
    pub fn len(&self) -> usize {
        self.files.len()
    }

    /// Returns true if no files are open.
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    // ==================== UI state ====================

    pub fn activity_view(&self) -> ActivityView {
        self.activity_view
    }

    pub fn set_activity_view(&mut self, view: ActivityView) {
        self.activity_view = view;
    }

    pub fn cursor(&self) -> CursorPosition {
        self.cursor
    }

    /// Moves the cursor. Positions are 1-based and taken as given.
    pub fn move_cursor(&mut self, line: u32, col: u32) {
        self.cursor = CursorPosition { line, col };
    }

    pub fn is_saving(&self) -> bool {
        self.is_saving
    }

    pub fn set_saving(&mut self, saving: bool) {
        self.is_saving = saving;
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::Language;

    fn file(id: &str, name: &str) -> File {
        File::new(id, name, Language::Typst, "")
    }

    #[test]
    fn test_seed_session_has_two_typst_files() {
        let session = Session::from_seed();
        assert_eq!(session.len(), 2);
        assert_eq!(session.active().unwrap().id.as_str(), "1");
        assert!(session.files().iter().all(|f| f.language == Language::Typst));
    }

    #[test]
    fn test_open_rejects_duplicate_id() {
        let mut session = Session::new();
        session.open(file("1", "a.typ")).unwrap();
        let err = session.open(file("1", "b.typ")).unwrap_err();
        assert!(matches!(err, CoreError::DuplicateFileId(_)));
        assert_eq!(session.len(), 1);
    }

    #[test]
    fn test_close_falls_back_to_last_remaining() {
        let mut session = Session::from_seed();
        let id = FileId::from("2");
        session.set_active(&id);
        session.close(&id).unwrap();
        assert_eq!(session.active().unwrap().id.as_str(), "1");
    }

    #[test]
    fn test_close_unknown_file() {
        let mut session = Session::new();
        let err = session.close(&FileId::from("nope")).unwrap_err();
        assert!(matches!(err, CoreError::FileNotFound(_)));
    }

    #[test]
    fn test_edit_marks_unsaved_and_save_clears_it() {
        let mut session = Session::from_seed();
        let id = FileId::from("1");

        session.edit(&id, "= Changed").unwrap();
        assert!(session.get(&id).unwrap().is_unsaved);
        assert_eq!(session.get(&id).unwrap().content, "= Changed");

        session.mark_saved(&id).unwrap();
        assert!(!session.get(&id).unwrap().is_unsaved);
    }

    #[test]
    fn test_rename_keeps_identity() {
        let mut session = Session::from_seed();
        let id = FileId::from("2");
        session.rename(&id, "theme.typ").unwrap();
        let renamed = session.get(&id).unwrap();
        assert_eq!(renamed.name, "theme.typ");
        assert_eq!(renamed.id, id);
    }

    #[test]
    fn test_activity_view_is_exclusive() {
        let mut session = Session::new();
        assert_eq!(session.activity_view(), ActivityView::Explorer);
        session.set_activity_view(ActivityView::Search);
        assert_eq!(session.activity_view(), ActivityView::Search);
        session.set_activity_view(ActivityView::Settings);
        assert_eq!(session.activity_view(), ActivityView::Settings);
    }

    #[test]
    fn test_cursor_defaults_to_origin() {
        let session = Session::new();
        assert_eq!(session.cursor(), CursorPosition { line: 1, col: 1 });
    }
}
