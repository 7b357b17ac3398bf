//! # Studio Core
//!
//! Session state and document model for Typst Studio.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │                       Session                            │
//! │  ┌──────────────┐ ┌──────────────┐ ┌──────────────────┐ │
//! │  │ ActivityView │ │    Cursor    │ │   Saving flag    │ │
//! │  └──────────────┘ └──────────────┘ └──────────────────┘ │
//! │         │                                                │
//! │  ┌──────┴──────────────────────────────────┐            │
//! │  │                Open files                │            │
//! │  │  ┌──────────┐ ┌──────────┐ ┌─────────┐  │            │
//! │  │  │ main.typ │ │styles.typ│ │   ...   │  │            │
//! │  │  └──────────┘ └──────────┘ └─────────┘  │            │
//! │  └─────────────────────────────────────────┘            │
//! └─────────────────────────────────────────────────────────┘
//! ```
//!
//! The UI crate observes this state and renders it; rendering documents to
//! HTML is an external collaborator reached through the [`preview`] contract.

pub mod config;
pub mod document;
pub mod preview;
pub mod seed;
pub mod session;

pub use config::Config;
pub use document::{File, FileId, Language};
pub use preview::PreviewResponse;
pub use session::{ActivityView, CursorPosition, Session};

/// Result type for core operations
pub type CoreResult<T> = Result<T, CoreError>;

/// Errors that can occur in core operations
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("File not found: {0}")]
    FileNotFound(FileId),

    #[error("Duplicate file id: {0}")]
    DuplicateFileId(FileId),

    #[error("Unknown language: {0}")]
    UnknownLanguage(String),
}
