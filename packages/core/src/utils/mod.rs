//! Utility functions
//!
//! Pure text transforms with no service dependencies.

pub mod html;

pub use html::strip_document_shell;
