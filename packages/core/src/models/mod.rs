//! Data Models
//!
//! Core data structures for the preview pipeline:
//!
//! - `ContentRecord` / `Template` - authoritative stored representations
//! - `ContentTypeSchema` / `PropertyTypeDef` - property declarations per type
//! - `RenderableContent` / `RenderableProperty` - the capability the view
//!   engine renders against, implemented by the draft content adapter

pub mod content;
pub mod renderable;
pub mod schema;

pub use content::{ContentRecord, Template};
pub use renderable::{RenderableContent, RenderableProperty};
pub use schema::{ContentTypeSchema, PropertyTypeDef};
