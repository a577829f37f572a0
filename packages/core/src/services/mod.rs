//! Preview Services
//!
//! This module contains the preview pipeline services:
//!
//! - `DraftContentAdapter` - wraps a raw record as renderable content
//! - `PreviewRenderer` - resolves, renders, and strips one preview request
//! - Conversion registries - property editors and value converters
//! - Segment/profile providers - derived-field computation
//! - Collaborator traits - the seams to the external CMS subsystems
//!
//! Services coordinate the external repository, schema, template, and view
//! collaborators; they hold no mutable state across requests.

pub mod adapter;
pub mod conversion;
pub mod error;
pub mod renderer;
pub mod segments;
pub mod traits;
pub mod view;

#[cfg(test)]
mod renderer_test;

pub use adapter::DraftContentAdapter;
pub use conversion::{
    ConverterRegistry, PassthroughConverter, PropertyEditor, PropertyEditorRegistry,
    TextboxEditor, ValueConverter,
};
pub use error::PreviewError;
pub use renderer::{PreviewOutput, PreviewRenderer};
pub use segments::{
    DefaultUrlSegmentProvider, ProfileResolver, SegmentProviderChain, StaticProfileResolver,
    UrlSegmentProvider,
};
pub use traits::{
    ContentRepository, PreviewContext, SchemaResolver, TemplateStore, View, ViewEngine,
};
pub use view::PlaceholderViewEngine;
