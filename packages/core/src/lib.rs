//! ListView Preview Core
//!
//! This crate implements the preview-rendering pipeline behind an editorial
//! list view: given a content id, resolve the item's current (possibly
//! unpublished) data, bind it to its configured template, render full HTML,
//! and strip the result down to a fragment safe to inject into another page.
//!
//! # Architecture
//!
//! - **Draft Content Adapter**: presents a raw [`models::ContentRecord`] as
//!   the [`models::RenderableContent`] capability the view engine consumes,
//!   so drafts render through the same path as published content.
//! - **Preview Renderer**: resolution, template lookup, and error handling
//!   for exactly one content id per request.
//! - **Fragment Extractor**: a pure regex-chain transform that removes
//!   doctype, `<html>`, `<head>`, `<body>`, `<style>`, and `<script>` shells.
//!
//! # Modules
//!
//! - [`models`] - Data structures (ContentRecord, ContentTypeSchema, ...)
//! - [`services`] - Adapter, renderer, conversion, and collaborator traits
//! - [`store`] - In-memory repository used by the demo binary and tests
//! - [`server`] - Axum HTTP surface consumed by the list-view widget
//! - [`utils`] - Fragment extraction and related text transforms

pub mod models;
pub mod server;
pub mod services;
pub mod store;
pub mod utils;

// Re-export commonly used types
pub use models::*;
pub use services::*;
pub use store::InMemoryStore;
