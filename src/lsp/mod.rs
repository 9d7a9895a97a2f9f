//! LSP Protocol Implementation
//!
//! Publishes validation issues as diagnostics and exposes the document
//! outline. All rule logic stays in the validation engine.

pub mod backend;
pub mod document;
pub mod handlers;
pub mod server;

pub use backend::Backend;
