//! Template-driven view: element tree, screen fragments, bindings and list renderers.

pub mod binder;
pub mod format;
pub mod lists;
pub mod node;
pub mod render;
pub mod screens;
pub mod template;
