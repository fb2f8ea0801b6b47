//! Core application logic: state store, event handling and action dispatch.

pub mod action;
pub mod event;
pub mod handler;
pub mod seed;
pub mod state;
pub mod store;
pub mod toast;
