//! Pantry library exports

pub mod api;
pub mod catalog;
