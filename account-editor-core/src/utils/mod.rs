//! Shared helpers

pub mod labels;
pub mod text;
