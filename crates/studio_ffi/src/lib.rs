//! Flutter-facing bridge over `studio_core`.

pub mod api;
