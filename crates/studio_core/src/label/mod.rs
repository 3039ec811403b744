//! Deterministic label derivation for templates and documents.
//!
//! # Responsibility
//! - Derive icon and color ids from free-text titles and categories.
//! - Keep the hash contract in one place so every caller buckets identically.
//!
//! # Invariants
//! - Derivation is pure: no hidden state, no randomness.
//! - Labels are derived once at creation; callers must not recompute them on
//!   later edits.

pub mod assign;
pub mod hash;

pub use assign::{assign_color, assign_icon, KEYWORD_ICONS};
pub use hash::{label_bucket, label_hash};
