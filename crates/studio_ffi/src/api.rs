//! FFI use-case API for Flutter-facing calls.
//!
//! # Responsibility
//! - Expose label derivation and core bootstrap to Dart via FRB.
//! - Keep error semantics simple: empty string for success, message otherwise.
//!
//! # Invariants
//! - Exported functions must not panic across FFI boundary.
//! - Icon and color ids cross the boundary as their stable string form
//!   (`file-text`, `primary`, ...).

use log::warn;
use std::collections::HashSet;
use studio_core::{
    assign_color as assign_color_inner, assign_icon as assign_icon_inner,
    core_version as core_version_inner, init_logging as init_logging_inner, ping as ping_inner,
    IconId, IconPool,
};

/// Minimal health-check API for FRB smoke integration.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn ping() -> String {
    ping_inner().to_owned()
}

/// Expose core crate version through FFI.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Initializes Rust core logging once per process.
///
/// Input semantics:
/// - `level`: one of `trace|debug|info|warn|error` (case-insensitive).
/// - `log_dir`: absolute directory path where rolling logs are written.
///
/// # FFI contract
/// - Sync call; may perform small file-system setup work.
/// - Safe to call repeatedly with the same `level + log_dir` (idempotent).
/// - Reconfiguration attempts with different level or directory return error.
/// - Never panics; returns empty string on success and error message on failure.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    match init_logging_inner(level.as_str(), log_dir.as_str()) {
        Ok(()) => String::new(),
        Err(err) => err.to_string(),
    }
}

/// Derives the icon id for a new item titled `title`.
///
/// `used_icons` holds the icon ids of items that already exist. Ids this
/// build does not know are ignored; they cannot be pool members.
///
/// # FFI contract
/// - Sync call, pure computation over the default pool.
/// - Never panics; always returns a default-pool icon id.
#[flutter_rust_bridge::frb(sync)]
pub fn assign_icon(title: String, used_icons: Vec<String>) -> String {
    let used = parse_used_icons(&used_icons);
    assign_icon_inner(title.as_str(), &used, IconPool::default_pool())
        .as_str()
        .to_owned()
}

/// Derives the badge color id for `category`.
///
/// # FFI contract
/// - Sync call, pure computation.
/// - Never panics; always returns a color id.
#[flutter_rust_bridge::frb(sync)]
pub fn assign_color(category: String) -> String {
    assign_color_inner(category.as_str()).as_str().to_owned()
}

/// Icon ids of the default pool, in pool order.
#[flutter_rust_bridge::frb(sync)]
pub fn default_icon_pool() -> Vec<String> {
    IconPool::default_pool()
        .as_slice()
        .iter()
        .map(|icon| icon.as_str().to_owned())
        .collect()
}

fn parse_used_icons(raw: &[String]) -> HashSet<IconId> {
    let mut used = HashSet::with_capacity(raw.len());
    let mut skipped = 0usize;
    for value in raw {
        match IconId::parse(value.as_str()) {
            Ok(icon) => {
                used.insert(icon);
            }
            Err(_) => skipped += 1,
        }
    }
    if skipped > 0 {
        warn!(
            "event=assign_icon module=ffi status=partial skipped_ids={}",
            skipped
        );
    }
    used
}

#[cfg(test)]
mod tests {
    use super::{
        assign_color, assign_icon, core_version, default_icon_pool, init_logging, ping,
    };

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }

    #[test]
    fn init_logging_rejects_empty_log_dir() {
        let error = init_logging("info".to_string(), String::new());
        assert!(!error.is_empty());
    }

    #[test]
    fn init_logging_rejects_unsupported_level() {
        let error = init_logging("verbose".to_string(), "tmp/logs".to_string());
        assert!(!error.is_empty());
    }

    #[test]
    fn default_pool_exposes_kebab_case_ids() {
        let pool = default_icon_pool();
        assert_eq!(pool.len(), 58);
        assert_eq!(pool[0], "brain");
        assert!(pool.iter().any(|id| id == "file-text"));
    }

    #[test]
    fn assign_icon_honors_keywords_and_used_ids() {
        assert_eq!(assign_icon("Team meeting".to_string(), Vec::new()), "users");

        let icon = assign_icon(
            "Team meeting".to_string(),
            vec!["users".to_string(), "not-an-icon".to_string()],
        );
        assert_ne!(icon, "users");
        assert!(default_icon_pool().contains(&icon));
    }

    #[test]
    fn assign_color_returns_color_ids() {
        assert_eq!(assign_color("Development".to_string()), "primary");
        assert_eq!(assign_color("Finance".to_string()), "green");
    }
}
