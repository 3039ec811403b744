//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `studio_core` linkage.
//! - Print derived labels for titles passed as arguments, deterministically.

use std::collections::HashSet;
use studio_core::{assign_color, assign_icon, IconPool};

fn main() {
    println!("studio_core ping={}", studio_core::ping());
    println!("studio_core version={}", studio_core::core_version());

    // Each title claims its icon, like successive template creations.
    let pool = IconPool::default_pool();
    let mut used = HashSet::new();
    for title in std::env::args().skip(1) {
        let icon = assign_icon(title.as_str(), &used, pool);
        used.insert(icon);
        println!(
            "title={title:?} icon={icon} color={}",
            assign_color(title.as_str())
        );
    }
}
