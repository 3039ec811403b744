//! Icon and color derivation for labeled items.
//!
//! # Responsibility
//! - Pick an icon for a title, preferring keyword matches and avoiding icons
//!   already in use.
//! - Pick a badge color for a category, preferring the predefined table.
//!
//! # Invariants
//! - Both functions are pure and total.
//! - `assign_icon` always returns a member of the supplied pool.
//! - While the pool has unused icons, the result is never an in-use icon.

use super::hash::label_bucket;
use crate::model::color::{ColorId, CATEGORY_PALETTE, PREDEFINED_CATEGORIES};
use crate::model::icon::{IconId, IconPool};
use std::collections::HashSet;

/// Ordered keyword table. Scan order is the tie-break between matches.
pub const KEYWORD_ICONS: &[(&str, IconId)] = &[
    // development
    ("code", IconId::Code),
    ("develop", IconId::Code),
    ("program", IconId::Code),
    ("script", IconId::Code),
    ("api", IconId::Code),
    ("debug", IconId::Code),
    ("function", IconId::Code),
    ("algorithm", IconId::Code),
    ("software", IconId::Code),
    // writing
    ("write", IconId::PenTool),
    ("content", IconId::PenTool),
    ("blog", IconId::PenTool),
    ("article", IconId::PenTool),
    ("story", IconId::BookOpen),
    ("book", IconId::Book),
    ("documentation", IconId::FileText),
    ("manual", IconId::FileText),
    // business
    ("business", IconId::Briefcase),
    ("strategy", IconId::Target),
    ("plan", IconId::Target),
    ("goal", IconId::Target),
    ("meeting", IconId::Users),
    ("team", IconId::Users),
    ("project", IconId::Briefcase),
    ("proposal", IconId::FileText),
    // communication
    ("email", IconId::Mail),
    ("message", IconId::MessageSquare),
    ("chat", IconId::MessageSquare),
    ("call", IconId::Phone),
    ("presentation", IconId::Monitor),
    ("announcement", IconId::Megaphone),
    ("marketing", IconId::TrendingUp),
    // design
    ("design", IconId::Palette),
    ("creative", IconId::Lightbulb),
    ("art", IconId::Palette),
    ("visual", IconId::Image),
    ("photo", IconId::Camera),
    ("video", IconId::Video),
    ("music", IconId::Music),
    ("audio", IconId::Headphones),
    // research
    ("analysis", IconId::TrendingUp),
    ("research", IconId::Search),
    ("data", IconId::Database),
    ("report", IconId::FileText),
    ("study", IconId::BookOpen),
    ("review", IconId::Star),
    ("feedback", IconId::MessageSquare),
    ("survey", IconId::FileText),
    // technology
    ("app", IconId::Smartphone),
    ("mobile", IconId::Smartphone),
    ("web", IconId::Globe),
    ("website", IconId::Globe),
    ("server", IconId::Server),
    ("database", IconId::Database),
    ("security", IconId::Shield),
    ("backup", IconId::Package),
    // lifestyle
    ("health", IconId::Heart),
    ("fitness", IconId::TrendingUp),
    ("travel", IconId::Map),
    ("food", IconId::Coffee),
    ("home", IconId::Home),
    ("personal", IconId::Users),
    ("habit", IconId::Clock),
    ("routine", IconId::Clock),
    // learning
    ("learn", IconId::BookOpen),
    ("teach", IconId::Users),
    ("course", IconId::Book),
    ("tutorial", IconId::Video),
    ("guide", IconId::Map),
    ("training", IconId::Award),
    ("skill", IconId::Target),
    ("knowledge", IconId::Brain),
    // ideas
    ("idea", IconId::Lightbulb),
    ("innovation", IconId::Rocket),
    ("brainstorm", IconId::Brain),
    ("creativity", IconId::Palette),
    ("solution", IconId::Key),
    ("problem", IconId::Target),
    ("improvement", IconId::TrendingUp),
    ("optimize", IconId::Zap),
];

/// Derives the icon for `title` given the icons already in use.
///
/// Rules:
/// - Candidates are pool icons not in `used_icons`, in pool order; when every
///   pool icon is used, the whole pool is eligible again.
/// - The first keyword contained in the lower-cased title whose icon is a
///   candidate wins. Keywords whose icon is not a candidate are skipped.
/// - Otherwise the title hash selects a candidate.
pub fn assign_icon(title: &str, used_icons: &HashSet<IconId>, pool: &IconPool) -> IconId {
    let unused: Vec<IconId> = pool
        .as_slice()
        .iter()
        .copied()
        .filter(|icon| !used_icons.contains(icon))
        .collect();
    let candidates: &[IconId] = if unused.is_empty() {
        pool.as_slice()
    } else {
        unused.as_slice()
    };

    let title_lower = title.to_lowercase();
    let keyword_hit = KEYWORD_ICONS
        .iter()
        .filter(|(keyword, _)| title_lower.contains(keyword))
        .map(|(_, icon)| *icon)
        .find(|icon| candidates.contains(icon));
    if let Some(icon) = keyword_hit {
        return icon;
    }

    candidates[label_bucket(title, candidates.len())]
}

/// Derives the badge color for `category`.
///
/// Predefined names match exactly (case-sensitive); anything else is hashed
/// onto [`CATEGORY_PALETTE`].
pub fn assign_color(category: &str) -> ColorId {
    PREDEFINED_CATEGORIES
        .iter()
        .find(|(name, _)| *name == category)
        .map(|(_, color)| *color)
        .unwrap_or_else(|| CATEGORY_PALETTE[label_bucket(category, CATEGORY_PALETTE.len())])
}
