//! Icon identifiers and icon pools.
//!
//! # Responsibility
//! - Name every glyph the studio can attach to a labeled item.
//! - Provide the ordered default pool used for automatic assignment.
//!
//! # Invariants
//! - `IconId::as_str` values are stable and match the serde wire names.
//! - An `IconPool` is never empty and never holds duplicates.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Opaque icon identifier.
///
/// Rendering hosts map these ids to concrete glyphs; core only compares them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum IconId {
    Brain,
    Lightbulb,
    Target,
    Zap,
    FileText,
    Mail,
    Users,
    TrendingUp,
    Shield,
    Database,
    Globe,
    Camera,
    Music,
    Palette,
    Calculator,
    Heart,
    Rocket,
    Coffee,
    Book,
    Briefcase,
    Settings,
    Award,
    Clock,
    Map,
    Smartphone,
    Headphones,
    Video,
    Image,
    Mic,
    Edit,
    Layout,
    Layers,
    Grid,
    Compass,
    Flag,
    Gift,
    Home,
    Key,
    Lock,
    Megaphone,
    Monitor,
    Package,
    Phone,
    Printer,
    Radio,
    Scissors,
    Server,
    Shuffle,
    Sliders,
    Tablet,
    Tag,
    Thermometer,
    Truck,
    Umbrella,
    Watch,
    Wifi,
    Wind,
    Wrench,
    // Outside the default pool: keyword targets and seeded templates.
    Code,
    PenTool,
    BookOpen,
    MessageSquare,
    Search,
    Star,
}

/// Every icon id, in declaration order.
pub const ALL_ICONS: &[IconId] = &[
    IconId::Brain,
    IconId::Lightbulb,
    IconId::Target,
    IconId::Zap,
    IconId::FileText,
    IconId::Mail,
    IconId::Users,
    IconId::TrendingUp,
    IconId::Shield,
    IconId::Database,
    IconId::Globe,
    IconId::Camera,
    IconId::Music,
    IconId::Palette,
    IconId::Calculator,
    IconId::Heart,
    IconId::Rocket,
    IconId::Coffee,
    IconId::Book,
    IconId::Briefcase,
    IconId::Settings,
    IconId::Award,
    IconId::Clock,
    IconId::Map,
    IconId::Smartphone,
    IconId::Headphones,
    IconId::Video,
    IconId::Image,
    IconId::Mic,
    IconId::Edit,
    IconId::Layout,
    IconId::Layers,
    IconId::Grid,
    IconId::Compass,
    IconId::Flag,
    IconId::Gift,
    IconId::Home,
    IconId::Key,
    IconId::Lock,
    IconId::Megaphone,
    IconId::Monitor,
    IconId::Package,
    IconId::Phone,
    IconId::Printer,
    IconId::Radio,
    IconId::Scissors,
    IconId::Server,
    IconId::Shuffle,
    IconId::Sliders,
    IconId::Tablet,
    IconId::Tag,
    IconId::Thermometer,
    IconId::Truck,
    IconId::Umbrella,
    IconId::Watch,
    IconId::Wifi,
    IconId::Wind,
    IconId::Wrench,
    IconId::Code,
    IconId::PenTool,
    IconId::BookOpen,
    IconId::MessageSquare,
    IconId::Search,
    IconId::Star,
];

/// Number of leading `ALL_ICONS` entries that form the default pool.
const DEFAULT_POOL_LEN: usize = 58;

impl IconId {
    /// Stable string id used by hosts and serialized payloads.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Brain => "brain",
            Self::Lightbulb => "lightbulb",
            Self::Target => "target",
            Self::Zap => "zap",
            Self::FileText => "file-text",
            Self::Mail => "mail",
            Self::Users => "users",
            Self::TrendingUp => "trending-up",
            Self::Shield => "shield",
            Self::Database => "database",
            Self::Globe => "globe",
            Self::Camera => "camera",
            Self::Music => "music",
            Self::Palette => "palette",
            Self::Calculator => "calculator",
            Self::Heart => "heart",
            Self::Rocket => "rocket",
            Self::Coffee => "coffee",
            Self::Book => "book",
            Self::Briefcase => "briefcase",
            Self::Settings => "settings",
            Self::Award => "award",
            Self::Clock => "clock",
            Self::Map => "map",
            Self::Smartphone => "smartphone",
            Self::Headphones => "headphones",
            Self::Video => "video",
            Self::Image => "image",
            Self::Mic => "mic",
            Self::Edit => "edit",
            Self::Layout => "layout",
            Self::Layers => "layers",
            Self::Grid => "grid",
            Self::Compass => "compass",
            Self::Flag => "flag",
            Self::Gift => "gift",
            Self::Home => "home",
            Self::Key => "key",
            Self::Lock => "lock",
            Self::Megaphone => "megaphone",
            Self::Monitor => "monitor",
            Self::Package => "package",
            Self::Phone => "phone",
            Self::Printer => "printer",
            Self::Radio => "radio",
            Self::Scissors => "scissors",
            Self::Server => "server",
            Self::Shuffle => "shuffle",
            Self::Sliders => "sliders",
            Self::Tablet => "tablet",
            Self::Tag => "tag",
            Self::Thermometer => "thermometer",
            Self::Truck => "truck",
            Self::Umbrella => "umbrella",
            Self::Watch => "watch",
            Self::Wifi => "wifi",
            Self::Wind => "wind",
            Self::Wrench => "wrench",
            Self::Code => "code",
            Self::PenTool => "pen-tool",
            Self::BookOpen => "book-open",
            Self::MessageSquare => "message-square",
            Self::Search => "search",
            Self::Star => "star",
        }
    }

    /// Parses one icon id from its stable string form.
    pub fn parse(value: &str) -> Result<Self, IconError> {
        let normalized = value.trim();
        if normalized.is_empty() {
            return Err(IconError::EmptyIconId);
        }
        ALL_ICONS
            .iter()
            .copied()
            .find(|icon| icon.as_str() == normalized)
            .ok_or_else(|| IconError::UnknownIconId(normalized.to_string()))
    }
}

impl Display for IconId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Icon parse and pool construction errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IconError {
    EmptyIconId,
    UnknownIconId(String),
    EmptyPool,
}

impl Display for IconError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyIconId => write!(f, "icon id must not be empty"),
            Self::UnknownIconId(value) => write!(f, "icon id is unknown: {value}"),
            Self::EmptyPool => write!(f, "icon pool must contain at least one icon"),
        }
    }
}

impl Error for IconError {}

static DEFAULT_POOL: Lazy<IconPool> = Lazy::new(|| IconPool {
    icons: ALL_ICONS[..DEFAULT_POOL_LEN].to_vec(),
});

/// Ordered, non-empty, duplicate-free set of assignable icons.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconPool {
    icons: Vec<IconId>,
}

impl IconPool {
    /// Builds a pool keeping the first occurrence of each icon.
    ///
    /// # Errors
    /// - Returns `IconError::EmptyPool` when no icon is supplied.
    pub fn new(icons: impl IntoIterator<Item = IconId>) -> Result<Self, IconError> {
        let mut deduped = Vec::new();
        for icon in icons {
            if !deduped.contains(&icon) {
                deduped.push(icon);
            }
        }
        if deduped.is_empty() {
            return Err(IconError::EmptyPool);
        }
        Ok(Self { icons: deduped })
    }

    /// The 58-icon pool used for template creation.
    pub fn default_pool() -> &'static IconPool {
        &DEFAULT_POOL
    }

    pub fn as_slice(&self) -> &[IconId] {
        &self.icons
    }

    pub fn len(&self) -> usize {
        self.icons.len()
    }

    /// Always `false`; present for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.icons.is_empty()
    }

    pub fn contains(&self, icon: IconId) -> bool {
        self.icons.contains(&icon)
    }
}

#[cfg(test)]
mod tests {
    use super::{IconError, IconId, IconPool, ALL_ICONS};

    #[test]
    fn default_pool_has_58_icons_without_keyword_only_ids() {
        let pool = IconPool::default_pool();
        assert_eq!(pool.len(), 58);
        assert_eq!(pool.as_slice()[0], IconId::Brain);
        assert_eq!(pool.as_slice()[57], IconId::Wrench);
        assert!(!pool.contains(IconId::Code));
        assert!(!pool.contains(IconId::Star));
    }

    #[test]
    fn as_str_matches_serde_wire_name() {
        for icon in ALL_ICONS {
            let json = serde_json::to_value(icon).expect("icon should serialize");
            assert_eq!(json, icon.as_str());
        }
    }

    #[test]
    fn parse_round_trips_every_icon() {
        for icon in ALL_ICONS {
            assert_eq!(IconId::parse(icon.as_str()), Ok(*icon));
        }
        assert_eq!(IconId::parse(" "), Err(IconError::EmptyIconId));
        assert_eq!(
            IconId::parse("FileText"),
            Err(IconError::UnknownIconId("FileText".to_string()))
        );
    }

    #[test]
    fn pool_rejects_empty_input_and_drops_duplicates() {
        assert_eq!(IconPool::new(Vec::new()), Err(IconError::EmptyPool));

        let pool = IconPool::new([IconId::Code, IconId::PenTool, IconId::Code])
            .expect("non-empty pool");
        assert_eq!(pool.as_slice(), &[IconId::Code, IconId::PenTool]);
    }
}
