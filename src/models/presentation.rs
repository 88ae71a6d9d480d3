use super::lead::LeadPriority;
use super::property::{ListingStatus, PropertyCategory};

/// Abstract presentation category consumed by the view to pick styling
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StyleTag {
    Positive,
    Warning,
    Info,
    Accent,
    Neutral,
    Critical,
    Elevated,
}

impl StyleTag {
    pub fn as_str(&self) -> &'static str {
        match self {
            StyleTag::Positive => "positive",
            StyleTag::Warning => "warning",
            StyleTag::Info => "info",
            StyleTag::Accent => "accent",
            StyleTag::Neutral => "neutral",
            StyleTag::Critical => "critical",
            StyleTag::Elevated => "elevated",
        }
    }

    /// Returns CSS class name for color coding
    pub fn css_class(&self) -> &'static str {
        match self {
            StyleTag::Positive => "tag-positive",
            StyleTag::Warning => "tag-warning",
            StyleTag::Info => "tag-info",
            StyleTag::Accent => "tag-accent",
            StyleTag::Neutral => "tag-neutral",
            StyleTag::Critical => "tag-critical",
            StyleTag::Elevated => "tag-elevated",
        }
    }
}

impl std::fmt::Display for StyleTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Icon shown for a property category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IconId {
    Home,
    Building,
    Warehouse,
    Key,
    MapPin,
}

impl IconId {
    pub fn name(&self) -> &'static str {
        match self {
            IconId::Home => "home",
            IconId::Building => "building",
            IconId::Warehouse => "warehouse",
            IconId::Key => "key",
            IconId::MapPin => "map-pin",
        }
    }

    /// Glyph rendered in place of an icon font
    pub fn glyph(&self) -> &'static str {
        match self {
            IconId::Home => "\u{1F3E0}",
            IconId::Building => "\u{1F3E2}",
            IconId::Warehouse => "\u{1F3ED}",
            IconId::Key => "\u{1F511}",
            IconId::MapPin => "\u{1F4CD}",
        }
    }
}

/// Lead score band: >= 75 high, >= 50 medium, anything else low
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScoreBucket {
    High,
    Medium,
    Low,
}

impl ScoreBucket {
    pub const HIGH_THRESHOLD: i32 = 75;
    pub const MEDIUM_THRESHOLD: i32 = 50;

    pub fn from_score(score: i32) -> Self {
        if score >= Self::HIGH_THRESHOLD {
            ScoreBucket::High
        } else if score >= Self::MEDIUM_THRESHOLD {
            ScoreBucket::Medium
        } else {
            ScoreBucket::Low
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ScoreBucket::High => "high",
            ScoreBucket::Medium => "medium",
            ScoreBucket::Low => "low",
        }
    }

    pub fn style_tag(&self) -> StyleTag {
        match self {
            ScoreBucket::High => StyleTag::Positive,
            ScoreBucket::Medium => StyleTag::Warning,
            ScoreBucket::Low => StyleTag::Neutral,
        }
    }
}

/// Maps a raw listing status to its badge style. Unknown statuses are neutral.
pub fn status_tag(status: &str) -> StyleTag {
    ListingStatus::from(status).style_tag()
}

/// Maps a raw lead priority to its badge style. Unknown priorities are neutral.
pub fn priority_tag(priority: &str) -> StyleTag {
    LeadPriority::from(priority).style_tag()
}

/// Maps a raw property category to its icon. Unknown categories use the home icon.
pub fn category_icon(category: &str) -> IconId {
    PropertyCategory::from(category).icon()
}

pub fn score_bucket(score: i32) -> ScoreBucket {
    ScoreBucket::from_score(score)
}
