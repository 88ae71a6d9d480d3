use super::presentation::{ScoreBucket, StyleTag};
use crate::services::supabase::{Record, Table};
use chrono::{DateTime, Utc};
use serde::Deserialize;

/// Lead priority as stored in the `leads.priority` column
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize)]
#[serde(from = "String")]
pub enum LeadPriority {
    Low,
    Medium,
    High,
    Urgent,
    Other(String),
}

impl LeadPriority {
    /// Known priorities, most pressing first.
    pub fn all() -> &'static [LeadPriority] {
        &[
            LeadPriority::Urgent,
            LeadPriority::High,
            LeadPriority::Medium,
            LeadPriority::Low,
        ]
    }

    pub fn as_str(&self) -> &str {
        match self {
            LeadPriority::Low => "low",
            LeadPriority::Medium => "medium",
            LeadPriority::High => "high",
            LeadPriority::Urgent => "urgent",
            LeadPriority::Other(raw) => raw,
        }
    }

    pub fn style_tag(&self) -> StyleTag {
        match self {
            LeadPriority::Urgent => StyleTag::Critical,
            LeadPriority::High => StyleTag::Elevated,
            LeadPriority::Medium => StyleTag::Warning,
            LeadPriority::Low => StyleTag::Neutral,
            LeadPriority::Other(_) => StyleTag::Neutral,
        }
    }

    /// High and urgent leads count as hot
    pub fn is_hot(&self) -> bool {
        matches!(self, LeadPriority::High | LeadPriority::Urgent)
    }
}

impl From<&str> for LeadPriority {
    fn from(s: &str) -> Self {
        match s {
            "low" => LeadPriority::Low,
            "medium" => LeadPriority::Medium,
            "high" => LeadPriority::High,
            "urgent" => LeadPriority::Urgent,
            other => LeadPriority::Other(other.to_string()),
        }
    }
}

impl From<String> for LeadPriority {
    fn from(s: String) -> Self {
        Self::from(s.as_str())
    }
}

impl std::fmt::Display for LeadPriority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Lead {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    pub status: String,
    pub priority: LeadPriority,
    pub lead_score: i32,
    pub source: String,
    pub created_at: DateTime<Utc>,
}

impl Record for Lead {
    const TABLE: Table = Table::Leads;
}

impl Lead {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    pub fn score_bucket(&self) -> ScoreBucket {
        ScoreBucket::from_score(self.lead_score)
    }
}
