use super::presentation::{IconId, StyleTag};
use crate::services::supabase::{Record, Table};
use serde::{Deserialize, Deserializer};

/// Listing category as stored in the `properties.category` column
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize)]
#[serde(from = "String")]
pub enum PropertyCategory {
    Residential,
    Commercial,
    Industrial,
    Rental,
    Land,
    Vacation,
    Investment,
    Other(String),
}

impl PropertyCategory {
    /// Categories offered by the category filter, in display order.
    pub fn all() -> &'static [PropertyCategory] {
        &[
            PropertyCategory::Residential,
            PropertyCategory::Commercial,
            PropertyCategory::Industrial,
            PropertyCategory::Rental,
            PropertyCategory::Land,
            PropertyCategory::Vacation,
            PropertyCategory::Investment,
        ]
    }

    pub fn as_str(&self) -> &str {
        match self {
            PropertyCategory::Residential => "residential",
            PropertyCategory::Commercial => "commercial",
            PropertyCategory::Industrial => "industrial",
            PropertyCategory::Rental => "rental",
            PropertyCategory::Land => "land",
            PropertyCategory::Vacation => "vacation",
            PropertyCategory::Investment => "investment",
            PropertyCategory::Other(raw) => raw,
        }
    }

    /// Icon for the category.
    ///
    /// Vacation and investment listings have no dedicated icon and share the
    /// residential one.
    pub fn icon(&self) -> IconId {
        match self {
            PropertyCategory::Residential => IconId::Home,
            PropertyCategory::Commercial => IconId::Building,
            PropertyCategory::Industrial => IconId::Warehouse,
            PropertyCategory::Rental => IconId::Key,
            PropertyCategory::Land => IconId::MapPin,
            PropertyCategory::Vacation => IconId::Home,
            PropertyCategory::Investment => IconId::Home,
            PropertyCategory::Other(_) => IconId::Home,
        }
    }
}

impl From<&str> for PropertyCategory {
    fn from(s: &str) -> Self {
        match s {
            "residential" => PropertyCategory::Residential,
            "commercial" => PropertyCategory::Commercial,
            "industrial" => PropertyCategory::Industrial,
            "rental" => PropertyCategory::Rental,
            "land" => PropertyCategory::Land,
            "vacation" => PropertyCategory::Vacation,
            "investment" => PropertyCategory::Investment,
            other => PropertyCategory::Other(other.to_string()),
        }
    }
}

impl From<String> for PropertyCategory {
    fn from(s: String) -> Self {
        Self::from(s.as_str())
    }
}

impl std::fmt::Display for PropertyCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Listing lifecycle status as stored in the `properties.status` column
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize)]
#[serde(from = "String")]
pub enum ListingStatus {
    Active,
    Pending,
    Sold,
    Rented,
    Other(String),
}

impl ListingStatus {
    pub fn as_str(&self) -> &str {
        match self {
            ListingStatus::Active => "active",
            ListingStatus::Pending => "pending",
            ListingStatus::Sold => "sold",
            ListingStatus::Rented => "rented",
            ListingStatus::Other(raw) => raw,
        }
    }

    pub fn style_tag(&self) -> StyleTag {
        match self {
            ListingStatus::Active => StyleTag::Positive,
            ListingStatus::Pending => StyleTag::Warning,
            ListingStatus::Sold => StyleTag::Info,
            ListingStatus::Rented => StyleTag::Accent,
            ListingStatus::Other(_) => StyleTag::Neutral,
        }
    }
}

impl From<&str> for ListingStatus {
    fn from(s: &str) -> Self {
        match s {
            "active" => ListingStatus::Active,
            "pending" => ListingStatus::Pending,
            "sold" => ListingStatus::Sold,
            "rented" => ListingStatus::Rented,
            other => ListingStatus::Other(other.to_string()),
        }
    }
}

impl From<String> for ListingStatus {
    fn from(s: String) -> Self {
        Self::from(s.as_str())
    }
}

impl std::fmt::Display for ListingStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Property {
    pub id: String,
    pub category: PropertyCategory,
    pub property_type: String,
    pub status: ListingStatus,
    pub address_line1: String,
    pub city: String,
    pub state: String,
    #[serde(default, deserialize_with = "deserialize_list_price")]
    pub list_price: f64,
    #[serde(default)]
    pub bedrooms: Option<u32>,
    #[serde(default)]
    pub bathrooms: Option<f64>,
    #[serde(default)]
    pub square_feet: Option<u32>,
    #[serde(default)]
    pub days_on_market: Option<u32>,
    #[serde(default)]
    pub primary_photo_url: Option<String>,
}

impl Record for Property {
    const TABLE: Table = Table::Properties;
}

impl Property {
    pub fn is_active(&self) -> bool {
        self.status == ListingStatus::Active
    }

    /// Bedroom count when the listing has one worth showing (absent or zero hides it)
    pub fn displayed_bedrooms(&self) -> Option<u32> {
        self.bedrooms.filter(|&beds| beds > 0)
    }

    pub fn location(&self) -> String {
        format!("{}, {}", self.city, self.state)
    }
}

/// Null prices count as zero; negative prices are rejected
fn deserialize_list_price<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let price: Option<f64> = Option::deserialize(deserializer)?;
    match price {
        Some(value) if value < 0.0 => Err(serde::de::Error::custom(format!(
            "list_price must be non-negative, got {value}"
        ))),
        Some(value) => Ok(value),
        None => Ok(0.0),
    }
}

/// Client-side filter applied on the properties tab
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PropertyFilter {
    /// `None` shows every category
    pub category: Option<PropertyCategory>,
    pub query: String,
}

impl PropertyFilter {
    pub fn with_category(mut self, category: Option<PropertyCategory>) -> Self {
        self.category = category;
        self
    }

    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.query = query.into();
        self
    }

    /// Case-insensitive match of the query against address, city, state and type
    pub fn matches(&self, property: &Property) -> bool {
        if let Some(category) = &self.category {
            if &property.category != category {
                return false;
            }
        }

        let needle = self.query.trim().to_lowercase();
        if needle.is_empty() {
            return true;
        }

        [
            property.address_line1.as_str(),
            property.city.as_str(),
            property.state.as_str(),
            property.property_type.as_str(),
        ]
        .iter()
        .any(|field| field.to_lowercase().contains(&needle))
    }

    pub fn apply<'a>(&self, properties: &'a [Property]) -> Vec<&'a Property> {
        properties.iter().filter(|p| self.matches(p)).collect()
    }
}
