use super::lead::{Lead, LeadPriority};
use super::property::{Property, PropertyCategory};
use crate::utils::format::format_millions;

/// Figures shown on the overview stat cards
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardSummary {
    pub active_listings: usize,
    pub hot_leads: usize,
    pub total_value_millions: f64,
    pub avg_days_on_market: u32,
}

impl DashboardSummary {
    pub fn compute(properties: &[Property], leads: &[Lead]) -> Self {
        Self {
            active_listings: active_listing_count(properties),
            hot_leads: hot_lead_count(leads),
            total_value_millions: total_listing_value_millions(properties),
            avg_days_on_market: avg_days_on_market(properties),
        }
    }

    /// Total listing value with one decimal place, e.g. `$2.0M`
    pub fn total_value_label(&self) -> String {
        format_millions(self.total_value_millions)
    }
}

pub fn active_listing_count(properties: &[Property]) -> usize {
    properties.iter().filter(|p| p.is_active()).count()
}

pub fn hot_lead_count(leads: &[Lead]) -> usize {
    leads.iter().filter(|l| l.priority.is_hot()).count()
}

pub fn total_listing_value_millions(properties: &[Property]) -> f64 {
    properties.iter().map(|p| p.list_price).sum::<f64>() / 1_000_000.0
}

/// Mean days on market, absent values counted as zero. Zero for no listings.
pub fn avg_days_on_market(properties: &[Property]) -> u32 {
    if properties.is_empty() {
        return 0;
    }

    let total: u64 = properties
        .iter()
        .map(|p| u64::from(p.days_on_market.unwrap_or(0)))
        .sum();

    (total as f64 / properties.len() as f64).round() as u32
}

/// Listing count per category in filter order. `other` is appended only when used.
pub fn category_breakdown(properties: &[Property]) -> Vec<(String, usize)> {
    let mut breakdown: Vec<(String, usize)> = PropertyCategory::all()
        .iter()
        .map(|category| {
            let count = properties.iter().filter(|p| &p.category == category).count();
            (category.as_str().to_string(), count)
        })
        .collect();

    let other = properties
        .iter()
        .filter(|p| matches!(p.category, PropertyCategory::Other(_)))
        .count();
    if other > 0 {
        breakdown.push(("other".to_string(), other));
    }

    breakdown
}

/// Lead count per priority, most pressing first. `other` is appended only when used.
pub fn priority_breakdown(leads: &[Lead]) -> Vec<(String, usize)> {
    let mut breakdown: Vec<(String, usize)> = LeadPriority::all()
        .iter()
        .map(|priority| {
            let count = leads.iter().filter(|l| &l.priority == priority).count();
            (priority.as_str().to_string(), count)
        })
        .collect();

    let other = leads
        .iter()
        .filter(|l| matches!(l.priority, LeadPriority::Other(_)))
        .count();
    if other > 0 {
        breakdown.push(("other".to_string(), other));
    }

    breakdown
}
