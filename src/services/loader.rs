use crate::models::error::AppError;
use crate::models::lead::Lead;
use crate::models::property::Property;
use crate::models::summary::DashboardSummary;
use crate::services::supabase::{DataSource, Table};

/// A table that could not be loaded, with the reason shown to the user
#[derive(Debug, Clone, PartialEq)]
pub struct FetchFailure {
    pub table: Table,
    pub message: String,
}

impl FetchFailure {
    pub fn new(table: Table, error: &AppError) -> Self {
        Self {
            table,
            message: error.to_string(),
        }
    }
}

/// Snapshot of both tables for one load of the dashboard.
///
/// A table that failed to load is empty and has a matching entry in `failures`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DashboardData {
    pub properties: Vec<Property>,
    pub leads: Vec<Lead>,
    pub failures: Vec<FetchFailure>,
}

impl DashboardData {
    pub fn new(properties: Vec<Property>, leads: Vec<Lead>) -> Self {
        Self {
            properties,
            leads,
            failures: Vec::new(),
        }
    }

    /// Folds the two fetch results into a snapshot, recording each failure.
    pub fn from_results(
        properties: Result<Vec<Property>, AppError>,
        leads: Result<Vec<Lead>, AppError>,
    ) -> Self {
        let mut failures = Vec::new();

        let properties = properties.unwrap_or_else(|e| {
            failures.push(FetchFailure::new(Table::Properties, &e));
            Vec::new()
        });
        let leads = leads.unwrap_or_else(|e| {
            failures.push(FetchFailure::new(Table::Leads, &e));
            Vec::new()
        });

        Self {
            properties,
            leads,
            failures,
        }
    }

    /// Snapshot for when no request could be made at all (e.g. bad client config).
    pub fn unavailable(error: &AppError) -> Self {
        Self {
            properties: Vec::new(),
            leads: Vec::new(),
            failures: vec![
                FetchFailure::new(Table::Properties, error),
                FetchFailure::new(Table::Leads, error),
            ],
        }
    }

    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }

    pub fn summary(&self) -> DashboardSummary {
        DashboardSummary::compute(&self.properties, &self.leads)
    }

    pub fn recent_properties(&self, count: usize) -> &[Property] {
        &self.properties[..count.min(self.properties.len())]
    }

    pub fn recent_leads(&self, count: usize) -> &[Lead] {
        &self.leads[..count.min(self.leads.len())]
    }
}

/// Fetches both tables concurrently and waits for both to settle.
///
/// Responses longer than `limit` are truncated.
pub async fn load_dashboard<D: DataSource>(source: &D, limit: usize) -> DashboardData {
    let (properties, leads) = futures::join!(
        source.fetch_recent::<Property>(limit),
        source.fetch_recent::<Lead>(limit)
    );

    DashboardData::from_results(
        properties.map(|rows| truncated(rows, limit)),
        leads.map(|rows| truncated(rows, limit)),
    )
}

fn truncated<T>(mut rows: Vec<T>, limit: usize) -> Vec<T> {
    rows.truncate(limit);
    rows
}
