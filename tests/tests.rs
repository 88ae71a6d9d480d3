#[cfg(test)]
mod tests {
    use agentos_dashboard::hooks::use_dashboard::{DashboardAction, DashboardState};
    use agentos_dashboard::hooks::use_tab::Tab;
    use agentos_dashboard::models::{
        error::AppError,
        lead::{Lead, LeadPriority},
        presentation::{IconId, ScoreBucket, StyleTag, priority_tag, status_tag},
        property::{ListingStatus, Property, PropertyCategory, PropertyFilter},
        summary::{
            DashboardSummary, active_listing_count, avg_days_on_market, category_breakdown,
            hot_lead_count, priority_breakdown, total_listing_value_millions,
        },
    };
    use agentos_dashboard::services::loader::{DashboardData, load_dashboard};
    use agentos_dashboard::services::supabase::{DataSource, Record, Table};
    use chrono::{TimeZone, Utc};
    use futures::executor::block_on;
    use serde_json::{Value, json};
    use std::cell::Cell;
    use std::rc::Rc;
    use yew::prelude::Reducible;

    // Helper function to build a property row as the backend returns it
    fn property_json(id: &str, status: &str, list_price: Value, days_on_market: Value) -> Value {
        json!({
            "id": id,
            "category": "residential",
            "property_type": "single_family",
            "status": status,
            "address_line1": format!("{id} Oak Valley Dr"),
            "city": "Austin",
            "state": "TX",
            "list_price": list_price,
            "bedrooms": 3,
            "bathrooms": 2.5,
            "square_feet": 2450,
            "days_on_market": days_on_market,
            "primary_photo_url": null
        })
    }

    fn lead_json(id: &str, priority: &str, score: i32) -> Value {
        json!({
            "id": id,
            "first_name": "Jane",
            "last_name": "Doe",
            "email": format!("{id}@example.com"),
            "phone": null,
            "status": "new",
            "priority": priority,
            "lead_score": score,
            "source": "open_house",
            "created_at": "2025-03-07T15:04:05.123456+00:00"
        })
    }

    fn property(status: &str, list_price: f64, days_on_market: Option<u32>) -> Property {
        serde_json::from_value(property_json("p", status, json!(list_price), json!(days_on_market)))
            .unwrap()
    }

    fn lead(priority: &str, score: i32) -> Lead {
        serde_json::from_value(lead_json("l", priority, score)).unwrap()
    }

    /// In-memory data source serving canned JSON per table
    struct StubSource {
        properties: Result<Value, AppError>,
        leads: Result<Value, AppError>,
        calls: Cell<usize>,
    }

    impl StubSource {
        fn new(properties: Result<Value, AppError>, leads: Result<Value, AppError>) -> Self {
            Self {
                properties,
                leads,
                calls: Cell::new(0),
            }
        }
    }

    impl DataSource for StubSource {
        async fn fetch_recent<R: Record>(&self, _limit: usize) -> Result<Vec<R>, AppError> {
            self.calls.set(self.calls.get() + 1);
            let rows = match R::TABLE {
                Table::Properties => self.properties.clone()?,
                Table::Leads => self.leads.clone()?,
            };
            serde_json::from_value(rows).map_err(|e| AppError::DataError(e.to_string()))
        }
    }

    // ===== Error Type Tests =====

    #[test]
    fn test_app_error_display() {
        let error = AppError::ApiError("Connection failed".to_string());
        assert_eq!(error.to_string(), "API error: Connection failed");

        let error = AppError::DataError("Invalid data".to_string());
        assert_eq!(error.to_string(), "Data error: Invalid data");

        assert_eq!(AppError::RateLimited.to_string(), "Rate limited");
    }

    // ===== Model Deserialization Tests =====

    #[test]
    fn test_property_deserialization() {
        let property: Property = serde_json::from_value(property_json(
            "abc",
            "pending",
            json!(450000),
            json!(12),
        ))
        .unwrap();

        assert_eq!(property.id, "abc");
        assert_eq!(property.category, PropertyCategory::Residential);
        assert_eq!(property.status, ListingStatus::Pending);
        assert_eq!(property.list_price, 450000.0);
        assert_eq!(property.bathrooms, Some(2.5));
        assert_eq!(property.days_on_market, Some(12));
        assert_eq!(property.location(), "Austin, TX");
    }

    #[test]
    fn test_property_null_price_reads_as_zero() {
        let property: Property =
            serde_json::from_value(property_json("a", "active", Value::Null, Value::Null)).unwrap();
        assert_eq!(property.list_price, 0.0);
        assert_eq!(property.days_on_market, None);
    }

    #[test]
    fn test_property_negative_price_rejected() {
        let result: Result<Property, _> =
            serde_json::from_value(property_json("a", "active", json!(-1.0), Value::Null));
        assert!(result.is_err());
    }

    #[test]
    fn test_unknown_categorical_values_preserved() {
        let mut row = property_json("a", "withdrawn", json!(1), Value::Null);
        row["category"] = json!("mixed_use");
        let property: Property = serde_json::from_value(row).unwrap();

        assert_eq!(property.status, ListingStatus::Other("withdrawn".to_string()));
        assert_eq!(property.status.to_string(), "withdrawn");
        assert_eq!(property.category.as_str(), "mixed_use");
        assert_eq!(property.category.icon(), IconId::Home);
    }

    #[test]
    fn test_lead_deserialization() {
        let lead: Lead = serde_json::from_value(lead_json("l1", "urgent", 88)).unwrap();

        assert_eq!(lead.full_name(), "Jane Doe");
        assert_eq!(lead.priority, LeadPriority::Urgent);
        assert_eq!(lead.phone, None);
        assert_eq!(lead.score_bucket(), ScoreBucket::High);
        assert_eq!(
            lead.created_at.date_naive(),
            Utc.with_ymd_and_hms(2025, 3, 7, 0, 0, 0).unwrap().date_naive()
        );
    }

    // ===== Classifier Tests =====

    #[test]
    fn test_status_tag_neutral_iff_unknown() {
        for status in ["active", "pending", "sold", "rented"] {
            assert_ne!(status_tag(status), StyleTag::Neutral, "{status}");
        }
        for status in ["", "withdrawn", "expired", "ACTIVE"] {
            assert_eq!(status_tag(status), StyleTag::Neutral, "{status}");
        }
    }

    #[test]
    fn test_priority_tag_critical_and_elevated() {
        for priority in ["urgent", "high", "medium", "low", "other"] {
            assert_eq!(priority_tag(priority) == StyleTag::Critical, priority == "urgent");
            assert_eq!(priority_tag(priority) == StyleTag::Elevated, priority == "high");
        }
    }

    #[test]
    fn test_category_icons() {
        let icons: Vec<&str> = PropertyCategory::all()
            .iter()
            .map(|c| c.icon().name())
            .collect();
        assert_eq!(
            icons,
            vec!["home", "building", "warehouse", "key", "map-pin", "home", "home"]
        );
    }

    #[test]
    fn test_lead_score_bucket_tags() {
        assert_eq!(lead("low", 75).score_bucket().as_str(), "high");
        assert_eq!(lead("low", 74).score_bucket().as_str(), "medium");
        assert_eq!(lead("low", 49).score_bucket().as_str(), "low");
        assert_eq!(ScoreBucket::High.style_tag(), StyleTag::Positive);
        assert_eq!(ScoreBucket::Medium.style_tag(), StyleTag::Warning);
        assert_eq!(ScoreBucket::Low.style_tag(), StyleTag::Neutral);
    }

    // ===== Aggregator Tests =====

    #[test]
    fn test_active_listing_count() {
        assert_eq!(active_listing_count(&[]), 0);

        let properties = vec![
            property("active", 1.0, None),
            property("active", 1.0, None),
            property("sold", 1.0, None),
        ];
        assert_eq!(active_listing_count(&properties), 2);
    }

    #[test]
    fn test_hot_lead_count() {
        let leads = vec![
            lead("high", 10),
            lead("urgent", 10),
            lead("medium", 90),
            lead("hot", 90),
        ];
        assert_eq!(hot_lead_count(&leads), 2);
        assert_eq!(hot_lead_count(&[]), 0);
    }

    #[test]
    fn test_total_listing_value_millions() {
        let properties = vec![
            property("active", 500_000.0, None),
            property("sold", 1_500_000.0, None),
        ];
        assert_eq!(total_listing_value_millions(&properties), 2.0);

        let summary = DashboardSummary::compute(&properties, &[]);
        assert_eq!(summary.total_value_label(), "$2.0M");
    }

    #[test]
    fn test_avg_days_on_market() {
        assert_eq!(avg_days_on_market(&[]), 0);

        let properties = vec![property("active", 1.0, Some(10)), property("active", 1.0, None)];
        assert_eq!(avg_days_on_market(&properties), 5);

        // 7 / 2 = 3.5 rounds up
        let properties = vec![property("active", 1.0, Some(3)), property("active", 1.0, Some(4))];
        assert_eq!(avg_days_on_market(&properties), 4);
    }

    #[test]
    fn test_breakdowns() {
        let properties = vec![property("active", 1.0, None), property("sold", 1.0, None)];
        let by_category = category_breakdown(&properties);
        assert_eq!(by_category.len(), 7);
        assert_eq!(by_category[0], ("residential".to_string(), 2));
        assert!(by_category[1..].iter().all(|(_, count)| *count == 0));

        let leads = vec![lead("urgent", 1), lead("low", 1), lead("someday", 1)];
        let by_priority = priority_breakdown(&leads);
        assert_eq!(
            by_priority,
            vec![
                ("urgent".to_string(), 1),
                ("high".to_string(), 0),
                ("medium".to_string(), 0),
                ("low".to_string(), 1),
                ("other".to_string(), 1),
            ]
        );
    }

    // ===== Property Filter Tests =====

    #[test]
    fn test_property_filter() {
        let mut commercial = property("active", 1.0, None);
        commercial.category = PropertyCategory::Commercial;
        commercial.city = "Round Rock".to_string();
        let properties = vec![property("active", 1.0, None), commercial];

        let all = PropertyFilter::default();
        assert_eq!(all.apply(&properties).len(), 2);

        let by_category =
            PropertyFilter::default().with_category(Some(PropertyCategory::Commercial));
        assert_eq!(by_category.apply(&properties).len(), 1);

        let by_query = PropertyFilter::default().with_query("  round ROCK ");
        let matched = by_query.apply(&properties);
        assert_eq!(matched.len(), 1);
        assert_eq!(matched[0].category, PropertyCategory::Commercial);

        let none = PropertyFilter::default()
            .with_category(Some(PropertyCategory::Land))
            .with_query("austin");
        assert!(none.apply(&properties).is_empty());
    }

    // ===== Loader Tests =====

    #[test]
    fn test_load_dashboard_end_to_end() {
        let source = StubSource::new(
            Ok(json!([
                property_json("p1", "active", json!(500000), json!(10)),
                property_json("p2", "active", json!(1500000), Value::Null),
                property_json("p3", "sold", json!(1000000), json!(20)),
            ])),
            Ok(json!([lead_json("l1", "high", 80), lead_json("l2", "low", 30)])),
        );

        let data = block_on(load_dashboard(&source, 20));
        assert_eq!(source.calls.get(), 2);
        assert!(data.is_complete());
        assert_eq!(data.properties.len(), 3);
        assert_eq!(data.leads.len(), 2);

        let state = Rc::new(DashboardState::default());
        assert!(state.is_loading());

        let ready = state.reduce(DashboardAction::Loaded {
            generation: 0,
            data: data.clone(),
        });
        assert!(!ready.is_loading());
        let loaded = ready.data().unwrap();
        assert_eq!(**loaded, data);

        // A second result for the same load does not transition again
        let again = ready.clone().reduce(DashboardAction::Loaded {
            generation: 0,
            data: DashboardData::default(),
        });
        assert!(Rc::ptr_eq(&again, &ready));

        let summary = loaded.summary();
        assert_eq!(
            summary,
            DashboardSummary::compute(&data.properties, &data.leads)
        );
        assert_eq!(summary.active_listings, 2);
        assert_eq!(summary.hot_leads, 1);
        assert_eq!(summary.total_value_millions, 3.0);
        assert_eq!(summary.avg_days_on_market, 10);
    }

    #[test]
    fn test_load_dashboard_partial_failure() {
        let source = StubSource::new(
            Ok(json!([property_json("p1", "active", json!(1), Value::Null)])),
            Err(AppError::RateLimited),
        );

        let data = block_on(load_dashboard(&source, 20));
        assert_eq!(data.properties.len(), 1);
        assert!(data.leads.is_empty());
        assert_eq!(data.failures.len(), 1);
        assert_eq!(data.failures[0].table, Table::Leads);
        assert_eq!(data.failures[0].message, "Rate limited");
    }

    #[test]
    fn test_load_dashboard_total_failure() {
        let source = StubSource::new(
            Err(AppError::AuthError("bad key".to_string())),
            Ok(json!([{ "unexpected": true }])),
        );

        let data = block_on(load_dashboard(&source, 20));
        assert!(data.properties.is_empty());
        assert!(data.leads.is_empty());

        let tables: Vec<Table> = data.failures.iter().map(|f| f.table).collect();
        assert_eq!(tables, vec![Table::Properties, Table::Leads]);
        assert_eq!(data.summary().avg_days_on_market, 0);
    }

    #[test]
    fn test_load_dashboard_caps_rows() {
        let rows: Vec<Value> = (0..25)
            .map(|i| property_json(&format!("p{i}"), "active", json!(1), Value::Null))
            .collect();
        let source = StubSource::new(Ok(Value::Array(rows)), Ok(json!([])));

        let data = block_on(load_dashboard(&source, 20));
        assert_eq!(data.properties.len(), 20);
        assert_eq!(data.recent_properties(5).len(), 5);
        assert!(data.recent_leads(5).is_empty());
    }

    // ===== Load Gate Tests =====

    #[test]
    fn test_reload_discards_stale_result() {
        let state = Rc::new(DashboardState::default());
        let reloading = state.reduce(DashboardAction::Reload);
        assert_eq!(reloading.generation(), 1);
        assert!(reloading.is_loading());

        // Result from the abandoned first load is ignored
        let stale = reloading.clone().reduce(DashboardAction::Loaded {
            generation: 0,
            data: DashboardData::default(),
        });
        assert!(Rc::ptr_eq(&stale, &reloading));

        let ready = stale.reduce(DashboardAction::Loaded {
            generation: 1,
            data: DashboardData::default(),
        });
        assert!(ready.data().is_some());

        // Retry from ready goes back to loading with a new generation
        let retry = ready.reduce(DashboardAction::Reload);
        assert_eq!(*retry, DashboardState::Loading { generation: 2 });
    }

    #[test]
    fn test_unavailable_snapshot_records_both_tables() {
        let data = DashboardData::unavailable(&AppError::ConfigError("no url".to_string()));
        assert!(!data.is_complete());
        assert_eq!(data.failures.len(), 2);
        assert!(data.failures.iter().all(|f| f.message == "Configuration error: no url"));
    }

    // ===== Tab Tests =====

    #[test]
    fn test_tabs_order_and_default() {
        let keys: Vec<&str> = Tab::all().iter().map(Tab::key).collect();
        assert_eq!(
            keys,
            vec![
                "overview",
                "properties",
                "leads",
                "transactions",
                "calendar",
                "analytics",
                "settings"
            ]
        );
        assert_eq!(Tab::default(), Tab::Overview);
    }

    #[test]
    fn test_tab_serialization_round_trip() {
        let json = serde_json::to_string(&Tab::Analytics).unwrap();
        assert_eq!(json, "\"analytics\"");
        let tab: Tab = serde_json::from_str("\"leads\"").unwrap();
        assert_eq!(tab, Tab::Leads);
    }
}
