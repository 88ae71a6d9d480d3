use gloo_storage::Storage;
use serde::{Deserialize, Serialize};
use yew::prelude::*;

use crate::config::Config;

/// Dashboard tabs, in navigation order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tab {
    #[default]
    Overview,
    Properties,
    Leads,
    Transactions,
    Calendar,
    Analytics,
    Settings,
}

impl Tab {
    /// All tabs in navigation order.
    pub fn all() -> &'static [Tab] {
        &[
            Tab::Overview,
            Tab::Properties,
            Tab::Leads,
            Tab::Transactions,
            Tab::Calendar,
            Tab::Analytics,
            Tab::Settings,
        ]
    }

    pub fn key(&self) -> &'static str {
        match self {
            Tab::Overview => "overview",
            Tab::Properties => "properties",
            Tab::Leads => "leads",
            Tab::Transactions => "transactions",
            Tab::Calendar => "calendar",
            Tab::Analytics => "analytics",
            Tab::Settings => "settings",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Tab::Overview => "Overview",
            Tab::Properties => "Properties",
            Tab::Leads => "Leads",
            Tab::Transactions => "Transactions",
            Tab::Calendar => "Calendar",
            Tab::Analytics => "Analytics",
            Tab::Settings => "Settings",
        }
    }
}

/// Handle returned by `use_tab` hook
#[derive(Clone, PartialEq)]
pub struct TabHandle {
    pub tab: Tab,
    pub set_tab: Callback<Tab>,
}

/// Custom hook for the active tab with localStorage persistence
#[hook]
pub fn use_tab() -> TabHandle {
    // Load last tab from localStorage, fallback to overview
    let tab = use_state(|| load_tab_preference().unwrap_or_default());

    // Effect: Persist tab to localStorage on change
    {
        let tab_value = *tab;
        use_effect_with(tab_value, move |tab| {
            save_tab_preference(*tab);
            || ()
        });
    }

    let set_tab = {
        let tab = tab.clone();
        Callback::from(move |new_tab| tab.set(new_tab))
    };

    TabHandle { tab: *tab, set_tab }
}

/// Load tab preference from localStorage
fn load_tab_preference() -> Option<Tab> {
    gloo_storage::LocalStorage::get(Config::TAB_STORAGE_KEY).ok()
}

/// Save tab preference to localStorage
fn save_tab_preference(tab: Tab) {
    if let Err(e) = gloo_storage::LocalStorage::set(Config::TAB_STORAGE_KEY, tab) {
        gloo::console::warn!(format!("Failed to save tab: {e:?}"));
    }
}
