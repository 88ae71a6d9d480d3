pub mod analytics;
pub mod badge;
pub mod empty_tab;
pub mod leads_table;
pub mod overview;
pub mod properties_view;
pub mod property_card;
pub mod stat_card;
pub mod status;
pub mod tab_nav;

pub use analytics::Analytics;
pub use empty_tab::{EmptyTab, SettingsPanel};
pub use leads_table::LeadsTable;
pub use overview::Overview;
pub use properties_view::PropertiesView;
pub use status::{FailureBanner, LoadingScreen};
pub use tab_nav::TabNav;
