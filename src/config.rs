/// Configuration constants for the application
pub struct Config;

impl Config {
    /// Backend base URL, baked in at build time from `SUPABASE_URL`
    pub const SUPABASE_URL: &'static str = match option_env!("SUPABASE_URL") {
        Some(url) => url,
        None => "http://localhost:54321",
    };

    /// Public anon key, baked in at build time from `SUPABASE_ANON_KEY`
    pub const SUPABASE_ANON_KEY: &'static str = match option_env!("SUPABASE_ANON_KEY") {
        Some(key) => key,
        None => "",
    };

    /// Maximum rows fetched per table on each load
    pub const PAGE_SIZE: usize = 20;

    /// Rows shown in the overview's recent lists
    pub const RECENT_PREVIEW_COUNT: usize = 5;

    /// Quiet period before the property search filter is applied
    pub const SEARCH_DEBOUNCE_MS: u32 = 150;

    /// localStorage key for the last selected tab
    pub const TAB_STORAGE_KEY: &'static str = "agentos.active_tab";
}
