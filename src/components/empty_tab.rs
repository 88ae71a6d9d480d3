use crate::config::Config;
use crate::hooks::use_tab::Tab;
use crate::services::supabase::ApiConfig;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct EmptyTabProps {
    pub tab: Tab,
}

/// Placeholder for tabs without content yet
#[function_component(EmptyTab)]
pub fn empty_tab(props: &EmptyTabProps) -> Html {
    html! {
        <div class="panel empty-state">
            <h2>{props.tab.label()}</h2>
            <p>{"Nothing to show here yet."}</p>
        </div>
    }
}

/// Read-only view of where the dashboard gets its data
#[function_component(SettingsPanel)]
pub fn settings_panel() -> Html {
    let config = ApiConfig::default();

    html! {
        <div class="panel">
            <h2>{"Data Source"}</h2>
            <dl class="settings-list">
                <dt>{"Backend"}</dt>
                <dd>{config.host().to_string()}</dd>
                <dt>{"Rows per table"}</dt>
                <dd>{Config::PAGE_SIZE.to_string()}</dd>
                <dt>{"Ordering"}</dt>
                <dd>{"Newest first"}</dd>
            </dl>
        </div>
    }
}
