use yew::prelude::*;

use agentos_dashboard::components::{
    Analytics, EmptyTab, FailureBanner, LeadsTable, LoadingScreen, Overview, PropertiesView,
    SettingsPanel, TabNav,
};
use agentos_dashboard::hooks::use_dashboard::use_dashboard;
use agentos_dashboard::hooks::use_tab::{Tab, use_tab};

#[function_component(App)]
fn app() -> Html {
    let dashboard = use_dashboard();
    let tab_handle = use_tab();

    let content = match dashboard.state.data() {
        None => html! { <LoadingScreen /> },
        Some(data) => html! {
            <>
                <FailureBanner failures={data.failures.clone()} on_retry={dashboard.reload.clone()} />
                {
                    match tab_handle.tab {
                        Tab::Overview => html! { <Overview data={data.clone()} /> },
                        Tab::Properties => html! { <PropertiesView data={data.clone()} /> },
                        Tab::Leads => html! { <LeadsTable data={data.clone()} /> },
                        Tab::Analytics => html! { <Analytics data={data.clone()} /> },
                        Tab::Settings => html! { <SettingsPanel /> },
                        tab @ (Tab::Transactions | Tab::Calendar) => html! { <EmptyTab {tab} /> },
                    }
                }
            </>
        },
    };

    html! {
        <div class="app-container">
            <header class="app-header">
                <h1>{"AgentOS Realtor Dashboard"}</h1>
                <p class="app-subtitle">{"Manage properties, leads, and transactions"}</p>
            </header>

            <TabNav active={tab_handle.tab} on_select={tab_handle.set_tab.clone()} />

            <main class="app-main">
                {content}
            </main>

            <style>
                {include_str!("style.css")}
            </style>
        </div>
    }
}

fn main() {
    yew::Renderer::<App>::new().render();
}
