use super::leads_table::LeadRow;
use super::property_card::PropertyRow;
use super::stat_card::{StatAccent, StatCard};
use crate::config::Config;
use crate::services::loader::DashboardData;
use std::rc::Rc;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct OverviewProps {
    pub data: Rc<DashboardData>,
}

#[function_component(Overview)]
pub fn overview(props: &OverviewProps) -> Html {
    // Recomputed on every render, the snapshot is small
    let summary = props.data.summary();

    html! {
        <>
            <div class="stat-grid">
                <StatCard
                    title="Active Listings"
                    value={summary.active_listings.to_string()}
                    icon={"\u{1F3E0}"}
                    accent={StatAccent::Blue}
                />
                <StatCard
                    title="Hot Leads"
                    value={summary.hot_leads.to_string()}
                    icon={"\u{1F465}"}
                    accent={StatAccent::Orange}
                />
                <StatCard
                    title="Total Value"
                    value={summary.total_value_label()}
                    icon={"\u{1F4B2}"}
                    accent={StatAccent::Green}
                />
                <StatCard
                    title="Avg. Days on Market"
                    value={summary.avg_days_on_market.to_string()}
                    icon={"\u{1F4C5}"}
                    accent={StatAccent::Purple}
                />
            </div>

            <div class="recent-grid">
                <div class="panel">
                    <h2>{"Recent Properties"}</h2>
                    <div class="list">
                        {
                            props.data.recent_properties(Config::RECENT_PREVIEW_COUNT).iter().map(|property| html! {
                                <PropertyRow key={property.id.clone()} property={property.clone()} />
                            }).collect::<Html>()
                        }
                    </div>
                </div>

                <div class="panel">
                    <h2>{"Recent Leads"}</h2>
                    <div class="list">
                        {
                            props.data.recent_leads(Config::RECENT_PREVIEW_COUNT).iter().map(|lead| html! {
                                <LeadRow key={lead.id.clone()} lead={lead.clone()} />
                            }).collect::<Html>()
                        }
                    </div>
                </div>
            </div>
        </>
    }
}
