use super::badge::{Badge, Score};
use crate::models::lead::Lead;
use crate::services::loader::DashboardData;
use crate::utils::format::{format_date, humanize};
use std::rc::Rc;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct LeadsTableProps {
    pub data: Rc<DashboardData>,
}

#[function_component(LeadsTable)]
pub fn leads_table(props: &LeadsTableProps) -> Html {
    html! {
        <div class="panel">
            <div class="panel-header">
                <h2>{"All Leads"}</h2>
            </div>
            <div class="table-scroll">
                <table class="leads-table">
                    <thead>
                        <tr>
                            <th>{"Name"}</th>
                            <th>{"Contact"}</th>
                            <th>{"Source"}</th>
                            <th>{"Score"}</th>
                            <th>{"Priority"}</th>
                            <th>{"Status"}</th>
                            <th>{"Created"}</th>
                        </tr>
                    </thead>
                    <tbody>
                        if props.data.leads.is_empty() {
                            <tr>
                                <td class="empty-row" colspan="7">{"No leads yet"}</td>
                            </tr>
                        }
                        {
                            props.data.leads.iter().map(|lead| html! {
                                <tr key={lead.id.clone()}>
                                    <td class="lead-name">{lead.full_name()}</td>
                                    <td>
                                        <div class="lead-email">{&lead.email}</div>
                                        if let Some(phone) = &lead.phone {
                                            <div class="lead-phone">{phone}</div>
                                        }
                                    </td>
                                    <td>{humanize(&lead.source)}</td>
                                    <td><Score score={lead.lead_score} /></td>
                                    <td>
                                        <Badge tag={lead.priority.style_tag()} label={lead.priority.to_string()} />
                                    </td>
                                    <td>{humanize(&lead.status)}</td>
                                    <td class="lead-created">{format_date(&lead.created_at)}</td>
                                </tr>
                            }).collect::<Html>()
                        }
                    </tbody>
                </table>
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct LeadRowProps {
    pub lead: Lead,
}

/// Compact row used in the overview's recent leads list
#[function_component(LeadRow)]
pub fn lead_row(props: &LeadRowProps) -> Html {
    let lead = &props.lead;

    html! {
        <div class="list-row">
            <div class="row-media avatar">{"\u{1F465}"}</div>
            <div class="row-main">
                <h3 class="row-title">{lead.full_name()}</h3>
                <p class="row-subtitle">{&lead.email}</p>
                <p class="row-meta">{humanize(&lead.source)}</p>
            </div>
            <div class="row-side">
                <div class="row-score">
                    <span class="score-label">{"Score:"}</span>
                    <Score score={lead.lead_score} />
                </div>
                <Badge tag={lead.priority.style_tag()} label={lead.priority.to_string()} />
            </div>
        </div>
    }
}
