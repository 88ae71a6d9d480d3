use yew::prelude::*;

/// Accent color of a stat card's icon
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatAccent {
    Blue,
    Orange,
    Green,
    Purple,
}

impl StatAccent {
    pub fn css_class(&self) -> &'static str {
        match self {
            StatAccent::Blue => "accent-blue",
            StatAccent::Orange => "accent-orange",
            StatAccent::Green => "accent-green",
            StatAccent::Purple => "accent-purple",
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct StatCardProps {
    pub title: AttrValue,
    pub value: AttrValue,
    pub icon: AttrValue,
    pub accent: StatAccent,
}

#[function_component(StatCard)]
pub fn stat_card(props: &StatCardProps) -> Html {
    html! {
        <div class="stat-card">
            <div class={classes!("stat-icon", props.accent.css_class())}>{&props.icon}</div>
            <p class="stat-value">{&props.value}</p>
            <h3 class="stat-title">{&props.title}</h3>
        </div>
    }
}
