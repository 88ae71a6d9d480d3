use crate::models::presentation::StyleTag;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct BadgeProps {
    pub tag: StyleTag,
    pub label: AttrValue,
}

#[function_component(Badge)]
pub fn badge(props: &BadgeProps) -> Html {
    html! {
        <span class={classes!("badge", props.tag.css_class())}>{&props.label}</span>
    }
}

#[derive(Properties, PartialEq)]
pub struct ScoreProps {
    pub score: i32,
}

/// Lead score colored by bucket
#[function_component(Score)]
pub fn score(props: &ScoreProps) -> Html {
    let bucket = crate::models::presentation::score_bucket(props.score);

    html! {
        <span class={classes!("score", bucket.style_tag().css_class())} title={format!("{} score", bucket.as_str())}>
            {props.score.to_string()}
        </span>
    }
}
