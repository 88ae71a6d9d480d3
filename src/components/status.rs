use crate::services::loader::FetchFailure;
use yew::prelude::*;

/// Full-page spinner shown until the first snapshot arrives
#[function_component(LoadingScreen)]
pub fn loading_screen() -> Html {
    html! {
        <div class="status loading">
            <div class="spinner"></div>
            <p>{"Loading dashboard..."}</p>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct FailureBannerProps {
    pub failures: Vec<FetchFailure>,
    pub on_retry: Callback<()>,
}

/// Names each table that failed to load and offers a retry
#[function_component(FailureBanner)]
pub fn failure_banner(props: &FailureBannerProps) -> Html {
    if props.failures.is_empty() {
        return html! {};
    }

    let onclick = {
        let on_retry = props.on_retry.clone();
        Callback::from(move |_: MouseEvent| on_retry.emit(()))
    };

    html! {
        <div class="status error" role="alert">
            <ul class="failure-list">
                {
                    props.failures.iter().map(|failure| html! {
                        <li key={failure.table.name()}>
                            {format!("Could not load {}: {}", failure.table, failure.message)}
                        </li>
                    }).collect::<Html>()
                }
            </ul>
            <button class="retry-button" {onclick}>{"Retry"}</button>
        </div>
    }
}
