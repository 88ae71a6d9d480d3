use crate::hooks::use_tab::Tab;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct TabNavProps {
    pub active: Tab,
    pub on_select: Callback<Tab>,
}

#[function_component(TabNav)]
pub fn tab_nav(props: &TabNavProps) -> Html {
    html! {
        <nav class="tab-nav" role="tablist">
            {
                Tab::all().iter().map(|&tab| {
                    let selected = tab == props.active;
                    let onclick = {
                        let on_select = props.on_select.clone();
                        Callback::from(move |_: MouseEvent| on_select.emit(tab))
                    };
                    html! {
                        <button
                            key={tab.key()}
                            class={classes!("tab", selected.then_some("active"))}
                            role="tab"
                            aria-selected={selected.to_string()}
                            {onclick}
                        >
                            {tab.label()}
                        </button>
                    }
                }).collect::<Html>()
            }
        </nav>
    }
}
