use super::property_card::PropertyCard;
use crate::config::Config;
use crate::models::property::{PropertyCategory, PropertyFilter};
use crate::services::loader::DashboardData;
use crate::utils::debounce::Debouncer;
use crate::utils::format::humanize;
use std::rc::Rc;
use web_sys::HtmlInputElement;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct PropertiesViewProps {
    pub data: Rc<DashboardData>,
}

/// Property grid with search and category filters
#[function_component(PropertiesView)]
pub fn properties_view(props: &PropertiesViewProps) -> Html {
    let category = use_state(|| None::<PropertyCategory>);
    let query = use_state(String::new);
    let debouncer = use_state(|| Debouncer::new(Config::SEARCH_DEBOUNCE_MS));

    // Pending search must not fire into an unmounted component
    {
        let debouncer = (*debouncer).clone();
        use_effect_with((), move |_| move || debouncer.cancel());
    }

    let oninput = {
        let query = query.clone();
        let debouncer = (*debouncer).clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let value = input.value();
            let query = query.clone();
            debouncer.call(move || query.set(value));
        })
    };

    let filter = PropertyFilter::default()
        .with_category((*category).clone())
        .with_query((*query).clone());
    let visible = filter.apply(&props.data.properties);

    let category_button = |label: String, value: Option<PropertyCategory>| {
        let selected = *category == value;
        let onclick = {
            let category = category.clone();
            Callback::from(move |_: MouseEvent| category.set(value.clone()))
        };
        html! {
            <button class={classes!("chip", selected.then_some("active"))} {onclick}>
                {label}
            </button>
        }
    };

    html! {
        <div>
            <div class="panel filters">
                <input
                    class="search-input"
                    type="search"
                    placeholder="Search properties..."
                    aria-label="Search properties"
                    {oninput}
                />
                <div class="chip-row">
                    {category_button("All".to_string(), None)}
                    {
                        PropertyCategory::all().iter().map(|c| {
                            category_button(humanize(c.as_str()), Some(c.clone()))
                        }).collect::<Html>()
                    }
                </div>
            </div>

            if visible.is_empty() {
                <div class="panel empty-state">
                    <p>{"No properties match the current filters"}</p>
                </div>
            } else {
                <div class="property-grid">
                    {
                        visible.into_iter().map(|property| html! {
                            <PropertyCard key={property.id.clone()} property={property.clone()} />
                        }).collect::<Html>()
                    }
                </div>
            }
        </div>
    }
}
