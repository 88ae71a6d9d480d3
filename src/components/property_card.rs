use super::badge::Badge;
use crate::models::property::Property;
use crate::utils::format::{format_baths, format_count, format_thousands, humanize};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct PropertyProps {
    pub property: Property,
}

/// Card used in the properties grid
#[function_component(PropertyCard)]
pub fn property_card(props: &PropertyProps) -> Html {
    let property = &props.property;
    let icon = property.category.icon();

    html! {
        <div class="property-card">
            <div class="property-media" title={icon.name()}>
                if let Some(url) = &property.primary_photo_url {
                    <img src={url.clone()} alt={property.address_line1.clone()} loading="lazy" />
                } else {
                    <span class="property-icon large">{icon.glyph()}</span>
                }
            </div>
            <div class="property-body">
                <div class="property-heading">
                    <h3 class="property-price">{format_thousands(property.list_price)}</h3>
                    <Badge tag={property.status.style_tag()} label={property.status.to_string()} />
                </div>
                <p class="property-address">{&property.address_line1}</p>
                <p class="property-location">{property.location()}</p>

                if let Some(beds) = property.displayed_bedrooms() {
                    <div class="property-facts">
                        <span>{format!("{beds} bed")}</span>
                        <span>{format!("{} bath", property.bathrooms.map_or_else(|| "-".to_string(), format_baths))}</span>
                        <span>{format!("{} sqft", property.square_feet.map_or_else(|| "-".to_string(), format_count))}</span>
                    </div>
                }

                <div class="property-footer">
                    {format!(
                        "{} \u{2022} {}",
                        humanize(property.category.as_str()),
                        humanize(&property.property_type)
                    )}
                </div>
            </div>
        </div>
    }
}

/// Compact row used in the overview's recent properties list
#[function_component(PropertyRow)]
pub fn property_row(props: &PropertyProps) -> Html {
    let property = &props.property;

    html! {
        <div class="list-row">
            <div class="row-media">
                <span class="property-icon" title={property.category.icon().name()}>
                    {property.category.icon().glyph()}
                </span>
            </div>
            <div class="row-main">
                <h3 class="row-title">{&property.address_line1}</h3>
                <p class="row-subtitle">{property.location()}</p>
                <p class="row-meta">{humanize(property.category.as_str())}</p>
            </div>
            <div class="row-side">
                <p class="row-price">{format_thousands(property.list_price)}</p>
                <Badge tag={property.status.style_tag()} label={property.status.to_string()} />
            </div>
        </div>
    }
}
