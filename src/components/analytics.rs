use charming::{
    Chart as CharmingChart,
    component::{Axis, Grid, Title},
    element::{
        AxisLabel, AxisPointer, AxisPointerType, AxisType, ItemStyle, LineStyle, LineStyleType,
        SplitLine, TextStyle, Tooltip, Trigger,
    },
    renderer::WasmRenderer,
    series::Bar,
};
use gloo::events::EventListener;
use std::rc::Rc;
use web_sys::HtmlElement;
use yew::prelude::*;

use crate::models::summary::{category_breakdown, priority_breakdown};
use crate::services::loader::DashboardData;
use crate::utils::format::humanize;

const CATEGORY_CHART_ID: &str = "category-chart";
const PRIORITY_CHART_ID: &str = "priority-chart";

/// Labels and counts for one bar chart
#[derive(Debug, Clone, PartialEq)]
pub struct BarSeries {
    pub title: &'static str,
    pub labels: Vec<String>,
    pub counts: Vec<f64>,
    pub color: &'static str,
}

impl BarSeries {
    fn from_breakdown(title: &'static str, breakdown: Vec<(String, usize)>, color: &'static str) -> Self {
        let (labels, counts) = breakdown
            .into_iter()
            .map(|(label, count)| (humanize(&label), count as f64))
            .unzip();

        Self {
            title,
            labels,
            counts,
            color,
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct AnalyticsProps {
    pub data: Rc<DashboardData>,
}

#[function_component(Analytics)]
pub fn analytics(props: &AnalyticsProps) -> Html {
    let by_category = use_memo(props.data.clone(), |data| {
        BarSeries::from_breakdown("Listings by Category", category_breakdown(&data.properties), "#648fff")
    });
    let by_priority = use_memo(props.data.clone(), |data| {
        BarSeries::from_breakdown("Leads by Priority", priority_breakdown(&data.leads), "#fe6100")
    });

    html! {
        <div class="analytics-grid">
            <div class="panel">
                <BarChart series={by_category} chart_id={CATEGORY_CHART_ID} />
            </div>
            <div class="panel">
                <BarChart series={by_priority} chart_id={PRIORITY_CHART_ID} />
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct BarChartProps {
    series: Rc<BarSeries>,
    chart_id: &'static str,
}

#[function_component(BarChart)]
fn bar_chart(props: &BarChartProps) -> Html {
    let container_ref = use_node_ref();

    {
        let container_ref = container_ref.clone();
        let chart_id = props.chart_id;

        use_effect_with(
            (props.series.clone(), container_ref),
            move |(series, container_ref)| {
                let listener = container_ref.cast::<HtmlElement>().and_then(|container| {
                    render_chart(&container, chart_id, series);

                    let series = series.clone();
                    web_sys::window().map(|window| {
                        EventListener::new(&window, "resize", move |_| {
                            render_chart(&container, chart_id, &series);
                        })
                    })
                });

                move || drop(listener)
            },
        );
    }

    html! {
        <div class="chart-container" ref={container_ref}>
            <div id={props.chart_id} />
        </div>
    }
}

fn render_chart(container: &HtmlElement, chart_id: &str, series: &BarSeries) {
    let width = container.client_width().cast_unsigned();
    let height = container.client_height().cast_unsigned();

    if width == 0 || height == 0 {
        return;
    }

    let chart = build_chart(series);
    if let Err(e) = WasmRenderer::new(width, height).render(chart_id, &chart) {
        gloo::console::error!(format!("Render error: {e:?}"));
    }
}

fn build_chart(series: &BarSeries) -> CharmingChart {
    let (title_color, axis_color, grid_color) = ("#1f2937", "#6b7280", "#e5e7eb");

    CharmingChart::new()
        .title(
            Title::new()
                .text(series.title)
                .left("center")
                .text_style(TextStyle::new().font_size(16).color(title_color)),
        )
        .tooltip(
            Tooltip::new()
                .trigger(Trigger::Axis)
                .axis_pointer(AxisPointer::new().type_(AxisPointerType::Shadow)),
        )
        .grid(
            Grid::new()
                .left("8%")
                .right("4%")
                .bottom("12%")
                .contain_label(true),
        )
        .x_axis(
            Axis::new()
                .type_(AxisType::Category)
                .data(series.labels.clone())
                .axis_label(AxisLabel::new().color(axis_color).interval(0)),
        )
        .y_axis(
            Axis::new()
                .type_(AxisType::Value)
                .axis_label(AxisLabel::new().color(axis_color))
                .split_line(
                    SplitLine::new().line_style(
                        LineStyle::new()
                            .color(grid_color)
                            .type_(LineStyleType::Dashed),
                    ),
                ),
        )
        .series(
            Bar::new()
                .data(series.counts.clone())
                .bar_width("60%")
                .item_style(ItemStyle::new().color(series.color)),
        )
}
