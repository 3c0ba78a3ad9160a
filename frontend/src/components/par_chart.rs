use plotters::coord::Shift;
use plotters::prelude::*;
use plotters_canvas::CanvasBackend;
use shared::format::currency_compact;
use shared::{pie_slices, CategoryShare, ChartSeries, ChartVariant, PieSlice, WeeklyPoint};
use web_sys::HtmlCanvasElement;
use yew::prelude::*;

use crate::services::logging::Logger;

const CANVAS_WIDTH: u32 = 800;
const CANVAS_HEIGHT: u32 = 350;

const PAR_LINE: RGBColor = RGBColor(59, 130, 246);
const PAR_BAR: RGBColor = RGBColor(99, 102, 241);
const OUTSTANDING_LINE: RGBColor = RGBColor(16, 185, 129);
const AXIS_LABEL: RGBColor = RGBColor(75, 85, 99);
const AXIS: RGBColor = RGBColor(229, 231, 235);
const GRID: RGBColor = RGBColor(245, 245, 245);

type Area = DrawingArea<CanvasBackend, Shift>;

#[derive(Properties, PartialEq)]
pub struct ParChartProps {
    pub weekly: Vec<WeeklyPoint>,
    pub breakdown: Vec<CategoryShare>,
    pub variant: ChartVariant,
    pub currency_prefix: String,
    pub on_variant_change: Callback<ChartVariant>,
}

pub struct ParChart {
    canvas_ref: NodeRef,
}

impl Component for ParChart {
    type Message = ();
    type Properties = ParChartProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            canvas_ref: NodeRef::default(),
        }
    }

    fn rendered(&mut self, ctx: &Context<Self>, _first_render: bool) {
        self.draw_chart(ctx.props());
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();

        html! {
            <section class="chart-panel">
                <div class="chart-title-header">
                    <h3 class="chart-title">{props.variant.title()}</h3>
                    <div class="chart-variant-selector">
                        {for ChartVariant::ALL.iter().map(|&variant| {
                            let on_variant_change = props.on_variant_change.clone();
                            html! {
                                <button
                                    class={classes!("variant-button", (variant == props.variant).then_some("active"))}
                                    onclick={Callback::from(move |_: MouseEvent| on_variant_change.emit(variant))}
                                >
                                    {variant.label()}
                                </button>
                            }
                        })}
                    </div>
                </div>
                <div class="chart-content">
                    <canvas
                        ref={self.canvas_ref.clone()}
                        class="par-chart-canvas"
                        width={CANVAS_WIDTH.to_string()}
                        height={CANVAS_HEIGHT.to_string()}
                    ></canvas>
                </div>
            </section>
        }
    }
}

impl ParChart {
    fn draw_chart(&self, props: &ParChartProps) {
        let canvas = match self.canvas_ref.cast::<HtmlCanvasElement>() {
            Some(canvas) => canvas,
            None => return,
        };
        canvas.set_width(CANVAS_WIDTH);
        canvas.set_height(CANVAS_HEIGHT);

        let backend = match CanvasBackend::with_canvas_object(canvas) {
            Some(backend) => backend,
            None => return,
        };
        let root = backend.into_drawing_area();

        let series = ChartSeries::from_weekly(&props.weekly);
        let drawn = root.fill(&WHITE).ok().and_then(|_| match props.variant {
            ChartVariant::Trend => draw_trend(&root, &series),
            ChartVariant::Compare => draw_compare(&root, &series),
            ChartVariant::Distribution => draw_distribution(&root, &props.breakdown),
            ChartVariant::Combined => draw_combined(&root, &series, &props.currency_prefix),
        });

        if drawn.is_none() {
            Logger::warn_with_component(
                "par-chart",
                &format!("Failed to draw {} chart", props.variant.label()),
            );
        }
        let _ = root.present();
    }
}

fn segment_label(labels: &[String], value: &SegmentValue<usize>) -> String {
    match value {
        SegmentValue::Exact(i) | SegmentValue::CenterOf(i) => {
            labels.get(*i).cloned().unwrap_or_default()
        }
        SegmentValue::Last => String::new(),
    }
}

fn draw_trend(root: &Area, series: &ChartSeries) -> Option<()> {
    if series.is_empty() {
        return Some(());
    }
    let (y_min, y_max) = series.par_bounds();
    let labels = &series.labels;

    let mut chart = ChartBuilder::on(root)
        .margin(15)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d((0..series.len()).into_segmented(), y_min..y_max)
        .ok()?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .y_desc("PAR")
        .x_label_formatter(&|v| segment_label(labels, v))
        .y_label_formatter(&|v| format!("{:.1}%", v))
        .label_style(("sans-serif", 12, &AXIS_LABEL))
        .axis_style(&AXIS)
        .bold_line_style(&GRID)
        .draw()
        .ok()?;

    let points: Vec<(SegmentValue<usize>, f64)> = series
        .par
        .iter()
        .enumerate()
        .map(|(i, par)| (SegmentValue::CenterOf(i), *par))
        .collect();

    chart
        .draw_series(
            AreaSeries::new(points.iter().cloned(), 0.0, &PAR_LINE.mix(0.15))
                .border_style(PAR_LINE.stroke_width(3)),
        )
        .ok()?;
    chart
        .draw_series(
            points
                .iter()
                .map(|(x, y)| Circle::new((x.clone(), *y), 4, PAR_LINE.filled())),
        )
        .ok()?;
    Some(())
}

fn draw_compare(root: &Area, series: &ChartSeries) -> Option<()> {
    if series.is_empty() {
        return Some(());
    }
    let (y_min, y_max) = series.par_bounds();
    let labels = &series.labels;

    let mut chart = ChartBuilder::on(root)
        .margin(15)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d((0..series.len()).into_segmented(), y_min..y_max)
        .ok()?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .y_desc("PAR")
        .x_label_formatter(&|v| segment_label(labels, v))
        .y_label_formatter(&|v| format!("{:.1}%", v))
        .label_style(("sans-serif", 12, &AXIS_LABEL))
        .axis_style(&AXIS)
        .bold_line_style(&GRID)
        .draw()
        .ok()?;

    let bars = Histogram::vertical(&chart)
        .style(PAR_BAR.filled())
        .margin(20)
        .data(series.par.iter().enumerate().map(|(i, par)| (i, *par)));
    chart.draw_series(bars).ok()?;
    Some(())
}

/// PAR bars on the left axis, outstanding balance line on the right.
fn draw_combined(root: &Area, series: &ChartSeries, currency_prefix: &str) -> Option<()> {
    if series.is_empty() {
        return Some(());
    }
    let (y_min, y_max) = series.par_bounds();
    let (o_min, o_max) = series.outstanding_bounds();
    let labels = &series.labels;

    let mut chart = ChartBuilder::on(root)
        .margin(15)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .right_y_label_area_size(90)
        .build_cartesian_2d((0..series.len()).into_segmented(), y_min..y_max)
        .ok()?
        .set_secondary_coord((0..series.len()).into_segmented(), o_min..o_max);

    chart
        .configure_mesh()
        .disable_x_mesh()
        .y_desc("PAR")
        .x_label_formatter(&|v| segment_label(labels, v))
        .y_label_formatter(&|v| format!("{:.1}%", v))
        .label_style(("sans-serif", 12, &AXIS_LABEL))
        .axis_style(&AXIS)
        .bold_line_style(&GRID)
        .draw()
        .ok()?;

    chart
        .configure_secondary_axes()
        .y_desc("Outstanding")
        .y_label_formatter(&|v| currency_compact(currency_prefix, *v))
        .label_style(("sans-serif", 12, &AXIS_LABEL))
        .axis_style(&AXIS)
        .draw()
        .ok()?;

    let bars = Histogram::vertical(&*chart)
        .style(PAR_BAR.mix(0.8).filled())
        .margin(25)
        .data(series.par.iter().enumerate().map(|(i, par)| (i, *par)));
    chart.draw_series(bars).ok()?;

    chart
        .draw_secondary_series(LineSeries::new(
            series
                .outstanding
                .iter()
                .enumerate()
                .map(|(i, v)| (SegmentValue::CenterOf(i), *v)),
            OUTSTANDING_LINE.stroke_width(3),
        ))
        .ok()?;
    Some(())
}

fn draw_distribution(root: &Area, breakdown: &[CategoryShare]) -> Option<()> {
    let slices = pie_slices(breakdown);
    let (width, height) = root.dim_in_pixel();
    let radius = (f64::from(height.min(width)) / 2.0 - 30.0).max(10.0);
    let center = (width as i32 / 3, height as i32 / 2);

    for slice in &slices {
        let (r, g, b) = slice.category.rgb();
        root.draw(&Polygon::new(wedge(center, radius, slice), RGBColor(r, g, b).filled()))
            .ok()?;
    }

    let legend_x = width as i32 * 2 / 3 - 40;
    let legend_top = center.1 - (slices.len() as i32 * 26) / 2;
    let font = ("sans-serif", 14).into_font().color(&AXIS_LABEL);
    for (row, slice) in slices.iter().enumerate() {
        let y = legend_top + row as i32 * 26;
        let (r, g, b) = slice.category.rgb();
        root.draw(&Rectangle::new(
            [(legend_x, y), (legend_x + 14, y + 14)],
            RGBColor(r, g, b).filled(),
        ))
        .ok()?;
        root.draw(&Text::new(slice.label(), (legend_x + 22, y), font.clone()))
            .ok()?;
    }
    Some(())
}

/// Outline of one wedge, clockwise from twelve o'clock.
fn wedge(center: (i32, i32), radius: f64, slice: &PieSlice) -> Vec<(i32, i32)> {
    let sweep = slice.end_angle - slice.start_angle;
    let steps = ((sweep / 0.05).ceil() as usize).max(1);

    let mut points = Vec::with_capacity(steps + 2);
    points.push(center);
    for step in 0..=steps {
        let angle = slice.start_angle + sweep * step as f64 / steps as f64;
        points.push((
            center.0 + (radius * angle.sin()).round() as i32,
            center.1 - (radius * angle.cos()).round() as i32,
        ));
    }
    points
}


#[cfg(test)]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_draw_without_canvas_is_a_no_op() {
        let chart = ParChart {
            canvas_ref: NodeRef::default(),
        };
        let props = ParChartProps {
            weekly: shared::samples::aggregate_weekly(),
            breakdown: shared::samples::aggregate_performance(),
            variant: ChartVariant::Combined,
            currency_prefix: "KES".to_string(),
            on_variant_change: Callback::noop(),
        };
        chart.draw_chart(&props);
    }

    #[wasm_bindgen_test]
    async fn test_every_variant_renders_a_canvas() {
        for variant in ChartVariant::ALL {
            let root = gloo::utils::document().create_element("div").unwrap();
            gloo::utils::body().append_child(&root).unwrap();

            let props = ParChartProps {
                weekly: shared::samples::weekly_for("Steve Kibor"),
                breakdown: shared::samples::performance_for("Steve Kibor"),
                variant,
                currency_prefix: "KES".to_string(),
                on_variant_change: Callback::noop(),
            };
            yew::Renderer::<ParChart>::with_root_and_props(root.clone(), props).render();
            gloo::timers::future::TimeoutFuture::new(10).await;

            assert!(root.query_selector("canvas.par-chart-canvas").unwrap().is_some());
            assert!(root.inner_html().contains(variant.title()));
        }
    }
}
