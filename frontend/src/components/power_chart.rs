use yew::prelude::*;
use web_sys::HtmlCanvasElement;
use plotters::prelude::*;
use plotters_canvas::CanvasBackend;

use crate::dom::DomError;
use crate::simulation::PowerSample;

const CHART_WIDTH: u32 = 320;
const CHART_HEIGHT: u32 = 80;
const LINE_COLOR: RGBColor = RGBColor(14, 165, 233);
const BACKGROUND: RGBColor = RGBColor(255, 255, 255);

#[derive(Properties, PartialEq)]
pub struct Props {
    pub samples: Vec<PowerSample>,
}

fn chart_error(e: impl std::fmt::Display) -> DomError {
    DomError::Chart(e.to_string())
}

fn draw(canvas: HtmlCanvasElement, samples: &[PowerSample]) -> Result<(), DomError> {
    canvas.set_width(CHART_WIDTH);
    canvas.set_height(CHART_HEIGHT);

    let backend = CanvasBackend::with_canvas_object(canvas)
        .ok_or_else(|| DomError::Chart("canvas has no 2d context".to_string()))?;
    let root = backend.into_drawing_area();
    root.fill(&BACKGROUND).map_err(chart_error)?;

    if samples.len() < 2 {
        return Ok(());
    }

    // Axes stay hidden; the sparkline only needs a little headroom around 18..=25 W.
    let mut chart = ChartBuilder::on(&root)
        .margin(6)
        .build_cartesian_2d(0..samples.len() - 1, 16u32..28u32)
        .map_err(chart_error)?;

    chart
        .draw_series(LineSeries::new(
            samples.iter().enumerate().map(|(i, sample)| (i, sample.watts)),
            LINE_COLOR.stroke_width(2),
        ))
        .map_err(chart_error)?;

    root.present().map_err(chart_error)?;
    Ok(())
}

/// Sparkline of the most recent power samples.
#[function_component]
pub fn PowerChart(props: &Props) -> Html {
    let canvas_ref = use_node_ref();

    {
        let canvas_ref = canvas_ref.clone();
        let samples = props.samples.clone();
        use_effect_with_deps(move |samples| {
            if let Some(canvas) = canvas_ref.cast::<HtmlCanvasElement>() {
                if let Err(e) = draw(canvas, samples) {
                    log::warn!("power chart: {}", e);
                }
            }
            || ()
        }, samples);
    }

    let latest = props
        .samples
        .last()
        .map(|s| format!("{} W at {}", s.watts, s.label()))
        .unwrap_or_default();

    html! {
        <div class="power-chart" title={latest}>
            <canvas
                ref={canvas_ref}
                width={CHART_WIDTH.to_string()}
                height={CHART_HEIGHT.to_string()}
                style="width: 100%; height: 80px;"
            />
        </div>
    }
}
