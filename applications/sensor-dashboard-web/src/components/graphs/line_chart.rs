use leptos::*;

use crate::models::{ChartData, ChartSeries};

const WIDTH: f64 = 640.0;
const HEIGHT: f64 = 320.0;
const MARGIN_LEFT: f64 = 56.0;
const MARGIN_RIGHT: f64 = 16.0;
const MARGIN_TOP: f64 = 16.0;
const MARGIN_BOTTOM: f64 = 56.0;
const Y_TICKS: usize = 5;
const MAX_X_LABELS: usize = 10;

/// Maps dates and pH values onto the SVG canvas
#[derive(Debug, Clone, Copy, PartialEq)]
struct Scale {
    label_count: usize,
    min: f64,
    max: f64,
}

impl Scale {
    fn new(data: &ChartData) -> Option<Self> {
        let (min, max) = data.value_range()?;
        // Keep flat lines off the edges of the plot
        let pad = if max > min { (max - min) * 0.05 } else { 0.5 };

        Some(Self {
            label_count: data.labels.len(),
            min: min - pad,
            max: max + pad,
        })
    }

    fn plot_width() -> f64 {
        WIDTH - MARGIN_LEFT - MARGIN_RIGHT
    }

    fn plot_height() -> f64 {
        HEIGHT - MARGIN_TOP - MARGIN_BOTTOM
    }

    fn x(&self, label_index: usize) -> f64 {
        if self.label_count <= 1 {
            return MARGIN_LEFT + Self::plot_width() / 2.0;
        }
        MARGIN_LEFT + label_index as f64 * Self::plot_width() / (self.label_count - 1) as f64
    }

    fn y(&self, value: f64) -> f64 {
        MARGIN_TOP + (self.max - value) / (self.max - self.min) * Self::plot_height()
    }

    /// Evenly spaced y-axis values, top to bottom
    fn y_ticks(&self) -> Vec<f64> {
        let step = (self.max - self.min) / (Y_TICKS - 1) as f64;
        (0..Y_TICKS).map(|i| self.max - step * i as f64).collect()
    }
}

/// SVG `points` attribute for one series
///
/// Points sit at their own date's label position, so a series with missing
/// dates is simply shorter rather than shifted.
fn polyline_points(series: &ChartSeries, data: &ChartData, scale: &Scale) -> String {
    series
        .points
        .iter()
        .filter_map(|point| {
            data.label_index(&point.date)
                .map(|index| format!("{:.1},{:.1}", scale.x(index), scale.y(point.value)))
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Show every label when there are few, otherwise every n-th one
fn label_step(label_count: usize) -> usize {
    label_count.div_ceil(MAX_X_LABELS).max(1)
}

/// Line chart of pH values per date
#[component]
pub fn LineChart(data: ChartData) -> impl IntoView {
    let Some(scale) = Scale::new(&data) else {
        return view! {
            <div class="no-data">"No data for the selected range"</div>
        }
        .into_view();
    };

    let legend = data
        .series
        .iter()
        .map(|series| {
            view! {
                <span class="legend-item">
                    <span class="legend-swatch" style={format!("background-color: {}", series.color)}></span>
                    {series.label.clone()}
                </span>
            }
        })
        .collect_view();

    let grid = scale
        .y_ticks()
        .into_iter()
        .map(|value| {
            let y = scale.y(value);
            view! {
                <line x1=MARGIN_LEFT y1=y x2={WIDTH - MARGIN_RIGHT} y2=y stroke="#e0e0e0" />
                <text x={MARGIN_LEFT - 8.0} y={y + 4.0} text-anchor="end" font-size="11">
                    {format!("{:.2}", value)}
                </text>
            }
        })
        .collect_view();

    let step = label_step(data.labels.len());
    let x_labels = data
        .labels
        .iter()
        .enumerate()
        .filter(|(index, _)| index % step == 0)
        .map(|(index, label)| {
            let x = scale.x(index);
            let y = HEIGHT - MARGIN_BOTTOM + 16.0;
            view! {
                <text x=x y=y text-anchor="middle" font-size="11">{label.clone()}</text>
            }
        })
        .collect_view();

    let lines = data
        .series
        .iter()
        .map(|series| {
            let markers = series
                .points
                .iter()
                .filter_map(|point| {
                    data.label_index(&point.date).map(|index| {
                        view! {
                            <circle
                                cx={scale.x(index)}
                                cy={scale.y(point.value)}
                                r="3"
                                fill={series.color.clone()}
                            />
                        }
                    })
                })
                .collect_view();

            view! {
                <g class="series">
                    <polyline
                        points={polyline_points(series, &data, &scale)}
                        fill="none"
                        stroke={series.color.clone()}
                        stroke-width="2"
                    />
                    {markers}
                </g>
            }
        })
        .collect_view();

    view! {
        <div class="chart">
            <div class="chart-legend">{legend}</div>
            <svg class="chart-svg" viewBox={format!("0 0 {} {}", WIDTH, HEIGHT)}>
                {grid}
                {x_labels}
                {lines}
                <text x={MARGIN_LEFT + Scale::plot_width() / 2.0} y={HEIGHT - 8.0} text-anchor="middle" font-size="12">
                    "Date"
                </text>
                <text
                    x={-(MARGIN_TOP + Scale::plot_height() / 2.0)}
                    y="16"
                    transform="rotate(-90)"
                    text-anchor="middle"
                    font-size="12"
                >
                    "pH Value"
                </text>
            </svg>
        </div>
    }
    .into_view()
}
