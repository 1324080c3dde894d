//! Horizontal bar charts rendered to SVG files.
//!
//! Every render builds its own `BarChart`; nothing is shared between requests.

use std::path::{Path, PathBuf};

use askama::Template;

const WIDTH: f64 = 720.0;
const LABEL_AREA: f64 = 160.0;
const MARGIN: f64 = 24.0;
const TITLE_AREA: f64 = 48.0;
const AXIS_AREA: f64 = 56.0;
const BAR_STEP: f64 = 28.0;
const BAR_HEIGHT: f64 = 20.0;

#[derive(Debug, Clone, PartialEq)]
pub struct Bar {
    pub label: String,
    pub value: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BarChart {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub bars: Vec<Bar>,
}

#[derive(Debug, Clone)]
struct BarGeometry {
    label: String,
    value_text: String,
    x: f64,
    y: f64,
    width: f64,
    height: f64,
    text_y: f64,
    value_x: f64,
}

#[derive(Template)]
#[template(path = "charts/hbars.svg", escape = "html")]
struct HBarsSvg<'a> {
    title: &'a str,
    x_label: &'a str,
    y_label: &'a str,
    width: f64,
    height: f64,
    plot_left: f64,
    plot_right: f64,
    plot_top: f64,
    plot_bottom: f64,
    zero_x: f64,
    center_x: f64,
    center_y: f64,
    label_x: f64,
    x_label_y: f64,
    bars: Vec<BarGeometry>,
}

impl BarChart {
    pub fn new(title: impl Into<String>, x_label: impl Into<String>, y_label: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            x_label: x_label.into(),
            y_label: y_label.into(),
            bars: Vec::new(),
        }
    }

    pub fn with_bars<I, K>(mut self, data: I) -> Self
    where
        I: IntoIterator<Item = (K, f64)>,
        K: Into<String>,
    {
        self.bars
            .extend(data.into_iter().map(|(label, value)| Bar { label: label.into(), value }));
        self
    }

    pub fn render(&self) -> Result<String, askama::Error> {
        let plot_left = LABEL_AREA;
        let plot_right = WIDTH - MARGIN;
        let plot_top = TITLE_AREA;
        let plot_bottom = plot_top + BAR_STEP * self.bars.len().max(1) as f64;
        let plot_width = plot_right - plot_left;

        let min = self.bars.iter().map(|b| b.value).fold(0.0_f64, f64::min);
        let max = self.bars.iter().map(|b| b.value).fold(0.0_f64, f64::max);
        let span = if max - min > 0.0 { max - min } else { 1.0 };
        let scale = plot_width / span;
        let zero_x = plot_left - min * scale;

        let bars = self
            .bars
            .iter()
            .enumerate()
            .map(|(i, bar)| {
                let top = plot_top + BAR_STEP * i as f64 + (BAR_STEP - BAR_HEIGHT) / 2.0;
                let x = zero_x + bar.value.min(0.0) * scale;
                let width = bar.value.abs() * scale;
                BarGeometry {
                    label: bar.label.clone(),
                    value_text: format_value(bar.value),
                    x: round(x),
                    y: round(top),
                    width: round(width),
                    height: BAR_HEIGHT,
                    text_y: round(top + BAR_HEIGHT * 0.7),
                    value_x: round(x + width + 4.0),
                }
            })
            .collect();

        HBarsSvg {
            title: &self.title,
            x_label: &self.x_label,
            y_label: &self.y_label,
            width: WIDTH,
            height: plot_bottom + AXIS_AREA,
            plot_left,
            plot_right,
            plot_top,
            plot_bottom,
            zero_x: round(zero_x),
            center_x: round(plot_left + plot_width / 2.0),
            center_y: round((plot_top + plot_bottom) / 2.0),
            label_x: plot_left - 8.0,
            x_label_y: plot_bottom + 40.0,
            bars,
        }
        .render()
    }

    /// Renders the chart and overwrites `dir/file_name`.
    pub async fn save(&self, dir: &Path, file_name: &str) -> Result<PathBuf, crate::error::AppError> {
        let svg = self.render()?;
        tokio::fs::create_dir_all(dir).await?;
        let path = dir.join(file_name);
        tokio::fs::write(&path, svg).await?;
        tracing::debug!(path = %path.display(), bars = self.bars.len(), "Chart written");
        Ok(path)
    }
}

fn round(v: f64) -> f64 {
    (v * 10.0).round() / 10.0
}

fn format_value(v: f64) -> String {
    if v.fract() == 0.0 {
        format!("{:.0}", v)
    } else {
        format!("{:.2}", v)
    }
}
