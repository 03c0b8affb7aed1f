//! Comparison charts for growth series
//!
//! Every series is drawn as a line with point markers. Rows that fall on a
//! whole year additionally get a scatter marker and a text label with the
//! value rounded to whole units.

use crate::error::ChartError;
use crate::growth::GrowthSeries;
use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use std::path::Path;

/// Layout and styling for a comparison chart
#[derive(Debug, Clone)]
pub struct ChartOptions {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    /// Output size in pixels (width, height)
    pub size: (u32, u32),
    /// Vertical distance, in asset value units, between a point and its label
    pub annotation_offset: f64,
    /// Label size in points as it should appear in the SVG. plotters shrinks
    /// requested font sizes by `SVG_FONT_SCALE`, so the request is scaled up.
    pub annotation_font_size: f64,
    /// Draw yearly labels vertically so neighbouring values don't overlap
    pub rotate_annotations: bool,
    /// Radius of the per-period line markers
    pub marker_size: u32,
    /// Radius of the yearly scatter markers
    pub scatter_size: u32,
}

impl Default for ChartOptions {
    fn default() -> Self {
        Self {
            title: "Compound Growth Over Time".to_string(),
            x_label: "Year".to_string(),
            y_label: "Asset Value".to_string(),
            size: (1200, 600),
            annotation_offset: 50.0,
            annotation_font_size: 8.0,
            rotate_annotations: true,
            marker_size: 3,
            scatter_size: 4,
        }
    }
}

/// Renders one or more growth series onto a shared SVG chart
#[derive(Debug, Clone, Default)]
pub struct ChartRenderer {
    options: ChartOptions,
}

impl ChartRenderer {
    pub fn new(options: ChartOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &ChartOptions {
        &self.options
    }

    /// Render the chart and write it to `path` as an SVG document
    pub fn render<P: AsRef<Path>>(&self, series: &[GrowthSeries], path: P) -> Result<(), ChartError> {
        let svg = self.render_to_string(series)?;
        std::fs::write(path.as_ref(), svg)?;
        log::info!("Chart with {} series written to {}", series.len(), path.as_ref().display());
        Ok(())
    }

    /// Render the chart to SVG markup
    pub fn render_to_string(&self, series: &[GrowthSeries]) -> Result<String, ChartError> {
        if series.is_empty() {
            return Err(ChartError::NoSeries);
        }

        let mut buffer = String::new();
        {
            let root = SVGBackend::with_string(&mut buffer, self.options.size).into_drawing_area();
            self.draw(&root, series)?;
        }
        Ok(buffer)
    }

    fn draw(&self, root: &DrawingArea<SVGBackend, Shift>, series: &[GrowthSeries]) -> Result<(), ChartError> {
        let opts = &self.options;
        let (x_range, y_range) = axis_ranges(series, opts.annotation_offset);
        log::debug!(
            "Drawing {} series, x={:?}, y={:.2}..{:.2}",
            series.len(), x_range, y_range.start, y_range.end
        );

        root.fill(&WHITE).map_err(backend_err)?;

        let mut chart = ChartBuilder::on(root)
            .caption(&opts.title, ("sans-serif", 24))
            .margin(20)
            .x_label_area_size(40)
            .y_label_area_size(80)
            .build_cartesian_2d(x_range, y_range)
            .map_err(backend_err)?;

        chart
            .configure_mesh()
            .x_desc(opts.x_label.as_str())
            .y_desc(opts.y_label.as_str())
            .draw()
            .map_err(backend_err)?;

        let label_style = annotation_style(opts);

        for (idx, s) in series.iter().enumerate() {
            let color = Palette99::pick(idx).to_rgba();
            let points: Vec<(f64, f64)> = s.rows().iter().map(|r| (r.year, r.asset_value)).collect();

            chart
                .draw_series(
                    LineSeries::new(points, color.stroke_width(2)).point_size(opts.marker_size),
                )
                .map_err(backend_err)?
                .label(format!("{} Compounding", s.frequency_label()))
                .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], color.stroke_width(2)));

            chart
                .draw_series(
                    s.yearly_rows()
                        .map(|r| Circle::new((r.year, r.asset_value), opts.scatter_size, color.filled())),
                )
                .map_err(backend_err)?;

            chart
                .draw_series(s.yearly_rows().map(|r| {
                    Text::new(
                        format!("{:.0}", r.asset_value),
                        (r.year, r.asset_value + opts.annotation_offset),
                        label_style.clone(),
                    )
                }))
                .map_err(backend_err)?;
        }

        chart
            .configure_series_labels()
            .position(SeriesLabelPosition::UpperLeft)
            .background_style(&WHITE.mix(0.8))
            .border_style(&BLACK)
            .draw()
            .map_err(backend_err)?;

        root.present().map_err(backend_err)?;
        Ok(())
    }
}

fn backend_err<E: std::fmt::Display>(e: E) -> ChartError {
    ChartError::Backend(e.to_string())
}

/// Ratio between a requested font size and the size plotters emits
const SVG_FONT_SCALE: f64 = 1.24;

fn annotation_style(opts: &ChartOptions) -> TextStyle<'static> {
    let font = ("sans-serif", opts.annotation_font_size * SVG_FONT_SCALE).into_font();
    if opts.rotate_annotations {
        TextStyle::from(font.transform(FontTransform::Rotate270)).pos(Pos::new(HPos::Left, VPos::Center))
    } else {
        TextStyle::from(font).pos(Pos::new(HPos::Center, VPos::Bottom))
    }
}

/// Year range covering every series, value range padded to fit the labels
fn axis_ranges(series: &[GrowthSeries], annotation_offset: f64) -> (std::ops::Range<f64>, std::ops::Range<f64>) {
    let rows = series.iter().flat_map(|s| s.rows());

    let mut x_max = 0.0_f64;
    let mut y_min = f64::INFINITY;
    let mut y_max = f64::NEG_INFINITY;
    for row in rows {
        x_max = x_max.max(row.year);
        y_min = y_min.min(row.asset_value);
        y_max = y_max.max(row.asset_value);
    }

    if !y_min.is_finite() || !y_max.is_finite() {
        y_min = 0.0;
        y_max = 1.0;
    }
    if x_max <= 0.0 {
        x_max = 1.0;
    }

    let y_top = y_max + annotation_offset.max(0.0);
    let pad = ((y_top - y_min) * 0.05).max(1.0);

    (0.0..x_max, (y_min - pad)..(y_top + pad))
}
