use super::RenderOptions;
use super::palette::StatePalette;
use crate::core::SampleLog;
use crate::processor::Segment;
use plotters::coord::Shift;
use plotters::prelude::*;
use std::ops::Range;

/// Chart title
pub const TITLE: &str = "Motor speed over steps";
/// X axis label
pub const X_LABEL: &str = "Step";
/// Y axis label
pub const Y_LABEL: &str = "Speed";

const FONT: &str = "sans-serif";
const LINE_COLOR: RGBColor = RGBColor(0x1f, 0x77, 0xb4);
const BAND_ALPHA: f64 = 0.25;
// fraction of the data range added on each side of an axis
const AXIS_MARGIN: f64 = 0.05;

/// Draw bands, speed line, mesh and legend onto `root`; does not present
pub(crate) fn draw_chart<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    log: &SampleLog,
    segments: &[Segment],
    options: &RenderOptions,
) -> Result<(), DrawingAreaErrorKind<DB::ErrorType>> {
    let palette = StatePalette;
    let px = |points: f64| options.points_to_pixels(points);
    let (x_range, y_range) = axis_ranges(log, segments);
    let (y_low, y_high) = (y_range.start, y_range.end);

    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(root)
        .caption(TITLE, (FONT, px(12.0)))
        .margin(px(10.0))
        .x_label_area_size(px(30.0))
        .y_label_area_size(px(40.0))
        .build_cartesian_2d(x_range, y_range)?;

    chart
        .configure_mesh()
        .max_light_lines(0)
        .x_desc(X_LABEL)
        .y_desc(Y_LABEL)
        .label_style((FONT, px(10.0)))
        .axis_desc_style((FONT, px(10.0)))
        .draw()?;

    for segment in segments {
        let (x_start, x_end) = segment.span();
        if !x_start.is_finite() || !x_end.is_finite() {
            continue;
        }
        let color = palette.color_for(segment.state());
        chart.draw_series(std::iter::once(Rectangle::new(
            [(x_start, y_low), (x_end, y_high)],
            color.mix(BAND_ALPHA).filled(),
        )))?;
    }

    chart.draw_series(LineSeries::new(
        log.points().filter(|(x, y)| x.is_finite() && y.is_finite()),
        LINE_COLOR.stroke_width(px(1.0)),
    ))?;

    // legend always lists the whole table
    let swatch = px(5.0) as i32;
    for entry in palette.entries() {
        let color = entry.color;
        chart
            .draw_series(std::iter::empty::<Rectangle<(f64, f64)>>())?
            .label(entry.label)
            .legend(move |(x, y)| {
                Rectangle::new([(x, y - swatch), (x + 2 * swatch, y + swatch)], color.filled())
            });
    }

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::UpperLeft)
        .label_font((FONT, px(10.0)))
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK.mix(0.3))
        .draw()?;

    Ok(())
}

/// Axis ranges covering every finite step, band edge and speed, with margins
pub(crate) fn axis_ranges(log: &SampleLog, segments: &[Segment]) -> (Range<f64>, Range<f64>) {
    let edges = segments.iter().flat_map(|segment| {
        let (x_start, x_end) = segment.span();
        [x_start, x_end]
    });
    let x = padded(bounds(log.steps().iter().copied().chain(edges)));
    let y = padded(bounds(log.speeds().iter().copied()));
    (x, y)
}

fn bounds(values: impl Iterator<Item = f64>) -> Option<(f64, f64)> {
    values
        .filter(|v| v.is_finite())
        .fold(None, |acc, v| match acc {
            None => Some((v, v)),
            Some((low, high)) => Some((low.min(v), high.max(v))),
        })
}

fn padded(bounds: Option<(f64, f64)>) -> Range<f64> {
    match bounds {
        None => 0.0..1.0,
        Some((low, high)) if high > low => {
            let pad = (high - low) * AXIS_MARGIN;
            (low - pad)..(high + pad)
        }
        Some((value, _)) => {
            let pad = if value == 0.0 { 1.0 } else { value.abs() * AXIS_MARGIN };
            (value - pad)..(value + pad)
        }
    }
}
