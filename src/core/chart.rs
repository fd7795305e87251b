use image::{Rgb, RgbImage};
use serde::{Deserialize, Serialize};

use crate::core::sweep::ResponseTrace;

const BACKGROUND_COLOR: Rgb<u8> = Rgb([255, 255, 255]);
const FRAME_COLOR: Rgb<u8> = Rgb([60, 60, 60]);
const GRID_COLOR: Rgb<u8> = Rgb([210, 210, 210]);

/// Trace colors, cycled in order. Matches the familiar matplotlib default
/// cycle so the standard-cases chart reads the same as the reference plots.
pub const TRACE_PALETTE: [[u8; 3]; 6] = [
    [31, 119, 180],
    [255, 127, 14],
    [44, 160, 44],
    [214, 39, 40],
    [148, 103, 189],
    [140, 86, 75],
];

pub fn trace_color(trace_index: usize) -> Rgb<u8> {
    Rgb(TRACE_PALETTE[trace_index % TRACE_PALETTE.len()])
}

/**
 * Specifies the pixel layout of the response chart. The vertical data
 * range is derived from the trace extents, padded by `margin_fraction`
 * on each side.
 */
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct ChartSpecification {
    pub resolution: nalgebra::Vector2<u32>,
    pub margin_fraction: f64,
    pub grid_divisions: u32,
}

impl Default for ChartSpecification {
    fn default() -> Self {
        ChartSpecification {
            resolution: nalgebra::Vector2::new(900, 480),
            margin_fraction: 0.08,
            grid_divisions: 5,
        }
    }
}

/**
 * Affine map from data values onto fractional pixel indices along one
 * axis. `begin` lands on index 0 and `end` on index `n - 1`; a descending
 * range (used by the vertical axis, where pixel rows grow downward)
 * simply produces a negative slope.
 */
pub struct AxisMapper {
    offset: f64,
    index_per_value: f64,
}

impl AxisMapper {
    pub fn new(n: u32, begin: f64, end: f64) -> AxisMapper {
        assert!(n > 1, "axis needs at least two pixels");
        assert!(begin != end, "axis data range must not be empty");
        AxisMapper {
            offset: begin,
            index_per_value: ((n - 1) as f64) / (end - begin),
        }
    }

    pub fn to_pixel(&self, value: f64) -> i32 {
        ((value - self.offset) * self.index_per_value).round() as i32
    }

    pub fn to_value(&self, index: u32) -> f64 {
        self.offset + (index as f64) / self.index_per_value
    }
}

/**
 * Draws every trace over a framed, gridded canvas and returns the image
 * buffer for the caller to write out. The chart itself carries no text;
 * the color-to-trace legend is emitted by the caller alongside the image.
 */
pub fn render_chart(
    spec: &ChartSpecification,
    time_samples: &[f64],
    traces: &[ResponseTrace],
) -> RgbImage {
    let width = spec.resolution[0];
    let height = spec.resolution[1];
    let mut image = RgbImage::from_pixel(width, height, BACKGROUND_COLOR);

    draw_grid(&mut image, spec.grid_divisions);

    if time_samples.len() < 2 {
        return image;
    }

    let (low, upp) = padded_displacement_extents(traces, spec.margin_fraction);
    let time_axis = AxisMapper::new(width, time_samples[0], *time_samples.last().unwrap());
    // Pixel rows grow downward, so the vertical axis maps top-to-bottom.
    let displacement_axis = AxisMapper::new(height, upp, low);

    for (trace_index, trace) in traces.iter().enumerate() {
        let color = trace_color(trace_index);
        for (pair_t, pair_x) in time_samples
            .windows(2)
            .zip(trace.result.displacement.windows(2))
        {
            let begin = (time_axis.to_pixel(pair_t[0]), displacement_axis.to_pixel(pair_x[0]));
            let end = (time_axis.to_pixel(pair_t[1]), displacement_axis.to_pixel(pair_x[1]));
            draw_segment(&mut image, begin, end, color);
        }
    }

    image
}

/// Vertical extents over every finite displacement sample, widened by the
/// margin. Degenerate (flat or empty) data falls back to a unit band so
/// the axis mapper always has a usable range.
fn padded_displacement_extents(traces: &[ResponseTrace], margin_fraction: f64) -> (f64, f64) {
    let mut low = f64::INFINITY;
    let mut upp = f64::NEG_INFINITY;
    for trace in traces {
        for &x in &trace.result.displacement {
            if x.is_finite() {
                low = low.min(x);
                upp = upp.max(x);
            }
        }
    }
    if low > upp {
        return (-1.0, 1.0);
    }
    let span = upp - low;
    if span < 1e-12 {
        return (low - 0.5, upp + 0.5);
    }
    let margin = margin_fraction * span;
    (low - margin, upp + margin)
}

fn draw_grid(image: &mut RgbImage, grid_divisions: u32) {
    let width = image.width();
    let height = image.height();
    let divisions = grid_divisions.max(1);

    for division in 0..=divisions {
        let boundary = division == 0 || division == divisions;
        let color = if boundary { FRAME_COLOR } else { GRID_COLOR };

        let column = (division * (width - 1)) / divisions;
        for row in 0..height {
            image.put_pixel(column, row, color);
        }

        let row = (division * (height - 1)) / divisions;
        for column in 0..width {
            image.put_pixel(column, row, color);
        }
    }
}

// Walks the longer pixel axis of the segment, interpolating the other.
// Out-of-canvas pixels are dropped rather than clamped so steep spikes do
// not smear along the border.
fn draw_segment(image: &mut RgbImage, begin: (i32, i32), end: (i32, i32), color: Rgb<u8>) {
    let delta_x = end.0 - begin.0;
    let delta_y = end.1 - begin.1;
    let steps = delta_x.abs().max(delta_y.abs()).max(1);
    for step in 0..=steps {
        let alpha = (step as f64) / (steps as f64);
        let x = begin.0 + ((alpha * delta_x as f64).round() as i32);
        let y = begin.1 + ((alpha * delta_y as f64).round() as i32);
        put_pixel_checked(image, x, y, color);
    }
}

fn put_pixel_checked(image: &mut RgbImage, x: i32, y: i32, color: Rgb<u8>) {
    if x >= 0 && y >= 0 && (x as u32) < image.width() && (y as u32) < image.height() {
        image.put_pixel(x as u32, y as u32, color);
    }
}
