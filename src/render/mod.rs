//! Chart rendering

/// Chart drawing
pub mod chart;
/// State colors
pub mod palette;

pub use palette::{PaletteEntry, StatePalette};

use crate::core::SampleLog;
use crate::error::{PlotError, PlotResult};
use crate::processor::Segment;
use log::{debug, info};
use plotters::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};

/// Figure size in inches (width, height)
pub const FIGURE_SIZE_IN: (f64, f64) = (10.0, 4.0);
/// Default output resolution
pub const DEFAULT_DPI: u32 = 150;
/// Largest accepted image side in pixels
pub const MAX_DIMENSION: u32 = 65_535;

/// Image formats the renderer can write
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// PNG raster
    Png,
    /// JPEG raster
    Jpeg,
    /// BMP raster
    Bmp,
    /// GIF raster
    Gif,
    /// TIFF raster
    Tiff,
    /// Truevision TGA raster
    Tga,
    /// Lossless WebP raster
    WebP,
    /// SVG vector
    Svg,
}

impl OutputFormat {
    /// Format for a file extension, case-insensitive
    pub fn from_extension(extension: &str) -> Option<Self> {
        match extension.to_ascii_lowercase().as_str() {
            "png" => Some(OutputFormat::Png),
            "jpg" | "jpeg" => Some(OutputFormat::Jpeg),
            "bmp" => Some(OutputFormat::Bmp),
            "gif" => Some(OutputFormat::Gif),
            "tif" | "tiff" => Some(OutputFormat::Tiff),
            "tga" => Some(OutputFormat::Tga),
            "webp" => Some(OutputFormat::WebP),
            "svg" => Some(OutputFormat::Svg),
            _ => None,
        }
    }

    /// Pick the format for `path`; a path without extension gets `.png` appended
    pub fn resolve<P: AsRef<Path>>(path: P) -> PlotResult<(PathBuf, Self)> {
        let path = path.as_ref();

        let Some(extension) = path.extension() else {
            let mut name = path.as_os_str().to_owned();
            name.push(".png");
            return Ok((PathBuf::from(name), OutputFormat::Png));
        };

        let extension = extension.to_string_lossy();
        match Self::from_extension(&extension) {
            Some(format) => Ok((path.to_path_buf(), format)),
            None => Err(PlotError::UnsupportedFormat {
                path: path.display().to_string(),
                extension: extension.into_owned(),
            }),
        }
    }

    /// Whether the format is a raster image
    pub fn is_raster(&self) -> bool {
        !matches!(self, OutputFormat::Svg)
    }
}

/// Output options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    /// Resolution in pixels per inch
    pub dpi: u32,
}

impl Default for RenderOptions {
    fn default() -> Self {
        RenderOptions { dpi: DEFAULT_DPI }
    }
}

impl RenderOptions {
    /// Set resolution
    pub fn with_dpi(mut self, dpi: u32) -> Self {
        self.dpi = dpi;
        self
    }

    /// Reject resolutions that give an empty image or a side above [`MAX_DIMENSION`]
    pub fn validate(&self) -> PlotResult<()> {
        if self.dpi == 0 {
            return Err(PlotError::ConfigError("DPI must be at least 1".to_string()));
        }

        let (width, height) = (
            FIGURE_SIZE_IN.0 * self.dpi as f64,
            FIGURE_SIZE_IN.1 * self.dpi as f64,
        );
        if width.max(height) > MAX_DIMENSION as f64 {
            return Err(PlotError::ConfigError(format!(
                "image size {:.0}x{:.0} at {} DPI exceeds {} pixels per side",
                width, height, self.dpi, MAX_DIMENSION
            )));
        }

        Ok(())
    }

    /// Image size in pixels
    pub fn pixel_size(&self) -> (u32, u32) {
        let dpi = self.dpi as f64;
        (
            (FIGURE_SIZE_IN.0 * dpi).round() as u32,
            (FIGURE_SIZE_IN.1 * dpi).round() as u32,
        )
    }

    /// Convert typographic points (1/72 inch) to pixels, at least one
    pub fn points_to_pixels(&self, points: f64) -> u32 {
        ((points * self.dpi as f64 / 72.0).round() as u32).max(1)
    }
}

/// Render the chart to `path`, returning the path actually written
///
/// Any failure after the format is known, including invalid options and
/// drawing errors, is reported as [`PlotError::WriteOutput`].
pub fn render_to_file<P: AsRef<Path>>(
    log: &SampleLog,
    segments: &[Segment],
    path: P,
    options: &RenderOptions,
) -> PlotResult<PathBuf> {
    let (path, format) = OutputFormat::resolve(path)?;

    write_chart(log, segments, &path, format, options).map_err(|e| match e {
        err @ PlotError::WriteOutput { .. } => err,
        PlotError::RenderError(reason) | PlotError::ConfigError(reason) => {
            write_error(&path, reason)
        }
        PlotError::Io(err) => write_error(&path, err.to_string()),
        other => write_error(&path, other.to_string()),
    })?;

    info!("wrote {}", path.display());
    Ok(path)
}

/// Render the chart as an SVG document in memory
pub fn render_svg(
    log: &SampleLog,
    segments: &[Segment],
    options: &RenderOptions,
) -> PlotResult<String> {
    options.validate()?;

    let mut buffer = String::new();
    {
        let root = SVGBackend::with_string(&mut buffer, options.pixel_size()).into_drawing_area();
        chart::draw_chart(&root, log, segments, options)
            .map_err(|e| PlotError::RenderError(e.to_string()))?;
        root.present()
            .map_err(|e| PlotError::RenderError(e.to_string()))?;
    }

    Ok(buffer)
}

fn write_chart(
    log: &SampleLog,
    segments: &[Segment],
    path: &Path,
    format: OutputFormat,
    options: &RenderOptions,
) -> PlotResult<()> {
    options.validate()?;
    let size = options.pixel_size();
    debug!("rendering {:?} {}x{} to {}", format, size.0, size.1, path.display());

    if !format.is_raster() {
        let svg = render_svg(log, segments, options)?;
        fs::write(path, svg)?;
        return Ok(());
    }

    let root = BitMapBackend::new(path, size).into_drawing_area();
    chart::draw_chart(&root, log, segments, options)
        .map_err(|e| PlotError::RenderError(e.to_string()))?;
    root.present()
        .map_err(|e| write_error(path, e.to_string()))
}

fn write_error(path: &Path, reason: String) -> PlotError {
    PlotError::WriteOutput {
        path: path.display().to_string(),
        reason,
    }
}
