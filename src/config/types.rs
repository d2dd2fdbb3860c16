//! Configuration type definitions.

use super::enums::ColorSpec;
use crate::export::ExportFormat;
use crate::input::Tool;
use serde::{Deserialize, Serialize};

/// Canvas surface settings.
///
/// Dimensions are fixed at startup; the surface does not respond to resize.
#[derive(Debug, Serialize, Deserialize)]
pub struct CanvasConfig {
    /// Surface width in pixels (valid range: 16 - 8192)
    #[serde(default = "default_width")]
    pub width: i32,

    /// Surface height in pixels (valid range: 16 - 8192)
    #[serde(default = "default_height")]
    pub height: i32,

    /// Background color - fills the canvas initially, on clear, and under
    /// eraser strokes. White keeps exported images printable.
    #[serde(default = "default_background")]
    pub background: ColorSpec,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            width: default_width(),
            height: default_height(),
            background: default_background(),
        }
    }
}

/// Drawing tool defaults.
///
/// Controls the initial tool selection; hosts change these values at runtime
/// through the editor setters.
#[derive(Debug, Serialize, Deserialize)]
pub struct DrawingConfig {
    /// Tool selected when the editor starts
    #[serde(default = "default_tool")]
    pub default_tool: Tool,

    /// Default stroke color - either a named color (red, green, blue, yellow,
    /// orange, pink, white, black), a `#rrggbb` hex string, or an RGB array
    /// like `[255, 0, 0]`
    #[serde(default = "default_color")]
    pub default_color: ColorSpec,

    /// Default brush thickness in pixels (valid range: 1.0 - 30.0)
    #[serde(default = "default_thickness")]
    pub default_thickness: f64,

    /// Whether shape tools start in filled mode instead of outline mode
    #[serde(default = "default_fill")]
    pub default_fill: bool,
}

impl Default for DrawingConfig {
    fn default() -> Self {
        Self {
            default_tool: default_tool(),
            default_color: default_color(),
            default_thickness: default_thickness(),
            default_fill: default_fill(),
        }
    }
}

/// Export settings.
#[derive(Debug, Serialize, Deserialize)]
pub struct ExportConfig {
    /// Directory exported images are saved to (supports ~)
    #[serde(default = "default_directory")]
    pub directory: String,

    /// Filename template (supports chrono format specifiers)
    #[serde(default = "default_filename_template")]
    pub filename_template: String,

    /// Image format extension (jpeg or png)
    #[serde(default = "default_format")]
    pub format: ExportFormat,

    /// JPEG quality (valid range: 1 - 100, ignored for PNG)
    #[serde(default = "default_jpeg_quality")]
    pub jpeg_quality: u8,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            directory: default_directory(),
            filename_template: default_filename_template(),
            format: default_format(),
            jpeg_quality: default_jpeg_quality(),
        }
    }
}

fn default_width() -> i32 {
    800
}

fn default_height() -> i32 {
    600
}

fn default_background() -> ColorSpec {
    ColorSpec::Name("white".to_string())
}

fn default_tool() -> Tool {
    Tool::Brush
}

fn default_color() -> ColorSpec {
    ColorSpec::Name("black".to_string())
}

fn default_thickness() -> f64 {
    5.0
}

fn default_fill() -> bool {
    false
}

fn default_directory() -> String {
    "~/Pictures/sketchpad".to_string()
}

fn default_filename_template() -> String {
    "sketch_%Y-%m-%d_%H%M%S".to_string()
}

fn default_format() -> ExportFormat {
    ExportFormat::Jpeg
}

fn default_jpeg_quality() -> u8 {
    90
}
