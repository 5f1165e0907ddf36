//! Boundary contract for the external Code 128 symbol renderer.
//!
//! Drawing bars is not done here. A renderer receives an [`EncodedStream`]
//! as opaque data to encode, interprets FNC1 as the symbology's function-1
//! codepoint, and returns image bytes.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::codec::encode;
use crate::error::RenderError;
use crate::model::EncodedStream;

/// Image formats a renderer can produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageFormat {
    Png,
    Svg,
    Eps,
}

impl ImageFormat {
    /// MIME type for serving the image.
    pub fn mime_type(self) -> &'static str {
        match self {
            ImageFormat::Png => "image/png",
            ImageFormat::Svg => "image/svg+xml",
            ImageFormat::Eps => "application/postscript",
        }
    }

    /// File extension without the dot.
    pub fn extension(self) -> &'static str {
        match self {
            ImageFormat::Png => "png",
            ImageFormat::Svg => "svg",
            ImageFormat::Eps => "eps",
        }
    }
}

impl fmt::Display for ImageFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

impl FromStr for ImageFormat {
    type Err = RenderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "PNG" => Ok(ImageFormat::Png),
            "SVG" => Ok(ImageFormat::Svg),
            "EPS" => Ok(ImageFormat::Eps),
            _ => Err(RenderError::UnsupportedFormat(s.to_string())),
        }
    }
}

/// Drawing options passed through to the renderer.
///
/// Lengths are in millimetres, font size in points.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderOptions {
    pub module_height: f64,
    pub module_width: f64,
    pub quiet_zone: f64,
    pub font_size: u32,
    pub text_distance: f64,
    pub center_text: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            module_height: 15.0,
            module_width: 0.26,
            quiet_zone: 6.5,
            font_size: 10,
            text_distance: 5.0,
            center_text: true,
        }
    }
}

/// A Code 128 symbol renderer.
pub trait SymbolRenderer {
    /// Renders `data` as a Code 128 symbol in the requested format.
    fn render(
        &self,
        data: &EncodedStream,
        format: ImageFormat,
        options: &RenderOptions,
    ) -> Result<Vec<u8>, RenderError>;
}

/// Encodes `raw` and hands the stream to `renderer`.
///
/// Nothing reaches the renderer if encoding fails.
pub fn render_ai_data<R: SymbolRenderer + ?Sized>(
    raw: &str,
    renderer: &R,
    format: ImageFormat,
    options: &RenderOptions,
) -> Result<Vec<u8>, RenderError> {
    let stream = encode(raw)?;
    tracing::debug!(%format, len = stream.len(), "rendering GS1-128 symbol");
    renderer.render(&stream, format, options)
}
