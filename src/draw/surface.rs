//! Raster drawing surface with whole-buffer snapshot support.
//!
//! [`Surface`] wraps a Cairo image surface and owns the pixel buffer that all
//! tools paint into. Stroke previews rely on the snapshot/restore pair: the
//! session captures the buffer once at pointer-down and rewinds to it before
//! every preview repaint.

use super::color::Color;
use std::fmt;
use thiserror::Error;

/// Errors raised by surface creation and pixel access.
#[derive(Debug, Error)]
pub enum SurfaceError {
    #[error("surface dimensions {width}x{height} are invalid")]
    InvalidSize { width: i32, height: i32 },

    #[error("failed to create drawing surface: {0}")]
    Create(cairo::Error),

    #[error("failed to acquire drawing context: {0}")]
    Context(cairo::Error),

    #[error("pixel buffer is not exclusively accessible: {0}")]
    Access(cairo::BorrowError),

    #[error("snapshot size {snapshot_width}x{snapshot_height} does not match surface {width}x{height}")]
    SnapshotMismatch {
        snapshot_width: i32,
        snapshot_height: i32,
        width: i32,
        height: i32,
    },

    #[error("pixel ({x}, {y}) is outside the surface")]
    OutOfBounds { x: i32, y: i32 },
}

/// Opaque full-buffer pixel copy taken at stroke start.
///
/// Owned exclusively by the active stroke session and dropped when the
/// session ends, so snapshot memory never outlives the stroke it belongs to.
pub struct Snapshot {
    data: Vec<u8>,
    width: i32,
    height: i32,
}

impl fmt::Debug for Snapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Snapshot")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("bytes", &self.data.len())
            .finish()
    }
}

/// The retained pixel buffer all tools draw into.
///
/// Dimensions are fixed at creation time. Drawing happens through
/// short-lived Cairo contexts handed out by [`Surface::with_context`], which
/// keeps the underlying buffer exclusively borrowable for snapshot, restore,
/// and readback operations in between.
pub struct Surface {
    image: cairo::ImageSurface,
    background: Color,
}

impl Surface {
    /// Creates a surface of the given size, filled with the background color.
    pub fn new(width: i32, height: i32, background: Color) -> Result<Self, SurfaceError> {
        if width <= 0 || height <= 0 {
            return Err(SurfaceError::InvalidSize { width, height });
        }

        let image = cairo::ImageSurface::create(cairo::Format::ARgb32, width, height)
            .map_err(SurfaceError::Create)?;
        let mut surface = Self { image, background };
        surface.clear()?;
        Ok(surface)
    }

    /// Surface width in pixels.
    pub fn width(&self) -> i32 {
        self.image.width()
    }

    /// Surface height in pixels.
    pub fn height(&self) -> i32 {
        self.image.height()
    }

    /// The color `clear()` resets to; also the color eraser strokes paint with.
    pub fn background(&self) -> Color {
        self.background
    }

    /// Runs drawing operations against a short-lived Cairo context.
    ///
    /// The context is created per call and dropped before this returns, so
    /// the pixel buffer stays exclusively borrowable for `snapshot()`,
    /// `restore()`, and the readback helpers.
    pub fn with_context<T>(
        &mut self,
        f: impl FnOnce(&cairo::Context) -> T,
    ) -> Result<T, SurfaceError> {
        let ctx = cairo::Context::new(&self.image).map_err(SurfaceError::Context)?;
        let out = f(&ctx);
        drop(ctx);
        self.image.flush();
        Ok(out)
    }

    /// Resets the whole buffer to the background color.
    pub fn clear(&mut self) -> Result<(), SurfaceError> {
        let bg = self.background;
        self.with_context(|ctx| {
            ctx.set_source_rgba(bg.r, bg.g, bg.b, bg.a);
            ctx.set_operator(cairo::Operator::Source);
            let _ = ctx.paint();
        })
    }

    /// Captures a copy of the current pixel contents.
    pub fn snapshot(&mut self) -> Result<Snapshot, SurfaceError> {
        self.image.flush();
        let width = self.image.width();
        let height = self.image.height();
        let data = self.image.data().map_err(SurfaceError::Access)?.to_vec();
        Ok(Snapshot {
            data,
            width,
            height,
        })
    }

    /// Overwrites the buffer with a previously captured snapshot.
    ///
    /// The snapshot must come from a surface of identical dimensions.
    pub fn restore(&mut self, snapshot: &Snapshot) -> Result<(), SurfaceError> {
        if snapshot.width != self.image.width() || snapshot.height != self.image.height() {
            return Err(SurfaceError::SnapshotMismatch {
                snapshot_width: snapshot.width,
                snapshot_height: snapshot.height,
                width: self.image.width(),
                height: self.image.height(),
            });
        }

        self.image.flush();
        let mut data = self.image.data().map_err(SurfaceError::Access)?;
        data.copy_from_slice(&snapshot.data);
        Ok(())
    }

    /// Reads back a single pixel as a straight (unpremultiplied) color.
    pub fn pixel(&mut self, x: i32, y: i32) -> Result<Color, SurfaceError> {
        if x < 0 || y < 0 || x >= self.image.width() || y >= self.image.height() {
            return Err(SurfaceError::OutOfBounds { x, y });
        }

        self.image.flush();
        let stride = self.image.stride() as usize;
        let data = self.image.data().map_err(SurfaceError::Access)?;
        let offset = y as usize * stride + x as usize * 4;
        let argb = u32::from_ne_bytes([
            data[offset],
            data[offset + 1],
            data[offset + 2],
            data[offset + 3],
        ]);
        let (a, r, g, b) = unpack_argb(argb);
        Ok(Color {
            r: r as f64 / 255.0,
            g: g as f64 / 255.0,
            b: b as f64 / 255.0,
            a: a as f64 / 255.0,
        })
    }

    /// Reads back the whole buffer as tightly packed 8-bit RGB rows.
    ///
    /// Used by the export encoders and by tests comparing full-buffer state.
    pub fn to_rgb(&mut self) -> Result<Vec<u8>, SurfaceError> {
        self.image.flush();
        let width = self.image.width() as usize;
        let height = self.image.height() as usize;
        let stride = self.image.stride() as usize;
        let data = self.image.data().map_err(SurfaceError::Access)?;

        let mut rgb = Vec::with_capacity(width * height * 3);
        for row in 0..height {
            let line = &data[row * stride..row * stride + width * 4];
            for px in line.chunks_exact(4) {
                let argb = u32::from_ne_bytes([px[0], px[1], px[2], px[3]]);
                let (_, r, g, b) = unpack_argb(argb);
                rgb.extend_from_slice(&[r, g, b]);
            }
        }
        Ok(rgb)
    }
}

/// Splits a native-endian ARGB32 pixel into straight (A, R, G, B) bytes.
///
/// Cairo stores premultiplied alpha, so the color channels are scaled back
/// up for any partially transparent pixel.
fn unpack_argb(argb: u32) -> (u8, u8, u8, u8) {
    let a = ((argb >> 24) & 0xff) as u32;
    let r = ((argb >> 16) & 0xff) as u32;
    let g = ((argb >> 8) & 0xff) as u32;
    let b = (argb & 0xff) as u32;

    if a == 0 {
        return (0, 0, 0, 0);
    }

    let unmul = |c: u32| ((c * 255 + a / 2) / a).min(255) as u8;
    (a as u8, unmul(r), unmul(g), unmul(b))
}
