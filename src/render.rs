//! Image rendering.
//!
//! Turns a module grid into scaled, hard-edged PNG bytes. Pure and
//! deterministic: the same grid and config always produce byte-identical
//! output.

use std::io::Cursor;

use image::{Rgb, RgbImage};

use crate::error::{BotError, Result};
use crate::qr::ModuleGrid;

const DARK: Rgb<u8> = Rgb([0x00, 0x00, 0x00]);
const LIGHT: Rgb<u8> = Rgb([0xFF, 0xFF, 0xFF]);

/// Output encodings the renderer can produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageFormat {
    Png,
}

/// How a grid is rasterized: pixels per module, light border in modules,
/// and the byte encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderConfig {
    pub scale: u32,
    pub border: u32,
    pub format: ImageFormat,
}

impl Default for RenderConfig {
    /// The fixed production configuration used for every bot reply.
    fn default() -> Self {
        Self {
            scale: 4,
            border: 1,
            format: ImageFormat::Png,
        }
    }
}

impl RenderConfig {
    /// Output side length in pixels, or `None` if it leaves the u32
    /// pixel-dimension domain.
    fn side_px(&self, grid_size: usize) -> Option<u32> {
        let modules = (grid_size as u64).checked_add(2 * u64::from(self.border))?;
        let px = modules.checked_mul(u64::from(self.scale))?;
        u32::try_from(px).ok()
    }
}

/// Renders `grid` to encoded image bytes.
///
/// Every output pixel maps back to a source module via integer division;
/// pixels outside the grid, including the whole border ring, are light.
pub fn render(grid: &ModuleGrid, config: &RenderConfig) -> Result<Vec<u8>> {
    if config.scale == 0 {
        return Err(BotError::InvalidDimension("scale must be positive".into()));
    }
    let side = config.side_px(grid.size()).ok_or_else(|| {
        BotError::InvalidDimension(format!(
            "({} + 2*{}) * {} exceeds the pixel dimension limit",
            grid.size(),
            config.border,
            config.scale
        ))
    })?;

    let scale = i64::from(config.scale);
    let border = i64::from(config.border);
    let img = RgbImage::from_fn(side, side, |x, y| {
        let mx = i64::from(x) / scale - border;
        let my = i64::from(y) / scale - border;
        if grid.get(mx, my) {
            DARK
        } else {
            LIGHT
        }
    });

    let mut bytes = Vec::new();
    match config.format {
        ImageFormat::Png => img.write_to(&mut Cursor::new(&mut bytes), image::ImageFormat::Png)?,
    }
    Ok(bytes)
}
