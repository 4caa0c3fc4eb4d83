//! Font backends: text extents and coverage masks for glyph runs.

use std::{fmt, fs, path::Path};

use fontdue::{Font as FontdueFont, FontSettings, LineMetrics};

use crate::error::{Error, Result};

/// Extents of a glyph run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct TextMetrics {
    /// Advance width of the whole run.
    pub width: u32,
    /// Line height.
    pub height: u32,
    /// Distance from the top of the line box to the baseline.
    pub baseline: u32,
}

/// Rasterized coverage for a glyph run.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GlyphMask {
    /// Mask width in pixels.
    pub width: u32,
    /// Mask height in pixels.
    pub height: u32,
    /// Distance from the top of the mask to the baseline.
    pub baseline: u32,
    /// Row-major coverage, 0-255 per pixel.
    pub alpha: Vec<u8>,
}

impl GlyphMask {
    /// An empty mask. Painting it draws nothing.
    pub fn empty() -> Self {
        Self::default()
    }

    /// A transparent mask of the given size.
    fn blank(width: u32, height: u32, baseline: u32) -> Self {
        Self {
            width,
            height,
            baseline,
            alpha: vec![0; width as usize * height as usize],
        }
    }

    /// Is there nothing to paint?
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0 || self.alpha.iter().all(|a| *a == 0)
    }

    /// Max-composite coverage at `(x, y)`, ignoring out-of-range writes.
    fn stamp(&mut self, x: i32, y: i32, coverage: u8) {
        if x < 0 || y < 0 || x as u32 >= self.width || y as u32 >= self.height {
            return;
        }
        let i = y as usize * self.width as usize + x as usize;
        self.alpha[i] = self.alpha[i].max(coverage);
    }
}

/// Text measurement and rasterization, consumed by text-bearing widgets.
///
/// Backends report failure as zero metrics or an empty mask, never as an
/// error, so a missing glyph costs one invisible widget rather than a frame.
pub trait FontBackend {
    /// Extents of `text` at pixel size `size`.
    fn measure(&self, text: &str, size: u32) -> TextMetrics;

    /// Coverage mask for `text` at pixel size `size`.
    fn rasterize(&self, text: &str, size: u32) -> GlyphMask;
}

impl<F: FontBackend + ?Sized> FontBackend for Box<F> {
    fn measure(&self, text: &str, size: u32) -> TextMetrics {
        (**self).measure(text, size)
    }

    fn rasterize(&self, text: &str, size: u32) -> GlyphMask {
        (**self).rasterize(text, size)
    }
}

/// Characters that descend below the baseline in [`BlockFont`].
const DESCENDERS: &str = "gjpqy,;";

/// A built-in deterministic font. Every glyph advances `size / 2` pixels and
/// the line is `size` pixels tall, with the baseline at four fifths. Visible
/// characters are drawn as solid blocks from cap height to the baseline;
/// descenders extend to the bottom of the line.
#[derive(Debug, Clone, Copy, Default)]
pub struct BlockFont;

impl BlockFont {
    /// Pixel advance of one character.
    fn advance(size: u32) -> u32 {
        size / 2
    }

    /// Baseline offset within the line.
    fn baseline(size: u32) -> u32 {
        size * 4 / 5
    }
}

impl FontBackend for BlockFont {
    fn measure(&self, text: &str, size: u32) -> TextMetrics {
        let chars = text.chars().count() as u32;
        TextMetrics {
            width: Self::advance(size).saturating_mul(chars),
            height: size,
            baseline: Self::baseline(size),
        }
    }

    fn rasterize(&self, text: &str, size: u32) -> GlyphMask {
        let m = self.measure(text, size);
        if m.width == 0 || m.height == 0 {
            return GlyphMask::empty();
        }
        let mut mask = GlyphMask::blank(m.width, m.height, m.baseline);
        let advance = Self::advance(size) as i32;
        let cap = (size / 5) as i32;
        let inset = (advance / 6).max(1);
        for (i, ch) in text.chars().enumerate() {
            if ch.is_whitespace() || ch.is_control() {
                continue;
            }
            let bottom = if DESCENDERS.contains(ch) {
                m.height as i32
            } else {
                m.baseline as i32
            };
            let left = i as i32 * advance + inset;
            let right = (i as i32 + 1) * advance - inset;
            for y in cap..bottom {
                for x in left..right {
                    mask.stamp(x, y, 255);
                }
            }
        }
        mask
    }
}

/// A TrueType/OpenType font rasterized with fontdue.
#[derive(Clone)]
pub struct TtfFont {
    /// Parsed font data.
    font: FontdueFont,
}

impl fmt::Debug for TtfFont {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TtfFont").finish_non_exhaustive()
    }
}

impl TtfFont {
    /// Load a font from in-memory bytes.
    pub fn from_bytes(data: impl AsRef<[u8]>) -> Result<Self> {
        let font = FontdueFont::from_bytes(data.as_ref(), FontSettings::default())
            .map_err(|e| Error::Font(e.to_string()))?;
        Ok(Self { font })
    }

    /// Load a font file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let data = fs::read(path.as_ref()).map_err(|e| Error::Font(e.to_string()))?;
        Self::from_bytes(data)
    }

    /// Line metrics at `px`, falling back to a height-only estimate when the
    /// font carries no horizontal line data.
    fn line_metrics(&self, px: f32) -> LineMetrics {
        self.font.horizontal_line_metrics(px).unwrap_or_else(|| {
            let m = self.font.metrics('M', px);
            LineMetrics {
                ascent: m.height as f32,
                descent: 0.0,
                line_gap: 0.0,
                new_line_size: m.height as f32,
            }
        })
    }
}

impl FontBackend for TtfFont {
    fn measure(&self, text: &str, size: u32) -> TextMetrics {
        let px = size as f32;
        let line = self.line_metrics(px);
        let width: f32 = text
            .chars()
            .map(|c| self.font.metrics(c, px).advance_width)
            .sum();
        TextMetrics {
            width: width.ceil().max(0.0) as u32,
            height: (line.ascent - line.descent).ceil().max(0.0) as u32,
            baseline: line.ascent.ceil().max(0.0) as u32,
        }
    }

    fn rasterize(&self, text: &str, size: u32) -> GlyphMask {
        let m = self.measure(text, size);
        if m.width == 0 || m.height == 0 {
            return GlyphMask::empty();
        }
        let px = size as f32;
        let mut mask = GlyphMask::blank(m.width, m.height, m.baseline);
        let mut pen = 0.0f32;
        for c in text.chars() {
            let (metrics, bitmap) = self.font.rasterize(c, px);
            let left = pen.round() as i32 + metrics.xmin;
            let top = m.baseline as i32 - metrics.height as i32 - metrics.ymin;
            for row in 0..metrics.height {
                for col in 0..metrics.width {
                    let coverage = bitmap[row * metrics.width + col];
                    mask.stamp(left + col as i32, top + row as i32, coverage);
                }
            }
            pen += metrics.advance_width;
        }
        mask
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn block_metrics() {
        let m = BlockFont.measure("ABCgyp", 24);
        assert_eq!(
            m,
            TextMetrics {
                width: 72,
                height: 24,
                baseline: 19
            }
        );
        assert_eq!(BlockFont.measure("", 24).width, 0);
    }

    #[test]
    fn block_descenders() {
        let mask = BlockFont.rasterize("Ag", 20);
        assert_eq!((mask.width, mask.height, mask.baseline), (20, 20, 16));
        let at = |x: u32, y: u32| mask.alpha[(y * mask.width + x) as usize];
        // "A" stops at the baseline, "g" runs to the bottom.
        assert_eq!(at(5, 17), 0);
        assert_eq!(at(15, 17), 255);
        assert_eq!(at(5, 10), 255);
        assert!(BlockFont.rasterize("  ", 20).is_empty());
    }

    #[test]
    fn ttf_rejects_garbage() {
        assert!(matches!(
            TtfFont::from_bytes([0u8, 1, 2, 3]),
            Err(Error::Font(_))
        ));
        assert!(TtfFont::load("/nonexistent/font.ttf").is_err());
    }
}
