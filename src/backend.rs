//! The raster backend seam: pixel operations this crate plans for but never performs.

use crate::geometry::{Offset, Size};
use crate::thumbnail::ThumbnailMode;

/// Canvas background color for thumbnails and rotation fill.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum CanvasColor {
    /// Transparent black `[0, 0, 0, 0]`.
    Transparent,
    /// sRGB color with alpha (8-bit per channel).
    Srgb { r: u8, g: u8, b: u8, a: u8 },
}

impl Default for CanvasColor {
    fn default() -> Self {
        Self::white()
    }
}

impl CanvasColor {
    /// White, fully opaque.
    pub const fn white() -> Self {
        Self::Srgb {
            r: 255,
            g: 255,
            b: 255,
            a: 255,
        }
    }

    /// Black, fully opaque.
    pub const fn black() -> Self {
        Self::Srgb {
            r: 0,
            g: 0,
            b: 0,
            a: 255,
        }
    }

    /// Parse `rgb`, `rrggbb`, or `rrggbbaa` hex, with or without a leading `#`.
    ///
    /// ```
    /// use zenfit::CanvasColor;
    ///
    /// assert_eq!(CanvasColor::from_hex("ffffff"), Some(CanvasColor::white()));
    /// assert_eq!(CanvasColor::from_hex("#000"), Some(CanvasColor::black()));
    /// assert_eq!(CanvasColor::from_hex("fffff"), None);
    /// ```
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.strip_prefix('#').unwrap_or(hex);
        if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return None;
        }
        let byte = |i: usize| u8::from_str_radix(hex.get(i..i + 2)?, 16).ok();
        let nibble = |i: usize| {
            let v = u8::from_str_radix(hex.get(i..i + 1)?, 16).ok()?;
            Some(v * 17)
        };
        match hex.len() {
            3 => Some(Self::Srgb {
                r: nibble(0)?,
                g: nibble(1)?,
                b: nibble(2)?,
                a: 255,
            }),
            6 => Some(Self::Srgb {
                r: byte(0)?,
                g: byte(2)?,
                b: byte(4)?,
                a: 255,
            }),
            8 => Some(Self::Srgb {
                r: byte(0)?,
                g: byte(2)?,
                b: byte(4)?,
                a: byte(6)?,
            }),
            _ => None,
        }
    }

    /// Parse `hex` like [`from_hex`](Self::from_hex) and apply an opacity
    /// percentage. `None` keeps the color opaque (or the alpha of an
    /// `rrggbbaa` value); percentages above 100 are rejected.
    ///
    /// ```
    /// use zenfit::CanvasColor;
    ///
    /// assert_eq!(
    ///     CanvasColor::from_hex_alpha("ffffff", Some(50)),
    ///     Some(CanvasColor::white().with_alpha(128))
    /// );
    /// assert_eq!(CanvasColor::from_hex_alpha("ffffff", None), Some(CanvasColor::white()));
    /// assert_eq!(CanvasColor::from_hex_alpha("ffffff", Some(101)), None);
    /// ```
    pub fn from_hex_alpha(hex: &str, opacity_percent: Option<u8>) -> Option<Self> {
        let color = Self::from_hex(hex)?;
        match opacity_percent {
            None => Some(color),
            Some(p) if p <= 100 => Some(color.with_alpha(percent_to_alpha(p))),
            Some(_) => None,
        }
    }

    /// Same color with alpha replaced. Transparent stays transparent.
    pub fn with_alpha(self, a: u8) -> Self {
        match self {
            Self::Transparent => Self::Transparent,
            Self::Srgb { r, g, b, .. } => Self::Srgb { r, g, b, a },
        }
    }
}

/// `0..=100` percent to `0..=255`, rounded to nearest.
fn percent_to_alpha(percent: u8) -> u8 {
    ((u16::from(percent) * 255 + 50) / 100) as u8
}

/// Pixel operations supplied by the caller.
///
/// Implementations decode, encode, and move pixels; the planner only tells
/// them where. Offsets passed to `crop` and `paste` come from a
/// [`LayoutPlan`](crate::LayoutPlan). Thumbnail paste offsets are always
/// non-negative; watermark paste offsets can be negative when the watermark
/// still overflows the base, and the backend clips.
pub trait RasterBackend {
    /// Decoded image handle.
    type Image;
    /// Backend failure (I/O, codec, allocation).
    type Error;

    /// Open the image identified by `source`.
    fn open(&self, source: &str) -> Result<Self::Image, Self::Error>;

    /// Current dimensions of `image`.
    fn size(&self, image: &Self::Image) -> Size;

    /// Keep the `size` region starting at `offset`.
    fn crop(&self, image: Self::Image, offset: Offset, size: Size)
    -> Result<Self::Image, Self::Error>;

    /// Resample to exactly `size`.
    fn resize(&self, image: Self::Image, size: Size) -> Result<Self::Image, Self::Error>;

    /// Rotate clockwise by `degrees`, filling uncovered corners with `background`.
    fn rotate(
        &self,
        image: Self::Image,
        degrees: f64,
        background: CanvasColor,
    ) -> Result<Self::Image, Self::Error>;

    /// Produce a thumbnail of `image` bounded by `bounds`.
    ///
    /// The result may differ slightly from [`ThumbnailMode::fit`]; the planner
    /// measures it with [`size`](Self::size) before compositing.
    fn thumbnail(
        &self,
        image: &Self::Image,
        bounds: Size,
        mode: ThumbnailMode,
    ) -> Result<Self::Image, Self::Error>;

    /// New image of `size` filled with `background`.
    fn create_canvas(&self, size: Size, background: CanvasColor)
    -> Result<Self::Image, Self::Error>;

    /// Draw `overlay` onto `base` with its top-left corner at `offset`.
    fn paste(
        &self,
        base: Self::Image,
        overlay: &Self::Image,
        offset: Offset,
    ) -> Result<Self::Image, Self::Error>;
}
