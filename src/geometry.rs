//! Size, offset, and rectangle primitives plus the layout error type.

/// Width × height dimensions in pixels. Both axes are always at least 1.
///
/// ```
/// use zenfit::{LayoutError, Size};
///
/// let size = Size::new(640, 480).unwrap();
/// assert_eq!((size.width(), size.height()), (640, 480));
/// assert_eq!(Size::new(0, 480), Err(LayoutError::InvalidDimension));
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Size {
    width: u32,
    height: u32,
}

impl Size {
    /// Create a new size. Zero on either axis is rejected.
    pub const fn new(width: u32, height: u32) -> Result<Self, LayoutError> {
        if width == 0 || height == 0 {
            return Err(LayoutError::InvalidDimension);
        }
        Ok(Self { width, height })
    }

    /// Width in pixels.
    pub const fn width(self) -> u32 {
        self.width
    }

    /// Height in pixels.
    pub const fn height(self) -> u32 {
        self.height
    }

    /// Whether `other` fits inside this size on both axes.
    pub fn contains(self, other: Size) -> bool {
        other.width <= self.width && other.height <= self.height
    }

    /// Whether `other` is larger than this size on at least one axis.
    pub fn is_exceeded_by(self, other: Size) -> bool {
        other.width > self.width || other.height > self.height
    }

    /// Whether both axes are equal.
    pub fn is_square(self) -> bool {
        self.width == self.height
    }

    /// Same size with axes swapped.
    pub fn transposed(self) -> Self {
        Self {
            width: self.height,
            height: self.width,
        }
    }
}

/// Signed dimensions arriving from an untyped boundary (query values, scripts).
impl TryFrom<(i64, i64)> for Size {
    type Error = LayoutError;

    fn try_from((width, height): (i64, i64)) -> Result<Self, Self::Error> {
        let width = u32::try_from(width).map_err(|_| LayoutError::InvalidDimension)?;
        let height = u32::try_from(height).map_err(|_| LayoutError::InvalidDimension)?;
        Self::new(width, height)
    }
}

impl core::fmt::Display for Size {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// Top-left placement in pixels, relative to a container's origin.
///
/// Signed: content larger than its container resolves to negative offsets,
/// and explicit anchors pass through whatever the caller supplied.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Offset {
    pub x: i64,
    pub y: i64,
}

impl Offset {
    /// The container origin.
    pub const ORIGIN: Self = Self { x: 0, y: 0 };

    /// Create a new offset.
    pub const fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }

    /// Both components made non-negative. `i64::MIN` saturates to `i64::MAX`.
    pub fn abs(self) -> Self {
        Self {
            x: self.x.saturating_abs(),
            y: self.y.saturating_abs(),
        }
    }

    /// Whether both components are `>= 0`.
    pub fn is_non_negative(self) -> bool {
        self.x >= 0 && self.y >= 0
    }
}

impl From<(i64, i64)> for Offset {
    fn from((x, y): (i64, i64)) -> Self {
        Self { x, y }
    }
}

/// Axis-aligned rectangle in pixel coordinates.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Rect {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl Rect {
    /// Create a new rect.
    pub const fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Whether this rect covers the whole of `size` (no actual crop).
    pub fn is_full(&self, size: Size) -> bool {
        self.x == 0 && self.y == 0 && self.width == size.width && self.height == size.height
    }
}

/// Layout computation error.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum LayoutError {
    /// Anchor token not recognized, or an explicit offset without exactly two components.
    InvalidAnchor,
    /// Fit mode outside grow-only / shrink-only / always.
    InvalidFitMode,
    /// Neither width nor height was requested.
    MissingDimension,
    /// A supplied or derived width or height is zero, negative, or overflows `u32`.
    InvalidDimension,
    /// Crop region does not lie inside the source image.
    OutOfBounds,
    /// Rotation angle is NaN or infinite.
    InvalidAngle,
}

impl core::fmt::Display for LayoutError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::InvalidAnchor => {
                f.write_str("unsupported anchor: expected one of the 13 positions or an (x, y) pair")
            }
            Self::InvalidFitMode => {
                f.write_str("unsupported fit mode: expected grow-only, shrink-only, or always")
            }
            Self::MissingDimension => f.write_str("at least one of width or height is required"),
            Self::InvalidDimension => f.write_str("width and height must be positive"),
            Self::OutOfBounds => f.write_str("crop region exceeds the source image"),
            Self::InvalidAngle => f.write_str("rotation angle must be finite"),
        }
    }
}

impl core::error::Error for LayoutError {}
