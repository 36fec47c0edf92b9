//! Target dimension planning: fill in a missing axis, reconcile aspect ratio.

use crate::geometry::{LayoutError, Size};

/// Normalize a requested width/height pair against the `original` size.
///
/// - Only one axis requested: the other is derived from the original aspect
///   ratio.
/// - Both requested with `preserve_aspect` on a non-square original: the
///   longer original axis keeps its requested value and the other axis is
///   re-derived from it. Square originals keep both requested values.
/// - Both requested without `preserve_aspect`: used as given.
///
/// Derived values round up, so the box is never smaller than the exact ratio.
///
/// ```
/// use zenfit::{LayoutError, Size, dimension};
///
/// let original = Size::new(200, 100).unwrap();
/// assert_eq!(dimension::plan(original, Some(50), None, true), Size::new(50, 25));
/// assert_eq!(
///     dimension::plan(original, None, None, true),
///     Err(LayoutError::MissingDimension)
/// );
/// ```
pub fn plan(
    original: Size,
    width: Option<u32>,
    height: Option<u32>,
    preserve_aspect: bool,
) -> Result<Size, LayoutError> {
    let (ow, oh) = (original.width(), original.height());
    let (w, h) = match (width, height) {
        (None, None) => return Err(LayoutError::MissingDimension),
        (Some(0), _) | (_, Some(0)) => return Err(LayoutError::InvalidDimension),
        (Some(w), None) => (w, scale_ceil(w, oh, ow)?),
        (None, Some(h)) => (scale_ceil(h, ow, oh)?, h),
        (Some(w), Some(h)) if preserve_aspect && !original.is_square() => {
            if ow > oh {
                (w, scale_ceil(w, oh, ow)?)
            } else {
                (scale_ceil(h, ow, oh)?, h)
            }
        }
        (Some(w), Some(h)) => (w, h),
    };
    Size::new(w, h)
}

/// `ceil(basis * num / den)` in exact integer arithmetic.
fn scale_ceil(basis: u32, num: u32, den: u32) -> Result<u32, LayoutError> {
    let v = (u64::from(basis) * u64::from(num)).div_ceil(u64::from(den));
    u32::try_from(v).map_err(|_| LayoutError::InvalidDimension)
}
