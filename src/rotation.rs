//! Bounding box of a rotated image.

use num_traits::Float;

use crate::geometry::{LayoutError, Size};

/// Slack absorbed before rounding up, so `cos(60°) = 0.5000000000000001`
/// does not grow the box by a pixel.
const TRIG_TOLERANCE: f64 = 1e-9;

/// Normalize `degrees` into `[0, 360)`.
pub fn normalize(degrees: f64) -> Result<f64, LayoutError> {
    if !degrees.is_finite() {
        return Err(LayoutError::InvalidAngle);
    }
    let mut r = degrees % 360.0;
    if r < 0.0 {
        r += 360.0;
    }
    if r >= 360.0 {
        r -= 360.0;
    }
    Ok(r)
}

/// Size of the canvas that holds `size` rotated by `degrees` (clockwise).
///
/// Quarter turns are exact. Other angles take the axis-aligned bounding box of
/// the rotated rectangle, rounded up.
///
/// ```
/// use zenfit::{Size, rotation};
///
/// let size = Size::new(400, 300).unwrap();
/// assert_eq!(rotation::bounds(size, 90.0), Size::new(300, 400));
/// assert_eq!(rotation::bounds(size, -180.0), Ok(size));
/// ```
pub fn bounds(size: Size, degrees: f64) -> Result<Size, LayoutError> {
    let r = normalize(degrees)?;
    if r == 0.0 || r == 180.0 {
        return Ok(size);
    }
    if r == 90.0 || r == 270.0 {
        return Ok(size.transposed());
    }

    let theta = r.to_radians();
    let (sin, cos) = (Float::abs(Float::sin(theta)), Float::abs(Float::cos(theta)));
    let (w, h) = (f64::from(size.width()), f64::from(size.height()));
    let bw = extent(w * cos + h * sin)?;
    let bh = extent(w * sin + h * cos)?;
    Size::new(bw, bh)
}

fn extent(v: f64) -> Result<u32, LayoutError> {
    let v = Float::ceil(v - TRIG_TOLERANCE).max(1.0);
    if v > f64::from(u32::MAX) {
        return Err(LayoutError::InvalidDimension);
    }
    Ok(v as u32)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn size(w: u32, h: u32) -> Size {
        Size::new(w, h).unwrap()
    }

    #[test]
    fn quarter_turns_are_exact() {
        let s = size(640, 480);
        assert_eq!(bounds(s, 0.0), Ok(s));
        assert_eq!(bounds(s, 90.0), Ok(size(480, 640)));
        assert_eq!(bounds(s, 180.0), Ok(s));
        assert_eq!(bounds(s, 270.0), Ok(size(480, 640)));
        assert_eq!(bounds(s, -90.0), Ok(size(480, 640)));
        assert_eq!(bounds(s, 720.0), Ok(s));
    }

    #[test]
    fn forty_five_degrees() {
        // 100 * √2 / 2 * 2 = 141.42
        assert_eq!(bounds(size(100, 100), 45.0), Ok(size(142, 142)));
    }

    #[test]
    fn sixty_degrees() {
        // 200 * 0.5 + 100 * 0.866 = 186.6; 200 * 0.866 + 100 * 0.5 = 223.2
        assert_eq!(bounds(size(200, 100), 60.0), Ok(size(187, 224)));
    }

    #[test]
    fn non_finite_rejected() {
        assert_eq!(bounds(size(1, 1), f64::NAN), Err(LayoutError::InvalidAngle));
        assert_eq!(
            bounds(size(1, 1), f64::INFINITY),
            Err(LayoutError::InvalidAngle)
        );
    }

    #[test]
    fn normalize_wraps() {
        assert_eq!(normalize(-30.0), Ok(330.0));
        assert_eq!(normalize(390.0), Ok(30.0));
        assert_eq!(normalize(-360.0), Ok(0.0));
    }
}
