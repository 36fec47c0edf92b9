//! Reference model of backend thumbnail sizing.
//!
//! Backends decide the real thumbnail size; [`ThumbnailMode::fit`] is what a
//! conforming backend produces and is used to plan thumbnails when no
//! measured size is at hand. Sources already inside the box are never
//! upscaled.

use num_traits::Float;

use crate::geometry::{Rect, Size};

/// How a thumbnail fills its bounding box.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum ThumbnailMode {
    /// Scale to fit inside the box. Output may be smaller on one axis.
    Inset,
    /// Scale to cover the box, then center-crop the overflow.
    #[default]
    Outbound,
}

/// Geometry of a thumbnail operation, in execution order.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct ThumbnailFit {
    /// Scale the source to this size first. `None` = no scaling.
    pub resize_to: Option<Size>,
    /// Then crop this region of the (scaled) image. `None` = no crop.
    pub crop: Option<Rect>,
    /// Final thumbnail dimensions.
    pub output: Size,
}

impl ThumbnailMode {
    /// Compute the thumbnail geometry for `source` within `bounds`.
    ///
    /// ```
    /// use zenfit::{Size, ThumbnailMode};
    ///
    /// let source = Size::new(400, 200).unwrap();
    /// let bounds = Size::new(100, 100).unwrap();
    /// assert_eq!(ThumbnailMode::Inset.fit(source, bounds).output, Size::new(100, 50).unwrap());
    /// assert_eq!(ThumbnailMode::Outbound.fit(source, bounds).output, bounds);
    /// ```
    pub fn fit(self, source: Size, bounds: Size) -> ThumbnailFit {
        if bounds.contains(source) {
            return ThumbnailFit {
                resize_to: None,
                crop: None,
                output: source,
            };
        }

        let ratio_w = f64::from(bounds.width()) / f64::from(source.width());
        let ratio_h = f64::from(bounds.height()) / f64::from(source.height());

        match self {
            Self::Inset => {
                let scaled = scale(source, ratio_w.min(ratio_h));
                ThumbnailFit {
                    resize_to: Some(scaled),
                    crop: None,
                    output: scaled,
                }
            }
            Self::Outbound if source.contains(bounds) => {
                let scaled = scale(source, ratio_w.max(ratio_h));
                ThumbnailFit {
                    resize_to: (scaled != source).then_some(scaled),
                    crop: centered_crop(scaled, bounds),
                    output: bounds,
                }
            }
            Self::Outbound => {
                // Source is smaller than the box on one axis: crop only.
                let clipped = min_size(source, bounds);
                ThumbnailFit {
                    resize_to: None,
                    crop: centered_crop(source, clipped),
                    output: clipped,
                }
            }
        }
    }
}

fn scale(size: Size, ratio: f64) -> Size {
    let w = Float::round(f64::from(size.width()) * ratio).max(1.0) as u32;
    let h = Float::round(f64::from(size.height()) * ratio).max(1.0) as u32;
    Size::new(w, h).unwrap_or(size)
}

fn min_size(a: Size, b: Size) -> Size {
    Size::new(a.width().min(b.width()), a.height().min(b.height())).unwrap_or(a)
}

/// Center `region` inside `image`, half-pixels rounded toward the far edge.
fn centered_crop(image: Size, region: Size) -> Option<Rect> {
    let x = image.width().saturating_sub(region.width()).div_ceil(2);
    let y = image.height().saturating_sub(region.height()).div_ceil(2);
    let rect = Rect::new(x, y, region.width(), region.height());
    (!rect.is_full(image)).then_some(rect)
}
