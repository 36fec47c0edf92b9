//! Per-operation layout planning.
//!
//! Each function composes anchor resolution, dimension planning, and fit
//! gating into a [`LayoutPlan`] the caller hands to a raster backend. Nothing
//! here touches pixels or keeps state between calls.

use crate::anchor::{self, Anchor};
use crate::dimension;
use crate::fit::FitMode;
use crate::geometry::{LayoutError, Offset, Size};
use crate::rotation;
use crate::thumbnail::{ThumbnailFit, ThumbnailMode};

/// Geometry for one backend operation.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct LayoutPlan {
    /// Output box: crop region size, resize target, canvas, or overlay size.
    pub target_size: Size,
    /// Top-left placement. `(0, 0)` for whole-image operations.
    pub offset: Offset,
    /// False when the operation should be skipped and the image left as is.
    pub should_apply: bool,
}

/// Watermark geometry: an optional shrink of the watermark, then its placement.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct WatermarkPlan {
    /// Resize of the watermark image, present when it exceeded the base.
    /// Execute only if `should_apply`.
    pub resize: Option<LayoutPlan>,
    /// Effective watermark size and its offset within the base image.
    pub overlay: LayoutPlan,
}

/// Thumbnail geometry derived from [`ThumbnailMode::fit`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct ThumbnailPlan {
    /// How the backend turns the source into thumbnail content.
    pub fit: ThumbnailFit,
    /// Canvas of the requested box, and where the content is pasted on it.
    pub canvas: LayoutPlan,
}

/// Resize request: requested dimensions plus aspect and fit policy.
///
/// ```
/// use zenfit::{FitMode, ResizeRequest, Size};
///
/// let plan = ResizeRequest::width_only(50)
///     .fit(FitMode::ShrinkOnly)
///     .plan(Size::new(200, 100).unwrap())
///     .unwrap();
/// assert_eq!(plan.target_size, Size::new(50, 25).unwrap());
/// assert!(plan.should_apply);
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct ResizeRequest {
    pub width: Option<u32>,
    pub height: Option<u32>,
    pub preserve_aspect: bool,
    pub fit: FitMode,
}

impl ResizeRequest {
    /// Request both dimensions. Aspect preservation is on, fit is `Always`.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width: Some(width),
            height: Some(height),
            preserve_aspect: true,
            fit: FitMode::Always,
        }
    }

    /// Request only a width; height follows the source aspect ratio.
    pub fn width_only(width: u32) -> Self {
        Self {
            width: Some(width),
            height: None,
            preserve_aspect: true,
            fit: FitMode::Always,
        }
    }

    /// Request only a height; width follows the source aspect ratio.
    pub fn height_only(height: u32) -> Self {
        Self {
            width: None,
            height: Some(height),
            preserve_aspect: true,
            fit: FitMode::Always,
        }
    }

    /// Set aspect preservation for two-dimension requests.
    pub fn preserve_aspect(mut self, preserve: bool) -> Self {
        self.preserve_aspect = preserve;
        self
    }

    /// Set the fit policy.
    pub fn fit(mut self, fit: FitMode) -> Self {
        self.fit = fit;
        self
    }

    /// Plan this resize for an image of size `original`.
    pub fn plan(&self, original: Size) -> Result<LayoutPlan, LayoutError> {
        resize(
            original,
            self.width,
            self.height,
            self.preserve_aspect,
            self.fit,
        )
    }
}

/// Plan a crop of `target` out of `source`, positioned by `anchor`.
///
/// Crops always apply. The target must fit inside the source, and an explicit
/// anchor must start inside it.
pub fn crop(source: Size, target: Size, anchor: Anchor) -> Result<LayoutPlan, LayoutError> {
    if source.is_exceeded_by(target) {
        return Err(LayoutError::OutOfBounds);
    }
    let offset = anchor::resolve(source, target, anchor);
    let inside = offset.is_non_negative()
        && offset.x < i64::from(source.width())
        && offset.y < i64::from(source.height());
    if !inside {
        return Err(LayoutError::OutOfBounds);
    }
    tracing::debug!(%source, %target, %anchor, x = offset.x, y = offset.y, "crop planned");
    Ok(LayoutPlan {
        target_size: target,
        offset,
        should_apply: true,
    })
}

/// Plan a resize of `original` to the requested dimensions, gated by `fit`.
///
/// See [`dimension::plan`] for how missing or conflicting dimensions resolve.
/// When the gate closes, `should_apply` is false and `target_size` still
/// reports what the resize would have produced.
pub fn resize(
    original: Size,
    width: Option<u32>,
    height: Option<u32>,
    preserve_aspect: bool,
    fit: FitMode,
) -> Result<LayoutPlan, LayoutError> {
    let target = dimension::plan(original, width, height, preserve_aspect)?;
    let should_apply = fit.should_resize(original, target);
    tracing::debug!(%original, %target, %fit, should_apply, "resize planned");
    Ok(LayoutPlan {
        target_size: target,
        offset: Offset::ORIGIN,
        should_apply,
    })
}

/// Plan pasting thumbnail `content` onto a canvas of the requested `bounds`.
///
/// `content` is the size the backend actually produced. Both offset components
/// are made non-negative before use: backends may return content a pixel or so
/// larger than `bounds` on one axis, and the paste must still start on the
/// canvas. Backends receiving this plan can rely on `offset >= (0, 0)`.
pub fn thumbnail(bounds: Size, content: Size, anchor: Anchor) -> LayoutPlan {
    let offset = anchor::resolve(bounds, content, anchor).abs();
    tracing::debug!(%bounds, %content, %anchor, x = offset.x, y = offset.y, "thumbnail planned");
    LayoutPlan {
        target_size: bounds,
        offset,
        should_apply: true,
    }
}

/// Plan a thumbnail when no backend-measured size is available, using
/// [`ThumbnailMode::fit`] to predict the content size.
pub fn thumbnail_for(
    source: Size,
    bounds: Size,
    mode: ThumbnailMode,
    anchor: Anchor,
) -> ThumbnailPlan {
    let fit = mode.fit(source, bounds);
    ThumbnailPlan {
        fit,
        canvas: thumbnail(bounds, fit.output, anchor),
    }
}

/// Plan overlaying `watermark` on `base`, positioned by `anchor`.
///
/// A watermark larger than the base on either axis first gets a shrink-only
/// resize request of `(base width, watermark height)` with aspect
/// preservation. The overlay uses the shrunk size when that resize applies.
/// The offset is used as-is, so a watermark that still overflows the base
/// (a tall watermark on a short base keeps its size) resolves to a negative
/// offset on that axis.
pub fn watermark(base: Size, watermark: Size, anchor: Anchor) -> Result<WatermarkPlan, LayoutError> {
    let resize = if base.is_exceeded_by(watermark) {
        Some(
            ResizeRequest::new(base.width(), watermark.height())
                .fit(FitMode::ShrinkOnly)
                .plan(watermark)?,
        )
    } else {
        None
    };

    let effective = match resize {
        Some(plan) if plan.should_apply => plan.target_size,
        _ => watermark,
    };
    let offset = anchor::resolve(base, effective, anchor);
    tracing::debug!(%base, %watermark, %effective, %anchor, x = offset.x, y = offset.y, "watermark planned");
    Ok(WatermarkPlan {
        resize,
        overlay: LayoutPlan {
            target_size: effective,
            offset,
            should_apply: true,
        },
    })
}

/// Plan rotating an image of `size` by `degrees` clockwise.
///
/// `target_size` is the canvas holding the rotated image. Full turns skip.
pub fn rotate(size: Size, degrees: f64) -> Result<LayoutPlan, LayoutError> {
    let target = rotation::bounds(size, degrees)?;
    let should_apply = rotation::normalize(degrees)? != 0.0;
    tracing::debug!(%size, %target, degrees, should_apply, "rotate planned");
    Ok(LayoutPlan {
        target_size: target,
        offset: Offset::ORIGIN,
        should_apply,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn size(w: u32, h: u32) -> Size {
        Size::new(w, h).unwrap()
    }

    // ── crop ────────────────────────────────────────────────────────────

    #[test]
    fn crop_center() {
        let p = crop(size(100, 50), size(40, 20), Anchor::Center).unwrap();
        assert_eq!(p.target_size, size(40, 20));
        assert_eq!(p.offset, Offset::new(30, 15));
        assert!(p.should_apply);
    }

    #[test]
    fn crop_explicit_default_origin() {
        let p = crop(size(100, 50), size(40, 20), Anchor::at(0, 0)).unwrap();
        assert_eq!(p.offset, Offset::ORIGIN);
    }

    #[test]
    fn crop_larger_than_source_rejected() {
        assert_eq!(
            crop(size(100, 50), size(101, 20), Anchor::Center),
            Err(LayoutError::OutOfBounds)
        );
    }

    #[test]
    fn crop_explicit_start_outside_rejected() {
        for anchor in [Anchor::at(-1, 0), Anchor::at(100, 0), Anchor::at(0, 50)] {
            assert_eq!(
                crop(size(100, 50), size(10, 10), anchor),
                Err(LayoutError::OutOfBounds),
                "{anchor}"
            );
        }
    }

    // ── resize ──────────────────────────────────────────────────────────

    #[test]
    fn resize_grow_only_skips_shrink() {
        let p = resize(size(100, 100), Some(50), Some(50), true, FitMode::GrowOnly).unwrap();
        assert!(!p.should_apply);
        assert_eq!(p.target_size, size(50, 50));
        assert_eq!(p.offset, Offset::ORIGIN);
    }

    #[test]
    fn resize_shrink_only_applies_shrink() {
        let p = resize(size(100, 100), Some(50), None, true, FitMode::ShrinkOnly).unwrap();
        assert!(p.should_apply);
        assert_eq!(p.target_size, size(50, 50));
    }

    #[test]
    fn resize_propagates_missing_dimension() {
        assert_eq!(
            resize(size(10, 10), None, None, true, FitMode::Always),
            Err(LayoutError::MissingDimension)
        );
    }

    #[test]
    fn resize_request_builder_matches_free_function() {
        let original = size(400, 300);
        let req = ResizeRequest::new(200, 10)
            .preserve_aspect(false)
            .fit(FitMode::GrowOnly);
        assert_eq!(
            req.plan(original),
            resize(original, Some(200), Some(10), false, FitMode::GrowOnly)
        );
        assert_eq!(
            ResizeRequest::height_only(150).plan(original).unwrap().target_size,
            size(200, 150)
        );
    }

    // ── thumbnail ───────────────────────────────────────────────────────

    #[test]
    fn thumbnail_centers_inset_content() {
        let p = thumbnail(size(200, 200), size(200, 100), Anchor::Center);
        assert_eq!(p.target_size, size(200, 200));
        assert_eq!(p.offset, Offset::new(0, 50));
    }

    #[test]
    fn thumbnail_oversized_content_offset_made_positive() {
        // backend returned 202 wide for a 200 box
        let p = thumbnail(size(200, 100), size(202, 100), Anchor::Center);
        assert_eq!(p.offset, Offset::new(1, 0));
        let p = thumbnail(size(200, 100), size(203, 100), Anchor::BottomRight);
        assert_eq!(p.offset, Offset::new(3, 0));
    }

    #[test]
    fn thumbnail_extreme_explicit_anchor_stays_non_negative() {
        let p = thumbnail(size(10, 10), size(10, 10), Anchor::at(i64::MIN, -4));
        assert_eq!(p.offset, Offset::new(i64::MAX, 4));
        assert!(p.offset.is_non_negative());
    }

    #[test]
    fn thumbnail_for_uses_fit_output() {
        let plan = thumbnail_for(
            size(1000, 500),
            size(200, 200),
            ThumbnailMode::Inset,
            Anchor::CenterBottom,
        );
        assert_eq!(plan.fit.output, size(200, 100));
        assert_eq!(plan.canvas.offset, Offset::new(0, 100));
    }

    // ── watermark ───────────────────────────────────────────────────────

    #[test]
    fn watermark_fitting_is_not_resized() {
        let p = watermark(size(800, 600), size(100, 50), Anchor::BottomRight).unwrap();
        assert_eq!(p.resize, None);
        assert_eq!(p.overlay.target_size, size(100, 50));
        assert_eq!(p.overlay.offset, Offset::new(700, 550));
    }

    #[test]
    fn wide_watermark_shrinks_to_base_width() {
        let p = watermark(size(100, 100), size(200, 50), Anchor::Center).unwrap();
        let resize = p.resize.unwrap();
        assert!(resize.should_apply);
        assert_eq!(resize.target_size, size(100, 25));
        assert_eq!(p.overlay.target_size, size(100, 25));
        assert_eq!(p.overlay.offset, Offset::new(0, 37));
    }

    #[test]
    fn tall_watermark_keeps_size_and_overflows() {
        let p = watermark(size(100, 100), size(50, 200), Anchor::Center).unwrap();
        assert!(!p.resize.unwrap().should_apply);
        assert_eq!(p.overlay.target_size, size(50, 200));
        assert_eq!(p.overlay.offset, Offset::new(25, -50));
    }

    // ── rotate ──────────────────────────────────────────────────────────

    #[test]
    fn rotate_quarter_turn() {
        let p = rotate(size(640, 480), 90.0).unwrap();
        assert!(p.should_apply);
        assert_eq!(p.target_size, size(480, 640));
    }

    #[test]
    fn rotate_full_turn_skips() {
        let p = rotate(size(640, 480), -360.0).unwrap();
        assert!(!p.should_apply);
        assert_eq!(p.target_size, size(640, 480));
    }

    #[test]
    fn rotate_rejects_nan() {
        assert_eq!(rotate(size(1, 1), f64::NAN), Err(LayoutError::InvalidAngle));
    }
}
