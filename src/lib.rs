//! Layout geometry for crop, resize, thumbnail, watermark, and rotate operations.
//!
//! Pure geometry: anchors become offsets, requested dimensions become target
//! sizes, fit policies decide whether a resize runs at all. Pixel work is left
//! to a [`RasterBackend`] the caller supplies. `no_std` compatible.
//!
//! # Modules
//!
//! - [`anchor`]: 13 symbolic anchors plus explicit offsets, resolved to pixel offsets
//! - [`fit`]: grow-only / shrink-only / always resize gating
//! - [`dimension`]: missing-axis derivation and aspect reconciliation
//! - [`plan`]: per-operation [`LayoutPlan`]s
//! - [`thumbnail`]: inset / outbound thumbnail sizing
//! - [`rotation`]: rotated bounding boxes
//! - [`editor`]: drives a [`RasterBackend`] with computed plans
//!
//! # Example
//!
//! ```
//! use zenfit::{Anchor, FitMode, Offset, Size, plan};
//!
//! let photo = Size::new(1200, 800).unwrap();
//!
//! let crop = plan::crop(photo, Size::new(400, 400).unwrap(), Anchor::CenterTop).unwrap();
//! assert_eq!(crop.offset, Offset::new(400, 0));
//!
//! let resize = plan::resize(photo, Some(600), None, true, FitMode::GrowOnly).unwrap();
//! assert_eq!(resize.target_size, Size::new(600, 400).unwrap());
//! assert!(!resize.should_apply);
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

pub mod anchor;
pub mod backend;
pub mod dimension;
pub mod editor;
pub mod fit;
pub mod geometry;
pub mod plan;
pub mod rotation;
pub mod thumbnail;

pub use anchor::{Anchor, resolve, resolve_str};
pub use backend::{CanvasColor, RasterBackend};
pub use editor::{EditError, Editor};
pub use fit::FitMode;
pub use geometry::{LayoutError, Offset, Rect, Size};
pub use plan::{LayoutPlan, ResizeRequest, ThumbnailPlan, WatermarkPlan};
pub use thumbnail::{ThumbnailFit, ThumbnailMode};
