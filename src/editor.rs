//! Planned image operations executed on a caller-supplied [`RasterBackend`].
//!
//! ```
//! use zenfit::{Anchor, CanvasColor, Editor, Offset, RasterBackend, Size, ThumbnailMode};
//!
//! /// Backend whose "images" are just their sizes.
//! struct Dims;
//!
//! impl RasterBackend for Dims {
//!     type Image = Size;
//!     type Error = ();
//!
//!     fn open(&self, _: &str) -> Result<Size, ()> { Size::new(640, 480).map_err(|_| ()) }
//!     fn size(&self, image: &Size) -> Size { *image }
//!     fn crop(&self, _: Size, _: Offset, size: Size) -> Result<Size, ()> { Ok(size) }
//!     fn resize(&self, _: Size, size: Size) -> Result<Size, ()> { Ok(size) }
//!     fn rotate(&self, image: Size, _: f64, _: CanvasColor) -> Result<Size, ()> { Ok(image) }
//!     fn thumbnail(&self, image: &Size, bounds: Size, mode: ThumbnailMode) -> Result<Size, ()> {
//!         Ok(mode.fit(*image, bounds).output)
//!     }
//!     fn create_canvas(&self, size: Size, _: CanvasColor) -> Result<Size, ()> { Ok(size) }
//!     fn paste(&self, base: Size, _: &Size, _: Offset) -> Result<Size, ()> { Ok(base) }
//! }
//!
//! let editor = Editor::new(&Dims);
//! let cropped = editor.crop("photo.jpg", 100, 100, Anchor::Center).unwrap();
//! assert_eq!(cropped, Size::new(100, 100).unwrap());
//! ```

use core::fmt;

use crate::anchor::Anchor;
use crate::backend::{CanvasColor, RasterBackend};
use crate::geometry::{LayoutError, Size};
use crate::plan::{self, ResizeRequest};
use crate::thumbnail::ThumbnailMode;

/// Failure of a planned edit.
#[derive(Debug, PartialEq, Eq)]
pub enum EditError<E> {
    /// The requested geometry was invalid.
    Layout(LayoutError),
    /// The backend failed while executing the plan.
    Backend(E),
}

impl<E> From<LayoutError> for EditError<E> {
    fn from(err: LayoutError) -> Self {
        Self::Layout(err)
    }
}

impl<E: fmt::Display> fmt::Display for EditError<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Layout(err) => write!(f, "layout: {err}"),
            Self::Backend(err) => write!(f, "backend: {err}"),
        }
    }
}

impl<E: core::error::Error + 'static> core::error::Error for EditError<E> {
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        match self {
            Self::Layout(err) => Some(err),
            Self::Backend(err) => Some(err),
        }
    }
}

/// Runs crop, resize, rotate, thumbnail, and watermark operations by planning
/// the geometry and handing it to a borrowed backend.
#[derive(Debug)]
pub struct Editor<'a, B> {
    backend: &'a B,
}

impl<B> Clone for Editor<'_, B> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<B> Copy for Editor<'_, B> {}

impl<'a, B: RasterBackend> Editor<'a, B> {
    /// Create an editor over `backend`.
    pub fn new(backend: &'a B) -> Self {
        Self { backend }
    }

    /// The backend this editor drives.
    pub fn backend(&self) -> &'a B {
        self.backend
    }

    fn open(&self, source: &str) -> Result<B::Image, EditError<B::Error>> {
        self.backend.open(source).map_err(EditError::Backend)
    }

    /// Crop a `width`×`height` region of `source` positioned by `anchor`.
    pub fn crop(
        &self,
        source: &str,
        width: u32,
        height: u32,
        anchor: Anchor,
    ) -> Result<B::Image, EditError<B::Error>> {
        let target = Size::new(width, height)?;
        let image = self.open(source)?;
        let plan = plan::crop(self.backend.size(&image), target, anchor)?;
        tracing::debug!(source, x = plan.offset.x, y = plan.offset.y, "cropping");
        self.backend
            .crop(image, plan.offset, plan.target_size)
            .map_err(EditError::Backend)
    }

    /// Resize `source` per `request`. Returns the image untouched when the
    /// fit policy skips the resize.
    pub fn resize(
        &self,
        source: &str,
        request: ResizeRequest,
    ) -> Result<B::Image, EditError<B::Error>> {
        let image = self.open(source)?;
        let plan = request.plan(self.backend.size(&image))?;
        if !plan.should_apply {
            tracing::debug!(source, fit = %request.fit, "resize skipped by fit policy");
            return Ok(image);
        }
        tracing::debug!(source, target = %plan.target_size, "resizing");
        self.backend
            .resize(image, plan.target_size)
            .map_err(EditError::Backend)
    }

    /// Rotate `source` clockwise by `degrees`, filling exposed corners with
    /// `background`. Full turns return the image untouched.
    pub fn rotate(
        &self,
        source: &str,
        degrees: f64,
        background: CanvasColor,
    ) -> Result<B::Image, EditError<B::Error>> {
        let image = self.open(source)?;
        let plan = plan::rotate(self.backend.size(&image), degrees)?;
        if !plan.should_apply {
            return Ok(image);
        }
        tracing::debug!(source, degrees, target = %plan.target_size, "rotating");
        self.backend
            .rotate(image, degrees, background)
            .map_err(EditError::Backend)
    }

    /// Thumbnail `source` into a `bounds` canvas filled with `background`,
    /// placing the thumbnail by `anchor`.
    pub fn thumbnail(
        &self,
        source: &str,
        bounds: Size,
        mode: ThumbnailMode,
        anchor: Anchor,
        background: CanvasColor,
    ) -> Result<B::Image, EditError<B::Error>> {
        let image = self.open(source)?;
        let thumb = self
            .backend
            .thumbnail(&image, bounds, mode)
            .map_err(EditError::Backend)?;
        let plan = plan::thumbnail(bounds, self.backend.size(&thumb), anchor);
        tracing::debug!(source, %bounds, x = plan.offset.x, y = plan.offset.y, "compositing thumbnail");
        let canvas = self
            .backend
            .create_canvas(plan.target_size, background)
            .map_err(EditError::Backend)?;
        self.backend
            .paste(canvas, &thumb, plan.offset)
            .map_err(EditError::Backend)
    }

    /// Overlay `watermark` on `source`, positioned by `anchor`.
    pub fn watermark(
        &self,
        source: &str,
        watermark: &str,
        anchor: Anchor,
    ) -> Result<B::Image, EditError<B::Error>> {
        let base = self.open(source)?;
        let mut mark = self.open(watermark)?;
        let plan = plan::watermark(self.backend.size(&base), self.backend.size(&mark), anchor)?;
        if let Some(resize) = plan.resize
            && resize.should_apply
        {
            tracing::debug!(watermark, target = %resize.target_size, "shrinking watermark");
            mark = self
                .backend
                .resize(mark, resize.target_size)
                .map_err(EditError::Backend)?;
        }
        tracing::debug!(
            source,
            watermark,
            x = plan.overlay.offset.x,
            y = plan.overlay.offset.y,
            "pasting watermark"
        );
        self.backend
            .paste(base, &mark, plan.overlay.offset)
            .map_err(EditError::Backend)
    }
}
