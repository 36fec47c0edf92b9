//! Fit gating: whether a resize should run at all.

use core::fmt;
use core::str::FromStr;

use crate::geometry::{LayoutError, Size};

/// Which resize directions are allowed.
///
/// `Always` is the most permissive; the other two are one-directional clamps
/// that skip the resize when it would go the wrong way on every axis.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum FitMode {
    /// Apply only if the result is larger on at least one axis.
    GrowOnly,
    /// Apply only if the result is smaller on at least one axis.
    ShrinkOnly,
    /// Always apply.
    #[default]
    Always,
}

impl FitMode {
    /// Whether resizing `original` to `target` is allowed under this mode.
    ///
    /// ```
    /// use zenfit::{FitMode, Size};
    ///
    /// let original = Size::new(100, 100).unwrap();
    /// let target = Size::new(50, 50).unwrap();
    /// assert!(!FitMode::GrowOnly.should_resize(original, target));
    /// assert!(FitMode::ShrinkOnly.should_resize(original, target));
    /// assert!(FitMode::Always.should_resize(original, target));
    /// ```
    pub fn should_resize(self, original: Size, target: Size) -> bool {
        match self {
            Self::GrowOnly => original.is_exceeded_by(target),
            Self::ShrinkOnly => target.is_exceeded_by(original),
            Self::Always => true,
        }
    }
}

/// Legacy numeric codes: 1 = grow, 2 = shrink, 3 = both.
impl TryFrom<u8> for FitMode {
    type Error = LayoutError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Self::GrowOnly),
            2 => Ok(Self::ShrinkOnly),
            3 => Ok(Self::Always),
            _ => Err(LayoutError::InvalidFitMode),
        }
    }
}

impl From<FitMode> for u8 {
    fn from(mode: FitMode) -> Self {
        match mode {
            FitMode::GrowOnly => 1,
            FitMode::ShrinkOnly => 2,
            FitMode::Always => 3,
        }
    }
}

impl fmt::Display for FitMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::GrowOnly => "grow-only",
            Self::ShrinkOnly => "shrink-only",
            Self::Always => "always",
        })
    }
}

impl FromStr for FitMode {
    type Err = LayoutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let is = |names: &[&str]| names.iter().any(|n| s.eq_ignore_ascii_case(n));
        if is(&["grow-only", "grow", "increase", "upscale"]) {
            Ok(Self::GrowOnly)
        } else if is(&["shrink-only", "shrink", "reduce", "downscale"]) {
            Ok(Self::ShrinkOnly)
        } else if is(&["always", "both", "increase-and-reduce"]) {
            Ok(Self::Always)
        } else {
            Err(LayoutError::InvalidFitMode)
        }
    }
}
