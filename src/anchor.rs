//! Anchor positions and offset resolution.
//!
//! An [`Anchor`] says where content sits inside a container: one of 13
//! symbolic positions, or an explicit `(x, y)` offset. [`resolve`] turns it
//! into a top-left [`Offset`].
//!
//! ```text
//!     ┌──────────────┬──────────────┬──────────────┐
//!     │ TopLeft      │ CenterTop    │ TopRight     │
//!     ├──────────────┼──────────────┼──────────────┤
//!     │ CenterLeft   │ Center       │ CenterRight  │
//!     ├──────────────┼──────────────┼──────────────┤
//!     │ BottomLeft   │ CenterBottom │ BottomRight  │
//!     └──────────────┴──────────────┴──────────────┘
//! ```
//!
//! `Top` and `Left` behave like `TopLeft`, `Right` like `TopRight`, and
//! `Bottom` like `BottomLeft`: single-edge anchors pin the named edge and
//! leave the other axis at the origin.

use core::fmt;
use core::str::FromStr;

use crate::geometry::{LayoutError, Offset, Size};

/// Where to place content within a container.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Anchor {
    Top,
    Right,
    Bottom,
    Left,
    #[default]
    Center,
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
    CenterLeft,
    CenterRight,
    CenterTop,
    CenterBottom,
    /// Caller-supplied top-left offset, used unchanged.
    Explicit(Offset),
}

/// Short code, long name, anchor. Short codes are the single/two-letter
/// forms (`TL`, `CB`, ...) used in stored presets.
const TOKENS: [(&str, &str, Anchor); 13] = [
    ("T", "top", Anchor::Top),
    ("R", "right", Anchor::Right),
    ("B", "bottom", Anchor::Bottom),
    ("L", "left", Anchor::Left),
    ("C", "center", Anchor::Center),
    ("TL", "top-left", Anchor::TopLeft),
    ("TR", "top-right", Anchor::TopRight),
    ("BL", "bottom-left", Anchor::BottomLeft),
    ("BR", "bottom-right", Anchor::BottomRight),
    ("CL", "center-left", Anchor::CenterLeft),
    ("CR", "center-right", Anchor::CenterRight),
    ("CT", "center-top", Anchor::CenterTop),
    ("CB", "center-bottom", Anchor::CenterBottom),
];

impl Anchor {
    /// All 13 symbolic anchors.
    pub const ALL: [Self; 13] = [
        Self::Top,
        Self::Right,
        Self::Bottom,
        Self::Left,
        Self::Center,
        Self::TopLeft,
        Self::TopRight,
        Self::BottomLeft,
        Self::BottomRight,
        Self::CenterLeft,
        Self::CenterRight,
        Self::CenterTop,
        Self::CenterBottom,
    ];

    /// Explicit anchor at `(x, y)`.
    pub const fn at(x: i64, y: i64) -> Self {
        Self::Explicit(Offset::new(x, y))
    }

    /// Explicit anchor from a component list, which must hold exactly `[x, y]`.
    ///
    /// ```
    /// use zenfit::{Anchor, LayoutError};
    ///
    /// assert_eq!(Anchor::from_components(&[4, 8]), Ok(Anchor::at(4, 8)));
    /// assert_eq!(Anchor::from_components(&[4]), Err(LayoutError::InvalidAnchor));
    /// ```
    pub fn from_components(components: &[i64]) -> Result<Self, LayoutError> {
        match *components {
            [x, y] => Ok(Self::at(x, y)),
            _ => Err(LayoutError::InvalidAnchor),
        }
    }

    /// Short code (`"TL"`, `"CB"`, ...). `None` for explicit offsets.
    pub fn code(self) -> Option<&'static str> {
        TOKENS
            .iter()
            .find(|(_, _, anchor)| *anchor == self)
            .map(|(code, _, _)| *code)
    }
}

impl fmt::Display for Anchor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Self::Explicit(o) = self {
            return write!(f, "{},{}", o.x, o.y);
        }
        let name = TOKENS
            .iter()
            .find(|(_, _, anchor)| anchor == self)
            .map_or("center", |(_, name, _)| *name);
        f.write_str(name)
    }
}

/// Parses a short code (`TL`), a long name (`top-left`), or an `x,y` pair.
/// Matching is ASCII case-insensitive.
impl FromStr for Anchor {
    type Err = LayoutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Some((_, _, anchor)) = TOKENS
            .iter()
            .find(|(code, name, _)| s.eq_ignore_ascii_case(code) || s.eq_ignore_ascii_case(name))
        {
            return Ok(*anchor);
        }

        let mut parts = s.split(',');
        let x = parts.next().map(parse_component);
        let y = parts.next().map(parse_component);
        match (x, y, parts.next()) {
            (Some(Ok(x)), Some(Ok(y)), None) => Ok(Self::at(x, y)),
            _ => Err(LayoutError::InvalidAnchor),
        }
    }
}

fn parse_component(part: &str) -> Result<i64, LayoutError> {
    part.trim()
        .parse::<i64>()
        .map_err(|_| LayoutError::InvalidAnchor)
}

/// Resolve `anchor` to the top-left offset of `content` inside `container`.
///
/// Centered axes use floor division of the free space, so odd leftovers put
/// the extra pixel after the content. Content larger than the container
/// yields negative offsets; clipping is the caller's job.
///
/// ```
/// use zenfit::{Anchor, Offset, Size, resolve};
///
/// let container = Size::new(100, 50).unwrap();
/// let content = Size::new(40, 20).unwrap();
/// assert_eq!(resolve(container, content, Anchor::Center), Offset::new(30, 15));
/// assert_eq!(resolve(container, content, Anchor::BottomRight), Offset::new(60, 30));
/// ```
pub fn resolve(container: Size, content: Size, anchor: Anchor) -> Offset {
    let free_x = i64::from(container.width()) - i64::from(content.width());
    let free_y = i64::from(container.height()) - i64::from(content.height());
    let cx = free_x.div_euclid(2);
    let cy = free_y.div_euclid(2);

    use Anchor::*;
    let (x, y) = match anchor {
        Top | Left | TopLeft => (0, 0),
        Right | TopRight => (free_x, 0),
        Bottom | BottomLeft => (0, free_y),
        BottomRight => (free_x, free_y),
        Center => (cx, cy),
        CenterLeft => (0, cy),
        CenterRight => (free_x, cy),
        CenterTop => (cx, 0),
        CenterBottom => (cx, free_y),
        Explicit(offset) => (offset.x, offset.y),
    };
    tracing::trace!(%container, %content, %anchor, x, y, "resolved anchor");
    Offset::new(x, y)
}

/// Parse `token` as an [`Anchor`] and [`resolve`] it.
pub fn resolve_str(container: Size, content: Size, token: &str) -> Result<Offset, LayoutError> {
    Ok(resolve(container, content, token.parse()?))
}
