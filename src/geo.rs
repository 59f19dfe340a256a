//! Representation of X geometry strings.

use std::fmt;

/// A screen axis, used to tell apart horizontal and vertical values in errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Horizontal,
    Vertical,
}

/// A borrowed view of a rectangle on the virtual screen, formatted as an X geometry `WxH+X+Y`.
///
/// All parts are kept in the exact textual form they were read in, so
/// `Geometry` never reformats a number (e.g. leading zeros survive).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Geometry<'a> {
    width: &'a str,
    height: &'a str,
    x: &'a str,
    y: &'a str,
}

impl<'a> Geometry<'a> {
    pub fn new(width: &'a str, height: &'a str, x: &'a str, y: &'a str) -> Self {
        Self {
            width,
            height,
            x,
            y,
        }
    }
}

impl fmt::Display for Geometry<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}x{}+{}+{}", self.width, self.height, self.x, self.y)
    }
}

/// Number of pixels covered by a `width` x `height` rectangle.
/// Both factors fit into a u64, so the product cannot overflow a u128.
pub fn pixel_area(width: u64, height: u64) -> u128 {
    u128::from(width) * u128::from(height)
}
