//! Implements parsing of the monitor lines printed by `xrandr --listactivemonitors`.
//!
//! A line looks like this:
//! ```text
//!  0: +*eDP-1 1920/309x1080/174+0+0  eDP-1
//! ```
//! i.e. the monitor index, an optional marker/name token, the geometry
//! `WIDTH/MMxHEIGHT/MM+XOFF+YOFF` and the name of the output interface.

use regex::Regex;
use std::{fmt, sync::LazyLock};

use crate::{
    error::ParseRecordError,
    geo::{pixel_area, Axis, Geometry},
};

/// Layout of a monitor line. The physical sizes after each `/` are matched but not captured.
static RECORD_RE: LazyLock<Regex> = LazyLock::new(|| {
    // ex: " 0: +*eDP-1 "
    const INDEX: &str = r"^\s*([0-9]+):\s*(?:\S+\s+)?";
    // ex: "1920/309x1080/174+0+0"
    const GEOMETRY: &str = r"([0-9]+)/[0-9]+x([0-9]+)/[0-9]+\+([0-9]+)\+([0-9]+)";
    // ex: "  eDP-1"
    const INTERFACE: &str = r"\s*(\S*)\s*$";

    Regex::new(&format!("{INDEX}{GEOMETRY}{INTERFACE}")).expect("monitor record pattern is valid")
});

/// One active monitor as listed by xrandr.
///
/// All fields keep the exact text that was captured from the input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonitorRecord {
    index: String,
    hpixels: String,
    vpixels: String,
    hoffset: String,
    voffset: String,
    interface: String,
    area: u128,
}

impl MonitorRecord {
    /// Parsing logic for a single monitor line.
    /// Fails if the line does not follow the layout above, no partial record is ever produced.
    pub fn try_parse(line: &str) -> Result<Self, ParseRecordError> {
        log::trace!("Entering MonitorRecord::try_parse.");

        let captures = RECORD_RE.captures(line).ok_or(ParseRecordError::Layout)?;
        let field = |i: usize| {
            captures
                .get(i)
                .map(|m| m.as_str().to_owned())
                .ok_or(ParseRecordError::Layout)
        };

        let index = field(1)?;
        let hpixels = field(2)?;
        let vpixels = field(3)?;
        let hoffset = field(4)?;
        let voffset = field(5)?;
        let interface = field(6)?;

        let width = pixels(Axis::Horizontal, &hpixels)?;
        let height = pixels(Axis::Vertical, &vpixels)?;

        let record = Self {
            index,
            hpixels,
            vpixels,
            hoffset,
            voffset,
            interface,
            area: pixel_area(width, height),
        };
        log::debug!("Parsed monitor record: {}", record);

        log::trace!("Leaving MonitorRecord::try_parse.");
        Ok(record)
    }

    pub fn index(&self) -> &str {
        &self.index
    }

    pub fn hpixels(&self) -> &str {
        &self.hpixels
    }

    pub fn vpixels(&self) -> &str {
        &self.vpixels
    }

    pub fn hoffset(&self) -> &str {
        &self.hoffset
    }

    pub fn voffset(&self) -> &str {
        &self.voffset
    }

    /// Name of the output interface, may be empty.
    pub fn interface(&self) -> &str {
        &self.interface
    }

    /// Number of pixels of the monitor, i.e. `hpixels * vpixels`.
    pub fn area(&self) -> u128 {
        self.area
    }

    /// The monitor's X geometry, formats as `WIDTHxHEIGHT+XOFF+YOFF`.
    pub fn geometry(&self) -> Geometry<'_> {
        Geometry::new(&self.hpixels, &self.vpixels, &self.hoffset, &self.voffset)
    }
}

impl fmt::Display for MonitorRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "#{} {} on {:?}",
            self.index,
            self.geometry(),
            self.interface
        )
    }
}

fn pixels(axis: Axis, digits: &str) -> Result<u64, ParseRecordError> {
    digits
        .parse()
        .map_err(|_| ParseRecordError::PixelsOutOfRange(axis, digits.to_owned()))
}
