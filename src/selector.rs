//! Collection of parsed monitors and the policies to pick one of them.

use std::{fmt, slice};

use crate::{
    error::{GeometryError, ParseRecordError},
    monitor::MonitorRecord,
};

/// Which monitor to pick from a [`Monitors`] collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Selection {
    /// The first monitor that was listed.
    #[default]
    First,
    /// The monitor with the most pixels. Ties go to the earlier monitor.
    Largest,
}

impl fmt::Display for Selection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Selection::First => f.write_str("first"),
            Selection::Largest => f.write_str("largest"),
        }
    }
}

/// Append-only list of monitors in the order they were listed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Monitors {
    records: Vec<MonitorRecord>,
}

impl Monitors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses one monitor line and appends the resulting record.
    /// Nothing is appended if the line is malformed.
    pub fn parse_line(&mut self, line: &str) -> Result<(), ParseRecordError> {
        let record = MonitorRecord::try_parse(line)?;
        self.push(record);
        Ok(())
    }

    pub fn push(&mut self, record: MonitorRecord) {
        self.records.push(record);
    }

    /// Number of monitors parsed so far.
    pub fn count(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> slice::Iter<'_, MonitorRecord> {
        self.records.iter()
    }

    /// The first monitor that was listed.
    pub fn first(&self) -> Option<&MonitorRecord> {
        self.records.first()
    }

    /// The monitor with the largest pixel area.
    /// Only a strictly larger area replaces the current candidate, so ties keep the earliest monitor.
    pub fn largest(&self) -> Option<&MonitorRecord> {
        let mut records = self.records.iter();
        let first = records.next()?;

        Some(records.fold(first, |largest, candidate| {
            if candidate.area() > largest.area() {
                candidate
            } else {
                largest
            }
        }))
    }

    /// Geometry of the first monitor.
    pub fn default_geometry(&self) -> Result<String, GeometryError> {
        self.first()
            .map(|record| record.geometry().to_string())
            .ok_or(GeometryError::EmptyCollection)
    }

    /// Geometry of the largest monitor.
    pub fn largest_geometry(&self) -> Result<String, GeometryError> {
        self.largest()
            .map(|record| record.geometry().to_string())
            .ok_or(GeometryError::EmptyCollection)
    }

    /// Geometry of the monitor picked by `selection`.
    pub fn select(&self, selection: Selection) -> Result<String, GeometryError> {
        match selection {
            Selection::First => self.default_geometry(),
            Selection::Largest => self.largest_geometry(),
        }
    }
}

impl<'a> IntoIterator for &'a Monitors {
    type Item = &'a MonitorRecord;
    type IntoIter = slice::Iter<'a, MonitorRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
