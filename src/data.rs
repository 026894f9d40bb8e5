use std::{
    fs::File,
    io::{self, BufRead, BufReader},
    path::Path,
};

use log::warn;

use crate::error::Result;

/// A single observed point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

/// An in-memory, read-only collection of observed points.
///
/// The contents are fixed at construction time; every consumer sees the same
/// ordered sequence. All coordinates are finite: the loader never admits a
/// NaN or infinite value.
#[derive(Debug, Clone, Default)]
pub struct PointSet {
    points: Vec<Point>,
}

impl PointSet {
    /// Creates a point set from an owned buffer.
    pub fn new(points: Vec<Point>) -> Self {
        Self { points }
    }

    /// Loads a point set from an `x,y`-per-line text file.
    ///
    /// # Errors
    /// Returns `FitErr::Io` when the file cannot be opened or read.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let file = File::open(path)?;
        Ok(Self::from_reader(BufReader::new(file))?)
    }

    /// Reads points from a line-oriented source.
    ///
    /// Lines that do not parse as exactly two comma-separated finite floats
    /// are discarded with a warning; a read failure aborts the whole load.
    pub fn from_reader(reader: impl BufRead) -> io::Result<Self> {
        let mut points = Vec::new();

        for line in reader.lines() {
            let line = line?;
            match parse_point(&line) {
                Some(p) => points.push(p),
                None => warn!("discarding bad data point {line:?}"),
            }
        }

        Ok(Self { points })
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    #[inline]
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Returns the minimum and maximum x coordinates, or `None` when empty.
    pub fn x_bounds(&self) -> Option<(f64, f64)> {
        let mut iter = self.points.iter();
        let first = iter.next()?;

        let mut bounds = (first.x, first.x);
        for p in iter {
            bounds.0 = bounds.0.min(p.x);
            bounds.1 = bounds.1.max(p.x);
        }

        Some(bounds)
    }
}

/// Parses one `X,Y` line; `None` when the line is malformed.
fn parse_point(line: &str) -> Option<Point> {
    let (x, y) = line.split_once(',')?;
    let x: f64 = x.trim().parse().ok()?;
    let y: f64 = y.trim().parse().ok()?;

    // "nan,0" parses as a float but breaks the finiteness invariant, so it
    // counts as malformed too.
    (x.is_finite() && y.is_finite()).then_some(Point { x, y })
}
