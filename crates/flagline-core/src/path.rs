//! Authored enemy path: arc-length interpolation and placement checks.
//!
//! The polyline is fixed for a session. Segment lengths and directions are
//! precomputed once; every query is stateless.

use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::error::PathError;
use crate::types::Position;

/// One precomputed straight piece of the path.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PathSegment {
    pub start: DVec2,
    pub end: DVec2,
    pub length: f64,
    /// Unit direction from `start` to `end`. Zero for degenerate segments.
    pub direction: DVec2,
}

impl PathSegment {
    fn new(start: DVec2, end: DVec2) -> Self {
        let delta = end - start;
        let length = delta.length();
        let direction = if length > 0.0 { delta / length } else { DVec2::ZERO };
        Self {
            start,
            end,
            length,
            direction,
        }
    }

    /// Heading in radians (`atan2(dy, dx)`).
    pub fn heading(&self) -> f64 {
        self.direction.y.atan2(self.direction.x)
    }

    /// Distance from `point` to the closest point on this segment.
    pub fn distance_to(&self, point: DVec2) -> f64 {
        if self.length == 0.0 {
            return point.distance(self.start);
        }
        let t = (point - self.start).dot(self.direction).clamp(0.0, self.length);
        point.distance(self.start + self.direction * t)
    }
}

/// Point on the path at a given arc length.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PathPoint {
    pub position: Position,
    pub heading: f64,
}

/// Ordered polyline from spawn to base.
///
/// Serialized as its waypoint list; deserializing goes through
/// [`PathGeometry::new`], so a decoded path is always valid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<DVec2>", into = "Vec<DVec2>")]
pub struct PathGeometry {
    waypoints: Vec<DVec2>,
    segments: Vec<PathSegment>,
    /// Arc length at the start of each segment, plus the total at the end.
    cumulative: Vec<f64>,
}

impl PathGeometry {
    /// Build a path from at least two finite waypoints.
    pub fn new(waypoints: Vec<DVec2>) -> Result<Self, PathError> {
        if waypoints.len() < 2 {
            return Err(PathError::TooFewWaypoints(waypoints.len()));
        }
        if let Some(index) = waypoints.iter().position(|w| !w.is_finite()) {
            return Err(PathError::NonFiniteWaypoint(index));
        }

        let segments: Vec<PathSegment> = waypoints
            .windows(2)
            .map(|pair| PathSegment::new(pair[0], pair[1]))
            .collect();

        let mut cumulative = Vec::with_capacity(segments.len() + 1);
        let mut acc = 0.0;
        cumulative.push(acc);
        for segment in &segments {
            acc += segment.length;
            cumulative.push(acc);
        }

        Ok(Self {
            waypoints,
            segments,
            cumulative,
        })
    }

    /// Convenience constructor from `(x, y)` pairs.
    pub fn from_points(points: &[(f64, f64)]) -> Result<Self, PathError> {
        Self::new(points.iter().map(|&(x, y)| DVec2::new(x, y)).collect())
    }

    pub fn waypoints(&self) -> &[DVec2] {
        &self.waypoints
    }

    pub fn segments(&self) -> &[PathSegment] {
        &self.segments
    }

    pub fn total_length(&self) -> f64 {
        self.cumulative[self.segments.len()]
    }

    /// Arc length from the start to waypoint `index`.
    pub fn distance_to_waypoint(&self, index: usize) -> Option<f64> {
        self.cumulative.get(index).copied()
    }

    pub fn start(&self) -> DVec2 {
        self.waypoints[0]
    }

    pub fn end(&self) -> DVec2 {
        self.waypoints[self.waypoints.len() - 1]
    }

    /// Position and heading at arc length `distance`.
    ///
    /// Clamps to the first waypoint for `distance <= 0` and to the last for
    /// `distance >= total_length`. A distance equal to a waypoint's arc
    /// length returns that waypoint exactly.
    pub fn position_at(&self, distance: f64) -> PathPoint {
        let first = &self.segments[0];
        if distance.is_nan() || distance <= 0.0 {
            return PathPoint {
                position: self.start(),
                heading: first.heading(),
            };
        }

        let last = &self.segments[self.segments.len() - 1];
        if distance >= self.total_length() {
            return PathPoint {
                position: self.end(),
                heading: last.heading(),
            };
        }

        for (i, segment) in self.segments.iter().enumerate() {
            let (seg_start, seg_end) = (self.cumulative[i], self.cumulative[i + 1]);
            if distance > seg_end {
                continue;
            }
            let position = if distance == seg_end {
                segment.end
            } else if distance == seg_start {
                segment.start
            } else {
                segment.start + segment.direction * (distance - seg_start)
            };
            return PathPoint {
                position,
                heading: segment.heading(),
            };
        }

        PathPoint {
            position: self.end(),
            heading: last.heading(),
        }
    }

    /// Shortest distance from `point` to any segment.
    pub fn distance_to_path(&self, point: DVec2) -> f64 {
        self.segments
            .iter()
            .map(|s| s.distance_to(point))
            .fold(f64::INFINITY, f64::min)
    }

    /// Whether `point` lies within `tolerance` of the path.
    pub fn is_on_path(&self, point: DVec2, tolerance: f64) -> bool {
        self.segments.iter().any(|s| s.distance_to(point) <= tolerance)
    }
}

impl TryFrom<Vec<DVec2>> for PathGeometry {
    type Error = PathError;

    fn try_from(waypoints: Vec<DVec2>) -> Result<Self, Self::Error> {
        Self::new(waypoints)
    }
}

impl From<PathGeometry> for Vec<DVec2> {
    fn from(path: PathGeometry) -> Self {
        path.waypoints
    }
}
