//! Errors for the fallible construction paths in the core.

use thiserror::Error;

/// Path construction failure.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PathError {
    #[error("path needs at least 2 waypoints, got {0}")]
    TooFewWaypoints(usize),
    #[error("waypoint {0} has a non-finite coordinate")]
    NonFiniteWaypoint(usize),
}
