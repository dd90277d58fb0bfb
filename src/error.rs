use std::fmt;

use strum::Display;
use thiserror::Error;

use crate::{PositionFix, ProgressSnapshot, RouteRequestOptions};

/// Failure modes of route request realignment.
///
/// `MissingInput` and `NoRemainingWaypoints` are transient: the caller may
/// retry on the next progress update. `InconsistentListBounds` is a defect
/// in the upstream data and will recur deterministically on the same inputs.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RealignError {
    #[error("cannot realign route request, inputs must be present: {0}")]
    MissingInput(MissingInputs),
    #[error("cannot realign route request, no remaining waypoints to route to")]
    NoRemainingWaypoints,
    #[error("{sequence} sequence is out of bounds for the realignment window: {inputs:?}")]
    InconsistentListBounds {
        sequence: SequenceKind,
        inputs: Box<RealignInputs>,
    },
}

/// Which of the realignment inputs were absent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MissingInputs {
    pub options: bool,
    pub progress: bool,
    pub fix: bool,
}

impl fmt::Display for MissingInputs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names = [
            ("options", self.options),
            ("progress", self.progress),
            ("fix", self.fix),
        ];

        let mut first = true;
        for (name, missing) in names {
            if missing {
                if !first {
                    f.write_str(", ")?;
                }
                f.write_str(name)?;
                first = false;
            }
        }

        Ok(())
    }
}

/// Sequence of the route request that fell outside its bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[strum(serialize_all = "snake_case")]
pub enum SequenceKind {
    Coordinates,
    Bearings,
    Radiuses,
    Approaches,
    WaypointNames,
    WaypointTargets,
}

/// Snapshot of the inputs a realignment failed on, embedded in bounds
/// failures so the offending combination can be diagnosed upstream.
#[derive(Debug, Clone, PartialEq)]
pub struct RealignInputs {
    pub options: RouteRequestOptions,
    pub progress: ProgressSnapshot,
    pub fix: PositionFix,
}
