//! Realigns a route request after the traveler deviates from the active
//! route.
//!
//! 1. Check that the request, the progress snapshot and the position fix are
//!    all present and that at least one waypoint remains.
//! 2. Compute the retained coordinate window and prepend the current
//!    position as the new origin.
//! 3. Rebuild the bearing sequence, synthesizing the origin entry from the
//!    live heading.
//! 4. Slice the radius and approach sequences from the active leg.
//! 5. Re-base the waypoint-aligned sequences (names, targets, indices) onto
//!    the new coordinate numbering.
//! 6. Assemble the new request, copying every other field verbatim.

mod bearings;
mod sparse;

use tracing::{debug, error};

use crate::error::{MissingInputs, RealignError, RealignInputs, SequenceKind};
use crate::realign::bearings::rebuild_bearings;
use crate::realign::sparse::{realign_sparse_list, realign_waypoint_indices};
use crate::{PositionFix, ProgressSnapshot, RouteRequestOptions};

#[derive(Debug, Clone, Copy)]
pub struct RealignConfig {
    /// Bearing tolerance in degrees applied to the synthetic new origin when
    /// the original request carries no bearing constraint for its origin.
    pub default_bearing_tolerance: f64,
}

impl Default for RealignConfig {
    fn default() -> Self {
        Self {
            default_bearing_tolerance: 90.0,
        }
    }
}

/// Produces a new route request from the original request, the current route
/// progress and the current position fix.
///
/// The not-yet-reached coordinates survive with their routing hints; the
/// current position and heading become the new origin. Radius and approach
/// sequences are realigned to the active leg boundary rather than the
/// waypoint boundary, matching how bearings are kept past the leg already
/// underway.
///
/// The operation is a pure, synchronous transformation: no route is fetched
/// and the produced request is not checked for geometric sanity.
pub fn realign_route_options(
    config: &RealignConfig,
    options: Option<&RouteRequestOptions>,
    progress: Option<&ProgressSnapshot>,
    fix: Option<&PositionFix>,
) -> Result<RouteRequestOptions, RealignError> {
    let (options, progress, fix) = match (options, progress, fix) {
        (Some(options), Some(progress), Some(fix)) => (options, progress, fix),
        _ => {
            let missing = MissingInputs {
                options: options.is_none(),
                progress: progress.is_none(),
                fix: fix.is_none(),
            };
            error!("Cannot realign route request, missing inputs: {missing}");
            return Err(RealignError::MissingInput(missing));
        }
    };

    debug!("Realigning {options:?} at {fix:?} with {progress:?}");

    let remaining = progress.remaining_waypoints;
    if remaining == 0 {
        error!(
            "Reroute failed, no remaining waypoints: options={options:?} progress={progress:?} \
             fix={fix:?}"
        );
        return Err(RealignError::NoRemainingWaypoints);
    }

    let coordinate_count = options.coordinates.len();
    let leg_index = progress.active_leg_index;

    let inconsistent = |sequence: SequenceKind| {
        error!("Reroute failed, {sequence} out of bounds: {options:?} {progress:?} {fix:?}");
        RealignError::InconsistentListBounds {
            sequence,
            inputs: Box::new(RealignInputs {
                options: options.clone(),
                progress: *progress,
                fix: *fix,
            }),
        }
    };

    // Coordinate index of the next waypoint to be reached; everything before
    // it has already been passed.
    let retained_start = coordinate_count
        .checked_sub(remaining)
        .ok_or_else(|| inconsistent(SequenceKind::Coordinates))?;

    let mut coordinates = Vec::with_capacity(remaining + 1);
    coordinates.push(fix.coordinate);
    coordinates.extend_from_slice(&options.coordinates[retained_start..]);

    let bearings = rebuild_bearings(
        leg_index,
        coordinate_count,
        coordinates.len(),
        fix.heading,
        options.bearings.as_deref(),
        config.default_bearing_tolerance,
    )
    .ok_or_else(|| inconsistent(SequenceKind::Bearings))?;

    let radiuses = match options.radiuses.as_deref() {
        None => None,
        Some([]) => Some(Vec::new()),
        Some(radiuses) => Some(
            radiuses
                .get(leg_index..coordinate_count)
                .ok_or_else(|| inconsistent(SequenceKind::Radiuses))?
                .to_vec(),
        ),
    };

    let approaches = match options.approaches.as_deref() {
        None => None,
        Some([]) => Some(Vec::new()),
        Some(approaches) => Some(
            approaches
                .get(leg_index..coordinate_count)
                .ok_or_else(|| inconsistent(SequenceKind::Approaches))?
                .to_vec(),
        ),
    };

    // Index, in the original coordinate numbering, of the last waypoint
    // fully passed. -1 when the traveler has not passed any waypoint yet.
    let last_passed_waypoint = coordinate_count as isize - remaining as isize - 1;
    let waypoint_indices = options.waypoint_indices.as_deref();

    let waypoint_names = options
        .waypoint_names
        .as_deref()
        .map(|names| {
            realign_sparse_list(names, waypoint_indices, last_passed_waypoint)
                .ok_or_else(|| inconsistent(SequenceKind::WaypointNames))
        })
        .transpose()?;

    let waypoint_targets = options
        .waypoint_targets
        .as_deref()
        .map(|targets| {
            realign_sparse_list(targets, waypoint_indices, last_passed_waypoint)
                .ok_or_else(|| inconsistent(SequenceKind::WaypointTargets))
        })
        .transpose()?;

    let waypoint_indices =
        waypoint_indices.map(|indices| realign_waypoint_indices(indices, last_passed_waypoint));

    Ok(RouteRequestOptions {
        coordinates,
        bearings: Some(bearings),
        radiuses,
        approaches,
        waypoint_names,
        waypoint_targets,
        waypoint_indices,
        ..options.clone()
    })
}
