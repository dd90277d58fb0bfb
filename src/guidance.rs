//! Derives the active guidance configuration from a route request, so the
//! guidance engine follows the route with the same mode, geometry encoding
//! and waypoints the route was requested with.

use crate::{Coordinate, GeometryEncoding, RouteRequestOptions, RoutingProfile};

/// Transportation mode the guidance engine tracks the route with.
/// Traffic-aware and plain car routing collapse into the same mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GuidanceMode {
    Driving,
    Walking,
    Cycling,
}

impl Default for GuidanceMode {
    fn default() -> Self {
        Self::Driving
    }
}

/// Guidance configuration derived from a route request.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct GuidanceOptions {
    pub mode: GuidanceMode,
    pub encoding: GeometryEncoding,
    /// Coordinates of the routable waypoints, in route order.
    pub waypoints: Vec<Coordinate>,
}

/// Maps a route request into the guidance configuration.
///
/// An absent request falls back to the defaults (driving mode, polyline6
/// encoding, no waypoints), so guidance can start before the first route
/// response has been observed.
pub fn guidance_options(options: Option<&RouteRequestOptions>) -> GuidanceOptions {
    let Some(options) = options else {
        return GuidanceOptions::default();
    };

    let mode = match options.profile {
        RoutingProfile::Driving | RoutingProfile::DrivingTraffic => GuidanceMode::Driving,
        RoutingProfile::Walking => GuidanceMode::Walking,
        RoutingProfile::Cycling => GuidanceMode::Cycling,
    };

    let waypoints = match options.waypoint_indices.as_deref() {
        Some(indices) => indices
            .iter()
            .filter_map(|&index| options.coordinates.get(index).copied())
            .collect(),
        None => options.coordinates.clone(),
    };

    GuidanceOptions {
        mode,
        encoding: options.geometries,
        waypoints,
    }
}
