use approx::abs_diff_eq;
use strum::{Display, EnumString};

/// Routing profile of a route request.
/// The profile selects the transportation mode the routing engine optimizes
/// for and is carried through a reroute unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString)]
#[strum(serialize_all = "kebab-case")]
pub enum RoutingProfile {
    /// Car routing on the full road network.
    Driving,
    /// Car routing considering live traffic conditions.
    DrivingTraffic,
    /// Pedestrian routing.
    Walking,
    /// Bicycle routing.
    Cycling,
}

impl Default for RoutingProfile {
    fn default() -> Self {
        Self::Driving
    }
}

/// Encoding of the route geometry returned by the routing engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString)]
pub enum GeometryEncoding {
    /// Polyline with 5 decimal places of precision.
    #[strum(serialize = "polyline")]
    Polyline5,
    /// Polyline with 6 decimal places of precision.
    #[strum(serialize = "polyline6")]
    Polyline6,
    /// GeoJSON LineString geometry.
    #[strum(serialize = "geojson")]
    GeoJson,
}

impl Default for GeometryEncoding {
    fn default() -> Self {
        Self::Polyline6
    }
}

/// The approach hint restricts the side of the road from which a coordinate
/// may be reached.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString)]
#[strum(serialize_all = "kebab-case")]
pub enum Approach {
    /// The coordinate may be approached from either side of the road.
    Unrestricted,
    /// The coordinate must be approached with it on the curb side.
    Curb,
}

impl Default for Approach {
    fn default() -> Self {
        Self::Unrestricted
    }
}

/// Coordinate pair stands for a pair of WGS84 longitude (lon) and latitude
/// (lat) values specifying a geometric point along the requested route.
#[derive(Debug, Clone, Copy, Default)]
pub struct Coordinate {
    pub lon: f64,
    pub lat: f64,
}

impl PartialEq for Coordinate {
    fn eq(&self, other: &Self) -> bool {
        const EPSILON: f64 = 1e-6;
        abs_diff_eq!(self.lon, other.lon, epsilon = EPSILON)
            && abs_diff_eq!(self.lat, other.lat, epsilon = EPSILON)
    }
}

#[cfg(feature = "geo")]
impl From<Coordinate> for geo::Point {
    fn from(coordinate: Coordinate) -> Self {
        Self::new(coordinate.lon, coordinate.lat)
    }
}

#[cfg(feature = "geo")]
impl From<geo::Point> for Coordinate {
    fn from(point: geo::Point) -> Self {
        Self {
            lon: point.x(),
            lat: point.y(),
        }
    }
}

/// The bearing constraint restricts the heading the route must leave or
/// approach a coordinate with. The angle is measured in degrees clockwise
/// from true North in [0, 360), the tolerance is the allowed deviation from
/// that angle in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Bearing {
    pub angle: f64,
    pub tolerance: f64,
}

impl Bearing {
    pub const fn from_degrees(angle: f64, tolerance: f64) -> Self {
        Self { angle, tolerance }
    }
}

/// A multi-waypoint routing request.
///
/// The coordinate sequence is the backbone of the request: every other
/// sequence either aligns 1:1 with the coordinates (bearings, radiuses,
/// approaches) or with the sparse waypoint-index sequence (names, targets).
/// The waypoint-index sequence marks which coordinates are routable
/// waypoints as opposed to shaping through-points; it is strictly increasing
/// and always includes 0.
#[derive(Debug, Clone, PartialEq)]
pub struct RouteRequestOptions {
    pub profile: RoutingProfile,
    pub geometries: GeometryEncoding,
    /// Whether the routing engine may return alternative routes.
    pub alternatives: bool,
    /// Whether turn-by-turn steps are requested.
    pub steps: bool,
    /// BCP 47 language tag for guidance instructions.
    pub language: Option<String>,
    /// Ordered route coordinates, origin first. Never empty.
    pub coordinates: Vec<Coordinate>,
    /// Per-coordinate bearing constraints; an absent entry means the
    /// coordinate carries no constraint.
    pub bearings: Option<Vec<Option<Bearing>>>,
    /// Per-coordinate snapping radiuses in meters.
    pub radiuses: Option<Vec<f64>>,
    /// Per-coordinate approach hints.
    pub approaches: Option<Vec<Approach>>,
    /// Names of the routable waypoints, aligned with `waypoint_indices`.
    pub waypoint_names: Option<Vec<String>>,
    /// Pinned arrival targets of the routable waypoints, aligned with
    /// `waypoint_indices`.
    pub waypoint_targets: Option<Vec<Coordinate>>,
    /// Coordinate positions of the routable waypoints.
    pub waypoint_indices: Option<Vec<usize>>,
}

/// Read-only summary of where the traveler is along the active route.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ProgressSnapshot {
    /// Index of the coordinate-to-coordinate leg currently being traveled.
    pub active_leg_index: usize,
    /// Number of waypoints not yet reached, including the final destination.
    pub remaining_waypoints: usize,
}

/// Current position and heading of the traveler.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PositionFix {
    pub coordinate: Coordinate,
    /// Compass heading in degrees [0, 360).
    pub heading: f64,
}

#[cfg(test)]
mod tests {
    use test_log::test;

    use super::*;

    #[test]
    fn routing_profile_wire_names_001() {
        assert_eq!(RoutingProfile::Driving.to_string(), "driving");
        assert_eq!(RoutingProfile::DrivingTraffic.to_string(), "driving-traffic");
        assert_eq!("cycling".parse(), Ok(RoutingProfile::Cycling));
        assert!("unicycling".parse::<RoutingProfile>().is_err());
    }

    #[test]
    fn geometry_encoding_wire_names_001() {
        assert_eq!(GeometryEncoding::Polyline5.to_string(), "polyline");
        assert_eq!(GeometryEncoding::Polyline6.to_string(), "polyline6");
        assert_eq!("geojson".parse(), Ok(GeometryEncoding::GeoJson));
    }

    #[test]
    fn approach_wire_names_001() {
        assert_eq!(Approach::Unrestricted.to_string(), "unrestricted");
        assert_eq!("curb".parse(), Ok(Approach::Curb));
    }

    #[test]
    fn coordinate_epsilon_equality_001() {
        let berlin = Coordinate {
            lon: 13.46112,
            lat: 52.51711,
        };

        assert_eq!(
            berlin,
            Coordinate {
                lon: 13.461_120_4,
                lat: 52.517_110_2,
            }
        );
        assert_ne!(
            berlin,
            Coordinate {
                lon: 13.46113,
                lat: 52.51711,
            }
        );
    }
}
