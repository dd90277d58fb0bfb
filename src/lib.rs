#![doc = include_str!("../README.md")]

mod error;
mod guidance;
mod model;
mod realign;

pub use error::{MissingInputs, RealignError, RealignInputs, SequenceKind};
pub use guidance::{GuidanceMode, GuidanceOptions, guidance_options};
pub use model::{
    Approach, Bearing, Coordinate, GeometryEncoding, PositionFix, ProgressSnapshot,
    RouteRequestOptions, RoutingProfile,
};
pub use realign::{RealignConfig, realign_route_options};
