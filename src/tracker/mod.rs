//! TDOA track association.
//!
//! Groups detected clicks into tracks under the hypothesis that clicks
//! from the same source vary smoothly in TDOA over time. The associator
//! makes a single greedy forward pass over the time-ordered click
//! sequence; the prediction strategy supplies the expected TDOA for the
//! next click on each open track.

mod associator;
mod predict;
mod types;

pub use associator::associate_tracks;
pub use predict::Predictor;
pub use types::{Click, TrackingParams, TrackingResult};
