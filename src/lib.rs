//! Centroid-distance multi-object tracking.
//!
//! Turns unordered per-frame detection boxes into tracks with stable ids.
//! Association is greedy: each detection takes the first live track whose
//! centroid lies within `match_distance`, otherwise it opens a new track.
//! Unmatched tracks age by one per frame and expire at `max_age`.
//!
//! ```
//! use centroid_track::{CentroidTracker, Detection, Rect};
//!
//! let mut tracker = CentroidTracker::default();
//! let tracks = tracker.update(vec![Detection::new(Rect::new(0.0, 0.0, 10.0, 10.0), "cat", 0.9)]);
//! assert_eq!(tracks[0].id, 0);
//! ```

pub mod error;
pub mod integration;
pub mod tracker;

pub use error::{Error, Result, ValidationError};
pub use integration::{
    DetectionBuilder, DetectionSource, FrameRateMeter, IntoDetections, TrackerPipeline,
};
pub use tracker::{
    AssociationPolicy, CentroidTracker, Detection, Rect, Track, TrackState, TrackerConfig,
};
