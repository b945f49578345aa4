mod centroid_tracker;
mod config;
pub mod matching;
mod rect;
mod track;
mod track_state;

pub use centroid_tracker::CentroidTracker;
pub use config::{AssociationPolicy, TrackerConfig};
pub use matching::Detection;
pub use rect::Rect;
pub use track::Track;
pub use track_state::TrackState;
