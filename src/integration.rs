//! Integration module for connecting object detectors with the tracker.
//!
//! The tracker only consumes detections. This module provides the detector
//! seam, detection construction helpers, frame-rate measurement and a
//! pipeline that chains them per frame.

mod builder;
mod detector;
mod frame_rate;
mod pipeline;

pub use builder::DetectionBuilder;
pub use detector::{DetectionSource, IntoDetections};
pub use frame_rate::FrameRateMeter;
pub use pipeline::TrackerPipeline;
