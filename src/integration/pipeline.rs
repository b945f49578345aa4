//! TrackerPipeline for combining detection with tracking.

use std::time::Instant;

use tracing::{debug, trace};

use crate::error::{Error, Result};
use crate::tracker::{CentroidTracker, Track, TrackerConfig};

use super::{DetectionSource, FrameRateMeter};

const DEFAULT_CONFIDENCE: f32 = 0.5;

/// Runs a `DetectionSource` and a `CentroidTracker` frame by frame.
///
/// Detections scoring below the confidence threshold never reach the
/// tracker. With strict validation on, a malformed detection fails the whole
/// frame and leaves the tracker untouched.
pub struct TrackerPipeline<D: DetectionSource> {
    detector: D,
    tracker: CentroidTracker,
    confidence: f32,
    strict: bool,
    meter: FrameRateMeter,
}

impl<D> TrackerPipeline<D>
where
    D: DetectionSource,
    D::Error: std::error::Error + Send + Sync + 'static,
{
    pub fn new(detector: D, config: TrackerConfig) -> Self {
        Self {
            detector,
            tracker: CentroidTracker::new(config),
            confidence: DEFAULT_CONFIDENCE,
            strict: false,
            meter: FrameRateMeter::new(),
        }
    }

    pub fn with_default_config(detector: D) -> Self {
        Self::new(detector, TrackerConfig::default())
    }

    /// Minimum score a detection needs to be tracked (inclusive).
    pub fn with_confidence(mut self, confidence: f32) -> Self {
        self.confidence = confidence;
        self
    }

    pub fn with_strict_validation(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// Process a single frame and return the live tracks.
    pub fn process_frame(&mut self, input: &[u8], width: u32, height: u32) -> Result<Vec<Track>> {
        self.process_frame_at(input, width, height, Instant::now())
    }

    /// Same as [`TrackerPipeline::process_frame`] with an explicit frame timestamp.
    pub fn process_frame_at(
        &mut self,
        input: &[u8],
        width: u32,
        height: u32,
        now: Instant,
    ) -> Result<Vec<Track>> {
        let detections = self
            .detector
            .detect(input, width, height)
            .map_err(|e| Error::Detector(Box::new(e)))?;

        let total = detections.len();
        let detections: Vec<_> = detections
            .into_iter()
            .filter(|d| d.score >= self.confidence)
            .collect();
        if detections.len() < total {
            trace!(
                dropped = total - detections.len(),
                threshold = self.confidence,
                "filtered low-confidence detections"
            );
        }

        if self.strict {
            for det in &detections {
                if let Err(e) = det.validate() {
                    debug!(error = %e, label = %det.label, "rejecting frame");
                    return Err(e.into());
                }
            }
        }

        let tracks = self.tracker.update(detections);
        self.meter.tick(now);
        Ok(tracks)
    }

    /// Frame rate measured across recent `process_frame` calls.
    pub fn fps(&self) -> u32 {
        self.meter.fps()
    }

    /// Number of live tracks.
    pub fn object_count(&self) -> usize {
        self.tracker.len()
    }

    pub fn confidence(&self) -> f32 {
        self.confidence
    }

    pub fn set_confidence(&mut self, confidence: f32) {
        self.confidence = confidence;
    }

    /// Get a reference to the underlying detector.
    pub fn detector(&self) -> &D {
        &self.detector
    }

    /// Get a mutable reference to the underlying detector.
    pub fn detector_mut(&mut self) -> &mut D {
        &mut self.detector
    }

    /// Get a reference to the underlying tracker.
    pub fn tracker(&self) -> &CentroidTracker {
        &self.tracker
    }

    /// Get a mutable reference to the underlying tracker.
    pub fn tracker_mut(&mut self) -> &mut CentroidTracker {
        &mut self.tracker
    }
}
