//! Greedy centroid-distance tracker.

use tracing::{debug, trace};

use crate::error::Result;
use crate::tracker::config::{AssociationPolicy, TrackerConfig};
use crate::tracker::matching::{self, Detection};
use crate::tracker::rect::Rect;
use crate::tracker::track::Track;

/// Assigns stable ids to per-frame detections.
///
/// Not synchronized: call [`CentroidTracker::update`] once per frame from a
/// single owner. Each instance counts ids independently.
#[derive(Debug, Clone, Default)]
pub struct CentroidTracker {
    tracks: Vec<Track>,
    next_id: u64,
    config: TrackerConfig,
}

impl CentroidTracker {
    pub fn new(config: TrackerConfig) -> Self {
        Self {
            tracks: Vec::new(),
            next_id: 0,
            config,
        }
    }

    /// Like [`CentroidTracker::new`], but rejects an invalid configuration.
    pub fn try_new(config: TrackerConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::new(config))
    }

    /// Feed one frame of detections and return the live tracks.
    ///
    /// Matching runs against the tracks as they stood before this call, in
    /// their stored order. Output order: matched and new tracks in detection
    /// order, then carried-over unmatched tracks in their previous order.
    ///
    /// Distances are always measured from a track's box as of the previous
    /// call; a box written by an earlier match in this same call is never
    /// seen by later detections.
    pub fn update(&mut self, detections: Vec<Detection>) -> Vec<Track> {
        let snapshot = std::mem::take(&mut self.tracks);

        let (track_ids, track_rects): (Vec<u64>, Vec<Rect>) =
            snapshot.iter().map(|t| (t.id, t.bbox)).unzip();
        let det_rects: Vec<Rect> = detections.iter().map(|d| d.bbox).collect();
        let dists = matching::centroid_distance(&track_rects, &det_rects);

        let mut pending: Vec<Option<Track>> = snapshot.into_iter().map(Some).collect();
        // Position in `updated` of each snapshot track matched so far.
        let mut slots: Vec<Option<usize>> = vec![None; pending.len()];
        let mut updated: Vec<Track> = Vec::with_capacity(pending.len() + detections.len());

        for (idet, det) in detections.into_iter().enumerate() {
            let candidates = dists.column(idet);
            let hit = match self.config.policy {
                AssociationPolicy::FirstFit => {
                    matching::first_within(candidates, self.config.match_distance)
                }
                AssociationPolicy::NearestFit => {
                    matching::nearest_within(candidates, self.config.match_distance)
                }
            };

            match hit {
                Some(itrack) => {
                    trace!(
                        track_id = track_ids[itrack],
                        distance = candidates[itrack],
                        label = %det.label,
                        "detection matched track"
                    );
                    match slots[itrack] {
                        // Already matched earlier in this frame: the later detection wins.
                        Some(slot) => updated[slot].refresh(det),
                        None => {
                            if let Some(mut track) = pending[itrack].take() {
                                track.refresh(det);
                                slots[itrack] = Some(updated.len());
                                updated.push(track);
                            }
                        }
                    }
                }
                None => {
                    let id = self.next_id;
                    self.next_id += 1;
                    debug!(track_id = id, label = %det.label, "new track");
                    updated.push(Track::from_detection(id, det));
                }
            }
        }

        for mut track in pending.into_iter().flatten() {
            track.age += 1;
            if track.age < self.config.max_age {
                updated.push(track);
            } else {
                debug!(track_id = track.id, age = track.age, "track expired");
            }
        }

        trace!(live = updated.len(), next_id = self.next_id, "tracker updated");
        self.tracks = updated;
        self.tracks.clone()
    }

    /// Live tracks in iteration order.
    pub fn tracks(&self) -> &[Track] {
        &self.tracks
    }

    pub fn get(&self, id: u64) -> Option<&Track> {
        self.tracks.iter().find(|t| t.id == id)
    }

    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }

    /// Id the next new track will receive.
    pub fn next_id(&self) -> u64 {
        self.next_id
    }

    pub fn config(&self) -> &TrackerConfig {
        &self.config
    }

    /// Drop all live tracks. The id counter keeps running, so ids handed
    /// out before the reset are never assigned again.
    pub fn reset(&mut self) {
        self.tracks.clear();
    }
}
