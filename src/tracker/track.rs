//! Persistent object identity across frames.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::tracker::matching::Detection;
use crate::tracker::rect::Rect;
use crate::tracker::track_state::TrackState;

/// Single tracked object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Track {
    /// Unique track identifier, never reused within a tracker
    pub id: u64,
    /// Last matched position
    #[serde(rename = "box")]
    pub bbox: Rect,
    pub label: String,
    pub score: f32,
    /// Number of updates since the last match
    pub age: u32,
}

impl Track {
    pub(crate) fn from_detection(id: u64, det: Detection) -> Self {
        Self {
            id,
            bbox: det.bbox,
            label: det.label,
            score: det.score,
            age: 0,
        }
    }

    /// Take over a detection's box, label and score and reset the age.
    pub(crate) fn refresh(&mut self, det: Detection) {
        self.bbox = det.bbox;
        self.label = det.label;
        self.score = det.score;
        self.age = 0;
    }

    pub fn state(&self) -> TrackState {
        if self.age == 0 {
            TrackState::Matched
        } else {
            TrackState::Unmatched
        }
    }
}

impl fmt::Display for Track {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ID:{} {} ({}%)",
            self.id,
            self.label,
            (self.score * 100.0).round()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_refresh_resets_age() {
        let mut track = Track::from_detection(3, Detection::new(Rect::new(0.0, 0.0, 1.0, 1.0), "cat", 0.4));
        track.age = 7;
        assert_eq!(track.state(), TrackState::Unmatched);

        track.refresh(Detection::new(Rect::new(2.0, 2.0, 1.0, 1.0), "dog", 0.8));
        assert_eq!(track.id, 3);
        assert_eq!(track.age, 0);
        assert_eq!(track.label, "dog");
        assert_eq!(track.bbox, Rect::new(2.0, 2.0, 1.0, 1.0));
        assert_eq!(track.state(), TrackState::Matched);
    }

    #[test]
    fn test_display() {
        let track = Track::from_detection(12, Detection::new(Rect::default(), "person", 0.876));
        assert_eq!(track.to_string(), "ID:12 person (88%)");
    }
}
