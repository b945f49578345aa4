//! Detection input and centroid association helpers.

use ndarray::{Array2, ArrayView1};
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::tracker::rect::Rect;

/// One observation from a single frame, before identity assignment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Detection {
    /// Bounding box in TLWH format
    #[serde(rename = "box")]
    pub bbox: Rect,
    /// Free-form class name
    pub label: String,
    /// Detection confidence score
    pub score: f32,
}

impl Detection {
    pub fn new(bbox: Rect, label: impl Into<String>, score: f32) -> Self {
        Self {
            bbox,
            label: label.into(),
            score,
        }
    }

    /// Strict ingress check. The tracker itself accepts anything; callers that
    /// want to reject malformed detector output run this first.
    pub fn validate(&self) -> Result<(), ValidationError> {
        let fields = [
            ("x", self.bbox.x),
            ("y", self.bbox.y),
            ("width", self.bbox.width),
            ("height", self.bbox.height),
        ];
        for (field, value) in fields {
            if !value.is_finite() {
                return Err(ValidationError::NonFinite { field });
            }
        }
        for (field, value) in [("width", self.bbox.width), ("height", self.bbox.height)] {
            if value < 0.0 {
                return Err(ValidationError::NegativeDimension { field, value });
            }
        }
        if !(0.0..=1.0).contains(&self.score) {
            return Err(ValidationError::ScoreOutOfRange(self.score));
        }
        Ok(())
    }
}

/// Compute the centroid distance matrix between tracks and detections.
///
/// Rows follow `track_boxes` order, columns follow `det_boxes` order.
pub fn centroid_distance(track_boxes: &[Rect], det_boxes: &[Rect]) -> Array2<f32> {
    let mut dists = Array2::zeros((track_boxes.len(), det_boxes.len()));
    for (i, t) in track_boxes.iter().enumerate() {
        for (j, d) in det_boxes.iter().enumerate() {
            dists[[i, j]] = t.centroid_distance(d);
        }
    }
    dists
}

/// Index of the first candidate strictly closer than `thresh`.
pub fn first_within(dists: ArrayView1<'_, f32>, thresh: f32) -> Option<usize> {
    dists.iter().position(|&d| d < thresh)
}

/// Index of the closest candidate strictly closer than `thresh`.
///
/// Ties go to the earliest candidate. NaN distances never match.
pub fn nearest_within(dists: ArrayView1<'_, f32>, thresh: f32) -> Option<usize> {
    let mut best: Option<(usize, f32)> = None;
    for (i, &d) in dists.iter().enumerate() {
        if d < thresh && best.is_none_or(|(_, b)| d < b) {
            best = Some((i, d));
        }
    }
    best.map(|(i, _)| i)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn test_centroid_distance_matrix_shape() {
        let tracks = [
            Rect::new(0.0, 0.0, 10.0, 10.0),
            Rect::new(100.0, 0.0, 10.0, 10.0),
        ];
        let dets = [
            Rect::new(0.0, 0.0, 10.0, 10.0),
            Rect::new(3.0, 4.0, 10.0, 10.0),
            Rect::new(100.0, 0.0, 10.0, 10.0),
        ];
        let dists = centroid_distance(&tracks, &dets);
        assert_eq!(dists.dim(), (2, 3));
        assert_eq!(dists[[0, 0]], 0.0);
        assert!((dists[[0, 1]] - 5.0).abs() < 1e-5);
        assert_eq!(dists[[1, 2]], 0.0);
        assert!((dists[[1, 0]] - 100.0).abs() < 1e-5);
    }

    #[test]
    fn test_centroid_distance_empty() {
        let dists = centroid_distance(&[], &[Rect::default()]);
        assert_eq!(dists.dim(), (0, 1));
    }

    #[test]
    fn test_first_within_takes_first_not_closest() {
        let row = array![90.0f32, 10.0, 150.0];
        assert_eq!(first_within(row.view(), 100.0), Some(0));
        assert_eq!(nearest_within(row.view(), 100.0), Some(1));
    }

    #[test]
    fn test_threshold_is_strict() {
        let row = array![100.0f32, 100.0];
        assert_eq!(first_within(row.view(), 100.0), None);
        assert_eq!(nearest_within(row.view(), 100.0), None);
    }

    #[test]
    fn test_nearest_within_tie_prefers_earliest() {
        let row = array![120.0f32, 20.0, 20.0];
        assert_eq!(nearest_within(row.view(), 100.0), Some(1));
    }

    #[test]
    fn test_nan_never_matches() {
        let row = array![f32::NAN, 50.0];
        assert_eq!(first_within(row.view(), 100.0), Some(1));
        assert_eq!(nearest_within(row.view(), 100.0), Some(1));
    }

    #[test]
    fn test_validate() {
        let ok = Detection::new(Rect::new(0.0, 0.0, 10.0, 10.0), "cat", 0.9);
        assert!(ok.validate().is_ok());

        let bad_score = Detection::new(Rect::new(0.0, 0.0, 10.0, 10.0), "cat", 1.5);
        assert_eq!(bad_score.validate(), Err(ValidationError::ScoreOutOfRange(1.5)));

        let bad_width = Detection::new(Rect::new(0.0, 0.0, -1.0, 10.0), "cat", 0.5);
        assert_eq!(
            bad_width.validate(),
            Err(ValidationError::NegativeDimension {
                field: "width",
                value: -1.0
            })
        );

        let nan_y = Detection::new(Rect::new(0.0, f32::NAN, 1.0, 1.0), "cat", 0.5);
        assert_eq!(nan_y.validate(), Err(ValidationError::NonFinite { field: "y" }));

        let nan_score = Detection::new(Rect::new(0.0, 0.0, 1.0, 1.0), "cat", f32::NAN);
        assert!(matches!(nan_score.validate(), Err(ValidationError::ScoreOutOfRange(_))));
    }

    #[test]
    fn test_detection_serde_uses_box_key() {
        let det = Detection::new(Rect::new(1.0, 2.0, 3.0, 4.0), "dog", 0.75);
        let json = serde_json::to_value(&det).unwrap();
        assert_eq!(json["box"]["width"], 3.0);
        assert_eq!(json["label"], "dog");
    }
}
