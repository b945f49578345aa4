//! Trait for object detection inference backends.

use crate::tracker::Detection;

/// Trait for object detection inference backends.
///
/// Implement this trait to feed any detection model into the tracker.
///
/// # Example
///
/// ```
/// use centroid_track::{Detection, DetectionSource};
///
/// struct MyDetector;
///
/// impl DetectionSource for MyDetector {
///     type Error = std::io::Error;
///
///     fn detect(&mut self, _input: &[u8], _width: u32, _height: u32) -> Result<Vec<Detection>, Self::Error> {
///         Ok(vec![])
///     }
/// }
/// ```
pub trait DetectionSource {
    /// Error type for detection failures.
    type Error;

    /// Run inference on raw image data and return detections.
    ///
    /// # Arguments
    /// * `input` - Raw image bytes (format depends on implementation)
    /// * `width` - Image width in pixels
    /// * `height` - Image height in pixels
    fn detect(
        &mut self,
        input: &[u8],
        width: u32,
        height: u32,
    ) -> Result<Vec<Detection>, Self::Error>;
}

/// Helper trait for converting model-specific outputs to `Detection`.
pub trait IntoDetections {
    fn into_detections(self) -> Vec<Detection>;
}

impl IntoDetections for Vec<Detection> {
    fn into_detections(self) -> Vec<Detection> {
        self
    }
}

/// `(class, score, [x, y, width, height])` tuples, the shape most
/// single-stage detectors hand back.
impl<S: Into<String>> IntoDetections for Vec<(S, f32, [f32; 4])> {
    fn into_detections(self) -> Vec<Detection> {
        self.into_iter()
            .map(|(label, score, [x, y, w, h])| {
                Detection::new(crate::tracker::Rect::new(x, y, w, h), label, score)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tracker::Rect;

    #[test]
    fn test_tuples_into_detections() {
        let dets = vec![("cat", 0.9, [1.0, 2.0, 3.0, 4.0])].into_detections();
        assert_eq!(dets.len(), 1);
        assert_eq!(dets[0].label, "cat");
        assert_eq!(dets[0].bbox, Rect::new(1.0, 2.0, 3.0, 4.0));
    }
}
