//! Hand pose data model and landmark normalization.
//!
//! A detected hand is exactly 21 keypoints in image-normalized coordinates,
//! ordered per the fixed anatomical indexing (0 = wrist, then four joints per
//! finger). The normalizer turns a pose into the 42-value translation-invariant
//! feature vector consumed by the classifier.

use crate::defaults::{FEATURE_LEN, KEYPOINTS_PER_HAND};
use crate::error::{Result, SignscribeError};

/// One normalized (x, y) landmark position on a detected hand.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point2D {
    pub x: f32,
    pub y: f32,
}

impl Point2D {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Index of the wrist/base keypoint.
pub const WRIST: usize = 0;

/// Keypoint chains for each finger, wrist first. Shared with rendering
/// collaborators so skeleton drawing never re-derives the indexing.
pub const FINGER_CHAINS: [[usize; 5]; 5] = [
    [0, 1, 2, 3, 4],     // thumb
    [0, 5, 6, 7, 8],     // index
    [0, 9, 10, 11, 12],  // middle
    [0, 13, 14, 15, 16], // ring
    [0, 17, 18, 19, 20], // pinky
];

/// Palm edges connecting finger bases and the wrist.
pub const PALM_EDGES: [(usize, usize); 8] = [
    (0, 1),
    (0, 5),
    (0, 9),
    (0, 13),
    (0, 17),
    (5, 9),
    (9, 13),
    (13, 17),
];

/// An ordered set of exactly 21 keypoints for one detected hand.
///
/// Immutable once produced; recreated every frame by the detector collaborator.
#[derive(Debug, Clone, PartialEq)]
pub struct HandPose {
    points: [Point2D; KEYPOINTS_PER_HAND],
}

impl HandPose {
    /// Builds a pose from detector output.
    ///
    /// Fails with `InvalidKeypointCount` when the detector reports anything
    /// other than 21 points.
    pub fn new(points: Vec<Point2D>) -> Result<Self> {
        let points: [Point2D; KEYPOINTS_PER_HAND] =
            points
                .try_into()
                .map_err(|v: Vec<Point2D>| SignscribeError::InvalidKeypointCount {
                    expected: KEYPOINTS_PER_HAND,
                    actual: v.len(),
                })?;
        Ok(Self { points })
    }

    /// All 21 keypoints in anatomical order.
    pub fn points(&self) -> &[Point2D] {
        &self.points
    }

    /// Computes the translation-invariant feature vector.
    ///
    /// Each keypoint contributes `(x - min_x, y - min_y)` interleaved, where
    /// the minima are taken over this pose. Translation-invariant only — not
    /// scale- or rotation-invariant, matching how the classifier was trained.
    pub fn features(&self) -> [f32; FEATURE_LEN] {
        let mut min_x = f32::INFINITY;
        let mut min_y = f32::INFINITY;
        for p in &self.points {
            min_x = min_x.min(p.x);
            min_y = min_y.min(p.y);
        }

        let mut out = [0.0f32; FEATURE_LEN];
        for (i, p) in self.points.iter().enumerate() {
            out[2 * i] = p.x - min_x;
            out[2 * i + 1] = p.y - min_y;
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn uniform_pose(x: f32, y: f32) -> HandPose {
        HandPose::new(vec![Point2D::new(x, y); KEYPOINTS_PER_HAND]).unwrap()
    }

    /// A pose with distinct, in-range coordinates for every keypoint.
    fn spread_pose() -> HandPose {
        let points = (0..KEYPOINTS_PER_HAND)
            .map(|i| Point2D::new(0.2 + i as f32 * 0.01, 0.5 + i as f32 * 0.02))
            .collect();
        HandPose::new(points).unwrap()
    }

    #[test]
    fn test_pose_rejects_short_point_list() {
        let result = HandPose::new(vec![Point2D::default(); 20]);
        match result {
            Err(SignscribeError::InvalidKeypointCount { expected, actual }) => {
                assert_eq!(expected, 21);
                assert_eq!(actual, 20);
            }
            other => panic!("Expected InvalidKeypointCount, got {:?}", other),
        }
    }

    #[test]
    fn test_pose_rejects_long_point_list() {
        let result = HandPose::new(vec![Point2D::default(); 22]);
        assert!(matches!(
            result,
            Err(SignscribeError::InvalidKeypointCount { actual: 22, .. })
        ));
    }

    #[test]
    fn test_features_length_is_42() {
        assert_eq!(spread_pose().features().len(), 42);
    }

    #[test]
    fn test_features_translated_to_origin() {
        let features = spread_pose().features();
        let min_x = features
            .iter()
            .step_by(2)
            .cloned()
            .fold(f32::INFINITY, f32::min);
        let min_y = features
            .iter()
            .skip(1)
            .step_by(2)
            .cloned()
            .fold(f32::INFINITY, f32::min);
        assert_eq!(min_x, 0.0, "minimum output x must be exactly 0");
        assert_eq!(min_y, 0.0, "minimum output y must be exactly 0");
    }

    #[test]
    fn test_features_translation_invariant() {
        let base = spread_pose();
        let shifted = HandPose::new(
            base.points()
                .iter()
                .map(|p| Point2D::new(p.x + 0.1, p.y + 0.25))
                .collect(),
        )
        .unwrap();

        let a = base.features();
        let b = shifted.features();
        for i in 0..FEATURE_LEN {
            assert!(
                (a[i] - b[i]).abs() < 1e-6,
                "feature {} differs after translation: {} vs {}",
                i,
                a[i],
                b[i]
            );
        }
    }

    #[test]
    fn test_features_interleaved_order() {
        let mut points = vec![Point2D::new(0.5, 0.5); KEYPOINTS_PER_HAND];
        points[0] = Point2D::new(0.1, 0.2); // wrist is the minimum in both axes
        points[1] = Point2D::new(0.4, 0.6);
        let pose = HandPose::new(points).unwrap();

        let features = pose.features();
        assert_eq!(features[0], 0.0);
        assert_eq!(features[1], 0.0);
        assert!((features[2] - 0.3).abs() < 1e-6);
        assert!((features[3] - 0.4).abs() < 1e-6);
    }

    #[test]
    fn test_degenerate_pose_all_zero_features() {
        let features = uniform_pose(0.7, 0.3).features();
        assert!(features.iter().all(|&v| v == 0.0));
    }

    #[test]
    fn test_finger_chains_cover_all_keypoints() {
        let mut seen = [false; KEYPOINTS_PER_HAND];
        for chain in &FINGER_CHAINS {
            for &idx in chain {
                seen[idx] = true;
            }
        }
        assert!(seen.iter().all(|&s| s), "every keypoint appears in a chain");
    }

    #[test]
    fn test_palm_edges_in_range() {
        for &(a, b) in &PALM_EDGES {
            assert!(a < KEYPOINTS_PER_HAND);
            assert!(b < KEYPOINTS_PER_HAND);
        }
    }
}
