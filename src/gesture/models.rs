use super::Gesture;
use super::Prediction;
use super::Rejection;
use crate::Feature;
use crate::forest::Forest;
use crate::forest::ForestError;
use std::path::Path;

/// The three classifiers the service dispatches to.
/// Loaded once at startup and only read afterwards.
#[derive(Debug, Clone)]
pub struct Models {
    one: Forest,
    two: Forest,
    motion: Forest,
}

impl Models {
    pub fn new(one: Forest, two: Forest, motion: Forest) -> Self {
        Self { one, two, motion }
    }

    /// Loads every artifact from `dir` under its fixed file name.
    pub fn load(dir: &Path) -> Result<Self, ForestError> {
        let load = |gesture: Gesture| {
            Forest::load(&dir.join(gesture.artifact())).inspect(|forest| {
                if forest.features() != gesture.features() {
                    log::warn!(
                        "{} forest expects {} features, clients send {}",
                        gesture,
                        forest.features(),
                        gesture.features()
                    );
                }
            })
        };
        Ok(Self::new(
            load(Gesture::OneHandStatic)?,
            load(Gesture::TwoHandStatic)?,
            load(Gesture::OneHandMotion)?,
        ))
    }

    pub fn get(&self, gesture: Gesture) -> &Forest {
        match gesture {
            Gesture::OneHandStatic => &self.one,
            Gesture::TwoHandStatic => &self.two,
            Gesture::OneHandMotion => &self.motion,
        }
    }

    /// Scores one request.
    ///
    /// Absent or empty landmarks and unsupported hand counts produce the null
    /// prediction. Otherwise the landmarks are one row for the selected
    /// forest; a length that does not match the forest, or a non-finite
    /// value, is a [`Rejection`]. Confidence is the winning class probability.
    pub fn dispatch(
        &self,
        landmarks: Option<&[f64]>,
        hands: i64,
        motion: bool,
    ) -> Result<Prediction, Rejection> {
        let landmarks = match landmarks {
            Some(landmarks) if !landmarks.is_empty() => landmarks,
            _ => return Ok(Prediction::null()),
        };
        let gesture = match Gesture::select(hands, motion) {
            Some(gesture) => gesture,
            None => return Ok(Prediction::null()),
        };
        let forest = self.get(gesture);
        let row = Self::row(landmarks, forest.features())?;
        let (label, confidence) = forest
            .best(&row)
            .map_err(|_| Rejection::Shape {
                expected: forest.features(),
                actual: row.len(),
            })?;
        log::debug!("{} -> {} ({:.3})", gesture, label, confidence);
        Ok(Prediction::new(label, confidence))
    }

    /// Narrows the wire values to one feature row of the expected width.
    fn row(landmarks: &[f64], expected: usize) -> Result<Vec<Feature>, Rejection> {
        if landmarks.len() != expected {
            return Err(Rejection::Shape {
                expected,
                actual: landmarks.len(),
            });
        }
        landmarks
            .iter()
            .enumerate()
            .map(|(index, &x)| match x as Feature {
                x if x.is_finite() => Ok(x),
                _ => Err(Rejection::NonFinite { index }),
            })
            .collect()
    }

    /// Short per-classifier summary for health checks and startup logs.
    pub fn summary(&self) -> Vec<String> {
        Gesture::ALL
            .iter()
            .map(|&g| {
                let forest = self.get(g);
                format!(
                    "{}: {} trees, {} features, {} classes",
                    g,
                    forest.trees().len(),
                    forest.features(),
                    forest.classes().len()
                )
            })
            .collect()
    }
}

#[cfg(test)]
impl Models {
    /// Small forests with the production feature widths. Each recognizes two
    /// labels: rows of 0.1 and rows of 0.9.
    pub(crate) fn fixture() -> Self {
        use crate::dataset::Samples;
        use crate::forest::Params;
        let forest = |gesture: Gesture, low: &str, high: &str| {
            let samples = (0..20)
                .map(|i| {
                    let (label, x) = if i % 2 == 0 { (low, 0.1) } else { (high, 0.9) };
                    (label.to_string(), vec![x; gesture.features()])
                })
                .collect::<Samples>();
            Forest::fit(&samples, Params::new(5, 42)).expect("fixture forest")
        };
        Self::new(
            forest(Gesture::OneHandStatic, "A", "B"),
            forest(Gesture::TwoHandStatic, "C", "D"),
            forest(Gesture::OneHandMotion, "hello", "thanks"),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::FEATURES_PER_HAND;
    use crate::MOTION_FEATURES;

    #[test]
    fn empty_or_absent_landmarks_are_null() {
        let models = Models::fixture();
        for hands in [0, 1, 2, 3] {
            for motion in [false, true] {
                assert_eq!(models.dispatch(None, hands, motion), Ok(Prediction::null()));
                assert_eq!(models.dispatch(Some(&[][..]), hands, motion), Ok(Prediction::null()));
            }
        }
    }

    #[test]
    fn unsupported_hand_count_is_null() {
        let models = Models::fixture();
        let landmarks = vec![0.1; FEATURES_PER_HAND];
        for hands in [0, 3, -1] {
            assert_eq!(models.dispatch(Some(landmarks.as_slice()), hands, false), Ok(Prediction::null()));
        }
    }

    #[test]
    fn one_hand_static() {
        let models = Models::fixture();
        let landmarks = vec![0.1; FEATURES_PER_HAND];
        let prediction = models.dispatch(Some(landmarks.as_slice()), 1, false).expect("scored");
        assert_eq!(prediction.label.as_deref(), Some("A"));
        assert!(prediction.confidence > 0.0 && prediction.confidence <= 1.0);
    }

    #[test]
    fn one_hand_motion() {
        let models = Models::fixture();
        let landmarks = vec![0.9; MOTION_FEATURES];
        let prediction = models.dispatch(Some(landmarks.as_slice()), 1, true).expect("scored");
        assert_eq!(prediction.label.as_deref(), Some("thanks"));
    }

    #[test]
    fn two_hands_ignore_motion_flag() {
        let models = Models::fixture();
        let landmarks = vec![0.9; 2 * FEATURES_PER_HAND];
        for motion in [false, true] {
            let prediction = models.dispatch(Some(landmarks.as_slice()), 2, motion).expect("scored");
            assert_eq!(prediction.label.as_deref(), Some("D"));
        }
    }

    #[test]
    fn confidence_matches_selected_forest() {
        let models = Models::fixture();
        let landmarks = vec![0.1; FEATURES_PER_HAND];
        let row = vec![0.1_f32; FEATURES_PER_HAND];
        let expected = models
            .get(Gesture::OneHandStatic)
            .predict_proba(&row)
            .expect("proba")
            .into_iter()
            .fold(f32::MIN, f32::max);
        let prediction = models.dispatch(Some(landmarks.as_slice()), 1, false).expect("scored");
        assert_eq!(prediction.confidence, expected);
    }

    #[test]
    fn shape_mismatch_is_rejected() {
        let models = Models::fixture();
        let static_row = vec![0.1; FEATURES_PER_HAND];
        assert_eq!(
            models.dispatch(Some(static_row.as_slice()), 1, true),
            Err(Rejection::Shape {
                expected: MOTION_FEATURES,
                actual: FEATURES_PER_HAND
            })
        );
        assert_eq!(
            models.dispatch(Some(static_row.as_slice()), 2, false),
            Err(Rejection::Shape {
                expected: 2 * FEATURES_PER_HAND,
                actual: FEATURES_PER_HAND
            })
        );
    }

    #[test]
    fn overflowing_value_is_rejected() {
        let models = Models::fixture();
        let mut landmarks = vec![0.1; FEATURES_PER_HAND];
        landmarks[7] = f64::MAX;
        assert_eq!(
            models.dispatch(Some(landmarks.as_slice()), 1, false),
            Err(Rejection::NonFinite { index: 7 })
        );
    }
}
