use crate::*;

/// The three classifiers, keyed by hand count and motion flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Gesture {
    OneHandStatic,
    TwoHandStatic,
    OneHandMotion,
}

impl Gesture {
    pub const ALL: [Self; 3] = [Self::OneHandStatic, Self::TwoHandStatic, Self::OneHandMotion];

    /// Selection rule, first match wins:
    /// one hand in motion, then one hand, then two hands. Any other hand
    /// count has no classifier. The motion flag is ignored for two hands.
    pub fn select(hands: i64, motion: bool) -> Option<Self> {
        match (hands, motion) {
            (1, true) => Some(Self::OneHandMotion),
            (1, false) => Some(Self::OneHandStatic),
            (2, _) => Some(Self::TwoHandStatic),
            _ => None,
        }
    }

    pub fn hands(&self) -> usize {
        match self {
            Self::OneHandStatic | Self::OneHandMotion => 1,
            Self::TwoHandStatic => 2,
        }
    }

    pub fn is_motion(&self) -> bool {
        matches!(self, Self::OneHandMotion)
    }

    /// Feature vector length the classifier is trained on.
    pub fn features(&self) -> usize {
        match self {
            Self::OneHandStatic => FEATURES_PER_HAND,
            Self::TwoHandStatic => 2 * FEATURES_PER_HAND,
            Self::OneHandMotion => MOTION_FEATURES,
        }
    }

    pub fn trees(&self) -> usize {
        match self {
            Self::OneHandStatic => TREES_STATIC_1HAND,
            Self::TwoHandStatic => TREES_STATIC_2HAND,
            Self::OneHandMotion => TREES_MOTION_1HAND,
        }
    }

    pub fn dataset(&self) -> &'static str {
        match self {
            Self::OneHandStatic => DATASET_STATIC_1HAND,
            Self::TwoHandStatic => DATASET_STATIC_2HAND,
            Self::OneHandMotion => DATASET_MOTION_1HAND,
        }
    }

    pub fn artifact(&self) -> &'static str {
        match self {
            Self::OneHandStatic => ARTIFACT_STATIC_1HAND,
            Self::TwoHandStatic => ARTIFACT_STATIC_2HAND,
            Self::OneHandMotion => ARTIFACT_MOTION_1HAND,
        }
    }
}

impl std::fmt::Display for Gesture {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let kind = if self.is_motion() { "motion" } else { "static" };
        write!(f, "{} {}-hand", kind, self.hands())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selection_order() {
        assert_eq!(Gesture::select(1, true), Some(Gesture::OneHandMotion));
        assert_eq!(Gesture::select(1, false), Some(Gesture::OneHandStatic));
        assert_eq!(Gesture::select(2, false), Some(Gesture::TwoHandStatic));
        assert_eq!(Gesture::select(2, true), Some(Gesture::TwoHandStatic));
    }

    #[test]
    fn unsupported_hand_counts() {
        for hands in [-1, 0, 3, 4, i64::MAX] {
            assert_eq!(Gesture::select(hands, false), None);
            assert_eq!(Gesture::select(hands, true), None);
        }
    }

    #[test]
    fn feature_widths() {
        assert_eq!(Gesture::OneHandStatic.features(), 42);
        assert_eq!(Gesture::TwoHandStatic.features(), 84);
        assert_eq!(Gesture::OneHandMotion.features(), 1260);
    }

    #[test]
    fn display_names() {
        assert_eq!(Gesture::OneHandStatic.to_string(), "static 1-hand");
        assert_eq!(Gesture::TwoHandStatic.to_string(), "static 2-hand");
        assert_eq!(Gesture::OneHandMotion.to_string(), "motion 1-hand");
    }

    #[test]
    fn widths_follow_hand_count() {
        for gesture in Gesture::ALL {
            let frames = if gesture.is_motion() { MOTION_WINDOW } else { 1 };
            assert_eq!(gesture.features(), gesture.hands() * frames * FEATURES_PER_HAND);
        }
    }
}
