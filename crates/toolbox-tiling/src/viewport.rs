use serde::{Deserialize, Serialize};

/// Presentation width class. Narrow viewports show a single pane.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewportMode {
    #[default]
    Wide,
    Narrow,
}

impl ViewportMode {
    /// Narrow at or below `breakpoint` logical pixels.
    pub fn classify(width: f64, breakpoint: f64) -> Self {
        if width <= breakpoint {
            Self::Narrow
        } else {
            Self::Wide
        }
    }

    pub fn is_narrow(self) -> bool {
        self == Self::Narrow
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn breakpoint_is_inclusive() {
        assert_eq!(ViewportMode::classify(768.0, 768.0), ViewportMode::Narrow);
        assert_eq!(ViewportMode::classify(768.5, 768.0), ViewportMode::Wide);
        assert_eq!(ViewportMode::classify(320.0, 768.0), ViewportMode::Narrow);
        assert_eq!(ViewportMode::classify(1920.0, 768.0), ViewportMode::Wide);
    }

    #[test]
    fn default_is_wide() {
        assert!(!ViewportMode::default().is_narrow());
    }
}
