//! Configuration for the itinerary service.

use std::fmt;
use std::str::FromStr;

/// How the service chooses where to start assembling an itinerary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StartSelection {
    /// Derive the start from departure/arrival balance in one O(n) pass.
    /// Falls back to [`StartSelection::LongestPath`] when no Eulerian
    /// trail can exist.
    #[default]
    DegreeBalance,

    /// Try every origin, rebuilding the graph each time, and keep the
    /// longest itinerary. Only suitable for small inputs.
    LongestPath,
}

/// Which endpoint detector answers start/end queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DetectorKind {
    /// Single-threaded O(n) detection.
    #[default]
    Sequential,

    /// One tokio task per segment, reduced after all tasks join.
    Concurrent,
}

/// Error returned when a setting value is not recognised.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown {setting} '{value}' (expected one of: {expected})")]
pub struct UnknownSetting {
    setting: &'static str,
    value: String,
    expected: &'static str,
}

impl FromStr for StartSelection {
    type Err = UnknownSetting;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "degree" | "degree-balance" => Ok(Self::DegreeBalance),
            "longest" | "longest-path" => Ok(Self::LongestPath),
            _ => Err(UnknownSetting {
                setting: "start selection",
                value: s.to_string(),
                expected: "degree, longest",
            }),
        }
    }
}

impl fmt::Display for StartSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DegreeBalance => f.write_str("degree"),
            Self::LongestPath => f.write_str("longest"),
        }
    }
}

impl FromStr for DetectorKind {
    type Err = UnknownSetting;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sequential" => Ok(Self::Sequential),
            "concurrent" => Ok(Self::Concurrent),
            _ => Err(UnknownSetting {
                setting: "endpoint detector",
                value: s.to_string(),
                expected: "sequential, concurrent",
            }),
        }
    }
}

impl fmt::Display for DetectorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Sequential => f.write_str("sequential"),
            Self::Concurrent => f.write_str("concurrent"),
        }
    }
}

/// Default for [`ItineraryConfig::max_fallback_segments`].
pub const DEFAULT_MAX_FALLBACK_SEGMENTS: usize = 500;

/// Configuration parameters for itinerary reconstruction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItineraryConfig {
    /// Strategy for picking the assembly start.
    pub start_selection: StartSelection,

    /// Detector used for start/end queries.
    pub detector: DetectorKind,

    /// Largest input for which unbalanced segments fall back to the
    /// longest-path search. Above this, assembly starts from the first
    /// departure-only airport instead.
    pub max_fallback_segments: usize,
}

impl ItineraryConfig {
    /// Create a new configuration with the given parameters.
    pub fn new(start_selection: StartSelection, detector: DetectorKind) -> Self {
        Self {
            start_selection,
            detector,
            max_fallback_segments: DEFAULT_MAX_FALLBACK_SEGMENTS,
        }
    }

    /// Override the longest-path fallback limit.
    pub fn with_max_fallback_segments(mut self, max_fallback_segments: usize) -> Self {
        self.max_fallback_segments = max_fallback_segments;
        self
    }
}

impl Default for ItineraryConfig {
    fn default() -> Self {
        Self::new(StartSelection::default(), DetectorKind::default())
    }
}
