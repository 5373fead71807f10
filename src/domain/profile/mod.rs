//! Team profile and architecture inputs.
//!
//! A [`TeamProfile`] is an immutable value passed into every engine call. The
//! engine keeps no state between evaluations.

mod architecture;
mod values;

pub use architecture::ArchitectureStyle;
pub use values::{
    ExperienceLevel, RawInput, ScaleCategory, TeamSizeBucket, TimelineBucket, WorkloadType,
};

use serde::{Deserialize, Serialize};

/// Everything the engine needs to know about a team.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamProfile {
    pub team_size: TeamSizeBucket,
    pub experience: ExperienceLevel,
    pub timeline: TimelineBucket,
    pub scale: ScaleCategory,
}

impl TeamProfile {
    pub fn new(
        team_size: TeamSizeBucket,
        experience: ExperienceLevel,
        timeline: TimelineBucket,
        scale: ScaleCategory,
    ) -> Self {
        Self {
            team_size,
            experience,
            timeline,
            scale,
        }
    }

    /// Builds a profile from raw caller values, applying neutral defaults to
    /// anything missing or unrecognized.
    pub fn from_raw(
        team_size: Option<&RawInput>,
        experience: Option<&RawInput>,
        timeline: Option<&RawInput>,
        scale: Option<&RawInput>,
    ) -> Self {
        Self {
            team_size: team_size.map(TeamSizeBucket::parse_lenient).unwrap_or_default(),
            experience: experience.map(ExperienceLevel::parse_lenient).unwrap_or_default(),
            timeline: timeline.map(TimelineBucket::parse_lenient).unwrap_or_default(),
            scale: scale.map(ScaleCategory::parse_lenient).unwrap_or_default(),
        }
    }

    /// Returns a copy with a different team size.
    pub fn with_team_size(mut self, team_size: TeamSizeBucket) -> Self {
        self.team_size = team_size;
        self
    }

    /// Returns a copy with a different timeline.
    pub fn with_timeline(mut self, timeline: TimelineBucket) -> Self {
        self.timeline = timeline;
        self
    }
}
