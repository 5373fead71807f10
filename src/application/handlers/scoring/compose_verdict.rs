//! ComposeVerdictHandler - Query handler for the verdict on a user's choice.

use crate::domain::advisory::{RecommendationComposer, Verdict};
use crate::domain::profile::{ArchitectureStyle, TeamProfile};

#[derive(Debug, Clone, Default)]
pub struct ComposeVerdictQuery {
    pub profile: TeamProfile,
    pub architecture: ArchitectureStyle,
}

pub type ComposeVerdictResult = Verdict;

pub struct ComposeVerdictHandler {
    composer: RecommendationComposer,
}

impl ComposeVerdictHandler {
    pub fn new(composer: RecommendationComposer) -> Self {
        Self { composer }
    }

    pub fn handle(&self, query: ComposeVerdictQuery) -> ComposeVerdictResult {
        self.composer.compose(&query.profile, query.architecture)
    }
}
