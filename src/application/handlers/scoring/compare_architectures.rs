//! CompareArchitecturesHandler - Query handler for the full four-way ranking.

use crate::domain::profile::TeamProfile;
use crate::domain::scoring::{RankingResult, ScoringEngine};

#[derive(Debug, Clone, Default)]
pub struct CompareArchitecturesQuery {
    pub profile: TeamProfile,
}

pub type CompareArchitecturesResult = RankingResult;

pub struct CompareArchitecturesHandler {
    engine: ScoringEngine,
}

impl CompareArchitecturesHandler {
    pub fn new(engine: ScoringEngine) -> Self {
        Self { engine }
    }

    pub fn handle(&self, query: CompareArchitecturesQuery) -> CompareArchitecturesResult {
        let ranking = self.engine.rank(&query.profile);

        tracing::debug!(
            viable = ranking.viable.len(),
            complexity_tax = ranking.complexity_tax.len(),
            disqualified = ranking.disqualified.len(),
            winners = ?ranking.winners,
            "architectures ranked"
        );

        ranking
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::profile::{
        ArchitectureStyle, ExperienceLevel, ScaleCategory, TeamSizeBucket, TimelineBucket,
    };

    #[test]
    fn default_profile_has_no_winner() {
        let handler = CompareArchitecturesHandler::new(ScoringEngine::default());
        let ranking = handler.handle(CompareArchitecturesQuery::default());

        assert_eq!(ranking.len(), 4);
        assert!(ranking.viable.is_empty());
        assert!(ranking.winners.is_empty());
    }

    #[test]
    fn capable_team_gets_ranked_winners() {
        let handler = CompareArchitecturesHandler::new(ScoringEngine::default());
        let ranking = handler.handle(CompareArchitecturesQuery {
            profile: TeamProfile::new(
                TeamSizeBucket::Enterprise,
                ExperienceLevel::Expert,
                TimelineBucket::EighteenPlus,
                ScaleCategory::Utility,
            ),
        });

        assert!(!ranking.winners.is_empty());
        assert!(ranking.is_winner(ArchitectureStyle::Monolith));
        assert!(ranking
            .viable
            .iter()
            .all(|r| r.referee_score.is_some()));
    }
}
