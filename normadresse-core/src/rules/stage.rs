//! Rule table stage identifiers

use crate::error::RuleError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Rule group a rule belongs to.
///
/// The discriminants are the identifiers used in rule files. The pipeline
/// does not run the groups in numeric order; see
/// [`PipelineStage`](crate::pipeline::PipelineStage).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub enum Stage {
    /// Road types (AVENUE, BOULEVARD, ...)
    RoadType = 1,
    /// Military, religious and civil titles
    Title = 2,
    /// Given names, abbreviated to an initial
    GivenName = 3,
    /// General vocabulary (RESIDENCE, BATIMENT, ordinals, ...)
    General = 4,
    /// Secondary road types, also used for the leading road type
    SecondaryRoadType = 5,
    /// SAINT/SAINTE and PROLONGE/INFERIEUR style extensions
    SaintExtension = 6,
    /// Proper-noun particles protected from article elision
    Particle = 9,
}

impl Stage {
    /// Every stage, in identifier order
    pub const ALL: [Stage; 7] = [
        Stage::RoadType,
        Stage::Title,
        Stage::GivenName,
        Stage::General,
        Stage::SecondaryRoadType,
        Stage::SaintExtension,
        Stage::Particle,
    ];

    /// Identifier used in rule files
    pub fn id(self) -> i64 {
        self as i64
    }

    /// Human-readable name
    pub fn name(self) -> &'static str {
        match self {
            Stage::RoadType => "road type",
            Stage::Title => "title",
            Stage::GivenName => "given name",
            Stage::General => "general",
            Stage::SecondaryRoadType => "secondary road type",
            Stage::SaintExtension => "saint/extension",
            Stage::Particle => "proper-noun particle",
        }
    }
}

impl TryFrom<i64> for Stage {
    type Error = RuleError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Stage::ALL
            .into_iter()
            .find(|stage| stage.id() == value)
            .ok_or(RuleError::InvalidStage(value))
    }
}

impl From<Stage> for i64 {
    fn from(stage: Stage) -> Self {
        stage.id()
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_try_from_known_ids() {
        assert_eq!(Stage::try_from(1).unwrap(), Stage::RoadType);
        assert_eq!(Stage::try_from(6).unwrap(), Stage::SaintExtension);
        assert_eq!(Stage::try_from(9).unwrap(), Stage::Particle);
    }

    #[test]
    fn test_try_from_rejects_pipeline_only_ids() {
        for id in [0, 7, 8, 10, 11, 12, -1] {
            assert!(matches!(
                Stage::try_from(id),
                Err(RuleError::InvalidStage(v)) if v == id
            ));
        }
    }

    #[test]
    fn test_ordering_follows_ids() {
        let mut stages = vec![Stage::Particle, Stage::RoadType, Stage::General];
        stages.sort();
        assert_eq!(
            stages,
            vec![Stage::RoadType, Stage::General, Stage::Particle]
        );
    }
}
