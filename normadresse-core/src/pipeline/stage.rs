//! Pipeline stages, in execution order

use crate::rules::Stage;
use std::fmt;

/// One step of the shortening pipeline.
///
/// Rule-driven steps map to a rule table [`Stage`]; the last three steps
/// use fixed token lists and carry no rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PipelineStage {
    RoadType,
    Title,
    General,
    SecondaryRoadType,
    GivenName,
    SaintExtension,
    LeadingRoadType,
    Particle,
    UppercaseArticle,
    ResidualInitial,
    LowercaseArticle,
}

impl PipelineStage {
    /// Execution order
    pub const ORDER: [PipelineStage; 11] = [
        PipelineStage::RoadType,
        PipelineStage::Title,
        PipelineStage::General,
        PipelineStage::SecondaryRoadType,
        PipelineStage::GivenName,
        PipelineStage::SaintExtension,
        PipelineStage::LeadingRoadType,
        PipelineStage::Particle,
        PipelineStage::UppercaseArticle,
        PipelineStage::ResidualInitial,
        PipelineStage::LowercaseArticle,
    ];

    /// Label used in rule documentation and logs
    pub fn label(self) -> &'static str {
        match self {
            PipelineStage::RoadType => "1",
            PipelineStage::Title => "2",
            PipelineStage::General => "4",
            PipelineStage::SecondaryRoadType => "5",
            PipelineStage::GivenName => "3",
            PipelineStage::SaintExtension => "6",
            PipelineStage::LeadingRoadType => "5bis",
            PipelineStage::Particle => "9",
            PipelineStage::UppercaseArticle => "10",
            PipelineStage::ResidualInitial => "11",
            PipelineStage::LowercaseArticle => "12",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            PipelineStage::RoadType => "road type abbreviation",
            PipelineStage::Title => "title abbreviation",
            PipelineStage::General => "general abbreviations",
            PipelineStage::SecondaryRoadType => "secondary road type abbreviation",
            PipelineStage::GivenName => "given name initials",
            PipelineStage::SaintExtension => "saint and extension abbreviation",
            PipelineStage::LeadingRoadType => "leading road type abbreviation",
            PipelineStage::Particle => "proper-noun particle protection",
            PipelineStage::UppercaseArticle => "uppercase article elision",
            PipelineStage::ResidualInitial => "residual initials",
            PipelineStage::LowercaseArticle => "lowercase article elision",
        }
    }

    /// Rule table stage this step reads rules from
    pub fn rule_stage(self) -> Option<Stage> {
        match self {
            PipelineStage::RoadType => Some(Stage::RoadType),
            PipelineStage::Title => Some(Stage::Title),
            PipelineStage::General => Some(Stage::General),
            PipelineStage::SecondaryRoadType | PipelineStage::LeadingRoadType => {
                Some(Stage::SecondaryRoadType)
            }
            PipelineStage::GivenName => Some(Stage::GivenName),
            PipelineStage::SaintExtension => Some(Stage::SaintExtension),
            PipelineStage::Particle => Some(Stage::Particle),
            PipelineStage::UppercaseArticle
            | PipelineStage::ResidualInitial
            | PipelineStage::LowercaseArticle => None,
        }
    }

    /// Whether the word tie-break selector runs after this step
    pub fn uses_selector(self) -> bool {
        !matches!(
            self,
            PipelineStage::Particle
                | PipelineStage::UppercaseArticle
                | PipelineStage::ResidualInitial
                | PipelineStage::LowercaseArticle
        )
    }
}

impl fmt::Display for PipelineStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.label(), self.description())
    }
}
