//! Pure state machine for the planning wizard. No I/O.

/// Steps in the planning wizard, in the only order they can run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Step {
    FrontendAnalysis,
    BackendFramework,
    LlmIntegration,
    DataStructure,
    ApiDesign,
    AuthSecurity,
    Deployment,
    Communication,
}

impl Step {
    pub const ALL: [Step; 8] = [
        Step::FrontendAnalysis,
        Step::BackendFramework,
        Step::LlmIntegration,
        Step::DataStructure,
        Step::ApiDesign,
        Step::AuthSecurity,
        Step::Deployment,
        Step::Communication,
    ];
    pub const FIRST: Step = Step::FrontendAnalysis;
    pub const LAST: Step = Step::Communication;

    /// 1-based position.
    pub fn number(self) -> u8 {
        self as u8 + 1
    }

    pub fn from_number(number: u8) -> Option<Self> {
        Self::ALL.get(usize::from(number).checked_sub(1)?).copied()
    }

    pub fn next(self) -> Option<Self> {
        Self::from_number(self.number() + 1)
    }

    pub fn is_last(self) -> bool {
        self == Self::LAST
    }

    pub fn title(self) -> &'static str {
        match self {
            Self::FrontendAnalysis => "Frontend Analysis",
            Self::BackendFramework => "Backend Framework Selection",
            Self::LlmIntegration => "LLM and RAG Pipeline Planning",
            Self::DataStructure => "Insurance Data Structure",
            Self::ApiDesign => "API Design",
            Self::AuthSecurity => "Authentication & Security",
            Self::Deployment => "Deployment & Scalability",
            Self::Communication => "Frontend-Backend Communication",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Self::FrontendAnalysis => "🔍",
            Self::BackendFramework => "🔧",
            Self::LlmIntegration => "🤖",
            Self::DataStructure => "📊",
            Self::ApiDesign => "🔌",
            Self::AuthSecurity => "🔐",
            Self::Deployment => "🚀",
            Self::Communication => "🔄",
        }
    }
}

impl std::fmt::Display for Step {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.number())
    }
}

/// Where a run is. `Saved` is terminal and reachable from any step;
/// `PlanGenerated` only after the last step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WizardPhase {
    NotStarted,
    Running(Step),
    PlanGenerated,
    Saved,
}

impl WizardPhase {
    /// Phase for a run starting at `current_step` (a resumed record may
    /// already be past the last step).
    pub fn starting_at(current_step: u8) -> Self {
        match Step::from_number(current_step) {
            Some(step) => Self::Running(step),
            None => Self::PlanGenerated,
        }
    }

    /// Move on after the current phase finished normally.
    pub fn advance(self) -> Self {
        match self {
            Self::NotStarted => Self::Running(Step::FIRST),
            Self::Running(step) => step.next().map_or(Self::PlanGenerated, Self::Running),
            Self::PlanGenerated | Self::Saved => Self::Saved,
        }
    }
}
