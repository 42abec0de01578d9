//! The Session Record: every answer collected during one run.

use serde::{Deserialize, Serialize};

use crate::state::Step;

/// Fixed facts about the existing React client, recorded by step 1.
pub const FRONTEND_FRAMEWORK: &str = "React + Vite";
pub const FRONTEND_STYLING: &str = "Tailwind CSS";

/// Accumulated answers. Every field starts `null` and is written only by
/// the step that owns it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionRecord {
    pub frontend_tech_stack: Option<FrontendStack>,
    pub backend_framework: Option<String>,
    pub backend_framework_experience: Option<String>,
    pub llm_requirements: Option<LlmRequirements>,
    pub data_format: Option<DataFormat>,
    pub api_design: Option<ApiDesign>,
    pub auth_requirements: Option<AuthRequirements>,
    pub deployment_target: Option<DeploymentTarget>,
    pub communication_method: Option<CommunicationMethod>,
    /// Number of the next step to run; `9` once all steps are done.
    #[serde(default = "first_step")]
    pub current_step: u8,
}

fn first_step() -> u8 {
    Step::FIRST.number()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrontendStack {
    pub framework: String,
    pub styling: String,
    pub familiarity: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LlmRequirements {
    pub llm_choice: String,
    pub vector_db: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataFormat {
    pub source: String,
    pub complexity: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiDesign {
    pub style: String,
    pub realtime: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthRequirements {
    pub auth_type: String,
    pub privacy_level: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeploymentTarget {
    pub platform: String,
    pub scale: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommunicationMethod {
    pub client: String,
    pub error_handling: String,
}

impl Default for SessionRecord {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionRecord {
    pub fn new() -> Self {
        Self {
            frontend_tech_stack: None,
            backend_framework: None,
            backend_framework_experience: None,
            llm_requirements: None,
            data_format: None,
            api_design: None,
            auth_requirements: None,
            deployment_target: None,
            communication_method: None,
            current_step: first_step(),
        }
    }

    /// The step `current_step` points at, or `None` once every step ran
    /// (or the value is out of range).
    pub fn next_step(&self) -> Option<Step> {
        Step::from_number(self.current_step)
    }

    pub fn is_complete(&self) -> bool {
        self.current_step > Step::LAST.number()
    }

    /// Whether every field owned by `step` has a value.
    pub fn is_answered(&self, step: Step) -> bool {
        match step {
            Step::FrontendAnalysis => self.frontend_tech_stack.is_some(),
            Step::BackendFramework => {
                self.backend_framework.is_some() && self.backend_framework_experience.is_some()
            },
            Step::LlmIntegration => self.llm_requirements.is_some(),
            Step::DataStructure => self.data_format.is_some(),
            Step::ApiDesign => self.api_design.is_some(),
            Step::AuthSecurity => self.auth_requirements.is_some(),
            Step::Deployment => self.deployment_target.is_some(),
            Step::Communication => self.communication_method.is_some(),
        }
    }

    /// Whether no field owned by `step` has a value.
    pub fn is_unanswered(&self, step: Step) -> bool {
        match step {
            Step::BackendFramework => {
                self.backend_framework.is_none() && self.backend_framework_experience.is_none()
            },
            other => !self.is_answered(other),
        }
    }
}
