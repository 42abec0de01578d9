//! The eight step operations. Each asks its questions, records the answers
//! into the fields it owns, and prints advice for the typed choices.

use std::io::Write;

use tracing::debug;

use crate::{
    advice::{self, write_bullets},
    choice::{
        ApiStyle, AuthType, Complexity, DataSource, ErrorHandling, Experience, Familiarity,
        Framework, HttpClient, LlmChoice, Platform, PrivacyLevel, Realtime, Scale, VectorDb,
    },
    input::LineSource,
    prompt::{Halt, Prompter},
    record::{
        ApiDesign, AuthRequirements, CommunicationMethod, DataFormat, DeploymentTarget,
        FRONTEND_FRAMEWORK, FRONTEND_STYLING, FrontendStack, LlmRequirements, SessionRecord,
    },
    state::Step,
};

/// Run one step against `record`.
pub async fn run_step<S: LineSource, W: Write>(
    step: Step,
    prompter: &mut Prompter<S, W>,
    record: &mut SessionRecord,
    show_advice: bool,
) -> Result<(), Halt> {
    let out = prompter.out();
    writeln!(out, "\n{} STEP {}: {}", step.icon(), step.number(), step.title())?;
    writeln!(out, "{}", lead_in(step))?;

    let mut ctx = StepContext {
        prompter,
        record,
        show_advice,
    };
    match step {
        Step::FrontendAnalysis => ctx.frontend_analysis().await,
        Step::BackendFramework => ctx.backend_framework().await,
        Step::LlmIntegration => ctx.llm_integration().await,
        Step::DataStructure => ctx.data_structure().await,
        Step::ApiDesign => ctx.api_design().await,
        Step::AuthSecurity => ctx.auth_security().await,
        Step::Deployment => ctx.deployment().await,
        Step::Communication => ctx.communication().await,
    }
}

fn lead_in(step: Step) -> &'static str {
    match step {
        Step::FrontendAnalysis => "Let's understand your current frontend setup.",
        Step::BackendFramework => "Let's choose the best backend framework for your needs.",
        Step::LlmIntegration => "Let's design your Language Model integration.",
        Step::DataStructure => "Let's design your insurance data model.",
        Step::ApiDesign => "Let's design your API endpoints.",
        Step::AuthSecurity => "Let's secure your application.",
        Step::Deployment => "Let's plan your deployment strategy.",
        Step::Communication => "Let's ensure smooth integration with your React frontend.",
    }
}

struct StepContext<'a, S, W> {
    prompter: &'a mut Prompter<S, W>,
    record: &'a mut SessionRecord,
    show_advice: bool,
}

impl<S: LineSource, W: Write> StepContext<'_, S, W> {
    async fn frontend_analysis(&mut self) -> Result<(), Halt> {
        let out = self.prompter.out();
        writeln!(out, "\n💡 I can see you have a React frontend with:")?;
        write_bullets(out, "  ", advice::FRONTEND_STACK)?;

        let familiarity = self.prompter.ask_choice::<Familiarity>().await?;
        self.record.frontend_tech_stack = Some(FrontendStack {
            framework: FRONTEND_FRAMEWORK.to_string(),
            styling: FRONTEND_STYLING.to_string(),
            familiarity: familiarity.into_string(),
        });

        let out = self.prompter.out();
        writeln!(out, "\n📊 Current Frontend Integration Points:")?;
        write_bullets(out, "  ", advice::FRONTEND_INTEGRATION_POINTS)?;
        Ok(())
    }

    async fn backend_framework(&mut self) -> Result<(), Halt> {
        let framework = self.prompter.ask_choice::<Framework>().await?;
        let chosen = framework.listed();
        self.record.backend_framework = Some(framework.into_string());

        if self.show_advice
            && let Some(chosen) = chosen
        {
            let out = self.prompter.out();
            writeln!(out, "\n✅ Great choice! {} benefits:", chosen.name())?;
            for benefit in advice::framework_benefits(chosen) {
                writeln!(out, "   {benefit}")?;
            }
        }

        let experience = self.prompter.ask_choice::<Experience>().await?;
        self.record.backend_framework_experience = Some(experience.into_string());
        Ok(())
    }

    async fn llm_integration(&mut self) -> Result<(), Halt> {
        let out = self.prompter.out();
        writeln!(out, "\n💡 RAG (Retrieval-Augmented Generation) combines:")?;
        write_bullets(out, "  ", advice::RAG_CONCEPT)?;

        let llm = self.prompter.ask_choice::<LlmChoice>().await?;
        let vector_db = self.prompter.ask_choice::<VectorDb>().await?;
        self.record.llm_requirements = Some(LlmRequirements {
            llm_choice: llm.into_string(),
            vector_db: vector_db.into_string(),
        });

        if self.show_advice {
            let out = self.prompter.out();
            writeln!(out, "\n🔧 RAG Implementation Overview:")?;
            for (i, (phase, items)) in advice::RAG_IMPLEMENTATION.iter().enumerate() {
                let sep = if i == 0 { "" } else { "\n" };
                writeln!(out, "{sep}{}. **{phase}**:", i + 1)?;
                write_bullets(out, "   ", items)?;
            }
        }
        Ok(())
    }

    async fn data_structure(&mut self) -> Result<(), Halt> {
        let out = self.prompter.out();
        writeln!(out, "\n💡 Your system needs to handle:")?;
        write_bullets(out, "  ", advice::DATA_NEEDS)?;

        let source = self.prompter.ask_choice::<DataSource>().await?;
        let complexity = self.prompter.ask_choice::<Complexity>().await?;
        let level = complexity.listed();
        self.record.data_format = Some(DataFormat {
            source: source.into_string(),
            complexity: complexity.into_string(),
        });

        if self.show_advice {
            match level {
                Some(level) => {
                    let out = self.prompter.out();
                    writeln!(out, "\n📊 Example Data Structure ({}):", level.name())?;
                    writeln!(out, "{}", advice::data_example(level))?;
                },
                None => debug!("custom data complexity, skipping example payload"),
            }
        }
        Ok(())
    }

    async fn api_design(&mut self) -> Result<(), Halt> {
        let out = self.prompter.out();
        writeln!(out, "\n💡 Based on your frontend, we need these APIs:")?;
        write_bullets(out, "  ", advice::API_ENDPOINTS)?;

        let style = self.prompter.ask_choice::<ApiStyle>().await?;
        let realtime = self.prompter.ask_choice::<Realtime>().await?;
        self.record.api_design = Some(ApiDesign {
            style: style.into_string(),
            realtime: realtime.into_string(),
        });

        if self.show_advice {
            let out = self.prompter.out();
            writeln!(out, "\n🔌 API Endpoint Examples:")?;
            writeln!(out, "{}", advice::API_EXAMPLE)?;
        }
        Ok(())
    }

    async fn auth_security(&mut self) -> Result<(), Halt> {
        let auth = self.prompter.ask_choice::<AuthType>().await?;
        let privacy = self.prompter.ask_choice::<PrivacyLevel>().await?;
        let level = privacy.listed();
        let privacy_text = privacy.into_string();

        if self.show_advice {
            let out = self.prompter.out();
            writeln!(out, "\n🔐 Security Recommendations ({privacy_text} privacy):")?;
            write_bullets(out, "   ", advice::security_recommendations(level))?;
        }

        self.record.auth_requirements = Some(AuthRequirements {
            auth_type: auth.into_string(),
            privacy_level: privacy_text,
        });
        Ok(())
    }

    async fn deployment(&mut self) -> Result<(), Halt> {
        let platform = self.prompter.ask_choice::<Platform>().await?;
        let scale = self.prompter.ask_choice::<Scale>().await?;
        let target = DeploymentTarget {
            platform: platform.as_str().to_string(),
            scale: scale.as_str().to_string(),
        };

        if self.show_advice {
            let out = self.prompter.out();
            writeln!(
                out,
                "\n🚀 Deployment Guidance ({}, {} scale):",
                target.platform, target.scale
            )?;
            if let Some(platform) = platform.listed() {
                write_bullets(out, "   ", advice::deployment_guidance(platform))?;
            }
        }

        self.record.deployment_target = Some(target);
        Ok(())
    }

    async fn communication(&mut self) -> Result<(), Halt> {
        let out = self.prompter.out();
        writeln!(out, "\n💡 Your frontend currently expects:")?;
        write_bullets(out, "  ", advice::FRONTEND_EXPECTATIONS)?;

        let client = self.prompter.ask_choice::<HttpClient>().await?;
        let error_handling = self.prompter.ask_choice::<ErrorHandling>().await?;
        self.record.communication_method = Some(CommunicationMethod {
            client: client.into_string(),
            error_handling: error_handling.into_string(),
        });
        Ok(())
    }
}
