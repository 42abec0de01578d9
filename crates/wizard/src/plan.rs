//! Renders the final implementation plan from a Session Record.

use std::io::{self, Write};

use crate::{
    advice::{self, write_bullets},
    choice::Framework,
    record::SessionRecord,
};

/// Shown for any field the record has no value for.
pub const NOT_SPECIFIED: &str = "Not specified";

const RULE_WIDTH: usize = 50;

fn or_unset(value: Option<&str>) -> &str {
    value.unwrap_or(NOT_SPECIFIED)
}

/// Print the plan summary followed by the next-steps list.
pub fn render_plan(record: &SessionRecord, out: &mut impl Write) -> io::Result<()> {
    let rule = "=".repeat(RULE_WIDTH);
    writeln!(out, "\n📋 IMPLEMENTATION PLAN")?;
    writeln!(out, "{rule}")?;
    writeln!(out, "\n🎯 Your Customized Backend Implementation Plan:")?;

    let frontend = record.frontend_tech_stack.as_ref();
    writeln!(
        out,
        "\n1. **Frontend**: {} with {}",
        or_unset(frontend.map(|f| f.framework.as_str())),
        or_unset(frontend.map(|f| f.styling.as_str())),
    )?;
    writeln!(
        out,
        "   **Familiarity**: {}",
        or_unset(frontend.map(|f| f.familiarity.as_str()))
    )?;

    writeln!(
        out,
        "\n2. **Backend Framework**: {}",
        or_unset(record.backend_framework.as_deref())
    )?;
    writeln!(
        out,
        "   **Experience**: {}",
        or_unset(record.backend_framework_experience.as_deref())
    )?;

    let llm = record.llm_requirements.as_ref();
    writeln!(
        out,
        "\n3. **LLM Integration**: {}",
        or_unset(llm.map(|l| l.llm_choice.as_str()))
    )?;
    writeln!(
        out,
        "   **Vector DB**: {}",
        or_unset(llm.map(|l| l.vector_db.as_str()))
    )?;

    let data = record.data_format.as_ref();
    writeln!(
        out,
        "\n4. **Data Source**: {}",
        or_unset(data.map(|d| d.source.as_str()))
    )?;
    writeln!(
        out,
        "   **Complexity**: {}",
        or_unset(data.map(|d| d.complexity.as_str()))
    )?;

    let api = record.api_design.as_ref();
    writeln!(
        out,
        "\n5. **API Style**: {}",
        or_unset(api.map(|a| a.style.as_str()))
    )?;
    writeln!(
        out,
        "   **Real-time**: {}",
        or_unset(api.map(|a| a.realtime.as_str()))
    )?;

    let auth = record.auth_requirements.as_ref();
    writeln!(
        out,
        "\n6. **Authentication**: {}",
        or_unset(auth.map(|a| a.auth_type.as_str()))
    )?;
    writeln!(
        out,
        "   **Privacy Level**: {}",
        or_unset(auth.map(|a| a.privacy_level.as_str()))
    )?;

    let deploy = record.deployment_target.as_ref();
    writeln!(
        out,
        "\n7. **Deployment**: {}",
        or_unset(deploy.map(|d| d.platform.as_str()))
    )?;
    writeln!(
        out,
        "   **Scale**: {}",
        or_unset(deploy.map(|d| d.scale.as_str()))
    )?;

    let comm = record.communication_method.as_ref();
    writeln!(
        out,
        "\n8. **API Client**: {}",
        or_unset(comm.map(|c| c.client.as_str()))
    )?;
    writeln!(
        out,
        "   **Error Handling**: {}",
        or_unset(comm.map(|c| c.error_handling.as_str()))
    )?;

    writeln!(out, "\n{rule}")?;
    writeln!(
        out,
        "✅ Plan generated! Check the framework-specific guides for detailed implementation."
    )?;

    render_next_steps(record, out)
}

/// Print the next-steps list. Framework setup instructions appear only
/// when the recorded framework is recognised.
pub fn render_next_steps(record: &SessionRecord, out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "\n🚀 NEXT STEPS:")?;

    let framework = record
        .backend_framework
        .as_deref()
        .and_then(Framework::recognize);
    let mut n = 1;

    if let Some(framework) = framework
        && let Some((install, guide)) = advice::framework_setup(framework)
    {
        writeln!(out, "\n{n}. Set up {} project:", framework.name())?;
        writeln!(out, "   {install}")?;
        writeln!(out, "   Check: {guide}")?;
        n += 1;
    }

    writeln!(out, "\n{n}. Update frontend integration:")?;
    write_bullets(out, "   ", &[
        "Replace getQuotation() placeholder in src/pages/chat.jsx",
        "Add proper API endpoints",
        "Implement error handling",
    ])?;
    n += 1;

    writeln!(out, "\n{n}. Explore detailed guides:")?;
    write_bullets(out, "   ", &[
        "Architecture diagrams: backend-guide/architecture/",
        "Code templates: backend-guide/templates/",
        "Deployment guides: backend-guide/deployment/",
    ])?;
    n += 1;

    writeln!(out, "\n{n}. Run the assistant again anytime:")?;
    writeln!(out, "   stackplan            (start over)")?;
    writeln!(out, "   stackplan --resume   (continue a saved session)")?;
    Ok(())
}
