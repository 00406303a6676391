//! Instruction text for the three interaction modes.
//!
//! Each builder is a pure function of its inputs so that prompts can be
//! asserted on without a model. The modes never share instructions: a
//! refinement must not re-derive findings and a question must not rewrite
//! the report.

/// Stand-in for the report when no assistant turn exists yet.
pub const NO_REPORT_MARKER: &str = "(no report yet)";

pub const SYSTEM_FRAMING: &str = "You assist with radiology report generation.";

const REFINE_PERSONA: &str = "You are a board-certified radiologist assistant. \
Refine the report based on user instructions while keeping radiology style. \
Be precise and concise.";

pub fn build_initial_prompt(findings: &str) -> String {
    format!(
        "You are a radiologist. This brain MRI shows a {findings}.\n\
Generate a concise, structured radiology report with:\n\
- Technique (assume standard MRI brain)\n\
- Findings (one paragraph, radiology style; avoid enumeration)\n\
- Impression (bullet points, 1-3 lines, most important first)\n\
\n\
Important:\n\
- Use correct neuroanatomical left/right conventions.\n\
- Do not mention you are an AI. Do not invent history beyond \"{findings}\".\n"
    )
}

pub fn build_refine_prompt(current_report: Option<&str>, user_message: &str) -> String {
    let report = report_or_marker(current_report);
    format!(
        "{REFINE_PERSONA}\n\
\n\
Current report:\n\
\n\
<<<REPORT_START>>>\n\
{report}\n\
<<<REPORT_END>>>\n\
\n\
User request:\n\
{user_message}\n\
\n\
Return only the revised report (or direct answer if it's a question).\n"
    )
}

pub fn build_qa_prompt(current_report: Option<&str>, question: &str) -> String {
    let report = report_or_marker(current_report);
    format!(
        "You are a radiology expert.\n\
Here is the most recent MRI report:\n\
\n\
<<<REPORT>>>\n\
{report}\n\
<<<END REPORT>>>\n\
\n\
Doctor's question:\n\
{question}\n\
\n\
Answer clearly and concisely, using information from both the report and the MRI image.\n\
If uncertain, state limitations.\n"
    )
}

pub fn findings_turn(findings: &str) -> String {
    format!("Findings: {findings}")
}

fn report_or_marker(report: Option<&str>) -> &str {
    match report {
        Some(r) if !r.trim().is_empty() => r,
        _ => NO_REPORT_MARKER,
    }
}
