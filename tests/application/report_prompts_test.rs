use radialog::application::services::report_prompts::{
    NO_REPORT_MARKER, build_initial_prompt, build_qa_prompt, build_refine_prompt, findings_turn,
};

#[test]
fn given_same_findings_when_building_initial_prompt_twice_then_output_is_identical() {
    assert_eq!(build_initial_prompt("glioma"), build_initial_prompt("glioma"));
}

#[test]
fn given_different_findings_when_building_initial_prompt_then_only_findings_text_changes() {
    let glioma = build_initial_prompt("glioma");
    let meningioma = build_initial_prompt("meningioma");

    assert_ne!(glioma, meningioma);
    assert_eq!(glioma.replace("glioma", "meningioma"), meningioma);
}

#[test]
fn given_findings_when_building_initial_prompt_then_requests_three_sections_and_guardrails() {
    let prompt = build_initial_prompt("glioma");

    assert!(prompt.contains("This brain MRI shows a glioma."));
    for section in ["Technique", "Findings", "Impression"] {
        assert!(prompt.contains(section), "missing section {section}");
    }
    assert!(prompt.contains("left/right"));
    assert!(prompt.contains("Do not mention you are an AI"));
    assert!(prompt.contains("Do not invent history beyond \"glioma\""));
}

#[test]
fn given_no_report_when_building_refine_prompt_then_uses_placeholder_marker() {
    let prompt = build_refine_prompt(None, "make it shorter");

    assert!(prompt.contains(NO_REPORT_MARKER));
    assert!(prompt.contains("User request:\nmake it shorter"));
}

#[test]
fn given_blank_report_when_building_refine_prompt_then_uses_placeholder_marker() {
    let prompt = build_refine_prompt(Some("   "), "make it shorter");
    assert!(prompt.contains(NO_REPORT_MARKER));
}

#[test]
fn given_report_when_building_refine_prompt_then_embeds_report_and_asks_for_revision_only() {
    let prompt = build_refine_prompt(Some("Impression: mass"), "add size");

    assert!(prompt.contains("<<<REPORT_START>>>\nImpression: mass\n<<<REPORT_END>>>"));
    assert!(prompt.contains("Return only the revised report"));
    assert!(prompt.contains("radiology style"));
    assert!(!prompt.contains(NO_REPORT_MARKER));
}

#[test]
fn given_report_and_question_when_building_qa_prompt_then_embeds_both_and_requests_uncertainty() {
    let prompt = build_qa_prompt(Some("Impression: mass"), "is this malignant?");

    assert!(prompt.contains("<<<REPORT>>>\nImpression: mass\n<<<END REPORT>>>"));
    assert!(prompt.contains("Doctor's question:\nis this malignant?"));
    assert!(prompt.contains("both the report and the MRI image"));
    assert!(prompt.contains("If uncertain, state limitations."));
}

#[test]
fn given_no_report_when_building_qa_prompt_then_uses_placeholder_marker() {
    assert!(build_qa_prompt(None, "what sequence?").contains(NO_REPORT_MARKER));
}

#[test]
fn given_findings_when_building_user_turn_then_prefixes_label() {
    assert_eq!(findings_turn("glioma"), "Findings: glioma");
}
