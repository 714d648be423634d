//! Prompts Module
//!
//! Embeds the versioned audit, validation, and question-generation
//! templates at compile time and composes prompt documents from them.
//! Every composer is a pure function of its single input.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::template::Template;

/// Fixed line the text-generation engine emits when nothing qualifies
pub const NO_VULNERABILITY_SENTINEL: &str = "#NoVulnerability found for this question.";

/// Audit prompt, v1
///
/// Analyzes one security question against the Rujira protocol context:
/// architecture, the ten core invariants, attack surfaces, trust model,
/// severity taxonomy, and the report-or-sentinel output contract.
pub const AUDIT_PROMPT_V1: Template =
    Template::new("audit", 1, "question", include_str!("../prompts/audit_v1.txt"));

/// Validation prompt, v1
///
/// Re-verifies a previously produced report through the four-phase
/// rubric: disqualification, per-claim deep validation, impact and
/// likelihood, final checklist.
pub const VALIDATION_PROMPT_V1: Template = Template::new(
    "validation",
    1,
    "report",
    include_str!("../prompts/validation_v1.txt"),
);

/// Question-generation prompt, v1
///
/// Requests a batch of `[File] [Function] [Type] question` entries about
/// one target file. Question counts per file size are guidance only.
pub const QUESTION_GENERATION_PROMPT_V1: Template = Template::new(
    "question_generation",
    1,
    "target_file",
    include_str!("../prompts/question_generation_v1.txt"),
);

/// Document handed to the text-generation engine
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct PromptDocument(String);

impl PromptDocument {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for PromptDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for PromptDocument {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<PromptDocument> for String {
    fn from(doc: PromptDocument) -> Self {
        doc.0
    }
}

/// Which composer to run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PromptKind {
    /// Input is a security question
    Audit,
    /// Input is a report to re-verify
    Validation,
    /// Input is a target file path
    QuestionGeneration,
}

impl PromptKind {
    pub const ALL: [PromptKind; 3] = [
        PromptKind::Audit,
        PromptKind::Validation,
        PromptKind::QuestionGeneration,
    ];

    /// Current template for this kind
    pub fn template(self) -> &'static Template {
        match self {
            PromptKind::Audit => &AUDIT_PROMPT_V1,
            PromptKind::Validation => &VALIDATION_PROMPT_V1,
            PromptKind::QuestionGeneration => &QUESTION_GENERATION_PROMPT_V1,
        }
    }

    pub fn compose(self, input: &str) -> PromptDocument {
        PromptDocument(self.template().render(input))
    }
}

impl fmt::Display for PromptKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.template().name)
    }
}

/// Build the audit prompt for one security question.
///
/// The question is inserted verbatim on its own line; empty input is
/// accepted.
pub fn audit_prompt(question: &str) -> PromptDocument {
    PromptKind::Audit.compose(question)
}

/// Build the validation prompt for one previously produced report
pub fn validation_prompt(report: &str) -> PromptDocument {
    PromptKind::Validation.compose(report)
}

/// Build the question-generation prompt for one target file.
///
/// The path is not checked against the registry.
pub fn question_generation_prompt(target_file: &str) -> PromptDocument {
    PromptKind::QuestionGeneration.compose(target_file)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_templates_well_formed() {
        for kind in PromptKind::ALL {
            assert_eq!(kind.template().check(), Ok(()), "{kind}");
        }
    }

    #[test]
    fn test_single_slot_templates() {
        assert_eq!(AUDIT_PROMPT_V1.slot_count(), 1);
        assert_eq!(VALIDATION_PROMPT_V1.slot_count(), 1);
        assert!(QUESTION_GENERATION_PROMPT_V1.slot_count() > 1);
    }

    #[test]
    fn test_sentinel_line_present() {
        for doc in [audit_prompt("q"), validation_prompt("r")] {
            assert!(doc.as_str().lines().any(|line| line == NO_VULNERABILITY_SENTINEL));
        }
    }

    #[test]
    fn test_kind_serde() {
        assert_eq!(
            serde_json::to_string(&PromptKind::QuestionGeneration).unwrap(),
            "\"question_generation\""
        );
        let kind: PromptKind = serde_json::from_str("\"audit\"").unwrap();
        assert_eq!(kind, PromptKind::Audit);
    }

    #[test]
    fn test_document_accessors() {
        let doc = audit_prompt("q");
        assert_eq!(doc.len(), doc.as_str().len());
        assert!(!doc.is_empty());
        assert_eq!(doc.to_string(), doc.clone().into_string());
    }
}
