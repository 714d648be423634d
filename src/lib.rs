//! # Rujira Audit Prompts
//!
//! Prompt synthesis for security review of the Rujira lending protocol.
//! The crate turns one input value into one prompt document for an
//! external text-generation engine. It never calls that engine and never
//! parses its responses.
//!
//! ## Core APIs
//!
//! ### Compose prompts
//!
//! ```rust
//! use rujira_audit_prompts::{audit_prompt, question_generation_prompt, validation_prompt};
//!
//! let audit = audit_prompt("Can liquidation fees exceed the protocol-defined cap?");
//! assert!(audit
//!     .as_str()
//!     .lines()
//!     .any(|line| line == "Can liquidation fees exceed the protocol-defined cap?"));
//!
//! let questions = question_generation_prompt("contracts/rujira-ghost-vault/src/state.rs");
//! assert!(questions
//!     .as_str()
//!     .contains("[File: contracts/rujira-ghost-vault/src/state.rs]"));
//!
//! let validation = validation_prompt("## Title\nShare inflation on first deposit");
//! assert!(validation.as_str().contains("Share inflation on first deposit"));
//! ```
//!
//! ### Load the question corpus
//!
//! Loading never fails: an absent or malformed resource yields an empty
//! corpus. Use [`QuestionCorpus::load`] to find out why.
//!
//! ```rust
//! use rujira_audit_prompts::{audit_prompt, QuestionCorpus};
//!
//! let corpus = QuestionCorpus::load_or_empty("does/not/exist.json");
//! assert!(corpus.is_empty());
//!
//! for question in corpus.iter() {
//!     let _prompt = audit_prompt(question);
//! }
//! ```
//!
//! ### Walk the target file registry
//!
//! ```rust
//! use rujira_audit_prompts::{question_generation_prompt, TargetFileRegistry};
//!
//! let registry = TargetFileRegistry::new();
//! for path in registry.iter() {
//!     let _prompt = question_generation_prompt(path);
//! }
//! assert!(registry.contains("contracts/rujira-ghost-credit/src/account.rs"));
//! ```
//!
//! ## Templates
//!
//! Each prompt is a versioned [`Template`] with one named slot
//! (`{{question}}`, `{{report}}`, `{{target_file}}`). Substitution is a
//! single pass, so input text that looks like a placeholder is inserted
//! literally.
//!
//! | Kind | Template | Slot |
//! |------|----------|------|
//! | Audit | [`prompts::AUDIT_PROMPT_V1`] | `question` |
//! | Validation | [`prompts::VALIDATION_PROMPT_V1`] | `report` |
//! | Question generation | [`prompts::QUESTION_GENERATION_PROMPT_V1`] | `target_file` |

pub mod config;
pub mod corpus;
pub mod errors;
pub mod prompts;
pub mod registry;
pub mod template;

// Re-exports for convenience
pub use config::{Config, DEEPWIKI_BASE_URL};
pub use corpus::{QuestionCorpus, DEFAULT_CORPUS_PATH};
pub use errors::{CorpusError, CorpusResult, TemplateError, TemplateResult};
pub use prompts::{
    audit_prompt, question_generation_prompt, validation_prompt, PromptDocument, PromptKind,
    AUDIT_PROMPT_V1, NO_VULNERABILITY_SENTINEL, QUESTION_GENERATION_PROMPT_V1,
    VALIDATION_PROMPT_V1,
};
pub use registry::{contract_of, TargetFileRegistry, TARGET_FILES};
pub use template::{Segment, Template};

/// Load the corpus named by `config`, empty on any failure
pub fn load_corpus(config: &Config) -> QuestionCorpus {
    QuestionCorpus::load_or_empty(&config.corpus_path)
}

/// Check every bundled template's structure
pub fn check_templates() -> TemplateResult<()> {
    PromptKind::ALL
        .iter()
        .try_for_each(|kind| kind.template().check())
}
