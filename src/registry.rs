//! Target File Registry
//!
//! Source files considered in scope for question generation. Order is the
//! generation priority for whatever drives the composers; it has no other
//! meaning.

/// In-scope files, in generation order
pub static TARGET_FILES: &[&str] = &[
    // Individual accounts
    "contracts/rujira-account/src/lib.rs",
    "contracts/rujira-account/src/contract.rs",
    "contracts/rujira-account/src/execute.rs",
    "contracts/rujira-account/src/error.rs",
    "contracts/rujira-account/src/state.rs",
    // Credit registry
    "contracts/rujira-ghost-credit/src/lib.rs",
    "contracts/rujira-ghost-credit/src/account.rs",
    "contracts/rujira-ghost-credit/src/config.rs",
    "contracts/rujira-ghost-credit/src/contract.rs",
    "contracts/rujira-ghost-credit/src/error.rs",
    "contracts/rujira-ghost-credit/src/events.rs",
    "contracts/rujira-ghost-credit/src/state.rs",
    // Lending vaults
    "contracts/rujira-ghost-vault/src/lib.rs",
    "contracts/rujira-ghost-vault/src/borrowers.rs",
    "contracts/rujira-ghost-vault/src/config.rs",
    "contracts/rujira-ghost-vault/src/contract.rs",
    "contracts/rujira-ghost-vault/src/error.rs",
    "contracts/rujira-ghost-vault/src/events.rs",
    "contracts/rujira-ghost-vault/src/state.rs",
];

/// Ordered, immutable list of target file paths
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetFileRegistry {
    files: Vec<&'static str>,
}

impl TargetFileRegistry {
    /// Registry with the default in-scope files
    pub fn new() -> Self {
        Self::with_files(TARGET_FILES)
    }

    pub fn empty() -> Self {
        Self { files: Vec::new() }
    }

    /// Registry over a caller-chosen list, order kept as given
    pub fn with_files(files: &[&'static str]) -> Self {
        Self {
            files: files.to_vec(),
        }
    }

    pub fn files(&self) -> &[&'static str] {
        &self.files
    }

    pub fn iter(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.files.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    /// Exact match against a registered path
    pub fn contains(&self, path: &str) -> bool {
        self.files.iter().any(|f| *f == path)
    }

    /// Generation priority of `path` (0 = first)
    pub fn position(&self, path: &str) -> Option<usize> {
        self.files.iter().position(|f| *f == path)
    }

    /// Distinct contract directories, in first-seen order
    pub fn contracts(&self) -> Vec<&'static str> {
        let mut contracts: Vec<&'static str> = Vec::new();
        for name in self.iter().filter_map(contract_of) {
            if !contracts.contains(&name) {
                contracts.push(name);
            }
        }
        contracts
    }
}

impl Default for TargetFileRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> IntoIterator for &'a TargetFileRegistry {
    type Item = &'a &'static str;
    type IntoIter = std::slice::Iter<'a, &'static str>;

    fn into_iter(self) -> Self::IntoIter {
        self.files.iter()
    }
}

/// Contract directory of a `contracts/<name>/...` path
///
/// Handles:
/// - `contracts/rujira-account/src/lib.rs` -> `rujira-account`
/// - `./contracts/rujira-account/src/lib.rs` -> `rujira-account`
/// - anything else -> `None`
pub fn contract_of(path: &str) -> Option<&str> {
    let trimmed = path.trim().trim_start_matches("./");
    let mut parts = trimmed.split('/');

    if parts.next()? != "contracts" {
        return None;
    }
    let name = parts.next()?;
    // a bare `contracts/<name>` with nothing below is not a file path
    parts.next()?;

    if name.is_empty() {
        None
    } else {
        Some(name)
    }
}
