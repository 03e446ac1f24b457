use serde::{Deserialize, Serialize};

/// Where session slots (`selectedCategory`, `lastQuote`) live.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SessionScope {
    /// A `session` directory under the storage path; survives between runs.
    #[default]
    Directory,
    /// Process memory; forgotten when the process exits.
    Process,
}
