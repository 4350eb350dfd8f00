// src/prompt/mod.rs
// Prompt catalog - module contexts, document kinds and their fixed text

mod catalog;
pub mod templates;

pub use catalog::{CatalogError, PromptCatalog};

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumIter, EnumString};

/// Crisis-guidance section the user is chatting from
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, EnumIter, AsRefStr,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum ModuleContext {
    MobileTheft,
    BankFraud,
    EcommerceFraud,
    OtherIssues,
}

impl ModuleContext {
    /// Parse a wire tag; unknown tags are `None`
    pub fn parse(tag: &str) -> Option<Self> {
        tag.parse().ok()
    }
}

/// The closed set of documents the drafter can produce
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, EnumIter, AsRefStr,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum DocumentKind {
    FirDraft,
    ComplaintLetter,
    GrievanceEmail,
    EscalationLetter,
    InsuranceClaim,
    CeirApplication,
}

impl DocumentKind {
    pub fn parse(tag: &str) -> Option<Self> {
        tag.parse().ok()
    }
}
