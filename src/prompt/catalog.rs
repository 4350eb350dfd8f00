// src/prompt/catalog.rs
// Validated, immutable prompt lookup tables

use indexmap::IndexMap;
use std::collections::HashMap;
use strum::IntoEnumIterator;
use thiserror::Error;

use super::templates::{
    CHAT_SYSTEM_PROMPT, DOCUMENT_CLOSING, DOCUMENT_SYSTEM_PROMPT, DOCUMENT_TEMPLATES, MODULE_SUFFIXES, NO_CONTEXT,
};
use super::{DocumentKind, ModuleContext};

#[derive(Error, Debug, PartialEq, Eq)]
pub enum CatalogError {
    #[error("no prompt suffix for module context `{0}`")]
    MissingModuleSuffix(ModuleContext),

    #[error("no template for document kind `{0}`")]
    MissingDocumentTemplate(DocumentKind),

    #[error("{0} is empty")]
    EmptyPrompt(&'static str),
}

/// Prompt text keyed by enum. Construction fails if any variant lacks an entry,
/// so a loaded catalog answers every lookup.
#[derive(Debug, Clone)]
pub struct PromptCatalog {
    chat_base: &'static str,
    document_system: &'static str,
    module_suffixes: HashMap<ModuleContext, &'static str>,
    document_templates: HashMap<DocumentKind, &'static str>,
}

impl PromptCatalog {
    /// Load the built-in tables
    pub fn load() -> Result<Self, CatalogError> {
        Self::from_tables(
            CHAT_SYSTEM_PROMPT,
            DOCUMENT_SYSTEM_PROMPT,
            MODULE_SUFFIXES,
            DOCUMENT_TEMPLATES,
        )
    }

    pub(crate) fn from_tables(
        chat_base: &'static str,
        document_system: &'static str,
        module_suffixes: &[(ModuleContext, &'static str)],
        document_templates: &[(DocumentKind, &'static str)],
    ) -> Result<Self, CatalogError> {
        if chat_base.trim().is_empty() {
            return Err(CatalogError::EmptyPrompt("chat system prompt"));
        }
        if document_system.trim().is_empty() {
            return Err(CatalogError::EmptyPrompt("document system prompt"));
        }

        let module_suffixes: HashMap<_, _> = module_suffixes
            .iter()
            .filter(|(_, text)| !text.trim().is_empty())
            .copied()
            .collect();
        if let Some(missing) = ModuleContext::iter().find(|m| !module_suffixes.contains_key(m)) {
            return Err(CatalogError::MissingModuleSuffix(missing));
        }

        let document_templates: HashMap<_, _> = document_templates
            .iter()
            .filter(|(_, text)| !text.trim().is_empty())
            .copied()
            .collect();
        if let Some(missing) = DocumentKind::iter().find(|k| !document_templates.contains_key(k)) {
            return Err(CatalogError::MissingDocumentTemplate(missing));
        }

        Ok(Self {
            chat_base,
            document_system,
            module_suffixes,
            document_templates,
        })
    }

    /// Chat system instruction: base prompt plus the suffix for a known module tag.
    /// Unknown or absent tags get the base prompt alone.
    pub fn chat_instruction(&self, module_context: Option<&str>) -> String {
        let suffix = module_context
            .and_then(ModuleContext::parse)
            .and_then(|m| self.module_suffixes.get(&m));

        match suffix {
            Some(suffix) => format!("{}\n\n{}", self.chat_base, suffix),
            None => self.chat_base.to_string(),
        }
    }

    pub fn document_system_instruction(&self) -> &str {
        self.document_system
    }

    pub fn document_template(&self, kind: DocumentKind) -> &str {
        // from_tables guarantees every kind is present
        self.document_templates.get(&kind).copied().unwrap_or_default()
    }

    /// Build the single-shot drafting prompt. Field values keep their insertion order.
    pub fn document_prompt(
        &self,
        kind: DocumentKind,
        field_values: &IndexMap<String, String>,
        context: Option<&str>,
    ) -> String {
        let details = serde_json::to_string_pretty(field_values).unwrap_or_default();
        let context = context.filter(|c| !c.trim().is_empty()).unwrap_or(NO_CONTEXT);

        format!(
            "{}\n\nUser's situation details:\n{}\n\nAdditional context: {}\n\n{}",
            self.document_template(kind),
            details,
            context,
            DOCUMENT_CLOSING
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> PromptCatalog {
        PromptCatalog::load().expect("built-in catalog is complete")
    }

    // ========================================================================
    // Validation
    // ========================================================================

    #[test]
    fn test_builtin_catalog_loads() {
        let catalog = catalog();
        for kind in DocumentKind::iter() {
            assert!(!catalog.document_template(kind).is_empty());
        }
    }

    #[test]
    fn test_missing_module_suffix_rejected() {
        let err = PromptCatalog::from_tables(
            "base",
            "doc",
            &MODULE_SUFFIXES[..3],
            DOCUMENT_TEMPLATES,
        )
        .unwrap_err();
        assert_eq!(err, CatalogError::MissingModuleSuffix(ModuleContext::OtherIssues));
    }

    #[test]
    fn test_missing_document_template_rejected() {
        let err = PromptCatalog::from_tables(
            "base",
            "doc",
            MODULE_SUFFIXES,
            &DOCUMENT_TEMPLATES[1..],
        )
        .unwrap_err();
        assert_eq!(err, CatalogError::MissingDocumentTemplate(DocumentKind::FirDraft));
    }

    #[test]
    fn test_blank_template_counts_as_missing() {
        let mut templates = DOCUMENT_TEMPLATES.to_vec();
        templates[5] = (DocumentKind::CeirApplication, "   ");
        let err = PromptCatalog::from_tables("base", "doc", MODULE_SUFFIXES, &templates).unwrap_err();
        assert_eq!(err, CatalogError::MissingDocumentTemplate(DocumentKind::CeirApplication));
    }

    #[test]
    fn test_empty_base_rejected() {
        let err = PromptCatalog::from_tables("", "doc", MODULE_SUFFIXES, DOCUMENT_TEMPLATES).unwrap_err();
        assert_eq!(err, CatalogError::EmptyPrompt("chat system prompt"));
    }

    // ========================================================================
    // Chat instruction
    // ========================================================================

    #[test]
    fn test_known_module_appends_suffix() {
        let catalog = catalog();
        for (module, suffix) in MODULE_SUFFIXES {
            let instruction = catalog.chat_instruction(Some(module.as_ref()));
            assert!(instruction.starts_with(CHAT_SYSTEM_PROMPT));
            assert!(instruction.ends_with(suffix));
            assert_eq!(instruction, format!("{}\n\n{}", CHAT_SYSTEM_PROMPT, suffix));
        }
    }

    #[test]
    fn test_unknown_or_absent_module_uses_base() {
        let catalog = catalog();
        assert_eq!(catalog.chat_instruction(None), CHAT_SYSTEM_PROMPT);
        assert_eq!(catalog.chat_instruction(Some("crypto-scam")), CHAT_SYSTEM_PROMPT);
        assert_eq!(catalog.chat_instruction(Some("")), CHAT_SYSTEM_PROMPT);
        assert_eq!(catalog.chat_instruction(Some("Mobile-Theft")), CHAT_SYSTEM_PROMPT);
    }

    // ========================================================================
    // Document prompt
    // ========================================================================

    #[test]
    fn test_document_prompt_without_context() {
        let catalog = catalog();
        let mut fields = IndexMap::new();
        fields.insert("imei".to_string(), "123456".to_string());

        let prompt = catalog.document_prompt(DocumentKind::CeirApplication, &fields, None);
        assert!(prompt.starts_with(catalog.document_template(DocumentKind::CeirApplication)));
        assert!(prompt.contains("None provided"));
        assert!(prompt.contains("\"imei\": \"123456\""));
        assert!(prompt.ends_with(DOCUMENT_CLOSING));
    }

    #[test]
    fn test_document_prompt_blank_context_is_absent() {
        let prompt = catalog().document_prompt(DocumentKind::FirDraft, &IndexMap::new(), Some("  "));
        assert!(prompt.contains("Additional context: None provided"));
        assert!(prompt.contains("User's situation details:\n{}"));
    }

    #[test]
    fn test_document_prompt_with_context() {
        let prompt = catalog().document_prompt(
            DocumentKind::GrievanceEmail,
            &IndexMap::new(),
            Some("Report Fake Product"),
        );
        assert!(prompt.contains("Additional context: Report Fake Product"));
        assert!(!prompt.contains("None provided"));
    }

    #[test]
    fn test_document_prompt_preserves_field_order() {
        let mut fields = IndexMap::new();
        fields.insert("zeta".to_string(), "last letter".to_string());
        fields.insert("alpha".to_string(), "first letter".to_string());
        fields.insert("order_id".to_string(), "OD-42".to_string());

        let prompt = catalog().document_prompt(DocumentKind::GrievanceEmail, &fields, None);
        let zeta = prompt.find("\"zeta\"").unwrap();
        let alpha = prompt.find("\"alpha\"").unwrap();
        let order = prompt.find("\"order_id\"").unwrap();
        assert!(zeta < alpha && alpha < order);
        assert!(prompt.contains("{\n  \"zeta\": \"last letter\",\n  \"alpha\": \"first letter\""));
    }

    #[test]
    fn test_document_system_instruction_mentions_placeholders() {
        let catalog = catalog();
        assert!(catalog.document_system_instruction().contains("[YOUR NAME]"));
    }
}
