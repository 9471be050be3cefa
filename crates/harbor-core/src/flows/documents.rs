use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Extracted text of an uploaded document plus the case it belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct DocumentAnalysisInput {
    pub document_name: String,
    pub document_type: String,
    pub visa_type: String,
    pub content: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ExtractedField {
    pub name: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct DocumentAnalysisOutput {
    pub summary: String,
    pub extracted_fields: Vec<ExtractedField>,
    pub issues: Vec<String>,
    pub is_complete: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct DocumentChecklistInput {
    pub visa_type: String,
    pub country_of_citizenship: String,
    pub has_spouse: bool,
    pub has_dependents: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ChecklistItem {
    pub name: String,
    pub description: String,
    pub category: String,
    pub required: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct DocumentChecklistOutput {
    pub items: Vec<ChecklistItem>,
}
