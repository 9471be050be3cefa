use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct WorkExperience {
    pub title: String,
    pub employer: String,
    pub start_date: String,
    pub end_date: Option<String>,
    #[serde(default)]
    pub highlights: Vec<String>,
}

/// Material for a resume tailored to the destination country's conventions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ResumeDraftInput {
    pub full_name: String,
    pub target_role: String,
    pub target_country: String,
    pub experience: Vec<WorkExperience>,
    #[serde(default)]
    pub education: Vec<String>,
    #[serde(default)]
    pub skills: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ResumeDraftOutput {
    pub resume_markdown: String,
    pub suggestions: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum LetterTone {
    Formal,
    Warm,
    Concise,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct CoverLetterInput {
    pub applicant_name: String,
    pub target_role: String,
    pub employer_name: String,
    pub job_description: String,
    #[serde(default)]
    pub key_qualifications: Vec<String>,
    pub tone: LetterTone,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct CoverLetterOutput {
    pub subject_line: String,
    pub letter: String,
}
