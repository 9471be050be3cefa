use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::EducationLevel;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum MaritalStatus {
    Single,
    Married,
    CommonLaw,
    Divorced,
    Widowed,
}

/// Intake questionnaire filled in by a prospective client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct IntakeForm {
    pub full_name: String,
    pub email: String,
    pub date_of_birth: String,
    pub country_of_citizenship: String,
    pub current_country: String,
    pub marital_status: MaritalStatus,
    pub visa_interest: String,
    pub education_level: EducationLevel,
    pub work_experience_years: u8,
    pub language_test_taken: bool,
    pub previous_refusals: bool,
    pub refusal_details: Option<String>,
    pub criminal_record: bool,
    pub medical_conditions: bool,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct IntakeReviewInput {
    pub form: IntakeForm,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct IntakeReviewOutput {
    /// 0–100.
    pub completeness_score: u8,
    pub missing_information: Vec<String>,
    pub concerns: Vec<String>,
    pub recommended_programs: Vec<String>,
    pub next_steps: Vec<String>,
}
