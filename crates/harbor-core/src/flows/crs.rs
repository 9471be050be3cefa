use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Highest completed level of education.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum EducationLevel {
    SecondarySchool,
    OneYearPostSecondary,
    TwoYearPostSecondary,
    Bachelors,
    TwoOrMoreCredentials,
    Masters,
    Doctorate,
}

/// Canadian Language Benchmark level per ability.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct LanguageScores {
    pub speaking: u8,
    pub listening: u8,
    pub reading: u8,
    pub writing: u8,
}

/// Profile submitted for a Comprehensive Ranking System estimate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct CrsScoreInput {
    pub age: u8,
    pub education_level: EducationLevel,
    pub first_language: LanguageScores,
    pub second_language: Option<LanguageScores>,
    pub canadian_work_experience_years: u8,
    pub foreign_work_experience_years: u8,
    pub has_spouse: bool,
    pub has_job_offer: bool,
    pub has_provincial_nomination: bool,
    pub has_canadian_education: bool,
    pub has_sibling_in_canada: bool,
}

/// Points per CRS section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct CrsBreakdown {
    pub core_human_capital: u32,
    pub spouse_factors: u32,
    pub skill_transferability: u32,
    pub additional_points: u32,
}

/// Model-produced CRS estimate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct CrsScoreOutput {
    pub total_score: u32,
    pub breakdown: CrsBreakdown,
    pub summary: String,
    pub recommendations: Vec<String>,
}
