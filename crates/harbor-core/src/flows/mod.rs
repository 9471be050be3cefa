//! Request/response records exchanged with the generative-AI flows.
//!
//! Field names and enum values are embedded in the prompts sent to the model
//! (through the generated JSON Schemas), so they are part of the wire contract.

mod crs;
mod documents;
mod drafting;
mod intake;
mod risk;
mod timeline;

pub use crs::{CrsBreakdown, CrsScoreInput, CrsScoreOutput, EducationLevel, LanguageScores};
pub use documents::{
    ChecklistItem, DocumentAnalysisInput, DocumentAnalysisOutput, DocumentChecklistInput,
    DocumentChecklistOutput, ExtractedField,
};
pub use drafting::{
    CoverLetterInput, CoverLetterOutput, LetterTone, ResumeDraftInput, ResumeDraftOutput,
    WorkExperience,
};
pub use intake::{IntakeForm, IntakeReviewInput, IntakeReviewOutput, MaritalStatus};
pub use risk::{RiskFlag, RiskFlagsInput, RiskFlagsOutput, RiskSeverity};
pub use timeline::{CaseTimelineInput, CaseTimelineOutput, Milestone, MilestoneStatus};
