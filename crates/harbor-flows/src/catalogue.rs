//! The flow catalogue.

use std::fmt;
use std::str::FromStr;

use harbor_core::enums::CaseStatus;
use harbor_core::flows::{
    CaseTimelineInput, CaseTimelineOutput, ChecklistItem, CoverLetterInput, CoverLetterOutput,
    CrsScoreInput, CrsScoreOutput, DocumentAnalysisInput, DocumentAnalysisOutput,
    DocumentChecklistInput, DocumentChecklistOutput, IntakeReviewInput, IntakeReviewOutput,
    Milestone, MilestoneStatus, ResumeDraftInput, ResumeDraftOutput, RiskFlagsInput,
    RiskFlagsOutput,
};
use serde::Serialize;

use crate::error::FlowError;
use crate::flow::Flow;

pub struct CrsScore;

impl Flow for CrsScore {
    const NAME: &'static str = "crs_score";
    const PROMPT: &'static str = "You are a Canadian immigration points assessor. Compute the \
        Comprehensive Ranking System score for the applicant below. Break the total into core \
        human capital, spouse factors, skill transferability, and additional points. Summarise \
        the result in two sentences and list concrete ways the applicant could raise the score.";
    type Input = CrsScoreInput;
    type Output = CrsScoreOutput;
}

pub struct RiskFlags;

impl Flow for RiskFlags {
    const NAME: &'static str = "risk_flags";
    const PROMPT: &'static str = "You are a senior immigration lawyer reviewing a file before \
        submission. Identify risks that could lead to refusal or delay, rate each one low, \
        medium, or high, and give a mitigation for each. Rate the overall risk as the highest \
        individual severity unless the flags clearly offset each other.";
    type Input = RiskFlagsInput;
    type Output = RiskFlagsOutput;
}

pub struct ResumeDraft;

impl Flow for ResumeDraft {
    const NAME: &'static str = "resume_draft";
    const PROMPT: &'static str = "Write a resume in Markdown tailored to the target role and the \
        hiring conventions of the target country. Use reverse-chronological order and \
        achievement-focused bullet points. Then list suggestions for strengthening it.";
    type Input = ResumeDraftInput;
    type Output = ResumeDraftOutput;
}

pub struct CoverLetter;

impl Flow for CoverLetter {
    const NAME: &'static str = "cover_letter";
    const PROMPT: &'static str = "Write a one-page cover letter in the requested tone for the \
        role and employer described below. Tie the applicant's key qualifications to the job \
        description and propose an email subject line.";
    type Input = CoverLetterInput;
    type Output = CoverLetterOutput;
}

pub struct IntakeReview;

impl Flow for IntakeReview {
    const NAME: &'static str = "intake_review";
    const PROMPT: &'static str = "Review this client intake form for an immigration law firm. \
        Score its completeness from 0 to 100, list missing information and concerns, suggest \
        the immigration programs the client may qualify for, and outline next steps.";
    type Input = IntakeReviewInput;
    type Output = IntakeReviewOutput;
}

pub struct DocumentAnalysis;

impl Flow for DocumentAnalysis {
    const NAME: &'static str = "document_analysis";
    const PROMPT: &'static str = "Analyse the document text below as supporting evidence for the \
        given visa type. Summarise it, extract key fields such as names, dates, and reference \
        numbers, list issues that would make it unacceptable, and state whether it is complete.";
    type Input = DocumentAnalysisInput;
    type Output = DocumentAnalysisOutput;
}

pub struct CaseTimeline;

impl Flow for CaseTimeline {
    const NAME: &'static str = "case_timeline";
    const PROMPT: &'static str = "Produce a milestone timeline for this immigration case, one \
        milestone per stage from consultation to decision. Mark stages before the current \
        status completed, the current status current, and the rest upcoming. Give a realistic \
        duration for each stage and an overall completion estimate.";
    type Input = CaseTimelineInput;
    type Output = CaseTimelineOutput;

    fn fallback() -> Option<Self::Output> {
        let milestone = |stage: CaseStatus, title: &str, description: &str, duration: &str| Milestone {
            stage,
            title: title.to_string(),
            description: description.to_string(),
            estimated_duration: duration.to_string(),
            status: if stage == CaseStatus::Consultation {
                MilestoneStatus::Current
            } else {
                MilestoneStatus::Upcoming
            },
        };

        Some(CaseTimelineOutput {
            milestones: vec![
                milestone(
                    CaseStatus::Consultation,
                    "Initial consultation",
                    "Assess eligibility and agree on a strategy.",
                    "1-2 weeks",
                ),
                milestone(
                    CaseStatus::DocumentCollection,
                    "Document collection",
                    "Gather identity, education, work, and financial evidence.",
                    "4-8 weeks",
                ),
                milestone(
                    CaseStatus::ApplicationPreparation,
                    "Application preparation",
                    "Complete forms and review the package before filing.",
                    "2-4 weeks",
                ),
                milestone(
                    CaseStatus::Submitted,
                    "Application submitted",
                    "File the application and pay government fees.",
                    "1 week",
                ),
                milestone(
                    CaseStatus::UnderReview,
                    "Under review",
                    "Respond to biometrics, medical, and additional document requests.",
                    "3-8 months",
                ),
                milestone(
                    CaseStatus::Decision,
                    "Decision",
                    "Receive the decision and plan next steps.",
                    "2-4 weeks",
                ),
            ],
            estimated_completion: "6-12 months".into(),
        })
    }
}

pub struct DocumentChecklist;

impl Flow for DocumentChecklist {
    const NAME: &'static str = "document_checklist";
    const PROMPT: &'static str = "List every document this applicant must or may provide for the \
        given visa type, taking citizenship, spouse, and dependents into account. Group items \
        by category and mark each one required or optional.";
    type Input = DocumentChecklistInput;
    type Output = DocumentChecklistOutput;

    fn fallback() -> Option<Self::Output> {
        let item = |name: &str, description: &str, category: &str, required: bool| ChecklistItem {
            name: name.to_string(),
            description: description.to_string(),
            category: category.to_string(),
            required,
        };

        Some(DocumentChecklistOutput {
            items: vec![
                item(
                    "Passport",
                    "Valid passport with copies of every stamped page.",
                    "Identity",
                    true,
                ),
                item(
                    "Digital photos",
                    "Two recent photos meeting visa photo specifications.",
                    "Identity",
                    true,
                ),
                item(
                    "Birth certificate",
                    "Long-form birth certificate with certified translation.",
                    "Identity",
                    true,
                ),
                item(
                    "Police certificates",
                    "From every country lived in for six months or more since age 18.",
                    "Background",
                    true,
                ),
                item(
                    "Medical examination",
                    "Completed by a panel physician.",
                    "Background",
                    true,
                ),
                item(
                    "Proof of funds",
                    "Bank statements for the last six months.",
                    "Financial",
                    true,
                ),
                item(
                    "Language test results",
                    "Approved language test taken within the last two years.",
                    "Eligibility",
                    false,
                ),
                item(
                    "Educational credential assessment",
                    "Assessment of foreign degrees and diplomas.",
                    "Eligibility",
                    false,
                ),
            ],
        })
    }
}

/// Closed set of flows for by-name dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FlowKind {
    CrsScore,
    RiskFlags,
    ResumeDraft,
    CoverLetter,
    IntakeReview,
    DocumentAnalysis,
    CaseTimeline,
    DocumentChecklist,
}

impl FlowKind {
    pub const ALL: [Self; 8] = [
        Self::CrsScore,
        Self::RiskFlags,
        Self::ResumeDraft,
        Self::CoverLetter,
        Self::IntakeReview,
        Self::DocumentAnalysis,
        Self::CaseTimeline,
        Self::DocumentChecklist,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::CrsScore => CrsScore::NAME,
            Self::RiskFlags => RiskFlags::NAME,
            Self::ResumeDraft => ResumeDraft::NAME,
            Self::CoverLetter => CoverLetter::NAME,
            Self::IntakeReview => IntakeReview::NAME,
            Self::DocumentAnalysis => DocumentAnalysis::NAME,
            Self::CaseTimeline => CaseTimeline::NAME,
            Self::DocumentChecklist => DocumentChecklist::NAME,
        }
    }

    #[must_use]
    pub const fn has_fallback(self) -> bool {
        matches!(self, Self::CaseTimeline | Self::DocumentChecklist)
    }

    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::CrsScore => "Comprehensive Ranking System score with breakdown",
            Self::RiskFlags => "Refusal risk assessment for a case",
            Self::ResumeDraft => "Resume tailored to a target role and country",
            Self::CoverLetter => "Cover letter for a job application",
            Self::IntakeReview => "Completeness review of a client intake form",
            Self::DocumentAnalysis => "Summary and issues for an uploaded document",
            Self::CaseTimeline => "Milestone timeline for a case",
            Self::DocumentChecklist => "Required documents for a visa application",
        }
    }

    #[must_use]
    pub fn input_schema(self) -> String {
        format!("{}_input", self.as_str())
    }

    #[must_use]
    pub fn output_schema(self) -> String {
        format!("{}_output", self.as_str())
    }
}

impl fmt::Display for FlowKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FlowKind {
    type Err = FlowError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim().replace('-', "_");
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == name)
            .ok_or_else(|| FlowError::UnknownFlow(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use harbor_schema::SchemaRegistry;
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn names_parse_back() {
        for kind in FlowKind::ALL {
            assert_eq!(kind.as_str().parse::<FlowKind>().unwrap(), kind);
        }
        assert_eq!("case-timeline".parse::<FlowKind>().unwrap(), FlowKind::CaseTimeline);
        assert!(matches!(
            "horoscope".parse::<FlowKind>(),
            Err(FlowError::UnknownFlow(_))
        ));
    }

    #[test]
    fn every_flow_has_registered_schemas() {
        let registry = SchemaRegistry::new();
        for kind in FlowKind::ALL {
            assert!(registry.get(&kind.input_schema()).is_some(), "{kind}");
            assert!(registry.get(&kind.output_schema()).is_some(), "{kind}");
        }
    }

    #[test]
    fn fallbacks_match_their_output_schema() {
        let registry = SchemaRegistry::new();
        let timeline = serde_json::to_value(CaseTimeline::fallback().unwrap()).unwrap();
        registry.validate("case_timeline_output", &timeline).unwrap();
        let checklist = serde_json::to_value(DocumentChecklist::fallback().unwrap()).unwrap();
        registry
            .validate("document_checklist_output", &checklist)
            .unwrap();
    }

    #[test]
    fn only_two_flows_fall_back() {
        assert!(CrsScore::fallback().is_none());
        assert!(RiskFlags::fallback().is_none());
        assert!(ResumeDraft::fallback().is_none());
        assert!(CoverLetter::fallback().is_none());
        assert!(IntakeReview::fallback().is_none());
        assert!(DocumentAnalysis::fallback().is_none());
        assert_eq!(
            FlowKind::ALL.iter().filter(|k| k.has_fallback()).count(),
            2
        );
    }

    #[test]
    fn timeline_fallback_covers_every_stage() {
        let stages: Vec<CaseStatus> = CaseTimeline::fallback()
            .unwrap()
            .milestones
            .iter()
            .map(|m| m.stage)
            .collect();
        assert_eq!(stages, CaseStatus::STEPS.to_vec());
    }
}
