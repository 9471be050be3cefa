//! Model failure handling across the catalogue.

use harbor_config::FlowsConfig;
use harbor_core::enums::CaseStatus;
use harbor_core::flows::{
    CaseTimelineInput, CrsScoreInput, DocumentChecklistInput, EducationLevel, LanguageScores,
};
use harbor_flows::catalogue::{CaseTimeline, CrsScore, DocumentChecklist};
use harbor_flows::{
    Flow, FlowError, FlowKind, FlowOrigin, FlowRunner, GenerativeModel, ModelRequest,
    UnavailableModel,
};
use pretty_assertions::assert_eq;
use rstest::rstest;
use serde_json::{Value, json};

/// Model that always fails the way a dropped connection would.
struct Offline;

impl GenerativeModel for Offline {
    async fn generate(&self, _request: &ModelRequest) -> Result<Value, FlowError> {
        Err(FlowError::MalformedResponse("connection reset".into()))
    }
}

fn runner() -> FlowRunner<Offline> {
    FlowRunner::new(Offline, &FlowsConfig::default())
}

#[tokio::test]
async fn timeline_returns_fallback_unchanged() {
    let reply = runner()
        .run::<CaseTimeline>(&CaseTimelineInput {
            case_type: "Study Permit".into(),
            visa_type: "Study Permit".into(),
            current_status: CaseStatus::UnderReview,
            start_date: "2024-02-03".into(),
        })
        .await
        .unwrap();
    assert_eq!(reply.origin, FlowOrigin::Fallback);
    assert_eq!(Some(reply.output), CaseTimeline::fallback());
}

#[tokio::test]
async fn checklist_returns_fallback_unchanged() {
    let reply = runner()
        .run::<DocumentChecklist>(&DocumentChecklistInput {
            visa_type: "Express Entry".into(),
            country_of_citizenship: "Nigeria".into(),
            has_spouse: true,
            has_dependents: false,
        })
        .await
        .unwrap();
    assert_eq!(reply.origin, FlowOrigin::Fallback);
    assert_eq!(Some(reply.output), DocumentChecklist::fallback());
}

#[tokio::test]
async fn flow_without_fallback_fails() {
    let input = CrsScoreInput {
        age: 31,
        education_level: EducationLevel::Bachelors,
        first_language: LanguageScores {
            speaking: 8,
            listening: 8,
            reading: 7,
            writing: 7,
        },
        second_language: None,
        canadian_work_experience_years: 0,
        foreign_work_experience_years: 5,
        has_spouse: true,
        has_job_offer: false,
        has_provincial_nomination: false,
        has_canadian_education: false,
        has_sibling_in_canada: false,
    };
    let result = runner().run::<CrsScore>(&input).await;
    assert!(matches!(result, Err(FlowError::MalformedResponse(_))));
}

#[tokio::test]
async fn empty_input_is_rejected_for_every_flow() {
    let runner = FlowRunner::new(UnavailableModel, &FlowsConfig::default());
    for kind in FlowKind::ALL {
        let result = runner.run_json(kind, json!({})).await;
        assert!(
            matches!(result, Err(FlowError::InvalidInput { .. })),
            "{kind}"
        );
    }
}

#[tokio::test]
async fn invalid_input_never_falls_back() {
    let result = runner()
        .run_json(
            FlowKind::DocumentChecklist,
            json!({ "visaType": "Express Entry", "hasSpouse": "maybe" }),
        )
        .await;
    match result {
        Err(FlowError::InvalidInput { flow, errors }) => {
            assert_eq!(flow, "document_checklist");
            assert!(!errors.is_empty());
        }
        other => panic!("expected InvalidInput, got {other:?}"),
    }
}

#[rstest]
#[case(true, Some(FlowOrigin::Fallback))]
#[case(false, None)]
#[tokio::test]
async fn fallback_follows_the_allow_switch(
    #[case] allow_fallback: bool,
    #[case] expected: Option<FlowOrigin>,
) {
    let runner = FlowRunner::new(Offline, &FlowsConfig { allow_fallback });
    let result = runner
        .run_json(
            FlowKind::CaseTimeline,
            json!({
                "caseType": "Permanent Residence",
                "visaType": "Express Entry",
                "currentStatus": "Consultation",
                "startDate": "2024-01-15"
            }),
        )
        .await;
    assert_eq!(result.as_ref().ok().map(|reply| reply.origin), expected);
    if expected.is_none() {
        assert!(matches!(result, Err(FlowError::MalformedResponse(_))));
    }
}
