//! Central schema registry for all Harbor types.
//!
//! The `SchemaRegistry` builds JSON Schemas from harbor-core types at
//! construction time using [`schemars::schema_for!`] and provides validation
//! via `jsonschema`.

use std::collections::HashMap;

use schemars::schema_for;

use crate::error::SchemaError;

/// Central store of all JSON Schemas in the Harbor system.
pub struct SchemaRegistry {
    schemas: HashMap<&'static str, serde_json::Value>,
}

/// Insert a schema into the map, converting the `schemars` output to a
/// `serde_json::Value`. Panics if `serde_json::to_value` fails (should be
/// infallible for valid `schemars` output).
macro_rules! register {
    ($map:expr, $name:expr, $ty:ty) => {
        $map.insert($name, serde_json::to_value(schema_for!($ty)).unwrap());
    };
}

impl SchemaRegistry {
    /// Build a new registry containing all entity and flow record schemas.
    ///
    /// # Panics
    ///
    /// Panics if `serde_json::to_value` fails on any `schemars`-generated
    /// schema. This is not expected in practice because `schemars` always
    /// produces valid JSON-serialisable output.
    #[must_use]
    pub fn new() -> Self {
        use harbor_core::entities;
        use harbor_core::flows;

        let mut schemas = HashMap::new();

        // --- Entity types (6) ---
        register!(schemas, "client", entities::Client);
        register!(schemas, "case_summary", entities::CaseSummary);
        register!(schemas, "team_member", entities::TeamMember);
        register!(schemas, "notification", entities::Notification);
        register!(schemas, "actor", entities::Actor);
        register!(schemas, "actor_profile", entities::ActorProfile);

        // --- Flow records (16) ---
        register!(schemas, "crs_score_input", flows::CrsScoreInput);
        register!(schemas, "crs_score_output", flows::CrsScoreOutput);
        register!(schemas, "risk_flags_input", flows::RiskFlagsInput);
        register!(schemas, "risk_flags_output", flows::RiskFlagsOutput);
        register!(schemas, "resume_draft_input", flows::ResumeDraftInput);
        register!(schemas, "resume_draft_output", flows::ResumeDraftOutput);
        register!(schemas, "cover_letter_input", flows::CoverLetterInput);
        register!(schemas, "cover_letter_output", flows::CoverLetterOutput);
        register!(schemas, "intake_review_input", flows::IntakeReviewInput);
        register!(schemas, "intake_review_output", flows::IntakeReviewOutput);
        register!(
            schemas,
            "document_analysis_input",
            flows::DocumentAnalysisInput
        );
        register!(
            schemas,
            "document_analysis_output",
            flows::DocumentAnalysisOutput
        );
        register!(schemas, "case_timeline_input", flows::CaseTimelineInput);
        register!(schemas, "case_timeline_output", flows::CaseTimelineOutput);
        register!(
            schemas,
            "document_checklist_input",
            flows::DocumentChecklistInput
        );
        register!(
            schemas,
            "document_checklist_output",
            flows::DocumentChecklistOutput
        );

        Self { schemas }
    }

    /// Get a schema by name. Returns `None` if not found.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&serde_json::Value> {
        self.schemas.get(name)
    }

    /// Validate a JSON value against a named schema.
    ///
    /// # Errors
    ///
    /// Returns `SchemaError::NotFound` if the schema name is unknown, or
    /// `SchemaError::ValidationFailed` if validation produces errors.
    pub fn validate(&self, name: &str, instance: &serde_json::Value) -> Result<(), SchemaError> {
        let schema = self
            .get(name)
            .ok_or_else(|| SchemaError::NotFound(name.to_string()))?;

        let validator = jsonschema::validator_for(schema)
            .map_err(|e| SchemaError::Generation(format!("{e}")))?;

        let errors: Vec<String> = validator
            .iter_errors(instance)
            .map(|e| format!("{e}"))
            .collect();

        if errors.is_empty() {
            Ok(())
        } else {
            Err(SchemaError::ValidationFailed { errors })
        }
    }

    /// List all registered schema names.
    #[must_use]
    pub fn list(&self) -> Vec<&'static str> {
        let mut names: Vec<&'static str> = self.schemas.keys().copied().collect();
        names.sort_unstable();
        names
    }

    /// Number of registered schemas.
    #[must_use]
    pub fn schema_count(&self) -> usize {
        self.schemas.len()
    }
}

impl Default for SchemaRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use harbor_core::seed;

    fn registry() -> SchemaRegistry {
        SchemaRegistry::new()
    }

    #[test]
    fn registry_has_expected_count() {
        // 6 entities + 8 flows * 2
        assert_eq!(registry().schema_count(), 22);
    }

    #[test]
    fn registry_list_is_sorted() {
        let names = registry().list();
        let mut sorted = names.clone();
        sorted.sort_unstable();
        assert_eq!(names, sorted);
    }

    #[test]
    fn every_flow_has_input_and_output() {
        let reg = registry();
        for flow in [
            "crs_score",
            "risk_flags",
            "resume_draft",
            "cover_letter",
            "intake_review",
            "document_analysis",
            "case_timeline",
            "document_checklist",
        ] {
            assert!(reg.get(&format!("{flow}_input")).is_some(), "{flow} input");
            assert!(reg.get(&format!("{flow}_output")).is_some(), "{flow} output");
        }
    }

    #[test]
    fn validate_seeded_client() {
        let reg = registry();
        let client = serde_json::to_value(seed::clients().remove(0)).unwrap();
        assert!(reg.validate("client", &client).is_ok());
    }

    #[test]
    fn validate_rejects_missing_required_field() {
        let reg = registry();
        let invalid = serde_json::json!({
            "visaType": "Express Entry",
            "currentStatus": "Submitted",
            // "caseType" and "startDate" are missing
        });
        let result = reg.validate("case_timeline_input", &invalid);
        if let Err(SchemaError::ValidationFailed { errors }) = result {
            assert!(!errors.is_empty());
        } else {
            panic!("Expected ValidationFailed");
        }
    }

    #[test]
    fn validate_rejects_mistyped_field() {
        let reg = registry();
        let invalid = serde_json::json!({
            "visaType": "Express Entry",
            "countryOfCitizenship": "Kenya",
            "hasSpouse": "yes",
            "hasDependents": false
        });
        assert!(reg.validate("document_checklist_input", &invalid).is_err());
    }

    #[test]
    fn validate_rejects_invalid_enum() {
        let reg = registry();
        let invalid = serde_json::json!({
            "overallRisk": "extreme",
            "flags": []
        });
        assert!(reg.validate("risk_flags_output", &invalid).is_err());
    }

    #[test]
    fn validate_nonexistent_schema_returns_not_found() {
        let result = registry().validate("bogus", &serde_json::json!({}));
        assert!(matches!(result, Err(SchemaError::NotFound(_))));
    }
}
