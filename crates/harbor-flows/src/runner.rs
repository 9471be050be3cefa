//! Flow execution.

use harbor_config::FlowsConfig;
use harbor_schema::SchemaRegistry;
use serde_json::Value;

use crate::catalogue::{
    CaseTimeline, CoverLetter, CrsScore, DocumentAnalysis, DocumentChecklist, FlowKind,
    IntakeReview, ResumeDraft, RiskFlags,
};
use crate::error::FlowError;
use crate::flow::{Flow, FlowOrigin, FlowReply};
use crate::model::{GenerativeModel, ModelRequest};

/// Runs flows against one model.
///
/// Superseded runs are not cancelled; callers that care drop the future.
pub struct FlowRunner<M> {
    model: M,
    registry: SchemaRegistry,
    allow_fallback: bool,
}

impl<M: GenerativeModel + Sync> FlowRunner<M> {
    #[must_use]
    pub fn new(model: M, config: &FlowsConfig) -> Self {
        Self {
            model,
            registry: SchemaRegistry::new(),
            allow_fallback: config.allow_fallback,
        }
    }

    #[must_use]
    pub const fn model(&self) -> &M {
        &self.model
    }

    /// Run `F` on `input`.
    ///
    /// # Errors
    ///
    /// - [`FlowError::InvalidInput`] if `input` fails its schema. Never falls back.
    /// - Any model or output error, unless `F` has a fallback and fallbacks
    ///   are allowed, in which case the fallback is returned with
    ///   [`FlowOrigin::Fallback`].
    pub async fn run<F: Flow>(&self, input: &F::Input) -> Result<FlowReply<F::Output>, FlowError> {
        let input_json = serde_json::to_value(input)?;
        self.validate_input(F::NAME, &input_json)?;

        match self.attempt::<F>(&input_json).await {
            Ok(output) => Ok(FlowReply {
                output,
                origin: FlowOrigin::Model,
            }),
            Err(error) => match F::fallback() {
                Some(fallback) if self.allow_fallback => {
                    tracing::warn!(flow = F::NAME, %error, "model failed; returning canned fallback");
                    Ok(FlowReply {
                        output: fallback,
                        origin: FlowOrigin::Fallback,
                    })
                }
                _ => Err(error),
            },
        }
    }

    /// Run a flow selected at runtime on untyped JSON input.
    ///
    /// # Errors
    ///
    /// Same as [`Self::run`]; input that fails its schema is reported as
    /// [`FlowError::InvalidInput`] before any deserialisation.
    pub async fn run_json(
        &self,
        kind: FlowKind,
        input: Value,
    ) -> Result<FlowReply<Value>, FlowError> {
        match kind {
            FlowKind::CrsScore => self.run_value::<CrsScore>(input).await,
            FlowKind::RiskFlags => self.run_value::<RiskFlags>(input).await,
            FlowKind::ResumeDraft => self.run_value::<ResumeDraft>(input).await,
            FlowKind::CoverLetter => self.run_value::<CoverLetter>(input).await,
            FlowKind::IntakeReview => self.run_value::<IntakeReview>(input).await,
            FlowKind::DocumentAnalysis => self.run_value::<DocumentAnalysis>(input).await,
            FlowKind::CaseTimeline => self.run_value::<CaseTimeline>(input).await,
            FlowKind::DocumentChecklist => self.run_value::<DocumentChecklist>(input).await,
        }
    }

    async fn run_value<F: Flow>(&self, input: Value) -> Result<FlowReply<Value>, FlowError> {
        self.validate_input(F::NAME, &input)?;
        let typed: F::Input = serde_json::from_value(input).map_err(|e| FlowError::InvalidInput {
            flow: F::NAME,
            errors: vec![e.to_string()],
        })?;
        let reply = self.run::<F>(&typed).await?;
        Ok(FlowReply {
            output: serde_json::to_value(reply.output)?,
            origin: reply.origin,
        })
    }

    fn validate_input(&self, flow: &'static str, input: &Value) -> Result<(), FlowError> {
        self.registry
            .validate(&format!("{flow}_input"), input)
            .map_err(|e| FlowError::from_validation(flow, e, true))
    }

    async fn attempt<F: Flow>(&self, input: &Value) -> Result<F::Output, FlowError> {
        let output_schema = format!("{}_output", F::NAME);
        let request = ModelRequest {
            flow: F::NAME,
            prompt: self.build_prompt(F::PROMPT, input, &output_schema)?,
        };

        let raw = self.model.generate(&request).await?;
        self.registry
            .validate(&output_schema, &raw)
            .map_err(|e| FlowError::from_validation(F::NAME, e, false))?;
        Ok(serde_json::from_value(raw)?)
    }

    fn build_prompt(
        &self,
        prompt: &str,
        input: &Value,
        output_schema: &str,
    ) -> Result<String, FlowError> {
        let schema = self
            .registry
            .get(output_schema)
            .ok_or_else(|| harbor_schema::SchemaError::NotFound(output_schema.to_string()))?;
        Ok(format!(
            "{prompt}\n\nInput:\n{}\n\nRespond with a single JSON object that conforms to this JSON Schema:\n{}",
            serde_json::to_string_pretty(input)?,
            serde_json::to_string_pretty(schema)?,
        ))
    }
}
