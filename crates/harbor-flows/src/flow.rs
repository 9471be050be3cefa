//! The flow abstraction.

use serde::{Serialize, de::DeserializeOwned};

/// A named model-backed operation with typed input and output.
///
/// `NAME` doubles as the schema registry prefix: the input is validated
/// against `{NAME}_input` and the model reply against `{NAME}_output`.
pub trait Flow {
    const NAME: &'static str;
    const PROMPT: &'static str;

    type Input: Serialize + DeserializeOwned + Send + Sync;
    type Output: Serialize + DeserializeOwned + Send;

    /// Canned answer returned when the model fails. Most flows have none.
    #[must_use]
    fn fallback() -> Option<Self::Output> {
        None
    }
}

/// Where a flow's output came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FlowOrigin {
    Model,
    Fallback,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FlowReply<T> {
    pub output: T,
    pub origin: FlowOrigin,
}
