use chrono::NaiveDate;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::Account;
use crate::enums::{CaseStatus, ClientStatus, Priority};

/// Case summary embedded in every client record.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CaseSummary {
    pub priority: Priority,
    pub case_type: String,
    pub current_status: CaseStatus,
    pub next_step: String,
    pub due_date: NaiveDate,
}

/// A client of the firm.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Client {
    #[serde(flatten)]
    pub account: Account,
    pub status: ClientStatus,
    pub phone: Option<String>,
    pub country: String,
    pub visa_type: String,
    pub lawyer_id: Option<u32>,
    pub joined_date: NaiveDate,
    pub case: CaseSummary,
}

impl Client {
    #[must_use]
    pub const fn id(&self) -> u32 {
        self.account.id
    }
}
