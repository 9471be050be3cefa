//! Serialisable view models produced by [`crate::render`].

use chrono::NaiveDate;
use harbor_core::entities::{ActorProfile, Notification};
use harbor_core::enums::{CaseStatus, ClientStatus, MemberStatus, Priority, Role};
use serde::Serialize;

/// A rendered page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageView {
    pub role: Role,
    pub key: &'static str,
    pub title: &'static str,
    pub body: PageBody,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", content = "data", rename_all = "snake_case")]
pub enum PageBody {
    Statistics(Vec<StatCard>),
    CaseProgress(CaseProgressView),
    ClientTable(Vec<ClientRowView>),
    LeadPipeline(Vec<LeadView>),
    TeamRoster(Vec<TeamRowView>),
    NotificationFeed(NotificationFeedView),
    Profile(ActorProfile),
    /// Page whose content lives outside the store; lists its sections.
    Sections(Vec<&'static str>),
    NotFound { message: String },
}

impl PageBody {
    pub(crate) fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatCard {
    pub label: &'static str,
    pub value: String,
}

impl StatCard {
    pub(crate) fn new(label: &'static str, value: impl ToString) -> Self {
        Self {
            label,
            value: value.to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StepState {
    Completed,
    Current,
    Upcoming,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StepView {
    pub stage: CaseStatus,
    pub state: StepState,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CaseProgressView {
    pub case_type: String,
    pub visa_type: String,
    pub current_status: CaseStatus,
    pub progress_percent: u8,
    pub steps: Vec<StepView>,
    pub next_step: String,
    pub due_date: NaiveDate,
    pub lawyer: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientRowView {
    pub id: u32,
    pub name: String,
    pub email: String,
    pub status: ClientStatus,
    pub country: String,
    pub visa_type: String,
    pub case_status: CaseStatus,
    pub priority: Priority,
    pub lawyer: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LeadView {
    pub id: u32,
    pub name: String,
    pub email: String,
    pub visa_type: String,
    pub country: String,
    pub joined_date: NaiveDate,
    pub next_step: String,
    /// `false` for leads not yet assigned to any lawyer.
    pub assigned: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamRowView {
    pub id: u32,
    pub name: String,
    pub email: String,
    pub title: String,
    pub role: Role,
    pub status: MemberStatus,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NotificationFeedView {
    pub unread: usize,
    pub items: Vec<Notification>,
}
