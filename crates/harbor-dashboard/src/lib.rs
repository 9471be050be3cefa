//! # harbor-dashboard
//!
//! Dashboard page registries for the four role areas.
//!
//! Each role has a closed page enum ([`ClientPage`], [`LawyerPage`],
//! [`AdminPage`], [`SuperadminPage`]). Unknown keys resolve to the role's
//! default page. [`DashboardSession`] holds the cursor for exactly one role
//! context at a time, and [`render`] turns a page plus the store into a
//! serialisable [`PageView`].

mod cursor;
mod pages;
mod render;
mod view;

pub use cursor::{DashboardSession, PageCursor};
pub use pages::{AdminPage, ClientPage, DashboardPage, LawyerPage, Page, SuperadminPage};
pub use render::{RenderContext, render};
pub use view::{
    CaseProgressView, ClientRowView, LeadView, NotificationFeedView, PageBody, PageView,
    StatCard, StepState, StepView, TeamRowView,
};
