//! Current-page tracking per role context.

use harbor_core::enums::Role;

use crate::pages::{AdminPage, ClientPage, DashboardPage, LawyerPage, Page, SuperadminPage};

/// Current page inside one role's registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageCursor<P: Page> {
    current: P,
}

impl<P: Page> PageCursor<P> {
    #[must_use]
    pub const fn new() -> Self {
        Self { current: P::DEFAULT }
    }

    #[must_use]
    pub const fn current(&self) -> P {
        self.current
    }

    /// Move to `key`; unknown keys land on the default page.
    pub fn navigate(&mut self, key: &str) -> P {
        self.current = P::resolve(key);
        self.current
    }

    pub fn go_to(&mut self, page: P) {
        self.current = page;
    }
}

impl<P: Page> Default for PageCursor<P> {
    fn default() -> Self {
        Self::new()
    }
}

/// The page cursor for the active role context.
///
/// Only one variant exists at a time, so switching roles drops the previous
/// role's navigation state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DashboardSession {
    Client(PageCursor<ClientPage>),
    Lawyer(PageCursor<LawyerPage>),
    Admin(PageCursor<AdminPage>),
    Superadmin(PageCursor<SuperadminPage>),
}

impl DashboardSession {
    /// Fresh session on `role`'s default page.
    #[must_use]
    pub const fn for_role(role: Role) -> Self {
        match role {
            Role::Client => Self::Client(PageCursor::new()),
            Role::Lawyer => Self::Lawyer(PageCursor::new()),
            Role::Admin => Self::Admin(PageCursor::new()),
            Role::Superadmin => Self::Superadmin(PageCursor::new()),
        }
    }

    #[must_use]
    pub const fn role(&self) -> Role {
        match self {
            Self::Client(_) => Role::Client,
            Self::Lawyer(_) => Role::Lawyer,
            Self::Admin(_) => Role::Admin,
            Self::Superadmin(_) => Role::Superadmin,
        }
    }

    #[must_use]
    pub const fn current(&self) -> DashboardPage {
        match self {
            Self::Client(cursor) => DashboardPage::Client(cursor.current()),
            Self::Lawyer(cursor) => DashboardPage::Lawyer(cursor.current()),
            Self::Admin(cursor) => DashboardPage::Admin(cursor.current()),
            Self::Superadmin(cursor) => DashboardPage::Superadmin(cursor.current()),
        }
    }

    pub fn navigate(&mut self, key: &str) -> DashboardPage {
        match self {
            Self::Client(cursor) => DashboardPage::Client(cursor.navigate(key)),
            Self::Lawyer(cursor) => DashboardPage::Lawyer(cursor.navigate(key)),
            Self::Admin(cursor) => DashboardPage::Admin(cursor.navigate(key)),
            Self::Superadmin(cursor) => DashboardPage::Superadmin(cursor.navigate(key)),
        }
    }

    /// Switch role context. Staying in the same role keeps the cursor.
    pub fn switch_role(&mut self, role: Role) {
        if self.role() != role {
            tracing::debug!(from = %self.role(), to = %role, "switching dashboard role");
            *self = Self::for_role(role);
        }
    }
}
