//! Page enums per role.

use std::fmt;

use harbor_core::enums::Role;
use serde::Serialize;

/// A page in one role's dashboard.
pub trait Page: Copy + Eq + fmt::Debug + 'static {
    const ROLE: Role;
    const DEFAULT: Self;
    const ALL: &'static [Self];

    fn key(self) -> &'static str;
    fn title(self) -> &'static str;

    #[must_use]
    fn from_key(key: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|page| page.key() == key)
    }

    /// Like [`Page::from_key`], but unknown keys fall back to [`Page::DEFAULT`].
    #[must_use]
    fn resolve(key: &str) -> Self {
        Self::from_key(key.trim()).unwrap_or_else(|| {
            tracing::debug!(role = %Self::ROLE, key, "unknown page key; using default");
            Self::DEFAULT
        })
    }
}

macro_rules! pages {
    (
        $(#[$meta:meta])*
        $name:ident: $role:expr, default $default:ident {
            $($variant:ident => $key:literal, $title:literal;)+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
        pub enum $name {
            $(#[serde(rename = $key)] $variant,)+
        }

        impl Page for $name {
            const ROLE: Role = $role;
            const DEFAULT: Self = Self::$default;
            const ALL: &'static [Self] = &[$(Self::$variant,)+];

            fn key(self) -> &'static str {
                match self {
                    $(Self::$variant => $key,)+
                }
            }

            fn title(self) -> &'static str {
                match self {
                    $(Self::$variant => $title,)+
                }
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::$default
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.key())
            }
        }
    };
}

pages! {
    /// Client portal pages.
    ClientPage: Role::Client, default Overview {
        Overview => "overview", "Overview";
        Case => "case", "My Case";
        Documents => "documents", "Documents";
        Appointments => "appointments", "Appointments";
        Billing => "billing", "Billing";
        Messages => "messages", "Messages";
        Notifications => "notifications", "Notifications";
        AiTools => "ai-tools", "AI Tools";
        Profile => "profile", "Profile";
    }
}

pages! {
    /// Lawyer workspace pages.
    LawyerPage: Role::Lawyer, default Dashboard {
        Dashboard => "dashboard", "Dashboard";
        Clients => "clients", "Clients";
        Leads => "leads", "Leads";
        Documents => "documents", "Documents";
        Appointments => "appointments", "Appointments";
        Billing => "billing", "Billing";
        Notifications => "notifications", "Notifications";
        AiTools => "ai-tools", "AI Tools";
        Team => "team", "Team";
        Profile => "profile", "Profile";
    }
}

pages! {
    /// Firm administration pages.
    AdminPage: Role::Admin, default Dashboard {
        Dashboard => "dashboard", "Dashboard";
        Clients => "clients", "Clients";
        Team => "team", "Team";
        Notifications => "notifications", "Notifications";
        Billing => "billing", "Billing";
        Reports => "reports", "Reports";
        Settings => "settings", "Settings";
    }
}

pages! {
    /// Platform owner pages.
    SuperadminPage: Role::Superadmin, default Dashboard {
        Dashboard => "dashboard", "Dashboard";
        Firms => "firms", "Firms";
        Lawyers => "lawyers", "Lawyers";
        Notifications => "notifications", "Notifications";
        Billing => "billing", "Billing";
        Settings => "settings", "Settings";
    }
}

/// A page from any role's registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "role", content = "page", rename_all = "snake_case")]
pub enum DashboardPage {
    Client(ClientPage),
    Lawyer(LawyerPage),
    Admin(AdminPage),
    Superadmin(SuperadminPage),
}

impl DashboardPage {
    /// Resolve `key` in `role`'s registry, falling back to its default page.
    #[must_use]
    pub fn resolve(role: Role, key: &str) -> Self {
        match role {
            Role::Client => Self::Client(ClientPage::resolve(key)),
            Role::Lawyer => Self::Lawyer(LawyerPage::resolve(key)),
            Role::Admin => Self::Admin(AdminPage::resolve(key)),
            Role::Superadmin => Self::Superadmin(SuperadminPage::resolve(key)),
        }
    }

    #[must_use]
    pub fn default_for(role: Role) -> Self {
        match role {
            Role::Client => Self::Client(ClientPage::DEFAULT),
            Role::Lawyer => Self::Lawyer(LawyerPage::DEFAULT),
            Role::Admin => Self::Admin(AdminPage::DEFAULT),
            Role::Superadmin => Self::Superadmin(SuperadminPage::DEFAULT),
        }
    }

    /// Every page registered for `role`, in menu order.
    #[must_use]
    pub fn all_for(role: Role) -> Vec<Self> {
        match role {
            Role::Client => ClientPage::ALL.iter().copied().map(Self::Client).collect(),
            Role::Lawyer => LawyerPage::ALL.iter().copied().map(Self::Lawyer).collect(),
            Role::Admin => AdminPage::ALL.iter().copied().map(Self::Admin).collect(),
            Role::Superadmin => SuperadminPage::ALL
                .iter()
                .copied()
                .map(Self::Superadmin)
                .collect(),
        }
    }

    #[must_use]
    pub const fn role(self) -> Role {
        match self {
            Self::Client(_) => Role::Client,
            Self::Lawyer(_) => Role::Lawyer,
            Self::Admin(_) => Role::Admin,
            Self::Superadmin(_) => Role::Superadmin,
        }
    }

    #[must_use]
    pub fn key(self) -> &'static str {
        match self {
            Self::Client(page) => page.key(),
            Self::Lawyer(page) => page.key(),
            Self::Admin(page) => page.key(),
            Self::Superadmin(page) => page.key(),
        }
    }

    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            Self::Client(page) => page.title(),
            Self::Lawyer(page) => page.title(),
            Self::Admin(page) => page.title(),
            Self::Superadmin(page) => page.title(),
        }
    }

    /// Route path inside the role's area, e.g. `/lawyer/leads`.
    #[must_use]
    pub fn path(self) -> String {
        format!("/{}/{}", self.role().area(), self.key())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(Role::Client, "overview")]
    #[case(Role::Lawyer, "dashboard")]
    #[case(Role::Admin, "dashboard")]
    #[case(Role::Superadmin, "dashboard")]
    fn unknown_key_falls_back_to_default(#[case] role: Role, #[case] default_key: &str) {
        assert_eq!(DashboardPage::resolve(role, "no-such-page").key(), default_key);
        assert_eq!(DashboardPage::resolve(role, "").key(), default_key);
        assert_eq!(DashboardPage::default_for(role).key(), default_key);
    }

    #[test]
    fn keys_are_unique_and_resolve_to_themselves() {
        for role in Role::ALL {
            let pages = DashboardPage::all_for(role);
            for page in &pages {
                assert_eq!(DashboardPage::resolve(role, page.key()), *page);
                assert_eq!(page.role(), role);
            }
            let mut keys: Vec<_> = pages.iter().map(|p| p.key()).collect();
            keys.sort_unstable();
            keys.dedup();
            assert_eq!(keys.len(), pages.len(), "{role}");
        }
    }

    #[test]
    fn registry_sizes() {
        assert_eq!(ClientPage::ALL.len(), 9);
        assert_eq!(LawyerPage::ALL.len(), 10);
        assert_eq!(AdminPage::ALL.len(), 7);
        assert_eq!(SuperadminPage::ALL.len(), 6);
    }

    #[test]
    fn hyphenated_key_round_trips() {
        assert_eq!(LawyerPage::from_key("ai-tools"), Some(LawyerPage::AiTools));
        assert_eq!(LawyerPage::AiTools.to_string(), "ai-tools");
        assert_eq!(
            serde_json::to_value(DashboardPage::Lawyer(LawyerPage::AiTools)).unwrap(),
            serde_json::json!({"role": "lawyer", "page": "ai-tools"})
        );
    }

    #[test]
    fn path_uses_role_area() {
        assert_eq!(DashboardPage::Client(ClientPage::Case).path(), "/client/case");
        assert_eq!(
            DashboardPage::Superadmin(SuperadminPage::Firms).path(),
            "/superadmin/firms"
        );
    }
}
