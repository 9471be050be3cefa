//! Application paths known to the guard.

use harbor_core::enums::Role;

pub const LOGIN: &str = "/login";
pub const NOT_AUTHORIZED: &str = "/not-authorized";
pub const LAWYER_PENDING_APPROVAL: &str = "/lawyer/pending-approval";
pub const LAWYER_ONBOARDING: &str = "/lawyer/onboarding";
pub const LAWYER_BILLING: &str = "/lawyer/billing";

/// Marketing and auth pages reachable without a session.
pub const PUBLIC_PATHS: &[&str] = &[
    "/",
    LOGIN,
    "/signup",
    "/forgot-password",
    NOT_AUTHORIZED,
    "/about",
    "/features",
    "/pricing",
    "/contact",
    "/offline",
];

/// Where a path points.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteTarget<'a> {
    Public,
    /// Inside a role's dashboard area; `page` is the remainder after the area
    /// segment (empty for the area root).
    Area { role: Role, page: &'a str },
    /// Not public and not under any role area.
    Unknown,
}

/// Strip query string, fragment, and trailing slash.
#[must_use]
pub fn normalize(path: &str) -> &str {
    let path = path.split(['?', '#']).next().unwrap_or_default();
    let trimmed = path.trim_end_matches('/');
    if trimmed.is_empty() { "/" } else { trimmed }
}

#[must_use]
pub fn classify(path: &str) -> RouteTarget<'_> {
    let path = normalize(path);
    if PUBLIC_PATHS.contains(&path) {
        return RouteTarget::Public;
    }

    let mut segments = path.trim_start_matches('/').splitn(2, '/');
    let area = segments.next().unwrap_or_default();
    match Role::from_area(area) {
        Some(role) => RouteTarget::Area {
            role,
            page: segments.next().unwrap_or_default(),
        },
        None => RouteTarget::Unknown,
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("/", RouteTarget::Public)]
    #[case("/login?next=/lawyer", RouteTarget::Public)]
    #[case("/pricing/", RouteTarget::Public)]
    #[case("/lawyer/dashboard", RouteTarget::Area { role: Role::Lawyer, page: "dashboard" })]
    #[case("/client", RouteTarget::Area { role: Role::Client, page: "" })]
    #[case("/superadmin/firms/3", RouteTarget::Area { role: Role::Superadmin, page: "firms/3" })]
    #[case("/partner/dashboard", RouteTarget::Unknown)]
    fn classifies_paths(#[case] path: &str, #[case] expected: RouteTarget<'static>) {
        assert_eq!(classify(path), expected);
    }

    #[test]
    fn normalize_handles_fragments() {
        assert_eq!(normalize("/lawyer/billing/#plans"), "/lawyer/billing");
        assert_eq!(normalize(""), "/");
    }
}
