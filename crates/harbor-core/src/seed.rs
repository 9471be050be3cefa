//! Static mock data loaded when no hosted backend is configured.
//!
//! Every collection is rebuilt on each call, so callers own their copy.

use chrono::NaiveDate;

use crate::entities::{Account, CaseSummary, Client, LawyerProfile, Notification, TeamAccess, TeamMember};
use crate::enums::{CaseStatus, ClientStatus, MemberStatus, NotificationTarget, Priority};

/// Password shared by every seeded account.
pub const DEMO_PASSWORD: &str = "password123";

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

fn account(id: u32, name: &str, email: &str) -> Account {
    Account {
        id,
        name: name.to_string(),
        email: email.to_string(),
        password: DEMO_PASSWORD.to_string(),
    }
}

struct ClientRow {
    id: u32,
    name: &'static str,
    email: &'static str,
    status: ClientStatus,
    country: &'static str,
    visa_type: &'static str,
    lawyer_id: Option<u32>,
    joined: (i32, u32, u32),
    priority: Priority,
    case_type: &'static str,
    stage: CaseStatus,
    next_step: &'static str,
    due: (i32, u32, u32),
}

const CLIENTS: &[ClientRow] = &[
    ClientRow {
        id: 1,
        name: "Amara Okafor",
        email: "amara.okafor@example.com",
        status: ClientStatus::Active,
        country: "Nigeria",
        visa_type: "Express Entry",
        lawyer_id: Some(1),
        joined: (2024, 1, 15),
        priority: Priority::High,
        case_type: "Permanent Residence",
        stage: CaseStatus::DocumentCollection,
        next_step: "Upload educational credential assessment",
        due: (2024, 6, 30),
    },
    ClientRow {
        id: 2,
        name: "Luis Fernandez",
        email: "luis.fernandez@example.com",
        status: ClientStatus::Active,
        country: "Mexico",
        visa_type: "Study Permit",
        lawyer_id: Some(1),
        joined: (2024, 2, 3),
        priority: Priority::Medium,
        case_type: "Study Permit",
        stage: CaseStatus::Submitted,
        next_step: "Await biometrics instruction letter",
        due: (2024, 7, 12),
    },
    ClientRow {
        id: 3,
        name: "Mei Chen",
        email: "mei.chen@example.com",
        status: ClientStatus::OnHold,
        country: "China",
        visa_type: "Work Permit",
        lawyer_id: Some(3),
        joined: (2023, 11, 20),
        priority: Priority::Low,
        case_type: "LMIA Work Permit",
        stage: CaseStatus::ApplicationPreparation,
        next_step: "Employer to provide LMIA approval",
        due: (2024, 8, 1),
    },
    ClientRow {
        id: 4,
        name: "Rahul Verma",
        email: "rahul.verma@example.com",
        status: ClientStatus::Active,
        country: "India",
        visa_type: "Family Sponsorship",
        lawyer_id: Some(4),
        joined: (2024, 3, 8),
        priority: Priority::High,
        case_type: "Spousal Sponsorship",
        stage: CaseStatus::UnderReview,
        next_step: "Prepare for interview",
        due: (2024, 5, 22),
    },
    ClientRow {
        id: 5,
        name: "Sofia Rossi",
        email: "sofia.rossi@example.com",
        status: ClientStatus::Closed,
        country: "Italy",
        visa_type: "Visitor Visa",
        lawyer_id: Some(1),
        joined: (2023, 6, 2),
        priority: Priority::Low,
        case_type: "Temporary Resident Visa",
        stage: CaseStatus::Decision,
        next_step: "Case closed",
        due: (2023, 12, 15),
    },
    ClientRow {
        id: 6,
        name: "Yusuf Demir",
        email: "yusuf.demir@example.com",
        status: ClientStatus::Blocked,
        country: "Turkey",
        visa_type: "Express Entry",
        lawyer_id: None,
        joined: (2024, 4, 1),
        priority: Priority::Medium,
        case_type: "Permanent Residence",
        stage: CaseStatus::Consultation,
        next_step: "Schedule initial consultation",
        due: (2024, 4, 30),
    },
    ClientRow {
        id: 7,
        name: "Grace Mensah",
        email: "grace.mensah@example.com",
        status: ClientStatus::Active,
        country: "Ghana",
        visa_type: "Provincial Nominee",
        lawyer_id: Some(4),
        joined: (2024, 4, 18),
        priority: Priority::Medium,
        case_type: "Provincial Nomination",
        stage: CaseStatus::Consultation,
        next_step: "Complete intake questionnaire",
        due: (2024, 5, 10),
    },
];

/// Seeded clients.
#[must_use]
pub fn clients() -> Vec<Client> {
    CLIENTS
        .iter()
        .map(|row| Client {
            account: account(row.id, row.name, row.email),
            status: row.status,
            phone: Some(format!("+1-555-01{:02}", row.id)),
            country: row.country.to_string(),
            visa_type: row.visa_type.to_string(),
            lawyer_id: row.lawyer_id,
            joined_date: date(row.joined.0, row.joined.1, row.joined.2),
            case: CaseSummary {
                priority: row.priority,
                case_type: row.case_type.to_string(),
                current_status: row.stage,
                next_step: row.next_step.to_string(),
                due_date: date(row.due.0, row.due.1, row.due.2),
            },
        })
        .collect()
}

fn lawyer(onboarding_complete: bool, billing_set_up: bool, specialization: &str) -> TeamAccess {
    TeamAccess::Lawyer(LawyerProfile {
        onboarding_complete,
        billing_set_up,
        specialization: Some(specialization.to_string()),
    })
}

/// Seeded team members: lawyers in every onboarding state plus one admin
/// and one superadmin.
#[must_use]
pub fn team_members() -> Vec<TeamMember> {
    vec![
        TeamMember {
            account: account(1, "Sarah Mitchell", "sarah.mitchell@harborlaw.example"),
            title: "Senior Immigration Lawyer".into(),
            status: MemberStatus::Active,
            access: lawyer(true, true, "Economic Immigration"),
        },
        TeamMember {
            account: account(2, "James Carter", "james.carter@harborlaw.example"),
            title: "Immigration Lawyer".into(),
            status: MemberStatus::AwaitingApproval,
            access: lawyer(false, false, "Refugee Claims"),
        },
        TeamMember {
            account: account(3, "Priya Nair", "priya.nair@harborlaw.example"),
            title: "Associate Lawyer".into(),
            status: MemberStatus::Active,
            access: lawyer(false, false, "Work Permits"),
        },
        TeamMember {
            account: account(4, "Daniel Brooks", "daniel.brooks@harborlaw.example"),
            title: "Immigration Lawyer".into(),
            status: MemberStatus::Active,
            access: lawyer(true, false, "Family Sponsorship"),
        },
        TeamMember {
            account: account(5, "Emma Wilson", "emma.wilson@harborlaw.example"),
            title: "Office Administrator".into(),
            status: MemberStatus::Active,
            access: TeamAccess::Admin,
        },
        TeamMember {
            account: account(6, "Olivia Grant", "olivia.grant@harborlaw.example"),
            title: "Platform Owner".into(),
            status: MemberStatus::Active,
            access: TeamAccess::Superadmin,
        },
        TeamMember {
            account: account(7, "Marcus Reed", "marcus.reed@harborlaw.example"),
            title: "Immigration Lawyer".into(),
            status: MemberStatus::Rejected,
            access: lawyer(false, false, "Business Immigration"),
        },
    ]
}

/// Seeded notifications, including one soft-deleted entry.
#[must_use]
pub fn notifications() -> Vec<Notification> {
    let entry = |id: u32,
                 title: &str,
                 message: &str,
                 target: NotificationTarget,
                 day: u32,
                 is_read: bool,
                 is_deleted: bool| Notification {
        id,
        title: title.to_string(),
        message: message.to_string(),
        target,
        date: date(2024, 5, day),
        is_read,
        is_deleted,
    };

    vec![
        entry(
            1,
            "Scheduled maintenance",
            "The portal will be unavailable Saturday 02:00-04:00 UTC.",
            NotificationTarget::AllUsers,
            2,
            false,
            false,
        ),
        entry(
            2,
            "New draw results",
            "The latest Express Entry draw cut-off was 524 points.",
            NotificationTarget::Clients,
            6,
            false,
            false,
        ),
        entry(
            3,
            "Billing settings updated",
            "Review the new retainer templates before your next invoice run.",
            NotificationTarget::Lawyers,
            8,
            true,
            false,
        ),
        entry(
            4,
            "Document upload reminder",
            "Upload certified translations for any non-English documents.",
            NotificationTarget::Clients,
            11,
            false,
            false,
        ),
        entry(
            5,
            "Policy change briefing",
            "Internal briefing on the new study permit cap, Thursday 10:00.",
            NotificationTarget::Lawyers,
            14,
            false,
            false,
        ),
        entry(
            6,
            "Holiday hours",
            "Office closed on Victoria Day.",
            NotificationTarget::AllUsers,
            17,
            false,
            true,
        ),
    ]
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn ids_are_unique_per_collection() {
        let client_ids: HashSet<u32> = clients().iter().map(Client::id).collect();
        assert_eq!(client_ids.len(), clients().len());

        let team_ids: HashSet<u32> = team_members().iter().map(TeamMember::id).collect();
        assert_eq!(team_ids.len(), team_members().len());

        let notification_ids: HashSet<u32> = notifications().iter().map(|n| n.id).collect();
        assert_eq!(notification_ids.len(), notifications().len());
    }

    #[test]
    fn emails_are_unique_across_collections() {
        let mut emails = HashSet::new();
        for client in clients() {
            assert!(emails.insert(client.account.email.to_lowercase()));
        }
        for member in team_members() {
            assert!(emails.insert(member.account.email.to_lowercase()));
        }
    }

    #[test]
    fn seeded_dates_are_valid() {
        let fallback = NaiveDate::default();
        assert!(clients().iter().all(|c| c.joined_date != fallback));
        assert!(notifications().iter().all(|n| n.date != fallback));
    }

    #[test]
    fn exactly_one_notification_is_deleted() {
        assert_eq!(notifications().iter().filter(|n| n.is_deleted).count(), 1);
    }
}
