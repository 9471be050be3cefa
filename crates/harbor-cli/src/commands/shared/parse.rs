use std::fmt::Display;
use std::str::FromStr;

use serde::de::DeserializeOwned;

/// Parse a snake_case enum value using serde-deserialization.
pub fn parse_enum<T>(raw: &str, field: &str) -> anyhow::Result<T>
where
    T: DeserializeOwned,
{
    let normalized = raw.trim().to_ascii_lowercase().replace('-', "_");
    let json = format!("\"{normalized}\"");
    serde_json::from_str(&json).map_err(|error| anyhow::anyhow!("invalid {field} '{raw}': {error}"))
}

/// Parse a value through its `FromStr` impl, naming the field on failure.
pub fn parse_field<T>(raw: &str, field: &str) -> anyhow::Result<T>
where
    T: FromStr,
    T::Err: Display,
{
    raw.parse::<T>()
        .map_err(|error| anyhow::anyhow!("invalid {field} '{raw}': {error}"))
}

#[cfg(test)]
mod tests {
    use harbor_core::enums::{ClientStatus, NotificationTarget, Role};

    use super::{parse_enum, parse_field};

    #[test]
    fn parses_snake_case_role() {
        let role: Role = parse_enum("Superadmin", "role").expect("role should parse");
        assert_eq!(role, Role::Superadmin);
    }

    #[test]
    fn errors_on_invalid_role() {
        let err = parse_enum::<Role>("partner", "role").expect_err("should fail");
        assert!(err.to_string().contains("invalid role 'partner'"));
    }

    #[test]
    fn parses_display_names_via_from_str() {
        let status: ClientStatus = parse_field("on-hold", "status").expect("status should parse");
        assert_eq!(status, ClientStatus::OnHold);
        let target: NotificationTarget =
            parse_field("All Users", "target").expect("target should parse");
        assert_eq!(target, NotificationTarget::AllUsers);
    }

    #[test]
    fn from_str_errors_name_the_field() {
        let err = parse_field::<ClientStatus>("archived", "status").expect_err("should fail");
        assert!(err.to_string().starts_with("invalid status 'archived'"));
    }
}
