use harbor_config::HarborConfig;

/// Emit warnings for env keys that look like Harbor settings but did not
/// reach their section, usually a single underscore instead of `__`.
pub fn warn_unconfigured(config: &HarborConfig) {
    for warning in collect_unconfigured_warnings(config, std::env::vars()) {
        tracing::warn!("{warning}");
    }
}

fn collect_unconfigured_warnings<I>(config: &HarborConfig, env: I) -> Vec<String>
where
    I: IntoIterator<Item = (String, String)>,
{
    let env_keys = env.into_iter().map(|(key, _)| key).collect::<Vec<_>>();
    let sections = [
        (
            "backend",
            config.backend.is_configured(),
            "HARBOR_BACKEND",
            "HARBOR_BACKEND__API_KEY",
        ),
        (
            "genai",
            config.genai.is_configured(),
            "HARBOR_GENAI",
            "HARBOR_GENAI__API_KEY",
        ),
    ];

    sections
        .into_iter()
        .filter(|(_, configured, prefix, _)| !configured && has_env_prefix(&env_keys, prefix))
        .map(|(section, _, prefix, example)| {
            format!(
                "{section} config appears default while {prefix}* env vars exist. Use double underscores (example: {example})."
            )
        })
        .collect()
}

fn has_env_prefix(keys: &[String], prefix: &str) -> bool {
    keys.iter().any(|key| key.starts_with(prefix))
}

#[cfg(test)]
mod tests {
    use harbor_config::{BackendConfig, GenAiConfig, HarborConfig};

    use super::collect_unconfigured_warnings;

    #[test]
    fn warns_for_single_underscore_keys() {
        let warnings = collect_unconfigured_warnings(
            &HarborConfig::default(),
            vec![
                ("HARBOR_BACKEND_API_KEY".to_string(), "key".to_string()),
                ("HARBOR_GENAI_API_KEY".to_string(), "key".to_string()),
            ],
        );

        assert_eq!(warnings.len(), 2);
        assert!(warnings[0].starts_with("backend config"));
        assert!(warnings[1].contains("HARBOR_GENAI__API_KEY"));
    }

    #[test]
    fn silent_without_matching_env() {
        let warnings = collect_unconfigured_warnings(
            &HarborConfig::default(),
            vec![("HARBOR_LOG".to_string(), "debug".to_string())],
        );
        assert!(warnings.is_empty());
    }

    #[test]
    fn silent_when_sections_are_configured() {
        let config = HarborConfig {
            backend: BackendConfig {
                api_key: "key".to_string(),
                project_id: "harbor".to_string(),
                ..Default::default()
            },
            genai: GenAiConfig {
                api_key: "key".to_string(),
                ..Default::default()
            },
            ..Default::default()
        };

        let warnings = collect_unconfigured_warnings(
            &config,
            vec![
                ("HARBOR_BACKEND__API_KEY".to_string(), "key".to_string()),
                ("HARBOR_GENAI__API_KEY".to_string(), "key".to_string()),
            ],
        );
        assert!(warnings.is_empty());
    }
}
