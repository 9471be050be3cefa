use harbor_config::HarborConfig;
use harbor_offline::{OfflineCache, RequestInfo, RequestMode, Strategy, classify};
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::OfflineCommands;
use crate::cli::subcommands::offline::ClassifyArgs;
use crate::output::output;

#[derive(Debug, Serialize)]
struct ClassifyResponse {
    request: RequestInfo,
    navigation: bool,
    strategy: Strategy,
}

#[derive(Debug, Serialize)]
struct PlanResponse {
    cache_name: String,
    precache: Vec<String>,
}

pub fn handle(action: &OfflineCommands, flags: &GlobalFlags, config: &HarborConfig) -> anyhow::Result<()> {
    match action {
        OfflineCommands::Classify(args) => {
            let request = request_from_args(args);
            output(
                &ClassifyResponse {
                    navigation: request.is_navigation(),
                    strategy: classify(&request),
                    request,
                },
                flags.format,
            )
        }
        OfflineCommands::Plan => output(
            &PlanResponse {
                cache_name: OfflineCache::from_config(&config.offline).cache_name(),
                precache: config.offline.precache.clone(),
            },
            flags.format,
        ),
    }
}

fn request_from_args(args: &ClassifyArgs) -> RequestInfo {
    RequestInfo {
        method: args.method.to_ascii_uppercase(),
        path: args.path.clone(),
        mode: if args.navigate {
            RequestMode::Navigate
        } else {
            RequestMode::SameOrigin
        },
        accept: args.accept.clone(),
    }
}

#[cfg(test)]
mod tests {
    use harbor_offline::{Strategy, classify};

    use super::request_from_args;
    use crate::cli::subcommands::offline::ClassifyArgs;

    fn args(method: &str, path: &str, navigate: bool) -> ClassifyArgs {
        ClassifyArgs {
            method: method.to_string(),
            path: path.to_string(),
            accept: None,
            navigate,
        }
    }

    #[test]
    fn method_is_normalized() {
        let request = request_from_args(&args("post", "/api/clients", false));
        assert_eq!(request.method, "POST");
        assert_eq!(classify(&request), Strategy::Passthrough);
    }

    #[test]
    fn navigate_flag_marks_navigation() {
        let request = request_from_args(&args("get", "/lawyer/dashboard", true));
        assert!(request.is_navigation());
        assert_eq!(classify(&request), Strategy::NetworkFirst);
    }
}
