use anyhow::Context;
use harbor_flows::{ConfiguredModel, FlowKind, FlowOrigin, FlowRunner};
use serde::Serialize;
use serde_json::Value;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::flow::FlowRunArgs;
use crate::commands::shared::input::read_json_input;
use crate::context::AppContext;
use crate::output::output;
use crate::progress::Progress;

#[derive(Debug, Serialize)]
struct RunResponse {
    flow: FlowKind,
    origin: FlowOrigin,
    output: Value,
}

pub async fn handle(args: &FlowRunArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let kind: FlowKind = args.name.parse()?;
    let input = read_json_input(&args.input)?;

    let model = ConfiguredModel::from_config(&ctx.config.genai)
        .context("failed to build generative model client")?;
    let runner = FlowRunner::new(model, &ctx.config.flows);

    let progress = Progress::spinner(&format!("running {kind}"));
    let reply = match runner.run_json(kind, input).await {
        Ok(reply) => reply,
        Err(error) => {
            progress.finish_err(&format!("{kind} failed"));
            return Err(error).with_context(|| format!("flow {kind} failed"));
        }
    };
    progress.finish_clear();

    if reply.origin == FlowOrigin::Fallback && !flags.quiet {
        eprintln!("note: {kind} returned its built-in fallback; the model did not answer");
    }

    output(
        &RunResponse {
            flow: kind,
            origin: reply.origin,
            output: reply.output,
        },
        flags.format,
    )
}
