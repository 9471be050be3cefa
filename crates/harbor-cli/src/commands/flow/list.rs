use harbor_flows::FlowKind;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize)]
struct FlowEntry {
    name: &'static str,
    description: &'static str,
    has_fallback: bool,
    input_schema: String,
    output_schema: String,
}

#[derive(Debug, Serialize)]
struct ListResponse {
    model_configured: bool,
    allow_fallback: bool,
    flows: Vec<FlowEntry>,
}

pub fn handle(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let flows = FlowKind::ALL
        .into_iter()
        .map(|kind| FlowEntry {
            name: kind.as_str(),
            description: kind.description(),
            has_fallback: kind.has_fallback(),
            input_schema: kind.input_schema(),
            output_schema: kind.output_schema(),
        })
        .collect();

    output(
        &ListResponse {
            model_configured: ctx.config.genai.is_configured(),
            allow_fallback: ctx.config.flows.allow_fallback,
            flows,
        },
        flags.format,
    )
}
