use serde_json::json;
use tracing::info;
use u_seek::algorithms::AlgorithmKind;
use u_seek::scheduler::SeekKpi;

use super::{render, resolve_input};
use crate::{InputArgs, OutputFormat};

pub fn run(
    algorithm: Option<AlgorithmKind>,
    input: &InputArgs,
    format: OutputFormat,
) -> anyhow::Result<()> {
    let (request, config) = resolve_input(input)?;
    let algorithm = algorithm.or(config.algorithm).unwrap_or_else(|| {
        info!("no algorithm given, using FCFS");
        AlgorithmKind::Fcfs
    });

    let result = algorithm.schedule(&request);
    let kpi = SeekKpi::calculate(&result, request.request_count());

    match format {
        OutputFormat::Json => {
            let report = json!({
                "algorithm": algorithm,
                "request": request,
                "result": result,
                "kpi": kpi,
            });
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        OutputFormat::Text => {
            println!("{algorithm}: {}", algorithm.description());
            println!();
            println!("requests   {}", render::sequence(&request.positions));
            println!("head       {}   disk size {}", request.head, request.disk_size);
            println!("movements  {}", render::sequence(&result.head_movements));
            print!("{}", render::steps(&result));
            println!("{}", render::summary(&result));
            println!("{}", render::kpi(&kpi));
        }
    }

    Ok(())
}
