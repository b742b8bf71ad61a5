use u_seek::scheduler::Comparison;

use super::{render, resolve_input};
use crate::{InputArgs, OutputFormat};

pub fn compare(input: &InputArgs, format: OutputFormat) -> anyhow::Result<()> {
    let (request, _) = resolve_input(input)?;
    let comparison = Comparison::run(&request);

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&comparison)?);
        }
        OutputFormat::Text => {
            println!(
                "requests {}   head {}   disk size {}",
                render::sequence(&request.positions),
                request.head,
                request.disk_size
            );
            println!();
            for entry in comparison.entries() {
                println!("{:<5} {}", entry.algorithm.name(), render::summary(&entry.result));
                println!("      {}", render::sequence(&entry.result.head_movements));
                println!("      {}", render::kpi(&entry.kpi));
            }
            if let Some(winner) = comparison.winner() {
                println!();
                println!("lowest total seek: {winner}");
            }
        }
    }

    Ok(())
}
