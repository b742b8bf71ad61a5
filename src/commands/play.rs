use std::thread;

use tracing::info;
use u_seek::algorithms::AlgorithmKind;
use u_seek::models::SeekResult;
use u_seek::playback::Playback;
use u_seek::scheduler::Comparison;

use super::{render, resolve_input};
use crate::InputArgs;

pub fn play(
    algorithm: Option<AlgorithmKind>,
    input: &InputArgs,
    speed: Option<f64>,
    width: usize,
) -> anyhow::Result<()> {
    let (request, config) = resolve_input(input)?;

    let results: Vec<(AlgorithmKind, SeekResult)> = match algorithm {
        Some(kind) => vec![(kind, kind.schedule(&request))],
        None => Comparison::run(&request)
            .entries()
            .iter()
            .map(|e| (e.algorithm, e.result.clone()))
            .collect(),
    };

    let steps = results
        .iter()
        .map(|(_, r)| r.head_movements.len())
        .max()
        .unwrap_or(0);
    let mut playback = Playback::new(steps).with_speed(speed.unwrap_or(config.playback.speed))?;
    info!(steps, speed = playback.speed(), "playing");

    playback.start();
    while playback.tick().is_some() {
        let step = playback.cursor().map_or(0, |i| i + 1);
        println!("step {step}/{steps}");
        for (kind, result) in &results {
            let visible = playback.visible(&result.head_movements);
            let head = visible
                .last()
                .map_or_else(|| "-".to_string(), |p| p.to_string());
            println!(
                "  {:<5}{} head {:>5}",
                kind.name(),
                render::track(visible, request.disk_size, width),
                head
            );
        }
        if playback.is_at_end() {
            break;
        }
        thread::sleep(playback.tick_interval());
    }

    println!();
    for (kind, result) in &results {
        println!("{:<5} {}", kind.name(), render::summary(result));
    }

    Ok(())
}
