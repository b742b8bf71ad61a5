pub mod compare;
pub mod play;
pub mod presets;
pub mod render;
pub mod run;

use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{debug, info};
use u_seek::config::SimulationConfig;
use u_seek::models::SeekRequest;
use u_seek::presets::random_input;
use u_seek::validation::{parse_positions, validate_input};
use u_seek::SeekError;

use crate::InputArgs;

/// Builds the request from config, preset/random input, and flags, then
/// validates it.
pub fn resolve_input(args: &InputArgs) -> anyhow::Result<(SeekRequest, SimulationConfig)> {
    let config = match &args.config {
        Some(path) => SimulationConfig::from_file(path)?,
        None => SimulationConfig::default(),
    };

    let disk_size = args.disk_size.unwrap_or(config.input.disk_size);
    let mut request = if let Some(preset) = args.preset {
        info!(%preset, "using preset input");
        preset.request(disk_size)
    } else if args.random {
        let mut rng = match args.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        let request = random_input(&mut rng, disk_size);
        info!(positions = ?request.positions, head = request.head, "generated random input");
        request
    } else {
        config.to_request().with_disk_size(disk_size)
    };

    if let Some(text) = &args.positions {
        request.positions = parse_positions(text);
    }
    if let Some(head) = args.head {
        request.head = head;
    }

    validate_input(&request.positions, request.head, request.disk_size)
        .map_err(SeekError::from)?;
    debug!(?request, "input resolved");

    Ok((request, config))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use u_seek::algorithms::AlgorithmKind;
    use u_seek::presets::Preset;
    use u_seek::validation::ValidationErrorKind;

    fn args() -> InputArgs {
        InputArgs {
            positions: None,
            head: None,
            disk_size: None,
            config: None,
            preset: None,
            random: false,
            seed: None,
        }
    }

    fn config_file(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{content}").unwrap();
        file
    }

    #[test]
    fn test_defaults_without_sources() {
        let (request, config) = resolve_input(&args()).unwrap();
        assert_eq!(request, SeekRequest::default());
        assert_eq!(config, SimulationConfig::default());
    }

    #[test]
    fn test_config_file_input() {
        let file = config_file(
            "algorithm = \"scan\"\n[input]\npositions = [40, 25, 10, 60]\nhead = 50\ndisk_size = 100\n",
        );
        let input = InputArgs {
            config: Some(file.path().to_path_buf()),
            ..args()
        };
        let (request, config) = resolve_input(&input).unwrap();
        assert_eq!(request.positions, vec![40, 25, 10, 60]);
        assert_eq!(request.head, 50);
        assert_eq!(request.disk_size, 100);
        assert_eq!(config.algorithm, Some(AlgorithmKind::Scan));
    }

    #[test]
    fn test_flags_override_config() {
        let file = config_file("[input]\npositions = [40, 25]\nhead = 50\ndisk_size = 100\n");
        let input = InputArgs {
            config: Some(file.path().to_path_buf()),
            positions: Some("1, 2, 3".to_string()),
            ..args()
        };
        let (request, _) = resolve_input(&input).unwrap();
        assert_eq!(request.positions, vec![1, 2, 3]);
        assert_eq!(request.head, 50);
        assert_eq!(request.disk_size, 100);
    }

    #[test]
    fn test_preset_replaces_config_input_but_keeps_disk_size() {
        let file = config_file("[input]\npositions = [1, 2]\nhead = 0\ndisk_size = 300\n");
        let input = InputArgs {
            config: Some(file.path().to_path_buf()),
            preset: Some(Preset::Scan),
            ..args()
        };
        let (request, _) = resolve_input(&input).unwrap();
        assert_eq!(request.positions, Preset::Scan.positions());
        assert_eq!(request.head, Preset::Scan.head());
        assert_eq!(request.disk_size, 300);
    }

    #[test]
    fn test_preset_with_head_overrides_only_head() {
        let input = InputArgs {
            preset: Some(Preset::Sstf),
            head: Some(90),
            ..args()
        };
        let (request, _) = resolve_input(&input).unwrap();
        assert_eq!(request.positions, Preset::Sstf.positions());
        assert_eq!(request.head, 90);
        assert_eq!(request.disk_size, 200);
    }

    #[test]
    fn test_random_with_seed_is_deterministic() {
        let input = InputArgs {
            random: true,
            seed: Some(42),
            disk_size: Some(500),
            ..args()
        };
        let (first, _) = resolve_input(&input).unwrap();
        let (second, _) = resolve_input(&input).unwrap();
        assert_eq!(first, second);
        assert_eq!(first.disk_size, 500);
        assert!(first.positions.iter().all(|&p| (0..500).contains(&p)));
    }

    #[test]
    fn test_invalid_positions_rejected() {
        let input = InputArgs {
            positions: Some("5".to_string()),
            ..args()
        };
        let err = resolve_input(&input).unwrap_err();
        match err.downcast_ref::<SeekError>() {
            Some(SeekError::Validation(errors)) => assert!(errors
                .iter()
                .any(|e| e.kind == ValidationErrorKind::TooFewPositions)),
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn test_head_outside_disk_rejected() {
        let input = InputArgs {
            head: Some(201),
            ..args()
        };
        assert!(resolve_input(&input).is_err());
    }

    #[test]
    fn test_missing_config_file_rejected() {
        let input = InputArgs {
            config: Some("/nonexistent/u-seek.toml".into()),
            ..args()
        };
        let err = resolve_input(&input).unwrap_err();
        assert!(matches!(err.downcast_ref::<SeekError>(), Some(SeekError::Io(_))));
    }
}
