//! # Configuration Tests
//!
//! Tests for configuration structures, deserialization, defaults, preset
//! resolution, and startup validation.

use rstest::rstest;

use pagesim_core::SimError;
use pagesim_core::config::*;

#[test]
fn test_config_default() {
    let config = Config::default();
    assert_eq!(config.machine.machine_size, 32);
    assert_eq!(config.machine.page_size, 8);
    assert_eq!(config.machine.algorithm, Algorithm::Lru);
    assert_eq!(config.workload.process_size, 32);
    assert_eq!(config.workload.reference_count, 1000);
    assert_eq!(config.workload.job_mix, MixSpec::Preset(1));
    assert_eq!(config.workload.quantum, 3);
    assert!(!config.general.trace_paging);
    assert!(!config.general.trace_draws);
}

#[test]
fn test_default_config_validates() {
    assert!(Config::default().validate().is_ok());
}

#[rstest]
#[case("lru", Algorithm::Lru)]
#[case("LRU", Algorithm::Lru)]
#[case("Lru", Algorithm::Lru)]
#[case("fifo", Algorithm::Fifo)]
#[case("FIFO", Algorithm::Fifo)]
#[case("random", Algorithm::Random)]
#[case("RaNdOm", Algorithm::Random)]
fn test_algorithm_parses_case_insensitively(#[case] name: &str, #[case] expected: Algorithm) {
    assert_eq!(name.parse::<Algorithm>().unwrap(), expected);
}

#[test]
fn test_unknown_algorithm_rejected() {
    let err = "clock".parse::<Algorithm>().unwrap_err();
    assert!(matches!(err, SimError::UnknownAlgorithm(name) if name == "clock"));
}

#[test]
fn test_algorithm_display_round_trips() {
    for algorithm in [Algorithm::Lru, Algorithm::Fifo, Algorithm::Random] {
        let name = algorithm.to_string();
        assert_eq!(name.parse::<Algorithm>().unwrap(), algorithm);
    }
}

#[test]
fn test_preset_one_is_single_sequential_process() {
    let mix = MixSpec::Preset(1).resolve().unwrap();
    assert!(mix.uniform);
    assert_eq!(mix.process_count, 1);
    assert_eq!(mix.rows, vec![MixEntry::new(1.0, 0.0, 0.0)]);
}

#[test]
fn test_preset_two_is_four_sequential_processes() {
    let mix = MixSpec::Preset(2).resolve().unwrap();
    assert!(mix.uniform);
    assert_eq!(mix.process_count, 4);
    assert_eq!(mix.rows, vec![MixEntry::new(1.0, 0.0, 0.0)]);
}

#[test]
fn test_preset_three_is_fully_random() {
    let mix = MixSpec::Preset(3).resolve().unwrap();
    assert!(mix.uniform);
    assert_eq!(mix.process_count, 4);
    assert_eq!(mix.rows, vec![MixEntry::new(0.0, 0.0, 0.0)]);
}

#[test]
fn test_preset_four_is_per_process() {
    let mix = MixSpec::Preset(4).resolve().unwrap();
    assert!(!mix.uniform);
    assert_eq!(mix.process_count, 4);
    assert_eq!(mix.rows.len(), 4);
    assert_eq!(mix.rows[0], MixEntry::new(0.75, 0.25, 0.0));
    assert_eq!(mix.rows[3], MixEntry::new(0.5, 0.125, 0.125));
}

#[rstest]
#[case(0)]
#[case(5)]
#[case(16)]
fn test_preset_out_of_range_rejected(#[case] preset: u32) {
    let err = MixSpec::Preset(preset).resolve().unwrap_err();
    assert!(matches!(err, SimError::UnknownPreset(n) if n == preset));
}

#[test]
fn test_uniform_table_requires_single_row() {
    let table = MixSpec::Table(MixTable {
        uniform: true,
        processes: 4,
        rows: vec![MixEntry::new(0.5, 0.0, 0.0), MixEntry::new(0.5, 0.0, 0.0)],
    });
    let err = table.resolve().unwrap_err();
    assert!(matches!(err, SimError::MixTableShape { rows: 2, processes: 4 }));
}

#[test]
fn test_per_process_table_requires_row_per_process() {
    let table = MixSpec::Table(MixTable {
        uniform: false,
        processes: 3,
        rows: vec![MixEntry::new(0.5, 0.0, 0.0)],
    });
    let err = table.resolve().unwrap_err();
    assert!(matches!(err, SimError::MixTableShape { rows: 1, processes: 3 }));
}

#[test]
fn test_negative_probability_rejected() {
    let table = MixSpec::Table(MixTable {
        uniform: true,
        processes: 1,
        rows: vec![MixEntry::new(-0.1, 0.5, 0.0)],
    });
    assert!(matches!(
        table.resolve().unwrap_err(),
        SimError::InvalidJobMix { pid: 1, .. }
    ));
}

#[test]
fn test_probabilities_summing_past_one_rejected() {
    let table = MixSpec::Table(MixTable {
        uniform: true,
        processes: 1,
        rows: vec![MixEntry::new(0.5, 0.4, 0.2)],
    });
    assert!(matches!(
        table.resolve().unwrap_err(),
        SimError::InvalidJobMix { .. }
    ));
}

#[test]
fn test_probabilities_summing_to_exactly_one_accepted() {
    let table = MixSpec::Table(MixTable {
        uniform: true,
        processes: 1,
        rows: vec![MixEntry::new(0.5, 0.4, 0.1)],
    });
    assert!(table.resolve().is_ok());
}

#[rstest]
#[case(0, 25)]
#[case(100, 0)]
#[case(100, 33)]
fn test_bad_geometry_rejected(#[case] machine_size: u64, #[case] page_size: u64) {
    let mut config = Config::default();
    config.machine.machine_size = machine_size;
    config.machine.page_size = page_size;
    assert!(matches!(
        config.validate().unwrap_err(),
        SimError::InvalidGeometry { .. }
    ));
}

#[test]
fn test_zero_process_size_rejected() {
    let mut config = Config::default();
    config.workload.process_size = 0;
    assert!(matches!(
        config.validate().unwrap_err(),
        SimError::ZeroParameter { name: "process_size" }
    ));
}

#[test]
fn test_zero_reference_count_rejected() {
    let mut config = Config::default();
    config.workload.reference_count = 0;
    assert!(matches!(
        config.validate().unwrap_err(),
        SimError::ZeroParameter { name: "reference_count" }
    ));
}

#[test]
fn test_zero_quantum_rejected() {
    let mut config = Config::default();
    config.workload.quantum = 0;
    assert!(matches!(
        config.validate().unwrap_err(),
        SimError::ZeroParameter { name: "quantum" }
    ));
}

#[test]
fn test_config_from_json() {
    let json = r#"{
        "machine": {
            "machine_size": 100,
            "page_size": 25,
            "algorithm": "FIFO"
        },
        "workload": {
            "process_size": 64,
            "reference_count": 500,
            "job_mix": 3,
            "quantum": 5
        },
        "general": {
            "trace_paging": true
        }
    }"#;

    let config: Config = serde_json::from_str(json).unwrap();
    assert_eq!(config.machine.machine_size, 100);
    assert_eq!(config.machine.page_size, 25);
    assert_eq!(config.machine.algorithm, Algorithm::Fifo);
    assert_eq!(config.workload.reference_count, 500);
    assert_eq!(config.workload.job_mix, MixSpec::Preset(3));
    assert_eq!(config.workload.quantum, 5);
    assert!(config.general.trace_paging);
    assert!(!config.general.trace_draws);
    assert!(config.validate().is_ok());
}

#[test]
fn test_config_from_json_with_mix_table() {
    let json = r#"{
        "machine": {},
        "workload": {
            "job_mix": {
                "uniform": false,
                "processes": 2,
                "rows": [
                    { "sequential": 0.75, "backward": 0.25, "jump": 0.0 },
                    { "sequential": 0.5, "backward": 0.125, "jump": 0.125 }
                ]
            }
        }
    }"#;

    let config: Config = serde_json::from_str(json).unwrap();
    let mix = config.workload.job_mix.resolve().unwrap();
    assert!(!mix.uniform);
    assert_eq!(mix.process_count, 2);
    assert_eq!(mix.rows[1], MixEntry::new(0.5, 0.125, 0.125));
}
