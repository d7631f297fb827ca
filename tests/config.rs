use panmixia::config::{
    AppConfig, ConfigManager, ConfigSection, FounderGenome, FoundersConfig, ReportFormat,
    SimulationConfig,
};
use panmixia::{Genome, PanmixiaError};

fn temp_path(name: &str) -> std::path::PathBuf {
    std::env::temp_dir().join(format!("panmixia_{}_{}", std::process::id(), name))
}

#[test]
fn test_default_config_is_valid() {
    let config = AppConfig::default();
    config.validate().unwrap();

    let founders = config.founders.to_population().unwrap();
    assert_eq!(founders.population(), 34);
    assert_eq!(founders.count(&Genome::from_pairs(&[(1, 1)]).unwrap()), 23);
    assert_eq!(founders.count(&Genome::from_pairs(&[(2, 2)]).unwrap()), 11);
}

#[test]
fn test_negative_founder_count_rejected() {
    let founders = FoundersConfig {
        genomes: vec![FounderGenome {
            loci: vec![vec![1, 1]],
            count: -4,
        }],
    };
    assert!(matches!(founders.validate(), Err(PanmixiaError::InvalidPopulation(_))));
}

#[test]
fn test_oversized_founder_counts_rejected() {
    let founders = FoundersConfig {
        genomes: vec![
            FounderGenome {
                loci: vec![vec![1, 1]],
                count: i64::MAX,
            };
            3
        ],
    };
    assert!(matches!(founders.validate(), Err(PanmixiaError::InvalidPopulation(_))));

    let config = AppConfig {
        founders,
        ..AppConfig::default()
    };
    assert!(matches!(config.validate(), Err(PanmixiaError::InvalidPopulation(_))));
}

#[test]
fn test_malformed_founder_locus_rejected() {
    let founders = FoundersConfig {
        genomes: vec![FounderGenome {
            loci: vec![vec![1, 1, 2]],
            count: 4,
        }],
    };
    assert!(matches!(founders.validate(), Err(PanmixiaError::InvalidGenome(_))));
}

#[test]
fn test_zero_trials_rejected() {
    let simulation = SimulationConfig {
        trials: 0,
        ..SimulationConfig::default()
    };
    assert!(matches!(simulation.validate(), Err(PanmixiaError::Configuration(_))));
}

#[test]
fn test_report_locus_must_exist() {
    let mut config = AppConfig::default();
    config.report.locus = Some(1);
    assert!(matches!(config.validate(), Err(PanmixiaError::Configuration(_))));

    config.report.locus = Some(0);
    config.validate().unwrap();
}

#[test]
fn test_load_toml_file() {
    let path = temp_path("load.toml");
    std::fs::write(
        &path,
        r#"
[simulation]
generations = 3
trials = 2
seed = 17

[[founders.genomes]]
loci = [[1, 2], [3, 3]]
count = 5

[[founders.genomes]]
loci = [[2, 2], [3, 4]]
count = 7

[report]
format = "json"
"#,
    )
    .unwrap();

    let manager = ConfigManager::new();
    manager.load_from_file(&path).unwrap();
    let config = manager.get().unwrap();

    assert_eq!(config.simulation.generations, 3);
    assert_eq!(config.simulation.trials, 2);
    assert_eq!(config.simulation.seed, Some(17));
    assert!(config.simulation.parallel);
    assert_eq!(config.founders.genomes.len(), 2);
    assert_eq!(config.report.format, ReportFormat::Json);

    let founders = config.founders.to_population().unwrap();
    assert_eq!(founders.loci(), 2);
    assert_eq!(founders.population(), 12);

    std::fs::remove_file(&path).ok();
}

#[test]
fn test_invalid_file_keeps_previous_config() {
    let path = temp_path("invalid.toml");
    std::fs::write(
        &path,
        r#"
[[founders.genomes]]
loci = [[1, 1]]
count = 2

[[founders.genomes]]
loci = [[1, 1], [2, 2]]
count = 2
"#,
    )
    .unwrap();

    let manager = ConfigManager::new();
    let result = manager.load_from_file(&path);
    assert!(matches!(result, Err(PanmixiaError::InvalidPopulation(_))));
    assert_eq!(manager.get().unwrap(), AppConfig::default());

    std::fs::remove_file(&path).ok();
}

#[test]
fn test_save_and_reload() {
    let path = temp_path("roundtrip.toml");

    let manager = ConfigManager::new();
    manager
        .update(|config| {
            config.simulation.generations = 25;
            config.simulation.seed = Some(3);
            config.report.format = ReportFormat::Json;
        })
        .unwrap();
    manager.save_to_file(&path).unwrap();

    let reloaded = ConfigManager::new();
    reloaded.load_from_file(&path).unwrap();
    assert_eq!(reloaded.get().unwrap(), manager.get().unwrap());

    std::fs::remove_file(&path).ok();
}

#[test]
fn test_rejected_update_is_not_applied() {
    let manager = ConfigManager::new();
    let result = manager.update(|config| config.simulation.trials = 0);

    assert!(result.is_err());
    assert_eq!(manager.get().unwrap().simulation.trials, 10);
}

#[test]
fn test_example_config_matches_defaults() {
    let path =
        std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("panmixia.example.toml");

    let manager = ConfigManager::new();
    manager.load_from_file(&path).unwrap();
    let config = manager.get().unwrap();

    assert_eq!(config.founders, AppConfig::default().founders);
    assert_eq!(config.simulation.seed, Some(2024));
    assert_eq!(config.report.format, ReportFormat::Text);
}
