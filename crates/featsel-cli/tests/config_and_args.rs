use std::fs;

use featsel_cli::cli::build_command;
use featsel_cli::config::{load_parameters, parameters_from_arguments};
use featsel_cli::run::run_selection;
use featsel_core::config::{Algorithm, SelectionParameters};
use featsel_core::table::TargetSelector;

const TABLE: &str = "\
col0,col1,col2,col3,y
0,5,0,k,0
0,5,1,k,1
1,5,0,k,2
1,5,1,k,3
2,5,0,k,4
2,5,1,k,5
3,5,0,k,6
3,5,1,k,7
";

// -----------------------------------------------------------------------------
// Parameters
// -----------------------------------------------------------------------------

#[test]
fn test_defaults_without_config() {
    let matches = build_command()
        .try_get_matches_from(["featsel", "data.csv"])
        .unwrap();
    let params = parameters_from_arguments(&matches).unwrap();
    assert_eq!(params, SelectionParameters::default());
}

#[test]
fn test_arguments_override_config() {
    let dir = tempfile::tempdir().unwrap();
    let config_path = dir.path().join("params.json");
    fs::write(
        &config_path,
        r#"{"algorithm": "inc", "target_size": 5, "threshold": 0.2, "max_evals": 10}"#,
    )
    .unwrap();

    let loaded = load_parameters(&config_path).unwrap();
    assert_eq!(loaded.algorithm, Algorithm::Incremental);
    assert_eq!(loaded.target_size, 5);

    let matches = build_command()
        .try_get_matches_from([
            "featsel",
            "data.csv",
            config_path.to_str().unwrap(),
            "-a",
            "mmi",
            "-s",
            "2",
            "-u",
            "last",
            "-f",
            "col1,col3",
            "--jobs",
            "2",
        ])
        .unwrap();
    let params = parameters_from_arguments(&matches).unwrap();
    assert_eq!(params.algorithm, Algorithm::MaxMi);
    assert_eq!(params.target_size, 2);
    assert_eq!(params.threshold, 0.2);
    assert_eq!(params.max_evals, 10);
    assert_eq!(params.target, TargetSelector::Last);
    assert_eq!(params.force_features, vec!["col1".to_string(), "col3".to_string()]);
    assert_eq!(params.jobs, 2);
}

#[test]
fn test_invalid_config_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    let config_path = dir.path().join("params.json");
    fs::write(&config_path, r#"{"algorithm": "simplex"}"#).unwrap();
    let err = load_parameters(&config_path).unwrap_err();
    assert!(format!("{:#}", err).contains("Failed to parse config"));
}

#[test]
fn test_unknown_algorithm_argument_is_rejected() {
    let res = build_command().try_get_matches_from(["featsel", "data.csv", "-a", "simplex"]);
    assert!(res.is_err());
}

// -----------------------------------------------------------------------------
// Full run
// -----------------------------------------------------------------------------

#[test]
fn test_run_writes_selected_table() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("data.csv");
    let output = dir.path().join("selected.tsv");
    fs::write(&input, TABLE).unwrap();

    let params = SelectionParameters {
        algorithm: Algorithm::MaxMi,
        target_size: 1,
        target: TargetSelector::Last,
        force_features: vec!["col3".to_string()],
        ..Default::default()
    };
    let outcome = run_selection(&input, Some(&output), &params).unwrap();
    assert_eq!(outcome.selected, [0].into_iter().collect());

    let written = fs::read_to_string(&output).unwrap();
    let mut lines = written.lines();
    assert_eq!(lines.next(), Some("col0\tcol3\ty"));
    assert_eq!(lines.next(), Some("0\tk\t0"));
    assert_eq!(written.lines().count(), 9);
}

#[test]
fn test_run_rejects_unknown_extension() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("data.txt");
    fs::write(&input, TABLE).unwrap();
    assert!(run_selection(&input, None, &SelectionParameters::default()).is_err());
}
