use std::io::Write;

use featsel_core::config::{Algorithm, SelectionParameters};
use featsel_core::error::FeatureSelectionError;
use featsel_core::feature_selection::feature_selection;
use featsel_core::io::{read_table, read_table_from, write_table, write_table_to, TableReaderConfig};
use featsel_core::table::{ColumnType, TargetSelector};

// -----------------------------------------------------------------------------
// Algorithm names
// -----------------------------------------------------------------------------

#[test]
fn test_algorithm_names() {
    assert_eq!("hc".parse::<Algorithm>().unwrap(), Algorithm::HillClimbing);
    assert_eq!("Incremental".parse::<Algorithm>().unwrap(), Algorithm::Incremental);
    assert_eq!("max-mi".parse::<Algorithm>().unwrap(), Algorithm::MaxMi);
    assert_eq!(
        "simplex".parse::<Algorithm>().unwrap_err(),
        FeatureSelectionError::UnknownAlgorithm("simplex".to_string())
    );
    assert_eq!(Algorithm::MaxMi.to_string(), "mmi");
}

// -----------------------------------------------------------------------------
// JSON parameters
// -----------------------------------------------------------------------------

#[test]
fn test_parameters_json_round_trip() {
    let params = SelectionParameters {
        algorithm: Algorithm::Incremental,
        target_size: 3,
        hc_max_score: Some(0.9),
        force_features: vec!["a".to_string()],
        target: TargetSelector::Index(2),
        ..Default::default()
    };
    let json = serde_json::to_string(&params).unwrap();
    let back: SelectionParameters = serde_json::from_str(&json).unwrap();
    assert_eq!(back, params);
}

#[test]
fn test_partial_json_uses_defaults() {
    let params: SelectionParameters =
        serde_json::from_str(r#"{"algorithm": "max-mi", "target_size": 4, "target": "last"}"#)
            .unwrap();
    assert_eq!(params.algorithm, Algorithm::MaxMi);
    assert_eq!(params.target_size, 4);
    assert_eq!(params.target, TargetSelector::Last);
    assert_eq!(params.max_evals, 10000);
    assert_eq!(params.cache_size, 1_000_000);
    assert!(params.hc_widen_search);
}

#[test]
fn test_unknown_algorithm_in_json_is_rejected() {
    let err = serde_json::from_str::<SelectionParameters>(r#"{"algorithm": "simplex"}"#).unwrap_err();
    let expected = FeatureSelectionError::UnknownAlgorithm("simplex".to_string()).to_string();
    assert!(err.to_string().contains(&expected), "{}", err);

    let params: SelectionParameters =
        serde_json::from_str(r#"{"algorithm": "Incremental"}"#).unwrap();
    assert_eq!(params.algorithm, Algorithm::Incremental);
    assert_eq!(serde_json::to_value(params.algorithm).unwrap(), "inc");
}

// -----------------------------------------------------------------------------
// Table files
// -----------------------------------------------------------------------------

#[test]
fn test_tsv_file_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("data.tsv");
    let mut file = std::fs::File::create(&input).unwrap();
    writeln!(file, "f0\ty\tf1").unwrap();
    writeln!(file, "1\ta\t0.25").unwrap();
    writeln!(file, "0\tb\t1e3").unwrap();
    drop(file);

    let config = TableReaderConfig {
        target: TargetSelector::Index(1),
        ..Default::default()
    };
    let table = read_table(&input, &config).unwrap();
    assert_eq!(table.labels(), vec!["f0", "f1"]);
    assert_eq!(table.input(0).kind, ColumnType::Boolean);
    assert_eq!(table.input(1).kind, ColumnType::Contin);
    assert_eq!(table.output().kind, ColumnType::Enum);

    let output = dir.path().join("out.csv");
    write_table(&table, table.target(), Some(&output)).unwrap();
    let written = std::fs::read_to_string(&output).unwrap();
    assert_eq!(written, "f0,y,f1\n1,a,0.25\n0,b,1000\n");
}

#[test]
fn test_missing_file_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    let err = read_table(dir.path().join("absent.csv"), &TableReaderConfig::default()).unwrap_err();
    assert!(format!("{:#}", err).contains("absent.csv"));
}

#[test]
fn test_forced_columns_keep_their_text() {
    let data = "\
a,flag,price,y
0,true,1.50,0
1,false,007,1
0,true,2,0
1,false,1e2,1
";
    let params = SelectionParameters {
        algorithm: Algorithm::MaxMi,
        target_size: 1,
        target: TargetSelector::Last,
        force_features: vec!["flag".to_string(), "price".to_string()],
        ..Default::default()
    };
    let table = read_table_from(data.as_bytes(), &TableReaderConfig::from(&params), b',').unwrap();
    assert_eq!(table.input(1).kind, ColumnType::Boolean);
    assert_eq!(table.input(2).kind, ColumnType::Contin);

    let outcome = feature_selection(&table, &params).unwrap();
    assert_eq!(outcome.selected, [0].into_iter().collect());

    let mut buf = Vec::new();
    write_table_to(&outcome.table, outcome.table.target(), &mut buf, b',').unwrap();
    assert_eq!(
        String::from_utf8(buf).unwrap(),
        "a,flag,price,y\n0,true,1.50,0\n1,false,007,1\n0,true,2,0\n1,false,1e2,1\n"
    );
}
