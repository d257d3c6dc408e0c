use std::path::PathBuf;

use clap::{Arg, Command, ValueHint};

/// Command line definition of the `featsel` tool.
pub fn build_command() -> Command {
    Command::new("featsel")
        .version(clap::crate_version!())
        .about("Select the most informative columns of a table by mutual information")
        .arg_required_else_help(true)
        .arg(
            Arg::new("input")
                .help("Path to the input table (*.csv or *.tsv)")
                .required(true)
                .value_parser(clap::value_parser!(PathBuf))
                .value_hint(ValueHint::FilePath),
        )
        .arg(
            Arg::new("config")
                .help("Path to a JSON file with selection parameters")
                .required(false)
                .value_parser(clap::value_parser!(PathBuf))
                .value_hint(ValueHint::FilePath),
        )
        .arg(
            Arg::new("output_file")
                .short('o')
                .long("output")
                .help("Path to write the selected table to. Defaults to stdout.")
                .value_parser(clap::value_parser!(PathBuf))
                .value_hint(ValueHint::FilePath),
        )
        .arg(
            Arg::new("algorithm")
                .short('a')
                .long("algorithm")
                .help("Selection strategy. Overrides the algorithm from the JSON config.")
                .value_parser(["hc", "hill-climbing", "inc", "incremental", "mmi", "max-mi"])
                .value_hint(ValueHint::Other),
        )
        .arg(
            Arg::new("target_size")
                .short('s')
                .long("target-size")
                .help("Number of features to select, 0 for no target size.")
                .value_parser(clap::value_parser!(usize)),
        )
        .arg(
            Arg::new("threshold")
                .short('t')
                .long("threshold")
                .help("Minimum mutual-information gain for a feature to be kept.")
                .value_parser(clap::value_parser!(f64)),
        )
        .arg(
            Arg::new("target")
                .short('u')
                .long("target")
                .help("Target column: first, last or a 0-based column index.")
                .value_parser(clap::builder::NonEmptyStringValueParser::new()),
        )
        .arg(
            Arg::new("force_features")
                .short('f')
                .long("force")
                .help("Comma separated features to keep in the output whether selected or not.")
                .value_delimiter(',')
                .num_args(1..),
        )
        .arg(
            Arg::new("ignore_features")
                .short('i')
                .long("ignore")
                .help("Comma separated columns to drop when reading the input.")
                .value_delimiter(',')
                .num_args(1..),
        )
        .arg(
            Arg::new("max_evals")
                .long("max-evals")
                .help("Maximum number of evaluations of the hill climber.")
                .value_parser(clap::value_parser!(usize)),
        )
        .arg(
            Arg::new("jobs")
                .short('j')
                .long("jobs")
                .help("Number of threads used to score candidates.")
                .value_parser(clap::value_parser!(usize)),
        )
        .arg(
            Arg::new("seed")
                .long("seed")
                .help("Random seed of the hill climber.")
                .value_parser(clap::value_parser!(u64)),
        )
        .help_template(
            "{usage-heading} {usage}\n\n\
             {about-with-newline}\n\
             Version {version}\n\n\
             {all-args}{after-help}",
        )
}
