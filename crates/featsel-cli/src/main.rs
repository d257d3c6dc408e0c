use anyhow::Result;
use log::LevelFilter;
use std::path::PathBuf;

use featsel_cli::cli::build_command;
use featsel_cli::config::parameters_from_arguments;
use featsel_cli::run::run_selection;

fn main() -> Result<()> {
    env_logger::Builder::default()
        .filter_level(LevelFilter::Error)
        .parse_env(env_logger::Env::default().filter_or("FEATSEL_LOG", "error,featsel=info"))
        .init();

    let matches = build_command().get_matches();

    let input: &PathBuf = matches
        .get_one("input")
        .expect("input is required by CLI configuration");
    let output: Option<&PathBuf> = matches.get_one("output_file");
    log::info!("[featsel] Selecting features of {:?}", input);

    let params = parameters_from_arguments(&matches)?;
    if matches.get_one::<PathBuf>("config").is_none() {
        let json = serde_json::to_string_pretty(&params).unwrap_or_default();
        log::debug!("[featsel] Parameters:\n{}", json);
    }

    match run_selection(input, output.map(PathBuf::as_path), &params) {
        Ok(outcome) => {
            log::info!(
                "[featsel] Wrote {} columns",
                outcome.table.arity() + 1
            );
            Ok(())
        }
        Err(e) => {
            log::error!("Feature selection failed: {:#}", e);
            std::process::exit(1)
        }
    }
}
