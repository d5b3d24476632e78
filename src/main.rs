use anyhow::Context;
use clap::Parser;
use ofx2json::args::Args;
use ofx2json::Statement;
use std::fs::File;
use std::io::{self, BufReader};
use std::process::ExitCode;
use tracing::{debug, error, info};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    let args = Args::parse();
    let log_level = args.log_level();
    init_logger(log_level);
    debug!("Log level set to {}", log_level.to_string().to_lowercase());

    match main_inner(&args) {
        Ok(json) => {
            println!("{json}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("Exiting with error: {e:#}");
            match e.downcast_ref::<ofx2json::Error>() {
                Some(e) => e.exit_code(),
                None => ExitCode::FAILURE,
            }
        }
    }
}

fn main_inner(args: &Args) -> anyhow::Result<String> {
    let statement = read_statement(args)?;
    info!(
        "Parsed {} transactions for account '{}'",
        statement.transactions().len(),
        statement.account_number()
    );
    Ok(ofx2json::to_json(&statement, args.pretty())?)
}

fn read_statement(args: &Args) -> anyhow::Result<Statement> {
    let statement = match args.input() {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("Unable to open {}", path.display()))?;
            ofx2json::parse(BufReader::new(file))?
        }
        None => ofx2json::parse(io::stdin().lock())?,
    };
    Ok(statement)
}

/// Initializes the tracing subscriber. `RUST_LOG` takes precedence over `level`, which otherwise
/// applies to this crate only.
pub fn init_logger(level: LevelFilter) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("{}={level}", env!("CARGO_CRATE_NAME"))));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::path::PathBuf;
    use tempfile::NamedTempFile;

    const STATEMENT: &str = "<OFX><BANKACCTFROM><ACCTID>42</BANKACCTFROM><BANKTRANLIST>\
        <STMTTRN><FITID>T1<TRNAMT>-42.5<DTPOSTED>20240115</STMTTRN></BANKTRANLIST></OFX>";

    fn args_for(path: PathBuf, pretty: bool) -> Args {
        Args::new(Some(path), pretty, LevelFilter::OFF)
    }

    #[test]
    fn test_reads_statement_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(STATEMENT.as_bytes()).unwrap();
        let json = main_inner(&args_for(file.path().to_path_buf(), false)).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["account_number"], "42");
        assert_eq!(value["transactions"][0]["amount"], "-42.50");
    }

    #[test]
    fn test_missing_file_is_not_a_parse_error() {
        let e = main_inner(&args_for(PathBuf::from("/no/such/statement.ofx"), false)).unwrap_err();
        assert!(e.downcast_ref::<ofx2json::Error>().is_none());
        assert!(format!("{e:#}").contains("Unable to open"));
    }

    #[test]
    fn test_parse_error_keeps_its_exit_status() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"<STMTTRN><DTPOSTED>2024</STMTTRN>").unwrap();
        let e = main_inner(&args_for(file.path().to_path_buf(), true)).unwrap_err();
        let e = e.downcast_ref::<ofx2json::Error>().unwrap();
        assert_eq!(e.exit_status(), 1);
    }
}
