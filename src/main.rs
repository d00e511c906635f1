use std::process::ExitCode;

use clap::Parser;
use log::debug;

use softmax_rescale::{Report, Stability, FIXTURE};

/// Rescales scores so that they sum to one, using two softmax methods.
#[derive(Parser, Debug)]
#[command(name = "softmax-rescale", version)]
struct Cli {
    /// Scores to rescale; defaults to 3 1.2 0.55
    #[arg(allow_negative_numbers = true)]
    values: Vec<f64>,
    /// Print the report as JSON instead of plain text
    #[arg(long)]
    json: bool,
    /// Exponentiate the raw scores without subtracting the maximum
    #[arg(long)]
    naive: bool,
}

/// Scores and stability the run should use.
fn resolve(cli: Cli) -> (Vec<f64>, Stability) {
    let values = if cli.values.is_empty() { FIXTURE.to_vec() } else { cli.values };
    let stability = if cli.naive { Stability::Naive } else { Stability::Shifted };
    (values, stability)
}

fn main() -> ExitCode {
    if std::env::var("SOFTMAX_LOG").is_ok() {
        let e = env_logger::Env::new()
            .filter("SOFTMAX_LOG")
            .write_style("SOFTMAX_LOG_STYLE");
        env_logger::init_from_env(e);
    }

    let cli = Cli::parse();
    debug!("options: {:?}", cli);

    let json = cli.json;
    let (values, stability) = resolve(cli);

    let report = match Report::compute(&values, stability) {
        Ok(report) => report,
        Err(e) => {
            eprintln!("softmax-rescale: {e}");
            return ExitCode::FAILURE;
        }
    };

    if json {
        match report.to_json() {
            Ok(json) => println!("{json}"),
            Err(e) => {
                eprintln!("softmax-rescale: {e}");
                return ExitCode::FAILURE;
            }
        }
    } else {
        print!("{}", report.render_text());
    }

    ExitCode::SUCCESS
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<Cli, clap::Error> {
        Cli::try_parse_from(args.iter().copied())
    }

    #[test]
    fn no_arguments_runs_fixture_shifted() {
        let cli = parse(&["softmax-rescale"]).unwrap();
        assert!(!cli.json);
        assert_eq!(resolve(cli), (FIXTURE.to_vec(), Stability::Shifted));
    }

    #[test]
    fn naive_flag_with_negative_scores() {
        let cli = parse(&["softmax-rescale", "--naive", "4", "0", "-1"]).unwrap();
        assert_eq!(resolve(cli), (vec![4.0, 0.0, -1.0], Stability::Naive));
    }

    #[test]
    fn json_flag_is_recognised() {
        let cli = parse(&["softmax-rescale", "--json", "-2"]).unwrap();
        assert!(cli.json);
        let (values, stability) = resolve(cli);
        assert_eq!(values, vec![-2.0]);

        let report = Report::compute(&values, stability).unwrap();
        let value: serde_json::Value = serde_json::from_str(&report.to_json().unwrap()).unwrap();
        assert_eq!(value["rescaled"], serde_json::json!([1.0]));
    }

    #[test]
    fn non_numeric_score_is_rejected() {
        let err = parse(&["softmax-rescale", "abc"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::ValueValidation);
        assert_ne!(err.exit_code(), 0);
    }
}
