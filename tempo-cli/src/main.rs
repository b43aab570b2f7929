use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use dotenvy::dotenv;
use log::info;
use std::fmt;

use tempo::logging::{init_logger, parse_level};
use tempo::{Package, Workout, WorkoutCode, sample_packages};

#[derive(Parser, Debug)]
#[command(version, about = "Tempo - fitness tracker reports", long_about = None)]
struct Args {
    /// off, error, warn, info, debug or trace
    #[arg(long, env = "TEMPO_LOG_LEVEL", default_value = "warn", global = true)]
    log_level: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print one report per sensor package, e.g. `RUN:15000,1,75`
    Report {
        #[arg(value_name = "CODE:FIELDS", required = true)]
        packages: Vec<Package>,

        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
    /// Print reports for the built-in sample packages
    Sample {
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
    /// List workout codes and the fields each one expects
    Codes,
}

#[derive(Debug, Clone, Copy, PartialEq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

fn render(package: &Package, format: OutputFormat) -> Result<String> {
    let report = package
        .read()
        .and_then(|w| w.build_report())
        .with_context(|| format!("failed to process package {}", package))?;

    Ok(match format {
        OutputFormat::Text => report.render(),
        OutputFormat::Json => report.to_json()?,
    })
}

fn print_reports(packages: &[Package], format: OutputFormat) -> Result<()> {
    info!("processing {} packages as {}", packages.len(), format);
    for package in packages {
        println!("{}", render(package, format)?);
    }
    Ok(())
}

fn print_codes() {
    for code in WorkoutCode::ALL {
        println!(
            "{}  {:<14} {}",
            code,
            code.training_type(),
            code.field_names().join(", ")
        );
    }
}

fn main() -> Result<()> {
    dotenv().ok();
    let args = Args::parse();

    let level = parse_level(&args.log_level)
        .with_context(|| format!("unknown log level {:?}", args.log_level))?;
    init_logger(level);

    match args.command {
        Commands::Report { packages, format } => print_reports(&packages, format),
        Commands::Sample { format } => print_reports(&sample_packages(), format),
        Commands::Codes => {
            print_codes();
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_packages() {
        let args = Args::try_parse_from(["tempo", "report", "RUN:15000,1,75", "--format", "json"])
            .unwrap();
        let Commands::Report { packages, format } = args.command else {
            panic!("expected report command");
        };
        assert_eq!(format, OutputFormat::Json);
        assert_eq!(packages, vec![Package::new(WorkoutCode::Running, vec![15000.0, 1.0, 75.0])]);
    }

    #[test]
    fn rejects_unknown_code() {
        assert!(Args::try_parse_from(["tempo", "report", "XYZ:1,2,3"]).is_err());
        assert!(Args::try_parse_from(["tempo", "report"]).is_err());
    }

    #[test]
    fn renders_json_and_text() {
        let package: Package = "SWM:720,1,80,25,40".parse().unwrap();
        let text = render(&package, OutputFormat::Text).unwrap();
        assert!(text.starts_with("Тип тренировки: Swimming;"));
        let json: serde_json::Value =
            serde_json::from_str(&render(&package, OutputFormat::Json).unwrap()).unwrap();
        let calories = json["calories_kcal"].as_f64().unwrap();
        assert!((calories - 336.0).abs() < 1e-9);
    }

    #[test]
    fn arity_mismatch_is_an_error() {
        let package: Package = "RUN:1,2".parse().unwrap();
        let err = render(&package, OutputFormat::Text).unwrap_err();
        assert!(err.to_string().contains("RUN:1,2"));
    }
}
