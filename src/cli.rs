//! CLI interface for training-report.
//!
//! Every subcommand is non-interactive: packages in, one report line per
//! package out. Reports go to stdout; logs and errors go to stderr.
//!
//! - `training-report [demo]`: the built-in reference packages.
//! - `training-report calc <CODE> <PARAMS>...`: a single package.
//! - `training-report batch <FILE>`: every package in a TOML or JSON file.
//! - `training-report codes`: the supported workout codes.

use std::io::{self, Write};
use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use tracing::info;

use crate::config::Config;
use crate::dispatch;
use crate::model::WorkoutCode;
use crate::package::{self, Package};
use crate::render::{self, Language, OutputFormat};

/// Compute distance, speed, and calories from workout sensor packages.
#[derive(Debug, Parser)]
#[command(name = "training-report", after_long_help = USAGE_HELP)]
pub struct Cli {
    /// Config file (defaults to `$TRAINING_REPORT_CONFIG`, then
    /// `~/.training-report/config.toml`).
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Label language for text reports. Overrides the config file.
    #[arg(long, global = true, value_enum)]
    language: Option<LanguageArg>,

    /// Output format. Overrides the config file.
    #[arg(long, global = true, value_enum)]
    format: Option<FormatArg>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

const USAGE_HELP: &str = r#"Examples:
  training-report
  training-report calc RUN 15000 1 75
  training-report --language ru calc SWM 720 1 80 25 40
  training-report --format json batch packages.toml

Package file (TOML):
  [[package]]
  code = "WLK"
  data = [9000, 1, 75, 180]"#;

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Report the built-in reference packages (the default).
    Demo,

    /// Report a single package.
    Calc {
        /// Workout code: SWM, RUN, or WLK.
        code: String,

        /// Raw parameters in package order. See `codes`.
        #[arg(required = true, allow_negative_numbers = true)]
        params: Vec<f64>,
    },

    /// Report every package in a `.toml` or `.json` file, in order.
    ///
    /// Stops at the first package that fails; earlier reports stay printed.
    Batch {
        /// Package file.
        file: PathBuf,
    },

    /// List supported workout codes and their parameters.
    Codes,
}

/// CLI-facing language, mapped to the domain `Language`.
#[derive(Debug, Clone, ValueEnum)]
pub enum LanguageArg {
    /// English labels.
    En,
    /// Russian labels.
    Ru,
}

impl LanguageArg {
    fn to_domain(&self) -> Language {
        match self {
            Self::En => Language::English,
            Self::Ru => Language::Russian,
        }
    }
}

/// CLI-facing output format, mapped to the domain `OutputFormat`.
#[derive(Debug, Clone, ValueEnum)]
pub enum FormatArg {
    /// One summary line per workout.
    Text,
    /// One JSON object per workout.
    Json,
}

impl FormatArg {
    fn to_domain(&self) -> OutputFormat {
        match self {
            Self::Text => OutputFormat::Text,
            Self::Json => OutputFormat::Json,
        }
    }
}

/// Output settings after merging config and flags.
#[derive(Debug, Clone, Copy)]
struct Settings {
    language: Language,
    format: OutputFormat,
}

impl Settings {
    fn resolve(cli: &Cli, config: &Config) -> Self {
        Self {
            language: cli
                .language
                .as_ref()
                .map_or(config.language, LanguageArg::to_domain),
            format: cli
                .format
                .as_ref()
                .map_or(config.format, FormatArg::to_domain),
        }
    }
}

/// Run the CLI, returning an error message on failure.
pub fn run() -> Result<(), String> {
    let cli = Cli::parse();

    let config = Config::load(cli.config.as_deref()).map_err(|e| e.to_string())?;
    let settings = Settings::resolve(&cli, &config);

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match cli.command.unwrap_or(Command::Demo) {
        Command::Demo => report_packages(&package::reference_packages(), settings, &mut out),
        Command::Calc { code, params } => {
            report_packages(&[Package { code, data: params }], settings, &mut out)
        }
        Command::Batch { file } => {
            let packages = package::load_packages(&file)
                .map_err(|e| format!("failed to load {}: {e}", file.display()))?;
            report_packages(&packages, settings, &mut out)
        }
        Command::Codes => cmd_codes(&mut out),
    }
}

/// Dispatch, compute, and print each package in order.
///
/// The first failing package ends the run.
fn report_packages(
    packages: &[Package],
    settings: Settings,
    out: &mut impl Write,
) -> Result<(), String> {
    info!(count = packages.len(), "reporting packages");

    for (i, package) in packages.iter().enumerate() {
        let position = i + 1;
        let workout = dispatch::construct(&package.code, &package.data)
            .map_err(|e| format!("package {position} ({}): {e}", package.code))?;

        let line = render::render(&workout.report(), settings.format, settings.language)
            .map_err(|e| format!("failed to serialize report {position}: {e}"))?;

        writeln!(out, "{line}").map_err(|e| format!("failed to write report: {e}"))?;
    }

    Ok(())
}

fn cmd_codes(out: &mut impl Write) -> Result<(), String> {
    for code in WorkoutCode::ALL {
        writeln!(
            out,
            "{code}  {:<14}{}",
            code.display_name(),
            code.params().join(", ")
        )
        .map_err(|e| format!("failed to write: {e}"))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEXT_EN: Settings = Settings {
        language: Language::English,
        format: OutputFormat::Text,
    };

    fn capture(packages: &[Package], settings: Settings) -> (Result<(), String>, String) {
        let mut out = Vec::new();
        let result = report_packages(packages, settings, &mut out);
        (result, String::from_utf8(out).unwrap())
    }

    #[test]
    fn reference_packages_report() {
        let (result, output) = capture(&package::reference_packages(), TEXT_EN);

        result.unwrap();
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(
            lines,
            [
                "Workout type: Swimming; Duration: 1.000 h.; Distance: 0.994 km; \
                 Avg speed: 1.000 km/h; Calories spent: 336.000.",
                "Workout type: Running; Duration: 1.000 h.; Distance: 9.750 km; \
                 Avg speed: 9.750 km/h; Calories spent: 699.750.",
                "Workout type: SportsWalking; Duration: 1.000 h.; Distance: 5.850 km; \
                 Avg speed: 5.850 km/h; Calories spent: 157.500.",
            ]
        );
    }

    #[test]
    fn first_failure_stops_the_batch() {
        let packages = [
            Package::new("RUN", &[15_000.0, 1.0, 75.0]),
            Package::new("XYZ", &[1.0, 2.0, 3.0]),
            Package::new("SWM", &[720.0, 1.0, 80.0, 25.0, 40.0]),
        ];
        let (result, output) = capture(&packages, TEXT_EN);

        assert_eq!(
            result.unwrap_err(),
            "package 2 (XYZ): unknown workout type: 'XYZ' (expected SWM, RUN, or WLK)"
        );
        assert_eq!(output.lines().count(), 1);
        assert!(output.starts_with("Workout type: Running;"));
    }

    #[test]
    fn arity_error_names_the_package() {
        let (result, output) = capture(&[Package::new("WLK", &[9_000.0, 1.0, 75.0])], TEXT_EN);

        assert_eq!(
            result.unwrap_err(),
            "package 1 (WLK): WLK takes 4 parameters, got 3"
        );
        assert!(output.is_empty());
    }

    #[test]
    fn json_lines() {
        let settings = Settings {
            language: Language::English,
            format: OutputFormat::Json,
        };
        let (result, output) = capture(&package::reference_packages(), settings);

        result.unwrap();
        for line in output.lines() {
            let value: serde_json::Value = serde_json::from_str(line).unwrap();
            assert!(value["caloriesKcal"].is_number());
        }
        assert_eq!(output.lines().count(), 3);
    }

    #[test]
    fn codes_listing() {
        let mut out = Vec::new();
        cmd_codes(&mut out).unwrap();
        let output = String::from_utf8(out).unwrap();

        assert_eq!(
            output,
            "SWM  Swimming      action, duration_h, weight_kg, pool_length_m, pool_laps\n\
             RUN  Running       action, duration_h, weight_kg\n\
             WLK  SportsWalking action, duration_h, weight_kg, height_cm\n"
        );
    }

    #[test]
    fn flags_override_config() {
        let cli = Cli::parse_from(["training-report", "--language", "ru", "demo"]);
        let config = Config {
            language: Language::English,
            format: OutputFormat::Json,
        };
        let settings = Settings::resolve(&cli, &config);

        assert_eq!(settings.language, Language::Russian);
        assert_eq!(settings.format, OutputFormat::Json);
    }

    #[test]
    fn calc_accepts_negative_parameters() {
        let cli = Cli::parse_from(["training-report", "calc", "RUN", "100", "-1", "70"]);
        let Some(Command::Calc { code, params }) = cli.command else {
            panic!("expected calc");
        };

        assert_eq!(code, "RUN");
        assert_eq!(params.len(), 3);
        assert!((params[1] + 1.0).abs() < 1e-9);
    }

    #[test]
    fn no_subcommand_defaults_to_demo() {
        let cli = Cli::parse_from(["training-report"]);
        assert!(cli.command.is_none());
    }

    #[test]
    fn cli_definition_is_valid() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
