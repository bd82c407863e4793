mod cli;

use clap::Parser;
use cli::{Cli, Command, LicensesArgs};
use iq_license_report::adapters::outbound::console::StderrProgressReporter;
use iq_license_report::adapters::outbound::filesystem::FileSystemReportSource;
use iq_license_report::application::dto::ReportRequest;
use iq_license_report::application::factories::{FormatterFactory, PresenterFactory, PresenterType};
use iq_license_report::application::use_cases::{GenerateReportUseCase, LoadLicensesUseCase};
use iq_license_report::config::{load_config, resolve_settings, ResolvedSettings};
use iq_license_report::license_compliance::catalog::{ApplicationCatalog, DependencyCatalog};
use iq_license_report::shared::error::{ExitCode, ReportError};
use iq_license_report::shared::security::validate_directory;
use iq_license_report::shared::Result;
use owo_colors::OwoColorize;
use std::process;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // --help and --version are reported through clap's error type too
            let code = if e.use_stderr() {
                ExitCode::InvalidArguments
            } else {
                ExitCode::Success
            };
            let _ = e.print();
            process::exit(code.as_i32());
        }
    };

    let Command::Licenses(args) = cli.command;
    init_tracing(args.log_level());

    match run(&args) {
        Ok(code) => process::exit(code.as_i32()),
        Err(e) => {
            eprintln!("\n{}\n", "❌ An error occurred:".red().bold());
            eprintln!("{}", e);

            for cause in e.chain().skip(1) {
                eprintln!("\nCaused by: {}", cause);
            }

            eprintln!();
            process::exit(ExitCode::ApplicationError.as_i32());
        }
    }
}

fn init_tracing(default_level: &str) {
    let filter = EnvFilter::new(
        std::env::var("RUST_LOG").unwrap_or_else(|_| default_level.to_string()),
    );
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .init();
}

fn run(args: &LicensesArgs) -> Result<ExitCode> {
    let config = load_config(args.config.as_deref())?;
    let settings = resolve_settings(&config, args.overrides(), !args.stdout)?;
    tracing::debug!(?settings, "resolved settings");

    validate_directory(&settings.json_dir)?;
    let presenter_type = select_presenter(args.stdout, &settings)?;

    let mut applications = ApplicationCatalog::new(settings.organization_id.clone());
    let mut dependencies = DependencyCatalog::new();

    let load_use_case = LoadLicensesUseCase::new(
        FileSystemReportSource::new(settings.json_dir.clone()),
        StderrProgressReporter::new(),
    );
    load_use_case.execute(&mut applications, &mut dependencies)?;

    let report_use_case = GenerateReportUseCase::new(StderrProgressReporter::new());
    let request = ReportRequest::new(settings.high_risk_threshold);
    let response = report_use_case.execute(&request, &applications, &dependencies)?;

    let presenter = PresenterFactory::create(presenter_type);
    for formatter_type in FormatterFactory::for_format(settings.format) {
        eprintln!("{}", FormatterFactory::progress_message(formatter_type));
        let formatter = FormatterFactory::create(formatter_type);
        for artifact in formatter.format(&response.read_model)? {
            presenter.present(&artifact)?;
        }
    }

    if args.fail_on_high_risk && response.has_high_risk {
        return Ok(ExitCode::HighRiskDetected);
    }
    Ok(ExitCode::Success)
}

fn select_presenter(stdout: bool, settings: &ResolvedSettings) -> Result<PresenterType> {
    if stdout {
        return Ok(PresenterType::Stdout);
    }
    let reports_dir = settings
        .reports_dir
        .clone()
        .ok_or_else(|| ReportError::Validation {
            message: "reportsDir is required unless --stdout is given".to_string(),
        })?;
    validate_directory(&reports_dir)?;
    Ok(PresenterType::Directory(reports_dir))
}
