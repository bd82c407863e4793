use clap::{ArgAction, Args, Parser, Subcommand};
use iq_license_report::application::dto::OutputFormat;
use iq_license_report::config::ConfigOverrides;
use std::path::PathBuf;

/// Categorize the licenses of every application in a Nexus IQ organization
#[derive(Parser, Debug)]
#[command(name = "iq-license-report")]
#[command(version)]
#[command(about = "License categorization reports from Nexus IQ exports", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Load exported license data and write the license reports
    Licenses(LicensesArgs),
}

#[derive(Args, Debug)]
pub struct LicensesArgs {
    /// Config file (defaults to ~/.nexusiq/config.json)
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Directory holding applications.json, reports/ and <app>.orig.json
    #[arg(long, value_name = "DIR")]
    pub json_dir: Option<PathBuf>,

    /// Directory the reports are written to
    #[arg(long, value_name = "DIR")]
    pub reports_dir: Option<PathBuf>,

    /// Organization whose applications are reported
    #[arg(long = "org", value_name = "ID")]
    pub organization_id: Option<String>,

    /// Summary format: markdown or json
    #[arg(short, long)]
    pub format: Option<OutputFormat>,

    /// Minimum threat score counted as high risk
    #[arg(short, long, value_name = "N")]
    pub threshold: Option<u32>,

    /// Print the reports to stdout instead of writing them
    #[arg(long)]
    pub stdout: bool,

    /// Exit with code 1 when high-risk dependencies are found
    #[arg(long)]
    pub fail_on_high_risk: bool,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl LicensesArgs {
    pub fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            organization_id: self.organization_id.clone(),
            json_dir: self.json_dir.clone(),
            reports_dir: self.reports_dir.clone(),
            format: self.format,
            high_risk_threshold: self.threshold,
        }
    }

    /// Filter directive used when `RUST_LOG` is not set
    pub fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "debug",
            _ => "trace",
        }
    }
}
