use crate::config::GeneratorConfig;
use crate::descriptor::load_descriptor;
use crate::linter::{has_errors, lint_descriptor, print_lint_issues, LintSeverity};
use crate::plan::{FileOutcome, FilePlan, Planner};
use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;
use std::fmt::Write as _;
use std::path::{Path, PathBuf};
use tracing::info;

/// Command-line interface for protoroute
///
/// Turns HTTP-annotated proto descriptors into router paths and
/// per-field binding plans.
#[derive(Parser)]
#[command(name = "protoroute-gen")]
#[command(about = "Route and binding planner for HTTP-annotated gRPC services", long_about = None)]
pub struct Cli {
    /// The subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands
#[derive(Subcommand)]
pub enum Commands {
    /// Compile routes and binding plans for every annotated method
    ///
    /// Files are planned independently: a failing file is reported and the
    /// rest are still printed. Exits non-zero if any file failed.
    Plan {
        /// Path to the descriptor set (YAML or JSON)
        #[arg(short, long)]
        descriptor: PathBuf,

        /// Generator config file (YAML, JSON or TOML)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
    /// Lint HTTP annotations
    ///
    /// Reports every problem found instead of stopping at the first:
    /// - empty templates and ambiguous rules
    /// - route parameters not bound to the URI
    /// - fields bound nowhere on no-body methods
    /// - template fragments that are routed verbatim
    /// - duplicate routes
    Lint {
        /// Path to the descriptor set (YAML or JSON)
        #[arg(short, long)]
        descriptor: PathBuf,

        /// Generator config file (YAML, JSON or TOML)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Exit with error code if any errors are found
        #[arg(long, default_value_t = false)]
        fail_on_error: bool,

        /// Show only errors (hide warnings and info)
        #[arg(long, default_value_t = false)]
        errors_only: bool,
    },
}

/// Output format for the `plan` command
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable route listing
    Text,
    /// Machine-readable plan, one entry per file
    Json,
}

/// JSON view of one file outcome
#[derive(Serialize)]
struct FileReport<'a> {
    path: &'a Path,
    #[serde(skip_serializing_if = "Option::is_none")]
    plan: Option<&'a FilePlan>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    kind: Option<&'static str>,
}

fn planner_for(config: Option<&Path>) -> Result<Planner> {
    let config = GeneratorConfig::load(config)?;
    let no_body = config
        .no_body_methods()
        .context("invalid generator config")?;
    Ok(Planner::new(no_body))
}

/// Render planning outcomes in the requested format.
///
/// # Errors
///
/// Fails only if serialization or formatting fails.
pub fn render_plan(outcomes: &[FileOutcome], format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => {
            let reports: Vec<FileReport<'_>> = outcomes
                .iter()
                .map(|o| match &o.result {
                    Ok(plan) => FileReport {
                        path: &o.path,
                        plan: Some(plan),
                        error: None,
                        kind: None,
                    },
                    Err(e) => FileReport {
                        path: &o.path,
                        plan: None,
                        error: Some(e.to_string()),
                        kind: Some(e.kind()),
                    },
                })
                .collect();
            Ok(serde_json::to_string_pretty(&reports)?)
        }
        OutputFormat::Text => {
            let mut out = String::new();
            render_text(&mut out, outcomes)?;
            Ok(out)
        }
    }
}

fn render_text(out: &mut String, outcomes: &[FileOutcome]) -> std::fmt::Result {
    for outcome in outcomes {
        let plan = match &outcome.result {
            Ok(plan) => plan,
            Err(e) => {
                writeln!(out, "❌ {}", outcome.path.display())?;
                writeln!(out, "   [{}] {}", e.kind(), e)?;
                continue;
            }
        };
        writeln!(out, "📄 {} ({} route(s))", outcome.path.display(), plan.routes.len())?;
        for route in &plan.routes {
            let b = &route.bindings;
            writeln!(
                out,
                "   {:<7} {:<40} {}.{}",
                route.http_method.as_str(),
                route.router_path,
                route.service,
                route.method
            )?;
            writeln!(
                out,
                "           header={} uri={} query={} body={}",
                b.header_fields.len(),
                b.uri_fields.len(),
                b.query_fields.len(),
                b.body_fields.len()
            )?;
        }
    }
    Ok(())
}

/// Execute a parsed command line.
///
/// # Errors
///
/// Load and config failures, a `plan` run in which any file failed, or a
/// `lint --fail-on-error` run that found errors.
pub fn execute(cli: &Cli) -> Result<()> {
    match &cli.command {
        Commands::Plan {
            descriptor,
            config,
            format,
        } => {
            let planner = planner_for(config.as_deref())?;
            let set = load_descriptor(descriptor)?;
            let outcomes = planner.plan_set(&set);
            print!("{}", render_plan(&outcomes, *format)?);

            let failed = outcomes.iter().filter(|o| o.result.is_err()).count();
            info!(files = outcomes.len(), failed, "Planning finished");
            if failed > 0 {
                bail!("{} of {} file(s) failed planning", failed, outcomes.len());
            }
            Ok(())
        }
        Commands::Lint {
            descriptor,
            config,
            fail_on_error,
            errors_only,
        } => {
            let planner = planner_for(config.as_deref())?;
            let set = load_descriptor(descriptor)?;
            let mut issues = lint_descriptor(&set, &planner);
            if *errors_only {
                issues.retain(|i| i.severity == LintSeverity::Error);
            }
            print_lint_issues(&issues);

            if *fail_on_error && has_errors(&issues) {
                bail!("lint found errors in {}", descriptor.display());
            }
            Ok(())
        }
    }
}

/// Parse the process arguments and run the selected command.
///
/// # Errors
///
/// See [`execute`].
pub fn run_cli() -> Result<()> {
    let cli = Cli::parse();
    execute(&cli)
}
