use clap::{Parser, Subcommand, ValueEnum};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

use roi_app::{
    AppConfig, AppError, AppResult, CONFIG_FILE_NAME, ReportRequest, ScenarioSummary, Session,
    TracingNotifier, calculate, delete_scenario, export_report, list_scenarios, load_config,
    load_scenario, parse_scenario_id, save_current,
};
use roi_report::{format_count, format_currency, format_months, format_percent};
use roi_scenario::{InputFormat, ScenarioInput, parse_input, validate_input};
use roi_store::FileScenarioStore;

#[derive(Parser)]
#[command(name = "roi-cli")]
#[command(about = "roiflow CLI - Invoice automation ROI calculator", long_about = None)]
struct Cli {
    /// Configuration file (defaults to ./roiflow.yaml when present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// Directory holding saved scenarios
    #[arg(long, global = true)]
    store: Option<PathBuf>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check an input file and list every invalid field
    Validate {
        /// Path to the scenario YAML or JSON file
        input_path: PathBuf,
    },
    /// Calculate ROI for an input file
    Calc {
        /// Path to the scenario YAML or JSON file
        input_path: PathBuf,
        /// Save the calculation as a new scenario
        #[arg(long)]
        save: bool,
    },
    /// List saved scenarios, newest first
    Scenarios,
    /// Show a saved scenario
    Show {
        /// Scenario ID
        id: String,
    },
    /// Delete a saved scenario
    Delete {
        /// Scenario ID
        id: String,
    },
    /// Write an HTML report
    Report {
        /// Path to the scenario YAML or JSON file
        #[arg(required_unless_present = "id", conflicts_with = "id")]
        input_path: Option<PathBuf>,
        /// Report on a saved scenario instead of an input file
        #[arg(long)]
        id: Option<String>,
        /// Contact email printed on the report
        #[arg(long)]
        email: Option<String>,
        /// Directory the report is written to
        #[arg(short, long)]
        output_dir: Option<PathBuf>,
    },
    /// Print a default input file
    Template {
        #[arg(long, value_enum, default_value_t = TemplateFormat::Yaml)]
        format: TemplateFormat,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum TemplateFormat {
    Yaml,
    Json,
}

fn main() -> AppResult<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let mut config = resolve_config(cli.config.as_deref())?;
    if let Some(store_dir) = cli.store {
        config.store_dir = Some(store_dir);
    }

    match cli.command {
        Commands::Validate { input_path } => cmd_validate(&input_path),
        Commands::Calc { input_path, save } => cmd_calc(&config, &input_path, save),
        Commands::Scenarios => cmd_scenarios(&config),
        Commands::Show { id } => cmd_show(&config, &id),
        Commands::Delete { id } => cmd_delete(&config, &id),
        Commands::Report {
            input_path,
            id,
            email,
            output_dir,
        } => cmd_report(
            &config,
            input_path.as_deref(),
            id.as_deref(),
            email.as_deref(),
            output_dir.as_deref(),
        ),
        Commands::Template { format } => cmd_template(format),
    }
}

fn resolve_config(path: Option<&Path>) -> AppResult<AppConfig> {
    match path {
        Some(path) => load_config(path),
        None => {
            let default_path = Path::new(CONFIG_FILE_NAME);
            if default_path.exists() {
                load_config(default_path)
            } else {
                Ok(AppConfig::default())
            }
        }
    }
}

fn open_store(config: &AppConfig) -> AppResult<FileScenarioStore> {
    let store = config.open_store()?;
    tracing::debug!(dir = %store.root_dir().display(), "opened scenario store");
    Ok(store)
}

fn read_input(input_path: &Path) -> AppResult<ScenarioInput> {
    let format = InputFormat::from_path(input_path)?;
    let content = std::fs::read_to_string(input_path)?;
    Ok(parse_input(&content, format)?)
}

fn cmd_validate(input_path: &Path) -> AppResult<()> {
    println!("Validating input: {}", input_path.display());
    let input = read_input(input_path)?;
    match validate_input(&input) {
        Ok(()) => {
            println!("✓ Input is valid");
            Ok(())
        }
        Err(errors) => {
            println!("✗ {} invalid field(s):", errors.len());
            for error in errors.iter() {
                println!("  {}", error);
            }
            Err(AppError::Validation(errors))
        }
    }
}

fn cmd_calc(config: &AppConfig, input_path: &Path, save: bool) -> AppResult<()> {
    let input = read_input(input_path)?;
    let session = calculate(input)?;
    print_session(&session);

    if save {
        let store = open_store(config)?;
        let saved = save_current(&store, &TracingNotifier, &session)?;
        println!();
        println!("✓ Scenario saved: {}", saved.id);
    }
    Ok(())
}

fn cmd_scenarios(config: &AppConfig) -> AppResult<()> {
    let store = open_store(config)?;
    let scenarios = list_scenarios(&store, &TracingNotifier)?;

    if scenarios.is_empty() {
        println!("No saved scenarios");
        return Ok(());
    }

    println!("Saved scenarios:");
    for saved in &scenarios {
        let summary = ScenarioSummary::from(saved);
        let name = if summary.name.is_empty() {
            "(unnamed)"
        } else {
            summary.name.as_str()
        };
        println!(
            "  {} - {} ({}, {} invoices/month)",
            summary.id,
            name,
            summary.created_at.format("%Y-%m-%d %H:%M:%S UTC"),
            format_count(summary.monthly_invoice_volume)
        );
    }
    Ok(())
}

fn cmd_show(config: &AppConfig, id: &str) -> AppResult<()> {
    let id = parse_scenario_id(id)?;
    let store = open_store(config)?;
    let session = load_scenario(&store, &TracingNotifier, &id)?;
    print_session(&session);
    Ok(())
}

fn cmd_delete(config: &AppConfig, id: &str) -> AppResult<()> {
    let id = parse_scenario_id(id)?;
    let store = open_store(config)?;
    delete_scenario(&store, &TracingNotifier, &id)?;
    println!("✓ Scenario deleted: {}", id);
    Ok(())
}

fn cmd_report(
    config: &AppConfig,
    input_path: Option<&Path>,
    id: Option<&str>,
    email: Option<&str>,
    output_dir: Option<&Path>,
) -> AppResult<()> {
    let session = match (input_path, id) {
        (_, Some(id)) => {
            let id = parse_scenario_id(id)?;
            let store = open_store(config)?;
            load_scenario(&store, &TracingNotifier, &id)?
        }
        (Some(input_path), None) => calculate(read_input(input_path)?)?,
        (None, None) => {
            return Err(AppError::InvalidInput(
                "give an input file or --id".to_string(),
            ));
        }
    };

    let contact_email = email
        .or(config.contact_email.as_deref())
        .unwrap_or_default();
    let request = ReportRequest::today(
        output_dir.unwrap_or(config.report_dir.as_path()),
        contact_email,
    );

    let response = export_report(&session, &request, &TracingNotifier)?;
    println!(
        "✓ Report written: {} ({} bytes, {})",
        response.path.display(),
        response.bytes,
        response.mime_type
    );
    Ok(())
}

fn cmd_template(format: TemplateFormat) -> AppResult<()> {
    let input = ScenarioInput::named("My Scenario");
    let text = match format {
        TemplateFormat::Yaml => serde_yaml::to_string(&input)
            .map_err(|e| AppError::InvalidInput(e.to_string()))?,
        TemplateFormat::Json => serde_json::to_string_pretty(&input)
            .map_err(|e| AppError::InvalidInput(e.to_string()))?,
    };
    println!("{}", text.trim_end());
    Ok(())
}

fn print_session(session: &Session) {
    let Some((input, result)) = session.current() else {
        println!("Nothing calculated");
        return;
    };

    if !input.scenario_name.is_empty() {
        println!("Scenario: {}", input.scenario_name);
        println!();
    }

    println!("Results:");
    println!("  Monthly Savings:   {}", format_currency(result.monthly_savings));
    println!("  ROI:               {}", format_percent(result.roi_percentage));
    println!("  Payback Period:    {}", format_months(result.payback_months));
    println!("  Net Savings:       {}", format_currency(result.net_savings));
    println!();
    println!("Breakdown (monthly):");
    println!("  Manual Labor:      {}", format_currency(result.labor_cost_manual));
    println!("  Automation Cost:   {}", format_currency(result.auto_cost));
    println!("  Error Savings:     {}", format_currency(result.error_savings));
    println!(
        "  Before Boost:      {}",
        format_currency(roi_engine::unboosted_monthly_savings(result))
    );
    println!(
        "  Cumulative ({} mo): {}",
        input.time_horizon_months,
        format_currency(result.cumulative_savings)
    );
}
