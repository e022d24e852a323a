use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use weightsim_core::config::LimitsConfig;
use weightsim_core::*;

#[derive(Parser)]
#[command(name = "weightsim")]
#[command(about = "Body-weight trajectory simulator (energy balance, RK4)", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Use this config file instead of the default location
    #[arg(long, global = true)]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Simulate weight change and recommend a daily intake (default)
    Simulate(SimulateArgs),

    /// Show the diet plan for a goal and general recommendations
    Guidance {
        /// Initial weight in kg
        #[arg(long)]
        initial_weight: Option<f64>,

        /// Target weight in kg
        #[arg(long)]
        target_weight: Option<f64>,
    },
}

#[derive(Args, Default)]
struct SimulateArgs {
    /// Full name (used in the summary and report file name)
    #[arg(long)]
    name: Option<String>,

    /// Age in years
    #[arg(long)]
    age: Option<u32>,

    /// Initial weight in kg
    #[arg(long)]
    initial_weight: Option<f64>,

    /// Target weight in kg
    #[arg(long)]
    target_weight: Option<f64>,

    /// Daily caloric intake in kcal
    #[arg(long)]
    intake: Option<f64>,

    /// Simulation horizon in days
    #[arg(long)]
    days: Option<u32>,

    /// Integration step in days
    #[arg(long)]
    step: Option<f64>,

    /// Integrate with --intake instead of the recommended intake
    #[arg(long)]
    use_intake: bool,

    /// Print every trajectory point
    #[arg(long)]
    table: bool,

    /// Print the full report as JSON instead of the summary
    #[arg(long)]
    json: bool,

    /// Write the CSV report to this file
    #[arg(long, conflicts_with = "export_dir")]
    export: Option<PathBuf>,

    /// Write the CSV report into this directory (named after --name)
    #[arg(long)]
    export_dir: Option<PathBuf>,
}

fn main() -> Result<()> {
    // Initialize logging
    weightsim_core::logging::init();

    let cli = Cli::parse();

    let config = match cli.config {
        Some(ref path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    match cli.command {
        Some(Commands::Simulate(args)) => cmd_simulate(args, &config),
        Some(Commands::Guidance {
            initial_weight,
            target_weight,
        }) => cmd_guidance(initial_weight, target_weight, &config),
        None => {
            // Default to "simulate" with config defaults
            cmd_simulate(SimulateArgs::default(), &config)
        }
    }
}

fn cmd_simulate(args: SimulateArgs, config: &Config) -> Result<()> {
    let defaults = &config.defaults;

    let source = if args.use_intake {
        IntakeSource::Supplied
    } else {
        IntakeSource::Recommended
    };

    let params = SimulationParameters::new(
        args.name.unwrap_or_else(|| defaults.name.clone()),
        args.age.unwrap_or(defaults.age_years),
        args.initial_weight.unwrap_or(defaults.initial_weight_kg),
        args.target_weight.unwrap_or(defaults.target_weight_kg),
        args.intake.unwrap_or(defaults.daily_intake_kcal),
        args.days.unwrap_or(defaults.horizon_days),
    )
    .with_step_size(args.step.unwrap_or(defaults.step_size_days))
    .with_intake_source(source);

    tracing::debug!("Simulation parameters: {:?}", params);
    validate_inputs(&params, &config.limits)?;

    let report = simulate(&params)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        display_report(&report, args.table);
    }

    let csv_options = config.report.csv_options()?;
    let exported = if let Some(path) = args.export {
        save_csv_report_to(&report, &path, &csv_options)?;
        Some(path)
    } else if let Some(dir) = args.export_dir {
        Some(save_csv_report(&report, &dir, &csv_options)?)
    } else {
        None
    };

    if let Some(path) = exported {
        // Keep stdout pure JSON in --json mode
        if args.json {
            eprintln!("Report written to {}", path.display());
        } else {
            println!("✓ Report written to {}", path.display());
        }
    }

    Ok(())
}

/// Reject inputs outside the configured human ranges before simulating
fn validate_inputs(params: &SimulationParameters, limits: &LimitsConfig) -> Result<()> {
    limits.age_years.check("age", params.age_years)?;
    limits
        .weight_kg
        .check("initial weight (kg)", params.initial_weight_kg)?;
    limits
        .weight_kg
        .check("target weight (kg)", params.target_weight_kg)?;
    limits
        .daily_intake_kcal
        .check("daily intake (kcal)", params.daily_intake_kcal)?;
    limits
        .horizon_days
        .check("simulation days", params.horizon_days)?;
    Ok(())
}

fn cmd_guidance(
    initial_weight: Option<f64>,
    target_weight: Option<f64>,
    config: &Config,
) -> Result<()> {
    let initial = initial_weight.unwrap_or(config.defaults.initial_weight_kg);
    let target = target_weight.unwrap_or(config.defaults.target_weight_kg);

    let goal = GoalDirection::from_weights(initial, target);
    println!("Goal: {}", goal.label());
    println!();
    display_guidance(goal);

    Ok(())
}

fn display_report(report: &SimulationReport, table: bool) {
    let params = &report.parameters;
    let scalars = &report.scalars;

    println!("✓ Simulation completed for {}", params.name);
    println!();
    println!("  Initial weight:          {:.2} kg", params.initial_weight_kg);
    println!("  Estimated final weight:  {:.2} kg", scalars.final_weight_kg);
    println!("  Estimated expenditure:   {:.0} kcal/day", scalars.expenditure_kcal);
    println!(
        "  Recommended intake:      {:.0} kcal/day",
        scalars.recommended_intake_kcal
    );
    if params.intake_source == IntakeSource::Supplied {
        println!("  Simulated intake:        {:.0} kcal/day", scalars.intake_used_kcal);
    }
    println!("  Goal:                    {}", report.goal.label());
    println!();

    if table {
        println!("  {:>6}  {:>10}", "Day", "Weight (kg)");
        for point in &report.trajectory {
            println!("  {:>6}  {:>10.2}", point.time_days, point.weight_kg);
        }
        println!();
    }

    display_guidance(report.goal);
}

fn display_guidance(goal: GoalDirection) {
    println!("Recommended diet plan:");
    for line in diet_plan(goal).lines {
        println!("  - {}", line);
    }
    println!();
    println!("General recommendations:");
    for line in general_recommendations() {
        println!("  - {}", line);
    }
}
