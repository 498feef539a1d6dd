mod chart;
mod repl;

use chrono::{Local, NaiveDate};
use clap::{Args, Parser, Subcommand};
use planner_core::report::{energy_metrics, outcome_message, projection_metrics};
use planner_core::series::write_csv;
use planner_core::*;
use repl::{parse_command, SessionCommand};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "weightplan")]
#[command(about = "Weight loss journey planner", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Override config file location
    #[arg(long, global = true)]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Project the timeline to the goal weight (default)
    Project {
        #[command(flatten)]
        inputs: InputArgs,

        /// Print the projected series as CSV instead of metrics and chart
        #[arg(long)]
        csv: bool,

        /// Skip the chart
        #[arg(long)]
        no_chart: bool,
    },

    /// Start an interactive session with a weight log
    Session {
        #[command(flatten)]
        inputs: InputArgs,
    },
}

/// Overrides for the configured starting inputs
#[derive(Args, Default)]
struct InputArgs {
    /// Age in years (18-100)
    #[arg(long)]
    age: Option<u32>,

    /// Sex (male or female)
    #[arg(long)]
    sex: Option<String>,

    /// Height in inches (55-85)
    #[arg(long)]
    height: Option<f64>,

    /// Current weight in lbs (50-500)
    #[arg(long)]
    weight: Option<f64>,

    /// Target weight in lbs (50-500)
    #[arg(long)]
    goal: Option<f64>,

    /// Daily calorie intake (500-2500)
    #[arg(long)]
    intake: Option<u32>,

    /// Fasting days per week (0-5)
    #[arg(long)]
    fasting_days: Option<u32>,

    /// Barre sessions per week (0-7)
    #[arg(long)]
    barre_sessions: Option<u32>,

    /// Additional daily steps (0-20000)
    #[arg(long)]
    steps: Option<u32>,

    /// Give up after this many simulated days (1-36500)
    #[arg(long)]
    max_days: Option<u32>,
}

/// Everything a command needs to run recompute passes
struct Planner {
    inputs: PlannerInputs,
    session: SessionState,
    max_days: u32,
    today: NaiveDate,
}

impl Planner {
    fn new(config: &Config, args: InputArgs) -> Result<Self> {
        let mut inputs = PlannerInputs::from_config(config);
        let mut session = config.new_session();

        let profile = inputs.profile.clone();
        let sex = match args.sex {
            Some(ref s) => s.parse()?,
            None => profile.sex,
        };
        inputs.profile = UserProfile::clamped(
            args.age.unwrap_or(profile.age),
            sex,
            args.height.unwrap_or(profile.height_inches),
        );

        let activity = inputs.activity.clone();
        inputs.activity = ActivityPlan::clamped(
            args.intake.unwrap_or(activity.daily_calorie_intake),
            args.fasting_days.unwrap_or(activity.fasting_days_per_week),
            args.barre_sessions.unwrap_or(activity.barre_sessions_per_week),
            args.steps.unwrap_or(activity.additional_daily_steps),
        );

        if let Some(weight) = args.weight {
            session.set_current_weight(weight);
        }
        if let Some(goal) = args.goal {
            session.set_goal_weight(goal);
        }

        let max_days = args.max_days.unwrap_or(config.simulation.max_days);
        planner_core::inputs::check_max_days(max_days)?;

        Ok(Self {
            inputs,
            session,
            max_days,
            today: Local::now().date_naive(),
        })
    }

    fn recompute(&mut self) -> Result<Recomputation> {
        recompute(
            &mut self.session,
            &self.inputs.profile,
            &self.inputs.activity,
            self.today,
            self.max_days,
        )
    }
}

fn main() -> Result<()> {
    // Initialize logging
    planner_core::logging::init();

    let cli = Cli::parse();

    let config = match cli.config {
        Some(ref path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    match cli.command {
        Some(Commands::Project {
            inputs,
            csv,
            no_chart,
        }) => cmd_project(Planner::new(&config, inputs)?, csv, no_chart),
        Some(Commands::Session { inputs }) => cmd_session(Planner::new(&config, inputs)?),
        None => {
            // Default to "project" command
            cmd_project(Planner::new(&config, InputArgs::default())?, false, false)
        }
    }
}

fn cmd_project(mut planner: Planner, csv: bool, no_chart: bool) -> Result<()> {
    let pass = planner.recompute()?;

    if csv {
        match pass.outcome.projection() {
            Some(projection) => {
                write_csv(&ChartSeries::from_projection(projection), io::stdout().lock())?
            }
            None => {
                if let Some(message) = outcome_message(&pass.outcome) {
                    eprintln!("{}", message);
                }
            }
        }
        return Ok(());
    }

    display_pass(&pass, planner.today, !no_chart);
    Ok(())
}

fn cmd_session(mut planner: Planner) -> Result<()> {
    println!("Weight Loss Journey Planner - type 'help' for commands");
    display_pass(&planner.recompute()?, planner.today, true);

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        print!("> ");
        io::stdout().flush()?;

        let Some(line) = lines.next() else {
            break;
        };
        let line = line?;

        let command = match parse_command(&line) {
            Ok(command) => command,
            Err(e) => {
                println!("Error: {}", e);
                continue;
            }
        };

        match command {
            SessionCommand::Empty => {}
            SessionCommand::Help => println!("{}", repl::HELP),
            SessionCommand::Quit => break,
            SessionCommand::Inputs => display_inputs(&planner),
            SessionCommand::History => display_history(planner.session.weight_log()),
            SessionCommand::Show => display_pass(&planner.recompute()?, planner.today, true),
            SessionCommand::Set { field, value } => {
                if let Err(e) = planner
                    .inputs
                    .apply(&mut planner.session, field, &value)
                {
                    println!("Error: {}", e);
                    continue;
                }
                display_pass(&planner.recompute()?, planner.today, true);
            }
            SessionCommand::Log { weight, date } => {
                let date = date.unwrap_or(planner.today);
                planner.session.append_log_entry(date, weight);
                println!("✓ Weight logged successfully!");
                display_pass(&planner.recompute()?, planner.today, true);
            }
        }
    }

    println!();
    println!(
        "Session ended with {} logged weights.",
        planner.session.weight_log().len()
    );
    Ok(())
}

fn display_pass(pass: &Recomputation, today: NaiveDate, show_chart: bool) {
    println!();
    for metric in energy_metrics(&pass.metrics) {
        println!("  {}", metric);
    }
    println!();
    for metric in projection_metrics(&pass.outcome, today) {
        println!("  {}", metric);
    }

    if let Some(message) = outcome_message(&pass.outcome) {
        println!("  ℹ {}", message);
    }

    if show_chart {
        if let Some(projection) = pass.outcome.projection() {
            println!();
            print!(
                "{}",
                chart::render_line_chart(
                    &ChartSeries::from_projection(projection),
                    chart::DEFAULT_WIDTH,
                    chart::DEFAULT_HEIGHT,
                )
            );
        }
    }
    println!();
}

fn display_inputs(planner: &Planner) {
    let profile = &planner.inputs.profile;
    let activity = &planner.inputs.activity;
    let session = &planner.session;

    println!();
    println!("  Age: {}", profile.age);
    println!("  Sex: {}", profile.sex);
    println!("  Height: {:.1} in", profile.height_inches);
    println!("  Current Weight: {:.1} lbs", session.current_weight());
    println!("  Target Weight: {:.1} lbs", session.goal_weight());
    println!("  Daily Calorie Intake: {}", activity.daily_calorie_intake);
    println!("  Fasting Days Per Week: {}", activity.fasting_days_per_week);
    println!("  Barre Sessions Per Week: {}", activity.barre_sessions_per_week);
    println!("  Additional Daily Steps: {}", activity.additional_daily_steps);
    println!();
}

fn display_history(log: &WeightLog) {
    if log.is_empty() {
        println!("No weights logged yet.");
        return;
    }

    println!();
    for entry in log.entries() {
        println!("  {}  {:.1} lbs", entry.date_iso(), entry.weight);
    }
    println!();
    print!(
        "{}",
        chart::render_line_chart(
            &ChartSeries::from_log(log),
            chart::DEFAULT_WIDTH,
            chart::DEFAULT_HEIGHT,
        )
    );
    println!();
}
