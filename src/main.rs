mod app;
mod domain;
mod error;
mod export;
mod input;
mod logging;
mod persistence;
mod planner;
mod report;
mod schedule;
mod ui;

use anyhow::{Context, Result};
use app::AppState;
use chrono::{Local, NaiveDate};
use clap::{Parser, Subcommand};
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use domain::{PlanInput, UiMode, Weekday};
use persistence::{
    config_file, get_data_dir, init_dir_in, input_file, load_config, load_input, load_plan,
    log_file, plan_file, save_config, save_input, save_plan, AppConfig,
};
use planner::{GeminiClient, Summarizer};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{info, warn};

/// How long the event loop waits for a key before redrawing
const TICK_RATE: Duration = Duration::from_millis(250);

#[derive(Parser)]
#[command(name = "smartplan")]
#[command(about = "A terminal weekly planner: generate a week, then track, move and review it", long_about = None)]
struct Cli {
    /// Write debug logs to the log file
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize a local .smartplan directory in the current directory
    Init,
    /// Manage what the planner schedules (fixed events, routines, homework, projects)
    Input {
        #[command(subcommand)]
        action: InputCommands,
    },
    /// Generate a new week from the saved input
    Generate {
        /// Replace an existing plan without asking
        #[arg(short, long)]
        yes: bool,
    },
    /// Write a weekly report with completion statistics
    Report {
        /// Output file path. Defaults to <data dir>/report-YYYY-MM-DD.md
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Append a coach-style review from the planner model
        #[arg(long)]
        coach: bool,
    },
    /// Export one day of the board as text
    Export {
        /// Date to export (YYYY-MM-DD format). Defaults to today.
        #[arg(short, long, value_parser = parse_date)]
        date: Option<NaiveDate>,
        /// Output file path. Defaults to <data dir>/SmartPlan-<Day>-<date>.txt
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[derive(Subcommand)]
enum InputCommands {
    /// Add a class or appointment at a set time
    AddFixed {
        name: String,
        #[arg(short, long, value_parser = parse_weekday)]
        day: Weekday,
        /// Start time, HH:MM
        #[arg(short, long)]
        start: String,
        /// End time, HH:MM
        #[arg(short, long)]
        end: String,
        #[arg(short, long)]
        note: Option<String>,
    },
    /// Add something repeated during the week
    AddRoutine {
        name: String,
        /// Times per week (1-7)
        #[arg(short = 'f', long)]
        per_week: u8,
        /// Minutes per session
        #[arg(short, long)]
        minutes: u32,
        #[arg(short, long)]
        note: Option<String>,
    },
    /// Add homework with a deadline
    AddHomework {
        name: String,
        #[arg(short, long)]
        sessions: u32,
        /// Deadline (YYYY-MM-DD format)
        #[arg(short, long, value_parser = parse_date)]
        deadline: NaiveDate,
        #[arg(short, long)]
        note: Option<String>,
    },
    /// Add a project with a deadline
    AddProject {
        name: String,
        #[arg(short, long)]
        sessions: u32,
        /// Deadline (YYYY-MM-DD format)
        #[arg(short, long, value_parser = parse_date)]
        deadline: NaiveDate,
        #[arg(short, long)]
        note: Option<String>,
    },
    /// Show everything the planner will schedule
    List,
    /// Remove an item by id
    Remove { id: String },
    /// Remove every item
    Clear,
}

fn parse_date(value: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .map_err(|e| format!("Invalid date format. Use YYYY-MM-DD: {}", e))
}

fn parse_weekday(value: &str) -> Result<Weekday, String> {
    Weekday::from_name(value).ok_or_else(|| format!("Unknown day '{}'", value))
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Resolving the log file creates a data directory, which init must not find
    if !matches!(cli.command, Some(Commands::Init)) {
        logging::init(&log_file()?, cli.verbose)?;
    }

    match cli.command {
        Some(Commands::Init) => {
            let current_dir = std::env::current_dir().context("Could not determine current directory")?;
            let dir = run_init(&current_dir)?;
            println!("Initialized smartplan directory: {}", dir.display());
            println!();
            println!("Add input with 'smartplan input add-...', then run 'smartplan generate'.");
            Ok(())
        }
        Some(Commands::Input { action }) => run_input(action),
        Some(Commands::Generate { yes }) => run_generate(yes),
        Some(Commands::Report { output, coach }) => run_report(output, coach),
        Some(Commands::Export { date, output }) => {
            let date = date.unwrap_or_else(|| Local::now().date_naive());
            let tasks = load_plan(plan_file()?)?;
            let path = match output {
                Some(path) => {
                    export::export_day_to(&tasks, date, &path)?;
                    path
                }
                None => export::export_day(&tasks, date, &get_data_dir()?)?,
            };
            println!("Exported: {}", path.display());
            Ok(())
        }
        None => run_tui(),
    }
}

/// Create `<dir>/.smartplan` with a default config
fn run_init(dir: &Path) -> Result<PathBuf> {
    let data_dir = init_dir_in(dir)?;
    save_config(data_dir.join("config.json"), &AppConfig::default())?;
    Ok(data_dir)
}

fn run_input(action: InputCommands) -> Result<()> {
    let path = input_file()?;
    let mut input = load_input(&path)?;

    match action {
        InputCommands::AddFixed {
            name,
            day,
            start,
            end,
            note,
        } => {
            let event = input.add_fixed_event(&name, day, &start, &end, note)?;
            println!("Added fixed event {} ({})", event.name, event.id);
        }
        InputCommands::AddRoutine {
            name,
            per_week,
            minutes,
            note,
        } => {
            let routine = input.add_routine(&name, per_week, minutes, note)?;
            println!("Added routine {} ({})", routine.name, routine.id);
        }
        InputCommands::AddHomework {
            name,
            sessions,
            deadline,
            note,
        } => {
            let item = input.add_homework(&name, sessions, deadline, note)?;
            println!("Added homework {} ({})", item.name, item.id);
        }
        InputCommands::AddProject {
            name,
            sessions,
            deadline,
            note,
        } => {
            let item = input.add_project(&name, sessions, deadline, note)?;
            println!("Added project {} ({})", item.name, item.id);
        }
        InputCommands::List => {
            print_input(&input);
            return Ok(());
        }
        InputCommands::Remove { id } => {
            if !input.remove(&id) {
                anyhow::bail!("No input item with id {}", id);
            }
            println!("Removed {}", id);
        }
        InputCommands::Clear => {
            input.clear();
            println!("Cleared all input");
        }
    }

    save_input(&path, &input)
}

fn print_input(input: &PlanInput) {
    if input.is_empty() {
        println!("No input yet.");
        return;
    }

    if !input.fixed_events.is_empty() {
        println!("Fixed events:");
        for e in &input.fixed_events {
            println!("  [{}] {} {}-{}  {}", e.id, e.day, e.start_time, e.end_time, e.name);
        }
    }
    if !input.routines.is_empty() {
        println!("Routines:");
        for r in &input.routines {
            println!(
                "  [{}] {}  {}x/week, {} min",
                r.id, r.name, r.frequency_per_week, r.duration_minutes
            );
        }
    }
    for (label, items) in [("Homework:", &input.homework), ("Projects:", &input.projects)] {
        if items.is_empty() {
            continue;
        }
        println!("{}", label);
        for item in items {
            println!(
                "  [{}] {}  {} sessions by {}",
                item.id, item.name, item.sessions_needed, item.deadline
            );
        }
    }
}

fn run_generate(yes: bool) -> Result<()> {
    let plan_path = plan_file()?;
    let existing = load_plan(&plan_path)?;
    if !existing.is_empty() && !yes {
        anyhow::bail!(
            "A plan with {} tasks already exists. Re-run with --yes to replace it.",
            existing.len()
        );
    }

    let config = load_config(config_file()?)?;
    let input = load_input(input_file()?)?;
    let client = GeminiClient::new(&config)?;

    println!("Planning your week...");
    let tasks = planner::generate_plan(&client, &input, Local::now().date_naive())?;
    save_plan(&plan_path, &tasks)?;
    println!("Generated {} tasks: {}", tasks.len(), plan_path.display());
    Ok(())
}

fn run_report(output: Option<PathBuf>, coach: bool) -> Result<()> {
    let tasks = load_plan(plan_file()?)?;
    let date = Local::now().date_naive();

    let review = if coach {
        let config = load_config(config_file()?)?;
        match GeminiClient::new(&config).and_then(|client| client.summarize(&tasks)) {
            Ok(review) => Some(review),
            Err(e) => {
                warn!(error = %e, "coach review failed");
                eprintln!("Warning: coach review unavailable: {}", e.user_message());
                None
            }
        }
    } else {
        None
    };

    println!("Generating report for {}...", date);
    let report_path = report::generate_report(&tasks, date, output, review.as_deref())?;
    println!("Report generated: {}", report_path.display());
    Ok(())
}

fn run_tui() -> Result<()> {
    let data_dir = get_data_dir()?;
    eprintln!("Using smartplan directory: {}", data_dir.display());

    let config = load_config(config_file()?)?;
    let plan_path = plan_file()?;
    let tasks = load_plan(&plan_path)?;
    let mut app = AppState::new(tasks, Local::now().date_naive(), config.use_emoji);
    info!(tasks = app.store.len(), "starting terminal ui");

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, &mut app, &config, &plan_path);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if app.needs_save {
        if let Err(e) = app.save(&plan_path) {
            eprintln!("Error saving plan: {}", e);
        }
    }

    if let Err(err) = result {
        eprintln!("Error: {}", err);
    }

    Ok(())
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut AppState,
    config: &AppConfig,
    plan_path: &Path,
) -> Result<()> {
    loop {
        terminal.draw(|f| ui::render(f, app))?;

        // The overlay is on screen; block on the planner call
        if app.ui_mode == UiMode::Planning {
            regenerate(app, config)?;
        } else if event::poll(TICK_RATE)? {
            if let Event::Key(key) = event::read()? {
                // Only process key press events (ignore key release)
                if key.kind == KeyEventKind::Press && input::handle_key(app, key)? {
                    return Ok(());
                }
            }
        }

        // Autosave if needed
        if app.needs_save {
            app.save(plan_path)
                .with_context(|| format!("Failed to save plan: {}", plan_path.display()))?;
        }
    }
}

fn regenerate(app: &mut AppState, config: &AppConfig) -> Result<()> {
    let input = match load_input(input_file()?) {
        Ok(input) => input,
        Err(e) => {
            app.set_status(format!("Failed to read input: {}", e));
            app.ui_mode = UiMode::Normal;
            return Ok(());
        }
    };

    let result = GeminiClient::new(config).and_then(|client| {
        planner::generate_plan(&client, &input, Local::now().date_naive())
    });
    app.apply_generated(result);
    Ok(())
}
