//! weekline CLI: week-windowed project timeline in the terminal

use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use std::error::Error;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;
use weekline_engine::{
    load_tasks, Clock, Config, FixedClock, SystemClock, Task, TaskBar, TimelineView, WeekView,
    WeekWindow, DEFAULT_CONFIG_PATH,
};
use weekline_tui::{headless, Action, App};

/// Week-by-week Gantt timeline for a JSON task list
#[derive(Parser)]
#[command(name = "weekline")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Config file
    #[arg(long, global = true, default_value = DEFAULT_CONFIG_PATH)]
    config: PathBuf,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Open the TUI (default when no command specified)
    Tui {
        /// Task file (JSON array of tasks)
        #[arg(long)]
        tasks: Option<PathBuf>,
    },

    /// Print the computed week view
    Show {
        /// Task file (JSON array of tasks)
        #[arg(long)]
        tasks: Option<PathBuf>,

        /// Show the week containing this date instead of the first task week
        #[arg(long, value_parser = parse_date)]
        anchor: Option<NaiveDate>,

        /// Override today's date
        #[arg(long, value_parser = parse_date)]
        today: Option<NaiveDate>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Render the TUI headlessly after replaying actions
    Render {
        /// Task file (JSON array of tasks)
        #[arg(long)]
        tasks: Option<PathBuf>,

        /// Actions to replay (comma-separated, e.g. next,next,today,tab2)
        #[arg(long, value_delimiter = ',')]
        actions: Vec<String>,

        /// Terminal width
        #[arg(long, default_value_t = headless::DEFAULT_WIDTH)]
        width: u16,

        /// Terminal height
        #[arg(long, default_value_t = headless::DEFAULT_HEIGHT)]
        height: u16,

        /// Override today's date
        #[arg(long, value_parser = parse_date)]
        today: Option<NaiveDate>,
    },

    /// Write a default config file
    Init {
        /// Overwrite an existing config
        #[arg(long)]
        force: bool,
    },
}

fn parse_date(s: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").map_err(|e| format!("expected YYYY-MM-DD: {e}"))
}

fn init_logging(default_directive: &str) {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .init();
}

fn main() {
    let cli = Cli::parse();

    // Log lines would corrupt the alternate screen, so the TUI is silent by default.
    let interactive = matches!(cli.command, None | Some(Commands::Tui { .. }));
    init_logging(if interactive { "off" } else { "warn" });

    if let Err(e) = run(cli) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn Error>> {
    let load_config = || -> Result<Config, Box<dyn Error>> {
        let config = Config::load_or_default(&cli.config)?;
        tracing::debug!(path = %cli.config.display(), ?config, "config loaded");
        Ok(config)
    };

    match cli.command {
        None => cmd_tui(load_config()?, None),
        Some(Commands::Tui { tasks }) => cmd_tui(load_config()?, tasks),
        Some(Commands::Show {
            tasks,
            anchor,
            today,
            json,
        }) => cmd_show(&load_config()?, tasks, anchor, today, json),
        Some(Commands::Render {
            tasks,
            actions,
            width,
            height,
            today,
        }) => cmd_render(load_config()?, tasks, &actions, width, height, today),
        // A broken config must not stop `init --force` from replacing it.
        Some(Commands::Init { force }) => cmd_init(&cli.config, force),
    }
}

/// Resolve the task file from the flag or the config.
fn task_path(config: &Config, flag: Option<PathBuf>) -> Option<PathBuf> {
    flag.or_else(|| config.tasks_file.clone())
}

fn require_tasks(
    config: &Config,
    flag: Option<PathBuf>,
) -> Result<(PathBuf, Vec<Task>), Box<dyn Error>> {
    let path = task_path(config, flag)
        .ok_or("no task file given; pass --tasks or set tasks_file in the config")?;
    let tasks = load_tasks(&path)?;
    Ok((path, tasks))
}

fn clock_for(today: Option<NaiveDate>) -> Box<dyn Clock> {
    match today {
        Some(date) => Box::new(FixedClock(date)),
        None => Box::new(SystemClock),
    }
}

fn cmd_tui(config: Config, tasks: Option<PathBuf>) -> Result<(), Box<dyn Error>> {
    let app = match task_path(&config, tasks) {
        Some(path) => {
            let tasks = load_tasks(&path)?;
            App::new(tasks, config).with_source(path)
        }
        None => App::new(Vec::new(), config),
    };

    let rt = tokio::runtime::Runtime::new()?;
    rt.block_on(weekline_tui::run_tui(app))
}

fn cmd_show(
    config: &Config,
    tasks: Option<PathBuf>,
    anchor: Option<NaiveDate>,
    today: Option<NaiveDate>,
    json: bool,
) -> Result<(), Box<dyn Error>> {
    let (_, tasks) = require_tasks(config, tasks)?;
    let window = anchor.map_or_else(WeekWindow::new, WeekWindow::anchored);
    let view = window.view(&tasks, clock_for(today).today());

    if json {
        println!("{}", serde_json::to_string_pretty(&view)?);
        return Ok(());
    }

    match &view {
        TimelineView::Empty => println!("No tasks scheduled"),
        TimelineView::Week(week) => print_week(week),
    }
    Ok(())
}

fn print_week(week: &WeekView) {
    let flag = |enabled: bool| if enabled { "enabled" } else { "disabled" };

    println!("Week:  {}", week.range_label());
    println!(
        "Range: {} .. {} (weeks {} .. {})",
        week.range.min_date, week.range.max_date, week.range.min_week_start, week.range.max_week_start
    );
    println!(
        "Nav:   prev {}, next {}",
        flag(week.can_go_previous),
        flag(week.can_go_next)
    );
    println!(
        "Today: day {}{}",
        week.today.day_index,
        if week.today.in_window { "" } else { " (not in this week)" }
    );
    if week.is_empty_week {
        println!("No tasks in this window");
    }

    println!();
    for bar in &week.bars {
        let notes = bar_notes(bar, week.days.len());
        println!(
            "  {:<8} {:<24} left {:>5.1}%  right {:>5.1}%  width {:>5.1}%{}",
            bar.task_id.as_str(),
            bar.name,
            bar.layout.left_pct,
            bar.layout.right_pct,
            bar.layout.width_pct,
            if notes.is_empty() {
                String::new()
            } else {
                format!("  ({})", notes.join(", "))
            }
        );
    }
}

/// Clipping notes for one bar in the text output.
fn bar_notes(bar: &TaskBar, day_count: usize) -> Vec<&'static str> {
    if !bar.visible {
        return vec!["outside"];
    }
    let mut notes = Vec::new();
    if bar.layout.starts_before() {
        notes.push("starts before");
    }
    if bar.layout.ends_after(day_count) {
        notes.push("ends after");
    }
    notes
}

fn cmd_render(
    config: Config,
    tasks: Option<PathBuf>,
    actions: &[String],
    width: u16,
    height: u16,
    today: Option<NaiveDate>,
) -> Result<(), Box<dyn Error>> {
    let (path, tasks) = require_tasks(&config, tasks)?;
    let actions = actions
        .iter()
        .map(|name| Action::from_name(name).ok_or_else(|| format!("unknown action: {name}")))
        .collect::<Result<Vec<_>, _>>()?;

    let mut app = App::with_clock(tasks, config, clock_for(today)).with_source(path);
    let screen = headless::replay(&mut app, &actions, width, height)?;
    println!("{screen}");
    Ok(())
}

fn cmd_init(path: &Path, force: bool) -> Result<(), Box<dyn Error>> {
    if path.exists() && !force {
        println!("Config already exists: {} (use --force to overwrite)", path.display());
        return Ok(());
    }

    Config::default().save(path)?;
    println!("Wrote {}", path.display());
    Ok(())
}
