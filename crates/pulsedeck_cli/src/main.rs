//! `pulsedeck` command-line front end.
//!
//! Seeds a store, issues transitions and prints the derived views. This is
//! the presentation boundary: it owns the store and the chat state.

mod render;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use log::info;
use pulsedeck_core::{
    init_logging, Category, ChatAssistant, Clock, ManualClock, SendOutcome, Settings, Store,
    SystemClock,
};
use std::path::PathBuf;

/// Productivity assistant demo.
#[derive(Parser, Debug)]
#[command(
    name = "pulsedeck",
    version = pulsedeck_core::core_version(),
    about = "Productivity assistant demo"
)]
struct Cli {
    /// Settings JSON file.
    #[arg(long, global = true)]
    settings: Option<PathBuf>,

    /// Absolute directory for rolling log files. Logging is off without it.
    #[arg(long, global = true)]
    log_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the seeded sections.
    Show {
        /// Print the raw snapshot as JSON.
        #[arg(long)]
        json: bool,
    },
    /// Run a scripted session on a simulated clock.
    Demo,
    /// Clear all tasks and reminders.
    Clear {
        /// Confirm the clear.
        #[arg(long)]
        yes: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let settings = match &cli.settings {
        Some(path) => Settings::load(path)
            .with_context(|| format!("failed to load settings from {}", path.display()))?,
        None => Settings::default(),
    };

    if let Some(dir) = &cli.log_dir {
        let dir = dir
            .to_str()
            .context("log directory must be valid UTF-8")?;
        init_logging(settings.effective_log_level(), dir)
            .map_err(anyhow::Error::msg)
            .context("failed to initialize logging")?;
    }

    match cli.command.unwrap_or(Command::Show { json: false }) {
        Command::Show { json } => show(&settings, json),
        Command::Demo => demo(&settings),
        Command::Clear { yes } => clear(yes),
    }
}

fn show(settings: &Settings, json: bool) -> Result<()> {
    let store = Store::with_system_clock();
    if json {
        let text = serde_json::to_string_pretty(store.snapshot())
            .context("failed to serialize snapshot")?;
        println!("{text}");
    } else {
        print!("{}", render::render_sections(&store, settings));
    }
    Ok(())
}

fn clear(confirmed: bool) -> Result<()> {
    if !confirmed {
        bail!("refusing to clear all data without --yes");
    }
    let mut store = Store::with_system_clock();
    store.clear_all();
    info!("event=clear_confirmed module=cli");
    let stats = store.views().task_stats();
    println!(
        "All data has been cleared. tasks={} reminders={}",
        stats.total,
        store.snapshot().reminders().len()
    );
    Ok(())
}

fn demo(settings: &Settings) -> Result<()> {
    let start_ms = SystemClock.now_ms();
    let mut store = Store::seeded(ManualClock::new(start_ms));
    let mut chat = ChatAssistant::new(start_ms);

    step("initial state");
    print!("{}", render::render_sections(&store, settings));

    step("complete task #2, reschedule task #4");
    store.complete_task("2");
    store.reschedule_task("4");
    println!("{}", render::category_line(&store.views(), Category::Today));
    println!("{}", render::category_line(&store.views(), Category::ThisWeek));

    step("snooze urgent reminder #1 for 15 minutes");
    store.snooze_reminder("1", 15);
    print!("{}", render::render_sections(&store, settings));

    step("15 minutes later");
    store.clock().advance_minutes(15);
    let fired = store.tick();
    println!("reactivated: {fired:?}");
    print!("{}", render::render_sections(&store, settings));

    step("chat");
    let seen = chat.messages().len();
    let text = "I need to finish the project by Friday";
    if let SendOutcome::Sent { task_detected } = chat.send_message(text, store.now_ms()) {
        println!("task detected: {task_detected}");
    }
    store.clock().advance(pulsedeck_core::assistant::chat::REPLY_DELAY_MS);
    chat.poll(store.now_ms());
    if let Some(task) = chat.accept_smart_reply(store.now_ms()) {
        store.add_task(task);
    }
    print!("{}", render::render_chat(chat.messages(), seen));
    println!("{}", render::category_line(&store.views(), Category::ThisWeek));
    Ok(())
}

fn step(title: &str) {
    println!();
    println!(">>> {title}");
}
