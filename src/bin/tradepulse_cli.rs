//! TradePulse CLI - headless access to the journal
//!
//! Works on the same data directory as the desktop app.
//!
//! # Usage
//! ```sh
//! cargo run --bin tradepulse-cli -- trades add --pair EURUSD --entry 1.0850 --exit 1.0900
//! cargo run --bin tradepulse-cli -- calendar --month 2024-03
//! ```
//!
//! # Environment Variables
//! - `TRADEPULSE_DATA_DIR` - Journal directory (default: `$HOME/.tradepulse`)
//! - `NEWS_BRIDGE_URL`, `NEWS_FEED_URL`, `NEWS_ITEM_LIMIT` - Headline feed

use anyhow::{Context, Result, bail};
use chrono::{Local, NaiveDate};
use clap::{Parser, Subcommand};
use rust_decimal::Decimal;
use std::io::{Write, stdout};
use std::path::PathBuf;
use std::str::FromStr;
use tracing::{Level, info};
use tracing_subscriber::prelude::*;
use tradepulse::application::analytics::{
    AnalysisReport, CalendarMonth, DashboardStats, DayTone, MonthCursor,
};
use tradepulse::application::system::Application;
use tradepulse::application::trade_entry::{StatusPolicy, TradeDraft};
use tradepulse::config::Config;
use tradepulse::domain::journal::{AssetClass, Direction, Goal, TradeStatus};
use tradepulse::domain::ports::HeadlineSource;
use tradepulse::domain::widgets::default_widgets;
use tradepulse::infrastructure::export::{export_trades_to_path, write_widget_page};
use tradepulse::infrastructure::screenshot::write_embedded_image;

#[derive(Parser)]
#[command(author, version, about = "TradePulse trading journal", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Manage logged trades
    Trades {
        #[command(subcommand)]
        action: TradeCommand,
    },
    /// Net P&L, win rate and trade count
    Stats,
    /// Daily P&L for one month
    Calendar {
        /// Month as YYYY-MM (default: current month)
        #[arg(long)]
        month: Option<String>,
    },
    /// P&L by pair and strategy, plus the rolling win rate
    Breakdown,
    /// Manage goals
    Goals {
        #[command(subcommand)]
        action: GoalCommand,
    },
    /// Show or change the display name
    Profile {
        #[command(subcommand)]
        action: ProfileCommand,
    },
    /// Fetch the latest headlines
    News,
    /// Export all trades to CSV
    Export {
        #[arg(short, long)]
        out: PathBuf,
    },
    /// Write the TradingView widget page
    Widgets {
        #[arg(short, long)]
        out: Option<PathBuf>,
    },
}

#[derive(Subcommand)]
enum TradeCommand {
    /// List trades, newest first
    List,
    /// Log a new trade
    Add {
        /// Trade date (YYYY-MM-DD, default: today)
        #[arg(long)]
        date: Option<String>,
        #[arg(long)]
        pair: String,
        /// long or short
        #[arg(long, default_value = "long")]
        direction: String,
        #[arg(long)]
        entry: String,
        #[arg(long)]
        exit: String,
        #[arg(long, default_value = "")]
        lot_size: String,
        #[arg(long, default_value = "")]
        stop_loss: String,
        #[arg(long, default_value = "")]
        take_profit: String,
        /// Realized P&L (default: derived from prices)
        #[arg(long, default_value = "")]
        pnl: String,
        /// win, loss or be (default: from P&L sign)
        #[arg(long)]
        status: Option<String>,
        /// forex, crypto or stock
        #[arg(long)]
        asset_class: Option<String>,
        #[arg(long, default_value = "")]
        strategy: String,
        #[arg(long, default_value = "")]
        notes: String,
        /// Chart link or path to an image file to embed
        #[arg(long, default_value = "")]
        screenshot: String,
    },
    /// Delete a trade by id
    Delete { id: String },
    /// Write a trade's embedded screenshot to disk
    Screenshot {
        id: String,
        /// Output path without extension
        #[arg(short, long)]
        out: PathBuf,
    },
}

#[derive(Subcommand)]
enum GoalCommand {
    List,
    Add {
        text: String,
        /// YYYY-MM-DD
        #[arg(long)]
        deadline: String,
    },
    /// Flip a goal between open and completed
    Toggle { id: String },
    Delete { id: String },
}

#[derive(Subcommand)]
enum ProfileCommand {
    Show,
    Set { name: String },
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    // Logs on stderr so stdout stays pipeable
    let stderr_layer = tracing_subscriber::fmt::layer()
        .with_target(false)
        .with_writer(std::io::stderr);
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::from_default_env().add_directive(Level::WARN.into()))
        .with(stderr_layer)
        .init();

    let cli = Cli::parse();
    let config = Config::from_env().context("Failed to load configuration")?;
    let mut app = Application::build(config)?;

    match cli.command {
        Commands::Trades { action } => run_trade_command(&mut app, action, &mut stdout())?,
        Commands::Stats => {
            let stats = DashboardStats::from_trades(app.store.trades());
            println!("Net P&L:      {}", stats.net_pnl);
            println!("Win Rate:     {}%", stats.win_rate);
            println!("Total Trades: {}", stats.total_trades);
        }
        Commands::Calendar { month } => {
            let cursor = match month {
                Some(raw) => MonthCursor::parse(&raw)
                    .with_context(|| format!("'{}' is not a YYYY-MM month", raw))?,
                None => MonthCursor::current(),
            };
            print_calendar(&CalendarMonth::build(app.store.trades(), cursor));
        }
        Commands::Breakdown => print_breakdown(&AnalysisReport::build(app.store.trades())),
        Commands::Goals { action } => run_goal_command(&mut app, action, &mut stdout())?,
        Commands::Profile { action } => match action {
            ProfileCommand::Show => println!("{}", app.store.profile().name),
            ProfileCommand::Set { name } => {
                app.store.update_profile(name)?;
                println!("Profile updated: {}", app.store.profile().name);
            }
        },
        Commands::News => {
            let headlines = app.headlines.fetch_headlines().await?;
            for headline in headlines {
                println!("{:>5}  {}", headline.time_label(), headline.title);
                println!("       {}", headline.link);
            }
        }
        Commands::Export { out } => {
            let count = export_trades_to_path(app.store.trades(), &out)?;
            info!("Exported {} trades", count);
            println!("Exported {} trades to {}", count, out.display());
        }
        Commands::Widgets { out } => {
            let path = out.unwrap_or_else(|| app.widget_page_path());
            write_widget_page(&default_widgets(), &path)?;
            println!("Widget page written to {}", path.display());
        }
    }

    Ok(())
}

fn run_trade_command<W: Write>(
    app: &mut Application,
    action: TradeCommand,
    out: &mut W,
) -> Result<()> {
    match action {
        TradeCommand::List => {
            if app.store.trades().is_empty() {
                writeln!(out, "No trades logged yet.")?;
            }
            for t in app.store.trades() {
                writeln!(
                    out,
                    "{}  {}  {:<10} {:<5} {:>10} -> {:<10} {:>10}  {:<4} {:<12} {}",
                    t.id,
                    t.date,
                    t.pair,
                    t.direction.to_string(),
                    t.entry,
                    t.exit_price,
                    t.pnl,
                    t.status.to_string(),
                    t.strategy_label(),
                    if t.screenshot.is_some() { "[chart]" } else { "" }
                )?;
            }
        }
        TradeCommand::Add {
            date,
            pair,
            direction,
            entry,
            exit,
            lot_size,
            stop_loss,
            take_profit,
            pnl,
            status,
            asset_class,
            strategy,
            notes,
            screenshot,
        } => {
            let status = match status {
                Some(raw) => StatusPolicy::Manual(TradeStatus::from_str(&raw)?),
                None => StatusPolicy::FromPnl,
            };
            let asset_class = asset_class
                .map(|raw| AssetClass::from_str(&raw))
                .transpose()?;

            let draft = TradeDraft {
                date: date.unwrap_or_else(|| Local::now().date_naive().to_string()),
                pair,
                asset_class,
                direction: Direction::from_str(&direction)?,
                entry,
                exit_price: exit,
                stop_loss,
                take_profit,
                lot_size,
                pnl,
                status,
                strategy,
                notes,
                screenshot,
            };
            let trade = draft.build()?;
            let summary = format!(
                "Logged {} {} {} P&L {} ({})",
                trade.id, trade.pair, trade.date, trade.pnl, trade.status
            );
            app.store.add_trade(trade)?;
            writeln!(out, "{}", summary)?;
        }
        TradeCommand::Delete { id } => {
            if app.store.delete_trade(&id)? {
                writeln!(out, "Deleted trade {}", id)?;
            } else {
                bail!("No trade with id {}", id);
            }
        }
        TradeCommand::Screenshot { id, out: target } => {
            let trade = app
                .store
                .trade(&id)
                .with_context(|| format!("No trade with id {}", id))?;
            match trade.screenshot.as_deref() {
                Some(url) if trade.has_embedded_screenshot() => {
                    let path = write_embedded_image(url, &target)?;
                    writeln!(out, "Screenshot written to {}", path.display())?;
                }
                Some(link) => writeln!(out, "Screenshot is a link: {}", link)?,
                None => bail!("Trade {} has no screenshot", id),
            }
        }
    }
    Ok(())
}

fn run_goal_command<W: Write>(
    app: &mut Application,
    action: GoalCommand,
    out: &mut W,
) -> Result<()> {
    match action {
        GoalCommand::List => {
            let today = Local::now().date_naive();
            for goal in app.store.goals() {
                let mark = if goal.completed { "[x]" } else { "[ ]" };
                let overdue = if goal.is_overdue(today) { " (overdue)" } else { "" };
                writeln!(
                    out,
                    "{} {}  {}  due {}{}",
                    mark, goal.id, goal.text, goal.deadline, overdue
                )?;
            }
        }
        GoalCommand::Add { text, deadline } => {
            let deadline = NaiveDate::parse_from_str(deadline.trim(), "%Y-%m-%d")
                .with_context(|| format!("'{}' is not a YYYY-MM-DD date", deadline))?;
            let goal = Goal::new(text, deadline);
            let id = goal.id.clone();
            app.store.add_goal(goal)?;
            writeln!(out, "Added goal {}", id)?;
        }
        GoalCommand::Toggle { id } => {
            if !app.store.toggle_goal(&id)? {
                bail!("No goal with id {}", id);
            }
        }
        GoalCommand::Delete { id } => {
            if !app.store.delete_goal(&id)? {
                bail!("No goal with id {}", id);
            }
        }
    }
    Ok(())
}

fn print_calendar(month: &CalendarMonth) {
    println!("{}", month.cursor.label());
    println!(
        "{}",
        ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"]
            .map(|d| format!("{:>10}", d))
            .join("")
    );
    for week in month.weeks() {
        let row: String = week
            .iter()
            .map(|cell| match cell {
                None => format!("{:>10}", ""),
                Some(day) if day.tone() == DayTone::Empty => format!("{:>10}", day.day),
                Some(day) => format!("{:>3}:{:>6}", day.day, signed(day.total_pnl)),
            })
            .collect();
        println!("{}", row);
    }
}

fn signed(value: Decimal) -> String {
    if value > Decimal::ZERO {
        format!("+{}", value)
    } else {
        value.to_string()
    }
}

fn print_breakdown(report: &AnalysisReport) {
    println!("P&L by pair");
    for group in &report.by_pair {
        println!("  {:<16} {:>12}", group.name, group.pnl);
    }
    println!("P&L by strategy");
    for group in &report.by_strategy {
        println!("  {:<16} {:>12}", group.name, group.pnl);
    }
    let rates: Vec<String> = report
        .rolling
        .iter()
        .map(|p| format!("{}%", p.win_rate))
        .collect();
    println!("Rolling win rate: {}", rates.join(" "));
}
