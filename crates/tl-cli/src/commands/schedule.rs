//! Schedule command
//!
//! Preview when a scheduled post would go out.

use anyhow::{Context, Result};
use chrono::{DateTime, FixedOffset, Local};
use clap::Args;

use tl_core::compose::{RepeatType, ScheduleDraft};

/// Arguments for the schedule command
#[derive(Debug, Args)]
pub struct ScheduleArgs {
    /// First run as RFC 3339 (default: now); past times snap to now
    #[arg(long)]
    pub at: Option<String>,

    /// Recurrence: "Don't Repeat", daily, weekly or monthly
    #[arg(long, default_value = "Don't Repeat")]
    pub repeat: RepeatType,

    /// Repeat every N days/weeks/months
    #[arg(long, default_value = "1")]
    pub every: String,

    /// Number of run times to list
    #[arg(long, default_value_t = 5)]
    pub count: usize,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Execute the schedule command
pub fn execute(args: ScheduleArgs) -> Result<()> {
    let now: DateTime<FixedOffset> = Local::now().fixed_offset();
    let mut draft = ScheduleDraft::new(now);

    if let Some(at) = &args.at {
        let picked = DateTime::parse_from_rfc3339(at)
            .with_context(|| format!("Invalid --at time: {}", at))?;
        draft.select_time(picked, now);
    }
    draft.set_repeat(args.repeat);
    draft.set_repeat_every(&args.every)?;

    let schedule = draft.confirm();
    let runs = schedule.occurrences(args.count);

    if args.json {
        let out = serde_json::json!({ "schedule": schedule, "runs": runs });
        println!("{}", serde_json::to_string_pretty(&out)?);
        return Ok(());
    }

    use colored::Colorize;
    println!(
        "{} {} (every {})",
        "Schedule:".bold(),
        schedule.repeat.to_string().cyan(),
        schedule.every
    );
    for run in runs {
        println!("  {}", run.format("%Y-%m-%d %H:%M %:z"));
    }

    Ok(())
}
