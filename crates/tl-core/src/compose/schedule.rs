//! Post scheduling with simple recurrence

use crate::error::{Result, ThreadlineError};
use chrono::{DateTime, Duration, FixedOffset, Months, NaiveTime, TimeZone, Timelike};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How often a scheduled post repeats
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RepeatType {
    #[default]
    #[serde(rename = "Don't Repeat")]
    DontRepeat,
    #[serde(rename = "daily")]
    Daily,
    #[serde(rename = "weekly")]
    Weekly,
    #[serde(rename = "monthly")]
    Monthly,
}

impl RepeatType {
    /// Every option in menu order
    pub const ALL: [RepeatType; 4] = [
        RepeatType::DontRepeat,
        RepeatType::Daily,
        RepeatType::Weekly,
        RepeatType::Monthly,
    ];

    /// Menu label
    pub fn label(&self) -> &'static str {
        match self {
            RepeatType::DontRepeat => "Don't Repeat",
            RepeatType::Daily => "daily",
            RepeatType::Weekly => "weekly",
            RepeatType::Monthly => "monthly",
        }
    }

    /// Check if the post runs more than once
    pub fn repeats(&self) -> bool {
        !matches!(self, RepeatType::DontRepeat)
    }
}

impl fmt::Display for RepeatType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for RepeatType {
    type Err = ThreadlineError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "don't repeat" | "dont-repeat" | "none" | "once" => Ok(RepeatType::DontRepeat),
            "daily" => Ok(RepeatType::Daily),
            "weekly" => Ok(RepeatType::Weekly),
            "monthly" => Ok(RepeatType::Monthly),
            other => Err(ThreadlineError::Validation(format!(
                "Unknown repeat type '{}'",
                other
            ))),
        }
    }
}

/// Parse the "repeat every N" text field
pub fn parse_repeat_every(text: &str) -> Result<u32> {
    match text.trim().parse::<u32>() {
        Ok(n) if n >= 1 => Ok(n),
        _ => Err(ThreadlineError::Validation(format!(
            "Repeat interval must be a positive whole number, got '{}'",
            text
        ))),
    }
}

/// A confirmed schedule
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Schedule {
    /// First run
    pub at: DateTime<FixedOffset>,
    /// Recurrence
    pub repeat: RepeatType,
    /// Interval in units of `repeat`
    pub every: u32,
}

impl Schedule {
    /// The first `count` run times
    pub fn occurrences(&self, count: usize) -> Vec<DateTime<FixedOffset>> {
        if count == 0 {
            return Vec::new();
        }
        if !self.repeat.repeats() {
            return vec![self.at];
        }

        (0..count as u32)
            .map_while(|i| self.nth(i.checked_mul(self.every)?))
            .collect()
    }

    fn nth(&self, steps: u32) -> Option<DateTime<FixedOffset>> {
        match self.repeat {
            RepeatType::DontRepeat => Some(self.at),
            RepeatType::Daily => self
                .at
                .checked_add_signed(Duration::try_days(steps as i64)?),
            RepeatType::Weekly => self
                .at
                .checked_add_signed(Duration::try_weeks(steps as i64)?),
            RepeatType::Monthly => self.at.checked_add_months(Months::new(steps)),
        }
    }
}

/// Schedule being edited in the scheduling dialog
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduleDraft {
    at: DateTime<FixedOffset>,
    repeat: RepeatType,
    repeat_every: u32,
}

impl ScheduleDraft {
    /// Start at `now`, not repeating
    pub fn new(now: DateTime<FixedOffset>) -> Self {
        Self {
            at: now,
            repeat: RepeatType::DontRepeat,
            repeat_every: 1,
        }
    }

    /// Scheduled instant
    pub fn at(&self) -> DateTime<FixedOffset> {
        self.at
    }

    /// Selected recurrence
    pub fn repeat(&self) -> RepeatType {
        self.repeat
    }

    /// Selected interval
    pub fn repeat_every(&self) -> u32 {
        self.repeat_every
    }

    /// A day was picked in the date picker.
    ///
    /// Picking today takes the current hour and minute; any other day keeps
    /// the hour and minute already scheduled.
    pub fn select_date(&mut self, picked: DateTime<FixedOffset>, now: DateTime<FixedOffset>) {
        let source = if picked.date_naive() == now.date_naive() {
            now
        } else {
            self.at
        };
        self.at = with_time_of(picked, source);
    }

    /// A time was picked in the time picker.
    ///
    /// On today the time cannot go before now; on other days it cannot go
    /// before the currently scheduled instant.
    pub fn select_time(&mut self, picked: DateTime<FixedOffset>, now: DateTime<FixedOffset>) {
        let min = if self.at.date_naive() == now.date_naive() {
            now
        } else {
            self.at
        };
        self.at = picked.max(min);
    }

    /// Choose the recurrence
    pub fn set_repeat(&mut self, repeat: RepeatType) {
        self.repeat = repeat;
    }

    /// Set the interval from the text field
    pub fn set_repeat_every(&mut self, text: &str) -> Result<()> {
        self.repeat_every = parse_repeat_every(text)?;
        Ok(())
    }

    /// Back to defaults at `now`
    pub fn clear(&mut self, now: DateTime<FixedOffset>) {
        *self = Self::new(now);
    }

    /// Finish editing
    pub fn confirm(&self) -> Schedule {
        Schedule {
            at: self.at,
            repeat: self.repeat,
            every: self.repeat_every,
        }
    }
}

/// `date`'s calendar day at `time_source`'s hour and minute
fn with_time_of(
    date: DateTime<FixedOffset>,
    time_source: DateTime<FixedOffset>,
) -> DateTime<FixedOffset> {
    let time = NaiveTime::from_hms_opt(time_source.hour(), time_source.minute(), 0)
        .unwrap_or(NaiveTime::MIN);
    date.offset()
        .from_local_datetime(&date.date_naive().and_time(time))
        .single()
        .unwrap_or(date)
}
