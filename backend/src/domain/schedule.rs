use chrono::{Days, NaiveDate};

use crate::config::PortalVariant;

/// Daypart labels offered by the clinic
pub const DAYPART_TIMES: [&str; 3] = ["Morning", "Mid-Day", "Afternoon"];

/// Clock-time labels offered by the salon
pub const CLOCK_TIMES: [&str; 3] = ["09:00", "12:00", "15:00"];

/// Where the bookable window starts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FirstDay {
    Today,
    /// Same-day requests are not taken
    Tomorrow,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduleConfig {
    pub first_day: FirstDay,
    /// Number of consecutive days offered
    pub days: u32,
    pub times: Vec<String>,
}

impl ScheduleConfig {
    pub fn for_variant(variant: PortalVariant) -> Self {
        match variant {
            PortalVariant::Dental => Self {
                first_day: FirstDay::Tomorrow,
                days: 7,
                times: DAYPART_TIMES.iter().map(|t| t.to_string()).collect(),
            },
            PortalVariant::Grooming => Self {
                first_day: FirstDay::Today,
                days: 7,
                times: CLOCK_TIMES.iter().map(|t| t.to_string()).collect(),
            },
        }
    }

    /// Bookable days as display labels, e.g. `["Nov 3", "Nov 4", ...]`
    pub fn candidate_dates(&self, today: NaiveDate) -> Vec<String> {
        let offset = match self.first_day {
            FirstDay::Today => 0,
            FirstDay::Tomorrow => 1,
        };
        (0..self.days)
            .filter_map(|i| today.checked_add_days(Days::new(u64::from(offset + i))))
            .map(format_short_date)
            .collect()
    }

    pub fn candidates(&self, today: NaiveDate) -> SlotCandidates {
        SlotCandidates {
            dates: self.candidate_dates(today),
            times: self.times.clone(),
        }
    }
}

/// The dates and times a visitor may pick from while proposing a booking
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SlotCandidates {
    pub dates: Vec<String>,
    pub times: Vec<String>,
}

impl SlotCandidates {
    pub fn offers_date(&self, date: &str) -> bool {
        self.dates.iter().any(|d| d == date)
    }

    pub fn offers_time(&self, time: &str) -> bool {
        self.times.iter().any(|t| t == time)
    }
}

/// en-US short month and day without padding: "Nov 3"
pub fn format_short_date(date: NaiveDate) -> String {
    date.format("%b %-d").to_string()
}
