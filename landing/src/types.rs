//! Data model for the landing page.
//!
//! Everything here is static: the founder list and the sample code are
//! compile-time literals. The only render input that varies is the month
//! shown by the booking calendar, carried in [`PageOptions`].

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, Local, NaiveDate};
use serde::Serialize;

use crate::error::LandingError;

/// One team member shown in the "Meet Our Team" grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct FounderProfile {
    /// Display name, also used as the image alt text
    pub name: &'static str,
    /// Job title shown as the card description
    pub role: &'static str,
    /// Short biography shown in the card body
    pub bio: &'static str,
    /// Portrait image URL
    pub image_url: &'static str,
    /// Twitter profile link
    pub twitter_url: &'static str,
    /// GitHub profile link
    pub github_url: &'static str,
    /// LinkedIn profile link
    pub linkedin_url: &'static str,
}

const PLACEHOLDER_PORTRAIT: &str = "/api/placeholder/300/300";

/// The founders, in display order.
pub const FOUNDERS: [FounderProfile; 3] = [
    FounderProfile {
        name: "Sarah Chen",
        role: "CEO & Co-founder",
        bio: "Former ML researcher at DeepMind, specialized in distributed systems and scalable AI infrastructure.",
        image_url: PLACEHOLDER_PORTRAIT,
        twitter_url: "#",
        github_url: "#",
        linkedin_url: "#",
    },
    FounderProfile {
        name: "Marcus Rodriguez",
        role: "CTO & Co-founder",
        bio: "Previously led engineering at Stripe. Expert in distributed systems and TypeScript.",
        image_url: PLACEHOLDER_PORTRAIT,
        twitter_url: "#",
        github_url: "#",
        linkedin_url: "#",
    },
    FounderProfile {
        name: "Alex Kim",
        role: "Head of Product & Co-founder",
        bio: "Product leader from Figma, passionate about developer tools and user experience.",
        image_url: PLACEHOLDER_PORTRAIT,
        twitter_url: "#",
        github_url: "#",
        linkedin_url: "#",
    },
];

/// Decorative snippet for the code preview. Displayed as-is, never run.
pub const SAMPLE_CODE: &str = concat!(
    "\n",
    "// Spile's distributed task scheduler\n",
    "async function scheduleTask<T>(\n",
    "  task: Task<T>,\n",
    "  options: ScheduleOptions\n",
    "): Promise<TaskResult<T>> {\n",
    "  const cluster = await getOptimalCluster();\n",
    "  const schedule = await generateSchedule(task, options);\n",
    "  \n",
    "  return await cluster.execute(schedule);\n",
    "}",
);

/// Page content as a serializable bundle (used by `spile-landing --data`).
#[derive(Debug, Serialize)]
pub struct PageData {
    /// Team members in display order
    pub founders: &'static [FounderProfile],
    /// Code preview text
    pub sample_code: &'static str,
}

impl PageData {
    /// The static content of the page.
    pub fn current() -> Self {
        Self {
            founders: &FOUNDERS,
            sample_code: SAMPLE_CODE,
        }
    }
}

/// Selection mode of the calendar primitive.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CalendarMode {
    /// One date at a time
    #[default]
    Single,
    /// Any number of independent dates
    Multiple,
    /// A contiguous span between two dates
    Range,
}

impl CalendarMode {
    /// Value of the `data-mode` attribute.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Single => "single",
            Self::Multiple => "multiple",
            Self::Range => "range",
        }
    }
}

/// A calendar month, stored as its first day.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CalendarMonth {
    first: NaiveDate,
}

impl CalendarMonth {
    /// Build a month, rejecting month numbers outside 1..=12 and years
    /// chrono cannot represent.
    pub fn new(year: i32, month: u32) -> Result<Self, LandingError> {
        NaiveDate::from_ymd_opt(year, month, 1)
            .map(|first| Self { first })
            .ok_or_else(|| LandingError::InvalidMonth(format!("{year:04}-{month:02}")))
    }

    /// The month containing today's local date.
    pub fn current() -> Self {
        let today = Local::now().date_naive();
        Self {
            first: today.with_day(1).unwrap_or(today),
        }
    }

    /// Calendar year
    pub fn year(&self) -> i32 {
        self.first.year()
    }

    /// Month number, 1-based
    pub fn month(&self) -> u32 {
        self.first.month()
    }

    /// Number of days in the month.
    pub fn days_in_month(&self) -> u32 {
        let next = if self.month() == 12 {
            NaiveDate::from_ymd_opt(self.year() + 1, 1, 1)
        } else {
            NaiveDate::from_ymd_opt(self.year(), self.month() + 1, 1)
        };
        match next {
            Some(next) => next.signed_duration_since(self.first).num_days() as u32,
            // December of chrono's last representable year
            None => 31,
        }
    }

    /// Caption such as "October 2026".
    pub fn caption(&self) -> String {
        self.first.format("%B %Y").to_string()
    }

    /// Day grid with weeks starting on Sunday. Cells outside the month are `None`.
    pub fn weeks(&self) -> Vec<[Option<u32>; 7]> {
        let lead = self.first.weekday().num_days_from_sunday() as usize;
        let days = self.days_in_month();

        let mut weeks = Vec::with_capacity(6);
        let mut week = [None; 7];
        let mut slot = lead;
        for day in 1..=days {
            week[slot] = Some(day);
            slot += 1;
            if slot == 7 {
                weeks.push(week);
                week = [None; 7];
                slot = 0;
            }
        }
        if slot > 0 {
            weeks.push(week);
        }
        weeks
    }
}

impl fmt::Display for CalendarMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year(), self.month())
    }
}

impl FromStr for CalendarMonth {
    type Err = LandingError;

    /// Parses `YYYY-MM`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || LandingError::InvalidMonth(s.to_string());
        let (year, month) = s.trim().split_once('-').ok_or_else(invalid)?;
        let year: i32 = year.parse().map_err(|_| invalid())?;
        let month: u32 = month.parse().map_err(|_| invalid())?;
        Self::new(year, month).map_err(|_| invalid())
    }
}

/// Render input for [`crate::render_landing`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PageOptions {
    /// Month shown in the booking calendar
    pub calendar_month: CalendarMonth,
}

impl Default for PageOptions {
    fn default() -> Self {
        Self {
            calendar_month: CalendarMonth::current(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn founders_have_every_field_filled() {
        assert!(!FOUNDERS.is_empty());
        for founder in FOUNDERS {
            for field in [
                founder.name,
                founder.role,
                founder.bio,
                founder.image_url,
                founder.twitter_url,
                founder.github_url,
                founder.linkedin_url,
            ] {
                assert!(!field.is_empty(), "empty field on {}", founder.name);
            }
        }
    }

    #[test]
    fn sample_code_starts_with_blank_line() {
        assert!(SAMPLE_CODE.starts_with("\n// Spile's distributed task scheduler"));
        assert!(SAMPLE_CODE.ends_with("return await cluster.execute(schedule);\n}"));
    }

    #[test]
    fn parses_year_month() {
        let month: CalendarMonth = "2024-02".parse().unwrap();
        assert_eq!(month.year(), 2024);
        assert_eq!(month.month(), 2);
        assert_eq!(month.to_string(), "2024-02");
    }

    #[test]
    fn rejects_bad_months() {
        for input in ["2024-13", "2024-00", "2024", "twenty-one", "2024-1x"] {
            let err = input.parse::<CalendarMonth>().unwrap_err();
            assert!(matches!(err, LandingError::InvalidMonth(ref s) if s == input));
        }
    }

    #[test]
    fn counts_days_including_leap_years() {
        assert_eq!(CalendarMonth::new(2024, 2).unwrap().days_in_month(), 29);
        assert_eq!(CalendarMonth::new(2023, 2).unwrap().days_in_month(), 28);
        assert_eq!(CalendarMonth::new(2024, 12).unwrap().days_in_month(), 31);
        assert_eq!(CalendarMonth::new(2024, 4).unwrap().days_in_month(), 30);
    }

    #[test]
    fn lays_out_weeks_from_sunday() {
        // 1 September 2024 was a Sunday; 30 days fill exactly five rows.
        let weeks = CalendarMonth::new(2024, 9).unwrap().weeks();
        assert_eq!(weeks.len(), 5);
        assert_eq!(weeks[0][0], Some(1));
        assert_eq!(weeks[4], [Some(29), Some(30), None, None, None, None, None]);

        // 1 March 2024 was a Friday.
        let weeks = CalendarMonth::new(2024, 3).unwrap().weeks();
        assert_eq!(weeks[0], [None, None, None, None, None, Some(1), Some(2)]);
        assert_eq!(weeks.len(), 6);
        assert_eq!(weeks[5][0], Some(31));
    }

    #[test]
    fn captions_use_full_month_name() {
        assert_eq!(CalendarMonth::new(2026, 10).unwrap().caption(), "October 2026");
    }

    #[test]
    fn page_data_serializes_founders_in_order() {
        let json = serde_json::to_value(PageData::current()).unwrap();
        let names: Vec<&str> = json["founders"]
            .as_array()
            .unwrap()
            .iter()
            .map(|f| f["name"].as_str().unwrap())
            .collect();
        assert_eq!(names, vec!["Sarah Chen", "Marcus Rodriguez", "Alex Kim"]);
        assert_eq!(json["sample_code"], SAMPLE_CODE);
    }
}
