use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::portfolio::{ExperienceEntry, ExperienceKind, Project, ProjectStatus, Skill, SkillCategory};

pub type SkillsByCategory = BTreeMap<SkillCategory, Vec<Skill>>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DateError {
    #[error("expected a YYYY-MM date, got '{0}'")]
    Malformed(String),
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DateStyle {
    /// `Jun 2023`
    #[default]
    Short,
    /// `June 2023`
    Long,
}

/// A calendar month as written in the experience entries (`YYYY-MM`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct YearMonth(NaiveDate);

impl YearMonth {
    pub fn year(&self) -> i32 {
        self.0.year()
    }

    pub fn month(&self) -> u32 {
        self.0.month()
    }

    pub fn format(&self, style: DateStyle) -> String {
        let pattern = match style {
            DateStyle::Short => "%b %Y",
            DateStyle::Long => "%B %Y",
        };
        self.0.format(pattern).to_string()
    }
}

impl FromStr for YearMonth {
    type Err = DateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = || DateError::Malformed(s.to_string());
        let (year, month) = s.split_once('-').ok_or_else(malformed)?;
        let is_digits = |part: &str| !part.is_empty() && part.bytes().all(|b| b.is_ascii_digit());
        if year.len() != 4 || !is_digits(year) || month.len() > 2 || !is_digits(month) {
            return Err(malformed());
        }
        let year = year.parse::<i32>().map_err(|_| malformed())?;
        let month = month.parse::<u32>().map_err(|_| malformed())?;
        NaiveDate::from_ymd_opt(year, month, 1)
            .map(YearMonth)
            .ok_or_else(malformed)
    }
}

impl fmt::Display for YearMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year(), self.month())
    }
}

/// One axis of the proficiency radar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RadarPoint {
    pub category: String,
    pub value: u32,
    pub full_mark: u32,
}

/// A project is featured only when flagged and it has a long description to show.
pub fn is_featured(project: &Project) -> bool {
    project.featured
        && project
            .long_description
            .as_deref()
            .is_some_and(|d| !d.is_empty())
}

pub fn is_work(entry: &ExperienceEntry) -> bool {
    entry.kind == ExperienceKind::Work
}

/// Text for the project detail view.
pub fn detail_description(project: &Project) -> &str {
    match project.long_description.as_deref() {
        Some(long) if is_featured(project) => long,
        _ => &project.description,
    }
}

pub fn format_date(date: &str, style: DateStyle) -> Result<String, DateError> {
    date.parse::<YearMonth>().map(|ym| ym.format(style))
}

/// Start and end month of an entry, `Present` when ongoing.
///
/// Dates that don't parse are shown verbatim.
pub fn date_range(entry: &ExperienceEntry) -> String {
    let show = |d: &str| format_date(d, DateStyle::Short).unwrap_or_else(|_| d.to_string());
    let end = entry
        .end_date
        .as_deref()
        .map(show)
        .unwrap_or_else(|| "Present".to_string());
    format!("{} — {}", show(&entry.start_date), end)
}

/// Entries ordered by end date, latest first. Ongoing entries sort before any finished one,
/// unparseable end dates after all of them.
pub fn sort_experience(entries: &[ExperienceEntry]) -> Vec<&ExperienceEntry> {
    let end_key = |entry: &ExperienceEntry| match entry.end_date.as_deref() {
        None => (true, None),
        Some(end) => (false, end.parse::<YearMonth>().ok()),
    };
    let mut sorted = entries.iter().collect::<Vec<_>>();
    sorted.sort_by(|a, b| end_key(b).cmp(&end_key(a)));
    sorted
}

pub fn group_skills_by_category(skills: &[Skill]) -> SkillsByCategory {
    let mut grouped = SkillCategory::ALL
        .into_iter()
        .map(|c| (c, Vec::new()))
        .collect::<SkillsByCategory>();
    for skill in skills {
        grouped.entry(skill.category).or_default().push(skill.clone());
    }
    grouped
}

pub fn category_averages(skills: &[Skill]) -> Vec<RadarPoint> {
    group_skills_by_category(skills)
        .into_iter()
        .filter(|(_, items)| !items.is_empty())
        .map(|(category, items)| {
            let sum = items.iter().map(|s| u32::from(s.proficiency)).sum::<u32>();
            let count = items.len() as u32;
            RadarPoint {
                category: category.title(),
                // round half up
                value: (2 * sum + count) / (2 * count),
                full_mark: 100,
            }
        })
        .collect()
}

/// Vertices of the radar polygon, clockwise from twelve o'clock.
pub fn radar_vertices(points: &[RadarPoint], center: f64, radius: f64) -> Vec<(f64, f64)> {
    let n = points.len();
    points
        .iter()
        .enumerate()
        .map(|(i, p)| {
            let angle = std::f64::consts::TAU * i as f64 / n as f64 - std::f64::consts::FRAC_PI_2;
            let r = if p.full_mark == 0 {
                0.0
            } else {
                radius * f64::from(p.value.min(p.full_mark)) / f64::from(p.full_mark)
            };
            (center + r * angle.cos(), center + r * angle.sin())
        })
        .collect()
}

pub fn projects_by_status(projects: &[Project], status: ProjectStatus) -> Vec<&Project> {
    projects.iter().filter(|p| p.status == status).collect()
}

/// First letter of each word in a name, e.g. `JD` for `John Doe`.
pub fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|word| word.chars().next())
        .collect()
}
