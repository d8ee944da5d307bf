//! Fixed seed dataset used when no durable blob can be loaded.

use chrono::{DateTime, NaiveDate, TimeZone, Utc};

use crate::task::domain::{
    PersistedTaskData, ProofOfWork, Reference, ReferenceKind, Schedule, Task, TaskDomainError,
    TaskId, TaskStatus, TaskTitle,
};

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

fn timestamp(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, hour, minute, 0)
        .single()
        .unwrap_or_default()
}

fn references(entries: &[(ReferenceKind, &str, &str)]) -> Vec<Reference> {
    entries
        .iter()
        .filter_map(|(kind, name, url)| Reference::new(*kind, *name, *url).ok())
        .collect()
}

struct SeedTask {
    title: &'static str,
    pic: &'static str,
    brand: &'static str,
    campaign: &'static str,
    status: TaskStatus,
    schedule: Schedule,
    description: &'static str,
    subtasks: &'static [&'static str],
    references: Vec<Reference>,
    actual_start_time: Option<DateTime<Utc>>,
    actual_end_time: Option<DateTime<Utc>>,
    duration_minutes: u64,
    proof: Option<ProofOfWork>,
}

impl SeedTask {
    fn build(self) -> Result<Task, TaskDomainError> {
        let created_at = self
            .schedule
            .start_date()
            .and_hms_opt(8, 0, 0)
            .map_or_else(DateTime::<Utc>::default, |naive| naive.and_utc());
        let updated_at = self
            .actual_end_time
            .or(self.actual_start_time)
            .unwrap_or(created_at);
        // An in-progress seed resumes accounting from its recorded start.
        let cycle_started_at = match self.status {
            TaskStatus::InProgress => self.actual_start_time,
            _ => None,
        };
        Ok(Task::from_persisted(PersistedTaskData {
            id: TaskId::new(),
            title: TaskTitle::new(self.title)?,
            brand: self.brand.to_owned(),
            campaign: self.campaign.to_owned(),
            pic: self.pic.to_owned(),
            description: self.description.to_owned(),
            subtasks: self.subtasks.iter().map(|&label| label.to_owned()).collect(),
            references: self.references,
            schedule: self.schedule,
            status: self.status,
            actual_start_time: self.actual_start_time,
            actual_end_time: self.actual_end_time,
            duration_minutes: self.duration_minutes,
            cycle_started_at,
            proof: self.proof,
            revision_feedback: None,
            created_at,
            updated_at,
        }))
    }
}

/// Returns the fixed studio seed dataset.
///
/// Five tasks spanning the interesting states: two completed with recorded
/// durations, one mid-flight, one untouched, and one whose deadline has
/// already passed (stored as not-started; overdue-ness is derived, never
/// stored).
#[must_use]
pub fn seed_tasks() -> Vec<Task> {
    let entries = vec![
        SeedTask {
            title: "Holiday Instagram Reels",
            pic: "Vito",
            brand: "Coca-Cola",
            campaign: "Holiday Special",
            status: TaskStatus::Completed,
            schedule: Schedule::new(date(2025, 11, 1), date(2025, 11, 15)),
            description: "Create 3 reels for the holiday season focused on sharing happiness.",
            subtasks: &["Scripting", "Asset Collection", "Editing", "Music Selection"],
            references: references(&[
                (
                    ReferenceKind::Link,
                    "Competitor Example (YouTube)",
                    "https://youtube.com",
                ),
                (
                    ReferenceKind::Image,
                    "Moodboard",
                    "https://images.unsplash.com/photo-1606907568273-53c42aa336d2",
                ),
            ]),
            actual_start_time: Some(timestamp(2025, 11, 14, 9, 0)),
            actual_end_time: Some(timestamp(2025, 11, 14, 15, 30)),
            duration_minutes: 390,
            proof: ProofOfWork::link("https://drive.example.com/reels-final").ok(),
        },
        SeedTask {
            title: "Product Launch Key Visual",
            pic: "Rashid",
            brand: "Samsung",
            campaign: "Brand Awareness",
            status: TaskStatus::InProgress,
            schedule: Schedule::new(date(2025, 11, 10), date(2025, 11, 20)),
            description: "Main KV for the new Galaxy series. Needs to look futuristic.",
            subtasks: &[],
            references: references(&[(ReferenceKind::Link, "Product Specs & Assets", "#")]),
            actual_start_time: Some(timestamp(2025, 11, 18, 10, 0)),
            actual_end_time: None,
            duration_minutes: 0,
            proof: None,
        },
        SeedTask {
            title: "Website Hero Banner",
            pic: "Vito",
            brand: "Spotify",
            campaign: "Social Media Revamp",
            status: TaskStatus::Completed,
            schedule: Schedule::new(date(2025, 11, 5), date(2025, 11, 6)),
            description: "Update homepage banner for wrapped campaign.",
            subtasks: &[],
            references: Vec::new(),
            actual_start_time: Some(timestamp(2025, 11, 6, 9, 0)),
            actual_end_time: Some(timestamp(2025, 11, 6, 11, 0)),
            duration_minutes: 120,
            proof: ProofOfWork::link("https://spotify.example.com/hero-preview").ok(),
        },
        SeedTask {
            title: "Internal Newsletter Design",
            pic: "Rafael",
            brand: "Internal",
            campaign: "General",
            status: TaskStatus::NotStarted,
            schedule: Schedule::new(date(2025, 11, 18), date(2025, 11, 25)),
            description: "Monthly internal update layout.",
            subtasks: &[],
            references: Vec::new(),
            actual_start_time: None,
            actual_end_time: None,
            duration_minutes: 0,
            proof: None,
        },
        SeedTask {
            title: "Q1 Strategy Deck",
            pic: "Sarah",
            brand: "Nike",
            campaign: "Q4 Promo",
            status: TaskStatus::NotStarted,
            schedule: Schedule::new(date(2025, 11, 1), date(2025, 11, 10)),
            description: "Slide deck for Q1 marketing strategy.",
            subtasks: &[],
            references: Vec::new(),
            actual_start_time: None,
            actual_end_time: None,
            duration_minutes: 0,
            proof: None,
        },
    ];

    entries
        .into_iter()
        .filter_map(|entry| entry.build().ok())
        .collect()
}
