//! Synthetic sales tasks used when no real data is available.
//!
//! When the configured source is empty or returns nothing usable, the
//! dashboard still needs something to rank. The generator produces
//! well-formed [`Task`] values directly; they never pass through the
//! normalizer.

use crate::libs::task::{generate_id, Priority, Status, Task};
use chrono::{DateTime, Duration, Utc};
use rand::seq::SliceRandom;
use rand::Rng;

/// Number of tasks generated when the configuration does not say otherwise.
pub const DEFAULT_SEED_COUNT: usize = 50;

const ACTIVITIES: &[&str] = &[
    "Follow up with",
    "Prepare proposal for",
    "Demo for",
    "Negotiate renewal with",
    "Qualify lead at",
    "Quarterly review with",
    "Upsell workshop for",
    "Close deal with",
    "Onboarding call with",
    "Pricing review for",
];

const ACCOUNTS: &[&str] = &[
    "Acme Corp",
    "Globex",
    "Initech",
    "Umbrella",
    "Hooli",
    "Stark Industries",
    "Wayne Enterprises",
    "Soylent",
    "Vandelay Imports",
    "Wonka Industries",
    "Cyberdyne",
    "Tyrell Corp",
];

const MAX_REVENUE: f64 = 20_000.0;
const MAX_HOURS: u32 = 40;
const MAX_AGE_DAYS: i64 = 60;

/// Generates `count` sample tasks using the thread-local RNG.
pub fn generate_sales_tasks(count: usize) -> Vec<Task> {
    generate_sales_tasks_with(&mut rand::thread_rng(), count, Utc::now())
}

/// Generates `count` sample tasks from `rng`, anchored at `now`.
///
/// Completion timestamps of `Done` tasks fall after creation and never after
/// `now`.
pub fn generate_sales_tasks_with<R: Rng + ?Sized>(rng: &mut R, count: usize, now: DateTime<Utc>) -> Vec<Task> {
    (0..count).map(|index| sample_task(rng, index, now)).collect()
}

fn sample_task<R: Rng + ?Sized>(rng: &mut R, index: usize, now: DateTime<Utc>) -> Task {
    let activity = ACTIVITIES.choose(rng).copied().unwrap_or("Follow up with");
    let account = ACCOUNTS.choose(rng).copied().unwrap_or("Acme Corp");

    // Roughly one task in ten produced no revenue.
    let revenue = if rng.gen_bool(0.1) {
        0.0
    } else {
        (rng.gen_range(100.0..MAX_REVENUE) / 10.0).round() * 10.0
    };
    let time_taken = f64::from(rng.gen_range(1..=MAX_HOURS));

    let priority = *Priority::all().choose(rng).unwrap_or(&Priority::Low);
    let status = *Status::all().choose(rng).unwrap_or(&Status::Todo);

    let created_at = now - Duration::days(rng.gen_range(1..=MAX_AGE_DAYS)) - Duration::minutes(rng.gen_range(0..1440));
    let completed_at = status.is_done().then(|| {
        let completed = created_at + Duration::days(rng.gen_range(1..=10));
        completed.min(now)
    });

    Task {
        id: generate_id(),
        title: format!("{} {} #{}", activity, account, index + 1),
        revenue,
        time_taken,
        priority,
        status,
        notes: String::new(),
        created_at,
        completed_at,
    }
}
