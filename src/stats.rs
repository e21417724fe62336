use crate::calculator::QUIZ_POINTS_PER_ANSWER;
use crate::ledger::{self, keys, LedgerStore};
use crate::models::{
    Activity, ActivityEntry, Category, CategoryCount, CategoryTotals, QuizResult, QuizSummary,
    RecentAction, RecentRecord, Redemption, RewardProgress, SummaryResponse, YogaTotals,
};
use crate::quiz;
use chrono::{DateTime, Duration, Local, NaiveDate, Utc};
use std::collections::{BTreeMap, BTreeSet};

/// Reward thresholds, ascending.
pub const REWARD_TIERS: [u64; 8] = [200, 350, 450, 500, 600, 750, 800, 1000];

pub fn build_summary<S: LedgerStore + ?Sized>(store: &S) -> SummaryResponse {
    build_summary_at(Local::now().date_naive(), store)
}

pub fn build_summary_at<S: LedgerStore + ?Sized>(today: NaiveDate, store: &S) -> SummaryResponse {
    let entries = load_category_entries(store);
    let history = quiz::load_history(store);
    let redemptions: Vec<Redemption> = ledger::load(store, keys::REDEMPTIONS);

    let quiz = quiz_summary(&history);
    let points_earned = total_points(&entries).saturating_add(quiz.points);
    let points_redeemed = redemptions.iter().map(|r| r.points_spent).sum::<u64>();
    let balance = points_earned.saturating_sub(points_redeemed);

    let mut by_category = category_totals(&entries);
    if !history.is_empty() {
        by_category.push(CategoryTotals {
            category: Category::Quiz,
            entries: history.len(),
            points: quiz.points,
            impact: 0.0,
        });
    }

    let mut counts: BTreeMap<Category, usize> = BTreeMap::new();
    for entry in &entries {
        *counts.entry(entry.category()).or_default() += 1;
    }
    if !history.is_empty() {
        counts.insert(Category::Quiz, history.len());
    }

    let activity_days = entries
        .iter()
        .map(|entry| entry.timestamp)
        .chain(history.iter().map(|result| result.date));

    SummaryResponse {
        total_entries: entries.len() + history.len(),
        points_earned,
        points_redeemed,
        balance,
        streak_days: streak_days(activity_days, today),
        carpool_count: ledger::load_counter(store, keys::CARPOOL_COUNT),
        public_transport_count: ledger::load_counter(store, keys::PUBLIC_TRANSPORT_COUNT),
        by_category,
        most_frequent: rank_counts(counts),
        yoga: yoga_totals(&entries),
        quiz,
        rewards: reward_progress(balance),
    }
}

/// Points still available for redemption.
pub fn points_balance<S: LedgerStore + ?Sized>(store: &S) -> u64 {
    let entries = load_category_entries(store);
    let earned = total_points(&entries).saturating_add(quiz_summary(&quiz::load_history(store)).points);
    let redemptions: Vec<Redemption> = ledger::load(store, keys::REDEMPTIONS);
    let redeemed = redemptions.iter().map(|r| r.points_spent).sum::<u64>();
    earned.saturating_sub(redeemed)
}

fn load_category_entries<S: LedgerStore + ?Sized>(store: &S) -> Vec<ActivityEntry> {
    Category::ALL
        .iter()
        .filter_map(|category| ledger::category_ledger(*category))
        .flat_map(|key| ledger::load::<ActivityEntry, S>(store, key))
        .collect()
}

pub fn total_points(entries: &[ActivityEntry]) -> u64 {
    entries
        .iter()
        .map(|entry| u64::from(entry.points_awarded))
        .sum()
}

pub fn total_impact(entries: &[ActivityEntry]) -> f64 {
    entries.iter().filter_map(|entry| entry.derived_impact).sum()
}

pub fn category_totals(entries: &[ActivityEntry]) -> Vec<CategoryTotals> {
    Category::ALL
        .iter()
        .filter_map(|category| {
            let matching: Vec<ActivityEntry> = entries
                .iter()
                .filter(|entry| entry.category() == *category)
                .cloned()
                .collect();
            if matching.is_empty() {
                return None;
            }
            Some(CategoryTotals {
                category: *category,
                entries: matching.len(),
                points: total_points(&matching),
                impact: total_impact(&matching),
            })
        })
        .collect()
}

pub fn most_frequent(entries: &[ActivityEntry]) -> Vec<CategoryCount> {
    let mut counts: BTreeMap<Category, usize> = BTreeMap::new();
    for entry in entries {
        *counts.entry(entry.category()).or_default() += 1;
    }
    rank_counts(counts)
}

/// Highest count first; ties keep category order.
fn rank_counts(counts: BTreeMap<Category, usize>) -> Vec<CategoryCount> {
    let mut ranked: Vec<CategoryCount> = counts
        .into_iter()
        .map(|(category, count)| CategoryCount { category, count })
        .collect();
    ranked.sort_by(|a, b| b.count.cmp(&a.count));
    ranked
}

/// Consecutive local days with at least one activity, ending today or,
/// if nothing was logged yet today, yesterday.
pub fn streak_days<I>(timestamps: I, today: NaiveDate) -> u32
where
    I: IntoIterator<Item = DateTime<Utc>>,
{
    let days: BTreeSet<NaiveDate> = timestamps
        .into_iter()
        .map(|timestamp| local_date(timestamp))
        .collect();

    let mut cursor = if days.contains(&today) {
        today
    } else {
        today - Duration::days(1)
    };
    let mut streak = 0;
    while days.contains(&cursor) {
        streak += 1;
        cursor -= Duration::days(1);
    }
    streak
}

pub fn recent_feed(records: &[RecentRecord], today: NaiveDate) -> Vec<RecentAction> {
    records
        .iter()
        .map(|record| match record {
            RecentRecord::Entry(entry) => RecentAction {
                id: entry.id,
                action: entry.action.clone(),
                date: date_label(entry.timestamp, today),
                points: entry.points_awarded,
            },
            RecentRecord::Legacy(action) => action.clone(),
        })
        .collect()
}

fn date_label(timestamp: DateTime<Utc>, today: NaiveDate) -> String {
    let date = local_date(timestamp);
    if date == today {
        "Today".to_string()
    } else {
        date.format("%-m/%-d/%Y").to_string()
    }
}

fn local_date(timestamp: DateTime<Utc>) -> NaiveDate {
    timestamp.with_timezone(&Local).date_naive()
}

pub fn reward_progress(points: u64) -> RewardProgress {
    let top = REWARD_TIERS[REWARD_TIERS.len() - 1];
    let next_tier = REWARD_TIERS.iter().copied().find(|tier| *tier > points);
    let previous = REWARD_TIERS
        .iter()
        .copied()
        .filter(|tier| *tier <= points)
        .last()
        .unwrap_or(0);

    let tier_percent = match next_tier {
        Some(next) => percent(points - previous, next - previous),
        None => 100.0,
    };

    RewardProgress {
        points,
        next_tier,
        points_to_next: next_tier.map_or(0, |next| next - points),
        tier_percent,
        overall_percent: percent(points.min(top), top),
    }
}

fn percent(part: u64, whole: u64) -> f64 {
    if whole == 0 {
        return 100.0;
    }
    part as f64 / whole as f64 * 100.0
}

pub fn yoga_totals(entries: &[ActivityEntry]) -> YogaTotals {
    let mut totals = YogaTotals {
        sessions: 0,
        minutes: 0,
        calories: 0,
        points: 0,
    };
    for entry in entries {
        if let Activity::Yoga(session) = &entry.activity {
            totals.sessions += 1;
            totals.minutes += u64::from(session.duration);
            totals.calories += u64::from(session.calories);
            totals.points += u64::from(entry.points_awarded);
        }
    }
    totals
}

pub fn quiz_summary(history: &[QuizResult]) -> QuizSummary {
    let attempts = history.len();
    let best_percentage = history
        .iter()
        .map(|result| result.percentage_score)
        .fold(0.0, f64::max);
    let average_percentage = if attempts == 0 {
        0.0
    } else {
        history.iter().map(|result| result.percentage_score).sum::<f64>() / attempts as f64
    };
    let points = history
        .iter()
        .map(|result| u64::from(result.score) * u64::from(QUIZ_POINTS_PER_ANSWER))
        .sum();
    QuizSummary {
        attempts,
        best_percentage,
        average_percentage,
        points,
    }
}
