//! Turns submitted activity forms into immutable ledger entries.
//!
//! Every accepted entry lands in two ledgers in one store write: its
//! category ledger (kept in full) and the shared recent-actions feed
//! (capped at [`RECENT_ACTIONS_LIMIT`]).

use crate::calculator::{self, Award};
use crate::errors::{LogError, ValidationError};
use crate::ledger::{self, keys, LedgerStore, WriteBatch, RECENT_ACTIONS_LIMIT};
use crate::models::{
    Activity, ActivityEntry, ActivityForm, CarbonForm, CarbonPayload, CarpoolForm, CarpoolPayload,
    Category, EnergyForm, EnergyPayload, FormValue, PublicTransportForm, PublicTransportPayload,
    QuizPayload, QuizResult, RecentRecord, TreeForm, TreePayload, WasteForm, WastePayload, YogaForm, YogaPayload,
};
use crate::quiz::{self, QuizQuestion};
use chrono::{DateTime, Utc};
use serde_json::Value;
use tracing::info;

const DEFAULT_AGE: u32 = 30;
const DEFAULT_TRANSPORT: &str = "car";

pub struct Validated {
    pub activity: Activity,
    pub action: String,
    pub award: Award,
}

#[derive(Debug, Clone)]
pub struct QuizOutcome {
    pub result: QuizResult,
    pub entry: ActivityEntry,
}

pub fn log_activity<S: LedgerStore + ?Sized>(
    store: &mut S,
    form: ActivityForm,
) -> Result<ActivityEntry, LogError> {
    log_activity_at(store, form, Utc::now())
}

pub fn log_activity_at<S: LedgerStore + ?Sized>(
    store: &mut S,
    form: ActivityForm,
    now: DateTime<Utc>,
) -> Result<ActivityEntry, LogError> {
    let validated = validate(form)?;
    record(store, validated, now)
}

pub fn complete_quiz<S: LedgerStore + ?Sized>(
    store: &mut S,
    answers: &[usize],
) -> Result<QuizOutcome, LogError> {
    complete_quiz_at(store, &quiz::QUESTIONS, answers, Utc::now())
}

/// Scores the attempt, appends it to the quiz history and credits the
/// points to the recent-actions feed.
pub fn complete_quiz_at<S: LedgerStore + ?Sized>(
    store: &mut S,
    questions: &[QuizQuestion],
    answers: &[usize],
    now: DateTime<Utc>,
) -> Result<QuizOutcome, LogError> {
    let score = quiz::score(questions, answers)?;
    let validated = Validated {
        activity: Activity::Quiz(QuizPayload {
            score: score.correct,
            total_questions: score.total,
        }),
        action: format!("Completed eco quiz ({}/{})", score.correct, score.total),
        award: calculator::quiz(score.correct),
    };

    let mut history = quiz::load_history(store);
    let entry = build_entry(store, validated, now);
    let result = QuizResult {
        id: entry.id.to_string(),
        date: now,
        score: score.correct,
        total_questions: score.total,
        percentage_score: score.percentage(),
    };
    history.push(result.clone());

    let mut batch = recent_write(store, &entry)?;
    batch.push((
        keys::QUIZ_HISTORY.to_string(),
        Some(ledger::encode(keys::QUIZ_HISTORY, &history)?),
    ));
    store.write(batch)?;

    info!(
        "quiz completed: {}/{} ({} points)",
        score.correct, score.total, entry.points_awarded
    );
    Ok(QuizOutcome { result, entry })
}

fn record<S: LedgerStore + ?Sized>(
    store: &mut S,
    validated: Validated,
    now: DateTime<Utc>,
) -> Result<ActivityEntry, LogError> {
    let entry = build_entry(store, validated, now);
    let category = entry.category();

    let mut batch = recent_write(store, &entry)?;
    if let Some(key) = ledger::category_ledger(category) {
        let mut entries: Vec<ActivityEntry> = ledger::load(store, key);
        entries.insert(0, entry.clone());
        batch.push((key.to_string(), Some(ledger::encode(key, &entries)?)));
    }
    let counter = match category {
        Category::Carpool => Some(keys::CARPOOL_COUNT),
        Category::PublicTransport => Some(keys::PUBLIC_TRANSPORT_COUNT),
        _ => None,
    };
    if let Some(key) = counter {
        let next = ledger::load_counter(store, key).saturating_add(1);
        batch.push((key.to_string(), Some(Value::String(next.to_string()))));
    }
    store.write(batch)?;

    info!(
        "logged {} entry {}: {} (+{} pts)",
        category.as_str(),
        entry.id,
        entry.action,
        entry.points_awarded
    );
    Ok(entry)
}

fn recent_write<S: LedgerStore + ?Sized>(
    store: &S,
    entry: &ActivityEntry,
) -> Result<WriteBatch, LogError> {
    let mut recent: Vec<RecentRecord> = ledger::load(store, keys::RECENT_ACTIONS);
    recent.insert(0, RecentRecord::Entry(entry.clone()));
    recent.truncate(RECENT_ACTIONS_LIMIT);
    let value = ledger::encode(keys::RECENT_ACTIONS, &recent)?;
    Ok(vec![(keys::RECENT_ACTIONS.to_string(), Some(value))])
}

fn build_entry<S: LedgerStore + ?Sized>(
    store: &S,
    validated: Validated,
    now: DateTime<Utc>,
) -> ActivityEntry {
    let category = validated.activity.category();
    ActivityEntry {
        id: next_id(store, category, now),
        timestamp: now,
        action: validated.action,
        activity: validated.activity,
        points_awarded: validated.award.points,
        derived_impact: validated.award.impact,
    }
}

/// Epoch milliseconds, bumped past the newest stored id when the clock has
/// not moved on.
fn next_id<S: LedgerStore + ?Sized>(store: &S, category: Category, now: DateTime<Utc>) -> i64 {
    let recent: Vec<RecentRecord> = ledger::load(store, keys::RECENT_ACTIONS);
    let mut newest = recent.first().map(RecentRecord::id);
    if let Some(key) = ledger::category_ledger(category) {
        let entries: Vec<ActivityEntry> = ledger::load(store, key);
        newest = newest.max(entries.first().map(|entry| entry.id));
    }
    let millis = now.timestamp_millis();
    match newest {
        Some(id) if id >= millis => id + 1,
        _ => millis,
    }
}


pub fn validate(form: ActivityForm) -> Result<Validated, ValidationError> {
    match form {
        ActivityForm::Carpool(form) => validate_carpool(form),
        ActivityForm::PublicTransport(form) => validate_public_transport(form),
        ActivityForm::TreePlanting(form) => validate_tree(form),
        ActivityForm::WasteSegregation(form) => validate_waste(form),
        ActivityForm::EnergySaving(form) => validate_energy(form),
        ActivityForm::Yoga(form) => validate_yoga(form),
        ActivityForm::CarbonCalculation(form) => validate_carbon(form),
    }
}

fn validate_carpool(form: CarpoolForm) -> Result<Validated, ValidationError> {
    let passengers = whole(required_positive(form.passengers, "passengers")?, "passengers")?;
    let distance = required_positive(form.distance, "distance")?;
    let start_location = required_text(form.start_location, "startLocation")?;
    let destination = required_text(form.destination, "destination")?;
    Ok(Validated {
        action: format!("Carpooled with {passengers} passengers"),
        award: calculator::carpool(),
        activity: Activity::Carpool(CarpoolPayload {
            date_time: optional_text(form.date_time),
            driver_name: optional_text(form.driver_name),
            passengers,
            start_location,
            destination,
            distance,
            vehicle_type: optional_text(form.vehicle_type),
            fuel_type: optional_text(form.fuel_type),
            notes: optional_text(form.notes),
        }),
    })
}

fn validate_public_transport(form: PublicTransportForm) -> Result<Validated, ValidationError> {
    let mode = required_text(form.mode, "mode")?;
    let distance = optional_positive(form.distance, "distance")?;
    let ticket_cost = optional_non_negative(form.ticket_cost, "ticketCost")?;
    Ok(Validated {
        action: format!("Used {mode} for travel"),
        award: calculator::public_transport(),
        activity: Activity::PublicTransport(PublicTransportPayload {
            date_time: optional_text(form.date_time),
            mode,
            route_number: optional_text(form.route_number),
            start_location: optional_text(form.start_location),
            destination: optional_text(form.destination),
            distance,
            ticket_cost,
            notes: optional_text(form.notes),
        }),
    })
}

fn validate_tree(form: TreeForm) -> Result<Validated, ValidationError> {
    let location = required_text(form.location, "location")?;
    let planting_type = required_text(form.planting_type, "type")?;
    let number = whole(required_positive(form.number, "number")?, "number")?;
    Ok(Validated {
        action: format!("Planted a {planting_type} tree"),
        award: calculator::tree_planting(number),
        activity: Activity::TreePlanting(TreePayload {
            date: optional_text(form.date),
            species: optional_text(form.species),
            location,
            planting_type,
            number,
            notes: optional_text(form.notes),
        }),
    })
}

fn validate_waste(form: WasteForm) -> Result<Validated, ValidationError> {
    let method = required_text(form.method, "method")?;
    let weight = optional_non_negative(form.weight, "weight")?;
    let count = optional_non_negative(form.count, "count")?
        .map(|count| whole(count, "count"))
        .transpose()?;
    let volume = optional_non_negative(form.volume, "volume")?;
    Ok(Validated {
        action: "Segregated waste".to_string(),
        award: calculator::waste_segregation(weight, count, volume),
        activity: Activity::WasteSegregation(WastePayload {
            date: optional_text(form.date),
            types: form.types,
            weight,
            count,
            volume,
            method,
            notes: optional_text(form.notes),
        }),
    })
}

fn validate_energy(form: EnergyForm) -> Result<Validated, ValidationError> {
    let energy_saved = required_positive(form.energy_saved, "energySaved")?;
    let duration = optional_positive(form.duration, "duration")?;
    Ok(Validated {
        action: format!("Saved {} kWh of energy", format_number(energy_saved)),
        award: calculator::energy_saving(energy_saved),
        activity: Activity::EnergySaving(EnergyPayload {
            date: optional_text(form.date),
            time: optional_text(form.time),
            action_type: optional_text(form.action_type),
            appliance_type: optional_text(form.appliance_type),
            duration,
            energy_saved,
            notes: optional_text(form.notes),
        }),
    })
}

fn validate_yoga(form: YogaForm) -> Result<Validated, ValidationError> {
    let routine = required_text(form.routine, "routine")?;
    let duration = whole(required_positive(form.duration, "duration")?, "duration")?;
    let age = match optional_positive(form.age, "age")? {
        Some(age) => whole(age, "age")?,
        None => DEFAULT_AGE,
    };
    let award = calculator::yoga(age, duration);
    Ok(Validated {
        action: format!("Completed {routine}"),
        activity: Activity::Yoga(YogaPayload {
            routine,
            age,
            duration,
            calories: calculator::yoga_calories(age, duration),
        }),
        award,
    })
}

fn validate_carbon(form: CarbonForm) -> Result<Validated, ValidationError> {
    let distance = required_positive(form.distance, "distance")?;
    let transportation_type =
        optional_text(form.transportation_type).unwrap_or_else(|| DEFAULT_TRANSPORT.to_string());
    Ok(Validated {
        action: "Completed carbon footprint calculation".to_string(),
        award: calculator::carbon_footprint(&transportation_type, distance),
        activity: Activity::CarbonCalculation(CarbonPayload {
            transportation_type,
            distance,
        }),
    })
}

fn optional_text(value: Option<String>) -> Option<String> {
    value
        .map(|text| text.trim().to_string())
        .filter(|text| !text.is_empty())
}

fn required_text(value: Option<String>, field: &'static str) -> Result<String, ValidationError> {
    optional_text(value).ok_or(ValidationError::Missing(field))
}

/// Empty strings count as absent, as an untouched form input would.
fn optional_number(
    value: Option<FormValue>,
    field: &'static str,
) -> Result<Option<f64>, ValidationError> {
    let number = match value {
        None => return Ok(None),
        Some(FormValue::Number(number)) => number,
        Some(FormValue::Text(text)) => {
            let text = text.trim();
            if text.is_empty() {
                return Ok(None);
            }
            text.parse::<f64>().map_err(|_| ValidationError::NotNumeric {
                field,
                value: text.to_string(),
            })?
        }
    };
    if !number.is_finite() {
        return Err(ValidationError::NotNumeric {
            field,
            value: number.to_string(),
        });
    }
    Ok(Some(number))
}

fn optional_positive(
    value: Option<FormValue>,
    field: &'static str,
) -> Result<Option<f64>, ValidationError> {
    match optional_number(value, field)? {
        Some(number) if number <= 0.0 => Err(ValidationError::NotPositive(field)),
        number => Ok(number),
    }
}

/// Like `optional_positive`, but zero is a valid reading.
fn optional_non_negative(
    value: Option<FormValue>,
    field: &'static str,
) -> Result<Option<f64>, ValidationError> {
    match optional_number(value, field)? {
        Some(number) if number < 0.0 => Err(ValidationError::Negative(field)),
        number => Ok(number),
    }
}

fn required_positive(value: Option<FormValue>, field: &'static str) -> Result<f64, ValidationError> {
    optional_positive(value, field)?.ok_or(ValidationError::Missing(field))
}

fn whole(number: f64, field: &'static str) -> Result<u32, ValidationError> {
    if number.fract() != 0.0 || number > f64::from(u32::MAX) {
        return Err(ValidationError::NotWhole(field));
    }
    Ok(number as u32)
}

/// Renders `0.5` as "0.5" and `2.0` as "2", the way the value was typed.
fn format_number(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{value:.0}")
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ledger::MemoryStore;
    use chrono::{Duration, TimeZone};

    fn at(seconds: i64) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 3, 2, 9, 0, 0).unwrap() + Duration::seconds(seconds)
    }

    fn text(value: &str) -> Option<FormValue> {
        Some(FormValue::Text(value.to_string()))
    }

    fn waste_form(weight: &str) -> ActivityForm {
        ActivityForm::WasteSegregation(WasteForm {
            weight: text(weight),
            method: Some("Composting".to_string()),
            ..WasteForm::default()
        })
    }

    fn carpool_form(passengers: &str, distance: &str) -> ActivityForm {
        ActivityForm::Carpool(CarpoolForm {
            passengers: text(passengers),
            distance: text(distance),
            start_location: Some("Home".to_string()),
            destination: Some("Office".to_string()),
            ..CarpoolForm::default()
        })
    }

    #[test]
    fn waste_entry_lands_in_both_ledgers() {
        let mut store = MemoryStore::new();
        let entry = log_activity_at(&mut store, waste_form("2.5"), at(0)).unwrap();

        assert_eq!(entry.points_awarded, 3);
        assert_eq!(entry.derived_impact, Some(2.5));
        assert_eq!(entry.action, "Segregated waste");

        let waste: Vec<ActivityEntry> = ledger::load(&store, keys::WASTE_LOG);
        let recent: Vec<ActivityEntry> = ledger::load(&store, keys::RECENT_ACTIONS);
        assert_eq!(waste, vec![entry.clone()]);
        assert_eq!(recent, vec![entry]);
    }

    #[test]
    fn carpool_points_ignore_magnitude() {
        let mut store = MemoryStore::new();
        let small = log_activity_at(&mut store, carpool_form("1", "2"), at(0)).unwrap();
        let large = log_activity_at(&mut store, carpool_form("6", "480.5"), at(1)).unwrap();
        assert_eq!(small.points_awarded, 5);
        assert_eq!(large.points_awarded, 5);
        assert_eq!(large.action, "Carpooled with 6 passengers");
        assert_eq!(ledger::load_counter(&store, keys::CARPOOL_COUNT), 2);
    }

    #[test]
    fn public_transport_requires_mode_and_awards_five() {
        let mut store = MemoryStore::new();
        let missing = log_activity_at(
            &mut store,
            ActivityForm::PublicTransport(PublicTransportForm::default()),
            at(0),
        );
        assert!(matches!(
            missing,
            Err(LogError::Validation(ValidationError::Missing("mode")))
        ));

        let entry = log_activity_at(
            &mut store,
            ActivityForm::PublicTransport(PublicTransportForm {
                mode: Some("Metro".to_string()),
                distance: Some(FormValue::Number(12.0)),
                ..PublicTransportForm::default()
            }),
            at(1),
        )
        .unwrap();
        assert_eq!(entry.points_awarded, 5);
        assert_eq!(entry.action, "Used Metro for travel");
        assert_eq!(ledger::load_counter(&store, keys::PUBLIC_TRANSPORT_COUNT), 1);
    }

    #[test]
    fn tree_planting_scores_per_entry() {
        let mut store = MemoryStore::new();
        let entry = log_activity_at(
            &mut store,
            ActivityForm::TreePlanting(TreeForm {
                location: Some("City park".to_string()),
                planting_type: Some("Community Event".to_string()),
                number: text("3"),
                ..TreeForm::default()
            }),
            at(0),
        )
        .unwrap();
        assert_eq!(entry.points_awarded, 20);
        assert_eq!(entry.derived_impact, Some(75.0));
        assert_eq!(entry.action, "Planted a Community Event tree");
        let trees: Vec<ActivityEntry> = ledger::load(&store, keys::TREES_PLANTED);
        assert_eq!(trees.len(), 1);
    }

    #[test]
    fn validation_failure_leaves_store_untouched() {
        let mut store = MemoryStore::new();
        let cases = [
            carpool_form("", "10"),
            carpool_form("2", "-4"),
            carpool_form("two", "10"),
            carpool_form("2.5", "10"),
            ActivityForm::WasteSegregation(WasteForm::default()),
            ActivityForm::EnergySaving(EnergyForm::default()),
            ActivityForm::TreePlanting(TreeForm {
                location: Some("Yard".to_string()),
                number: text("1"),
                ..TreeForm::default()
            }),
            ActivityForm::Yoga(YogaForm {
                routine: Some("Sun Salutation Start".to_string()),
                duration: text("0"),
                ..YogaForm::default()
            }),
            ActivityForm::CarbonCalculation(CarbonForm {
                transportation_type: Some("bus".to_string()),
                distance: text("abc"),
            }),
        ];
        for form in cases {
            let result = log_activity_at(&mut store, form, at(0));
            assert!(matches!(result, Err(LogError::Validation(_))), "{result:?}");
        }
        assert!(store.as_map().is_empty());
    }

    #[test]
    fn recent_feed_keeps_twenty_newest_first() {
        let mut store = MemoryStore::new();
        for i in 0..25 {
            log_activity_at(&mut store, waste_form("1"), at(i)).unwrap();
        }
        let recent: Vec<ActivityEntry> = ledger::load(&store, keys::RECENT_ACTIONS);
        let waste: Vec<ActivityEntry> = ledger::load(&store, keys::WASTE_LOG);
        assert_eq!(recent.len(), RECENT_ACTIONS_LIMIT);
        assert_eq!(waste.len(), 25);
        assert_eq!(recent[0].timestamp, at(24));
        assert_eq!(recent[19].timestamp, at(5));
        assert!(recent.windows(2).all(|pair| pair[0].id > pair[1].id));
    }

    #[test]
    fn ids_stay_unique_within_one_millisecond() {
        let mut store = MemoryStore::new();
        let first = log_activity_at(&mut store, waste_form("1"), at(0)).unwrap();
        let second = log_activity_at(&mut store, waste_form("1"), at(0)).unwrap();
        assert_eq!(first.id, at(0).timestamp_millis());
        assert_eq!(second.id, first.id + 1);
    }

    #[test]
    fn energy_and_yoga_awards() {
        let mut store = MemoryStore::new();
        let energy = log_activity_at(
            &mut store,
            ActivityForm::EnergySaving(EnergyForm {
                action_type: Some("ac_adjusted".to_string()),
                energy_saved: text("0.5"),
                ..EnergyForm::default()
            }),
            at(0),
        )
        .unwrap();
        assert_eq!(energy.points_awarded, 3);
        assert_eq!(energy.derived_impact, Some(0.5));
        assert_eq!(energy.action, "Saved 0.5 kWh of energy");

        let yoga = log_activity_at(
            &mut store,
            ActivityForm::Yoga(YogaForm {
                routine: Some("Evening Stretch Detox".to_string()),
                duration: Some(FormValue::Number(37.0)),
                age: None,
            }),
            at(1),
        )
        .unwrap();
        assert_eq!(yoga.points_awarded, 19);
        match &yoga.activity {
            Activity::Yoga(payload) => {
                assert_eq!(payload.age, 30);
                assert_eq!(payload.calories, calculator::yoga_calories(30, 37));
            }
            other => panic!("unexpected payload {other:?}"),
        }
    }

    #[test]
    fn carbon_calculation_is_logged() {
        let mut store = MemoryStore::new();
        let entry = log_activity_at(
            &mut store,
            ActivityForm::CarbonCalculation(CarbonForm {
                transportation_type: Some("train".to_string()),
                distance: text("25"),
            }),
            at(0),
        )
        .unwrap();
        assert_eq!(entry.points_awarded, 2);
        assert_eq!(entry.derived_impact, Some(1.0));
        let log: Vec<ActivityEntry> = ledger::load(&store, keys::CARBON_LOG);
        assert_eq!(log.len(), 1);
    }

    #[test]
    fn carbon_type_is_matched_exactly() {
        let mut store = MemoryStore::new();
        let entry = log_activity_at(
            &mut store,
            ActivityForm::CarbonCalculation(CarbonForm {
                transportation_type: Some("Train".to_string()),
                distance: text("25"),
            }),
            at(0),
        )
        .unwrap();
        assert_eq!(entry.derived_impact, Some(3.0));
        match &entry.activity {
            Activity::CarbonCalculation(payload) => assert_eq!(payload.transportation_type, "Train"),
            other => panic!("unexpected payload {other:?}"),
        }
    }

    #[test]
    fn zero_waste_weight_is_accepted() {
        let mut store = MemoryStore::new();
        let entry = log_activity_at(
            &mut store,
            ActivityForm::WasteSegregation(WasteForm {
                weight: text("0"),
                count: text("4"),
                method: Some("Recycling bin".to_string()),
                ..WasteForm::default()
            }),
            at(0),
        )
        .unwrap();
        assert_eq!(entry.points_awarded, 3);
        assert_eq!(entry.derived_impact, Some(0.0));
        assert_eq!(calculator::waste_summary(0.0), "");

        let negative = log_activity_at(&mut store, waste_form("-1"), at(1));
        assert!(matches!(
            negative,
            Err(LogError::Validation(ValidationError::Negative("weight")))
        ));
    }

    #[test]
    fn browser_feed_rows_survive_new_entries() {
        let mut store = MemoryStore::new();
        store.insert_raw(
            keys::RECENT_ACTIONS,
            serde_json::json!([
                { "id": 1714000000002i64, "action": "Used Bus for travel", "date": "4/24/2024", "points": 5 },
                { "id": 1714000000001i64, "action": "Segregated waste", "date": "4/24/2024", "points": 3 }
            ]),
        );

        let entry = log_activity_at(&mut store, waste_form("1"), at(0)).unwrap();
        let recent: Vec<RecentRecord> = ledger::load(&store, keys::RECENT_ACTIONS);
        assert_eq!(recent.len(), 3);
        assert_eq!(recent[0], RecentRecord::Entry(entry));
        match &recent[1] {
            RecentRecord::Legacy(row) => {
                assert_eq!(row.action, "Used Bus for travel");
                assert_eq!(row.date, "4/24/2024");
            }
            other => panic!("legacy row was rewritten: {other:?}"),
        }
        assert_eq!(recent[2].id(), 1714000000001);
    }

    #[test]
    fn perfect_quiz_is_recorded() {
        let mut store = MemoryStore::new();
        let questions = &quiz::QUESTIONS[..3];
        let answers: Vec<usize> = questions.iter().map(|q| q.correct_answer).collect();

        let outcome = complete_quiz_at(&mut store, questions, &answers, at(0)).unwrap();
        assert_eq!(outcome.result.percentage_score, 100.0);
        assert_eq!(outcome.entry.points_awarded, 15);

        let before = quiz::load_history(&store).len();
        complete_quiz_at(&mut store, questions, &[0, 0, 0], at(1)).unwrap();
        let history = quiz::load_history(&store);
        assert_eq!(history.len(), before + 1);
        assert_eq!(history[0].score, 3);
        assert_eq!(history[1].score, 0);

        let recent: Vec<ActivityEntry> = ledger::load(&store, keys::RECENT_ACTIONS);
        assert_eq!(recent.len(), 2);
        assert_eq!(recent[0].category(), Category::Quiz);
    }

    #[test]
    fn entries_round_trip_through_json() {
        let mut store = MemoryStore::new();
        let entry = log_activity_at(&mut store, waste_form("2.5"), at(0)).unwrap();
        let value = serde_json::to_value(&entry).unwrap();
        assert_eq!(value["category"], "waste-segregation");
        assert_eq!(value["payload"]["method"], "Composting");
        assert_eq!(value["pointsAwarded"], 3);
    }
}
