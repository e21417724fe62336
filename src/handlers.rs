use crate::auth;
use crate::calculator::{self, ENERGY_ACTIONS};
use crate::errors::AppError;
use crate::ledger::{self, keys, category_ledger};
use crate::logger::{complete_quiz, log_activity};
use crate::models::{
    ActivityEntry, ActivityForm, AuthUser, CarbonForm, CarbonResponse, Category, EnergyAction,
    LoggedActivityResponse, LoginRequest, ProfileData, QuizResponse, QuizResult, QuizSubmission,
    RecentAction, RecentRecord, Redemption, SummaryResponse,
};
use crate::quiz::{self, QuizQuestion};
use crate::rewards::{self, Reward};
use crate::state::AppState;
use crate::stats::{build_summary, recent_feed};
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use chrono::Local;
use serde::Deserialize;
use serde_json::{json, Value};

pub async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

pub async fn log_action(
    State(state): State<AppState>,
    Json(form): Json<ActivityForm>,
) -> Result<Json<LoggedActivityResponse>, AppError> {
    let entry = state.with_store(move |store| log_activity(store, form)).await??;
    Ok(Json(to_logged_response(entry)))
}

pub async fn calculate_carbon(
    State(state): State<AppState>,
    Json(form): Json<CarbonForm>,
) -> Result<Json<CarbonResponse>, AppError> {
    let entry = state
        .with_store(move |store| log_activity(store, ActivityForm::CarbonCalculation(form)))
        .await??;
    Ok(Json(CarbonResponse {
        emissions_kg: entry.derived_impact.unwrap_or_default(),
        points_awarded: entry.points_awarded,
        entry_id: entry.id,
    }))
}

pub async fn get_ledger(
    State(state): State<AppState>,
    Path(key): Path<String>,
) -> Result<Json<Vec<Value>>, AppError> {
    if !is_ledger_key(&key) {
        return Err(AppError::not_found(format!("unknown ledger: {key}")));
    }
    let store = state.store.lock().await;
    let entries = ledger::load(&*store, &key);
    Ok(Json(with_impact_summaries(&key, entries)))
}

pub async fn get_recent(State(state): State<AppState>) -> Json<Vec<RecentAction>> {
    let store = state.store.lock().await;
    let records: Vec<RecentRecord> = ledger::load(&*store, keys::RECENT_ACTIONS);
    Json(recent_feed(&records, Local::now().date_naive()))
}

pub async fn get_summary(State(state): State<AppState>) -> Json<SummaryResponse> {
    let store = state.store.lock().await;
    Json(build_summary(&*store))
}

pub async fn energy_actions() -> Json<Vec<EnergyAction>> {
    Json(
        ENERGY_ACTIONS
            .iter()
            .map(|&(action_type, label, default_savings)| EnergyAction {
                action_type,
                label,
                default_savings,
            })
            .collect(),
    )
}

pub async fn get_quiz() -> Json<&'static [QuizQuestion]> {
    Json(&quiz::QUESTIONS[..])
}

pub async fn submit_quiz(
    State(state): State<AppState>,
    Json(submission): Json<QuizSubmission>,
) -> Result<Json<QuizResponse>, AppError> {
    let answers = submission.answers;
    let outcome = state
        .with_store(move |store| complete_quiz(store, &answers))
        .await??;
    let feedback = quiz::feedback(outcome.result.percentage_score);
    Ok(Json(QuizResponse {
        result: outcome.result,
        points_awarded: outcome.entry.points_awarded,
        feedback,
    }))
}

pub async fn quiz_history(State(state): State<AppState>) -> Json<Vec<QuizResult>> {
    let store = state.store.lock().await;
    Json(quiz::load_history(&*store))
}

#[derive(Debug, Deserialize)]
pub struct RewardsQuery {
    pub category: Option<String>,
}

pub async fn list_rewards(Query(query): Query<RewardsQuery>) -> Json<Vec<&'static Reward>> {
    Json(rewards::by_category(query.category.as_deref()))
}

pub async fn redeem_reward(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Redemption>, AppError> {
    let redemption = state
        .with_store(move |store| rewards::redeem(store, &id))
        .await??;
    Ok(Json(redemption))
}

pub async fn login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> Result<Json<AuthUser>, AppError> {
    let user = state
        .with_store(move |store| auth::login(store, &request.email, request.name.as_deref()))
        .await??;
    Ok(Json(user))
}

pub async fn logout(State(state): State<AppState>) -> Result<StatusCode, AppError> {
    state.with_store(|store| auth::logout(store)).await??;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn me(State(state): State<AppState>) -> Result<Json<AuthUser>, AppError> {
    let store = state.store.lock().await;
    auth::current_user(&*store)
        .map(Json)
        .ok_or_else(|| AppError::unauthorized("not signed in"))
}

pub async fn get_profile(State(state): State<AppState>) -> Result<Json<ProfileData>, AppError> {
    let store = state.store.lock().await;
    auth::profile(&*store)
        .map(Json)
        .ok_or_else(|| AppError::not_found("no profile yet"))
}

pub async fn put_profile(
    State(state): State<AppState>,
    Json(profile): Json<ProfileData>,
) -> Result<Json<ProfileData>, AppError> {
    let profile = state
        .with_store(move |store| auth::update_profile(store, profile))
        .await??;
    Ok(Json(profile))
}

fn to_logged_response(entry: ActivityEntry) -> LoggedActivityResponse {
    let impact_summary = match entry.category() {
        Category::WasteSegregation => entry
            .derived_impact
            .map(calculator::waste_summary)
            .filter(|summary| !summary.is_empty()),
        _ => None,
    };
    LoggedActivityResponse {
        entry,
        impact_summary,
    }
}

/// Waste entries are served with the same summary line the log response has.
fn with_impact_summaries(key: &str, mut entries: Vec<Value>) -> Vec<Value> {
    if key != keys::WASTE_LOG {
        return entries;
    }
    for entry in &mut entries {
        let summary = entry
            .get("derivedImpact")
            .and_then(Value::as_f64)
            .map(calculator::waste_summary)
            .filter(|summary| !summary.is_empty());
        if let (Some(summary), Some(object)) = (summary, entry.as_object_mut()) {
            object.insert("impactSummary".to_string(), Value::String(summary));
        }
    }
    entries
}

fn is_ledger_key(key: &str) -> bool {
    matches!(
        key,
        keys::RECENT_ACTIONS | keys::QUIZ_HISTORY | keys::QUIZ_HISTORY_LEGACY | keys::REDEMPTIONS
    ) || Category::ALL
        .iter()
        .filter_map(|category| category_ledger(*category))
        .any(|ledger| ledger == key)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn waste_ledger_rows_carry_impact_summary() {
        let rows = vec![
            json!({ "id": 2, "derivedImpact": 2.5 }),
            json!({ "id": 1, "derivedImpact": 0.0 }),
        ];
        let rows = with_impact_summaries(keys::WASTE_LOG, rows);
        assert_eq!(rows[0]["impactSummary"], "Diverted 2.50 kg from landfill");
        assert!(rows[1].get("impactSummary").is_none());

        let energy = with_impact_summaries(keys::ENERGY_LOG, vec![json!({ "derivedImpact": 2.5 })]);
        assert!(energy[0].get("impactSummary").is_none());
    }

    #[test]
    fn ledger_whitelist() {
        assert!(is_ledger_key(keys::TREES_PLANTED));
        assert!(is_ledger_key(keys::RECENT_ACTIONS));
        assert!(!is_ledger_key(keys::PROFILE));
        assert!(!is_ledger_key("ecoTreePlantingLog"));
    }
}
