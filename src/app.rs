use crate::handlers;
use crate::state::AppState;
use axum::{routing::{get, post}, Router};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/health", get(handlers::health))
        .route("/api/actions", post(handlers::log_action))
        .route("/api/calculator", post(handlers::calculate_carbon))
        .route("/api/energy-actions", get(handlers::energy_actions))
        .route("/api/ledgers/:key", get(handlers::get_ledger))
        .route("/api/recent", get(handlers::get_recent))
        .route("/api/summary", get(handlers::get_summary))
        .route("/api/quiz", get(handlers::get_quiz).post(handlers::submit_quiz))
        .route("/api/quiz/history", get(handlers::quiz_history))
        .route("/api/rewards", get(handlers::list_rewards))
        .route("/api/rewards/:id/redeem", post(handlers::redeem_reward))
        .route("/api/login", post(handlers::login))
        .route("/api/logout", post(handlers::logout))
        .route("/api/me", get(handlers::me))
        .route("/api/profile", get(handlers::get_profile).put(handlers::put_profile))
        .with_state(state)
}
