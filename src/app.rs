use crate::handlers;
use crate::state::AppState;
use axum::{
    routing::{get, post},
    Router,
};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/api/calculate", post(handlers::calculate))
        .route("/api/factors", get(handlers::get_factors))
        .route("/api/coach", post(handlers::coach_reply))
        .route("/api/challenges", get(handlers::get_challenges))
        .route("/api/challenges/:id/progress", post(handlers::progress_challenge))
        .route("/api/challenges/:id/reset", post(handlers::reset_challenge))
        .route("/api/learn", get(handlers::get_learn))
        .route("/api/learn/modules/:id/complete", post(handlers::complete_module))
        .route("/api/learn/tips-viewed", post(handlers::mark_tips_viewed))
        .route("/api/learn/quiz", get(handlers::get_quiz).post(handlers::submit_quiz))
        .route("/api/leaderboard", get(handlers::get_leaderboard))
        .route("/api/dashboard", get(handlers::get_dashboard))
        .route(
            "/api/notifications",
            get(handlers::get_notifications).delete(handlers::clear_notifications),
        )
        .route(
            "/api/notifications/read-all",
            post(handlers::mark_all_notifications_read),
        )
        .route(
            "/api/notifications/:id/read",
            post(handlers::mark_notification_read),
        )
        .route("/api/export", get(handlers::export_store))
        .with_state(state)
}
