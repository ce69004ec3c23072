use crate::challenges::{self, ProgressOutcome};
use crate::coach;
use crate::dashboard::build_dashboard;
use crate::emissions::{self, Activity, Category, FoodType, TransportMode, ENERGY_FACTOR};
use crate::errors::AppError;
use crate::leaderboard::{LeaderboardEntry, LEADERS};
use crate::learn::{self, LearnProgress, QUIZ};
use crate::models::{
    CalculateRequest, CalculateResponse, ChallengesResponse, CoachRequest, CoachResponse,
    DashboardResponse, FactorEntry, FactorsResponse, FormNumber, LearnResponse, ModuleView,
    NotificationsResponse, QuizResult, QuizSubmission,
};
use crate::notifications::NotificationKind;
use crate::state::AppState;
use crate::storage::{
    persist_store, LocalStore, CHALLENGES_KEY, COMPLETED_MODULES_KEY, QUIZ_COMPLETED_KEY,
    TIPS_VIEWED_KEY, TOTAL_POINTS_KEY,
};
use crate::ui::render_index;
use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::Html,
    Json,
};
use std::path::Path as FsPath;
use tracing::info;

pub async fn index(State(state): State<AppState>) -> Html<String> {
    let points = {
        let store = state.store.lock().await;
        challenges::total_points(&store)
    };
    let unread = state.notifications.lock().await.unread_count();
    Html(render_index(points, unread))
}

pub async fn calculate(
    State(state): State<AppState>,
    payload: Result<Json<CalculateRequest>, JsonRejection>,
) -> Result<Json<CalculateResponse>, AppError> {
    let Json(payload) = payload?;
    let activity = activity_from_request(&payload)?;
    let result = estimate_checked(&activity)?;
    let recommendations = emissions::recommendations(&result, activity.kind_key())
        .into_iter()
        .map(str::to_string)
        .collect();

    info!(
        category = result.category.as_str(),
        emissions = result.emissions,
        "calculated emissions"
    );

    state.notifications.lock().await.push(
        "Calculation Complete",
        format!("{:.2} kg CO₂ from {}", result.emissions, result.category.as_str()),
        NotificationKind::Calculation,
    );

    Ok(Json(CalculateResponse {
        zero_emissions: result.emissions == 0.0,
        car_equivalent_km: emissions::car_equivalent_km(result.emissions),
        recommendations,
        result,
    }))
}

pub async fn get_factors() -> Json<FactorsResponse> {
    Json(FactorsResponse {
        transport: TransportMode::ALL
            .into_iter()
            .map(|mode| FactorEntry { key: mode.key(), factor: mode.factor() })
            .collect(),
        energy: ENERGY_FACTOR,
        food: FoodType::ALL
            .into_iter()
            .map(|food| FactorEntry { key: food.key(), factor: food.factor() })
            .collect(),
    })
}

pub async fn coach_reply(
    State(state): State<AppState>,
    Json(payload): Json<CoachRequest>,
) -> Result<Json<CoachResponse>, AppError> {
    if payload.message.trim().is_empty() {
        return Err(AppError::bad_request("message must not be empty"));
    }

    let reply = coach::get_response(&payload.message);
    if !state.coach_delay.is_zero() {
        tokio::time::sleep(state.coach_delay).await;
    }

    Ok(Json(CoachResponse {
        reply: reply.to_string(),
    }))
}

pub async fn get_challenges(State(state): State<AppState>) -> Json<ChallengesResponse> {
    let store = state.store.lock().await;
    Json(challenges_response(&store))
}

pub async fn progress_challenge(
    State(state): State<AppState>,
    Path(id): Path<u32>,
) -> Result<Json<ChallengesResponse>, AppError> {
    let mut store = state.store.lock().await;
    let mut list = challenges::load(&store);
    let outcome = challenges::add_progress(&mut list, id)
        .ok_or_else(|| AppError::not_found(format!("no challenge with id {id}")))?;

    if outcome == ProgressOutcome::Unchanged {
        return Ok(Json(challenges_response(&store)));
    }

    let mut next = store.clone();
    next.set(CHALLENGES_KEY, &list)?;
    if let ProgressOutcome::Completed { points } = outcome {
        let total = challenges::total_points(&next) + u64::from(points);
        next.set(TOTAL_POINTS_KEY, &total)?;
    }
    commit(&state.data_path, &mut store, next).await?;

    if let ProgressOutcome::Completed { points } = outcome {
        let title = list
            .iter()
            .find(|c| c.id == id)
            .map(|c| c.title.clone())
            .unwrap_or_default();
        info!(challenge = id, points, "challenge completed");
        state.notifications.lock().await.push(
            "Challenge Completed! 🎉",
            format!("You've earned {points} points for completing \"{title}\"!"),
            NotificationKind::Challenge,
        );
    }

    Ok(Json(challenges_response(&store)))
}

pub async fn reset_challenge(
    State(state): State<AppState>,
    Path(id): Path<u32>,
) -> Result<Json<ChallengesResponse>, AppError> {
    let mut store = state.store.lock().await;
    let mut list = challenges::load(&store);
    let changed = challenges::restart(&mut list, id)
        .ok_or_else(|| AppError::not_found(format!("no challenge with id {id}")))?;

    if changed {
        let mut next = store.clone();
        next.set(CHALLENGES_KEY, &list)?;
        commit(&state.data_path, &mut store, next).await?;
    }

    Ok(Json(challenges_response(&store)))
}

pub async fn get_learn(State(state): State<AppState>) -> Json<LearnResponse> {
    let store = state.store.lock().await;
    Json(learn_response(&LearnProgress::load(&store)))
}

pub async fn complete_module(
    State(state): State<AppState>,
    Path(id): Path<u32>,
) -> Result<Json<LearnResponse>, AppError> {
    if learn::find_module(id).is_none() {
        return Err(AppError::not_found(format!("no learning module with id {id}")));
    }

    let mut store = state.store.lock().await;
    let mut progress = LearnProgress::load(&store);
    if progress.complete_module(id) {
        let mut next = store.clone();
        next.set(COMPLETED_MODULES_KEY, &progress.completed_modules)?;
        commit(&state.data_path, &mut store, next).await?;
    }

    Ok(Json(learn_response(&progress)))
}

pub async fn mark_tips_viewed(State(state): State<AppState>) -> Result<Json<LearnResponse>, AppError> {
    let mut store = state.store.lock().await;
    let mut progress = LearnProgress::load(&store);
    if !progress.tips_viewed {
        progress.tips_viewed = true;
        let mut next = store.clone();
        next.set(TIPS_VIEWED_KEY, &true)?;
        commit(&state.data_path, &mut store, next).await?;
    }

    Ok(Json(learn_response(&progress)))
}

pub async fn get_quiz() -> Json<&'static [learn::QuizQuestion]> {
    Json(QUIZ)
}

pub async fn submit_quiz(
    State(state): State<AppState>,
    Json(payload): Json<QuizSubmission>,
) -> Result<Json<QuizResult>, AppError> {
    let score = learn::score_quiz(&payload.answers).ok_or_else(|| {
        AppError::bad_request(format!("expected {} answers", QUIZ.len()))
    })?;

    let mut store = state.store.lock().await;
    let mut progress = LearnProgress::load(&store);
    if !progress.quiz_completed {
        progress.quiz_completed = true;
        let mut next = store.clone();
        next.set(QUIZ_COMPLETED_KEY, &true)?;
        commit(&state.data_path, &mut store, next).await?;
    }

    let percent = progress.percent();
    Ok(Json(QuizResult {
        score,
        progress: percent,
        level: learn::level_for(percent),
    }))
}

pub async fn get_leaderboard() -> Json<&'static [LeaderboardEntry]> {
    Json(LEADERS)
}

pub async fn get_dashboard() -> Json<DashboardResponse> {
    Json(build_dashboard())
}

pub async fn get_notifications(State(state): State<AppState>) -> Json<NotificationsResponse> {
    let center = state.notifications.lock().await;
    Json(NotificationsResponse {
        notifications: center.items().to_vec(),
        unread_count: center.unread_count(),
    })
}

pub async fn mark_notification_read(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> Result<StatusCode, AppError> {
    if state.notifications.lock().await.mark_read(id) {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::not_found(format!("no notification with id {id}")))
    }
}

pub async fn mark_all_notifications_read(State(state): State<AppState>) -> StatusCode {
    state.notifications.lock().await.mark_all_read();
    StatusCode::NO_CONTENT
}

pub async fn clear_notifications(State(state): State<AppState>) -> StatusCode {
    state.notifications.lock().await.clear();
    StatusCode::NO_CONTENT
}

pub async fn export_store(State(state): State<AppState>) -> Json<LocalStore> {
    Json(state.store.lock().await.clone())
}

/// Writes `next` to disk and only then makes it the live store, so a failed
/// write leaves the session unchanged.
async fn commit(path: &FsPath, store: &mut LocalStore, next: LocalStore) -> Result<(), AppError> {
    persist_store(path, &next).await?;
    *store = next;
    Ok(())
}

fn challenges_response(store: &LocalStore) -> ChallengesResponse {
    let list = challenges::load(store);
    ChallengesResponse {
        summary: challenges::summarize(&list),
        total_points: challenges::total_points(store),
        challenges: list,
    }
}

fn learn_response(progress: &LearnProgress) -> LearnResponse {
    let percent = progress.percent();
    LearnResponse {
        modules: learn::MODULES
            .iter()
            .map(|module| ModuleView {
                module,
                completed: progress.completed_modules.contains(&module.id),
            })
            .collect(),
        tips: learn::TIPS,
        progress: percent,
        level: learn::level_for(percent),
        quiz_completed: progress.quiz_completed,
        tips_viewed: progress.tips_viewed,
    }
}

/// Form validation for the estimator: it expects a known mode or food type
/// and a finite, non-negative quantity.
fn activity_from_request(request: &CalculateRequest) -> Result<Activity, AppError> {
    match request.category {
        Category::Transport => {
            let key = request
                .mode
                .as_deref()
                .ok_or_else(|| AppError::bad_request("mode is required"))?;
            let mode = TransportMode::from_key(key)
                .ok_or_else(|| AppError::bad_request(format!("unknown transport mode '{key}'")))?;
            let distance_km = quantity(request.distance.as_ref(), "distance")?;
            Ok(Activity::Transport { mode, distance_km })
        }
        Category::Energy => Ok(Activity::Energy {
            kwh: quantity(request.kwh.as_ref(), "kwh")?,
        }),
        Category::Food => {
            let key = request
                .food_type
                .as_deref()
                .ok_or_else(|| AppError::bad_request("food_type is required"))?;
            let food = FoodType::from_key(key)
                .ok_or_else(|| AppError::bad_request(format!("unknown food type '{key}'")))?;
            let servings = quantity(request.servings.as_ref(), "servings")?;
            Ok(Activity::Food { food, servings })
        }
    }
}

fn quantity(value: Option<&FormNumber>, field: &str) -> Result<f64, AppError> {
    match value.map(FormNumber::parse) {
        Some(Some(value)) if value.is_finite() && value >= 0.0 => Ok(value),
        Some(_) => Err(AppError::bad_request(format!(
            "{field} must be a non-negative number"
        ))),
        None => Err(AppError::bad_request(format!("{field} is required"))),
    }
}

/// Large enough inputs overflow the product even though each one is finite.
fn estimate_checked(activity: &Activity) -> Result<emissions::CalculationResult, AppError> {
    let result = emissions::estimate(activity);
    if !result.emissions.is_finite() {
        return Err(AppError::bad_request("quantity too large"));
    }
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use std::{path::PathBuf, time::Duration};

    fn request(category: Category) -> CalculateRequest {
        CalculateRequest {
            category,
            mode: None,
            distance: None,
            kwh: None,
            food_type: None,
            servings: None,
        }
    }

    #[test]
    fn builds_transport_activity() {
        let mut req = request(Category::Transport);
        req.mode = Some("bus".into());
        req.distance = Some(FormNumber::Number(10.0));
        assert_eq!(
            activity_from_request(&req).unwrap(),
            Activity::Transport { mode: TransportMode::Bus, distance_km: 10.0 }
        );
    }

    #[test]
    fn rejects_missing_and_negative_quantities() {
        let req = request(Category::Energy);
        let err = activity_from_request(&req).unwrap_err();
        assert_eq!(err.status, StatusCode::BAD_REQUEST);
        assert_eq!(err.message, "kwh is required");

        let mut req = request(Category::Energy);
        req.kwh = Some(FormNumber::Number(-1.0));
        assert!(activity_from_request(&req).is_err());
    }

    #[test]
    fn parses_quantities_typed_as_text() {
        let mut req = request(Category::Transport);
        req.mode = Some("car".into());
        req.distance = Some(FormNumber::Text(" 12 ".into()));
        assert_eq!(
            activity_from_request(&req).unwrap(),
            Activity::Transport { mode: TransportMode::Car, distance_km: 12.0 }
        );

        req.distance = Some(FormNumber::Text("twelve".into()));
        let err = activity_from_request(&req).unwrap_err();
        assert_eq!(err.status, StatusCode::BAD_REQUEST);
        assert_eq!(err.message, "distance must be a non-negative number");
    }

    #[test]
    fn rejects_overflowing_estimate() {
        let mut req = request(Category::Food);
        req.food_type = Some("beef".into());
        req.servings = Some(FormNumber::Number(1e308));
        let activity = activity_from_request(&req).unwrap();

        let err = estimate_checked(&activity).unwrap_err();
        assert_eq!(err.status, StatusCode::BAD_REQUEST);
        assert_eq!(err.message, "quantity too large");

        req.servings = Some(FormNumber::Number(2.0));
        let activity = activity_from_request(&req).unwrap();
        assert!(estimate_checked(&activity).is_ok());
    }

    #[test]
    fn rejects_unknown_food() {
        let mut req = request(Category::Food);
        req.food_type = Some("tofu".into());
        req.servings = Some(FormNumber::Number(1.0));
        let err = activity_from_request(&req).unwrap_err();
        assert_eq!(err.message, "unknown food type 'tofu'");
    }

    fn unwritable_state(store: LocalStore) -> AppState {
        let config = Config {
            port: 0,
            data_path: PathBuf::from("/nonexistent/carbon_tracker/store.json"),
            coach_delay: Duration::ZERO,
        };
        AppState::new(&config, store)
    }

    #[tokio::test]
    async fn failed_write_does_not_award_points() {
        let mut list = challenges::default_challenges();
        let waste = list.iter_mut().find(|c| c.id == 4).unwrap();
        waste.progress = waste.total - 1;
        let mut store = LocalStore::default();
        store.set(CHALLENGES_KEY, &list).unwrap();
        let state = unwritable_state(store.clone());

        let err = progress_challenge(State(state.clone()), Path(4)).await.unwrap_err();
        assert_eq!(err.status, StatusCode::INTERNAL_SERVER_ERROR);

        assert_eq!(*state.store.lock().await, store);
        assert_eq!(challenges::total_points(&*state.store.lock().await), 0);
        assert_eq!(state.notifications.lock().await.unread_count(), 0);
    }

    #[tokio::test]
    async fn failed_write_keeps_learning_progress() {
        let state = unwritable_state(LocalStore::default());
        assert!(complete_module(State(state.clone()), Path(1)).await.is_err());
        assert!(state.store.lock().await.is_empty());
    }
}
