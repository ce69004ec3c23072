use once_cell::sync::Lazy;
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use serde_json::{json, Value};
use std::net::TcpListener;
use std::process::{Child, Command, Stdio};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::Mutex;
use tokio::time::sleep;

#[derive(Debug, Deserialize)]
struct CalculationResult {
    emissions: f64,
    category: String,
    details: String,
}

#[derive(Debug, Deserialize)]
struct CalculateResponse {
    result: CalculationResult,
    zero_emissions: bool,
    recommendations: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct CoachResponse {
    reply: String,
}

#[derive(Debug, Deserialize)]
struct Challenge {
    id: u32,
    progress: u32,
    status: String,
}

#[derive(Debug, Deserialize)]
struct ChallengesResponse {
    challenges: Vec<Challenge>,
    total_points: u64,
}

#[derive(Debug, Deserialize)]
struct Notification {
    id: u64,
    title: String,
    read: bool,
}

#[derive(Debug, Deserialize)]
struct NotificationsResponse {
    notifications: Vec<Notification>,
    unread_count: usize,
}

struct TestServer {
    base_url: String,
    child: Child,
}

impl Drop for TestServer {
    fn drop(&mut self) {
        let _ = self.child.kill();
        let _ = self.child.wait();
    }
}

static TEST_LOCK: Lazy<Mutex<()>> = Lazy::new(|| Mutex::new(()));
static SERVER: Lazy<Mutex<Option<Arc<TestServer>>>> = Lazy::new(|| Mutex::new(None));

#[cfg(unix)]
mod cleanup {
    use std::sync::atomic::{AtomicI32, Ordering};
    use std::sync::Once;

    static REGISTER: Once = Once::new();
    static PID: AtomicI32 = AtomicI32::new(0);

    pub fn register(pid: u32) {
        REGISTER.call_once(|| {
            PID.store(pid as i32, Ordering::SeqCst);
            unsafe {
                libc::atexit(on_exit);
            }
        });
    }

    extern "C" fn on_exit() {
        let pid = PID.load(Ordering::SeqCst);
        if pid > 0 {
            unsafe {
                libc::kill(pid, libc::SIGTERM);
            }
        }
    }
}

fn pick_free_port() -> u16 {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind random port");
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    port
}

fn unique_data_path() -> String {
    let nanos = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap()
        .as_nanos();
    let mut path = std::env::temp_dir();
    path.push(format!("carbon_tracker_http_{}_{}.json", std::process::id(), nanos));
    path.to_string_lossy().to_string()
}

async fn wait_until_ready(base_url: &str) {
    let client = Client::new();
    let deadline = Instant::now() + Duration::from_secs(3);
    loop {
        if let Ok(resp) = client.get(format!("{base_url}/api/leaderboard")).send().await {
            if resp.status().is_success() {
                return;
            }
        }
        if Instant::now() > deadline {
            panic!("server did not become ready");
        }
        sleep(Duration::from_millis(100)).await;
    }
}

async fn spawn_server() -> TestServer {
    let port = pick_free_port();
    let data_path = unique_data_path();
    let child = Command::new(env!("CARGO_BIN_EXE_carbon_tracker"))
        .env("PORT", port.to_string())
        .env("APP_DATA_PATH", data_path)
        .env("COACH_REPLY_DELAY_MS", "0")
        .env("RUST_LOG", "info")
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .spawn()
        .expect("failed to spawn server");

    #[cfg(unix)]
    cleanup::register(child.id());

    let base_url = format!("http://127.0.0.1:{port}");
    wait_until_ready(&base_url).await;

    TestServer { base_url, child }
}

async fn shared_server() -> Arc<TestServer> {
    let mut guard = SERVER.lock().await;
    if let Some(server) = guard.as_ref() {
        return Arc::clone(server);
    }
    let server = Arc::new(spawn_server().await);
    *guard = Some(Arc::clone(&server));
    server
}

async fn get_json<T: for<'de> Deserialize<'de>>(client: &Client, url: String) -> T {
    client.get(url).send().await.unwrap().json().await.unwrap()
}

async fn post_json<T: for<'de> Deserialize<'de>>(client: &Client, url: String, body: Value) -> T {
    let response = client.post(url).json(&body).send().await.unwrap();
    assert!(response.status().is_success(), "status {}", response.status());
    response.json().await.unwrap()
}

#[tokio::test]
async fn http_calculate_transport_adds_notification() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();

    let before: NotificationsResponse =
        get_json(&client, format!("{}/api/notifications", server.base_url)).await;

    let calc: CalculateResponse = post_json(
        &client,
        format!("{}/api/calculate", server.base_url),
        json!({ "category": "transport", "mode": "car", "distance": 50 }),
    )
    .await;

    assert!((calc.result.emissions - 9.6).abs() < 1e-9);
    assert_eq!(calc.result.category, "transport");
    assert_eq!(calc.result.details, "50 km by car");
    assert!(!calc.zero_emissions);
    assert!(calc.recommendations.iter().any(|tip| tip.contains("electric vehicle")));

    let after: NotificationsResponse =
        get_json(&client, format!("{}/api/notifications", server.base_url)).await;
    assert_eq!(after.unread_count, before.unread_count + 1);
    assert_eq!(after.notifications[0].title, "Calculation Complete");
    assert!(!after.notifications[0].read);
}

#[tokio::test]
async fn http_calculate_walk_is_zero() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();

    let calc: CalculateResponse = post_json(
        &client,
        format!("{}/api/calculate", server.base_url),
        json!({ "category": "transport", "mode": "walk", "distance": 3 }),
    )
    .await;
    assert_eq!(calc.result.emissions, 0.0);
    assert!(calc.zero_emissions);
}

#[tokio::test]
async fn http_calculate_accepts_numeric_text() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();

    let calc: CalculateResponse = post_json(
        &client,
        format!("{}/api/calculate", server.base_url),
        json!({ "category": "transport", "mode": "car", "distance": "12" }),
    )
    .await;
    assert!((calc.result.emissions - 2.304).abs() < 1e-9);
    assert_eq!(calc.result.details, "12 km by car");
}

#[tokio::test]
async fn http_calculate_rejects_bad_input() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();

    for body in [
        json!({ "category": "energy", "kwh": -3 }),
        json!({ "category": "food", "food_type": "tofu", "servings": 1 }),
        json!({ "category": "transport", "distance": 4 }),
        json!({ "category": "transport", "mode": "car", "distance": "twelve" }),
        json!({ "category": "transport", "mode": "car", "distance": [12] }),
        json!({ "category": "plane", "distance": 3 }),
        json!({ "category": "food", "food_type": "beef", "servings": 1e308 }),
    ] {
        let response = client
            .post(format!("{}/api/calculate", server.base_url))
            .json(&body)
            .send()
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "body: {body}");
    }
}

#[tokio::test]
async fn http_coach_prefers_car_comparison() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();

    let compare: CoachResponse = post_json(
        &client,
        format!("{}/api/coach", server.base_url),
        json!({ "message": "compare car vs electric car" }),
    )
    .await;
    assert!(compare.reply.contains("Let me explain car emissions"));

    let weather: CoachResponse = post_json(
        &client,
        format!("{}/api/coach", server.base_url),
        json!({ "message": "what's the weather tomorrow" }),
    )
    .await;
    assert!(weather.reply.contains("not sure how to help"));

    let empty = client
        .post(format!("{}/api/coach", server.base_url))
        .json(&json!({ "message": "   " }))
        .send()
        .await
        .unwrap();
    assert_eq!(empty.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn http_challenge_completion_awards_points() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();

    let before: ChallengesResponse =
        get_json(&client, format!("{}/api/challenges", server.base_url)).await;
    let waste = before.challenges.iter().find(|c| c.id == 4).unwrap();
    assert_eq!(waste.status, "active");
    assert_eq!(waste.progress, 0);

    let mut latest = before;
    for _ in 0..3 {
        latest = post_json(
            &client,
            format!("{}/api/challenges/4/progress", server.base_url),
            json!({}),
        )
        .await;
    }
    let waste = latest.challenges.iter().find(|c| c.id == 4).unwrap();
    assert_eq!(waste.status, "completed");
    assert_eq!(latest.total_points, 40);

    let notes: NotificationsResponse =
        get_json(&client, format!("{}/api/notifications", server.base_url)).await;
    assert!(notes.notifications[0].title.starts_with("Challenge Completed!"));

    let restarted: ChallengesResponse = post_json(
        &client,
        format!("{}/api/challenges/4/reset", server.base_url),
        json!({}),
    )
    .await;
    let waste = restarted.challenges.iter().find(|c| c.id == 4).unwrap();
    assert_eq!(waste.status, "active");
    assert_eq!(waste.progress, 0);
    assert_eq!(restarted.total_points, 40);

    let missing = client
        .post(format!("{}/api/challenges/42/progress", server.base_url))
        .send()
        .await
        .unwrap();
    assert_eq!(missing.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn http_quiz_marks_learning_progress() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();

    let short = client
        .post(format!("{}/api/learn/quiz", server.base_url))
        .json(&json!({ "answers": [3] }))
        .send()
        .await
        .unwrap();
    assert_eq!(short.status(), StatusCode::BAD_REQUEST);

    let result: Value = post_json(
        &client,
        format!("{}/api/learn/quiz", server.base_url),
        json!({ "answers": [3, 1, 0] }),
    )
    .await;
    assert_eq!(result["correct"], 2);
    assert_eq!(result["total"], 3);

    let learn: Value = get_json(&client, format!("{}/api/learn", server.base_url)).await;
    assert_eq!(learn["quiz_completed"], true);
    assert_eq!(learn["modules"].as_array().unwrap().len(), 6);

    let done: Value = post_json(
        &client,
        format!("{}/api/learn/modules/2/complete", server.base_url),
        json!({}),
    )
    .await;
    assert_eq!(done["modules"][1]["completed"], true);
}

#[tokio::test]
async fn http_notifications_can_be_cleared() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();

    let _: CalculateResponse = post_json(
        &client,
        format!("{}/api/calculate", server.base_url),
        json!({ "category": "energy", "kwh": 10 }),
    )
    .await;

    let notes: NotificationsResponse =
        get_json(&client, format!("{}/api/notifications", server.base_url)).await;
    let newest = notes.notifications[0].id;
    let read = client
        .post(format!("{}/api/notifications/{newest}/read", server.base_url))
        .send()
        .await
        .unwrap();
    assert_eq!(read.status(), StatusCode::NO_CONTENT);

    let cleared = client
        .delete(format!("{}/api/notifications", server.base_url))
        .send()
        .await
        .unwrap();
    assert_eq!(cleared.status(), StatusCode::NO_CONTENT);

    let notes: NotificationsResponse =
        get_json(&client, format!("{}/api/notifications", server.base_url)).await;
    assert!(notes.notifications.is_empty());
    assert_eq!(notes.unread_count, 0);
}

#[tokio::test]
async fn http_index_serves_page() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();

    let body = client
        .get(format!("{}/", server.base_url))
        .send()
        .await
        .unwrap()
        .text()
        .await
        .unwrap();
    assert!(body.contains("<title>Carbon Tracker</title>"));
    assert!(body.contains("Eco-Coach"));
}
