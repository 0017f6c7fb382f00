use crate::{
    PrismClient, PrismError, SilentReporter, Stage, TaskOutcome, TaskStatus,
    task::application::progress::RecordingReporter,
    tests::common::{api_path, create_test_client},
};
use std::time::{Duration, Instant};
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{method, path, query_param},
};

async fn mount_progress(mock_server: &MockServer, status: &str, percentage: u32) {
    Mock::given(method("GET"))
        .and(path(api_path("tasks/task-1")))
        .and(query_param("include_subtasks_info", "false"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "uuid": "task-1",
            "operation_type": "ImageCreate",
            "progress_status": status,
            "percentage_complete": percentage,
            "entity_list": [{"entity_id": "img-1", "entity_type": "Image"}]
        })))
        .up_to_n_times(1)
        .mount(mock_server)
        .await;
}

#[tokio::test]
async fn test_get_task() {
    let mock_server = MockServer::start().await;
    let client = create_test_client(&mock_server);
    mount_progress(&mock_server, "Running", 40).await;

    let progress = client.get_task("task-1").await.unwrap();
    assert_eq!(progress.progress_status, TaskStatus::Running);
    assert_eq!(progress.percentage_complete, 40);
    assert_eq!(progress.first_entity_id(), Some("img-1"));
}

#[tokio::test]
async fn test_await_task_reports_deltas() {
    let mock_server = MockServer::start().await;
    let client = create_test_client(&mock_server);
    for (status, percentage) in [
        ("Queued", 0),
        ("Running", 30),
        ("Running", 30),
        ("Running", 75),
        ("Succeeded", 100),
    ] {
        mount_progress(&mock_server, status, percentage).await;
    }

    let mut reporter = RecordingReporter::default();
    let outcome = client
        .await_task("task-1", Stage::ImageImport, &mut reporter)
        .await
        .unwrap();

    assert!(matches!(outcome, TaskOutcome::Succeeded(ref p) if p.percentage_complete == 100));
    assert_eq!(reporter.stages, vec![Stage::ImageImport]);
    assert_eq!(reporter.deltas, vec![30, 45, 25]);
}

#[tokio::test]
async fn test_await_task_failed() {
    let mock_server = MockServer::start().await;
    let client = create_test_client(&mock_server);
    mount_progress(&mock_server, "Running", 10).await;
    mount_progress(&mock_server, "Failed", 100).await;

    let outcome = client
        .await_task("task-1", Stage::ImageImport, &mut SilentReporter)
        .await
        .unwrap();

    assert!(matches!(outcome, TaskOutcome::Failed(ref p) if p.progress_status == TaskStatus::Failed));
}

#[tokio::test]
async fn test_await_task_announces_stage_for_finished_task() {
    let mock_server = MockServer::start().await;
    let client = create_test_client(&mock_server);
    mount_progress(&mock_server, "Succeeded", 100).await;

    let mut reporter = RecordingReporter::default();
    let outcome = client
        .await_task("task-1", Stage::VmCreation, &mut reporter)
        .await
        .unwrap();

    assert!(matches!(outcome, TaskOutcome::Succeeded(_)));
    assert_eq!(reporter.stages, vec![Stage::VmCreation]);
    assert_eq!(reporter.deltas, vec![100]);
    assert_eq!(reporter.finished, vec![true]);
}

#[tokio::test]
async fn test_await_task_timeout_bounds_slow_poll() {
    let mock_server = MockServer::start().await;
    let address = mock_server.address();
    let client = PrismClient::builder()
        .host(address.ip().to_string())
        .port(address.port())
        .credentials("admin", "nutanix/4u")
        .secure(false)
        .poll_interval(Duration::from_secs(30))
        .poll_timeout(Some(Duration::from_millis(200)))
        .build()
        .unwrap();

    Mock::given(method("GET"))
        .and(path(api_path("tasks/task-1")))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!({
                    "uuid": "task-1",
                    "progress_status": "Running",
                    "percentage_complete": 10
                }))
                .set_delay(Duration::from_secs(10)),
        )
        .mount(&mock_server)
        .await;

    let started = Instant::now();
    let result = client
        .await_task("task-1", Stage::ImageImport, &mut SilentReporter)
        .await;

    assert!(matches!(result, Err(PrismError::Timeout { ref task_id, .. }) if task_id == "task-1"));
    assert!(started.elapsed() < Duration::from_secs(5));
}
