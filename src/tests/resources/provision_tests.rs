use crate::{
    ImageType, ProvisionOutcome, Stage,
    task::application::progress::RecordingReporter,
    tests::common::{api_path, create_test_client, sample_request},
};
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{body_partial_json, method, path},
};

async fn mount_container(mock_server: &MockServer, count: u64) {
    let entities = if count == 0 {
        serde_json::json!([])
    } else {
        serde_json::json!([{"storage_container_uuid": "ctr-1"}])
    };
    Mock::given(method("GET"))
        .and(path(api_path("storage_containers")))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "metadata": {"count": count},
            "entities": entities
        })))
        .mount(mock_server)
        .await;
}

async fn mount_task(mock_server: &MockServer, task_id: &str, status: &str, entity: &str) {
    Mock::given(method("GET"))
        .and(path(api_path(&format!("tasks/{}", task_id))))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "progress_status": status,
            "percentage_complete": 100,
            "entity_list": [{"entity_id": entity}]
        })))
        .mount(mock_server)
        .await;
}

#[tokio::test]
async fn test_provision_end_to_end() {
    let mock_server = MockServer::start().await;
    let client = create_test_client(&mock_server);

    mount_container(&mock_server, 1).await;
    Mock::given(method("POST"))
        .and(path(api_path("images")))
        .and(body_partial_json(serde_json::json!({
            "image_type": "ISO_IMAGE",
            "image_import_spec": {"storage_container_uuid": "ctr-1"}
        })))
        .respond_with(
            ResponseTemplate::new(201).set_body_json(serde_json::json!({"task_uuid": "t-img"})),
        )
        .expect(1)
        .mount(&mock_server)
        .await;
    mount_task(&mock_server, "t-img", "Succeeded", "img-1").await;
    Mock::given(method("GET"))
        .and(path(api_path("images/img-1")))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({"vm_disk_id": "disk-9"})),
        )
        .mount(&mock_server)
        .await;
    Mock::given(method("POST"))
        .and(path(api_path("vms/")))
        .and(body_partial_json(serde_json::json!({
            "name": "web-01",
            "storage_container_uuid": "ctr-1",
            "boot": {"disk_address": {"vmdisk_uuid": "disk-9"}}
        })))
        .respond_with(
            ResponseTemplate::new(201).set_body_json(serde_json::json!({"task_uuid": "t-vm"})),
        )
        .expect(1)
        .mount(&mock_server)
        .await;
    mount_task(&mock_server, "t-vm", "Succeeded", "vm-1").await;

    let mut reporter = RecordingReporter::default();
    let outcome = client
        .provision(&sample_request(ImageType::IsoImage), &mut reporter)
        .await
        .unwrap();

    match outcome {
        ProvisionOutcome::Completed {
            container_id,
            image,
            vm_task,
        } => {
            assert_eq!(container_id, "ctr-1");
            assert_eq!(image.vm_disk_id, "disk-9");
            assert_eq!(vm_task.first_entity_id(), Some("vm-1"));
        }
        other => panic!("expected completion, got {:?}", other),
    }
    assert_eq!(reporter.stages, vec![Stage::ImageImport, Stage::VmCreation]);
    assert_eq!(reporter.finished, vec![true, true]);
}

#[tokio::test]
async fn test_provision_without_container_skips_import() {
    let mock_server = MockServer::start().await;
    let client = create_test_client(&mock_server);

    mount_container(&mock_server, 0).await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(201))
        .expect(0)
        .mount(&mock_server)
        .await;

    let mut reporter = RecordingReporter::default();
    let outcome = client
        .provision(&sample_request(ImageType::IsoImage), &mut reporter)
        .await
        .unwrap();

    assert!(matches!(outcome, ProvisionOutcome::ContainerNotFound { .. }));
}

#[tokio::test]
async fn test_provision_failed_import_skips_vm_creation() {
    let mock_server = MockServer::start().await;
    let client = create_test_client(&mock_server);

    mount_container(&mock_server, 1).await;
    Mock::given(method("POST"))
        .and(path(api_path("images")))
        .respond_with(
            ResponseTemplate::new(201).set_body_json(serde_json::json!({"task_uuid": "t-img"})),
        )
        .mount(&mock_server)
        .await;
    mount_task(&mock_server, "t-img", "Failed", "img-1").await;
    Mock::given(method("POST"))
        .and(path(api_path("vms/")))
        .respond_with(ResponseTemplate::new(201))
        .expect(0)
        .mount(&mock_server)
        .await;

    let mut reporter = RecordingReporter::default();
    let outcome = client
        .provision(&sample_request(ImageType::DiskImage), &mut reporter)
        .await
        .unwrap();

    assert!(matches!(outcome, ProvisionOutcome::ImageImportFailed { .. }));
    assert_eq!(reporter.stages, vec![Stage::ImageImport]);
}
