use crate::{
    ImageType,
    tests::common::{api_path, create_test_client},
};
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{body_json, method, path},
};

#[tokio::test]
async fn test_import_disk_image() {
    let mock_server = MockServer::start().await;
    let client = create_test_client(&mock_server);

    Mock::given(method("POST"))
        .and(path(api_path("images")))
        .and(body_json(serde_json::json!({
            "image_import_spec": {
                "storage_container_uuid": "ctr-1",
                "url": "http://mirror.example.com/disk.qcow2"
            },
            "image_type": "DISK_IMAGE",
            "name": "centos"
        })))
        .respond_with(
            ResponseTemplate::new(201).set_body_json(serde_json::json!({"task_uuid": "task-img"})),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let task = client
        .import_image(
            "ctr-1",
            "centos",
            "http://mirror.example.com/disk.qcow2",
            ImageType::DiskImage,
        )
        .await
        .unwrap();
    assert_eq!(task, "task-img");
}

#[tokio::test]
async fn test_import_iso_image() {
    let mock_server = MockServer::start().await;
    let client = create_test_client(&mock_server);

    Mock::given(method("POST"))
        .and(path(api_path("images")))
        .and(body_json(serde_json::json!({
            "image_import_spec": {
                "storage_container_uuid": "ctr-1",
                "url": "http://mirror.example.com/ubuntu.iso"
            },
            "image_type": "ISO_IMAGE",
            "name": "ubuntu"
        })))
        .respond_with(
            ResponseTemplate::new(201).set_body_json(serde_json::json!({"task_uuid": "task-iso"})),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let task = client
        .import_image(
            "ctr-1",
            "ubuntu",
            "http://mirror.example.com/ubuntu.iso",
            ImageType::IsoImage,
        )
        .await
        .unwrap();
    assert_eq!(task, "task-iso");
}

#[tokio::test]
async fn test_get_image() {
    let mock_server = MockServer::start().await;
    let client = create_test_client(&mock_server);

    Mock::given(method("GET"))
        .and(path(api_path("images/img-1")))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "uuid": "img-1",
            "name": "ubuntu",
            "image_type": "ISO_IMAGE",
            "image_state": "ACTIVE",
            "vm_disk_id": "disk-9",
            "vm_disk_size": 1073741824_u64,
            "storage_container_uuid": "ctr-1"
        })))
        .mount(&mock_server)
        .await;

    let image = client.get_image("img-1").await.unwrap();
    assert_eq!(image.vm_disk_id, "disk-9");
    assert_eq!(image.image_type, Some(ImageType::IsoImage));
    assert_eq!(image.vm_disk_size, Some(1073741824));
}

#[tokio::test]
async fn test_get_image_not_found() {
    let mock_server = MockServer::start().await;
    let client = create_test_client(&mock_server);

    Mock::given(method("GET"))
        .and(path(api_path("images/nope")))
        .respond_with(ResponseTemplate::new(404).set_body_json(serde_json::json!({
            "message": "Image nope does not exist"
        })))
        .mount(&mock_server)
        .await;

    let result = client.get_image("nope").await;
    assert!(matches!(result, Err(crate::PrismError::Connection(_))));
}
