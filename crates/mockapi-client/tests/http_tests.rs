use mockapi_client::{ApiError, BlogClient, NewTask, ReqwestClient, TaskId, TaskPatch};
use pretty_assertions::assert_eq;
use serde_json::json;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> ReqwestClient {
    ReqwestClient::new(&format!("{}/api/v1/blogs", server.uri())).unwrap()
}

#[tokio::test]
async fn test_list_tasks_in_server_order() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/blogs"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"id": "2", "blogName": "B", "blogImg": "v", "blogContent": "d", "isRead": true},
            {"id": "1", "blogName": "A", "blogImg": "u", "blogContent": "c", "isRead": false},
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let tasks = client_for(&server).list_tasks().await.unwrap();

    let ids: Vec<&str> = tasks.iter().map(|t| t.id.as_str()).collect();
    assert_eq!(ids, vec!["2", "1"]);
    assert!(tasks[0].is_read);
}

#[tokio::test]
async fn test_list_tasks_empty_collection() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/blogs"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&server)
        .await;

    let tasks = client_for(&server).list_tasks().await.unwrap();
    assert!(tasks.is_empty());
}

#[tokio::test]
async fn test_create_task_returns_server_id() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/v1/blogs"))
        .and(body_json(json!({
            "blogName": "A",
            "blogImg": "u",
            "blogContent": "c",
            "isRead": false,
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "id": "42", "blogName": "A", "blogImg": "u", "blogContent": "c", "isRead": false
        })))
        .expect(1)
        .mount(&server)
        .await;

    let created = client_for(&server)
        .create_task(&NewTask::new("A", "u", "c"))
        .await
        .unwrap();

    assert_eq!(created.id, TaskId::new("42"));
    assert_eq!(created.blog_name, "A");
}

#[tokio::test]
async fn test_update_task_sends_partial_body() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/api/v1/blogs/7"))
        .and(body_json(json!({ "isRead": true })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "7", "blogName": "A", "blogImg": "u", "blogContent": "c", "isRead": true
        })))
        .expect(1)
        .mount(&server)
        .await;

    let updated = client_for(&server)
        .update_task(&TaskId::new("7"), &TaskPatch::mark_read())
        .await
        .unwrap();

    assert!(updated.is_read);
    assert_eq!(updated.blog_content, "c");
}

#[tokio::test]
async fn test_delete_task_ignores_echoed_body() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/api/v1/blogs/7"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "7", "blogName": "A", "blogImg": "u", "blogContent": "c", "isRead": true
        })))
        .expect(1)
        .mount(&server)
        .await;

    client_for(&server)
        .delete_task(&TaskId::new("7"))
        .await
        .unwrap();
}

#[tokio::test]
async fn test_not_found_is_structured_status_error() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/api/v1/blogs/missing"))
        .respond_with(ResponseTemplate::new(404).set_body_string("\"Not found\""))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .update_task(&TaskId::new("missing"), &TaskPatch::mark_read())
        .await
        .unwrap_err();

    match &err {
        ApiError::Status {
            status,
            reason,
            body,
        } => {
            assert_eq!(*status, 404);
            assert_eq!(reason, "Not Found");
            assert_eq!(body, "\"Not found\"");
        }
        other => panic!("expected status error, got {other:?}"),
    }
    assert!(err.is_not_found());
}

#[tokio::test]
async fn test_server_error_on_delete() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/api/v1/blogs/1"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .delete_task(&TaskId::new("1"))
        .await
        .unwrap_err();

    assert_eq!(err.status(), Some(500));
    assert_eq!(
        err.to_string(),
        "Request failed with status 500 Internal Server Error: boom"
    );
}

#[tokio::test]
async fn test_malformed_json_is_decode_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/blogs"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let err = client_for(&server).list_tasks().await.unwrap_err();
    assert!(matches!(err, ApiError::Decode(_)));
}

#[tokio::test]
async fn test_unreachable_server_is_network_error() {
    let server = MockServer::start().await;
    let uri = server.uri();
    drop(server);

    let client = ReqwestClient::new(&format!("{uri}/api/v1/blogs")).unwrap();
    let err = client.list_tasks().await.unwrap_err();

    assert!(matches!(err, ApiError::Http(_)));
    assert_eq!(err.status(), None);
}
