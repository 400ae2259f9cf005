//
//  nifty-cli
//  tests/api_test.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Integration tests for the Nifty API client against a mock HTTP server.

use clap::ValueEnum;
use mockito::{Matcher, Server};
use reqwest::StatusCode;
use serde_json::{json, Map, Value};

use nifty_cli::api::options::{
    Apps, Labels, ListResource, Members, Milestones, Projects, TaskGroups, Tasks, Templates,
};
use nifty_cli::api::types::{
    AssignTaskRequest, CreateProjectRequest, CreateTaskRequest, CreateWebhookRequest,
    SendMessageRequest,
};
use nifty_cli::api::{ApiError, NiftyClient, RequestOptions};
use nifty_cli::auth::Credential;
use nifty_cli::cli::Action;
use nifty_cli::config::ClientConfig;

const TOKEN: &str = "test-access-token";

fn client_for(server: &Server) -> NiftyClient {
    NiftyClient::with_config(ClientConfig::new(&server.url()).unwrap()).unwrap()
}

fn credential() -> Credential {
    Credential::bearer(TOKEN).unwrap()
}

fn query(pairs: &[(&str, &str)]) -> Matcher {
    Matcher::AllOf(
        pairs
            .iter()
            .map(|(k, v)| Matcher::UrlEncoded(k.to_string(), v.to_string()))
            .collect(),
    )
}

fn object(value: Value) -> Map<String, Value> {
    value.as_object().cloned().unwrap()
}

#[tokio::test]
async fn test_list_apps_sends_bearer_and_returns_raw_body() {
    let mut server = Server::new_async().await;
    let body = json!({"apps": [{"id": "a1", "name": "Zapier"}], "total": 1});
    let mock = server
        .mock("GET", "/apps")
        .match_header("authorization", "Bearer test-access-token")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(body.to_string())
        .create_async()
        .await;

    let response = client_for(&server)
        .list_apps(&credential(), RequestOptions::new())
        .await
        .unwrap();

    assert_eq!(response, body);
    mock.assert_async().await;
}

#[tokio::test]
async fn test_app_options_use_page_offset() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/apps")
        .match_header("authorization", "Bearer test-access-token")
        .match_query(query(&[("limit", "100"), ("offset", "200")]))
        .with_status(200)
        .with_body(
            json!({"apps": [
                {"id": "a2", "name": "Second"},
                {"id": "a1", "name": "First"}
            ]})
            .to_string(),
        )
        .create_async()
        .await;

    let options = Apps
        .options(&client_for(&server), &credential(), 2, None)
        .await
        .unwrap();

    assert_eq!(options.len(), 2);
    assert_eq!(options[0].value, "a2");
    assert_eq!(options[0].label, "Second");
    assert_eq!(options[1].value, "a1");
    mock.assert_async().await;
}

#[tokio::test]
async fn test_configured_page_size_drives_offset() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/projects")
        .match_query(query(&[("limit", "25"), ("offset", "75")]))
        .with_status(200)
        .with_body(json!({"projects": [{"id": "p1", "name": "Website"}]}).to_string())
        .create_async()
        .await;

    let config = ClientConfig::new(&server.url())
        .unwrap()
        .with_page_size(25)
        .unwrap();
    let client = NiftyClient::with_config(config).unwrap();

    let options = Projects.options(&client, &credential(), 3, None).await.unwrap();
    assert_eq!(options[0].label, "Website");
    mock.assert_async().await;
}

#[tokio::test]
async fn test_member_options_read_bare_array() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/members")
        .match_query(query(&[("limit", "100"), ("offset", "0")]))
        .with_status(200)
        .with_body(json!([{"id": "m1", "name": "Ada", "email": "ada@example.com"}]).to_string())
        .create_async()
        .await;

    let options = Members
        .options(&client_for(&server), &credential(), 0, None)
        .await
        .unwrap();

    assert_eq!(options.len(), 1);
    assert_eq!(options[0].value, "m1");
    assert_eq!(options[0].label, "Ada");
    mock.assert_async().await;
}

#[tokio::test]
async fn test_task_group_options_forward_project_and_tolerate_null_items() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/taskgroups")
        .match_query(query(&[
            ("limit", "100"),
            ("offset", "100"),
            ("project_id", "proj-7"),
            ("archived", "false"),
        ]))
        .with_status(200)
        .with_body(json!({"items": null}).to_string())
        .create_async()
        .await;

    let options = TaskGroups
        .options(&client_for(&server), &credential(), 1, Some("proj-7"))
        .await
        .unwrap();

    assert!(options.is_empty());
    mock.assert_async().await;
}

#[tokio::test]
async fn test_milestone_options_forward_project() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/milestones")
        .match_header("authorization", "Bearer test-access-token")
        .match_query(query(&[
            ("limit", "100"),
            ("offset", "100"),
            ("project_id", "p 1"),
        ]))
        .with_status(200)
        .with_body(json!({"items": [{"id": "ms1", "name": "Beta"}]}).to_string())
        .create_async()
        .await;

    let options = Milestones
        .options(&client_for(&server), &credential(), 1, Some("p 1"))
        .await
        .unwrap();

    assert_eq!(options.len(), 1);
    assert_eq!(options[0].value, "ms1");
    assert_eq!(options[0].label, "Beta");
    mock.assert_async().await;
}

#[tokio::test]
async fn test_malformed_records_do_not_drop_the_page() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", "/projects")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body(
            json!({"projects": [
                {"id": "p1", "name": null},
                {"id": "p2", "name": "ok"},
                {"id": 3, "name": "Numeric"},
                {"name": "no id"}
            ]})
            .to_string(),
        )
        .create_async()
        .await;

    let options = Projects
        .options(&client_for(&server), &credential(), 0, None)
        .await
        .unwrap();

    let pairs: Vec<(&str, &str)> = options
        .iter()
        .map(|o| (o.value.as_str(), o.label.as_str()))
        .collect();
    assert_eq!(pairs, vec![("p1", "p1"), ("p2", "ok"), ("3", "Numeric")]);
}

#[tokio::test]
async fn test_task_options_forward_project() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/tasks")
        .match_query(query(&[("project_id", "proj-1")]))
        .with_status(200)
        .with_body(json!({"tasks": [{"id": "t1", "name": "Write docs"}]}).to_string())
        .create_async()
        .await;

    let options = Tasks
        .options(&client_for(&server), &credential(), 0, Some("proj-1"))
        .await
        .unwrap();

    assert_eq!(options[0].value, "t1");
    mock.assert_async().await;
}

#[tokio::test]
async fn test_template_and_label_filters() {
    let mut server = Server::new_async().await;
    let templates = server
        .mock("GET", "/templates")
        .match_query(query(&[("type", "project")]))
        .with_status(200)
        .with_body(json!({"items": [{"id": "tpl", "name": "Sprint"}]}).to_string())
        .create_async()
        .await;
    let labels = server
        .mock("GET", "/labels")
        .match_query(query(&[("type", "others")]))
        .with_status(200)
        .with_body(json!({"items": [{"id": "l1", "name": "Bug"}]}).to_string())
        .create_async()
        .await;

    let client = client_for(&server);
    let template_options = Templates.options(&client, &credential(), 0, None).await.unwrap();
    let label_options = Labels.options(&client, &credential(), 0, None).await.unwrap();

    assert_eq!(template_options[0].label, "Sprint");
    assert_eq!(label_options[0].label, "Bug");
    templates.assert_async().await;
    labels.assert_async().await;
}

#[tokio::test]
async fn test_milestone_options_without_project_send_nothing() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/milestones")
        .expect(0)
        .create_async()
        .await;

    let err = Milestones
        .options(&client_for(&server), &credential(), 0, None)
        .await
        .unwrap_err();

    assert!(matches!(err, ApiError::MissingParent { .. }));
    mock.assert_async().await;
}

#[tokio::test]
async fn test_delete_hook_sends_delete_without_body() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("DELETE", "/webhooks/hook-42")
        .match_header("authorization", "Bearer test-access-token")
        .match_body(Matcher::Exact(String::new()))
        .with_status(204)
        .create_async()
        .await;

    let response = client_for(&server)
        .delete_hook(&credential(), "hook-42")
        .await
        .unwrap();

    assert_eq!(response, Value::Null);
    mock.assert_async().await;
}

#[tokio::test]
async fn test_assign_task_moves_task_id_into_path() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("PUT", "/tasks/task-9/assignees")
        .match_header("authorization", "Bearer test-access-token")
        .match_body(Matcher::Json(json!({"assignees": ["m1", "m2"]})))
        .with_status(200)
        .with_body(json!({"id": "task-9", "assignees": ["m1", "m2"]}).to_string())
        .create_async()
        .await;

    let input = object(json!({"taskId": "task-9", "assignees": ["m1", "m2"]}));
    let response = Action::AssignTask
        .execute(&client_for(&server), &credential(), input, Vec::new())
        .await
        .unwrap();

    assert_eq!(response["id"], "task-9");
    mock.assert_async().await;
}

#[tokio::test]
async fn test_delete_hook_action_reads_hook_id() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("DELETE", "/webhooks/h1")
        .with_status(200)
        .with_body("{}")
        .create_async()
        .await;

    let input = object(json!({"hookId": "h1"}));
    Action::DeleteHook
        .execute(&client_for(&server), &credential(), input, Vec::new())
        .await
        .unwrap();

    mock.assert_async().await;
}

#[tokio::test]
async fn test_create_task_forwards_body_as_is() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/tasks")
        .match_header("authorization", "Bearer test-access-token")
        .match_header("content-type", "application/json")
        .match_body(Matcher::Json(json!({
            "name": "Write docs",
            "task_group_id": "tg-1",
            "assignees": ["m1"]
        })))
        .with_status(201)
        .with_body(json!({"id": "t-new", "name": "Write docs"}).to_string())
        .create_async()
        .await;

    let payload = CreateTaskRequest {
        name: "Write docs".to_string(),
        task_group_id: "tg-1".to_string(),
        assignees: vec!["m1".to_string()],
        ..Default::default()
    };
    let response = client_for(&server)
        .create_task(&credential(), RequestOptions::new().json(&payload).unwrap())
        .await
        .unwrap();

    assert_eq!(response["id"], "t-new");
    mock.assert_async().await;
}

#[tokio::test]
async fn test_typed_payloads_are_sent_through_actions() {
    let mut server = Server::new_async().await;
    let hook = server
        .mock("POST", "/webhooks")
        .match_body(Matcher::Json(json!({
            "endpoint": "https://hooks.example.com/nifty",
            "events": ["taskCreated"]
        })))
        .with_status(200)
        .with_body("{}")
        .create_async()
        .await;
    let project = server
        .mock("POST", "/projects")
        .match_body(Matcher::Json(json!({"name": "Launch", "template_id": "tpl-1"})))
        .with_status(200)
        .with_body("{}")
        .create_async()
        .await;
    let message = server
        .mock("POST", "/messages")
        .match_body(Matcher::Json(json!({"message": "hi", "project_id": "p1"})))
        .with_status(200)
        .with_body("{}")
        .create_async()
        .await;
    let assign = server
        .mock("PUT", "/tasks/t1/assignees")
        .match_body(Matcher::Json(json!({"assignees": ["m1"]})))
        .with_status(200)
        .with_body("{}")
        .create_async()
        .await;

    let client = client_for(&server);
    let cred = credential();

    let webhook = CreateWebhookRequest {
        endpoint: "https://hooks.example.com/nifty".to_string(),
        events: vec!["taskCreated".to_string()],
        ..Default::default()
    };
    client
        .create_hook(&cred, RequestOptions::new().json(&webhook).unwrap())
        .await
        .unwrap();

    let new_project = CreateProjectRequest {
        name: "Launch".to_string(),
        template_id: Some("tpl-1".to_string()),
        ..Default::default()
    };
    client
        .create_project(&cred, RequestOptions::new().json(&new_project).unwrap())
        .await
        .unwrap();

    let chat = SendMessageRequest {
        message: "hi".to_string(),
        project_id: Some("p1".to_string()),
        ..Default::default()
    };
    client
        .send_message(&cred, RequestOptions::new().json(&chat).unwrap())
        .await
        .unwrap();

    let assignees = AssignTaskRequest {
        assignees: vec!["m1".to_string()],
    };
    client
        .assign_task(&cred, "t1", RequestOptions::new().json(&assignees).unwrap())
        .await
        .unwrap();

    hook.assert_async().await;
    project.assert_async().await;
    message.assert_async().await;
    assign.assert_async().await;
}

#[tokio::test]
async fn test_every_action_uses_its_verb_and_path() {
    let cases: &[(Action, &str, &str, Value)] = &[
        (Action::ListApps, "GET", "/apps", json!({})),
        (Action::ListChats, "GET", "/chats", json!({})),
        (Action::ListDocs, "GET", "/docs", json!({})),
        (Action::ListFiles, "GET", "/files", json!({})),
        (Action::ListMembers, "GET", "/members", json!({})),
        (Action::ListMessages, "GET", "/messages", json!({})),
        (Action::ListProjects, "GET", "/projects", json!({})),
        (Action::ListTasks, "GET", "/tasks", json!({})),
        (Action::ListMilestones, "GET", "/milestones", json!({})),
        (Action::ListTaskGroups, "GET", "/taskgroups", json!({})),
        (Action::ListTemplates, "GET", "/templates", json!({})),
        (Action::ListLabels, "GET", "/labels", json!({})),
        (Action::CreateHook, "POST", "/webhooks", json!({"endpoint": "https://x"})),
        (Action::DeleteHook, "DELETE", "/webhooks/h1", json!({"hookId": "h1"})),
        (Action::CreateProject, "POST", "/projects", json!({"name": "P"})),
        (Action::AssignTask, "PUT", "/tasks/t1/assignees", json!({"taskId": "t1"})),
        (Action::SendMessage, "POST", "/messages", json!({"message": "hi"})),
        (Action::CreateTask, "POST", "/tasks", json!({"name": "T"})),
    ];
    assert_eq!(cases.len(), Action::value_variants().len());

    for (action, verb, path, input) in cases {
        let mut server = Server::new_async().await;
        let mock = server
            .mock(*verb, *path)
            .match_header("authorization", "Bearer test-access-token")
            .with_status(200)
            .with_body("{}")
            .expect(1)
            .create_async()
            .await;

        assert_eq!(action.method().to_string(), *verb);
        action
            .execute(&client_for(&server), &credential(), object(input.clone()), Vec::new())
            .await
            .unwrap();

        mock.assert_async().await;
    }
}

#[tokio::test]
async fn test_unauthorized_response_is_surfaced_unchanged() {
    let mut server = Server::new_async().await;
    let body = r#"{"message":"Token expired"}"#;
    server
        .mock("GET", "/projects")
        .with_status(401)
        .with_body(body)
        .create_async()
        .await;

    let err = client_for(&server)
        .list_projects(&credential(), RequestOptions::new())
        .await
        .unwrap_err();

    assert!(err.is_auth_error());
    match err {
        ApiError::Status { status, body: raw } => {
            assert_eq!(status, StatusCode::UNAUTHORIZED);
            assert_eq!(raw, body);
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn test_validation_error_is_not_retried() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/tasks")
        .with_status(422)
        .with_body(r#"{"message":"task_group_id is required"}"#)
        .expect(1)
        .create_async()
        .await;

    let err = client_for(&server)
        .create_task(&credential(), RequestOptions::new().body(json!({"name": "x"})))
        .await
        .unwrap_err();

    assert_eq!(err.status(), Some(StatusCode::UNPROCESSABLE_ENTITY));
    assert!(err.to_string().contains("task_group_id is required"));
    mock.assert_async().await;
}

#[tokio::test]
async fn test_resolver_propagates_server_errors() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", "/labels")
        .match_query(Matcher::Any)
        .with_status(500)
        .with_body("internal")
        .create_async()
        .await;

    let err = Labels
        .options(&client_for(&server), &credential(), 0, None)
        .await
        .unwrap_err();

    assert_eq!(err.status(), Some(StatusCode::INTERNAL_SERVER_ERROR));
}

#[tokio::test]
async fn test_transport_error_is_network_variant() {
    let config = ClientConfig::new("http://127.0.0.1:1").unwrap();
    let client = NiftyClient::with_config(config).unwrap();

    let err = client
        .list_docs(&credential(), RequestOptions::new())
        .await
        .unwrap_err();

    assert!(matches!(err, ApiError::Network(_)));
}

#[tokio::test]
async fn test_non_json_success_body_is_decode_error() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", "/files")
        .with_status(200)
        .with_body("<html>")
        .create_async()
        .await;

    let err = client_for(&server)
        .list_files(&credential(), RequestOptions::new())
        .await
        .unwrap_err();

    assert!(matches!(err, ApiError::Decode(_)));
}
