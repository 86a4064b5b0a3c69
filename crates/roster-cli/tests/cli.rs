//! CLI integration tests against a mock student server.

mod common;

use serde_json::json;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use common::{run_cli, run_cli_async, stderr, stdout};

fn students_json() -> serde_json::Value {
    json!([
        {
            "id": 1,
            "firstName": "John",
            "lastName": "Doe",
            "email": "john@x.com",
            "department": "Eng",
            "studentNumber": "S1"
        },
        {
            "id": 2,
            "firstName": "Jane",
            "lastName": "Roe",
            "email": "jane@x.com",
            "department": "Bio",
            "studentNumber": "S2",
            "imageUrl": "https://img.example/jane.png"
        }
    ])
}

#[test]
fn test_rejects_invalid_base_url() {
    let output = run_cli(&["list"], "ftp://school.example");

    assert!(!output.status.success());
    assert!(stderr(&output).contains("Invalid base URL"));
}

#[test]
fn test_rejects_invalid_id() {
    let output = run_cli(&["delete", "zero"], "http://localhost:9");

    assert!(!output.status.success());
    assert!(stderr(&output).contains("Invalid student id"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_list_prints_students() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/student"))
        .respond_with(ResponseTemplate::new(200).set_body_json(students_json()))
        .mount(&server)
        .await;

    let output = run_cli_async(&["list"], &server.uri()).await;

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    let out = stdout(&output);
    assert!(out.contains("[JD] #1 John Doe"));
    assert!(out.contains("[img] #2 Jane Roe"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_list_search_filters() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/student"))
        .respond_with(ResponseTemplate::new(200).set_body_json(students_json()))
        .mount(&server)
        .await;

    let output = run_cli_async(&["list", "--search", "bio", "--json"], &server.uri()).await;

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    let listed: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(listed.as_array().unwrap().len(), 1);
    assert_eq!(listed[0]["firstName"], "Jane");
}

#[tokio::test(flavor = "multi_thread")]
async fn test_list_server_error_fails_with_status() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/student"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let output = run_cli_async(&["list"], &server.uri()).await;

    assert!(!output.status.success());
    assert!(stderr(&output).contains("failed to fetch students: HTTP 500"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_add_posts_draft() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/student"))
        .and(body_json(json!({
            "firstName": "John",
            "lastName": "Doe",
            "email": "john@x.com",
            "department": "Eng",
            "studentNumber": "S1"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(students_json()[0].clone()))
        .expect(1)
        .mount(&server)
        .await;

    let output = run_cli_async(
        &[
            "add",
            "--first-name",
            "John",
            "--last-name",
            "Doe",
            "--email",
            "john@x.com",
            "--department",
            "Eng",
            "--student-number",
            "S1",
        ],
        &server.uri(),
    )
    .await;

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert!(stdout(&output).contains("Created student 1"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_add_blank_name_is_rejected_locally() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/student"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let output = run_cli_async(
        &[
            "add",
            "--first-name",
            " ",
            "--last-name",
            "Doe",
            "--email",
            "",
            "--department",
            "",
            "--student-number",
            "S1",
        ],
        &server.uri(),
    )
    .await;

    assert!(!output.status.success());
    assert!(stderr(&output).contains("first name must not be blank"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_update_merges_fields() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/student/1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(students_json()[0].clone()))
        .mount(&server)
        .await;

    let mut edited = students_json()[0].clone();
    edited["department"] = json!("Physics");

    Mock::given(method("PUT"))
        .and(path("/api/student/1"))
        .and(body_json(edited.clone()))
        .respond_with(ResponseTemplate::new(200).set_body_json(edited))
        .expect(1)
        .mount(&server)
        .await;

    let output = run_cli_async(&["update", "1", "--department", "Physics"], &server.uri()).await;

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert!(stdout(&output).contains("Physics"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_delete_not_found_fails() {
    let server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/api/student/1"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let output = run_cli_async(&["delete", "1"], &server.uri()).await;

    assert!(!output.status.success());
    assert!(stderr(&output).contains("failed to delete student: HTTP 404"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_delete_success() {
    let server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/api/student/2"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let output = run_cli_async(&["delete", "2"], &server.uri()).await;

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert!(stdout(&output).contains("Deleted student 2"));
}
