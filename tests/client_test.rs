mod common;

use activity_roster::{RosterClient, RosterError};
use anyhow::Result;
use httpmock::prelude::*;
use tokio_test::{assert_err, assert_ok};

#[tokio::test]
async fn test_client_lists_activities_in_order() -> Result<()> {
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(GET).path("/activities");
        then.status(200)
            .header("Content-Type", "application/json")
            .body(
                r#"{
                    "Tennis Club": {"description": "d", "schedule": "s", "max_participants": 10, "participants": []},
                    "Art Studio": {"description": "d", "schedule": "s", "max_participants": 16, "participants": ["noah@mergington.edu"]}
                }"#,
            );
    });

    let client = RosterClient::new(&server.base_url())?;
    let snapshot = client.list_activities().await?;

    api_mock.assert();
    let names: Vec<&str> = snapshot.names().collect();
    assert_eq!(names, vec!["Tennis Club", "Art Studio"]);
    assert_eq!(
        snapshot.get("Art Studio").unwrap().participants,
        vec!["noah@mergington.edu"]
    );
    Ok(())
}

#[tokio::test]
async fn test_client_signup_sends_email_query() -> Result<()> {
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(POST)
            .path_contains("/signup")
            .query_param("email", "newstudent@mergington.edu");
        then.status(200).json_body(serde_json::json!({
            "message": "Signed up newstudent@mergington.edu for Chess Club"
        }));
    });

    let client = RosterClient::new(&server.base_url())?;
    let message = client
        .signup("Chess Club", "newstudent@mergington.edu")
        .await?;

    api_mock.assert();
    assert!(message.contains("newstudent@mergington.edu"));
    Ok(())
}

#[tokio::test]
async fn test_client_maps_error_details() -> Result<()> {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path_contains("/signup");
        then.status(400).json_body(serde_json::json!({
            "detail": "Student is already signed up for this activity"
        }));
    });
    server.mock(|when, then| {
        when.method(DELETE).path_contains("/unregister");
        then.status(404)
            .json_body(serde_json::json!({ "detail": "Activity not found" }));
    });

    let client = RosterClient::new(&server.base_url())?;

    let err = assert_err!(client.signup("Chess Club", "michael@mergington.edu").await);
    assert!(matches!(err, RosterError::AlreadyEnrolled { .. }));

    let err = assert_err!(client.unregister("Nowhere", "a@b.c").await);
    assert!(matches!(err, RosterError::NotFound { ref activity } if activity == "Nowhere"));
    Ok(())
}

#[tokio::test]
async fn test_client_reports_unexpected_status() -> Result<()> {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/activities");
        then.status(503).body("maintenance");
    });

    let client = RosterClient::new(&server.base_url())?;
    let err = assert_err!(client.list_activities().await);
    match err {
        RosterError::Api { status, detail } => {
            assert_eq!(status, 503);
            assert_eq!(detail, "maintenance");
        }
        other => panic!("unexpected error: {:?}", other),
    }
    Ok(())
}

#[tokio::test]
async fn test_client_against_real_server() -> Result<()> {
    let server = common::spawn_server().await;
    let client = RosterClient::new(&server.base_url)?;

    let message = assert_ok!(client.signup("Science Club", "curie@mergington.edu").await);
    assert!(message.contains("Science Club"));

    let err = assert_err!(client.unregister("Science Club", "CURIE@mergington.edu").await);
    assert!(matches!(err, RosterError::NotEnrolled { .. }));

    assert_ok!(client.unregister("Science Club", "curie@mergington.edu").await);
    let snapshot = client.list_activities().await?;
    assert_eq!(snapshot.len(), 9);
    assert_eq!(snapshot.get("Science Club").unwrap().participants.len(), 2);
    Ok(())
}
