//! Integration tests for the SData job client.
//!
//! These tests verify trigger payloads, execution polling, and that the job
//! client propagates the resource client's errors unchanged.

use std::collections::BTreeMap;

use sdata::{JobClient, SdataClient, SdataConfig, SdataError, SdataUri};
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path, path_regex, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn create_test_client(server: &MockServer) -> SdataClient {
    let config = SdataConfig::builder()
        .sdata_uri(SdataUri::new(format!("{}/sdata/", server.uri())).unwrap())
        .username("admin")
        .password("secret")
        .build()
        .unwrap();
    SdataClient::new(&config).unwrap()
}

#[tokio::test]
async fn test_trigger_job_posts_payload_and_returns_trigger_key() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/sdata/$app/scheduling/-/triggers"))
        .and(query_param("format", "json"))
        .and(header("X-Authorization-Mode", "no-challenge"))
        .and(body_json(json!({
            "$descriptor": "JobX",
            "job": {"$key": "JobX"},
            "parameters": [{"Name": "Foo", "Value": "bar"}]
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "$key": "TRIGGER-1",
            "$descriptor": "JobX"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = create_test_client(&server);
    let mut params = BTreeMap::new();
    params.insert("Foo".to_string(), json!("bar"));

    let trigger_id = client
        .jobs()
        .trigger_job("JobX", None, Some(&params))
        .await
        .unwrap();

    assert_eq!(trigger_id.as_deref(), Some("TRIGGER-1"));
}

#[tokio::test]
async fn test_trigger_job_with_descriptor_and_no_params() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/sdata/$app/scheduling/-/triggers"))
        .and(body_json(json!({
            "$descriptor": "Nightly export",
            "job": {"$key": "Sage.Jobs.Export"},
            "parameters": []
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({"$key": "T2"})))
        .expect(1)
        .mount(&server)
        .await;

    let client = create_test_client(&server);
    let jobs = JobClient::new(&client);

    let trigger_id = jobs
        .trigger_job("Sage.Jobs.Export", Some("Nightly export"), None)
        .await
        .unwrap();

    assert_eq!(trigger_id.as_deref(), Some("T2"));
}

#[tokio::test]
async fn test_trigger_job_without_key_in_response() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(1)
        .mount(&server)
        .await;

    let client = create_test_client(&server);
    let trigger_id = client.jobs().trigger_job("JobX", None, None).await.unwrap();

    assert_eq!(trigger_id, None);
}

#[tokio::test]
async fn test_trigger_job_propagates_errors() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(
            ResponseTemplate::new(400).set_body_json(json!([{"message": "Unknown job"}])),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = create_test_client(&server);
    let error = client
        .jobs()
        .trigger_job("Missing", None, None)
        .await
        .unwrap_err();

    assert!(matches!(error, SdataError::Application { .. }));
    assert_eq!(error.message(), "Unknown job");
}

#[tokio::test]
async fn test_get_execution_status_filters_by_trigger_id() {
    let server = MockServer::start().await;
    let executions = json!({
        "$resources": [{"$key": "E1", "triggerId": "TRIGGER-1", "status": "Complete"}]
    });

    Mock::given(method("GET"))
        .and(path_regex(
            r"^/sdata/\$app/scheduling/-/executions\(triggerId%20eq%20'TRIGGER-1'\)$",
        ))
        .and(query_param("format", "json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(executions.clone()))
        .expect(1)
        .mount(&server)
        .await;

    let client = create_test_client(&server);
    let status = client
        .jobs()
        .get_execution_status("TRIGGER-1")
        .await
        .unwrap();

    assert_eq!(status, executions);
}

#[tokio::test]
async fn test_get_execution_status_not_found_is_empty_feed() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"$resources": []})))
        .expect(1)
        .mount(&server)
        .await;

    let client = create_test_client(&server);
    let status = client.jobs().get_execution_status("nope").await.unwrap();

    assert_eq!(status["$resources"], json!([]));
}

#[tokio::test]
async fn test_get_execution_status_propagates_transport_errors() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(503))
        .expect(1)
        .mount(&server)
        .await;

    let client = create_test_client(&server);
    let error = client
        .jobs()
        .get_execution_status("TRIGGER-1")
        .await
        .unwrap_err();

    assert_eq!(error.message(), "Service Unavailable");
}
