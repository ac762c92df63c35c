use crate::shared::infrastructure::event_store::EventStore;
use crate::shell::http::router;
use crate::tests::fixtures::http::{empty_request, json_request, send, test_state};
use axum::http::StatusCode;

#[tokio::test]
async fn runs_an_employee_through_its_lifecycle() {
    let state = test_state();
    let app = router(state.clone());

    let (status, created) = send(
        app.clone(),
        json_request(
            "POST",
            "/v1/employees",
            r#"{"firstName":"Lee","surname":"Gilmore","amount":25}"#,
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let id = created["id"].as_str().unwrap().to_string();
    let employee_uri = format!("/v1/employees/{id}");
    let requests_uri = format!("{employee_uri}/requests");

    // First write after creation is paired with a snapshot.
    let (status, booked) = send(
        app.clone(),
        json_request("POST", &requests_uri, r#"{"type":"REQUEST_LEAVE","amount":5}"#),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(booked["amount"], 20);
    assert_eq!(booked["version"], 2);

    let (status, cancelled) = send(
        app.clone(),
        json_request("POST", &requests_uri, r#"{"type":"CANCEL_LEAVE","amount":2}"#),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(cancelled["amount"], 22);
    assert_eq!(cancelled["version"], 4);

    let (status, _) = send(
        app.clone(),
        json_request("POST", &requests_uri, r#"{"type":"REQUEST_LEAVE","amount":23}"#),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, renamed) = send(
        app.clone(),
        json_request("PATCH", &employee_uri, r#"{"firstName":"Leigh","surname":"Gill"}"#),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(renamed["firstName"], "Leigh");
    assert_eq!(renamed["amount"], 22);

    let (status, removed) = send(app.clone(), empty_request("DELETE", &employee_uri)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(removed["amount"], 0);

    let (status, fetched) = send(app, empty_request("GET", &employee_uri)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched, removed);

    let log = state.event_store.list(&id).await.unwrap();
    let kinds: Vec<_> = log.iter().map(|e| e.kind.name()).collect();
    assert_eq!(
        kinds,
        vec![
            "EMPLOYEE_CREATED",
            "LEAVE_REQUESTED",
            "SNAPSHOT",
            "LEAVE_CANCELLED",
            "EMPLOYEE_UPDATED",
            "EMPLOYEE_DELETED",
        ]
    );
    assert!(log.windows(2).all(|pair| pair[0].version + 1 == pair[1].version));
}
