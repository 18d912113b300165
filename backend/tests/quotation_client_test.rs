//! Lookup and listing against a mocked quotation search endpoint.

use std::sync::Arc;

use backend::api::quotations::QuotationClient;
use backend::config::QuotationApiConfig;
use backend::diagnostics::{DiagnosticEvent, MemorySink};
use common::document::QuotationDocument;
use common::view_state::{QuotationLookup, QuotationViewState};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const SEARCH_PATH: &str = "/api/orders/quotations/search";

fn test_client(uri: &str) -> (QuotationClient, Arc<MemorySink>) {
    let sink = Arc::new(MemorySink::new());
    let config = QuotationApiConfig::new(&format!("{uri}{SEARCH_PATH}")).unwrap();
    let client = QuotationClient::new(config).with_sink(sink.clone());
    (client, sink)
}

fn collection() -> serde_json::Value {
    serde_json::json!({
        "success": true,
        "data": [
            {
                "_id": "665f1c2ab7e4a90012aaaaaa",
                "customerName": "Someone Else",
                "items": [],
                "totalAmount": 10,
                "createdAt": "2024-03-01T09:00:00.000Z"
            },
            {
                "_id": "665f1c2ab7e4a90012abc123",
                "customerName": "Jane Doe",
                "customerEmail": "jane@example.com",
                "customerPhone": "9876543210",
                "items": [
                    { "name": "Monitor", "quantity": 3, "price": 1000,
                      "product": { "description": "N/A", "brand": "Dell" } }
                ],
                "totalAmount": 3000,
                "createdAt": "2024-03-05T10:30:00.000Z"
            }
        ]
    })
}

async fn mount_collection(server: &MockServer, body: serde_json::Value, expected_calls: u64) {
    Mock::given(method("GET"))
        .and(path(SEARCH_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .expect(expected_calls)
        .mount(server)
        .await;
}

#[tokio::test]
async fn lookup_finds_exact_match_and_normalizes_it() {
    let server = MockServer::start().await;
    mount_collection(&server, collection(), 1).await;
    let (client, sink) = test_client(&server.uri());

    let lookup = client.lookup(Some("665f1c2ab7e4a90012abc123")).await;

    let QuotationLookup::Found(model) = lookup else {
        panic!("expected a match, got {lookup:?}");
    };
    assert_eq!(model.customer().name, "Jane Doe");
    assert_eq!(model.customer().address, "Address not provided");
    assert_eq!(model.products().len(), 1);

    let document = QuotationDocument::build(&model, "665f1c2ab7e4a90012abc123");
    assert_eq!(document.quote_number, "QT-abc123");
    assert_eq!(document.rows[0].line_total, "₹3,000.00");
    assert_eq!(document.rows[0].description, None);
    assert_eq!(document.subtotal, "₹3,000.00");

    assert_eq!(
        sink.events(),
        vec![
            DiagnosticEvent::FetchStarted { quotation_id: "665f1c2ab7e4a90012abc123".into() },
            DiagnosticEvent::QuotationFound {
                quotation_id: "665f1c2ab7e4a90012abc123".into(),
                item_count: 1,
            },
        ]
    );
}

#[tokio::test]
async fn lookup_sends_no_query_parameters() {
    let server = MockServer::start().await;
    mount_collection(&server, collection(), 1).await;
    let (client, _sink) = test_client(&server.uri());

    client.lookup(Some("665f1c2ab7e4a90012abc123")).await;

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].url.query(), None);
}

#[tokio::test]
async fn lookup_without_id_issues_no_request() {
    let server = MockServer::start().await;
    mount_collection(&server, collection(), 0).await;
    let (client, sink) = test_client(&server.uri());

    assert_eq!(client.lookup(None).await, QuotationLookup::NotFound);
    assert_eq!(client.lookup(Some("")).await, QuotationLookup::NotFound);
    assert_eq!(
        sink.events(),
        vec![DiagnosticEvent::LookupSkipped, DiagnosticEvent::LookupSkipped]
    );
}

#[tokio::test]
async fn unknown_id_is_not_found() {
    let server = MockServer::start().await;
    mount_collection(&server, collection(), 1).await;
    let (client, sink) = test_client(&server.uri());

    let lookup = client.lookup(Some("does-not-exist")).await;

    assert_eq!(lookup, QuotationLookup::NotFound);
    assert!(sink.events().contains(&DiagnosticEvent::QuotationMissing {
        quotation_id: "does-not-exist".into()
    }));
}

#[tokio::test]
async fn id_match_is_exact() {
    let server = MockServer::start().await;
    mount_collection(&server, collection(), 1).await;
    let (client, _sink) = test_client(&server.uri());

    // suffix of a real id
    assert_eq!(client.lookup(Some("abc123")).await, QuotationLookup::NotFound);
}

#[tokio::test]
async fn response_without_data_is_not_found() {
    let server = MockServer::start().await;
    mount_collection(&server, serde_json::json!({ "success": true }), 1).await;
    let (client, _sink) = test_client(&server.uri());

    assert_eq!(
        client.lookup(Some("665f1c2ab7e4a90012abc123")).await,
        QuotationLookup::NotFound
    );
}

#[tokio::test]
async fn server_error_is_recorded_and_shown_as_not_found() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(SEARCH_PATH))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .expect(1)
        .mount(&server)
        .await;
    let (client, sink) = test_client(&server.uri());

    let lookup = client.lookup(Some("665f1c2ab7e4a90012abc123")).await;

    let QuotationLookup::FetchFailed(cause) = &lookup else {
        panic!("expected a failure, got {lookup:?}");
    };
    assert!(cause.contains("500"));
    assert_eq!(QuotationViewState::from(Some(lookup)), QuotationViewState::NotFound);
    assert!(sink
        .events()
        .iter()
        .any(|event| matches!(event, DiagnosticEvent::FetchFailed { .. })));
}

#[tokio::test]
async fn unreachable_endpoint_is_recorded_and_shown_as_not_found() {
    let server = MockServer::start().await;
    let uri = server.uri();
    drop(server);
    let (client, sink) = test_client(&uri);

    let lookup = client.lookup(Some("665f1c2ab7e4a90012abc123")).await;

    assert!(matches!(lookup, QuotationLookup::FetchFailed(_)));
    assert_eq!(QuotationViewState::from(Some(lookup)), QuotationViewState::NotFound);
    let events = sink.events();
    assert!(matches!(
        events.last(),
        Some(DiagnosticEvent::FetchFailed { quotation_id, .. }) if quotation_id == "665f1c2ab7e4a90012abc123"
    ));
}

#[tokio::test]
async fn undecodable_body_is_a_fetch_failure() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(SEARCH_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>not json</html>"))
        .mount(&server)
        .await;
    let (client, _sink) = test_client(&server.uri());

    let lookup = client.lookup(Some("665f1c2ab7e4a90012abc123")).await;

    let QuotationLookup::FetchFailed(cause) = lookup else {
        panic!("expected a failure, got {lookup:?}");
    };
    assert!(cause.contains("decode"));
}

#[tokio::test]
async fn malformed_unrelated_record_does_not_break_lookup() {
    let server = MockServer::start().await;
    let mut body = collection();
    body["data"]
        .as_array_mut()
        .unwrap()
        .insert(0, serde_json::json!({ "_id": "broken", "items": "not a list" }));
    mount_collection(&server, body, 1).await;
    let (client, _sink) = test_client(&server.uri());

    let lookup = client.lookup(Some("665f1c2ab7e4a90012abc123")).await;

    assert!(lookup.is_found());
}

#[tokio::test]
async fn listing_skips_undecodable_records() {
    let server = MockServer::start().await;
    let mut body = collection();
    body["data"]
        .as_array_mut()
        .unwrap()
        .push(serde_json::json!({ "_id": "broken", "items": "not a list" }));
    mount_collection(&server, body, 1).await;
    let (client, sink) = test_client(&server.uri());

    let summaries = client.list_summaries().await.unwrap();

    let customers: Vec<&str> = summaries.iter().map(|s| s.customer_name.as_str()).collect();
    assert_eq!(customers, vec!["Someone Else", "Jane Doe"]);
    assert_eq!(summaries[1].quote_number, "QT-abc123");
    assert_eq!(summaries[1].item_count, 1);
    assert!(matches!(
        sink.events().as_slice(),
        [DiagnosticEvent::RecordSkipped { quotation_id: Some(id), .. }] if id == "broken"
    ));
}
