//! Integration tests for fedex-rest.
//!
//! Every test runs against a local wiremock server standing in for the
//! FedEx API, so no credentials or network access are needed.
//!
//! Run with: cargo test --test api_tests

use std::sync::Once;
use std::time::Duration;

use chrono::{Days, Utc};
use serde_json::json;
use tracing_subscriber::EnvFilter;
use url::Url;
use wiremock::matchers::{body_partial_json, body_string_contains, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use fedex_rest::prelude::*;

static INIT: Once = Once::new();

/// Initialize logging for tests
fn init_logging() {
    INIT.call_once(|| {
        tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::from_default_env())
            .with_test_writer()
            .try_init()
            .ok();
    });
}

const CLIENT_ID: &str = "l7749d031872cf4b55a7889376f360d045";
const CLIENT_SECRET: &str = "bd59d91084e8482895d4ae2fb4fb79a3";
const ACCOUNT: &str = "740561073";

fn config_for(server: &MockServer) -> ClientConfig {
    init_logging();
    let base = Url::parse(&server.uri()).expect("mock server uri");
    ClientConfig::default().with_environment(Environment::Custom(base))
}

fn authorizer(server: &MockServer) -> Authorize {
    Authorize::new()
        .client_id(CLIENT_ID)
        .client_secret(CLIENT_SECRET)
        .with_config(config_for(server))
}

fn token_body(token: &str) -> serde_json::Value {
    json!({
        "access_token": token,
        "token_type": "bearer",
        "expires_in": 3599,
        "scope": "CXS"
    })
}

async fn mount_token(server: &MockServer, expected_calls: u64) {
    Mock::given(method("POST"))
        .and(path("/oauth/token"))
        .and(body_string_contains("grant_type=client_credentials"))
        .respond_with(ResponseTemplate::new(200).set_body_json(token_body("mock-token")))
        .expect(expected_calls)
        .mount(server)
        .await;
}

fn tag_response() -> serde_json::Value {
    json!({
        "transactionId": "624deea6-b709-470c-8c39-4b5511281492",
        "output": {
            "transactionShipments": [{
                "masterTrackingNumber": "794953535000",
                "serviceType": "FEDEX_GROUND",
                "pieceResponses": [{
                    "trackingNumber": "794953535000",
                    "packageDocuments": [{
                        "contentType": "LABEL",
                        "copiesToPrint": 1,
                        "docType": "PDF",
                        "encodedLabel": "JVBERi0xLjQK"
                    }]
                }]
            }]
        }
    })
}

fn full_request() -> CreateTagRequest {
    let ship_date = Utc::now()
        .date_naive()
        .checked_add_days(Days::new(3))
        .expect("valid date");

    CreateTagRequest::new()
        .account_number(ACCOUNT)
        .service_type(ServiceType::FedexGround)
        .packaging_type(PackagingType::YourPackaging)
        .pickup_type(PickupType::DropoffAtFedexLocation)
        .ship_datestamp(ship_date)
        .shipper(
            Person::new("SHIPPER NAME")
                .phone_number("1234567890")
                .with_address(
                    Address::new()
                        .city("Collierville")
                        .street_lines(["RECIPIENT STREET LINE 1"])
                        .state_or_province("TN")
                        .country_code("US")
                        .postal_code("38017"),
                ),
        )
        .recipients([Person::new("RECEIPIENT NAME")
            .phone_number("1234567890")
            .with_address(
                Address::new()
                    .city("Irving")
                    .street_lines(["RECIPIENT STREET LINE 1"])
                    .state_or_province("TX")
                    .country_code("US")
                    .postal_code("75063"),
            )])
        .expect("one recipient")
        .line_items([Item::new("lorem Ipsum").with_weight(Weight::pounds(1))])
        .expect("one line item")
}

// ============================================================================
// AUTHORIZATION TESTS
// ============================================================================

mod auth_tests {
    use super::*;

    #[tokio::test]
    async fn test_authorize_exchanges_credentials() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/oauth/token"))
            .and(header("content-type", "application/x-www-form-urlencoded"))
            .and(body_string_contains("grant_type=client_credentials"))
            .and(body_string_contains(&format!("client_id={}", CLIENT_ID)))
            .and(body_string_contains(&format!("client_secret={}", CLIENT_SECRET)))
            .respond_with(ResponseTemplate::new(200).set_body_json(token_body("mock-token")))
            .expect(1)
            .mount(&server)
            .await;

        let token = authorizer(&server).authorize().await.expect("token");
        assert_eq!(token.expose(), "mock-token");
        assert_eq!(token.token_type, "bearer");
        assert_eq!(token.scope.as_deref(), Some("CXS"));
        assert!(!token.is_expired());
    }

    #[tokio::test]
    async fn test_each_authorize_call_hits_the_endpoint() {
        let server = MockServer::start().await;
        mount_token(&server, 2).await;

        let auth = authorizer(&server);
        auth.authorize().await.expect("first token");
        auth.authorize().await.expect("second token");
    }

    #[tokio::test]
    async fn test_authorize_rejected() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/oauth/token"))
            .respond_with(ResponseTemplate::new(401).set_body_json(json!({
                "transactionId": "b1d9f3b4-3cda-4a0b-8c38-4e2c5e7a1f10",
                "errors": [{
                    "code": "NOT.AUTHORIZED.ERROR",
                    "message": "The given client credentials were not valid. Please modify your request and try again."
                }]
            })))
            .mount(&server)
            .await;

        let err = authorizer(&server).authorize().await.unwrap_err();
        assert!(err.is_auth_error());
        match err {
            Error::Authentication(message) => {
                assert!(message.contains("401"));
                assert!(message.contains("client credentials were not valid"));
            }
            other => panic!("Expected Authentication error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_missing_credentials_make_no_call() {
        let server = MockServer::start().await;
        mount_token(&server, 0).await;

        let err = Authorize::new()
            .client_id(CLIENT_ID)
            .with_config(config_for(&server))
            .authorize()
            .await
            .unwrap_err();
        assert!(matches!(err, Error::MissingAuthCredentials(_)));
    }

    #[tokio::test]
    async fn test_out_of_range_token_lifetime() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/oauth/token"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "access_token": "mock-token",
                "expires_in": 9_000_000_000_000_i64
            })))
            .expect(1)
            .mount(&server)
            .await;

        let err = authorizer(&server).authorize().await.unwrap_err();
        assert!(matches!(err, Error::Authentication(ref m) if m.contains("out of range")));
    }

    #[tokio::test]
    async fn test_token_body_not_json() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/oauth/token"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>gateway</html>"))
            .mount(&server)
            .await;

        let err = authorizer(&server).authorize().await.unwrap_err();
        assert!(matches!(err, Error::Json(_)));
        assert!(!err.is_transport_error());
    }
}

// ============================================================================
// CREATE TAG REQUEST TESTS
// ============================================================================

mod create_tag_tests {
    use super::*;

    #[tokio::test]
    async fn test_has_account_number() {
        let server = MockServer::start().await;
        mount_token(&server, 1).await;
        Mock::given(path("/ship/v1/shipments/tag"))
            .respond_with(ResponseTemplate::new(200).set_body_json(tag_response()))
            .expect(0)
            .mount(&server)
            .await;

        let token = authorizer(&server).authorize().await.expect("token");
        let err = CreateTagRequest::new()
            .access_token(token.expose())
            .with_config(config_for(&server))
            .request()
            .await
            .unwrap_err();

        assert_eq!(err.to_string(), "The account number is required");
    }

    #[tokio::test]
    async fn test_request() {
        let server = MockServer::start().await;
        mount_token(&server, 1).await;
        Mock::given(method("POST"))
            .and(path("/ship/v1/shipments/tag"))
            .and(header("authorization", "Bearer mock-token"))
            .and(header("x-locale", "en_US"))
            .and(body_partial_json(json!({
                "requestedShipment": {
                    "serviceType": "FEDEX_GROUND",
                    "packagingType": "YOUR_PACKAGING",
                    "pickupType": "DROPOFF_AT_FEDEX_LOCATION",
                    "recipients": [{
                        "personName": "RECEIPIENT NAME",
                        "address": { "city": "Irving", "postalCode": "75063" }
                    }],
                    "requestedPackageLineItems": [{
                        "weight": { "value": 1, "units": "LB" },
                        "itemDescription": "lorem Ipsum"
                    }]
                },
                "accountNumber": { "value": ACCOUNT }
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(tag_response()))
            .expect(1)
            .mount(&server)
            .await;

        let token = authorizer(&server).authorize().await.expect("token");
        let response = full_request()
            .access_token(token.expose())
            .with_config(config_for(&server))
            .request()
            .await
            .expect("create tag");

        assert!(!response.transaction_id.is_empty());
        let document = &response.output.transaction_shipments[0].piece_responses[0]
            .package_documents[0];
        let label = document.encoded_label.as_deref().expect("encoded label");
        assert!(!label.is_empty());
        assert!(document.decode_label().expect("base64").starts_with(b"%PDF"));
    }

    #[tokio::test]
    async fn test_api_error_envelope() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/ship/v1/shipments/tag"))
            .respond_with(ResponseTemplate::new(422).set_body_json(json!({
                "transactionId": "f1a0c2d7-3a52-4b5e-8e0f-6d7a0f3c9b11",
                "errors": [{
                    "code": "SHIPMENT.USER.UNAUTHORIZED",
                    "message": "Requested user is not authorized to perform the operation."
                }]
            })))
            .mount(&server)
            .await;

        let err = full_request()
            .access_token("mock-token")
            .with_config(config_for(&server))
            .request()
            .await
            .unwrap_err();

        assert!(err.is_client_error());
        match err {
            Error::Api {
                status,
                code,
                transaction_id,
                ..
            } => {
                assert_eq!(status, 422);
                assert_eq!(code.as_deref(), Some("SHIPMENT.USER.UNAUTHORIZED"));
                assert!(transaction_id.is_some());
            }
            other => panic!("Expected Api error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_transport_error_is_passed_through() {
        init_logging();
        let config = ClientConfig::default().with_environment(Environment::Custom(
            Url::parse("http://127.0.0.1:1").expect("url"),
        ));

        let err = full_request()
            .access_token("mock-token")
            .with_config(config)
            .request()
            .await
            .unwrap_err();

        assert!(err.is_transport_error());
        assert!(matches!(err, Error::Http(ref e) if e.is_connect()));
    }

    #[tokio::test]
    async fn test_timeout_is_configurable() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/ship/v1/shipments/tag"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(tag_response())
                    .set_delay(Duration::from_millis(500)),
            )
            .mount(&server)
            .await;

        let err = full_request()
            .access_token("mock-token")
            .with_config(config_for(&server).with_timeout(Duration::from_millis(50)))
            .request()
            .await
            .unwrap_err();

        assert!(matches!(err, Error::Http(ref e) if e.is_timeout()));
    }

    #[tokio::test]
    async fn test_success_body_not_json() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/ship/v1/shipments/tag"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>gateway</html>"))
            .expect(1)
            .mount(&server)
            .await;

        let err = full_request()
            .access_token("mock-token")
            .with_config(config_for(&server))
            .request()
            .await
            .unwrap_err();

        assert!(matches!(err, Error::Json(_)));
        assert!(!err.is_transport_error());
    }
}

// ============================================================================
// CLIENT / TOKEN POLICY TESTS
// ============================================================================

mod client_tests {
    use super::*;

    async fn mount_tag(server: &MockServer, expected_calls: u64) {
        Mock::given(method("POST"))
            .and(path("/ship/v1/shipments/tag"))
            .and(header("authorization", "Bearer mock-token"))
            .respond_with(ResponseTemplate::new(200).set_body_json(tag_response()))
            .expect(expected_calls)
            .mount(server)
            .await;
    }

    #[tokio::test]
    async fn test_token_reused_until_expiry() {
        let server = MockServer::start().await;
        mount_token(&server, 1).await;
        mount_tag(&server, 2).await;

        let client = FedexClient::new(authorizer(&server)).expect("client");
        for _ in 0..2 {
            let response = client.ship().create_tag(full_request()).await.expect("tag");
            assert_eq!(response.first_encoded_label(), Some("JVBERi0xLjQK"));
        }
        assert!(client.session().expires_at().await.is_some());
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_callers_share_one_exchange() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/oauth/token"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(token_body("mock-token"))
                    .set_delay(Duration::from_millis(100)),
            )
            .expect(1)
            .mount(&server)
            .await;

        let client = FedexClient::new(authorizer(&server)).expect("client");
        let handles: Vec<_> = (0..8)
            .map(|_| {
                let session = client.session().clone();
                tokio::spawn(async move { session.access_token().await })
            })
            .collect();

        for handle in handles {
            let token = handle.await.expect("task").expect("token");
            assert_eq!(secrecy::ExposeSecret::expose_secret(&token), "mock-token");
        }
    }

    #[tokio::test]
    async fn test_always_reauthorize() {
        let server = MockServer::start().await;
        mount_token(&server, 2).await;
        mount_tag(&server, 2).await;

        let config = config_for(&server).with_token_policy(TokenPolicy::AlwaysReauthorize);
        let client = FedexClient::from_credentials(CLIENT_ID, CLIENT_SECRET, config)
            .expect("client");

        client.ship().create_tag(full_request()).await.expect("first tag");
        client.ship().create_tag(full_request()).await.expect("second tag");
    }

    #[tokio::test]
    async fn test_short_lived_token_is_refreshed() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/oauth/token"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "access_token": "mock-token",
                "token_type": "bearer",
                "expires_in": 30
            })))
            .expect(2)
            .mount(&server)
            .await;
        mount_tag(&server, 2).await;

        // 30s lifetime is inside the default 60s refresh buffer
        let client = FedexClient::new(authorizer(&server)).expect("client");
        client.ship().create_tag(full_request()).await.expect("first tag");
        client.ship().create_tag(full_request()).await.expect("second tag");
    }

    #[tokio::test]
    async fn test_missing_account_number_skips_token_exchange() {
        let server = MockServer::start().await;
        mount_token(&server, 0).await;

        let client = FedexClient::new(authorizer(&server)).expect("client");
        let err = client
            .ship()
            .create_tag(CreateTagRequest::new())
            .await
            .unwrap_err();
        assert!(matches!(err, Error::MissingAccountNumber));
    }

    #[tokio::test]
    async fn test_unauthorized_drops_cached_token() {
        let server = MockServer::start().await;
        mount_token(&server, 1).await;
        Mock::given(method("POST"))
            .and(path("/ship/v1/shipments/tag"))
            .respond_with(ResponseTemplate::new(401).set_body_json(json!({
                "errors": [{ "code": "NOT.AUTHORIZED.ERROR", "message": "Token expired" }]
            })))
            .mount(&server)
            .await;

        let client = FedexClient::new(authorizer(&server)).expect("client");
        let err = client.ship().create_tag(full_request()).await.unwrap_err();

        assert!(matches!(err, Error::Unauthorized(ref m) if m == "Token expired"));
        assert!(client.session().expires_at().await.is_none());
    }

    #[tokio::test]
    async fn test_customer_transaction_id_round_trip() {
        let server = MockServer::start().await;
        mount_token(&server, 1).await;
        Mock::given(method("POST"))
            .and(path("/ship/v1/shipments/tag"))
            .and(header("x-customer-transaction-id", "order-42"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "transactionId": "t-1",
                "customerTransactionId": "order-42",
                "output": {}
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = FedexClient::new(authorizer(&server)).expect("client");
        let response = client
            .ship()
            .create_tag(full_request().customer_transaction_id("order-42"))
            .await
            .expect("tag");

        assert_eq!(response.customer_transaction_id.as_deref(), Some("order-42"));
        assert!(response.first_encoded_label().is_none());
    }
}
