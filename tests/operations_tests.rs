//! Integration tests for customer, user, subscription and entitlement
//! operations.
//!
//! These tests verify request methods, bodies, query parameters and
//! continuation headers against a mock Partner Center service.

use partner_center::models::{
    Customer, CustomerCompanyProfile, CustomerUser, EligibilityType, Subscription, Transition,
};
use partner_center::rest::ValidationError;
use partner_center::{
    AccessToken, BaseUrl, FieldFilter, FieldFilterOperation, PartnerConfig, PartnerCredentials,
    PartnerError, PartnerOperations, Query, SeekOperation,
};
use serde_json::json;
use tokio_test::{assert_err, assert_ok};
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn setup() -> (MockServer, PartnerOperations) {
    let server = MockServer::start().await;
    let config = PartnerConfig::builder()
        .credentials(PartnerCredentials::new(
            AccessToken::new("test-token").unwrap(),
            None,
        ))
        .base_url(BaseUrl::new(server.uri()).unwrap())
        .build()
        .unwrap();
    (server, PartnerOperations::new(config).unwrap())
}

// ============================================================================
// Customers
// ============================================================================

#[tokio::test]
async fn test_create_customer_posts_body() {
    let (server, partner) = setup().await;

    Mock::given(method("POST"))
        .and(path("/v1/customers"))
        .and(header("Content-Type", "application/json"))
        .and(body_json(json!({
            "companyProfile": { "domain": "contoso.onmicrosoft.com" }
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "id": "cust-new",
            "companyProfile": { "domain": "contoso.onmicrosoft.com" }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let customer = Customer {
        company_profile: Some(CustomerCompanyProfile {
            domain: Some("contoso.onmicrosoft.com".to_string()),
            ..Default::default()
        }),
        ..Default::default()
    };

    let created = partner.customers().create(&customer).await.unwrap();
    assert_eq!(created.id.as_deref(), Some("cust-new"));
}

#[tokio::test]
async fn test_indexed_customer_query_and_seek() {
    let (server, partner) = setup().await;

    Mock::given(method("GET"))
        .and(path("/v1/customers"))
        .and(query_param("size", "2"))
        .and(query_param("offset", "0"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "totalCount": 2,
            "items": [{ "id": "c1" }, { "id": "c2" }],
            "links": {
                "next": {
                    "uri": "/customers?size=2",
                    "method": "GET",
                    "headers": [{ "key": "MS-ContinuationToken", "value": "page-2" }]
                }
            }
        })))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/v1/customers"))
        .and(header("MS-ContinuationToken", "page-2"))
        .and(query_param("seekOperation", "Next"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "totalCount": 1,
            "items": [{ "id": "c3" }]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let customers = partner.customers();
    let first = customers.query(&Query::indexed(2, 0)).await.unwrap();
    assert_eq!(first.len(), 2);

    let token = first.continuation_token().unwrap().to_string();
    let second = customers.seek(&token, SeekOperation::Next).await.unwrap();
    assert_eq!(second[0].id.as_deref(), Some("c3"));
    assert!(!second.has_next_page());

    let requests = server.received_requests().await.unwrap();
    let seek_query = requests[1].url.query().unwrap_or_default();
    assert!(!seek_query.contains("page-2"));
}

#[tokio::test]
async fn test_empty_continuation_token_is_rejected_locally() {
    let (server, partner) = setup().await;

    let error = partner
        .customers()
        .seek("  ", SeekOperation::Next)
        .await
        .unwrap_err();

    assert!(matches!(
        error,
        PartnerError::Validation(ValidationError::EmptyContinuationToken)
    ));
    assert!(server.received_requests().await.unwrap().is_empty());
}

// ============================================================================
// Users
// ============================================================================

#[tokio::test]
async fn test_user_query_sends_filter_json() {
    let (server, partner) = setup().await;

    let filter = FieldFilter::field(
        "UserPrincipalName",
        FieldFilterOperation::StartsWith,
        "ada",
    );
    let expected_filter = filter.to_json().unwrap();

    Mock::given(method("GET"))
        .and(path("/v1/customers/cust-1/users"))
        .and(query_param("filter", expected_filter.as_str()))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "totalCount": 1,
            "items": [{ "id": "user-1", "userPrincipalName": "ada@contoso.com" }]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let users = partner
        .customers()
        .by_id("cust-1")
        .unwrap()
        .users()
        .query(&Query::simple(filter))
        .await
        .unwrap();

    assert_eq!(users[0].user_principal_name.as_deref(), Some("ada@contoso.com"));
}

#[tokio::test]
async fn test_user_patch_and_delete() {
    let (server, partner) = setup().await;

    Mock::given(method("PATCH"))
        .and(path("/v1/customers/cust-1/users/user-1"))
        .and(body_json(json!({ "displayName": "Ada L." })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "user-1",
            "displayName": "Ada L."
        })))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("DELETE"))
        .and(path("/v1/customers/cust-1/users/user-1"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let user = partner
        .customers()
        .by_id("cust-1")
        .unwrap()
        .users()
        .by_id("user-1")
        .unwrap();

    let patch = CustomerUser {
        display_name: Some("Ada L.".to_string()),
        ..Default::default()
    };
    let updated = user.patch(&patch).await.unwrap();
    assert_eq!(updated.display_name.as_deref(), Some("Ada L."));

    assert_ok!(user.delete().await);
}

// ============================================================================
// Subscriptions
// ============================================================================

#[tokio::test]
async fn test_register_returns_location_header() {
    let (server, partner) = setup().await;

    Mock::given(method("POST"))
        .and(path("/v1/customers/cust-1/subscriptions/sub-1/registrations"))
        .respond_with(ResponseTemplate::new(202).insert_header(
            "Location",
            "/customers/cust-1/subscriptions/sub-1/registrationstatus",
        ))
        .expect(1)
        .mount(&server)
        .await;

    let location = partner
        .customers()
        .by_id("cust-1")
        .unwrap()
        .subscriptions()
        .by_id("sub-1")
        .unwrap()
        .registration()
        .register()
        .await
        .unwrap();

    assert_eq!(
        location,
        "/customers/cust-1/subscriptions/sub-1/registrationstatus"
    );
}

#[tokio::test]
async fn test_register_without_location_returns_empty_string() {
    let (server, partner) = setup().await;

    Mock::given(method("POST"))
        .and(path("/v1/customers/cust-1/subscriptions/sub-1/registrations"))
        .respond_with(ResponseTemplate::new(202))
        .mount(&server)
        .await;

    let location = partner
        .customers()
        .by_id("cust-1")
        .unwrap()
        .subscriptions()
        .by_id("sub-1")
        .unwrap()
        .registration()
        .register()
        .await
        .unwrap();

    assert_eq!(location, "");
}

#[tokio::test]
async fn test_register_ignores_non_json_body() {
    let (server, partner) = setup().await;

    Mock::given(method("POST"))
        .and(path("/v1/customers/cust-1/subscriptions/sub-1/registrations"))
        .respond_with(
            ResponseTemplate::new(202)
                .insert_header("Location", "/registrationstatus")
                .set_body_string("Accepted"),
        )
        .expect(1)
        .mount(&server)
        .await;

    let location = partner
        .customers()
        .by_id("cust-1")
        .unwrap()
        .subscriptions()
        .by_id("sub-1")
        .unwrap()
        .registration()
        .register()
        .await
        .unwrap();

    assert_eq!(location, "/registrationstatus");
}

#[tokio::test]
async fn test_activate_posts_without_body() {
    let (server, partner) = setup().await;

    Mock::given(method("POST"))
        .and(path("/v1/customers/cust-1/subscriptions/sub-1/activate"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "subscriptionId": "sub-1",
            "status": "success"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let result = partner
        .customers()
        .by_id("cust-1")
        .unwrap()
        .subscriptions()
        .by_id("sub-1")
        .unwrap()
        .activate()
        .await
        .unwrap();

    assert_eq!(result.status.as_deref(), Some("success"));
    let requests = server.received_requests().await.unwrap();
    assert!(requests[0].body.is_empty());
}

#[tokio::test]
async fn test_subscription_patch_and_transitions() {
    let (server, partner) = setup().await;

    Mock::given(method("PATCH"))
        .and(path("/v1/customers/cust-1/subscriptions/sub-1"))
        .and(body_json(json!({ "quantity": 10 })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "sub-1",
            "quantity": 10
        })))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path(
            "/v1/customers/cust-1/subscriptions/sub-1/transitioneligibilities",
        ))
        .and(query_param("eligibilityType", "immediate"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "totalCount": 1,
            "items": [{ "catalogItemId": "CFQ7TTC0LH18:0001", "transitionType": "transition_only" }]
        })))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/v1/customers/cust-1/subscriptions/sub-1/transitions"))
        .and(query_param("operationId", "op-7"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "totalCount": 1,
            "items": [{ "id": "tr-1", "operationId": "op-7", "status": "completed" }]
        })))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/v1/customers/cust-1/subscriptions/sub-1/transitions"))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "id": "tr-2",
            "toCatalogItemId": "CFQ7TTC0LH18:0001",
            "status": "pending"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let subscription = partner
        .customers()
        .by_id("cust-1")
        .unwrap()
        .subscriptions()
        .by_id("sub-1")
        .unwrap();

    let patched = subscription
        .patch(&Subscription {
            quantity: Some(10),
            ..Default::default()
        })
        .await
        .unwrap();
    assert_eq!(patched.quantity, Some(10));

    let eligibilities = subscription
        .transition_eligibilities()
        .get(Some(EligibilityType::Immediate))
        .await
        .unwrap();
    assert_eq!(eligibilities.len(), 1);

    let transitions = subscription
        .transitions()
        .get(Some("op-7"))
        .await
        .unwrap();
    assert_eq!(transitions[0].status.as_deref(), Some("completed"));

    let created = subscription
        .transitions()
        .create(&Transition {
            to_catalog_item_id: Some("CFQ7TTC0LH18:0001".to_string()),
            quantity: Some(1),
            ..Default::default()
        })
        .await
        .unwrap();
    assert_eq!(created.id.as_deref(), Some("tr-2"));
}

#[tokio::test]
async fn test_subscriptions_by_partner_sends_mpn_id() {
    let (server, partner) = setup().await;

    Mock::given(method("GET"))
        .and(path("/v1/customers/cust-1/subscriptions"))
        .and(query_param("mpn_id", "4847383"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "totalCount": 0,
            "items": []
        })))
        .expect(1)
        .mount(&server)
        .await;

    let subscriptions = partner
        .customers()
        .by_id("cust-1")
        .unwrap()
        .subscriptions()
        .by_partner("4847383")
        .unwrap()
        .get()
        .await
        .unwrap();

    assert!(subscriptions.is_empty());
}

// ============================================================================
// Entitlements
// ============================================================================

#[tokio::test]
async fn test_entitlements_show_expiry_and_type_filter() {
    let (server, partner) = setup().await;

    Mock::given(method("GET"))
        .and(path("/v1/customers/cust-1/entitlements"))
        .and(query_param("entitlementType", "software"))
        .and(query_param("showExpiry", "true"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "totalCount": 1,
            "items": [{ "productId": "DG7GMGF0FLV5", "entitlementType": "software" }]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let entitlements = partner
        .customers()
        .by_id("cust-1")
        .unwrap()
        .entitlements()
        .by_entitlement_type("software")
        .unwrap()
        .get(true)
        .await
        .unwrap();

    assert_eq!(entitlements[0].product_id.as_deref(), Some("DG7GMGF0FLV5"));
}

#[tokio::test]
async fn test_service_errors_propagate_with_status() {
    let (server, partner) = setup().await;

    Mock::given(method("GET"))
        .and(path("/v1/customers/missing"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({
            "code": 600002,
            "description": "Customer not found"
        })))
        .mount(&server)
        .await;

    let result = partner.customers().by_id("missing").unwrap().get().await;

    let error = assert_err!(result);
    assert_eq!(error.status(), Some(404));
    assert!(error.to_string().contains("Customer not found"));
}
