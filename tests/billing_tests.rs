//! Integration tests for invoices, line items and statement documents.

use partner_center::models::{BillingPeriod, BillingProvider, InvoiceLineItemType};
use partner_center::rest::ValidationError;
use partner_center::{
    AccessToken, BaseUrl, PartnerConfig, PartnerCredentials, PartnerError, PartnerOperations,
    Query, SeekOperation,
};
use serde_json::json;
use wiremock::matchers::{header, method, path, query_param};
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

fn line_item_page(token: Option<&str>) -> serde_json::Value {
    let mut page = json!({
        "totalCount": 1,
        "items": [{ "customerId": "cust-1", "chargeType": "new" }]
    });
    if let Some(token) = token {
        page["continuationToken"] = json!(token);
    }
    page
}

// ============================================================================
// Line items
// ============================================================================

#[tokio::test]
async fn test_reconciliation_line_items_query_order() {
    let (server, partner) = setup().await;

    Mock::given(method("GET"))
        .and(path("/v1/invoices/G000024135/lineitems"))
        .respond_with(ResponseTemplate::new(200).set_body_json(line_item_page(None)))
        .expect(1)
        .mount(&server)
        .await;

    let items = partner
        .invoices()
        .by_id("G000024135")
        .unwrap()
        .by_period(
            BillingProvider::All,
            InvoiceLineItemType::UsageLineItems,
            "USD",
            BillingPeriod::Current,
            500,
        )
        .unwrap()
        .get()
        .await
        .unwrap();

    assert_eq!(items.len(), 1);
    assert_eq!(items[0].details["customerId"], "cust-1");

    let requests = server.received_requests().await.unwrap();
    assert_eq!(
        requests[0].url.query(),
        Some("provider=All&invoiceLineItemType=UsageLineItems&currencyCode=USD&period=current&size=500")
    );
}

#[tokio::test]
async fn test_reconciliation_seek_resends_the_period() {
    let (server, partner) = setup().await;

    Mock::given(method("GET"))
        .and(path("/v1/invoices/G000024135/lineitems"))
        .and(header("MS-ContinuationToken", "next-page"))
        .and(query_param("seekOperation", "Next"))
        .and(query_param("period", "previous"))
        .and(query_param("size", "200"))
        .respond_with(ResponseTemplate::new(200).set_body_json(line_item_page(None)))
        .expect(1)
        .mount(&server)
        .await;

    let line_items = partner
        .invoices()
        .by_id("G000024135")
        .unwrap()
        .by_period(
            BillingProvider::Marketplace,
            InvoiceLineItemType::BillingLineItems,
            "EUR",
            BillingPeriod::Previous,
            200,
        )
        .unwrap();

    let page = line_items
        .seek("next-page", SeekOperation::Next)
        .await
        .unwrap();
    assert!(!page.has_next_page());
}

#[tokio::test]
async fn test_indexed_line_items_page() {
    let (server, partner) = setup().await;

    Mock::given(method("GET"))
        .and(path("/v1/invoices/G000024135/lineitems"))
        .and(query_param("provider", "Office"))
        .and(query_param("invoiceLineItemType", "BillingLineItems"))
        .and(query_param("size", "100"))
        .and(query_param("offset", "200"))
        .respond_with(ResponseTemplate::new(200).set_body_json(line_item_page(Some("t-1"))))
        .expect(1)
        .mount(&server)
        .await;

    let page = partner
        .invoices()
        .by_id("G000024135")
        .unwrap()
        .by(BillingProvider::Office, InvoiceLineItemType::BillingLineItems)
        .unwrap()
        .get_page(100, 200)
        .await
        .unwrap();

    assert_eq!(page.continuation_token(), Some("t-1"));
}

#[tokio::test]
async fn test_none_selectors_are_rejected_locally() {
    let (server, partner) = setup().await;
    let invoice = partner.invoices().by_id("G000024135").unwrap();

    let provider = invoice
        .by(BillingProvider::None, InvoiceLineItemType::BillingLineItems)
        .unwrap_err();
    assert!(matches!(
        provider,
        PartnerError::Validation(ValidationError::NoneSentinel {
            field: "billing_provider"
        })
    ));

    let line_item_type = invoice
        .by_period(
            BillingProvider::Azure,
            InvoiceLineItemType::None,
            "USD",
            BillingPeriod::Current,
            100,
        )
        .unwrap_err();
    assert!(matches!(
        line_item_type,
        PartnerError::Validation(ValidationError::NoneSentinel {
            field: "invoice_line_item_type"
        })
    ));

    assert!(server.received_requests().await.unwrap().is_empty());
}

// ============================================================================
// Invoices
// ============================================================================

#[tokio::test]
async fn test_invoice_query_by_index() {
    let (server, partner) = setup().await;

    Mock::given(method("GET"))
        .and(path("/v1/invoices"))
        .and(query_param("size", "10"))
        .and(query_param("offset", "0"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "totalCount": 1,
            "items": [{ "id": "G000024135" }]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let invoices = partner
        .invoices()
        .query(&Query::indexed(10, 0))
        .await
        .unwrap();

    assert_eq!(invoices[0].id.as_deref(), Some("G000024135"));
}

#[tokio::test]
async fn test_unsupported_invoice_query_sends_nothing() {
    let (server, partner) = setup().await;

    let error = partner
        .invoices()
        .query(&Query::seek("token", SeekOperation::Next))
        .await
        .unwrap_err();

    assert!(matches!(
        error,
        PartnerError::Validation(ValidationError::UnsupportedQuery { .. })
    ));
    assert!(server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_estimate_links_by_currency() {
    let (server, partner) = setup().await;

    Mock::given(method("GET"))
        .and(path("/v1/invoices/estimates/links"))
        .and(query_param("currencyCode", "USD"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "totalCount": 0,
            "items": []
        })))
        .expect(1)
        .mount(&server)
        .await;

    let links = partner
        .invoices()
        .estimates()
        .links()
        .by_currency("USD")
        .unwrap()
        .get()
        .await
        .unwrap();

    assert!(links.is_empty());
}

// ============================================================================
// Documents
// ============================================================================

#[tokio::test]
async fn test_invoice_statement_downloads_pdf_bytes() {
    let (server, partner) = setup().await;
    let pdf = b"%PDF-1.7\n%binary".to_vec();

    Mock::given(method("GET"))
        .and(path("/v1/invoices/G000024135/documents/statement"))
        .and(header("Accept", "application/pdf"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("Content-Type", "application/pdf")
                .set_body_bytes(pdf.clone()),
        )
        .expect(1)
        .mount(&server)
        .await;

    let statement = partner
        .invoices()
        .by_id("G000024135")
        .unwrap()
        .documents()
        .statement()
        .get()
        .await
        .unwrap();

    assert!(statement.is_pdf());
    assert_eq!(statement.len(), pdf.len());
    assert_eq!(statement.into_bytes(), pdf);
}

#[tokio::test]
async fn test_tax_receipt_statement_path() {
    let (server, partner) = setup().await;

    Mock::given(method("GET"))
        .and(path(
            "/v1/invoices/G000024135/taxreceipts/tr-9/documents/statement",
        ))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(b"%PDF".to_vec()))
        .expect(1)
        .mount(&server)
        .await;

    let statement = partner
        .invoices()
        .by_id("G000024135")
        .unwrap()
        .tax_receipts()
        .by_id("tr-9")
        .unwrap()
        .documents()
        .statement()
        .get()
        .await
        .unwrap();

    assert!(!statement.is_empty());
}
