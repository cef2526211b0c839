//! Invoices, receipts, statements and line items.
//!
//! Statement documents are downloaded as PDF bytes. Line items are addressed
//! by billing provider and line item type; reconciliation line items of the
//! current or previous billing period also need a currency and a page size.

use crate::clients::{execute_sync, FileContent};
use crate::models::{
    BillingPeriod, BillingProvider, EstimateLink, Invoice, InvoiceLineItem, InvoiceLineItemType,
    InvoiceSummary,
};
use crate::rest::{
    node_kind, routes, Field, PartnerError, Query, QueryKind, ResourceCollection, SeekOperation,
    ValidationError,
};

node_kind! {
    /// The partner's invoices.
    InvoicesKind => InvoiceCollection []
    get ResourceCollection<Invoice> = routes::GET_INVOICES
}

node_kind! {
    /// The partner's account balance summary.
    InvoiceSummaryKind => InvoiceSummaryOperations []
    get InvoiceSummary = routes::GET_INVOICE_SUMMARY
}

node_kind! {
    /// Balance summaries, one per currency.
    InvoiceSummariesKind => InvoiceSummaries []
    get ResourceCollection<InvoiceSummary> = routes::GET_INVOICE_SUMMARIES
}

node_kind! {
    /// Invoice estimates.
    EstimatesKind => EstimateCollection []
}

node_kind! {
    /// Links to estimate files.
    EstimateLinksKind => EstimateLinks []
}

node_kind! {
    /// Links to estimate files in one currency.
    EstimateLinksByCurrencyKind => EstimateLinksByCurrency [CurrencyCode]
    get ResourceCollection<EstimateLink> = routes::GET_ESTIMATE_LINKS
}

node_kind! {
    /// A single invoice.
    InvoiceKind => InvoiceOperations [InvoiceId]
    get Invoice = routes::GET_INVOICE
}

node_kind! {
    /// The documents of an invoice.
    InvoiceDocumentsKind => InvoiceDocuments [InvoiceId]
}

node_kind! {
    /// The PDF statement of an invoice.
    InvoiceStatementKind => InvoiceStatement [InvoiceId]
}

node_kind! {
    /// The receipts of an invoice.
    ReceiptsKind => ReceiptCollection [InvoiceId]
}

node_kind! {
    /// A single receipt.
    ReceiptKind => ReceiptOperations [InvoiceId, ReceiptId]
}

node_kind! {
    /// The documents of a receipt.
    ReceiptDocumentsKind => ReceiptDocuments [InvoiceId, ReceiptId]
}

node_kind! {
    /// The PDF statement of a receipt.
    ReceiptStatementKind => ReceiptStatement [InvoiceId, ReceiptId]
}

node_kind! {
    /// The tax receipts of an invoice.
    TaxReceiptsKind => TaxReceiptCollection [InvoiceId]
}

node_kind! {
    /// A single tax receipt.
    TaxReceiptKind => TaxReceiptOperations [InvoiceId, TaxReceiptId]
}

node_kind! {
    /// The documents of a tax receipt.
    TaxReceiptDocumentsKind => TaxReceiptDocuments [InvoiceId, TaxReceiptId]
}

node_kind! {
    /// The PDF statement of a tax receipt.
    TaxReceiptStatementKind => TaxReceiptStatement [InvoiceId, TaxReceiptId]
}

node_kind! {
    /// Line items of an invoice for one provider and line item type.
    InvoiceLineItemsKind => InvoiceLineItems [InvoiceId, Provider, InvoiceLineItemType]
    get ResourceCollection<InvoiceLineItem> = routes::GET_INVOICE_LINE_ITEMS
}

node_kind! {
    /// Reconciliation line items of a billing period.
    ReconciliationLineItemsKind => ReconciliationLineItems [InvoiceId, Provider, InvoiceLineItemType, CurrencyCode, Period, PageSize]
    get ResourceCollection<InvoiceLineItem> = routes::GET_INVOICE_LINE_ITEMS
}

const INVOICE_QUERIES: &[QueryKind] = &[QueryKind::Indexed, QueryKind::Simple];

impl InvoiceCollection {
    /// A single invoice.
    ///
    /// # Errors
    ///
    /// Returns [`PartnerError::Validation`] if `invoice_id` is empty.
    pub fn by_id(&self, invoice_id: impl Into<String>) -> Result<InvoiceOperations, PartnerError> {
        self.child(Field::InvoiceId, invoice_id)
    }

    /// Lists invoices matching an indexed or simple query.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::UnsupportedQuery`] for any other query kind.
    pub async fn query(&self, query: &Query) -> Result<ResourceCollection<Invoice>, PartnerError> {
        query.ensure_kind(INVOICE_QUERIES)?;
        self.call(routes::GET_INVOICES)
            .listing(query)?
            .send_json()
            .await
    }

    /// Blocking variant of [`query`](Self::query).
    ///
    /// # Errors
    ///
    /// Same as [`query`](Self::query).
    pub fn query_blocking(&self, query: &Query) -> Result<ResourceCollection<Invoice>, PartnerError> {
        execute_sync(self.query(query))
    }

    /// The account balance summary.
    #[must_use]
    pub fn summary(&self) -> InvoiceSummaryOperations {
        self.scope()
    }

    /// The balance summaries per currency.
    #[must_use]
    pub fn summaries(&self) -> InvoiceSummaries {
        self.scope()
    }

    /// Invoice estimates.
    #[must_use]
    pub fn estimates(&self) -> EstimateCollection {
        self.scope()
    }
}

impl EstimateCollection {
    /// Links to estimate files.
    #[must_use]
    pub fn links(&self) -> EstimateLinks {
        self.scope()
    }
}

impl EstimateLinks {
    /// Narrows the links to a currency.
    ///
    /// # Errors
    ///
    /// Returns [`PartnerError::Validation`] if `currency_code` is empty.
    pub fn by_currency(
        &self,
        currency_code: impl Into<String>,
    ) -> Result<EstimateLinksByCurrency, PartnerError> {
        self.child(Field::CurrencyCode, currency_code)
    }
}

impl InvoiceOperations {
    /// The invoice's documents.
    #[must_use]
    pub fn documents(&self) -> InvoiceDocuments {
        self.scope()
    }

    /// The invoice's receipts.
    #[must_use]
    pub fn receipts(&self) -> ReceiptCollection {
        self.scope()
    }

    /// The invoice's tax receipts.
    #[must_use]
    pub fn tax_receipts(&self) -> TaxReceiptCollection {
        self.scope()
    }

    /// Line items of one billing provider and line item type.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::NoneSentinel`] if either argument is `None`.
    pub fn by(
        &self,
        provider: BillingProvider,
        line_item_type: InvoiceLineItemType,
    ) -> Result<InvoiceLineItems, PartnerError> {
        check_line_item_selector(provider, line_item_type)?;
        let context = self
            .context()
            .with(Field::Provider, provider.as_str())?
            .with(Field::InvoiceLineItemType, line_item_type.as_str())?;
        InvoiceLineItems::new(self.root().clone(), context)
    }

    /// Reconciliation line items of a billing period, paged by `page_size`.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::NoneSentinel`] if `provider` or
    /// `line_item_type` is `None`, or [`PartnerError::Validation`] if
    /// `currency_code` is empty.
    pub fn by_period(
        &self,
        provider: BillingProvider,
        line_item_type: InvoiceLineItemType,
        currency_code: impl Into<String>,
        period: BillingPeriod,
        page_size: u32,
    ) -> Result<ReconciliationLineItems, PartnerError> {
        check_line_item_selector(provider, line_item_type)?;
        let context = self
            .context()
            .with(Field::Provider, provider.as_str())?
            .with(Field::InvoiceLineItemType, line_item_type.as_str())?
            .with(Field::CurrencyCode, currency_code)?
            .with(Field::Period, period.as_str())?
            .with(Field::PageSize, page_size.to_string())?;
        ReconciliationLineItems::new(self.root().clone(), context)
    }
}

fn check_line_item_selector(
    provider: BillingProvider,
    line_item_type: InvoiceLineItemType,
) -> Result<(), ValidationError> {
    if provider == BillingProvider::None {
        return Err(ValidationError::NoneSentinel {
            field: "billing_provider",
        });
    }
    if line_item_type == InvoiceLineItemType::None {
        return Err(ValidationError::NoneSentinel {
            field: "invoice_line_item_type",
        });
    }
    Ok(())
}

impl InvoiceLineItems {
    /// Retrieves a page of `size` line items starting at `offset`.
    ///
    /// # Errors
    ///
    /// Returns the transport error if the request fails.
    pub async fn get_page(
        &self,
        size: u32,
        offset: u32,
    ) -> Result<ResourceCollection<InvoiceLineItem>, PartnerError> {
        self.call(routes::GET_INVOICE_LINE_ITEMS)
            .listing(&Query::indexed(size, offset))?
            .send_json()
            .await
    }

    /// Blocking variant of [`get_page`](Self::get_page).
    ///
    /// # Errors
    ///
    /// Same as [`get_page`](Self::get_page).
    pub fn get_page_blocking(
        &self,
        size: u32,
        offset: u32,
    ) -> Result<ResourceCollection<InvoiceLineItem>, PartnerError> {
        execute_sync(self.get_page(size, offset))
    }

    /// Fetches the page following `continuation_token`.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::EmptyContinuationToken`] if the token is
    /// empty.
    pub async fn seek(
        &self,
        continuation_token: &str,
        operation: SeekOperation,
    ) -> Result<ResourceCollection<InvoiceLineItem>, PartnerError> {
        self.call(routes::GET_INVOICE_LINE_ITEMS)
            .listing(&Query::seek(continuation_token, operation))?
            .send_json()
            .await
    }

    /// Blocking variant of [`seek`](Self::seek).
    ///
    /// # Errors
    ///
    /// Same as [`seek`](Self::seek).
    pub fn seek_blocking(
        &self,
        continuation_token: &str,
        operation: SeekOperation,
    ) -> Result<ResourceCollection<InvoiceLineItem>, PartnerError> {
        execute_sync(self.seek(continuation_token, operation))
    }
}

impl ReconciliationLineItems {
    /// Fetches the page following `continuation_token`.
    ///
    /// The period, currency and page size are sent again with the token.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::EmptyContinuationToken`] if the token is
    /// empty.
    pub async fn seek(
        &self,
        continuation_token: &str,
        operation: SeekOperation,
    ) -> Result<ResourceCollection<InvoiceLineItem>, PartnerError> {
        self.call(routes::GET_INVOICE_LINE_ITEMS)
            .listing(&Query::seek(continuation_token, operation))?
            .send_json()
            .await
    }

    /// Blocking variant of [`seek`](Self::seek).
    ///
    /// # Errors
    ///
    /// Same as [`seek`](Self::seek).
    pub fn seek_blocking(
        &self,
        continuation_token: &str,
        operation: SeekOperation,
    ) -> Result<ResourceCollection<InvoiceLineItem>, PartnerError> {
        execute_sync(self.seek(continuation_token, operation))
    }
}

impl InvoiceDocuments {
    /// The invoice statement.
    #[must_use]
    pub fn statement(&self) -> InvoiceStatement {
        self.scope()
    }
}

impl InvoiceStatement {
    /// Downloads the statement as a PDF.
    ///
    /// # Errors
    ///
    /// Returns the transport error if the request fails.
    pub async fn get(&self) -> Result<FileContent, PartnerError> {
        self.call(routes::GET_INVOICE_STATEMENT).send_file().await
    }

    /// Blocking variant of [`get`](Self::get).
    ///
    /// # Errors
    ///
    /// Same as [`get`](Self::get).
    pub fn get_blocking(&self) -> Result<FileContent, PartnerError> {
        execute_sync(self.get())
    }
}

impl ReceiptCollection {
    /// A single receipt.
    ///
    /// # Errors
    ///
    /// Returns [`PartnerError::Validation`] if `receipt_id` is empty.
    pub fn by_id(&self, receipt_id: impl Into<String>) -> Result<ReceiptOperations, PartnerError> {
        self.child(Field::ReceiptId, receipt_id)
    }
}

impl ReceiptOperations {
    /// The receipt's documents.
    #[must_use]
    pub fn documents(&self) -> ReceiptDocuments {
        self.scope()
    }
}

impl ReceiptDocuments {
    /// The receipt statement.
    #[must_use]
    pub fn statement(&self) -> ReceiptStatement {
        self.scope()
    }
}

impl ReceiptStatement {
    /// Downloads the statement as a PDF.
    ///
    /// # Errors
    ///
    /// Returns the transport error if the request fails.
    pub async fn get(&self) -> Result<FileContent, PartnerError> {
        self.call(routes::GET_RECEIPT_STATEMENT).send_file().await
    }

    /// Blocking variant of [`get`](Self::get).
    ///
    /// # Errors
    ///
    /// Same as [`get`](Self::get).
    pub fn get_blocking(&self) -> Result<FileContent, PartnerError> {
        execute_sync(self.get())
    }
}

impl TaxReceiptCollection {
    /// A single tax receipt.
    ///
    /// # Errors
    ///
    /// Returns [`PartnerError::Validation`] if `tax_receipt_id` is empty.
    pub fn by_id(
        &self,
        tax_receipt_id: impl Into<String>,
    ) -> Result<TaxReceiptOperations, PartnerError> {
        self.child(Field::TaxReceiptId, tax_receipt_id)
    }
}

impl TaxReceiptOperations {
    /// The tax receipt's documents.
    #[must_use]
    pub fn documents(&self) -> TaxReceiptDocuments {
        self.scope()
    }
}

impl TaxReceiptDocuments {
    /// The tax receipt statement.
    #[must_use]
    pub fn statement(&self) -> TaxReceiptStatement {
        self.scope()
    }
}

impl TaxReceiptStatement {
    /// Downloads the statement as a PDF.
    ///
    /// # Errors
    ///
    /// Returns the transport error if the request fails.
    pub async fn get(&self) -> Result<FileContent, PartnerError> {
        self.call(routes::GET_TAX_RECEIPT_STATEMENT).send_file().await
    }

    /// Blocking variant of [`get`](Self::get).
    ///
    /// # Errors
    ///
    /// Same as [`get`](Self::get).
    pub fn get_blocking(&self) -> Result<FileContent, PartnerError> {
        execute_sync(self.get())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::operations::test_support::partner;

    fn invoice() -> InvoiceOperations {
        partner().invoices().by_id("unbilled").unwrap()
    }

    #[test]
    fn test_none_sentinels_are_rejected() {
        let err = invoice()
            .by(BillingProvider::None, InvoiceLineItemType::BillingLineItems)
            .unwrap_err();
        assert!(matches!(
            err,
            PartnerError::Validation(ValidationError::NoneSentinel {
                field: "billing_provider"
            })
        ));

        let err = invoice()
            .by_period(
                BillingProvider::All,
                InvoiceLineItemType::None,
                "USD",
                BillingPeriod::Current,
                500,
            )
            .unwrap_err();
        assert!(matches!(
            err,
            PartnerError::Validation(ValidationError::NoneSentinel {
                field: "invoice_line_item_type"
            })
        ));
    }

    #[test]
    fn test_reconciliation_query_order() {
        let items = invoice()
            .by_period(
                BillingProvider::All,
                InvoiceLineItemType::UsageLineItems,
                "USD",
                BillingPeriod::Current,
                500,
            )
            .unwrap();

        let rendered = routes::GET_INVOICE_LINE_ITEMS
            .render(items.context())
            .unwrap();
        assert_eq!(rendered.path, "invoices/unbilled/lineitems");
        let keys: Vec<&str> = rendered.query.iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(
            keys,
            ["provider", "invoiceLineItemType", "currencyCode", "period", "size"]
        );
    }

    #[test]
    fn test_statement_routes() {
        let receipt = invoice().receipts().by_id("r-1").unwrap();
        let rendered = routes::GET_RECEIPT_STATEMENT
            .render(receipt.documents().statement().context())
            .unwrap();
        assert_eq!(
            rendered.path,
            "invoices/unbilled/receipts/r-1/documents/statement"
        );

        let tax = invoice().tax_receipts().by_id("t-1").unwrap();
        let rendered = routes::GET_TAX_RECEIPT_STATEMENT
            .render(tax.documents().statement().context())
            .unwrap();
        assert_eq!(
            rendered.path,
            "invoices/unbilled/taxreceipts/t-1/documents/statement"
        );
    }

    #[tokio::test]
    async fn test_unsupported_query_kinds_fail_locally() {
        let invoices = partner().invoices();

        for query in [Query::all(), Query::seek("token", SeekOperation::Next)] {
            let err = invoices.query(&query).await.unwrap_err();
            assert!(matches!(
                err,
                PartnerError::Validation(ValidationError::UnsupportedQuery { .. })
            ));
        }
    }
}
