//! Invoice lookups.

use lotus_core::{CustomerId, Invoice, InvoiceId, InvoicePaymentStatus, InvoicePdfUrl};

use crate::client::LotusClient;
use crate::error::Result;
use crate::query::{Query, QueryParams};

/// Filters for [`LotusClient::list_invoices`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListInvoicesRequest {
    /// Only invoices of this customer.
    pub customer_id: Option<CustomerId>,
    /// Only invoices in these payment states.
    pub payment_status: Vec<InvoicePaymentStatus>,
}

impl QueryParams for ListInvoicesRequest {
    fn to_query(&self) -> Result<Query> {
        let mut query = Query::new();
        query
            .insert_opt("customer_id", self.customer_id.as_ref())
            .extend("payment_status", &self.payment_status);
        Ok(query)
    }
}

impl LotusClient {
    /// List invoices.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the server returns an error.
    pub async fn list_invoices(&self, request: &ListInvoicesRequest) -> Result<Vec<Invoice>> {
        let query = request.to_query()?;
        self.get(&["api", "invoices", ""], Some(&query)).await
    }

    /// Get an invoice by ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the server returns an error.
    pub async fn get_invoice(&self, invoice_id: &InvoiceId) -> Result<Invoice> {
        self.get(&["api", "invoices", invoice_id.as_str(), ""], None)
            .await
    }

    /// Get a download URL for an invoice's PDF.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the server returns an error.
    pub async fn get_invoice_pdf_url(&self, invoice_id: &InvoiceId) -> Result<InvoicePdfUrl> {
        self.get(&["api", "invoices", invoice_id.as_str(), "pdf_url", ""], None)
            .await
    }
}
