mod catalog_item;
mod draft;
mod invoice;
mod line_item;
mod requests;

pub use catalog_item::CatalogItem;
pub use draft::InvoiceDraft;
pub use invoice::{InvoiceSummary, InvoiceTotals};
pub use line_item::{LineItem, LineItemResult};
pub use requests::{
    ComputeLineItemRequest, InvoiceTotalsRequest, InvoiceTotalsResponse, LineItemResponse,
    RecomputeTotalsRequest,
};
