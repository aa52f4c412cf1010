//! PDF rendering of receipts

mod metrics;
pub mod receipt_pdf;

pub use receipt_pdf::PdfReceiptRenderer;
