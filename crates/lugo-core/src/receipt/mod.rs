//! Receipt layout and rendering.
//!
//! [`ReceiptLayout`] is built once from [`ReceiptData`]; every output format
//! implements [`ReceiptRenderer`] over that same layout.

pub mod layout;
pub mod renderer;
pub mod html;

pub use layout::{month_name, LayoutElement, ReceiptData, ReceiptLayout, RECEIPT_TITLE};
pub use renderer::ReceiptRenderer;
pub use html::HtmlReceiptRenderer;
