//! Receipt renderer trait

use crate::error::DomainError;
use crate::receipt::ReceiptLayout;

pub trait ReceiptRenderer: Send + Sync {
    fn content_type(&self) -> &'static str;

    fn render(&self, layout: &ReceiptLayout) -> Result<Vec<u8>, DomainError>;
}
