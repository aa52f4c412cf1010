use serde::Deserialize;
use validator::Validate;

#[derive(Debug, Deserialize, Validate)]
pub struct SignedUrlRequest {
    #[validate(length(min = 1, max = 500, message = "Path is required"))]
    pub path: String,
}
