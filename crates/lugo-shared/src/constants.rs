//! Application-wide constants

pub const MIN_PASSWORD_LENGTH: usize = 8;
pub const TOKEN_TYPE_ACCESS: &str = "access";
pub const DEFAULT_ACCESS_TOKEN_EXPIRY: i64 = 3600;
pub const DEFAULT_SESSION_TTL: i64 = 3600;

pub const DEFAULT_STORAGE_BUCKET: &str = "imoveis-fotos";
pub const RECEIPTS_FOLDER: &str = "comprovantes";
pub const RECEIPT_CONTENT_TYPE: &str = "application/pdf";
pub const DEFAULT_UPLOAD_EXTENSION: &str = "jpg";
pub const UPLOAD_RANDOM_SEGMENT_LEN: usize = 13;
pub const DEFAULT_MAX_PHOTO_SIZE_MB: u64 = 5;

pub const RECENT_PROPERTIES_LIMIT: i64 = 3;

pub const TAX_ID_LENGTH: usize = 11;
pub const POSTAL_CODE_LENGTH: usize = 8;
pub const LANDLINE_PHONE_LENGTH: usize = 10;
pub const MOBILE_PHONE_LENGTH: usize = 11;
