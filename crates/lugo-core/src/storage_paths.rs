//! Object naming inside the storage bucket.
//!
//! Receipts: `{user}/{property}/comprovantes/{millis}-{tenant-name}.pdf`
//! Uploads:  `{user}/{millis}-{random}.{ext}`

use rand::Rng;
use uuid::Uuid;

use lugo_shared::constants::{DEFAULT_UPLOAD_EXTENSION, RECEIPTS_FOLDER, UPLOAD_RANDOM_SEGMENT_LEN};
use lugo_shared::utils::dash_whitespace;

const BASE36: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";

pub fn receipt_object_path(user_id: &Uuid, property_id: &Uuid, millis: i64, tenant_name: &str) -> String {
    format!(
        "{}/{}/{}/{}-{}.pdf",
        user_id,
        property_id,
        RECEIPTS_FOLDER,
        millis,
        dash_whitespace(tenant_name)
    )
}

/// Lowercased text after the last `.`, `jpg` when there is none.
pub fn file_extension(original_name: &str) -> String {
    match original_name.rsplit_once('.') {
        Some((_, ext)) if !ext.is_empty() => ext.to_lowercase(),
        _ => DEFAULT_UPLOAD_EXTENSION.to_string(),
    }
}

pub fn random_segment(len: usize) -> String {
    let mut rng = rand::rng();
    (0..len)
        .map(|_| BASE36[rng.random_range(0..BASE36.len())] as char)
        .collect()
}

pub fn upload_object_path(user_id: &Uuid, millis: i64, original_name: &str) -> String {
    format!(
        "{}/{}-{}.{}",
        user_id,
        millis,
        random_segment(UPLOAD_RANDOM_SEGMENT_LEN),
        file_extension(original_name)
    )
}

/// Percent-encodes every segment of an object path for use in a URL.
pub fn encode_object_path(path: &str) -> String {
    path.split('/')
        .map(|segment| urlencoding::encode(segment))
        .collect::<Vec<_>>()
        .join("/")
}

/// Extracts the object path that follows the `bucket` segment of a public
/// object URL. Query string and fragment are ignored. Segments are
/// percent-decoded.
pub fn storage_path_from_url(url: &str, bucket: &str) -> Option<String> {
    let without_scheme = url.split_once("://").map(|(_, rest)| rest).unwrap_or(url);
    let path = without_scheme
        .find('/')
        .map(|idx| &without_scheme[idx..])
        .unwrap_or("");
    let path = path.split(['?', '#']).next().unwrap_or("");

    let segments: Vec<&str> = path.split('/').collect();
    let bucket_index = segments.iter().position(|s| *s == bucket)?;
    let object = segments[bucket_index + 1..]
        .iter()
        .map(|segment| urlencoding::decode(segment).ok().map(|s| s.into_owned()))
        .collect::<Option<Vec<_>>>()?
        .join("/");
    if object.is_empty() {
        None
    } else {
        Some(object)
    }
}

/// A client-chosen upload path is only accepted under the user's own prefix.
pub fn is_user_path(user_id: &Uuid, path: &str) -> bool {
    let prefix = format!("{}/", user_id);
    path.starts_with(&prefix) && path.len() > prefix.len() && !path.split('/').any(|s| s == "..")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_receipt_object_path() {
        let user = Uuid::nil();
        let property = Uuid::from_u128(1);
        let path = receipt_object_path(&user, &property, 1700000000000, "Maria  da Silva");
        assert_eq!(
            path,
            format!("{}/{}/comprovantes/1700000000000-Maria-da-Silva.pdf", user, property)
        );
    }

    #[test]
    fn test_upload_object_path_shape() {
        let user = Uuid::new_v4();
        let path = upload_object_path(&user, 42, "Foto.JPEG");
        let (prefix, name) = path.split_once('/').unwrap();
        assert_eq!(prefix, user.to_string());
        assert!(name.starts_with("42-"));
        assert!(name.ends_with(".jpeg"));
        let random = name.trim_start_matches("42-").trim_end_matches(".jpeg");
        assert_eq!(random.len(), 13);
        assert!(random.chars().all(|c| c.is_ascii_alphanumeric() && !c.is_ascii_uppercase()));
    }

    #[test]
    fn test_file_extension_default() {
        assert_eq!(file_extension("semextensao"), "jpg");
        assert_eq!(file_extension("a.b.PNG"), "png");
    }

    #[test]
    fn test_storage_path_from_url() {
        let url = "https://abc.supabase.co/storage/v1/object/public/imoveis-fotos/u1/p1/comprovantes/1-Ana.pdf";
        assert_eq!(
            storage_path_from_url(url, "imoveis-fotos").as_deref(),
            Some("u1/p1/comprovantes/1-Ana.pdf")
        );
        assert_eq!(
            storage_path_from_url(&format!("{}?download=1", url), "imoveis-fotos").as_deref(),
            Some("u1/p1/comprovantes/1-Ana.pdf")
        );
        assert_eq!(storage_path_from_url("https://cdn.example.com/other/file.pdf", "imoveis-fotos"), None);
        assert_eq!(storage_path_from_url("not a url", "imoveis-fotos"), None);
    }

    #[test]
    fn test_encoded_path_round_trips() {
        let path = "u1/p1/comprovantes/1-Ana-#2?.pdf";
        let encoded = encode_object_path(path);
        assert_eq!(encoded, "u1/p1/comprovantes/1-Ana-%232%3F.pdf");

        let url = format!("https://abc.supabase.co/storage/v1/object/public/imoveis-fotos/{}", encoded);
        assert_eq!(storage_path_from_url(&url, "imoveis-fotos").as_deref(), Some(path));
    }

    #[test]
    fn test_is_user_path() {
        let user = Uuid::new_v4();
        assert!(is_user_path(&user, &format!("{}/foto.jpg", user)));
        assert!(!is_user_path(&user, &format!("{}/", user)));
        assert!(!is_user_path(&user, &format!("{}/../x.jpg", user)));
        assert!(!is_user_path(&user, "outro/foto.jpg"));
    }
}
