use serde::Serialize;

/// GET /whoami のレスポンス
/// key 本体は返さず、指紋と長さだけを返す
#[derive(Debug, Serialize)]
pub struct WhoamiResponse {
    pub key_fingerprint: String,
    pub key_length: usize,
}
