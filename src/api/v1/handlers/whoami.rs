/*
 * Responsibility
 * - GET /whoami
 * - middleware が取り出した API key の指紋を返す（照合はしない）
 */
use axum::Json;

use crate::api::v1::{dto::whoami::WhoamiResponse, extractors::ApiKeyCtxExtractor};

pub async fn whoami(ApiKeyCtxExtractor(ctx): ApiKeyCtxExtractor) -> Json<WhoamiResponse> {
    Json(WhoamiResponse {
        key_fingerprint: ctx.fingerprint(),
        key_length: ctx.key.len(),
    })
}
