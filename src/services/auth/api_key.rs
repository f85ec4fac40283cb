//! `Authorization: ApiKey <key>` の解析
//!
//! Responsibility:
//! - header map から API key を取り出す（純粋関数、状態を持たない）
//! - 失敗理由を AuthError の 2 種類に分類する
//!
//! Notes:
//! - key の照合（credential store への問い合わせ）はここの責務ではない
//! - `ApiKey ` （prefix + 空白のみ）は空の key として成功扱いにする

use axum::http::{HeaderMap, header};
use base64::Engine;
use sha2::{Digest, Sha256};
use thiserror::Error;

/// scheme token とその区切りの空白 1 つ
pub const API_KEY_PREFIX: &str = "ApiKey ";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AuthError {
    #[error("no authorization header included")]
    NoAuthHeaderIncluded,
    #[error("malformed authorization header")]
    MalformedHeader,
}

/// `Authorization` ヘッダから API key を取り出す。
///
/// - ヘッダ名は大文字小文字を区別しない（`HeaderMap` の仕様）
/// - 複数値がある場合は先頭の値だけを見る
/// - 返す key は prefix 以降をそのまま（trim しない）
pub fn get_api_key(headers: &HeaderMap) -> Result<&str, AuthError> {
    let value = match headers.get(header::AUTHORIZATION) {
        Some(v) if !v.is_empty() => v,
        _ => return Err(AuthError::NoAuthHeaderIncluded),
    };

    // visible ASCII 以外を含む値は prefix に一致し得ない
    let value = value.to_str().map_err(|_| AuthError::MalformedHeader)?;

    value
        .strip_prefix(API_KEY_PREFIX)
        .ok_or(AuthError::MalformedHeader)
}

/// ログ・レスポンスに出してよい key の指紋 (base64url(SHA-256))
pub fn fingerprint(key: &str) -> String {
    let digest = Sha256::digest(key.as_bytes());
    base64::engine::general_purpose::URL_SAFE_NO_PAD.encode(digest)
}
