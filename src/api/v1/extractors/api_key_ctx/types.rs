/*
 * Responsibility
 * - Handler から見える「API key 付きリクエスト」のコンテキスト型
 * - middleware が request extensions に格納し、handler はこの型だけを受け取る
 *
 * Notes
 * - key の照合（主体への解決）は外部の credential store の責務
 */
use crate::services::auth::fingerprint;

/// `Authorization: ApiKey <key>` から取り出した key
///
/// - `key` は空文字列のこともある（`ApiKey ` のみのヘッダ）
/// - Debug 出力では key 本体を伏せる
#[derive(Clone)]
pub struct ApiKeyCtx {
    pub key: String,
}

impl ApiKeyCtx {
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }

    pub fn fingerprint(&self) -> String {
        fingerprint(&self.key)
    }
}

impl std::fmt::Debug for ApiKeyCtx {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiKeyCtx")
            .field("fingerprint", &self.fingerprint())
            .finish()
    }
}
