/*
 * Responsibility
 * - handler が受け取る extractor の公開ポイント
 */
mod api_key_ctx;

pub use api_key_ctx::{ApiKeyCtx, ApiKeyCtxExtractor};
