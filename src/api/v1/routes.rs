/*
 * Responsibility
 * - v1 の URL 構造を定義
 * - API key が必要な範囲 (protected) にだけ middleware を適用する
 */
use axum::{Router, routing::get};

use crate::middleware;
use crate::state::AppState;

use crate::api::v1::handlers::{health::health, whoami::whoami};

pub fn routes() -> Router<AppState> {
    let public = Router::new().route("/health", get(health));
    let protected = middleware::auth::api_key::apply(Router::new().route("/whoami", get(whoami)));

    public.merge(protected)
}
