//! `Authorization: ApiKey <key>` を取り出す → ApiKeyCtx を extensions に入れる
//!
//! - 取り出しに失敗したら 401 (WWW-Authenticate: ApiKey)
//! - key の照合はしない。空の key (`ApiKey `) もそのまま通す
//! - key 本体はログに出さず、fingerprint だけを出す

use axum::{
    Router,
    body::Body,
    http::Request,
    middleware::{self, Next},
    response::Response,
};

use crate::api::v1::extractors::ApiKeyCtx;
use crate::error::AppError;
use crate::services::auth::{fingerprint, get_api_key};
use crate::state::AppState;

/// 保護したい Router に API key の取り出しを掛ける。
///
/// 例：
/// ```ignore
/// let protected = middleware::auth::api_key::apply(Router::new().route("/whoami", get(whoami)));
/// ```
pub fn apply(router: Router<AppState>) -> Router<AppState> {
    router.layer(middleware::from_fn(api_key_middleware))
}

async fn api_key_middleware(mut req: Request<Body>, next: Next) -> Result<Response, AppError> {
    let ctx = match get_api_key(req.headers()) {
        Ok(key) => ApiKeyCtx::new(key),
        Err(err) => {
            tracing::warn!(
                error = %err,
                method = %req.method(),
                path = %req.uri().path(),
                "api key extraction failed"
            );
            return Err(err.into());
        }
    };

    tracing::debug!(key_fingerprint = %fingerprint(&ctx.key), "api key extracted");

    // middleware → extractor への受け渡し
    req.extensions_mut().insert(ctx);

    Ok(next.run(req).await)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::v1::extractors::ApiKeyCtxExtractor;
    use axum::http::{StatusCode, header};
    use axum::routing::get;
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    async fn echo(ApiKeyCtxExtractor(ctx): ApiKeyCtxExtractor) -> String {
        ctx.key
    }

    fn app() -> Router {
        apply(Router::new().route("/echo", get(echo))).with_state(AppState::new())
    }

    fn request(authorization: Option<&'static str>) -> Request<Body> {
        let mut builder = Request::builder().uri("/echo");
        if let Some(value) = authorization {
            builder = builder.header(header::AUTHORIZATION, value);
        }
        builder.body(Body::empty()).unwrap()
    }

    async fn body_string(res: Response) -> String {
        let bytes = res.into_body().collect().await.unwrap().to_bytes();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn passes_key_to_handler() {
        let res = app()
            .oneshot(request(Some("ApiKey test-key-123")))
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::OK);
        assert_eq!(body_string(res).await, "test-key-123");
    }

    #[tokio::test]
    async fn prefix_only_passes_with_empty_key() {
        let res = app().oneshot(request(Some("ApiKey "))).await.unwrap();
        assert_eq!(res.status(), StatusCode::OK);
        assert_eq!(body_string(res).await, "");
    }

    #[tokio::test]
    async fn rejects_missing_and_malformed() {
        for auth in [None, Some(""), Some("Bearer test-key-123"), Some("ApiKey")] {
            let res = app().oneshot(request(auth)).await.unwrap();
            assert_eq!(res.status(), StatusCode::UNAUTHORIZED, "{auth:?}");
            assert_eq!(
                res.headers().get(header::WWW_AUTHENTICATE).unwrap(),
                "ApiKey"
            );
        }
    }
}
