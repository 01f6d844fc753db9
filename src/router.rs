use axum::{
    Router,
    http::{HeaderName, HeaderValue, Method, header},
    middleware,
    routing::{get, post},
};
use tower_http::{cors::CorsLayer, set_header::SetResponseHeaderLayer};

use crate::{
    AppState,
    middleware::{auth_middleware, log_errors},
    routes,
};

/// Builds the full application: public routes, the token-gated profile route,
/// CORS, security headers and server-error logging.
pub fn create_router(state: AppState) -> Router {
    let public_routes = Router::new()
        .route("/health", get(routes::health::health))
        .route("/api/test-db", get(routes::test_db::test_db))
        .route("/api/auth/login", post(routes::user::login));

    // 需要认证的路由
    let protected_routes = Router::new()
        .route("/api/user/profile", get(routes::user::profile))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            auth_middleware,
        ));

    let router = Router::new()
        .merge(public_routes)
        .merge(protected_routes)
        .layer(middleware::from_fn(log_errors));

    let router = with_security_headers(router);
    let router = match cors_layer(&state.config.frontend_url) {
        Some(cors) => router.layer(cors),
        None => router,
    };

    router.with_state(state)
}

fn with_security_headers(router: Router<AppState>) -> Router<AppState> {
    router
        .layer(SetResponseHeaderLayer::if_not_present(
            header::X_CONTENT_TYPE_OPTIONS,
            HeaderValue::from_static("nosniff"),
        ))
        .layer(SetResponseHeaderLayer::if_not_present(
            header::X_FRAME_OPTIONS,
            HeaderValue::from_static("SAMEORIGIN"),
        ))
        .layer(SetResponseHeaderLayer::if_not_present(
            header::REFERRER_POLICY,
            HeaderValue::from_static("no-referrer"),
        ))
        .layer(SetResponseHeaderLayer::if_not_present(
            HeaderName::from_static("x-dns-prefetch-control"),
            HeaderValue::from_static("off"),
        ))
}

fn cors_layer(frontend_url: &str) -> Option<CorsLayer> {
    let origin = match HeaderValue::from_str(frontend_url) {
        Ok(origin) => origin,
        Err(_) => {
            tracing::warn!("Invalid FRONTEND_URL {:?}, CORS disabled", frontend_url);
            return None;
        }
    };

    Some(
        CorsLayer::new()
            .allow_origin(origin)
            .allow_credentials(true)
            .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
            .allow_headers([header::AUTHORIZATION, header::CONTENT_TYPE]),
    )
}
