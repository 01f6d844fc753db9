use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::sync::Arc;

use nutrifitt_api::{AppState, config::Config, database::PgUserStore, router::create_router};
use sqlx::Executor;
use sqlx::postgres::PgPoolOptions;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    // 初始化日志
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    // 加载配置
    let config = Config::from_env().expect("Failed to load configuration");

    let connect_options = config
        .database
        .connect_options()
        .expect("Invalid database configuration");

    // 设置数据库连接池
    let pool = PgPoolOptions::new()
        .max_connections(config.database.max_connections)
        .after_connect(|conn, _meta| {
            Box::pin(async move {
                conn.execute("SET application_name = 'nutrifitt_api';")
                    .await?;
                Ok(())
            })
        })
        .connect_with(connect_options)
        .await
        .expect("Failed to connect to Postgres");

    let state = AppState {
        store: Arc::new(PgUserStore::new(pool)),
        config: config.clone(),
    };

    let app = create_router(state);

    let addr = SocketAddr::new(
        config.server_host.parse().unwrap_or_else(|_| {
            tracing::warn!("Invalid server_host, falling back to 0.0.0.0");
            IpAddr::V4(Ipv4Addr::UNSPECIFIED)
        }),
        config.server_port,
    );
    tracing::info!("NutriFitt API listening on {}", addr);
    tracing::info!("Health check: http://localhost:{}/health", config.server_port);
    tracing::info!("DB check: http://localhost:{}/api/test-db", config.server_port);

    axum::serve(
        tokio::net::TcpListener::bind(&addr)
            .await
            .expect("Failed to bind"),
        app,
    )
    .await
    .expect("Failed to start server");
}
