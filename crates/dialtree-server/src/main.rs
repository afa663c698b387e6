#![forbid(unsafe_code)]

use std::{env, net::SocketAddr};

use tracing::info;

use dialtree_server::logging::{self, Profile};
use dialtree_server::{router, shared};
use dialtree_store::{db, migrations, SqliteStore};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    logging::init(parse_log_profile_from_env());

    let bind = env::var("DIALTREE_HTTP_BIND").unwrap_or_else(|_| "127.0.0.1:5000".to_string());
    let addr: SocketAddr = bind.parse()?;
    let db_path = env::var("DIALTREE_DB").unwrap_or_else(|_| "dialtree.db".to_string());

    let mut conn = db::open(&db_path)?;
    db::configure(&conn)?;
    migrations::apply_migrations(&mut conn)?;
    info!(db_path = %db_path, "store ready");

    let state = shared(SqliteStore::new(conn));
    let app = router(state);

    info!(%addr, "dialtree-server listening");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("shutdown complete");
    Ok(())
}

fn parse_log_profile_from_env() -> Profile {
    match env::var("DIALTREE_LOG_FORMAT") {
        Ok(v) if v.trim().eq_ignore_ascii_case("json") => Profile::Production,
        _ => Profile::Development,
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install ctrl-c handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
    info!("shutdown signal received");
}
