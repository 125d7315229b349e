mod cors;
mod health;

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use axum::Router;
use envision_config::{Config, RetentionConfig};
use envision_store::{ArtifactStore, RetentionPolicy};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

/// Assembled server with all routes and middleware
pub struct Server {
    router: Router,
    listen_address: SocketAddr,
    store: Arc<ArtifactStore>,
    retention: Option<(RetentionPolicy, Duration)>,
}

impl Server {
    /// Build the server from configuration
    ///
    /// # Errors
    ///
    /// Returns an error if session service initialization fails or a
    /// retention duration does not parse
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        let listen_address = config
            .server
            .listen_address
            .unwrap_or_else(|| SocketAddr::from(([0, 0, 0, 0], 3000)));

        let store = Arc::new(ArtifactStore::new(&config.storage));
        let service = envision_session::build_service(config, Arc::clone(&store))?;

        let retention = config.storage.retention.as_ref().map(retention_schedule).transpose()?;

        let mut app = Router::new();

        // Health check
        if config.server.health.enabled {
            app = app.route(&config.server.health.path, axum::routing::get(health::health_handler));
        }

        // Session and sample endpoints
        app = app.merge(envision_session::endpoint_router().with_state(service));

        // Generated audio served statically under the public path
        app = app.nest_service(&config.storage.public_path, ServeDir::new(store.audio_dir()));

        // Tracing
        app = app.layer(TraceLayer::new_for_http());

        // CORS
        if let Some(ref cors_config) = config.server.cors {
            app = app.layer(cors::cors_layer(cors_config));
        }

        Ok(Self {
            router: app,
            listen_address,
            store,
            retention,
        })
    }

    /// Get the configured listen address
    #[must_use]
    pub const fn listen_address(&self) -> SocketAddr {
        self.listen_address
    }

    /// Consume the server and return the inner router
    ///
    /// Useful for testing when the caller manages the listener
    pub fn into_router(self) -> Router {
        self.router
    }

    /// Start serving requests
    ///
    /// Spawns the retention sweeper when one is configured, then blocks
    /// until the cancellation token is triggered.
    ///
    /// # Errors
    ///
    /// Returns an error if binding the TCP listener or serving fails
    pub async fn serve(self, shutdown: tokio_util::sync::CancellationToken) -> anyhow::Result<()> {
        if let Some((policy, period)) = self.retention {
            tokio::spawn(envision_store::run_sweeper(
                Arc::clone(&self.store),
                policy,
                period,
                shutdown.clone(),
            ));
        }

        let listener = tokio::net::TcpListener::bind(self.listen_address).await?;
        let local_addr = listener.local_addr()?;
        tracing::info!(%local_addr, "server listening");

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                shutdown.cancelled().await;
                tracing::info!("graceful shutdown initiated");
            })
            .await?;

        Ok(())
    }
}

fn retention_schedule(config: &RetentionConfig) -> anyhow::Result<(RetentionPolicy, Duration)> {
    let max_age = config.max_age.as_deref().map(parse_duration).transpose()?;
    let period = parse_duration(&config.sweep_interval)?;

    Ok((
        RetentionPolicy {
            max_files: config.max_files,
            max_age,
        },
        period,
    ))
}

fn parse_duration(s: &str) -> anyhow::Result<Duration> {
    let duration =
        duration_str::parse(s).map_err(|e| anyhow::anyhow!("invalid duration '{s}': {e}"))?;

    if duration.is_zero() {
        anyhow::bail!("duration '{s}' must be positive");
    }

    Ok(duration)
}
