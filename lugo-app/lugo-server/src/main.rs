use std::net::{IpAddr, SocketAddr};
use std::sync::Arc;
use std::time::Duration;

use tracing::{error, info};

use lugo_api::{build_router, AppState};
use lugo_core::repositories::{
    ObjectStorage, ProfileRepository, PropertyRepository, ReceiptRepository, SessionStore,
    TenantRepository,
};
use lugo_core::services::{
    AuthService, CatalogService, DashboardService, LeaseService, ProfileService, PropertyService,
    ReceiptService, TenantService, UploadPolicy, UploadService,
};
use lugo_infrastructure::{
    create_pool, run_migrations, HttpObjectStorage, MemorySessionStore, PdfReceiptRenderer,
    PgProfileRepository, PgPropertyRepository, PgReceiptRepository, PgTenantRepository,
    PgUserRepository, RedisSessionStore,
};
use lugo_security::JwtService;
use lugo_shared::config::{AppConfig, SessionBackend};

const SESSION_CLEANUP_INTERVAL: Duration = Duration::from_secs(300);

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env
    dotenvy::dotenv().ok();

    // Initialize telemetry
    lugo_shared::telemetry::init_telemetry();

    info!("Lugo server starting...");

    // Load configuration
    let config = match AppConfig::load() {
        Ok(c) => c,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    // Connect to Database
    info!("Connecting to database...");
    let pool = create_pool(&config.database).await?;
    info!("Database connection established.");

    if config.database.run_migrations {
        run_migrations(&pool).await?;
    }

    // Session store
    let sessions: Arc<dyn SessionStore> = match config.session.backend {
        SessionBackend::Memory => {
            let store = MemorySessionStore::new();
            spawn_session_cleanup(store.clone());
            info!("Using in-memory session store");
            Arc::new(store)
        }
        SessionBackend::Redis => {
            info!("Using Redis session store");
            Arc::new(RedisSessionStore::new(&config.redis)?)
        }
    };

    // Adapters
    let profiles: Arc<dyn ProfileRepository> = Arc::new(PgProfileRepository::new(pool.clone()));
    let properties: Arc<dyn PropertyRepository> = Arc::new(PgPropertyRepository::new(pool.clone()));
    let tenants: Arc<dyn TenantRepository> = Arc::new(PgTenantRepository::new(pool.clone()));
    let receipts: Arc<dyn ReceiptRepository> = Arc::new(PgReceiptRepository::new(pool.clone()));
    let storage: Arc<dyn ObjectStorage> = Arc::new(HttpObjectStorage::new(&config.storage)?);

    // Create App State
    let state = AppState {
        db: pool.clone(),
        auth: Arc::new(AuthService::new(
            Arc::new(PgUserRepository::new(pool)),
            profiles.clone(),
            sessions,
            JwtService::new(config.jwt.secret.clone(), config.jwt.access_token_expiry),
            config.session.ttl_seconds,
        )),
        profiles: Arc::new(ProfileService::new(profiles.clone())),
        properties: Arc::new(PropertyService::new(properties.clone())),
        tenants: Arc::new(TenantService::new(properties.clone(), tenants.clone())),
        leases: Arc::new(LeaseService::new(
            properties.clone(),
            tenants.clone(),
            receipts.clone(),
            storage.clone(),
        )),
        receipts: Arc::new(ReceiptService::new(
            properties.clone(),
            tenants.clone(),
            receipts.clone(),
            storage.clone(),
            Arc::new(PdfReceiptRenderer::new()),
        )),
        catalog: Arc::new(CatalogService::new(properties.clone(), profiles)),
        uploads: Arc::new(UploadService::new(
            storage,
            UploadPolicy {
                max_size_mb: config.uploads.max_photo_size_mb,
                allowed_types: config.uploads.allowed_types.clone(),
            },
        )),
        dashboard: Arc::new(DashboardService::new(properties, tenants, receipts)),
        config: config.clone(),
    };

    // Build router
    let app = build_router(state);

    // Bind address
    let host: IpAddr = config.app.host.parse()?;
    let addr = SocketAddr::from((host, config.app.port));
    info!("Listening on {}", addr);

    // Start server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Lugo server stopped");
    Ok(())
}

/// Drops expired sessions from the in-memory store.
fn spawn_session_cleanup(store: MemorySessionStore) {
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(SESSION_CLEANUP_INTERVAL);
        loop {
            interval.tick().await;
            let removed = store.cleanup_expired();
            if removed > 0 {
                info!("Removed {} expired sessions", removed);
            }
        }
    });
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!("Failed to listen for shutdown signal: {}", e);
    }
    info!("Shutdown signal received");
}
