use std::net::SocketAddr;
use std::sync::Arc;

use tokio::sync::Mutex;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use wayfare_api::{app, offline::OfflineModel, AppState};
use wayfare_guide::GuideService;
use wayfare_session::Session;
use wayfare_shared::{IdGenerator, UuidIds};
use wayfare_store::app_config::Settings;
use wayfare_store::{JsonFileArchive, PlanArchive, PlanStore};

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "wayfare_api=debug,tower_http=debug,axum::rejection=trace".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let settings = Settings::load().expect("Failed to load config");
    tracing::info!("Starting Wayfare API on port {}", settings.server.port);

    let mut archive = JsonFileArchive::new(&settings.archive.path);
    if let Some(legacy) = &settings.archive.legacy_path {
        archive = archive.with_legacy(legacy);
    }
    let archive: Arc<dyn PlanArchive> = Arc::new(archive);
    let ids: Arc<dyn IdGenerator> = Arc::new(UuidIds);

    let state = AppState {
        session: Arc::new(Mutex::new(Session::new(ids.clone()))),
        store: Arc::new(PlanStore::new(archive, ids.clone())),
        guide: Arc::new(GuideService::new(Arc::new(OfflineModel), ids)),
        default_currency: settings.guide.default_currency.clone(),
    };

    let app = app(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], settings.server.port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}
