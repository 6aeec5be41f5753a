use std::sync::Arc;

use tokio::sync::Mutex;

use wayfare_guide::GuideService;
use wayfare_session::Session;
use wayfare_store::PlanStore;

#[derive(Clone)]
pub struct AppState {
    /// The single interactive session; its lock serializes every mutation.
    pub session: Arc<Mutex<Session>>,
    pub store: Arc<PlanStore>,
    pub guide: Arc<GuideService>,
    pub default_currency: String,
}
