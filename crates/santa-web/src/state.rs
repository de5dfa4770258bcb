use std::sync::Arc;

use santa_core::FeasibilityModel;

use super::{assets::Assets, config::Config, session::SessionStore};

pub struct State {
    pub config: Config,
    pub assets: Assets,
    pub sessions: Arc<SessionStore>,
    pub model: FeasibilityModel,
}

impl State {
    pub fn new(config: Config) -> Arc<Self> {
        let assets = Assets::new(config.assets_dir.clone());
        let sessions = Arc::new(SessionStore::new(config.session_ttl));

        Arc::new(Self {
            config,
            assets,
            sessions,
            model: FeasibilityModel::default(),
        })
    }
}
