use std::sync::Arc;

use crate::config::Config;
use crate::follow_up::{RandomSignals, SignalSource};

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub signals: Arc<dyn SignalSource>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            signals: Arc::new(RandomSignals),
        }
    }

    /// Same state with a substitute follow-up source, used to pin the draw
    /// in tests.
    pub fn with_signals(config: Config, signals: Arc<dyn SignalSource>) -> Self {
        Self { config, signals }
    }
}
