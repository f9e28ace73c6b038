use fee_engine::{CalculationHistory, FeeEngine};
use std::sync::Arc;
use tokio::sync::RwLock;

#[derive(Clone)]
pub struct AppState {
    pub engine: Arc<FeeEngine>,
    // Recent results, newest first; the engine itself is stateless
    pub history: Arc<RwLock<CalculationHistory>>,
}

impl AppState {
    pub fn new(engine: FeeEngine) -> Self {
        let history = engine.new_history();
        Self {
            engine: Arc::new(engine),
            history: Arc::new(RwLock::new(history)),
        }
    }
}
