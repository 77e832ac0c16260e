use std::sync::Arc;

use crate::config::Config;
use crate::sheets::SheetsApi;

pub type SharedState = Arc<AppState>;

pub struct AppState {
    pub config: Config,
    pub sheets: Arc<dyn SheetsApi>,
}
