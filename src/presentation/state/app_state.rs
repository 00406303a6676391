use std::sync::Arc;

use crate::application::ports::DetectionService;
use crate::application::services::ReportSessionService;
use crate::presentation::config::Settings;

#[derive(Clone)]
pub struct AppState {
    pub session_service: Arc<ReportSessionService>,
    pub detection_service: Arc<dyn DetectionService>,
    pub settings: Arc<Settings>,
}
