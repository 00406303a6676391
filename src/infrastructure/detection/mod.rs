mod annotator;
mod detection_service_factory;
mod mock_detection_client;
mod roboflow_detection_client;

pub use annotator::annotate;
pub use detection_service_factory::DetectionServiceFactory;
pub use mock_detection_client::{DisabledDetectionService, MockDetectionClient};
pub use roboflow_detection_client::RoboflowDetectionClient;
