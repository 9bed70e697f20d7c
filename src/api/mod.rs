pub mod request;
pub mod response;
pub mod routes;

pub use request::{AnalyzeRequest, ZonedAnalyzeRequest, ZonedObservation};
pub use response::{AnalyzeResponse, ErrorResponse, HealthResponse, ReadyResponse};
pub use routes::{create_router, AppState};
