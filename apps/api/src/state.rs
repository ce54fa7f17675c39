use crate::inference::InferenceClient;

/// Shared application state injected into all route handlers via Axum extractors.
/// Cheap to clone: the inference client shares one underlying HTTP client.
#[derive(Clone)]
pub struct AppState {
    pub inference: InferenceClient,
}
