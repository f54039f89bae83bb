use weekcast_client::WeatherService;

use crate::templates::Templates;

/// Shared application state, available to all route handlers via `State<Arc<AppState>>`.
pub struct AppState {
    pub forecast: WeatherService,
    pub templates: Templates,
}
