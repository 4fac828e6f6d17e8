use crate::core::RateStore;
use crate::http::error::panic_response;
use crate::http::handlers::get_rates;
use crate::http::state::AppState;
use axum::routing::get;
use axum::Router;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::trace::TraceLayer;

pub fn create_router<S: RateStore + 'static>(state: AppState<S>) -> Router {
    Router::new()
        .route("/rates", get(get_rates::<S>))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(CatchPanicLayer::custom(panic_response))
}
