mod auth;
mod disciplinas;
mod health;
mod provas;
mod ws;

use axum::Router;

use crate::AppState;

pub fn router(state: AppState) -> Router {
    Router::new()
        .merge(health::router())
        .nest("/api", api_router())
        .with_state(state)
}

fn api_router() -> Router<AppState> {
    Router::new()
        .merge(auth::router())
        .merge(disciplinas::router())
        .merge(provas::router())
        .merge(ws::router())
}
