pub mod auth;
pub mod db;
pub mod entities;
pub mod error;
pub mod migrator;
pub mod routes;
pub mod state;
pub mod texto;

pub use error::AppError;
pub use state::AppState;
