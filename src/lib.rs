//! Client for the EMT Madrid (Empresa Municipal de Transportes) open API:
//! session handling plus bus-stop metadata and live arrival estimates,
//! flattened into a per-stop snapshot.

pub mod services;

pub use services::emt_client::emt_service::{EmtService, EmtServiceConfig, DEFAULT_HOST};
pub use services::emt_client::types::auth_token::AuthToken;
pub use services::emt_client::types::emt_service_error::EmtServiceError;
pub use services::emt_client::types::stop_snapshot::{LineInfo, StopSnapshot};
