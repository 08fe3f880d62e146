pub mod auth_token;
pub mod emt_api_response;
pub mod emt_service_error;
pub mod stop_snapshot;
