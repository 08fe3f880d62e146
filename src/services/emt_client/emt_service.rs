use std::time::Duration;

use tracing::warn;
use urlencoding::encode;

use super::parser;
use super::types::auth_token::AuthToken;
use super::types::emt_api_response::{ArrivalsRequest, EmtApiResponse};
use super::types::emt_service_error::EmtServiceError;
use super::types::stop_snapshot::{LineInfo, StopSnapshot};

pub const DEFAULT_HOST: &str = "https://openapi.emtmadrid.es";

const ENDPOINT_LOGIN: &str = "v1/mobilitylabs/user/login/";
const ENDPOINT_STOP_INFO: &str = "v1/transport/busemtmad/stops/";
const ENDPOINT_ARRIVAL_TIME: &str = "v2/transport/busemtmad/stops/";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Clone)]
pub struct EmtServiceConfig {
    pub host: String,
}

impl Default for EmtServiceConfig {
    fn default() -> Self {
        EmtServiceConfig {
            host: DEFAULT_HOST.to_string(),
        }
    }
}

/// Client for the EMT Madrid bus API. Holds the session token and the
/// current snapshot of one bus stop; the update methods fetch from the API
/// and merge into the snapshot in place.
pub struct EmtService {
    config: EmtServiceConfig,
    client: reqwest::Client,
    token: AuthToken,
    snapshot: StopSnapshot,
}

impl EmtService {
    pub fn new(config: EmtServiceConfig) -> Self {
        EmtService {
            config,
            client: reqwest::Client::new(),
            token: AuthToken::default(),
            snapshot: StopSnapshot::default(),
        }
    }

    /// Logs in with the given credentials and stores the session token.
    /// Rejected credentials are not an error: the stored token becomes
    /// `AuthToken::Invalid` and the caller must check the returned marker.
    pub async fn authenticate(
        &mut self,
        user: &str,
        password: &str,
    ) -> Result<AuthToken, EmtServiceError> {
        let url = format!("{}/{}", self.config.host, ENDPOINT_LOGIN);
        let response = self
            .client
            .get(&url)
            .header("email", user)
            .header("password", password)
            .timeout(REQUEST_TIMEOUT)
            .send()
            .await?
            .error_for_status()?
            .json::<EmtApiResponse>()
            .await?;

        self.token = match parser::parse_token(&response) {
            Ok(token) => AuthToken::Valid(token),
            Err(EmtServiceError::InvalidCredentials) => {
                warn!("Invalid email or password");
                AuthToken::Invalid
            }
            Err(e) => return Err(e),
        };

        Ok(self.token.clone())
    }

    /// Fetches the stop metadata and replaces the snapshot's `stop_id`,
    /// `stop_name`, `coordinates`, `address` and `lines`. A disabled or
    /// nonexistent stop is logged and skipped, leaving the snapshot as-is.
    pub async fn update_stop_info(&mut self, stop_id: &str) -> Result<(), EmtServiceError> {
        let Some(access_token) = self.access_token() else {
            warn!("Skipping stop info update, stored token is invalid");
            return Ok(());
        };

        let url = format!(
            "{}/{}{}/detail/",
            self.config.host,
            ENDPOINT_STOP_INFO,
            encode(stop_id)
        );
        let response = self
            .client
            .get(&url)
            .header("accessToken", access_token)
            .timeout(REQUEST_TIMEOUT)
            .send()
            .await?
            .error_for_status()?
            .json::<EmtApiResponse>()
            .await?;

        match parser::parse_stop_info(&response, &mut self.snapshot) {
            Err(EmtServiceError::StopDisabled) => {
                warn!("Bus stop {} disabled or does not exist", stop_id);
                Ok(())
            }
            other => other,
        }
    }

    /// Fetches the live arrival estimates and rebuilds every known line's
    /// `arrivals`/`distance` sequences from the response.
    pub async fn update_arrival_times(&mut self, stop_id: &str) -> Result<(), EmtServiceError> {
        let Some(access_token) = self.access_token() else {
            warn!("Skipping arrival times update, stored token is invalid");
            return Ok(());
        };

        let url = format!(
            "{}/{}{}/arrives/",
            self.config.host,
            ENDPOINT_ARRIVAL_TIME,
            encode(stop_id)
        );
        let body = ArrivalsRequest {
            stopId: stop_id.to_string(),
            Text_EstimationsRequired_YN: "Y".to_string(),
        };
        let response = self
            .client
            .post(&url)
            .header("accessToken", access_token)
            .json(&body)
            .timeout(REQUEST_TIMEOUT)
            .send()
            .await?
            .error_for_status()?
            .json::<EmtApiResponse>()
            .await?;

        match parser::parse_arrivals(&response, &mut self.snapshot) {
            Err(EmtServiceError::StopDisabled) => {
                warn!("Bus stop {} disabled or does not exist", stop_id);
                Ok(())
            }
            other => other,
        }
    }

    pub fn get_stop_info(&self) -> &StopSnapshot {
        &self.snapshot
    }

    /// The next two arrival estimates for a line, padded with `None` when
    /// fewer are known. Unknown lines yield `[None, None]`.
    pub fn get_arrival_time(&self, line: &str) -> [Option<u32>; 2] {
        match self.snapshot.lines.get(line) {
            Some(info) => [
                info.arrivals.first().copied().flatten(),
                info.arrivals.get(1).copied().flatten(),
            ],
            None => [None, None],
        }
    }

    pub fn get_line_info(&self, line: &str) -> LineInfo {
        if let Some(info) = self.snapshot.lines.get(line) {
            let mut info = info.clone();
            if info.distance.is_empty() {
                info.distance.push(None);
            }
            return info;
        }

        warn!("The bus line {} does not exist at this stop", line);
        LineInfo {
            distance: vec![None],
            arrivals: vec![None, None],
            ..LineInfo::default()
        }
    }

    pub fn token(&self) -> &AuthToken {
        &self.token
    }

    // The `Invalid` marker short-circuits updates; an `Unset` token still
    // goes out (empty header) so the server's code-80 answer tells the
    // caller to authenticate.
    fn access_token(&self) -> Option<String> {
        match &self.token {
            AuthToken::Valid(token) => Some(token.clone()),
            AuthToken::Unset => Some(String::new()),
            AuthToken::Invalid => None,
        }
    }
}
