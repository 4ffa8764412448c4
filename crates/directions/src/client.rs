use std::env;

use model::route::Coordinates;

use crate::ApiError;

pub const ORS_API_URL: &str =
    "https://api.openrouteservice.org/v2/directions/driving-car";

#[derive(Clone, Debug)]
pub struct DirectionsApiCredentials {
    pub api_key: String,
}

impl DirectionsApiCredentials {
    /// Reads `ORS_API_KEY`. Returns `None` when it is unset; the realroute
    /// endpoint then fails without contacting the provider.
    pub fn env() -> Option<Self> {
        env::var("ORS_API_KEY").ok().map(|api_key| Self { api_key })
    }
}

/// Thin pass-through client for the external directions provider. The
/// provider's GeoJSON body is returned verbatim; no retry, timeout or
/// caching on this path.
pub struct DirectionsClient {
    credentials: Option<DirectionsApiCredentials>,
}

impl DirectionsClient {
    pub fn new(credentials: Option<DirectionsApiCredentials>) -> Self {
        Self { credentials }
    }

    pub fn has_credentials(&self) -> bool {
        self.credentials.is_some()
    }

    pub async fn directions(
        &self,
        from: Coordinates,
        to: Coordinates,
    ) -> Result<serde_json::Value, ApiError> {
        let credentials =
            self.credentials.as_ref().ok_or(ApiError::MissingApiKey)?;

        let client = reqwest::Client::new();

        /* perform get-request; the provider expects lon,lat order */
        let url = format!(
            "{ORS_API_URL}?start={},{}&end={},{}",
            from.lon, from.lat, to.lon, to.lat
        );
        log::info!("Requesting directions for {:?} -> {:?}.", from, to);
        let response = client
            .get(&url)
            .header("Authorization", &credentials.api_key)
            .header("accept", "application/json")
            .send()
            .await?;

        /* parse response */
        match response.status() {
            reqwest::StatusCode::OK => Ok(response.json().await?),
            other => match response.text().await {
                Ok(val) => Err(ApiError::InvalidResponse {
                    status_code: other,
                    url,
                    response: Some(val),
                }),
                Err(_) => Err(ApiError::InvalidResponse {
                    status_code: other,
                    url,
                    response: None,
                }),
            },
        }
    }
}
