use serde::Deserialize;
use thiserror::Error;

use crate::domain::appointment::Appointment;

const DEFAULT_ENDPOINT: &str =
    "https://vercel-express-backend.vercel.app/api/retrieve-appointment";

/// Failure while reading the appointment collection.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Transport or body-decode error from the HTTP client.
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),
    /// Endpoint answered with a non-success status.
    #[error("unexpected status {0}")]
    Status(reqwest::StatusCode),
}

#[derive(Debug, Deserialize)]
struct AppointmentsEnvelope {
    appointments: Vec<Appointment>,
}

#[derive(Debug, Clone)]
pub struct AppointmentService {
    endpoint: String,
    client: reqwest::Client,
}

impl Default for AppointmentService {
    fn default() -> Self {
        Self::new()
    }
}

impl AppointmentService {
    pub fn new() -> Self {
        Self::with_endpoint(Self::endpoint_from_env())
    }

    pub fn with_endpoint(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            client: reqwest::Client::new(),
        }
    }

    fn endpoint_from_env() -> String {
        std::env::var("APPOINTMENTS_ENDPOINT").unwrap_or_else(|_| DEFAULT_ENDPOINT.to_string())
    }

    /// Reads the full collection once, absorbing any failure into an
    /// empty list. The caller cannot tell a failed fetch from a
    /// legitimately empty dataset.
    pub async fn load(&self) -> Vec<Appointment> {
        match self.fetch().await {
            Ok(appointments) => appointments,
            Err(err) => {
                tracing::error!("error fetching appointments: {err}");
                Vec::new()
            }
        }
    }

    async fn fetch(&self) -> Result<Vec<Appointment>, FetchError> {
        let response = self.client.get(&self.endpoint).send().await?;
        if !response.status().is_success() {
            return Err(FetchError::Status(response.status()));
        }

        let envelope: AppointmentsEnvelope = response.json().await?;
        Ok(envelope.appointments)
    }
}
