//! Data Transfer Objects for the HTTP API.
//!
//! Request and response bodies are the domain types themselves, so the wire
//! schema and the model cannot drift apart.

use serde::{Deserialize, Serialize};

pub use crate::models::{
    BirthInput as NatalChartRequest, NatalChartResult as NatalChartResponse, PlanetPosition,
};

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
}
