use crate::errors::ServerError;
use serde::Deserialize;

pub const COUNTRIES_URL: &str = "https://restcountries.com/v2/all?fields=name,flag";

#[derive(Debug, Clone, Deserialize)]
pub struct Country {
    pub name: String,
    pub flag: String,
}

/// Country list for the profile nationality select. The select encodes
/// each option as "Name%flag" so one form field carries both columns.
pub fn fetch_countries(url: &str) -> Result<Vec<Country>, ServerError> {
    let client = reqwest::blocking::Client::new();

    let resp = client
        .get(url)
        .send()
        .map_err(|e| ServerError::StoreError(format!("Could not fetch countries: {e}")))?;

    if !resp.status().is_success() {
        return Err(ServerError::StoreError(format!(
            "Could not fetch countries: {}",
            resp.status()
        )));
    }

    resp.json()
        .map_err(|e| ServerError::StoreError(format!("Could not fetch countries: {e}")))
}

/// "Name%flag" → (nationality, flag). The flag half may be empty when
/// the guest picked a country we have no flag for.
pub fn split_nationality(value: &str) -> (String, String) {
    match value.split_once('%') {
        Some((name, flag)) => (name.to_string(), flag.to_string()),
        None => (value.to_string(), String::new()),
    }
}
