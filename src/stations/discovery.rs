use crate::stations::error::DiscoveryError;
use crate::types::station::Station;
use log::debug;
use reqwest::Client;

/// Fetches the full station set from the provider's discovery endpoint,
/// GET `{provider_prefix}/`.
///
/// The response is an array of station records in the provider's JSON
/// shape; tags outside the fixed capability/resolution sets fail the parse.
pub async fn fetch_stations(
    client: &Client,
    provider_prefix: &str,
) -> Result<Vec<Station>, DiscoveryError> {
    let url = format!("{}/", provider_prefix.trim_end_matches('/'));
    let response = client
        .get(&url)
        .send()
        .await
        .map_err(|e| DiscoveryError::NetworkRequest(url.clone(), e))?;
    let response = match response.error_for_status() {
        Ok(response) => response,
        Err(e) => {
            if let Some(status) = e.status() {
                return Err(DiscoveryError::HttpStatus {
                    url,
                    status,
                    source: e,
                });
            }
            return Err(DiscoveryError::NetworkRequest(url, e));
        }
    };

    let body = response
        .bytes()
        .await
        .map_err(|e| DiscoveryError::NetworkRequest(url.clone(), e))?;
    let stations = serde_json::from_slice::<Vec<Station>>(&body)?;
    debug!("discovered {} stations from {}", stations.len(), url);
    Ok(stations)
}
