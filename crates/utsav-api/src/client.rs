//! HTTP client for the marketplace REST API.
//!
//! Wraps `reqwest` with bearer-token attachment, status-code mapping, and
//! typed response deserialization. The API speaks plain JSON; response
//! shapes live in `utsav_core::types`.

use std::time::Duration;

use chrono::NaiveDate;
use reqwest::{Client, Response, StatusCode, Url};
use serde::de::DeserializeOwned;
use serde::Serialize;

use utsav_core::{
    AppConfig, Availability, Business, Dish, Inventory, ItemKind, NewOrder, Notification, Order,
    Plate, RatingSummary, Theme,
};

use crate::error::ApiError;

/// Client for the marketplace REST API.
///
/// Manages the HTTP client, optional bearer token, and base URL. Use
/// [`MarketClient::new`] against a deployed API or point `base_url` at a
/// mock server in tests.
pub struct MarketClient {
    client: Client,
    base_url: Url,
    token: Option<String>,
}

impl MarketClient {
    /// Creates a new client.
    ///
    /// The base URL is normalised to end with exactly one slash so relative
    /// joins append to the API root rather than replacing its last path
    /// segment. `token`, when present, is sent as `Authorization: Bearer`
    /// on every request.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed, or [`ApiError::InvalidBaseUrl`] if `base_url`
    /// does not parse.
    pub fn new(base_url: &str, token: Option<&str>, timeout_secs: u64) -> Result<Self, ApiError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent("utsav/0.1 (marketplace-client)")
            .build()?;

        let normalised = format!("{}/", base_url.trim_end_matches('/'));
        let base_url = Url::parse(&normalised)
            .map_err(|_| ApiError::InvalidBaseUrl(base_url.to_owned()))?;

        Ok(Self {
            client,
            base_url,
            token: token.map(str::to_owned),
        })
    }

    /// Creates a client from the loaded [`AppConfig`].
    ///
    /// # Errors
    ///
    /// Same as [`MarketClient::new`].
    pub fn from_config(config: &AppConfig) -> Result<Self, ApiError> {
        Self::new(
            &config.api_base_url,
            config.api_token.as_deref(),
            config.request_timeout_secs,
        )
    }

    // -----------------------------------------------------------------------
    // Businesses
    // -----------------------------------------------------------------------

    /// Fetches all vendors.
    ///
    /// # Errors
    ///
    /// [`ApiError::Unauthorized`] / [`ApiError::NotFound`] /
    /// [`ApiError::Status`] per HTTP status, [`ApiError::Http`] on network
    /// failure, [`ApiError::Deserialize`] on shape mismatch. All endpoint
    /// methods share this taxonomy.
    pub async fn list_businesses(&self) -> Result<Vec<Business>, ApiError> {
        self.get_json("businesses", &[]).await
    }

    /// Fetches a single vendor by id.
    ///
    /// # Errors
    ///
    /// See [`MarketClient::list_businesses`].
    pub async fn get_business(&self, id: i64) -> Result<Business, ApiError> {
        self.get_json(&format!("businesses/{id}"), &[]).await
    }

    // -----------------------------------------------------------------------
    // Catalog collections
    // -----------------------------------------------------------------------

    /// Fetches themes, optionally restricted to one vendor via the
    /// `businessId` query parameter.
    ///
    /// # Errors
    ///
    /// See [`MarketClient::list_businesses`].
    pub async fn list_themes(&self, business_id: Option<i64>) -> Result<Vec<Theme>, ApiError> {
        self.list_collection("themes", business_id).await
    }

    /// Fetches inventory items, optionally restricted to one vendor.
    ///
    /// # Errors
    ///
    /// See [`MarketClient::list_businesses`].
    pub async fn list_inventory(
        &self,
        business_id: Option<i64>,
    ) -> Result<Vec<Inventory>, ApiError> {
        self.list_collection("inventory", business_id).await
    }

    /// Fetches plates, optionally restricted to one vendor.
    ///
    /// # Errors
    ///
    /// See [`MarketClient::list_businesses`].
    pub async fn list_plates(&self, business_id: Option<i64>) -> Result<Vec<Plate>, ApiError> {
        self.list_collection("plates", business_id).await
    }

    /// Fetches dishes, optionally restricted to one vendor.
    ///
    /// # Errors
    ///
    /// See [`MarketClient::list_businesses`].
    pub async fn list_dishes(&self, business_id: Option<i64>) -> Result<Vec<Dish>, ApiError> {
        self.list_collection("dishes", business_id).await
    }

    async fn list_collection<T: DeserializeOwned>(
        &self,
        segment: &str,
        business_id: Option<i64>,
    ) -> Result<Vec<T>, ApiError> {
        match business_id {
            Some(id) => {
                self.get_json(segment, &[("businessId", id.to_string().as_str())])
                    .await
            }
            None => self.get_json(segment, &[]).await,
        }
    }

    // -----------------------------------------------------------------------
    // Ratings
    // -----------------------------------------------------------------------

    /// Fetches the aggregate rating for one catalog item.
    ///
    /// # Errors
    ///
    /// See [`MarketClient::list_businesses`].
    pub async fn get_rating(
        &self,
        kind: ItemKind,
        item_id: i64,
    ) -> Result<RatingSummary, ApiError> {
        self.get_json(&format!("ratings/{}/{item_id}", kind.path_segment()), &[])
            .await
    }

    // -----------------------------------------------------------------------
    // Notifications
    // -----------------------------------------------------------------------

    /// Fetches the viewer's notifications.
    ///
    /// # Errors
    ///
    /// See [`MarketClient::list_businesses`].
    pub async fn list_notifications(&self) -> Result<Vec<Notification>, ApiError> {
        self.get_json("notifications", &[]).await
    }

    /// Marks one notification as read. The response body is ignored.
    ///
    /// # Errors
    ///
    /// See [`MarketClient::list_businesses`].
    pub async fn mark_notification_read(&self, id: i64) -> Result<(), ApiError> {
        let url = self.endpoint(&format!("notifications/{id}/read"), &[])?;
        let context = url.path().to_owned();
        let response = self.authorized(self.client.post(url)).send().await?;
        Self::check_status(response, &context).map(|_| ())
    }

    // -----------------------------------------------------------------------
    // Availability
    // -----------------------------------------------------------------------

    /// Checks a vendor's availability on a date.
    ///
    /// # Errors
    ///
    /// See [`MarketClient::list_businesses`].
    pub async fn check_availability(
        &self,
        business_id: i64,
        date: NaiveDate,
    ) -> Result<Availability, ApiError> {
        self.get_json(
            "availability",
            &[
                ("businessId", business_id.to_string().as_str()),
                ("date", date.to_string().as_str()),
            ],
        )
        .await
    }

    // -----------------------------------------------------------------------
    // Orders
    // -----------------------------------------------------------------------

    /// Places a new order and returns the created record.
    ///
    /// # Errors
    ///
    /// See [`MarketClient::list_businesses`].
    pub async fn create_order(&self, order: &NewOrder) -> Result<Order, ApiError> {
        self.post_json("orders", order).await
    }

    /// Fetches the viewer's orders.
    ///
    /// # Errors
    ///
    /// See [`MarketClient::list_businesses`].
    pub async fn list_orders(&self) -> Result<Vec<Order>, ApiError> {
        self.get_json("orders", &[]).await
    }

    // -----------------------------------------------------------------------
    // Request plumbing
    // -----------------------------------------------------------------------

    /// Builds the full request URL for a relative path plus query pairs.
    fn endpoint(&self, path: &str, query: &[(&str, &str)]) -> Result<Url, ApiError> {
        let mut url = self
            .base_url
            .join(path)
            .map_err(|_| ApiError::InvalidBaseUrl(format!("{}{path}", self.base_url)))?;
        if !query.is_empty() {
            let mut pairs = url.query_pairs_mut();
            for (k, v) in query {
                pairs.append_pair(k, v);
            }
        }
        Ok(url)
    }

    /// Attaches the bearer token when one is configured.
    fn authorized(&self, builder: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match &self.token {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    /// Sends a GET request and deserializes the JSON response body.
    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, &str)],
    ) -> Result<T, ApiError> {
        let url = self.endpoint(path, query)?;
        let context = url.path().to_owned();
        let response = self.authorized(self.client.get(url)).send().await?;
        Self::parse_body(Self::check_status(response, &context)?, &context).await
    }

    /// Sends a POST request with a JSON body and deserializes the response.
    async fn post_json<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let url = self.endpoint(path, &[])?;
        let context = url.path().to_owned();
        let response = self
            .authorized(self.client.post(url))
            .json(body)
            .send()
            .await?;
        Self::parse_body(Self::check_status(response, &context)?, &context).await
    }

    /// Maps non-2xx statuses into the error taxonomy: 401/403 are
    /// authentication failures, 404 is a missing resource, everything else
    /// is a generic status error.
    fn check_status(response: Response, context: &str) -> Result<Response, ApiError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        match status {
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
                Err(ApiError::Unauthorized(status.as_u16()))
            }
            StatusCode::NOT_FOUND => Err(ApiError::NotFound(context.to_owned())),
            _ => Err(ApiError::Status {
                status: status.as_u16(),
                context: context.to_owned(),
            }),
        }
    }

    async fn parse_body<T: DeserializeOwned>(
        response: Response,
        context: &str,
    ) -> Result<T, ApiError> {
        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|e| ApiError::Deserialize {
            context: context.to_owned(),
            source: e,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_client(base_url: &str) -> MarketClient {
        MarketClient::new(base_url, Some("test-token"), 30)
            .expect("client construction should not fail")
    }

    #[test]
    fn endpoint_appends_to_base_path() {
        let client = test_client("http://localhost:8080/api");
        let url = client.endpoint("businesses", &[]).unwrap();
        assert_eq!(url.as_str(), "http://localhost:8080/api/businesses");
    }

    #[test]
    fn endpoint_normalises_trailing_slash() {
        let client = test_client("http://localhost:8080/api/");
        let url = client.endpoint("themes", &[]).unwrap();
        assert_eq!(url.as_str(), "http://localhost:8080/api/themes");
    }

    #[test]
    fn endpoint_encodes_query_pairs() {
        let client = test_client("http://localhost:8080/api");
        let url = client
            .endpoint("availability", &[("businessId", "7"), ("date", "2026-09-01")])
            .unwrap();
        assert_eq!(
            url.as_str(),
            "http://localhost:8080/api/availability?businessId=7&date=2026-09-01"
        );
    }

    #[test]
    fn invalid_base_url_is_rejected() {
        let result = MarketClient::new("not a url", None, 30);
        assert!(matches!(result, Err(ApiError::InvalidBaseUrl(_))));
    }
}
