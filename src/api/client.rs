//! Academy API Client
//!
//! A JSON-over-HTTP client for the academy service: module listing and
//! detail, user progress, points, profile, and quiz submission.

use crate::api::Api;
use crate::api::error::ApiError;
use crate::api::types::{
    ModuleDetail, ModuleSummary, PointsBalance, ProgressSummary, QuizResult, QuizSubmission,
    UserProfile,
};
use crate::consts::cli_consts::http;
use crate::environment::Environment;
use reqwest::{Client, ClientBuilder, Response};
use serde::Serialize;
use serde::de::DeserializeOwned;

// User-Agent string with CLI version
const USER_AGENT: &str = concat!("academy-cli/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Clone)]
pub struct ApiClient {
    client: Client,
    environment: Environment,
    api_token: Option<String>,
}

impl ApiClient {
    pub fn new(environment: Environment, api_token: Option<String>) -> Result<Self, ApiError> {
        let client = ClientBuilder::new()
            .connect_timeout(http::connect_timeout())
            .timeout(http::request_timeout())
            .build()?;
        Ok(Self {
            client,
            environment,
            api_token,
        })
    }

    fn build_url(&self, endpoint: &str) -> String {
        format!(
            "{}/{}",
            self.environment.api_url().trim_end_matches('/'),
            endpoint.trim_start_matches('/')
        )
    }

    fn authorize(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match &self.api_token {
            Some(token) => request.header("Authorization", format!("Bearer {}", token)),
            None => request,
        }
    }

    async fn handle_response_status(response: Response) -> Result<Response, ApiError> {
        if !response.status().is_success() {
            return Err(ApiError::from_response(response).await);
        }
        Ok(response)
    }

    async fn decode_response<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
        let bytes = response.bytes().await?;
        serde_json::from_slice(&bytes).map_err(ApiError::Decode)
    }

    async fn get_request<T: DeserializeOwned>(&self, endpoint: &str) -> Result<T, ApiError> {
        let url = self.build_url(endpoint);
        let request = self.client.get(&url).header("User-Agent", USER_AGENT);
        let response = self.authorize(request).send().await?;

        let response = Self::handle_response_status(response).await?;
        Self::decode_response(response).await
    }

    async fn post_request<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        endpoint: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let url = self.build_url(endpoint);
        let request = self
            .client
            .post(&url)
            .header("User-Agent", USER_AGENT)
            .json(body);
        let response = self.authorize(request).send().await?;

        let response = Self::handle_response_status(response).await?;
        Self::decode_response(response).await
    }

    async fn post_request_no_response<B: Serialize + ?Sized>(
        &self,
        endpoint: &str,
        body: &B,
    ) -> Result<(), ApiError> {
        let url = self.build_url(endpoint);
        let request = self
            .client
            .post(&url)
            .header("User-Agent", USER_AGENT)
            .json(body);
        let response = self.authorize(request).send().await?;

        Self::handle_response_status(response).await?;
        Ok(())
    }
}

#[async_trait::async_trait]
impl Api for ApiClient {
    fn environment(&self) -> &Environment {
        &self.environment
    }

    async fn get_profile(&self) -> Result<UserProfile, ApiError> {
        self.get_request("v1/profile").await
    }

    async fn get_modules(&self) -> Result<Vec<ModuleSummary>, ApiError> {
        self.get_request("v1/modules").await
    }

    async fn get_module(&self, module_id: &str) -> Result<ModuleDetail, ApiError> {
        self.get_request(&format!("v1/modules/{}", module_id)).await
    }

    async fn get_progress(&self) -> Result<ProgressSummary, ApiError> {
        self.get_request("v1/progress").await
    }

    async fn get_points(&self) -> Result<PointsBalance, ApiError> {
        self.get_request("v1/points").await
    }

    async fn start_module(&self, module_id: &str) -> Result<(), ApiError> {
        self.post_request_no_response(&format!("v1/modules/{}/start", module_id), &())
            .await
    }

    async fn submit_quiz(&self, submission: &QuizSubmission) -> Result<QuizResult, ApiError> {
        self.post_request(
            &format!("v1/modules/{}/quiz", submission.module_id),
            submission,
        )
        .await
    }
}
