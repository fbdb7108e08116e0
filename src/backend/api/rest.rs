//! Row endpoints of the hosted service.

use chrono::NaiveDate;
use reqwest::StatusCode;
use serde::Serialize;

use super::{ApiClient, ApiError};
use crate::backend::models::{Budget, Transaction};
use crate::backend::utils::calendar::month_span;

/// Insert payload for one ledger row; the service assigns the id.
#[derive(Debug, Clone, Serialize)]
pub struct NewTransaction {
    pub date: NaiveDate,
    pub description: String,
    pub category: String,
    pub amount_cents: i64,
}

impl ApiClient {
    /// One month of transactions, newest first.
    pub async fn fetch_transactions(
        &self,
        access_token: &str,
        year: i32,
        month: u32,
    ) -> Result<Vec<Transaction>, ApiError> {
        let Some((start, end)) = month_span(year, month) else {
            return Ok(Vec::new());
        };
        let response = self
            .http
            .get(self.rest_url("transactions"))
            .header("apikey", &self.config.publishable_key)
            .bearer_auth(access_token)
            .query(&[
                ("select", "*".to_string()),
                ("date", format!("gte.{start}")),
                ("date", format!("lt.{end}")),
                ("order", "date.desc".to_string()),
            ])
            .send()
            .await?;

        match response.status() {
            StatusCode::OK => Ok(response.json().await?),
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => Err(ApiError::Unauthorized),
            _ => Err(Self::unexpected(response).await),
        }
    }

    /// Inserts one row and returns it as stored.
    pub async fn create_transaction(
        &self,
        access_token: &str,
        row: &NewTransaction,
    ) -> Result<Transaction, ApiError> {
        let response = self
            .http
            .post(self.rest_url("transactions"))
            .header("apikey", &self.config.publishable_key)
            .header("Prefer", "return=representation")
            .bearer_auth(access_token)
            .json(row)
            .send()
            .await?;

        let status = response.status();
        match status {
            StatusCode::CREATED | StatusCode::OK => {
                // The service answers inserts with an array of rows.
                let mut rows: Vec<Transaction> = response.json().await?;
                rows.pop().ok_or(ApiError::Unexpected {
                    status,
                    body: "empty insert response".to_string(),
                })
            }
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => Err(ApiError::Unauthorized),
            _ => Err(Self::unexpected(response).await),
        }
    }

    /// Budgets with the month's spend rolled up by the service.
    pub async fn fetch_budgets(&self, access_token: &str) -> Result<Vec<Budget>, ApiError> {
        let response = self
            .http
            .get(self.rest_url("budgets"))
            .header("apikey", &self.config.publishable_key)
            .bearer_auth(access_token)
            .query(&[("select", "*"), ("order", "category.asc")])
            .send()
            .await?;

        match response.status() {
            StatusCode::OK => Ok(response.json().await?),
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => Err(ApiError::Unauthorized),
            _ => Err(Self::unexpected(response).await),
        }
    }
}
