//! PostgREST client for the `profiles` and `business_cards` relations

use async_trait::async_trait;
use inficard_core::card::ports::{CardRecordStore, ProfileStore};
use inficard_domain::{BusinessCardRecord, InficardError, Profile, ProfileSubmission, Result};
use reqwest::header::{ACCEPT, AUTHORIZATION};
use reqwest::{Response, StatusCode};
use serde::Serialize;
use tracing::debug;

use super::{build_http_client, normalize_base_url};
use crate::errors::InfraError;

const HEADER_APIKEY: &str = "apikey";
const HEADER_PREFER: &str = "prefer";
const PREFER_UPSERT: &str = "return=representation,resolution=merge-duplicates";
const PREFER_INSERT: &str = "return=minimal";
const ACCEPT_SINGLE_OBJECT: &str = "application/vnd.pgrst.object+json";

/// Client for the hosted relational tables.
///
/// Implements both [`ProfileStore`] and [`CardRecordStore`]; the two
/// relations live behind the same REST surface and credentials.
pub struct SupabaseRestClient {
    client: reqwest::Client,
    base_url: String,
    anon_key: String,
}

/// Row payload sent on profile upsert. Column names follow the store schema.
#[derive(Serialize)]
struct ProfileInsertRow<'a> {
    full_name: &'a str,
    designation: &'a str,
    email: &'a str,
    linkedin_url: &'a str,
    phone: &'a str,
    department: &'a str,
}

impl SupabaseRestClient {
    /// Create a new REST client for the given project.
    pub fn new(config: &inficard_domain::SupabaseConfig) -> Result<Self> {
        Ok(Self {
            client: build_http_client()?,
            base_url: normalize_base_url(&config.url),
            anon_key: config.anon_key.clone(),
        })
    }

    fn table_endpoint(&self, table: &str) -> String {
        format!("{}/rest/v1/{}", self.base_url, table)
    }

    fn authorized(&self, builder: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        builder
            .header(HEADER_APIKEY, &self.anon_key)
            .header(AUTHORIZATION, format!("Bearer {}", self.anon_key))
    }

    async fn error_from_response(context: &str, response: Response) -> InficardError {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        InficardError::Store(format!("{context} failed with status {status}: {body}"))
    }
}

#[async_trait]
impl ProfileStore for SupabaseRestClient {
    async fn upsert(&self, submission: &ProfileSubmission) -> Result<Profile> {
        let row = ProfileInsertRow {
            full_name: &submission.full_name,
            designation: &submission.designation,
            email: &submission.email,
            linkedin_url: &submission.linkedin_url,
            phone: &submission.phone,
            department: &submission.department,
        };

        let response = self
            .authorized(self.client.post(self.table_endpoint("profiles")))
            .header(HEADER_PREFER, PREFER_UPSERT)
            .json(&row)
            .send()
            .await
            .map_err(|err| {
                let infra: InfraError = err.into();
                InficardError::from(infra)
            })?;

        if !response.status().is_success() {
            return Err(Self::error_from_response("profile upsert", response).await);
        }

        // PostgREST returns the representation as a one-element array.
        let mut rows: Vec<Profile> = response.json().await.map_err(|err| {
            let infra: InfraError = err.into();
            InficardError::from(infra)
        })?;

        let profile = rows
            .pop()
            .ok_or_else(|| InficardError::Store("profile upsert returned no representation".into()))?;
        debug!(profile_id = %profile.id, "profile upserted");
        Ok(profile)
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Profile>> {
        let response = self
            .authorized(self.client.get(self.table_endpoint("profiles")))
            .query(&[("id", format!("eq.{id}")), ("select", "*".to_string())])
            .header(ACCEPT, ACCEPT_SINGLE_OBJECT)
            .send()
            .await
            .map_err(|err| {
                let infra: InfraError = err.into();
                InficardError::from(infra)
            })?;

        // PostgREST answers 406 when the single-object representation
        // matches no row.
        if response.status() == StatusCode::NOT_ACCEPTABLE {
            return Ok(None);
        }

        if !response.status().is_success() {
            return Err(Self::error_from_response("profile lookup", response).await);
        }

        let profile: Profile = response.json().await.map_err(|err| {
            let infra: InfraError = err.into();
            InficardError::from(infra)
        })?;
        Ok(Some(profile))
    }
}

#[async_trait]
impl CardRecordStore for SupabaseRestClient {
    async fn insert(&self, record: &BusinessCardRecord) -> Result<()> {
        let response = self
            .authorized(self.client.post(self.table_endpoint("business_cards")))
            .header(HEADER_PREFER, PREFER_INSERT)
            .json(record)
            .send()
            .await
            .map_err(|err| {
                let infra: InfraError = err.into();
                InficardError::from(infra)
            })?;

        if !response.status().is_success() {
            return Err(Self::error_from_response("card record insert", response).await);
        }
        Ok(())
    }
}
