//! REST client for the portal sharing API.

use std::time::Duration;

use reqwest::Client;
use serde::{Deserialize, Serialize};
use url::Url;

use super::PortalApi;
use crate::config::PortalSession;
use crate::error::{Error, Result};
use crate::models::{Group, Item, Member};

use async_trait::async_trait;

/// Production portal client. Holds the session established at process start;
/// every request authenticates with its token.
#[derive(Clone)]
pub struct PortalClient {
    client: Client,
    base_url: String,
    token: String,
    page_size: u32,
}

/// Paged envelope for member searches.
#[derive(Debug, Deserialize)]
struct MemberPage {
    #[serde(default)]
    results: Vec<Member>,
    #[serde(rename = "nextStart", default = "no_next_page")]
    next_start: i64,
}

/// Paged envelope for owned-item listings.
#[derive(Debug, Deserialize)]
struct ItemPage {
    #[serde(default)]
    items: Vec<Item>,
    #[serde(rename = "nextStart", default = "no_next_page")]
    next_start: i64,
}

#[derive(Debug, Deserialize)]
struct GroupList {
    #[serde(default)]
    groups: Vec<Group>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ReassignRequest<'a> {
    target_username: &'a str,
}

#[derive(Debug, Serialize)]
struct UpdateTagsRequest<'a> {
    tags: &'a [String],
}

fn no_next_page() -> i64 {
    -1
}

impl PortalClient {
    /// Create a client for the given session.
    pub fn new(session: &PortalSession, page_size: u32) -> Result<Self> {
        // Validate the base URL up front so a bad config fails before any call.
        Url::parse(&session.base_url)?;

        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .user_agent("portal-sweep/0.1")
            .build()
            .map_err(|e| Error::Internal(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: session.base_url.trim_end_matches('/').to_string(),
            token: session.token.clone(),
            page_size,
        })
    }

    async fn check(response: reqwest::Response) -> Result<reqwest::Response> {
        if !response.status().is_success() {
            let status = response.status();
            let text = response.text().await.unwrap_or_default();
            return Err(Error::Portal(format!(
                "Portal API error {}: {}",
                status, text
            )));
        }
        Ok(response)
    }

    async fn get_json<T: serde::de::DeserializeOwned>(
        &self,
        url: &str,
        query: &[(&str, String)],
    ) -> Result<T> {
        let response = self
            .client
            .get(url)
            .bearer_auth(&self.token)
            .query(query)
            .send()
            .await
            .map_err(|e| Error::Portal(format!("Request failed: {}", e)))?;

        Self::check(response)
            .await?
            .json()
            .await
            .map_err(|e| Error::Portal(format!("Failed to parse response: {}", e)))
    }

    async fn post_json<B: Serialize>(&self, url: &str, body: &B) -> Result<()> {
        let response = self
            .client
            .post(url)
            .bearer_auth(&self.token)
            .json(body)
            .send()
            .await
            .map_err(|e| Error::Portal(format!("Request failed: {}", e)))?;

        Self::check(response).await?;
        Ok(())
    }
}

#[async_trait]
impl PortalApi for PortalClient {
    async fn search_members(&self, category: &str) -> Result<Vec<Member>> {
        let url = format!("{}/community/users", self.base_url);

        let mut members = Vec::new();
        let mut start: i64 = 1;
        loop {
            let page: MemberPage = self
                .get_json(
                    &url,
                    &[
                        ("q", category.to_string()),
                        ("start", start.to_string()),
                        ("num", self.page_size.to_string()),
                    ],
                )
                .await?;

            members.extend(page.results);

            // nextStart is -1 on the last page; guard against a portal that
            // fails to advance it.
            if page.next_start <= start {
                break;
            }
            start = page.next_start;
        }

        Ok(members)
    }

    async fn get_member(&self, username: &str) -> Result<Option<Member>> {
        let url = format!("{}/community/users/{}", self.base_url, username);

        let response = self
            .client
            .get(&url)
            .bearer_auth(&self.token)
            .send()
            .await
            .map_err(|e| Error::Portal(format!("Request failed: {}", e)))?;

        if response.status().as_u16() == 404 {
            return Ok(None);
        }

        let member = Self::check(response)
            .await?
            .json()
            .await
            .map_err(|e| Error::Portal(format!("Failed to parse response: {}", e)))?;

        Ok(Some(member))
    }

    async fn list_items(&self, username: &str) -> Result<Vec<Item>> {
        let url = format!("{}/content/users/{}", self.base_url, username);

        let mut items = Vec::new();
        let mut start: i64 = 1;
        loop {
            let page: ItemPage = self
                .get_json(
                    &url,
                    &[
                        ("start", start.to_string()),
                        ("num", self.page_size.to_string()),
                    ],
                )
                .await?;

            items.extend(page.items);

            if page.next_start <= start {
                break;
            }
            start = page.next_start;
        }

        Ok(items)
    }

    async fn update_item_tags(&self, owner: &str, item_id: &str, tags: &[String]) -> Result<()> {
        let url = format!(
            "{}/content/users/{}/items/{}/update",
            self.base_url, owner, item_id
        );
        self.post_json(&url, &UpdateTagsRequest { tags }).await
    }

    async fn reassign_item(&self, owner: &str, item_id: &str, new_owner: &str) -> Result<()> {
        let url = format!(
            "{}/content/users/{}/items/{}/reassign",
            self.base_url, owner, item_id
        );
        self.post_json(
            &url,
            &ReassignRequest {
                target_username: new_owner,
            },
        )
        .await
    }

    async fn list_groups(&self, username: &str) -> Result<Vec<Group>> {
        let url = format!("{}/community/users/{}/groups", self.base_url, username);
        let list: GroupList = self.get_json(&url, &[]).await?;
        Ok(list.groups)
    }

    async fn update_group_tags(&self, group_id: &str, tags: &[String]) -> Result<()> {
        let url = format!("{}/community/groups/{}/update", self.base_url, group_id);
        self.post_json(&url, &UpdateTagsRequest { tags }).await
    }

    async fn reassign_group(&self, group_id: &str, new_owner: &str) -> Result<()> {
        let url = format!("{}/community/groups/{}/reassign", self.base_url, group_id);
        self.post_json(
            &url,
            &ReassignRequest {
                target_username: new_owner,
            },
        )
        .await
    }

    async fn delete_member(&self, username: &str) -> Result<()> {
        let url = format!("{}/community/users/{}/delete", self.base_url, username);
        self.post_json(&url, &serde_json::json!({})).await
    }
}
