// Group-directory client: a small blocking HTTP client that talks to
// the compute API's security-group endpoints. It stays synchronous
// because each run performs at most one read and one write, in order.

use anyhow::Context;
use log::debug;
use reqwest::blocking::Client;
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION};
use serde::{Deserialize, Serialize};

use crate::config::ApiConfig;
use crate::error::{Error, Result};

/// One security group attached to an instance, as reported by the
/// directory. Identity is `id`; `name` is display-only. The serde keys
/// are both the wire shape and the `--list` output shape.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct GroupIdentifier {
    #[serde(rename = "sgid")]
    pub id: String,
    pub name: String,
}

/// Capability surface of the remote group directory: read the current
/// group set of an instance, or replace it wholesale. The directory has
/// no add-one/remove-one calls, which is why every mutation goes
/// through a full read-modify-write. `HttpDirectory` is the real
/// implementation; tests substitute an in-memory fake.
pub trait GroupDirectory {
    /// Groups currently attached to `instance_id`, in directory order.
    fn describe(&self, instance_id: &str) -> Result<Vec<GroupIdentifier>>;

    /// Replace the full group set of `instance_id` with `group_ids`.
    fn modify(&self, instance_id: &str, group_ids: &[String]) -> Result<()>;
}

/// Blocking HTTP implementation of `GroupDirectory`. Holds a reqwest
/// client, the base URL of the compute API and an optional bearer
/// token for authenticated calls.
pub struct HttpDirectory {
    client: Client,
    base_url: String,
    token: Option<String>,
}

/// Body of the replace-groups call.
#[derive(Serialize)]
struct ModifyRequest<'a> {
    groups: &'a [String],
}

impl HttpDirectory {
    /// Build a client from an explicit configuration value. See
    /// `ApiConfig::from_env` for how the configuration is resolved.
    pub fn new(config: ApiConfig) -> anyhow::Result<Self> {
        let client = Client::builder()
            .build()
            .context("Failed to build HTTP client")?;
        Ok(HttpDirectory {
            client,
            base_url: config.base_url,
            token: config.token,
        })
    }

    fn groups_url(&self, instance_id: &str) -> String {
        format!("{}/instances/{}/security-groups", self.base_url, instance_id)
    }

    /// Authorization header map when a token is configured. A token the
    /// header type cannot represent is skipped rather than sent mangled.
    fn auth_headers(&self) -> HeaderMap {
        let mut headers = HeaderMap::new();
        if let Some(t) = &self.token {
            let val = format!("Bearer {}", t);
            if let Ok(v) = HeaderValue::from_str(&val) {
                headers.insert(AUTHORIZATION, v);
            }
        }
        headers
    }
}

impl GroupDirectory for HttpDirectory {
    fn describe(&self, instance_id: &str) -> Result<Vec<GroupIdentifier>> {
        let url = self.groups_url(instance_id);
        debug!("GET {}", url);
        let res = self.client.get(&url).headers(self.auth_headers()).send()?;
        if !res.status().is_success() {
            let status = res.status();
            let body = res.text().unwrap_or_else(|_| "".into());
            return Err(Error::Remote { status, body });
        }
        let groups: Vec<GroupIdentifier> = res.json()?;
        Ok(groups)
    }

    fn modify(&self, instance_id: &str, group_ids: &[String]) -> Result<()> {
        let url = self.groups_url(instance_id);
        debug!("PUT {} ({} groups)", url, group_ids.len());
        let res = self
            .client
            .put(&url)
            .headers(self.auth_headers())
            .json(&ModifyRequest { groups: group_ids })
            .send()?;
        if !res.status().is_success() {
            let status = res.status();
            let body = res.text().unwrap_or_else(|_| "".into());
            return Err(Error::Remote { status, body });
        }
        Ok(())
    }
}
