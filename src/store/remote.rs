//! Remote table access over the PostgREST interface exposed by Supabase.

use crate::config::RemoteConfig;
use crate::errors::{AppError, AppResult};
use serde_json::{Map, Value};
use tracing::debug;

/// One remote row, keyed by storage field name.
pub type Row = Map<String, Value>;

/// Narrow interface to the remote table store.
pub trait RemoteStore {
    /// Fetch every row of `table`, unfiltered.
    fn select_all(&self, table: &str) -> AppResult<Vec<Row>>;

    /// Insert one row into `table`.
    fn insert(&self, table: &str, row: &Row) -> AppResult<()>;
}

pub struct SupabaseClient {
    base_url: String,
    key: String,
    agent: ureq::Agent,
}

impl SupabaseClient {
    pub fn new(remote: &RemoteConfig) -> Self {
        let agent = ureq::AgentBuilder::new()
            .user_agent(concat!("rinternlog/", env!("CARGO_PKG_VERSION")))
            .build();

        Self {
            base_url: remote.url.trim_end_matches('/').to_string(),
            key: remote.key.clone(),
            agent,
        }
    }

    fn table_url(&self, table: &str) -> String {
        format!("{}/rest/v1/{}", self.base_url, table)
    }

    fn authorized(&self, req: ureq::Request) -> ureq::Request {
        req.set("apikey", &self.key)
            .set("Authorization", &format!("Bearer {}", self.key))
    }
}

impl RemoteStore for SupabaseClient {
    fn select_all(&self, table: &str) -> AppResult<Vec<Row>> {
        let url = self.table_url(table);
        debug!(%url, "select *");

        let resp = self
            .authorized(self.agent.get(&url))
            .query("select", "*")
            .set("Accept", "application/json")
            .call()
            .map_err(remote_error)?;

        let rows: Vec<Row> = resp.into_json()?;
        Ok(rows)
    }

    fn insert(&self, table: &str, row: &Row) -> AppResult<()> {
        let url = self.table_url(table);
        debug!(%url, "insert");

        self.authorized(self.agent.post(&url))
            .set("Prefer", "return=minimal")
            .send_json(row)
            .map_err(remote_error)?;

        Ok(())
    }
}

fn remote_error(err: ureq::Error) -> AppError {
    match err {
        ureq::Error::Status(status, resp) => AppError::RemoteStatus {
            status,
            message: resp.into_string().unwrap_or_default(),
        },
        ureq::Error::Transport(t) => AppError::Remote(t.to_string()),
    }
}
