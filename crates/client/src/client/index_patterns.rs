//! Index-pattern and advanced settings methods for [`KbnClient`].

use kbn_config::constants::DEFAULT_INDEX_SETTING;
use tracing::{debug, info};

use crate::client::KbnClient;
use crate::endpoints;
use crate::error::Result;
use crate::models::{CreateIndexPatternParams, IndexPattern};

impl KbnClient {
    /// Fetch an index pattern by id, served from the cache when present.
    pub async fn get_index_pattern(&self, id: &str) -> Result<IndexPattern> {
        if let Some(pattern) = self.index_pattern_cache.get(id).await {
            return Ok(pattern);
        }

        let pattern = endpoints::get_index_pattern_object(
            &self.http,
            &self.kibana_url,
            &self.auth_strategy,
            id,
            self.max_retries,
        )
        .await?;
        self.index_pattern_cache.insert(pattern.clone()).await;
        Ok(pattern)
    }

    /// Create an index pattern and make it usable.
    ///
    /// Steps:
    /// 1. Check that the pattern matches at least one index.
    /// 2. Create the saved object; "no time field" is stored as `null`.
    /// 3. If no `defaultIndex` is configured, point it at the new id.
    /// 4. Drop any cached copy of the id.
    ///
    /// Returns the created id, or `None` when Kibana returned none (nothing
    /// after step 2 runs in that case).
    ///
    /// # Errors
    ///
    /// [`crate::ClientError::MissingIndices`] when the pattern matches no index;
    /// any other error is unrecoverable for the caller.
    pub async fn create_index_pattern(
        &self,
        params: &CreateIndexPatternParams,
    ) -> Result<Option<String>> {
        self.ensure_indices_exist(&params.name).await?;

        let attributes = params.attributes();
        let created = endpoints::create_index_pattern_object(
            &self.http,
            &self.kibana_url,
            &self.auth_strategy,
            params.id.as_deref(),
            &attributes,
            self.max_retries,
        )
        .await?;

        let Some(id) = created else {
            debug!(title = %params.name, "Kibana returned no id for the new index pattern");
            return Ok(None);
        };

        if self.get_default_index().await?.is_none() {
            self.set_default_index(&id).await?;
            info!(id = %id, "Set default index pattern");
        }

        self.index_pattern_cache.invalidate(&id).await;
        info!(id = %id, title = %params.name, "Created index pattern");
        Ok(Some(id))
    }

    /// Current `defaultIndex` setting, if the user has set one.
    pub async fn get_default_index(&self) -> Result<Option<String>> {
        let settings = endpoints::get_settings(
            &self.http,
            &self.kibana_url,
            &self.auth_strategy,
            self.max_retries,
        )
        .await?;
        Ok(settings.user_string(DEFAULT_INDEX_SETTING))
    }

    /// Set the `defaultIndex` setting.
    pub async fn set_default_index(&self, id: &str) -> Result<()> {
        endpoints::set_setting(
            &self.http,
            &self.kibana_url,
            &self.auth_strategy,
            DEFAULT_INDEX_SETTING,
            id,
            self.max_retries,
        )
        .await
    }

    async fn ensure_indices_exist(&self, pattern: &str) -> Result<()> {
        endpoints::get_field_caps(
            &self.http,
            &self.elasticsearch_url,
            &self.auth_strategy,
            pattern.trim(),
            self.max_retries,
        )
        .await?;
        Ok(())
    }
}
