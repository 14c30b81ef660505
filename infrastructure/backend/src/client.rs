use reqwest::{Client, RequestBuilder};
use url::Url;

/// HTTP access to the hosted backend-as-a-service (REST data API).
pub struct BackendClient {
    pub client: Client,
    pub base_url: Url,
    pub api_key: String,
}

impl BackendClient {
    pub fn new(base_url: Url, api_key: String) -> Self {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(30))
            .build()
            .unwrap_or_default();

        Self {
            client,
            base_url,
            api_key,
        }
    }

    /// Returns the REST endpoint of a table, e.g. `<base>/rest/v1/products`.
    pub fn table_url(&self, table: &str) -> String {
        format!(
            "{}/rest/v1/{}",
            self.base_url.as_str().trim_end_matches('/'),
            table
        )
    }

    /// GET request against a table with the project key attached.
    pub fn select(&self, table: &str, query: &[(&str, String)]) -> RequestBuilder {
        self.client
            .get(self.table_url(table))
            .query(query)
            .header("apikey", &self.api_key)
            .bearer_auth(&self.api_key)
    }
}
