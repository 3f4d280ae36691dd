//! Menu preview fetch.

use tracing::instrument;

use retail_ops_core::MenuPreview;

use crate::client::ApiClient;
use crate::error::ApiError;

impl ApiClient {
    /// Fetch the assembled menu preview for one account/menu/location/
    /// channel combination.
    ///
    /// # Errors
    ///
    /// Returns an error when the preview request fails.
    #[instrument(skip(self), fields(account = %account, menu = %menu))]
    pub async fn menu_preview(
        &self,
        account: &str,
        menu: &str,
        location: &str,
        channel: i64,
    ) -> Result<MenuPreview, ApiError> {
        let url = self.url(&format!(
            "/menuPreview?account={account}&menu={menu}&location={location}&channel={channel}"
        ));
        self.get_json(&url).await
    }
}
