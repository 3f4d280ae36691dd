//! Channel-link enumeration, grouped per sales channel.

use serde::Deserialize;
use tracing::{debug, instrument, warn};

use retail_ops_core::{ChannelLinkGroup, Page};

use crate::client::ApiClient;
use crate::error::ApiError;
use crate::paging;

/// Page size for the channel-links listing.
const CHANNEL_LINKS_PAGE_SIZE: usize = 500;

#[derive(Debug, Deserialize)]
struct ChannelLinkRow {
    #[serde(rename = "_id", default)]
    id: Option<String>,
    #[serde(default)]
    channel: Option<i64>,
}

#[derive(Debug, Deserialize)]
struct IntegrationRow {
    #[serde(default)]
    name: Option<String>,
}

impl ApiClient {
    /// Resolve a channel's display name from its backend ID.
    ///
    /// Returns `None` when the integrations listing has no entry for the
    /// channel.
    ///
    /// # Errors
    ///
    /// Returns an error when the lookup request fails.
    #[instrument(skip(self))]
    pub async fn find_channel_name(&self, backend_id: i64) -> Result<Option<String>, ApiError> {
        let url = self.url(&format!(
            "/integrations?where={{\"integrationType\":\"channel\",\"backendId\":{backend_id}}}"
        ));
        let page: Page<IntegrationRow> = self.get_json(&url).await?;
        Ok(page.items.into_iter().next().and_then(|row| row.name))
    }

    /// List all channel links for an account, grouped per channel with the
    /// channel names resolved. Channels appear in first-seen order; rows
    /// without an ID or channel are dropped.
    ///
    /// # Errors
    ///
    /// Returns an error when a listing or name-resolution request fails.
    #[instrument(skip(self), fields(account = %account))]
    pub async fn list_channel_links(
        &self,
        account: &str,
    ) -> Result<Vec<ChannelLinkGroup>, ApiError> {
        // Vec keyed by channel backend ID, preserving first-seen order.
        let mut grouped: Vec<(i64, Vec<String>)> = Vec::new();
        let mut page_number: u32 = 1;

        loop {
            let url = self.url(&format!(
                "/channelLinks?where={{\"account\":\"{account}\"}}&page={page_number}&limit={CHANNEL_LINKS_PAGE_SIZE}"
            ));
            let page: Page<ChannelLinkRow> = self.get_json(&url).await?;
            let fetched = page.items.len();
            debug!(page = page_number, fetched, "fetched channel links page");

            for row in page.items {
                let (Some(id), Some(channel)) = (row.id, row.channel) else {
                    warn!("dropping channel link without id or channel");
                    continue;
                };
                match grouped.iter_mut().find(|(key, _)| *key == channel) {
                    Some((_, ids)) => ids.push(id),
                    None => grouped.push((channel, vec![id])),
                }
            }

            if !paging::has_more(fetched, CHANNEL_LINKS_PAGE_SIZE, page.meta.as_ref()) {
                break;
            }
            page_number += 1;
        }

        let mut groups = Vec::with_capacity(grouped.len());
        for (channel_id, channel_link_ids) in grouped {
            let channel_name = self.find_channel_name(channel_id).await?;
            groups.push(ChannelLinkGroup {
                channel_id,
                channel_name,
                channel_link_ids,
            });
        }
        Ok(groups)
    }
}
