// chat-slash - Slash commands for a terminal chat input
// Copyright (C) 2025  Simon Peter Rothgang
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU Affero General Public License as
// published by the Free Software Foundation, either version 3 of the
// License, or (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU Affero General Public License for more details.
//
// You should have received a copy of the GNU Affero General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

use super::MessageId;
use anyhow::Context as _;

/// Server-side message storage.
#[async_trait::async_trait(?Send)]
pub trait MessageStore {
    async fn delete_message(&self, id: &MessageId) -> anyhow::Result<()>;
}

/// `MessageStore` backed by the chat REST API.
pub struct HttpMessageStore {
    client: reqwest::Client,
    base_url: reqwest::Url,
}

impl HttpMessageStore {
    pub fn new(base_url: reqwest::Url) -> Self {
        Self { client: reqwest::Client::new(), base_url }
    }

    pub fn message_url(&self, id: &MessageId) -> anyhow::Result<reqwest::Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| anyhow::anyhow!("API URL cannot be a base: {}", self.base_url))?
            .pop_if_empty()
            .extend(["api", "chat", "messages", id.as_str()]);
        Ok(url)
    }
}

#[async_trait::async_trait(?Send)]
impl MessageStore for HttpMessageStore {
    async fn delete_message(&self, id: &MessageId) -> anyhow::Result<()> {
        let url = self.message_url(id)?;
        let response = self
            .client
            .delete(url.clone())
            .send()
            .await
            .with_context(|| format!("DELETE {url} failed"))?;
        let status = response.status();
        if !status.is_success() {
            anyhow::bail!("DELETE {url} returned {status}");
        }
        tracing::debug!(message_id = %id, "Deleted remote message");
        Ok(())
    }
}
