//! reqwest-backed Slack Web API client.

use secrecy::{ExposeSecret, SecretString};
use serde_json::{json, Value};
use tracing::debug;

use super::{
    OAuthGrant, OutboundPost, PostedMessage, SlackApi, SlackChannel, SlackError, SlackUser,
};
use crate::config::SlackConfig;

const CHANNEL_PAGE_LIMIT: u32 = 200;

pub struct SlackClient {
    http: reqwest::Client,
    base_url: String,
}

impl SlackClient {
    pub fn new(config: &SlackConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: config.api_base_url.trim_end_matches('/').to_string(),
        }
    }

    fn endpoint(&self, method: &str) -> String {
        format!("{}/{}", self.base_url, method)
    }

    /// POSTs a JSON payload with a bearer token and unwraps the `ok` flag.
    async fn call_json(
        &self,
        token: &SecretString,
        method: &str,
        payload: &Value,
    ) -> Result<Value, SlackError> {
        let response = self
            .http
            .post(self.endpoint(method))
            .bearer_auth(token.expose_secret())
            .json(payload)
            .send()
            .await?;
        let body: Value = response.json().await?;
        Self::check_ok(method, body)
    }

    /// POSTs form parameters with a bearer token. A few read methods
    /// (`conversations.list`, `users.info`, `team.info`) only accept
    /// url-encoded arguments.
    async fn call_form(
        &self,
        token: &SecretString,
        method: &str,
        params: &[(&str, &str)],
    ) -> Result<Value, SlackError> {
        let response = self
            .http
            .post(self.endpoint(method))
            .bearer_auth(token.expose_secret())
            .form(params)
            .send()
            .await?;
        let body: Value = response.json().await?;
        Self::check_ok(method, body)
    }

    fn check_ok(method: &str, body: Value) -> Result<Value, SlackError> {
        match body.get("ok").and_then(Value::as_bool) {
            Some(true) => Ok(body),
            Some(false) => {
                let code = body
                    .get("error")
                    .and_then(Value::as_str)
                    .unwrap_or("unknown_error")
                    .to_string();
                debug!("slack api call failed method={} error={}", method, code);
                Err(SlackError::Api { code })
            }
            None => Err(SlackError::Malformed(format!(
                "{method} response has no ok flag"
            ))),
        }
    }

    fn required_str(body: &Value, path: &[&str]) -> Result<String, SlackError> {
        let mut cursor = body;
        for key in path {
            cursor = cursor
                .get(key)
                .ok_or_else(|| SlackError::Malformed(format!("missing field {}", path.join("."))))?;
        }
        cursor
            .as_str()
            .map(str::to_string)
            .ok_or_else(|| SlackError::Malformed(format!("field {} is not a string", path.join("."))))
    }
}

#[async_trait::async_trait]
impl SlackApi for SlackClient {
    async fn post_message(
        &self,
        token: &SecretString,
        post: &OutboundPost,
    ) -> Result<PostedMessage, SlackError> {
        let mut payload = json!({
            "channel": post.channel,
            "text": post.text,
        });
        if let Some(username) = &post.username {
            payload["username"] = json!(username);
        }
        if let Some(icon_url) = &post.icon_url {
            payload["icon_url"] = json!(icon_url);
        }
        if let Some(thread_ts) = &post.thread_ts {
            payload["thread_ts"] = json!(thread_ts);
        }

        let body = self.call_json(token, "chat.postMessage", &payload).await?;
        Ok(PostedMessage {
            ts: Self::required_str(&body, &["ts"])?,
            channel: Self::required_str(&body, &["channel"])?,
        })
    }

    async fn add_reaction(
        &self,
        token: &SecretString,
        channel: &str,
        ts: &str,
        emoji_name: &str,
    ) -> Result<(), SlackError> {
        let payload = json!({ "channel": channel, "timestamp": ts, "name": emoji_name });
        match self.call_json(token, "reactions.add", &payload).await {
            Ok(_) => Ok(()),
            Err(err) if err.is_noop_reaction() => Ok(()),
            Err(err) => Err(err),
        }
    }

    async fn remove_reaction(
        &self,
        token: &SecretString,
        channel: &str,
        ts: &str,
        emoji_name: &str,
    ) -> Result<(), SlackError> {
        let payload = json!({ "channel": channel, "timestamp": ts, "name": emoji_name });
        match self.call_json(token, "reactions.remove", &payload).await {
            Ok(_) => Ok(()),
            Err(err) if err.is_noop_reaction() => Ok(()),
            Err(err) => Err(err),
        }
    }

    async fn list_channels(&self, token: &SecretString) -> Result<Vec<SlackChannel>, SlackError> {
        let limit = CHANNEL_PAGE_LIMIT.to_string();
        let mut channels = Vec::new();
        let mut cursor = String::new();

        loop {
            let mut params = vec![
                ("types", "public_channel,private_channel"),
                ("exclude_archived", "true"),
                ("limit", limit.as_str()),
            ];
            if !cursor.is_empty() {
                params.push(("cursor", cursor.as_str()));
            }

            let body = self.call_form(token, "conversations.list", &params).await?;
            let page = body
                .get("channels")
                .and_then(Value::as_array)
                .ok_or_else(|| SlackError::Malformed("conversations.list has no channels".into()))?;
            for channel in page {
                channels.push(SlackChannel {
                    id: Self::required_str(channel, &["id"])?,
                    name: Self::required_str(channel, &["name"])?,
                    is_private: channel
                        .get("is_private")
                        .and_then(Value::as_bool)
                        .unwrap_or(false),
                });
            }

            cursor = body
                .get("response_metadata")
                .and_then(|m| m.get("next_cursor"))
                .and_then(Value::as_str)
                .unwrap_or("")
                .to_string();
            if cursor.is_empty() {
                break;
            }
        }

        debug!("listed slack channels count={}", channels.len());
        Ok(channels)
    }

    async fn user_info(
        &self,
        token: &SecretString,
        user_id: &str,
    ) -> Result<SlackUser, SlackError> {
        let body = self
            .call_form(token, "users.info", &[("user", user_id)])
            .await?;
        let user = body
            .get("user")
            .ok_or_else(|| SlackError::Malformed("users.info has no user".into()))?;
        let profile = user.get("profile").cloned().unwrap_or_default();

        // display_name may be empty even when set; fall back through
        // real_name to the raw id.
        let display_name = [
            profile.get("display_name").and_then(Value::as_str),
            profile.get("real_name").and_then(Value::as_str),
            user.get("real_name").and_then(Value::as_str),
        ]
        .into_iter()
        .flatten()
        .find(|name| !name.is_empty())
        .unwrap_or(user_id)
        .to_string();

        Ok(SlackUser {
            id: Self::required_str(user, &["id"])?,
            display_name,
            avatar_url: profile
                .get("image_72")
                .and_then(Value::as_str)
                .map(str::to_string),
        })
    }

    async fn oauth_access(
        &self,
        client_id: &str,
        client_secret: &str,
        code: &str,
    ) -> Result<OAuthGrant, SlackError> {
        // oauth.v2.access authenticates with client credentials, not a
        // bearer token.
        let response = self
            .http
            .post(self.endpoint("oauth.v2.access"))
            .form(&[
                ("client_id", client_id),
                ("client_secret", client_secret),
                ("code", code),
            ])
            .send()
            .await?;
        let body: Value = response.json().await?;
        let body = Self::check_ok("oauth.v2.access", body)?;

        Ok(OAuthGrant {
            team_id: Self::required_str(&body, &["team", "id"])?,
            team_name: body
                .get("team")
                .and_then(|team| team.get("name"))
                .and_then(Value::as_str)
                .map(str::to_string),
            access_token: Self::required_str(&body, &["access_token"])?.into(),
            bot_user_id: Self::required_str(&body, &["bot_user_id"])?,
        })
    }

    async fn team_info(
        &self,
        token: &SecretString,
        team_id: &str,
    ) -> Result<String, SlackError> {
        let body = self
            .call_form(token, "team.info", &[("team", team_id)])
            .await?;
        Self::required_str(&body, &["team", "name"])
    }
}
