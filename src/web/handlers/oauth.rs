//! Slack OAuth installation callback.
//!
//! `state` carries `{server_id}:{redirect_url}`. Success redirects back with
//! `?slack=connected`; every failure that still has a usable redirect target
//! goes back with `?slack_error=<code>` so the installing user is never left
//! on a blank error page.

use salvo::prelude::*;
use serde_json::json;
use tracing::warn;

use crate::bridge::BridgeError;
use crate::slack::SlackError;
use crate::web::web_state;

#[handler]
pub async fn slack_oauth(req: &mut Request, res: &mut Response) {
    let state_param = req.query::<String>("state").unwrap_or_default();
    let redirect_target = state_param
        .split_once(':')
        .map(|(_, redirect)| redirect.to_string());

    if let Some(error) = req.query::<String>("error") {
        // The user declined the install on Slack's consent screen.
        redirect_or_bad_request(res, redirect_target.as_deref(), "slack_error", &error);
        return;
    }

    let Some(code) = req.query::<String>("code").filter(|c| !c.is_empty()) else {
        redirect_or_bad_request(res, redirect_target.as_deref(), "slack_error", "missing_code");
        return;
    };

    match web_state().bridge.complete_oauth(&code, &state_param).await {
        Ok(redirect) => {
            redirect_or_bad_request(res, Some(&redirect), "slack", "connected");
        }
        Err(err) => {
            warn!("oauth callback failed: {}", err);
            let code = oauth_error_code(&err);
            redirect_or_bad_request(res, redirect_target.as_deref(), "slack_error", code);
        }
    }
}

fn oauth_error_code(err: &BridgeError) -> &str {
    match err {
        BridgeError::InvalidState => "invalid_state",
        BridgeError::OAuthNotConfigured => "not_configured",
        BridgeError::Slack(SlackError::Api { code }) => code,
        BridgeError::Slack(_) => "slack_unreachable",
        _ => "internal_error",
    }
}

fn redirect_or_bad_request(res: &mut Response, target: Option<&str>, key: &str, value: &str) {
    match target.and_then(|t| url::Url::parse(t).ok()) {
        Some(mut url) => {
            url.query_pairs_mut().append_pair(key, value);
            res.render(Redirect::found(url.to_string()));
        }
        None => {
            res.status_code(StatusCode::BAD_REQUEST);
            res.render(Json(json!({ "error": value })));
        }
    }
}
