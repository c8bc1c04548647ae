//! Inbound Slack webhook.
//!
//! Answer discipline: 401 for a bad signature, 405 for a wrong method, 500
//! only for missing operator config, and 200 for everything else so Slack
//! never retries events we deliberately drop.

use chrono::Utc;
use salvo::http::Method;
use salvo::prelude::*;
use serde_json::{json, Value};
use tracing::{debug, warn};

use crate::bridge::BridgeCore;
use crate::signature::verify_signature;
use crate::slack::EventEnvelope;
use crate::web::web_state;

const TIMESTAMP_HEADER: &str = "x-slack-request-timestamp";
const SIGNATURE_HEADER: &str = "x-slack-signature";

/// Outcome of vetting one webhook request, decided before any store or API
/// work happens.
enum WebhookReply {
    MethodNotAllowed,
    /// URL verification handshake, echoed verbatim without authentication.
    Challenge(String),
    SecretUnconfigured,
    Unauthorized(String),
    /// Authenticated but not something we parse; acknowledged and dropped.
    Acknowledged,
    Event(EventEnvelope),
}

fn classify(
    method: &Method,
    signing_secret: Option<&str>,
    timestamp: Option<&str>,
    signature: Option<&str>,
    body: &[u8],
    now: i64,
) -> WebhookReply {
    if method != Method::POST {
        return WebhookReply::MethodNotAllowed;
    }

    // The URL verification handshake is identified by payload shape and
    // answered before any authentication.
    if let Ok(value) = serde_json::from_slice::<Value>(body) {
        if value.get("type").and_then(Value::as_str) == Some("url_verification") {
            let challenge = value
                .get("challenge")
                .and_then(Value::as_str)
                .unwrap_or_default();
            return WebhookReply::Challenge(challenge.to_string());
        }
    }

    let Some(secret) = signing_secret else {
        return WebhookReply::SecretUnconfigured;
    };

    if let Err(err) = verify_signature(secret, timestamp, signature, body, now) {
        return WebhookReply::Unauthorized(err.to_string());
    }

    match serde_json::from_slice::<EventEnvelope>(body) {
        Ok(envelope) => WebhookReply::Event(envelope),
        Err(err) => {
            debug!("webhook envelope unparseable: {}", err);
            WebhookReply::Acknowledged
        }
    }
}

async fn respond(bridge: &BridgeCore, reply: WebhookReply, res: &mut Response) {
    match reply {
        WebhookReply::MethodNotAllowed => {
            res.status_code(StatusCode::METHOD_NOT_ALLOWED);
            res.render(Json(json!({ "error": "method not allowed" })));
        }
        WebhookReply::Challenge(challenge) => {
            res.status_code(StatusCode::OK);
            res.render(Json(json!({ "challenge": challenge })));
        }
        WebhookReply::SecretUnconfigured => {
            warn!("webhook rejected reason=signing_secret_unconfigured");
            res.status_code(StatusCode::INTERNAL_SERVER_ERROR);
            res.render(Json(json!({ "error": "signing secret not configured" })));
        }
        WebhookReply::Unauthorized(reason) => {
            debug!("webhook rejected reason={}", reason);
            res.status_code(StatusCode::UNAUTHORIZED);
            res.render(Json(json!({ "error": reason })));
        }
        WebhookReply::Acknowledged => {
            res.status_code(StatusCode::OK);
            res.render(Json(json!({ "ok": true })));
        }
        WebhookReply::Event(envelope) => {
            if envelope.kind == "event_callback" {
                if let Err(err) = bridge.handle_event_callback(&envelope).await {
                    // Sync failures are our problem, not Slack's; a non-200
                    // here would only trigger redelivery of the same event.
                    warn!(
                        "event callback processing failed event_id={:?}: {}",
                        envelope.event_id, err
                    );
                }
            } else {
                debug!("webhook ignored type={}", envelope.kind);
            }
            res.status_code(StatusCode::OK);
            res.render(Json(json!({ "ok": true })));
        }
    }
}

#[handler]
pub async fn slack_events(req: &mut Request, res: &mut Response) {
    let body = match req.payload().await {
        Ok(bytes) => bytes.to_vec(),
        Err(err) => {
            debug!("webhook payload unreadable: {}", err);
            res.status_code(StatusCode::OK);
            res.render(Json(json!({ "ok": true })));
            return;
        }
    };

    let state = web_state();
    let timestamp = req.header::<String>(TIMESTAMP_HEADER);
    let signature = req.header::<String>(SIGNATURE_HEADER);
    let reply = classify(
        req.method(),
        state.config.slack.signing_secret.as_deref(),
        timestamp.as_deref(),
        signature.as_deref(),
        &body,
        Utc::now().timestamp(),
    );
    respond(state.bridge.as_ref(), reply, res).await;
}
