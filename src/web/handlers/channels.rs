//! Internal channel-list query, bearer-authenticated by the middleware.

use salvo::prelude::*;
use serde_json::json;

use crate::bridge::BridgeError;
use crate::web::web_state;

fn render_error(res: &mut Response, status: StatusCode, message: &str) {
    res.status_code(status);
    res.render(Json(json!({ "error": message })));
}

#[handler]
pub async fn list_channels(req: &mut Request, res: &mut Response) {
    let server_id = match req.query::<String>("server_id") {
        Some(v) if !v.is_empty() => v,
        _ => {
            render_error(
                res,
                StatusCode::BAD_REQUEST,
                "missing server_id query parameter",
            );
            return;
        }
    };

    match web_state().bridge.list_workspace_channels(&server_id).await {
        Ok(channels) => {
            res.render(Json(json!({
                "channels": channels,
                "count": channels.len(),
            })));
        }
        Err(BridgeError::UnknownServer(_)) => {
            render_error(
                res,
                StatusCode::NOT_FOUND,
                "no slack workspace connected for this server",
            );
        }
        Err(BridgeError::Slack(err)) => {
            render_error(
                res,
                StatusCode::BAD_GATEWAY,
                &format!("slack error: {}", err),
            );
        }
        Err(err) => {
            render_error(
                res,
                StatusCode::INTERNAL_SERVER_ERROR,
                &format!("internal error: {}", err),
            );
        }
    }
}
