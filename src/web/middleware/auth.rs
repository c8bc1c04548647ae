use salvo::prelude::*;
use serde_json::json;

use crate::web::handlers::{
    channels::list_channels,
    events::slack_events,
    health::{get_status, health_check},
    oauth::slack_oauth,
};
use crate::web::web_state;

/// Bearer-token gate for internal-facing endpoints. The webhook and OAuth
/// routes are authenticated by Slack itself (signature / code exchange) and
/// do not pass through here.
#[handler]
pub async fn require_api_token(req: &mut Request, res: &mut Response, ctrl: &mut FlowCtrl) {
    let Some(expected) = web_state().config.web.api_token.as_deref() else {
        res.status_code(StatusCode::SERVICE_UNAVAILABLE);
        res.render(Json(json!({ "error": "api token not configured" })));
        ctrl.skip_rest();
        return;
    };

    let presented = req
        .header::<String>("authorization")
        .and_then(|value| value.strip_prefix("Bearer ").map(str::to_string));

    if presented.as_deref() != Some(expected) {
        res.status_code(StatusCode::UNAUTHORIZED);
        res.render(Json(json!({ "error": "invalid api token" })));
        ctrl.skip_rest();
    }
}

pub fn create_router() -> Router {
    Router::new()
        .push(Router::with_path("health").get(health_check))
        .push(Router::with_path("status").get(get_status))
        .push(
            Router::with_path("slack")
                // All methods route to the handler; it answers 405 itself so
                // non-POST probes get a deterministic status.
                .push(Router::with_path("events").goal(slack_events))
                .push(Router::with_path("oauth").get(slack_oauth))
                .push(
                    Router::with_path("channels")
                        .hoop(require_api_token)
                        .get(list_channels),
                ),
        )
}
