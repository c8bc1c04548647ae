use salvo::prelude::*;
use serde_json::json;

use crate::web::web_state;

#[handler]
pub async fn health_check(res: &mut Response) {
    res.render(Json(json!({ "status": "ok" })));
}

#[handler]
pub async fn get_status(res: &mut Response) {
    let state = web_state();
    let uptime_secs = state.started_at.elapsed().as_secs();

    let bridge_count = match state.store.bridge_store().count_bridges().await {
        Ok(count) => count,
        Err(err) => {
            res.status_code(StatusCode::INTERNAL_SERVER_ERROR);
            res.render(Json(json!({ "error": format!("store error: {}", err) })));
            return;
        }
    };

    res.render(Json(json!({
        "status": "ok",
        "uptime_secs": uptime_secs,
        "bridges": bridge_count,
    })));
}
