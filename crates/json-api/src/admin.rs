//! Admin gate.

use std::sync::Arc;

use salvo::prelude::*;
use tracing::warn;

use crate::state::State;

/// Header carrying the shared admin secret.
pub(crate) const ADMIN_SECRET_HEADER: &str = "x-admin-secret";

/// Security scheme name used in the `OpenAPI` document.
pub(crate) const ADMIN_SECURITY_SCHEME: &str = "admin_secret";

#[salvo::handler]
pub(crate) async fn handler(
    req: &mut Request,
    depot: &mut Depot,
    res: &mut Response,
    ctrl: &mut FlowCtrl,
) {
    let state = match depot.obtain::<Arc<State>>() {
        Ok(state) => state,
        Err(_error) => {
            res.render(StatusError::internal_server_error());
            ctrl.skip_rest();

            return;
        }
    };

    let Some(expected) = state.admin_secret.as_deref() else {
        warn!("admin request rejected: no admin secret configured");

        res.render(StatusError::unauthorized().brief("Admin access is not configured"));
        ctrl.skip_rest();

        return;
    };

    let provided = req
        .headers()
        .get(ADMIN_SECRET_HEADER)
        .and_then(|value| value.to_str().ok());

    if provided != Some(expected.as_str()) {
        res.render(StatusError::unauthorized().brief("Missing or invalid admin secret"));
        ctrl.skip_rest();

        return;
    }

    ctrl.call_next(req, depot, res).await;
}
