//! State

use std::sync::Arc;

use forecourt_app::context::AppContext;
use zeroize::Zeroizing;

#[derive(Clone)]
pub(crate) struct State {
    pub(crate) app: AppContext,

    /// Secret required on admin routes; admin routes are closed when `None`.
    pub(crate) admin_secret: Option<Zeroizing<String>>,
}

impl State {
    #[must_use]
    pub(crate) fn new(app: AppContext, admin_secret: Option<String>) -> Self {
        Self {
            app,
            admin_secret: admin_secret
                .filter(|secret| !secret.is_empty())
                .map(Zeroizing::new),
        }
    }

    #[must_use]
    pub(crate) fn from_app_context(app: AppContext, admin_secret: Option<String>) -> Arc<Self> {
        Arc::new(Self::new(app, admin_secret))
    }
}
