//! Forecourt JSON API Server

use std::{process, sync::Arc};

use salvo::{
    affix_state::inject,
    oapi::{
        OpenApi,
        security::{ApiKey, ApiKeyValue, SecurityScheme},
        swagger_ui::SwaggerUi,
    },
    prelude::*,
    serve_static::StaticDir,
    trailing_slash::remove_slash,
};
use tracing::{error, info, warn};

use forecourt_app::{
    context::{AppContext, open_store},
    notifications::{DeviceTokenStore, FcmGateway, NotificationDispatcher, SmtpMailer},
    uploads::{ImageUploadService, UploadBackend},
};

use crate::{
    admin::{ADMIN_SECRET_HEADER, ADMIN_SECURITY_SCHEME},
    config::ServerConfig,
    observability::{Observability, metrics_handler, request_logging},
    state::State,
};

#[cfg(not(target_env = "msvc"))]
use tikv_jemallocator::Jemalloc;

#[cfg(not(target_env = "msvc"))]
#[global_allocator]
static GLOBAL: Jemalloc = Jemalloc;

mod admin;
mod bookings;
mod cars;
mod catalog;
mod config;
mod contact;
mod extensions;
mod healthcheck;
mod inquiries;
mod notify;
mod observability;
mod router;
mod settings;
mod shutdown;
mod state;
#[cfg(test)]
mod test_helpers;
mod uploads;

/// Forecourt JSON API Server entry point
///
/// # Panics
///
/// Panics if the server fails to bind or serve requests
#[tokio::main]
pub async fn main() {
    // Load configuration from .env and CLI arguments
    let config = ServerConfig::load().unwrap_or_else(|e| {
        #[expect(
            clippy::print_stderr,
            reason = "logging not initialized yet, must use eprintln for config errors"
        )]
        {
            eprintln!("Configuration error: {e}");
        }

        process::exit(1);
    });

    let observability = Observability::init(&config).unwrap_or_else(|e| {
        #[expect(
            clippy::print_stderr,
            reason = "logging failed to initialize, must use eprintln"
        )]
        {
            eprintln!("Observability error: {e}");
        }

        process::exit(1);
    });

    let addr = config.socket_addr();

    info!("Starting server on {addr}");

    // Bind server
    let listener = TcpListener::new(addr).bind().await;

    let store = match open_store(config.database.database_url.as_deref()).await {
        Ok(store) => store,
        Err(init_error) => {
            error!("failed to open document store: {init_error}");

            process::exit(1);
        }
    };

    let mut dispatcher =
        NotificationDispatcher::new(DeviceTokenStore::new(store.clone(), config.push.token_ttl()));

    match config.mail.smtp().map(SmtpMailer::new) {
        Some(Ok(mailer)) => {
            dispatcher = dispatcher.with_mailer(Arc::new(mailer), config.mail.admin_email.clone());
        }
        Some(Err(mailer_error)) => {
            error!("invalid mail configuration: {mailer_error}");

            process::exit(1);
        }
        None => warn!("SMTP not configured, notification emails disabled"),
    }

    if let Some(fcm) = config.push.fcm() {
        dispatcher = dispatcher.with_push(Arc::new(FcmGateway::new(fcm)));
    } else {
        warn!("push server key not configured, push notifications disabled");
    }

    let backend = match config.uploads.backend() {
        Ok(backend) => backend,
        Err(upload_error) => {
            error!("invalid upload configuration: {upload_error}");

            process::exit(1);
        }
    };

    // Local uploads are served back from disk
    let uploads_router = match &backend {
        UploadBackend::Local { dir, public_path } => Some(
            Router::with_path(format!("{}/{{**path}}", public_path.trim_matches('/')))
                .get(StaticDir::new([dir.clone()])),
        ),
        UploadBackend::Blob { .. } => None,
    };

    let app = AppContext::new(
        store,
        Arc::new(dispatcher),
        Arc::new(ImageUploadService::new(backend)),
    );

    let mut router = Router::new()
        .hoop(CatchPanic::new())
        .hoop(remove_slash())
        .hoop(request_logging)
        .hoop(inject(State::from_app_context(
            app,
            config.admin.admin_secret.clone(),
        )))
        .push(Router::with_path("healthcheck").get(healthcheck::handler))
        .push(Router::with_path("metrics").get(metrics_handler))
        .push(Router::with_path("api").push(router::app_router()));

    if let Some(uploads_router) = uploads_router {
        router = router.push(uploads_router);
    }

    let doc = OpenApi::new("Forecourt API", env!("CARGO_PKG_VERSION"))
        .add_security_scheme(
            ADMIN_SECURITY_SCHEME,
            SecurityScheme::ApiKey(ApiKey::Header(ApiKeyValue::new(ADMIN_SECRET_HEADER))),
        )
        .merge_router(&router);

    let router = router
        .push(doc.into_router("/api-doc/openapi.json"))
        .push(SwaggerUi::new("/api-doc/openapi.json").into_router("docs"));

    let server = Server::new(listener);

    let handle = server.handle();
    let grace = config.server.shutdown_grace();

    // Listen for shutdown signal
    tokio::spawn(async move {
        if let Err(error) = shutdown::listen(handle, grace).await {
            error!("failed to listen for shutdown signal: {error}");
        }
    });

    // Start serving requests
    server.serve(router).await;

    observability.shutdown();
}
