//! # climahubd — climahub daemon
//!
//! Composition root that wires all adapters together and starts the server.
//!
//! ## Responsibilities
//! - Parse configuration (env vars, config file)
//! - Initialise `tracing`
//! - Build the vendor account (coordinator) and the Nexia scene integration
//! - Run integration setup, registering scenes with the entity service
//! - Build the axum router, bind to a TCP port and serve
//! - Handle graceful shutdown (SIGTERM/SIGINT) and tear the integration down
//!
//! ## Dependency rule
//! This is the **only** crate that depends on all other crates.
//! It is the wiring layer — no domain logic belongs here.

mod config;

use std::sync::Arc;

use tokio::sync::RwLock;
use tracing_subscriber::EnvFilter;

use climahub_adapter_http_axum::state::AppState;
use climahub_adapter_nexia::NexiaIntegration;
use climahub_adapter_storage_memory::InMemoryEntityRepository;
use climahub_adapter_virtual::{VirtualCoordinator, VirtualHome};
use climahub_app::ports::Integration;
use climahub_app::scheduler::TokioScheduler;
use climahub_app::services::entity_service::EntityService;
use climahub_app::services::integration_context::ServiceContext;

use crate::config::Config;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load()?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_new(&config.logging.filter)?)
        .init();

    // Vendor account
    let home = VirtualHome::new(&config.demo.automations);
    let coordinator = Arc::new(VirtualCoordinator::new(home));

    // Services
    let entity_service = Arc::new(EntityService::new(InMemoryEntityRepository::new()));
    let ctx = ServiceContext::new(Arc::clone(&entity_service));

    // Integration
    let mut integration =
        NexiaIntegration::new(config.nexia.clone(), coordinator, Arc::new(TokioScheduler));
    integration.setup(&ctx).await?;
    tracing::info!(integration = integration.name(), "integration ready");
    let integration = Arc::new(RwLock::new(integration));

    // HTTP
    let state = AppState::new(entity_service, Arc::clone(&integration));
    let app = climahub_adapter_http_axum::router::build(state);

    let bind_addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    tracing::info!(%bind_addr, "climahubd listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    integration.write().await.teardown().await?;
    tracing::info!("climahubd stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %err, "failed to listen for ctrl-c");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }
    tracing::info!("shutdown signal received");
}
