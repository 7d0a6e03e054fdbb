//! Gateway service - wires the stores and services and runs the HTTP server.

use crate::adapters::AccountDirectory;
use crate::domain::config::GatewayConfig;
use crate::domain::error::GatewayError;
use crate::router::{build_router, AppState};
use axum::Router;
use cd_01_calculations::{
    CalculationService, CalculationStore, CalculationValidator, InMemoryCalculationStore,
    ValidatorLimits,
};
use cd_02_accounts::{AccountService, InMemoryUserStore, UserStore};
use shared_types::TokenSigner;
use std::future::Future;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;

/// Calcdesk HTTP service
pub struct GatewayService {
    config: GatewayConfig,
    state: AppState,
}

impl GatewayService {
    /// Validates `config` and wires services over the given stores.
    pub fn new(
        config: GatewayConfig,
        users: Arc<dyn UserStore>,
        records: Arc<dyn CalculationStore>,
    ) -> Result<Self, GatewayError> {
        config.validate()?;

        let accounts = Arc::new(
            AccountService::new(users, TokenSigner::new(&config.auth.token_secret))
                .with_token_ttl(config.auth.token_ttl),
        );
        let validator = CalculationValidator::new(ValidatorLimits {
            max_operands: config.limits.max_operands,
        });
        let calculations = Arc::new(
            CalculationService::new(records, validator)
                .with_owner_directory(Arc::new(AccountDirectory::new(accounts.clone()))),
        );

        Ok(Self {
            config,
            state: AppState {
                accounts,
                calculations,
            },
        })
    }

    /// Service backed by fresh in-memory stores.
    pub fn in_memory(config: GatewayConfig) -> Result<Self, GatewayError> {
        Self::new(
            config,
            Arc::new(InMemoryUserStore::new()),
            Arc::new(InMemoryCalculationStore::new()),
        )
    }

    pub fn config(&self) -> &GatewayConfig {
        &self.config
    }

    /// The full HTTP router.
    pub fn router(&self) -> Router {
        build_router(self.state.clone(), &self.config)
    }

    /// Binds the configured address and serves until `signal` resolves.
    pub async fn run(
        &self,
        signal: impl Future<Output = ()> + Send + 'static,
    ) -> Result<(), GatewayError> {
        let listener = TcpListener::bind(self.config.http_addr())
            .await
            .map_err(GatewayError::Bind)?;
        self.serve(listener, signal).await
    }

    /// Serves on an already-bound listener until `signal` resolves.
    pub async fn serve(
        &self,
        listener: TcpListener,
        signal: impl Future<Output = ()> + Send + 'static,
    ) -> Result<(), GatewayError> {
        let addr: Option<SocketAddr> = listener.local_addr().ok();
        info!(addr = ?addr, "Starting HTTP server");

        axum::serve(listener, self.router())
            .with_graceful_shutdown(signal)
            .await
            .map_err(GatewayError::Serve)?;

        info!("HTTP server stopped");
        Ok(())
    }
}
