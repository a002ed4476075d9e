pub mod config;
pub mod health;
pub mod modules;
pub mod shared;
pub use modules::account;
pub use modules::gender;

use crate::account::adapter::outgoing::AccountRepositoryPostgres;
use crate::account::application::ports::incoming::AccountService;
use crate::account::application::services::{AccountLifecycleService, LoggingAccountService};
use crate::config::AppConfig;
use crate::gender::adapter::outgoing::GenderRepositoryPostgres;
use crate::gender::application::ports::incoming::GenderService;
use crate::gender::application::services::{GenderReferenceService, LoggingGenderService};
use crate::shared::api::{custom_json_config, custom_path_config, custom_query_config};
use crate::shared::persistence::connect_with_retry;

use actix_web::{web, App, HttpServer};
use anyhow::Context;
use migration::{Migrator, MigratorTrait};
use std::sync::Arc;

use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[cfg(test)]
mod tests;

#[derive(Clone)]
pub struct AppState {
    pub account_service: Arc<dyn AccountService + Send + Sync>,
    pub gender_service: Arc<dyn GenderService + Send + Sync>,
}

#[actix_web::main]
#[cfg(not(tarpaulin_include))]
async fn start() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting application...");

    // Environtment variable loading
    let env = std::env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());

    // Try .env.{environment} first, then fall back to .env
    let env_file = format!(".env.{}", env);
    if dotenvy::from_filename(&env_file).is_err() {
        dotenvy::dotenv().ok();
    }

    let config = AppConfig::from_env().context("invalid configuration")?;
    let server_url = config.server_url();

    // Database connection
    let conn = connect_with_retry(&config.database)
        .await
        .context("failed to connect to database")?;

    if config.database.run_migrations {
        info!("Running pending migrations");
        Migrator::up(&conn, None)
            .await
            .context("failed to run migrations")?;
    }

    let db_arc = Arc::new(conn);

    let hasher = config
        .hasher
        .build()
        .context("invalid password hasher parameters")?;

    let account_repo = AccountRepositoryPostgres::new(Arc::clone(&db_arc));
    let gender_repo = GenderRepositoryPostgres::new(Arc::clone(&db_arc));

    let account_service =
        LoggingAccountService::new(AccountLifecycleService::new(account_repo, hasher));
    let gender_service = LoggingGenderService::new(GenderReferenceService::new(gender_repo));

    let state = AppState {
        account_service: Arc::new(account_service),
        gender_service: Arc::new(gender_service),
    };

    info!(%server_url, "Server listening");

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(state.clone()))
            .app_data(web::Data::new(Arc::clone(&db_arc)))
            .app_data(custom_json_config())
            .app_data(custom_path_config())
            .app_data(custom_query_config())
            .configure(init_routes)
    })
    .bind(&server_url)
    .with_context(|| format!("failed to bind {server_url}"))?
    .run()
    .await?;

    Ok(())
}

#[cfg(not(tarpaulin_include))]
fn init_routes(cfg: &mut web::ServiceConfig) {
    // Health
    cfg.service(crate::health::health);
    cfg.service(crate::health::readiness);
    // Accounts
    cfg.service(crate::account::adapter::incoming::web::routes::create_account_handler);
    cfg.service(crate::account::adapter::incoming::web::routes::find_account_handler);
    cfg.service(crate::account::adapter::incoming::web::routes::get_account_handler);
    cfg.service(crate::account::adapter::incoming::web::routes::update_email_handler);
    cfg.service(crate::account::adapter::incoming::web::routes::update_username_handler);
    cfg.service(crate::account::adapter::incoming::web::routes::update_phone_number_handler);
    cfg.service(crate::account::adapter::incoming::web::routes::update_password_handler);
    cfg.service(crate::account::adapter::incoming::web::routes::update_info_handler);
    cfg.service(crate::account::adapter::incoming::web::routes::delete_account_soft_handler);
    cfg.service(crate::account::adapter::incoming::web::routes::recover_account_handler);
    cfg.service(crate::account::adapter::incoming::web::routes::delete_account_permanent_handler);
    cfg.service(crate::account::adapter::incoming::web::routes::verify_password_handler);
    // Genders
    cfg.service(crate::gender::adapter::incoming::web::routes::create_gender_handler);
    cfg.service(crate::gender::adapter::incoming::web::routes::list_genders_handler);
    cfg.service(crate::gender::adapter::incoming::web::routes::get_gender_handler);
    cfg.service(crate::gender::adapter::incoming::web::routes::delete_gender_handler);
}

#[cfg(not(tarpaulin_include))]
fn main() {
    if let Err(e) = start() {
        eprintln!("Error starting app: {e:#}");
        std::process::exit(1);
    }
}
