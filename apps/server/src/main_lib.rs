use std::sync::Arc;

use crate::config::Config;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};
use unilife_core::{
    finance::{FinanceService, FinanceServiceTrait},
    health::{HealthService, HealthServiceTrait},
    schedule::{ScheduleService, ScheduleServiceTrait},
    users::{UserService, UserServiceTrait},
};
use unilife_storage_sqlite::{
    db, finance::FinanceRepository, health::HealthRepository, schedule::ScheduleRepository,
    users::UserRepository,
};

pub struct AppState {
    pub user_service: Arc<dyn UserServiceTrait + Send + Sync>,
    pub schedule_service: Arc<dyn ScheduleServiceTrait + Send + Sync>,
    pub finance_service: Arc<dyn FinanceServiceTrait + Send + Sync>,
    pub health_service: Arc<dyn HealthServiceTrait + Send + Sync>,
}

pub fn init_tracing() {
    let log_format = std::env::var("UL_LOG_FORMAT").unwrap_or_else(|_| "text".to_string());
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    if log_format.eq_ignore_ascii_case("json") {
        registry
            .with(fmt::layer().json().with_current_span(false))
            .init();
    } else {
        registry
            .with(fmt::layer().with_target(true).with_line_number(true))
            .init();
    }
}

pub async fn build_state(config: &Config) -> anyhow::Result<Arc<AppState>> {
    let db_path = db::init(&config.db_path)?;
    tracing::info!("Database path in use: {}", db_path);

    let pool = db::create_pool(&db_path)?;
    db::run_migrations(&pool)?;
    let writer = db::spawn_writer((*pool).clone());

    let user_repo = Arc::new(UserRepository::new(pool.clone(), writer.clone()));
    let schedule_repo = Arc::new(ScheduleRepository::new(pool.clone(), writer.clone()));
    let finance_repo = Arc::new(FinanceRepository::new(pool.clone(), writer.clone()));
    let health_repo = Arc::new(HealthRepository::new(pool.clone(), writer));

    Ok(Arc::new(AppState {
        user_service: Arc::new(UserService::new(user_repo)),
        schedule_service: Arc::new(ScheduleService::new(schedule_repo)),
        finance_service: Arc::new(FinanceService::new(finance_repo)),
        health_service: Arc::new(HealthService::new(health_repo)),
    }))
}
