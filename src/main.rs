/*
Author      : Seunghwan Shin
Create date : 2025-10-00
Description : Draws the daily Debian sources count per vcs type as a line chart

History     : 2025-10-00 Seunghwan Shin       # [v.1.0.0] first create
*/

mod common;
mod external_deps;
mod prelude;
use common::*;

mod repository;
use repository::pg_repository_impl::*;

mod env_configuration;
use env_configuration::env_config::*;

mod traits;

mod dto;
mod enums;

mod model;
use model::{configs::total_config::*, sources::{category_set::*, column_map::*}};

mod utils_modules;
use utils_modules::logger_utils::*;

mod service;
use service::{chart_service_impl::*, query_service_impl::*};

mod controller;
use controller::main_controller::*;

#[tokio::main]
async fn main() {
    /* Global logger and .env */
    dotenv().ok();
    let _logger: LoggerHandle = set_global_logger().unwrap_or_else(|e| {
        eprintln!("[main] Failed to start the global logger: {:?}", e);
        std::process::exit(1)
    });

    info!("Sources count chart start!");

    let total_config: TotalConfig = TotalConfig::load(&SERVER_CONFIG_PATH).unwrap_or_else(|e| {
        error!("[main] {:?}", e);
        std::process::exit(1)
    });

    let categories: CategorySet = total_config.sources().category_set().unwrap_or_else(|e| {
        error!("[main] invalid vcs categories: {:?}", e);
        std::process::exit(1)
    });
    let columns: ColumnMap = total_config.sources().column_map(&categories);

    /* Dependency injection */
    let pg_conn: PgRepositoryImpl = PgRepositoryImpl::new(total_config.database());
    let query_service: QueryServiceImpl<PgRepositoryImpl> =
        QueryServiceImpl::new(pg_conn, total_config.sources().table().to_string(), columns);
    let chart_service: ChartServiceImpl = ChartServiceImpl::new(
        *total_config.chart().width(),
        *total_config.chart().height(),
        categories,
    );

    let main_controller: MainController<QueryServiceImpl<PgRepositoryImpl>, ChartServiceImpl> =
        MainController::new(query_service, chart_service);

    let image_path: Option<&Path> = total_config.chart().image_path().as_deref();
    let html_path: Option<&Path> = total_config.chart().html_path().as_deref();

    if let Err(e) = main_controller.main_task(image_path, html_path).await {
        error!("{:?}", e);
        std::process::exit(1);
    }

    info!("Sources count chart finished");
}
