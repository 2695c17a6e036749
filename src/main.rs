use actix_cors::Cors;
use actix_web::middleware::NormalizePath;
use actix_web::web::Data;
use actix_web::{App, HttpServer, web};
use dotenvy::dotenv;
use tracing::info;
use tracing_appender::rolling;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use hrm_mock::config::Config;
use hrm_mock::docs::ApiDoc;
use hrm_mock::store::Store;
use hrm_mock::{api, routes};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv().ok();

    let config = Config::from_env();

    // Rolling daily log
    let file_appender = rolling::daily("logs", "app.log");
    let (non_blocking, _guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::fmt()
        .with_writer(non_blocking)
        .with_max_level(tracing::Level::DEBUG)
        .with_ansi(false)
        .with_target(false)
        .with_level(true)
        .init();

    info!("Server starting...");

    let store = Data::new(Store::open(&config.data_file));

    if config.serverless {
        // Serverless deployments only need the store file materialized;
        // no listening socket is bound.
        info!("SERVERLESS is set, skipping the listening socket");
        return Ok(());
    }

    let server_addr = config.server_addr.clone();
    let config_data = config.clone();

    HttpServer::new(move || {
        App::new()
            .wrap(actix_web::middleware::Logger::default())
            .wrap(NormalizePath::trim())
            .wrap(Cors::permissive())
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}")
                    .url("/api-doc/openapi.json", ApiDoc::openapi()),
            )
            .app_data(store.clone())
            .app_data(Data::new(config_data.clone()))
            .configure(|cfg| routes::configure(cfg, &config_data))
            .default_service(web::route().to(api::not_found))
    })
    .bind(server_addr)?
    .run()
    .await
}
