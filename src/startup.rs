use std::net::TcpListener;

use actix_web::{dev::Server, web, App, HttpServer};
use diesel_migrations::{embed_migrations, EmbeddedMigrations, MigrationHarness};
use tracing_actix_web::TracingLogger;

use crate::{configuration::Settings, routes::{good, health_check, json_error_handler, order, user}, utils::{get_connection_pool, DbPool}};

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("./migrations");

pub struct Application{
    pub host: String,
    pub port: u16,
    pub server: Server
}

impl Application {
    // Opens the pool, creates missing tables and binds the listener.
    // Port 0 picks a free port, read it back from `port`.
    pub fn build(settings: Settings) -> Result<Self, anyhow::Error>{
        let pool = get_connection_pool(&settings.database)?;
        run_migrations(&pool)?;

        let listener = TcpListener::bind((settings.application.host.as_str(), settings.application.port))?;
        let port = listener.local_addr()?.port();

        tracing::info!(
            host = %settings.application.host,
            port,
            database = %settings.database.path,
            "Starting server"
        );

        let server = run(listener, pool)?;

        Ok(Application{
            host: settings.application.host,
            port,
            server
        })
    }
}

#[tracing::instrument(
    "Creating tables if absent",
    skip_all
)]
pub fn run_migrations(pool: &DbPool) -> Result<(), anyhow::Error>{
    let mut conn = pool.get()?;

    conn.run_pending_migrations(MIGRATIONS)
        .map_err(|e| anyhow::anyhow!("Failed to run migrations: {}", e))?;

    Ok(())
}

pub fn run(listener: TcpListener, pool: DbPool) -> Result<Server, anyhow::Error>{
    let pool = web::Data::new(pool);

    let server = HttpServer::new(move || {
        App::new()
            .wrap(TracingLogger::default())
            .app_data(pool.clone())
            .app_data(web::JsonConfig::default().error_handler(json_error_handler))
            .route("/health", web::get().to(health_check))
            .route("/fake_users/{count}", web::get().to(user::fake_users))
            .route("/fake_goods/{count}", web::get().to(good::fake_goods))
            .route("/fake_orders/{count}", web::get().to(order::fake_orders))
            .service(
                web::scope("/users")
                    .route("/", web::post().to(user::create_user))
                    .route("/", web::get().to(user::get_users))
                    .route("/{user_id}", web::get().to(user::get_user))
                    .route("/{user_id}", web::put().to(user::update_user))
                    .route("/{user_id}", web::delete().to(user::delete_user))
            )
            .service(
                web::scope("/goods")
                    .route("/", web::post().to(good::create_good))
                    .route("/", web::get().to(good::get_goods))
                    .route("/{good_id}", web::get().to(good::get_good))
                    .route("/{good_id}", web::put().to(good::update_good))
                    .route("/{good_id}", web::delete().to(good::delete_good))
            )
            .service(
                web::scope("/orders")
                    .route("/", web::post().to(order::create_order))
                    .route("/", web::get().to(order::get_orders))
                    .route("/{order_id}", web::get().to(order::get_order))
                    .route("/{order_id}", web::put().to(order::update_order))
                    .route("/{order_id}", web::delete().to(order::delete_order))
            )
    })
    .listen(listener)?
    .run();

    Ok(server)
}
