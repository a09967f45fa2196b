use once_cell::sync::Lazy;
use reqwest::Response;
use serde::{de::DeserializeOwned, Serialize};
use shop_api::{configuration::Settings, startup::Application, telemetry::{get_subscriber, init_subscriber}, utils::{get_connection_pool, DbPool}};
use uuid::Uuid;

static LOGGER_INSTANCE: Lazy<()> = Lazy::new(|| {
    let log_level = "info".to_string();
    let name = "shop_api-test".to_string();

    if std::env::var("TEST_LOG").is_ok() {
        let subscriber = get_subscriber(name, log_level, std::io::stdout);
        init_subscriber(subscriber);
    } else {
        let subscriber = get_subscriber(name, log_level, std::io::sink);
        init_subscriber(subscriber);
    }
});

pub struct TestApp{
    pub host: String,
    pub port: u16,
    pub pool: DbPool,
    pub api_client: reqwest::Client
}

impl TestApp {
    // Every test gets its own sqlite file so ids start from 1
    pub async fn spawn_app() -> TestApp{
        Lazy::force(&LOGGER_INSTANCE);

        let mut settings = Settings::get().expect("Failed to read configuration");
        settings.application.host = "127.0.0.1".to_string();
        settings.application.port = 0;
        settings.database.path = std::env::temp_dir()
            .join(format!("shop_api-{}.db", Uuid::new_v4()))
            .to_string_lossy()
            .into_owned();
        settings.database.pool_size = 4;

        let application = Application::build(settings.clone())
                            .expect("Failed to build application");

        let pool = get_connection_pool(&settings.database)
                    .expect("Failed to build connection pool to test database");

        let host = application.host.clone();
        let port = application.port;
        tokio::task::spawn(application.server);

        TestApp{
            host,
            port,
            pool,
            api_client: reqwest::Client::new()
        }
    }

    pub fn get_app_url(&self) -> String{
        format!("http://{}:{}", self.host, self.port)
    }

    pub async fn get(&self, path: &str) -> Response{
        self.api_client.get(format!("{}{}", self.get_app_url(), path))
            .send()
            .await
            .expect("Failed to send GET request")
    }

    pub async fn post<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> Response{
        self.api_client.post(format!("{}{}", self.get_app_url(), path))
            .json(body)
            .send()
            .await
            .expect("Failed to send POST request")
    }

    pub async fn put<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> Response{
        self.api_client.put(format!("{}{}", self.get_app_url(), path))
            .json(body)
            .send()
            .await
            .expect("Failed to send PUT request")
    }

    pub async fn delete(&self, path: &str) -> Response{
        self.api_client.delete(format!("{}{}", self.get_app_url(), path))
            .send()
            .await
            .expect("Failed to send DELETE request")
    }

    pub async fn get_json<T: DeserializeOwned>(&self, path: &str) -> T{
        let response = self.get(path).await;
        assert_eq!(response.status().as_u16(), 200, "GET {} failed", path);
        response.json::<T>().await.expect("Failed to parse response body")
    }
}
