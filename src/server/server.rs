use actix_web::{
    middleware::{self, Condition},
    web::Data,
    App, HttpServer,
};

use crate::{
    consts::consts::{DEFAULT_ADDRESS, DEFAULT_HTTP_WORKERS, DEFAULT_PORT},
    store::store::PersonStore,
};

use super::{crash::StartupError, routes::configure};

#[derive(Debug, Clone)]
pub struct ServerOptions {
    pub address: String,
    pub port: u16,
    pub log_http: bool,
    pub http_workers: usize,
}

// Implements: https://rust-unofficial.github.io/patterns/patterns/creational/builder.html
impl ServerOptions {
    pub fn set_address(mut self, address: String) -> Self {
        self.address = address;
        self
    }

    pub fn set_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    /// Wraps the app in actix's access logger
    pub fn set_log_http(mut self, log_http: bool) -> Self {
        self.log_http = log_http;
        self
    }

    pub fn set_http_workers(mut self, http_workers: usize) -> Self {
        self.http_workers = http_workers;
        self
    }
}

impl Default for ServerOptions {
    fn default() -> Self {
        Self {
            address: DEFAULT_ADDRESS.to_string(),
            port: DEFAULT_PORT,
            log_http: false,
            http_workers: DEFAULT_HTTP_WORKERS,
        }
    }
}

pub struct Server {
    options: ServerOptions,
}

impl Server {
    pub fn new(options: ServerOptions) -> Self {
        Self { options }
    }

    pub async fn run(self, store: Data<PersonStore>) -> Result<(), StartupError> {
        let ServerOptions {
            address,
            port,
            log_http,
            http_workers,
        } = self.options;

        log::info!(
            "Starting people API on port {} = http://localhost:{}",
            port,
            port
        );
        log::info!("To see all people: http://localhost:{}/people", port);
        log::info!(
            "To see a single person (id 2): http://localhost:{}/people/2",
            port
        );

        let bind_address = format!("{}:{}", address, port);

        HttpServer::new(move || {
            App::new()
                .app_data(store.clone())
                .configure(configure)
                .wrap(Condition::new(log_http, middleware::Logger::default()))
        })
        .workers(http_workers)
        .bind((address, port))
        .map_err(|source| StartupError::Bind {
            address: bind_address,
            source,
        })?
        .run()
        .await
        .map_err(StartupError::Run)
    }
}
