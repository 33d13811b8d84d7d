use actix_web::web::Data;
use clap::Parser;
use people_api::{
    consts::consts::{DEFAULT_ADDRESS, DEFAULT_HTTP_WORKERS, DEFAULT_PORT},
    server::{
        crash::crash_server,
        server::{Server, ServerOptions},
    },
    store::store::PersonStore,
};

/// 👥 People API, a small in-memory REST service for person records
///
/// Try it with `curl localhost:8888/people`
#[derive(Parser, Debug)]
struct Cli {
    /// Port the HTTP server will run on
    #[clap(short, long, default_value_t = DEFAULT_PORT)]
    port: u16,

    /// Address the HTTP server will run on
    #[clap(short, long, default_value = DEFAULT_ADDRESS)]
    address: String,

    /// Log every HTTP request
    #[clap(long)]
    log_http: bool,

    #[clap(long, default_value_t = DEFAULT_HTTP_WORKERS)]
    http_workers: usize,
}

#[actix_web::main]
async fn main() {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let args = Cli::parse();

    let options = ServerOptions::default()
        .set_address(args.address)
        .set_port(args.port)
        .set_log_http(args.log_http)
        .set_http_workers(args.http_workers);

    let store = Data::new(PersonStore::seeded());

    if let Err(err) = Server::new(options).run(store).await {
        crash_server(err);
    }
}
