pub mod crash;
pub mod routes;
pub mod server;
