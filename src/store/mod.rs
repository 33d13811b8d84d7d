pub mod seed;
pub mod store;
pub mod table;
