pub mod cli;
pub mod filter;
pub mod models;
pub mod session;
pub mod sources;
