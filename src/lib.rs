pub mod config;
pub mod db;
pub mod error;
pub mod logging;
pub mod messages;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;
