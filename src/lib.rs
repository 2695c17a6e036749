#![recursion_limit = "256"]

pub mod api;
pub mod client;
pub mod collections;
pub mod config;
pub mod docs;
pub mod error;
pub mod models;
pub mod routes;
pub mod seed;
pub mod store;
