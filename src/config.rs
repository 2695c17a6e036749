use std::env;

use dotenvy::dotenv;

#[derive(Clone)]
pub struct Config {
    pub server_addr: String,
    pub data_file: String,
    pub api_prefix: String,
    /// Serverless deployments skip binding a listening socket.
    pub serverless: bool,
}

impl Config {
    pub fn from_env() -> Self {
        dotenv().ok();

        Self {
            server_addr: env::var("SERVER_ADDR").unwrap_or_else(|_| "127.0.0.1:3001".to_string()),
            data_file: env::var("DATA_FILE").unwrap_or_else(|_| "data/hrm-db.json".to_string()),
            api_prefix: env::var("API_PREFIX").unwrap_or_else(|_| "/api".to_string()),
            serverless: env::var("SERVERLESS")
                .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
                .unwrap_or(false),
        }
    }
}
