use actix_web::web::Data;
use hrm_mock::config::Config;
use hrm_mock::store::Store;
use uuid::Uuid;

/// Fresh seeded store backed by a unique temp file.
pub fn temp_store() -> Data<Store> {
    let path = std::env::temp_dir().join(format!(
        "hrm-mock-test-{}.json",
        Uuid::new_v4().to_simple()
    ));
    Data::new(Store::open(path))
}

pub fn test_config() -> Config {
    Config {
        server_addr: "127.0.0.1:0".to_string(),
        data_file: String::new(),
        api_prefix: "/api".to_string(),
        serverless: false,
    }
}
