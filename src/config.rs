#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub admin_access_code: String,
    pub upload_dir: String,
    pub max_upload_bytes: usize,
    pub port: u16,
}

impl Config {
    pub fn init() -> Config {
        let database_url = std::env::var("DATABASE_URL").expect("DATABASE_URL must be set");
        let admin_access_code =
            std::env::var("ADMIN_ACCESS_CODE").expect("ADMIN_ACCESS_CODE must be set");

        let upload_dir = std::env::var("UPLOAD_DIR").unwrap_or_else(|_| "uploads".to_string());
        let max_upload_bytes = std::env::var("MAX_UPLOAD_BYTES")
            .unwrap_or_else(|_| "52428800".to_string());
        let port = std::env::var("PORT").unwrap_or_else(|_| "8000".to_string());

        Config {
            database_url,
            admin_access_code,
            upload_dir,
            max_upload_bytes: max_upload_bytes.parse::<usize>().unwrap(),
            port: port.parse::<u16>().unwrap(),
        }
    }
}
