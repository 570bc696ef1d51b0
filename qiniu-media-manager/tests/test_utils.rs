use std::time::Duration;

use qiniu_media_manager::auth::Credentials;
use qiniu_media_manager::{Client, Config};

/// Client pointed at a mock server for every service host
pub fn mock_client(server: &mockito::ServerGuard) -> Client {
    let config = Config::builder()
        .credentials(Credentials::new("test-ak", "test-sk"))
        .endpoint(server.url())
        .poll_delay(Duration::from_millis(1))
        .build()
        .unwrap();
    Client::new(config)
}

#[allow(dead_code)]
/// JSON body of a persistent operation status with the given code
pub fn status_body(id: &str, code: i64, desc: &str) -> String {
    format!(r#"{{"id":"{id}","code":{code},"desc":"{desc}","inputBucket":"videos","inputKey":"clip.mp4","items":[]}}"#)
}
