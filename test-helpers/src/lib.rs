pub mod mock;
pub mod telemetry;

use payloads::APIClient;
use reqwest::StatusCode;
use tracing_log::LogTracer;
use tracing_subscriber::util::SubscriberInitExt;

pub struct TestApp {
    #[allow(unused)]
    pub port: u16,
    pub address: String,
    /// Client carrying the fixture access token.
    pub client: APIClient,
}

impl TestApp {
    /// Client with no bearer token attached, for auth failure tests.
    pub fn anonymous_client(&self) -> APIClient {
        APIClient::new(self.address.clone())
    }

    /// Client carrying an arbitrary token instead of the fixture one.
    pub fn client_with_token(&self, token: &str) -> APIClient {
        APIClient::with_token(self.address.clone(), token)
    }
}

pub async fn spawn_app_on_port(port: u16) -> TestApp {
    let subscriber = telemetry::get_subscriber("error".into());
    let _ = LogTracer::init();
    let _ = subscriber.try_init();

    let (server, port) = mock::build("127.0.0.1", port).unwrap();
    tokio::spawn(server);

    let address = format!("http://127.0.0.1:{port}");
    TestApp {
        port,
        address: address.clone(),
        client: APIClient::with_token(address, mock::ACCESS_TOKEN),
    }
}

/// Use OS-assigned port for parallel testing.
pub async fn spawn_app() -> TestApp {
    spawn_app_on_port(0).await
}

/// Assert that the result of an API action results in a specific status code.
pub fn assert_status_code<T>(
    result: Result<T, payloads::ClientError>,
    expected: StatusCode,
) {
    match result {
        Err(payloads::ClientError::APIError(code, _)) => {
            assert_eq!(code, expected)
        }
        _ => panic!("Expected APIError"),
    };
}
