//! Shared harness for the integration tests.
//!
//! The client is blocking, so tests run on the plain test thread and the
//! mock server is driven through a tokio runtime owned by [`MockApi`].

use hubspot_client::{ClientConfig, HubSpotClient};
use wiremock::{Mock, MockServer, Request};

pub const TOKEN: &str = "pat-test-token";

pub struct MockApi {
    server: MockServer,
    runtime: tokio::runtime::Runtime,
}

impl MockApi {
    pub fn start() -> Self {
        let runtime = tokio::runtime::Runtime::new().expect("tokio runtime");
        let server = runtime.block_on(MockServer::start());
        Self { server, runtime }
    }

    #[allow(dead_code)]
    pub fn uri(&self) -> String {
        self.server.uri()
    }

    pub fn mount(&self, mock: Mock) {
        self.runtime.block_on(mock.mount(&self.server));
    }

    pub fn client(&self) -> HubSpotClient {
        HubSpotClient::with_config(
            TOKEN,
            ClientConfig {
                base_url: self.uri(),
                ..Default::default()
            },
        )
        .expect("client")
    }

    pub fn requests(&self) -> Vec<Request> {
        self.runtime
            .block_on(self.server.received_requests())
            .unwrap_or_default()
    }
}

#[allow(dead_code)]
pub fn bearer() -> String {
    format!("Bearer {TOKEN}")
}
