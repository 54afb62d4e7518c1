use portal::adapters::http_client::HttpCandidatesApi;
use portal::config::{ApiSettings, MockSettings, ServerSettings, Settings, StorageSettings};
use std::net::SocketAddr;
use std::path::PathBuf;

pub struct TestServer {
    pub addr: SocketAddr,
    pub base_url: String,
}

impl TestServer {
    pub async fn new() -> Self {
        Self::with_mock(MockSettings::default()).await
    }

    pub async fn with_mock(mock: MockSettings) -> Self {
        Self::start(test_settings(mock)).await
    }

    pub async fn start(settings: Settings) -> Self {
        let app = portal::create_app(&settings);

        // Start server on random port
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let base_url = format!("http://{}", addr);

        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        // Wait for server to be ready
        tokio::time::sleep(tokio::time::Duration::from_millis(100)).await;

        TestServer { addr, base_url }
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub fn api_settings(&self) -> ApiSettings {
        ApiSettings {
            levels_url: self.url("/api/tools/candidates/levels"),
            assignments_url: self.url("/api/tools/candidates/assignments"),
        }
    }

    /// reqwest client adapter pointed at this server
    pub fn api(&self) -> HttpCandidatesApi {
        HttpCandidatesApi::from_settings(&self.api_settings())
    }
}

pub fn test_settings(mock: MockSettings) -> Settings {
    Settings {
        server: ServerSettings {
            host: "127.0.0.1".to_string(),
            port: 3000,
        },
        api: ApiSettings {
            levels_url: "http://127.0.0.1:1/levels".to_string(),
            assignments_url: "http://127.0.0.1:1/assignments".to_string(),
        },
        storage: StorageSettings {
            path: PathBuf::from("portal-data.json"),
        },
        mock,
    }
}
