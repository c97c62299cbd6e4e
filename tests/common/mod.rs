use medina_backend::config::Config;
use medina_backend::create_app;
use medina_backend::state::AppState;

pub struct TestApp {
    pub address: String,
}

impl TestApp {
    /// Boots the full application on an ephemeral port.
    pub async fn spawn() -> Self {
        let state = AppState::new(Config::default());
        let app = create_app(state).expect("Failed to build application");

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind ephemeral port");
        let addr = listener.local_addr().expect("Failed to read local address");

        tokio::spawn(async move {
            axum::serve(listener, app).await.expect("Server crashed");
        });

        Self {
            address: format!("http://{addr}"),
        }
    }
}
