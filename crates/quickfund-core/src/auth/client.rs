use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;

use anyhow::{Context, Result, anyhow, bail};
use chrono::Utc;
use reqwest::StatusCode;
use serde::Serialize;
use serde_json::Value;
use uuid::Uuid;

use super::{LoginRequest, Role, Session, SignupRequest, User};
use crate::config::{AuthConfig, parse_base_url};

/// Auth boundary used by the UI.
///
/// With `auth.base_url` configured requests go to the HTTP backend;
/// otherwise an in-memory demo backend answers.
#[derive(Debug, Clone)]
pub enum AuthClient {
    Http(HttpAuthBackend),
    Demo(DemoAuthBackend),
}

impl AuthClient {
    /// Builds the client described by the `[auth]` config section.
    ///
    /// # Errors
    /// Returns an error if `base_url` is not a valid http(s) URL or the HTTP
    /// client cannot be constructed.
    pub fn from_config(config: &AuthConfig) -> Result<Self> {
        match config.base_url.as_deref().map(str::trim) {
            Some(base) if !base.is_empty() => {
                let backend = HttpAuthBackend::new(base, config.timeout())?;
                tracing::info!(base_url = %backend.base_url, "using HTTP auth backend");
                Ok(AuthClient::Http(backend))
            }
            _ => {
                tracing::info!("no auth.base_url configured; using demo auth backend");
                Ok(AuthClient::Demo(DemoAuthBackend::new(config.demo_latency())))
            }
        }
    }

    pub fn backend_name(&self) -> &'static str {
        match self {
            AuthClient::Http(_) => "http",
            AuthClient::Demo(_) => "demo",
        }
    }

    /// # Errors
    /// Returns an error when the backend rejects the credentials or is unreachable.
    pub async fn login(&self, email: &str, password: &str, role: Role) -> Result<Session> {
        let request = LoginRequest {
            email: email.trim().to_string(),
            password: password.to_string(),
            role,
        };
        match self {
            AuthClient::Http(http) => http.login(&request).await,
            AuthClient::Demo(demo) => demo.login(&request).await,
        }
    }

    /// # Errors
    /// Returns an error when the account cannot be created.
    pub async fn signup(&self, request: &SignupRequest) -> Result<Session> {
        match self {
            AuthClient::Http(http) => http.signup(request).await,
            AuthClient::Demo(demo) => demo.signup(request).await,
        }
    }

    /// # Errors
    /// Returns an error when the backend refuses to end the session.
    pub async fn logout(&self, session: &Session) -> Result<()> {
        match self {
            AuthClient::Http(http) => http.logout(session).await,
            AuthClient::Demo(demo) => demo.logout(session).await,
        }
    }
}

/// JSON-over-HTTP auth backend.
#[derive(Debug, Clone)]
pub struct HttpAuthBackend {
    http: reqwest::Client,
    base_url: String,
}

impl HttpAuthBackend {
    /// # Errors
    /// Returns an error if `base_url` does not parse as an http(s) URL.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        parse_base_url(base_url)?;
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .context("Failed to build HTTP client")?;
        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    fn endpoint(&self, name: &str) -> String {
        format!("{}/auth/{name}", self.base_url)
    }

    async fn login(&self, request: &LoginRequest) -> Result<Session> {
        self.post_for_session("login", request).await
    }

    async fn signup(&self, request: &SignupRequest) -> Result<Session> {
        self.post_for_session("signup", request).await
    }

    async fn logout(&self, session: &Session) -> Result<()> {
        let response = self
            .http
            .post(self.endpoint("logout"))
            .bearer_auth(&session.token)
            .send()
            .await
            .context("Failed to send logout request")?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(http_error("Logout", status, &body));
        }
        Ok(())
    }

    async fn post_for_session<B: Serialize>(&self, name: &str, body: &B) -> Result<Session> {
        let label = if name == "login" { "Login" } else { "Signup" };
        let response = self
            .http
            .post(self.endpoint(name))
            .json(body)
            .send()
            .await
            .with_context(|| format!("Failed to send {name} request"))?;

        let status = response.status();
        let text = response.text().await.unwrap_or_default();
        if !status.is_success() {
            return Err(http_error(label, status, &text));
        }

        serde_json::from_str(&text).with_context(|| format!("Failed to parse {name} response"))
    }
}

/// Maps a non-2xx response to an error, preferring the server's own message.
fn http_error(label: &str, status: StatusCode, body: &str) -> anyhow::Error {
    let message = serde_json::from_str::<Value>(body).ok().and_then(|value| {
        ["error", "message"]
            .iter()
            .find_map(|key| value.get(key).and_then(Value::as_str).map(str::to_string))
    });
    match message {
        Some(message) => anyhow!("{label} failed: {message}"),
        None => anyhow!("{label} failed (HTTP {status})"),
    }
}

#[derive(Debug, Clone)]
struct DemoAccount {
    password: String,
    user: User,
}

#[derive(Debug, Default)]
struct DemoStore {
    accounts: HashMap<String, DemoAccount>,
    sessions: HashMap<String, String>,
}

/// In-memory auth backend with simulated latency.
///
/// Seeded with one account, `demo@quickfund.com` / `demo1234`.
#[derive(Debug, Clone)]
pub struct DemoAuthBackend {
    store: Arc<Mutex<DemoStore>>,
    latency: Duration,
}

impl DemoAuthBackend {
    pub const DEMO_EMAIL: &str = "demo@quickfund.com";
    pub const DEMO_PASSWORD: &str = "demo1234";

    pub fn new(latency: Duration) -> Self {
        let backend = Self {
            store: Arc::new(Mutex::new(DemoStore::default())),
            latency,
        };
        backend.insert_account(
            Self::DEMO_PASSWORD,
            new_user(Self::DEMO_EMAIL, "Demo Donor", Role::Donor, None),
        );
        backend
    }

    fn insert_account(&self, password: &str, user: User) {
        if let Ok(mut store) = self.store.lock() {
            store.accounts.insert(
                user.email.to_ascii_lowercase(),
                DemoAccount {
                    password: password.to_string(),
                    user,
                },
            );
        }
    }

    fn lock(&self) -> Result<MutexGuard<'_, DemoStore>> {
        self.store
            .lock()
            .map_err(|e| anyhow!("demo auth store is poisoned: {e}"))
    }

    async fn login(&self, request: &LoginRequest) -> Result<Session> {
        tokio::time::sleep(self.latency).await;

        let mut store = self.lock()?;
        let key = request.email.to_ascii_lowercase();
        let user = match store.accounts.get(&key) {
            Some(account) if account.password == request.password => account.user.clone(),
            _ => bail!("Login failed: Invalid email or password"),
        };
        let token = Uuid::new_v4().to_string();
        store.sessions.insert(token.clone(), key);
        Ok(Session { user, token })
    }

    async fn signup(&self, request: &SignupRequest) -> Result<Session> {
        tokio::time::sleep(self.latency).await;

        let mut store = self.lock()?;
        let key = request.email.to_ascii_lowercase();
        if store.accounts.contains_key(&key) {
            bail!("Signup failed: An account with this email already exists");
        }

        let name = match (&request.organization, request.role) {
            (Some(org), Role::Organization) if !org.name.is_empty() => org.name.clone(),
            _ => request.name.clone(),
        };
        let phone = (!request.phone.is_empty()).then(|| request.phone.clone());
        let user = new_user(&request.email, &name, request.role, phone);
        store.accounts.insert(
            key.clone(),
            DemoAccount {
                password: request.password.clone(),
                user: user.clone(),
            },
        );
        let token = Uuid::new_v4().to_string();
        store.sessions.insert(token.clone(), key);
        Ok(Session { user, token })
    }

    async fn logout(&self, session: &Session) -> Result<()> {
        tokio::time::sleep(self.latency).await;

        let mut store = self.lock()?;
        if store.sessions.remove(&session.token).is_none() {
            bail!("Logout failed: session is not active");
        }
        Ok(())
    }
}

fn new_user(email: &str, name: &str, role: Role, phone: Option<String>) -> User {
    User {
        id: Uuid::new_v4().to_string(),
        email: email.to_string(),
        name: name.to_string(),
        role,
        phone,
        avatar: None,
        created_at: Utc::now(),
    }
}
