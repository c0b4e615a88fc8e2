//! # Authentication
//!
//! The shell has no server. `MockAuthProvider` checks credentials against an
//! in-memory user list that starts with two demo accounts and grows on signup.
//! The list lives only as long as the process.
//!
//! Providers sit behind the `AuthProvider` trait so the event loop can run them
//! on a tokio task and the tests can swap in a zero-latency instance.

use std::time::Duration;

use async_trait::async_trait;
use log::{debug, info};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tokio::sync::Mutex;

/// A signed-in account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
}

impl User {
    pub fn new(id: impl Into<String>, name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            email: email.into(),
        }
    }
}

/// Failures shown to the user in the alert overlay.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    #[error("Invalid email or password. Please check your credentials.")]
    InvalidCredentials,

    #[error("Password is required.")]
    PasswordRequired,

    #[error("User with this email already exists.")]
    EmailTaken,
}

#[async_trait]
pub trait AuthProvider: Send + Sync {
    /// Returns the name of the provider.
    fn name(&self) -> &str;

    async fn login(&self, email: &str, password: &str) -> Result<User, AuthError>;

    /// Registers a new account. Does not sign it in.
    async fn signup(&self, name: &str, email: &str, password: &str) -> Result<User, AuthError>;
}

/// Seed accounts present at startup.
pub fn demo_users() -> Vec<User> {
    vec![
        User::new("1", "Demo User", "demo@example.com"),
        User::new("2", "Test User", "test@example.com"),
    ]
}

pub struct MockAuthProvider {
    users: Mutex<Vec<User>>,
    latency: Duration,
}

impl MockAuthProvider {
    pub fn new(latency: Duration) -> Self {
        Self::with_users(demo_users(), latency)
    }

    pub fn with_users(users: Vec<User>, latency: Duration) -> Self {
        Self {
            users: Mutex::new(users),
            latency,
        }
    }

    async fn simulate_latency(&self) {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
    }
}

impl Default for MockAuthProvider {
    fn default() -> Self {
        Self::new(Duration::ZERO)
    }
}

fn same_email(a: &str, b: &str) -> bool {
    a.trim().eq_ignore_ascii_case(b.trim())
}

#[async_trait]
impl AuthProvider for MockAuthProvider {
    fn name(&self) -> &str {
        "mock"
    }

    async fn login(&self, email: &str, password: &str) -> Result<User, AuthError> {
        self.simulate_latency().await;

        let users = self.users.lock().await;
        let user = users
            .iter()
            .find(|user| same_email(&user.email, email))
            .ok_or(AuthError::InvalidCredentials)?;

        if password.is_empty() {
            return Err(AuthError::PasswordRequired);
        }

        info!("Signed in as {} ({})", user.email, user.id);
        Ok(user.clone())
    }

    async fn signup(&self, name: &str, email: &str, _password: &str) -> Result<User, AuthError> {
        self.simulate_latency().await;

        let mut users = self.users.lock().await;
        if users.iter().any(|user| same_email(&user.email, email)) {
            debug!("Signup rejected, email already registered: {}", email.trim());
            return Err(AuthError::EmailTaken);
        }

        let user = User::new(
            uuid::Uuid::new_v4().to_string(),
            name.trim(),
            email.trim(),
        );
        users.push(user.clone());
        info!(
            "Registered {} ({}), {} accounts",
            user.email,
            user.id,
            users.len()
        );
        Ok(user)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_login_known_user() {
        let auth = MockAuthProvider::default();
        let user = auth.login("demo@example.com", "anything").await.unwrap();
        assert_eq!(user.id, "1");
        assert_eq!(user.name, "Demo User");
    }

    #[tokio::test]
    async fn test_login_is_case_insensitive_on_email() {
        let auth = MockAuthProvider::default();
        let user = auth.login("  Test@Example.com ", "pw").await.unwrap();
        assert_eq!(user.id, "2");
    }

    #[tokio::test]
    async fn test_login_unknown_email() {
        let auth = MockAuthProvider::default();
        let err = auth.login("nobody@example.com", "secret").await.unwrap_err();
        assert_eq!(err, AuthError::InvalidCredentials);
        assert_eq!(
            err.to_string(),
            "Invalid email or password. Please check your credentials."
        );
    }

    #[tokio::test]
    async fn test_login_empty_password() {
        let auth = MockAuthProvider::default();
        let err = auth.login("demo@example.com", "").await.unwrap_err();
        assert_eq!(err, AuthError::PasswordRequired);
    }

    #[tokio::test]
    async fn test_signup_then_login() {
        let auth = MockAuthProvider::default();
        let created = auth
            .signup(" New Person ", "new@example.com", "secret1")
            .await
            .unwrap();
        assert_eq!(created.name, "New Person");
        assert!(uuid::Uuid::parse_str(&created.id).is_ok());
        assert_eq!(auth.users.lock().await.len(), 3);

        let user = auth.login("new@example.com", "secret1").await.unwrap();
        assert_eq!(user, created);
    }

    #[tokio::test]
    async fn test_signup_existing_email() {
        let auth = MockAuthProvider::default();
        let err = auth
            .signup("Someone", "DEMO@example.com", "secret1")
            .await
            .unwrap_err();
        assert_eq!(err, AuthError::EmailTaken);
        assert_eq!(auth.users.lock().await.len(), 2);
    }

    #[tokio::test]
    async fn test_latency_is_simulated() {
        let auth = MockAuthProvider::new(Duration::from_millis(30));
        let started = tokio::time::Instant::now();
        auth.login("demo@example.com", "pw").await.unwrap();
        assert!(started.elapsed() >= Duration::from_millis(30));
    }
}
