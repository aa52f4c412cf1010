// ============================================================================
// Lugo Core - Authentication Service
// File: crates/lugo-core/src/services/auth_service.rs
// ============================================================================
//! Registration, sign-in/sign-out and request authentication.
//!
//! Sign-in creates a [`Session`] kept in a [`SessionStore`] and returns an
//! access token naming it. A request is authenticated only while both the
//! token is unexpired and its session is still in the store.

use std::sync::Arc;
use tracing::{info, warn, error};

use lugo_security::{JwtError, JwtService, PasswordService, Session};
use lugo_shared::utils::mask_email;
use lugo_shared::validators::{validate_email, validate_password_strength};

use crate::domain::{Profile, User};
use crate::error::DomainError;
use crate::repositories::{ProfileRepository, SessionStore, UserRepository};

pub struct AuthService {
    user_repo: Arc<dyn UserRepository>,
    profile_repo: Arc<dyn ProfileRepository>,
    sessions: Arc<dyn SessionStore>,
    jwt: JwtService,
    session_ttl_seconds: i64,
}

impl AuthService {
    pub fn new(
        user_repo: Arc<dyn UserRepository>,
        profile_repo: Arc<dyn ProfileRepository>,
        sessions: Arc<dyn SessionStore>,
        jwt: JwtService,
        session_ttl_seconds: i64,
    ) -> Self {
        Self {
            user_repo,
            profile_repo,
            sessions,
            jwt,
            session_ttl_seconds,
        }
    }

    /// Register a new owner account with an empty profile
    pub async fn register(&self, email: &str, password: &str) -> Result<User, DomainError> {
        let email = email.trim().to_lowercase();
        info!("Registration attempt for email: {}", mask_email(&email));

        if !validate_email(&email) {
            return Err(DomainError::ValidationError("Invalid email".to_string()));
        }

        let strength = validate_password_strength(password);
        if !strength.valid {
            return Err(DomainError::WeakPassword(strength.message));
        }

        if self.user_repo.find_by_email(&email).await?.is_some() {
            warn!("Registration failed: email already exists: {}", mask_email(&email));
            return Err(DomainError::EmailAlreadyExists(email));
        }

        let password_hash = PasswordService::hash(password)
            .map_err(|e| DomainError::PasswordHashError(e.to_string()))?;

        let user = self.user_repo.create(&User::new(&email, password_hash)).await?;
        self.profile_repo.upsert(&Profile::empty(user.id)).await?;

        info!("Registration successful for: {}", mask_email(&email));
        Ok(user)
    }

    /// Sign in with email and password
    pub async fn sign_in(&self, email: &str, password: &str) -> Result<SignInResult, DomainError> {
        let email = email.trim().to_lowercase();
        info!("Login attempt for email: {}", mask_email(&email));

        // 1. Find user by email
        let user = self.user_repo.find_by_email(&email).await?
            .ok_or_else(|| {
                warn!("Login failed: email not found: {}", mask_email(&email));
                DomainError::InvalidCredentials
            })?;

        // 2. Verify password
        let password_valid = PasswordService::verify(password, &user.password_hash)
            .map_err(|_e| DomainError::InvalidCredentials)?;

        if !password_valid {
            warn!("Login failed: invalid password for: {}", mask_email(&email));
            return Err(DomainError::InvalidCredentials);
        }

        // 3. Open session
        let session = Session::new(user.id, user.email.clone(), self.session_ttl_seconds);
        self.sessions.save(&session).await?;

        // 4. Issue token bound to the session
        let access_token = self.jwt.generate_access_token(&user.id, &session.id)
            .map_err(|e| DomainError::TokenGenerationError(e.to_string()))?;

        info!("Login successful for: {}", mask_email(&email));

        Ok(SignInResult {
            user,
            session,
            access_token,
        })
    }

    /// Invalidate the session; tokens naming it stop working
    pub async fn sign_out(&self, session: &Session) -> Result<(), DomainError> {
        self.sessions.remove(&session.id).await?;
        info!("Session {} closed for user {}", session.id, session.user_id);
        Ok(())
    }

    /// Resolve a bearer token to its live session
    pub async fn authenticate(&self, token: &str) -> Result<Session, DomainError> {
        let claims = self.jwt.validate_token(token).map_err(|e| match e {
            JwtError::TokenExpired => DomainError::SessionExpired,
            other => DomainError::Unauthorized(other.to_string()),
        })?;

        let session_id = claims
            .session_id()
            .map_err(|e| DomainError::Unauthorized(e.to_string()))?;
        let user_id = claims
            .user_id()
            .map_err(|e| DomainError::Unauthorized(e.to_string()))?;

        let session = self.sessions.find(&session_id).await?
            .ok_or_else(|| DomainError::Unauthorized("Session not found".to_string()))?;

        if !session.belongs_to(&user_id) {
            error!("Token subject {} does not match session {}", user_id, session.id);
            return Err(DomainError::Unauthorized("Session mismatch".to_string()));
        }

        if session.is_expired() {
            if let Err(e) = self.sessions.remove(&session.id).await {
                warn!("Failed to drop expired session {}: {}", session.id, e);
            }
            return Err(DomainError::SessionExpired);
        }

        Ok(session)
    }
}

/// Result of successful sign-in
#[derive(Debug, Clone)]
pub struct SignInResult {
    pub user: User,
    pub session: Session,
    pub access_token: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repositories::{MockProfileRepository, MockSessionStore, MockUserRepository};
    use mockall::predicate::eq;

    fn service(
        users: MockUserRepository,
        profiles: MockProfileRepository,
        sessions: MockSessionStore,
    ) -> AuthService {
        AuthService::new(
            Arc::new(users),
            Arc::new(profiles),
            Arc::new(sessions),
            JwtService::new("test-secret".to_string(), 900),
            900,
        )
    }

    #[tokio::test]
    async fn test_register_rejects_weak_password() {
        let svc = service(MockUserRepository::new(), MockProfileRepository::new(), MockSessionStore::new());
        let err = svc.register("ana@example.com", "senha123").await.unwrap_err();
        match err {
            DomainError::WeakPassword(msg) => assert!(msg.contains("uppercase")),
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_register_rejects_duplicate_email() {
        let mut users = MockUserRepository::new();
        users
            .expect_find_by_email()
            .with(eq("ana@example.com"))
            .returning(|email| Ok(Some(User::new(email, "hash".to_string()))));

        let svc = service(users, MockProfileRepository::new(), MockSessionStore::new());
        let err = svc.register("Ana@Example.com", "Senha123").await.unwrap_err();
        assert!(matches!(err, DomainError::EmailAlreadyExists(_)));
    }

    #[tokio::test]
    async fn test_register_creates_user_and_profile() {
        let mut users = MockUserRepository::new();
        users.expect_find_by_email().returning(|_| Ok(None));
        users.expect_create().returning(|u| Ok(u.clone()));
        let mut profiles = MockProfileRepository::new();
        profiles.expect_upsert().times(1).returning(|p| Ok(p.clone()));

        let svc = service(users, profiles, MockSessionStore::new());
        let user = svc.register("ana@example.com", "Senha123").await.unwrap();
        assert_eq!(user.email, "ana@example.com");
        assert_ne!(user.password_hash, "Senha123");
    }

    #[tokio::test]
    async fn test_sign_in_then_authenticate() {
        let hash = PasswordService::hash("Senha123").unwrap();
        let user = User::new("ana@example.com", hash);
        let stored = user.clone();

        let mut users = MockUserRepository::new();
        users.expect_find_by_email().returning(move |_| Ok(Some(stored.clone())));

        let saved: Arc<std::sync::Mutex<Option<Session>>> = Arc::default();
        let saved_in = saved.clone();
        let saved_out = saved.clone();
        let mut sessions = MockSessionStore::new();
        sessions.expect_save().returning(move |s| {
            *saved_in.lock().unwrap() = Some(s.clone());
            Ok(())
        });
        sessions
            .expect_find()
            .returning(move |_| Ok(saved_out.lock().unwrap().clone()));

        let svc = service(users, MockProfileRepository::new(), sessions);
        let result = svc.sign_in("ana@example.com", "Senha123").await.unwrap();
        assert_eq!(result.session.user_id, user.id);

        let session = svc.authenticate(&result.access_token).await.unwrap();
        assert_eq!(session, result.session);
    }

    #[tokio::test]
    async fn test_sign_in_wrong_password() {
        let hash = PasswordService::hash("Senha123").unwrap();
        let user = User::new("ana@example.com", hash);
        let mut users = MockUserRepository::new();
        users.expect_find_by_email().returning(move |_| Ok(Some(user.clone())));

        let svc = service(users, MockProfileRepository::new(), MockSessionStore::new());
        let err = svc.sign_in("ana@example.com", "Senha999").await.unwrap_err();
        assert!(matches!(err, DomainError::InvalidCredentials));
    }

    #[tokio::test]
    async fn test_authenticate_after_sign_out_fails() {
        let mut sessions = MockSessionStore::new();
        sessions.expect_remove().times(1).returning(|_| Ok(()));
        sessions.expect_find().returning(|_| Ok(None));

        let svc = service(MockUserRepository::new(), MockProfileRepository::new(), sessions);
        let session = Session::new(uuid::Uuid::new_v4(), "ana@example.com".to_string(), 900);
        let token = JwtService::new("test-secret".to_string(), 900)
            .generate_access_token(&session.user_id, &session.id)
            .unwrap();

        svc.sign_out(&session).await.unwrap();
        let err = svc.authenticate(&token).await.unwrap_err();
        assert!(matches!(err, DomainError::Unauthorized(_)));
    }

    #[tokio::test]
    async fn test_authenticate_rejects_garbage() {
        let svc = service(MockUserRepository::new(), MockProfileRepository::new(), MockSessionStore::new());
        assert!(matches!(
            svc.authenticate("not-a-token").await,
            Err(DomainError::Unauthorized(_))
        ));
    }
}
