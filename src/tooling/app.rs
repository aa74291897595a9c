//! Demo application: a user profile rendered from injected services.
//!
//! Services are registered once with defaults. `render_app` optionally wraps
//! the profile in providers that supply the "real" services; without them the
//! profile falls back to the registered defaults.

use crate::accessor::{use_dependency_or_default, use_key, use_key_safe};
use crate::error::ContextError;
use crate::provider::provide_key;
use crate::registry::ContextRegistry;
use crate::types::DependencyKey;
use parking_lot::RwLock;
use serde::Serialize;
use std::sync::atomic::{AtomicBool, Ordering};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
}

impl User {
    pub fn guest() -> Self {
        Self {
            id: "0".to_string(),
            name: "Guest".to_string(),
            email: String::new(),
        }
    }
}

pub trait UserService: Send + Sync {
    fn current_user(&self) -> User;
    fn update_user(&self, user: User);
}

pub trait AuthService: Send + Sync {
    fn is_authenticated(&self) -> bool;
    fn login(&self, email: &str, password: &str) -> bool;
    fn logout(&self);
}

pub type UserServiceRef = Box<dyn UserService>;
pub type AuthServiceRef = Box<dyn AuthService>;

pub const USER_SERVICE: DependencyKey<UserServiceRef> = DependencyKey::new("userService");
pub const AUTH_SERVICE: DependencyKey<AuthServiceRef> = DependencyKey::new("authService");

pub struct InMemoryUserService {
    current: RwLock<User>,
}

impl InMemoryUserService {
    pub fn new(user: User) -> Self {
        Self {
            current: RwLock::new(user),
        }
    }
}

impl UserService for InMemoryUserService {
    fn current_user(&self) -> User {
        self.current.read().clone()
    }

    fn update_user(&self, user: User) {
        *self.current.write() = user;
    }
}

pub struct SessionAuthService {
    authenticated: AtomicBool,
}

impl SessionAuthService {
    pub fn new(authenticated: bool) -> Self {
        Self {
            authenticated: AtomicBool::new(authenticated),
        }
    }
}

impl AuthService for SessionAuthService {
    fn is_authenticated(&self) -> bool {
        self.authenticated.load(Ordering::SeqCst)
    }

    fn login(&self, email: &str, password: &str) -> bool {
        let ok = !email.is_empty() && !password.is_empty();
        if ok {
            self.authenticated.store(true, Ordering::SeqCst);
        }
        ok
    }

    fn logout(&self) {
        self.authenticated.store(false, Ordering::SeqCst);
    }
}

/// Where the profile's user service came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ServiceSource {
    Provided,
    Default,
}

/// What the profile "component" renders
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProfileView {
    pub user: User,
    pub authenticated: bool,
    pub source: ServiceSource,
}

/// Register the demo's dependency slots with their defaults
pub fn register_services(registry: &ContextRegistry) -> Result<(), ContextError> {
    let guest_users: UserServiceRef = Box::new(InMemoryUserService::new(User::guest()));
    registry.create_key(USER_SERVICE, guest_users)?;
    let anonymous: AuthServiceRef = Box::new(SessionAuthService::new(false));
    registry.create_key(AUTH_SERVICE, anonymous)?;
    Ok(())
}

fn user_profile(registry: &ContextRegistry) -> Result<ProfileView, ContextError> {
    let (users, source) = match use_key(registry, USER_SERVICE) {
        Ok(users) => (users, ServiceSource::Provided),
        Err(ContextError::NotProvided { .. }) => (
            use_dependency_or_default::<UserServiceRef>(registry, USER_SERVICE.id())?,
            ServiceSource::Default,
        ),
        Err(e) => return Err(e),
    };
    let signed_out: AuthServiceRef = Box::new(SessionAuthService::new(false));
    let auth = use_key_safe(registry, AUTH_SERVICE, signed_out);

    Ok(ProfileView {
        user: users.current_user(),
        authenticated: auth.is_authenticated(),
        source,
    })
}

/// Render the profile, wrapped in service providers when `with_providers`
pub fn render_app(
    registry: &ContextRegistry,
    with_providers: bool,
) -> Result<ProfileView, ContextError> {
    if !with_providers {
        return user_profile(registry);
    }

    let users: UserServiceRef = Box::new(InMemoryUserService::new(User {
        id: "1".to_string(),
        name: "John Doe".to_string(),
        email: "john@example.com".to_string(),
    }));
    let auth: AuthServiceRef = Box::new(SessionAuthService::new(true));

    provide_key(registry, USER_SERVICE, users, || {
        provide_key(registry, AUTH_SERVICE, auth, || user_profile(registry))
    })
}
