/// Endpoint suffixes appended to the base URL, one per flow.
#[derive(Debug, Clone)]
pub struct Endpoints {
    /// Sign-up endpoint, e.g. `/signup`.
    pub sign_up: String,
    /// Login endpoint, e.g. `/login`.
    pub log_in: String,
    /// OTP verification endpoint, e.g. `/verify-otp`.
    pub otp: String,
    /// Token refresh endpoint, e.g. `/refresh`.
    pub refresh: String,
}

/// Logical secure-store account names for the four persisted values.
#[derive(Debug, Clone)]
pub struct StoreAccounts {
    /// Account holding the username.
    pub username: String,
    /// Account holding the password.
    pub password: String,
    /// Account holding the access token.
    pub access_token: String,
    /// Account holding the refresh token.
    pub refresh_token: String,
}

impl Default for StoreAccounts {
    fn default() -> Self {
        Self {
            username: "authkit.username".to_owned(),
            password: "authkit.password".to_owned(),
            access_token: "authkit.access-token".to_owned(),
            refresh_token: "authkit.refresh-token".to_owned(),
        }
    }
}

/// Immutable per-app configuration, assembled once and shared by
/// reference into every operation.
#[derive(Debug, Clone)]
pub struct AuthConfig {
    app_name: String,
    base_url: String,
    endpoints: Endpoints,
    store_accounts: StoreAccounts,
}

impl AuthConfig {
    /// Assembles the configuration with the default store account names.
    #[must_use]
    pub fn new(
        app_name: impl Into<String>,
        base_url: impl Into<String>,
        endpoints: Endpoints,
    ) -> Self {
        Self {
            app_name: app_name.into(),
            base_url: base_url.into(),
            endpoints,
            store_accounts: StoreAccounts::default(),
        }
    }

    /// Replaces the store account names.
    #[must_use]
    pub fn with_store_accounts(mut self, accounts: StoreAccounts) -> Self {
        self.store_accounts = accounts;
        self
    }

    /// The application name the store service identifier derives from.
    #[must_use]
    pub fn app_name(&self) -> &str {
        &self.app_name
    }

    /// The server base URL.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// The secure-store account names.
    #[must_use]
    pub fn store_accounts(&self) -> &StoreAccounts {
        &self.store_accounts
    }

    /// Secure-store service identifier, namespaced by the app name.
    #[must_use]
    pub fn service(&self) -> String {
        format!("com.{}.authkit", self.app_name)
    }

    /// Full sign-up URL.
    #[must_use]
    pub fn sign_up_url(&self) -> String {
        format!("{}{}", self.base_url, self.endpoints.sign_up)
    }

    /// Full login URL.
    #[must_use]
    pub fn log_in_url(&self) -> String {
        format!("{}{}", self.base_url, self.endpoints.log_in)
    }

    /// Full OTP verification URL.
    #[must_use]
    pub fn otp_url(&self) -> String {
        format!("{}{}", self.base_url, self.endpoints.otp)
    }

    /// Full token refresh URL.
    #[must_use]
    pub fn refresh_url(&self) -> String {
        format!("{}{}", self.base_url, self.endpoints.refresh)
    }
}

#[cfg(test)]
pub(crate) fn test_config(base_url: &str) -> AuthConfig {
    AuthConfig::new(
        "test-app",
        base_url,
        Endpoints {
            sign_up: "/signup".to_owned(),
            log_in: "/login".to_owned(),
            otp: "/verify-otp".to_owned(),
            refresh: "/refresh".to_owned(),
        },
    )
}
