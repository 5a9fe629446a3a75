use serde::Deserialize;

/// The access/refresh pair currently held for a session.
///
/// `None` is a meaningful state: no session (or an explicit logout), not
/// an error.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TokenPair {
    /// Current access token, if a session is active.
    pub access_token: Option<String>,
    /// Current refresh token, if a session is active.
    pub refresh_token: Option<String>,
}

/// Token-bearing payload returned by the login, sign-up and refresh
/// endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TokenResponse {
    /// Bearer token for authenticated calls.
    pub access_token: String,
    /// Token exchanged for a fresh pair when the access token expires.
    pub refresh_token: String,
    /// Scheme of the issued token, typically `bearer`.
    pub token_type: String,
}

/// Read access to the tokens inside a successful payload.
///
/// Persistence decorators require the chain's output to implement this,
/// which keeps token-saving chains monomorphic without tying them to one
/// concrete response shape.
pub trait TokenGrant {
    /// The issued access token.
    fn access_token(&self) -> &str;
    /// The issued refresh token.
    fn refresh_token(&self) -> &str;
}

impl TokenGrant for TokenResponse {
    fn access_token(&self) -> &str {
        &self.access_token
    }

    fn refresh_token(&self) -> &str {
        &self.refresh_token
    }
}
