// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Bearer token verification seam.
//!
//! Token issuance (the OAuth2 authorization and token endpoints) lives
//! outside this crate. All the bridge needs is a way to turn a presented
//! access token into a user id, which is what [`TokenVerifier`] provides.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

/// Opaque identity of an authenticated user.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct UserId(String);

impl UserId {
    /// Wraps a user id string.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the id as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Maps an access token to the user it was issued to.
pub trait TokenVerifier: Send + Sync {
    /// Returns the user for a valid token, `None` otherwise.
    fn verify(&self, token: &str) -> Option<UserId>;
}

/// A fixed set of pre-issued tokens.
///
/// # Examples
///
/// ```
/// use alice_bridge::auth::{StaticTokens, TokenVerifier};
///
/// let tokens = StaticTokens::new().with_token("s3cret", "user");
/// assert_eq!(tokens.verify("s3cret").unwrap().as_str(), "user");
/// assert!(tokens.verify("guess").is_none());
/// ```
#[derive(Debug, Clone, Default)]
pub struct StaticTokens {
    tokens: HashMap<String, UserId>,
}

impl StaticTokens {
    /// Creates an empty verifier that rejects everything.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a token issued to `user`.
    #[must_use]
    pub fn with_token(mut self, token: impl Into<String>, user: impl Into<String>) -> Self {
        self.tokens.insert(token.into(), UserId::new(user));
        self
    }

    /// Number of known tokens.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Returns `true` if no token is configured.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

impl TokenVerifier for StaticTokens {
    fn verify(&self, token: &str) -> Option<UserId> {
        self.tokens.get(token).cloned()
    }
}

impl FromIterator<TokenGrant> for StaticTokens {
    fn from_iter<I: IntoIterator<Item = TokenGrant>>(iter: I) -> Self {
        iter.into_iter()
            .fold(Self::new(), |acc, grant| acc.with_token(grant.token, grant.user))
    }
}

/// A `TOKEN=USER` pair, as given on the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenGrant {
    /// The bearer token.
    pub token: String,
    /// The user it authenticates.
    pub user: String,
}

/// Error returned for a malformed `TOKEN=USER` pair.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("expected TOKEN=USER, got {0:?}")]
pub struct InvalidTokenGrant(String);

impl FromStr for TokenGrant {
    type Err = InvalidTokenGrant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.split_once('=') {
            Some((token, user)) if !token.is_empty() && !user.is_empty() => Ok(Self {
                token: token.to_string(),
                user: user.to_string(),
            }),
            _ => Err(InvalidTokenGrant(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_verifier_rejects_everything() {
        let tokens = StaticTokens::new();
        assert!(tokens.is_empty());
        assert!(tokens.verify("").is_none());
        assert!(tokens.verify("anything").is_none());
    }

    #[test]
    fn grant_parses_token_and_user() {
        let grant: TokenGrant = "abc=alice".parse().unwrap();
        assert_eq!(grant.token, "abc");
        assert_eq!(grant.user, "alice");

        // Only the first '=' splits.
        let grant: TokenGrant = "a=b=c".parse().unwrap();
        assert_eq!(grant.token, "a");
        assert_eq!(grant.user, "b=c");
    }

    #[test]
    fn grant_rejects_malformed_pairs() {
        for bad in ["abc", "=alice", "abc=", ""] {
            assert!(bad.parse::<TokenGrant>().is_err(), "{bad:?} should fail");
        }
    }

    #[test]
    fn collects_grants() {
        let tokens: StaticTokens = ["t1=u1", "t2=u2"]
            .iter()
            .map(|s| s.parse::<TokenGrant>().unwrap())
            .collect();
        assert_eq!(tokens.len(), 2);
        assert_eq!(tokens.verify("t2"), Some(UserId::new("u2")));
    }
}
