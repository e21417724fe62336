//! Mock sign-in. Any credentials are accepted; the user record only labels
//! the session.

use crate::errors::{AccountError, StorageError, ValidationError};
use crate::ledger::{self, keys, LedgerStore};
use crate::models::{AuthUser, ProfileData};
use tracing::info;

pub fn current_user<S: LedgerStore + ?Sized>(store: &S) -> Option<AuthUser> {
    ledger::load_object(store, keys::AUTH_USER)
}

pub fn login<S: LedgerStore + ?Sized>(
    store: &mut S,
    email: &str,
    name: Option<&str>,
) -> Result<AuthUser, AccountError> {
    let email = email.trim();
    if email.is_empty() {
        return Err(ValidationError::Missing("email").into());
    }
    let name = name
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(str::to_string)
        .unwrap_or_else(|| display_name(email));
    let user = AuthUser {
        name,
        email: email.to_string(),
    };
    let value = ledger::encode(keys::AUTH_USER, &user)?;
    store.write(vec![(keys::AUTH_USER.to_string(), Some(value))])?;
    info!("signed in {}", user.email);
    Ok(user)
}

pub fn logout<S: LedgerStore + ?Sized>(store: &mut S) -> Result<(), StorageError> {
    store.write(vec![(keys::AUTH_USER.to_string(), None)])
}

/// "jane.doe@example.com" -> "Jane Doe"
fn display_name(email: &str) -> String {
    let local = email.split('@').next().unwrap_or(email);
    local
        .split(['.', '_', '-'])
        .filter(|part| !part.is_empty())
        .map(|part| {
            let mut chars = part.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Stored profile, or one seeded from the signed-in user.
pub fn profile<S: LedgerStore + ?Sized>(store: &S) -> Option<ProfileData> {
    ledger::load_object(store, keys::PROFILE).or_else(|| {
        current_user(store).map(|user| ProfileData {
            name: user.name,
            email: user.email,
            location: String::new(),
            join_date: String::new(),
            bio: String::new(),
        })
    })
}

pub fn update_profile<S: LedgerStore + ?Sized>(
    store: &mut S,
    profile: ProfileData,
) -> Result<ProfileData, AccountError> {
    if profile.name.trim().is_empty() {
        return Err(ValidationError::Missing("name").into());
    }
    if profile.email.trim().is_empty() {
        return Err(ValidationError::Missing("email").into());
    }
    let value = ledger::encode(keys::PROFILE, &profile)?;
    store.write(vec![(keys::PROFILE.to_string(), Some(value))])?;
    Ok(profile)
}
