//! Account Commands
//!
//! Signup, login, logout and profile edits.

use serde::{Deserialize, Serialize};

use crate::auth::{normalize_email, MIN_PASSWORD_LEN};
use crate::domain::{Account, AccountProfile, DomainError, DomainResult, Session};
use crate::AppState;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignupForm {
    pub name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProfileUpdate {
    pub name: Option<String>,
    /// Blank clears the phone number
    pub phone: Option<String>,
}

fn password_too_short(password: &str) -> bool {
    password.chars().count() < MIN_PASSWORD_LEN
}

fn password_length_error() -> DomainError {
    DomainError::InvalidInput(format!(
        "Password must be at least {} characters",
        MIN_PASSWORD_LEN
    ))
}

/// Register an account and sign it in
pub async fn signup(
    state: &AppState,
    session: &mut Session,
    form: SignupForm,
) -> DomainResult<AccountProfile> {
    let name = form.name.trim();
    let email = normalize_email(&form.email);

    if name.is_empty() || email.is_empty() || form.password.is_empty() {
        return Err(DomainError::InvalidInput("Please fill in all fields".to_string()));
    }
    if form.password != form.confirm_password {
        return Err(DomainError::InvalidInput("Passwords do not match".to_string()));
    }
    if password_too_short(&form.password) {
        return Err(password_length_error());
    }
    if state.accounts.find_by_email(&email).await?.is_some() {
        return Err(DomainError::Conflict(
            "Email already registered. Please sign in instead.".to_string(),
        ));
    }

    let account = Account::new(name.to_string(), email, state.hasher.hash(&form.password));
    let account = state.accounts.insert(&account).await?;

    session.sign_in(account.id.clone());
    log::info!("Registered account {}", account.id);
    Ok(account.profile())
}

/// Sign in with email and password
pub async fn login(
    state: &AppState,
    session: &mut Session,
    email: &str,
    password: &str,
) -> DomainResult<AccountProfile> {
    let email = normalize_email(email);

    if email.is_empty() || password.is_empty() {
        return Err(DomainError::InvalidInput(
            "Please enter both email and password".to_string(),
        ));
    }
    if password_too_short(password) {
        return Err(password_length_error());
    }

    let account = state
        .accounts
        .find_by_email(&email)
        .await?
        .filter(|account| state.hasher.verify(password, &account.password_hash))
        .ok_or_else(|| {
            log::warn!("Failed login attempt");
            DomainError::Unauthorized("Invalid email or password. Please sign up first.".to_string())
        })?;

    session.sign_in(account.id.clone());
    log::info!("Account {} signed in", account.id);
    Ok(account.profile())
}

pub fn logout(session: &mut Session) {
    if let Some(user_id) = session.user_id.as_deref() {
        log::info!("Account {} signed out", user_id);
    }
    session.sign_out();
}

async fn current_account(state: &AppState, session: &Session) -> DomainResult<Account> {
    let user_id = session.require_user()?;
    state
        .accounts
        .find_by_id(user_id)
        .await?
        .ok_or_else(|| DomainError::Unauthorized("User not authenticated".to_string()))
}

pub async fn current_profile(state: &AppState, session: &Session) -> DomainResult<AccountProfile> {
    Ok(current_account(state, session).await?.profile())
}

pub async fn update_profile(
    state: &AppState,
    session: &Session,
    update: ProfileUpdate,
) -> DomainResult<AccountProfile> {
    let account = current_account(state, session).await?;

    let name = match update.name {
        Some(name) if name.trim().is_empty() => {
            return Err(DomainError::InvalidInput("Name cannot be empty".to_string()))
        }
        Some(name) => name.trim().to_string(),
        None => account.name,
    };
    let phone = match update.phone {
        Some(phone) if phone.trim().is_empty() => None,
        Some(phone) => Some(phone.trim().to_string()),
        None => account.phone,
    };

    let updated = state
        .accounts
        .update_profile(&account.id, &name, phone.as_deref())
        .await?;
    Ok(updated.profile())
}
