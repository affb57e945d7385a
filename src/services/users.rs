// ABOUTME: User registration with email validation and location naming
// ABOUTME: Registering an existing email returns the stored user unchanged
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Next Good Day

use tracing::{info, warn};

use crate::constants::display::UNKNOWN_LOCATION;
use crate::errors::{AppError, AppResult, ErrorCode};
use crate::models::User;
use crate::resources::ServerResources;

/// Profile fields supplied at registration
#[derive(Debug, Clone, PartialEq)]
pub struct NewUser {
    /// Email address, unique per user
    pub email: String,
    /// Age range label such as `25-34` or `55+`
    pub age_range: String,
    /// Optional gender
    pub gender: Option<String>,
    /// Home latitude
    pub location_lat: f64,
    /// Home longitude
    pub location_lon: f64,
}

/// Check that an address has exactly one `@` with text on both sides
///
/// # Errors
///
/// Returns `InvalidInput` when the address is malformed
pub fn validate_email(email: &str) -> AppResult<()> {
    let mut parts = email.split('@');
    match (parts.next(), parts.next(), parts.next()) {
        (Some(local), Some(domain), None)
            if !local.trim().is_empty() && !domain.trim().is_empty() =>
        {
            Ok(())
        }
        _ => Err(AppError::invalid_input(format!("Invalid email address: {email}"))),
    }
}

/// Register a user, or return the existing user with the same email
///
/// # Errors
///
/// Returns `InvalidInput` for a malformed email or out-of-range coordinates,
/// or a database error
pub async fn register_user(resources: &ServerResources, request: NewUser) -> AppResult<User> {
    validate_email(&request.email)?;
    validate_coordinates(request.location_lat, request.location_lon)?;

    let users = resources.database.users();
    if let Some(existing) = users.get_by_email(&request.email).await? {
        return Ok(existing);
    }

    let location_name = match resources
        .locations
        .location_name(request.location_lat, request.location_lon)
        .await
    {
        Ok(name) => name,
        Err(e) => {
            warn!(error = %e, "Location lookup failed");
            UNKNOWN_LOCATION.to_owned()
        }
    };

    let mut user = User::new(
        request.email,
        request.age_range,
        request.gender,
        request.location_lat,
        request.location_lon,
    );
    user.location_name = Some(location_name);

    match users.create(&user).await {
        Ok(()) => {
            info!(user_id = %user.id, "Registered user");
            Ok(user)
        }
        // Lost a race with a concurrent registration for the same address.
        Err(e) if e.code == ErrorCode::ResourceAlreadyExists => users
            .get_by_email(&user.email)
            .await?
            .ok_or(e),
        Err(e) => Err(e),
    }
}

/// Load a user or fail with `ResourceNotFound`
///
/// # Errors
///
/// Returns `ResourceNotFound` when no user has this id, or a database error
pub async fn require_user(resources: &ServerResources, user_id: uuid::Uuid) -> AppResult<User> {
    resources
        .database
        .users()
        .get(user_id)
        .await?
        .ok_or_else(|| AppError::not_found("User"))
}

fn validate_coordinates(lat: f64, lon: f64) -> AppResult<()> {
    if !(-90.0..=90.0).contains(&lat) || !(-180.0..=180.0).contains(&lon) {
        return Err(AppError::invalid_input(format!(
            "Coordinates out of range: {lat}, {lon}"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_email() {
        assert!(validate_email("alex@example.com").is_ok());
        assert!(validate_email("alex").is_err());
        assert!(validate_email("@example.com").is_err());
        assert!(validate_email("alex@").is_err());
        assert!(validate_email("a@b@c").is_err());
    }

    #[test]
    fn test_validate_coordinates() {
        assert!(validate_coordinates(37.77, -122.42).is_ok());
        assert!(validate_coordinates(91.0, 0.0).is_err());
        assert!(validate_coordinates(0.0, -181.0).is_err());
        assert!(validate_coordinates(f64::NAN, 0.0).is_err());
    }
}
