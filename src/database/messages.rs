// ABOUTME: Stored invitation messages linked to users and recommendations
// ABOUTME: Each generated invitation is persisted before it is returned
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Next Good Day

use chrono::Utc;
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};
use uuid::Uuid;

use super::{parse_timestamp, parse_uuid};
use crate::errors::{AppError, AppResult};
use crate::models::Message;

/// Invitation about to be stored
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewMessage {
    /// Sender
    pub user_id: Uuid,
    /// Recipient address, if given
    pub recipient_email: Option<String>,
    /// Subject line
    pub subject: String,
    /// Plain-text body
    pub body: String,
    /// Recommendation the invitation is about
    pub recommendation_id: Option<i64>,
}

/// Message database operations
pub struct MessagesManager {
    pool: SqlitePool,
}

impl MessagesManager {
    /// Create a new messages manager
    #[must_use]
    pub const fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Store an invitation
    ///
    /// # Errors
    ///
    /// Returns an error if the insert fails
    pub async fn create(&self, message: NewMessage) -> AppResult<Message> {
        let now = Utc::now();
        let result = sqlx::query(
            r"
            INSERT INTO messages (user_id, recipient_email, subject, body, recommendation_id, created_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            ",
        )
        .bind(message.user_id.to_string())
        .bind(&message.recipient_email)
        .bind(&message.subject)
        .bind(&message.body)
        .bind(message.recommendation_id)
        .bind(now.to_rfc3339())
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to create message: {e}")))?;

        Ok(Message {
            id: result.last_insert_rowid(),
            user_id: message.user_id,
            recipient_email: message.recipient_email,
            subject: message.subject,
            body: message.body,
            recommendation_id: message.recommendation_id,
            created_at: now,
        })
    }

    /// Invitations sent by a user, oldest first
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails or a row is malformed
    pub async fn list_for_user(&self, user_id: Uuid) -> AppResult<Vec<Message>> {
        let rows = sqlx::query(
            r"
            SELECT id, user_id, recipient_email, subject, body, recommendation_id, created_at
            FROM messages
            WHERE user_id = $1
            ORDER BY id ASC
            ",
        )
        .bind(user_id.to_string())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to list messages: {e}")))?;

        rows.iter().map(row_to_message).collect()
    }
}

fn row_to_message(row: &SqliteRow) -> AppResult<Message> {
    let user_id: String = row.get("user_id");
    let created_at: String = row.get("created_at");

    Ok(Message {
        id: row.get("id"),
        user_id: parse_uuid(&user_id)?,
        recipient_email: row.get("recipient_email"),
        subject: row.get("subject"),
        body: row.get("body"),
        recommendation_id: row.get("recommendation_id"),
        created_at: parse_timestamp(&created_at)?,
    })
}
