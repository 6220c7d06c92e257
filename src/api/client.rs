//! HTTP API Client
//!
//! Functions for communicating with the Studylog REST API. Every
//! authenticated call attaches the session's user identifier as a
//! `User-Id` header; with no session the call short-circuits before any
//! request is issued. A single failed attempt is terminal — no retries,
//! no timeouts.

use gloo_net::http::{Request, Response};

use crate::api::error::ApiError;
use crate::state::global::{Note, Problem};
use crate::state::session::Session;

/// Default API base URL
pub const DEFAULT_API_BASE: &str = "http://127.0.0.1:5001";

/// Local storage key overriding the API base URL
const API_URL_KEY: &str = "studylog_api_url";

/// Get the API base URL from local storage or use default
pub fn get_api_base() -> String {
    let url = if let Some(window) = web_sys::window() {
        if let Ok(Some(storage)) = window.local_storage() {
            if let Ok(Some(url)) = storage.get_item(API_URL_KEY) {
                url
            } else {
                DEFAULT_API_BASE.to_string()
            }
        } else {
            DEFAULT_API_BASE.to_string()
        }
    } else {
        DEFAULT_API_BASE.to_string()
    };
    // Normalize: remove trailing slash
    url.trim_end_matches('/').to_string()
}

// ============ Response Types ============

#[derive(Debug, serde::Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

#[derive(Debug, Clone, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub message: String,
    pub user_id: String,
    pub username: String,
}

// ============ Helpers ============

/// Refuse an authenticated call when no session exists. Keeps the
/// "zero network requests without a session" rule in one place.
fn require_session(session: Option<&Session>) -> Result<&Session, ApiError> {
    session.ok_or(ApiError::NoSession)
}

/// Map a non-success response to the error taxonomy. A 401 means the
/// session is no longer trusted; anything else carries the server's
/// message through when one is present.
async fn error_for_status(response: Response) -> ApiError {
    let status = response.status();
    if status == 401 {
        return ApiError::Unauthorized;
    }
    let message = response
        .json::<MessageResponse>()
        .await
        .map(|m| m.message)
        .unwrap_or_else(|_| format!("HTTP error {}", status));
    ApiError::Request(message)
}

/// The subset of a collection owned by the given user. Bulk replace
/// must never resend other users' public problems that leaked into a
/// mixed payload.
pub fn owned_by<'a>(problems: &'a [Problem], user_id: &str) -> Vec<&'a Problem> {
    problems.iter().filter(|p| p.user_id == user_id).collect()
}

// ============ Authentication ============

/// Register a new account. Does not log the user in.
pub async fn register(username: &str, password: &str) -> Result<String, ApiError> {
    #[derive(serde::Serialize)]
    struct Credentials<'a> {
        username: &'a str,
        password: &'a str,
    }

    let response = Request::post(&format!("{}/register", get_api_base()))
        .json(&Credentials { username, password })
        .map_err(|e| ApiError::Request(format!("Request build error: {}", e)))?
        .send()
        .await
        .map_err(ApiError::network)?;

    if !response.ok() {
        return Err(error_for_status(response).await);
    }

    let result: MessageResponse = response.json().await.map_err(ApiError::parse)?;
    Ok(result.message)
}

/// Log in with existing credentials, returning the server-assigned
/// identity pair on success.
pub async fn login(username: &str, password: &str) -> Result<LoginResponse, ApiError> {
    #[derive(serde::Serialize)]
    struct Credentials<'a> {
        username: &'a str,
        password: &'a str,
    }

    let response = Request::post(&format!("{}/login", get_api_base()))
        .json(&Credentials { username, password })
        .map_err(|e| ApiError::Request(format!("Request build error: {}", e)))?
        .send()
        .await
        .map_err(ApiError::network)?;

    if !response.ok() {
        return Err(error_for_status(response).await);
    }

    response.json().await.map_err(ApiError::parse)
}

// ============ Problems ============

/// Fetch the current user's full problem collection
pub async fn fetch_problems(session: Option<&Session>) -> Result<Vec<Problem>, ApiError> {
    let session = require_session(session)?;

    let response = Request::get(&format!("{}/problems", get_api_base()))
        .header("User-Id", &session.user_id)
        .send()
        .await
        .map_err(ApiError::network)?;

    if !response.ok() {
        return Err(error_for_status(response).await);
    }

    response.json().await.map_err(ApiError::parse)
}

/// Create a single problem
pub async fn create_problem(session: Option<&Session>, problem: &Problem) -> Result<(), ApiError> {
    let session = require_session(session)?;

    let response = Request::post(&format!("{}/problems", get_api_base()))
        .header("User-Id", &session.user_id)
        .json(problem)
        .map_err(|e| ApiError::Request(format!("Request build error: {}", e)))?
        .send()
        .await
        .map_err(ApiError::network)?;

    if !response.ok() {
        return Err(error_for_status(response).await);
    }

    Ok(())
}

/// Bulk-replace the user's problem collection. The payload is filtered
/// to the session user's own problems; the server overwrites matching
/// records wholesale (last writer wins, no version check).
pub async fn replace_problems(
    session: Option<&Session>,
    problems: &[Problem],
) -> Result<(), ApiError> {
    let session = require_session(session)?;
    let payload = owned_by(problems, &session.user_id);

    let response = Request::post(&format!("{}/problems", get_api_base()))
        .header("User-Id", &session.user_id)
        .json(&payload)
        .map_err(|e| ApiError::Request(format!("Request build error: {}", e)))?
        .send()
        .await
        .map_err(ApiError::network)?;

    if !response.ok() {
        return Err(error_for_status(response).await);
    }

    Ok(())
}

/// Delete a single problem by id
pub async fn delete_problem(session: Option<&Session>, id: &str) -> Result<(), ApiError> {
    let session = require_session(session)?;

    let response = Request::delete(&format!("{}/problems/{}", get_api_base(), id))
        .header("User-Id", &session.user_id)
        .send()
        .await
        .map_err(ApiError::network)?;

    if !response.ok() {
        return Err(error_for_status(response).await);
    }

    Ok(())
}

/// Fetch all publicly shared problems, from every user. No session
/// required.
pub async fn fetch_public_problems() -> Result<Vec<Problem>, ApiError> {
    let response = Request::get(&format!("{}/public_problems", get_api_base()))
        .send()
        .await
        .map_err(ApiError::network)?;

    if !response.ok() {
        return Err(error_for_status(response).await);
    }

    response.json().await.map_err(ApiError::parse)
}

// ============ Notes ============

/// Fetch the current user's class notes
pub async fn fetch_notes(session: Option<&Session>) -> Result<Vec<Note>, ApiError> {
    let session = require_session(session)?;

    let response = Request::get(&format!("{}/notes", get_api_base()))
        .header("User-Id", &session.user_id)
        .send()
        .await
        .map_err(ApiError::network)?;

    if !response.ok() {
        return Err(error_for_status(response).await);
    }

    response.json().await.map_err(ApiError::parse)
}

/// Create a single note. The notes endpoint accepts a list, so a
/// create is a one-element sync.
pub async fn create_note(session: Option<&Session>, note: &Note) -> Result<(), ApiError> {
    let session = require_session(session)?;

    let response = Request::post(&format!("{}/notes", get_api_base()))
        .header("User-Id", &session.user_id)
        .json(&[note])
        .map_err(|e| ApiError::Request(format!("Request build error: {}", e)))?
        .send()
        .await
        .map_err(ApiError::network)?;

    if !response.ok() {
        return Err(error_for_status(response).await);
    }

    Ok(())
}

/// Delete a single note by id
pub async fn delete_note(session: Option<&Session>, id: &str) -> Result<(), ApiError> {
    let session = require_session(session)?;

    let response = Request::delete(&format!("{}/notes/{}", get_api_base(), id))
        .header("User-Id", &session.user_id)
        .send()
        .await
        .map_err(ApiError::network)?;

    if !response.ok() {
        return Err(error_for_status(response).await);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::global::Problem;

    fn problem_for(user_id: &str) -> Problem {
        Problem {
            user_id: user_id.to_string(),
            ..Problem::default()
        }
    }

    #[test]
    fn test_require_session_refuses_anonymous() {
        assert_eq!(require_session(None).unwrap_err(), ApiError::NoSession);
    }

    #[test]
    fn test_require_session_passes_through() {
        let session = Session {
            user_id: "u1".to_string(),
            username: "alice".to_string(),
        };
        assert_eq!(require_session(Some(&session)).unwrap().user_id, "u1");
    }

    #[test]
    fn test_owned_by_filters_other_users() {
        let problems = vec![problem_for("u1"), problem_for("u2"), problem_for("u1")];
        let mine = owned_by(&problems, "u1");
        assert_eq!(mine.len(), 2);
        assert!(mine.iter().all(|p| p.user_id == "u1"));
    }

    #[test]
    fn test_owned_by_empty_collection() {
        assert!(owned_by(&[], "u1").is_empty());
    }
}
