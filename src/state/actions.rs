//! Reconciliation Actions
//!
//! Every mutation follows the same shape: issue the call, then throw
//! away the in-memory mirror and re-fetch the authoritative collection
//! so the displayed state never diverges from the server for more than
//! one round trip. Flag toggles and solution saves go through a bulk
//! replace of the user's whole collection rather than a per-item patch.
//!
//! Interactive problem-card actions are expressed as [`ProblemAction`]
//! values routed through a single handler, and the local-edit step is
//! a plain function over the collection so it stays testable.

use leptos::{SignalGetUntracked, SignalSet};

use crate::api::{self, ApiError};
use crate::state::global::{GlobalState, Note, Problem};
use crate::state::session::{self, Session};

/// An action triggered from a problem card
#[derive(Clone, Debug, PartialEq)]
pub enum ProblemAction {
    SetSolved(bool),
    ToggleImportant,
    SaveSolution(String),
    Delete,
}

/// Load collections for the restored session, if any. Invoked on
/// startup and again after login; there is no page-reload reset.
pub async fn initialize(state: &GlobalState) {
    state.loading.set(true);

    if state.session.get_untracked().is_some() {
        if let Err(e) = refresh_problems(state).await {
            report(state, &e);
        }
        if let Err(e) = refresh_notes(state).await {
            report(state, &e);
        }
    } else {
        web_sys::console::log_1(&"No user logged in on start".into());
    }

    state.loading.set(false);
}

/// Whether a page-entry refresh should run. Anonymous visitors have
/// nothing to fetch, and when a load is already in flight the startup
/// path is rebuilding both mirrors itself, so a second fetch of the
/// same collection would be redundant.
pub fn should_refresh(session: Option<&Session>, loading: bool) -> bool {
    session.is_some() && !loading
}

/// Replace the problem mirror with the server's current collection
pub async fn refresh_problems(state: &GlobalState) -> Result<(), ApiError> {
    let session = state.session.get_untracked();
    let problems = api::fetch_problems(session.as_ref()).await?;
    state.problems.set(problems);
    Ok(())
}

/// Replace the note mirror with the server's current collection
pub async fn refresh_notes(state: &GlobalState) -> Result<(), ApiError> {
    let session = state.session.get_untracked();
    let notes = api::fetch_notes(session.as_ref()).await?;
    state.notes.set(notes);
    Ok(())
}

/// Authenticate, persist the session, and re-initialize application
/// state in place. Returns the server's greeting message.
pub async fn log_in(
    state: &GlobalState,
    username: &str,
    password: &str,
) -> Result<String, ApiError> {
    let response = api::login(username, password).await?;
    let message = response.message.clone();

    let session = Session {
        user_id: response.user_id,
        username: response.username,
    };
    session::save_session(&session);
    state.session.set(Some(session));

    initialize(state).await;
    Ok(message)
}

/// Drop the session and every collection derived from it
pub fn log_out(state: &GlobalState) {
    session::clear_session();
    state.session.set(None);
    state.clear_user_data();
    state.show_success("Logged out successfully");
}

/// Create a problem owned by the current user, then rebuild the mirror
pub async fn add_problem(state: &GlobalState, mut problem: Problem) -> Result<(), ApiError> {
    let session = state.session.get_untracked().ok_or(ApiError::NoSession)?;
    problem.user_id = session.user_id.clone();
    // Current policy: every problem is shared publicly
    problem.is_public = true;

    api::create_problem(Some(&session), &problem).await?;
    refresh_problems(state).await
}

/// Create a note owned by the current user, then rebuild the mirror
pub async fn add_note(state: &GlobalState, mut note: Note) -> Result<(), ApiError> {
    let session = state.session.get_untracked().ok_or(ApiError::NoSession)?;
    note.user_id = session.user_id.clone();

    api::create_note(Some(&session), &note).await?;
    refresh_notes(state).await
}

/// Single dispatch point for problem-card actions
pub async fn apply_problem_action(state: GlobalState, id: String, action: ProblemAction) {
    let result = match &action {
        ProblemAction::Delete => remove_problem(&state, &id).await,
        _ => sync_edit(&state, &id, &action).await,
    };

    match result {
        Ok(()) => match action {
            ProblemAction::Delete => state.show_success("Problem deleted"),
            ProblemAction::SaveSolution(_) => state.show_success("Solution saved"),
            // Flag toggles stay quiet; the card already reflects them
            _ => {}
        },
        Err(e) => state.show_error(&e.to_string()),
    }
}

/// Delete a note, then rebuild the mirror
pub async fn remove_note(state: GlobalState, id: String) {
    let result = async {
        let session = state.session.get_untracked();
        api::delete_note(session.as_ref(), &id).await?;
        refresh_notes(&state).await
    }
    .await;

    match result {
        Ok(()) => state.show_success("Note deleted"),
        Err(e) => state.show_error(&e.to_string()),
    }
}

async fn remove_problem(state: &GlobalState, id: &str) -> Result<(), ApiError> {
    let session = state.session.get_untracked();
    api::delete_problem(session.as_ref(), id).await?;
    refresh_problems(state).await
}

/// Apply the edit locally, bulk-replace the user's collection, then
/// re-fetch. If the target problem is gone from the mirror (a delete
/// raced us), the edit is a no-op.
async fn sync_edit(state: &GlobalState, id: &str, action: &ProblemAction) -> Result<(), ApiError> {
    let mut problems = state.problems.get_untracked();
    if !edit_problem(&mut problems, id, action) {
        return Ok(());
    }

    let session = state.session.get_untracked();
    api::replace_problems(session.as_ref(), &problems).await?;
    refresh_problems(state).await
}

/// Apply an edit action to the problem with the given id. Returns
/// whether a problem was found and changed; `Delete` is never a local
/// edit.
fn edit_problem(problems: &mut [Problem], id: &str, action: &ProblemAction) -> bool {
    let Some(problem) = problems.iter_mut().find(|p| p.id == id) else {
        return false;
    };

    match action {
        ProblemAction::SetSolved(solved) => problem.solved = *solved,
        ProblemAction::ToggleImportant => problem.important = !problem.important,
        ProblemAction::SaveSolution(code) => problem.solution_code = Some(code.clone()),
        ProblemAction::Delete => return false,
    }
    true
}

fn report(state: &GlobalState, err: &ApiError) {
    web_sys::console::error_1(&format!("Request failed: {}", err).into());
    state.show_error(&err.to_string());
}

#[cfg(test)]
mod tests {
    use super::*;

    fn problem(id: &str) -> Problem {
        Problem {
            id: id.to_string(),
            name: format!("problem {}", id),
            topic: "Arrays".to_string(),
            difficulty: "Easy".to_string(),
            ..Problem::default()
        }
    }

    #[test]
    fn test_refresh_skipped_without_session_or_while_busy() {
        let session = Session {
            user_id: "u1".to_string(),
            username: "alice".to_string(),
        };

        assert!(should_refresh(Some(&session), false));
        assert!(!should_refresh(Some(&session), true));
        assert!(!should_refresh(None, false));
        assert!(!should_refresh(None, true));
    }

    #[test]
    fn test_edit_toggles_only_target() {
        let mut problems = vec![problem("p1"), problem("p2")];

        assert!(edit_problem(&mut problems, "p2", &ProblemAction::SetSolved(true)));

        assert!(!problems[0].solved);
        assert!(problems[1].solved);
        assert!(!problems[1].important);
        assert_eq!(problems[1].solution_code, None);
    }

    #[test]
    fn test_edit_important_flips_in_place() {
        let mut problems = vec![problem("p1")];

        assert!(edit_problem(&mut problems, "p1", &ProblemAction::ToggleImportant));
        assert!(problems[0].important);

        assert!(edit_problem(&mut problems, "p1", &ProblemAction::ToggleImportant));
        assert!(!problems[0].important);
    }

    #[test]
    fn test_edit_saves_solution_text() {
        let mut problems = vec![problem("p1")];
        let action = ProblemAction::SaveSolution("fn main() {}".to_string());

        assert!(edit_problem(&mut problems, "p1", &action));
        assert_eq!(problems[0].solution_code.as_deref(), Some("fn main() {}"));
        assert!(!problems[0].solved);
    }

    #[test]
    fn test_edit_missing_problem_is_noop() {
        let mut problems = vec![problem("p1")];
        let before = problems.clone();

        assert!(!edit_problem(&mut problems, "p9", &ProblemAction::SetSolved(true)));
        assert_eq!(problems, before);
    }

    #[test]
    fn test_delete_is_not_a_local_edit() {
        let mut problems = vec![problem("p1")];
        assert!(!edit_problem(&mut problems, "p1", &ProblemAction::Delete));
        assert_eq!(problems.len(), 1);
    }
}
