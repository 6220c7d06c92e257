//! Global Application State
//!
//! Reactive state management using Leptos signals. The problem and
//! note collections are a disposable mirror of the server's data,
//! rebuilt from scratch after every mutation; the server stays
//! authoritative at all times.

use leptos::*;

use crate::state::session::{self, Session};

/// Difficulty levels a problem can be filed under
pub const DIFFICULTIES: [&str; 3] = ["Easy", "Medium", "Hard"];

/// Global application state provided to all components
#[derive(Clone)]
pub struct GlobalState {
    /// Authenticated identity, `None` when anonymous
    pub session: RwSignal<Option<Session>>,
    /// Mirror of the user's problem collection
    pub problems: RwSignal<Vec<Problem>>,
    /// Mirror of the user's class notes
    pub notes: RwSignal<Vec<Note>>,
    /// Transient search filter for the problem list
    pub search: RwSignal<String>,
    /// Global loading state
    pub loading: RwSignal<bool>,
    /// Error message to display
    pub error: RwSignal<Option<String>>,
    /// Success message (for toasts)
    pub success: RwSignal<Option<String>>,
}

/// A practice problem as the server stores it. Wire format is
/// camelCase JSON; text fields the backend allows to be null are
/// optional here.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Problem {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub id: String,
    #[serde(default)]
    pub user_id: String,
    pub name: String,
    #[serde(default)]
    pub link: Option<String>,
    pub topic: String,
    pub difficulty: String,
    #[serde(default)]
    pub time_complexity: Option<String>,
    #[serde(default)]
    pub space_complexity: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub solved: bool,
    #[serde(default)]
    pub important: bool,
    #[serde(default)]
    pub solution_code: Option<String>,
    /// Always true at creation under current policy
    #[serde(default)]
    pub is_public: bool,
    #[serde(default)]
    pub added_date: String,
    /// Author display name, present only on public listings
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
}

impl Problem {
    /// Whether a non-blank solution has been saved
    pub fn has_solution(&self) -> bool {
        self.solution_code
            .as_deref()
            .is_some_and(|code| !code.trim().is_empty())
    }
}

/// A class note as the server stores it
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub id: String,
    #[serde(default)]
    pub user_id: String,
    pub title: String,
    pub topic: String,
    #[serde(default)]
    pub link: Option<String>,
    #[serde(default)]
    pub remarks: Option<String>,
    #[serde(default)]
    pub added_date: String,
}

/// Provide global state to the component tree, restoring any prior
/// session from durable storage.
pub fn provide_global_state() {
    let state = GlobalState {
        session: create_rw_signal(session::load_session()),
        problems: create_rw_signal(Vec::new()),
        notes: create_rw_signal(Vec::new()),
        search: create_rw_signal(String::new()),
        loading: create_rw_signal(false),
        error: create_rw_signal(None),
        success: create_rw_signal(None),
    };

    provide_context(state);
}

impl GlobalState {
    /// Drop everything tied to the signed-in user. Statistics and
    /// topic breakdowns derive from these collections, so they fall
    /// back to their empty states too.
    pub fn clear_user_data(&self) {
        self.problems.set(Vec::new());
        self.notes.set(Vec::new());
        self.search.set(String::new());
    }

    /// Show a success message (auto-clears after timeout)
    pub fn show_success(&self, message: &str) {
        self.success.set(Some(message.to_string()));

        let success_signal = self.success;
        gloo_timers::callback::Timeout::new(3000, move || {
            success_signal.set(None);
        })
        .forget();
    }

    /// Show an error message (auto-clears after timeout)
    pub fn show_error(&self, message: &str) {
        self.error.set(Some(message.to_string()));

        let error_signal = self.error;
        gloo_timers::callback::Timeout::new(5000, move || {
            error_signal.set(None);
        })
        .forget();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_has_solution_blank_and_missing() {
        let mut problem = Problem::default();
        assert!(!problem.has_solution());

        problem.solution_code = Some("   ".to_string());
        assert!(!problem.has_solution());

        problem.solution_code = Some("fn main() {}".to_string());
        assert!(problem.has_solution());
    }

    #[test]
    fn test_problem_wire_format_is_camel_case() {
        let json = r#"{
            "id": "p1",
            "userId": "u1",
            "name": "Two Sum",
            "link": null,
            "topic": "Arrays",
            "difficulty": "Easy",
            "timeComplexity": "O(n)",
            "spaceComplexity": "O(n)",
            "notes": null,
            "solved": true,
            "important": false,
            "solutionCode": null,
            "isPublic": true,
            "addedDate": "2024-03-01T10:00:00+00:00"
        }"#;

        let problem: Problem = serde_json::from_str(json).unwrap();
        assert_eq!(problem.user_id, "u1");
        assert_eq!(problem.time_complexity.as_deref(), Some("O(n)"));
        assert!(problem.solved);
        assert!(problem.is_public);
        assert_eq!(problem.username, None);
    }

    #[test]
    fn test_clear_user_data_resets_everything() {
        let rt = create_runtime();

        let state = GlobalState {
            session: create_rw_signal(None),
            problems: create_rw_signal(vec![Problem {
                name: "Two Sum".to_string(),
                topic: "Arrays".to_string(),
                difficulty: "Easy".to_string(),
                solved: true,
                important: true,
                ..Problem::default()
            }]),
            notes: create_rw_signal(vec![Note {
                title: "Graphs lecture".to_string(),
                topic: "Graphs".to_string(),
                ..Note::default()
            }]),
            search: create_rw_signal("two".to_string()),
            loading: create_rw_signal(false),
            error: create_rw_signal(None),
            success: create_rw_signal(None),
        };

        state.clear_user_data();

        assert!(state.problems.get_untracked().is_empty());
        assert!(state.notes.get_untracked().is_empty());
        assert!(state.search.get_untracked().is_empty());

        // Derived statistics fall back to their zero state with the mirror
        let summary = crate::state::stats::summarize(&state.problems.get_untracked());
        assert_eq!(summary, crate::state::stats::Summary::default());
        assert!(crate::state::stats::topic_breakdown(&state.problems.get_untracked()).is_empty());

        rt.dispose();
    }

    #[test]
    fn test_new_problem_serializes_without_id() {
        let problem = Problem {
            name: "Two Sum".to_string(),
            topic: "Arrays".to_string(),
            difficulty: "Easy".to_string(),
            ..Problem::default()
        };

        let json = serde_json::to_string(&problem).unwrap();
        assert!(!json.contains("\"id\""));
        assert!(json.contains("\"solutionCode\""));
    }
}
