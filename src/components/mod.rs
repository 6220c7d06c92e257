//! UI Components
//!
//! Reusable Leptos components for the study tracker.

pub mod loading;
pub mod nav;
pub mod note_card;
pub mod note_form;
pub mod problem_card;
pub mod problem_form;
pub mod stat_card;
pub mod toast;

pub use loading::{ListSkeleton, Loading};
pub use nav::Nav;
pub use note_card::NoteCard;
pub use note_form::NoteForm;
pub use problem_card::{ProblemCard, PublicProblemCard};
pub use problem_form::ProblemForm;
pub use stat_card::StatCard;
pub use toast::Toast;
