//! Pages
//!
//! Top-level page components for each route.

pub mod home;
pub mod login;
pub mod notes;
pub mod progress;
pub mod register;
pub mod shared;

pub use home::Home;
pub use login::Login;
pub use notes::ClassNotes;
pub use progress::Progress;
pub use register::Register;
pub use shared::Shared;
