//! Terminal user interface for the academy client.

pub mod app;
pub mod dashboard;
pub mod lesson;
pub mod quiz_view;
pub mod results;
pub mod splash;

pub use app::{App, run};
