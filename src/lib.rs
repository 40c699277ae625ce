pub mod app;
pub mod config;
pub mod data;
pub mod error;
pub mod model;
pub mod progress;
pub mod session;
pub mod store;
pub mod ui;
pub mod view_models;

pub use app::QuizApp;
pub use session::QuizSession;
