//! Terminal user interface built on [ratatui](https://github.com/ratatui-org/ratatui).
//!
//! The UI is organized into three layers:
//!
//! - **[`app`]** — application state, keyboard event loop, pane focus
//! - **[`panes`]** — stateless render functions for each visible pane
//!   (history, variables, expression input, status bar)
//! - **[`theme`]** — centralized color palette used by all panes
//!
//! The entry point for consumers is [`App`]: construct it with an
//! [`Evaluator`] and call [`App::run`] to start the event loop.  Evaluation
//! errors are rendered per-expression in the history pane; they never end
//! the session.
//!
//! [`Evaluator`]: crate::interpreter::engine::Evaluator
//! [`App::run`]: app::App::run

pub mod app;
pub mod panes;
pub mod theme;

pub use app::App;
