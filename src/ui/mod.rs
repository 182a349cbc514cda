//! Terminal user interface built on [ratatui](https://github.com/ratatui-org/ratatui).
//!
//! The UI is organized into four layers:
//!
//! - **[`app`]** — application state, keyboard event loop, auto-play timing
//! - **[`panes`]** — stateless render functions for each visible pane
//!   (structure, pseudocode, status bar)
//! - **[`pseudocode`]** — static per-algorithm pseudocode tables that frame
//!   line indices point into
//! - **[`theme`]** — centralized color palette used by all panes
//!
//! The entry point for consumers is [`App`]: construct it with an
//! [`AlgorithmId`] and a [`Trace`] and call [`App::run`] to start the event
//! loop.
//!
//! [`AlgorithmId`]: crate::algorithms::AlgorithmId
//! [`Trace`]: crate::trace::Trace
//! [`App::run`]: app::App::run

pub mod app;
pub mod panes;
pub mod pseudocode;
pub mod theme;

pub use app::App;
