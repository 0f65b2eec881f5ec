//! Presentation layer
//!
//! - `formatters`: text conversion of flat records
//! - `components`: prop-driven components (select, text field, table, form)
//! - `presenters`: domain data to props and view models
//! - `view_models`: serializable render outputs
//! - `views`: view models to plain text or ratatui widgets
//! - `renderers`: console output and the TUI event loop
//!
//! Data flows one way: the controller computes props from the collection,
//! components render them to view models, views draw the view models.
//! User intent flows back only through component callbacks.

pub mod components;
pub mod error;
pub mod formatters;
pub mod presenters;
pub mod renderers;
pub mod view_models;
pub mod views;

pub use error::ComponentError;
pub use renderers::{ConsoleRenderer, TuiRenderer};
