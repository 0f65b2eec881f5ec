//! View components.
//!
//! Every component follows the same protocol:
//!
//! - It owns a props structure, replaced only through [`Component::update_props`].
//!   A patch carries one `Option` per prop; `Some` replaces that prop wholesale,
//!   `None` keeps the previous value.
//! - [`Component::render`] is a pure projection of props (and the component's
//!   private UI state: cursor, typed text) to a view model. `update_props`
//!   merges and then renders; the result is kept and exposed by
//!   [`Component::output`].
//! - User intent leaves the component only through the [`Callback`]s captured
//!   in its props. Components never touch application data.

mod callback;
pub mod car_form;
pub mod select_field;
pub mod table;
pub mod text_field;

pub use callback::{Callback, ElementIds};
pub use car_form::{CarForm, CarFormPatch, CarFormProps, FormValues};
pub use select_field::{SelectField, SelectFieldPatch, SelectFieldProps, SelectOption};
pub use table::{RowAction, Table, TablePatch, TableProps};
pub use text_field::{TextField, TextFieldPatch, TextFieldProps};

use crossterm::event::KeyEvent;

use crate::presentation::error::Result;

pub trait Component {
    type Props;
    type Patch;
    type Output;

    fn props(&self) -> &Self::Props;

    /// Project the current props to a view model. Calling it twice without a
    /// state change yields equal outputs.
    fn render(&self) -> Self::Output;

    /// Output of the most recent render.
    fn output(&self) -> &Self::Output;

    /// Merge `patch` over the current props and re-render.
    fn update_props(&mut self, patch: Self::Patch) -> Result<()>;
}

/// Keyboard handling for focused components.
pub trait HandleKey {
    /// Returns `true` when the key was consumed.
    fn handle_key(&mut self, key: KeyEvent) -> bool;
}
