//! "List an Item" form.

mod form;

pub use form::ListItemPage;
