//! UI components built with Leptos.
//!
//! - [`router`] - Application routing (main entry point)
//! - [`layout`] - Header, footer, hero banner
//! - [`explore`] - Item catalog with search, filters, and pagination
//! - [`item_detail`] - Single-item view with gallery and CO₂ badge
//! - [`impact`] - Personal impact tracker
//! - [`community`] - Events and success stories
//! - [`profile`] - Signed-in user's profile and listings
//! - [`auth`] - Login and signup forms
//! - [`list_item`] - New listing form
//! - [`icons`] - Centralized icon definitions (change theme here)

pub mod auth;
pub mod community;
pub mod explore;
pub mod icons;
pub mod impact;
pub mod item_detail;
pub mod layout;
pub mod list_item;
pub mod profile;
pub mod router;

pub use router::AppRouter;
