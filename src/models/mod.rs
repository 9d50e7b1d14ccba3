//! Data models and types for the application.
//!
//! Contains domain types for:
//! - [`Item`], [`ItemRecord`] and the classification enums - listings
//! - [`Route`] - hash-based navigation
//! - [`SessionState`] - signed-in user state
//! - [`CommunityEvent`], [`SuccessStory`] - community feed content

mod community;
mod item;
mod route;
mod session;

pub use community::{CommunityEvent, SuccessStory, event_by_id, success_stories, upcoming_events};
pub use item::{
    Category, Condition, ImageRecord, Item, ItemRecord, ItemStatus, ListingType, PickupMethod,
};
pub use route::Route;
pub use session::SessionState;
