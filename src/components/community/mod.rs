//! Community events and success-story feed.

mod community;
mod event_detail;

pub use community::CommunityPage;
pub use event_detail::EventDetailPage;
