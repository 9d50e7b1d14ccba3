//! Signed-in user's profile.

mod profile;

pub use profile::ProfilePage;
