//! Single-item view: gallery, impact badge, owner card.

mod detail;
mod gallery;

pub use detail::ItemDetailPage;
