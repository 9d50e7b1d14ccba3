//! Item discovery: search, tabs, facet sidebar, product grid.

mod explore;
mod filter_sidebar;
mod product_card;

pub use explore::ExplorePage;
pub use product_card::ProductCard;
