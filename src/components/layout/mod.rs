//! Shared page chrome: header, footer, and the landing hero.

mod footer;
mod header;
mod hero;

pub use footer::Footer;
pub use header::Header;
pub use hero::Hero;
