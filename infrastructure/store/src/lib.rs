//! In-memory session state adapters.
//!
//! The storefront keeps one logical session: the catalog seeded at startup
//! plus the cart, constructor, order, and view state behind `RwLock`s.
//! Nothing survives a process restart.

pub mod cart {
    pub mod repository;
}
pub mod catalog {
    pub mod repository;
    pub mod seed;
}
pub mod composer {
    pub mod repository;
}
pub mod order {
    pub mod repository;
}
pub mod view {
    pub mod repository;
}
