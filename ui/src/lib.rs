//! Shared UI crate for DPITA. Cross-platform logic and views live here.

pub mod catalog;
pub mod core;
pub mod i18n;
pub mod views;

pub mod components {
    // Localized page header with the language switcher (components/header.rs)
    pub mod header;
    pub use header::Header;
}
