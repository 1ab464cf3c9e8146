//! Data and catalog layer for the MelkIQ Dubai property site.
//!
//! The listing pages are thin views over three pieces that live here: a
//! remote listing store client ([`store`]), the pure filter/sort pipeline
//! they share ([`catalog`]), and the image-reference normalizer
//! ([`images`]). Lead and viewing-request submissions go back through the
//! same store client.

pub mod catalog;
pub mod images;
pub mod models;
pub mod store;
