//! Menu item resource: wire types, CRUD operations and console reporting.

pub mod domain;
pub mod report;
pub mod service;

pub use domain::{MenuItem, MenuItemPatch, NewMenuItem};
