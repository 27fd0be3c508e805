//! sea-orm entities for the lab catalog.
//!
//! One module per table. Relations declare the foreign keys and the
//! `active_labs -> active_nodes -> active_interfaces` delete cascade;
//! `users` and `roles` are linked many-to-many through `roles_to_users`.

pub mod active_interfaces;
pub mod active_labs;
pub mod active_nodes;
pub mod controllers;
pub mod labs;
pub mod repositories;
pub mod roles;
pub mod roles_to_users;
pub mod tasks;
pub mod users;
