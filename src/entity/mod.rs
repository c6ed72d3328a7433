//! SeaORM entities
//!
//! Database table models, kept separate from the domain entities in
//! `domain::entities`.

pub mod webinars;
