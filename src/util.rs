//! Shared utility modules used across spel components.

pub mod path;
