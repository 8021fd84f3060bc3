// Infrastructure layer module
// Contains the embedded database adapters and startup seeding
// Follows Hexagonal Architecture

pub mod database;
pub mod repositories;
pub mod seed;
