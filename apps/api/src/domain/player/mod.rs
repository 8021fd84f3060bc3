// Player domain module

#![allow(clippy::module_inception)]

pub mod player;
pub mod value_objects;

pub use player::Player;
pub use value_objects::PlayerProfile;
