//! Motion and collision core for a 2D arcade world built on `hecs`.
//!
//! Each frame, [`PhysicsSystem::step`](systems::PhysicsSystem::step)
//! integrates every [`Motion`](components::Motion), reports overlapping
//! pairs as [`CollisionEvent`](components::CollisionEvent)s, applies elastic
//! responses between mass-bearing bodies and keeps the agent inside the
//! vertical screen bounds. Screen coordinates: `y` grows downward, the top
//! wall is `y = 0`.

pub mod components;
pub mod config;
pub mod error;
pub mod fsm;
pub mod geometry;
pub mod scene;
pub mod systems;

pub use components::{CollisionEvent, Motion, Physics};
pub use config::PhysicsConfig;
pub use error::PhysicsError;
pub use systems::PhysicsSystem;
