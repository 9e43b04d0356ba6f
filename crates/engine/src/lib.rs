//! Scene definitions built on the cooperative scheduler.
//!
//! Each piece of the scene is a [`Task`](space_garbage_core::Task):
//!
//! - [`stars`]: blinking stars
//! - [`ship`]: ship frame animation, ship control and the field bounds rule
//! - [`fire`]: projectiles
//! - [`garbage`]: falling garbage and its spawner
//! - [`explosion`]: the animation played when garbage is shot
//! - [`epoch`]: year counter, spawn-rate table, milestone captions
//! - [`game_over`]: final banner
//! - [`overlay`]: optional obstacle outlines for debugging
//!
//! [`Scene`] wires them together and runs the tick loop; [`SceneConfig`] and
//! [`SceneAssets`] provide its inputs.

pub mod assets;
pub mod config;
pub mod epoch;
pub mod explosion;
pub mod fire;
pub mod game_over;
pub mod garbage;
pub mod overlay;
pub mod scene;
pub mod ship;
pub mod stars;

pub use space_garbage_core as core;
pub use space_garbage_types as types;

pub use assets::{load_sprites, SceneAssets};
pub use config::SceneConfig;
pub use epoch::{caption, garbage_delay_ticks, gun_available, EpochAdvance, EpochCaption};
pub use explosion::Explosion;
pub use fire::Projectile;
pub use game_over::GameOver;
pub use garbage::{GarbageFall, GarbageSpawner};
pub use overlay::ObstacleOverlay;
pub use scene::{draw_border, Scene};
pub use ship::{constrain_velocity, ShipAnimation, ShipControl};
pub use stars::Blink;
