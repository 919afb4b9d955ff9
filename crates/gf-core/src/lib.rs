//! `gf-core` — foundational types for the `gateflow` boarding simulation
//! framework.
//!
//! This crate is a dependency of every other `gf-*` crate.  It intentionally
//! has no `gf-*` dependencies and minimal external ones (only `rand`, plus
//! optional `serde`).
//!
//! # What lives here
//!
//! | Module     | Contents                                             |
//! |------------|------------------------------------------------------|
//! | [`ids`]    | `ParticleId`                                         |
//! | [`geom`]   | `Point`, `Rect`, quadratic Bézier evaluation         |
//! | [`time`]   | `TimestampMs`, `DurationMs`, second conversion       |
//! | [`rng`]    | `SimRng` (per-run deterministic RNG), `entropy_seed` |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                              |
//! |---------|-----------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types. |

pub mod geom;
pub mod ids;
pub mod rng;
pub mod time;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use geom::{Point, Rect, quad_bezier};
pub use ids::ParticleId;
pub use rng::{SimRng, entropy_seed};
pub use time::{DurationMs, TimestampMs, whole_seconds};
