//! Seeded lattice noise used by world generation.
//!
//! Every function here is a pure function of its numeric inputs. Worlds are
//! shared between machines by seed alone, so results must be bit-identical
//! everywhere: integer hashing uses 32-bit wrapping arithmetic, powers go
//! through `libm`, and octaves are always summed in the same order.

mod lattice;
mod params;
mod perlin;

pub use lattice::{ease_curve, noise2d, noise2d_gradient, noise3d, noise3d_gradient};
pub use params::{NoiseKind, NoiseParams, contour, noise3d_param};
pub use perlin::{Perlin2, noise2d_perlin, noise3d_perlin, noise3d_perlin_abs};

/// Narrows a 64-bit world seed to the 32-bit seed the lattice hash consumes.
///
/// Only the low 32 bits survive, so `seed_to_i32(a + b)` always equals the
/// wrapping sum of the narrowed parts.
#[inline]
pub fn seed_to_i32(seed: u64) -> i32 {
    seed as u32 as i32
}
