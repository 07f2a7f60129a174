//! Integer lattice hashing and smooth interpolation between lattice points.

const NOISE_MAGIC_X: i32 = 1619;
const NOISE_MAGIC_Y: i32 = 31337;
const NOISE_MAGIC_Z: i32 = 52591;
const NOISE_MAGIC_SEED: i32 = 1013;

/// Maps a mixed lattice index to a value in `(-1.0, 1.0]`.
#[inline]
fn scramble(n: i32) -> f64 {
    let n = n & 0x7fff_ffff;
    let n = (n >> 13) ^ n;
    let n = n
        .wrapping_mul(n.wrapping_mul(n).wrapping_mul(60493).wrapping_add(19_990_303))
        .wrapping_add(1_376_312_589)
        & 0x7fff_ffff;
    1.0 - f64::from(n) / 1_073_741_824.0
}

/// Pseudo-random value at an integer 2D lattice point, in `(-1.0, 1.0]`.
#[inline]
pub fn noise2d(x: i32, y: i32, seed: i32) -> f64 {
    scramble(
        NOISE_MAGIC_X
            .wrapping_mul(x)
            .wrapping_add(NOISE_MAGIC_Y.wrapping_mul(y))
            .wrapping_add(NOISE_MAGIC_SEED.wrapping_mul(seed)),
    )
}

/// Pseudo-random value at an integer 3D lattice point, in `(-1.0, 1.0]`.
#[inline]
pub fn noise3d(x: i32, y: i32, z: i32, seed: i32) -> f64 {
    scramble(
        NOISE_MAGIC_X
            .wrapping_mul(x)
            .wrapping_add(NOISE_MAGIC_Y.wrapping_mul(y))
            .wrapping_add(NOISE_MAGIC_Z.wrapping_mul(z))
            .wrapping_add(NOISE_MAGIC_SEED.wrapping_mul(seed)),
    )
}

/// Quintic smoothstep `6t^5 - 15t^4 + 10t^3`.
#[inline]
pub fn ease_curve(t: f64) -> f64 {
    6.0 * libm::pow(t, 5.0) - 15.0 * libm::pow(t, 4.0) + 10.0 * libm::pow(t, 3.0)
}

#[inline]
fn lerp(v0: f64, v1: f64, t: f64) -> f64 {
    v0 + (v1 - v0) * t
}

/// Lattice cell containing `v`. Zero and negative values step down one cell,
/// so `0.0` lies at the far edge of cell `-1`.
#[inline]
fn cell_origin(v: f64) -> i32 {
    if v > 0.0 {
        v as i32
    } else {
        (v as i32).wrapping_sub(1)
    }
}

/// Smoothly interpolated 2D lattice noise.
pub fn noise2d_gradient(x: f64, y: f64, seed: i32) -> f64 {
    let x0 = cell_origin(x);
    let y0 = cell_origin(y);
    let xl = x - f64::from(x0);
    let yl = y - f64::from(y0);
    let x1 = x0.wrapping_add(1);
    let y1 = y0.wrapping_add(1);

    let v00 = noise2d(x0, y0, seed);
    let v10 = noise2d(x1, y0, seed);
    let v01 = noise2d(x0, y1, seed);
    let v11 = noise2d(x1, y1, seed);

    let tx = ease_curve(xl);
    let ty = ease_curve(yl);
    let u = lerp(v00, v10, tx);
    let v = lerp(v01, v11, tx);
    lerp(u, v, ty)
}

/// Smoothly interpolated 3D lattice noise.
pub fn noise3d_gradient(x: f64, y: f64, z: f64, seed: i32) -> f64 {
    let x0 = cell_origin(x);
    let y0 = cell_origin(y);
    let z0 = cell_origin(z);
    let xl = x - f64::from(x0);
    let yl = y - f64::from(y0);
    let zl = z - f64::from(z0);
    let x1 = x0.wrapping_add(1);
    let y1 = y0.wrapping_add(1);
    let z1 = z0.wrapping_add(1);

    let v000 = noise3d(x0, y0, z0, seed);
    let v100 = noise3d(x1, y0, z0, seed);
    let v010 = noise3d(x0, y1, z0, seed);
    let v110 = noise3d(x1, y1, z0, seed);
    let v001 = noise3d(x0, y0, z1, seed);
    let v101 = noise3d(x1, y0, z1, seed);
    let v011 = noise3d(x0, y1, z1, seed);
    let v111 = noise3d(x1, y1, z1, seed);

    let tx = ease_curve(xl);
    let ty = ease_curve(yl);
    let tz = ease_curve(zl);

    let near = lerp(lerp(v000, v100, tx), lerp(v010, v110, tx), ty);
    let far = lerp(lerp(v001, v101, tx), lerp(v011, v111, tx), ty);
    lerp(near, far, tz)
}
