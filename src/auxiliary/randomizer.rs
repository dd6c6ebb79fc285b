//https://github.com/parasyte/pixels/tree/c2454b01abc11c007d4b9de8525195af942fef0d/examples/conway

#![deny(clippy::all)]
#![forbid(unsafe_code)]

use byteorder::{ByteOrder, NativeEndian};
use getrandom::getrandom;

/// Generate a pseudorandom seed for the board's PRNG.
pub fn generate_seed() -> Result<(u64, u64), getrandom::Error> {
    let mut seed = [0_u8; 16];
    getrandom(&mut seed)?;
    Ok(split_seed(&seed))
}

fn split_seed(seed: &[u8; 16]) -> (u64, u64) {
    (
        NativeEndian::read_u64(&seed[0..8]),
        NativeEndian::read_u64(&seed[8..16]),
    )
}

/// Seeded generator, falling back to a fixed stream if the OS has no entropy for us.
pub fn new_rng() -> randomize::PCG32 {
    match generate_seed() {
        Ok(seed) => seed.into(),
        Err(e) => {
            log::warn!("getrandom failed ({}), using a fixed seed", e);
            (0x853c_49e6_748f_ea9b, 0xda3e_39cb_94b9_5bdb).into()
        }
    }
}

/// Uniform float in `[0, 1)`.
pub fn unit(rng: &mut randomize::PCG32) -> f32 {
    randomize::f32_half_open_right(rng.next_u32())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_halves_do_not_overlap() {
        let mut bytes = [0_u8; 16];
        bytes[8..].copy_from_slice(&[0xff; 8]);
        let (a, b) = split_seed(&bytes);
        assert_eq!(a, 0);
        assert_eq!(b, u64::MAX);
    }

    #[test]
    fn unit_stays_in_range() {
        let mut rng: randomize::PCG32 = (7, 11).into();
        for _ in 0..1000 {
            let u = unit(&mut rng);
            assert!((0.0..1.0).contains(&u));
        }
    }
}
