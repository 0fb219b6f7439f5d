use rand::rngs::OsRng;
use rand::RngCore;

/// Source of cryptographically unrelated random bytes for anonymous tags.
/// Exactly sixteen bytes are drawn per allocation.
pub trait RandomSource {
    /// Fill `buf` with fresh random bytes.
    fn fill(&mut self, buf: &mut [u8; 16]);
}

/// Operating-system randomness; the production source.
#[derive(Clone, Copy, Debug, Default)]
pub struct OsRandom;

impl RandomSource for OsRandom {
    fn fill(&mut self, buf: &mut [u8; 16]) {
        OsRng.fill_bytes(buf);
    }
}

/// Fixed bytes on every draw, for deterministic tests.
#[derive(Clone, Copy, Debug)]
pub struct FixedRandom(pub [u8; 16]);

impl RandomSource for FixedRandom {
    fn fill(&mut self, buf: &mut [u8; 16]) {
        *buf = self.0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn os_random_fills_all_sixteen_bytes() {
        // All-zero output for two independent draws is vanishingly unlikely.
        let mut a = [0u8; 16];
        let mut b = [0u8; 16];
        OsRandom.fill(&mut a);
        OsRandom.fill(&mut b);
        assert!(a != [0u8; 16] || b != [0u8; 16]);
    }

    #[test]
    fn fixed_random_repeats_its_bytes() {
        let mut source = FixedRandom([7u8; 16]);
        let mut buf = [0u8; 16];
        source.fill(&mut buf);
        assert_eq!(buf, [7u8; 16]);
    }
}
