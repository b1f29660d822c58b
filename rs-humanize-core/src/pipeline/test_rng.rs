use rand::RngCore;

/// Rng stub returning zero forever.
///
/// Every coin succeeds, every pick takes the first entry and every
/// fraction drawn is `0.0`.
pub(crate) struct LowRng;

impl RngCore for LowRng {
	fn next_u32(&mut self) -> u32 {
		0
	}

	fn next_u64(&mut self) -> u64 {
		0
	}

	fn fill_bytes(&mut self, dst: &mut [u8]) {
		dst.fill(0);
	}
}

/// Rng stub returning `u64::MAX` forever, so every coin below 1.0 fails.
pub(crate) struct HighRng;

impl RngCore for HighRng {
	fn next_u32(&mut self) -> u32 {
		u32::MAX
	}

	fn next_u64(&mut self) -> u64 {
		u64::MAX
	}

	fn fill_bytes(&mut self, dst: &mut [u8]) {
		dst.fill(u8::MAX);
	}
}
