/// Offset basis of the seed hash (FNV-1a 32 bits).
const FNV_OFFSET_BASIS: u32 = 0x811c_9dc5;

/// Multiplier of the seed hash (FNV-1a 32 bits prime).
const FNV_PRIME: u32 = 16_777_619;

/// Deterministic stream of `u32` draws derived from an optional seed.
///
/// A seeded stream hashes its seed once, then advances an xorshift-style
/// state on every draw. Two streams built from the same seed always
/// produce the same sequence, on every platform.
///
/// Without a seed, every draw comes from the thread-local generator of
/// `rand` and nothing is reproducible.
///
/// # Invariants
/// - A stream is owned by a single composition and never shared
/// - All arithmetic wraps on 32 bits
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SeededStream {
	/// Reproducible stream, holding the last produced state.
	Seeded(u32),
	/// Non-reproducible stream backed by the platform generator.
	Entropy,
}

impl SeededStream {
	/// Creates a stream from an optional seed.
	///
	/// - `Some(seed)`: hashes every character of `seed`, in order
	/// - `None`: uses entropy for each draw
	pub fn new(seed: Option<&str>) -> Self {
		match seed {
			Some(seed) => Self::Seeded(Self::hash_seed(seed)),
			None => Self::Entropy,
		}
	}

	/// FNV-1a style mixer over the Unicode scalar values of `seed`.
	fn hash_seed(seed: &str) -> u32 {
		seed.chars().fold(FNV_OFFSET_BASIS, |h, c| (h ^ c as u32).wrapping_mul(FNV_PRIME))
	}

	/// Returns the next draw and advances the stream.
	///
	/// Calls are not idempotent: each one consumes a draw.
	pub fn draw(&mut self) -> u32 {
		match self {
			Self::Seeded(state) => {
				let mut h = *state;
				h = h.wrapping_add(h << 13);
				h ^= h >> 7;
				h = h.wrapping_add(h << 3);
				h ^= h >> 17;
				h = h.wrapping_add(h << 5);
				*state = h;
				h
			}
			Self::Entropy => rand::random::<u32>(),
		}
	}
}
