use std::io::{self, Write};

/// Header printed by the cache-size benchmark before its measurements.
pub const HEADER: [&str; 3] = [
    "Estimating cache sizes (cycles per access)...",
    "Size (KB) Cycles/access",
    "---------------------------",
];

/// Largest buffer the benchmark measures, in KB.
pub const MAX_SIZE_KB: u64 = 24_000;

// ---------------------------------------------------------------------------
// Buffer sizes
// ---------------------------------------------------------------------------

/// Sizes (KB) visited by the benchmark: doubling until the step would
/// exceed 1 MB, then linear 1 MB steps up to [`MAX_SIZE_KB`].
pub fn buffer_sizes_kb() -> Vec<u64> {
    let mut sizes = Vec::new();
    let mut kb = 1;
    while kb <= MAX_SIZE_KB {
        sizes.push(kb);
        kb = (kb * 2).min(kb + 1024);
    }
    sizes
}

// ---------------------------------------------------------------------------
// Cache hierarchy model
// ---------------------------------------------------------------------------

/// One level of the memory hierarchy: buffers up to `capacity_kb` are
/// served at `cycles` per access.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Level {
    pub capacity_kb: u64,
    pub cycles: f64,
}

/// Latency plateaus of a typical desktop part. The last level is memory.
#[derive(Debug, Clone)]
pub struct CacheProfile {
    pub levels: Vec<Level>,
    /// Standard deviation of the noise, relative to the plateau latency.
    pub noise: f64,
}

impl Default for CacheProfile {
    fn default() -> Self {
        Self {
            levels: vec![
                Level { capacity_kb: 32, cycles: 4.0 },
                Level { capacity_kb: 1024, cycles: 14.0 },
                Level { capacity_kb: 16 * 1024, cycles: 42.0 },
                Level { capacity_kb: u64::MAX, cycles: 95.0 },
            ],
            noise: 0.04,
        }
    }
}

impl CacheProfile {
    /// Noise-free cycles per access for a buffer of `kb` kilobytes.
    pub fn latency(&self, kb: u64) -> f64 {
        self.levels
            .iter()
            .find(|level| kb <= level.capacity_kb)
            .or(self.levels.last())
            .map(|level| level.cycles)
            .unwrap_or(0.0)
    }

    /// `(size_kb, cycles)` pairs for every benchmark size, with seeded noise.
    pub fn generate(&self, seed: u64) -> Vec<(u64, f64)> {
        let mut noise = Noise::seeded(seed);
        buffer_sizes_kb()
            .into_iter()
            .map(|kb| {
                let base = self.latency(kb);
                let jitter = base * self.noise * noise.standard_normal();
                let cycles = (base + jitter).max(0.5);
                (kb, cycles)
            })
            .collect()
    }
}

/// Write a benchmark-style measurement file.
pub fn write_sample<W: Write>(mut out: W, profile: &CacheProfile, seed: u64) -> io::Result<usize> {
    for line in HEADER {
        writeln!(out, "{line}")?;
    }
    let rows = profile.generate(seed);
    for (kb, cycles) in &rows {
        writeln!(out, "{kb} {cycles:.4}")?;
    }
    out.flush()?;
    Ok(rows.len())
}

// ---------------------------------------------------------------------------
// Deterministic noise
// ---------------------------------------------------------------------------

/// xoshiro256** seeded through an LCG; reproducible, not cryptographic.
struct Noise {
    state: [u64; 4],
}

impl Noise {
    fn seeded(seed: u64) -> Self {
        let mut x = seed;
        Self {
            state: std::array::from_fn(|_| {
                x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
                x
            }),
        }
    }

    fn next_u64(&mut self) -> u64 {
        let s = &mut self.state;
        let result = s[1].wrapping_mul(5).rotate_left(7).wrapping_mul(9);
        let t = s[1] << 17;
        s[2] ^= s[0];
        s[3] ^= s[1];
        s[1] ^= s[2];
        s[0] ^= s[3];
        s[2] ^= t;
        s[3] = s[3].rotate_left(45);
        result
    }

    /// Standard normal sample (Box-Muller).
    fn standard_normal(&mut self) -> f64 {
        let mut unit = || (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64;
        let u1 = unit().max(1e-15);
        let u2 = unit();
        (-2.0 * u1.ln()).sqrt() * (std::f64::consts::TAU * u2).cos()
    }
}
