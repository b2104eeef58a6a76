/// CPU feature detection for the hand-vectorized kernels.
use std::sync::OnceLock;

/// Vector instruction sets the kernels know how to target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SimdLevel {
    /// No usable vector unit; kernels run the scalar loop.
    Scalar,
    /// SSE2, 128-bit. Baseline on x86-64.
    Sse2,
    /// AVX, 256-bit floating point.
    Avx,
    /// AVX2, 256-bit with FMA.
    Avx2,
    /// AVX-512F, 512-bit. The kernels still use 256-bit batches here.
    Avx512,
    /// ARM NEON, 128-bit.
    Neon,
}

impl SimdLevel {
    /// Probe the running CPU.
    pub fn detect() -> Self {
        #[cfg(target_arch = "x86_64")]
        {
            if is_x86_feature_detected!("avx512f") {
                return SimdLevel::Avx512;
            }
            if is_x86_feature_detected!("avx2") {
                return SimdLevel::Avx2;
            }
            if is_x86_feature_detected!("avx") {
                return SimdLevel::Avx;
            }
            SimdLevel::Sse2
        }

        #[cfg(target_arch = "aarch64")]
        {
            SimdLevel::Neon
        }

        #[cfg(not(any(target_arch = "x86_64", target_arch = "aarch64")))]
        {
            SimdLevel::Scalar
        }
    }

    /// Bytes per batch actually used by the add/fill kernels.
    ///
    /// AVX-512 machines run the 256-bit kernels.
    pub fn batch_bytes(&self) -> usize {
        match self {
            SimdLevel::Scalar => 0,
            SimdLevel::Sse2 | SimdLevel::Neon => 16,
            SimdLevel::Avx | SimdLevel::Avx2 | SimdLevel::Avx512 => 32,
        }
    }

    /// Lanes of `T` per kernel batch, 1 when the kernels run scalar.
    pub fn lanes<T>(&self) -> usize {
        (self.batch_bytes() / std::mem::size_of::<T>()).max(1)
    }

    /// Whether the kernels run vectorized at this level.
    pub fn is_vectorized(&self) -> bool {
        self.batch_bytes() > 0
    }
}

static SIMD_LEVEL: OnceLock<SimdLevel> = OnceLock::new();

/// Detected SIMD level, probed once per process.
pub fn simd_level() -> SimdLevel {
    *SIMD_LEVEL.get_or_init(SimdLevel::detect)
}
