use std::io::{self, Write};

use crate::simd::SimdLevel;

/// Execution backend of the hand-vectorized kernels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Backend {
    /// Plain scalar loops.
    Portable,
    /// `wide` batches (SSE2, AVX, NEON, etc.).
    Simd,
}

impl Backend {
    /// Get the currently active backend based on CPU features.
    pub fn current() -> Self {
        if crate::simd::simd_level().is_vectorized() {
            Backend::Simd
        } else {
            Backend::Portable
        }
    }

    /// Get a description of the current SIMD capabilities.
    pub fn description() -> String {
        let level = crate::simd::simd_level();
        match level {
            SimdLevel::Scalar => "Portable (no SIMD)".to_string(),
            SimdLevel::Sse2 => "x86-64 SSE2 (128-bit)".to_string(),
            SimdLevel::Avx => "x86-64 AVX (256-bit float)".to_string(),
            SimdLevel::Avx2 => "x86-64 AVX2 (256-bit)".to_string(),
            SimdLevel::Avx512 => "x86-64 AVX-512 (256-bit kernels)".to_string(),
            SimdLevel::Neon => "ARM NEON (128-bit)".to_string(),
        }
    }
}

/// Competitor libraries compiled into this build.
pub fn enabled_libraries() -> Vec<&'static str> {
    let mut libs = Vec::new();
    if cfg!(feature = "ndarray") {
        libs.push("ndarray");
    }
    if cfg!(feature = "nalgebra") {
        libs.push("nalgebra");
    }
    libs.push("simd");
    libs.push("vec");
    libs
}

/// Get information about the suite configuration.
pub fn version_info() -> String {
    format!(
        "arraybench v{}\nBackend: {}\nSIMD Level: {:?}\nLibraries: {}",
        env!("CARGO_PKG_VERSION"),
        Backend::description(),
        crate::simd::simd_level(),
        enabled_libraries().join(", ")
    )
}

/// Write the SIMD banner shown before any benchmark runs.
pub fn write_stats<W: Write>(out: &mut W) -> io::Result<()> {
    let level = crate::simd::simd_level();
    match Backend::current() {
        Backend::Simd => writeln!(out, "USING SIMD")?,
        Backend::Portable => writeln!(out, "NOT USING SIMD")?,
    }
    writeln!(out, "SIMD SIZE: {}", level.lanes::<f64>())?;
    writeln!(out, "Batch width: {} bytes", level.batch_bytes())?;
    writeln!(out, "{}", Backend::description())?;
    writeln!(out, "Libraries: {}", enabled_libraries().join(", "))
}

/// [`write_stats`] to stdout.
pub fn print_stats() {
    let stdout = io::stdout();
    let mut lock = stdout.lock();
    if let Err(e) = write_stats(&mut lock) {
        log::warn!("failed to print SIMD stats: {}", e);
    }
}
