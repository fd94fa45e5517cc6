//! Technique enumeration and width-based detection.
//!
//! A *technique* is a named arithmetic execution strategy: the plain scalar
//! path or a specific vector-register width class. The set of identifiers is
//! closed and build-dependent: a variant exists only when the capability that
//! backs it was detected at build time (see `build.rs`), so no identifier can
//! ever name an instruction set the binary cannot reach.
//!
//! The enumeration is a diagnostics and selection *label*; the actual
//! compile-time resolution from a technique to a backend lives in
//! [`crate::select`].

use std::fmt;
use std::str::FromStr;

use crate::backend::Int;

/// Arithmetic execution strategy identifiers.
///
/// Only the variants whose capability flag was enabled for this build are
/// compiled in. [`Technique::Scalar`] and [`Technique::Auto`] always exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Technique {
    /// Plain scalar arithmetic on the native integer type.
    Scalar,
    /// AArch64 Advanced SIMD, 128-bit registers.
    #[cfg(neon)]
    Neon,
    /// x86 SSE4.1, 128-bit registers.
    #[cfg(sse)]
    Sse,
    /// x86 AVX2, 256-bit registers.
    #[cfg(avx2)]
    Avx2,
    /// x86 AVX-512. Served by the 256-bit backend; no dedicated 512-bit
    /// backend exists.
    #[cfg(avx512)]
    Avx512,
    /// GPU offload placeholder. Resolves to the scalar backend.
    #[cfg(feature = "gpu")]
    OpenCl,
    /// GPU offload placeholder. Resolves to the scalar backend.
    #[cfg(feature = "gpu")]
    Vulkan,
    /// Let the crate pick a technique from the integer width.
    Auto,
}

impl Technique {
    /// Human-readable name of the technique, for diagnostics and logging.
    ///
    /// [`Technique::Auto`] renders as `"Scalar"`: by the time a value can be
    /// printed the sentinel has already resolved, and scalar is the universal
    /// fallback it resolves through.
    pub const fn name(self) -> &'static str {
        match self {
            Technique::Scalar => "Scalar",
            #[cfg(neon)]
            Technique::Neon => "NEON",
            #[cfg(sse)]
            Technique::Sse => "SSE4.1",
            #[cfg(avx2)]
            Technique::Avx2 => "AVX2",
            #[cfg(avx512)]
            Technique::Avx512 => "AVX-512",
            #[cfg(feature = "gpu")]
            Technique::OpenCl => "OpenCL",
            #[cfg(feature = "gpu")]
            Technique::Vulkan => "Vulkan",
            Technique::Auto => "Scalar",
        }
    }

    /// Every identifier compiled into this build.
    pub const fn compiled() -> &'static [Technique] {
        const COMPILED: &[Technique] = &[
            Technique::Scalar,
            #[cfg(neon)]
            Technique::Neon,
            #[cfg(sse)]
            Technique::Sse,
            #[cfg(avx2)]
            Technique::Avx2,
            #[cfg(avx512)]
            Technique::Avx512,
            #[cfg(feature = "gpu")]
            Technique::OpenCl,
            #[cfg(feature = "gpu")]
            Technique::Vulkan,
            Technique::Auto,
        ];

        COMPILED
    }

    /// Default technique for an integer width, in bytes.
    ///
    /// The width policy is fixed: up to 4 bytes stays scalar (broadcasting a
    /// narrow scalar through a vector register buys nothing), up to 8 bytes
    /// uses the 128-bit register class, anything wider the 256-bit class.
    /// Which identifier names each class depends on what this build compiled
    /// in; a class with no compiled technique degrades to the next narrower
    /// one and finally to scalar.
    pub const fn for_width(bytes: usize) -> Technique {
        if bytes <= 4 {
            Technique::Scalar
        } else if bytes <= 8 {
            wide128()
        } else {
            wide256()
        }
    }

    /// Default technique for the integer type `T`.
    pub const fn of<T: Int>() -> Technique {
        Technique::for_width(std::mem::size_of::<T>())
    }
}

#[cfg(sse)]
const fn wide128() -> Technique {
    Technique::Sse
}

#[cfg(all(neon, not(sse)))]
const fn wide128() -> Technique {
    Technique::Neon
}

#[cfg(not(any(sse, neon)))]
const fn wide128() -> Technique {
    Technique::Scalar
}

#[cfg(avx2)]
const fn wide256() -> Technique {
    Technique::Avx2
}

#[cfg(not(avx2))]
const fn wide256() -> Technique {
    wide128()
}

impl fmt::Display for Technique {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when a string names no technique compiled into this build.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseTechniqueError {
    name: String,
}

impl fmt::Display for ParseTechniqueError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unrecognized technique name: {:?}", self.name)
    }
}

impl std::error::Error for ParseTechniqueError {}

impl FromStr for Technique {
    type Err = ParseTechniqueError;

    /// Reverse of [`Technique::name`], plus `"Auto"` for the sentinel.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Scalar" => Ok(Technique::Scalar),
            "Auto" => Ok(Technique::Auto),
            #[cfg(neon)]
            "NEON" => Ok(Technique::Neon),
            #[cfg(sse)]
            "SSE4.1" => Ok(Technique::Sse),
            #[cfg(avx2)]
            "AVX2" => Ok(Technique::Avx2),
            #[cfg(avx512)]
            "AVX-512" => Ok(Technique::Avx512),
            #[cfg(feature = "gpu")]
            "OpenCL" => Ok(Technique::OpenCl),
            #[cfg(feature = "gpu")]
            "Vulkan" => Ok(Technique::Vulkan),
            _ => Err(ParseTechniqueError { name: s.to_owned() }),
        }
    }
}
