/// Curator system version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Embedding width produced by the default upstream vision model (ResNet-18).
pub const DEFAULT_FEATURE_DIMENSIONS: usize = 512;

/// Floor of the synthetic progress curve.
pub const SYNTHETIC_ACCURACY_FLOOR: f64 = 0.5;

/// Span of the saturating term of the synthetic progress curve.
pub const SYNTHETIC_ACCURACY_SPAN: f64 = 0.45;

/// Steepness of the synthetic progress curve.
pub const SYNTHETIC_ACCURACY_RATE: f64 = 5.0;

/// Hard ceiling of the synthetic progress curve.
pub const SYNTHETIC_ACCURACY_CEILING: f64 = 0.95;

/// Prefix under which stored item images are exposed.
pub const IMAGE_URL_PREFIX: &str = "/images";
