//! Span definitions per operation: selection, labeling, snapshot, extraction.

/// Create a selection span.
#[macro_export]
macro_rules! selection_span {
    ($labeled:expr, $total:expr) => {
        tracing::info_span!("curator.selection", labeled = $labeled, total = $total)
    };
}

/// Create a labeling span.
#[macro_export]
macro_rules! labeling_span {
    ($item_id:expr) => {
        tracing::info_span!("curator.labeling", item_id = $item_id)
    };
}

/// Create a snapshot span.
#[macro_export]
macro_rules! snapshot_span {
    ($operation:expr, $path:expr) => {
        tracing::info_span!("curator.snapshot", operation = %$operation, path = %$path)
    };
}

/// Create an extraction span.
#[macro_export]
macro_rules! extraction_span {
    ($provider:expr, $dimensions:expr) => {
        tracing::info_span!("curator.extraction", provider = %$provider, dimensions = $dimensions)
    };
}

/// Span names as constants for programmatic use.
pub mod names {
    pub const SELECTION: &str = "curator.selection";
    pub const LABELING: &str = "curator.labeling";
    pub const SNAPSHOT: &str = "curator.snapshot";
    pub const EXTRACTION: &str = "curator.extraction";
}
