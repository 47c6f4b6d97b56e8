//! Structured log events for key session operations.

pub fn item_added(item_id: i64, total: usize) {
    tracing::info!(event = "item_added", item_id, total, "item added to catalog");
}

pub fn items_imported(count: usize, feature_rows: usize) {
    tracing::info!(
        event = "items_imported",
        count,
        feature_rows,
        "catalog import completed"
    );
}

pub fn engine_rebuilt(items: usize, labeled: usize) {
    tracing::info!(event = "engine_rebuilt", items, labeled, "selection engine rebuilt");
}

pub fn degradation_triggered(component: &str, failure: &str, fallback: &str) {
    tracing::warn!(
        event = "degradation_triggered",
        component = %component,
        failure = %failure,
        fallback = %fallback,
        "degradation triggered"
    );
}
