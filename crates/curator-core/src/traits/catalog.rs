use crate::errors::CuratorResult;
use crate::models::{FeatureMatrix, ItemRecord, NewItem, NewQuestion, Question};

/// Item metadata and feature rows. Row `i` of both belongs to internal index `i`.
pub trait ICatalog: Send + Sync {
    /// All items in internal-index order.
    fn list_items(&self) -> CuratorResult<Vec<ItemRecord>>;

    fn get_item(&self, id: i64) -> CuratorResult<Option<ItemRecord>>;

    fn item_count(&self) -> CuratorResult<usize>;

    /// Insert metadata rows in order, assigning fresh ids.
    fn import_items(&self, items: &[NewItem]) -> CuratorResult<Vec<ItemRecord>>;

    /// Insert one item and its feature row atomically.
    fn add_item_with_features(&self, item: NewItem, features: &[f32])
        -> CuratorResult<ItemRecord>;

    /// The stored feature matrix, or `None` when no feature rows exist.
    fn load_features(&self) -> CuratorResult<Option<FeatureMatrix>>;

    /// Replace every stored feature row.
    fn replace_features(&self, features: &FeatureMatrix) -> CuratorResult<()>;

    fn feature_row_count(&self) -> CuratorResult<usize>;
}

/// Question catalog.
pub trait IQuestionStore: Send + Sync {
    fn list_questions(&self) -> CuratorResult<Vec<Question>>;

    fn create_question(&self, question: NewQuestion) -> CuratorResult<Question>;

    fn update_question(&self, id: i64, question: NewQuestion) -> CuratorResult<Question>;

    fn delete_question(&self, id: i64) -> CuratorResult<()>;
}
