//! Row-level operations, each taking a borrowed connection.

pub mod feature_ops;
pub mod item_ops;
pub mod question_ops;
