use serde::{Deserialize, Serialize};

/// A labeling question shown next to each item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub id: i64,
    pub text: String,
    pub options: Vec<String>,
    #[serde(default)]
    pub correct_answer: Option<String>,
}

/// Question payload for create and update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewQuestion {
    pub text: String,
    pub options: Vec<String>,
    #[serde(default)]
    pub correct_answer: Option<String>,
}
