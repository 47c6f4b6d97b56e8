//! Labeling commands: status, next, label, stats, reload.

use clap::Args;
use serde_json::json;
use tracing::info;

use curator_core::models::Label;
use curator_session::LabelingSession;

/// Arguments for `curator label`.
#[derive(Args, Debug)]
pub struct LabelArgs {
    /// External id of the item being labeled
    #[arg(long)]
    pub id: i64,

    /// `question=answer` pair. Repeatable; the first answer decides the class.
    /// Omitting every answer clears the item's class.
    #[arg(long = "answer", value_name = "QUESTION=ANSWER", value_parser = parse_answer)]
    pub answers: Vec<(String, String)>,
}

impl LabelArgs {
    pub fn to_label(&self) -> Label {
        self.answers.iter().cloned().collect()
    }
}

/// Split on the first `=`. The question must be non-empty.
fn parse_answer(raw: &str) -> Result<(String, String), String> {
    match raw.split_once('=') {
        Some((question, answer)) if !question.trim().is_empty() => {
            Ok((question.trim().to_string(), answer.trim().to_string()))
        }
        Some(_) => Err(format!("empty question in `{raw}`")),
        None => Err(format!("expected QUESTION=ANSWER, got `{raw}`")),
    }
}

pub fn status(session: &LabelingSession) -> anyhow::Result<serde_json::Value> {
    let mut output = serde_json::to_value(session.status()?)?;
    output["recent_degradations"] = serde_json::to_value(session.recent_degradations()?)?;
    Ok(output)
}

pub fn next(session: &LabelingSession) -> anyhow::Result<serde_json::Value> {
    let item = session.next_item()?;
    Ok(serde_json::to_value(item)?)
}

pub fn label(session: &LabelingSession, args: LabelArgs) -> anyhow::Result<serde_json::Value> {
    let label = args.to_label();
    session.submit_label(args.id, label)?;
    info!(item_id = args.id, "label submitted");
    Ok(json!({ "status": "success", "id": args.id }))
}

pub fn stats(session: &LabelingSession) -> anyhow::Result<serde_json::Value> {
    Ok(serde_json::to_value(session.stats()?)?)
}

pub fn reload(session: &LabelingSession) -> anyhow::Result<serde_json::Value> {
    let restored = session.reload()?;
    Ok(json!({ "status": "success", "snapshot_restored": restored }))
}
