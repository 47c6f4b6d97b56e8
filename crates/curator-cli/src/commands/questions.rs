//! Question catalog commands.

use clap::{Args, Subcommand};
use serde_json::json;

use curator_core::models::NewQuestion;
use curator_session::LabelingSession;

#[derive(Subcommand, Debug)]
pub enum QuestionsCommands {
    /// Every stored question
    List,
    /// Create a question; its id is the next free one
    Add(QuestionArgs),
    /// Replace a question's text, options and correct answer
    Update {
        id: i64,
        #[command(flatten)]
        question: QuestionArgs,
    },
    /// Delete a question
    Remove { id: i64 },
}

#[derive(Args, Debug)]
pub struct QuestionArgs {
    #[arg(long)]
    pub text: String,

    /// Answer option. Repeatable, kept in order.
    #[arg(long = "option", required = true)]
    pub options: Vec<String>,

    #[arg(long)]
    pub correct_answer: Option<String>,
}

impl From<QuestionArgs> for NewQuestion {
    fn from(args: QuestionArgs) -> Self {
        NewQuestion {
            text: args.text,
            options: args.options,
            correct_answer: args.correct_answer,
        }
    }
}

pub fn handle_questions_command(
    session: &LabelingSession,
    action: QuestionsCommands,
) -> anyhow::Result<serde_json::Value> {
    match action {
        QuestionsCommands::List => Ok(serde_json::to_value(session.list_questions()?)?),
        QuestionsCommands::Add(args) => {
            let created = session.create_question(args.into())?;
            Ok(serde_json::to_value(created)?)
        }
        QuestionsCommands::Update { id, question } => {
            let updated = session.update_question(id, question.into())?;
            Ok(serde_json::to_value(updated)?)
        }
        QuestionsCommands::Remove { id } => {
            session.delete_question(id)?;
            Ok(json!({ "status": "success", "id": id }))
        }
    }
}
