//! Rephrase-query prompt.
//!
//! Order: dataframe descriptions, optional conversation block, instruction with the query.
//! The conversation block is skipped when the transcript is empty (e.g. first turn).

use std::fmt;

/// Lead-in line of the conversation block.
pub const CONVERSATION_INTRO: &str = "And based on our conversation:";

/// Prompt asking the model to rephrase `query` for more accurate answers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RephraseQueryPrompt {
    query: String,
    dataframes: Vec<String>,
    conversation: String,
}

impl RephraseQueryPrompt {
    /// # Arguments
    ///
    /// * `query` - The user query to rephrase
    /// * `dataframes` - Textual descriptions of the dataframes in scope (schema, head, ...)
    /// * `conversation` - Transcript from `ConversationMemory::get_conversation`; may be empty
    pub fn new<D, DI>(query: impl Into<String>, dataframes: D, conversation: impl Into<String>) -> Self
    where
        D: IntoIterator<Item = DI>,
        DI: AsRef<str>,
    {
        Self {
            query: query.into(),
            dataframes: dataframes
                .into_iter()
                .map(|d| d.as_ref().to_string())
                .collect(),
            conversation: conversation.into(),
        }
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn has_conversation(&self) -> bool {
        !self.conversation.is_empty()
    }

    pub fn render(&self) -> String {
        let mut out = String::from("You are provided with the following dataframes:\n");
        for df in &self.dataframes {
            out.push('\n');
            out.push_str("<dataframe>\n");
            out.push_str(df);
            out.push_str("\n</dataframe>\n");
        }
        if self.has_conversation() {
            out.push('\n');
            out.push_str(CONVERSATION_INTRO);
            out.push_str("\n\n<conversation>\n");
            out.push_str(&self.conversation);
            out.push_str("\n</conversation>\n");
        }
        out.push('\n');
        out.push_str(&format!(
            "Use the provided dataframes and the conversation we have had to return the rephrased \
             sentence of \"{}\" in order to obtain more accurate and comprehensive responses \
             without any explanations.",
            self.query
        ));
        out
    }
}

impl fmt::Display for RephraseQueryPrompt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}
