//! Wire types for the chat-completion API.

use serde::{Deserialize, Serialize};

use crate::domain::{SummaryPrompt, TurnRole};

#[derive(Debug, Serialize)]
pub(super) struct ChatRequestDto<'a> {
    pub(super) model: &'a str,
    pub(super) messages: Vec<ChatMessageDto<'a>>,
}

#[derive(Debug, Serialize)]
pub(super) struct ChatMessageDto<'a> {
    pub(super) role: TurnRole,
    pub(super) content: &'a str,
}

impl<'a> From<&'a SummaryPrompt> for ChatRequestDto<'a> {
    fn from(prompt: &'a SummaryPrompt) -> Self {
        Self {
            model: prompt.model.as_str(),
            messages: prompt
                .turns
                .iter()
                .map(|turn| ChatMessageDto {
                    role: turn.role,
                    content: turn.content.as_str(),
                })
                .collect(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub(super) struct ChatResponseDto {
    #[serde(default)]
    pub(super) choices: Vec<ChoiceDto>,
}

#[derive(Debug, Deserialize)]
pub(super) struct ChoiceDto {
    pub(super) message: Option<ChoiceMessageDto>,
}

#[derive(Debug, Deserialize)]
pub(super) struct ChoiceMessageDto {
    pub(super) content: Option<String>,
}

impl ChatResponseDto {
    /// Text of the first choice, if the API produced one.
    pub(super) fn into_first_content(self) -> Option<String> {
        self.choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message)
            .and_then(|message| message.content)
    }
}
