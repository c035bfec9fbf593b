//! DTOs for decoding the GitHub commit listing.
//!
//! Only the fields the summary needs are decoded; everything else in the
//! payload is ignored.

use serde::Deserialize;

use crate::domain::CommitMessage;

#[derive(Debug, Deserialize)]
pub(super) struct CommitEntryDto {
    pub(super) commit: CommitDetailDto,
}

#[derive(Debug, Deserialize)]
pub(super) struct CommitDetailDto {
    pub(super) message: String,
}

impl From<CommitEntryDto> for CommitMessage {
    fn from(value: CommitEntryDto) -> Self {
        CommitMessage::new(value.commit.message)
    }
}
