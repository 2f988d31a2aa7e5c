use assistant_provider::{AssistantApi, ChatReply, HistoryRecord};
use time::format_description::well_known::Rfc3339;
use time::OffsetDateTime;
use uuid::Uuid;

use crate::error::{HistoryLoadError, SendError};

/// Id suffixes shared between locally created messages and the pairs expanded
/// from backend history records.
pub const USER_ID_SUFFIX: &str = "-user";
pub const ASSISTANT_ID_SUFFIX: &str = "-ai";
const PENDING_ID_SUFFIX: &str = "-ai-pending";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStatus {
    Pending,
    Sent,
    Received,
}

/// One timeline entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub id: String,
    pub text: String,
    pub timestamp: String,
    pub is_user: bool,
    pub status: MessageStatus,
}

/// Result of one submission attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SendOutcome {
    /// Nothing was submitted: blank input or a send already in flight.
    Skipped,
    /// The round trip resolved and the placeholder was replaced.
    Delivered,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct PendingSend {
    placeholder_id: String,
    text: String,
}

/// Ordered chat timeline with optimistic send mediation.
///
/// A submitted message and an empty placeholder reply appear synchronously;
/// the placeholder is later replaced by the server reply or removed when the
/// round trip fails. The busy flag serializes sends, so at most one
/// placeholder is pending at a time.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ChatSession {
    timeline: Vec<Message>,
    input: String,
    busy: bool,
}

impl ChatSession {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn timeline(&self) -> &[Message] {
        &self.timeline
    }

    /// Returns true while a send round trip is outstanding.
    #[must_use]
    pub fn is_busy(&self) -> bool {
        self.busy
    }

    #[must_use]
    pub fn input(&self) -> &str {
        &self.input
    }

    /// Replaces the active input buffer.
    pub fn on_input_replace(&mut self, text: String) {
        self.input = text;
    }

    /// Rebuilds the timeline from newest-first history records.
    ///
    /// Records expand oldest-first into user/assistant pairs so the timeline
    /// reads chronologically: record order, not record timestamps, drives the
    /// ordering.
    pub fn load_records(&mut self, records: Vec<HistoryRecord>) {
        self.timeline = records.into_iter().rev().flat_map(expand_record).collect();
    }

    /// Fetches history once at interface mount.
    ///
    /// A failed fetch degrades to an empty timeline; new messages still work.
    pub async fn refresh_history(&mut self, api: &dyn AssistantApi, credential: &str) {
        match api.load_history(credential).await {
            Ok(records) => self.load_records(records),
            Err(error) => {
                self.timeline.clear();
                log::warn!("{}", HistoryLoadError::from(error));
            }
        }
    }

    /// Submits the input buffer as one chat round trip.
    ///
    /// Blank input and overlapping submissions are no-ops. On failure the
    /// placeholder is removed rather than turned into an error bubble, and
    /// the error is returned for out-of-band surfacing; the user's own
    /// message stays in the timeline.
    pub async fn send(
        &mut self,
        api: &dyn AssistantApi,
        credential: &str,
    ) -> Result<SendOutcome, SendError> {
        let Some(pending) = self.begin_send() else {
            return Ok(SendOutcome::Skipped);
        };

        match api.send_chat(credential, &pending.text).await {
            Ok(reply) => {
                self.complete_send(&pending, reply);
                Ok(SendOutcome::Delivered)
            }
            Err(error) => {
                self.fail_send(&pending);
                Err(SendError::from(error))
            }
        }
    }

    fn begin_send(&mut self) -> Option<PendingSend> {
        if self.busy {
            return None;
        }

        let submitted = std::mem::take(&mut self.input);
        let text = submitted.trim().to_string();
        if text.is_empty() {
            self.input = submitted;
            return None;
        }

        let local_id = Uuid::new_v4().to_string();
        let timestamp = now_rfc3339();
        let placeholder_id = format!("{local_id}{PENDING_ID_SUFFIX}");

        self.timeline.push(Message {
            id: format!("{local_id}{USER_ID_SUFFIX}"),
            text: text.clone(),
            timestamp: timestamp.clone(),
            is_user: true,
            status: MessageStatus::Sent,
        });
        self.timeline.push(Message {
            id: placeholder_id.clone(),
            text: String::new(),
            timestamp,
            is_user: false,
            status: MessageStatus::Pending,
        });
        self.busy = true;

        Some(PendingSend {
            placeholder_id,
            text,
        })
    }

    fn complete_send(&mut self, pending: &PendingSend, reply: ChatReply) {
        let received = Message {
            id: format!("{}{ASSISTANT_ID_SUFFIX}", reply.message_id),
            text: reply.response,
            timestamp: reply.timestamp,
            is_user: false,
            status: MessageStatus::Received,
        };

        // Reconciliation is keyed by the placeholder id, never by position,
        // so it stays correct if the timeline was mutated in the meantime.
        if let Some(slot) = self
            .timeline
            .iter_mut()
            .find(|message| message.id == pending.placeholder_id)
        {
            *slot = received;
        } else {
            self.timeline.push(received);
        }

        self.busy = false;
    }

    fn fail_send(&mut self, pending: &PendingSend) {
        self.timeline
            .retain(|message| message.id != pending.placeholder_id);
        self.busy = false;
    }
}

fn expand_record(record: HistoryRecord) -> [Message; 2] {
    let user = Message {
        id: format!("{}{USER_ID_SUFFIX}", record.message_id),
        text: record.message,
        timestamp: record.timestamp.clone(),
        is_user: true,
        status: MessageStatus::Sent,
    };

    // The record carries one timestamp for the whole round trip; the
    // assistant half has no authoritative timestamp of its own.
    let assistant = Message {
        id: format!("{}{ASSISTANT_ID_SUFFIX}", record.message_id),
        text: record.response,
        timestamp: record.timestamp,
        is_user: false,
        status: MessageStatus::Received,
    };

    [user, assistant]
}

fn now_rfc3339() -> String {
    OffsetDateTime::now_utc()
        .format(&Rfc3339)
        .unwrap_or_default()
}
