//! Canned chat assistant.
//!
//! # Responsibility
//! - Keep the ordered chat log shown in the chat section.
//! - Flag messages containing task keywords and offer a smart reply.
//! - Simulate delayed assistant replies and voice capture with fixed delays.
//!
//! # Invariants
//! - Replies are fixed strings; nothing is extracted from user text.
//! - Queued replies are delivered in send order.
//! - Message text is never written to logs.

use crate::clock::{EpochMs, DAY_MS};
use crate::model::task::{Category, Task, TaskPriority, TaskSource};
use log::debug;
use once_cell::sync::Lazy;
use regex::Regex;
use uuid::Uuid;

/// Words that make a message look like it contains a task.
pub const TASK_KEYWORDS: &[&str] = &[
    "task", "deadline", "finish", "complete", "due", "schedule", "meeting", "call",
];

/// Delay before the assistant answers.
pub const REPLY_DELAY_MS: EpochMs = 1_000;
/// Duration of one simulated voice capture.
pub const VOICE_CAPTURE_MS: EpochMs = 3_000;

pub const GREETING: &str = "Hello! I'm your AI productivity assistant. I can help you extract \
tasks from your WhatsApp, Gmail, Notion, Slack, and other apps. Try saying something like \
\"I need to finish the project by Friday\"";
pub const TASK_DETECTED_REPLY: &str = "I've analyzed your message and detected a potential \
task. I can help you organize this and set reminders. Would you like me to extract the key \
details?";
pub const GENERIC_REPLY: &str = "I understand. I'm here to help you stay organized and \
productive. Feel free to share any tasks or deadlines you have.";
pub const TASK_CREATED_REPLY: &str = "Task created: \"Prepare presentation for Monday's client \
meeting\" - Due: Monday. I've added this to your timeline and will remind you.";
pub const VOICE_TRANSCRIPT: &str = "I need to prepare the presentation for Monday's client meeting";

const SMART_REPLY_TASK_TITLE: &str = "Prepare presentation for Monday's client meeting";

static TASK_KEYWORD_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!("(?i)(?:{})", TASK_KEYWORDS.join("|"))).expect("valid keyword regex")
});

/// Returns whether `text` contains any task keyword, case-insensitively.
///
/// Substring semantics: "scheduled" and "recall" both match.
pub fn detect_task_keyword(text: &str) -> bool {
    TASK_KEYWORD_RE.is_match(text)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Author {
    User,
    Assistant,
}

/// One chat log entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatMessage {
    pub id: String,
    pub text: String,
    pub author: Author,
    pub timestamp: EpochMs,
}

impl ChatMessage {
    fn new(text: impl Into<String>, author: Author, timestamp: EpochMs) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            text: text.into(),
            author,
            timestamp,
        }
    }
}

/// Result of `send_message`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SendOutcome {
    /// Blank input; nothing was appended.
    Ignored,
    Sent { task_detected: bool },
}

/// What `poll` produced.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PollOutcome {
    /// Number of assistant replies appended to the log.
    pub delivered: usize,
    /// Finished voice capture, ready to be placed in the input box.
    pub transcript: Option<String>,
}

#[derive(Debug, Clone)]
struct QueuedReply {
    due_ms: EpochMs,
    text: &'static str,
}

/// Chat state for the assistant section.
#[derive(Debug, Clone)]
pub struct ChatAssistant {
    messages: Vec<ChatMessage>,
    queued: Vec<QueuedReply>,
    smart_reply: Option<String>,
    listening_until: Option<EpochMs>,
}

impl ChatAssistant {
    /// Starts a conversation holding only the greeting.
    pub fn new(now_ms: EpochMs) -> Self {
        Self {
            messages: vec![ChatMessage::new(GREETING, Author::Assistant, now_ms)],
            queued: Vec::new(),
            smart_reply: None,
            listening_until: None,
        }
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    /// Text awaiting a yes/no on the "create task" prompt.
    pub fn smart_reply_prompt(&self) -> Option<&str> {
        self.smart_reply.as_deref()
    }

    pub fn is_listening(&self) -> bool {
        self.listening_until.is_some()
    }

    pub fn has_queued_replies(&self) -> bool {
        !self.queued.is_empty()
    }

    /// Appends a user message and queues the canned answer.
    pub fn send_message(&mut self, text: &str, now_ms: EpochMs) -> SendOutcome {
        if text.trim().is_empty() {
            return SendOutcome::Ignored;
        }

        self.messages.push(ChatMessage::new(text, Author::User, now_ms));

        let task_detected = detect_task_keyword(text);
        if task_detected {
            self.smart_reply = Some(text.to_string());
        }
        self.queued.push(QueuedReply {
            due_ms: now_ms + REPLY_DELAY_MS,
            text: if task_detected {
                TASK_DETECTED_REPLY
            } else {
                GENERIC_REPLY
            },
        });

        debug!("event=chat_message module=assistant task_detected={task_detected}");
        SendOutcome::Sent { task_detected }
    }

    /// Delivers due replies and finishes a due voice capture.
    pub fn poll(&mut self, now_ms: EpochMs) -> PollOutcome {
        let mut outcome = PollOutcome::default();

        let (due, waiting): (Vec<_>, Vec<_>) = self
            .queued
            .drain(..)
            .partition(|reply| reply.due_ms <= now_ms);
        self.queued = waiting;
        for reply in due {
            let message = ChatMessage::new(reply.text, Author::Assistant, reply.due_ms);
            self.messages.push(message);
            outcome.delivered += 1;
        }

        if self.listening_until.is_some_and(|until| until <= now_ms) {
            self.listening_until = None;
            outcome.transcript = Some(VOICE_TRANSCRIPT.to_string());
            debug!("event=voice_capture_done module=assistant");
        }

        outcome
    }

    /// Starts simulated voice capture; the transcript is ready
    /// `VOICE_CAPTURE_MS` later. Returns `false` if a capture is already
    /// running, which keeps its original deadline.
    pub fn start_listening(&mut self, now_ms: EpochMs) -> bool {
        if self.listening_until.is_some() {
            return false;
        }
        self.listening_until = Some(now_ms + VOICE_CAPTURE_MS);
        debug!("event=voice_capture_start module=assistant");
        true
    }

    /// Stops a running capture. The pending transcript is discarded.
    pub fn stop_listening(&mut self) -> bool {
        self.listening_until.take().is_some()
    }

    /// Confirms the pending prompt.
    ///
    /// Appends the canned confirmation and returns the task to add to the
    /// timeline. Returns `None` when no prompt is pending.
    pub fn accept_smart_reply(&mut self, now_ms: EpochMs) -> Option<Task> {
        let source_text = self.smart_reply.as_deref()?;
        let task = Task::new(
            Uuid::new_v4().to_string(),
            SMART_REPLY_TASK_TITLE,
            source_text,
            now_ms + 3 * DAY_MS,
            Category::ThisWeek,
        )
        .ok()?
        .with_priority(TaskPriority::Medium)
        .with_source(TaskSource::Manual);

        self.smart_reply = None;
        let confirmation = ChatMessage::new(TASK_CREATED_REPLY, Author::Assistant, now_ms);
        self.messages.push(confirmation);
        debug!("event=smart_reply_accepted module=assistant task_id={}", task.id);
        Some(task)
    }

    pub fn dismiss_smart_reply(&mut self) {
        self.smart_reply = None;
    }
}

#[cfg(test)]
mod tests {
    use super::detect_task_keyword;

    #[test]
    fn keyword_detection_is_case_insensitive_substring() {
        assert!(detect_task_keyword("Finish the report"));
        assert!(detect_task_keyword("the MEETING moved"));
        assert!(detect_task_keyword("rescheduled twice"));
        assert!(!detect_task_keyword("hello there"));
    }
}
