use pulsedeck_core::assistant::chat::{
    GENERIC_REPLY, TASK_CREATED_REPLY, TASK_DETECTED_REPLY, VOICE_TRANSCRIPT,
};
use pulsedeck_core::{Author, Category, ChatAssistant, ManualClock, SendOutcome, Store};

const NOW_MS: i64 = 1_760_000_000_000;

#[test]
fn blank_message_is_ignored() {
    let mut chat = ChatAssistant::new(NOW_MS);
    assert_eq!(chat.send_message("   ", NOW_MS), SendOutcome::Ignored);
    assert_eq!(chat.messages().len(), 1);
    assert!(!chat.has_queued_replies());
}

#[test]
fn reply_arrives_after_delay() {
    let mut chat = ChatAssistant::new(NOW_MS);
    assert_eq!(
        chat.send_message("how are you", NOW_MS),
        SendOutcome::Sent {
            task_detected: false
        }
    );
    assert!(chat.smart_reply_prompt().is_none());

    assert_eq!(chat.poll(NOW_MS + 999).delivered, 0);
    assert_eq!(chat.poll(NOW_MS + 1_000).delivered, 1);

    let last = chat.messages().last().unwrap();
    assert_eq!(last.author, Author::Assistant);
    assert_eq!(last.text, GENERIC_REPLY);
}

#[test]
fn task_keyword_raises_prompt_and_accept_yields_task() {
    let mut chat = ChatAssistant::new(NOW_MS);
    chat.send_message("I need to finish the project by Friday", NOW_MS);
    assert_eq!(
        chat.smart_reply_prompt(),
        Some("I need to finish the project by Friday")
    );
    chat.poll(NOW_MS + 1_000);
    assert_eq!(chat.messages().last().unwrap().text, TASK_DETECTED_REPLY);

    let task = chat.accept_smart_reply(NOW_MS).expect("prompt pending");
    assert_eq!(task.category, Category::ThisWeek);
    assert!(chat.smart_reply_prompt().is_none());
    assert_eq!(chat.messages().last().unwrap().text, TASK_CREATED_REPLY);
    assert!(chat.accept_smart_reply(NOW_MS).is_none());

    let mut store = Store::seeded(ManualClock::new(NOW_MS));
    assert!(store.add_task(task.clone()));
    assert!(store
        .views()
        .tasks_by_category(Category::ThisWeek)
        .iter()
        .any(|entry| entry.id == task.id));
}

#[test]
fn dismiss_clears_prompt() {
    let mut chat = ChatAssistant::new(NOW_MS);
    chat.send_message("Schedule a call", NOW_MS);
    chat.dismiss_smart_reply();
    assert!(chat.smart_reply_prompt().is_none());
}

#[test]
fn voice_capture_yields_canned_transcript() {
    let mut chat = ChatAssistant::new(NOW_MS);
    assert!(chat.start_listening(NOW_MS));
    assert!(chat.poll(NOW_MS + 2_999).transcript.is_none());

    let outcome = chat.poll(NOW_MS + 3_000);
    assert_eq!(outcome.transcript.as_deref(), Some(VOICE_TRANSCRIPT));
    assert!(!chat.is_listening());
}

#[test]
fn second_start_keeps_the_running_capture_deadline() {
    let mut chat = ChatAssistant::new(NOW_MS);
    assert!(chat.start_listening(NOW_MS));
    assert!(!chat.start_listening(NOW_MS + 2_000));

    let outcome = chat.poll(NOW_MS + 3_000);
    assert_eq!(outcome.transcript.as_deref(), Some(VOICE_TRANSCRIPT));
}

#[test]
fn stop_listening_discards_the_pending_transcript() {
    let mut chat = ChatAssistant::new(NOW_MS);
    assert!(chat.start_listening(NOW_MS));
    assert!(chat.stop_listening());
    assert!(!chat.is_listening());
    assert!(chat.poll(NOW_MS + 10_000).transcript.is_none());
    assert!(!chat.stop_listening());
}
