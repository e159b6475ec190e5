use chat_slash::app::{App, AppEvent, Collaborators, handle_app_event, handle_terminal_event};
use chat_slash::chat::{
    Chat, ChatId, ChatMessage, ChatStore, MessageId, MessageRole, MessageSender, MessageStore,
    OutgoingMessage,
};
use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};
use std::cell::RefCell;
use std::rc::Rc;

pub const MEMORIES: &str = "system-memories";
pub const CHAT: ChatId = ChatId(1);

#[derive(Default)]
pub struct FakeRemote {
    pub deleted: RefCell<Vec<MessageId>>,
}

#[async_trait::async_trait(?Send)]
impl MessageStore for FakeRemote {
    async fn delete_message(&self, id: &MessageId) -> anyhow::Result<()> {
        self.deleted.borrow_mut().push(id.clone());
        Ok(())
    }
}

#[derive(Default)]
pub struct FakeSender {
    pub sent: RefCell<Vec<OutgoingMessage>>,
}

impl MessageSender for FakeSender {
    fn send_message(&self, message: OutgoingMessage) {
        self.sent.borrow_mut().push(message);
    }
}

pub struct Harness {
    pub app: App,
    pub remote: Rc<FakeRemote>,
    pub sender: Rc<FakeSender>,
}

/// Build an `App` on an in-memory store seeded with `messages`.
/// No terminal, no network -- just state.
pub fn harness(messages: Vec<ChatMessage>) -> Harness {
    harness_with_store(ChatStore::in_memory(), messages)
}

pub fn harness_with_store(mut store: ChatStore, messages: Vec<ChatMessage>) -> Harness {
    if !messages.is_empty() {
        store.update_messages(CHAT, &messages);
    }
    let remote = Rc::new(FakeRemote::default());
    let sender = Rc::new(FakeSender::default());
    let app = App::new(
        Chat { id: CHAT, title: "Test chat".to_owned() },
        MessageId::new(MEMORIES),
        store,
        Collaborators {
            remote: Rc::clone(&remote) as Rc<dyn MessageStore>,
            sender: Rc::clone(&sender) as Rc<dyn MessageSender>,
        },
        tokio::sync::mpsc::unbounded_channel(),
    );
    Harness { app, remote, sender }
}

pub fn msg(id: &str, role: MessageRole, text: &str) -> ChatMessage {
    ChatMessage::text(MessageId::new(id), role, text)
}

pub fn press(app: &mut App, code: KeyCode) {
    handle_terminal_event(app, Event::Key(KeyEvent::new(code, KeyModifiers::NONE)));
}

pub fn type_text(app: &mut App, text: &str) {
    for c in text.chars() {
        press(app, KeyCode::Char(c));
    }
}

pub fn deliver(app: &mut App, event: AppEvent) {
    handle_app_event(app, event);
}

pub async fn settle() {
    for _ in 0..4 {
        tokio::task::yield_now().await;
    }
}
