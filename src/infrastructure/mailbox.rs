use std::collections::{HashMap, VecDeque};

use crate::core::UserId;
use crate::models::Message;

/// Per-user FIFO inboxes. Draining is at-most-once delivery.
#[derive(Debug, Default)]
pub struct MailboxStore {
    queues: HashMap<UserId, VecDeque<Message>>,
}

impl MailboxStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a message for its receiver
    pub fn deliver(&mut self, message: Message) {
        self.queues
            .entry(message.receiver)
            .or_default()
            .push_back(message);
    }

    /// Remove and return every queued message, oldest first
    pub fn drain(&mut self, user_id: UserId) -> Vec<Message> {
        self.queues
            .get_mut(&user_id)
            .map(|queue| queue.drain(..).collect())
            .unwrap_or_default()
    }

    /// Queued messages, oldest first, left in place
    pub fn peek(&self, user_id: UserId) -> Vec<Message> {
        self.queues
            .get(&user_id)
            .map(|queue| queue.iter().cloned().collect())
            .unwrap_or_default()
    }

    pub fn pending(&self, user_id: UserId) -> usize {
        self.queues.get(&user_id).map_or(0, VecDeque::len)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn message(from: i64, to: i64, text: &str) -> Message {
        Message::new(UserId::new(from), UserId::new(to), text.to_string())
    }

    #[test]
    fn test_drain_is_fifo_and_destructive() {
        let mut mailboxes = MailboxStore::new();
        mailboxes.deliver(message(1, 2, "first"));
        mailboxes.deliver(message(3, 2, "second"));

        let drained = mailboxes.drain(UserId::new(2));
        let texts: Vec<_> = drained.iter().map(|m| m.content.as_str()).collect();
        assert_eq!(texts, vec!["first", "second"]);
        assert!(mailboxes.drain(UserId::new(2)).is_empty());
    }

    #[test]
    fn test_peek_leaves_messages() {
        let mut mailboxes = MailboxStore::new();
        mailboxes.deliver(message(1, 2, "hello"));

        assert_eq!(mailboxes.peek(UserId::new(2)).len(), 1);
        assert_eq!(mailboxes.pending(UserId::new(2)), 1);
        assert_eq!(mailboxes.drain(UserId::new(2)).len(), 1);
        assert_eq!(mailboxes.pending(UserId::new(2)), 0);
    }

    #[test]
    fn test_unknown_receiver_has_empty_inbox() {
        let mut mailboxes = MailboxStore::new();
        assert!(mailboxes.peek(UserId::new(5)).is_empty());
        assert!(mailboxes.drain(UserId::new(5)).is_empty());
    }
}
