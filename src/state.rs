use std::rc::Rc;

use yew::Reducible;

pub const FALLBACK_REPLY: &str = "ขออภัย ระบบมีปัญหาในการประมวลผล";
pub const TYPING_TEXT: &str = "กำลังพิมพ์...";

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Sender {
    User,
    Bot,
}

impl Sender {
    pub fn label(self) -> &'static str {
        match self {
            Sender::User => "คุณ",
            Sender::Bot => "บอท",
        }
    }

    pub fn css_class(self) -> &'static str {
        match self {
            Sender::User => "user",
            Sender::Bot => "bot",
        }
    }
}

#[derive(Clone, PartialEq, Debug)]
pub struct ChatEntry {
    pub sender: Sender,
    pub text: String,
}

impl ChatEntry {
    fn user(text: String) -> Self {
        Self {
            sender: Sender::User,
            text,
        }
    }

    fn bot(text: String) -> Self {
        Self {
            sender: Sender::Bot,
            text,
        }
    }
}

pub enum ChatAction {
    Submit(String),
    Resolved(String),
    Failed,
}

/// Widget-owned chat state: the rendered entries plus a flag marking the one
/// exchange allowed in flight.
#[derive(Clone, PartialEq, Default)]
pub struct ChatLog {
    pub entries: Vec<ChatEntry>,
    pub pending: bool,
}

impl ChatLog {
    /// Trims `raw`; `None` when nothing remains or an exchange is pending.
    pub fn accepts(&self, raw: &str) -> Option<String> {
        let trimmed = raw.trim();
        if trimmed.is_empty() || self.pending {
            None
        } else {
            Some(trimmed.to_owned())
        }
    }
}

impl Reducible for ChatLog {
    type Action = ChatAction;

    fn reduce(self: Rc<Self>, action: ChatAction) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            ChatAction::Submit(text) => {
                if next.pending {
                    return self;
                }
                next.entries.push(ChatEntry::user(text));
                next.pending = true;
            }
            ChatAction::Resolved(reply) => {
                next.pending = false;
                next.entries.push(ChatEntry::bot(reply));
            }
            ChatAction::Failed => {
                next.pending = false;
                next.entries.push(ChatEntry::bot(FALLBACK_REPLY.to_owned()));
            }
        }
        Rc::new(next)
    }
}
