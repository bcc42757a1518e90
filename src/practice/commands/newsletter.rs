use crate::commands::{CmdMessage, CmdResult, ReaderView};
use crate::config::PracticeConfig;
use crate::error::{PracticeError, Result};
use crate::newsletter::{Newsletter, User};
use std::fmt;
use std::rc::Rc;
use std::str::FromStr;

const RESIDENT_TITLE: &str = "Usuario fijo (siempre suscrito)";
const GUEST_TITLE: &str = "Nuestro usuario (puede suscribirse)";

/// One user action on the newsletter screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NewsletterStep {
    Subscribe,
    Unsubscribe,
    Toggle,
    Post(String),
}

impl FromStr for NewsletterStep {
    type Err = PracticeError;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim_start();
        if let Some(text) = s.strip_prefix("post:") {
            return Ok(NewsletterStep::Post(text.to_string()));
        }
        match s.trim_end() {
            "subscribe" => Ok(NewsletterStep::Subscribe),
            "unsubscribe" => Ok(NewsletterStep::Unsubscribe),
            "toggle" => Ok(NewsletterStep::Toggle),
            other => Err(PracticeError::Api(format!(
                "Invalid step: {} (expected subscribe, unsubscribe, toggle or post:<text>)",
                other
            ))),
        }
    }
}

impl fmt::Display for NewsletterStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NewsletterStep::Subscribe => write!(f, "subscribe"),
            NewsletterStep::Unsubscribe => write!(f, "unsubscribe"),
            NewsletterStep::Toggle => write!(f, "toggle"),
            NewsletterStep::Post(text) => write!(f, "post:{}", text),
        }
    }
}

/// The newsletter screen: a resident reader that is always subscribed and a
/// guest reader the user subscribes and unsubscribes.
pub struct NewsletterSession {
    newsletter: Newsletter,
    resident: Rc<User>,
    guest: Rc<User>,
}

impl NewsletterSession {
    pub fn new(config: &PracticeConfig) -> Self {
        let mut newsletter = Newsletter::new();
        let resident = Rc::new(User::new(config.resident_name.as_str()));
        let guest = Rc::new(User::new(config.guest_name.as_str()));
        newsletter.subscribe(resident.clone());
        Self {
            newsletter,
            resident,
            guest,
        }
    }

    pub fn guest_subscribed(&self) -> bool {
        self.newsletter.is_subscribed(&self.guest)
    }

    /// Applies one step and describes what happened.
    pub fn apply(&mut self, step: &NewsletterStep) -> CmdMessage {
        match step {
            NewsletterStep::Subscribe => self.set_guest(true),
            NewsletterStep::Unsubscribe => self.set_guest(false),
            NewsletterStep::Toggle => {
                let next = !self.guest_subscribed();
                self.set_guest(next)
            }
            NewsletterStep::Post(text) => self.post(text),
        }
    }

    fn set_guest(&mut self, subscribed: bool) -> CmdMessage {
        if subscribed {
            self.newsletter.subscribe(self.guest.clone());
            CmdMessage::info(format!("{}: Suscrito", self.guest.name()))
        } else {
            self.newsletter.unsubscribe(&self.guest);
            CmdMessage::info(format!("{}: No suscrito", self.guest.name()))
        }
    }

    fn post(&mut self, text: &str) -> CmdMessage {
        let text = text.trim();
        if text.is_empty() {
            tracing::debug!("blank news ignored");
            return CmdMessage::warning("Empty news ignored");
        }
        let notified = self.newsletter.publish(text);
        CmdMessage::success(format!(
            "Published \"{}\" to {} reader(s)",
            self.newsletter.last_news(),
            notified
        ))
    }

    pub fn readers(&self, empty_news: &str) -> Vec<ReaderView> {
        [(RESIDENT_TITLE, &self.resident), (GUEST_TITLE, &self.guest)]
            .into_iter()
            .map(|(title, user)| {
                let news = user.last_news();
                ReaderView {
                    title: title.to_string(),
                    name: user.name().to_string(),
                    subscribed: self.newsletter.is_subscribed(user),
                    news: if news.is_empty() {
                        empty_news.to_string()
                    } else {
                        news
                    },
                }
            })
            .collect()
    }
}

impl Drop for NewsletterSession {
    fn drop(&mut self) {
        self.newsletter.unsubscribe(&self.resident);
    }
}

pub fn run(config: &PracticeConfig, steps: &[NewsletterStep]) -> Result<CmdResult> {
    let mut session = NewsletterSession::new(config);
    let mut result = CmdResult::default();

    for step in steps {
        tracing::debug!(%step, "applying step");
        result.add_message(session.apply(step));
    }

    Ok(result.with_readers(session.readers(&config.empty_news)))
}
