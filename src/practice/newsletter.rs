//! # Newsletter (Observer pattern)
//!
//! A [`Newsletter`] is the subject: it keeps an ordered list of [`Follower`]s
//! and the last piece of news it published. Publishing pushes the news to every
//! follower subscribed at that moment, synchronously and in subscription order.
//!
//! ```text
//! publish("Elections")
//!     │  last_news = "BREAKING NEWS! Elections"
//!     ├──► follower #1.update(last_news)
//!     ├──► follower #2.update(last_news)
//!     └──► follower #N.update(last_news)
//! ```
//!
//! ## Identity
//!
//! Followers are shared as `Rc<dyn Follower>` and compared by allocation, not
//! by value. Two users with the same name are two different followers; the
//! same `Rc` subscribed twice is one follower.
//!
//! ## Example
//!
//! ```rust
//! use std::rc::Rc;
//! use practice::newsletter::{Newsletter, User};
//!
//! let mut newsletter = Newsletter::new();
//! let alice = Rc::new(User::new("Alice"));
//!
//! newsletter.subscribe(alice.clone());
//! newsletter.publish("Elections");
//!
//! assert_eq!(alice.last_news(), "BREAKING NEWS! Elections");
//! ```

use std::cell::RefCell;
use std::rc::Rc;

/// Prefix prepended to every published message.
pub const NEWS_PREFIX: &str = "BREAKING NEWS! ";

/// Receives pushed news from a [`Newsletter`].
pub trait Follower {
    /// Called once per publish while subscribed, with the full wrapped message.
    fn update(&self, news: &str);
}

/// The subject side of the pattern.
#[derive(Default)]
pub struct Newsletter {
    followers: Vec<Rc<dyn Follower>>,
    last_news: String,
}

impl Newsletter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `follower` unless that same allocation is already subscribed.
    pub fn subscribe(&mut self, follower: Rc<dyn Follower>) {
        if self.is_subscribed(&follower) {
            tracing::debug!(followers = self.followers.len(), "already subscribed");
            return;
        }
        self.followers.push(follower);
        tracing::debug!(followers = self.followers.len(), "follower subscribed");
    }

    /// Removes `follower` if present. Absent followers are ignored.
    pub fn unsubscribe<F: Follower + ?Sized>(&mut self, follower: &Rc<F>) {
        let before = self.followers.len();
        self.followers.retain(|f| !same_follower(f, follower));
        if self.followers.len() < before {
            tracing::debug!(followers = self.followers.len(), "follower unsubscribed");
        }
    }

    /// Wraps `news` with [`NEWS_PREFIX`], stores it and notifies every current
    /// follower in subscription order. Returns how many followers were notified.
    ///
    /// Any string is accepted here; rejecting blank input is up to the caller.
    pub fn publish(&mut self, news: &str) -> usize {
        self.last_news = format!("{NEWS_PREFIX}{news}");
        tracing::debug!(followers = self.followers.len(), news = %self.last_news, "publishing");
        for follower in &self.followers {
            follower.update(&self.last_news);
        }
        self.followers.len()
    }

    pub fn is_subscribed<F: Follower + ?Sized>(&self, follower: &Rc<F>) -> bool {
        self.followers.iter().any(|f| same_follower(f, follower))
    }

    /// The last published message, or `""` before the first publish.
    pub fn last_news(&self) -> &str {
        &self.last_news
    }

    pub fn len(&self) -> usize {
        self.followers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.followers.is_empty()
    }
}

// Compare data addresses only; vtable pointers for the same type may differ
// between codegen units.
fn same_follower<F: Follower + ?Sized>(a: &Rc<dyn Follower>, b: &Rc<F>) -> bool {
    std::ptr::addr_eq(Rc::as_ptr(a), Rc::as_ptr(b))
}

/// A named reader that remembers the most recent news it was pushed.
#[derive(Debug)]
pub struct User {
    name: String,
    last_news: RefCell<String>,
}

impl User {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            last_news: RefCell::new(String::new()),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Latest news received, `""` if none yet.
    pub fn last_news(&self) -> String {
        self.last_news.borrow().clone()
    }
}

impl Follower for User {
    fn update(&self, news: &str) {
        *self.last_news.borrow_mut() = news.to_string();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    struct Counter {
        calls: Cell<usize>,
    }

    impl Follower for Counter {
        fn update(&self, _news: &str) {
            self.calls.set(self.calls.get() + 1);
        }
    }

    #[test]
    fn publish_wraps_message_for_every_follower() {
        let mut newsletter = Newsletter::new();
        let alice = Rc::new(User::new("Alice"));
        let bob = Rc::new(User::new("Bob"));
        newsletter.subscribe(alice.clone());
        newsletter.subscribe(bob.clone());

        let notified = newsletter.publish("Elections");

        assert_eq!(notified, 2);
        assert_eq!(newsletter.last_news(), "BREAKING NEWS! Elections");
        assert_eq!(alice.last_news(), "BREAKING NEWS! Elections");
        assert_eq!(bob.last_news(), "BREAKING NEWS! Elections");
    }

    #[test]
    fn unsubscribed_follower_keeps_previous_news() {
        let mut newsletter = Newsletter::new();
        let you = Rc::new(User::new("You"));
        newsletter.subscribe(you.clone());
        newsletter.publish("first");
        newsletter.unsubscribe(&you);
        newsletter.publish("second");

        assert_eq!(you.last_news(), "BREAKING NEWS! first");
        assert_eq!(newsletter.last_news(), "BREAKING NEWS! second");
    }

    #[test]
    fn never_subscribed_follower_sees_nothing() {
        let mut newsletter = Newsletter::new();
        let you = Rc::new(User::new("You"));
        newsletter.publish("Elections");
        assert_eq!(you.last_news(), "");
    }

    #[test]
    fn duplicate_subscribe_notifies_once() {
        let mut newsletter = Newsletter::new();
        let counter = Rc::new(Counter {
            calls: Cell::new(0),
        });
        newsletter.subscribe(counter.clone());
        newsletter.subscribe(counter.clone());

        assert_eq!(newsletter.len(), 1);
        newsletter.publish("x");
        assert_eq!(counter.calls.get(), 1);
    }

    #[test]
    fn identity_is_by_reference_not_by_name() {
        let mut newsletter = Newsletter::new();
        let first = Rc::new(User::new("Sam"));
        let second = Rc::new(User::new("Sam"));
        newsletter.subscribe(first.clone());
        newsletter.subscribe(second.clone());

        assert_eq!(newsletter.len(), 2);
        newsletter.unsubscribe(&first);
        assert!(!newsletter.is_subscribed(&first));
        assert!(newsletter.is_subscribed(&second));
    }

    #[test]
    fn unsubscribe_absent_is_noop() {
        let mut newsletter = Newsletter::new();
        let alice = Rc::new(User::new("Alice"));
        newsletter.unsubscribe(&alice);
        assert!(newsletter.is_empty());
    }

    #[test]
    fn followers_are_notified_in_subscription_order() {
        struct Recorder {
            tag: &'static str,
            log: Rc<RefCell<Vec<&'static str>>>,
        }
        impl Follower for Recorder {
            fn update(&self, _news: &str) {
                self.log.borrow_mut().push(self.tag);
            }
        }

        let log = Rc::new(RefCell::new(Vec::new()));
        let mut newsletter = Newsletter::new();
        for tag in ["b", "a", "c"] {
            newsletter.subscribe(Rc::new(Recorder {
                tag,
                log: log.clone(),
            }));
        }
        newsletter.publish("order");

        assert_eq!(*log.borrow(), vec!["b", "a", "c"]);
    }

    #[test]
    fn update_overwrites_previous_value() {
        let user = User::new("Alice");
        user.update("one");
        user.update("two");
        assert_eq!(user.last_news(), "two");
        assert_eq!(user.name(), "Alice");
    }
}
