pub mod cross_domain;

// Message types are defined in their respective domains
use crate::domains::auth;
use crate::domains::ui;

use iced::Task;
use vestibule_model::User;

/// Result of a domain update that includes both a task and events to emit
#[allow(missing_debug_implementations)]
pub struct DomainUpdateResult {
    /// The task to execute (may produce more messages)
    pub task: Task<DomainMessage>,
    /// Events to broadcast to other domains immediately
    pub events: Vec<CrossDomainEvent>,
}

impl DomainUpdateResult {
    pub fn none() -> Self {
        Self::task(Task::none())
    }

    /// Create a result with just a task
    pub fn task(task: Task<DomainMessage>) -> Self {
        Self {
            task,
            events: Vec::new(),
        }
    }

    /// Create a result with task and events
    pub fn with_events(
        task: Task<DomainMessage>,
        events: Vec<CrossDomainEvent>,
    ) -> Self {
        Self { task, events }
    }
}

/// The main domain message router
#[derive(Clone)]
pub enum DomainMessage {
    /// Authentication domain
    Auth(auth::messages::Message),

    /// UI/View domain
    Ui(ui::messages::Message),

    NoOp,
}

/// Events that cross domain boundaries. The auth domain owns the session,
/// the UI domain owns which screen is mounted.
#[derive(Clone, Debug)]
pub enum CrossDomainEvent {
    /// A login or session restore produced a user record
    UserAuthenticated(User),
    /// The held user was dropped
    UserLoggedOut,
}

impl From<auth::messages::Message> for DomainMessage {
    fn from(msg: auth::messages::Message) -> Self {
        DomainMessage::Auth(msg)
    }
}

impl From<ui::messages::Message> for DomainMessage {
    fn from(msg: ui::messages::Message) -> Self {
        DomainMessage::Ui(msg)
    }
}

impl DomainMessage {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Auth(msg) => msg.name(),
            Self::Ui(msg) => msg.name(),
            Self::NoOp => "DomainMessage::NoOp",
        }
    }
}

impl std::fmt::Debug for DomainMessage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Auth(msg) => write!(f, "DomainMessage::Auth({:?})", msg),
            Self::Ui(msg) => write!(f, "DomainMessage::Ui({:?})", msg),
            Self::NoOp => write!(f, "DomainMessage::NoOp"),
        }
    }
}
