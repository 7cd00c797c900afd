//! Business outcomes carrying user-facing messages.

use serde::Serialize;

/// The result of a reservation operation as seen by a user.
///
/// An outcome succeeds when it carries no messages. The payload is optional
/// and independent of success: failed creates and updates carry none, while
/// a failed cancel carries `false`.
///
/// Faults such as an unreachable database are not outcomes; they surface as
/// [`crate::Error`].
///
/// # Examples
///
/// ```
/// use roost::Outcome;
///
/// let mut outcome: Outcome<u32> = Outcome::new();
/// assert!(outcome.is_success());
///
/// outcome.add_message("Guest is required.");
/// assert!(!outcome.is_success());
/// assert_eq!(outcome.messages(), ["Guest is required."]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Outcome<T> {
    messages: Vec<String>,
    payload: Option<T>,
}

impl<T> Default for Outcome<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Outcome<T> {
    /// Creates an empty, successful outcome with no payload.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            messages: Vec::new(),
            payload: None,
        }
    }

    /// Creates a successful outcome carrying `payload`.
    #[must_use]
    pub const fn success(payload: T) -> Self {
        Self {
            messages: Vec::new(),
            payload: Some(payload),
        }
    }

    /// Creates a failed outcome with a single message and no payload.
    #[must_use]
    pub fn failure(message: impl Into<String>) -> Self {
        let mut outcome = Self::new();
        outcome.add_message(message);
        outcome
    }

    /// Returns `true` if no message has been recorded.
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.messages.is_empty()
    }

    /// Returns the recorded messages in the order they were added.
    #[must_use]
    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    /// Records a message, turning the outcome into a failure.
    pub fn add_message(&mut self, message: impl Into<String>) {
        self.messages.push(message.into());
    }

    /// Returns the payload, if any.
    #[must_use]
    pub const fn payload(&self) -> Option<&T> {
        self.payload.as_ref()
    }

    /// Replaces the payload.
    pub fn set_payload(&mut self, payload: T) {
        self.payload = Some(payload);
    }

    /// Removes and returns the payload.
    pub fn take_payload(&mut self) -> Option<T> {
        self.payload.take()
    }

    /// Consumes the outcome and returns its payload.
    #[must_use]
    pub fn into_payload(self) -> Option<T> {
        self.payload
    }

    /// Converts into a standard `Result`.
    ///
    /// # Errors
    ///
    /// Returns the messages if the outcome failed.
    pub fn into_result(self) -> Result<Option<T>, Vec<String>> {
        if self.messages.is_empty() {
            Ok(self.payload)
        } else {
            Err(self.messages)
        }
    }
}
