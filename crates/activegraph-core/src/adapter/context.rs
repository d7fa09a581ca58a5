use crate::{Error, Result};

use std::time::{Duration, Instant};
use tokio_util::sync::CancellationToken;

/// Cancellation and deadline carried through every execution path.
///
/// The engine never inspects the context itself; it hands it to the adapter,
/// which calls [`Context::check`] at its suspension points.
#[derive(Debug, Clone, Default)]
pub struct Context {
    token: CancellationToken,
    deadline: Option<Instant>,
}

impl Context {
    /// A context that is never canceled and has no deadline.
    pub fn background() -> Context {
        Context::default()
    }

    /// Derives a context canceled together with `self`. Canceling the child
    /// leaves the parent untouched.
    pub fn child(&self) -> Context {
        Context {
            token: self.token.child_token(),
            deadline: self.deadline,
        }
    }

    /// Derives a child context that expires at `deadline`, or at the
    /// parent's deadline if that is earlier.
    pub fn with_deadline(&self, deadline: Instant) -> Context {
        let deadline = match self.deadline {
            Some(current) if current < deadline => current,
            _ => deadline,
        };

        Context {
            token: self.token.child_token(),
            deadline: Some(deadline),
        }
    }

    pub fn with_timeout(&self, timeout: Duration) -> Context {
        self.with_deadline(Instant::now() + timeout)
    }

    pub fn cancel(&self) {
        self.token.cancel();
    }

    pub fn is_canceled(&self) -> bool {
        self.token.is_cancelled()
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    pub fn token(&self) -> &CancellationToken {
        &self.token
    }

    /// Fails with [`Error::canceled`] once the context is canceled, or with
    /// [`Error::deadline_exceeded`] once its deadline has passed.
    pub fn check(&self) -> Result<()> {
        if self.token.is_cancelled() {
            return Err(Error::canceled());
        }

        match self.deadline {
            Some(deadline) if Instant::now() >= deadline => Err(Error::deadline_exceeded()),
            _ => Ok(()),
        }
    }
}
