use std::fmt::{Display, Formatter};

use reqwest::StatusCode;

/// Why a single source did not pass. Never fatal to a run.
#[derive(Debug)]
pub enum CheckFailure {
    /// The request completed with a status other than 200
    Status(StatusCode),
    /// The request did not complete: DNS, connect, TLS, timeout, bad URL, ...
    Transport { timed_out: bool, description: String },
}

impl CheckFailure {
    pub fn is_timeout(&self) -> bool {
        matches!(self, CheckFailure::Transport { timed_out: true, .. })
    }
}

impl Display for CheckFailure {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        match self {
            CheckFailure::Status(status) => {
                write!(f, "returned status code {}.", status.as_u16())
            }
            CheckFailure::Transport {
                timed_out: true,
                description,
            } => write!(f, "failed: request timed out ({})", description),
            CheckFailure::Transport { description, .. } => write!(f, "failed: {}", description),
        }
    }
}

impl<E> From<E> for CheckFailure
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        let err = err.into();
        let timed_out = err.chain().any(|cause| {
            cause
                .downcast_ref::<reqwest::Error>()
                .is_some_and(reqwest::Error::is_timeout)
        });
        CheckFailure::Transport {
            timed_out,
            description: format!("{:#}", err),
        }
    }
}

#[macro_export]
macro_rules! exit_err {
    ($code:expr, $fmt:literal $(, $arg:expr)* $(,)?) => {
        {
            ::tracing::error!($fmt $(, $arg)*);
            std::process::exit($code);
        }
    };
}
