//! Keeps a form control's value inside constraint attributes that change at
//! runtime.
//!
//! A control exposes `min`/`max` (numeric and date kinds) or `maxlength`
//! (everything else). [`AutoAdjust`] watches those attributes, and whenever one
//! of them changes it re-checks the current value, clamps it toward the
//! violated bound, and queues a change notification that is delivered on the
//! next [`AutoAdjust::flush`].
//!
//! ```
//! use auto_adjust::{AdjustConfig, AutoAdjust, InputControl};
//!
//! let control = InputControl::new("number").with_value("5");
//! let mut adjust = AutoAdjust::attach(control, AdjustConfig::default())?;
//! adjust.digest()?;
//!
//! adjust.control_mut().set_attr("min", "10");
//! adjust.digest()?;
//! assert_eq!(adjust.control().value(), "10");
//! assert_eq!(adjust.pending_notifications(), 1);
//! # Ok::<(), auto_adjust::Error>(())
//! ```

use std::collections::{HashMap, VecDeque};
use std::error::Error as StdError;
use std::fmt;

mod binding;
mod category;
mod clamp;
mod config;
mod control;
mod date;
mod notifier;
mod number;
mod observer;
mod parse;
mod trace;
mod type_pattern;
mod validate;

pub use binding::AutoAdjust;
pub use category::{Category, TypeClassifier};
pub use clamp::{ClampDecision, clamp_to_max, clamp_to_max_length, clamp_to_min};
pub use config::AdjustConfig;
pub use control::{Control, InputControl};
pub use date::{format_date_input, parse_date_to_epoch_ms};
pub use notifier::ChangeEvent;
pub use number::{format_number, parse_number};
pub use observer::ConstraintAttr;
pub use parse::{ParsedValue, parse_maxlength, parse_value};
pub use validate::{is_expected_type, is_usable, order_consistent};

use notifier::{ListenerStore, SchedulerState};
use observer::AttributeObserver;
use trace::TraceState;
use type_pattern::TypePattern;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    InvalidTypePattern {
        pattern: String,
        message: String,
    },
    InvalidConfig(String),
    DigestLimit {
        limit: usize,
        last_dirty: String,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidTypePattern { pattern, message } => {
                write!(f, "invalid type pattern {pattern}: {message}")
            }
            Self::InvalidConfig(msg) => write!(f, "invalid config: {msg}"),
            Self::DigestLimit { limit, last_dirty } => write!(
                f,
                "digest did not settle after {limit} passes (last dirty attribute: {last_dirty})"
            ),
        }
    }
}

impl StdError for Error {}

#[cfg(test)]
mod tests;
