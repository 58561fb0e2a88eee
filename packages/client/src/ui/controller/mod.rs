//! Controllers reacting to form events.
//!
//! They read controls through [`FormControls`](super::form::FormControls), call
//! the usecases, and report back through controls and notices.

pub mod availability;
pub mod booking;

pub use availability::{AvailabilityFormController, SubmitOutcome};
pub use booking::BookingFormController;
