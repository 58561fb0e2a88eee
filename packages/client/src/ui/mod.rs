//! Presentation side of the booking form.

pub mod controller;
pub mod form;
pub mod messages;
pub mod notice;
pub mod search;

pub use controller::{AvailabilityFormController, BookingFormController, SubmitOutcome};
pub use form::{FieldId, FormControls, InMemoryForm};
pub use messages::{Locale, Messages};
pub use notice::{NoticeBoard, NoticeRenderer, RecordingRenderer};
pub use search::{SearchDebouncer, drive_search, search_url};
