//! Booking form: end-time bound, live price estimate, attendee capacity.
//!
//! All checks here are advisory; the server validates the booking again.

use std::sync::Arc;

use crate::{
    domain::PriceQuote,
    ui::{
        form::{FieldId, FormControls},
        messages::Messages,
    },
    usecase::{AttendeeValidationError, EstimatePriceUseCase, ValidateAttendeesUseCase},
};

pub struct BookingFormController {
    form: Arc<dyn FormControls>,
    estimator: EstimatePriceUseCase,
    attendees: ValidateAttendeesUseCase,
    messages: Messages,
}

impl BookingFormController {
    pub fn new(form: Arc<dyn FormControls>, messages: Messages) -> Self {
        Self {
            form,
            estimator: EstimatePriceUseCase::new(),
            attendees: ValidateAttendeesUseCase::new(),
            messages,
        }
    }

    /// Start time changed: bound the end time to start + 1h, then re-price.
    pub fn on_start_changed(&self) -> Option<PriceQuote> {
        if let Some(start) = self.form.value(FieldId::StartDatetime) {
            match self.estimator.minimum_end(&start) {
                Some(min_end) => {
                    self.form
                        .set_min(FieldId::EndDatetime, &min_end.to_form_value())
                }
                None => {
                    tracing::debug!("Start time '{}' not parseable; end bound unchanged", start)
                }
            }
        }
        self.recalculate_price()
    }

    pub fn on_end_changed(&self) -> Option<PriceQuote> {
        self.recalculate_price()
    }

    /// Recompute the estimate and show it.
    ///
    /// Does nothing when the page has no price-per-hour or total-price
    /// control. A failed estimate leaves the display as it was.
    pub fn recalculate_price(&self) -> Option<PriceQuote> {
        if !self.form.has(FieldId::PricePerHour) || !self.form.has(FieldId::TotalPrice) {
            return None;
        }

        let start = self.form.value(FieldId::StartDatetime);
        let end = self.form.value(FieldId::EndDatetime);
        let rate = self.form.value(FieldId::PricePerHour);

        let quote = self
            .estimator
            .calculate_price(start.as_deref(), end.as_deref(), rate.as_deref())?;

        self.form
            .set_text(FieldId::TotalPrice, &quote.display_total());
        self.form.show(FieldId::TotalPrice);
        Some(quote)
    }

    /// Attendee count typed: flag it when it exceeds the hall capacity.
    pub fn on_attendees_input(&self) {
        let (Some(attendees), Some(capacity)) = (
            self.form.value(FieldId::AttendeesCount),
            self.form.value(FieldId::HallCapacity),
        ) else {
            return;
        };

        match self.attendees.execute(&attendees, &capacity) {
            Ok(()) => self.form.set_validity(FieldId::AttendeesCount, None),
            Err(AttendeeValidationError::CapacityExceeded { capacity, .. }) => {
                let message = self.messages.attendees_exceed_capacity(capacity);
                self.form
                    .set_validity(FieldId::AttendeesCount, Some(&message))
            }
        }
    }

    /// Whether the booking form may be submitted.
    pub fn submit_allowed(&self) -> bool {
        let blocked = [
            FieldId::StartDatetime,
            FieldId::EndDatetime,
            FieldId::AttendeesCount,
        ]
        .into_iter()
        .find(|field| self.form.validity(*field).is_some());

        match blocked {
            Some(field) => {
                tracing::debug!("Submission blocked by invalid '{}'", field.element_id());
                false
            }
            None => true,
        }
    }
}
