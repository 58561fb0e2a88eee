//! Availability form: submit handling.

use std::sync::Arc;

use crate::{
    domain::{AvailabilityResponse, NoticeLevel},
    ui::{
        form::{FieldId, FormControls},
        messages::Messages,
        notice::NoticeBoard,
    },
    usecase::{CheckAvailabilityError, CheckAvailabilityUseCase},
};

/// Result of one press of the availability submit button.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// A request was already in flight; nothing was done
    Busy,
    /// The check ran (or was rejected locally) and a notice was posted
    Finished(Result<AvailabilityResponse, CheckAvailabilityError>),
}

/// Re-enables the submit control when dropped.
struct DisabledGuard<'a> {
    form: &'a dyn FormControls,
}

impl Drop for DisabledGuard<'_> {
    fn drop(&mut self) {
        self.form.set_disabled(FieldId::AvailabilitySubmit, false);
    }
}

pub struct AvailabilityFormController {
    form: Arc<dyn FormControls>,
    usecase: CheckAvailabilityUseCase,
    notices: Arc<NoticeBoard>,
    messages: Messages,
}

impl AvailabilityFormController {
    pub fn new(
        form: Arc<dyn FormControls>,
        usecase: CheckAvailabilityUseCase,
        notices: Arc<NoticeBoard>,
        messages: Messages,
    ) -> Self {
        Self {
            form,
            usecase,
            notices,
            messages,
        }
    }

    /// Handle a submit of the availability form.
    ///
    /// The submit control stays disabled while the request is in flight and is
    /// re-enabled on every exit path.
    pub async fn submit(&self) -> SubmitOutcome {
        if self.form.is_disabled(FieldId::AvailabilitySubmit) {
            tracing::debug!("Availability check already in flight; ignoring submit");
            return SubmitOutcome::Busy;
        }

        let hall_id = self.form.value(FieldId::HallId).unwrap_or_default();
        let start = self.form.value(FieldId::StartDatetime).unwrap_or_default();
        let end = self.form.value(FieldId::EndDatetime).unwrap_or_default();

        let request = match CheckAvailabilityUseCase::build_request(&hall_id, &start, &end) {
            Ok(request) => request,
            Err(e) => {
                self.report(&e).await;
                return SubmitOutcome::Finished(Err(e));
            }
        };

        if self.form.set_disabled(FieldId::AvailabilitySubmit, true) {
            return SubmitOutcome::Busy;
        }
        let _guard = DisabledGuard {
            form: self.form.as_ref(),
        };

        let result = self.usecase.send(request).await;
        match &result {
            Ok(response) => {
                let level = if response.available {
                    NoticeLevel::Success
                } else {
                    NoticeLevel::Danger
                };
                self.notices.post(level, response.message.clone()).await;
            }
            Err(e) => self.report(e).await,
        }

        SubmitOutcome::Finished(result)
    }

    async fn report(&self, error: &CheckAvailabilityError) {
        match error {
            CheckAvailabilityError::MissingInput => {
                self.notices
                    .post(NoticeLevel::Warning, self.messages.missing_datetimes())
                    .await;
            }
            CheckAvailabilityError::MissingHall => {
                self.notices
                    .post(NoticeLevel::Warning, self.messages.missing_hall())
                    .await;
            }
            CheckAvailabilityError::InvalidRange => {
                self.notices
                    .post(NoticeLevel::Warning, self.messages.end_before_start())
                    .await;
            }
            CheckAvailabilityError::NetworkFailure(detail) => {
                tracing::error!("Availability check failed: {}", detail);
                self.notices
                    .post(NoticeLevel::Danger, self.messages.availability_check_failed())
                    .await;
            }
        }
    }
}
