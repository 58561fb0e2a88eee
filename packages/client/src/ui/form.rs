//! Form-control contract between the booking core and the hosting page.
//!
//! The page owns the controls; the core reads their values and writes back
//! validity, minimum bounds, text and enabled state through [`FormControls`].

use std::{
    collections::HashMap,
    sync::{Mutex, MutexGuard, PoisonError},
};

/// Stable identifiers of the controls the core touches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldId {
    HallId,
    StartDatetime,
    EndDatetime,
    AttendeesCount,
    HallCapacity,
    PricePerHour,
    TotalPrice,
    AvailabilitySubmit,
}

impl FieldId {
    /// Element identifier used by the page.
    pub fn element_id(&self) -> &'static str {
        match self {
            FieldId::HallId => "hall_id",
            FieldId::StartDatetime => "id_start_datetime",
            FieldId::EndDatetime => "id_end_datetime",
            FieldId::AttendeesCount => "id_attendees_count",
            FieldId::HallCapacity => "hall-capacity",
            FieldId::PricePerHour => "price-per-hour",
            FieldId::TotalPrice => "total-price",
            FieldId::AvailabilitySubmit => "availability-submit",
        }
    }
}

/// Access to externally rendered form controls.
///
/// Writes to a control the page did not render are ignored.
pub trait FormControls: Send + Sync {
    /// Whether the page rendered `field`.
    fn has(&self, field: FieldId) -> bool;

    /// Current value, `None` when the control is absent.
    fn value(&self, field: FieldId) -> Option<String>;

    /// Set the minimum accepted value (the `min` attribute).
    fn set_min(&self, field: FieldId, min: &str);

    /// Set (`Some`) or clear (`None`) a custom validity message.
    fn set_validity(&self, field: FieldId, message: Option<&str>);

    fn validity(&self, field: FieldId) -> Option<String>;

    /// Replace the control's text content.
    fn set_text(&self, field: FieldId, text: &str);

    fn show(&self, field: FieldId);

    /// Enable or disable the control, returning whether it was disabled before.
    fn set_disabled(&self, field: FieldId, disabled: bool) -> bool;

    fn is_disabled(&self, field: FieldId) -> bool;
}

/// State of one control held by [`InMemoryForm`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ControlState {
    pub value: String,
    pub min: Option<String>,
    pub validity: Option<String>,
    pub text: String,
    pub visible: bool,
    pub disabled: bool,
}

/// In-memory form used by the CLI and by tests.
#[derive(Debug, Default)]
pub struct InMemoryForm {
    controls: Mutex<HashMap<FieldId, ControlState>>,
}

impl InMemoryForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Render `field` with an initial value.
    pub fn with(self, field: FieldId, value: impl Into<String>) -> Self {
        self.lock().insert(
            field,
            ControlState {
                value: value.into(),
                ..ControlState::default()
            },
        );
        self
    }

    /// Render `field` hidden and empty, the way a display element starts out.
    pub fn with_hidden(self, field: FieldId) -> Self {
        self.lock().insert(field, ControlState::default());
        self
    }

    /// Simulate the visitor typing into `field`. Ignored if `field` is absent.
    pub fn set_value(&self, field: FieldId, value: impl Into<String>) {
        if let Some(control) = self.lock().get_mut(&field) {
            control.value = value.into();
        }
    }

    /// Snapshot of a control's state.
    pub fn control(&self, field: FieldId) -> Option<ControlState> {
        self.lock().get(&field).cloned()
    }

    /// True when no control carries a validity message.
    pub fn is_valid(&self) -> bool {
        self.lock().values().all(|control| control.validity.is_none())
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<FieldId, ControlState>> {
        self.controls.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn update(&self, field: FieldId, f: impl FnOnce(&mut ControlState)) {
        if let Some(control) = self.lock().get_mut(&field) {
            f(control);
        }
    }
}

impl FormControls for InMemoryForm {
    fn has(&self, field: FieldId) -> bool {
        self.lock().contains_key(&field)
    }

    fn value(&self, field: FieldId) -> Option<String> {
        self.lock().get(&field).map(|control| control.value.clone())
    }

    fn set_min(&self, field: FieldId, min: &str) {
        self.update(field, |control| control.min = Some(min.to_string()));
    }

    fn set_validity(&self, field: FieldId, message: Option<&str>) {
        self.update(field, |control| control.validity = message.map(str::to_string));
    }

    fn validity(&self, field: FieldId) -> Option<String> {
        self.lock().get(&field).and_then(|control| control.validity.clone())
    }

    fn set_text(&self, field: FieldId, text: &str) {
        self.update(field, |control| control.text = text.to_string());
    }

    fn show(&self, field: FieldId) {
        self.update(field, |control| control.visible = true);
    }

    fn set_disabled(&self, field: FieldId, disabled: bool) -> bool {
        let mut controls = self.lock();
        match controls.get_mut(&field) {
            Some(control) => std::mem::replace(&mut control.disabled, disabled),
            None => false,
        }
    }

    fn is_disabled(&self, field: FieldId) -> bool {
        self.lock()
            .get(&field)
            .map(|control| control.disabled)
            .unwrap_or(false)
    }
}
