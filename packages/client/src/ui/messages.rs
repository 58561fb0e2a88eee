//! Localised texts shown by the booking form.

use std::{fmt, str::FromStr};

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unsupported locale: {0} (expected \"ar\" or \"en\")")]
pub struct UnknownLocale(pub String);

/// Language of the visitor-facing texts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Locale {
    #[default]
    Ar,
    En,
}

impl FromStr for Locale {
    type Err = UnknownLocale;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "ar" => Ok(Locale::Ar),
            "en" => Ok(Locale::En),
            other => Err(UnknownLocale(other.to_string())),
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Locale::Ar => write!(f, "ar"),
            Locale::En => write!(f, "en"),
        }
    }
}

/// Message catalogue for one locale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Messages {
    locale: Locale,
}

impl Messages {
    pub fn new(locale: Locale) -> Self {
        Self { locale }
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    pub fn missing_datetimes(&self) -> &'static str {
        match self.locale {
            Locale::Ar => "يرجى تحديد تاريخ ووقت البداية والنهاية",
            Locale::En => "Please select the start and end date and time",
        }
    }

    pub fn missing_hall(&self) -> &'static str {
        match self.locale {
            Locale::Ar => "يرجى اختيار القاعة",
            Locale::En => "Please select a hall",
        }
    }

    pub fn end_before_start(&self) -> &'static str {
        match self.locale {
            Locale::Ar => "يجب أن يكون وقت النهاية بعد وقت البداية",
            Locale::En => "The end time must be after the start time",
        }
    }

    pub fn availability_check_failed(&self) -> &'static str {
        match self.locale {
            Locale::Ar => "حدث خطأ في التحقق من التوفر",
            Locale::En => "An error occurred while checking availability",
        }
    }

    pub fn attendees_exceed_capacity(&self, capacity: u32) -> String {
        match self.locale {
            Locale::Ar => format!("عدد الحضور لا يمكن أن يتجاوز سعة القاعة ({capacity})"),
            Locale::En => format!("The number of attendees cannot exceed the hall capacity ({capacity})"),
        }
    }
}
