//! UseCase 層のエラー定義

use thiserror::Error;

use crate::domain::ValueObjectError;

/// 空き状況確認のエラー
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CheckAvailabilityError {
    /// 開始・終了日時が未入力、またはパースできない
    #[error("start and end date-times are required")]
    MissingInput,

    /// ホール ID が空
    #[error("hall id is required")]
    MissingHall,

    /// 終了日時が開始日時以前
    #[error("end date-time must be after start date-time")]
    InvalidRange,

    /// 通信失敗・タイムアウト・JSON でない応答
    #[error("availability check failed: {0}")]
    NetworkFailure(String),
}

impl From<ValueObjectError> for CheckAvailabilityError {
    fn from(error: ValueObjectError) -> Self {
        match error {
            ValueObjectError::InvalidRange => CheckAvailabilityError::InvalidRange,
            ValueObjectError::HallIdEmpty => CheckAvailabilityError::MissingHall,
            _ => CheckAvailabilityError::MissingInput,
        }
    }
}

/// 参加人数チェックのエラー
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AttendeeValidationError {
    /// 参加人数がホールの定員を超えている
    #[error("attendees ({attendees}) exceed hall capacity ({capacity})")]
    CapacityExceeded { capacity: u32, attendees: u32 },
}
