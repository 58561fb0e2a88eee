//! UseCase 層
//!
//! 予約フォームのビジネスロジックを実装するレイヤー。
//! UI 層（コントローラ）から呼び出され、Domain 層を操作します。

pub mod check_availability;
pub mod error;
pub mod estimate_price;
pub mod validate_attendees;

pub use check_availability::{CheckAvailabilityUseCase, DEFAULT_CSRF_COOKIE, DEFAULT_TIMEOUT};
pub use error::{AttendeeValidationError, CheckAvailabilityError};
pub use estimate_price::EstimatePriceUseCase;
pub use validate_attendees::ValidateAttendeesUseCase;
