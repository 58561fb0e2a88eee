//! UseCase: 参加人数の定員チェック
//!
//! クライアント側の補助的なチェック。最終的な判定はサーバーが行う。

use crate::domain::{AttendeeCount, HallCapacity};

use super::error::AttendeeValidationError;

/// 参加人数チェックのユースケース
#[derive(Debug, Default, Clone, Copy)]
pub struct ValidateAttendeesUseCase;

impl ValidateAttendeesUseCase {
    pub fn new() -> Self {
        Self
    }

    /// 参加人数が定員以内か確認する
    ///
    /// どちらかの値が整数として読めない場合は判定せず `Ok(())` を返す
    /// （フォーム側の必須・型チェックに任せる）。
    pub fn execute(&self, attendees: &str, capacity: &str) -> Result<(), AttendeeValidationError> {
        let (Ok(attendees), Ok(capacity)) =
            (AttendeeCount::parse(attendees), HallCapacity::parse(capacity))
        else {
            return Ok(());
        };

        if capacity.admits(attendees) {
            Ok(())
        } else {
            Err(AttendeeValidationError::CapacityExceeded {
                capacity: capacity.value(),
                attendees: attendees.value(),
            })
        }
    }
}
