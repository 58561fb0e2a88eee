//! UseCase: 料金の見積もり
//!
//! ## 何をテストしているか
//! - EstimatePriceUseCase::calculate_price() / minimum_end()
//!
//! ### どのような状況を想定しているか
//! - 正常系：有効な期間と料金から合計を計算
//! - 異常系：未入力・パース不可・end <= start・負の料金
//! - エッジケース：開始日時変更時の終了日時の下限（開始 + 1 時間）

use crate::domain::{BookingDateTime, HourlyRate, PriceQuote, TimeRange};

/// 終了日時の下限を開始日時から何時間後にするか
pub const MIN_BOOKING_HOURS: i64 = 1;

/// 料金見積もりのユースケース
#[derive(Debug, Default, Clone, Copy)]
pub struct EstimatePriceUseCase;

impl EstimatePriceUseCase {
    pub fn new() -> Self {
        Self
    }

    /// 見積もりを計算する
    ///
    /// # Returns
    ///
    /// * `Some(PriceQuote)` - 全ての入力が揃っていて end > start の場合
    /// * `None` - それ以外（未入力、パース不可、範囲不正、負の料金）
    pub fn calculate_price(
        &self,
        start: Option<&str>,
        end: Option<&str>,
        rate_per_hour: Option<&str>,
    ) -> Option<PriceQuote> {
        let start = BookingDateTime::parse(start?).ok()?;
        let end = BookingDateTime::parse(end?).ok()?;
        let range = TimeRange::new(start, end).ok()?;
        let rate = HourlyRate::parse(rate_per_hour?).ok()?;

        let quote = PriceQuote::calculate(&range, rate);
        if quote.is_none() {
            tracing::warn!("Price estimate overflowed for rate {}", rate.value());
        }
        quote
    }

    /// 開始日時から終了日時の下限（開始 + 1 時間）を求める
    pub fn minimum_end(&self, start: &str) -> Option<BookingDateTime> {
        BookingDateTime::parse(start)
            .ok()?
            .plus_hours(MIN_BOOKING_HOURS)
    }
}
