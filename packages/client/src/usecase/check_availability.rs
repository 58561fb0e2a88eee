//! UseCase: ホールの空き状況確認
//!
//! ## テスト実装の作業記録
//!
//! ### 何をテストしているか
//! - CheckAvailabilityUseCase::execute() / build_request() / send()
//!
//! ### なぜこのテストが必要か
//! - 入力不足・範囲不正の場合にネットワーク呼び出しが一切発生しないことを保証
//! - CSRF トークンが Cookie から読まれてゲートウェイに渡ることを確認
//! - 通信失敗・タイムアウトが NetworkFailure にまとめられることを確認
//!
//! ### どのような状況を想定しているか
//! - 正常系：空きあり / 空きなし
//! - 異常系：未入力、ホール ID なし、パース不可、end <= start、通信失敗、タイムアウト
//! - エッジケース：CSRF Cookie が存在しない場合（ヘッダーなしで送信）

use std::{sync::Arc, time::Duration};

use crate::domain::{
    AvailabilityGateway, AvailabilityRequest, AvailabilityResponse, BookingDateTime, CookieSource,
    HallId, TimeRange,
};

use super::error::CheckAvailabilityError;

/// 応答待ちのデフォルト上限
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// CSRF トークンを保持する Cookie 名
pub const DEFAULT_CSRF_COOKIE: &str = "csrftoken";

/// 空き状況確認のユースケース
pub struct CheckAvailabilityUseCase {
    /// 空き状況エンドポイントへのゲートウェイ
    gateway: Arc<dyn AvailabilityGateway>,
    /// CSRF トークンの取得元
    cookies: Arc<dyn CookieSource>,
    csrf_cookie: String,
    timeout: Duration,
}

impl CheckAvailabilityUseCase {
    /// 新しい CheckAvailabilityUseCase を作成
    pub fn new(gateway: Arc<dyn AvailabilityGateway>, cookies: Arc<dyn CookieSource>) -> Self {
        Self {
            gateway,
            cookies,
            csrf_cookie: DEFAULT_CSRF_COOKIE.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_csrf_cookie(mut self, name: impl Into<String>) -> Self {
        self.csrf_cookie = name.into();
        self
    }

    /// 空き状況確認を実行
    ///
    /// # Arguments
    ///
    /// * `hall_id` - ホール ID（フォームの値そのまま）
    /// * `start` - 開始日時
    /// * `end` - 終了日時
    ///
    /// # Returns
    ///
    /// * `Ok(AvailabilityResponse)` - サーバーの応答
    /// * `Err(CheckAvailabilityError)` - 入力不足、範囲不正、通信失敗
    pub async fn execute(
        &self,
        hall_id: &str,
        start: &str,
        end: &str,
    ) -> Result<AvailabilityResponse, CheckAvailabilityError> {
        let request = Self::build_request(hall_id, start, end)?;
        self.send(request).await
    }

    /// フォームの値からリクエストを組み立てる（ネットワークには触れない）
    pub fn build_request(
        hall_id: &str,
        start: &str,
        end: &str,
    ) -> Result<AvailabilityRequest, CheckAvailabilityError> {
        let start = BookingDateTime::parse(start)?;
        let end = BookingDateTime::parse(end)?;
        let range = TimeRange::new(start, end)?;
        let hall_id = HallId::new(hall_id)?;

        Ok(AvailabilityRequest::new(hall_id, range))
    }

    /// 組み立て済みのリクエストを 1 回だけ送信する（リトライなし）
    pub async fn send(
        &self,
        request: AvailabilityRequest,
    ) -> Result<AvailabilityResponse, CheckAvailabilityError> {
        let csrf_token = self.cookies.get(&self.csrf_cookie);
        if csrf_token.is_none() {
            tracing::warn!(
                "Cookie '{}' not found; sending availability check without CSRF token",
                self.csrf_cookie
            );
        }

        let hall_id = request.hall_id.clone();
        tracing::debug!(
            "Checking availability of hall '{}' from {} to {}",
            hall_id,
            request.range.start(),
            request.range.end()
        );

        match tokio::time::timeout(self.timeout, self.gateway.check(request, csrf_token)).await {
            Ok(Ok(response)) => {
                tracing::info!(
                    "Hall '{}' availability: {}",
                    hall_id,
                    if response.available { "available" } else { "unavailable" }
                );
                Ok(response)
            }
            Ok(Err(e)) => Err(CheckAvailabilityError::NetworkFailure(e.to_string())),
            Err(_) => Err(CheckAvailabilityError::NetworkFailure(format!(
                "no response within {}ms",
                self.timeout.as_millis()
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{
        GatewayError,
        gateway::{MockAvailabilityGateway, MockCookieSource},
    };
    use async_trait::async_trait;

    fn cookies_with_token(token: &'static str) -> Arc<MockCookieSource> {
        let mut cookies = MockCookieSource::new();
        cookies
            .expect_get()
            .withf(|name| name == "csrftoken")
            .returning(move |_| Some(token.to_string()));
        Arc::new(cookies)
    }

    fn gateway_never_called() -> Arc<MockAvailabilityGateway> {
        let mut gateway = MockAvailabilityGateway::new();
        gateway.expect_check().times(0);
        Arc::new(gateway)
    }

    #[tokio::test]
    async fn test_check_availability_available() {
        // テスト項目: 空きありの応答がそのまま返される
        // given (前提条件):
        let mut gateway = MockAvailabilityGateway::new();
        gateway
            .expect_check()
            .times(1)
            .withf(|request, token| {
                request.hall_id.as_str() == "7"
                    && request.range.start().to_form_value() == "2024-01-01T10:00"
                    && request.range.end().to_form_value() == "2024-01-01T12:30"
                    && token.as_deref() == Some("secret")
            })
            .returning(|_, _| {
                Ok(AvailabilityResponse {
                    available: true,
                    message: "Available".to_string(),
                })
            });
        let usecase = CheckAvailabilityUseCase::new(Arc::new(gateway), cookies_with_token("secret"));

        // when (操作):
        let result = usecase
            .execute("7", "2024-01-01T10:00", "2024-01-01T12:30")
            .await;

        // then (期待する結果):
        assert_eq!(
            result,
            Ok(AvailabilityResponse {
                available: true,
                message: "Available".to_string(),
            })
        );
    }

    #[tokio::test]
    async fn test_check_availability_unavailable() {
        // テスト項目: 空きなしの応答もエラーではなく Ok として返される
        let mut gateway = MockAvailabilityGateway::new();
        gateway.expect_check().times(1).returning(|_, _| {
            Ok(AvailabilityResponse {
                available: false,
                message: "Booked".to_string(),
            })
        });
        let usecase = CheckAvailabilityUseCase::new(Arc::new(gateway), cookies_with_token("t"));

        let response = usecase
            .execute("7", "2024-01-01T10:00", "2024-01-01T11:00")
            .await
            .unwrap();

        assert!(!response.available);
        assert_eq!(response.message, "Booked");
    }

    #[tokio::test]
    async fn test_check_availability_missing_input_sends_nothing() {
        // テスト項目: 開始・終了日時が空の場合、リクエストを送らずに MissingInput を返す
        // given (前提条件):
        let usecase = CheckAvailabilityUseCase::new(gateway_never_called(), cookies_with_token("t"));

        // when (操作):
        let missing_start = usecase.execute("7", "", "2024-01-01T11:00").await;
        let missing_end = usecase.execute("7", "2024-01-01T10:00", "   ").await;
        let garbage = usecase.execute("7", "soon", "2024-01-01T11:00").await;

        // then (期待する結果):
        assert_eq!(missing_start, Err(CheckAvailabilityError::MissingInput));
        assert_eq!(missing_end, Err(CheckAvailabilityError::MissingInput));
        assert_eq!(garbage, Err(CheckAvailabilityError::MissingInput));
    }

    #[test]
    fn test_build_request_keeps_values_as_entered() {
        // テスト項目: オフセット付きの日時は入力どおりの文字列でリクエストに載る
        // when (操作):
        let request = CheckAvailabilityUseCase::build_request(
            "1",
            "2024-01-01T10:00:00+02:00",
            "2024-01-01T12:00:00+02:00",
        )
        .unwrap();

        // then (期待する結果):
        assert_eq!(request.range.start().as_submitted(), "2024-01-01T10:00:00+02:00");
        assert_eq!(request.range.end().as_submitted(), "2024-01-01T12:00:00+02:00");
        assert_eq!(request.range.duration_millis(), 7_200_000);
    }

    #[tokio::test]
    async fn test_check_availability_missing_hall_sends_nothing() {
        // テスト項目: ホール ID が空の場合、リクエストを送らずに MissingHall を返す
        let usecase = CheckAvailabilityUseCase::new(gateway_never_called(), cookies_with_token("t"));

        let result = usecase
            .execute("  ", "2024-01-01T10:00", "2024-01-01T11:00")
            .await;

        assert_eq!(result, Err(CheckAvailabilityError::MissingHall));
    }

    #[tokio::test]
    async fn test_check_availability_invalid_range_sends_nothing() {
        // テスト項目: end <= start の場合、リクエストを送らずに InvalidRange を返す
        let usecase = CheckAvailabilityUseCase::new(gateway_never_called(), cookies_with_token("t"));

        let result = usecase
            .execute("7", "2024-01-01T12:00", "2024-01-01T10:00")
            .await;

        assert_eq!(result, Err(CheckAvailabilityError::InvalidRange));
    }

    #[tokio::test]
    async fn test_check_availability_without_csrf_cookie() {
        // テスト項目: CSRF Cookie がなくてもトークンなしで送信される
        // given (前提条件):
        let mut cookies = MockCookieSource::new();
        cookies.expect_get().returning(|_| None);
        let mut gateway = MockAvailabilityGateway::new();
        gateway
            .expect_check()
            .times(1)
            .withf(|_, token| token.is_none())
            .returning(|_, _| {
                Ok(AvailabilityResponse {
                    available: true,
                    message: "ok".to_string(),
                })
            });
        let usecase = CheckAvailabilityUseCase::new(Arc::new(gateway), Arc::new(cookies));

        // when (操作):
        let result = usecase
            .execute("1", "2024-01-01T10:00", "2024-01-01T11:00")
            .await;

        // then (期待する結果):
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_check_availability_custom_csrf_cookie_name() {
        // テスト項目: Cookie 名を差し替えられる
        let mut cookies = MockCookieSource::new();
        cookies
            .expect_get()
            .withf(|name| name == "XSRF-TOKEN")
            .returning(|_| Some("xsrf".to_string()));
        let mut gateway = MockAvailabilityGateway::new();
        gateway
            .expect_check()
            .withf(|_, token| token.as_deref() == Some("xsrf"))
            .returning(|_, _| {
                Ok(AvailabilityResponse {
                    available: true,
                    message: "ok".to_string(),
                })
            });
        let usecase = CheckAvailabilityUseCase::new(Arc::new(gateway), Arc::new(cookies))
            .with_csrf_cookie("XSRF-TOKEN");

        let result = usecase
            .execute("1", "2024-01-01T10:00", "2024-01-01T11:00")
            .await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_check_availability_gateway_error_is_network_failure() {
        // テスト項目: ゲートウェイのエラーは NetworkFailure になり、リトライしない
        // given (前提条件):
        let mut gateway = MockAvailabilityGateway::new();
        gateway
            .expect_check()
            .times(1)
            .returning(|_, _| Err(GatewayError::Decode("expected value at line 1".to_string())));
        let usecase = CheckAvailabilityUseCase::new(Arc::new(gateway), cookies_with_token("t"));

        // when (操作):
        let result = usecase
            .execute("1", "2024-01-01T10:00", "2024-01-01T11:00")
            .await;

        // then (期待する結果):
        assert!(matches!(
            result,
            Err(CheckAvailabilityError::NetworkFailure(detail)) if detail.contains("decode")
        ));
    }

    struct StalledGateway;

    #[async_trait]
    impl AvailabilityGateway for StalledGateway {
        async fn check(
            &self,
            _request: AvailabilityRequest,
            _csrf_token: Option<String>,
        ) -> Result<AvailabilityResponse, GatewayError> {
            tokio::time::sleep(Duration::from_secs(3600)).await;
            Ok(AvailabilityResponse {
                available: true,
                message: "too late".to_string(),
            })
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_check_availability_timeout_is_network_failure() {
        // テスト項目: タイムアウトした場合は NetworkFailure になる
        // given (前提条件):
        let usecase = CheckAvailabilityUseCase::new(Arc::new(StalledGateway), cookies_with_token("t"))
            .with_timeout(Duration::from_secs(10));

        // when (操作):
        let result = usecase
            .execute("1", "2024-01-01T10:00", "2024-01-01T11:00")
            .await;

        // then (期待する結果):
        assert_eq!(
            result,
            Err(CheckAvailabilityError::NetworkFailure(
                "no response within 10000ms".to_string()
            ))
        );
    }
}
