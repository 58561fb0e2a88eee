//! Notice queue with a pluggable renderer.
//!
//! Notices are posted by the controllers and dismissed once they have been
//! visible for the configured time-to-live.

use std::{
    sync::{Arc, Mutex as StdMutex, PoisonError},
    time::Duration,
};

use hallbook_shared::Clock;
use tokio::sync::Mutex;

use crate::domain::{Notice, NoticeId, NoticeIdFactory, NoticeLevel, Timestamp};

/// How long a notice stays up before it is dismissed.
pub const DEFAULT_NOTICE_TTL: Duration = Duration::from_millis(5000);

/// Draws and removes notices on whatever surface hosts the form.
pub trait NoticeRenderer: Send + Sync {
    fn render(&self, notice: &Notice);
    fn dismiss(&self, id: NoticeId);
}

/// Active notices, newest first.
pub struct NoticeBoard {
    clock: Arc<dyn Clock>,
    renderer: Arc<dyn NoticeRenderer>,
    ttl: Duration,
    active: Mutex<Vec<Notice>>,
}

impl NoticeBoard {
    pub fn new(clock: Arc<dyn Clock>, renderer: Arc<dyn NoticeRenderer>) -> Self {
        Self {
            clock,
            renderer,
            ttl: DEFAULT_NOTICE_TTL,
            active: Mutex::new(Vec::new()),
        }
    }

    pub fn with_ttl(mut self, ttl: Duration) -> Self {
        self.ttl = ttl;
        self
    }

    /// Render a new notice and keep it until it expires.
    pub async fn post(&self, level: NoticeLevel, message: impl Into<String>) -> NoticeId {
        let notice = Notice::new(
            NoticeIdFactory::generate(),
            level,
            message.into(),
            Timestamp::new(self.clock.now_millis()),
        );
        let id = notice.id;

        tracing::debug!("Posting {} notice {}", level.as_str(), id);
        self.renderer.render(&notice);
        self.active.lock().await.insert(0, notice);

        id
    }

    /// Dismiss every expired notice. Returns the ids that were dismissed.
    pub async fn sweep(&self) -> Vec<NoticeId> {
        let now = Timestamp::new(self.clock.now_millis());
        let ttl_millis = i64::try_from(self.ttl.as_millis()).unwrap_or(i64::MAX);

        let expired: Vec<NoticeId> = {
            let mut active = self.active.lock().await;
            let (expired, kept): (Vec<Notice>, Vec<Notice>) = active
                .drain(..)
                .partition(|notice| notice.is_expired(now, ttl_millis));
            *active = kept;
            expired.into_iter().map(|notice| notice.id).collect()
        };

        for id in &expired {
            self.renderer.dismiss(*id);
        }
        expired
    }

    /// Notices currently on screen, newest first.
    pub async fn active(&self) -> Vec<Notice> {
        self.active.lock().await.clone()
    }

    /// Sweep every `period`, forever. Spawn this alongside the form.
    pub async fn run_auto_dismiss(self: Arc<Self>, period: Duration) {
        let mut ticker = tokio::time::interval(period);
        loop {
            ticker.tick().await;
            self.sweep().await;
        }
    }
}

/// What a [`RecordingRenderer`] saw.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderEvent {
    Rendered(Notice),
    Dismissed(NoticeId),
}

/// Renderer that records every call, in order.
#[derive(Debug, Default)]
pub struct RecordingRenderer {
    events: StdMutex<Vec<RenderEvent>>,
}

impl RecordingRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<RenderEvent> {
        self.events
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Notices rendered so far, oldest first.
    pub fn rendered(&self) -> Vec<Notice> {
        self.events()
            .into_iter()
            .filter_map(|event| match event {
                RenderEvent::Rendered(notice) => Some(notice),
                RenderEvent::Dismissed(_) => None,
            })
            .collect()
    }

    fn push(&self, event: RenderEvent) {
        self.events
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(event);
    }
}

impl NoticeRenderer for RecordingRenderer {
    fn render(&self, notice: &Notice) {
        self.push(RenderEvent::Rendered(notice.clone()));
    }

    fn dismiss(&self, id: NoticeId) {
        self.push(RenderEvent::Dismissed(id));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hallbook_shared::ManualClock;

    fn board() -> (Arc<ManualClock>, Arc<RecordingRenderer>, NoticeBoard) {
        let clock = Arc::new(ManualClock::new(1_000_000));
        let renderer = Arc::new(RecordingRenderer::new());
        let board = NoticeBoard::new(clock.clone(), renderer.clone());
        (clock, renderer, board)
    }

    #[tokio::test]
    async fn test_post_renders_and_tracks_notice() {
        // テスト項目: 投稿した通知が描画され、アクティブ一覧に新しい順で並ぶ
        // given (前提条件):
        let (_clock, renderer, board) = board();

        // when (操作):
        let first = board.post(NoticeLevel::Success, "first").await;
        let second = board.post(NoticeLevel::Danger, "second").await;

        // then (期待する結果):
        let active = board.active().await;
        assert_eq!(active.len(), 2);
        assert_eq!(active[0].id, second);
        assert_eq!(active[1].id, first);
        assert_eq!(active[0].posted_at, Timestamp::new(1_000_000));

        let rendered = renderer.rendered();
        assert_eq!(rendered.len(), 2);
        assert_eq!(rendered[1].level, NoticeLevel::Danger);
        assert_eq!(rendered[1].message, "second");
    }

    #[tokio::test]
    async fn test_sweep_dismisses_after_five_seconds() {
        // テスト項目: 通知は 5000ms 経過で自動的に消え、それ未満では残る
        // given (前提条件):
        let (clock, renderer, board) = board();
        let id = board.post(NoticeLevel::Danger, "Booked").await;

        // when (操作): 4999ms 経過
        clock.advance(4_999);
        let dismissed_early = board.sweep().await;

        // then (期待する結果): まだ残っている
        assert!(dismissed_early.is_empty());
        assert_eq!(board.active().await.len(), 1);

        // when (操作): 5000ms 経過
        clock.advance(1);
        let dismissed = board.sweep().await;

        // then (期待する結果): 消えている
        assert_eq!(dismissed, vec![id]);
        assert!(board.active().await.is_empty());
        assert_eq!(renderer.events().last(), Some(&RenderEvent::Dismissed(id)));
    }

    #[tokio::test]
    async fn test_sweep_only_dismisses_expired() {
        // テスト項目: 期限切れの通知だけが消える
        let (clock, _renderer, board) = board();
        let old = board.post(NoticeLevel::Info, "old").await;
        clock.advance(3_000);
        let fresh = board.post(NoticeLevel::Info, "fresh").await;
        clock.advance(2_000);

        let dismissed = board.sweep().await;

        assert_eq!(dismissed, vec![old]);
        let active = board.active().await;
        assert_eq!(active.len(), 1);
        assert_eq!(active[0].id, fresh);
    }

    #[tokio::test]
    async fn test_custom_ttl() {
        // テスト項目: TTL を変更できる
        let clock = Arc::new(ManualClock::new(0));
        let board = NoticeBoard::new(clock.clone(), Arc::new(RecordingRenderer::new()))
            .with_ttl(Duration::from_millis(100));
        board.post(NoticeLevel::Warning, "short").await;

        clock.advance(100);

        assert_eq!(board.sweep().await.len(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_run_auto_dismiss_sweeps_periodically() {
        // テスト項目: 自動消去ループが定期的に sweep する
        // given (前提条件):
        let (clock, _renderer, board) = board();
        let board = Arc::new(board);
        board.post(NoticeLevel::Success, "saved").await;
        let handle = tokio::spawn(board.clone().run_auto_dismiss(Duration::from_millis(250)));

        // when (操作):
        clock.advance(5_000);
        tokio::time::sleep(Duration::from_millis(300)).await;

        // then (期待する結果):
        assert!(board.active().await.is_empty());
        handle.abort();
    }
}
