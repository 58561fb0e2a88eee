//! Debounced search input.
//!
//! Submits the search form only once the visitor stops typing for the quiet
//! interval.

use std::{
    sync::{Arc, Mutex, PoisonError},
    time::Duration,
};

use tokio::{
    io::{AsyncBufRead, AsyncBufReadExt},
    task::JoinHandle,
};

/// Quiet interval before a search is submitted.
pub const DEFAULT_SEARCH_DEBOUNCE: Duration = Duration::from_millis(500);

/// Hall list page that receives the search form.
pub const HALLS_LIST_PATH: &str = "/halls/";

/// URL the search form submits `query` to.
pub fn search_url(base_url: &str, query: &str) -> String {
    format!(
        "{}{}?search={}",
        base_url.trim_end_matches('/'),
        HALLS_LIST_PATH,
        urlencoding::encode(query)
    )
}

type SubmitFn = Arc<dyn Fn(String) + Send + Sync>;

/// Fires `on_submit` with the latest query after `delay` without new input.
///
/// Must be used from within a tokio runtime.
pub struct SearchDebouncer {
    delay: Duration,
    on_submit: SubmitFn,
    pending: Mutex<Option<JoinHandle<()>>>,
}

impl SearchDebouncer {
    pub fn new(delay: Duration, on_submit: impl Fn(String) + Send + Sync + 'static) -> Self {
        Self {
            delay,
            on_submit: Arc::new(on_submit),
            pending: Mutex::new(None),
        }
    }

    /// Record a keystroke. Cancels the previously scheduled submission.
    pub fn input(&self, query: impl Into<String>) {
        let query = query.into();
        let on_submit = self.on_submit.clone();
        let delay = self.delay;

        let mut pending = self.pending.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(previous) = pending.take() {
            previous.abort();
        }
        *pending = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            tracing::debug!("Submitting search for '{}'", query);
            on_submit(query);
        }));
    }

    /// Wait for the scheduled submission, if any, to fire.
    pub async fn flush(&self) {
        let pending = self
            .pending
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .take();
        if let Some(handle) = pending {
            let _ = handle.await;
        }
    }

    /// Drop any scheduled submission.
    pub fn cancel(&self) {
        if let Some(previous) = self
            .pending
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .take()
        {
            previous.abort();
        }
    }
}

/// Feed each line of `input` to `debouncer` as the search box's new contents.
///
/// Returns at end of input, once the last scheduled submission has fired.
pub async fn drive_search<R>(input: R, debouncer: &SearchDebouncer) -> std::io::Result<()>
where
    R: AsyncBufRead + Unpin,
{
    let mut lines = input.lines();
    while let Some(line) = lines.next_line().await? {
        debouncer.input(line);
    }
    debouncer.flush().await;
    Ok(())
}

impl Drop for SearchDebouncer {
    fn drop(&mut self) {
        self.cancel();
    }
}
