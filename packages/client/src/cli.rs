//! Command-line front end driving the booking-form controllers.

use std::sync::Arc;

use clap::{Parser, Subcommand};
use hallbook_shared::{SystemClock, time::millis_to_rfc3339};

use crate::{
    config::ClientConfig,
    domain::{Notice, NoticeId},
    error::ClientError,
    infrastructure::{CookieHeader, HttpAvailabilityGateway},
    ui::{
        AvailabilityFormController, BookingFormController, FieldId, FormControls, InMemoryForm,
        Locale, Messages, NoticeBoard, NoticeRenderer, SearchDebouncer, SubmitOutcome,
        drive_search, search_url,
    },
    usecase::CheckAvailabilityUseCase,
};

#[derive(Debug, Parser)]
#[command(name = "hallbook-client", version, about = "Hall booking form helper")]
pub struct Cli {
    /// Site root of the booking application
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    /// Availability request timeout in seconds
    #[arg(long, global = true, value_parser = clap::value_parser!(u64).range(1..))]
    pub timeout_secs: Option<u64>,

    /// Language of notices: ar or en
    #[arg(long, global = true)]
    pub locale: Option<String>,

    /// Default log level when RUST_LOG is unset
    #[arg(long, global = true, default_value = "info")]
    pub log_level: String,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Ask the server whether a hall is free
    Check {
        #[arg(long)]
        hall_id: String,
        #[arg(long, default_value = "")]
        start: String,
        #[arg(long, default_value = "")]
        end: String,
        /// Raw cookie string, e.g. "csrftoken=abc; sessionid=xyz"
        #[arg(long, default_value = "")]
        cookie: String,
    },
    /// Estimate the price of a booking
    Quote {
        #[arg(long)]
        start: String,
        #[arg(long)]
        end: String,
        /// Price per hour
        #[arg(long)]
        rate: String,
    },
    /// Check an attendee count against a hall's capacity
    Attendees {
        #[arg(long)]
        count: String,
        #[arg(long)]
        capacity: String,
    },
    /// Read search-box contents from stdin, one line per edit, and print the
    /// hall-list URL once typing pauses
    Search,
}

/// Prints notices to stdout.
struct ConsoleRenderer;

impl NoticeRenderer for ConsoleRenderer {
    fn render(&self, notice: &Notice) {
        tracing::debug!(
            "Notice {} posted at {}",
            notice.id,
            millis_to_rfc3339(notice.posted_at.value())
        );
        println!("[{}] {}", notice.level.as_str(), notice.message);
    }

    fn dismiss(&self, id: NoticeId) {
        tracing::debug!("Notice {} dismissed", id);
    }
}

/// Apply command-line overrides on top of `config`.
fn resolve_config(cli: &Cli, mut config: ClientConfig) -> Result<ClientConfig, ClientError> {
    if let Some(base_url) = &cli.base_url {
        config.base_url = base_url.clone();
    }
    if let Some(secs) = cli.timeout_secs {
        config.timeout = std::time::Duration::from_secs(secs);
    }
    if let Some(locale) = &cli.locale {
        config.locale = locale.parse::<Locale>()?;
    }
    Ok(config)
}

/// Run one CLI command.
pub async fn run_client(cli: Cli) -> Result<(), ClientError> {
    let config = resolve_config(&cli, ClientConfig::from_env()?)?;
    let messages = Messages::new(config.locale);
    tracing::debug!("Using {:?}", config);

    match cli.command {
        Command::Check {
            hall_id,
            start,
            end,
            cookie,
        } => {
            let form = Arc::new(
                InMemoryForm::new()
                    .with(FieldId::HallId, hall_id)
                    .with(FieldId::StartDatetime, start)
                    .with(FieldId::EndDatetime, end)
                    .with(FieldId::AvailabilitySubmit, ""),
            );
            let usecase = CheckAvailabilityUseCase::new(
                Arc::new(HttpAvailabilityGateway::new(&config.base_url)),
                Arc::new(CookieHeader::new(cookie)),
            )
            .with_timeout(config.timeout)
            .with_csrf_cookie(config.csrf_cookie.clone());
            let notices = Arc::new(
                NoticeBoard::new(Arc::new(SystemClock), Arc::new(ConsoleRenderer))
                    .with_ttl(config.notice_ttl),
            );
            let controller = AvailabilityFormController::new(form, usecase, notices, messages);

            match controller.submit().await {
                SubmitOutcome::Finished(Ok(_)) => Ok(()),
                SubmitOutcome::Finished(Err(e)) => Err(e.into()),
                SubmitOutcome::Busy => Err(ClientError::Busy),
            }
        }
        Command::Quote { start, end, rate } => {
            let form = Arc::new(
                InMemoryForm::new()
                    .with(FieldId::StartDatetime, start)
                    .with(FieldId::EndDatetime, end)
                    .with(FieldId::PricePerHour, rate)
                    .with_hidden(FieldId::TotalPrice),
            );
            let controller = BookingFormController::new(form.clone(), messages);

            let quote = controller.on_start_changed();
            if let Some(min_end) = form.control(FieldId::EndDatetime).and_then(|c| c.min) {
                println!("earliest end: {min_end}");
            }
            match quote {
                Some(quote) => println!(
                    "{} h x {} = {}",
                    quote.duration_hours.normalize(),
                    quote.rate_per_hour,
                    quote.display_total()
                ),
                None => println!(
                    "no quote: end must be after start and the rate must be a non-negative number"
                ),
            }
            Ok(())
        }
        Command::Attendees { count, capacity } => {
            let form = Arc::new(
                InMemoryForm::new()
                    .with(FieldId::AttendeesCount, count)
                    .with(FieldId::HallCapacity, capacity),
            );
            let controller = BookingFormController::new(form.clone(), messages);

            controller.on_attendees_input();
            match form.validity(FieldId::AttendeesCount) {
                Some(message) => println!("invalid: {message}"),
                None => println!("ok"),
            }
            Ok(())
        }
        Command::Search => {
            let base_url = config.base_url.clone();
            let debouncer = SearchDebouncer::new(config.search_debounce, move |query| {
                println!("{}", search_url(&base_url, &query));
            });
            let stdin = tokio::io::BufReader::new(tokio::io::stdin());
            drive_search(stdin, &debouncer).await?;
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_flags_override_config() {
        // テスト項目: コマンドラインの指定が環境変数由来の設定を上書きする
        // given (前提条件):
        let cli = Cli::parse_from([
            "hallbook-client",
            "--base-url",
            "https://halls.example",
            "--timeout-secs",
            "3",
            "--locale",
            "en",
            "search",
        ]);
        let base = ClientConfig {
            csrf_cookie: "XSRF-TOKEN".to_string(),
            ..ClientConfig::default()
        };

        // when (操作):
        let config = resolve_config(&cli, base).unwrap();

        // then (期待する結果):
        assert_eq!(config.base_url, "https://halls.example");
        assert_eq!(config.timeout, Duration::from_secs(3));
        assert_eq!(config.locale, Locale::En);
        assert_eq!(config.csrf_cookie, "XSRF-TOKEN");
    }

    #[test]
    fn test_config_kept_without_flags() {
        // テスト項目: フラグがなければ設定はそのまま
        let cli = Cli::parse_from(["hallbook-client", "search"]);
        let base = ClientConfig {
            base_url: "http://env.example".to_string(),
            locale: Locale::En,
            ..ClientConfig::default()
        };

        let config = resolve_config(&cli, base.clone()).unwrap();

        assert_eq!(config, base);
    }

    #[test]
    fn test_unknown_locale_flag_is_rejected() {
        // テスト項目: 未対応のロケール指定はエラーになる
        let cli = Cli::parse_from(["hallbook-client", "--locale", "de", "search"]);

        let result = resolve_config(&cli, ClientConfig::default());

        assert!(matches!(result, Err(ClientError::Locale(_))));
    }
}
