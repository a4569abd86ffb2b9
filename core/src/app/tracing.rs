use std::io;

use tracing_subscriber::{EnvFilter, Layer};
use tracing_subscriber::fmt::TestWriter;
use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::{SubscriberInitExt, TryInitError};

/// Environment variable holding the console filter directives, used when no filter is set on the builder.
pub const CONSOLE_LOG_ENV: &str = "OPT_LOG";

#[derive(Default)]
pub struct AppTracingBuilder {
  console_filter: Option<EnvFilter>,
  test_writer: bool,
}
impl AppTracingBuilder {
  pub fn with_console_filter(mut self, console_filter: EnvFilter) -> Self {
    self.console_filter = Some(console_filter);
    self
  }
  pub fn with_console_filter_opt(mut self, console_filter: Option<EnvFilter>) -> Self {
    self.console_filter = console_filter;
    self
  }

  /// Write through libtest's output capturing instead of directly to stderr.
  pub fn with_test_writer(mut self, test_writer: bool) -> Self {
    self.test_writer = test_writer;
    self
  }

  /// Installs the global subscriber. Fails if a global subscriber was already installed, for example by an earlier
  /// test in the same process.
  pub fn build(self) -> Result<AppTracing, TryInitError> {
    #[cfg(feature = "app_env")] {
      crate::app::env::load_dotenv();
    }

    let console_filter = self.console_filter
      .unwrap_or_else(|| EnvFilter::try_from_env(CONSOLE_LOG_ENV).unwrap_or_default());
    AppTracing::new(console_filter, self.test_writer)
  }
}

#[derive(Debug)]
pub struct AppTracing {
  console_filter: String,
}
impl AppTracing {
  fn new(console_filter: EnvFilter, test_writer: bool) -> Result<Self, TryInitError> {
    let directives = console_filter.to_string();

    let writer = if test_writer {
      BoxMakeWriter::new(TestWriter::default())
    } else {
      BoxMakeWriter::new(io::stderr)
    };
    tracing_subscriber::registry()
      .with(
        tracing_subscriber::fmt::layer()
          .with_writer(writer)
          .with_filter(console_filter)
      )
      .try_init()?;
    tracing::debug!(filter = directives, "installed console tracing");

    Ok(Self { console_filter: directives })
  }

  /// Returns the filter directives of the console layer.
  #[inline]
  pub fn console_filter(&self) -> &str { &self.console_filter }
}
