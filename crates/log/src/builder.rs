//! Logger builder implementation

use tracing::Subscriber;
use tracing::subscriber::DefaultGuard;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer, Registry};

use crate::config::{Config, DisplayConfig, Format, Writer};
use crate::error::{LogError, LogResult};

type BoxedLayer = Box<dyn Layer<Registry> + Send + Sync + 'static>;

/// Apply the display options shared by every format and box the layer
macro_rules! with_display {
    ($layer:expr, $display:expr) => {{
        let layer = $layer
            .with_ansi($display.colors)
            .with_target($display.target)
            .with_file($display.source)
            .with_line_number($display.source)
            .with_thread_ids($display.thread_ids);
        if $display.time {
            layer.boxed()
        } else {
            layer.without_time().boxed()
        }
    }};
}

/// Logger builder
pub struct LoggerBuilder {
    config: Config,
    writer: Option<BoxMakeWriter>,
}

/// Guard returned by the builder.
///
/// A guard from [`LoggerBuilder::build_scoped`] restores the previous
/// subscriber when dropped; a global logger stays installed for the life of
/// the process.
#[must_use = "dropping a scoped guard uninstalls its subscriber"]
pub struct LoggerGuard {
    scoped: Option<DefaultGuard>,
}

impl LoggerGuard {
    /// Guard that owns nothing
    pub fn noop() -> Self {
        Self { scoped: None }
    }

    /// True when the guard holds a thread-scoped subscriber
    pub fn is_scoped(&self) -> bool {
        self.scoped.is_some()
    }
}

impl std::fmt::Debug for LoggerGuard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoggerGuard")
            .field("scoped", &self.is_scoped())
            .finish()
    }
}

impl LoggerBuilder {
    /// Create builder from config
    #[must_use]
    pub fn from_config(config: Config) -> Self {
        Self {
            config,
            writer: None,
        }
    }

    /// Send output to `writer` instead of the configured stream
    #[must_use]
    pub fn writer<W>(mut self, writer: W) -> Self
    where
        W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
    {
        self.writer = Some(BoxMakeWriter::new(writer));
        self
    }

    /// Build and install the logger as the global default
    ///
    /// # Errors
    ///
    /// Returns error if the filter cannot be parsed or a global subscriber
    /// is already installed.
    pub fn build(self) -> LogResult<LoggerGuard> {
        self.subscriber()?
            .try_init()
            .map_err(|e| LogError::Init(e.to_string()))?;
        Ok(LoggerGuard::noop())
    }

    /// Build and install the logger for the current thread only
    pub fn build_scoped(self) -> LogResult<LoggerGuard> {
        let guard = self.subscriber()?.set_default();
        Ok(LoggerGuard {
            scoped: Some(guard),
        })
    }

    fn subscriber(self) -> LogResult<impl Subscriber + Send + Sync + 'static> {
        let Self { config, writer } = self;

        let filter = EnvFilter::try_new(&config.level)
            .map_err(|e| LogError::filter(&config.level, e.to_string()))?;

        let writer = writer.unwrap_or_else(|| match config.writer {
            Writer::Stderr => BoxMakeWriter::new(std::io::stderr),
            Writer::Stdout => BoxMakeWriter::new(std::io::stdout),
        });

        let fmt_layer = fmt_layer(config.format, &config.display, writer);
        Ok(Registry::default().with(fmt_layer).with(filter))
    }
}

fn fmt_layer(format: Format, display: &DisplayConfig, writer: BoxMakeWriter) -> BoxedLayer {
    let base = tracing_subscriber::fmt::layer().with_writer(writer);
    match format {
        Format::Pretty => with_display!(base.pretty(), display),
        Format::Compact => with_display!(base.compact(), display),
        Format::Json => with_display!(
            base.json()
                .with_current_span(true)
                .with_span_list(display.span_list)
                .flatten_event(display.flatten),
            display
        ),
    }
}
