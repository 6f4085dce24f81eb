use crate::case::CaseConvention;
use crate::cli::output::OutputFormat;

/// Settings for the command-line front end. The conversion functions
/// themselves take no configuration.
#[derive(Debug, Clone)]
pub struct Config {
    pub convention: CaseConvention,
    pub all_conventions: bool,
    pub format: OutputFormat,
    pub color: bool,
    pub show_tokens: bool,
    pub fail_on_invalid: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            convention: CaseConvention::Camel,
            all_conventions: false,
            format: OutputFormat::Text,
            color: true,
            show_tokens: false,
            fail_on_invalid: true,
        }
    }
}

/// Values supplied on the command line or through `CASECONV_*` variables.
/// `None` and `false` mean "not given".
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub convention: Option<CaseConvention>,
    pub all_conventions: bool,
    pub format: Option<OutputFormat>,
    pub no_color: bool,
    pub show_tokens: bool,
    pub no_fail: bool,
}

impl Config {
    /// Priority: CLI args > environment > defaults
    pub fn load(overrides: Overrides) -> Self {
        let mut config = Self::default();

        if std::env::var_os("NO_COLOR").is_some() {
            config.color = false;
        }

        config = config.merge(overrides);
        tracing::debug!(?config, "resolved configuration");
        config
    }

    fn merge(mut self, other: Overrides) -> Self {
        if let Some(convention) = other.convention {
            self.convention = convention;
        }
        if let Some(format) = other.format {
            self.format = format;
        }
        if other.all_conventions {
            self.all_conventions = true;
        }
        if other.no_color {
            self.color = false;
        }
        if other.show_tokens {
            self.show_tokens = true;
        }
        if other.no_fail {
            self.fail_on_invalid = false;
        }
        self
    }

    /// Conventions to apply to every input, in output order.
    pub fn conventions(&self) -> Vec<CaseConvention> {
        if self.all_conventions {
            CaseConvention::ALL.to_vec()
        } else {
            vec![self.convention]
        }
    }
}
