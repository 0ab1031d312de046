use anyhow::Context;
use zmb_api::{ApiClient, Session};
use zmb_config::ZumbaraConfig;
use zmb_core::enums::Language;
use zmb_core::validate::ValidationError;
use zmb_i18n::Translator;
use zmb_ui::{Notice, NoticeLevel, Notices};

use crate::cli::GlobalFlags;

/// Shared application resources initialized once at startup.
pub struct AppContext {
    pub config: ZumbaraConfig,
    pub api: ApiClient,
    pub translator: Translator,
    pub notices: Notices,
}

impl AppContext {
    /// Build the client and translator from config. Does not touch the network.
    pub fn init(config: ZumbaraConfig, flags: &GlobalFlags) -> anyhow::Result<Self> {
        let language = resolve_language(flags.lang.as_deref(), config.general.language)?;
        let translator = Translator::builtin(language).context("failed to load dictionaries")?;

        let session = Session::bearer(config.session.token.clone());
        let api = ApiClient::new(&config.api, session).context("failed to build HTTP client")?;
        tracing::debug!(
            base_url = api.base_url(),
            signed_in = api.session().is_signed_in(),
            %language,
            "client ready"
        );

        Ok(Self {
            config,
            api,
            translator,
            notices: Notices::default(),
        })
    }

    /// Page size with precedence: command arg -> global flag -> `general.default_limit`.
    #[must_use]
    pub fn limit(&self, local: Option<u32>, flags: &GlobalFlags) -> u32 {
        local
            .or(flags.limit)
            .unwrap_or(self.config.general.default_limit)
    }

    /// Print queued notices to stderr in the active language. Quiet mode
    /// keeps only errors.
    pub fn flush_notices(&self, flags: &GlobalFlags) {
        for notice in self.notices.drain() {
            if flags.quiet && notice.level != NoticeLevel::Error {
                continue;
            }
            eprintln!("{}", describe_notice(&self.translator, &notice, flags.verbose));
        }
    }
}

/// `--lang` wins over the configured language.
pub fn resolve_language(flag: Option<&str>, configured: Language) -> anyhow::Result<Language> {
    match flag {
        Some(code) => code
            .parse::<Language>()
            .map_err(|error| anyhow::anyhow!("invalid --lang '{code}': {error}")),
        None => Ok(configured),
    }
}

/// A form validation failure in the active language.
pub fn describe_validation(translator: &Translator, error: &ValidationError) -> String {
    let args = error.args();
    let args = args
        .iter()
        .map(|(name, value)| (*name, value.as_str()))
        .collect::<Vec<_>>();
    translator.format(error.key(), &args)
}

/// One notice as a single translated line.
pub fn describe_notice(translator: &Translator, notice: &Notice, verbose: bool) -> String {
    let args = notice
        .args
        .iter()
        .map(|(name, value)| (name.as_str(), value.as_str()))
        .collect::<Vec<_>>();
    let text = translator.format(&notice.key, &args);
    let marker = match notice.level {
        NoticeLevel::Info => "i",
        NoticeLevel::Success => "✓",
        NoticeLevel::Error => "✗",
    };
    match (&notice.detail, verbose) {
        (Some(detail), true) => format!("{marker} {text} ({detail})"),
        _ => format!("{marker} {text}"),
    }
}
