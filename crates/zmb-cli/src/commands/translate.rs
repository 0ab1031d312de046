use serde::Serialize;
use zmb_core::enums::Language;
use zmb_core::responses::TranslationResponse;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::TranslateArgs;
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize)]
struct MissingKeysResponse {
    language: Language,
    missing: Vec<String>,
}

/// Handle `zmb translate`.
pub fn handle(args: &TranslateArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let translator = &ctx.translator;
    let language = translator.language();

    if args.missing {
        return output(
            &MissingKeysResponse {
                language,
                missing: translator.missing_keys(language),
            },
            flags.format,
        );
    }

    let Some(key) = args.key.as_deref() else {
        anyhow::bail!("pass a translation key (e.g. nav.home) or --missing");
    };
    let resolved = translator.resolve(key);
    output(
        &TranslationResponse {
            key: key.to_string(),
            language,
            direction: translator.direction(),
            text: resolved.text.to_string(),
            resolved_from: resolved.source,
        },
        flags.format,
    )
}
