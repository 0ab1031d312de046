use serde::Serialize;
use zmb_config::GeneralConfig;
use zmb_core::responses::PhoneValidationResponse;
use zmb_core::validate;
use zmb_i18n::Translator;
use zmb_ui::OtpInput;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::ValidateCommands;
use crate::context::{AppContext, describe_validation};
use crate::output::output;

#[derive(Debug, Serialize, PartialEq, Eq)]
struct OtpValidationResponse {
    input: String,
    length: usize,
    valid: bool,
    code: Option<String>,
}

/// Handle `zmb validate`. Never touches the network.
pub fn handle(action: &ValidateCommands, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    match action {
        ValidateCommands::Phone { value } => {
            output(&check_phone(value, &ctx.translator), flags.format)
        }
        ValidateCommands::Otp { value, length } => {
            let length = otp_length(*length, &ctx.config.general);
            output(&check_otp(value, length), flags.format)
        }
    }
}

/// `--length` wins over `general.otp_length`.
fn otp_length(flag: Option<usize>, general: &GeneralConfig) -> usize {
    flag.unwrap_or(general.otp_length)
}

fn check_phone(value: &str, translator: &Translator) -> PhoneValidationResponse {
    match validate::phone(value) {
        Ok(normalized) => PhoneValidationResponse {
            input: value.to_string(),
            valid: true,
            normalized: Some(normalized),
            error: None,
        },
        Err(error) => PhoneValidationResponse {
            input: value.to_string(),
            valid: false,
            normalized: None,
            error: Some(describe_validation(translator, &error)),
        },
    }
}

/// Paste `value` into a blank code input. Separators are dropped the way the
/// input drops them; surplus digits make the code invalid.
fn check_otp(value: &str, length: usize) -> OtpValidationResponse {
    let mut input = OtpInput::new(length);
    input.paste(value);
    let digits = value.chars().filter(char::is_ascii_digit).count();
    let code = input.code().filter(|_| digits == input.len());

    OtpValidationResponse {
        input: value.to_string(),
        length: input.len(),
        valid: code.is_some(),
        code,
    }
}
