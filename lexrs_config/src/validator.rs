//! Assembly and validation of the session configuration.

use lexrs_core::{
    DEFAULT_CONNECT_TIMEOUT_MS, DEFAULT_CONTENT_TYPE, DEFAULT_REGION, DEFAULT_REQUEST_TIMEOUT_MS,
    ErrorCode, LexConfiguration,
};
use tracing::{info, warn};

use crate::source::ParameterSource;

pub const USER_ID_KEY: &str = "lex_configuration/user_id";
pub const BOT_NAME_KEY: &str = "lex_configuration/bot_name";
pub const BOT_ALIAS_KEY: &str = "lex_configuration/bot_alias";
pub const CONTENT_TYPE_KEY: &str = "lex_configuration/content_type";
pub const ACCEPT_TYPE_KEY: &str = "lex_configuration/accept_type";
pub const REGION_KEY: &str = "aws_client_configuration/region";
pub const CONNECT_TIMEOUT_MS_KEY: &str = "aws_client_configuration/connect_timeout_ms";
pub const REQUEST_TIMEOUT_MS_KEY: &str = "aws_client_configuration/request_timeout_ms";

/// Build a complete session configuration from the parameter source.
///
/// Required keys (`user_id`, `bot_name`, `bot_alias`) are checked eagerly in
/// declaration order; the first missing or empty one fails the build and no
/// partial configuration is handed downstream. Optional keys fall back to
/// their documented defaults when absent, but an explicitly empty content or
/// accept type violates the non-empty invariant and is rejected.
pub fn build_configuration(
    params: &dyn ParameterSource,
) -> Result<LexConfiguration, ErrorCode> {
    let user_id = read_required(params, USER_ID_KEY)?;
    let bot_name = read_required(params, BOT_NAME_KEY)?;
    let bot_alias = read_required(params, BOT_ALIAS_KEY)?;

    let content_type = read_defaulted(params, CONTENT_TYPE_KEY, DEFAULT_CONTENT_TYPE)?;
    let accept_type = read_defaulted(params, ACCEPT_TYPE_KEY, DEFAULT_CONTENT_TYPE)?;

    let region = params
        .read_string(REGION_KEY)
        .filter(|value| !value.is_empty())
        .unwrap_or_else(|| DEFAULT_REGION.to_string());

    let connect_timeout_ms = read_timeout(params, CONNECT_TIMEOUT_MS_KEY, DEFAULT_CONNECT_TIMEOUT_MS);
    let request_timeout_ms = read_timeout(params, REQUEST_TIMEOUT_MS_KEY, DEFAULT_REQUEST_TIMEOUT_MS);

    let configuration = LexConfiguration {
        user_id,
        bot_name,
        bot_alias,
        content_type,
        accept_type,
        region,
        connect_timeout_ms,
        request_timeout_ms,
    };
    configuration.validate()?;

    info!(
        "Configuration ready: bot {} (alias {}), user {}",
        configuration.bot_name, configuration.bot_alias, configuration.user_id
    );
    Ok(configuration)
}

fn read_required(params: &dyn ParameterSource, key: &str) -> Result<String, ErrorCode> {
    match params.read_string(key) {
        Some(value) if !value.is_empty() => Ok(value),
        Some(_) => {
            warn!("Required parameter {key} is empty");
            Err(ErrorCode::InvalidLexConfiguration)
        }
        None => {
            warn!("Required parameter {key} is missing");
            Err(ErrorCode::InvalidLexConfiguration)
        }
    }
}

fn read_defaulted(
    params: &dyn ParameterSource,
    key: &str,
    default: &str,
) -> Result<String, ErrorCode> {
    match params.read_string(key) {
        Some(value) if !value.is_empty() => Ok(value),
        Some(_) => {
            warn!("Parameter {key} is set but empty");
            Err(ErrorCode::InvalidLexConfiguration)
        }
        None => Ok(default.to_string()),
    }
}

fn read_timeout(params: &dyn ParameterSource, key: &str, default: u64) -> u64 {
    params
        .read_int(key)
        .and_then(|value| {
            u64::try_from(value)
                .inspect_err(|_| warn!("Ignoring negative value for {key}: {value}"))
                .ok()
        })
        .unwrap_or(default)
}
