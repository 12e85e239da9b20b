//! Shared input validation.
//!
//! `try_validate_input` and `get_values` run the same checks; the former
//! reports the error to the host, the latter logs it and yields nothing.

use crossmod_types::{ProviderError, TokenInput};
use tracing::debug;

use crate::RuntimeContext;

/// Parses `input` and checks that its component is registered.
pub(crate) fn validate_token_input(context: &RuntimeContext, input: Option<&str>) -> Result<TokenInput, ProviderError> {
    let token_input = TokenInput::parse(input)?;
    if !context.registry().contains(token_input.component.as_str()) {
        return Err(ProviderError::UnknownComponent(token_input.component.to_string()));
    }
    Ok(token_input)
}

/// Validated input for value production, or `None` after logging why the
/// input was ignored.
pub(crate) fn accept_token_input(provider: &'static str, context: &RuntimeContext, input: Option<&str>) -> Option<TokenInput> {
    match validate_token_input(context, input) {
        Ok(token_input) => Some(token_input),
        Err(error) => {
            debug!(provider, input = input.unwrap_or_default(), error = %error, "ignoring token input");
            None
        }
    }
}
