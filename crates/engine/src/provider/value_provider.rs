//! Value provider protocol shared by every token this crate registers.
//!
//! The host engine depends only on this trait. Once per context refresh it
//! calls [`ValueProvider::update_context`] on every registered provider; for
//! each provider that reports a change it later calls
//! [`ValueProvider::get_values`] with the argument text of every expression
//! referencing the token.

use std::fmt::Debug;

use crossmod_types::ProviderError;

use super::TokenValues;

/// Trait describing a value provider backing one host token.
///
/// Every provider in this crate takes exactly two comma-separated arguments,
/// `ComponentId, Key`.
pub trait ValueProvider: Debug {
    /// Whether the token accepts input arguments.
    fn allows_input(&self) -> bool {
        true
    }

    /// Whether the token produces nothing without input arguments.
    fn requires_input(&self) -> bool {
        true
    }

    /// Whether the token may yield more than one value for `input`.
    fn can_have_multiple_values(&self, input: Option<&str>) -> bool;

    /// Validates `input`, returning the message the host shows to authors.
    ///
    /// Advisory only; [`get_values`](Self::get_values) validates again and
    /// yields nothing for input rejected here.
    fn try_validate_input(&self, input: Option<&str>) -> Result<(), ProviderError>;

    /// Whether the provider's collaborators are initialized.
    fn is_ready(&self) -> bool;

    /// Re-reads every value this provider has produced so far and reports
    /// whether any changed since the previous call.
    fn update_context(&mut self) -> bool;

    /// Values for `input`, resolved from this provider's cache.
    fn get_values(&mut self, input: Option<&str>) -> TokenValues;
}
