//! Endpoint path construction.

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

/// Bytes left untouched by JavaScript's `encodeURIComponent`.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

pub(crate) const LOGIN: &str = "/auth/login";
pub(crate) const REGISTER: &str = "/auth/register";

pub(crate) fn encode_component(raw: &str) -> String {
    utf8_percent_encode(raw, URI_COMPONENT).to_string()
}

pub(crate) fn citizen_search(query: &str) -> String {
    format!("/citizens/search?q={}", encode_component(query))
}

pub(crate) fn citizen(id: &str) -> String {
    format!("/citizens/{id}")
}
