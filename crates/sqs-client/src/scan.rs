//! Pattern scanners for the service's XML-like response bodies.
//!
//! The service is consulted for a handful of known tags rather than parsed
//! as a document; this keeps the protocol layer honest about what it
//! actually understands. Every scanner assumes an envelope contains no
//! nested or duplicate tags of the same name - within one envelope the
//! first occurrence wins.

use crate::response::ServiceError;
use once_cell::sync::Lazy;
use regex::Regex;

#[cfg(test)]
#[path = "scan_tests.rs"]
mod tests;

static ERROR_ENVELOPE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?s)<Error>.*?<Code>(.*?)</Code>.*?<Message>(.*?)</Message>.*?</Error>")
        .expect("error envelope pattern is valid")
});

static MESSAGE_ENVELOPE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)<Message>(.*?)</Message>").expect("message pattern is valid"));

static ATTRIBUTE_PAIR: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?s)<Attribute><Name>(.*?)</Name><Value>(.*?)</Value></Attribute>")
        .expect("attribute pattern is valid")
});

/// First error envelope in the body, if any.
///
/// Only the first occurrence is consulted; a body carrying several error
/// envelopes reports the first.
pub fn error_envelope(body: &str) -> Option<ServiceError> {
    ERROR_ENVELOPE.captures(body).map(|caps| ServiceError {
        code: caps[1].to_string(),
        message: caps[2].to_string(),
    })
}

/// Every value of a simple `<Tag>value</Tag>` pair, in document order
pub fn tag_values(body: &str, tag: &str) -> Vec<String> {
    simple_tag_pattern(tag)
        .captures_iter(body)
        .map(|caps| caps[1].to_string())
        .collect()
}

/// First value of a simple tag within a fragment
pub fn first_tag_value(fragment: &str, tag: &str) -> Option<String> {
    simple_tag_pattern(tag)
        .captures(fragment)
        .map(|caps| caps[1].to_string())
}

/// The inner text of each `<Message>` envelope, in document order
pub fn message_envelopes(body: &str) -> Vec<String> {
    MESSAGE_ENVELOPE
        .captures_iter(body)
        .map(|caps| caps[1].to_string())
        .collect()
}

/// Attribute name/value pairs, in document order
pub fn attribute_pairs(body: &str) -> Vec<(String, String)> {
    ATTRIBUTE_PAIR
        .captures_iter(body)
        .map(|caps| (caps[1].to_string(), caps[2].to_string()))
        .collect()
}

fn simple_tag_pattern(tag: &str) -> Regex {
    Regex::new(&format!(r"(?s)<{0}>(.*?)</{0}>", regex::escape(tag)))
        .expect("simple tag pattern is valid")
}
