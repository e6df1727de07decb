//! Text codecs for the two fitting formats. Both decoders share the
//! line-splitting rules here and the post-parse pass in [`classify`];
//! they differ only in how section membership is determined.

pub mod classify;
pub mod eft;
pub mod eft2;

use thiserror::Error;

/// Fatal decode failures. Line-level anomalies (missing charge, missing
/// quantity, extra commas) are tolerated with defaults and never surface
/// here, so one noisy line does not abort a whole fit.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("input contains no fitting data")]
    EmptyInput,
    #[error("malformed fit header: {0:?}")]
    MalformedHeader(String),
    #[error("unknown section heading: {0:?}")]
    UnknownSection(String),
}

/// Split `name, charge` on the first comma. No comma, or an empty second
/// field, means no charge.
pub(crate) fn split_module_line(line: &str) -> (String, Option<String>) {
    match line.split_once(',') {
        Some((name, charge)) => {
            let charge = charge.trim();
            if charge.is_empty() {
                (name.trim().to_string(), None)
            } else {
                (name.trim().to_string(), Some(charge.to_string()))
            }
        }
        None => (line.trim().to_string(), None),
    }
}

/// Shared quantity rule for drones, fighters and cargo: a trailing
/// ` x<digits>` suffix or a trailing comma-separated digit token is the
/// quantity; anything else is part of the name and the quantity is 1.
pub(crate) fn split_quantity_line(line: &str) -> (String, u32) {
    let line = line.trim();
    if let Some((name, token)) = line.rsplit_once(" x") {
        if let Some(qty) = parse_quantity_token(token) {
            return (name.trim().to_string(), qty);
        }
    }
    if let Some((name, token)) = line.rsplit_once(',') {
        if let Some(qty) = parse_quantity_token(token) {
            return (name.trim().to_string(), qty);
        }
    }
    (line.to_string(), 1)
}

fn parse_quantity_token(token: &str) -> Option<u32> {
    let token = token.trim();
    if token.is_empty() || !token.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    match token.parse::<u32>() {
        Ok(0) => {
            tracing::warn!(token, "zero quantity, defaulting to 1");
            Some(1)
        }
        Ok(qty) => Some(qty),
        Err(_) => {
            tracing::warn!(token, "unparsable quantity token, defaulting to 1");
            Some(1)
        }
    }
}
