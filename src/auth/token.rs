//
//  nifty-cli
//  auth/token.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Access Token Input
//!
//! Helpers for accepting an OAuth access token handed over by the host.
//! Tokens are only checked for shape here. Whether Nifty accepts them is
//! decided by the API on the first request.

use std::io::{self, BufRead};

/// Reads a token from standard input.
///
/// Only the first line is read and it is trimmed of surrounding whitespace.
/// This allows piping a token in: `echo "$TOKEN" | nifty --token - props`.
pub fn read_token_from_stdin() -> io::Result<String> {
    let stdin = io::stdin();
    let mut line = String::new();
    stdin.lock().read_line(&mut line)?;

    Ok(line.trim().to_string())
}

/// Validates the format of a token string.
///
/// A token must be non-empty and must not contain whitespace, otherwise it
/// cannot be sent in an `Authorization` header.
///
/// ```rust
/// use nifty_cli::auth::validate_token;
///
/// assert!(validate_token("eyJhbGciOi.abc"));
/// assert!(!validate_token(""));
/// assert!(!validate_token("has space"));
/// assert!(!validate_token("has\nnewline"));
/// ```
pub fn validate_token(token: &str) -> bool {
    !token.is_empty() && !token.chars().any(char::is_whitespace)
}
