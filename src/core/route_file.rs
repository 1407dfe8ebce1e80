//! Reads a written route file back into batches.
//!
//! Route lines carry no delimiters, so stop counts assume three-letter
//! IATA codes: `LAXSFOOAKMSP` is LAX -> SFO -> OAK -> MSP, 4 stops.
//! Route lines must be ASCII so that the width is the same in bytes and
//! characters.

use crate::utils::error::{Result, RouteGenError};
use regex::Regex;
use std::sync::LazyLock;

pub const IATA_CODE_WIDTH: usize = 3;

static HEADER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\S+) (\d+)$").unwrap());

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedRoute {
    /// The full line, origin included. Always ASCII.
    codes: String,
}

impl ParsedRoute {
    pub fn codes(&self) -> &str {
        &self.codes
    }

    pub fn num_stops(&self) -> usize {
        self.codes.len() / IATA_CODE_WIDTH
    }

    /// Stops after the origin, split at the IATA width.
    pub fn stops(&self) -> Vec<&str> {
        (IATA_CODE_WIDTH..self.codes.len())
            .step_by(IATA_CODE_WIDTH)
            .map(|start| &self.codes[start..(start + IATA_CODE_WIDTH).min(self.codes.len())])
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedBatch {
    pub origin: String,
    pub routes: Vec<ParsedRoute>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RouteFile {
    pub batches: Vec<ParsedBatch>,
}

impl RouteFile {
    pub fn parse(content: &str) -> Result<Self> {
        let mut batches = Vec::new();
        let mut lines = content.lines().enumerate().map(|(i, line)| (i + 1, line));

        while let Some((line_no, header)) = lines.next() {
            let caps = HEADER_RE
                .captures(header)
                .ok_or_else(|| RouteGenError::RouteFileError {
                    line: line_no,
                    reason: format!("expected '<origin> <count>' header, found '{}'", header),
                })?;
            let origin = caps[1].to_string();
            let count: usize = caps[2].parse().map_err(|_| RouteGenError::RouteFileError {
                line: line_no,
                reason: format!("route count '{}' is out of range", &caps[2]),
            })?;

            // count comes from the file, so nothing is reserved up front
            let mut routes = Vec::new();
            for expected in 0..count {
                let (route_line_no, line) =
                    lines.next().ok_or_else(|| RouteGenError::RouteFileError {
                        line: line_no,
                        reason: format!(
                            "header announces {} routes for {} but only {} follow",
                            count, origin, expected
                        ),
                    })?;
                if !line.is_ascii() {
                    return Err(RouteGenError::RouteFileError {
                        line: route_line_no,
                        reason: format!("route '{}' contains non-ASCII characters", line),
                    });
                }
                if !line.starts_with(origin.as_str()) {
                    return Err(RouteGenError::RouteFileError {
                        line: route_line_no,
                        reason: format!("route '{}' does not start with origin {}", line, origin),
                    });
                }
                routes.push(ParsedRoute {
                    codes: line.to_string(),
                });
            }

            batches.push(ParsedBatch { origin, routes });
        }

        Ok(Self { batches })
    }

    pub fn total_routes(&self) -> usize {
        self.batches.iter().map(|b| b.routes.len()).sum()
    }
}
