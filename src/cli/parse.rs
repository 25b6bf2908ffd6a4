//! Value parsers for CLI arguments.

use trellis_core::format::OutputFormat;
use trellis_core::link::DEFAULT_WEIGHT;

/// One `--edge X:Y[:WEIGHT]` occurrence.
#[derive(Debug, Clone, PartialEq)]
pub struct EdgeSpec {
    pub from: String,
    pub to: String,
    pub weight: f64,
}

/// Parse an edge spec from string
pub fn parse_edge(s: &str) -> std::result::Result<EdgeSpec, String> {
    let parts: Vec<&str> = s.split(':').collect();
    match parts.as_slice() {
        [from, to] if !from.is_empty() && !to.is_empty() => Ok(EdgeSpec {
            from: (*from).to_string(),
            to: (*to).to_string(),
            weight: DEFAULT_WEIGHT,
        }),
        [from, to, weight] if !from.is_empty() && !to.is_empty() => {
            let weight = weight
                .parse::<f64>()
                .map_err(|_| format!("invalid edge weight: {}", weight))?;
            Ok(EdgeSpec {
                from: (*from).to_string(),
                to: (*to).to_string(),
                weight,
            })
        }
        _ => Err(format!("invalid edge spec: {} (expected X:Y or X:Y:WEIGHT)", s)),
    }
}

/// Parse output format from string
pub fn parse_format(s: &str) -> std::result::Result<OutputFormat, String> {
    s.parse::<OutputFormat>().map_err(|e| e.to_string())
}

/// Parse log level from string
pub fn parse_log_level(s: &str) -> std::result::Result<String, String> {
    match s.to_lowercase().as_str() {
        "error" | "warn" | "info" | "debug" | "trace" => Ok(s.to_lowercase()),
        _ => Err(format!(
            "invalid log level: {} (expected: error, warn, info, debug, trace)",
            s
        )),
    }
}
