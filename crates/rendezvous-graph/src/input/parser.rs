//! Reader for the scenario text format.
//!
//! ```text
//! Map:
//! A B
//! B C
//! Avoid:
//! C
//! Peggy:
//! A
//! Sam:
//! C
//! ```
//!
//! Header lines (`Map:`, `Peggy:`, `Sam:`) are skipped without inspection.
//! Edge lines run until the avoid marker; blank edge lines are ignored.

use std::io::BufRead;

use tracing::debug;

use rendezvous_core::config::InputConfig;
use rendezvous_core::errors::{InputError, InputResult};

use super::Scenario;
use crate::graph::LocationGraph;

/// Parse a scenario from any buffered reader.
pub fn parse_scenario<R: BufRead>(reader: R, config: &InputConfig) -> InputResult<Scenario> {
    let mut lines = NumberedLines {
        inner: reader.lines(),
        line_no: 0,
    };
    let avoid_marker = config.effective_avoid_marker();

    lines.next_line("map header")?;

    let mut graph = LocationGraph::new();
    loop {
        let (line_no, line) = lines.next_line(&format!("avoid marker `{avoid_marker}`"))?;
        let trimmed = line.trim();
        if trimmed == avoid_marker {
            break;
        }
        if trimmed.is_empty() {
            continue;
        }
        match trimmed.split_whitespace().collect::<Vec<_>>().as_slice() {
            [from, to] => graph.add_edge(from, to),
            _ => {
                return Err(InputError::MalformedEdge {
                    line: line_no,
                    content: trimmed.to_string(),
                })
            }
        }
    }

    let (_, avoid_line) = lines.next_line("avoid list")?;
    for name in avoid_line.split_whitespace() {
        graph.mark_forbidden(name)?;
    }

    lines.next_line("first agent header")?;
    let first_starts = tokens(&lines.next_line("first agent start list")?.1);
    lines.next_line("second agent header")?;
    let second_starts = tokens(&lines.next_line("second agent start list")?.1);

    debug!(
        locations = graph.location_count(),
        edges = graph.edge_count(),
        forbidden = graph.forbidden_count(),
        first_starts = first_starts.len(),
        second_starts = second_starts.len(),
        "scenario parsed"
    );

    Ok(Scenario {
        graph,
        first_starts,
        second_starts,
    })
}

/// Parse a scenario held in memory.
pub fn parse_scenario_str(input: &str, config: &InputConfig) -> InputResult<Scenario> {
    parse_scenario(input.as_bytes(), config)
}

fn tokens(line: &str) -> Vec<String> {
    line.split_whitespace().map(str::to_string).collect()
}

/// Line iterator that tracks 1-based line numbers and turns EOF into an error.
struct NumberedLines<B> {
    inner: std::io::Lines<B>,
    line_no: usize,
}

impl<B: BufRead> NumberedLines<B> {
    fn next_line(&mut self, expected: &str) -> InputResult<(usize, String)> {
        match self.inner.next() {
            Some(line) => {
                self.line_no += 1;
                Ok((self.line_no, line?))
            }
            None => Err(InputError::UnexpectedEof {
                expected: expected.to_string(),
            }),
        }
    }
}
