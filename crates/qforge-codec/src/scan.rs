//! Shared lenient line-scanning driver for the dialect parsers.
//!
//! Each dialect module supplies a classifier that matches one lexed
//! line; this driver owns the loop, the skip diagnostics, and the final
//! circuit assembly. Recognized gates are staged in source order and
//! placed one per column, so a re-generated circuit preserves gate
//! order regardless of how the source spaced things out.

use tracing::debug;

use qforge_ir::{Circuit, Dialect, GateKind, GateParams};

use crate::error::{Diagnostic, ParseError, ParseResult};
use crate::lexer::Cursor;
use crate::Parsed;

/// What a dialect classifier made of one line.
pub(crate) enum LineMatch {
    /// A register declaration fixing the qubit count.
    Register(usize),
    /// A recognized gate application.
    Gate {
        kind: GateKind,
        qubit: usize,
        /// Second operand of a two-qubit gate, used for the adjacency
        /// check; `None` for single-qubit gates.
        second: Option<usize>,
        angle: Option<f64>,
    },
    /// Recognized boilerplate carrying no circuit content.
    Preamble,
    /// Nothing this dialect understands.
    NoMatch,
}

struct StagedGate {
    kind: GateKind,
    qubit: usize,
    angle: Option<f64>,
    line: usize,
    text: String,
}

/// Scan `source` line by line with a dialect-specific classifier and
/// assemble the resulting circuit.
pub(crate) fn scan(
    dialect: Dialect,
    register_hint: &'static str,
    source: &str,
    mut classify: impl FnMut(&mut Cursor) -> LineMatch,
) -> ParseResult<Parsed> {
    let mut num_qubits: Option<usize> = None;
    let mut staged: Vec<StagedGate> = Vec::new();
    let mut ignored: Vec<Diagnostic> = Vec::new();

    for (idx, raw) in source.lines().enumerate() {
        let line_no = idx + 1;
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') || line.starts_with("//") {
            continue;
        }

        let Some(mut cursor) = Cursor::lex(line) else {
            ignored.push(Diagnostic {
                line: line_no,
                text: line.to_string(),
                note: "unrecognized line",
            });
            continue;
        };

        match classify(&mut cursor) {
            LineMatch::Register(n) => num_qubits = Some(n),
            LineMatch::Gate {
                kind,
                qubit,
                second,
                angle,
            } => {
                // Two-qubit gates act on (q, q+1) in the grid model.
                if let Some(second) = second {
                    if second != qubit + 1 {
                        ignored.push(Diagnostic {
                            line: line_no,
                            text: line.to_string(),
                            note: "two-qubit gate operands are not adjacent",
                        });
                        continue;
                    }
                }
                staged.push(StagedGate {
                    kind,
                    qubit,
                    angle,
                    line: line_no,
                    text: line.to_string(),
                });
            }
            LineMatch::Preamble => {}
            LineMatch::NoMatch => ignored.push(Diagnostic {
                line: line_no,
                text: line.to_string(),
                note: "unrecognized line",
            }),
        }
    }

    let num_qubits = num_qubits.ok_or(ParseError::MissingRegister {
        dialect,
        hint: register_hint,
    })?;

    let mut circuit = Circuit::new(num_qubits)?;
    let mut column = 0;
    for gate in staged {
        let params = gate.angle.map(GateParams::angle).unwrap_or_default();
        match circuit.add_gate(gate.kind, gate.qubit, column, params) {
            Ok(()) => column += 1,
            Err(_) => ignored.push(Diagnostic {
                line: gate.line,
                text: gate.text,
                note: "gate does not fit the declared register",
            }),
        }
    }

    debug!(
        %dialect,
        num_qubits,
        gates = circuit.gate_count(),
        skipped = ignored.len(),
        "parsed circuit"
    );

    Ok(Parsed { circuit, ignored })
}
