//! Cirq (Python) generator and parser.
//!
//! Generated programs name qubits `q0..qN` as `cirq.GridQubit(i, 0)`
//! and append one operation per line. There is no explicit register
//! declaration in Cirq, so the parser recovers the qubit count from the
//! number of `GridQubit` bindings.

use qforge_ir::catalog::token_map;
use qforge_ir::{Circuit, Dialect, Operands};

use crate::emit::Emitter;
use crate::error::ParseResult;
use crate::lexer::{Cursor, Token};
use crate::scan::{scan, LineMatch};
use crate::Parsed;

/// Render a circuit as a Cirq Python program.
pub fn generate(circuit: &Circuit) -> String {
    let n = circuit.num_qubits();
    let mut e = Emitter::new();
    e.line("import cirq");
    e.blank();
    e.line("# Create qubits");
    for i in 0..n {
        e.line(&format!("q{i} = cirq.GridQubit({i}, 0)"));
    }
    e.blank();
    e.line("# Create circuit");
    e.line("circuit = cirq.Circuit()");
    e.blank();

    for gate in circuit.ordered_gates() {
        let token = gate.kind.token(Dialect::Cirq);
        match gate.operands() {
            Operands::Pair { control, target } => {
                e.line(&format!(
                    "circuit.append(cirq.{token}(q{control}, q{target}))"
                ));
            }
            Operands::Single(qubit) => {
                // Measurement shares the plain call shape, cirq.measure(qN).
                if gate.kind.is_rotation() {
                    e.line(&format!(
                        "circuit.append(cirq.{token}({})(q{qubit}))",
                        gate.angle()
                    ));
                } else {
                    e.line(&format!("circuit.append(cirq.{token}(q{qubit}))"));
                }
            }
        }
    }
    e.finish()
}

/// A `qN` qubit binding.
fn qubit_ident(cursor: &mut Cursor) -> Option<usize> {
    let name = cursor.ident()?;
    name.strip_prefix('q')?.parse().ok()
}

/// Parse a Cirq Python program back into a circuit.
pub fn parse(source: &str) -> ParseResult<Parsed> {
    let tokens = token_map(Dialect::Cirq);
    let mut declared = 0usize;
    scan(
        Dialect::Cirq,
        "q0 = cirq.GridQubit(0, 0)",
        source,
        move |cursor| {
            let Some(first) = cursor.ident() else {
                return LineMatch::NoMatch;
            };
            if first == "import" || first == "from" {
                return LineMatch::Preamble;
            }

            if cursor.eat(&Token::Eq) {
                if !cursor.eat_ident("cirq") || !cursor.eat(&Token::Dot) {
                    return LineMatch::NoMatch;
                }
                if cursor.eat_ident("GridQubit") {
                    // Each binding line adds one qubit.
                    declared += 1;
                    return LineMatch::Register(declared);
                }
                if cursor.eat_ident("Circuit") {
                    return LineMatch::Preamble;
                }
                return LineMatch::NoMatch;
            }

            // circuit.append(cirq.<token>...)
            if first != "circuit"
                || !cursor.eat(&Token::Dot)
                || !cursor.eat_ident("append")
                || !cursor.eat(&Token::LParen)
                || !cursor.eat_ident("cirq")
                || !cursor.eat(&Token::Dot)
            {
                return LineMatch::NoMatch;
            }
            let Some(name) = cursor.ident() else {
                return LineMatch::NoMatch;
            };
            let Some(&kind) = tokens.get(name.as_str()) else {
                return LineMatch::NoMatch;
            };

            if kind.is_rotation() {
                // cirq.rx(angle)(qN)
                if !cursor.eat(&Token::LParen) {
                    return LineMatch::NoMatch;
                }
                let Some(angle) = cursor.angle() else {
                    return LineMatch::NoMatch;
                };
                if !cursor.eat(&Token::RParen) || !cursor.eat(&Token::LParen) {
                    return LineMatch::NoMatch;
                }
                match qubit_ident(cursor) {
                    Some(qubit) => LineMatch::Gate {
                        kind,
                        qubit,
                        second: None,
                        angle: Some(angle),
                    },
                    None => LineMatch::NoMatch,
                }
            } else if kind.num_qubits() == 2 {
                // cirq.CNOT(qI, qJ)
                if !cursor.eat(&Token::LParen) {
                    return LineMatch::NoMatch;
                }
                let Some(qubit) = qubit_ident(cursor) else {
                    return LineMatch::NoMatch;
                };
                if !cursor.eat(&Token::Comma) {
                    return LineMatch::NoMatch;
                }
                match qubit_ident(cursor) {
                    Some(second) => LineMatch::Gate {
                        kind,
                        qubit,
                        second: Some(second),
                        angle: None,
                    },
                    None => LineMatch::NoMatch,
                }
            } else {
                // cirq.H(qN) and cirq.measure(qN)
                if !cursor.eat(&Token::LParen) {
                    return LineMatch::NoMatch;
                }
                match qubit_ident(cursor) {
                    Some(qubit) => LineMatch::Gate {
                        kind,
                        qubit,
                        second: None,
                        angle: None,
                    },
                    None => LineMatch::NoMatch,
                }
            }
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use qforge_ir::{GateKind, GateParams};

    #[test]
    fn test_generate_bell() {
        let python = generate(&Circuit::bell().unwrap());
        assert!(python.starts_with("import cirq\n"));
        assert!(python.contains("q0 = cirq.GridQubit(0, 0)\n"));
        assert!(python.contains("q1 = cirq.GridQubit(1, 0)\n"));
        assert!(python.contains("circuit = cirq.Circuit()\n"));
        assert!(python.ends_with(
            "circuit.append(cirq.H(q0))\ncircuit.append(cirq.CNOT(q0, q1))\n"
        ));
    }

    #[test]
    fn test_qubit_count_from_gridqubit_lines() {
        let source = "import cirq\n\
                      q0 = cirq.GridQubit(0, 0)\n\
                      q1 = cirq.GridQubit(1, 0)\n\
                      q2 = cirq.GridQubit(2, 0)\n\
                      circuit = cirq.Circuit()\n\
                      circuit.append(cirq.X(q2))\n";
        let parsed = parse(source).unwrap();
        assert!(parsed.ignored.is_empty());
        assert_eq!(parsed.circuit.num_qubits(), 3);
        assert_eq!(parsed.circuit.gate_count(), 1);
    }

    #[test]
    fn test_parse_rotation_call_shape() {
        let source = "q0 = cirq.GridQubit(0, 0)\n\
                      circuit.append(cirq.rx(0.75)(q0))\n";
        let parsed = parse(source).unwrap();
        let gates = parsed.circuit.ordered_gates();
        assert_eq!(gates[0].kind, GateKind::Rx);
        assert!((gates[0].angle() - 0.75).abs() < 1e-12);
    }

    #[test]
    fn test_parse_own_output_without_diagnostics() {
        let mut circuit = Circuit::new(2).unwrap();
        circuit
            .add_gate(GateKind::H, 0, 0, GateParams::default())
            .unwrap();
        circuit
            .add_gate(GateKind::Cz, 0, 1, GateParams::default())
            .unwrap();
        circuit
            .add_gate(GateKind::Measure, 1, 2, GateParams::default())
            .unwrap();

        let parsed = parse(&generate(&circuit)).unwrap();
        assert!(parsed.ignored.is_empty());
        assert_eq!(parsed.circuit.gate_count(), 3);
        assert_eq!(parsed.circuit.ordered_gates()[2].kind, GateKind::Measure);
    }
}
