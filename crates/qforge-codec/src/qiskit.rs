//! Qiskit (Python) generator and parser.
//!
//! Generated programs build a `QuantumCircuit` over a quantum register
//! `qr` and classical register `cr`. The parser anchors on the
//! `QuantumRegister(n, ...)` declaration and recognizes the
//! `circuit.<method>(...)` call shape.

use qforge_ir::catalog::token_map;
use qforge_ir::{Circuit, Dialect, GateKind, Operands};

use crate::emit::Emitter;
use crate::error::ParseResult;
use crate::lexer::{Cursor, Token};
use crate::scan::{scan, LineMatch};
use crate::Parsed;

/// Render a circuit as a Qiskit Python program.
pub fn generate(circuit: &Circuit) -> String {
    let n = circuit.num_qubits();
    let mut e = Emitter::new();
    e.line("from qiskit import QuantumCircuit, QuantumRegister, ClassicalRegister");
    e.blank();
    e.line("# Create quantum circuit");
    e.line(&format!("qr = QuantumRegister({n}, 'q')"));
    e.line(&format!("cr = ClassicalRegister({n}, 'c')"));
    e.line("circuit = QuantumCircuit(qr, cr)");
    e.blank();

    for gate in circuit.ordered_gates() {
        let token = gate.kind.token(Dialect::Qiskit);
        match gate.operands() {
            Operands::Pair { control, target } => {
                e.line(&format!("circuit.{token}(qr[{control}], qr[{target}])"));
            }
            Operands::Single(qubit) => {
                if gate.kind == GateKind::Measure {
                    e.line(&format!("circuit.{token}(qr[{qubit}], cr[{qubit}])"));
                } else if gate.kind.is_rotation() {
                    e.line(&format!("circuit.{token}({}, qr[{qubit}])", gate.angle()));
                } else {
                    e.line(&format!("circuit.{token}(qr[{qubit}])"));
                }
            }
        }
    }
    e.finish()
}

/// Parse a Qiskit Python program back into a circuit.
pub fn parse(source: &str) -> ParseResult<Parsed> {
    let tokens = token_map(Dialect::Qiskit);
    scan(
        Dialect::Qiskit,
        "qr = QuantumRegister(3, 'q')",
        source,
        |cursor| {
            let Some(first) = cursor.ident() else {
                return LineMatch::NoMatch;
            };
            if first == "from" || first == "import" {
                return LineMatch::Preamble;
            }

            if cursor.eat(&Token::Eq) {
                // qr = QuantumRegister(n, 'q') and friends.
                if cursor.eat_ident("QuantumRegister") && cursor.eat(&Token::LParen) {
                    return match cursor.int() {
                        Some(n) => LineMatch::Register(n),
                        None => LineMatch::NoMatch,
                    };
                }
                if cursor.eat_ident("ClassicalRegister") || cursor.eat_ident("QuantumCircuit") {
                    return LineMatch::Preamble;
                }
                return LineMatch::NoMatch;
            }

            if first != "circuit" || !cursor.eat(&Token::Dot) {
                return LineMatch::NoMatch;
            }
            let Some(method) = cursor.ident() else {
                return LineMatch::NoMatch;
            };
            let Some(&kind) = tokens.get(method.as_str()) else {
                return LineMatch::NoMatch;
            };
            if !cursor.eat(&Token::LParen) {
                return LineMatch::NoMatch;
            }

            if kind == GateKind::Measure {
                // circuit.measure(qr[i], cr[i])
                match cursor.index_ref("qr") {
                    Some(qubit) => LineMatch::Gate {
                        kind,
                        qubit,
                        second: None,
                        angle: None,
                    },
                    None => LineMatch::NoMatch,
                }
            } else if kind.is_rotation() {
                // circuit.rx(angle, qr[i])
                let Some(angle) = cursor.angle() else {
                    return LineMatch::NoMatch;
                };
                if !cursor.eat(&Token::Comma) {
                    return LineMatch::NoMatch;
                }
                match cursor.index_ref("qr") {
                    Some(qubit) => LineMatch::Gate {
                        kind,
                        qubit,
                        second: None,
                        angle: Some(angle),
                    },
                    None => LineMatch::NoMatch,
                }
            } else if kind.num_qubits() == 2 {
                // circuit.cx(qr[i], qr[j])
                let Some(qubit) = cursor.index_ref("qr") else {
                    return LineMatch::NoMatch;
                };
                if !cursor.eat(&Token::Comma) {
                    return LineMatch::NoMatch;
                }
                match cursor.index_ref("qr") {
                    Some(second) => LineMatch::Gate {
                        kind,
                        qubit,
                        second: Some(second),
                        angle: None,
                    },
                    None => LineMatch::NoMatch,
                }
            } else {
                // circuit.h(qr[i])
                match cursor.index_ref("qr") {
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
    use qforge_ir::GateParams;

    #[test]
    fn test_generate_bell() {
        let python = generate(&Circuit::bell().unwrap());
        assert!(python.starts_with(
            "from qiskit import QuantumCircuit, QuantumRegister, ClassicalRegister\n"
        ));
        assert!(python.contains("qr = QuantumRegister(2, 'q')\n"));
        assert!(python.contains("circuit = QuantumCircuit(qr, cr)\n"));
        assert!(python.ends_with("circuit.h(qr[0])\ncircuit.cx(qr[0], qr[1])\n"));
    }

    #[test]
    fn test_parse_own_output_without_diagnostics() {
        let mut circuit = Circuit::new(3).unwrap();
        circuit
            .add_gate(GateKind::Ry, 1, 0, GateParams::angle(-0.25))
            .unwrap();
        circuit
            .add_gate(GateKind::Swap, 1, 1, GateParams::default())
            .unwrap();
        circuit
            .add_gate(GateKind::Measure, 2, 2, GateParams::default())
            .unwrap();

        let parsed = parse(&generate(&circuit)).unwrap();
        assert!(parsed.ignored.is_empty());
        assert_eq!(parsed.circuit.num_qubits(), 3);
        let gates = parsed.circuit.ordered_gates();
        assert_eq!(gates.len(), 3);
        assert_eq!(gates[0].kind, GateKind::Ry);
        assert!((gates[0].angle() + 0.25).abs() < 1e-12);
        assert_eq!(gates[1].kind, GateKind::Swap);
        assert_eq!(gates[2].kind, GateKind::Measure);
        assert_eq!(gates[2].qubit, 2);
    }

    #[test]
    fn test_parse_skips_unknown_methods() {
        let source = "qr = QuantumRegister(2, 'q')\n\
                      circuit.h(qr[0])\n\
                      circuit.barrier()\n";
        let parsed = parse(source).unwrap();
        assert_eq!(parsed.circuit.gate_count(), 1);
        assert_eq!(parsed.ignored.len(), 1);
    }

    #[test]
    fn test_parse_missing_register() {
        assert!(matches!(
            parse("circuit.h(qr[0])\n"),
            Err(crate::ParseError::MissingRegister { .. })
        ));
    }
}
