//! Quil generator and parser.
//!
//! Quil addresses qubits by bare indices, so the only declaration is
//! the classical readout memory, `DECLARE mem BIT[n]`. The parser uses
//! it to recover the qubit count.

use qforge_ir::catalog::token_map;
use qforge_ir::{Circuit, Dialect, GateKind, Operands};

use crate::emit::Emitter;
use crate::error::ParseResult;
use crate::lexer::{Cursor, Token};
use crate::scan::{scan, LineMatch};
use crate::Parsed;

/// Render a circuit as a Quil program.
pub fn generate(circuit: &Circuit) -> String {
    let n = circuit.num_qubits();
    let mut e = Emitter::new();
    e.line("# Quantum circuit in Quil");
    e.line(&format!("DECLARE mem BIT[{n}]"));
    e.blank();

    for gate in circuit.ordered_gates() {
        let token = gate.kind.token(Dialect::Quil);
        match gate.operands() {
            Operands::Pair { control, target } => {
                e.line(&format!("{token} {control} {target}"));
            }
            Operands::Single(qubit) => {
                if gate.kind == GateKind::Measure {
                    e.line(&format!("{token} {qubit} mem[{qubit}]"));
                } else if gate.kind.is_rotation() {
                    e.line(&format!("{token}({}) {qubit}", gate.angle()));
                } else {
                    e.line(&format!("{token} {qubit}"));
                }
            }
        }
    }
    e.finish()
}

/// Parse a Quil program back into a circuit.
pub fn parse(source: &str) -> ParseResult<Parsed> {
    let tokens = token_map(Dialect::Quil);
    scan(Dialect::Quil, "DECLARE mem BIT[3]", source, |cursor| {
        if cursor.eat_ident("DECLARE") {
            if cursor.eat_ident("mem") && cursor.eat_ident("BIT") && cursor.eat(&Token::LBracket)
            {
                if let Some(n) = cursor.int() {
                    return LineMatch::Register(n);
                }
            }
            return LineMatch::NoMatch;
        }

        let Some(name) = cursor.ident() else {
            return LineMatch::NoMatch;
        };
        let Some(&kind) = tokens.get(name.as_str()) else {
            return LineMatch::NoMatch;
        };

        if kind == GateKind::Measure {
            // MEASURE i mem[i]
            match cursor.int() {
                Some(qubit) => LineMatch::Gate {
                    kind,
                    qubit,
                    second: None,
                    angle: None,
                },
                None => LineMatch::NoMatch,
            }
        } else if kind.is_rotation() {
            // RX(angle) i
            if !cursor.eat(&Token::LParen) {
                return LineMatch::NoMatch;
            }
            let Some(angle) = cursor.angle() else {
                return LineMatch::NoMatch;
            };
            if !cursor.eat(&Token::RParen) {
                return LineMatch::NoMatch;
            }
            match cursor.int() {
                Some(qubit) => LineMatch::Gate {
                    kind,
                    qubit,
                    second: None,
                    angle: Some(angle),
                },
                None => LineMatch::NoMatch,
            }
        } else if kind.num_qubits() == 2 {
            // CNOT i j
            let Some(qubit) = cursor.int() else {
                return LineMatch::NoMatch;
            };
            match cursor.int() {
                Some(second) => LineMatch::Gate {
                    kind,
                    qubit,
                    second: Some(second),
                    angle: None,
                },
                None => LineMatch::NoMatch,
            }
        } else {
            // H i
            match cursor.int() {
                Some(qubit) => LineMatch::Gate {
                    kind,
                    qubit,
                    second: None,
                    angle: None,
                },
                None => LineMatch::NoMatch,
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use qforge_ir::GateParams;

    #[test]
    fn test_generate_bell() {
        let quil = generate(&Circuit::bell().unwrap());
        assert_eq!(
            quil,
            "# Quantum circuit in Quil\n\
             DECLARE mem BIT[2]\n\
             \n\
             H 0\n\
             CNOT 0 1\n"
        );
    }

    #[test]
    fn test_generate_measure_and_rotation() {
        let mut circuit = Circuit::new(2).unwrap();
        circuit
            .add_gate(GateKind::Ry, 1, 0, GateParams::angle(0.25))
            .unwrap();
        circuit
            .add_gate(GateKind::Measure, 1, 1, GateParams::default())
            .unwrap();

        let quil = generate(&circuit);
        assert!(quil.contains("RY(0.25) 1\n"));
        assert!(quil.contains("MEASURE 1 mem[1]\n"));
    }

    #[test]
    fn test_parse_own_output_without_diagnostics() {
        let parsed = parse(&generate(&Circuit::ghz(3).unwrap())).unwrap();
        assert!(parsed.ignored.is_empty());
        assert_eq!(parsed.circuit.num_qubits(), 3);
        let gates = parsed.circuit.ordered_gates();
        assert_eq!(gates[0].kind, GateKind::H);
        assert_eq!(gates[1].kind, GateKind::Cx);
        assert_eq!(gates[2].kind, GateKind::Cx);
        assert_eq!(gates[2].qubit, 1);
    }

    #[test]
    fn test_parse_skips_unknown_instruction() {
        let source = "DECLARE mem BIT[2]\nPRAGMA INITIAL_REWIRING\nH 0\n";
        let parsed = parse(source).unwrap();
        assert_eq!(parsed.circuit.gate_count(), 1);
        assert_eq!(parsed.ignored.len(), 1);
    }

    #[test]
    fn test_parse_missing_declare() {
        assert!(matches!(
            parse("H 0\nCNOT 0 1\n"),
            Err(crate::ParseError::MissingRegister { .. })
        ));
    }
}
