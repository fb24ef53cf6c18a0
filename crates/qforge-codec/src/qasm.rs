//! OpenQASM 2.0 generator and parser.
//!
//! Generated programs target `qelib1.inc` with one quantum register
//! `q[n]` and one classical register `c[n]`. The parser is lenient:
//! it anchors on the `qreg` declaration for the qubit count and skips
//! lines it does not understand, reporting them as diagnostics.

use qforge_ir::catalog::token_map;
use qforge_ir::{Circuit, Dialect, GateKind, Operands};

use crate::emit::Emitter;
use crate::error::ParseResult;
use crate::lexer::{Cursor, Token};
use crate::scan::{scan, LineMatch};
use crate::Parsed;

/// Render a circuit as an OpenQASM 2.0 program.
pub fn generate(circuit: &Circuit) -> String {
    let n = circuit.num_qubits();
    let mut e = Emitter::new();
    e.line("OPENQASM 2.0;");
    e.line("include \"qelib1.inc\";");
    e.line(&format!("qreg q[{n}];"));
    e.line(&format!("creg c[{n}];"));
    e.blank();

    for gate in circuit.ordered_gates() {
        let token = gate.kind.token(Dialect::Qasm);
        match gate.operands() {
            Operands::Pair { control, target } => {
                e.line(&format!("{token} q[{control}],q[{target}];"));
            }
            Operands::Single(qubit) => {
                if gate.kind == GateKind::Measure {
                    e.line(&format!("{token} q[{qubit}] -> c[{qubit}];"));
                } else if gate.kind.is_rotation() {
                    e.line(&format!("{token}({}) q[{qubit}];", gate.angle()));
                } else {
                    e.line(&format!("{token} q[{qubit}];"));
                }
            }
        }
    }
    e.finish()
}

/// Parse an OpenQASM 2.0 program back into a circuit.
pub fn parse(source: &str) -> ParseResult<Parsed> {
    let tokens = token_map(Dialect::Qasm);
    scan(Dialect::Qasm, "qreg q[3];", source, |cursor| {
        if cursor.eat_ident("qreg") {
            match cursor.index_ref("q") {
                Some(n) => return LineMatch::Register(n),
                None => return LineMatch::NoMatch,
            }
        }
        if cursor.eat_ident("OPENQASM")
            || cursor.eat_ident("include")
            || cursor.eat_ident("creg")
        {
            return LineMatch::Preamble;
        }

        let Some(name) = cursor.ident() else {
            return LineMatch::NoMatch;
        };
        let Some(&kind) = tokens.get(name.as_str()) else {
            return LineMatch::NoMatch;
        };

        if kind == GateKind::Measure {
            // measure q[i] -> c[i];  the classical target is implied.
            match cursor.index_ref("q") {
                Some(qubit) => LineMatch::Gate {
                    kind,
                    qubit,
                    second: None,
                    angle: None,
                },
                None => LineMatch::NoMatch,
            }
        } else if kind.is_rotation() {
            // rx(angle) q[i];
            if !cursor.eat(&Token::LParen) {
                return LineMatch::NoMatch;
            }
            let Some(angle) = cursor.angle() else {
                return LineMatch::NoMatch;
            };
            if !cursor.eat(&Token::RParen) {
                return LineMatch::NoMatch;
            }
            match cursor.index_ref("q") {
                Some(qubit) => LineMatch::Gate {
                    kind,
                    qubit,
                    second: None,
                    angle: Some(angle),
                },
                None => LineMatch::NoMatch,
            }
        } else if kind.num_qubits() == 2 {
            // cx q[i],q[j];
            let Some(qubit) = cursor.index_ref("q") else {
                return LineMatch::NoMatch;
            };
            if !cursor.eat(&Token::Comma) {
                return LineMatch::NoMatch;
            }
            match cursor.index_ref("q") {
                Some(second) => LineMatch::Gate {
                    kind,
                    qubit,
                    second: Some(second),
                    angle: None,
                },
                None => LineMatch::NoMatch,
            }
        } else {
            // h q[i];
            match cursor.index_ref("q") {
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
        let qasm = generate(&Circuit::bell().unwrap());
        assert_eq!(
            qasm,
            "OPENQASM 2.0;\n\
             include \"qelib1.inc\";\n\
             qreg q[2];\n\
             creg c[2];\n\
             \n\
             h q[0];\n\
             cx q[0],q[1];\n"
        );
    }

    #[test]
    fn test_generate_rotation_and_measure() {
        let mut circuit = Circuit::new(1).unwrap();
        circuit
            .add_gate(GateKind::Rx, 0, 0, GateParams::angle(0.5))
            .unwrap();
        circuit
            .add_gate(GateKind::Measure, 0, 1, GateParams::default())
            .unwrap();

        let qasm = generate(&circuit);
        assert!(qasm.contains("rx(0.5) q[0];\n"));
        assert!(qasm.contains("measure q[0] -> c[0];\n"));
    }

    #[test]
    fn test_parse_bell() {
        let source = "OPENQASM 2.0;\n\
                      include \"qelib1.inc\";\n\
                      qreg q[2];\n\
                      creg c[2];\n\
                      \n\
                      h q[0];\n\
                      cx q[0],q[1];\n";
        let parsed = parse(source).unwrap();
        assert!(parsed.ignored.is_empty());
        assert_eq!(parsed.circuit.num_qubits(), 2);
        assert_eq!(parsed.circuit.gate_count(), 2);
        let gates = parsed.circuit.ordered_gates();
        assert_eq!(gates[0].kind, GateKind::H);
        assert_eq!(gates[1].kind, GateKind::Cx);
    }

    #[test]
    fn test_parse_symbolic_angle() {
        let source = "qreg q[1];\nrz(pi/2) q[0];\n";
        let parsed = parse(source).unwrap();
        let gates = parsed.circuit.ordered_gates();
        assert_eq!(gates[0].kind, GateKind::Rz);
        assert!((gates[0].angle() - std::f64::consts::FRAC_PI_2).abs() < 1e-12);
    }

    #[test]
    fn test_parse_missing_register() {
        assert!(matches!(
            parse("h q[0];\n"),
            Err(crate::ParseError::MissingRegister { .. })
        ));
    }

    #[test]
    fn test_parse_collects_diagnostics() {
        let source = "qreg q[2];\nbarrier q;\nh q[0];\ncx q[1],q[0];\n";
        let parsed = parse(source).unwrap();
        // `barrier` is unknown, and the reversed cx is non-adjacent.
        assert_eq!(parsed.ignored.len(), 2);
        assert_eq!(parsed.circuit.gate_count(), 1);
    }

    #[test]
    fn test_parse_gate_beyond_register_is_skipped() {
        let source = "qreg q[1];\nh q[0];\nx q[5];\n";
        let parsed = parse(source).unwrap();
        assert_eq!(parsed.circuit.gate_count(), 1);
        assert_eq!(parsed.ignored.len(), 1);
        assert_eq!(parsed.ignored[0].note, "gate does not fit the declared register");
    }
}
