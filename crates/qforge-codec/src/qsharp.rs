//! Q# generator and parser.
//!
//! Generated programs wrap the gate sequence in a `RunCircuit`
//! operation over a `using (qubits = Qubit[n])` block. The parser
//! anchors on that allocation for the qubit count and treats the
//! namespace scaffolding as preamble.

use qforge_ir::catalog::token_map;
use qforge_ir::{Circuit, Dialect, Operands};

use crate::emit::Emitter;
use crate::error::ParseResult;
use crate::lexer::{Cursor, Token};
use crate::scan::{scan, LineMatch};
use crate::Parsed;

/// Render a circuit as a Q# program.
pub fn generate(circuit: &Circuit) -> String {
    let n = circuit.num_qubits();
    let mut e = Emitter::new();
    e.line("namespace QuantumCircuit {");
    e.line("    open Microsoft.Quantum.Canon;");
    e.line("    open Microsoft.Quantum.Intrinsic;");
    e.blank();
    e.line("    operation RunCircuit() : Unit {");
    e.line(&format!("        using (qubits = Qubit[{n}]) {{"));

    for gate in circuit.ordered_gates() {
        let token = gate.kind.token(Dialect::QSharp);
        match gate.operands() {
            Operands::Pair { control, target } => {
                e.line(&format!(
                    "            {token}(qubits[{control}], qubits[{target}]);"
                ));
            }
            Operands::Single(qubit) => {
                if gate.kind.is_rotation() {
                    e.line(&format!(
                        "            {token}({}, qubits[{qubit}]);",
                        gate.angle()
                    ));
                } else {
                    e.line(&format!("            {token}(qubits[{qubit}]);"));
                }
            }
        }
    }

    e.line("            ResetAll(qubits);");
    e.line("        }");
    e.line("    }");
    e.line("}");
    e.finish()
}

/// Parse a Q# program back into a circuit.
pub fn parse(source: &str) -> ParseResult<Parsed> {
    let tokens = token_map(Dialect::QSharp);
    scan(
        Dialect::QSharp,
        "using (qubits = Qubit[3]) {",
        source,
        |cursor| {
            // Closing-brace lines of the scaffolding.
            if matches!(cursor.peek(), Some(Token::RBrace)) {
                return LineMatch::Preamble;
            }
            let Some(first) = cursor.ident() else {
                return LineMatch::NoMatch;
            };
            match first.as_str() {
                "namespace" | "open" | "operation" | "ResetAll" => {
                    return LineMatch::Preamble;
                }
                "using" => {
                    // using (qubits = Qubit[n]) {
                    if cursor.eat(&Token::LParen)
                        && cursor.eat_ident("qubits")
                        && cursor.eat(&Token::Eq)
                        && cursor.eat_ident("Qubit")
                        && cursor.eat(&Token::LBracket)
                    {
                        if let Some(n) = cursor.int() {
                            return LineMatch::Register(n);
                        }
                    }
                    return LineMatch::NoMatch;
                }
                _ => {}
            }

            let Some(&kind) = tokens.get(first.as_str()) else {
                return LineMatch::NoMatch;
            };
            if !cursor.eat(&Token::LParen) {
                return LineMatch::NoMatch;
            }

            if kind.is_rotation() {
                // Rx(angle, qubits[i]);
                let Some(angle) = cursor.angle() else {
                    return LineMatch::NoMatch;
                };
                if !cursor.eat(&Token::Comma) {
                    return LineMatch::NoMatch;
                }
                match cursor.index_ref("qubits") {
                    Some(qubit) => LineMatch::Gate {
                        kind,
                        qubit,
                        second: None,
                        angle: Some(angle),
                    },
                    None => LineMatch::NoMatch,
                }
            } else if kind.num_qubits() == 2 {
                // CNOT(qubits[i], qubits[j]);
                let Some(qubit) = cursor.index_ref("qubits") else {
                    return LineMatch::NoMatch;
                };
                if !cursor.eat(&Token::Comma) {
                    return LineMatch::NoMatch;
                }
                match cursor.index_ref("qubits") {
                    Some(second) => LineMatch::Gate {
                        kind,
                        qubit,
                        second: Some(second),
                        angle: None,
                    },
                    None => LineMatch::NoMatch,
                }
            } else {
                // H(qubits[i]); and M(qubits[i]);
                match cursor.index_ref("qubits") {
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
