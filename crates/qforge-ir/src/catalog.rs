//! The gate catalog: unitary matrices and per-dialect tokens.
//!
//! This module is the single source of truth for everything the simulator
//! and the five codecs need to know about a [`GateKind`]: its 2×2 unitary
//! (single-qubit kinds only) and the literal token it uses in each external
//! dialect. Generators and parsers both read this table, which keeps the
//! two directions of every codec in sync by construction.

use std::f64::consts::FRAC_1_SQRT_2;
use std::fmt;
use std::str::FromStr;

use num_complex::Complex64;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::error::CircuitError;
use crate::gate::GateKind;

/// The five external text dialects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Dialect {
    /// OpenQASM 2.0.
    Qasm,
    /// Qiskit-style Python.
    Qiskit,
    /// Cirq-style Python.
    Cirq,
    /// Q#-style .NET.
    QSharp,
    /// Quil assembly.
    Quil,
}

impl Dialect {
    /// All dialects, in display order.
    pub const ALL: [Dialect; 5] = [
        Dialect::Qasm,
        Dialect::Qiskit,
        Dialect::Cirq,
        Dialect::QSharp,
        Dialect::Quil,
    ];

    /// Lowercase name, as used by the surrounding application.
    pub fn name(&self) -> &'static str {
        match self {
            Dialect::Qasm => "qasm",
            Dialect::Qiskit => "qiskit",
            Dialect::Cirq => "cirq",
            Dialect::QSharp => "qsharp",
            Dialect::Quil => "quil",
        }
    }
}

impl fmt::Display for Dialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Dialect {
    type Err = CircuitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Dialect::ALL
            .into_iter()
            .find(|d| d.name() == s)
            .ok_or_else(|| CircuitError::UnknownDialect(s.to_string()))
    }
}

/// The literal gate tokens in each dialect.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DialectTokens {
    /// OpenQASM statement name.
    pub qasm: &'static str,
    /// Qiskit `circuit.<method>` name.
    pub qiskit: &'static str,
    /// Cirq `cirq.<gate>` name.
    pub cirq: &'static str,
    /// Q# operation name.
    pub qsharp: &'static str,
    /// Quil instruction mnemonic.
    pub quil: &'static str,
}

impl GateKind {
    /// The tokens this kind uses across all five dialects.
    ///
    /// The match is exhaustive over `GateKind`, so adding a kind without
    /// deciding its spelling in every dialect is a compile error.
    pub fn tokens(&self) -> DialectTokens {
        macro_rules! toks {
            ($qasm:literal, $qiskit:literal, $cirq:literal, $qsharp:literal, $quil:literal) => {
                DialectTokens {
                    qasm: $qasm,
                    qiskit: $qiskit,
                    cirq: $cirq,
                    qsharp: $qsharp,
                    quil: $quil,
                }
            };
        }

        match self {
            GateKind::H => toks!("h", "h", "H", "H", "H"),
            GateKind::X => toks!("x", "x", "X", "X", "X"),
            GateKind::Y => toks!("y", "y", "Y", "Y", "Y"),
            GateKind::Z => toks!("z", "z", "Z", "Z", "Z"),
            GateKind::S => toks!("s", "s", "S", "S", "S"),
            GateKind::T => toks!("t", "t", "T", "T", "T"),
            GateKind::Rx => toks!("rx", "rx", "rx", "Rx", "RX"),
            GateKind::Ry => toks!("ry", "ry", "ry", "Ry", "RY"),
            GateKind::Rz => toks!("rz", "rz", "rz", "Rz", "RZ"),
            GateKind::Cx => toks!("cx", "cx", "CNOT", "CNOT", "CNOT"),
            GateKind::Cz => toks!("cz", "cz", "CZ", "CZ", "CZ"),
            GateKind::Swap => toks!("swap", "swap", "SWAP", "SWAP", "SWAP"),
            GateKind::Measure => toks!("measure", "measure", "measure", "M", "MEASURE"),
        }
    }

    /// The token for this kind in one dialect.
    pub fn token(&self, dialect: Dialect) -> &'static str {
        let tokens = self.tokens();
        match dialect {
            Dialect::Qasm => tokens.qasm,
            Dialect::Qiskit => tokens.qiskit,
            Dialect::Cirq => tokens.cirq,
            Dialect::QSharp => tokens.qsharp,
            Dialect::Quil => tokens.quil,
        }
    }
}

/// Reverse token lookup for one dialect, used by parsers.
///
/// Within a dialect every kind has a distinct token, so the map has one
/// entry per `GateKind`.
pub fn token_map(dialect: Dialect) -> FxHashMap<&'static str, GateKind> {
    GateKind::ALL
        .into_iter()
        .map(|kind| (kind.token(dialect), kind))
        .collect()
}

/// The 2×2 unitary for a single-qubit kind, row-major.
///
/// `angle` is consulted only by the rotations. Returns `None` for the
/// two-qubit kinds (applied structurally by the simulator) and `Measure`
/// (a no-op on the statevector).
pub fn unitary(kind: GateKind, angle: f64) -> Option<[Complex64; 4]> {
    let re = |v: f64| Complex64::new(v, 0.0);
    let im = |v: f64| Complex64::new(0.0, v);

    let half = angle / 2.0;
    Some(match kind {
        GateKind::H => [
            re(FRAC_1_SQRT_2),
            re(FRAC_1_SQRT_2),
            re(FRAC_1_SQRT_2),
            re(-FRAC_1_SQRT_2),
        ],
        GateKind::X => [re(0.0), re(1.0), re(1.0), re(0.0)],
        GateKind::Y => [re(0.0), im(-1.0), im(1.0), re(0.0)],
        GateKind::Z => [re(1.0), re(0.0), re(0.0), re(-1.0)],
        GateKind::S => [re(1.0), re(0.0), re(0.0), im(1.0)],
        GateKind::T => [
            re(1.0),
            re(0.0),
            re(0.0),
            Complex64::new(FRAC_1_SQRT_2, FRAC_1_SQRT_2),
        ],
        GateKind::Rx => [
            re(half.cos()),
            im(-half.sin()),
            im(-half.sin()),
            re(half.cos()),
        ],
        GateKind::Ry => [
            re(half.cos()),
            re(-half.sin()),
            re(half.sin()),
            re(half.cos()),
        ],
        GateKind::Rz => [
            Complex64::from_polar(1.0, -half),
            re(0.0),
            re(0.0),
            Complex64::from_polar(1.0, half),
        ],
        GateKind::Cx | GateKind::Cz | GateKind::Swap | GateKind::Measure => return None,
    })
}
