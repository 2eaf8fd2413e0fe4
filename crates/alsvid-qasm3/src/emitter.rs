//! QASM3 emitter: flattening, definition ordering, text generation.

use alsvid_ir::{Gate, GateSet, Program, wire_count};

use crate::deps::definition_order;
use crate::error::EmitResult;
use crate::scope::QubitScope;

/// Name of the global wire register in emitted programs.
pub const GLOBAL_REGISTER: &str = "reg";

/// Emit `program` as QASM3 source text.
pub fn emit(program: &Program, set: &GateSet) -> EmitResult<String> {
    let mut emitter = Emitter::new();
    emitter.emit_gates(&program.flatten(), set)
}

/// Emit an already flattened gate stream.
pub fn emit_flat(gates: &[Gate], set: &GateSet) -> EmitResult<String> {
    let mut emitter = Emitter::new();
    emitter.emit_gates(gates, set)
}

/// QASM3 emitter.
struct Emitter {
    output: String,
}

impl Emitter {
    fn new() -> Self {
        Self {
            output: String::new(),
        }
    }

    fn emit_gates(&mut self, gates: &[Gate], set: &GateSet) -> EmitResult<String> {
        // Version and standard vocabulary
        self.writeln("OPENQASM 3.0;");
        self.writeln("include \"stdgates.inc\";");

        if gates.is_empty() {
            return Ok(self.output.clone());
        }

        // Definition blocks, dependencies first
        let order = definition_order(gates, set)?;
        for id in order {
            let def = set.def(id);
            let Some(body) = &def.body else { continue };
            self.writeln("");
            self.emit_definition(&def.name, def.arity, body);
        }

        // Global register declaration
        let num_wires = wire_count(gates);
        self.writeln("");
        if num_wires > 0 {
            self.writeln(&format!("qubit[{num_wires}] {GLOBAL_REGISTER};"));
            self.writeln("");
        }

        // Instructions
        let scope = QubitScope::Global {
            register: GLOBAL_REGISTER.to_string(),
        };
        for gate in gates {
            self.writeln(&format!("{} {};", gate.opcode, scope.wire_list(&gate.qubits)));
        }

        Ok(self.output.clone())
    }

    fn emit_definition(&mut self, name: &str, arity: Option<u32>, body: &[Gate]) {
        let arity = arity.unwrap_or_else(|| wire_count(body));
        let args = (0..arity)
            .map(|i| format!("q{i}"))
            .collect::<Vec<_>>()
            .join(", ");

        let scope = QubitScope::Local;
        self.writeln(&format!("gate {name} {args}"));
        self.writeln("{");
        for gate in body {
            self.writeln(&format!(
                "    {} {};",
                gate.opcode,
                scope.wire_list(&gate.qubits)
            ));
        }
        self.writeln("}");
    }

    fn writeln(&mut self, line: &str) {
        self.output.push_str(line);
        self.output.push('\n');
    }
}
