//! # Mepcalc CLI Application
//!
//! Terminal front end for the MEP calculation engine. Prompts for a cable
//! circuit, runs the voltage-drop evaluator, and prints the compliance
//! summary with the full calculation trace and JSON output.
//!
//! The same `mep_core` evaluators drive a form UI unchanged; this binary
//! exists to demonstrate (and script against) the core without one.

use std::io::{self, BufRead, Write};

use mep_core::calculations::voltage_drop::{calculate, CircuitUse, VoltageDropInput};
use mep_core::tables::cable::{Insulation, Phase};

fn prompt_f64(prompt: &str, default: f64) -> f64 {
    print!("{}", prompt);
    if io::stdout().flush().is_err() {
        return default;
    }

    let mut input = String::new();
    if io::stdin().lock().read_line(&mut input).is_err() {
        return default;
    }

    input.trim().parse().unwrap_or(default)
}

fn main() {
    println!("Mepcalc CLI - Building Services Calculator");
    println!("==========================================");
    println!();
    println!("Voltage drop check for a single-phase PVC circuit.");
    println!();

    let design_current_a = prompt_f64("Enter design current (A) [20.0]: ", 20.0);
    let route_length_m = prompt_f64("Enter route length (m) [25.0]: ", 25.0);
    let csa_mm2 = prompt_f64("Enter conductor size (mm²) [2.5]: ", 2.5);

    println!();
    println!("Calculating...");
    println!();

    let circuit = VoltageDropInput {
        label: "CLI-Demo".to_string(),
        design_current_a,
        route_length_m,
        csa_mm2,
        insulation: Insulation::Pvc,
        phase: Phase::SinglePhase,
        ambient_temp_c: 30.0,
        circuit_use: CircuitUse::Power,
    };

    match calculate(&circuit) {
        Ok(result) => {
            println!("═══════════════════════════════════════");
            println!("  VOLTAGE DROP RESULTS");
            println!("═══════════════════════════════════════");
            println!();
            println!("Input:");
            println!("  Current:  {:.1} A", circuit.design_current_a);
            println!("  Length:   {:.1} m", circuit.route_length_m);
            println!("  Cable:    {:.1} mm² PVC (resolved {:.1} mm²)",
                circuit.csa_mm2,
                result.resolved_csa_mm2
            );
            println!();
            println!("Calculation:");
            for step in result.trace.steps() {
                println!("  {:<24} {} = {:.3} {}",
                    step.description, step.formula, step.value, step.unit
                );
            }
            println!();
            println!("Checks:");
            println!("  Voltage drop: {:.2} % (limit {:.1} %) {}",
                result.voltage_drop_percent,
                result.compliance.limit,
                status_icon(result.passes())
            );
            println!();
            println!("═══════════════════════════════════════");
            println!("  RESULT: {}", if result.passes() { "PASS" } else { "FAIL" });
            println!("═══════════════════════════════════════");

            println!();
            println!("JSON Output (for scripting/API use):");
            if let Ok(json) = serde_json::to_string_pretty(&result) {
                println!("{}", json);
            }
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            if let Ok(json) = serde_json::to_string_pretty(&e) {
                eprintln!();
                eprintln!("Error JSON:");
                eprintln!("{}", json);
            }
        }
    }
}

fn status_icon(pass: bool) -> &'static str {
    if pass { "[OK]" } else { "[FAIL]" }
}
