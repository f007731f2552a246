//! ScreepsLib Headless Harness
//!
//! Checks the greeting contract against a case table without any host.
//! Runs entirely in-process.
//!
//! Usage:
//!   cargo run -p screeps-simtest
//!   cargo run -p screeps-simtest -- --verbose
//!   cargo run -p screeps-simtest -- --json

use screeps_logic::greeting::{self, Greeting, DEFAULT_NAME, GREETING_WORD};
use serde::Deserialize;

// ── Case table ──────────────────────────────────────────────────────────
const CASES_JSON: &str = include_str!("../../../data/greeting_cases.json");

/// One row of the case table. `name: null` selects the default greeting.
#[derive(Debug, Deserialize)]
struct GreetingCase {
    name: Option<String>,
    expected: Option<String>,
}

impl GreetingCase {
    fn label(&self) -> String {
        match &self.name {
            Some(n) => format!("{:?}", n),
            None => "default".into(),
        }
    }

    fn run(&self) -> Greeting {
        match &self.name {
            Some(n) => greeting::say_hello_to(n),
            None => greeting::say_hello(),
        }
    }
}

// ── Test harness ────────────────────────────────────────────────────────

struct TestResult {
    name: String,
    passed: bool,
    detail: String,
}

fn main() {
    let verbose = std::env::args().any(|a| a == "--verbose");
    let json = std::env::args().any(|a| a == "--json");
    println!("=== ScreepsLib Greeting Harness ===\n");

    let mut results = Vec::new();

    // 1. Default greeting
    results.extend(validate_default_greeting(verbose));

    // 2. Case table sweep
    let (case_results, produced) = validate_case_table(verbose);
    results.extend(case_results);

    if json {
        match serde_json::to_string_pretty(&produced) {
            Ok(out) => println!("{}", out),
            Err(e) => results.push(TestResult {
                name: "json_output".into(),
                passed: false,
                detail: format!("JSON encode error: {}", e),
            }),
        }
    }

    // ── Summary ──
    println!();
    let passed = results.iter().filter(|r| r.passed).count();
    let failed = results.iter().filter(|r| !r.passed).count();
    let total = results.len();

    for r in &results {
        let icon = if r.passed { "✓" } else { "✗" };
        if !r.passed || verbose {
            println!("  {} {}: {}", icon, r.name, r.detail);
        }
    }

    println!(
        "\n=== RESULT: {}/{} passed, {} failed ===",
        passed, total, failed
    );

    if failed > 0 {
        std::process::exit(1);
    }
}

// ── 1. Default Greeting ─────────────────────────────────────────────────

fn validate_default_greeting(verbose: bool) -> Vec<TestResult> {
    println!("--- Default Greeting ---");
    let mut results = Vec::new();

    let first = greeting::say_hello();
    let second = greeting::say_hello();

    results.push(TestResult {
        name: "default_exact".into(),
        passed: first == "Hello World",
        detail: format!("got {:?}", first.as_str()),
    });

    results.push(TestResult {
        name: "default_deterministic".into(),
        passed: first == second,
        detail: "two calls compared".into(),
    });

    results.push(TestResult {
        name: "default_name".into(),
        passed: first.name() == DEFAULT_NAME,
        detail: format!("name part {:?}", first.name()),
    });

    if verbose {
        println!("  default: {}", first);
    }

    results
}

// ── 2. Case Table ───────────────────────────────────────────────────────

fn validate_case_table(verbose: bool) -> (Vec<TestResult>, Vec<Greeting>) {
    println!("--- Case Table ---");
    let mut results = Vec::new();
    let mut produced = Vec::new();

    let cases: Vec<GreetingCase> = match serde_json::from_str(CASES_JSON) {
        Ok(c) => c,
        Err(e) => {
            results.push(TestResult {
                name: "cases_parse".into(),
                passed: false,
                detail: format!("JSON parse error: {}", e),
            });
            return (results, produced);
        }
    };

    results.push(TestResult {
        name: "cases_not_empty".into(),
        passed: !cases.is_empty(),
        detail: format!("{} cases loaded", cases.len()),
    });

    for (i, case) in cases.iter().enumerate() {
        let label = case.label();
        let g = case.run();

        results.push(TestResult {
            name: format!("case_{}_salutation", i),
            passed: g.as_str().contains(GREETING_WORD),
            detail: format!("{} -> {:?}", label, g.as_str()),
        });

        if let Some(name) = &case.name {
            results.push(TestResult {
                name: format!("case_{}_verbatim", i),
                passed: g.as_str().contains(name.as_str()) && g.name() == name,
                detail: format!("{} embedded unmodified", label),
            });
        }

        if let Some(expected) = &case.expected {
            results.push(TestResult {
                name: format!("case_{}_expected", i),
                passed: g == expected.as_str(),
                detail: format!("expected {:?}, got {:?}", expected, g.as_str()),
            });
        }

        results.push(TestResult {
            name: format!("case_{}_deterministic", i),
            passed: case.run() == g,
            detail: format!("{} repeated", label),
        });

        if verbose {
            println!("  {}: {}", label, g);
        }
        produced.push(g);
    }

    (results, produced)
}
