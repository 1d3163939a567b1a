use std::collections::BTreeSet;
use std::env;
use std::time::Instant;

use subset_sums::{OptimizedDynamicProgrammingSummer, SolverKind, SubsetSummer};
use sysinfo::{get_current_pid, ProcessRefreshKind, System};

fn main() {
    let options = match Options::parse(env::args().skip(1)) {
        Ok(opts) => opts,
        Err(err) => {
            eprintln!("scale_probe: {err}");
            Options::print_help();
            std::process::exit(2);
        }
    };

    eprintln!("\n{}", "=".repeat(80));
    eprintln!("Subset Sums Scaling Probe");
    eprintln!("{}", "=".repeat(80));
    eprintln!();
    eprintln!("Runs the selected solvers over growing inputs and reports:");
    eprintln!(
        "  • Correctness: results match the compact DP baseline (up to n = {})",
        options.verify_limit
    );
    eprintln!("  • wall_s: wall-clock time in seconds");
    eprintln!("  • rss_delta_kib: resident memory delta in KiB");
    eprintln!("{}", "=".repeat(80));
    eprintln!();

    let mut sys = System::new();
    let mut measurements = Vec::new();

    eprintln!("[1/2] Dense inputs (values spread over [1, u), u = 8n)...");
    measurements.extend(run_scenario(&options, &mut sys, Scenario::Dense));
    eprintln!();

    eprintln!("[2/2] Clustered inputs (narrow band near u / 8, u = 64n)...");
    measurements.extend(run_scenario(&options, &mut sys, Scenario::Clustered));
    eprintln!();

    print_summary(&measurements, &options);

    if let Err(err) = options.format.write(&measurements) {
        eprintln!("scale_probe output error: {err}");
        std::process::exit(1);
    }
}

struct Options {
    format: OutputFormat,
    verify_limit: usize,
    solvers: Vec<SolverKind>,
}

impl Options {
    fn parse<I, T>(mut args: I) -> Result<Self, String>
    where
        I: Iterator<Item = T>,
        T: Into<String>,
    {
        let mut format = OutputFormat::Csv;
        let mut verify_limit = 2048usize;
        let mut solvers = SolverKind::ALL.to_vec();

        while let Some(arg) = args.next() {
            let arg = arg.into();
            if arg == "--help" || arg == "-h" {
                Options::print_help();
                std::process::exit(0);
            } else if let Some(value) = arg.strip_prefix("--format=") {
                format = OutputFormat::from_str(value)?;
            } else if arg == "--format" {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value after --format".to_string())?
                    .into();
                format = OutputFormat::from_str(&value)?;
            } else if let Some(value) = arg.strip_prefix("--verify-limit=") {
                verify_limit = parse_limit(value)?;
            } else if arg == "--verify-limit" {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value after --verify-limit".to_string())?
                    .into();
                verify_limit = parse_limit(&value)?;
            } else if let Some(value) = arg.strip_prefix("--solvers=") {
                solvers = parse_solvers(value)?;
            } else if arg == "--solvers" {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value after --solvers".to_string())?
                    .into();
                solvers = parse_solvers(&value)?;
            } else {
                return Err(format!("unrecognized argument '{arg}'"));
            }
        }

        Ok(Self {
            format,
            verify_limit,
            solvers,
        })
    }

    fn print_help() {
        println!(
            "\
Usage: cargo run --bin scale_probe [-- <options>]

Options:
  --format <csv|table|json>     Output format (default: csv)
  --verify-limit <N>            Largest input size checked against the DP baseline (default: 2048)
  --solvers <list>              Comma-separated solvers: dp, optimized-dp, fast (default: all; dp skips oversized tables)
  -h, --help                    Print this help message

Examples:
  cargo run --release --bin scale_probe
  cargo run --release --bin scale_probe -- --format table --solvers dp,fast
"
        );
    }
}

fn parse_limit(value: &str) -> Result<usize, String> {
    value
        .parse::<usize>()
        .map_err(|_| "verify limit must be a positive integer".to_string())
}

fn parse_solvers(value: &str) -> Result<Vec<SolverKind>, String> {
    value
        .split(',')
        .map(|name| name.trim().parse::<SolverKind>().map_err(|e| e.to_string()))
        .collect()
}

#[derive(Copy, Clone)]
enum OutputFormat {
    Csv,
    Table,
    Json,
}

impl OutputFormat {
    fn from_str(value: &str) -> Result<Self, String> {
        match value {
            "csv" => Ok(Self::Csv),
            "table" => Ok(Self::Table),
            "json" => Ok(Self::Json),
            other => Err(format!("unknown format '{other}'")),
        }
    }

    fn write(self, measurements: &[Measurement]) -> Result<(), String> {
        match self {
            OutputFormat::Csv => write_csv(measurements),
            OutputFormat::Table => write_table(measurements),
            OutputFormat::Json => write_json(measurements),
        }
    }
}

#[derive(Copy, Clone)]
enum Scenario {
    Dense,
    Clustered,
}

impl Scenario {
    fn label(self) -> &'static str {
        match self {
            Scenario::Dense => "dense",
            Scenario::Clustered => "clustered",
        }
    }

    /// Deterministic input of roughly `n` elements and its bound.
    fn instance(self, n: usize) -> (BTreeSet<u64>, u64) {
        let n64 = n as u64;
        match self {
            Scenario::Dense => {
                let u = 8 * n64;
                let s = (0..n64).map(|i| 1 + (i * 2_654_435_761) % (u - 1)).collect();
                (s, u)
            }
            Scenario::Clustered => {
                let u = 64 * n64;
                let base = u / 8;
                let s = (0..n64).map(|i| base + (i * 40_503) % (2 * n64)).collect();
                (s, u)
            }
        }
    }
}

struct Measurement {
    scenario: &'static str,
    solver: SolverKind,
    size_desc: String,
    wall_s: f64,
    rss_delta_kib: u64,
    outputs: usize,
    verification_status: VerificationStatus,
    verification_detail: Option<String>,
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum VerificationStatus {
    NotChecked,
    Passed,
    Failed,
}

impl VerificationStatus {
    fn label(&self) -> &'static str {
        match self {
            VerificationStatus::NotChecked => "not_checked",
            VerificationStatus::Passed => "passed",
            VerificationStatus::Failed => "failed",
        }
    }
}

fn run_scenario(options: &Options, sys: &mut System, scenario: Scenario) -> Vec<Measurement> {
    const SIZES: &[usize] = &[64, 256, 1024, 2048, 4096, 8192, 16384];
    let mut measurements = Vec::new();

    for (idx, &n) in SIZES.iter().enumerate() {
        let (s, u) = scenario.instance(n);
        let baseline = (n <= options.verify_limit)
            .then(|| OptimizedDynamicProgrammingSummer.subset_sums(&s, u).ok())
            .flatten();

        for &solver in &options.solvers {
            // The full table holds u·n cells.
            if solver == SolverKind::DynamicProgramming && u.saturating_mul(s.len() as u64) > 1 << 28
            {
                continue;
            }
            eprint!(
                "      [{}/{}] {} n={} u={}... ",
                idx + 1,
                SIZES.len(),
                solver,
                s.len(),
                u
            );

            let before = rss_kib(sys);
            let start = Instant::now();
            let result = solver.run(&s, u);
            let wall_s = start.elapsed().as_secs_f64();
            let rss_delta_kib = rss_kib(sys).saturating_sub(before);

            let (outputs, status, detail) = match (&result, &baseline) {
                (Err(err), _) => (0, VerificationStatus::Failed, Some(err.to_string())),
                (Ok(sums), Some(expected)) if sums == expected => {
                    (sums.len(), VerificationStatus::Passed, None)
                }
                (Ok(sums), Some(expected)) => (
                    sums.len(),
                    VerificationStatus::Failed,
                    Some(format!(
                        "expected {} sums, got {}",
                        expected.len(),
                        sums.len()
                    )),
                ),
                (Ok(sums), None) => (sums.len(), VerificationStatus::NotChecked, None),
            };

            let status_icon = match status {
                VerificationStatus::Passed => "✓",
                VerificationStatus::Failed => "✗",
                VerificationStatus::NotChecked => "○",
            };
            eprintln!(
                "{} sums={}, time={:.3}s, status={}",
                status_icon,
                outputs,
                wall_s,
                status.label()
            );

            measurements.push(Measurement {
                scenario: scenario.label(),
                solver,
                size_desc: format!("n={},u={u}", s.len()),
                wall_s,
                rss_delta_kib,
                outputs,
                verification_status: status,
                verification_detail: detail,
            });
        }
    }
    measurements
}

fn print_summary(measurements: &[Measurement], options: &Options) {
    let total = measurements.len();
    let count = |status| {
        measurements
            .iter()
            .filter(|m| m.verification_status == status)
            .count()
    };
    let passed = count(VerificationStatus::Passed);
    let failed = count(VerificationStatus::Failed);
    let not_checked = count(VerificationStatus::NotChecked);

    eprintln!("{}", "=".repeat(80));
    eprintln!("Summary");
    eprintln!("{}", "=".repeat(80));
    eprintln!("  Total runs: {total}");
    eprintln!("  ✓ Passed: {passed}");
    eprintln!("  ✗ Failed: {failed}");
    eprintln!(
        "  ○ Not checked (n > {}): {not_checked}",
        options.verify_limit
    );
    for m in measurements
        .iter()
        .filter(|m| m.verification_status == VerificationStatus::Failed)
    {
        eprintln!("  ✗ {} {} ({})", m.scenario, m.solver, m.size_desc);
        if let Some(detail) = &m.verification_detail {
            eprintln!("     Error: {detail}");
        }
    }
    eprintln!();
}

fn write_csv(measurements: &[Measurement]) -> Result<(), String> {
    println!(
        "scenario,solver,size_desc,wall_s,rss_delta_kib,outputs,verification_status,verification_detail"
    );
    for m in measurements {
        println!(
            "{},{},\"{}\",{:.6},{},{},{},\"{}\"",
            m.scenario,
            m.solver,
            m.size_desc,
            m.wall_s,
            m.rss_delta_kib,
            m.outputs,
            m.verification_status.label(),
            m.verification_detail.as_deref().unwrap_or("")
        );
    }
    Ok(())
}

fn write_table(measurements: &[Measurement]) -> Result<(), String> {
    println!(
        "{:<10} {:<13} {:<18} {:>10} {:>14} {:>9} {:<12}",
        "scenario", "solver", "size", "wall_s", "rss_delta_kib", "outputs", "status"
    );
    println!("{}", "-".repeat(92));
    for m in measurements {
        println!(
            "{:<10} {:<13} {:<18} {:>10.4} {:>14} {:>9} {:<12}",
            m.scenario,
            m.solver.name(),
            m.size_desc,
            m.wall_s,
            m.rss_delta_kib,
            m.outputs,
            m.verification_status.label()
        );
    }
    Ok(())
}

fn write_json(measurements: &[Measurement]) -> Result<(), String> {
    println!("[");
    for (idx, m) in measurements.iter().enumerate() {
        let comma = if idx + 1 == measurements.len() { "" } else { "," };
        let detail = match &m.verification_detail {
            Some(d) => format!("\"{}\"", d.replace('"', "\\\"")),
            None => "null".to_string(),
        };
        println!(
            "  {{\"scenario\": \"{}\", \"solver\": \"{}\", \"size_desc\": \"{}\", \"wall_s\": {:.6}, \"rss_delta_kib\": {}, \"outputs\": {}, \"verification_status\": \"{}\", \"verification_detail\": {}}}{}",
            m.scenario,
            m.solver,
            m.size_desc,
            m.wall_s,
            m.rss_delta_kib,
            m.outputs,
            m.verification_status.label(),
            detail,
            comma
        );
    }
    println!("]");
    Ok(())
}

fn rss_kib(sys: &mut System) -> u64 {
    sys.refresh_processes_specifics(ProcessRefreshKind::new());
    match get_current_pid().ok().and_then(|pid| sys.process(pid)) {
        Some(p) => p.memory() / 1024,
        None => 0,
    }
}
