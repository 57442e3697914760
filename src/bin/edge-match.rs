use clap::Parser;

use edge_match::{catalog, panel::Panel, solver::solve};

/// Find every arrangement of the 9 puzzle cards on the 3x3 panel.
#[derive(Parser, Debug)]
struct Cli {
    /// Stop after this many solutions
    #[arg(long)]
    limit: Option<u64>,
    /// Only print the totals
    #[arg(long)]
    quiet: bool,
    /// Don't use terminal colors
    #[arg(long)]
    plain: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let stime = std::time::Instant::now();

    let mut solutions = solve(Panel::new(), catalog::cards())?;
    while let Some(panel) = solutions.next_solution() {
        if !cli.quiet {
            println!("{}\n", panel.render(!cli.plain));
        }
        let found = solutions.stats().solutions;
        if cli.limit.is_some_and(|limit| found >= limit) {
            eprintln!("[solve] stopping after {found} solutions");
            break;
        }
    }

    let stats = solutions.stats();
    eprintln!("[solve] search took {:.3}s", stime.elapsed().as_secs_f64());

    let (bold, reset) = if cli.plain {
        ("", "")
    } else {
        ("\x1b[1m", "\x1b[0m")
    };
    println!("*** SOLUTIONS FOUND: {bold}{}{reset}", stats.solutions);
    println!(
        "*** COMBINATIONS CHECKED: {bold}{}{reset}",
        stats.combinations
    );
    Ok(())
}
