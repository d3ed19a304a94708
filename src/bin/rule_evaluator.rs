use blockgrid_solver::engine::Grid;
use blockgrid_solver::rules::RuleSet;
use blockgrid_solver::solver::{find_min_edits, SearchOutcome};
use blockgrid_solver::utils::grid_from_str_array;
use clap::Parser;
use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Args {
    /// Index of the rule to evaluate, from the bootstrap rule set
    #[clap(short, long, default_value_t = 0)]
    rule: usize,

    /// Generate a seeded random grid instead of reading a file
    #[clap(short, long, conflicts_with = "grid_file")]
    seed: Option<u64>,

    /// Side length for generated grids
    #[clap(long, default_value_t = 5)]
    size: usize,

    /// Path to the grid file (one row per line, cells r/g/b/_)
    #[clap(required_unless_present = "seed")]
    grid_file: Option<PathBuf>,
}

fn read_grid_file(path: &PathBuf) -> Result<Grid, String> {
    let content =
        fs::read_to_string(path).map_err(|e| format!("Failed to read file: {}", e))?;

    let lines: Vec<&str> = content
        .lines()
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .collect();

    grid_from_str_array(&lines).map_err(|e| format!("Invalid grid format: {}", e))
}

fn load_grid(args: &Args) -> Result<Grid, String> {
    match (&args.grid_file, args.seed) {
        (Some(path), _) => {
            let grid = read_grid_file(path)?;
            println!("Loaded grid from {}\n", path.display());
            Ok(grid)
        }
        (None, Some(seed)) => {
            let grid = Grid::random_with_seed(args.size, seed)
                .map_err(|e| format!("Failed to generate grid: {}", e))?;
            println!("Generated {}x{} grid from seed {}\n", args.size, args.size, seed);
            Ok(grid)
        }
        // clap enforces one of the two
        (None, None) => Err("no grid source given".to_string()),
    }
}

fn main() -> ExitCode {
    let args = Args::parse();

    let grid = match load_grid(&args) {
        Ok(grid) => grid,
        Err(e) => {
            eprintln!("{}", e);
            return ExitCode::FAILURE;
        }
    };

    println!("Initial grid state:\n{}\n", grid);

    let rules = RuleSet::bootstrap();
    let rule = match rules.nth(args.rule) {
        Ok(rule) => rule,
        Err(e) => {
            eprintln!("{}", e);
            return ExitCode::FAILURE;
        }
    };

    println!(
        "Searching for the minimum edit distance to rule {} (outcome {})...\n",
        args.rule,
        rule.outcome()
    );

    match find_min_edits(&grid, rule) {
        Ok(SearchOutcome::Satisfied(solution)) => {
            println!("Edits ({}):", solution.distance);
            for (i, edit) in solution.edits.iter().enumerate() {
                println!(
                    "  Edit {}: {:?} {} at ({}, {})",
                    i + 1,
                    edit.kind,
                    edit.color.to_char(),
                    edit.x,
                    edit.y
                );
            }
            let mut witness = grid.clone();
            for edit in &solution.edits {
                edit.apply(&mut witness);
            }
            println!("\ndistance: {}\n", solution.distance);
            println!("Satisfying grid state:\n{}", witness);
            ExitCode::SUCCESS
        }
        Ok(SearchOutcome::Unreachable) => {
            println!("unreachable: no sequence of edits satisfies the rule");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("search failed: {}", e);
            ExitCode::FAILURE
        }
    }
}
