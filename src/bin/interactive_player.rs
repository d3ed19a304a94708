use blockgrid_solver::engine::{CellState, Grid};
use blockgrid_solver::rules::RuleSet;
use blockgrid_solver::solver::{find_min_edits, SearchOutcome};
use std::io::{self, Write};

const GRID_SIDE: usize = 5;
const STARTING_BLOCKS_PER_COLOR: u32 = 100;

/// Session state owned by the shell and passed explicitly into the core:
/// the grid, the per-color block inventory, and the current selections.
struct Session {
    grid: Grid,
    items: [u32; 3],
    current_color: CellState,
    current_rule: usize,
}

/// Inventory slot for a color; `None` for `Empty`.
fn slot(color: CellState) -> Option<usize> {
    match color {
        CellState::Red => Some(0),
        CellState::Green => Some(1),
        CellState::Blue => Some(2),
        CellState::Empty => None,
    }
}

fn parse_coords(parts: &[&str], side: usize) -> Option<(usize, usize)> {
    if parts.len() != 3 {
        return None;
    }
    let x = parts[1].parse::<usize>().ok()?;
    let y = parts[2].parse::<usize>().ok()?;
    if x < side && y < side {
        Some((x, y))
    } else {
        None
    }
}

/// Runs the minimum-edit search for the currently selected rule and reports
/// the witness grid and distance.
fn evaluate_current_rule(session: &Session, rules: &RuleSet) {
    let rule = match rules.nth(session.current_rule) {
        Ok(rule) => rule,
        Err(_) => {
            println!("no rule selected");
            return;
        }
    };

    match find_min_edits(&session.grid, rule) {
        Ok(SearchOutcome::Satisfied(solution)) => {
            let mut witness = session.grid.clone();
            for edit in &solution.edits {
                edit.apply(&mut witness);
            }
            println!("found");
            println!("{}", witness);
            println!();
            println!("distance: {}", solution.distance);
        }
        Ok(SearchOutcome::Unreachable) => println!("distance: unreachable"),
        Err(e) => println!("search failed: {}", e),
    }
}

fn print_help() {
    println!("Commands:");
    println!("  pb x y  put a block of the current color at (x, y)");
    println!("  gb x y  get the block at (x, y) back into the inventory");
    println!("  sc c    select color c (r, g or b)");
    println!("  sr i    select rule i and evaluate it");
    println!("  lr      list rules");
    println!("  li      list inventory");
    println!("  er      evaluate the current rule");
    println!("  pg      print the grid");
    println!("  q       quit");
}

fn main() {
    let rules = RuleSet::bootstrap();
    let mut session = Session {
        grid: Grid::new(GRID_SIDE).expect("grid side is positive"),
        items: [STARTING_BLOCKS_PER_COLOR; 3],
        current_color: CellState::Red,
        // Start with the first rule selected.
        current_rule: 0,
    };

    println!("Welcome to blockgrid!");
    print_help();

    loop {
        print!("$> ");
        io::stdout().flush().unwrap();

        let mut input = String::new();
        match io::stdin().read_line(&mut input) {
            Ok(0) => break, // EOF
            Ok(_) => {}
            Err(_) => {
                println!("Error reading input. Please try again.");
                continue;
            }
        }

        let parts: Vec<&str> = input.trim().split_whitespace().collect();
        let Some(&command) = parts.first() else {
            continue;
        };

        match command {
            "pb" => {
                let Some((x, y)) = parse_coords(&parts, session.grid.side()) else {
                    println!("usage: pb x y (0..{})", session.grid.side() - 1);
                    continue;
                };
                let slot_idx = slot(session.current_color).expect("current color is never Empty");
                if session.items[slot_idx] == 0 {
                    println!("no {} blocks left", session.current_color.to_char());
                } else if session.grid.get(x, y).is_occupied() {
                    println!("cell ({}, {}) is already occupied", x, y);
                } else {
                    session.grid.set(x, y, session.current_color);
                    session.items[slot_idx] -= 1;
                }
            }

            "gb" => {
                let Some((x, y)) = parse_coords(&parts, session.grid.side()) else {
                    println!("usage: gb x y (0..{})", session.grid.side() - 1);
                    continue;
                };
                let occupant = session.grid.get(x, y);
                match slot(occupant) {
                    Some(slot_idx) => {
                        session.items[slot_idx] += 1;
                        session.grid.set(x, y, CellState::Empty);
                    }
                    None => println!("cell ({}, {}) is empty", x, y),
                }
            }

            "sc" => {
                match parts.get(1).copied() {
                    Some("r") => session.current_color = CellState::Red,
                    Some("g") => session.current_color = CellState::Green,
                    Some("b") => session.current_color = CellState::Blue,
                    _ => println!("usage: sc r|g|b"),
                };
            }

            "sr" => {
                let Some(index) = parts.get(1).and_then(|p| p.parse::<usize>().ok()) else {
                    println!("usage: sr i");
                    continue;
                };
                if rules.nth(index).is_err() {
                    println!("no such rule");
                    continue;
                }
                session.current_rule = index;
                // Selecting a rule evaluates it right away.
                evaluate_current_rule(&session, &rules);
            }

            "lr" => {
                for (index, outcome) in rules.list() {
                    println!("[{}] {}", index, outcome);
                }
            }

            "li" => {
                let codes: Vec<String> = CellState::COLORS
                    .iter()
                    .map(|c| {
                        let count = session.items[slot(*c).expect("COLORS are never Empty")];
                        format!("{}: {}", c.to_char(), count)
                    })
                    .collect();
                println!("{}", codes.join("  "));
            }

            // The rule argument, if any, is ignored: er always evaluates the
            // current selection.
            "er" => evaluate_current_rule(&session, &rules),

            "pg" => println!("{}", session.grid),

            "q" => break,

            _ => print_help(),
        }
    }
}
