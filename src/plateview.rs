use colored::Colorize;

use crate::error::Result;
use crate::indexes::{index_name, resolve_sequence, IndexKind, Workflow};

const ROWS: [char; 8] = ['A', 'B', 'C', 'D', 'E', 'F', 'G', 'H'];
const COLS: usize = 12;
const CELL: usize = 10;

/// Print a 96-well console view of one index set: well number, index name,
/// and the sequence that would land in a Sample Sheet under `workflow`.
/// This is the lookup aid for picking i7 ranges and i5 wells by number.
pub fn print_plateview(kind: IndexKind, workflow: Workflow) -> Result<()> {
    let orientation = match (kind, workflow) {
        (IndexKind::I5, Workflow::A) => "forward (identical to the library prep primer)",
        _ => "reverse complement of the library prep primer",
    };
    println!(
        "\nPLATEVIEW: {} sequences (5'->3'), Workflow {:?}",
        kind.prefix(),
        workflow
    );
    println!("Each sequence shown is the {orientation}.\n");

    let mut header = String::from("   ");
    for col in 1..=COLS {
        header.push_str(&format!("{:<width$}", col, width = CELL));
    }
    println!("{}", header.blue());

    for (row_idx, row) in ROWS.iter().enumerate() {
        let mut numbers = format!("{row}  ");
        let mut names = String::from("   ");
        let mut seqs = String::from("   ");
        for col in 0..COLS {
            let well = row_idx * COLS + col + 1;
            numbers.push_str(&format!("{:<width$}", well, width = CELL));
            names.push_str(&format!("{:<width$}", index_name(kind, well)?, width = CELL));
            seqs.push_str(&format!(
                "{:<width$}",
                resolve_sequence(kind, well, workflow)?,
                width = CELL
            ));
        }
        println!("{}", numbers.blue());
        println!("{}", names.green());
        println!("{}", seqs.bright_yellow());
        println!();
    }
    Ok(())
}
