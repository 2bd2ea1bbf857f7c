use crate::error::{Result, SheetError};

/// A standard plate has 8 rows (A-H) of 12 columns, numbered row-major:
/// well 1 = A01, well 12 = A12, well 13 = B01, ..., well 96 = H12.
pub const WELLS_PER_PLATE: usize = 96;

const PLATE_COLS: usize = 12;
const ROW_LETTERS: [char; 8] = ['A', 'B', 'C', 'D', 'E', 'F', 'G', 'H'];

/// Well label ("A01".."H12") for a 1-based well number.
pub fn well_label(number: usize) -> Result<String> {
    if !(1..=WELLS_PER_PLATE).contains(&number) {
        return Err(SheetError::UnknownWell(number));
    }
    let row = ROW_LETTERS[(number - 1) / PLATE_COLS];
    let col = (number - 1) % PLATE_COLS + 1;
    Ok(format!("{row}{col:02}"))
}

/// 1-based well number for a label like "A01" or "H12" (case-insensitive).
pub fn well_number(label: &str) -> Result<usize> {
    let bad = || SheetError::UnknownWellLabel(label.to_string());
    let upper = label.trim().to_ascii_uppercase();
    let mut chars = upper.chars();
    let row_char = chars.next().ok_or_else(bad)?;
    let row = ROW_LETTERS.iter().position(|&r| r == row_char).ok_or_else(bad)?;
    let col: usize = chars.as_str().parse().map_err(|_| bad())?;
    if !(1..=PLATE_COLS).contains(&col) {
        return Err(bad());
    }
    Ok(row * PLATE_COLS + col)
}
