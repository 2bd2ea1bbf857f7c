//! Generate Illumina-compatible Sample Sheets from 96-well plate barcode
//! assignments. Each plate line (`plateName, i7Range[, i5Number]`) expands
//! into one `[Data]` row per well, with index sequences resolved for the
//! chosen sequencer workflow (A or B).

pub mod error;
pub mod indexes;
pub mod plateview;
pub mod sheet;
pub mod wells;
