use std::collections::HashSet;

use crate::error::{Result, SheetError};
use crate::indexes::{index_name, resolve_sequence, IndexKind, Workflow};
use crate::sheet::spec::PlateSpec;
use crate::wells::{well_label, WELLS_PER_PLATE};

/// One line of the `[Data]` section: a single barcoded well.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SampleRow {
    /// Sequential across the whole run, starting at 1 (not reset per plate).
    pub sample_id: usize,
    /// `<plateName>-<wellLabel>`, e.g. `DG-1-A01`.
    pub sample_name: String,
    pub i7_index_id: String,
    pub i7_sequence: &'static str,
    /// Present only for paired-end runs; the same for every row of a plate.
    pub i5_index_id: Option<String>,
    pub i5_sequence: Option<&'static str>,
}

/// Inclusive well range, in well-number order (1..96 row-major).
pub fn expand_range(start: usize, end: usize) -> Result<Vec<usize>> {
    if start < 1 || end > WELLS_PER_PLATE || start > end {
        return Err(SheetError::InvalidRange { start, end });
    }
    Ok((start..=end).collect())
}

/// Expand plate specs into sample rows, in input plate order.
///
/// All validation happens before the first row is produced: plate names must
/// be unique and underscore-free, every range must fit the plate, paired-end
/// plates must carry an i5 well, and Workflow B cannot be combined with a
/// single-end run (B is defined by how the i5 read is primed, so without an
/// i5 the choice is meaningless and the sheet would be malformed).
pub fn build_rows(
    specs: &[PlateSpec],
    workflow: Workflow,
    paired_end: bool,
) -> Result<Vec<SampleRow>> {
    if !paired_end && workflow == Workflow::B {
        return Err(SheetError::WorkflowReadTypeMismatch);
    }

    let mut seen = HashSet::new();
    let mut expansions = Vec::with_capacity(specs.len());
    for spec in specs {
        if spec.name.contains('_') {
            return Err(SheetError::InvalidPlateName(spec.name.clone()));
        }
        if !seen.insert(spec.name.as_str()) {
            return Err(SheetError::DuplicatePlateName(spec.name.clone()));
        }
        let wells = expand_range(spec.i7_start, spec.i7_end)?;

        // Resolve the plate-wide i5 up front so a bad i5 well fails the run
        // before any row exists.
        let i5 = if paired_end {
            let well = spec.i5.ok_or_else(|| SheetError::MissingI5(spec.name.clone()))?;
            Some((
                index_name(IndexKind::I5, well)?,
                resolve_sequence(IndexKind::I5, well, workflow)?,
            ))
        } else {
            None
        };
        expansions.push((spec, wells, i5));
    }

    let mut rows = Vec::new();
    let mut sample_id = 1;
    for (spec, wells, i5) in expansions {
        for well in wells {
            let (i5_index_id, i5_sequence) = match &i5 {
                Some((name, seq)) => (Some(name.clone()), Some(*seq)),
                None => (None, None),
            };
            rows.push(SampleRow {
                sample_id,
                sample_name: format!("{}-{}", spec.name, well_label(well)?),
                i7_index_id: index_name(IndexKind::I7, well)?,
                i7_sequence: resolve_sequence(IndexKind::I7, well, workflow)?,
                i5_index_id,
                i5_sequence,
            });
            sample_id += 1;
        }
    }
    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plate(name: &str, start: usize, end: usize, i5: Option<usize>) -> PlateSpec {
        PlateSpec {
            name: name.to_string(),
            i7_start: start,
            i7_end: end,
            i5,
        }
    }

    #[test]
    fn expand_range_inclusive() {
        assert_eq!(expand_range(1, 3).unwrap(), vec![1, 2, 3]);
        assert_eq!(expand_range(96, 96).unwrap(), vec![96]);
    }

    #[test]
    fn inverted_or_out_of_bounds_range_rejected() {
        for (start, end) in [(50, 10), (0, 10), (1, 97)] {
            assert!(matches!(
                expand_range(start, end),
                Err(SheetError::InvalidRange { .. })
            ));
        }
    }

    #[test]
    fn full_plate_paired_end() {
        let rows = build_rows(&[plate("DG-1", 1, 96, Some(1))], Workflow::A, true).unwrap();
        assert_eq!(rows.len(), 96);
        assert_eq!(rows[0].sample_id, 1);
        assert_eq!(rows[95].sample_id, 96);
        assert_eq!(rows[0].sample_name, "DG-1-A01");
        assert_eq!(rows[95].sample_name, "DG-1-H12");
        assert_eq!(rows[0].i7_index_id, "i7A01");
        assert_eq!(rows[0].i7_sequence, "GTACGTCA");
        // every row shares the plate's single i5
        assert!(rows
            .iter()
            .all(|r| r.i5_index_id.as_deref() == Some("i5A01")));
        assert_eq!(rows[0].i5_sequence, Some("GAGGTAGT"));
    }

    #[test]
    fn sample_ids_run_across_plates() {
        let specs = [plate("P1", 1, 50, Some(1)), plate("P2", 1, 50, Some(2))];
        let rows = build_rows(&specs, Workflow::A, true).unwrap();
        assert_eq!(rows.len(), 100);
        let ids: Vec<usize> = rows.iter().map(|r| r.sample_id).collect();
        assert_eq!(ids, (1..=100).collect::<Vec<_>>());
        assert_eq!(rows[49].sample_name, "P1-E02");
        assert_eq!(rows[50].sample_name, "P2-A01");
        assert_eq!(rows[50].i5_index_id.as_deref(), Some("i5A02"));
    }

    #[test]
    fn workflow_a_vs_b_same_i7_different_i5() {
        let specs = [plate("P1", 1, 4, Some(1))];
        let a = build_rows(&specs, Workflow::A, true).unwrap();
        let b = build_rows(&specs, Workflow::B, true).unwrap();
        for (ra, rb) in a.iter().zip(&b) {
            assert_eq!(ra.i7_sequence, rb.i7_sequence);
            assert_ne!(ra.i5_sequence, rb.i5_sequence);
        }
    }

    #[test]
    fn duplicate_plate_name_rejected_before_expansion() {
        let specs = [plate("P1", 1, 96, Some(1)), plate("P1", 1, 96, Some(2))];
        assert!(matches!(
            build_rows(&specs, Workflow::A, true),
            Err(SheetError::DuplicatePlateName(_))
        ));
    }

    #[test]
    fn workflow_b_single_end_rejected() {
        let specs = [plate("P1", 1, 96, None)];
        assert!(matches!(
            build_rows(&specs, Workflow::B, false),
            Err(SheetError::WorkflowReadTypeMismatch)
        ));
    }

    #[test]
    fn paired_end_without_i5_rejected() {
        let specs = [plate("P1", 1, 96, None)];
        assert!(matches!(
            build_rows(&specs, Workflow::A, true),
            Err(SheetError::MissingI5(_))
        ));
    }

    #[test]
    fn bad_i5_well_fails_with_no_rows() {
        let specs = [plate("P1", 1, 96, Some(97))];
        assert!(matches!(
            build_rows(&specs, Workflow::A, true),
            Err(SheetError::UnknownWell(97))
        ));
    }

    #[test]
    fn single_end_rows_have_no_i5() {
        let rows = build_rows(&[plate("P1", 10, 12, None)], Workflow::A, false).unwrap();
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0].sample_name, "P1-A10");
        assert!(rows.iter().all(|r| r.i5_index_id.is_none()));
        assert!(rows.iter().all(|r| r.i5_sequence.is_none()));
    }
}
