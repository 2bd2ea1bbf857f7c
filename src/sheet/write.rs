use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use chrono::Local;

use crate::error::{Result, SheetError};
use crate::sheet::build::SampleRow;
use crate::sheet::spec::ReadConfig;

/// Nextera adapter trimmed by the sequencer, fixed for this assay.
const ADAPTER: &str = "CTGTCTCTTATACACATCT";

/// Free-text `[Header]` fields.
#[derive(Debug, Clone)]
pub struct SheetMeta {
    pub investigator: String,
    pub project: String,
}

/// Write the complete Sample Sheet to `path`. The file must not already
/// exist; generating over a stale sheet is how wrong barcodes end up on a
/// sequencer, so the caller gets an error instead.
pub fn write_sample_sheet(
    path: &Path,
    meta: &SheetMeta,
    reads: &ReadConfig,
    rows: &[SampleRow],
) -> Result<()> {
    let file = File::options()
        .write(true)
        .create_new(true)
        .open(path)
        .map_err(|e| {
            if e.kind() == std::io::ErrorKind::AlreadyExists {
                SheetError::OutputExists(path.display().to_string())
            } else {
                SheetError::Io(e)
            }
        })?;
    let date = Local::now().format("%m/%d/%Y").to_string();
    render(BufWriter::new(file), meta, reads, rows, &date)
}

/// Serialize the four sections to any writer. Split out from the file
/// handling so tests can render to a buffer with a fixed date.
pub fn render<W: Write>(
    mut out: W,
    meta: &SheetMeta,
    reads: &ReadConfig,
    rows: &[SampleRow],
    date: &str,
) -> Result<()> {
    writeln!(out, "[Header]")?;
    writeln!(out, "IEMFileVersion,4")?;
    writeln!(out, "InvestigatorName,{}", meta.investigator)?;
    writeln!(out, "ProjectName,{}", meta.project)?;
    writeln!(out, "Date,{date}")?;
    writeln!(out, "Workflow,GenerateFASTQ")?;
    writeln!(out, "Application,FASTQ Only")?;
    writeln!(out, "Assay,Nextera")?;
    writeln!(out, "Description,Sequencing")?;
    writeln!(out, "Chemistry,Amplicon")?;
    writeln!(out)?;

    writeln!(out, "[Reads]")?;
    for cycles in &reads.cycles {
        writeln!(out, "{cycles}")?;
    }
    writeln!(out)?;

    writeln!(out, "[Settings]")?;
    writeln!(out, "ReverseComplement,0")?;
    writeln!(out, "Adapter,{ADAPTER}")?;
    writeln!(out)?;

    writeln!(out, "[Data]")?;
    let mut csv = csv::Writer::from_writer(out);
    if reads.is_paired_end() {
        csv.write_record([
            "Sample_ID",
            "Sample_Name",
            "I7_Index_ID",
            "index",
            "I5_Index_ID",
            "index2",
        ])?;
        for row in rows {
            csv.write_record([
                row.sample_id.to_string().as_str(),
                &row.sample_name,
                &row.i7_index_id,
                row.i7_sequence,
                row.i5_index_id.as_deref().unwrap_or(""),
                row.i5_sequence.unwrap_or(""),
            ])?;
        }
    } else {
        csv.write_record(["Sample_ID", "Sample_Name", "I7_Index_ID", "index"])?;
        for row in rows {
            csv.write_record([
                row.sample_id.to_string().as_str(),
                &row.sample_name,
                &row.i7_index_id,
                row.i7_sequence,
            ])?;
        }
    }
    csv.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::indexes::Workflow;
    use crate::sheet::build::build_rows;
    use crate::sheet::spec::PlateSpec;

    fn meta() -> SheetMeta {
        SheetMeta {
            investigator: "Dorothy Gale".to_string(),
            project: "Sequences".to_string(),
        }
    }

    fn rendered(reads: &ReadConfig, rows: &[SampleRow]) -> String {
        let mut buf = Vec::new();
        render(&mut buf, &meta(), reads, rows, "08/23/2026").unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn paired_end_sheet_layout() {
        let specs = [PlateSpec {
            name: "DG-1".to_string(),
            i7_start: 1,
            i7_end: 2,
            i5: Some(1),
        }];
        let rows = build_rows(&specs, Workflow::A, true).unwrap();
        let reads = ReadConfig::parse("PE, 151, 151").unwrap();
        let sheet = rendered(&reads, &rows);

        let expected = "\
[Header]
IEMFileVersion,4
InvestigatorName,Dorothy Gale
ProjectName,Sequences
Date,08/23/2026
Workflow,GenerateFASTQ
Application,FASTQ Only
Assay,Nextera
Description,Sequencing
Chemistry,Amplicon

[Reads]
151
151

[Settings]
ReverseComplement,0
Adapter,CTGTCTCTTATACACATCT

[Data]
Sample_ID,Sample_Name,I7_Index_ID,index,I5_Index_ID,index2
1,DG-1-A01,i7A01,GTACGTCA,i5A01,GAGGTAGT
2,DG-1-A02,i7A02,TGCAGTTA,i5A01,GAGGTAGT
";
        assert_eq!(sheet, expected);
    }

    #[test]
    fn single_end_sheet_has_four_data_columns() {
        let specs = [PlateSpec {
            name: "P1".to_string(),
            i7_start: 95,
            i7_end: 96,
            i5: None,
        }];
        let rows = build_rows(&specs, Workflow::A, false).unwrap();
        let reads = ReadConfig::parse("SE, 151").unwrap();
        let sheet = rendered(&reads, &rows);

        assert!(sheet.contains("[Reads]\n151\n\n"));
        assert!(sheet.contains("Sample_ID,Sample_Name,I7_Index_ID,index\n"));
        assert!(sheet.ends_with("1,P1-H11,i7H11,GTTAGCGA\n2,P1-H12,i7H12,GAGGTACA\n"));
    }

    #[test]
    fn existing_output_file_is_refused() {
        let tmp = tempfile::NamedTempFile::new().unwrap();
        let reads = ReadConfig::parse("SE, 151").unwrap();
        let err = write_sample_sheet(tmp.path(), &meta(), &reads, &[]).unwrap_err();
        assert!(matches!(err, SheetError::OutputExists(_)));
    }

    #[test]
    fn sheet_written_to_fresh_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("SampleSheet.csv");
        let reads = ReadConfig::parse("SE, 151").unwrap();
        let specs = [PlateSpec {
            name: "P1".to_string(),
            i7_start: 1,
            i7_end: 1,
            i5: None,
        }];
        let rows = build_rows(&specs, Workflow::A, false).unwrap();
        write_sample_sheet(&path, &meta(), &reads, &rows).unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        assert!(contents.starts_with("[Header]\nIEMFileVersion,4\n"));
        assert!(contents.ends_with("1,P1-A01,i7A01,GTACGTCA\n"));
    }
}
