use crate::error::{Result, SheetError};

/// One user-declared plate: a name, the inclusive i7 well range its samples
/// occupy, and (for dual-indexed runs) the single i5 well shared by the whole
/// plate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlateSpec {
    pub name: String,
    pub i7_start: usize,
    pub i7_end: usize,
    pub i5: Option<usize>,
}

impl PlateSpec {
    /// Parse one comma-separated input line, `plateName, i7Range[, i5Number]`,
    /// e.g. `DG-1, 1-96, 5`. A bare number is accepted as a one-well range
    /// (`"7"` means `7-7`). Numeric bounds are checked later, at expansion.
    pub fn parse(line: &str) -> Result<Self> {
        let fields: Vec<&str> = line.split(',').map(str::trim).collect();
        if !(2..=3).contains(&fields.len()) {
            return Err(SheetError::parse(
                line,
                "expected 'plateName, i7Range' or 'plateName, i7Range, i5Number'",
            ));
        }

        let name = fields[0];
        if name.is_empty() {
            return Err(SheetError::parse(line, "empty plate name"));
        }
        if name.contains('_') {
            return Err(SheetError::InvalidPlateName(name.to_string()));
        }

        let (i7_start, i7_end) = parse_range(line, fields[1])?;

        let i5 = match fields.get(2) {
            Some(field) => Some(field.parse().map_err(|_| {
                SheetError::parse(line, format!("i5 entry '{field}' is not a well number"))
            })?),
            None => None,
        };

        Ok(PlateSpec {
            name: name.to_string(),
            i7_start,
            i7_end,
            i5,
        })
    }
}

fn parse_range(line: &str, field: &str) -> Result<(usize, usize)> {
    let parse_num = |s: &str| {
        s.trim().parse::<usize>().map_err(|_| {
            SheetError::parse(line, format!("'{s}' in range '{field}' is not a well number"))
        })
    };
    match field.split_once('-') {
        Some((start, end)) => Ok((parse_num(start)?, parse_num(end)?)),
        None => {
            let well = parse_num(field)?;
            Ok((well, well))
        }
    }
}

/// Parse a block of plate lines (one spec per line, blank lines skipped).
pub fn parse_plate_lines<'a, I>(lines: I) -> Result<Vec<PlateSpec>>
where
    I: IntoIterator<Item = &'a str>,
{
    lines
        .into_iter()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(PlateSpec::parse)
        .collect()
}

/// Single-end or paired-end run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunType {
    SingleEnd,
    PairedEnd,
}

/// The `[Reads]` declaration: run type plus insert-read cycle counts
/// (index read cycles are not included, as in the IEM convention).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReadConfig {
    pub run_type: RunType,
    pub cycles: Vec<u32>,
}

impl ReadConfig {
    /// Parse `"SE, 151"` or `"PE, 151, 151"`. SE takes exactly one cycle
    /// count, PE exactly two.
    pub fn parse(line: &str) -> Result<Self> {
        let fields: Vec<&str> = line.split(',').map(str::trim).collect();
        let run_type = match fields[0].to_ascii_uppercase().as_str() {
            "SE" => RunType::SingleEnd,
            "PE" => RunType::PairedEnd,
            other => {
                return Err(SheetError::parse(
                    line,
                    format!("run type must be 'SE' or 'PE', got '{other}'"),
                ))
            }
        };
        let expected = match run_type {
            RunType::SingleEnd => 1,
            RunType::PairedEnd => 2,
        };
        if fields.len() - 1 != expected {
            return Err(SheetError::parse(
                line,
                format!("{} run takes exactly {expected} cycle count(s)", fields[0]),
            ));
        }
        let cycles = fields[1..]
            .iter()
            .map(|f| {
                f.parse().map_err(|_| {
                    SheetError::parse(line, format!("'{f}' is not a cycle count"))
                })
            })
            .collect::<Result<Vec<u32>>>()?;
        Ok(ReadConfig { run_type, cycles })
    }

    pub fn is_paired_end(&self) -> bool {
        self.run_type == RunType::PairedEnd
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_paired_end_line() {
        let spec = PlateSpec::parse("DG-1, 1-96, 5").unwrap();
        assert_eq!(
            spec,
            PlateSpec {
                name: "DG-1".to_string(),
                i7_start: 1,
                i7_end: 96,
                i5: Some(5),
            }
        );
    }

    #[test]
    fn parse_single_end_line() {
        let spec = PlateSpec::parse("DG-3, 1-50").unwrap();
        assert_eq!(spec.name, "DG-3");
        assert_eq!((spec.i7_start, spec.i7_end), (1, 50));
        assert_eq!(spec.i5, None);
    }

    #[test]
    fn bare_number_is_one_well_range() {
        let spec = PlateSpec::parse("P1, 7, 2").unwrap();
        assert_eq!((spec.i7_start, spec.i7_end), (7, 7));
    }

    #[test]
    fn underscore_in_plate_name_rejected() {
        assert!(matches!(
            PlateSpec::parse("DG_1, 1-96, 5"),
            Err(SheetError::InvalidPlateName(_))
        ));
    }

    #[test]
    fn malformed_lines_rejected() {
        for line in ["", "just-a-name", "P1, 1-96, 5, extra", "P1, x-96", "P1, 1-96, five"] {
            assert!(PlateSpec::parse(line).is_err(), "accepted {line:?}");
        }
    }

    #[test]
    fn parse_lines_skips_blanks() {
        let specs = parse_plate_lines(["DG-1, 1-96, 1", "", "  ", "DG-2, 1-50, 2"]).unwrap();
        assert_eq!(specs.len(), 2);
        assert_eq!(specs[1].name, "DG-2");
    }

    #[test]
    fn read_config_se_and_pe() {
        let se = ReadConfig::parse("SE, 151").unwrap();
        assert_eq!(se.run_type, RunType::SingleEnd);
        assert_eq!(se.cycles, vec![151]);

        let pe = ReadConfig::parse("PE, 151, 151").unwrap();
        assert!(pe.is_paired_end());
        assert_eq!(pe.cycles, vec![151, 151]);
    }

    #[test]
    fn read_config_wrong_arity_rejected() {
        assert!(ReadConfig::parse("SE, 151, 151").is_err());
        assert!(ReadConfig::parse("PE, 151").is_err());
        assert!(ReadConfig::parse("XX, 151").is_err());
    }
}
