use crate::error::{Result, SheetError};
use crate::wells::well_label;

/// Illumina indexed sequencing workflow. The workflow decides whether the
/// sequencer reads an index in the same orientation as the library prep
/// primer ("forward") or flipped ("reverse complement"), so it decides which
/// sequence variant belongs in the Sample Sheet.
///
/// - Workflow A (MiSeq, NovaSeq 6000, HiSeq 2500/2000): i7 reverse-complement,
///   i5 forward.
/// - Workflow B (iSeq 100, MiniSeq, NextSeq, HiSeq X/4000/3000): both i7 and
///   i5 reverse-complement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
#[value(rename_all = "UPPER")]
pub enum Workflow {
    A,
    B,
}

/// Which of the two index reads a lookup refers to. i7 uniquely barcodes a
/// well within a plate; i5 is shared by all wells of a plate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndexKind {
    I7,
    I5,
}

impl IndexKind {
    pub fn prefix(&self) -> &'static str {
        match self {
            IndexKind::I7 => "i7",
            IndexKind::I5 => "i5",
        }
    }
}

/// Index name for a well, e.g. `i7A01` or `i5H12`.
pub fn index_name(kind: IndexKind, well: usize) -> Result<String> {
    Ok(format!("{}{}", kind.prefix(), well_label(well)?))
}

/// Forward sequence: the index as it occurs in the library prep primer.
pub fn forward_sequence(kind: IndexKind, well: usize) -> Result<&'static str> {
    let table = match kind {
        IndexKind::I7 => &I7_FORWARD,
        IndexKind::I5 => &I5_FORWARD,
    };
    table
        .get(well.wrapping_sub(1))
        .copied()
        .ok_or(SheetError::UnknownWell(well))
}

/// Reverse-complement sequence variant, as published with the original tool.
pub fn revcomp_sequence(kind: IndexKind, well: usize) -> Result<&'static str> {
    let table = match kind {
        IndexKind::I7 => &I7_REVCOMP,
        IndexKind::I5 => &I5_REVCOMP,
    };
    table
        .get(well.wrapping_sub(1))
        .copied()
        .ok_or(SheetError::UnknownWell(well))
}

/// The sequence that belongs in the Sample Sheet for this index under the
/// given workflow. i7 is read as reverse-complement under both workflows;
/// i5 is forward under Workflow A and reverse-complement under Workflow B.
pub fn resolve_sequence(kind: IndexKind, well: usize, workflow: Workflow) -> Result<&'static str> {
    match (kind, workflow) {
        (IndexKind::I7, _) => revcomp_sequence(IndexKind::I7, well),
        (IndexKind::I5, Workflow::A) => forward_sequence(IndexKind::I5, well),
        (IndexKind::I5, Workflow::B) => revcomp_sequence(IndexKind::I5, well),
    }
}

/// 8-bp DNA reverse complement (uppercase ACGT only, which is all the tables
/// contain).
pub fn reverse_complement(seq: &str) -> String {
    seq.bytes()
        .rev()
        .map(|b| match b {
            b'A' => 'T',
            b'C' => 'G',
            b'G' => 'C',
            b'T' => 'A',
            other => other as char,
        })
        .collect()
}

// The four index tables, ordered by well number (1 = A01 .. 96 = H12),
// exactly as distributed with SampleSheet.py (Ehmsen et al. 2021).
//
// I7_REVCOMP holds true reverse complements of I7_FORWARD. The published i5
// tables do not have that relationship (I5_REVCOMP is the base-wise
// complement of I5_FORWARD without reversal); both are carried verbatim
// since the sequencer-facing values are what matter for demultiplexing.

const I7_FORWARD: [&str; 96] = [
    "TGACGTAC", "TAACTGCA", "TCCACAGT", "TCTTAACC",
    "TAGTGTGA", "TACCTCTA", "TATGTCGC", "TGCATGTA",
    "TCATCATC", "TGCACACA", "TGTAGCGA", "TCTAGCTT",
    "TGGTCCTA", "TCCAACGA", "TAGGACAC", "TATACGGA",
    "TAAGCGTA", "TCGTTGTA", "TCTCCTTC", "TGATGCTT",
    "TGATCTCA", "TGTCTAGA", "TATGAGCA", "TGGAGTTA",
    "TGTGTGTC", "TGCTACAA", "TCGTAGAC", "TGTAATGC",
    "TATGGAAC", "TGGTATTC", "TCAAGTGA", "TCTTGTGT",
    "TCTGTAGT", "TCCTGAGA", "TGCACGAT", "TACGTGGA",
    "TCATGGAT", "TCTGCGAA", "TGAGACGA", "TCGTAAGT",
    "TAATCCGA", "TAGACCAA", "TCCGCTAT", "TGGTTACA",
    "TAGCCTGT", "TGCGACTT", "TCGAACTC", "TGAAGAGT",
    "TAGGTCTT", "TGGATGGT", "TACCGTTC", "TCTCACTA",
    "TGTTGGAC", "TCGCCATA", "TGATAAGC", "TCAGTCAC",
    "TATCACGT", "TAAGAACC", "TGCTGATC", "TATTGTCC",
    "TCAGAGTT", "TAAGGTCA", "TCACTTCC", "TCCTTCTT",
    "TAGATTGC", "TGACTCGT", "TGGCATAA", "TCTATGGC",
    "TCCGATTA", "TAACGAGA", "TACAGACC", "TACCGGAT",
    "TGTCGCAT", "TGCGTTCA", "TCATACCA", "TCTGTCCA",
    "TCTTGCAA", "TACCTAGT", "TATCGGTA", "TCACCAAT",
    "TCGAGGAA", "TACCATGA", "TGTGGATA", "TACAAGTC",
    "TACTCCAT", "TATCTGAC", "TAGTGCTC", "TGAATGAC",
    "TCTTAGGA", "TACGCATC", "TGGAAGCA", "TCTGACAT",
    "TGAGCAAC", "TGGATATC", "TCGCTAAC", "TGTACCTC",
];

const I7_REVCOMP: [&str; 96] = [
    "GTACGTCA", "TGCAGTTA", "ACTGTGGA", "GGTTAAGA",
    "TCACACTA", "TAGAGGTA", "GCGACATA", "TACATGCA",
    "GATGATGA", "TGTGTGCA", "TCGCTACA", "AAGCTAGA",
    "TAGGACCA", "TCGTTGGA", "GTGTCCTA", "TCCGTATA",
    "TACGCTTA", "TACAACGA", "GAAGGAGA", "AAGCATCA",
    "TGAGATCA", "TCTAGACA", "TGCTCATA", "TAACTCCA",
    "GACACACA", "TTGTAGCA", "GTCTACGA", "GCATTACA",
    "GTTCCATA", "GAATACCA", "TCACTTGA", "ACACAAGA",
    "ACTACAGA", "TCTCAGGA", "ATCGTGCA", "TCCACGTA",
    "ATCCATGA", "TTCGCAGA", "TCGTCTCA", "ACTTACGA",
    "TCGGATTA", "TTGGTCTA", "ATAGCGGA", "TGTAACCA",
    "ACAGGCTA", "AAGTCGCA", "GAGTTCGA", "ACTCTTCA",
    "AAGACCTA", "ACCATCCA", "GAACGGTA", "TAGTGAGA",
    "GTCCAACA", "TATGGCGA", "GCTTATCA", "GTGACTGA",
    "ACGTGATA", "GGTTCTTA", "GATCAGCA", "GGACAATA",
    "AACTCTGA", "TGACCTTA", "GGAAGTGA", "AAGAAGGA",
    "GCAATCTA", "ACGAGTCA", "TTATGCCA", "GCCATAGA",
    "TAATCGGA", "TCTCGTTA", "GGTCTGTA", "ATCCGGTA",
    "ATGCGACA", "TGAACGCA", "TGGTATGA", "TGGACAGA",
    "TTGCAAGA", "ACTAGGTA", "TACCGATA", "ATTGGTGA",
    "TTCCTCGA", "TCATGGTA", "TATCCACA", "GACTTGTA",
    "ATGGAGTA", "GTCAGATA", "GAGCACTA", "GTCATTCA",
    "TCCTAAGA", "GATGCGTA", "TGCTTCCA", "ATGTCAGA",
    "GTTGCTCA", "GATATCCA", "GTTAGCGA", "GAGGTACA",
];

const I5_FORWARD: [&str; 96] = [
    "GAGGTAGT", "GCTTAACT", "GCAATTCT", "TCCTCACT",
    "AGTTAGCT", "TCATGGCT", "AGCCTAAT", "AACACTCT",
    "AGAGCTCT", "GGCCATAT", "TAGAACGT", "GGTTGAAT",
    "GATCCTAT", "TGGTCTCT", "TCCAGTCT", "TAGCGTAT",
    "GCGATCAT", "AGCTACAT", "ACTCATCT", "TTGCGAGT",
    "AAGCGACT", "TGCACGAT", "TATGCGGT", "TCGTCGAT",
    "ACACTTGT", "TACGGCAT", "TCTCGTGT", "GCAGATGT",
    "TCCGTTGT", "TTCGCAGT", "GGAATAGT", "GCAACAAT",
    "ACTGCGAT", "TGAGTACT", "ACACGAAT", "GTGGCAAT",
    "GTCATCCT", "ACCGTACT", "GTACTACT", "TAGGTCCT",
    "GTTACTGT", "GCCTTAGT", "AACCATGT", "GATGACAT",
    "AGAAGACT", "TCAAGCAT", "TGGATGCT", "ACTTGCCT",
    "GTTGTGAT", "TATCTCGT", "TGTAAGGT", "ACGTTGGT",
    "AGGAGGAT", "GAGCAGAT", "TCTCTACT", "GGATTCAT",
    "GACCTTCT", "ACGGTTAT", "AGATGCGT", "TGACACCT",
    "ACTAACGT", "GAATGCCT", "GTGTACGT", "AAGTCAGT",
    "TTCCTGGT", "ACCACCAT", "GAGTCCAT", "AGCTCTGT",
    "GGTCTTGT", "AATGTGCT", "GTCTGGAT", "GCGTATAT",
    "TGACTGAT", "TGTCCAGT", "TTGTGCCT", "ACAGACCT",
    "GATCAAGT", "GATAGGAT", "GTAGTCGT", "TCACCTAT",
    "AGTGGTAT", "GCTAGAGT", "TTAACGCT", "TCAGGAGT",
    "AACTGGCT", "TACAGAGT", "TTGCATCT", "GAACGTGT",
    "AAGTACCT", "GGTACCAT", "AATCGCAT", "GGTAATCT",
    "GATTCGCT", "AGCATCGT", "GTTCACCT", "AGGCAAGT",
];

const I5_REVCOMP: [&str; 96] = [
    "CTCCATCA", "CGAATTGA", "CGTTAAGA", "AGGAGTGA",
    "TCAATCGA", "AGTACCGA", "TCGGATTA", "TTGTGAGA",
    "TCTCGAGA", "CCGGTATA", "ATCTTGCA", "CCAACTTA",
    "CTAGGATA", "ACCAGAGA", "AGGTCAGA", "ATCGCATA",
    "CGCTAGTA", "TCGATGTA", "TGAGTAGA", "AACGCTCA",
    "TTCGCTGA", "ACGTGCTA", "ATACGCCA", "AGCAGCTA",
    "TGTGAACA", "ATGCCGTA", "AGAGCACA", "CGTCTACA",
    "AGGCAACA", "AAGCGTCA", "CCTTATCA", "CGTTGTTA",
    "TGACGCTA", "ACTCATGA", "TGTGCTTA", "CACCGTTA",
    "CAGTAGGA", "TGGCATGA", "CATGATGA", "ATCCAGGA",
    "CAATGACA", "CGGAATCA", "TTGGTACA", "CTACTGTA",
    "TCTTCTGA", "AGTTCGTA", "ACCTACGA", "TGAACGGA",
    "CAACACTA", "ATAGAGCA", "ACATTCCA", "TGCAACCA",
    "TCCTCCTA", "CTCGTCTA", "AGAGATGA", "CCTAAGTA",
    "CTGGAAGA", "TGCCAATA", "TCTACGCA", "ACTGTGGA",
    "TGATTGCA", "CTTACGGA", "CACATGCA", "TTCAGTCA",
    "AAGGACCA", "TGGTGGTA", "CTCAGGTA", "TCGAGACA",
    "CCAGAACA", "TTACACGA", "CAGACCTA", "CGCATATA",
    "ACTGACTA", "ACAGGTCA", "AACACGGA", "TGTCTGGA",
    "CTAGTTCA", "CTATCCTA", "CATCAGCA", "AGTGGATA",
    "TCACCATA", "CGATCTCA", "AATTGCGA", "AGTCCTCA",
    "TTGACCGA", "ATGTCTCA", "AACGTAGA", "CTTGCACA",
    "TTCATGGA", "CCATGGTA", "TTAGCGTA", "CCATTAGA",
    "CTAAGCGA", "TCGTAGCA", "CAAGTGGA", "TCCGTTCA",
];
