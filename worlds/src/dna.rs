//! DNA codon search: linear and binary membership tests over a gene.
//!
//! A gene is a sequence of codons, each codon three nucleotides. Binary
//! search requires a sorted gene; `Nucleotide`'s derived ordering makes
//! codons totally ordered, so sorting is the caller's one obligation.

use std::fmt;

/// One DNA base. The derived ordering (`A < C < G < T`) gives codons and
/// genes a total order for binary search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Nucleotide {
    A,
    C,
    G,
    T,
}

impl Nucleotide {
    /// Parse one base letter.
    #[must_use]
    pub fn from_char(letter: char) -> Option<Self> {
        match letter {
            'A' => Some(Self::A),
            'C' => Some(Self::C),
            'G' => Some(Self::G),
            'T' => Some(Self::T),
            _ => None,
        }
    }
}

/// Three nucleotides.
pub type Codon = [Nucleotide; 3];

/// A sequence of codons.
pub type Gene = Vec<Codon>;

/// Typed failure for gene parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GeneParseError {
    /// A character that is not one of `A`, `C`, `G`, `T`.
    UnknownNucleotide { position: usize, found: char },
}

impl fmt::Display for GeneParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownNucleotide { position, found } => {
                write!(f, "unknown nucleotide {found:?} at position {position}")
            }
        }
    }
}

impl std::error::Error for GeneParseError {}

/// Parse a gene from a string of base letters, three letters per codon.
///
/// A trailing partial codon (one or two leftover letters) is dropped, and
/// its letters are never examined.
///
/// # Errors
///
/// Returns [`GeneParseError::UnknownNucleotide`] for the first character
/// within a full codon that is not a base letter.
pub fn string_to_gene(text: &str) -> Result<Gene, GeneParseError> {
    let letters: Vec<char> = text.chars().collect();
    let mut gene = Gene::with_capacity(letters.len() / 3);

    for (codon_index, chunk) in letters.chunks_exact(3).enumerate() {
        let mut codon = [Nucleotide::A; 3];
        for (offset, &found) in chunk.iter().enumerate() {
            codon[offset] =
                Nucleotide::from_char(found).ok_or(GeneParseError::UnknownNucleotide {
                    position: codon_index * 3 + offset,
                    found,
                })?;
        }
        gene.push(codon);
    }

    Ok(gene)
}

/// Linear scan: does `gene` contain `key`? O(n), no ordering required.
#[must_use]
pub fn linear_contains(gene: &[Codon], key: &Codon) -> bool {
    gene.iter().any(|codon| codon == key)
}

/// Binary search: does the SORTED `gene` contain `key`? O(log n).
///
/// The result is unspecified if `gene` is not sorted ascending; use
/// [`sorted_gene`] first when in doubt.
#[must_use]
pub fn binary_contains(gene: &[Codon], key: &Codon) -> bool {
    let mut low = 0;
    let mut high = gene.len();

    while low < high {
        let mid = low + (high - low) / 2;
        if gene[mid] < *key {
            low = mid + 1;
        } else if gene[mid] > *key {
            high = mid;
        } else {
            return true;
        }
    }
    false
}

/// A sorted copy of `gene`, suitable for [`binary_contains`].
#[must_use]
pub fn sorted_gene(gene: &[Codon]) -> Gene {
    let mut sorted = gene.to_vec();
    sorted.sort_unstable();
    sorted
}

#[cfg(test)]
mod tests {
    use super::*;
    use Nucleotide::{A, C, G, T};

    const GENE_STR: &str = "ACGTGGCTCTCTAACGTACGTACGTACGGGGTTTATATATACCCTAGGACTCCCTTT";

    #[test]
    fn string_to_gene_groups_codons() {
        let gene = string_to_gene("ACGTGG").unwrap();
        assert_eq!(gene, vec![[A, C, G], [T, G, G]]);
    }

    #[test]
    fn trailing_partial_codon_is_dropped_unexamined() {
        // The two leftover letters never form a codon, so even an invalid
        // letter among them is not an error.
        let gene = string_to_gene("ACGT?").unwrap();
        assert_eq!(gene, vec![[A, C, G]]);
    }

    #[test]
    fn unknown_letter_reports_its_position() {
        let err = string_to_gene("ACGTXG").unwrap_err();
        assert_eq!(
            err,
            GeneParseError::UnknownNucleotide {
                position: 4,
                found: 'X'
            }
        );
    }

    #[test]
    fn linear_contains_scans_the_whole_gene() {
        let gene = string_to_gene(GENE_STR).unwrap();
        assert!(linear_contains(&gene, &[A, C, G]));
        assert!(linear_contains(&gene, &[T, T, T]), "last codon must be found");
        assert!(!linear_contains(&gene, &[G, A, T]));
    }

    #[test]
    fn binary_contains_agrees_with_linear_on_sorted_gene() {
        let gene = string_to_gene(GENE_STR).unwrap();
        let sorted = sorted_gene(&gene);

        for key in [[A, C, G], [T, T, T], [G, A, T], [A, A, A], [T, G, G]] {
            assert_eq!(
                binary_contains(&sorted, &key),
                linear_contains(&sorted, &key),
                "disagreement on {key:?}"
            );
        }
    }

    #[test]
    fn binary_contains_on_empty_gene_is_false() {
        assert!(!binary_contains(&[], &[A, A, A]));
    }

    #[test]
    fn nucleotide_ordering_is_total() {
        assert!(A < C && C < G && G < T);
        assert!([A, C, G] < [A, C, T]);
    }
}
