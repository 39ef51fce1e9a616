use phf::{Map, phf_map};

static ONE_LETTER_CODES: Map<&'static str, char> = phf_map! {
    "ALA" => 'A', "ARG" => 'R', "ASN" => 'N', "ASP" => 'D', "CYS" => 'C',
    "GLN" => 'Q', "GLU" => 'E', "GLY" => 'G', "HIS" => 'H', "ILE" => 'I',
    "LEU" => 'L', "LYS" => 'K', "MET" => 'M', "PHE" => 'F', "PRO" => 'P',
    "SER" => 'S', "THR" => 'T', "TRP" => 'W', "TYR" => 'Y', "VAL" => 'V',
    "HSE" => 'H', "HSD" => 'H', "HSP" => 'H', "HID" => 'H', "HIE" => 'H', "HIP" => 'H',
    "CYX" => 'C', "MSE" => 'M',
};

pub fn one_letter_code(residue_type: &str) -> Option<char> {
    ONE_LETTER_CODES
        .get(residue_type.trim().to_ascii_uppercase().as_str())
        .copied()
}

/// Formats a point mutation in the compact `A12V` notation.
///
/// Falls back to `ALA12XYZ` when either residue has no standard one-letter code.
pub fn mutation_notation(wild_type: &str, position: isize, mutant: &str) -> String {
    match (one_letter_code(wild_type), one_letter_code(mutant)) {
        (Some(wt), Some(mt)) => format!("{}{}{}", wt, position, mt),
        _ => format!("{}{}{}", wild_type, position, mutant),
    }
}
