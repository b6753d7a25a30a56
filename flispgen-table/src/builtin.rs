use crate::operation::Operation;

/// The FLISP instruction set: one record per defined opcode, grouped by
/// operation. Codes and shorthand notation follow the instruction list in
/// the FLISP reference manual; the shorthand column pads the operation name
/// to five characters before the addressing notation.
const FLISP_OPERATIONS: &[(&str, &str, &str)] = &[
    ("95", "ADCA", "ADCA #Data"),
    ("A5", "ADCA", "ADCA Adr"),
    ("B5", "ADCA", "ADCA n,SP"),
    ("C5", "ADCA", "ADCA n,X"),
    ("D5", "ADCA", "ADCA n,Y"),

    ("96", "ADDA", "ADDA #Data"),
    ("A6", "ADDA", "ADDA Adr"),
    ("B6", "ADDA", "ADDA n,SP"),
    ("C6", "ADDA", "ADDA n,X"),
    ("D6", "ADDA", "ADDA n,Y"),

    ("99", "ANDA", "ANDA #Data"),
    ("A9", "ANDA", "ANDA Adr"),
    ("B9", "ANDA", "ANDA n,SP"),
    ("C9", "ANDA", "ANDA n,X"),
    ("D9", "ANDA", "ANDA n,Y"),

    ("01", "ANDCC", "ANDCC"),

    ("0B", "ASLA", "ASLA"),

    ("3B", "ASL", "ASL  Adr"),
    ("4B", "ASL", "ASL  n,SP"),
    ("5B", "ASL", "ASL  n,X"),
    ("6B", "ASL", "ASL  A,X"),
    ("7B", "ASL", "ASL  n,Y"),
    ("8B", "ASL", "ASL  A,Y"),

    ("0F", "ASRA", "ASRA"),

    ("3F", "ASR", "ASR  Adr"),
    ("4F", "ASR", "ASR  n,SP"),
    ("5F", "ASR", "ASR  n,X"),
    ("6F", "ASR", "ASR  A,X"),
    ("7F", "ASR", "ASR  n,Y"),
    ("8F", "ASR", "ASR  A,Y"),

    ("29", "BCC", "BCC"),

    ("28", "BCS", "BCS"),

    ("24", "BEQ", "BEQ"),

    ("2D", "BGE", "BGE"),

    ("2C", "BGT", "BGT"),

    ("2A", "BHI", "BHI"),

    ("98", "BITA", "BITA #Data"),
    ("A8", "BITA", "BITA Adr"),
    ("B8", "BITA", "BITA n,SP"),
    ("C8", "BITA", "BITA n,X"),
    ("D8", "BITA", "BITA n,Y"),

    ("2E", "BLE", "BLE"),

    ("2B", "BLS", "BLS"),

    ("2F", "BLT", "BLT"),

    ("22", "BMI", "BMI"),

    ("25", "BNE", "BNE"),

    ("23", "BPL", "BPL"),

    ("21", "BRA", "BRA"),

    ("20", "BSR", "BSR"),

    ("27", "BVC", "BVC"),

    ("26", "BVS", "BVS"),

    ("05", "CLRA", "CLRA"),

    ("35", "CLR", "CLR  Adr"),
    ("45", "CLR", "CLR  n,SP"),
    ("55", "CLR", "CLR  n,X"),
    ("65", "CLR", "CLR  A,X"),
    ("75", "CLR", "CLR  n,Y"),
    ("85", "CLR", "CLR  A,Y"),

    ("97", "CMPA", "CMPA #Data"),
    ("A7", "CMPA", "CMPA Adr"),
    ("B7", "CMPA", "CMPA n,SP"),
    ("C7", "CMPA", "CMPA n,X"),
    ("D7", "CMPA", "CMPA n,Y"),

    ("9C", "CMPX", "CMPX #Data"),
    ("AC", "CMPX", "CMPX Adr"),
    ("BC", "CMPX", "CMPX n,SP"),

    ("9D", "CMPY", "CMPY #Data"),
    ("AD", "CMPY", "CMPY Adr"),
    ("BD", "CMPY", "CMPY n,SP"),

    ("9E", "CMPSP", "CMPSP#Data"),
    ("AE", "CMPSP", "CMPSPAdr"),

    ("0A", "COMA", "COMA"),

    ("3A", "COM", "COM  Adr"),
    ("4A", "COM", "COM  n,SP"),
    ("5A", "COM", "COM  n,X"),
    ("6A", "COM", "COM  A,X"),
    ("7A", "COM", "COM  n,Y"),
    ("8A", "COM", "COM  A,Y"),

    ("08", "DECA", "DECA"),

    ("38", "DEC", "DEC  Adr"),
    ("48", "DEC", "DEC  n,SP"),
    ("58", "DEC", "DEC  n,X"),
    ("68", "DEC", "DEC  A,X"),
    ("78", "DEC", "DEC  n,Y"),
    ("88", "DEC", "DEC  A,Y"),

    ("9B", "EORA", "EORA #Data"),
    ("AB", "EORA", "EORA Adr"),
    ("BB", "EORA", "EORA n,SP"),
    ("CB", "EORA", "EORA n,X"),
    ("DB", "EORA", "EORA n,Y"),

    ("9F", "EXG", "EXG  A,CC"),
    ("AF", "EXG", "EXG  X,Y"),
    ("BF", "EXG", "EXG  X,SP"),
    ("CF", "EXG", "EXG  Y,SP"),

    ("07", "INCA", "INCA"),

    ("37", "INC", "INC  Adr"),
    ("47", "INC", "INC  n,SP"),
    ("57", "INC", "INC  n,X"),
    ("67", "INC", "INC  A,X"),
    ("77", "INC", "INC  n,Y"),
    ("87", "INC", "INC  A,Y"),

    ("33", "JMP", "JMP  Adr"),
    ("53", "JMP", "JMP  n,X"),
    ("63", "JMP", "JMP  A,X"),
    ("73", "JMP", "JMP  n,Y"),
    ("83", "JMP", "JMP  A,Y"),

    ("34", "JSR", "JSR  Adr"),
    ("54", "JSR", "JSR  n,X"),
    ("64", "JSR", "JSR  A,X"),
    ("74", "JSR", "JSR  n,Y"),
    ("84", "JSR", "JSR  A,Y"),

    ("F0", "LDA", "LDA  #Data"),
    ("F1", "LDA", "LDA  Adr"),
    ("F2", "LDA", "LDA  n,SP"),
    ("F3", "LDA", "LDA  n,X"),
    ("F4", "LDA", "LDA  A,X"),
    ("F5", "LDA", "LDA  ,X+"),
    ("F6", "LDA", "LDA  ,X-"),
    ("F7", "LDA", "LDA  ,+X"),
    ("F8", "LDA", "LDA  ,-X"),
    ("F9", "LDA", "LDA  n,Y"),
    ("FA", "LDA", "LDA  A,Y"),
    ("FB", "LDA", "LDA  ,Y+"),
    ("FC", "LDA", "LDA  ,Y-"),
    ("FD", "LDA", "LDA  ,+Y"),
    ("FE", "LDA", "LDA  ,-Y"),

    ("90", "LDX", "LDX  #Data"),
    ("A0", "LDX", "LDX  Adr"),
    ("B0", "LDX", "LDX  n,SP"),
    ("C0", "LDX", "LDX  n,X"),
    ("D0", "LDX", "LDX  n,Y"),

    ("91", "LDY", "LDY  #Data"),
    ("A1", "LDY", "LDY  Adr"),
    ("B1", "LDY", "LDY  n,SP"),
    ("C1", "LDY", "LDY  n,X"),
    ("D1", "LDY", "LDY  n,Y"),

    ("92", "LDSP", "LDSP #Data"),
    ("A2", "LDSP", "LDSP Adr"),
    ("B2", "LDSP", "LDSP n,SP"),
    ("C2", "LDSP", "LDSP n,X"),
    ("D2", "LDSP", "LDSP n,Y"),

    ("CC", "LEAX", "LEAX n,X"),
    ("DC", "LEAX", "LEAX n,SP"),

    ("CD", "LEAY", "LEAY n,Y"),
    ("DD", "LEAY", "LEAY n,SP"),

    ("BE", "LEASP", "LEASPn,SP"),
    ("CE", "LEASP", "LEASPn,X"),
    ("DE", "LEASP", "LEASPn,Y"),

    ("0C", "LSRA", "LSRA"),

    ("3C", "LSR", "LSR  Adr"),
    ("4C", "LSR", "LSR  n,SP"),
    ("5C", "LSR", "LSR  n,X"),
    ("6C", "LSR", "LSR  A,X"),
    ("7C", "LSR", "LSR  n,Y"),
    ("8C", "LSR", "LSR  A,Y"),

    ("06", "NEGA", "NEGA"),

    ("36", "NEG", "NEG  Adr"),
    ("46", "NEG", "NEG  n,SP"),
    ("56", "NEG", "NEG  n,X"),
    ("66", "NEG", "NEG  A,X"),
    ("76", "NEG", "NEG  n,Y"),
    ("86", "NEG", "NEG  A,Y"),

    ("00", "NOP", "NOP"),

    ("9A", "ORA", "ORA  #Data"),
    ("AA", "ORA", "ORA  Adr"),
    ("BA", "ORA", "ORA  n,SP"),
    ("CA", "ORA", "ORA  n,X"),
    ("DA", "ORA", "ORA  n,Y"),

    ("02", "ORCC", "ORCC"),

    ("10", "PSHA", "PSHA"),

    ("11", "PSHX", "PSHX"),

    ("12", "PSHY", "PSHY"),

    ("13", "PSHCC", "PSHCC"),

    ("14", "PULA", "PULA"),

    ("15", "PULX", "PULX"),

    ("16", "PULY", "PULY"),

    ("17", "PULCC", "PULCC"),

    ("0D", "ROLA", "ROLA"),

    ("3D", "ROL", "ROL  Adr"),
    ("4D", "ROL", "ROL  n,SP"),
    ("5D", "ROL", "ROL  n,X"),
    ("6D", "ROL", "ROL  A,X"),
    ("7D", "ROL", "ROL  n,Y"),
    ("8D", "ROL", "ROL  A,Y"),

    ("0E", "RORA", "RORA"),

    ("3E", "ROR", "ROR  Adr"),
    ("4E", "ROR", "ROR  n,SP"),
    ("5E", "ROR", "ROR  n,X"),
    ("6E", "ROR", "ROR  A,X"),
    ("7E", "ROR", "ROR  n,Y"),
    ("8E", "ROR", "ROR  A,Y"),

    ("43", "RTS", "RTS"),

    ("44", "RTI", "RTI"),

    ("93", "SBCA", "SBCA #Data"),
    ("A3", "SBCA", "SBCA Adr"),
    ("B3", "SBCA", "SBCA n,SP"),
    ("C3", "SBCA", "SBCA n,X"),
    ("D3", "SBCA", "SBCA n,Y"),

    ("E1", "STA", "STA  Adr"),
    ("E2", "STA", "STA  n,SP"),
    ("E3", "STA", "STA  n,X"),
    ("E4", "STA", "STA  A,X"),
    ("E5", "STA", "STA  ,X+"),
    ("E6", "STA", "STA  ,X-"),
    ("E7", "STA", "STA  ,+X"),
    ("E8", "STA", "STA  ,-X"),
    ("E9", "STA", "STA  n,Y"),
    ("EA", "STA", "STA  A,Y"),
    ("EB", "STA", "STA  ,Y+"),
    ("EC", "STA", "STA  ,Y-"),
    ("ED", "STA", "STA  ,+Y"),
    ("EE", "STA", "STA  ,-Y"),

    ("30", "STX", "STX  Adr"),
    ("40", "STX", "STX  n,SP"),
    ("50", "STX", "STX  n,X"),
    ("60", "STX", "STX  A,X"),
    ("70", "STX", "STX  n,Y"),
    ("80", "STX", "STX  A,Y"),

    ("31", "STY", "STY  Adr"),
    ("41", "STY", "STY  n,SP"),
    ("51", "STY", "STY  n,X"),
    ("61", "STY", "STY  A,X"),
    ("71", "STY", "STY  n,Y"),
    ("81", "STY", "STY  A,Y"),

    ("32", "STSP", "STSP Adr"),
    ("42", "STSP", "STSP n,SP"),
    ("52", "STSP", "STSP n,X"),
    ("62", "STSP", "STSP A,X"),
    ("72", "STSP", "STSP n,Y"),
    ("82", "STSP", "STSP A,Y"),

    ("94", "SUBA", "SUBA #Data"),
    ("A4", "SUBA", "SUBA Adr"),
    ("B4", "SUBA", "SUBA n,SP"),
    ("C4", "SUBA", "SUBA n,X"),
    ("D4", "SUBA", "SUBA n,Y"),

    ("18", "TFR", "TFR  A,CC"),
    ("19", "TFR", "TFR  CC,A"),
    ("1A", "TFR", "TFR  X,Y"),
    ("1B", "TFR", "TFR  Y,X"),
    ("1C", "TFR", "TFR  X,SP"),
    ("1D", "TFR", "TFR  SP,X"),
    ("1E", "TFR", "TFR  Y,SP"),
    ("1F", "TFR", "TFR  SP,Y"),

    ("09", "TSTA", "TSTA"),

    ("39", "TST", "TST  Adr"),
    ("49", "TST", "TST  n,SP"),
    ("59", "TST", "TST  n,X"),
    ("69", "TST", "TST  A,X"),
    ("79", "TST", "TST  n,Y"),
    ("89", "TST", "TST  A,Y"),
];

/// Build the built-in FLISP operation table.
pub fn operations() -> Vec<Operation> {
    FLISP_OPERATIONS
        .iter()
        .map(|&(code, ty, short_hand)| Operation {
            code: code.to_string(),
            ty: ty.to_string(),
            short_hand: short_hand.to_string(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn covers_the_full_instruction_list() {
        assert_eq!(operations().len(), 250);
    }

    #[test]
    fn codes_are_unique_two_hex_digits() {
        let ops = operations();
        let mut seen = HashSet::new();
        for op in &ops {
            assert_eq!(op.code.len(), 2, "bad code {:?}", op.code);
            assert!(
                op.code.chars().all(|c| c.is_ascii_hexdigit()),
                "bad code {:?}",
                op.code
            );
            assert!(seen.insert(op.code.as_str()), "duplicate code {:?}", op.code);
        }
    }

    #[test]
    fn name_column_is_five_chars() {
        for op in operations() {
            assert!(op.short_hand.starts_with(op.ty.as_str()));
            if op.short_hand.len() > op.ty.len() {
                // Anything between the name and the notation is padding.
                assert_eq!(
                    op.short_hand[op.ty.len()..5].trim(),
                    "",
                    "bad padding in {:?}",
                    op.short_hand
                );
            }
        }
    }
}
