use bitpack::{BitpackError, Field, PackedWord};

// A 32-bit instruction: opcode on top, three 3-bit registers at the bottom.
const OPCODE: Field = Field::new(4, 28);
const RC: Field = Field::new(3, 0);
const RB: Field = RC.above(3);
const RA: Field = RB.above(3);

// Load-immediate form: one register and a signed 25-bit immediate.
const LOAD_REG: Field = Field::new(3, 25);
const IMMEDIATE: Field = Field::new(25, 0);

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .init();

    println!("=== Bitpack Examples ===\n");

    // Example 1: Three-register instruction
    if let Err(e) = example_three_register() {
        println!("  failed: {}", e);
    }

    // Example 2: Signed immediate
    if let Err(e) = example_load_immediate() {
        println!("  failed: {}", e);
    }

    // Example 3: Rejected values
    example_overflow();
}

fn example_three_register() -> Result<(), BitpackError> {
    println!("Example 1: Packing a three-register instruction");

    let word = PackedWord::default()
        .with_unsigned(OPCODE, 3)?
        .with_unsigned(RA, 1)?
        .with_unsigned(RB, 2)?
        .with_unsigned(RC, 7)?;

    println!("  Word:   {:#010x}", word);
    println!("  Opcode: {} (field {})", word.get_unsigned(OPCODE), OPCODE);
    println!(
        "  Registers: a={} b={} c={}",
        word.get_unsigned(RA),
        word.get_unsigned(RB),
        word.get_unsigned(RC)
    );
    println!();

    Ok(())
}

fn example_load_immediate() -> Result<(), BitpackError> {
    println!("Example 2: Signed immediate operand");

    let mut word = PackedWord::default();
    word.set_unsigned(OPCODE, 13)?;
    word.set_unsigned(LOAD_REG, 4)?;
    word.set_signed(IMMEDIATE, -123_456)?;

    println!("  Word:      {:#034b}", word);
    println!("  Register:  {}", word.get_unsigned(LOAD_REG));
    println!("  Immediate: {}", word.get_signed(IMMEDIATE));
    println!(
        "  Immediate range: {}..={}",
        IMMEDIATE.min_signed().unwrap_or(0),
        IMMEDIATE.max_signed().unwrap_or(0)
    );
    println!();

    Ok(())
}

fn example_overflow() {
    println!("Example 3: Values that do not fit");

    let word = PackedWord::default();
    for (field, value) in [(RA, 8), (OPCODE, 16)] {
        match word.with_unsigned(field, value) {
            Ok(w) => println!("  {} <- {}: {:#x}", field, value, w),
            Err(e) => println!("  {} <- {}: {}", field, value, e),
        }
    }
    if let Err(e) = word.with_signed(IMMEDIATE, 1 << 24) {
        println!("  {} <- {}: {}", IMMEDIATE, 1 << 24, e);
    }
    println!();
}
