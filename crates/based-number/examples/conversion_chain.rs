//! The original utility's demonstration: convert `ZZZZZZ(36)` to decimal,
//! then to base 35, base 8, and back to decimal, printing each step.

use based_number::{BasedNumber, Result};

fn run() -> Result<()> {
    let n36 = BasedNumber::new(36, "ZZZZZZ")?;
    let n10a = n36.to_decimal()?;
    let n35 = n10a.to_base(35)?;
    let n8 = n35.to_base(8)?;
    let n10b = n8.to_decimal()?;

    println!("{n36} -> {n10a} -> {n35} -> {n8} -> {n10b}");
    Ok(())
}

fn main() {
    if let Err(err) = run() {
        println!("{err}");
    }
}
