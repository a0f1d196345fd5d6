//! Example: LCS length via block decomposition.
//!
//! Run with:
//! `cargo run --example lcs`

use four_russians_lcs::{baseline::NaiveLcs, FourRussians, LcsSolver};

fn main() {
    let u = b"GACGTAGCATAAGCGC";
    let v = b"TGCAACGTATAACGGG";

    let engine = FourRussians::new();
    let grid = match engine.assemble(u, v) {
        Ok(grid) => grid,
        Err(err) => {
            eprintln!("lcs: {err}");
            std::process::exit(1);
        }
    };

    println!("u = {}", String::from_utf8_lossy(u));
    println!("v = {}", String::from_utf8_lossy(v));
    println!(
        "padded length {}, block size {}, {} blocks per side",
        grid.len(),
        grid.block_size(),
        grid.blocks()
    );
    println!("LCS length: {}", grid.score());
    if let Ok(expected) = NaiveLcs.lcs_length(u, v) {
        println!("baseline:   {expected}");
    }

    println!("\nMaterialized block boundaries:");
    print!("{grid}");
}
