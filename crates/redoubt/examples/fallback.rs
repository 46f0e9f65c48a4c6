//! Recovering from a failure deep in a call chain, then terminating via an
//! unprotected signal. Run with `cargo run --example fallback`; the process
//! exits with status 1.

use redoubt::protect;

fn read_config() -> u32 {
    redoubt::fail!(2, "config: missing field `threshold`\n")
}

fn main() {
    let threshold = protect(read_config).or_recover(|| {
        println!("falling back to default threshold");
        10
    });
    println!("threshold = {threshold}");

    redoubt::fail!(1, "unrecoverable: exiting with status 1\n");
}
