//! Minimal command line front end for the strength meter.
//!
//! Usage: `cargo run --example check -- 'MyP@ssw0rd'`

use pwd_meter::{evaluate, render_report};
use secrecy::SecretString;

fn main() {
    let password = std::env::args().nth(1).unwrap_or_default();
    let evaluation = evaluate(&SecretString::new(password.into()));
    print!("{}", render_report(&evaluation));
}
