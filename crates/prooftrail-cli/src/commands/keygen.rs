//! Keygen command implementation.
//!
//! Key generation lives at the CLI edge: the protocol crates only ever
//! consume PEM key material.

use prooftrail_core::Keypair;
use std::fs;
use std::path::Path;

/// File name of the PKCS#8 private key.
pub const PRIVATE_KEY_FILE: &str = "prooftrail_ed25519.pem";
/// File name of the SPKI public key.
pub const PUBLIC_KEY_FILE: &str = "prooftrail_ed25519.pub.pem";

pub fn run(out_dir: String) -> Result<(), Box<dyn std::error::Error>> {
    let dir = Path::new(&out_dir);
    fs::create_dir_all(dir)?;

    let keypair = Keypair::generate();
    let private_path = dir.join(PRIVATE_KEY_FILE);
    let public_path = dir.join(PUBLIC_KEY_FILE);

    fs::write(&private_path, keypair.to_pkcs8_pem()?)?;
    fs::write(&public_path, keypair.public_key_pem()?)?;

    println!("Wrote {}", private_path.display());
    println!("Wrote {}", public_path.display());
    Ok(())
}
