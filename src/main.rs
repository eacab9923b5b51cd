//! decrypt-notepadcrypt: decrypt a NotepadCrypt file to stdout
//!
//!   decrypt-notepadcrypt notes.bin password123
//!   decrypt-notepadcrypt notes.bin -m masterPass456
//!   decrypt-notepadcrypt notes.bin -o notes.txt        (prompts for the passphrase)

use anyhow::{Context, Result};
use clap::Parser;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;
use zeroize::Zeroizing;

use notepadcrypt_rs::decrypt_file_data;

// ── CLI structure ──────────────────────────────────────────────────────────────

#[derive(Parser, Debug)]
#[command(
    name = "decrypt-notepadcrypt",
    version,
    about = "Decrypt files written in NotepadCrypt's format",
    long_about = "Decrypts a NotepadCrypt file and writes the plaintext to stdout. \
                  Nothing is written unless the whole file decrypts and its padding checks out."
)]
struct Cli {
    /// Encrypted input file
    input: PathBuf,

    /// Use the master key (only applicable for files with a master key)
    #[arg(short = 'm', long = "master-key")]
    master_key: bool,

    /// Passphrase; prompted for when neither this nor the env var is set
    #[arg(env = "NOTEPADCRYPT_PASSPHRASE", hide_env_values = true)]
    passphrase: Option<String>,

    /// Write plaintext to this file instead of stdout
    #[arg(long, short = 'o')]
    output: Option<PathBuf>,
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let passphrase = Zeroizing::new(match cli.passphrase {
        Some(passphrase) => passphrase,
        None => rpassword::prompt_password("Passphrase: ").context("reading passphrase")?,
    });

    let data = std::fs::read(&cli.input)
        .with_context(|| format!("reading {}", cli.input.display()))?;
    tracing::debug!(path = %cli.input.display(), len = data.len(), "read input");

    let passphrase = ascii_passphrase(&passphrase);
    let plaintext = decrypt_file_data(&data, &passphrase, cli.master_key)?;

    match cli.output.as_deref() {
        Some(path) => write_file(path, &plaintext),
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(&plaintext).context("writing plaintext")?;
            stdout.flush().context("writing plaintext")
        }
    }
}

/// Encodes the passphrase the way the legacy tool does: US-ASCII, with every
/// non-ASCII character replaced by `?`.
fn ascii_passphrase(passphrase: &str) -> Zeroizing<Vec<u8>> {
    if !passphrase.is_ascii() {
        tracing::warn!("passphrase contains non-ASCII characters; each is read as '?'");
    }
    Zeroizing::new(
        passphrase
            .chars()
            .map(|c| if c.is_ascii() { c as u8 } else { b'?' })
            .collect(),
    )
}

fn write_file(path: &Path, plaintext: &[u8]) -> Result<()> {
    std::fs::write(path, plaintext).with_context(|| format!("writing {}", path.display()))?;
    tracing::info!(path = %path.display(), len = plaintext.len(), "wrote plaintext");
    Ok(())
}
