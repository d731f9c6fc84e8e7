use std::{fmt::Write, fs, path::PathBuf, process::ExitCode};

use clap::{Parser, Subcommand};
use sealed_video::{decrypt_video, encrypt_video, frame::split_frame};

fn main() -> ExitCode {
    let Args {
        key,
        log_level,
        command,
    } = Args::parse();

    if let Some(log_level) = log_level {
        println!("- Using log level {}", log_level);
        simple_logger::init_with_level(log_level).unwrap();
    }

    match run(&key, command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("- Failed: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(base64_key: &str, command: Command) -> Result<(), Box<dyn std::error::Error>> {
    match command {
        Command::Seal { input, output } => {
            let plaintext = fs::read(&input)?;
            println!("- Sealing {} ({} bytes)", input.display(), plaintext.len());

            let encrypted = encrypt_video(&plaintext, base64_key)?;
            display_frame(encrypted.as_ref());

            fs::write(&output, encrypted.as_ref())?;
            println!("- Written to {}", output.display());
        }
        Command::Open { input, output } => {
            let encrypted = fs::read(&input)?;
            println!("- Opening {} ({} bytes)", input.display(), encrypted.len());
            display_frame(&encrypted);

            let decrypted = decrypt_video(&encrypted, base64_key)?;

            fs::write(&output, &decrypted)?;
            println!(
                "- Written {} bytes to {}",
                decrypted.len(),
                output.display()
            );
        }
    }

    Ok(())
}

fn display_frame(frame: &[u8]) {
    if let Ok((nonce, cipher_text)) = split_frame(frame) {
        println!("- Nonce: {}", bin2hex(&nonce));
        println!("- Cipher text with tag: {} bytes", cipher_text.len());
    }
}

fn bin2hex(bin: &[u8]) -> String {
    bin.iter().fold(String::new(), |mut output, x| {
        let _ = write!(output, "{x:02x}");
        output
    })
}

#[derive(Parser, Debug)]
#[command(author, version, about = "Seals or opens a video with a base64 AES key", long_about = None)]
struct Args {
    /// base64 encoded AES key of 16, 24 or 32 bytes
    #[arg(short, long)]
    key: String,
    #[arg(short, long)]
    log_level: Option<log::Level>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Encrypts a plaintext file into `nonce || cipher text || tag`
    Seal { input: PathBuf, output: PathBuf },
    /// Decrypts an encrypted frame
    Open { input: PathBuf, output: PathBuf },
}
