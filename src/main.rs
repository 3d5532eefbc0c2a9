use std::io::{self, Write};
use std::process;

use anyhow::{bail, Context, Result};
use clap::{crate_version, value_parser, Arg, ArgAction, ArgMatches, Command};

use simple_rsa::demo::{format_cipher_units, random_prime_pair, run_demo, DemoConfig};
use simple_rsa::util::read_u32;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {:#}", e);
        process::exit(1);
    }
}

fn cli() -> Command<'static> {
    Command::new("simple_rsa")
        .version(crate_version!())
        .about("Textbook RSA demo: byte-wise encryption with keys derived from two primes")
        .arg(
            Arg::new("p")
                .short('p')
                .long("p")
                .value_name("PRIME")
                .takes_value(true)
                .value_parser(value_parser!(u32))
                .help("first prime factor (prompted for if omitted)"),
        )
        .arg(
            Arg::new("q")
                .short('q')
                .long("q")
                .value_name("PRIME")
                .takes_value(true)
                .value_parser(value_parser!(u32))
                .help("second prime factor (prompted for if omitted)"),
        )
        .arg(
            Arg::new("random")
                .short('r')
                .long("random")
                .action(ArgAction::SetTrue)
                .conflicts_with_all(&["p", "q"])
                .help("pick a random pair of small primes"),
        )
        .arg(
            Arg::new("message")
                .short('m')
                .long("message")
                .value_name("TEXT")
                .takes_value(true)
                .value_parser(value_parser!(String))
                .help("message to round-trip instead of the built-in text"),
        )
        .arg(
            Arg::new("show-cipher")
                .long("show-cipher")
                .action(ArgAction::SetTrue)
                .help("print the cipher units in hex"),
        )
}

fn flag(matches: &ArgMatches, id: &str) -> bool {
    matches.get_one::<bool>(id).copied().unwrap_or(false)
}

fn prime_pair(matches: &ArgMatches) -> Result<(u32, u32)> {
    if flag(matches, "random") {
        return Ok(random_prime_pair(&mut rand::thread_rng()));
    }

    let p = matches.get_one::<u32>("p").copied();
    let q = matches.get_one::<u32>("q").copied();
    if let (Some(p), Some(q)) = (p, q) {
        return Ok((p, q));
    }

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut output = io::stdout();
    writeln!(output, "Enter two prime numbers (p & q) such that (p * q) > 255:")?;

    let p = match p {
        Some(p) => p,
        None => read_u32("Enter P = ", &mut input, &mut output)?,
    };
    let q = match q {
        Some(q) => q,
        None => read_u32("Enter Q = ", &mut input, &mut output)?,
    };
    Ok((p, q))
}

fn run() -> Result<()> {
    let matches = cli().get_matches();
    let (p, q) = prime_pair(&matches)?;

    let mut config = DemoConfig::default().with_show_ciphertext(flag(&matches, "show-cipher"));
    if let Some(message) = matches.get_one::<String>("message") {
        config = config.with_message(message.as_str());
    }

    let report = run_demo(p, q, &config).context("Failed to initialize RSA keys")?;
    let keypair = report.keypair;
    println!(
        "p = {}, q = {}, n = {}, e = {}, d = {}",
        p,
        q,
        keypair.modulus(),
        keypair.public_key.exponent(),
        keypair.private_key.exponent()
    );

    if config.show_ciphertext {
        println!("ciphertext: {}", format_cipher_units(&report.ciphertext));
    }

    if !report.passed() {
        bail!("RSA round trip failed: decrypted message differs from the original");
    }

    println!("RSA round trip passed ({} bytes)", report.plaintext.len());
    Ok(())
}
