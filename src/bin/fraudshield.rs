//! CLI for the FraudShield card tools.
//!
//! # Usage
//!
//! ```bash
//! # Validate a card number
//! fraudshield validate 4111111111111111
//!
//! # Check the Luhn digit alone
//! fraudshield luhn 4539148803436467
//!
//! # Detect the brand from a (partial) number
//! fraudshield detect 4111
//!
//! # Normalize and group a raw number
//! fraudshield format "4111-11x11 1111 1111"
//!
//! # Generate synthetic cards
//! fraudshield generate --brand visa --count 5 --details
//! ```

use clap::{Parser, Subcommand, ValueEnum};
use fraudshield::{brand, cvv, generate, luhn, mask, normalize, validate, CardBrand};

#[derive(Parser)]
#[command(name = "fraudshield")]
#[command(author, version, about = "Card validation tools for the FraudShield demo")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate a credit card number
    Validate {
        /// Card number to validate (spaces and dashes allowed)
        card_number: String,

        /// Output format
        #[arg(short, long, default_value = "text")]
        output: OutputFormat,
    },

    /// Check whether a number passes the Luhn algorithm
    Luhn {
        /// Digits-only card number
        card_number: String,
    },

    /// Detect card brand from a number or partial number
    Detect {
        /// Card number (or partial number)
        card_number: String,
    },

    /// Normalize a raw card number and group it for display
    Format {
        /// Raw input (junk characters are stripped)
        card_number: String,
    },

    /// Mask a card number for display
    Mask {
        /// Card number to mask
        card_number: String,

        /// Include BIN (first 6 digits)
        #[arg(short, long)]
        with_bin: bool,
    },

    /// Validate a CVV/CVC
    Cvv {
        /// CVV to validate
        cvv: String,

        /// Card brand (affects valid length)
        #[arg(short, long)]
        brand: Option<BrandArg>,
    },

    /// Generate synthetic card numbers (demo data only)
    Generate {
        /// Card brand to generate
        #[arg(short, long, default_value = "visa")]
        brand: BrandArg,

        /// Number of cards to generate
        #[arg(short, long, default_value = "1")]
        count: usize,

        /// Output formatted (grouped in fours)
        #[arg(short, long)]
        formatted: bool,

        /// Also generate a matching CVV per card
        #[arg(short, long)]
        details: bool,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

#[derive(Clone, Copy, ValueEnum)]
enum BrandArg {
    Visa,
    Mastercard,
    Amex,
    Discover,
    DinersClub,
    Jcb,
}

impl From<BrandArg> for CardBrand {
    fn from(arg: BrandArg) -> Self {
        match arg {
            BrandArg::Visa => CardBrand::Visa,
            BrandArg::Mastercard => CardBrand::Mastercard,
            BrandArg::Amex => CardBrand::Amex,
            BrandArg::Discover => CardBrand::Discover,
            BrandArg::DinersClub => CardBrand::DinersClub,
            BrandArg::Jcb => CardBrand::Jcb,
        }
    }
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Validate {
            card_number,
            output,
        } => {
            cmd_validate(&card_number, output);
        }
        Commands::Luhn { card_number } => {
            cmd_luhn(&card_number);
        }
        Commands::Detect { card_number } => {
            cmd_detect(&card_number);
        }
        Commands::Format { card_number } => {
            cmd_format(&card_number);
        }
        Commands::Mask {
            card_number,
            with_bin,
        } => {
            cmd_mask(&card_number, with_bin);
        }
        Commands::Cvv {
            cvv: cvv_input,
            brand,
        } => {
            cmd_cvv(&cvv_input, brand.map(|b| b.into()));
        }
        Commands::Generate {
            brand,
            count,
            formatted,
            details,
        } => {
            cmd_generate(brand.into(), count, formatted, details);
        }
    }
}

fn cmd_validate(card_number: &str, output: OutputFormat) {
    match validate(card_number) {
        Ok(card) => {
            match output {
                OutputFormat::Text => {
                    println!("Valid: yes");
                    println!("Brand: {}", card.brand().name());
                    println!("Last Four: {}", card.last_four());
                    println!("Masked: {}", card.masked());
                }
                OutputFormat::Json => {
                    println!("{{");
                    println!("  \"valid\": true,");
                    println!("  \"brand\": \"{}\",", card.brand().tag());
                    println!("  \"last_four\": \"{}\",", card.last_four());
                    println!("  \"masked\": \"{}\"", card.masked());
                    println!("}}");
                }
            }
            std::process::exit(0);
        }
        Err(e) => {
            match output {
                OutputFormat::Text => {
                    println!("Valid: no");
                    println!("Error: {}", e);
                }
                OutputFormat::Json => {
                    println!("{{");
                    println!("  \"valid\": false,");
                    println!("  \"error\": \"{}\"", e);
                    println!("}}");
                }
            }
            std::process::exit(1);
        }
    }
}

fn cmd_luhn(card_number: &str) {
    if luhn::check(card_number) {
        println!("Luhn check: PASS");
        std::process::exit(0);
    } else {
        println!("Luhn check: FAIL");
        std::process::exit(1);
    }
}

fn cmd_detect(card_number: &str) {
    let normalized = normalize::normalize(card_number);
    if normalized.digits.is_empty() {
        eprintln!("Error: No digits provided");
        std::process::exit(1);
    }

    let brand = brand::classify(&normalized.digits);
    println!("Detected Brand: {}", brand.name());
    println!("Tag: {}", brand.tag());
    println!("Valid Lengths: {:?}", brand.valid_lengths());
}

fn cmd_format(card_number: &str) {
    let normalized = normalize::normalize(card_number);
    if normalized.digits.is_empty() {
        eprintln!("Error: No digits provided");
        std::process::exit(1);
    }
    println!("{}", normalized.formatted);
}

fn cmd_mask(card_number: &str, with_bin: bool) {
    if with_bin {
        match validate(card_number) {
            Ok(card) => {
                println!("{}", mask::mask_with_bin(&card));
            }
            Err(e) => {
                eprintln!("Error: {}", e);
                std::process::exit(1);
            }
        }
    } else {
        let masked = mask::mask_string(card_number);
        if masked.is_empty() {
            eprintln!("Error: No digits provided");
            std::process::exit(1);
        }
        println!("{}", masked);
    }
}

fn cmd_cvv(cvv_input: &str, brand: Option<CardBrand>) {
    let result = match brand {
        Some(b) => cvv::validate_cvv_for_brand(cvv_input, b),
        None => cvv::validate_cvv(cvv_input),
    };

    match result {
        Ok(validated) => {
            println!("Valid: yes");
            println!("Length: {} digits", validated.length());
            std::process::exit(0);
        }
        Err(e) => {
            println!("Valid: no");
            println!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

fn cmd_generate(brand: CardBrand, count: usize, formatted: bool, details: bool) {
    for _ in 0..count {
        if details {
            let card = generate::generate_card_details(brand);
            let number = if formatted {
                normalize::normalize(&card.number).formatted
            } else {
                card.number
            };
            println!("{} cvv={}", number, card.cvv);
        } else {
            let card = generate::generate_card(brand);
            if formatted {
                println!("{}", normalize::normalize(&card).formatted);
            } else {
                println!("{}", card);
            }
        }
    }
}
