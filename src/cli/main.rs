use clap::{Parser, Subcommand};
use nalgebra::DVector;
use num_bigint::BigInt;
use rand::Rng;

use sharemind::protocols::comparison::gte;
use sharemind::protocols::multiplication::mul;
use sharemind::sharing::secret::Secret;
use sharemind::Result;

#[derive(Parser, Debug)]
#[command(version, about = "Three-party additive secret sharing over Z/2^n", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// The number of bits to use for the shares
    #[arg(long = "size", default_value_t = 32, global = true)]
    size: usize,
}

#[derive(Subcommand, Debug, Clone)]
enum Commands {
    /// Splits the given number into shares
    Share { number: BigInt },

    /// Reconstructs a number from a list of shares
    Reconstruct {
        share_1: BigInt,
        share_2: BigInt,
        share_3: BigInt,
    },

    /// Multiply two numbers as shared secrets
    Multiply {
        number_1: BigInt,
        number_2: BigInt,

        /// Automatically reconstruct the shares
        #[arg(long)]
        auto_reconstruct: bool,
    },

    /// Calculate greater-than-equals between shared secrets
    Gte {
        number_1: BigInt,
        number_2: BigInt,

        /// Automatically reconstruct the shares
        #[arg(long)]
        auto_reconstruct: bool,
    },
}

fn shares_to_string(secret: &Secret) -> String {
    let parts: Vec<String> = secret.shares().iter().map(|u| u.to_string()).collect();
    format!("({})", parts.join(" "))
}

fn run<R: Rng>(cli: &Cli, rng: &mut R) -> Result<()> {
    match &cli.command {
        Commands::Share { number } => {
            let s = Secret::from_value(number, cli.size, rng)?;
            println!(
                "The number {number} can be expressed with the shares {}",
                shares_to_string(&s)
            );
        }

        Commands::Reconstruct {
            share_1,
            share_2,
            share_3,
        } => {
            let shares =
                DVector::from_vec(vec![share_1.clone(), share_2.clone(), share_3.clone()]);
            let s = Secret::from_shares(shares, cli.size)?;
            println!(
                "The shares {} reconstruct to give the number {}",
                shares_to_string(&s),
                s.reconstruct()
            );
        }

        Commands::Multiply {
            number_1,
            number_2,
            auto_reconstruct,
        } => {
            let u = Secret::from_value(number_1, cli.size, rng)?;
            let v = Secret::from_value(number_2, cli.size, rng)?;
            for x in [&u, &v] {
                println!(
                    "The number {} got the shares {}",
                    x.reconstruct(),
                    shares_to_string(x)
                );
            }
            println!();

            let product = mul(&u, &v, rng)?;
            println!(
                "The multiplication of {} * {} gave the shares {}",
                u.reconstruct(),
                v.reconstruct(),
                shares_to_string(&product)
            );

            if *auto_reconstruct {
                println!(
                    "The result reconstructs to the value {}",
                    product.reconstruct()
                );
            }
        }

        Commands::Gte {
            number_1,
            number_2,
            auto_reconstruct,
        } => {
            let u = Secret::from_value(number_1, cli.size, rng)?;
            let v = Secret::from_value(number_2, cli.size, rng)?;
            for x in [&u, &v] {
                println!(
                    "The number {} got the shares {}",
                    x.reconstruct(),
                    shares_to_string(x)
                );
            }
            println!();

            let result = gte(&u, &v, rng)?;
            println!(
                "The GTE result of {} >= {} gave the shares {}",
                u.reconstruct(),
                v.reconstruct(),
                shares_to_string(&result)
            );

            if *auto_reconstruct {
                println!(
                    "The result reconstructs to the value {}",
                    result.reconstruct()
                );
            }
        }
    }

    Ok(())
}

fn main() {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .init();
    let cli = Cli::parse();
    let mut rng = rand::thread_rng();

    if let Err(err) = run(&cli, &mut rng) {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}
