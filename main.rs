use std::io::Write;

use clap::Parser;
use templates::io::{self, InputStream};
use templates::judge::{self, Dialect, ProductOptions};
use templates::monoid::Product;
use templates::Result;

#[derive(Parser, Debug)]
#[clap(version)]
enum Args {
    /// Point multiply and range product queries over `t` test cases
    Product {
        /// Reduce every value and product modulo this number
        #[clap(long, value_parser = clap::value_parser!(u64).range(1..=Product::MAX_MODULUS))]
        modulus: Option<u64>,
        /// Read `l r m` update triples instead of `1 i m` / `2 i j` commands
        #[clap(long)]
        triples: bool,
    },
    /// Count the distinct values of a sequence
    Distinct,
}

fn run(args: Args, input: &mut impl InputStream, output: &mut impl Write) -> Result<()> {
    match args {
        Args::Product { modulus, triples } => {
            let dialect = if triples {
                Dialect::Triples
            } else {
                Dialect::Commands
            };
            judge::range_product(input, output, ProductOptions { modulus, dialect })?;
        }
        Args::Distinct => judge::distinct_numbers(input, output)?,
    }
    output.flush()?;
    Ok(())
}

fn main() {
    env_logger::init();

    let args = Args::parse();
    log::debug!("{args:?}");

    let result = io::stdin().and_then(|input_buf| {
        let mut input: &[u8] = &input_buf[..];
        let mut output = std::io::BufWriter::new(std::io::stdout().lock());
        run(args, &mut input, &mut output)
    });

    if let Err(error) = result {
        log::error!("{error}");
        std::process::exit(1);
    }
}
