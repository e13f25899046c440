//! Stdin/stdout protocols of the judge problems.

use std::io::Write;

use crate::distinct::count_distinct;
use crate::error::{Error, Result};
use crate::io::InputStream;
use crate::monoid::Product;
use crate::segment_tree::SegTree;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Dialect {
    /// `1 i m` multiplies position `i` by `m`, `2 i j` prints the product of `[i, j]`
    #[default]
    Commands,
    /// `l r m` triples, accepted only as point updates (`l == r`)
    Triples,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ProductOptions {
    pub modulus: Option<u64>,
    pub dialect: Dialect,
}

/// Reads `t` test cases and answers each on its own range product tree.
pub fn range_product(
    input: &mut impl InputStream,
    output: &mut impl Write,
    options: ProductOptions,
) -> Result<()> {
    let product = match options.modulus {
        Some(m) => Product::with_modulus(m)?,
        None => Product::new(),
    };

    let t: usize = input.value()?;
    for case in 1..=t {
        let (n, q): (usize, usize) = (input.value()?, input.value()?);
        log::debug!("case {case}: n = {n}, q = {q}");

        let initial: Vec<i64> = input.vec(n)?;
        let mut tree = SegTree::from_iter(initial.into_iter().map(|x| product.reduce(x)), product);

        for _ in 0..q {
            match options.dialect {
                Dialect::Commands => run_command(input, output, &mut tree)?,
                Dialect::Triples => run_triple(input, &mut tree)?,
            }
        }

        let values = tree.values();
        let line: Vec<String> = values.iter().map(|x| x.to_string()).collect();
        writeln!(output, "{}", line.join(" "))?;
    }
    Ok(())
}

fn run_command(
    input: &mut impl InputStream,
    output: &mut impl Write,
    tree: &mut SegTree<Product>,
) -> Result<()> {
    match input.value::<u8>()? {
        1 => {
            let (i, m): (usize, i64) = (input.value()?, input.value()?);
            let m = tree.monoid().reduce(m);
            tree.update(i, m)
        }
        2 => {
            let (i, j): (usize, usize) = (input.value()?, input.value()?);
            writeln!(output, "{}", tree.query(i, j)?)?;
            Ok(())
        }
        opcode => Err(Error::MalformedInput {
            expected: "command 1 or 2",
            found: Some(opcode.to_string()),
        }),
    }
}

fn run_triple(input: &mut impl InputStream, tree: &mut SegTree<Product>) -> Result<()> {
    let (l, r, m): (usize, usize, i64) = (input.value()?, input.value()?, input.value()?);
    if l != r {
        log::warn!("rejecting range update [{l}, {r}] by {m}");
        return Err(Error::UnsupportedRangeUpdate { start: l, end: r });
    }
    let m = tree.monoid().reduce(m);
    tree.update(l, m)
}

/// Reads `n` and `n` integers, prints how many distinct values there are.
pub fn distinct_numbers(input: &mut impl InputStream, output: &mut impl Write) -> Result<()> {
    let n: usize = input.value()?;
    let values: Vec<i64> = input.vec(n)?;
    log::debug!("counting distinct values among {n}");
    writeln!(output, "{}", count_distinct(values))?;
    Ok(())
}
