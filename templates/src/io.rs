use std::io::{BufReader, Read};
use std::str::{from_utf8, FromStr};

use crate::error::{Error, Result};

pub trait InputStream {
    fn token(&mut self) -> Option<&[u8]>;

    fn value<T: FromStr>(&mut self) -> Result<T> {
        let expected = std::any::type_name::<T>();
        let token = self.token().ok_or(Error::MalformedInput {
            expected,
            found: None,
        })?;
        from_utf8(token)
            .ok()
            .and_then(|s| s.parse::<T>().ok())
            .ok_or_else(|| Error::MalformedInput {
                expected,
                found: Some(String::from_utf8_lossy(token).into_owned()),
            })
    }

    fn vec<T: FromStr>(&mut self, n: usize) -> Result<Vec<T>> {
        (0..n).map(|_| self.value()).collect()
    }
}

// cheap whitespace check, treats control bytes as separators
#[inline]
fn is_whitespace(c: u8) -> bool {
    c <= b' '
}

impl InputStream for &[u8] {
    fn token(&mut self) -> Option<&[u8]> {
        let idx = self.iter().position(|&c| !is_whitespace(c))?;
        *self = &self[idx..];
        let idx = self
            .iter()
            .position(|&c| is_whitespace(c))
            .unwrap_or(self.len());
        let (token, buf_new) = self.split_at(idx);
        *self = buf_new;
        Some(token)
    }
}

/// Reads the whole of stdin at once.
pub fn stdin() -> Result<Vec<u8>> {
    let stdin = std::io::stdin();
    let mut reader = BufReader::new(stdin.lock());

    let mut input_buf: Vec<u8> = vec![];
    reader.read_to_end(&mut input_buf)?;
    Ok(input_buf)
}
