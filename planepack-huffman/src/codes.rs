//! Code assignment and the portable code-table serialization.
//!
//! # Serialized form
//!
//! The table is stored as explicit binary records rather than any native
//! object dump, so any implementation can read any other's output:
//!
//! ```text
//! u16 (LE)  number of symbols present (1-256)
//! then, per symbol in ascending symbol order:
//!   u8              symbol value
//!   u8              code length in bits (>= 1)
//!   ceil(len / 8)   code pattern, MSB-first, zero-padded to the byte
//! ```

use crate::tree::{HuffmanNode, HuffmanTree};
use planepack_core::bitio::BitWriter;
use planepack_core::error::{CodecError, Result};

/// One prefix code: the first-emitted bit sits in the most significant
/// position of the `len`-bit value.
///
/// Code length is bounded by 64: exceeding it would take a plane of more
/// than 2^32 bytes, which the container's u32 length prefixes exclude.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Code {
    /// The code bits, right-aligned.
    pub bits: u64,
    /// Number of meaningful bits (1-64).
    pub len: u8,
}

/// Prefix-free mapping from symbols to codes, derived once from a
/// [`HuffmanTree`] and read-only thereafter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeTable {
    codes: [Option<Code>; 256],
}

impl CodeTable {
    /// Assign codes by pre-order traversal: 0 on the left descent, 1 on the
    /// right.
    ///
    /// A bare leaf root (single distinct symbol) receives the explicit
    /// single-bit code "0"; an empty code could not be counted or packed.
    pub fn from_tree(tree: &HuffmanTree) -> Self {
        let mut codes = [None; 256];

        if let HuffmanNode::Leaf { symbol } = tree.root() {
            codes[*symbol as usize] = Some(Code { bits: 0, len: 1 });
            return Self { codes };
        }

        // Explicit stack instead of recursion; pushing right before left
        // keeps the walk in pre-order.
        let mut stack: Vec<(&HuffmanNode, u64, u8)> = vec![(tree.root(), 0, 0)];
        while let Some((node, bits, len)) = stack.pop() {
            match node {
                HuffmanNode::Leaf { symbol } => {
                    codes[*symbol as usize] = Some(Code { bits, len });
                }
                HuffmanNode::Internal { left, right } => {
                    debug_assert!(len < 64, "code length cannot reach 64 bits");
                    stack.push((right, (bits << 1) | 1, len + 1));
                    stack.push((left, bits << 1, len + 1));
                }
            }
        }

        Self { codes }
    }

    /// The code for `symbol`, if present.
    pub fn get(&self, symbol: u8) -> Option<Code> {
        self.codes[symbol as usize]
    }

    /// Number of symbols present.
    pub fn len(&self) -> usize {
        self.codes.iter().filter(|c| c.is_some()).count()
    }

    /// Whether no symbol is present.
    pub fn is_empty(&self) -> bool {
        self.codes.iter().all(|c| c.is_none())
    }

    /// Length of the longest code in the table.
    pub fn max_code_len(&self) -> u8 {
        self.iter().map(|(_, code)| code.len).max().unwrap_or(0)
    }

    /// Present symbols with their codes, in ascending symbol order.
    pub fn iter(&self) -> impl Iterator<Item = (u8, Code)> + '_ {
        self.codes
            .iter()
            .enumerate()
            .filter_map(|(symbol, code)| code.map(|c| (symbol as u8, c)))
    }

    /// Serialize into the portable record form.
    pub fn to_bytes(&self) -> Vec<u8> {
        let count = self.len() as u16;
        let mut out = Vec::with_capacity(2 + count as usize * 4);
        out.extend_from_slice(&count.to_le_bytes());

        for (symbol, code) in self.iter() {
            out.push(symbol);
            out.push(code.len);

            let mut writer = BitWriter::new();
            writer.write_bits(code.bits, code.len);
            out.extend_from_slice(writer.finish().bytes());
        }

        out
    }

    /// Parse the portable record form.
    ///
    /// Rejects truncation, zero or oversized code lengths, duplicate
    /// symbols, and symbol counts outside 1-256.
    pub fn from_bytes(raw: &[u8]) -> Result<Self> {
        let mut pos = 0usize;

        let count = u16::from_le_bytes(
            raw.get(0..2)
                .ok_or_else(|| CodecError::malformed("code table is missing its symbol count"))?
                .try_into()
                .expect("slice of length 2"),
        );
        pos += 2;

        if count == 0 || count > 256 {
            return Err(CodecError::malformed(format!(
                "code table symbol count {count} outside 1-256"
            )));
        }

        let mut codes = [None; 256];
        for _ in 0..count {
            let record = raw
                .get(pos..pos + 2)
                .ok_or_else(|| CodecError::malformed("truncated code table record"))?;
            let (symbol, len) = (record[0], record[1]);
            pos += 2;

            if len == 0 || len > 64 {
                return Err(CodecError::malformed(format!(
                    "code length {len} for symbol {symbol} outside 1-64"
                )));
            }
            if codes[symbol as usize].is_some() {
                return Err(CodecError::malformed(format!(
                    "duplicate symbol {symbol} in code table"
                )));
            }

            let pattern_len = len.div_ceil(8) as usize;
            let pattern = raw
                .get(pos..pos + pattern_len)
                .ok_or_else(|| CodecError::malformed("truncated code pattern"))?;
            pos += pattern_len;

            let mut bits = 0u64;
            for i in 0..len {
                let bit = (pattern[(i / 8) as usize] >> (7 - i % 8)) & 1;
                bits = (bits << 1) | u64::from(bit);
            }

            codes[symbol as usize] = Some(Code { bits, len });
        }

        if pos != raw.len() {
            return Err(CodecError::malformed(format!(
                "{} trailing bytes after code table",
                raw.len() - pos
            )));
        }

        Ok(Self { codes })
    }
}
