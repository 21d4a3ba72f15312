// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! # Numeric Kind Tags
//!
//! A closed tag over the builtin fixed-width numeric types the reporting
//! harness probes. The tag carries a static label table, so rendering a
//! human-readable type name needs no runtime type identity mechanism.

/// The closed set of numeric types covered by the probe roster.
///
/// # Examples
///
/// ```rust
/// # use freeboard_model::kind::NumericKind;
/// assert_eq!(NumericKind::U8.label(), "u8");
/// assert_eq!(NumericKind::ALL.len(), 10);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub enum NumericKind {
    I8,
    I16,
    I32,
    I64,
    U8,
    U16,
    U32,
    U64,
    F32,
    F64,
}

impl NumericKind {
    /// Every kind in the roster, in probing order: signed integers, unsigned
    /// integers, floating-point.
    pub const ALL: [NumericKind; 10] = [
        NumericKind::I8,
        NumericKind::I16,
        NumericKind::I32,
        NumericKind::I64,
        NumericKind::U8,
        NumericKind::U16,
        NumericKind::U32,
        NumericKind::U64,
        NumericKind::F32,
        NumericKind::F64,
    ];

    /// Returns the human-readable label of the kind.
    #[inline]
    pub const fn label(&self) -> &'static str {
        match self {
            NumericKind::I8 => "i8",
            NumericKind::I16 => "i16",
            NumericKind::I32 => "i32",
            NumericKind::I64 => "i64",
            NumericKind::U8 => "u8",
            NumericKind::U16 => "u16",
            NumericKind::U32 => "u32",
            NumericKind::U64 => "u64",
            NumericKind::F32 => "f32",
            NumericKind::F64 => "f64",
        }
    }

}

impl std::fmt::Display for NumericKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_roster_has_ten_distinct_kinds() {
        let unique: HashSet<NumericKind> = NumericKind::ALL.into_iter().collect();
        assert_eq!(unique.len(), 10);
    }

    #[test]
    fn test_labels_match_rust_type_names() {
        let labels: Vec<&str> = NumericKind::ALL.iter().map(|k| k.label()).collect();
        assert_eq!(
            labels,
            vec!["i8", "i16", "i32", "i64", "u8", "u16", "u32", "u64", "f32", "f64"]
        );
    }

    #[test]
    fn test_display_uses_label() {
        assert_eq!(format!("{}", NumericKind::F64), "f64");
    }
}
