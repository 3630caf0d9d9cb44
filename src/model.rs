use std::{fmt};
use std::rc::{Rc};
use std::str::{FromStr};

use super::error::{Error};

/// Represents the name of a [`Symbol`].
///
/// Shared between the key of a [`SymbolTable`] and the `Symbol` it maps to.
///
/// [`Symbol`]: crate::Symbol
/// [`SymbolTable`]: crate::SymbolTable
pub type Name = Rc<str>;

/// Represents a map from `Name` to `T`.
pub type Map<T> = std::collections::HashMap<Name, T>;

// ----------------------------------------------------------------------------

/// The declared type of a symbol.
///
/// A closed set of primitive kinds. The discriminants are `0` to `14` in
/// declaration order.
#[derive(Debug, Copy, Clone, Hash, PartialEq, Eq, PartialOrd, Ord)]
#[repr(u8)]
pub enum Type {
    Bool,
    Char,
    SignedChar,
    UnsignedChar,
    Short,
    UnsignedShort,
    Int,
    UnsignedInt,
    Long,
    UnsignedLong,
    LongLong,
    UnsignedLongLong,
    Float,
    Double,
    LongDouble,
}

impl Type {
    /// Every `Type`, indexed by discriminant.
    pub const ALL: [Self; 15] = [
        Self::Bool,
        Self::Char,
        Self::SignedChar,
        Self::UnsignedChar,
        Self::Short,
        Self::UnsignedShort,
        Self::Int,
        Self::UnsignedInt,
        Self::Long,
        Self::UnsignedLong,
        Self::LongLong,
        Self::UnsignedLongLong,
        Self::Float,
        Self::Double,
        Self::LongDouble,
    ];

    /// The name used when printing a symbol of this type.
    pub fn name(self) -> &'static str {
        match self {
            Self::Bool => "bool",
            Self::Char => "char",
            Self::SignedChar => "signed char",
            Self::UnsignedChar => "unsigned char",
            Self::Short => "short",
            Self::UnsignedShort => "unsigned short",
            Self::Int => "int",
            Self::UnsignedInt => "unsigned int",
            Self::Long => "long",
            Self::UnsignedLong => "unsigned long",
            Self::LongLong => "long long",
            Self::UnsignedLongLong => "unsigned long long",
            Self::Float => "float",
            Self::Double => "double",
            Self::LongDouble => "long double",
        }
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result { f.write_str(self.name()) }
}

impl FromStr for Type {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL.iter().copied().find(|t| t.name() == s)
            .ok_or_else(|| Error::UnknownType(s.to_owned()))
    }
}

impl TryFrom<u8> for Type {
    type Error = Error;

    fn try_from(raw: u8) -> Result<Self, Self::Error> {
        Self::ALL.get(raw as usize).copied().ok_or(Error::InvalidTag(raw))
    }
}

/// Returns the name of the `Type` whose discriminant is `raw`, or `"unknown"`.
pub fn describe_raw(raw: u8) -> &'static str {
    Type::try_from(raw).map_or("unknown", Type::name)
}

// ----------------------------------------------------------------------------

/// A primitive value, holding exactly one of the kinds listed in [`Type`].
///
/// `long double` has no Rust counterpart and is stored as an `f64`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Value {
    Bool(bool),
    Char(u8),
    SignedChar(i8),
    UnsignedChar(u8),
    Short(i16),
    UnsignedShort(u16),
    Int(i32),
    UnsignedInt(u32),
    Long(i64),
    UnsignedLong(u64),
    LongLong(i64),
    UnsignedLongLong(u64),
    Float(f32),
    Double(f64),
    LongDouble(f64),
}

impl Value {
    /// The `Type` that corresponds to the active variant.
    pub fn natural_type(&self) -> Type {
        match self {
            Self::Bool(_) => Type::Bool,
            Self::Char(_) => Type::Char,
            Self::SignedChar(_) => Type::SignedChar,
            Self::UnsignedChar(_) => Type::UnsignedChar,
            Self::Short(_) => Type::Short,
            Self::UnsignedShort(_) => Type::UnsignedShort,
            Self::Int(_) => Type::Int,
            Self::UnsignedInt(_) => Type::UnsignedInt,
            Self::Long(_) => Type::Long,
            Self::UnsignedLong(_) => Type::UnsignedLong,
            Self::LongLong(_) => Type::LongLong,
            Self::UnsignedLongLong(_) => Type::UnsignedLongLong,
            Self::Float(_) => Type::Float,
            Self::Double(_) => Type::Double,
            Self::LongDouble(_) => Type::LongDouble,
        }
    }
}

impl fmt::Display for Value {
    /// Character kinds are written as a glyph, reading the byte as Latin-1.
    /// `bool` is written as `1` or `0`, and floating-point kinds like `%g`.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Self::Bool(v) => write!(f, "{}", u8::from(v)),
            Self::Char(v) => write!(f, "{}", char::from(v)),
            Self::SignedChar(v) => write!(f, "{}", char::from(v as u8)),
            Self::UnsignedChar(v) => write!(f, "{}", char::from(v)),
            Self::Short(v) => write!(f, "{}", v),
            Self::UnsignedShort(v) => write!(f, "{}", v),
            Self::Int(v) => write!(f, "{}", v),
            Self::UnsignedInt(v) => write!(f, "{}", v),
            Self::Long(v) => write!(f, "{}", v),
            Self::UnsignedLong(v) => write!(f, "{}", v),
            Self::LongLong(v) => write!(f, "{}", v),
            Self::UnsignedLongLong(v) => write!(f, "{}", v),
            Self::Float(v) => write_general(f, f64::from(v)),
            Self::Double(v) => write_general(f, v),
            Self::LongDouble(v) => write_general(f, v),
        }
    }
}

/// The number of significant digits written by [`write_general()`].
const PRECISION: usize = 6;

/// Write `v` with [`PRECISION`] significant digits like C's `%g`: exponent
/// notation if the decimal exponent is below `-4` or at least `PRECISION`,
/// otherwise fixed notation.
fn write_general(f: &mut fmt::Formatter, v: f64) -> fmt::Result {
    if v.is_nan() { return f.write_str(if v.is_sign_negative() { "-nan" } else { "nan" }); }
    if v.is_infinite() { return f.write_str(if v < 0.0 { "-inf" } else { "inf" }); }
    if v == 0.0 { return f.write_str(if v.is_sign_negative() { "-0" } else { "0" }); }
    // Rounding can carry into the exponent, e.g. `999999.7` becomes `1e+06`.
    let scientific = format!("{:.*e}", PRECISION - 1, v);
    let (mantissa, exponent) = scientific.split_once('e').ok_or(fmt::Error)?;
    let exponent: i32 = exponent.parse().map_err(|_| fmt::Error)?;
    if exponent < -4 || exponent >= PRECISION as i32 {
        write!(f, "{}e{:+03}", trim_zeros(mantissa), exponent)
    } else {
        let fixed = format!("{:.*}", (PRECISION as i32 - 1 - exponent) as usize, v);
        f.write_str(trim_zeros(&fixed))
    }
}

/// Remove trailing zeros after a decimal point, and then the point itself.
fn trim_zeros(digits: &str) -> &str {
    if !digits.contains('.') { return digits; }
    digits.trim_end_matches('0').trim_end_matches('.')
}

// `u8` and `i64` are ambiguous, so `Char` and `LongLong` are spelt out.
impl From<bool> for Value { fn from(v: bool) -> Self { Self::Bool(v) } }
impl From<i8> for Value { fn from(v: i8) -> Self { Self::SignedChar(v) } }
impl From<u8> for Value { fn from(v: u8) -> Self { Self::UnsignedChar(v) } }
impl From<i16> for Value { fn from(v: i16) -> Self { Self::Short(v) } }
impl From<u16> for Value { fn from(v: u16) -> Self { Self::UnsignedShort(v) } }
impl From<i32> for Value { fn from(v: i32) -> Self { Self::Int(v) } }
impl From<u32> for Value { fn from(v: u32) -> Self { Self::UnsignedInt(v) } }
impl From<i64> for Value { fn from(v: i64) -> Self { Self::Long(v) } }
impl From<u64> for Value { fn from(v: u64) -> Self { Self::UnsignedLong(v) } }
impl From<f32> for Value { fn from(v: f32) -> Self { Self::Float(v) } }
impl From<f64> for Value { fn from(v: f64) -> Self { Self::Double(v) } }

/// A `char` converts to [`Value::Char`] if it is in Latin-1.
impl TryFrom<char> for Value {
    type Error = Error;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        u8::try_from(c).map(Self::Char).map_err(|_| Error::NotAByte(c))
    }
}

// ----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::{assert_eq};

    #[test]
    fn names_round_trip() {
        for t in Type::ALL {
            assert_eq!(t.name().parse::<Type>().ok(), Some(t));
            assert_eq!(t.to_string(), t.name());
        }
    }

    #[test]
    fn all_is_indexed_by_discriminant() {
        for (i, t) in Type::ALL.iter().enumerate() {
            assert_eq!(*t as usize, i);
            assert_eq!(Type::try_from(i as u8).ok(), Some(*t));
        }
    }

    #[test]
    fn unknown_names() {
        assert_eq!(
            "unsigned".parse::<Type>().err(),
            Some(Error::UnknownType("unsigned".to_owned())),
        );
        assert_eq!(Type::try_from(15u8).err(), Some(Error::InvalidTag(15)));
        assert_eq!(describe_raw(15), "unknown");
        assert_eq!(describe_raw(255), "unknown");
        assert_eq!(describe_raw(14), "long double");
    }

    #[test]
    fn display() {
        assert_eq!(Value::Char(b'A').to_string(), "A");
        assert_eq!(Value::SignedChar(b'z' as i8).to_string(), "z");
        assert_eq!(Value::UnsignedChar(b'0').to_string(), "0");
        assert_eq!(Value::Int(-7).to_string(), "-7");
        assert_eq!(Value::UnsignedLongLong(u64::MAX).to_string(), "18446744073709551615");
        assert_eq!(Value::Bool(true).to_string(), "1");
        assert_eq!(Value::Bool(false).to_string(), "0");
    }

    #[test]
    fn display_latin1() {
        assert_eq!(Value::UnsignedChar(200).to_string(), "\u{c8}");
        assert_eq!(Value::SignedChar(-56).to_string(), "\u{c8}");
        assert_eq!(Value::Char(0xe9).to_string(), "\u{e9}");
    }

    #[test]
    fn display_general() {
        let cases: [(Value, &str); 16] = [
            (Value::Double(2.5), "2.5"),
            (Value::Float(100.0), "100"),
            (Value::Float(0.1), "0.1"),
            (Value::Double(1.0 / 3.0), "0.333333"),
            (Value::Double(-2.0 / 3.0), "-0.666667"),
            (Value::Double(1e20), "1e+20"),
            (Value::Double(123456.0), "123456"),
            (Value::Double(1234567.0), "1.23457e+06"),
            (Value::Double(999999.7), "1e+06"),
            (Value::Double(0.0001), "0.0001"),
            (Value::Double(0.00001), "1e-05"),
            (Value::LongDouble(-2.5e-300), "-2.5e-300"),
            (Value::Double(0.0), "0"),
            (Value::Double(-0.0), "-0"),
            (Value::Double(f64::INFINITY), "inf"),
            (Value::Double(f64::NEG_INFINITY), "-inf"),
        ];
        for (value, expected) in cases {
            assert_eq!(value.to_string(), expected, "{:?}", value);
        }
    }

    #[test]
    fn from_char() {
        assert_eq!(Value::try_from('A'), Ok(Value::Char(b'A')));
        assert_eq!(Value::try_from('\u{ff}'), Ok(Value::Char(0xff)));
        assert_eq!(Value::try_from('\u{100}'), Err(Error::NotAByte('\u{100}')));
    }

    #[test]
    fn natural_type() {
        assert_eq!(Value::from(100).natural_type(), Type::Int);
        assert_eq!(Value::from(1.5f32).natural_type(), Type::Float);
        assert_eq!(Value::from(7u64).natural_type(), Type::UnsignedLong);
        assert_eq!(Value::LongDouble(0.0).natural_type(), Type::LongDouble);
        for t in Type::ALL {
            let v = match t {
                Type::Bool => Value::Bool(false),
                Type::Char => Value::Char(0),
                Type::SignedChar => Value::SignedChar(0),
                Type::UnsignedChar => Value::UnsignedChar(0),
                Type::Short => Value::Short(0),
                Type::UnsignedShort => Value::UnsignedShort(0),
                Type::Int => Value::Int(0),
                Type::UnsignedInt => Value::UnsignedInt(0),
                Type::Long => Value::Long(0),
                Type::UnsignedLong => Value::UnsignedLong(0),
                Type::LongLong => Value::LongLong(0),
                Type::UnsignedLongLong => Value::UnsignedLongLong(0),
                Type::Float => Value::Float(0.0),
                Type::Double => Value::Double(0.0),
                Type::LongDouble => Value::LongDouble(0.0),
            };
            assert_eq!(v.natural_type(), t);
        }
    }
}
