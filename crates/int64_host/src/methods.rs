//! Instance method names and their aliases.
//!
//! Every method has one canonical name plus zero or more aliases. All names
//! resolve through a single registry built on first use, so an alias is
//! indistinguishable from the method it names.

use std::fmt;
use std::sync::LazyLock;

use rustc_hash::FxHashMap;

/// An instance method of the host integer type.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Method {
    // Arithmetic
    Add,
    Subtract,
    Multiply,
    Divide,
    Modulo,
    Negate,
    Abs,
    // Bitwise
    And,
    Or,
    Xor,
    Not,
    ShiftLeft,
    ShiftRight,
    // Comparison
    Equals,
    NotEquals,
    GreaterThan,
    GreaterThanOrEquals,
    LessThan,
    LessThanOrEquals,
    Compare,
    // Predicates
    IsEven,
    IsOdd,
    IsPositive,
    IsNegative,
    IsZero,
    IsNonZero,
    IsSafe,
    IsUnsafe,
    // Inspection and conversion
    BitSizeAbs,
    High,
    Low,
    ToNumber,
    ToNumberUnsafe,
    ToString,
}

impl Method {
    /// All methods, in declaration order.
    pub const ALL: &'static [Method] = &[
        Self::Add,
        Self::Subtract,
        Self::Multiply,
        Self::Divide,
        Self::Modulo,
        Self::Negate,
        Self::Abs,
        Self::And,
        Self::Or,
        Self::Xor,
        Self::Not,
        Self::ShiftLeft,
        Self::ShiftRight,
        Self::Equals,
        Self::NotEquals,
        Self::GreaterThan,
        Self::GreaterThanOrEquals,
        Self::LessThan,
        Self::LessThanOrEquals,
        Self::Compare,
        Self::IsEven,
        Self::IsOdd,
        Self::IsPositive,
        Self::IsNegative,
        Self::IsZero,
        Self::IsNonZero,
        Self::IsSafe,
        Self::IsUnsafe,
        Self::BitSizeAbs,
        Self::High,
        Self::Low,
        Self::ToNumber,
        Self::ToNumberUnsafe,
        Self::ToString,
    ];

    /// The canonical host name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Add => "add",
            Self::Subtract => "subtract",
            Self::Multiply => "multiply",
            Self::Divide => "divide",
            Self::Modulo => "modulo",
            Self::Negate => "negate",
            Self::Abs => "abs",
            Self::And => "and",
            Self::Or => "or",
            Self::Xor => "xor",
            Self::Not => "not",
            Self::ShiftLeft => "shiftLeft",
            Self::ShiftRight => "shiftRight",
            Self::Equals => "equals",
            Self::NotEquals => "notEquals",
            Self::GreaterThan => "greaterThan",
            Self::GreaterThanOrEquals => "greaterThanOrEquals",
            Self::LessThan => "lessThan",
            Self::LessThanOrEquals => "lessThanOrEquals",
            Self::Compare => "compare",
            Self::IsEven => "isEven",
            Self::IsOdd => "isOdd",
            Self::IsPositive => "isPositive",
            Self::IsNegative => "isNegative",
            Self::IsZero => "isZero",
            Self::IsNonZero => "isNonZero",
            Self::IsSafe => "isSafe",
            Self::IsUnsafe => "isUnsafe",
            Self::BitSizeAbs => "bitSizeAbs",
            Self::High => "high",
            Self::Low => "low",
            Self::ToNumber => "toNumber",
            Self::ToNumberUnsafe => "toNumberUnsafe",
            Self::ToString => "toString",
        }
    }

    /// Alternative names that resolve to this method.
    pub const fn aliases(self) -> &'static [&'static str] {
        match self {
            Self::Add => &["plus"],
            Self::Subtract => &["minus", "sub"],
            Self::Multiply => &["times", "mul"],
            Self::Divide => &["divideBy", "dividedBy", "div", "over"],
            Self::Modulo => &["mod"],
            Self::Negate => &["neg"],
            Self::Abs => &["absoluteValue"],
            Self::ShiftLeft => &["shl"],
            Self::ShiftRight => &["shr"],
            Self::Equals => &["eq", "isEqualTo"],
            Self::NotEquals => &["neq", "isNotEqualTo", "doesNotEqual"],
            Self::GreaterThan => &["gt", "isGreaterThan"],
            Self::GreaterThanOrEquals => &["gte", "isGreaterThanOrEqualTo"],
            Self::LessThan => &["lt", "isLessThan"],
            Self::LessThanOrEquals => &["lte", "isLessThanOrEqualTo"],
            Self::IsNonZero => &["isNotZero"],
            Self::ToNumber => &["valueOf"],
            _ => &[],
        }
    }

    /// Resolve a canonical name or alias.
    pub fn lookup(name: &str) -> Option<Self> {
        REGISTRY.get(name).copied()
    }

    /// Every name the registry knows, paired with the method it resolves to.
    pub fn names() -> impl Iterator<Item = (&'static str, Method)> {
        Self::ALL.iter().flat_map(|&method| {
            std::iter::once(method.name())
                .chain(method.aliases().iter().copied())
                .map(move |name| (name, method))
        })
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Name-to-method table shared by every lookup.
static REGISTRY: LazyLock<FxHashMap<&'static str, Method>> = LazyLock::new(|| {
    let registry: FxHashMap<_, _> = Method::names().collect();
    tracing::trace!(names = registry.len(), "method registry built");
    registry
});
