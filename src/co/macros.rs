/// Declares a family of OS constants which are never combined (messages,
/// indexes, status codes) as a transparent newtype over the raw integer.
///
/// The second token is the prefix the SDK headers put in front of every name,
/// so `WM::CLOSE` displays as `WM_CLOSE`.
macro_rules! const_ordinary {
    (
        $(#[$doc:meta])*
        $name:ident: $ty:ty, $prefix:literal;
        $(
            $(#[$cdoc:meta])*
            $cname:ident = $val:expr
        ),* $(,)?
    ) => {
        $(#[$doc])*
        #[repr(transparent)]
        #[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
        pub struct $name($ty);

        impl $name {
            $(
                $(#[$cdoc])*
                pub const $cname: Self = Self($val);
            )*

            /// Every declared value, in declaration order.
            pub const NAMES: &'static [(&'static str, Self)] = &[
                $( (stringify!($cname), Self($val)), )*
            ];

            #[must_use]
            pub const fn from_raw(raw: $ty) -> Self {
                Self(raw)
            }

            #[must_use]
            pub const fn raw(self) -> $ty {
                self.0
            }

            /// First declared name carrying this value.
            pub fn name(self) -> Option<&'static str> {
                Self::NAMES.iter().find(|(_, v)| *v == self).map(|(n, _)| *n)
            }

            pub fn from_name(name: &str) -> Option<Self> {
                Self::NAMES
                    .iter()
                    .find(|(n, _)| n.eq_ignore_ascii_case(name))
                    .map(|(_, v)| *v)
            }
        }

        impl $crate::co::Constant for $name {
            const TYPE_NAME: &'static str = stringify!($name);
            const PREFIX: &'static str = $prefix;
            const KIND: $crate::co::ConstKind = $crate::co::ConstKind::Ordinary;
            const BITS: u32 = <$ty>::BITS;
            const SIGNED: bool = <$ty>::MIN != 0;
            const ENTRIES: &'static [(&'static str, i64)] = &[
                $( (stringify!($cname), ($val as $ty) as i64), )*
            ];
        }

        impl From<$name> for $ty {
            fn from(v: $name) -> $ty {
                v.0
            }
        }

        impl ::core::fmt::Debug for $name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                match self.name() {
                    Some(n) => write!(f, "{}::{}", stringify!($name), n),
                    None => write!(f, "{}({:#x})", stringify!($name), self.0),
                }
            }
        }

        impl ::core::fmt::Display for $name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                match self.name() {
                    Some(n) => write!(f, "{}{}", $prefix, n),
                    None => write!(f, "{:#x}", self.0),
                }
            }
        }
    };
}

/// Declares a family of combinable OS flags on top of `bitflags`.
///
/// Bits without a declared name are retained, since the OS adds flags
/// between releases.
macro_rules! const_bitflag {
    (
        $(#[$doc:meta])*
        $name:ident: $ty:ty, $prefix:literal;
        $(
            $(#[$cdoc:meta])*
            $cname:ident = $val:expr
        ),* $(,)?
    ) => {
        ::bitflags::bitflags! {
            $(#[$doc])*
            #[repr(transparent)]
            #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
            pub struct $name: $ty {
                $(
                    $(#[$cdoc])*
                    const $cname = $val;
                )*
                const _ = !0;
            }
        }

        impl $name {
            #[must_use]
            pub const fn from_raw(raw: $ty) -> Self {
                Self::from_bits_retain(raw)
            }

            #[must_use]
            pub const fn raw(self) -> $ty {
                self.bits()
            }
        }

        impl $crate::co::Constant for $name {
            const TYPE_NAME: &'static str = stringify!($name);
            const PREFIX: &'static str = $prefix;
            const KIND: $crate::co::ConstKind = $crate::co::ConstKind::Bitflag;
            const BITS: u32 = <$ty>::BITS;
            const SIGNED: bool = <$ty>::MIN != 0;
            const ENTRIES: &'static [(&'static str, i64)] = &[
                $( (stringify!($cname), (($val) as $ty) as i64), )*
            ];
        }

        impl From<$name> for $ty {
            fn from(v: $name) -> $ty {
                v.bits()
            }
        }

        impl ::core::fmt::Display for $name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                let table = $crate::co::ConstTable::of::<$name>();
                f.write_str(&table.describe(self.bits() as i64))
            }
        }
    };
}
