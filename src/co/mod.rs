//! Typed OS constants.
//!
//! Every family of Win32 integer constants gets its own type, so a window
//! message cannot be passed where a window style is expected. Names follow the
//! SDK headers with the family prefix stripped: `WM_CLOSE` is `co::WM::CLOSE`.

#![allow(non_camel_case_types)]

#[macro_use]
mod macros;

mod com;
mod controls;
mod error;
mod gdi;
mod kernel;
mod reg;
mod user;

pub use com::*;
pub use controls::*;
pub use error::*;
pub use gdi::*;
pub use kernel::*;
pub use reg::*;
pub use user::*;

use serde::Serialize;
use std::cmp::Reverse;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ConstKind {
    Ordinary,
    Bitflag,
}

/// Implemented by every constant type declared in this module.
pub trait Constant {
    const TYPE_NAME: &'static str;
    /// Prefix of the SDK spelling, `WM_` for `WM_CLOSE`.
    const PREFIX: &'static str;
    const KIND: ConstKind;
    /// Width of the underlying integer.
    const BITS: u32;
    const SIGNED: bool;
    const ENTRIES: &'static [(&'static str, i64)];
}

/// Type-erased view of one constant family.
#[derive(Debug, Clone, Copy)]
pub struct ConstTable {
    pub type_name: &'static str,
    pub prefix: &'static str,
    pub kind: ConstKind,
    pub bits: u32,
    pub signed: bool,
    pub entries: &'static [(&'static str, i64)],
}

impl ConstTable {
    pub const fn of<T: Constant>() -> Self {
        Self {
            type_name: T::TYPE_NAME,
            prefix: T::PREFIX,
            kind: T::KIND,
            bits: T::BITS,
            signed: T::SIGNED,
            entries: T::ENTRIES,
        }
    }

    /// Value of the constant whose SDK spelling is `os_name`.
    pub fn find(&self, os_name: &str) -> Option<(&'static str, i64)> {
        let upper = os_name.to_ascii_uppercase();
        let rest = upper.strip_prefix(self.prefix)?;
        self.entries.iter().find(|(n, _)| *n == rest).copied()
    }

    fn mask(&self) -> i64 {
        if self.bits >= 64 { -1 } else { (1i64 << self.bits) - 1 }
    }

    /// Reads `raw` the way the family's integer type would: truncated to its
    /// width, then sign-extended for signed families. `-1` for a `u32`
    /// family is `0xFFFF_FFFF`.
    pub fn normalize(&self, raw: i64) -> i64 {
        if self.bits >= 64 {
            return raw;
        }
        let low = raw & self.mask();
        if self.signed && low & (1i64 << (self.bits - 1)) != 0 { low | !self.mask() } else { low }
    }

    /// Renders a raw value with declared names.
    ///
    /// Flags are decomposed greedily, widest declared combination first, and
    /// bits left over are appended in hex.
    pub fn describe(&self, raw: i64) -> String {
        let raw = self.normalize(raw);
        match self.kind {
            ConstKind::Ordinary => self
                .entries
                .iter()
                .find(|(_, v)| *v == raw)
                .map(|(n, _)| format!("{}{}", self.prefix, n))
                .unwrap_or_else(|| signed_hex(raw)),
            ConstKind::Bitflag => {
                // Flags are bit patterns, so compare unsigned.
                let mask = self.mask();
                let raw = raw & mask;
                if raw == 0 {
                    return self
                        .entries
                        .iter()
                        .find(|(_, v)| *v & mask == 0)
                        .map(|(n, _)| format!("{}{}", self.prefix, n))
                        .unwrap_or_else(|| "0".to_string());
                }

                let mut candidates: Vec<(&str, i64)> = self
                    .entries
                    .iter()
                    .map(|(n, v)| (*n, *v & mask))
                    .filter(|(_, v)| *v != 0 && (*v & raw) == *v)
                    .collect();
                candidates.sort_by_key(|(_, v)| Reverse(v.count_ones()));

                let mut remaining = raw;
                let mut parts = Vec::new();
                for (n, v) in candidates {
                    if (v & remaining) == v {
                        parts.push(format!("{}{}", self.prefix, n));
                        remaining &= !v;
                    }
                }
                if remaining != 0 {
                    parts.push(format!("{remaining:#x}"));
                }
                parts.join(" | ")
            }
        }
    }
}

fn signed_hex(v: i64) -> String {
    if v < 0 { format!("-{:#x}", v.unsigned_abs()) } else { format!("{v:#x}") }
}

/// One constant matched by [`lookup`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConstMatch {
    pub type_name: &'static str,
    pub name: String,
    pub value: i64,
}

impl fmt::Display for ConstMatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} = {:#x} ({}) [{}]", self.name, self.value, self.value, self.type_name)
    }
}

pub static TABLES: &[ConstTable] = &[
    // user
    ConstTable::of::<WM>(),
    ConstTable::of::<WS>(),
    ConstTable::of::<WS_EX>(),
    ConstTable::of::<CS>(),
    ConstTable::of::<SW>(),
    ConstTable::of::<VK>(),
    ConstTable::of::<MB>(),
    ConstTable::of::<DLGID>(),
    ConstTable::of::<GWLP>(),
    ConstTable::of::<SWP>(),
    ConstTable::of::<SM>(),
    ConstTable::of::<COLOR>(),
    ConstTable::of::<IDC>(),
    ConstTable::of::<IDI>(),
    // controls
    ConstTable::of::<BS>(),
    ConstTable::of::<BST>(),
    ConstTable::of::<BM>(),
    ConstTable::of::<ES>(),
    ConstTable::of::<EM>(),
    ConstTable::of::<EN>(),
    ConstTable::of::<SS>(),
    ConstTable::of::<CB>(),
    ConstTable::of::<LVS>(),
    ConstTable::of::<LVS_EX>(),
    ConstTable::of::<LVM>(),
    ConstTable::of::<PBM>(),
    ConstTable::of::<TBM>(),
    ConstTable::of::<CDDS>(),
    ConstTable::of::<CDRF>(),
    // gdi
    ConstTable::of::<DT>(),
    ConstTable::of::<BKMODE>(),
    ConstTable::of::<STOCK>(),
    ConstTable::of::<PS>(),
    ConstTable::of::<FW>(),
    ConstTable::of::<DWMWA>(),
    // com
    ConstTable::of::<CLSCTX>(),
    ConstTable::of::<COINIT>(),
    ConstTable::of::<STGM>(),
    ConstTable::of::<TBPF>(),
    // registry
    ConstTable::of::<REG>(),
    ConstTable::of::<KEY>(),
    ConstTable::of::<REG_OPTION>(),
    // kernel
    ConstTable::of::<FORMAT_MESSAGE>(),
    ConstTable::of::<LOAD_LIBRARY>(),
    // status codes
    ConstTable::of::<ERROR>(),
    ConstTable::of::<HRESULT>(),
    ConstTable::of::<FACILITY>(),
    ConstTable::of::<SEVERITY>(),
];

/// Table for a type name such as `"WS_EX"`, case-insensitive.
pub fn table(type_name: &str) -> Option<&'static ConstTable> {
    TABLES.iter().find(|t| t.type_name.eq_ignore_ascii_case(type_name))
}

/// [`ConstTable::describe`] for the family called `type_name`.
pub fn describe(type_name: &str, raw: i64) -> Option<String> {
    table(type_name).map(|t| t.describe(raw))
}

/// Every declared constant whose SDK spelling is `os_name`.
///
/// A spelling can legitimately resolve in more than one family.
pub fn lookup(os_name: &str) -> Vec<ConstMatch> {
    TABLES
        .iter()
        .filter_map(|t| {
            t.find(os_name).map(|(n, v)| ConstMatch {
                type_name: t.type_name,
                name: format!("{}{}", t.prefix, n),
                value: v,
            })
        })
        .collect()
}
