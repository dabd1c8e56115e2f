use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// COM class or interface identifier, laid out as the SDK's `GUID`.
#[repr(C)]
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct GUID {
    pub data1: u32,
    pub data2: u16,
    pub data3: u16,
    pub data4: [u8; 8],
}

impl GUID {
    /// From the 128-bit value as written in registry form, most significant
    /// group first: `GUID::from_u128(0x000214F9_0000_0000_C000_000000000046)`.
    pub const fn from_u128(v: u128) -> Self {
        Self {
            data1: (v >> 96) as u32,
            data2: (v >> 80) as u16,
            data3: (v >> 64) as u16,
            data4: (v as u64).to_be_bytes(),
        }
    }

    pub const fn to_u128(self) -> u128 {
        ((self.data1 as u128) << 96)
            | ((self.data2 as u128) << 80)
            | ((self.data3 as u128) << 64)
            | u64::from_be_bytes(self.data4) as u128
    }
}

impl FromStr for GUID {
    type Err = Error;

    /// Accepts `XXXXXXXX-XXXX-XXXX-XXXX-XXXXXXXXXXXX`, with or without
    /// surrounding braces, in any case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bad = || Error::InvalidGuid(s.to_string());
        let trimmed = s.trim();
        let body = match trimmed.strip_prefix('{') {
            Some(rest) => rest.strip_suffix('}').ok_or_else(bad)?,
            None => trimmed,
        };

        let bytes = body.as_bytes();
        if bytes.len() != 36 {
            return Err(bad());
        }
        let mut hex = String::with_capacity(32);
        for (i, &b) in bytes.iter().enumerate() {
            match i {
                8 | 13 | 18 | 23 if b == b'-' => {}
                8 | 13 | 18 | 23 => return Err(bad()),
                _ if b.is_ascii_hexdigit() => hex.push(b as char),
                _ => return Err(bad()),
            }
        }
        u128::from_str_radix(&hex, 16).map(Self::from_u128).map_err(|_| bad())
    }
}

impl fmt::Display for GUID {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let d = &self.data4;
        write!(
            f,
            "{{{:08X}-{:04X}-{:04X}-{:02X}{:02X}-{:02X}{:02X}{:02X}{:02X}{:02X}{:02X}}}",
            self.data1, self.data2, self.data3, d[0], d[1], d[2], d[3], d[4], d[5], d[6], d[7]
        )
    }
}

impl fmt::Debug for GUID {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "GUID({self})")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SHELL_LINK: GUID = GUID::from_u128(0x00021401_0000_0000_C000_000000000046);

    #[test]
    fn test_from_u128_field_order() {
        assert_eq!(SHELL_LINK.data1, 0x00021401);
        assert_eq!(SHELL_LINK.data2, 0);
        assert_eq!(SHELL_LINK.data3, 0);
        assert_eq!(SHELL_LINK.data4, [0xC0, 0, 0, 0, 0, 0, 0, 0x46]);
        assert_eq!(SHELL_LINK.to_u128(), 0x00021401_0000_0000_C000_000000000046);

        let sdk = windows_sys::core::GUID::from_u128(0xEA1AFB91_9E28_4B86_90E9_9E9F8A5EEFAF);
        let ours = GUID::from_u128(0xEA1AFB91_9E28_4B86_90E9_9E9F8A5EEFAF);
        assert_eq!((ours.data1, ours.data2, ours.data3, ours.data4), (sdk.data1, sdk.data2, sdk.data3, sdk.data4));
        assert_eq!(size_of::<GUID>(), size_of::<windows_sys::core::GUID>());
    }

    #[test]
    fn test_display_registry_form() {
        assert_eq!(SHELL_LINK.to_string(), "{00021401-0000-0000-C000-000000000046}");
        assert_eq!(format!("{SHELL_LINK:?}"), "GUID({00021401-0000-0000-C000-000000000046})");
    }

    #[test]
    fn test_parse() {
        let braced: GUID = "{ea1afb91-9e28-4b86-90e9-9e9f8a5eefaf}".parse().unwrap();
        let bare: GUID = "EA1AFB91-9E28-4B86-90E9-9E9F8A5EEFAF".parse().unwrap();
        assert_eq!(braced, bare);
        assert_eq!(bare.to_u128(), 0xEA1AFB91_9E28_4B86_90E9_9E9F8A5EEFAF);
        assert_eq!(SHELL_LINK.to_string().parse::<GUID>().unwrap(), SHELL_LINK);
    }

    #[test]
    fn test_parse_rejects_malformed() {
        for s in [
            "",
            "{00021401-0000-0000-C000-000000000046",
            "00021401-0000-0000-C000-000000000046}",
            "00021401+0000-0000-C000-000000000046",
            "0002140-10000-0000-C000-000000000046",
            "00021401-0000-0000-C000-00000000004G",
            "00021401-0000-0000-C000-0000000000460",
            "+0021401-0000-0000-C000-000000000046",
        ] {
            assert!(matches!(s.parse::<GUID>(), Err(Error::InvalidGuid(_))), "{s:?}");
        }
    }
}
