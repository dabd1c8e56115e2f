/* --- src/utils.rs --- */

/// Macro to convert an ASCII string literal to a null-terminated UTF-16 array
/// at compile time.
///
/// # Example
/// ```rust
/// use winbind::w;
/// let wide_str = w!("Hello");
/// assert_eq!(wide_str, &[72, 101, 108, 108, 111, 0]);
/// ```
#[macro_export]
macro_rules! w {
    ($s:literal) => {{
        const S: &[u8] = $s.as_bytes();
        const LEN: usize = S.len() + 1;
        const UTF16: [u16; LEN] = {
            let mut out = [0u16; LEN];
            let mut i = 0;
            while i < S.len() {
                assert!(S[i] < 0x80, "w! only accepts ASCII literals");
                out[i] = S[i] as u16;
                i += 1;
            }
            out
        };
        &UTF16[..]
    }};
}

/// Convert a Rust string to a null-terminated UTF-16 vector.
pub fn to_wstring(value: &str) -> Vec<u16> {
    value.encode_utf16().chain(std::iter::once(0)).collect()
}

/// Decode UTF-16 up to the first NUL, or the whole slice if there is none.
/// Unpaired surrogates are replaced.
pub fn from_wide(buf: &[u16]) -> String {
    let len = buf.iter().position(|&c| c == 0).unwrap_or(buf.len());
    String::from_utf16_lossy(&buf[..len])
}

/// Split a `REG_MULTI_SZ`-style buffer: NUL-terminated strings ended by an
/// empty string.
///
/// A missing final terminator is tolerated.
pub fn parse_multi_sz(buf: &[u16]) -> Vec<String> {
    let mut out = Vec::new();
    for chunk in buf.split(|&c| c == 0) {
        if chunk.is_empty() {
            break;
        }
        out.push(String::from_utf16_lossy(chunk));
    }
    out
}

/// Inverse of [`parse_multi_sz`]. Always double-NUL terminated.
pub fn to_multi_sz<S: AsRef<str>>(items: &[S]) -> Vec<u16> {
    let mut out = Vec::new();
    for item in items {
        out.extend(item.as_ref().encode_utf16());
        out.push(0);
    }
    if items.is_empty() {
        out.push(0);
    }
    out.push(0);
    out
}

/// Remove menu and control accelerator markers.
///
/// `&&` is an escaped literal ampersand; any other `&` marks the next
/// character as the accelerator and is dropped, including a trailing one.
pub fn remove_accel_ampersands(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();
    while let Some(c) = chars.next() {
        if c == '&' {
            if chars.peek() == Some(&'&') {
                out.push('&');
                chars.next();
            }
        } else {
            out.push(c);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_w_macro() {
        let wide = w!("open");
        assert_eq!(wide, &[0x6F, 0x70, 0x65, 0x6E, 0]);
        assert_eq!(w!(""), &[0]);
    }

    #[test]
    fn test_wide_round_trip_stops_at_nul() {
        let mut buf = to_wstring("Größe");
        assert_eq!(*buf.last().unwrap(), 0);
        buf.extend_from_slice(&[0x41, 0x42]);
        assert_eq!(from_wide(&buf), "Größe");
        assert_eq!(from_wide(&[0x41, 0x42]), "AB");
    }

    #[test]
    fn test_multi_sz() {
        let raw = to_multi_sz(&["a", "bc"]);
        assert_eq!(raw, vec![0x61, 0, 0x62, 0x63, 0, 0]);
        assert_eq!(parse_multi_sz(&raw), vec!["a", "bc"]);

        // Missing final terminator
        assert_eq!(parse_multi_sz(&[0x61, 0, 0x62]), vec!["a", "b"]);
        assert!(parse_multi_sz(&[0, 0]).is_empty());
        assert!(parse_multi_sz(&[]).is_empty());
        assert_eq!(to_multi_sz::<&str>(&[]), vec![0, 0]);
    }

    #[test]
    fn test_remove_accel_ampersands() {
        assert_eq!(remove_accel_ampersands("&File"), "File");
        assert_eq!(remove_accel_ampersands("Save &As..."), "Save As...");
        assert_eq!(remove_accel_ampersands("Fish && Chips"), "Fish & Chips");
        assert_eq!(remove_accel_ampersands("&&&Edit"), "&Edit");
        assert_eq!(remove_accel_ampersands("Trailing&"), "Trailing");
        assert_eq!(remove_accel_ampersands(""), "");
    }
}
