//! Locale-independent string parsing for Float32.
//!
//! Two-pass scheme: the first pass hands the longest plausible token to the
//! platform float parser; if characters remain, a second pass rebuilds a
//! cleaned buffer (grouping underscores removed, leading zeros collapsed,
//! grammar validated character by character) and reparses. Out-of-range
//! results warn when non-terminal and fail the strict mode when they occur
//! on the final authoritative parse.

use crate::core::error::{ValueError, ValueResult};
use crate::core::float32::Float32;

/// Display cap for the offending literal in out-of-range diagnostics.
const MAX_ERROR_WIDTH: usize = 20;

impl Float32 {
    /// Parse a string under the strict grammar.
    ///
    /// Surrounding ASCII whitespace is tolerated; underscores are accepted
    /// strictly between digits; anything else unconsumed is an error.
    pub fn parse(s: &str) -> ValueResult<Self> {
        match parse_str(s, true, true)? {
            Some(v) => Ok(Self::new(v)),
            // Unreachable when raising, kept total for the signature.
            None => Err(ValueError::invalid_string(s)),
        }
    }

    /// Parse the longest valid prefix, never failing.
    ///
    /// Returns `0.0` when no conversion is possible, exactly `0.0` for a
    /// `0x`/`0X` prefix (hex floats are rejected from the fast path), and
    /// cuts the input at an embedded nul.
    #[must_use]
    pub fn parse_lenient(s: &str) -> Self {
        match parse_str(s, false, false) {
            Ok(Some(v)) => Self::new(v),
            _ => Self::new(0.0),
        }
    }
}

/// Shared parse core.
///
/// `strict` selects the full-consumption grammar (badcheck); `raise`
/// selects erroring over the `Ok(None)` sentinel. The embedded-nul case
/// errors in strict mode regardless of `raise`.
pub(crate) fn parse_str(s: &str, strict: bool, raise: bool) -> ValueResult<Option<f32>> {
    let s = match s.find('\0') {
        Some(_) if strict => return Err(ValueError::NulByte),
        // C-string semantics: the lenient mode reads up to the nul.
        Some(pos) => &s[..pos],
        None => s,
    };

    let t = s.trim_matches(|c: char| c.is_ascii_whitespace());

    // Reject 0x... / 0X... from the fast path.
    if !strict && (t.starts_with("0x") || t.starts_with("0X")) {
        return Ok(Some(0.0));
    }

    let end = float_prefix_len(t.as_bytes());
    if end == 0 {
        // No conversion performed at all.
        return if strict { bad(s, raise) } else { Ok(Some(0.0)) };
    }

    let (value, out_of_range) = parse_primitive(&t[..end]);
    if end == t.len() {
        // Fully consumed: this was the final authoritative parse.
        if out_of_range {
            return finish_out_of_range(value, t, strict, raise);
        }
        return Ok(Some(value));
    }

    // The primitive stopped partway; a range problem here is non-terminal.
    if out_of_range {
        warn_out_of_range(&t[..end]);
    }
    second_pass(s, t, end, strict, raise)
}

/// Rebuild a cleaned buffer from `t` and reparse it. `end` is where the
/// first-pass primitive stopped.
fn second_pass(
    original: &str,
    t: &str,
    end: usize,
    strict: bool,
    raise: bool,
) -> ValueResult<Option<f32>> {
    let b = t.as_bytes();
    // Growable buffer, sized up front; malformed input fails cleanly
    // instead of truncating.
    let mut out = String::with_capacity(t.len());
    let mut i = 0;

    // Sign, collapsed leading zeros, then the span the primitive accepted.
    if b[0] == b'+' || b[0] == b'-' {
        out.push(b[0] as char);
        i = 1;
    }
    if i < end && b[i] == b'0' {
        out.push('0');
        while i < end && b[i] == b'0' {
            i += 1;
        }
    }
    while i < end {
        out.push(b[i] as char);
        i += 1;
    }

    let mut dot_seen = out.contains('.');
    let mut exponent_seen = out.contains(['e', 'E']);
    let mut prev: u8 = out.as_bytes().last().copied().unwrap_or(0);

    // Validate and transfer the characters the primitive rejected.
    while i < b.len() {
        let c = b[i];

        if c == b'_' {
            // Grouping separator: only strictly between two digits.
            let next = b.get(i + 1).copied();
            if !prev.is_ascii_digit() || !next.is_some_and(|n| n.is_ascii_digit()) {
                if strict {
                    return bad(original, raise);
                }
                break;
            }
            i += 1;
            continue;
        }

        if !exponent_seen && matches!(c, b'e' | b'E' | b'p' | b'P') {
            // First exponent marker: keep it, an optional sign, and a
            // single collapsed leading zero. A second marker is not
            // treated specially and falls through the digit check below.
            exponent_seen = true;
            out.push(c as char);
            prev = c;
            i += 1;
            if i < b.len() && (b[i] == b'+' || b[i] == b'-') {
                out.push(b[i] as char);
                prev = b[i];
                i += 1;
            }
            if i < b.len() && b[i] == b'0' {
                out.push('0');
                prev = b'0';
                while i < b.len() && b[i] == b'0' {
                    i += 1;
                }
            }
            continue;
        }

        if c.is_ascii_whitespace() {
            // A whitespace tail is fine; anything after it is not.
            if b[i..].iter().all(u8::is_ascii_whitespace) {
                break;
            }
            if strict {
                return bad(original, raise);
            }
            break;
        }

        if c == b'.' {
            if dot_seen {
                if strict {
                    return bad(original, raise);
                }
                break;
            }
            dot_seen = true;
        } else if !c.is_ascii_digit() {
            if strict {
                return bad(original, raise);
            }
            break;
        }

        out.push(c as char);
        prev = c;
        i += 1;
    }

    let end2 = float_prefix_len(out.as_bytes());
    if end2 == 0 {
        return if strict { bad(original, raise) } else { Ok(Some(0.0)) };
    }
    // Leftovers in the cleaned buffer (e.g. a kept `p` exponent the
    // primitive cannot read) are malformed under the strict grammar.
    if strict && end2 != out.len() {
        return bad(original, raise);
    }

    let (value, out_of_range) = parse_primitive(&out[..end2]);
    if out_of_range {
        // The cleaned reparse is the final authoritative attempt.
        return finish_out_of_range(value, t, strict, raise);
    }
    Ok(Some(value))
}

/// Length of the longest prefix the platform primitive would consume:
/// optional sign, digits with at most one dot, optional `e`/`E` exponent
/// with sign and digits.
fn float_prefix_len(b: &[u8]) -> usize {
    let mut i = 0;
    if i < b.len() && (b[i] == b'+' || b[i] == b'-') {
        i += 1;
    }
    let mut digits = 0;
    while i < b.len() && b[i].is_ascii_digit() {
        i += 1;
        digits += 1;
    }
    if i < b.len() && b[i] == b'.' {
        let mut j = i + 1;
        let mut frac = 0;
        while j < b.len() && b[j].is_ascii_digit() {
            j += 1;
            frac += 1;
        }
        if digits + frac > 0 {
            i = j;
            digits += frac;
        }
    }
    if digits == 0 {
        return 0;
    }
    if i < b.len() && (b[i] == b'e' || b[i] == b'E') {
        let mut j = i + 1;
        if j < b.len() && (b[j] == b'+' || b[j] == b'-') {
            j += 1;
        }
        let mut exp = 0;
        while j < b.len() && b[j].is_ascii_digit() {
            j += 1;
            exp += 1;
        }
        if exp > 0 {
            i = j;
        }
    }
    i
}

/// Run the platform primitive over an already-validated token and flag
/// overflow/underflow: an infinite, zero, or subnormal result from a token
/// whose mantissa has a nonzero digit is out of range.
fn parse_primitive(p: &str) -> (f32, bool) {
    let value: f32 = p.parse().unwrap_or(0.0);
    let out_of_range = if value.is_infinite() {
        true
    } else if value == 0.0 || value.is_subnormal() {
        mantissa_has_nonzero_digit(p)
    } else {
        false
    };
    (value, out_of_range)
}

fn mantissa_has_nonzero_digit(p: &str) -> bool {
    p.bytes()
        .take_while(|&c| c != b'e' && c != b'E')
        .any(|c| c.is_ascii_digit() && c != b'0')
}

fn bad(original: &str, raise: bool) -> ValueResult<Option<f32>> {
    if raise {
        Err(ValueError::invalid_string(original))
    } else {
        Ok(None)
    }
}

fn finish_out_of_range(
    value: f32,
    token: &str,
    strict: bool,
    raise: bool,
) -> ValueResult<Option<f32>> {
    if strict {
        return if raise {
            Err(ValueError::out_of_range(ellipsize(token)))
        } else {
            Ok(None)
        };
    }
    warn_out_of_range(token);
    Ok(Some(value))
}

fn warn_out_of_range(token: &str) {
    // Fire-and-forget diagnostic; the caller keeps the clamped value.
    tracing::warn!(literal = %ellipsize(token), "Float32 literal out of range");
}

fn ellipsize(s: &str) -> String {
    if s.chars().count() > MAX_ERROR_WIDTH {
        let mut cut: String = s.chars().take(MAX_ERROR_WIDTH).collect();
        cut.push_str("...");
        cut
    } else {
        s.to_owned()
    }
}
