// src/cell_id/token.rs
//! Compact hex tokens and the human-readable `face/digits` form.

use std::fmt;
use std::str::FromStr;

use crate::constants::{LEGACY_NONE_TOKEN, MAX_LEVEL, MAX_TOKEN_LEN};
use crate::types::{CellId, S2Error};

impl CellId {
  /// Lowercase hex of the id with trailing zero digits removed, e.g. `"89c25"`.
  ///
  /// Tokens of distinct valid ids differ, sort like their ids when zero-padded, and
  /// are never longer than 16 characters. `CellId::NONE` encodes as `"0"`.
  #[must_use]
  pub fn to_token(self) -> String {
    if self.0 == 0 {
      return "0".to_string();
    }
    let hex = format!("{:016x}", self.0);
    hex.trim_end_matches('0').to_string()
  }

  /// Parses a token produced by `to_token`. Upper-case digits and the legacy none
  /// token `"X"` are accepted.
  ///
  /// # Errors
  ///
  /// `TokenInvalid` for empty, over-long or non-hex input; `CellInvalid` if the digits
  /// decode to a non-zero id that is not a valid cell.
  pub fn from_token(token: &str) -> Result<CellId, S2Error> {
    if token.eq_ignore_ascii_case(LEGACY_NONE_TOKEN) {
      return Ok(CellId::NONE);
    }
    if token.is_empty() || token.len() > MAX_TOKEN_LEN || !token.bytes().all(|b| b.is_ascii_hexdigit()) {
      tracing::trace!(token, "rejected malformed cell token");
      return Err(S2Error::TokenInvalid);
    }
    let value = u64::from_str_radix(token, 16).map_err(|_| S2Error::TokenInvalid)?;
    let id = CellId(value << (4 * (MAX_TOKEN_LEN - token.len())));
    if id.0 != 0 && !id.is_valid() {
      tracing::trace!(token, "token does not name a valid cell");
      return Err(S2Error::CellInvalid);
    }
    Ok(id)
  }

  /// Parses the `face/digits` form written by `Display`, e.g. `"3/0123"`.
  ///
  /// # Errors
  ///
  /// `TokenInvalid` if the face is not a single digit below 6 or any quadrant digit is
  /// not 0-3 or there are more than 30 of them.
  pub fn from_debug_string(s: &str) -> Result<CellId, S2Error> {
    let parsed = parse_debug_string(s);
    if parsed.is_none() {
      tracing::trace!(input = s, "rejected malformed cell debug string");
    }
    parsed.ok_or(S2Error::TokenInvalid)
  }
}

fn parse_debug_string(s: &str) -> Option<CellId> {
  let (face, digits) = s.split_once('/')?;
  let face = match face.as_bytes() {
    [d @ b'0'..=b'5'] => d - b'0',
    _ => return None,
  };
  if digits.len() > usize::from(MAX_LEVEL) {
    return None;
  }
  let mut id = CellId::from_face_pos_level(face, 0, 0).ok()?;
  for d in digits.bytes() {
    let position = match d {
      b'0'..=b'3' => usize::from(d - b'0'),
      _ => return None,
    };
    id = id.children().ok()?[position];
  }
  Some(id)
}

impl fmt::Display for CellId {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    if !self.is_valid() {
      return write!(f, "Invalid: {:016x}", self.0);
    }
    write!(f, "{}/", self.face())?;
    for level in 1..=self.level() {
      write!(f, "{}", self.child_position(level))?;
    }
    Ok(())
  }
}

impl FromStr for CellId {
  type Err = S2Error;

  /// Same as `CellId::from_debug_string`.
  fn from_str(s: &str) -> Result<Self, Self::Err> {
    CellId::from_debug_string(s)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_known_tokens() {
    assert_eq!(CellId(266).to_token(), "000000000000010a");
    assert_eq!(CellId(-9185834709882503168i64 as u64).to_token(), "80855c");
    assert_eq!(CellId::NONE.to_token(), "0");
    assert_eq!(CellId::from_face_pos_level(0, 0, 0).unwrap().to_token(), "1");
    assert_eq!(CellId::from_face_pos_level(5, 0, 0).unwrap().to_token(), "b");
  }

  #[test]
  fn test_from_token() {
    assert_eq!(CellId::from_token("80855c").unwrap(), CellId(0x8085_5c00_0000_0000));
    assert_eq!(CellId::from_token("80855C").unwrap(), CellId(0x8085_5c00_0000_0000));
    assert_eq!(CellId::from_token("0").unwrap(), CellId::NONE);
    assert_eq!(CellId::from_token("X").unwrap(), CellId::NONE);
    assert_eq!(CellId::from_token("x").unwrap(), CellId::NONE);
  }

  #[test]
  fn test_from_token_rejects() {
    assert_eq!(CellId::from_token(""), Err(S2Error::TokenInvalid));
    assert_eq!(CellId::from_token("876b e99"), Err(S2Error::TokenInvalid));
    assert_eq!(CellId::from_token("876bee99\n"), Err(S2Error::TokenInvalid));
    assert_eq!(CellId::from_token("876[ee99"), Err(S2Error::TokenInvalid));
    assert_eq!(CellId::from_token(" 876bee99"), Err(S2Error::TokenInvalid));
    assert_eq!(CellId::from_token("+1"), Err(S2Error::TokenInvalid));
    assert_eq!(CellId::from_token("12345678901234567"), Err(S2Error::TokenInvalid));
    // Face 7 and a sentinel at an odd bit.
    assert_eq!(CellId::from_token("f"), Err(S2Error::CellInvalid));
    assert_eq!(CellId::from_token("12"), Err(S2Error::CellInvalid));
    assert_eq!(CellId::from_token("000000000000010a"), Err(S2Error::CellInvalid));
  }

  #[test]
  fn test_display() {
    let id = CellId::from_face_pos_level(3, 0, 0).unwrap();
    assert_eq!(id.to_string(), "3/");
    let child = id.children().unwrap()[0].children().unwrap()[1].children().unwrap()[2].children().unwrap()[3];
    assert_eq!(child.to_string(), "3/0123");
    assert_eq!(CellId::NONE.to_string(), "Invalid: 0000000000000000");
  }

  #[test]
  fn test_debug_string_round_trip() {
    let leaf = CellId::from_face_pos_level(4, 0x0123_4567_89ab_cdef, MAX_LEVEL).unwrap();
    for level in [0, 1, 7, 29, MAX_LEVEL] {
      let id = leaf.parent_at_level(level).unwrap();
      assert_eq!(CellId::from_debug_string(&id.to_string()).unwrap(), id);
      assert_eq!(id.to_string().parse::<CellId>().unwrap(), id);
    }
  }

  #[test]
  fn test_debug_string_rejects() {
    for bad in ["", "3", "6/", "/0", "3/4", "33/0", "3/01x", "3/0000000000000000000000000000000"] {
      assert_eq!(CellId::from_debug_string(bad), Err(S2Error::TokenInvalid), "{bad:?}");
    }
  }
}
