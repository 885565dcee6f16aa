//! Token/group resolver
//!
//! Maps a `(group, token)` pair to a descriptor index. The query is the group
//! concatenated with the token; each table token is compared over at most
//! [`TOKEN_LEN`] leading characters and matches as soon as both strings end
//! at the same position. The first matching entry wins, so the table owner
//! must keep tokens free of ambiguous prefix relations.
//!
//! This is a linear scan and the hottest lookup in the subsystem. Callers
//! should reuse the `index` cached on a node instead of resolving again.

use crate::descriptor::{GROUP_LEN, TOKEN_LEN};
use crate::table::ConfigTable;
use heapless::String;

/// Query buffer: group followed by token
type Query = String<{ GROUP_LEN + TOKEN_LEN + 1 }>;

/// Fixed-width, early-terminating token comparison
fn token_matches(token: &[u8], query: &[u8]) -> bool {
    let at = |s: &[u8], i: usize| s.get(i).copied().unwrap_or(0);

    if at(token, 0) != at(query, 0) {
        return false;
    }
    for i in 1..TOKEN_LEN {
        let c = at(token, i);
        if c == 0 && at(query, i) == 0 {
            return true;
        }
        if c != at(query, i) {
            return false;
        }
    }
    true
}

/// Append up to `limit` characters of `src` to `dst`
fn push_bounded(dst: &mut Query, src: &str, limit: usize) {
    for ch in src.chars().take(limit) {
        if dst.push(ch).is_err() {
            break;
        }
    }
}

/// Resolve a `(group, token)` pair to a descriptor index
pub fn resolve<S: 'static>(table: &ConfigTable<S>, group: &str, token: &str) -> Option<usize> {
    let mut query = Query::new();
    push_bounded(&mut query, group, GROUP_LEN + 1);
    push_bounded(&mut query, token, TOKEN_LEN + 1);

    table
        .iter()
        .position(|d| token_matches(d.token.as_bytes(), query.as_bytes()))
}

impl<S: 'static> ConfigTable<S> {
    /// Resolve a `(group, token)` pair against this table
    pub fn resolve(&self, group: &str, token: &str) -> Option<usize> {
        resolve(self, group, token)
    }
}
