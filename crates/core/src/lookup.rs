//! Typed table lookup with a fallback value.
//!
//! Static tables in this crate are keyed by language code. Lookups never
//! index directly; a missing key resolves to the caller-supplied default.

/// Look up `key` in a static `(key, value)` table, returning `default` when absent.
///
/// # Examples
///
/// ```
/// use hangman_tui_core::lookup::lookup;
///
/// const TABLE: [(&str, &u32); 2] = [("en", &1), ("ka", &2)];
/// assert_eq!(*lookup(&TABLE, "ka", &0), 2);
/// assert_eq!(*lookup(&TABLE, "fr", &0), 0);
/// ```
pub fn lookup<'a, V: ?Sized>(table: &'a [(&str, &'a V)], key: &str, default: &'a V) -> &'a V {
    find(table, key).unwrap_or(default)
}

/// Look up `key`, returning `None` when absent.
pub fn find<'a, V: ?Sized>(table: &'a [(&str, &'a V)], key: &str) -> Option<&'a V> {
    table
        .iter()
        .find(|(k, _)| *k == key)
        .map(|(_, v)| *v)
}
