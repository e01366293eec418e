// ➕ Total Aggregator
// Derived on every render from the current entries; holds no state

use crate::entry::Entry;
use crate::locale::Locale;

pub fn total(entries: &[Entry]) -> f64 {
    entries.iter().map(Entry::amount).sum()
}

/// Running total as shown in the bottom bar (without the currency symbol).
pub fn format_total(entries: &[Entry], locale: &Locale) -> String {
    locale.format_amount(total(entries))
}
