// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Entity id generation.

use crate::service::DOMAIN;

/// Slug used when a name has no usable characters.
const UNNAMED: &str = "unnamed_device";

/// Converts a display name into an entity id slug.
///
/// ASCII letters and digits are kept (lowercased); every other run of
/// characters becomes a single underscore.
///
/// # Examples
///
/// ```
/// use miio_cover::registry::slugify;
///
/// assert_eq!(slugify("Xiaomi Miio Device"), "xiaomi_miio_device");
/// assert_eq!(slugify("  Living-Room (left) "), "living_room_left");
/// ```
#[must_use]
pub fn slugify(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    for c in name.chars() {
        if c.is_ascii_alphanumeric() {
            slug.push(c.to_ascii_lowercase());
        } else if !slug.is_empty() && !slug.ends_with('_') {
            slug.push('_');
        }
    }
    while slug.ends_with('_') {
        slug.pop();
    }
    slug
}

/// Returns `cover.<slug>`, suffixed with `_2`, `_3`, ... until `taken`
/// reports the id as free.
pub(crate) fn generate_entity_id(name: &str, taken: impl Fn(&str) -> bool) -> String {
    let mut slug = slugify(name);
    if slug.is_empty() {
        slug = UNNAMED.to_string();
    }

    let base = format!("{DOMAIN}.{slug}");
    if !taken(&base) {
        return base;
    }

    (2..)
        .map(|n| format!("{base}_{n}"))
        .find(|candidate| !taken(candidate))
        .unwrap_or(base)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slug_collapses_separators() {
        assert_eq!(slugify("A  --  B"), "a_b");
        assert_eq!(slugify("__x__"), "x");
        assert_eq!(slugify("Küche 2"), "k_che_2");
    }

    #[test]
    fn empty_name_gets_placeholder() {
        assert_eq!(generate_entity_id("!!!", |_| false), "cover.unnamed_device");
    }

    #[test]
    fn clashing_ids_get_suffix() {
        let taken = ["cover.curtain", "cover.curtain_2"];
        let id = generate_entity_id("Curtain", |id| taken.contains(&id));
        assert_eq!(id, "cover.curtain_3");
    }
}
