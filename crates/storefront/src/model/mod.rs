//! # Domain Models
//!
//! Pure data structures for the four resources, their creation/update
//! payloads, and the typed id newtypes. Entity trait implementations live in
//! the per-resource actor modules; everything here is plain data.
//!
//! Wire shape: all structs serialise with camelCase field names, matching
//! the JSON contract of the API (`categoryId`, `createdAt`, `isAdmin`, …).

pub mod category;
pub mod order;
pub mod product;
pub mod user;

pub use category::{Category, CategoryCreate, CategoryId, CategorySummary};
pub use order::{Order, OrderCreate, OrderId};
pub use product::{Product, ProductCreate, ProductId, ProductUpdate};
pub use user::{User, UserCreate, UserId};

/// Checks the URL-safe lowercase-kebab shape shared by category and product
/// slugs: one or more groups of `[a-z0-9]` separated by single hyphens.
pub fn is_valid_slug(slug: &str) -> bool {
    !slug.is_empty()
        && slug.split('-').all(|segment| {
            !segment.is_empty()
                && segment
                    .chars()
                    .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit())
        })
}

#[cfg(test)]
mod tests {
    use super::is_valid_slug;

    #[test]
    fn accepts_kebab_slugs() {
        for slug in ["electronics", "home-garden", "tv-4k", "a", "0", "a-1-b"] {
            assert!(is_valid_slug(slug), "{slug} should be valid");
        }
    }

    #[test]
    fn rejects_everything_else() {
        for slug in [
            "", "-", "a-", "-a", "a--b", "Electronics", "has space", "ünïcode", "slash/", "a_b",
        ] {
            assert!(!is_valid_slug(slug), "{slug} should be invalid");
        }
    }
}
