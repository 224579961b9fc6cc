mod overview;

pub use overview::{category_fallback, country_codes, format_count, CollectionOverview};
