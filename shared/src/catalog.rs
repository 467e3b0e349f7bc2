//! Client-side filtering and sorting of the fetched menu

use serde::{Deserialize, Serialize};

use crate::models::MenuItem;

/// Menu sort order
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MenuSort {
    #[default]
    NameAsc,
    PriceAsc,
    PriceDesc,
    /// Featured items first, then by name
    Featured,
}

/// Filter applied to an already-fetched item list
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MenuFilter {
    #[serde(default)]
    pub category_id: Option<i64>,
    /// Case-insensitive match on name or description
    #[serde(default)]
    pub search: Option<String>,
    #[serde(default)]
    pub available_only: bool,
    #[serde(default)]
    pub featured_only: bool,
    #[serde(default)]
    pub tag: Option<String>,
    #[serde(default)]
    pub sort: MenuSort,
}

impl MenuFilter {
    pub fn matches(&self, item: &MenuItem) -> bool {
        if self.category_id.is_some_and(|c| c != item.category_id) {
            return false;
        }
        if self.available_only && !item.is_available {
            return false;
        }
        if self.featured_only && !item.is_featured {
            return false;
        }
        if let Some(tag) = self.tag.as_deref()
            && !item.tags.iter().any(|t| t.eq_ignore_ascii_case(tag))
        {
            return false;
        }
        match self.search.as_deref().map(str::trim) {
            Some(q) if !q.is_empty() => {
                let q = q.to_lowercase();
                item.name.to_lowercase().contains(&q)
                    || item
                        .description
                        .as_deref()
                        .is_some_and(|d| d.to_lowercase().contains(&q))
            }
            _ => true,
        }
    }

    /// Matching items in the requested order
    pub fn apply(&self, items: &[MenuItem]) -> Vec<MenuItem> {
        let mut out: Vec<MenuItem> = items.iter().filter(|i| self.matches(i)).cloned().collect();
        let by_name = |a: &MenuItem, b: &MenuItem| a.name.to_lowercase().cmp(&b.name.to_lowercase());
        match self.sort {
            MenuSort::NameAsc => out.sort_by(by_name),
            MenuSort::PriceAsc => out.sort_by(|a, b| a.price.cmp(&b.price).then_with(|| by_name(a, b))),
            MenuSort::PriceDesc => out.sort_by(|a, b| b.price.cmp(&a.price).then_with(|| by_name(a, b))),
            MenuSort::Featured => {
                out.sort_by(|a, b| b.is_featured.cmp(&a.is_featured).then_with(|| by_name(a, b)))
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    fn item(id: i64, category_id: i64, name: &str, cents: i64) -> MenuItem {
        MenuItem {
            id,
            category_id,
            name: name.to_string(),
            description: None,
            price: Decimal::new(cents, 2),
            is_available: true,
            is_featured: false,
            tags: vec![],
            image_url: None,
        }
    }

    fn menu() -> Vec<MenuItem> {
        let mut nata = item(1, 1, "Pastel de nata", 130);
        nata.is_featured = true;
        nata.tags = vec!["Vegetarian".into()];
        let mut bolo = item(2, 1, "bolo de arroz", 150);
        bolo.description = Some("Rice flour muffin".into());
        let galao = item(3, 2, "Galão", 180);
        let mut toast = item(4, 3, "Tosta mista", 450);
        toast.is_available = false;
        vec![nata, bolo, galao, toast]
    }

    fn ids(items: &[MenuItem]) -> Vec<i64> {
        items.iter().map(|i| i.id).collect()
    }

    #[test]
    fn test_default_filter_sorts_by_name() {
        let out = MenuFilter::default().apply(&menu());
        assert_eq!(ids(&out), vec![2, 3, 1, 4]);
    }

    #[test]
    fn test_category_and_availability() {
        let filter = MenuFilter {
            available_only: true,
            ..Default::default()
        };
        assert!(!ids(&filter.apply(&menu())).contains(&4));

        let filter = MenuFilter {
            category_id: Some(1),
            ..Default::default()
        };
        assert_eq!(ids(&filter.apply(&menu())), vec![2, 1]);
    }

    #[test]
    fn test_search_matches_description_case_insensitive() {
        let filter = MenuFilter {
            search: Some("  MUFFIN ".into()),
            ..Default::default()
        };
        assert_eq!(ids(&filter.apply(&menu())), vec![2]);
    }

    #[test]
    fn test_tag_and_featured() {
        let filter = MenuFilter {
            tag: Some("vegetarian".into()),
            ..Default::default()
        };
        assert_eq!(ids(&filter.apply(&menu())), vec![1]);

        let filter = MenuFilter {
            sort: MenuSort::Featured,
            ..Default::default()
        };
        assert_eq!(ids(&filter.apply(&menu()))[0], 1);
    }

    #[test]
    fn test_price_sorting() {
        let asc = MenuFilter {
            sort: MenuSort::PriceAsc,
            ..Default::default()
        };
        assert_eq!(ids(&asc.apply(&menu())), vec![1, 2, 3, 4]);

        let desc = MenuFilter {
            sort: MenuSort::PriceDesc,
            ..Default::default()
        };
        assert_eq!(ids(&desc.apply(&menu())), vec![4, 3, 2, 1]);
    }
}
