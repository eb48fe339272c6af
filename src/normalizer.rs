// Header normalization: maps the column names of a price list to semantic roles
use crate::model::HeaderRole;
use std::collections::HashMap;
use std::sync::LazyLock;

/// Lowercase header spellings seen in supplier price lists.
static COLUMN_ALIASES: LazyLock<HashMap<&'static str, HeaderRole>> = LazyLock::new(|| {
    use HeaderRole::*;
    HashMap::from([
        ("название", Name),
        ("продукт", Name),
        ("товар", Name),
        ("наименование", Name),
        ("№,название", Name),
        ("цена", Price),
        ("розница", Price),
        ("цена опт", Price),
        ("вес", Weight),
        ("масса", Weight),
        ("фасовка", Weight),
        ("опт,масса", Weight),
    ])
});

/// Looks up the role of a single header. Case-insensitive, otherwise exact.
pub fn role_of(header: &str) -> Option<HeaderRole> {
    COLUMN_ALIASES.get(header.to_lowercase().as_str()).copied()
}

/// Column indices per role; `None` when no header matched.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct HeaderMapping {
    pub name: Option<usize>,
    pub price: Option<usize>,
    pub weight: Option<usize>,
}

/// A mapping where every role has a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedColumns {
    pub name: usize,
    pub price: usize,
    pub weight: usize,
}

impl HeaderMapping {
    pub fn complete(&self) -> Option<ResolvedColumns> {
        Some(ResolvedColumns {
            name: self.name?,
            price: self.price?,
            weight: self.weight?,
        })
    }

    pub fn missing(&self) -> Vec<HeaderRole> {
        [
            (HeaderRole::Name, self.name),
            (HeaderRole::Price, self.price),
            (HeaderRole::Weight, self.weight),
        ]
        .into_iter()
        .filter(|(_, column)| column.is_none())
        .map(|(role, _)| role)
        .collect()
    }
}

/// Resolves headers in file order; the first header for each role wins.
pub fn resolve_headers<I, S>(headers: I) -> HeaderMapping
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut mapping = HeaderMapping::default();
    for (idx, header) in headers.into_iter().enumerate() {
        let slot = match role_of(header.as_ref()) {
            Some(HeaderRole::Name) => &mut mapping.name,
            Some(HeaderRole::Price) => &mut mapping.price,
            Some(HeaderRole::Weight) => &mut mapping.weight,
            None => continue,
        };
        slot.get_or_insert(idx);
    }
    mapping
}
