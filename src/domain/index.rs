use std::collections::HashMap;

use crate::domain::bean::BeanDefinition;

/// Identifier -> definition lookup over every bean of every input file.
///
/// Built once before any resolution and only read afterwards. There is no
/// per-file scoping: a bean in one descriptor may be referenced from another.
#[derive(Debug, Default)]
pub struct BeanIndex<'a> {
    by_id: HashMap<&'a str, &'a BeanDefinition>,
}

impl<'a> BeanIndex<'a> {
    /// Index the given beans by `id` (or `name` when `id` is absent).
    /// Beans with neither are skipped. On collision the later bean wins.
    pub fn build(beans: &'a [BeanDefinition]) -> Self {
        let mut by_id = HashMap::with_capacity(beans.len());
        for bean in beans {
            let Some(key) = bean.identifier() else {
                continue;
            };
            if by_id.insert(key, bean).is_some() {
                tracing::debug!(bean = key, "duplicate bean identifier, keeping the last definition");
            }
        }
        Self { by_id }
    }

    pub fn get(&self, identifier: &str) -> Option<&'a BeanDefinition> {
        self.by_id.get(identifier).copied()
    }

    pub fn len(&self) -> usize {
        self.by_id.len()
    }

    // Paired with `len` for clippy::len_without_is_empty.
    pub fn is_empty(&self) -> bool {
        self.by_id.is_empty()
    }
}
