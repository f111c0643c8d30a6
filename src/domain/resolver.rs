//! Bean inheritance resolution.
//!
//! A bean inherits `class`, `init-method` and its identifier from the chain of
//! beans named by `parent` attributes, overriding whatever it declares itself.
//! Property references are expanded one level only: the referenced bean is
//! resolved for its class, never for its own properties.

use crate::domain::bean::{BeanDefinition, ResolvedBean};
use crate::domain::index::BeanIndex;

/// Parent name marking a bean as an HTTP-invokable web script.
pub const WEBSCRIPT_PARENT: &str = "webscript";

/// Default bound on followed `parent` links.
pub const DEFAULT_MAX_PARENT_DEPTH: usize = 128;

pub struct BeanResolver<'i, 'a> {
    index: &'i BeanIndex<'a>,
    max_parent_depth: usize,
}

impl<'i, 'a> BeanResolver<'i, 'a> {
    pub fn new(index: &'i BeanIndex<'a>) -> Self {
        Self {
            index,
            max_parent_depth: DEFAULT_MAX_PARENT_DEPTH,
        }
    }

    /// Stop following `parent` links after `depth` hops. Guards against
    /// cyclic chains; acyclic chains below the bound are unaffected.
    pub fn with_max_parent_depth(mut self, depth: usize) -> Self {
        self.max_parent_depth = depth;
        self
    }

    /// Resolve a bean against its parent chain.
    ///
    /// An absent bean resolves to the empty record. With `deep` set, the
    /// bean's own `property` references are resolved to the class of the
    /// referenced bean. Missing parents and refs degrade to empty values.
    pub fn resolve(&self, bean: Option<&BeanDefinition>, deep: bool) -> ResolvedBean {
        self.walk(bean, deep, 0)
    }

    /// Resolve every bean deeply, preserving order.
    pub fn resolve_all(&self, beans: &[BeanDefinition]) -> Vec<ResolvedBean> {
        beans.iter().map(|b| self.resolve(Some(b), true)).collect()
    }

    fn walk(&self, bean: Option<&BeanDefinition>, deep: bool, depth: usize) -> ResolvedBean {
        let Some(bean) = bean else {
            return ResolvedBean::default();
        };

        let mut resolved = match bean.parent.as_deref() {
            Some(parent) => {
                let mut base = if depth >= self.max_parent_depth {
                    tracing::warn!(
                        bean = bean.identifier().unwrap_or("<anonymous>"),
                        parent,
                        limit = self.max_parent_depth,
                        "parent chain too deep (cyclic?), ignoring remaining ancestors"
                    );
                    ResolvedBean::default()
                } else {
                    let target = self.index.get(parent);
                    if target.is_none() {
                        tracing::debug!(parent, "unresolved parent bean");
                    }
                    // Parents never contribute properties.
                    self.walk(target, false, depth + 1)
                };
                if parent == WEBSCRIPT_PARENT {
                    base.webscript = true;
                }
                base
            }
            None => ResolvedBean::default(),
        };

        if let Some(name) = bean.identifier() {
            resolved.name = Some(name.to_string());
        }
        if let Some(class) = &bean.class {
            resolved.class = Some(class.clone());
        }
        if let Some(init) = &bean.init_method {
            resolved.init_method = Some(init.clone());
        }

        if deep {
            for prop in &bean.properties {
                let (Some(name), Some(reference)) = (&prop.name, &prop.reference) else {
                    continue;
                };
                let target = self.index.get(reference);
                if target.is_none() {
                    tracing::debug!(property = %name, reference = %reference, "unresolved property ref");
                }
                let other = self.walk(target, false, 0);
                if let Some(class) = other.class_name() {
                    resolved.props.insert(name.clone(), class.to_string());
                }
            }
        }

        resolved
    }
}
