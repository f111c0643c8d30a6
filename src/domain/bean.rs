// Bean data structures for beanfacts.
// Raw definitions as read from XML descriptors, and the records derived from them.

use indexmap::IndexMap;

/// A `<property>` child of a bean, wiring a field to another bean by reference.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PropertyRef {
    pub name: Option<String>,
    pub reference: Option<String>, // `ref` attribute
}

/// A `<bean>` element exactly as declared in the source document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BeanDefinition {
    pub id: Option<String>,
    pub name: Option<String>,
    pub class: Option<String>,
    pub init_method: Option<String>,
    pub parent: Option<String>,
    pub properties: Vec<PropertyRef>,
}

impl BeanDefinition {
    /// Identifier used for lookups: `id` wins over `name`.
    pub fn identifier(&self) -> Option<&str> {
        self.id.as_deref().or(self.name.as_deref())
    }
}

/// A bean after merging with its parent chain.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolvedBean {
    pub name: Option<String>,
    pub class: Option<String>,
    pub init_method: Option<String>,
    /// Set once any ancestor link points at the `webscript` sentinel.
    pub webscript: bool,
    /// Property name -> class of the referenced bean.
    pub props: IndexMap<String, String>,
}

impl ResolvedBean {
    /// Class name, ignoring an attribute that is present but empty.
    pub fn class_name(&self) -> Option<&str> {
        self.class.as_deref().filter(|c| !c.is_empty())
    }

    /// Init hook, ignoring an attribute that is present but empty.
    pub fn init_hook(&self) -> Option<&str> {
        self.init_method.as_deref().filter(|m| !m.is_empty())
    }
}
