//! Fact tables derived from resolved beans.
//!
//! Four flat relations, each an order-preserving projection of the resolved
//! bean list. Rows are tab separated, newline terminated, never quoted.

use crate::domain::bean::ResolvedBean;

/// Method conventionally invoked on a web script bean.
pub const WEBSCRIPT_ENTRY_METHOD: &str = "executeImpl";

/// The output relations, in the order they are written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FactTable {
    BeanClasses,
    BeanReachable,
    BeanInit,
    BeanIocField,
}

impl FactTable {
    pub const ALL: [FactTable; 4] = [
        FactTable::BeanClasses,
        FactTable::BeanReachable,
        FactTable::BeanInit,
        FactTable::BeanIocField,
    ];

    pub fn file_name(&self) -> &'static str {
        match self {
            FactTable::BeanClasses => "BeanClasses.csv",
            FactTable::BeanReachable => "BeanReachable.csv",
            FactTable::BeanInit => "BeanInit.csv",
            FactTable::BeanIocField => "BeanIoCField.csv",
        }
    }
}

impl std::fmt::Display for FactTable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.file_name())
    }
}

/// `<class> <init-method>`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InitHook {
    pub class: String,
    pub method: String,
}

/// `<class> <property> <referenced-class>`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IocField {
    pub class: String,
    pub field: String,
    pub target_class: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FactTables {
    pub classes: Vec<String>,
    /// Classes of web-reachable beans.
    pub reachable: Vec<String>,
    pub init_hooks: Vec<InitHook>,
    pub ioc_fields: Vec<IocField>,
}

impl FactTables {
    pub fn from_resolved(beans: &[ResolvedBean]) -> Self {
        let mut tables = FactTables::default();

        for bean in beans {
            // Every relation is keyed on the implementing class.
            let Some(class) = bean.class_name() else {
                continue;
            };

            tables.classes.push(class.to_string());

            if bean.webscript {
                tables.reachable.push(class.to_string());
            }

            if let Some(method) = bean.init_hook() {
                tables.init_hooks.push(InitHook {
                    class: class.to_string(),
                    method: method.to_string(),
                });
            }

            for (field, target_class) in &bean.props {
                tables.ioc_fields.push(IocField {
                    class: class.to_string(),
                    field: field.clone(),
                    target_class: target_class.clone(),
                });
            }
        }

        tables
    }

    pub fn row_count(&self, table: FactTable) -> usize {
        match table {
            FactTable::BeanClasses => self.classes.len(),
            FactTable::BeanReachable => self.reachable.len(),
            FactTable::BeanInit => self.init_hooks.len(),
            FactTable::BeanIocField => self.ioc_fields.len(),
        }
    }

    /// Render one table as file contents.
    pub fn render(&self, table: FactTable) -> String {
        let mut out = String::new();
        match table {
            FactTable::BeanClasses => {
                for class in &self.classes {
                    push_row(&mut out, &[class]);
                }
            }
            FactTable::BeanReachable => {
                for class in &self.reachable {
                    push_row(&mut out, &[class, WEBSCRIPT_ENTRY_METHOD]);
                }
            }
            FactTable::BeanInit => {
                for hook in &self.init_hooks {
                    push_row(&mut out, &[&hook.class, &hook.method]);
                }
            }
            FactTable::BeanIocField => {
                for f in &self.ioc_fields {
                    push_row(&mut out, &[&f.class, &f.field, &f.target_class]);
                }
            }
        }
        out
    }
}

fn push_row(out: &mut String, fields: &[&str]) {
    out.push_str(&fields.join("\t"));
    out.push('\n');
}
