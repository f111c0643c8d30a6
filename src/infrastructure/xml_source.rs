//! XML bean descriptor reader.
//!
//! Discovers `<bean>` elements that are direct children of a `<beans>`
//! container, anywhere in the document. Matching is by local name so that
//! namespaced Spring descriptors are read the same as plain ones.

use std::fs;
use std::path::Path;

use roxmltree::{Document, Node, ParsingOptions};

use crate::domain::bean::{BeanDefinition, PropertyRef};
use crate::error::ExtractError;
use crate::ports::BeanSource;

pub struct XmlBeanSource;

impl XmlBeanSource {
    /// Parse bean definitions from an in-memory document. `path` is used for
    /// error reporting only.
    pub fn parse_str(path: &Path, text: &str) -> Result<Vec<BeanDefinition>, ExtractError> {
        // Legacy descriptors carry a DOCTYPE; it is accepted but never fetched.
        let options = ParsingOptions {
            allow_dtd: true,
            ..ParsingOptions::default()
        };
        let doc = Document::parse_with_options(text, options).map_err(|source| ExtractError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

        Ok(doc
            .descendants()
            .filter(|n| is_element(n, "bean"))
            .filter(|n| n.parent_element().is_some_and(|p| is_element(&p, "beans")))
            .map(|n| read_bean(&n))
            .collect())
    }
}

impl BeanSource for XmlBeanSource {
    fn load(&self, path: &Path) -> Result<Vec<BeanDefinition>, ExtractError> {
        let text = fs::read_to_string(path).map_err(|source| ExtractError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let beans = Self::parse_str(path, &text)?;
        tracing::debug!(path = %path.display(), beans = beans.len(), "loaded bean descriptor");
        Ok(beans)
    }
}

fn is_element(node: &Node, local_name: &str) -> bool {
    node.is_element() && node.tag_name().name() == local_name
}

fn attr(node: &Node, name: &str) -> Option<String> {
    node.attribute(name).map(str::to_string)
}

fn read_bean(node: &Node) -> BeanDefinition {
    let properties = node
        .children()
        .filter(|c| is_element(c, "property"))
        .map(|p| PropertyRef {
            name: attr(&p, "name"),
            reference: attr(&p, "ref"),
        })
        .collect();

    BeanDefinition {
        id: attr(node, "id"),
        name: attr(node, "name"),
        class: attr(node, "class"),
        init_method: attr(node, "init-method"),
        parent: attr(node, "parent"),
        properties,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(xml: &str) -> Vec<BeanDefinition> {
        XmlBeanSource::parse_str(Path::new("test.xml"), xml).unwrap()
    }

    #[test]
    fn test_reads_bean_attributes() {
        let beans = parse(
            r#"<beans>
                <bean id="svc" name="service" class="com.Svc" init-method="start" parent="base">
                    <property name="repo" ref="repository"/>
                    <property name="timeout" value="30"/>
                </bean>
            </beans>"#,
        );
        assert_eq!(beans.len(), 1);
        let svc = &beans[0];
        assert_eq!(svc.id.as_deref(), Some("svc"));
        assert_eq!(svc.name.as_deref(), Some("service"));
        assert_eq!(svc.class.as_deref(), Some("com.Svc"));
        assert_eq!(svc.init_method.as_deref(), Some("start"));
        assert_eq!(svc.parent.as_deref(), Some("base"));
        assert_eq!(svc.properties.len(), 2);
        assert_eq!(svc.properties[0].reference.as_deref(), Some("repository"));
        assert_eq!(svc.properties[1].reference, None);
    }

    #[test]
    fn test_nested_beans_are_not_top_level() {
        let beans = parse(
            r#"<beans>
                <bean id="outer" class="com.Outer">
                    <property name="inner"><bean class="com.Inner"/></property>
                </bean>
            </beans>"#,
        );
        assert_eq!(beans.len(), 1);
        assert_eq!(beans[0].id.as_deref(), Some("outer"));
    }

    #[test]
    fn test_namespaced_and_nested_containers() {
        let beans = parse(
            r#"<?xml version="1.0" encoding="UTF-8"?>
            <beans xmlns="http://www.springframework.org/schema/beans">
                <bean id="first"/>
                <beans profile="dev">
                    <bean id="second"/>
                </beans>
                <bean id="third"/>
            </beans>"#,
        );
        let ids: Vec<_> = beans.iter().filter_map(|b| b.id.as_deref()).collect();
        assert_eq!(ids, vec!["first", "second", "third"]);
    }

    #[test]
    fn test_doctype_is_accepted() {
        let beans = parse(
            r#"<?xml version="1.0"?>
            <!DOCTYPE beans PUBLIC "-//SPRING//DTD BEAN//EN" "http://www.springframework.org/dtd/spring-beans.dtd">
            <beans><bean id="legacy" class="com.Legacy"/></beans>"#,
        );
        assert_eq!(beans.len(), 1);
    }

    #[test]
    fn test_bean_outside_container_is_ignored() {
        let beans = parse(r#"<root><bean id="loose"/></root>"#);
        assert!(beans.is_empty());
    }

    #[test]
    fn test_malformed_xml_is_an_error() {
        let result = XmlBeanSource::parse_str(Path::new("bad.xml"), "<beans><bean></beans>");
        assert!(matches!(result, Err(ExtractError::Parse { .. })));
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let result = XmlBeanSource.load(Path::new("/nonexistent/beans.xml"));
        assert!(matches!(result, Err(ExtractError::Read { .. })));
    }
}
