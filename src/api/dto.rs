use indexmap::IndexMap;
use serde::Serialize;

use crate::domain::bean::ResolvedBean;

#[derive(Debug, Serialize, PartialEq)]
pub struct BeanReportDto {
    pub name: Option<String>,
    pub class: Option<String>,
    pub init_method: Option<String>,
    pub webscript: bool,
    pub properties: IndexMap<String, String>,
}

impl From<&ResolvedBean> for BeanReportDto {
    fn from(bean: &ResolvedBean) -> Self {
        BeanReportDto {
            name: bean.name.clone(),
            class: bean.class.clone(),
            init_method: bean.init_method.clone(),
            webscript: bean.webscript,
            properties: bean.props.clone(),
        }
    }
}
