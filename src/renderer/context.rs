use crate::options::Options;
use serde_json::{Map, Value};

/// Variables available to every template of a run.
///
/// Precedence, lowest first: renderer globals (string helpers, `platform`),
/// option fields, `appname`. A higher layer shadows a lower one on a name
/// collision. Absent optional options are left out, so they are undefined in
/// templates rather than `none`.
#[derive(Debug, Clone)]
pub struct TemplateContext {
    value: Value,
}

impl TemplateContext {
    pub fn new(options: &Options, appname: &str) -> Self {
        let mut vars = match serde_json::to_value(options) {
            Ok(Value::Object(map)) => map,
            _ => Map::new(),
        };
        vars.insert("appname".to_string(), Value::String(appname.to_string()));
        Self { value: Value::Object(vars) }
    }

    pub fn as_value(&self) -> &Value {
        &self.value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn merges_options_and_appname() {
        let options = Options {
            docker: true,
            plurl: Some("registry.acme.com".into()),
            ..Options::new("com.acme")
        };
        let ctx = TemplateContext::new(&options, "foo-bar");
        let value = ctx.as_value();
        assert_eq!(value["appname"], "foo-bar");
        assert_eq!(value["groupid"], "com.acme");
        assert_eq!(value["docker"], true);
        assert_eq!(value["plurl"], "registry.acme.com");
        assert!(value.get("ocn").is_none());
    }
}
