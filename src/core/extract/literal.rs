//! Literal extraction for shortcut call arguments.
//!
//! Only literals are read. Identifiers, spreads, template literals and any
//! other computed value are skipped without an error; a config that ends up
//! without a `name`, or a call without a string path, yields nothing.

use swc_ecma_ast::{ArrayLit, Expr, ExprOrSpread, Lit, ObjectLit, Prop, PropName, PropOrSpread};

use super::call_pattern::unwrap_parens;
use crate::core::data::{ShortcutConfig, ShortcutIcon};

/// Argument expression, unless it is missing or a spread (`...args`).
fn plain_arg(arg: Option<&ExprOrSpread>) -> Option<&Expr> {
    arg.filter(|arg| arg.spread.is_none())
        .map(|arg| unwrap_parens(&arg.expr))
}

/// Value of a plain string literal.
pub fn string_literal(expr: &Expr) -> Option<String> {
    match unwrap_parens(expr) {
        Expr::Lit(Lit::Str(s)) => s.value.as_str().map(|s| s.to_string()),
        _ => None,
    }
}

/// Iterate `key: value` properties whose key is a plain identifier.
///
/// Shorthand, computed, string-keyed, method and spread properties are skipped.
fn identifier_props(obj: &ObjectLit) -> impl Iterator<Item = (&str, &Expr)> {
    obj.props.iter().filter_map(|prop| match prop {
        PropOrSpread::Prop(prop) => match &**prop {
            Prop::KeyValue(kv) => match &kv.key {
                PropName::Ident(ident) => Some((ident.sym.as_str(), unwrap_parens(&kv.value))),
                _ => None,
            },
            _ => None,
        },
        PropOrSpread::Spread(_) => None,
    })
}

/// Config fields as read from the object literal, before the `name` check.
#[derive(Debug, Default)]
struct ConfigFields {
    name: Option<String>,
    short_name: Option<String>,
    description: Option<String>,
    icons: Option<Vec<ShortcutIcon>>,
}

impl ConfigFields {
    fn from_object(obj: &ObjectLit) -> Self {
        let mut fields = Self::default();

        for (key, value) in identifier_props(obj) {
            match (key, value) {
                ("name", _) => assign_string(&mut fields.name, value),
                ("short_name", _) => assign_string(&mut fields.short_name, value),
                ("description", _) => assign_string(&mut fields.description, value),
                ("icons", Expr::Array(arr)) => fields.icons = Some(extract_icons(arr)),
                _ => {}
            }
        }

        fields
    }

    fn into_config(self) -> Option<ShortcutConfig> {
        let name = self.name.filter(|name| !name.is_empty())?;
        Some(ShortcutConfig {
            name,
            short_name: self.short_name,
            description: self.description,
            icons: self.icons,
        })
    }
}

/// Overwrite `slot` only when `value` is a string literal; later keys win.
fn assign_string(slot: &mut Option<String>, value: &Expr) {
    if let Some(s) = string_literal(value) {
        *slot = Some(s);
    }
}

/// Extract icons from an array literal, keeping source order.
///
/// Elements that are not object literals (strings, identifiers, holes,
/// spreads) are dropped, so the result can be shorter than the array.
pub fn extract_icons(arr: &ArrayLit) -> Vec<ShortcutIcon> {
    arr.elems
        .iter()
        .filter_map(|elem| plain_arg(elem.as_ref()))
        .filter_map(|expr| match expr {
            Expr::Object(obj) => Some(extract_icon(obj)),
            _ => None,
        })
        .collect()
}

fn extract_icon(obj: &ObjectLit) -> ShortcutIcon {
    let mut icon = ShortcutIcon::default();

    for (key, value) in identifier_props(obj) {
        let slot = match key {
            "src" => &mut icon.src,
            "sizes" => &mut icon.sizes,
            "type" => &mut icon.mime_type,
            "purpose" => &mut icon.purpose,
            _ => continue,
        };
        assign_string(slot, value);
    }

    icon
}

/// Convert the raw path and config arguments into shortcut data.
///
/// Returns `None` unless the path is a non-empty string literal and the config
/// is an object literal with a non-empty string `name`.
pub fn extract_shortcut(
    path_arg: Option<&ExprOrSpread>,
    config_arg: Option<&ExprOrSpread>,
) -> Option<(String, ShortcutConfig)> {
    let path = plain_arg(path_arg)
        .and_then(string_literal)
        .unwrap_or_default();

    let Expr::Object(obj) = plain_arg(config_arg)? else {
        return None;
    };
    let config = ConfigFields::from_object(obj).into_config()?;

    if path.is_empty() {
        return None;
    }

    Some((path, config))
}
