//! Recognition of the shortcut declaration call shapes.

use swc_ecma_ast::{CallExpr, Callee, Expr, ExprOrSpread};

/// Raw arguments of a recognized shortcut call.
///
/// Either may be missing when the call was written with fewer arguments.
#[derive(Debug, Clone, Copy)]
pub struct ShortcutCallArgs<'a> {
    pub path: Option<&'a ExprOrSpread>,
    pub config: Option<&'a ExprOrSpread>,
}

/// Look through parentheses, which carry no meaning for literal matching.
pub fn unwrap_parens(expr: &Expr) -> &Expr {
    match expr {
        Expr::Paren(paren) => unwrap_parens(&paren.expr),
        _ => expr,
    }
}

/// Check whether a call's callee is the bare identifier `function_name`.
fn is_named_call(call: &CallExpr, function_name: &str) -> bool {
    match &call.callee {
        Callee::Expr(callee) => {
            matches!(unwrap_parens(callee), Expr::Ident(ident) if ident.sym.as_str() == function_name)
        }
        _ => false,
    }
}

/// Match an initializer against the two shortcut call shapes.
///
/// - Curried: `fn(path)(config)`
/// - Direct: `fn(path, config)`
///
/// Member callees (`helpers.fn(...)`), computed callees and calls of a variable
/// holding a partial application are not recognized.
pub fn match_shortcut_call<'a>(init: &'a Expr, function_name: &str) -> Option<ShortcutCallArgs<'a>> {
    let Expr::Call(call) = unwrap_parens(init) else {
        return None;
    };

    if is_named_call(call, function_name) {
        return Some(ShortcutCallArgs {
            path: call.args.first(),
            config: call.args.get(1),
        });
    }

    if let Callee::Expr(callee) = &call.callee
        && let Expr::Call(inner) = unwrap_parens(callee)
        && is_named_call(inner, function_name)
    {
        return Some(ShortcutCallArgs {
            path: inner.args.first(),
            config: call.args.first(),
        });
    }

    None
}
